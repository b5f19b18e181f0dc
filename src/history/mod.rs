//! Cursor and edit location history.
//!
//! This module is the core of the crate: a browser-style backward/forward
//! history of visited locations that stays valid while the document is
//! being edited.
//!
//! # Modules
//!
//! - `record`: A single visited location (`LocationRecord`)
//! - `delta`: Text deltas and how they move or erase stored locations
//! - `store`: The backward/current/forward stacks (`HistoryStore`)
//! - `facade`: Cursor-report policy (same-line coalescing) over the store
//! - `notify`: Change notifications
//!
//! # Example
//!
//! ```
//! use previous_edit::history::HistoryStore;
//!
//! let mut store = HistoryStore::new();
//! store.add("main.rs", 10, 1);
//! store.add("main.rs", 200, 9);
//! store.backward();
//! assert!(store.current().matches("main.rs", 10, 1));
//! assert!(store.can_forward());
//! ```

pub mod delta;
pub mod facade;
pub mod notify;
pub mod record;
pub mod store;

pub use delta::{Survival, TextDelta};
pub use facade::HistoryFacade;
pub use notify::{ChangeListener, HistoryChange};
pub use record::LocationRecord;
pub use store::{HistorySnapshot, HistoryStore, Slot};
