//! The contract between the location history and the hosting editor.
//!
//! The editor reports cursor moves and text edits as [`HostEvent`]s; a
//! [`Session`] feeds them into a [`HistoryFacade`] and, whenever the history
//! navigates, asks the editor's [`Navigator`] to open the target document and
//! place the caret.
//!
//! # Modules
//!
//! - `script`: Reads events from a line-oriented text script
//! - `error`: Script parse errors

pub mod error;
pub mod script;

pub use error::{ScriptError, ScriptErrorKind};
pub use script::parse_script;

use crate::config::Config;
use crate::history::{HistoryChange, HistoryFacade, LocationRecord};
use std::sync::mpsc::{self, Receiver};
use tracing::{debug, info};

/// A callback from the editor, or a command from its UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// The caret moved.
    CursorMoved {
        file_name: String,
        position: usize,
        line: usize,
    },
    /// Text was inserted or deleted.
    TextEdited {
        file_name: String,
        start_position: usize,
        chars_added: isize,
        lines_added: isize,
    },
    /// Whole lines were deleted.
    LinesRemoved {
        file_name: String,
        start_position: usize,
        length: usize,
        lines_removed: usize,
    },
    /// The project or workspace changed.
    Clear,
    NavigateBackward,
    NavigateForward,
}

/// Performs document seeks in the editor.
pub trait Navigator {
    /// Opens (or focuses) `file_name` for editing.
    fn open_document(&mut self, file_name: &str);

    /// Places the caret in the focused document.
    fn move_caret(&mut self, position: usize, line: usize);
}

/// A navigator that only remembers where it was sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeekLog {
    /// Opened documents with their caret placement, oldest first
    pub seeks: Vec<LocationRecord>,
}

impl Navigator for SeekLog {
    fn open_document(&mut self, file_name: &str) {
        self.seeks.push(LocationRecord::new(file_name, 0, 0));
    }

    fn move_caret(&mut self, position: usize, line: usize) {
        if let Some(last) = self.seeks.last_mut() {
            last.position = position;
            last.line = line;
        }
    }
}

/// Wires editor events into the history and history navigation back into
/// the editor.
#[derive(Debug)]
pub struct Session<N> {
    history: HistoryFacade,
    changes: Receiver<HistoryChange>,
    navigator: N,
}

impl<N: Navigator> Session<N> {
    /// Creates a session with history settings taken from `config`.
    pub fn new(config: &Config, navigator: N) -> Self {
        Self::with_history(HistoryFacade::from_config(config), navigator)
    }

    /// Creates a session around an existing facade.
    pub fn with_history(mut history: HistoryFacade, navigator: N) -> Self {
        let (sender, changes) = mpsc::channel();
        history.subscribe(sender);
        Self {
            history,
            changes,
            navigator,
        }
    }

    pub fn history(&self) -> &HistoryFacade {
        &self.history
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Consumes the session, returning the navigator.
    pub fn into_navigator(self) -> N {
        self.navigator
    }

    /// Handles one event, seeking the editor if the history navigated.
    pub fn dispatch(&mut self, event: HostEvent) {
        debug!(?event, "dispatch");
        match event {
            HostEvent::CursorMoved {
                file_name,
                position,
                line,
            } => self.history.add(&file_name, position, line),
            HostEvent::TextEdited {
                file_name,
                start_position,
                chars_added,
                lines_added,
            } => self
                .history
                .update(&file_name, start_position, chars_added, lines_added),
            HostEvent::LinesRemoved {
                file_name,
                start_position,
                length,
                lines_removed,
            } => self
                .history
                .remove_lines(&file_name, start_position, length, lines_removed),
            HostEvent::Clear => self.history.clear(),
            HostEvent::NavigateBackward => {
                if self.history.can_backward() {
                    self.history.backward();
                }
            }
            HostEvent::NavigateForward => {
                if self.history.can_forward() {
                    self.history.forward();
                }
            }
        }
        self.drain_changes();
    }

    /// Handles every event in order.
    pub fn replay(&mut self, events: impl IntoIterator<Item = HostEvent>) {
        for event in events {
            self.dispatch(event);
        }
    }

    fn drain_changes(&mut self) {
        let seek = self
            .changes
            .try_iter()
            .fold(false, |seek, change| seek || change.requires_seek());
        if !seek {
            return;
        }

        let target = self.history.current();
        if target.is_empty() {
            return;
        }
        info!(target = %target, "seeking");
        self.navigator.open_document(&target.file_name);
        self.navigator.move_caret(target.position, target.line);
    }
}
