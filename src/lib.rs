//! Previous Edit - backward/forward navigation through cursor and edit
//! locations, like a browser's back and forward buttons.
//!
//! - `history`: the location history and the rules for keeping it valid
//!   while text is edited
//! - `config`: persisted settings
//! - `host`: the contract with the hosting editor (inbound events,
//!   outbound document seeks, scripted replay)

pub mod config;
pub mod history;
pub mod host;
