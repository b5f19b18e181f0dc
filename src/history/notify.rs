//! Change notifications published by the history store.

use std::sync::mpsc::Sender;

/// What kind of mutation just happened.
///
/// Listeners re-read the store's current location; the kind only tells them
/// whether a document seek is warranted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryChange {
    /// A cursor report moved or replaced the current location
    Added,
    /// `backward`/`forward` moved the current location along history
    Navigated,
    /// A text delta rewrote stored locations
    Edited,
    /// All history was dropped
    Cleared,
}

impl HistoryChange {
    /// Returns true if the host should seek to the new current location.
    pub fn requires_seek(self) -> bool {
        matches!(self, HistoryChange::Navigated)
    }
}

/// Receives change notifications.
///
/// Notifications are delivered synchronously from inside the mutating call.
/// A listener must not call back into the store that notified it.
pub trait ChangeListener {
    fn on_change(&mut self, change: HistoryChange);
}

impl<F> ChangeListener for F
where
    F: FnMut(HistoryChange),
{
    fn on_change(&mut self, change: HistoryChange) {
        self(change)
    }
}

/// Forwards notifications into a channel. A disconnected receiver is ignored.
impl ChangeListener for Sender<HistoryChange> {
    fn on_change(&mut self, change: HistoryChange) {
        let _ = self.send(change);
    }
}
