//! Backward/forward location history.
//!
//! The store keeps two stacks around a single current location, the way a
//! browser keeps its back and forward lists:
//!
//! ```text
//!   backward (oldest .. newest)   current   forward (farthest .. nearest)
//!   [a, b, c]                     d         [f, e]
//! ```
//!
//! `backward()` moves `c` into current and pushes `d` onto forward; a fresh
//! visit clears forward. Records are moved between the stacks, never shared.

use super::delta::{Survival, TextDelta};
use super::notify::{ChangeListener, HistoryChange};
use super::record::LocationRecord;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use tracing::{debug, trace};

static EMPTY: LocationRecord = LocationRecord {
    file_name: String::new(),
    position: 0,
    line: 0,
};

/// Owns every location record once it has been reported.
pub struct HistoryStore {
    /// Past locations, oldest first
    backward: VecDeque<LocationRecord>,
    /// Undone locations, nearest future last
    forward: Vec<LocationRecord>,
    /// Where the user is now (the empty sentinel when nowhere)
    current: LocationRecord,
    /// Capacity of `backward`; the oldest entry is evicted on overflow
    max_backward: usize,
    listeners: Vec<Box<dyn ChangeListener>>,
}

impl HistoryStore {
    /// Creates a store with unbounded backward history.
    pub fn new() -> Self {
        Self::with_max_backward(usize::MAX)
    }

    /// Creates a store keeping at most `max_backward` past locations.
    ///
    /// A capacity of zero is treated as one.
    pub fn with_max_backward(max_backward: usize) -> Self {
        Self {
            backward: VecDeque::new(),
            forward: Vec::new(),
            current: LocationRecord::default(),
            max_backward: max_backward.max(1),
            listeners: Vec::new(),
        }
    }

    /// Changes the capacity, evicting the oldest entries if needed.
    pub fn set_max_backward(&mut self, max_backward: usize) {
        self.max_backward = max_backward.max(1);
        self.trim_backward();
    }

    /// Returns the backward capacity.
    pub fn max_backward(&self) -> usize {
        self.max_backward
    }

    /// Registers a listener for change notifications.
    pub fn subscribe(&mut self, listener: impl ChangeListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Records a visit to `file_name` at `position`/`line`.
    ///
    /// Reporting the current location again is a no-op. Otherwise forward
    /// history is dropped and the old current location (unless it is the
    /// sentinel) becomes the newest backward entry.
    pub fn add(&mut self, file_name: &str, position: usize, line: usize) {
        if self.current.matches(file_name, position, line) {
            trace!(file_name, position, line, "location unchanged");
            return;
        }

        self.forward.clear();
        if !self.current.is_empty() {
            let previous = self.current.clone();
            self.push_backward(previous);
        }
        self.current.set(file_name, position, line);
        debug!(file_name, position, line, backward = self.backward.len(), "location added");
        self.notify(HistoryChange::Added);
    }

    /// Moves one step back in history. No-op when there is nothing behind.
    pub fn backward(&mut self) {
        if self.step_backward() {
            debug!(current = %self.current, "navigated backward");
            self.notify(HistoryChange::Navigated);
        }
    }

    /// Moves one step forward in history. No-op when there is nothing ahead.
    pub fn forward(&mut self) {
        let Some(next) = self.forward.pop() else {
            return;
        };
        let previous = std::mem::replace(&mut self.current, next);
        if !previous.is_empty() {
            self.push_backward(previous);
        }
        debug!(current = %self.current, "navigated forward");
        self.notify(HistoryChange::Navigated);
    }

    /// Drops all history and resets the current location to the sentinel.
    pub fn clear(&mut self) {
        self.backward.clear();
        self.forward.clear();
        self.current.clear();
        debug!("history cleared");
        self.notify(HistoryChange::Cleared);
    }

    #[must_use]
    pub fn can_backward(&self) -> bool {
        !self.backward.is_empty()
    }

    #[must_use]
    pub fn can_forward(&self) -> bool {
        !self.forward.is_empty()
    }

    /// Number of backward entries.
    #[must_use]
    pub fn backward_len(&self) -> usize {
        self.backward.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.backward.is_empty() && self.forward.is_empty() && self.current.is_empty()
    }

    /// The current location (the sentinel when nowhere).
    pub fn current(&self) -> &LocationRecord {
        &self.current
    }

    /// Peeks at the newest backward entry, or the sentinel if there is none.
    pub fn backward_item(&self) -> &LocationRecord {
        self.backward.back().unwrap_or(&EMPTY)
    }

    /// Backward entries, oldest first.
    pub fn backward_entries(&self) -> impl DoubleEndedIterator<Item = &LocationRecord> {
        self.backward.iter()
    }

    /// Forward entries, farthest first (the nearest future is last).
    pub fn forward_entries(&self) -> impl DoubleEndedIterator<Item = &LocationRecord> {
        self.forward.iter()
    }

    /// Copies the whole history out for display.
    pub fn snapshot(&self) -> HistorySnapshot {
        HistorySnapshot {
            backward: self.backward.iter().cloned().collect(),
            current: self.current.clone(),
            forward: self.forward.iter().rev().cloned().collect(),
        }
    }

    /// Rewrites history for an edit at `start_position` that added
    /// `chars_added` characters and `lines_added` lines (negative for
    /// deletions).
    pub fn update(
        &mut self,
        file_name: &str,
        start_position: usize,
        chars_added: isize,
        lines_added: isize,
    ) {
        self.apply_delta(
            file_name,
            &TextDelta::edit(start_position, chars_added, lines_added),
        );
    }

    /// Rewrites history for the removal of `length` characters spanning
    /// `lines_removed` whole lines starting at `start_position`.
    pub fn remove_lines(
        &mut self,
        file_name: &str,
        start_position: usize,
        length: usize,
        lines_removed: usize,
    ) {
        self.apply_delta(
            file_name,
            &TextDelta::removed_lines(start_position, length, lines_removed),
        );
    }

    /// Applies a text delta in `file_name` to every stored location.
    ///
    /// Forward history is dropped. Backward entries whose anchor was deleted
    /// are forgotten. If the current location itself was deleted, the store
    /// steps back to the newest surviving backward entry instead, and that
    /// step is published as a navigation.
    pub fn apply_delta(&mut self, file_name: &str, delta: &TextDelta) {
        self.forward.clear();

        let before = self.backward.len();
        self.backward
            .retain_mut(|record| record.file_name != file_name || delta.apply(record) == Survival::Kept);
        let erased = before - self.backward.len();

        let mut fell_back = false;
        if !self.current.is_empty()
            && self.current.file_name == file_name
            && delta.apply(&mut self.current) == Survival::Erased
        {
            debug!(current = %self.current, "current location erased by edit");
            self.current.clear();
            fell_back = self.step_backward();
        }

        debug!(file_name, ?delta, erased, current = %self.current, "history rewritten");
        self.notify(HistoryChange::Edited);
        if fell_back {
            self.notify(HistoryChange::Navigated);
        }
    }

    /// Replaces the current location without pushing history.
    ///
    /// Used for same-line coalescing. Drops forward history when the
    /// location actually changes.
    pub(crate) fn retarget_current(&mut self, file_name: &str, position: usize, line: usize) {
        if self.current.matches(file_name, position, line) {
            return;
        }
        self.forward.clear();
        self.current.set(file_name, position, line);
        trace!(file_name, position, line, "current location coalesced");
        self.notify(HistoryChange::Added);
    }

    fn step_backward(&mut self) -> bool {
        let Some(last) = self.backward.pop_back() else {
            return false;
        };
        let previous = std::mem::replace(&mut self.current, last);
        if !previous.is_empty() {
            self.forward.push(previous);
        }
        true
    }

    fn push_backward(&mut self, record: LocationRecord) {
        self.backward.push_back(record);
        self.trim_backward();
    }

    fn trim_backward(&mut self) {
        while self.backward.len() > self.max_backward {
            if let Some(evicted) = self.backward.pop_front() {
                trace!(evicted = %evicted, "backward history full");
            }
        }
    }

    fn notify(&mut self, change: HistoryChange) {
        for listener in &mut self.listeners {
            listener.on_change(change);
        }
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HistoryStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HistoryStore")
            .field("backward", &self.backward)
            .field("current", &self.current)
            .field("forward", &self.forward)
            .field("max_backward", &self.max_backward)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// A point-in-time copy of the history, for pickers and reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistorySnapshot {
    /// Past locations, oldest first
    pub backward: Vec<LocationRecord>,
    pub current: LocationRecord,
    /// Undone locations, nearest first
    pub forward: Vec<LocationRecord>,
}

/// Which part of the history a snapshot entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Backward,
    Current,
    Forward,
}

impl HistorySnapshot {
    /// All entries in chronological order: backward, then current, then
    /// forward. The sentinel current location is skipped.
    pub fn entries(&self) -> impl Iterator<Item = (Slot, &LocationRecord)> {
        let current = (!self.current.is_empty()).then_some((Slot::Current, &self.current));
        self.backward
            .iter()
            .map(|r| (Slot::Backward, r))
            .chain(current)
            .chain(self.forward.iter().map(|r| (Slot::Forward, r)))
    }

    /// Picker lines, with the current location marked by `>`.
    pub fn picker_lines(&self) -> Vec<String> {
        self.entries()
            .map(|(slot, record)| {
                let marker = if slot == Slot::Current { '>' } else { ' ' };
                format!("{} {}", marker, record.label())
            })
            .collect()
    }
}
