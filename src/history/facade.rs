//! Policy layer over [`HistoryStore`].

use super::notify::ChangeListener;
use super::record::LocationRecord;
use super::store::{HistorySnapshot, HistoryStore};
use crate::config::Config;

/// Wraps a [`HistoryStore`] and decides how cursor reports become history.
///
/// With same-line coalescing enabled, a cursor report on the same file and
/// line as the newest backward entry only moves the current location. It
/// does not push history, so cursor jitter along one line does not flood
/// the backward stack.
#[derive(Debug)]
pub struct HistoryFacade {
    store: HistoryStore,
    coalesce_same_line: bool,
}

impl Default for HistoryFacade {
    /// Uses the default [`Config`] settings.
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl HistoryFacade {
    /// Creates a facade over an unbounded store.
    pub fn new(coalesce_same_line: bool) -> Self {
        Self {
            store: HistoryStore::new(),
            coalesce_same_line,
        }
    }

    /// Creates a facade using the persisted settings.
    pub fn from_config(config: &Config) -> Self {
        Self {
            store: HistoryStore::with_max_backward(config.effective_max_backward()),
            coalesce_same_line: config.coalesce_same_line,
        }
    }

    pub fn coalesce_same_line(&self) -> bool {
        self.coalesce_same_line
    }

    pub fn set_coalesce_same_line(&mut self, enabled: bool) {
        self.coalesce_same_line = enabled;
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &HistoryStore {
        &self.store
    }

    pub fn set_max_backward(&mut self, max_backward: usize) {
        self.store.set_max_backward(max_backward);
    }

    /// Reports a cursor location.
    pub fn add(&mut self, file_name: &str, position: usize, line: usize) {
        if self.coalesce_same_line && self.store.backward_item().same_line(file_name, line) {
            self.store.retarget_current(file_name, position, line);
        } else {
            self.store.add(file_name, position, line);
        }
    }

    pub fn backward(&mut self) {
        self.store.backward();
    }

    pub fn forward(&mut self) {
        self.store.forward();
    }

    pub fn clear(&mut self) {
        self.store.clear();
    }

    pub fn update(
        &mut self,
        file_name: &str,
        start_position: usize,
        chars_added: isize,
        lines_added: isize,
    ) {
        self.store
            .update(file_name, start_position, chars_added, lines_added);
    }

    pub fn remove_lines(
        &mut self,
        file_name: &str,
        start_position: usize,
        length: usize,
        lines_removed: usize,
    ) {
        self.store
            .remove_lines(file_name, start_position, length, lines_removed);
    }

    pub fn subscribe(&mut self, listener: impl ChangeListener + 'static) {
        self.store.subscribe(listener);
    }

    pub fn can_backward(&self) -> bool {
        self.store.can_backward()
    }

    pub fn can_forward(&self) -> bool {
        self.store.can_forward()
    }

    pub fn current(&self) -> &LocationRecord {
        self.store.current()
    }

    pub fn backward_item(&self) -> &LocationRecord {
        self.store.backward_item()
    }

    pub fn snapshot(&self) -> HistorySnapshot {
        self.store.snapshot()
    }
}
