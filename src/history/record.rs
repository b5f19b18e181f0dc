//! A single visited location in a file.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// One point in the navigation history: a file plus a character offset and
/// a line index.
///
/// The default value is the empty sentinel (no file, offset 0, line 0) which
/// stands for "no current location". Offsets are unsigned, and every shift
/// goes through saturating arithmetic, so a record never points before the
/// start of its file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationRecord {
    /// File the location belongs to (empty for the sentinel)
    pub file_name: String,
    /// Character offset from the start of the file
    pub position: usize,
    /// Line index
    pub line: usize,
}

impl LocationRecord {
    /// Creates a record pointing at `position`/`line` in `file_name`.
    pub fn new(file_name: impl Into<String>, position: usize, line: usize) -> Self {
        Self {
            file_name: file_name.into(),
            position,
            line,
        }
    }

    /// Returns true for the "no current location" sentinel.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.file_name.is_empty() && self.position == 0 && self.line == 0
    }

    /// Returns true if this record is exactly the given triple.
    #[must_use]
    pub fn matches(&self, file_name: &str, position: usize, line: usize) -> bool {
        self.file_name == file_name && self.position == position && self.line == line
    }

    /// Returns true if both records sit on the same line of the same file.
    #[must_use]
    pub fn same_line(&self, file_name: &str, line: usize) -> bool {
        self.file_name == file_name && self.line == line
    }

    /// Resets the record to the empty sentinel.
    pub fn clear(&mut self) {
        self.file_name.clear();
        self.position = 0;
        self.line = 0;
    }

    /// Overwrites all three fields in place.
    pub fn set(&mut self, file_name: &str, position: usize, line: usize) {
        if self.file_name != file_name {
            self.file_name.clear();
            self.file_name.push_str(file_name);
        }
        self.position = position;
        self.line = line;
    }

    /// Moves the record by signed deltas, clamping both fields at zero.
    pub fn shift(&mut self, chars: isize, lines: isize) {
        self.position = self.position.saturating_add_signed(chars);
        self.line = self.line.saturating_add_signed(lines);
    }

    /// Text shown for this entry in a history picker.
    ///
    /// Only the final path component is shown, e.g. `main.rs: Line 3: Position 42`.
    pub fn label(&self) -> String {
        let name = Path::new(&self.file_name)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        format!("{}: Line {}: Position {}", name, self.line, self.position)
    }
}

impl fmt::Display for LocationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}@{}", self.file_name, self.line, self.position)
    }
}
