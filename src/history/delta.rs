//! Text deltas reported by the editor and how they move stored locations.
//!
//! Both kinds of mutation the host reports (a generic edit and a whole-line
//! removal) reduce to the same shape: an optional range of offsets whose
//! anchors are destroyed, a threshold from which offsets are shifted, and
//! the character/line deltas to shift by.

use super::record::LocationRecord;
use std::ops::Range;

/// Outcome of applying a delta to one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Survival {
    /// The record still has a location (possibly shifted)
    Kept,
    /// The text the record pointed at was deleted
    Erased,
}

/// A text mutation expressed in the terms history records care about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDelta {
    /// Records at or beyond this offset are shifted
    shift_from: usize,
    /// Character delta applied to shifted records
    chars: isize,
    /// Line delta applied to shifted records
    lines: isize,
    /// Half-open range of offsets destroyed by the mutation
    erased: Option<Range<usize>>,
}

impl TextDelta {
    /// An edit at `start` that added `chars_added` characters and
    /// `lines_added` lines (either may be negative).
    ///
    /// Only an edit that removed whole lines destroys anchors; the destroyed
    /// span is `[start, start + |chars_added|)`.
    pub fn edit(start: usize, chars_added: isize, lines_added: isize) -> Self {
        let erased = (lines_added < 0).then(|| {
            let end = start.saturating_add(chars_added.unsigned_abs());
            start..end
        });
        Self {
            shift_from: start,
            chars: chars_added,
            lines: lines_added,
            erased,
        }
    }

    /// Removal of `length` characters spanning `lines_removed` full lines.
    ///
    /// Anchors in `[start, start + length]` (inclusive) are destroyed and
    /// anything strictly after that range moves back.
    pub fn removed_lines(start: usize, length: usize, lines_removed: usize) -> Self {
        let last = start.saturating_add(length);
        Self {
            shift_from: last.saturating_add(1),
            chars: -to_signed(length),
            lines: -to_signed(lines_removed),
            erased: Some(start..last.saturating_add(1)),
        }
    }

    /// The destroyed range, if any.
    pub fn erased(&self) -> Option<&Range<usize>> {
        self.erased.as_ref()
    }

    /// Rewrites `record` for this delta.
    ///
    /// The caller is responsible for only passing records from the edited
    /// file.
    pub fn apply(&self, record: &mut LocationRecord) -> Survival {
        if let Some(erased) = &self.erased {
            if erased.contains(&record.position) {
                return Survival::Erased;
            }
        }
        if record.position >= self.shift_from {
            record.shift(self.chars, self.lines);
        }
        Survival::Kept
    }
}

fn to_signed(value: usize) -> isize {
    isize::try_from(value).unwrap_or(isize::MAX)
}
