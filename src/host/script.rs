//! Line-oriented event scripts.
//!
//! A script drives a [`Session`](super::Session) the way an editor would,
//! one callback per line:
//!
//! ```text
//! # comments and blank lines are ignored
//! move   <file> <position> <line>
//! edit   <file> <start> <chars-added> <lines-added>
//! remove <file> <start> <length> <lines-removed>
//! back
//! forward
//! clear
//! ```
//!
//! File names cannot contain whitespace. Negative offsets in `move`,
//! `edit` and `remove` are clamped to zero rather than rejected.

use super::error::{ScriptError, ScriptErrorKind};
use super::HostEvent;
use std::str::SplitWhitespace;

/// Parses a whole script into host events.
pub fn parse_script(source: &str) -> Result<Vec<HostEvent>, ScriptError> {
    let mut events = Vec::new();
    for (index, raw) in source.lines().enumerate() {
        let text = raw.split('#').next().unwrap_or_default().trim();
        if text.is_empty() {
            continue;
        }
        let event = parse_line(text).map_err(|kind| ScriptError {
            line: index + 1,
            kind,
        })?;
        events.push(event);
    }
    Ok(events)
}

/// Parses one non-empty, comment-free line.
pub fn parse_line(text: &str) -> Result<HostEvent, ScriptErrorKind> {
    let mut words = Args {
        words: text.split_whitespace(),
        command: "",
    };
    let command = words.words.next().unwrap_or_default();

    let event = match command {
        "move" => {
            words.command = "move";
            HostEvent::CursorMoved {
                file_name: words.text("file")?,
                position: clamp(words.number("position")?),
                line: clamp(words.number("line")?),
            }
        }
        "edit" => {
            words.command = "edit";
            HostEvent::TextEdited {
                file_name: words.text("file")?,
                start_position: clamp(words.number("start")?),
                chars_added: words.number("chars-added")?,
                lines_added: words.number("lines-added")?,
            }
        }
        "remove" => {
            words.command = "remove";
            HostEvent::LinesRemoved {
                file_name: words.text("file")?,
                start_position: clamp(words.number("start")?),
                length: clamp(words.number("length")?),
                lines_removed: clamp(words.number("lines-removed")?),
            }
        }
        "back" | "backward" => HostEvent::NavigateBackward,
        "forward" => HostEvent::NavigateForward,
        "clear" => HostEvent::Clear,
        other => return Err(ScriptErrorKind::UnknownCommand(other.to_string())),
    };

    let rest: Vec<&str> = words.words.collect();
    if !rest.is_empty() {
        return Err(ScriptErrorKind::TrailingInput(rest.join(" ")));
    }
    Ok(event)
}

struct Args<'a> {
    words: SplitWhitespace<'a>,
    command: &'static str,
}

impl Args<'_> {
    fn text(&mut self, argument: &'static str) -> Result<String, ScriptErrorKind> {
        self.words
            .next()
            .map(str::to_string)
            .ok_or(ScriptErrorKind::MissingArgument {
                command: self.command,
                argument,
            })
    }

    fn number(&mut self, argument: &'static str) -> Result<isize, ScriptErrorKind> {
        let value = self.text(argument)?;
        value
            .parse()
            .map_err(|_| ScriptErrorKind::InvalidNumber { argument, value })
    }
}

fn clamp(value: isize) -> usize {
    usize::try_from(value).unwrap_or(0)
}
