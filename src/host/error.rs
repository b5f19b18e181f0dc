//! Error types for event script parsing.

use std::fmt;

/// What was wrong with a script line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptErrorKind {
    /// The first word is not a known command.
    UnknownCommand(String),
    /// A command is missing one of its arguments.
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    /// An argument is not an integer.
    InvalidNumber {
        argument: &'static str,
        value: String,
    },
    /// Extra words after a complete command.
    TrailingInput(String),
}

/// A malformed line in an event script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptError {
    /// 1-based line number
    pub line: usize,
    pub kind: ScriptErrorKind,
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: ", self.line)?;
        match &self.kind {
            ScriptErrorKind::UnknownCommand(command) => {
                write!(f, "unknown command '{}'", command)
            }
            ScriptErrorKind::MissingArgument { command, argument } => {
                write!(f, "'{}' is missing its {} argument", command, argument)
            }
            ScriptErrorKind::InvalidNumber { argument, value } => {
                write!(f, "invalid {} '{}', expected an integer", argument, value)
            }
            ScriptErrorKind::TrailingInput(rest) => {
                write!(f, "unexpected trailing input '{}'", rest)
            }
        }
    }
}

impl std::error::Error for ScriptError {}
