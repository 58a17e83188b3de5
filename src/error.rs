//! Error types.

use std::fmt;

use thiserror::Error;

/// The kind of failure that stopped a parse.
///
/// All failures are terminal: the parser stops at the first one and reports where it
/// happened.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// No error; the last parse succeeded, or nothing has been parsed yet.
    #[default]
    None,

    /// A number was required but the input did not start one, or it overflowed to
    /// infinity.
    NumberParsing,

    /// An elliptical arc flag was something other than `0` or `1`.
    FlagParsing,

    /// A command letter was not one of `MmZzLlHhVvCcSsQqTtAa`.
    CommandParsing,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match *self {
            ErrorKind::None => "no error",
            ErrorKind::NumberParsing => "invalid or missing number",
            ErrorKind::FlagParsing => "invalid arc flag",
            ErrorKind::CommandParsing => "unexpected command",
        };

        f.write_str(description)
    }
}

/// A parse failure together with the byte offset at which it happened.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
#[error("error at position {position}: {kind}")]
pub struct ParseError {
    /// Byte offset into the path data where the cursor stopped.
    pub position: usize,
    pub kind: ErrorKind,
}

impl ParseError {
    pub fn new(position: usize, kind: ErrorKind) -> ParseError {
        ParseError { position, kind }
    }
}
