//! Error types for the phonebook query language.

use thiserror::Error;

/// Errors surfaced while parsing a phonebook query.
#[derive(Error, Debug)]
pub enum PhonebookError {
    /// The query stopped matching the command grammar. `line` is the
    /// 1-based index of the offending command within the query, `column`
    /// the 0-based character offset inside that command.
    #[error("unexpected token at {line}:{column}")]
    UnexpectedToken { line: usize, column: usize },
}

/// Convenience alias used throughout this crate.
pub type Result<T> = std::result::Result<T, PhonebookError>;
