//! Caller-side errors.
//!
//! Transitions themselves cannot fail; these cover input the view layer
//! rejects before anything is dispatched.

use thiserror::Error;

/// Errors raised while turning user input into commands
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    /// Todo text was empty or only whitespace
    #[error("Todo text cannot be empty")]
    EmptyText,

    /// A typed command was not recognised
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// A command was given without its required argument
    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    /// A todo id could not be parsed
    #[error("Invalid todo id: {0}")]
    InvalidId(String),
}
