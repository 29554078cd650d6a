//! Errors raised by the CLI and the REPL.

use thiserror::Error;

/// Result type for runtime operations.
pub type Result<T> = std::result::Result<T, RuntimeError>;

/// Failures outside the parsing core: the terminal, JSON output, and usage
/// mistakes in REPL commands.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// A tokenize, parse, render, or translate failure.
    #[error(transparent)]
    Polyphrase(#[from] polyphrase_foundation::Error),

    /// The line editor failed to start or to read.
    #[error("editor error: {0}")]
    Editor(String),

    /// A node could not be written as JSON.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// A REPL command was given bad arguments.
    #[error("{0}")]
    Usage(String),
}

impl From<rustyline::error::ReadlineError> for RuntimeError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        Self::Editor(err.to_string())
    }
}
