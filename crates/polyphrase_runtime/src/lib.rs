//! CLI and interactive translation REPL for polyphrase.
//!
//! This crate provides:
//! - [`Repl`] - Interactive loop translating each line between two languages
//! - [`output`] - Token and node listings, as text or JSON
//! - The `polyphrase` binary (`src/bin/polyphrase.rs`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod editor;
pub mod error;
pub mod highlight;
pub mod output;
pub mod repl;
pub mod session;

pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use error::{Result, RuntimeError};
pub use repl::{Repl, Reply};
pub use session::Session;
