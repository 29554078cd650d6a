//! polyphrase - multilingual semantic parser for hypermedia commands
//!
//! This crate re-exports all layers of polyphrase for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: polyphrase_runtime     — CLI, translation REPL, JSON output
//! Layer 2: polyphrase_parser      — Tokenizer, patterns, parser, renderer, engine
//! Layer 1: polyphrase_languages   — Language profiles, registry, detection
//! Layer 0: polyphrase_foundation  — Semantic AST, vocabulary, errors
//! ```

pub use polyphrase_foundation as foundation;
pub use polyphrase_languages as languages;
pub use polyphrase_parser as parser;
pub use polyphrase_runtime as runtime;

pub use polyphrase_foundation::{
    ActionType, Error, ErrorKind, Result, SemanticNode, SemanticRole, SemanticValue,
};
pub use polyphrase_parser::{
    CanParse, Engine, EXPLICIT_LANGUAGE, ParserConfig, Region, can_parse, detect_languages,
    from_explicit, is_language_supported, optimal_region, parse, render, render_explicit,
    supported_languages, to_explicit, tokenize, translate,
};
