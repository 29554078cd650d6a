//! Tokenizing, parsing, rendering, and translating polyphrase commands.
//!
//! This crate turns command text in any registered language into a
//! language-neutral [`SemanticNode`] and back.
//!
//! # Architecture
//!
//! ```text
//! "クリックしたら .active を 切り替え"          "on click toggle .active"
//!          │                                        ▲
//!          ▼                                        │
//! ┌─────────────────┐                     ┌─────────────────┐
//! │   TOKENIZER     │                     │   RENDERER      │
//! └─────────────────┘                     └─────────────────┘
//!          │                                        ▲
//!          ▼                                        │
//! ┌─────────────────┐   ┌──────────────┐            │
//! │ PATTERN         │ ← │ PATTERN      │ ───────────┘
//! │ MATCHING        │   │ REGISTRY     │
//! └─────────────────┘   └──────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ AST BUILDER     │  → toggle { event: click, patient: .active }
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`token`] - Tokens and token streams
//! - [`tokenizer`] - Language-aware tokenization
//! - [`pattern`] - Generated language patterns
//! - [`registry`] - Per-language pattern cache and validation
//! - [`matcher`] - Matching token streams against patterns
//! - [`builder`] - Semantic AST construction
//! - [`parser`] - The parse pipeline
//! - [`explicit`] - The bracketed, language-neutral syntax
//! - [`render`] - Native rendering of nodes
//! - [`engine`] - Registry, patterns, and configuration together, plus the
//!   free functions over the global engine
//! - [`config`] - Parser configuration

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod builder;
pub mod config;
pub mod engine;
pub mod explicit;
pub mod matcher;
pub mod parser;
pub mod pattern;
pub mod registry;
pub mod render;
mod segment;
pub mod token;
pub mod tokenizer;

pub use builder::build_ast;
pub use config::ParserConfig;
pub use engine::{
    Engine, can_parse, detect_languages, from_explicit, is_language_supported, parse, render,
    supported_languages, to_explicit, tokenize, translate,
};
pub use explicit::{EXPLICIT_LANGUAGE, parse_explicit, render_explicit};
pub use matcher::{PatternMatch, PatternMatcher};
pub use parser::{CanParse, SemanticParser};
pub use pattern::{LanguagePattern, Matcher, MarkerMatcher, PatternForm, PatternGroup, Slot};
pub use polyphrase_foundation::SemanticNode;
pub use polyphrase_languages::{Region, optimal_region};
pub use registry::PatternRegistry;
pub use render::Renderer;
pub use token::{Inflection, Token, TokenRole, TokenStream};
pub use tokenizer::Tokenizer;
