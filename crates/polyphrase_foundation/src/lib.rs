//! Core types for polyphrase.
//!
//! This crate provides:
//! - [`ActionType`] and [`SemanticRole`] - The closed command vocabulary and role frames
//! - [`Keyword`] - Canonical meanings that native words map onto
//! - [`SemanticValue`] - Role fillers (selectors, literals, references, filters)
//! - [`SemanticNode`] - The language-neutral Semantic AST
//! - [`Error`] - Error types with context
//! - [`Span`] - Byte ranges into command text

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod action;
pub mod error;
pub mod node;
pub mod span;
pub mod value;

pub use action::{ActionType, DomEvent, Keyword, Reference, RoleSlot, SemanticRole};
pub use error::{Error, ErrorContext, ErrorKind, ParseFailure, Result};
pub use node::{NodeKind, RoleMap, SemanticNode};
pub use span::Span;
pub use value::{
    FilterExpr, Literal, LiteralKind, Selector, SelectorKind, SelectorMatcher, SemanticValue,
};
