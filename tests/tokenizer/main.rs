//! Integration tests for the tokenizer
//!
//! Tests for language-aware tokenization:
//! - Token roles and spans
//! - Multi-word phrases
//! - Inflection stripping and fused markers
//! - Compact-script segmentation

mod inflection;
mod properties;
mod roles;
mod segmentation;
