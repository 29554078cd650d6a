//! Integration tests for the semantic parser
//!
//! Tests for the parsing pipeline:
//! - Native commands in each word order
//! - Confidence scoring
//! - Failure diagnostics
//! - Explicit syntax

mod explicit;
mod failures;
mod native;
mod patterns;
