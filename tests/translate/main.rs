//! Integration tests for translation
//!
//! Tests for parse-then-render across language pairs, through both the
//! engine and the crate-root functions.

mod facade;
mod pairs;
