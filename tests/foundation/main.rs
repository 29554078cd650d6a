//! Integration tests for Layer 0: Foundation
//!
//! Tests for the Semantic AST, the role frames, values, and errors.

mod errors;
mod values;
