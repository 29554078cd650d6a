//! Integration tests for Layer 1: Languages
//!
//! Tests for the built-in profiles, the registry, and detection.

mod detection;
mod profiles;
mod registry;
