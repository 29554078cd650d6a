//! Integration tests for the language registry
//!
//! Tests built-in registration order and duplicate handling.

use polyphrase_languages::{LanguageRegistry, lang};

// =============================================================================
// Built-in Languages
// =============================================================================

#[test]
fn builtin_registers_thirteen_languages_in_order() {
    let registry = LanguageRegistry::builtin();
    assert_eq!(registry.len(), 13);
    let codes: Vec<&str> = registry.codes().collect();
    assert_eq!(
        codes,
        vec!["en", "es", "pt", "fr", "de", "it", "ja", "zh", "ko", "ar", "tr", "id", "vi"]
    );
}

#[test]
fn lookup_by_code() {
    let registry = LanguageRegistry::builtin();
    assert_eq!(registry.get("ja").map(|p| p.name()), Some("Japanese"));
    assert!(registry.contains("vi"));
    assert!(!registry.contains("xx"));
    assert!(registry.get("EN").is_none());
}

// =============================================================================
// Custom Registries
// =============================================================================

#[test]
fn duplicate_registration_is_ignored() {
    let registry = LanguageRegistry::builder()
        .register(lang::en::profile())
        .with_builtin()
        .build();
    assert_eq!(registry.len(), 13);
    assert_eq!(registry.codes().next(), Some("en"));
}

#[test]
fn empty_registry() {
    let registry = LanguageRegistry::builder().build();
    assert!(registry.is_empty());
    assert_eq!(registry.profiles().count(), 0);
}
