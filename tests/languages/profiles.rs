//! Integration tests for the built-in profiles
//!
//! Tests vocabulary coverage and keyword lookup.

use polyphrase_foundation::{ActionType, DomEvent, Keyword};
use polyphrase_languages::{LanguageRegistry, MarkerPosition, WordOrder};

// =============================================================================
// Vocabulary
// =============================================================================

#[test]
fn every_language_names_every_action_and_event() {
    for profile in LanguageRegistry::builtin().profiles() {
        for action in ActionType::ALL {
            assert!(
                profile.has_keyword(Keyword::Action(action)),
                "{} has no keyword for {action}",
                profile.code()
            );
        }
        for event in DomEvent::ALL {
            assert!(
                profile.has_keyword(Keyword::Event(event)),
                "{} has no name for {event:?}",
                profile.code()
            );
        }
    }
}

#[test]
fn map_lookup_agrees_with_linear_scan() {
    for profile in LanguageRegistry::builtin().profiles() {
        for (form, _) in profile.keyword_entries() {
            assert_eq!(
                profile.lookup_keyword(form),
                profile.scan_keyword(form),
                "{}: {form}",
                profile.code()
            );
        }
        assert_eq!(profile.lookup_keyword("no-such-word"), None);
    }
}

#[test]
fn display_form_is_first_declared() {
    let registry = LanguageRegistry::builtin();
    let ja = registry.get("ja").unwrap();
    assert_eq!(ja.display(Keyword::Action(ActionType::Toggle)), Some("切り替え"));
    let es = registry.get("es").unwrap();
    assert_eq!(es.display(Keyword::Event(DomEvent::Click)), Some("clic"));
}

// =============================================================================
// Typology
// =============================================================================

#[test]
fn word_orders() {
    let registry = LanguageRegistry::builtin();
    let order = |code: &str| registry.get(code).map(|p| p.word_order());
    assert_eq!(order("en"), Some(WordOrder::Svo));
    assert_eq!(order("ja"), Some(WordOrder::Sov));
    assert_eq!(order("tr"), Some(WordOrder::Sov));
    assert_eq!(order("ar"), Some(WordOrder::Vso));
}

#[test]
fn postpositional_languages() {
    let postpositional: Vec<&str> = LanguageRegistry::builtin()
        .profiles()
        .filter(|p| p.marker_position() == MarkerPosition::Postpositional)
        .map(|p| p.code())
        .collect();
    assert!(postpositional.contains(&"ja"));
    assert!(postpositional.contains(&"ko"));
    assert!(postpositional.contains(&"tr"));
    assert!(!postpositional.contains(&"en"));
    assert!(!postpositional.contains(&"ar"));
}

#[test]
fn normalization_folds_input() {
    let registry = LanguageRegistry::builtin();
    let es = registry.get("es").unwrap();
    assert_eq!(
        es.lookup_keyword(&es.normalize("AÑADIR")),
        Some(Keyword::Action(ActionType::Add))
    );
    let ar = registry.get("ar").unwrap();
    assert_eq!(
        ar.lookup_keyword(&ar.normalize("بَدِّلْ")),
        Some(Keyword::Action(ActionType::Toggle))
    );
}
