//! Tests for the generated pattern registry.

use std::collections::HashSet;

use polyphrase_foundation::ActionType;
use polyphrase_parser::{Engine, LanguagePattern, PatternForm, Slot};

fn bare(engine: &Engine, language: &str, action: ActionType) -> LanguagePattern {
    engine
        .patterns_for(language, action)
        .unwrap()
        .into_iter()
        .find(|p| !p.has_event() && p.form == PatternForm::Standard)
        .cloned()
        .unwrap()
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn builtin_patterns_validate() {
    let engine = Engine::builtin();
    for language in engine.supported_languages() {
        let errors = engine.validate_patterns(language).unwrap();
        assert!(errors.is_empty(), "{language}: {errors:?}");
    }
}

#[test]
fn every_action_has_bare_and_event_patterns() {
    let engine = Engine::builtin();
    for language in engine.supported_languages() {
        for action in ActionType::ALL {
            let patterns = engine.patterns_for(language, action).unwrap();
            assert!(patterns.iter().any(|p| p.has_event()), "{language} {action}");
            assert!(patterns.iter().any(|p| !p.has_event()), "{language} {action}");
        }
    }
}

// =============================================================================
// Ordering
// =============================================================================

#[test]
fn patterns_are_sorted_by_priority() {
    let engine = Engine::builtin();
    for language in engine.supported_languages() {
        let patterns = engine.patterns_for_language(language).unwrap();
        assert!(
            patterns.windows(2).all(|w| w[0].priority >= w[1].priority),
            "{language}"
        );
        let ids: HashSet<&str> = patterns.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), patterns.len(), "{language} has duplicate ids");
    }
}

#[test]
fn verb_position_follows_marker_position() {
    let engine = Engine::builtin();
    let en = bare(&engine, "en", ActionType::Toggle);
    assert_eq!(en.groups.first().map(|g| g.slot), Some(Slot::Action));
    let ja = bare(&engine, "ja", ActionType::Toggle);
    assert_eq!(ja.groups.last().map(|g| g.slot), Some(Slot::Action));
}

#[test]
fn flexible_orders() {
    let engine = Engine::builtin();
    assert!(!bare(&engine, "en", ActionType::Toggle).flexible);
    assert!(bare(&engine, "ja", ActionType::Toggle).flexible);
    assert!(bare(&engine, "ar", ActionType::Toggle).flexible);
}

#[test]
fn body_variants_rank_below_standard_body() {
    let engine = Engine::builtin();
    for language in ["zh", "de"] {
        let patterns = engine.patterns_for(language, ActionType::Toggle).unwrap();
        let compact = patterns
            .iter()
            .find(|p| p.form == PatternForm::Compact)
            .unwrap_or_else(|| panic!("{language} has no compact body"));
        assert!(compact.priority < bare(&engine, language, ActionType::Toggle).priority);
    }
}

#[test]
fn japanese_event_forms() {
    let engine = Engine::builtin();
    let forms: HashSet<PatternForm> = engine
        .patterns_for("ja", ActionType::Toggle)
        .unwrap()
        .iter()
        .map(|p| p.form)
        .collect();
    assert!(forms.contains(&PatternForm::Conditional));
    assert!(forms.contains(&PatternForm::Instrumental));
    assert!(forms.contains(&PatternForm::Temporal));
}
