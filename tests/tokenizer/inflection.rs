//! Tests for inflection stripping and fused markers.

use polyphrase_foundation::{ActionType, DomEvent, Keyword, SemanticRole};
use polyphrase_languages::AffixPosition;
use polyphrase_parser::{Engine, TokenRole, TokenStream};

fn tokenize(input: &str, language: &str) -> TokenStream {
    Engine::builtin().tokenize(input, language).unwrap()
}

// =============================================================================
// Plain Inflections
// =============================================================================

#[test]
fn english_past_tense_is_stripped() {
    let stream = tokenize("toggled .active", "en");
    let token = &stream.tokens()[0];
    assert_eq!(token.role, TokenRole::Keyword(Keyword::Action(ActionType::Toggle)));
    assert_eq!(token.normalized, "toggle");
    assert!(token.is_stripped());
    assert!(token.marking().is_none());
}

#[test]
fn spanish_gerund_reduces_to_infinitive() {
    let stream = tokenize("alternando .activo", "es");
    assert_eq!(stream.actions(), vec![ActionType::Toggle]);
    assert!(stream.tokens()[0].is_stripped());
}

// =============================================================================
// Marking Inflections
// =============================================================================

#[test]
fn japanese_conditional_marks_the_event() {
    let stream = tokenize("クリックしたら", "ja");
    assert_eq!(stream.len(), 1);
    let token = &stream.tokens()[0];
    assert_eq!(token.role, TokenRole::Keyword(Keyword::Event(DomEvent::Click)));
    assert_eq!(token.stem_text(), "クリック");
    let marking = token.marking().unwrap();
    assert_eq!(marking.affix, "したら");
    assert_eq!(marking.position, AffixPosition::Suffix);
    assert_eq!(marking.marks, Some(SemanticRole::EventName));
    assert!(!token.is_stripped());
}

#[test]
fn arabic_prefix_marks_the_event() {
    let stream = tokenize("بالنقر بدّل .active", "ar");
    let token = &stream.tokens()[0];
    assert_eq!(token.role, TokenRole::Keyword(Keyword::Event(DomEvent::Click)));
    let marking = token.marking().unwrap();
    assert_eq!(marking.position, AffixPosition::Prefix);
    assert_eq!(marking.surface, "بال");
    assert_eq!(token.stem_text(), "نقر");
}

#[test]
fn turkish_converb_keeps_surface_affix() {
    let stream = tokenize("tıklayınca", "tr");
    let token = &stream.tokens()[0];
    assert_eq!(token.role, TokenRole::Keyword(Keyword::Event(DomEvent::Click)));
    assert_eq!(token.normalized, "tikla");
    let marking = token.marking().unwrap();
    assert_eq!(marking.affix, "yinca");
    assert_eq!(marking.surface, "yınca");
    assert_eq!(token.stem_text(), "tıkla");
}
