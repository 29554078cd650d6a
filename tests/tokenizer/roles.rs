//! Tests for token roles and spans.

use polyphrase_foundation::{ActionType, Keyword, LiteralKind, SelectorKind, Span};
use polyphrase_parser::{Engine, ParserConfig, TokenRole, TokenStream};

fn tokenize(input: &str, language: &str) -> TokenStream {
    Engine::builtin().tokenize(input, language).unwrap()
}

fn roles(stream: &TokenStream) -> Vec<TokenRole> {
    stream.iter().map(|t| t.role).collect()
}

// =============================================================================
// Roles
// =============================================================================

#[test]
fn keywords_and_selectors() {
    let stream = tokenize("toggle .active on #button", "en");
    assert_eq!(stream.language(), "en");
    assert_eq!(
        roles(&stream),
        vec![
            TokenRole::Keyword(Keyword::Action(ActionType::Toggle)),
            TokenRole::Selector(SelectorKind::Class),
            TokenRole::Keyword(Keyword::On),
            TokenRole::Selector(SelectorKind::Id),
        ]
    );
    assert_eq!(stream.actions(), vec![ActionType::Toggle]);
}

#[test]
fn literals_and_variables() {
    let stream = tokenize("increment :count by 2", "en");
    assert_eq!(
        roles(&stream),
        vec![
            TokenRole::Keyword(Keyword::Action(ActionType::Increment)),
            TokenRole::Identifier,
            TokenRole::Particle,
            TokenRole::Literal(LiteralKind::Number),
        ]
    );

    let stream = tokenize("wait 1.5s", "en");
    assert_eq!(stream.tokens()[1].role, TokenRole::Literal(LiteralKind::Duration));
    assert_eq!(stream.tokens()[1].text, "1.5s");
}

#[test]
fn strings_keep_quotes_in_text_only() {
    let stream = tokenize(r#"put "hello world" into #out"#, "en");
    let string = &stream.tokens()[1];
    assert_eq!(string.role, TokenRole::Literal(LiteralKind::String));
    assert_eq!(string.text, "\"hello world\"");
    assert_eq!(string.normalized, "hello world");
}

#[test]
fn unknown_words_are_identifiers() {
    let stream = tokenize("frobnicate .a", "en");
    assert_eq!(stream.tokens()[0].role, TokenRole::Identifier);
    assert!(stream.actions().is_empty());
}

#[test]
fn keyword_lookup_ignores_case() {
    let stream = tokenize("TOGGLE .active", "en");
    assert_eq!(stream.tokens()[0].normalized, "toggle");
    assert_eq!(stream.tokens()[0].text, "TOGGLE");
    assert_eq!(stream.actions(), vec![ActionType::Toggle]);
}

// =============================================================================
// Spans
// =============================================================================

#[test]
fn spans_are_byte_offsets() {
    let input = "toggle .active on #button";
    let stream = tokenize(input, "en");
    assert_eq!(stream.tokens()[1].span, Span::new(7, 14));
    for token in stream.iter() {
        assert_eq!(token.span.text(input), token.text);
    }
}

// =============================================================================
// Phrases
// =============================================================================

#[test]
fn multi_word_keywords() {
    let input = "chuyển đổi .active trên #button";
    let stream = tokenize(input, "vi");
    let first = &stream.tokens()[0];
    assert_eq!(first.role, TokenRole::Keyword(Keyword::Action(ActionType::Toggle)));
    assert_eq!(first.text, "chuyển đổi");
    assert_eq!(first.span, Span::new(0, "chuyển đổi".len()));
    assert_eq!(stream.len(), 4);
}

#[test]
fn phrase_length_is_configurable() {
    let engine = Engine::builtin().with_config(ParserConfig::default().with_max_phrase_words(1));
    let stream = engine.tokenize("chuyển đổi .active", "vi").unwrap();
    assert_eq!(stream.tokens()[0].role, TokenRole::Identifier);
    assert!(stream.actions().is_empty());
}

#[test]
fn phrases_prefer_the_longest_match() {
    // "bỏ tập trung" (blur) contains "tập trung" (focus)
    let stream = tokenize("bỏ tập trung #input", "vi");
    assert_eq!(stream.actions(), vec![ActionType::Blur]);
    assert_eq!(stream.len(), 2);
}
