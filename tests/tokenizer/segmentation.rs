//! Tests for segmentation of run-together compact scripts.

use polyphrase_foundation::{ActionType, Keyword, SelectorKind, Span};
use polyphrase_parser::{Engine, ParserConfig, TokenRole};

#[test]
fn splits_particles_from_keywords() {
    let input = ".activeを切り替え";
    let stream = Engine::builtin().tokenize(input, "ja").unwrap();
    let roles: Vec<TokenRole> = stream.iter().map(|t| t.role).collect();
    assert_eq!(
        roles,
        vec![
            TokenRole::Selector(SelectorKind::Class),
            TokenRole::Particle,
            TokenRole::Keyword(Keyword::Action(ActionType::Toggle)),
        ]
    );
    assert_eq!(stream.tokens()[1].span, Span::new(7, 10));
    assert_eq!(stream.tokens()[2].span, Span::new(10, input.len()));
}

#[test]
fn segmentation_can_be_disabled() {
    let engine = Engine::builtin()
        .with_config(ParserConfig::default().with_compact_segmentation(false));
    let stream = engine.tokenize(".activeを切り替え", "ja").unwrap();
    assert_eq!(stream.len(), 2);
    assert_eq!(stream.tokens()[1].role, TokenRole::Identifier);
}

#[test]
fn spaced_compact_text_needs_no_segmentation() {
    let segmented = Engine::builtin().tokenize(".activeを切り替え", "ja").unwrap();
    let spaced = Engine::builtin().tokenize(".active を 切り替え", "ja").unwrap();
    let roles = |s: &polyphrase_parser::TokenStream| s.iter().map(|t| t.role).collect::<Vec<_>>();
    assert_eq!(roles(&segmented), roles(&spaced));
}
