//! Integration tests for SemanticValue
//!
//! Tests selectors, literals, references, and filters.

use polyphrase_foundation::{
    FilterExpr, Literal, Reference, Selector, SelectorKind, SemanticValue,
};

// =============================================================================
// Selectors
// =============================================================================

#[test]
fn selector_kinds_from_sigil() {
    assert_eq!(Selector::parse("#button").map(|s| s.kind), Some(SelectorKind::Id));
    assert_eq!(Selector::parse(".active").map(|s| s.kind), Some(SelectorKind::Class));
    assert_eq!(Selector::parse("<button/>").map(|s| s.kind), Some(SelectorKind::Query));
    assert!(Selector::parse("#").is_none());
    assert!(Selector::parse("button").is_none());
}

#[test]
fn selector_constructor_falls_back_to_identifier() {
    assert_eq!(SemanticValue::selector("count"), SemanticValue::identifier("count"));
}

// =============================================================================
// Literals
// =============================================================================

#[test]
fn numeric_literals() {
    assert_eq!(Literal::parse_numeric("5"), Some(Literal::Number(5.0)));
    assert_eq!(Literal::parse_numeric("-2.5"), Some(Literal::Number(-2.5)));
    assert_eq!(Literal::parse_numeric("2s"), Some(Literal::Duration(2000)));
    assert_eq!(Literal::parse_numeric("1.5s"), Some(Literal::Duration(1500)));
    assert_eq!(Literal::parse_numeric("250ms"), Some(Literal::Duration(250)));
    assert_eq!(Literal::parse_numeric("-2s"), None);
    assert_eq!(Literal::parse_numeric("soon"), None);
}

#[test]
fn literal_display_is_explicit_syntax() {
    assert_eq!(SemanticValue::number(3.0).to_string(), "3");
    assert_eq!(SemanticValue::number(0.25).to_string(), "0.25");
    assert_eq!(SemanticValue::duration_ms(2000).to_string(), "2s");
    assert_eq!(SemanticValue::duration_ms(1500).to_string(), "1500ms");
    assert_eq!(SemanticValue::string("a \"b\" \\c").to_string(), r#""a \"b\" \\c""#);
    assert_eq!(SemanticValue::Reference(Reference::Result).to_string(), "@result");
}

// =============================================================================
// Filters
// =============================================================================

#[test]
fn filters_evaluate_against_matchers() {
    let hidden = FilterExpr::Matches(Selector::parse(".hidden").unwrap());
    let is_hidden = |s: &Selector| s.text == ".hidden";
    let is_shown = |_: &Selector| false;

    assert!(hidden.evaluate(&is_hidden));
    assert!(!hidden.evaluate(&is_shown));
    let not_hidden = hidden.clone().negate();
    assert!(!not_hidden.evaluate(&is_hidden));
    assert!(not_hidden.evaluate(&is_shown));
    assert!(not_hidden.clone().negate().evaluate(&is_hidden));
}

#[test]
fn filters_flatten_nested_negation() {
    let open = FilterExpr::Matches(Selector::parse(".open").unwrap());
    let built = open.clone().negate().negate().negate();
    assert_eq!(built.to_string(), "!.open");

    let nested = FilterExpr::Not(Box::new(FilterExpr::Not(Box::new(open.clone().negate()))));
    let (selector, negated) = nested.flatten();
    assert_eq!(selector.text, ".open");
    assert!(negated);
    assert_eq!(nested.to_string(), "!!!.open");
    assert_eq!(nested.canonical(), built);
    assert_eq!(nested.negate().canonical(), open);
}
