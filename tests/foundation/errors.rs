//! Integration tests for Error types
//!
//! Tests error construction, display, and context.

use polyphrase_foundation::{
    ActionType, Error, ErrorContext, ErrorKind, ParseFailure, SemanticRole, Span,
};

// =============================================================================
// Error Display
// =============================================================================

#[test]
fn unsupported_language_names_the_code() {
    let err = Error::unsupported_language("xx");
    assert_eq!(err.to_string(), "unsupported language: xx");
}

#[test]
fn parse_failure_reports_closest_match() {
    let failure = ParseFailure::new("en", "toggle", "no pattern matched").with_best(ActionType::Toggle, 0.5);
    let msg = Error::parse(failure).to_string();
    assert!(msg.contains("\"toggle\""));
    assert!(msg.contains("as en"));
    assert!(msg.contains("closest: toggle at confidence 0.50"));
}

#[test]
fn parse_failure_without_best_has_no_closest() {
    let msg = Error::parse(ParseFailure::new("ja", "", "empty input")).to_string();
    assert!(msg.ends_with("empty input"));
    assert!(!msg.contains("closest"));
}

#[test]
fn incomplete_and_render_errors() {
    let err = Error::incomplete_node(ActionType::Put, SemanticRole::Destination);
    assert_eq!(err.to_string(), "incomplete put node: missing destination");

    let err = Error::render(ActionType::Log, "ko", "no keyword");
    assert_eq!(err.to_string(), "cannot render log in ko: no keyword");
}

#[test]
fn invalid_pattern_names_pattern() {
    let err = Error::invalid_pattern("tr", "tr:toggle:standard", "marker \"x\" is not declared");
    assert!(matches!(err.kind, ErrorKind::InvalidPattern { ref pattern, .. } if pattern == "tr:toggle:standard"));
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn context_records_span_and_stages() {
    let context = ErrorContext::new()
        .with_span(Span::new(3, 9))
        .with_frame("parse")
        .with_frame("translate en -> ja");
    let err = Error::unsupported_language("zz").with_context(context.clone());
    assert_eq!(err.context, Some(context));

    let shown = err.context.as_ref().unwrap().to_string();
    assert!(shown.starts_with("at 3..9"));
    assert!(shown.contains("in parse"));
    assert!(shown.contains("in translate en -> ja"));
}

#[test]
fn as_parse_failure_only_for_parse_errors() {
    assert!(Error::unsupported_language("xx").as_parse_failure().is_none());
    let err = Error::parse(ParseFailure::new("en", "x", "no action keyword found"));
    assert_eq!(err.as_parse_failure().map(|f| f.reason.as_str()), Some("no action keyword found"));
}
