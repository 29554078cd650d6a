//! Tests for parse failure diagnostics.

use polyphrase_foundation::{ActionType, Error, ErrorKind, ParseFailure};
use polyphrase_parser::Engine;

fn fail(input: &str, language: &str) -> Error {
    Engine::builtin().parse(input, language).unwrap_err()
}

fn failure(err: &Error) -> &ParseFailure {
    err.as_parse_failure().expect("parse failure")
}

// =============================================================================
// Reasons
// =============================================================================

#[test]
fn empty_input() {
    let err = fail("   ", "en");
    assert_eq!(failure(&err).reason, "empty input");
    assert_eq!(failure(&err).language, "en");
}

#[test]
fn no_action_keyword() {
    let err = fail(".active #button", "en");
    assert_eq!(failure(&err).reason, "no action keyword found");
    assert_eq!(failure(&err).best_action, None);
}

#[test]
fn no_pattern_matched_names_closest_action() {
    let err = fail("toggle .a .b .c", "en");
    let failure = failure(&err);
    assert_eq!(failure.reason, "no pattern matched");
    assert_eq!(failure.best_action, Some(ActionType::Toggle));
    assert!(failure.confidence > 0.0 && failure.confidence < 1.0);
    assert!(err.to_string().contains("closest: toggle"));
}

#[test]
fn missing_required_role() {
    let err = fail("put \"x\"", "en");
    assert_eq!(failure(&err).best_action, Some(ActionType::Put));
}

#[test]
fn words_of_another_language_do_not_parse() {
    let err = fail("toggle .active", "ja");
    assert_eq!(failure(&err).reason, "no action keyword found");
}

#[test]
fn unsupported_language() {
    let err = fail("toggle .active", "xx");
    assert!(matches!(err.kind, ErrorKind::UnsupportedLanguage { ref language } if language == "xx"));
}
