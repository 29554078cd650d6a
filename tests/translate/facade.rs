//! Tests for the crate-root functions over the global engine.

use polyphrase::{ActionType, Region, SemanticRole, SemanticValue};

#[test]
fn free_functions_share_one_engine() {
    let node = polyphrase::parse("toggle .active", "en").unwrap();
    assert_eq!(node.action, ActionType::Toggle);
    assert_eq!(polyphrase::render(&node, "es").unwrap(), "alternar .active");
    assert_eq!(polyphrase::translate("toggle .active", "en", "es").unwrap(), "alternar .active");
    assert!(polyphrase::can_parse("alternar .active", "es").can_parse);
}

#[test]
fn explicit_helpers() {
    let explicit = polyphrase::to_explicit("wait 2s", "en").unwrap();
    assert_eq!(explicit, "[wait value:2s]");
    let node = polyphrase::from_explicit(&explicit).unwrap();
    assert_eq!(node.source_language, polyphrase::EXPLICIT_LANGUAGE);
    assert_eq!(node.role(SemanticRole::LiteralValue), Some(&SemanticValue::duration_ms(2000)));
    assert_eq!(polyphrase::render_explicit(&node), explicit);
}

#[test]
fn language_queries() {
    assert_eq!(polyphrase::supported_languages().len(), 13);
    assert!(polyphrase::is_language_supported("tr"));
    assert!(!polyphrase::is_language_supported("xx"));
    let detected = polyphrase::detect_languages("クリックしたら .active を 切り替え");
    assert!(detected.contains(&"ja".to_string()));
    assert_eq!(polyphrase::optimal_region(&["ja", "ko"]), Some(Region::EastAsian));
}

#[test]
fn tokenize_through_facade() {
    let stream = polyphrase::tokenize("toggle .active", "en").unwrap();
    assert_eq!(stream.len(), 2);
    assert!(polyphrase::tokenize("toggle", "xx").is_err());
}
