//! Tests for parsing native commands.

use polyphrase_foundation::{
    ActionType, DomEvent, FilterExpr, NodeKind, Selector, SemanticNode, SemanticRole, SemanticValue,
};
use polyphrase_parser::Engine;

fn parse(input: &str, language: &str) -> SemanticNode {
    Engine::builtin()
        .parse(input, language)
        .unwrap_or_else(|err| panic!("{language}: {err}"))
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// =============================================================================
// Verb-First Languages
// =============================================================================

#[test]
fn english_command() {
    let node = parse("toggle .active on #button", "en");
    assert_eq!(node.action, ActionType::Toggle);
    assert_eq!(node.kind, NodeKind::Command);
    assert_eq!(node.role(SemanticRole::Patient), Some(&SemanticValue::selector(".active")));
    assert_eq!(node.role(SemanticRole::Destination), Some(&SemanticValue::selector("#button")));
    assert_eq!(node.source_language, "en");
    assert!(close(node.confidence, 1.0));
}

#[test]
fn english_event_handler() {
    let node = parse("on click toggle .active on #button", "en");
    assert_eq!(node.kind, NodeKind::EventHandler);
    assert_eq!(node.event().and_then(SemanticValue::as_event), Some(DomEvent::Click));
}

#[test]
fn english_literals() {
    let node = parse("put \"hello\" into #out", "en");
    assert_eq!(node.role(SemanticRole::LiteralValue), Some(&SemanticValue::string("hello")));

    let node = parse("set :count to 5", "en");
    assert_eq!(node.role(SemanticRole::Patient), Some(&SemanticValue::identifier(":count")));
    assert_eq!(node.role(SemanticRole::LiteralValue), Some(&SemanticValue::number(5.0)));

    let node = parse("wait 500ms", "en");
    assert_eq!(node.role(SemanticRole::LiteralValue), Some(&SemanticValue::duration_ms(500)));
}

#[test]
fn english_negated_filter() {
    let node = parse("show #menu when not .hidden", "en");
    let hidden = FilterExpr::Matches(Selector::parse(".hidden").unwrap()).negate();
    assert_eq!(node.role(SemanticRole::Filter), Some(&SemanticValue::Filter(hidden)));
}

#[test]
fn arabic_verb_initial() {
    let node = parse("بدّل .active على #button", "ar");
    assert_eq!(node.action, ActionType::Toggle);
    assert_eq!(node.role(SemanticRole::Destination), Some(&SemanticValue::selector("#button")));
}

#[test]
fn arabic_fused_event_prefix() {
    let node = parse("بالنقر بدّل .active", "ar");
    assert_eq!(node.kind, NodeKind::EventHandler);
    assert_eq!(node.event().and_then(SemanticValue::as_event), Some(DomEvent::Click));
}

// =============================================================================
// Verb-Final Languages
// =============================================================================

#[test]
fn japanese_event_forms_agree() {
    let conditional = parse("クリックしたら .active を 切り替え", "ja");
    let instrumental = parse("クリック で .active を 切り替え", "ja");
    let temporal = parse("クリック 時 .active を 切り替え", "ja");
    assert_eq!(conditional.kind, NodeKind::EventHandler);
    assert!(conditional.same_meaning(&instrumental));
    assert!(conditional.same_meaning(&temporal));
    assert_eq!(conditional.role(SemanticRole::Patient), Some(&SemanticValue::selector(".active")));
}

#[test]
fn japanese_run_together() {
    let spaced = parse(".active を #button に 切り替え", "ja");
    let compact = parse(".activeを#buttonに切り替え", "ja");
    assert!(spaced.same_meaning(&compact));
    assert_eq!(compact.role(SemanticRole::Destination), Some(&SemanticValue::selector("#button")));
}

#[test]
fn japanese_marked_roles_reorder() {
    let canonical = parse(".active を #button に 切り替え", "ja");
    let swapped = parse("#button に .active を 切り替え", "ja");
    assert!(canonical.same_meaning(&swapped));
    assert!(swapped.confidence < canonical.confidence);
}

#[test]
fn turkish_converb_event() {
    let node = parse("tıklayınca .active değiştir", "tr");
    assert_eq!(node.kind, NodeKind::EventHandler);
    assert_eq!(node.action, ActionType::Toggle);
}

#[test]
fn korean_particles() {
    let node = parse(".active 를 #button 에 토글", "ko");
    assert_eq!(node.role(SemanticRole::Patient), Some(&SemanticValue::selector(".active")));
    assert_eq!(node.role(SemanticRole::Destination), Some(&SemanticValue::selector("#button")));
}

// =============================================================================
// Free Functions
// =============================================================================

#[test]
fn global_engine_matches_builtin() {
    let global = polyphrase_parser::parse("toggle .active", "en").unwrap();
    let local = parse("toggle .active", "en");
    assert_eq!(global, local);
}
