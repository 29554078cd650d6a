//! Tests for the explicit syntax and its round trip.

use polyphrase_foundation::{
    ActionType, ErrorKind, FilterExpr, Selector, SemanticNode, SemanticRole, SemanticValue,
};
use polyphrase_parser::{EXPLICIT_LANGUAGE, Engine, ParserConfig};
use proptest::prelude::*;

// =============================================================================
// Conversions
// =============================================================================

#[test]
fn native_to_explicit() {
    let engine = Engine::builtin();
    assert_eq!(
        engine.to_explicit("on click toggle .active on #button", "en").unwrap(),
        "[toggle event:click patient:.active destination:#button]"
    );
    assert_eq!(
        engine.to_explicit("#menu を .hidden ない なら 表示", "ja").unwrap(),
        "[show target:#menu filter:!.hidden]"
    );
}

#[test]
fn explicit_input_in_any_language() {
    let engine = Engine::builtin();
    let node = engine.parse("[wait value:2s]", "ko").unwrap();
    assert_eq!(node.action, ActionType::Wait);
    assert_eq!(node.source_language, "ko");

    let node = engine.from_explicit("[wait value:2s]").unwrap();
    assert_eq!(node.source_language, EXPLICIT_LANGUAGE);
}

#[test]
fn strict_config_refuses_explicit_input() {
    let engine = Engine::builtin().with_config(ParserConfig::strict());
    let err = engine.parse("[toggle patient:.a]", "en").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Parse(ref f) if f.reason == "explicit syntax disabled"));
    assert!(engine.from_explicit("[toggle patient:.a]").is_ok());
}

#[test]
fn malformed_explicit_input() {
    let engine = Engine::builtin();
    for input in ["[toggle", "[jump patient:.a]", "[toggle patient:.a patient:.b]", "[put value:1]"] {
        assert!(engine.from_explicit(input).is_err(), "{input}");
    }
}

// =============================================================================
// Round Trip
// =============================================================================

fn selector() -> impl Strategy<Value = SemanticValue> {
    "[#.][a-z][a-z0-9-]{0,8}".prop_map(|text| SemanticValue::selector(&text))
}

fn string() -> impl Strategy<Value = SemanticValue> {
    "[a-zA-Z0-9 \"\\\\:\\]]{0,12}".prop_map(SemanticValue::string)
}

fn number() -> impl Strategy<Value = SemanticValue> {
    (-1000i32..1000).prop_map(|n| SemanticValue::number(f64::from(n)))
}

fn duration() -> impl Strategy<Value = SemanticValue> {
    (0u64..100_000).prop_map(SemanticValue::duration_ms)
}

fn variable() -> impl Strategy<Value = SemanticValue> {
    ":[a-z]{1,6}".prop_map(SemanticValue::identifier)
}

fn filter() -> impl Strategy<Value = SemanticValue> {
    ("[#.][a-z]{1,6}", any::<bool>()).prop_map(|(text, negated)| {
        let mut filter = FilterExpr::Matches(Selector::parse(&text).unwrap());
        if negated {
            filter = filter.negate();
        }
        SemanticValue::Filter(filter)
    })
}

fn node() -> impl Strategy<Value = SemanticNode> {
    prop_oneof![
        (selector(), proptest::option::of(selector())).prop_map(|(patient, destination)| {
            let node = SemanticNode::new(ActionType::Toggle).with_role(SemanticRole::Patient, patient);
            match destination {
                Some(d) => node.with_role(SemanticRole::Destination, d),
                None => node,
            }
        }),
        (string(), selector()).prop_map(|(value, destination)| {
            SemanticNode::new(ActionType::Put)
                .with_role(SemanticRole::LiteralValue, value)
                .with_role(SemanticRole::Destination, destination)
        }),
        (variable(), number()).prop_map(|(patient, value)| {
            SemanticNode::new(ActionType::Set)
                .with_role(SemanticRole::Patient, patient)
                .with_role(SemanticRole::LiteralValue, value)
        }),
        duration().prop_map(|value| {
            SemanticNode::new(ActionType::Wait).with_role(SemanticRole::LiteralValue, value)
        }),
        (selector(), filter()).prop_map(|(target, filter)| {
            SemanticNode::new(ActionType::Hide)
                .with_role(SemanticRole::SelectorTarget, target)
                .with_role(SemanticRole::Filter, filter)
        }),
    ]
}

proptest! {
    #[test]
    fn explicit_round_trip(node in node()) {
        let engine = Engine::global();
        let text = engine.render_explicit(&node);
        let parsed = engine.from_explicit(&text).unwrap();
        prop_assert!(parsed.same_meaning(&node), "{} -> {:?}", text, parsed);
    }
}
