//! Tests for native renderings.

use polyphrase_foundation::ErrorKind;
use polyphrase_parser::Engine;

fn render(explicit: &str, language: &str) -> String {
    let engine = Engine::builtin();
    let node = engine.from_explicit(explicit).unwrap();
    engine.render(&node, language).unwrap()
}

const HANDLER: &str = "[toggle event:click patient:.active destination:#button]";

// =============================================================================
// Word Order
// =============================================================================

#[test]
fn english_verb_first() {
    assert_eq!(render(HANDLER, "en"), "on click toggle .active on #button");
    assert_eq!(render("[put value:\"hi\" destination:#out]", "en"), "put \"hi\" into #out");
}

#[test]
fn arabic_verb_first() {
    assert_eq!(render(HANDLER, "ar"), "عند النقر بدّل .active على #button");
    assert_eq!(render("[toggle patient:.active]", "ar"), "بدّل .active");
}

#[test]
fn chinese_standard_body() {
    assert_eq!(render(HANDLER, "zh"), "当 点击 时 切换 .active 在 #button");
}

#[test]
fn korean_verb_final_with_fused_event() {
    assert_eq!(render(HANDLER, "ko"), "클릭하면 .active 를 #button 에 토글");
}

#[test]
fn turkish_verb_final() {
    assert_eq!(render(HANDLER, "tr"), "tıklama olduğunda .active #button üzerinde değiştir");
}

// =============================================================================
// Markers and Negation
// =============================================================================

#[test]
fn negation_follows_marker_position() {
    let explicit = "[show target:#menu filter:!.hidden]";
    assert_eq!(render(explicit, "en"), "show #menu when not .hidden");
    assert_eq!(render(explicit, "ja"), "#menu を .hidden ない なら 表示");
}

#[test]
fn double_negation_cancels() {
    assert_eq!(render("[show target:#menu filter:!!.hidden]", "en"), "show #menu when .hidden");
}

#[test]
fn unmarked_wait() {
    assert_eq!(render("[wait value:2s]", "ja"), "2s 待機");
    assert_eq!(render("[wait value:2s]", "en"), "wait 2s");
}

#[test]
fn triple_negation_is_one_negation() {
    let engine = Engine::builtin();
    let node = engine.from_explicit("[show target:#m filter:!!!.a]").unwrap();
    assert_eq!(engine.render_explicit(&node), "[show target:#m filter:!.a]");
    for language in engine.supported_languages() {
        let text = engine.render(&node, language).unwrap();
        let parsed = engine.parse(&text, language).unwrap();
        assert!(parsed.same_meaning(&node), "{language}: {text}");
    }
}

// =============================================================================
// Values Spelled Like Vocabulary
// =============================================================================

#[test]
fn keyword_valued_identifiers_render_explicitly() {
    assert_eq!(render("[log patient:toggle]", "en"), "[log patient:toggle]");
    assert_eq!(render("[log patient:on]", "en"), "[log patient:on]");
    assert_eq!(render("[log patient:en]", "es"), "[log patient:en]");
    assert_eq!(render("[log patient:toggle]", "es"), "registrar toggle");
}

#[test]
fn identifiers_the_scanner_splits_render_explicitly() {
    let engine = Engine::builtin();
    let node = engine.from_explicit("[log patient:foo:bar]").unwrap();
    for language in engine.supported_languages() {
        let text = engine.render(&node, language).unwrap();
        assert_eq!(text, "[log patient:foo:bar]", "{language}");
        assert!(engine.parse(&text, language).unwrap().same_meaning(&node));
    }
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn unsupported_language() {
    let engine = Engine::builtin();
    let node = engine.from_explicit("[toggle patient:.a]").unwrap();
    let err = engine.render(&node, "xx").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnsupportedLanguage { .. }));
}

#[test]
fn incomplete_node() {
    let engine = Engine::builtin();
    let node = polyphrase_foundation::SemanticNode::new(polyphrase_foundation::ActionType::Put);
    let err = engine.render(&node, "en").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Render { ref language, .. } if language == "en"));
}
