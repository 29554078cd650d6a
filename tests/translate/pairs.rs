//! Tests translating between every pair of built-in languages.

use polyphrase::{Engine, ErrorKind, SemanticNode};

const CORPUS: &[&str] = &[
    "[toggle patient:.active]",
    "[toggle event:click patient:.active destination:#button]",
    "[add patient:.highlight destination:#list]",
    "[remove patient:.item source:#list]",
    "[show target:#menu filter:!.hidden]",
    "[hide target:#menu filter:.open]",
    "[set patient::count value:5]",
    "[put value:\"hello\" destination:#out]",
    "[increment patient::count value:2]",
    "[wait value:2s]",
    "[send patient:\"refresh\" destination:#form]",
    "[focus target:#input]",
    "[log event:load patient:\"ready\"]",
];

fn node(explicit: &str) -> SemanticNode {
    Engine::global().from_explicit(explicit).unwrap()
}

// =============================================================================
// All Pairs
// =============================================================================

#[test]
fn every_pair_preserves_meaning() {
    let engine = Engine::builtin();
    let languages = engine.supported_languages();
    for explicit in CORPUS {
        let original = node(explicit);
        for from in &languages {
            let source = engine.render(&original, from).unwrap();
            for to in &languages {
                let target = engine
                    .translate(&source, from, to)
                    .unwrap_or_else(|err| panic!("{from} -> {to}: {source:?}: {err}"));
                let parsed = engine
                    .parse(&target, to)
                    .unwrap_or_else(|err| panic!("{from} -> {to}: {target:?}: {err}"));
                assert!(
                    parsed.same_meaning(&original),
                    "{from} -> {to}: {source:?} became {target:?}"
                );
            }
        }
    }
}

#[test]
fn translations_parse_in_the_target_language() {
    let engine = Engine::builtin();
    for (input, from, to) in [
        ("log alternar", "en", "es"),
        ("log en", "en", "es"),
        ("registrar toggle", "es", "en"),
        ("registrar :count", "es", "ja"),
    ] {
        let original = engine.parse(input, from).unwrap();
        let target = engine.translate(input, from, to).unwrap();
        let parsed = engine
            .parse(&target, to)
            .unwrap_or_else(|err| panic!("{from} -> {to}: {target:?}: {err}"));
        assert!(parsed.same_meaning(&original), "{from} -> {to}: {target:?}");
    }
    assert_eq!(engine.translate("log en", "en", "es").unwrap(), "[log patient:en]");
}

#[test]
fn same_language_translation_normalizes() {
    let engine = Engine::builtin();
    // inflected input comes back in display form
    assert_eq!(engine.translate("toggled .active", "en", "en").unwrap(), "toggle .active");
    assert_eq!(
        engine.translate("クリック で .active を 切り替え", "ja", "ja").unwrap(),
        engine.translate("クリックしたら .active を 切り替え", "ja", "ja").unwrap()
    );
}

// =============================================================================
// Specific Pairs
// =============================================================================

#[test]
fn english_to_arabic() {
    let engine = Engine::builtin();
    assert_eq!(engine.translate("toggle .active", "en", "ar").unwrap(), "بدّل .active");
}

#[test]
fn english_to_japanese() {
    let engine = Engine::builtin();
    assert_eq!(
        engine.translate("show #menu when not .hidden", "en", "ja").unwrap(),
        "#menu を .hidden ない なら 表示"
    );
}

#[test]
fn japanese_to_korean() {
    let engine = Engine::builtin();
    assert_eq!(
        engine.translate("クリックしたら .active を #button に 切り替え", "ja", "ko").unwrap(),
        "클릭하면 .active 를 #button 에 토글"
    );
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn unknown_target_is_reported_before_parsing() {
    let engine = Engine::builtin();
    let err = engine.translate("not a command", "en", "xx").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnsupportedLanguage { ref language } if language == "xx"));
}

#[test]
fn failures_record_the_translation() {
    let engine = Engine::builtin();
    let err = engine.translate("explode #everything", "en", "ja").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Parse(_)));
    let context = err.context.as_ref().unwrap();
    assert_eq!(context.stack, vec!["translate en -> ja".to_string()]);
}
