//! Tests that rendering then parsing in the same language is lossless.

use polyphrase_parser::Engine;

use crate::corpus::{CORPUS, corpus};

#[test]
fn every_language_round_trips_the_corpus() {
    let engine = Engine::builtin();
    for language in engine.supported_languages() {
        for (node, explicit) in corpus().iter().zip(CORPUS) {
            let text = engine.render(node, language).unwrap();
            let parsed = engine
                .parse(&text, language)
                .unwrap_or_else(|err| panic!("{language}: {explicit} rendered as {text:?}: {err}"));
            assert!(
                parsed.same_meaning(node),
                "{language}: {explicit} rendered as {text:?} parsed as {}",
                engine.render_explicit(&parsed)
            );
            assert_eq!(parsed.source_language, language);
        }
    }
}

#[test]
fn rendering_is_native() {
    let engine = Engine::builtin();
    for language in engine.supported_languages() {
        for node in corpus() {
            let text = engine.render(&node, language).unwrap();
            assert!(!text.starts_with('['), "{language}: {text}");
        }
    }
}

#[test]
fn rendered_confidence_meets_default_floor() {
    let engine = Engine::builtin();
    for language in engine.supported_languages() {
        for node in corpus() {
            let text = engine.render(&node, language).unwrap();
            assert!(engine.can_parse(&text, language).confidence >= 0.5, "{language}: {text}");
        }
    }
}

// =============================================================================
// Generated Nodes
// =============================================================================

mod generated {
    use polyphrase_foundation::{
        ActionType, DomEvent, FilterExpr, Literal, Reference, Selector, SemanticNode,
        SemanticRole, SemanticValue,
    };
    use polyphrase_languages::LanguageRegistry;
    use polyphrase_parser::Engine;
    use proptest::prelude::*;

    const LANGUAGES: [&str; 13] = [
        "en", "es", "pt", "fr", "de", "it", "ja", "zh", "ko", "ar", "tr", "id", "vi",
    ];

    /// Words explicit syntax can carry as a bare identifier.
    fn explicit_word(word: &str) -> bool {
        !word.is_empty()
            && !word.contains(|c: char| c.is_whitespace() || matches!(c, '[' | ']' | '"' | '\\'))
            && !word.starts_with(['@', '!'])
            && Selector::parse(word).is_none()
            && Literal::parse_numeric(word).is_none()
    }

    /// Every keyword and particle form of every built-in language.
    fn vocabulary() -> Vec<String> {
        let mut words = Vec::new();
        for profile in LanguageRegistry::builtin().profiles() {
            words.extend(profile.keyword_entries().map(|(form, _)| form.to_string()));
            for role in SemanticRole::ALL {
                words.extend(profile.particles(role).iter().map(|form| form.display.clone()));
            }
        }
        words.retain(|word| explicit_word(word));
        words.sort();
        words.dedup();
        words
    }

    fn selector() -> impl Strategy<Value = Selector> {
        "[#.][a-z][a-z0-9-]{0,8}".prop_filter_map("selector", |text| Selector::parse(&text))
    }

    fn identifier() -> impl Strategy<Value = SemanticValue> {
        prop_oneof![
            prop::sample::select(vocabulary()),
            "[a-z]{1,8}".prop_map(String::from),
            ":[a-z]{1,6}".prop_map(String::from),
            Just("foo:bar".to_string()),
        ]
        .prop_filter("explicit word", |word| explicit_word(word))
        .prop_map(SemanticValue::identifier)
    }

    fn reference() -> impl Strategy<Value = SemanticValue> {
        prop::sample::select(Reference::ALL.to_vec()).prop_map(SemanticValue::Reference)
    }

    fn number() -> impl Strategy<Value = SemanticValue> {
        (-200i32..200).prop_map(|n| SemanticValue::number(f64::from(n) / 2.0))
    }

    /// A filter wrapped in up to three negations, built without collapsing.
    fn filter() -> impl Strategy<Value = SemanticValue> {
        (selector(), 0usize..=3).prop_map(|(selector, negations)| {
            let mut filter = FilterExpr::Matches(selector);
            for _ in 0..negations {
                filter = FilterExpr::Not(Box::new(filter));
            }
            SemanticValue::Filter(filter)
        })
    }

    fn node() -> impl Strategy<Value = SemanticNode> {
        let body = prop_oneof![
            (selector(), proptest::option::of(selector())).prop_map(|(patient, destination)| {
                let node = SemanticNode::new(ActionType::Toggle)
                    .with_role(SemanticRole::Patient, SemanticValue::Selector(patient));
                match destination {
                    Some(d) => node.with_role(SemanticRole::Destination, SemanticValue::Selector(d)),
                    None => node,
                }
            }),
            (selector(), selector()).prop_map(|(patient, source)| {
                SemanticNode::new(ActionType::Remove)
                    .with_role(SemanticRole::Patient, SemanticValue::Selector(patient))
                    .with_role(SemanticRole::Source, SemanticValue::Selector(source))
            }),
            (selector(), filter()).prop_map(|(target, filter)| {
                SemanticNode::new(ActionType::Hide)
                    .with_role(SemanticRole::SelectorTarget, SemanticValue::Selector(target))
                    .with_role(SemanticRole::Filter, filter)
            }),
            prop_oneof![identifier(), reference(), number()].prop_map(|patient| {
                SemanticNode::new(ActionType::Log).with_role(SemanticRole::Patient, patient)
            }),
            (identifier(), number()).prop_map(|(patient, value)| {
                SemanticNode::new(ActionType::Set)
                    .with_role(SemanticRole::Patient, patient)
                    .with_role(SemanticRole::LiteralValue, value)
            }),
            (proptest::option::of(identifier()), proptest::option::of(number())).prop_map(
                |(patient, value)| {
                    let mut node = SemanticNode::new(ActionType::Increment);
                    if let Some(patient) = patient {
                        node = node.with_role(SemanticRole::Patient, patient);
                    }
                    if let Some(value) = value {
                        node = node.with_role(SemanticRole::LiteralValue, value);
                    }
                    node
                }
            ),
        ];
        (body, any::<bool>()).prop_map(|(node, on_click)| {
            if on_click {
                node.with_role(SemanticRole::EventName, SemanticValue::event(DomEvent::Click))
            } else {
                node
            }
        })
    }

    proptest! {
        #[test]
        fn render_then_parse_keeps_meaning(
            node in node(),
            language in prop::sample::select(LANGUAGES.to_vec()),
        ) {
            let engine = Engine::global();
            let text = engine.render(&node, language).unwrap();
            let parsed = engine.parse(&text, language);
            prop_assert!(parsed.is_ok(), "{}: {:?}: {:?}", language, text, parsed);
            let parsed = parsed.unwrap();
            prop_assert!(parsed.same_meaning(&node), "{}: {:?}", language, text);
        }

        #[test]
        fn translate_then_parse_keeps_meaning(
            node in node(),
            from in prop::sample::select(LANGUAGES.to_vec()),
            to in prop::sample::select(LANGUAGES.to_vec()),
        ) {
            let engine = Engine::global();
            let source = engine.render(&node, from).unwrap();
            let target = engine.translate(&source, from, to);
            prop_assert!(target.is_ok(), "{} -> {}: {:?}: {:?}", from, to, source, target);
            let target = target.unwrap();
            let parsed = engine.parse(&target, to);
            prop_assert!(parsed.is_ok(), "{} -> {}: {:?}: {:?}", from, to, target, parsed);
            prop_assert!(parsed.unwrap().same_meaning(&node), "{} -> {}: {:?}", from, to, target);
        }
    }
}
