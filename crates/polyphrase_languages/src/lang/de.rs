//! German.

use polyphrase_foundation::{ActionType, DomEvent, Reference, SemanticRole};

use crate::idiom::{BodyVariant, EventForm};
use crate::normalize::Normalization;
use crate::profile::{LanguageProfile, MarkerPosition, WordOrder};

/// Builds the German profile.
#[must_use]
pub fn profile() -> LanguageProfile {
    use ActionType::{
        Add, Blur, Decrement, Focus, Hide, Increment, Log, Put, Remove, Send, Set, Show, Toggle,
        Wait,
    };
    use SemanticRole::{Destination, Filter, LiteralValue, Source};

    LanguageProfile::builder("de", "German")
        .word_order(WordOrder::Svo)
        .markers(MarkerPosition::Prepositional)
        .normalization(Normalization::FoldDiacritics)
        .action(Toggle, &["umschalten", "wechseln"])
        .action(Add, &["hinzufügen"])
        .action(Remove, &["entfernen"])
        .action(Show, &["anzeigen", "zeigen"])
        .action(Hide, &["verbergen", "verstecken"])
        .action(Set, &["setzen", "festlegen"])
        .action(Put, &["legen", "einfügen"])
        .action(Increment, &["erhöhen"])
        .action(Decrement, &["verringern"])
        .action(Log, &["protokollieren"])
        .action(Send, &["senden", "auslösen"])
        .action(Wait, &["warten"])
        .action(Focus, &["fokussieren"])
        .action(Blur, &["defokussieren"])
        .on(&["bei", "beim"])
        .not(&["nicht"])
        .event(DomEvent::Click, &["klick", "klicken"])
        .event(DomEvent::Input, &["eingabe"])
        .event(DomEvent::Change, &["änderung"])
        .event(DomEvent::Submit, &["absenden"])
        .event(DomEvent::Load, &["laden"])
        .event(DomEvent::KeyDown, &["tastendruck"])
        .reference(Reference::Me, &["ich", "mich"])
        .reference(Reference::It, &["es"])
        .reference(Reference::Result, &["ergebnis"])
        .particle(Destination, &["auf", "zu", "in", "an"])
        .particle(Source, &["von", "aus"])
        .particle(LiteralValue, &["auf", "um"])
        .particle(Filter, &["wenn", "falls"])
        .marker_override(Toggle, Destination, &["auf"])
        .marker_override(Add, Destination, &["zu"])
        .marker_override(Put, Destination, &["in"])
        .marker_override(Send, Destination, &["an"])
        .marker_override(Set, LiteralValue, &["auf"])
        .marker_overrides(&[Increment, Decrement], LiteralValue, &["um"])
        .marker_override(Remove, Source, &["von", "aus"])
        // imperative `entferne`, participle `entfernt`
        .suffix("e", "en")
        .suffix("t", "en")
        .event_form(EventForm::standard(30))
        .body_variant(BodyVariant::VerbFinal { priority: 90 })
        .build()
}
