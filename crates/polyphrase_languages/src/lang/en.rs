//! English.

use polyphrase_foundation::{ActionType, DomEvent, Reference, SemanticRole};

use crate::idiom::EventForm;
use crate::normalize::Normalization;
use crate::profile::{LanguageProfile, MarkerPosition, WordOrder};

/// Builds the English profile.
#[must_use]
pub fn profile() -> LanguageProfile {
    use ActionType::{
        Add, Blur, Decrement, Focus, Hide, Increment, Log, Put, Remove, Send, Set, Show, Toggle,
        Wait,
    };
    use SemanticRole::{Destination, Filter, LiteralValue, Source};

    LanguageProfile::builder("en", "English")
        .word_order(WordOrder::Svo)
        .markers(MarkerPosition::Prepositional)
        .normalization(Normalization::Lowercase)
        .action(Toggle, &["toggle"])
        .action(Add, &["add"])
        .action(Remove, &["remove"])
        .action(Show, &["show"])
        .action(Hide, &["hide"])
        .action(Set, &["set"])
        .action(Put, &["put"])
        .action(Increment, &["increment"])
        .action(Decrement, &["decrement"])
        .action(Log, &["log"])
        .action(Send, &["send", "trigger"])
        .action(Wait, &["wait"])
        .action(Focus, &["focus"])
        .action(Blur, &["blur"])
        .on(&["on"])
        .not(&["not"])
        .event(DomEvent::Click, &["click"])
        .event(DomEvent::Input, &["input"])
        .event(DomEvent::Change, &["change"])
        .event(DomEvent::Submit, &["submit"])
        .event(DomEvent::Load, &["load"])
        .event(DomEvent::KeyDown, &["keydown"])
        .reference(Reference::Me, &["me", "myself"])
        .reference(Reference::It, &["it"])
        .reference(Reference::Result, &["result"])
        .particle(Destination, &["on", "to", "into"])
        .particle(Source, &["from"])
        .particle(LiteralValue, &["to", "by"])
        .particle(Filter, &["when", "if"])
        .marker_override(Add, Destination, &["to"])
        .marker_override(Put, Destination, &["into"])
        .marker_override(Send, Destination, &["to"])
        .marker_override(Set, LiteralValue, &["to"])
        .marker_overrides(&[Increment, Decrement], LiteralValue, &["by"])
        .suffix("ed", "")
        .suffix("d", "")
        .suffix("s", "")
        .event_form(EventForm::standard(30))
        .build()
}
