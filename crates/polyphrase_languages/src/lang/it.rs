//! Italian.

use polyphrase_foundation::{ActionType, DomEvent, Reference, SemanticRole};

use crate::idiom::EventForm;
use crate::normalize::Normalization;
use crate::profile::{LanguageProfile, MarkerPosition, WordOrder};

/// Builds the Italian profile.
#[must_use]
pub fn profile() -> LanguageProfile {
    use ActionType::{
        Add, Blur, Decrement, Focus, Hide, Increment, Log, Put, Remove, Send, Set, Show, Toggle,
        Wait,
    };
    use SemanticRole::{Destination, Filter, LiteralValue, Source};

    LanguageProfile::builder("it", "Italian")
        .word_order(WordOrder::Svo)
        .markers(MarkerPosition::Prepositional)
        .normalization(Normalization::FoldDiacritics)
        .action(Toggle, &["commutare", "alternare"])
        .action(Add, &["aggiungere"])
        .action(Remove, &["rimuovere", "eliminare"])
        .action(Show, &["mostrare"])
        .action(Hide, &["nascondere"])
        .action(Set, &["impostare"])
        .action(Put, &["mettere", "inserire"])
        .action(Increment, &["incrementare"])
        .action(Decrement, &["decrementare"])
        .action(Log, &["registrare"])
        .action(Send, &["inviare", "innescare"])
        .action(Wait, &["aspettare", "attendere"])
        .action(Focus, &["focalizzare"])
        .action(Blur, &["sfocare"])
        .on(&["al"])
        .not(&["non"])
        .event(DomEvent::Click, &["clic", "click"])
        .event(DomEvent::Input, &["inserimento"])
        .event(DomEvent::Change, &["cambiamento"])
        .event(DomEvent::Submit, &["invio"])
        .event(DomEvent::Load, &["caricamento"])
        .event(DomEvent::KeyDown, &["tasto"])
        .reference(Reference::Me, &["io", "me"])
        .reference(Reference::It, &["esso", "ciò"])
        .reference(Reference::Result, &["risultato"])
        .particle(Destination, &["su", "a", "in"])
        .particle(Source, &["da"])
        .particle(LiteralValue, &["a", "di"])
        .particle(Filter, &["quando", "se"])
        .marker_override(Toggle, Destination, &["su"])
        .marker_override(Add, Destination, &["a"])
        .marker_override(Put, Destination, &["in"])
        .marker_override(Send, Destination, &["a"])
        .marker_override(Set, LiteralValue, &["a"])
        .marker_overrides(&[Increment, Decrement], LiteralValue, &["di"])
        .marker_override(Remove, Source, &["da"])
        .suffix("ando", "are")
        .suffix("endo", "ere")
        .suffix("a", "are")
        .suffix("i", "ere")
        .suffix("i", "ire")
        .event_form(EventForm::standard(30))
        .build()
}
