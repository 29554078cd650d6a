//! Spanish.

use polyphrase_foundation::{ActionType, DomEvent, Reference, SemanticRole};

use crate::idiom::EventForm;
use crate::normalize::Normalization;
use crate::profile::{LanguageProfile, MarkerPosition, WordOrder};

/// Builds the Spanish profile.
#[must_use]
pub fn profile() -> LanguageProfile {
    use ActionType::{
        Add, Blur, Decrement, Focus, Hide, Increment, Log, Put, Remove, Send, Set, Show, Toggle,
        Wait,
    };
    use SemanticRole::{Destination, Filter, LiteralValue, Source};

    LanguageProfile::builder("es", "Spanish")
        .word_order(WordOrder::Svo)
        .markers(MarkerPosition::Prepositional)
        .normalization(Normalization::FoldDiacritics)
        .action(Toggle, &["alternar", "conmutar"])
        .action(Add, &["añadir", "agregar"])
        .action(Remove, &["quitar", "eliminar"])
        .action(Show, &["mostrar", "muestra"])
        .action(Hide, &["ocultar", "esconder"])
        .action(Set, &["establecer", "fijar"])
        .action(Put, &["poner", "colocar", "pon"])
        .action(Increment, &["incrementar", "aumentar"])
        .action(Decrement, &["decrementar", "disminuir"])
        .action(Log, &["registrar"])
        .action(Send, &["enviar", "disparar"])
        .action(Wait, &["esperar"])
        .action(Focus, &["enfocar"])
        .action(Blur, &["desenfocar"])
        .on(&["al"])
        .not(&["no"])
        .event(DomEvent::Click, &["clic", "hacer clic", "click"])
        .event(DomEvent::Input, &["entrada"])
        .event(DomEvent::Change, &["cambio"])
        .event(DomEvent::Submit, &["envío"])
        .event(DomEvent::Load, &["carga"])
        .event(DomEvent::KeyDown, &["tecla"])
        .reference(Reference::Me, &["yo", "mí"])
        .reference(Reference::It, &["ello", "eso"])
        .reference(Reference::Result, &["resultado"])
        .particle(Destination, &["en", "a", "sobre"])
        .particle(Source, &["de", "desde"])
        .particle(LiteralValue, &["a", "por"])
        .particle(Filter, &["cuando", "si"])
        .marker_override(Toggle, Destination, &["en"])
        .marker_override(Add, Destination, &["a"])
        .marker_override(Put, Destination, &["en"])
        .marker_override(Send, Destination, &["a"])
        .marker_override(Set, LiteralValue, &["a"])
        .marker_overrides(&[Increment, Decrement], LiteralValue, &["por"])
        .marker_override(Remove, Source, &["de", "desde"])
        // gerunds before the bare vowel endings they contain
        .suffix("ando", "ar")
        .suffix("iendo", "er")
        .suffix("iendo", "ir")
        .suffix("a", "ar")
        .suffix("e", "er")
        .suffix("e", "ir")
        .event_form(EventForm::standard(30))
        .build()
}
