//! Portuguese.

use polyphrase_foundation::{ActionType, DomEvent, Reference, SemanticRole};

use crate::idiom::EventForm;
use crate::normalize::Normalization;
use crate::profile::{LanguageProfile, MarkerPosition, WordOrder};

/// Builds the Portuguese profile.
#[must_use]
pub fn profile() -> LanguageProfile {
    use ActionType::{
        Add, Blur, Decrement, Focus, Hide, Increment, Log, Put, Remove, Send, Set, Show, Toggle,
        Wait,
    };
    use SemanticRole::{Destination, Filter, LiteralValue, Source};

    LanguageProfile::builder("pt", "Portuguese")
        .word_order(WordOrder::Svo)
        .markers(MarkerPosition::Prepositional)
        .normalization(Normalization::FoldDiacritics)
        .action(Toggle, &["alternar"])
        .action(Add, &["adicionar", "acrescentar"])
        .action(Remove, &["remover"])
        .action(Show, &["mostrar", "exibir"])
        .action(Hide, &["esconder", "ocultar"])
        .action(Set, &["definir"])
        .action(Put, &["colocar"])
        .action(Increment, &["incrementar"])
        .action(Decrement, &["decrementar"])
        .action(Log, &["registrar"])
        .action(Send, &["enviar", "disparar"])
        .action(Wait, &["aguardar", "esperar"])
        .action(Focus, &["focar"])
        .action(Blur, &["desfocar"])
        .on(&["ao"])
        .not(&["não"])
        .event(DomEvent::Click, &["clique", "clicar"])
        .event(DomEvent::Input, &["entrada"])
        .event(DomEvent::Change, &["mudança", "alteração"])
        .event(DomEvent::Submit, &["envio"])
        .event(DomEvent::Load, &["carregamento"])
        .event(DomEvent::KeyDown, &["tecla"])
        .reference(Reference::Me, &["eu", "mim"])
        .reference(Reference::It, &["isso", "ele"])
        .reference(Reference::Result, &["resultado"])
        .particle(Destination, &["em", "no", "na", "para"])
        .particle(Source, &["de", "do", "da"])
        .particle(LiteralValue, &["para", "por", "como"])
        .particle(Filter, &["quando", "se"])
        .marker_overrides(&[Toggle, Add, Put], Destination, &["em", "no", "na"])
        .marker_override(Send, Destination, &["para"])
        .marker_override(Set, LiteralValue, &["para", "como"])
        .marker_overrides(&[Increment, Decrement], LiteralValue, &["por"])
        .marker_override(Remove, Source, &["de", "do", "da"])
        .suffix("ando", "ar")
        .suffix("endo", "er")
        .suffix("e", "ar")
        .suffix("a", "ar")
        .suffix("a", "er")
        .suffix("e", "er")
        .event_form(EventForm::standard(30))
        .build()
}
