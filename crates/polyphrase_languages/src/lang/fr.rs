//! French.

use polyphrase_foundation::{ActionType, DomEvent, Reference, SemanticRole};

use crate::idiom::EventForm;
use crate::normalize::Normalization;
use crate::profile::{LanguageProfile, MarkerPosition, WordOrder};

/// Builds the French profile.
#[must_use]
pub fn profile() -> LanguageProfile {
    use ActionType::{
        Add, Blur, Decrement, Focus, Hide, Increment, Log, Put, Remove, Send, Set, Show, Toggle,
        Wait,
    };
    use SemanticRole::{Destination, Filter, LiteralValue, Source};

    LanguageProfile::builder("fr", "French")
        .word_order(WordOrder::Svo)
        .markers(MarkerPosition::Prepositional)
        .normalization(Normalization::FoldDiacritics)
        .action(Toggle, &["basculer", "bascule"])
        .action(Add, &["ajouter", "ajoute"])
        .action(Remove, &["supprimer", "retirer"])
        .action(Show, &["afficher", "montrer"])
        .action(Hide, &["cacher", "masquer"])
        .action(Set, &["définir"])
        .action(Put, &["mettre", "placer", "mets"])
        .action(Increment, &["incrémenter"])
        .action(Decrement, &["décrémenter"])
        .action(Log, &["journaliser", "consigner"])
        .action(Send, &["envoyer", "déclencher"])
        .action(Wait, &["attendre"])
        .action(Focus, &["focaliser"])
        .action(Blur, &["défocaliser"])
        .on(&["au", "lors de"])
        .not(&["pas", "non"])
        .event(DomEvent::Click, &["clic", "cliquer"])
        .event(DomEvent::Input, &["saisie"])
        .event(DomEvent::Change, &["changement"])
        .event(DomEvent::Submit, &["soumission"])
        .event(DomEvent::Load, &["chargement"])
        .event(DomEvent::KeyDown, &["touche"])
        .reference(Reference::Me, &["moi"])
        .reference(Reference::It, &["cela", "ça"])
        .reference(Reference::Result, &["résultat"])
        .particle(Destination, &["sur", "à", "dans"])
        .particle(Source, &["de", "depuis"])
        .particle(LiteralValue, &["à", "de", "par"])
        .particle(Filter, &["quand", "si"])
        .marker_override(Toggle, Destination, &["sur"])
        .marker_override(Add, Destination, &["à"])
        .marker_override(Put, Destination, &["dans"])
        .marker_override(Send, Destination, &["à"])
        .marker_override(Set, LiteralValue, &["à"])
        .marker_overrides(&[Increment, Decrement], LiteralValue, &["de", "par"])
        .marker_override(Remove, Source, &["de", "depuis"])
        .suffix("ant", "er")
        .suffix("ez", "er")
        .suffix("s", "re")
        .suffix("e", "er")
        .event_form(EventForm::standard(30))
        .build()
}
