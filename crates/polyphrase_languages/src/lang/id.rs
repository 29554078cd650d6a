//! Indonesian.

use polyphrase_foundation::{ActionType, DomEvent, Reference, SemanticRole};

use crate::idiom::EventForm;
use crate::normalize::Normalization;
use crate::profile::{LanguageProfile, MarkerPosition, WordOrder};

/// Builds the Indonesian profile.
#[must_use]
pub fn profile() -> LanguageProfile {
    use ActionType::{
        Add, Blur, Decrement, Focus, Hide, Increment, Log, Put, Remove, Send, Set, Show, Toggle,
        Wait,
    };
    use SemanticRole::{Destination, Filter, LiteralValue, Source};

    LanguageProfile::builder("id", "Indonesian")
        .word_order(WordOrder::Svo)
        .markers(MarkerPosition::Prepositional)
        .normalization(Normalization::FoldDiacritics)
        .action(Toggle, &["alihkan", "alih"])
        .action(Add, &["tambahkan", "tambah"])
        .action(Remove, &["hapus", "buang"])
        .action(Show, &["tampilkan"])
        .action(Hide, &["sembunyikan"])
        .action(Set, &["atur", "tetapkan"])
        .action(Put, &["taruh", "letakkan"])
        .action(Increment, &["naikkan"])
        .action(Decrement, &["kurangi", "turunkan"])
        .action(Log, &["catat"])
        .action(Send, &["kirim", "picu"])
        .action(Wait, &["tunggu"])
        .action(Focus, &["fokuskan"])
        .action(Blur, &["kaburkan"])
        .on(&["saat", "ketika"])
        .not(&["bukan", "tidak"])
        .event(DomEvent::Click, &["klik"])
        .event(DomEvent::Input, &["masukan"])
        .event(DomEvent::Change, &["perubahan"])
        .event(DomEvent::Submit, &["pengiriman"])
        .event(DomEvent::Load, &["muat"])
        .event(DomEvent::KeyDown, &["tekan"])
        .reference(Reference::Me, &["saya", "aku"])
        .reference(Reference::It, &["itu", "ia"])
        .reference(Reference::Result, &["hasil"])
        .particle(Destination, &["pada", "di", "ke"])
        .particle(Source, &["dari"])
        .particle(LiteralValue, &["menjadi", "sebesar"])
        .particle(Filter, &["jika", "kalau"])
        .marker_override(Toggle, Destination, &["pada"])
        .marker_overrides(&[Add, Put, Send], Destination, &["ke"])
        .marker_override(Set, LiteralValue, &["menjadi"])
        .marker_overrides(&[Increment, Decrement], LiteralValue, &["sebesar"])
        .marker_override(Remove, Source, &["dari"])
        .suffix("lah", "")
        .suffix("kan", "")
        .prefix("di", "")
        .event_form(EventForm::standard(30))
        .build()
}
