//! Turkish.

use polyphrase_foundation::{ActionType, DomEvent, Reference, SemanticRole};

use crate::idiom::{EventForm, EventFormKind};
use crate::normalize::Normalization;
use crate::profile::{LanguageProfile, MarkerPosition, WordOrder};

/// Builds the Turkish profile.
#[must_use]
pub fn profile() -> LanguageProfile {
    use ActionType::{
        Add, Blur, Decrement, Focus, Hide, Increment, Log, Put, Remove, Send, Set, Show, Toggle,
        Wait,
    };
    use SemanticRole::{Destination, EventName, Filter, LiteralValue, Source};

    LanguageProfile::builder("tr", "Turkish")
        .word_order(WordOrder::Sov)
        .markers(MarkerPosition::Postpositional)
        .normalization(Normalization::FoldDiacritics)
        .action(Toggle, &["değiştir"])
        .action(Add, &["ekle"])
        .action(Remove, &["kaldır", "sil"])
        .action(Show, &["göster"])
        .action(Hide, &["gizle"])
        .action(Set, &["ayarla"])
        .action(Put, &["koy"])
        .action(Increment, &["arttır", "artır"])
        .action(Decrement, &["azalt"])
        .action(Log, &["kaydet"])
        .action(Send, &["gönder"])
        .action(Wait, &["bekle"])
        .action(Focus, &["odakla"])
        .action(Blur, &["odağı kaldır"])
        .not(&["değil"])
        .event(DomEvent::Click, &["tıklama", "tıkla"])
        .event(DomEvent::Input, &["giriş"])
        .event(DomEvent::Change, &["değişim"])
        .event(DomEvent::Submit, &["gönderim"])
        .event(DomEvent::Load, &["yükleme"])
        .event(DomEvent::KeyDown, &["tuş"])
        .reference(Reference::Me, &["ben", "beni"])
        .reference(Reference::It, &["o", "onu"])
        .reference(Reference::Result, &["sonuç"])
        .particle(Destination, &["üzerinde", "üzerine", "içine"])
        .particle(Source, &["içinden"])
        .particle(LiteralValue, &["olarak", "kadar"])
        .particle(Filter, &["ise"])
        .particle(EventName, &["olduğunda"])
        .marker_override(Toggle, Destination, &["üzerinde"])
        .marker_overrides(&[Add, Send], Destination, &["üzerine"])
        .marker_override(Put, Destination, &["içine"])
        .marker_override(Set, LiteralValue, &["olarak"])
        .marker_overrides(&[Increment, Decrement], LiteralValue, &["kadar"])
        .marker_override(Wait, LiteralValue, &[])
        // vowel-harmony variants of the converb `-(y)ınca`, buffered forms first
        .marking_suffix("yınca", EventName)
        .marking_suffix("yince", EventName)
        .marking_suffix("yunca", EventName)
        .marking_suffix("yünce", EventName)
        .marking_suffix("ınca", EventName)
        .marking_suffix("ince", EventName)
        .marking_suffix("unca", EventName)
        .marking_suffix("ünce", EventName)
        .suffix("mak", "")
        .suffix("mek", "")
        .event_form(
            EventForm::new(EventFormKind::Temporal, 30)
                .event()
                .marker(&["olduğunda"]),
        )
        .event_form(
            EventForm::new(EventFormKind::Conditional, 20)
                .event()
                .fused(&[
                    "yınca", "yince", "yunca", "yünce", "ınca", "ince", "unca", "ünce",
                ]),
        )
        .build()
}
