//! Arabic.
//!
//! Verb-initial. The definite article and clitic prefixes are stripped
//! before lookup; `بال` ("by the") fused onto an event word introduces an
//! event handler on its own.

use polyphrase_foundation::{ActionType, DomEvent, Reference, SemanticRole};

use crate::idiom::{EventForm, EventFormKind};
use crate::normalize::Normalization;
use crate::profile::{LanguageProfile, MarkerPosition, WordOrder};

/// Builds the Arabic profile.
#[must_use]
pub fn profile() -> LanguageProfile {
    use ActionType::{
        Add, Blur, Decrement, Focus, Hide, Increment, Log, Put, Remove, Send, Set, Show, Toggle,
        Wait,
    };
    use SemanticRole::{Destination, EventName, Filter, LiteralValue, Source};

    LanguageProfile::builder("ar", "Arabic")
        .word_order(WordOrder::Vso)
        .markers(MarkerPosition::Prepositional)
        .normalization(Normalization::Arabic)
        .action(Toggle, &["بدّل", "بدل"])
        .action(Add, &["أضف"])
        .action(Remove, &["أزل", "احذف"])
        .action(Show, &["أظهر"])
        .action(Hide, &["أخف"])
        .action(Set, &["عيّن"])
        .action(Put, &["ضع"])
        .action(Increment, &["زد"])
        .action(Decrement, &["أنقص"])
        .action(Log, &["سجل"])
        .action(Send, &["أرسل"])
        .action(Wait, &["انتظر"])
        .action(Focus, &["ركز"])
        .action(Blur, &["ألغ التركيز"])
        .on(&["عند"])
        .not(&["ليس", "لا"])
        .event(DomEvent::Click, &["النقر", "نقر"])
        .event(DomEvent::Input, &["الإدخال", "إدخال"])
        .event(DomEvent::Change, &["التغيير", "تغيير"])
        .event(DomEvent::Submit, &["الإرسال", "إرسال"])
        .event(DomEvent::Load, &["التحميل", "تحميل"])
        .event(DomEvent::KeyDown, &["الضغط", "ضغط"])
        .reference(Reference::Me, &["أنا"])
        .reference(Reference::It, &["هو"])
        .reference(Reference::Result, &["النتيجة"])
        .particle(Destination, &["على", "إلى", "في"])
        .particle(Source, &["من"])
        .particle(LiteralValue, &["إلى", "ب"])
        .particle(Filter, &["إذا", "عندما"])
        .marker_override(Toggle, Destination, &["على"])
        .marker_overrides(&[Add, Send], Destination, &["إلى"])
        .marker_override(Put, Destination, &["في"])
        .marker_override(Set, LiteralValue, &["إلى"])
        .marker_overrides(&[Increment, Decrement], LiteralValue, &["ب"])
        .marker_override(Remove, Source, &["من"])
        .marking_prefix("بال", EventName)
        .prefix("ال", "")
        .prefix("و", "")
        .suffix("وا", "")
        .event_form(EventForm::standard(30))
        .event_form(
            EventForm::new(EventFormKind::Instrumental, 20)
                .fused(&["بال"])
                .event(),
        )
        .build()
}
