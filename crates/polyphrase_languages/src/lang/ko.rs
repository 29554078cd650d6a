//! Korean.

use polyphrase_foundation::{ActionType, DomEvent, Reference, SemanticRole};

use crate::idiom::{EventForm, EventFormKind};
use crate::normalize::Normalization;
use crate::profile::{LanguageProfile, MarkerPosition, Script, WordOrder};

/// Builds the Korean profile.
#[must_use]
pub fn profile() -> LanguageProfile {
    use ActionType::{
        Add, Blur, Decrement, Focus, Hide, Increment, Log, Put, Remove, Send, Set, Show, Toggle,
        Wait,
    };
    use SemanticRole::{Destination, EventName, Filter, LiteralValue, Patient, Source};

    LanguageProfile::builder("ko", "Korean")
        .word_order(WordOrder::Sov)
        .markers(MarkerPosition::Postpositional)
        .script(Script::Compact)
        .normalization(Normalization::Lowercase)
        .action(Toggle, &["토글", "전환"])
        .action(Add, &["추가"])
        .action(Remove, &["제거", "삭제"])
        .action(Show, &["표시", "보이기"])
        .action(Hide, &["숨기기", "숨김"])
        .action(Set, &["설정"])
        .action(Put, &["넣기"])
        .action(Increment, &["증가"])
        .action(Decrement, &["감소"])
        .action(Log, &["로그", "기록"])
        .action(Send, &["전송", "보내기"])
        .action(Wait, &["대기"])
        .action(Focus, &["포커스"])
        .action(Blur, &["포커스해제"])
        .not(&["아닌", "아니"])
        .event(DomEvent::Click, &["클릭"])
        .event(DomEvent::Input, &["입력"])
        .event(DomEvent::Change, &["변경"])
        .event(DomEvent::Submit, &["제출"])
        .event(DomEvent::Load, &["로드"])
        .event(DomEvent::KeyDown, &["키누름"])
        .reference(Reference::Me, &["나", "내"])
        .reference(Reference::It, &["그것"])
        .reference(Reference::Result, &["결과"])
        .particle(Patient, &["를", "을"])
        .particle(Destination, &["에", "에게"])
        .particle(Source, &["에서"])
        .particle(LiteralValue, &["로", "으로", "만큼"])
        .particle(Filter, &["이면", "면"])
        .particle(EventName, &["시", "때"])
        .marker_override(Put, LiteralValue, &["를", "을"])
        .marker_override(Set, LiteralValue, &["로", "으로"])
        .marker_overrides(&[Increment, Decrement], LiteralValue, &["만큼"])
        .marker_override(Wait, LiteralValue, &[])
        .suffix("하십시오", "")
        .suffix("합니다", "")
        .suffix("하세요", "")
        .marking_suffix("할때", EventName)
        .marking_suffix("하면", EventName)
        .suffix("해요", "")
        .suffix("하기", "")
        .suffix("하다", "")
        .suffix("해", "")
        .event_form(
            EventForm::new(EventFormKind::Conditional, 30)
                .event()
                .fused(&["하면", "할때"]),
        )
        .event_form(EventForm::new(EventFormKind::Temporal, 20).event().marker(&["시", "때"]))
        .build()
}
