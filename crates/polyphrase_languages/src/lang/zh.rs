//! Chinese (Simplified).

use polyphrase_foundation::{ActionType, DomEvent, Reference, SemanticRole};

use crate::idiom::{BodyVariant, EventForm, EventFormKind};
use crate::normalize::Normalization;
use crate::profile::{LanguageProfile, MarkerPosition, Script, WordOrder};

/// Builds the Chinese profile.
#[must_use]
pub fn profile() -> LanguageProfile {
    use ActionType::{
        Add, Blur, Decrement, Focus, Hide, Increment, Log, Put, Remove, Send, Set, Show, Toggle,
        Wait,
    };
    use SemanticRole::{Destination, EventName, Filter, LiteralValue, Patient, Source};

    LanguageProfile::builder("zh", "Chinese")
        .word_order(WordOrder::Svo)
        .markers(MarkerPosition::Prepositional)
        .script(Script::Compact)
        .normalization(Normalization::Lowercase)
        .action(Toggle, &["切换"])
        .action(Add, &["添加"])
        .action(Remove, &["移除", "删除"])
        .action(Show, &["显示"])
        .action(Hide, &["隐藏"])
        .action(Set, &["设置"])
        .action(Put, &["放置", "放入"])
        .action(Increment, &["增加"])
        .action(Decrement, &["减少"])
        .action(Log, &["日志", "记录"])
        .action(Send, &["发送", "触发"])
        .action(Wait, &["等待"])
        .action(Focus, &["聚焦"])
        .action(Blur, &["失焦"])
        .on(&["当"])
        .not(&["不", "非"])
        .event(DomEvent::Click, &["点击"])
        .event(DomEvent::Input, &["输入"])
        .event(DomEvent::Change, &["改变", "变化"])
        .event(DomEvent::Submit, &["提交"])
        .event(DomEvent::Load, &["加载"])
        .event(DomEvent::KeyDown, &["按键"])
        .reference(Reference::Me, &["我"])
        .reference(Reference::It, &["它"])
        .reference(Reference::Result, &["结果"])
        .particle(Patient, &["把"])
        .particle(Destination, &["在", "到"])
        .particle(Source, &["从"])
        .particle(LiteralValue, &["为", "以"])
        .particle(Filter, &["如果"])
        .particle(EventName, &["时"])
        .marker_override(Toggle, Destination, &["在"])
        .marker_overrides(&[Add, Put, Send], Destination, &["到"])
        .marker_override(Set, LiteralValue, &["为"])
        .marker_overrides(&[Increment, Decrement], LiteralValue, &["以"])
        .marker_override(Remove, Source, &["从"])
        .event_form(
            EventForm::new(EventFormKind::Temporal, 30)
                .on()
                .event()
                .marker(&["时"]),
        )
        .event_form(EventForm::new(EventFormKind::Temporal, 20).event().marker(&["时"]))
        .body_variant(BodyVariant::ObjectFronted {
            marker: vec!["把".to_string()],
            priority: 90,
        })
        .build()
}
