//! Japanese.
//!
//! Operands carry postpositional particles and the verb comes last. Event
//! handlers have three synonymous introductions: conditional
//! (`クリックしたら`), instrumental (`クリック で`), and temporal
//! (`クリック 時`).

use polyphrase_foundation::{ActionType, DomEvent, Reference, SemanticRole};

use crate::idiom::{EventForm, EventFormKind};
use crate::normalize::Normalization;
use crate::profile::{LanguageProfile, MarkerPosition, Script, WordOrder};

/// Builds the Japanese profile.
#[must_use]
pub fn profile() -> LanguageProfile {
    use ActionType::{
        Add, Blur, Decrement, Focus, Hide, Increment, Log, Put, Remove, Send, Set, Show, Toggle,
        Wait,
    };
    use SemanticRole::{Destination, EventName, Filter, LiteralValue, Patient, Source};

    LanguageProfile::builder("ja", "Japanese")
        .word_order(WordOrder::Sov)
        .markers(MarkerPosition::Postpositional)
        .script(Script::Compact)
        .normalization(Normalization::Lowercase)
        .action(Toggle, &["切り替え", "トグル", "切り替える"])
        .action(Add, &["追加"])
        .action(Remove, &["削除"])
        .action(Show, &["表示"])
        .action(Hide, &["非表示", "隠す"])
        .action(Set, &["設定"])
        .action(Put, &["挿入", "入れる"])
        .action(Increment, &["増加", "増やす"])
        .action(Decrement, &["減少", "減らす"])
        .action(Log, &["ログ", "出力"])
        .action(Send, &["送信", "発火"])
        .action(Wait, &["待機", "待つ"])
        .action(Focus, &["フォーカス"])
        .action(Blur, &["フォーカス解除"])
        .not(&["ない"])
        .event(DomEvent::Click, &["クリック"])
        .event(DomEvent::Input, &["入力"])
        .event(DomEvent::Change, &["変更"])
        .event(DomEvent::Submit, &["提出"])
        .event(DomEvent::Load, &["読み込み", "ロード"])
        .event(DomEvent::KeyDown, &["キー押下"])
        .reference(Reference::Me, &["私", "自分"])
        .reference(Reference::It, &["それ"])
        .reference(Reference::Result, &["結果"])
        .particle(Patient, &["を"])
        .particle(Destination, &["に", "へ"])
        .particle(Source, &["から"])
        .particle(LiteralValue, &["に", "だけ"])
        .particle(Filter, &["なら", "の場合"])
        .particle(EventName, &["で", "時", "とき"])
        .marker_override(Put, LiteralValue, &["を"])
        .marker_override(Set, LiteralValue, &["に"])
        .marker_overrides(&[Increment, Decrement], LiteralValue, &["だけ"])
        .marker_override(Wait, LiteralValue, &[])
        // longest endings first; the event-marking ones double as
        // conditional/temporal markers
        .suffix("してください", "")
        .marking_suffix("したら", EventName)
        .marking_suffix("すると", EventName)
        .marking_suffix("した時", EventName)
        .suffix("します", "")
        .suffix("して", "")
        .suffix("した", "")
        .suffix("する", "")
        .suffix("しろ", "")
        .event_form(
            EventForm::new(EventFormKind::Conditional, 30)
                .event()
                .fused(&["したら", "すると", "した時"]),
        )
        .event_form(EventForm::new(EventFormKind::Instrumental, 20).event().marker(&["で"]))
        .event_form(EventForm::new(EventFormKind::Temporal, 10).event().marker(&["時", "とき"]))
        .build()
}
