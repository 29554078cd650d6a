//! Vietnamese.
//!
//! Most keywords are two syllables written as separate words, so nearly
//! every command goes through phrase matching.

use polyphrase_foundation::{ActionType, DomEvent, Reference, SemanticRole};

use crate::idiom::EventForm;
use crate::normalize::Normalization;
use crate::profile::{LanguageProfile, MarkerPosition, WordOrder};

/// Builds the Vietnamese profile.
#[must_use]
pub fn profile() -> LanguageProfile {
    use ActionType::{
        Add, Blur, Decrement, Focus, Hide, Increment, Log, Put, Remove, Send, Set, Show, Toggle,
        Wait,
    };
    use SemanticRole::{Destination, Filter, LiteralValue, Source};

    LanguageProfile::builder("vi", "Vietnamese")
        .word_order(WordOrder::Svo)
        .markers(MarkerPosition::Prepositional)
        .normalization(Normalization::Lowercase)
        .action(Toggle, &["chuyển đổi", "bật tắt"])
        .action(Add, &["thêm"])
        .action(Remove, &["xóa", "xoá", "gỡ bỏ"])
        .action(Show, &["hiển thị", "hiện"])
        .action(Hide, &["ẩn"])
        .action(Set, &["đặt", "gán"])
        .action(Put, &["chèn"])
        .action(Increment, &["tăng"])
        .action(Decrement, &["giảm"])
        .action(Log, &["ghi"])
        .action(Send, &["gửi", "kích hoạt"])
        .action(Wait, &["chờ", "đợi"])
        .action(Focus, &["tập trung"])
        .action(Blur, &["bỏ tập trung"])
        .on(&["khi"])
        .not(&["không"])
        .event(DomEvent::Click, &["nhấp", "nhấn"])
        .event(DomEvent::Input, &["nhập"])
        .event(DomEvent::Change, &["thay đổi"])
        .event(DomEvent::Submit, &["nộp"])
        .event(DomEvent::Load, &["tải"])
        .event(DomEvent::KeyDown, &["phím"])
        .reference(Reference::Me, &["tôi"])
        .reference(Reference::It, &["nó"])
        .reference(Reference::Result, &["kết quả"])
        .particle(Destination, &["trên", "vào", "tới", "đến"])
        .particle(Source, &["từ"])
        .particle(LiteralValue, &["thành", "bởi"])
        .particle(Filter, &["nếu"])
        .marker_override(Toggle, Destination, &["trên"])
        .marker_overrides(&[Add, Put], Destination, &["vào"])
        .marker_override(Send, Destination, &["tới", "đến"])
        .marker_override(Set, LiteralValue, &["thành"])
        .marker_overrides(&[Increment, Decrement], LiteralValue, &["bởi"])
        .marker_override(Remove, Source, &["từ"])
        .event_form(EventForm::standard(30))
        .build()
}
