//! Text normalization applied to both profile vocabulary and input words.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// How a profile normalizes words before lookup.
///
/// Every variant starts from NFC + lowercase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Normalization {
    /// NFC + lowercase only. Used where diacritics are distinctive
    /// (Vietnamese tones) or absent (CJK, Hangul).
    #[default]
    Lowercase,
    /// Additionally drop combining marks after NFD and map dotless `ı` to `i`,
    /// so `añadir`/`anadir` and `tıkla`/`tikla` look the same.
    FoldDiacritics,
    /// Strip harakat and tatweel, fold hamza-carrying alef forms to bare alef.
    Arabic,
}

impl Normalization {
    /// Normalizes `text`.
    #[must_use]
    pub fn apply(self, text: &str) -> String {
        let lowered: String = text.nfc().collect::<String>().to_lowercase();
        match self {
            Self::Lowercase => lowered,
            Self::FoldDiacritics => lowered
                .nfd()
                .filter(|c| !is_combining_mark(*c))
                .map(|c| if c == 'ı' { 'i' } else { c })
                .nfc()
                .collect(),
            Self::Arabic => lowered
                .chars()
                .filter(|c| !is_arabic_diacritic(*c))
                .map(fold_alef)
                .collect(),
        }
    }
}

fn is_arabic_diacritic(c: char) -> bool {
    matches!(c, '\u{064B}'..='\u{065F}' | '\u{0670}' | '\u{0640}')
}

fn fold_alef(c: char) -> char {
    match c {
        '\u{0622}' | '\u{0623}' | '\u{0625}' => '\u{0627}',
        other => other,
    }
}
