//! Language detection and regional bundles.
//!
//! Detection scans text for command and event vocabulary. Non-Latin
//! profiles match by substring; Latin profiles match whole words longer
//! than two characters to avoid false positives. English is the default
//! language of a script and is never reported.

use std::fmt;
use std::str::FromStr;

use polyphrase_foundation::Keyword;

use crate::profile::LanguageProfile;
use crate::registry::LanguageRegistry;

const DEFAULT_LANGUAGE: &str = "en";

/// A regional bundle of languages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    /// `en es pt fr de it`
    Western,
    /// `ja zh ko`
    EastAsian,
    /// `id vi`
    SoutheastAsian,
    /// All thirteen built-in languages.
    Priority,
}

impl Region {
    /// Regions from smallest to largest, the order [`optimal_region`] checks.
    pub const ALL: [Region; 4] = [
        Self::EastAsian,
        Self::SoutheastAsian,
        Self::Western,
        Self::Priority,
    ];

    /// Language codes in this region.
    #[must_use]
    pub const fn languages(self) -> &'static [&'static str] {
        match self {
            Self::Western => &["en", "es", "pt", "fr", "de", "it"],
            Self::EastAsian => &["ja", "zh", "ko"],
            Self::SoutheastAsian => &["id", "vi"],
            Self::Priority => &[
                "en", "es", "pt", "fr", "de", "it", "ja", "zh", "ko", "ar", "tr", "id", "vi",
            ],
        }
    }

    /// Bundle name (also the cargo feature name).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Western => "western",
            Self::EastAsian => "east-asian",
            Self::SoutheastAsian => "southeast-asian",
            Self::Priority => "priority",
        }
    }

    /// Returns true if `code` belongs to this region.
    #[must_use]
    pub fn contains(self, code: &str) -> bool {
        self.languages().contains(&code)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|region| region.name() == s)
            .ok_or_else(|| format!("unknown region: {s}"))
    }
}

/// Returns the smallest region covering every code, or `None` for an empty
/// set or a set no region covers.
#[must_use]
pub fn optimal_region<S: AsRef<str>>(languages: &[S]) -> Option<Region> {
    if languages.is_empty() {
        return None;
    }
    Region::ALL
        .iter()
        .copied()
        .find(|region| languages.iter().all(|code| region.contains(code.as_ref())))
}

/// Detects which registered non-default languages `text` uses, in
/// registry order.
#[must_use]
pub fn detect_languages(registry: &LanguageRegistry, text: &str) -> Vec<String> {
    registry
        .profiles()
        .filter(|profile| profile.code() != DEFAULT_LANGUAGE)
        .filter(|profile| mentions(profile, text))
        .map(|profile| profile.code().to_string())
        .collect()
}

fn mentions(profile: &LanguageProfile, text: &str) -> bool {
    let normalized = profile.normalize(text);
    let vocabulary = profile
        .keyword_entries()
        .filter(|(_, keyword)| matches!(keyword, Keyword::Action(_) | Keyword::Event(_)))
        .map(|(form, _)| form);

    if profile.uses_latin_script() {
        let words: Vec<&str> = normalized
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .collect();
        let mut vocabulary = vocabulary.filter(|form| form.chars().count() > 2);
        vocabulary.any(|form| contains_phrase(&words, form))
    } else {
        let mut vocabulary = vocabulary;
        vocabulary.any(|form| normalized.contains(form))
    }
}

fn contains_phrase(words: &[&str], phrase: &str) -> bool {
    let parts: Vec<&str> = phrase.split(' ').collect();
    words.windows(parts.len()).any(|window| window == parts.as_slice())
}
