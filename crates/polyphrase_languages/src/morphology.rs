//! Affix-stripping rules that reduce inflected words to keyword lemmas.
//!
//! Rules are tried in declaration order and the first rule whose stripped
//! form is a keyword wins, so each language lists its longest or most
//! specific affixes first.

use polyphrase_foundation::SemanticRole;

/// Which end of the word an affix sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AffixPosition {
    /// Before the stem (Arabic `بال`).
    Prefix,
    /// After the stem (Japanese `したら`).
    Suffix,
}

/// One stripping rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MorphRule {
    /// The affix as declared.
    pub display: String,
    /// The normalized affix.
    pub affix: String,
    /// Where the affix sits.
    pub position: AffixPosition,
    /// Normalized text appended (suffix rules) or prepended (prefix rules)
    /// to the remaining stem.
    pub replacement: String,
    /// The role this affix marks, when it doubles as a fused role marker.
    pub marks: Option<SemanticRole>,
}

impl MorphRule {
    /// Strips the affix from a normalized word.
    ///
    /// Returns `None` if the word does not carry the affix or nothing
    /// would remain of the stem.
    #[must_use]
    pub fn strip(&self, word: &str) -> Option<String> {
        let stem = match self.position {
            AffixPosition::Suffix => word.strip_suffix(self.affix.as_str())?,
            AffixPosition::Prefix => word.strip_prefix(self.affix.as_str())?,
        };
        if stem.is_empty() {
            return None;
        }
        Some(match self.position {
            AffixPosition::Suffix => format!("{stem}{}", self.replacement),
            AffixPosition::Prefix => format!("{}{stem}", self.replacement),
        })
    }

    /// Returns true if the affix doubles as a marker for `role`.
    #[must_use]
    pub fn marks(&self, role: SemanticRole) -> bool {
        self.marks == Some(role)
    }
}
