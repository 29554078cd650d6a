//! Configuration for parsing.

/// Configuration for tokenizing and parsing.
///
/// Controls the confidence floor, explicit-syntax input, and how hard the
/// tokenizer works to find multi-word and run-together vocabulary.
#[derive(Clone, Debug, PartialEq)]
pub struct ParserConfig {
    /// Matches below this confidence are rejected.
    pub min_confidence: f64,

    /// Accept bracketed explicit syntax (`[toggle patient:.active]`) in
    /// any language.
    pub explicit_fallback: bool,

    /// Longest multi-word keyword the tokenizer tries, in words.
    pub max_phrase_words: usize,

    /// Split run-together words in compact scripts (Japanese, Chinese,
    /// Korean) into known lexemes.
    pub compact_segmentation: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            min_confidence: 0.5,
            explicit_fallback: true,
            max_phrase_words: 3,
            compact_segmentation: true,
        }
    }
}

impl ParserConfig {
    /// Creates a configuration that only accepts near-exact native input.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            min_confidence: 0.8,
            explicit_fallback: false,
            ..Self::default()
        }
    }

    /// Creates a configuration that accepts heavily inflected or reordered
    /// input.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            min_confidence: 0.2,
            max_phrase_words: 4,
            ..Self::default()
        }
    }

    /// Builder method to set the confidence floor, clamped to `[0, 1]`.
    #[must_use]
    pub fn with_min_confidence(mut self, min_confidence: f64) -> Self {
        self.min_confidence = min_confidence.clamp(0.0, 1.0);
        self
    }

    /// Builder method to enable/disable explicit syntax.
    #[must_use]
    pub fn with_explicit_fallback(mut self, enabled: bool) -> Self {
        self.explicit_fallback = enabled;
        self
    }

    /// Builder method to set the longest phrase tried.
    #[must_use]
    pub fn with_max_phrase_words(mut self, words: usize) -> Self {
        self.max_phrase_words = words.max(1);
        self
    }

    /// Builder method to enable/disable compact segmentation.
    #[must_use]
    pub fn with_compact_segmentation(mut self, enabled: bool) -> Self {
        self.compact_segmentation = enabled;
        self
    }
}
