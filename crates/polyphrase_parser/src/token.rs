//! Token types for command text.
//!
//! Tokens are the output of the tokenizer and input to the pattern matcher.
//! Every token keeps its surface text and its normalized form; matching only
//! ever looks at the normalized form.

use polyphrase_foundation::{ActionType, Keyword, LiteralKind, SelectorKind, SemanticRole, Span};
use polyphrase_languages::AffixPosition;

/// What a token is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenRole {
    /// A word from the closed vocabulary.
    Keyword(Keyword),
    /// A bare name: variables, custom event names, unknown words.
    Identifier,
    /// `#id`, `.class`, or `<query/>`.
    Selector(SelectorKind),
    /// A quoted string, number, or duration.
    Literal(LiteralKind),
    /// A role-marking particle.
    Particle,
    /// Punctuation; ignored by the matcher.
    Punctuation,
}

/// An affix removed from a word to reach its lemma.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Inflection {
    /// The normalized affix.
    pub affix: String,
    /// The affix as written.
    pub surface: String,
    /// Which end of the word it was on.
    pub position: AffixPosition,
    /// The role the affix marks, for fused markers.
    pub marks: Option<SemanticRole>,
}

impl Inflection {
    /// Returns true if the affix is a fused role marker.
    #[must_use]
    pub const fn is_marking(&self) -> bool {
        self.marks.is_some()
    }
}

/// A token from command text.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// The text as written.
    pub text: String,
    /// The normalized lemma. For string literals this is the unescaped
    /// content.
    pub normalized: String,
    /// What the token is.
    pub role: TokenRole,
    /// Byte range in the input.
    pub span: Span,
    /// The affix stripped to reach the lemma, if any.
    pub inflection: Option<Inflection>,
}

impl Token {
    /// Creates an uninflected token.
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        normalized: impl Into<String>,
        role: TokenRole,
        span: Span,
    ) -> Self {
        Self {
            text: text.into(),
            normalized: normalized.into(),
            role,
            span,
            inflection: None,
        }
    }

    /// Attaches an inflection.
    #[must_use]
    pub fn with_inflection(mut self, inflection: Inflection) -> Self {
        self.inflection = Some(inflection);
        self
    }

    /// Returns the keyword, if this is a keyword token.
    #[must_use]
    pub const fn keyword(&self) -> Option<Keyword> {
        match self.role {
            TokenRole::Keyword(keyword) => Some(keyword),
            _ => None,
        }
    }

    /// Returns the action, if this is an action keyword.
    #[must_use]
    pub const fn action(&self) -> Option<ActionType> {
        match self.role {
            TokenRole::Keyword(Keyword::Action(action)) => Some(action),
            _ => None,
        }
    }

    /// Returns true if this token is the given keyword.
    #[must_use]
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.role == TokenRole::Keyword(keyword)
    }

    /// Returns true if this token is punctuation.
    #[must_use]
    pub fn is_punctuation(&self) -> bool {
        self.role == TokenRole::Punctuation
    }

    /// The surface text with any inflection removed.
    #[must_use]
    pub fn stem_text(&self) -> &str {
        match &self.inflection {
            Some(inflection) => match inflection.position {
                AffixPosition::Suffix => self
                    .text
                    .strip_suffix(inflection.surface.as_str())
                    .unwrap_or(&self.text),
                AffixPosition::Prefix => self
                    .text
                    .strip_prefix(inflection.surface.as_str())
                    .unwrap_or(&self.text),
            },
            None => &self.text,
        }
    }

    /// Returns the marking inflection, if the token carries a fused marker.
    #[must_use]
    pub fn marking(&self) -> Option<&Inflection> {
        self.inflection.as_ref().filter(|i| i.is_marking())
    }

    /// Returns true if an inflection that marks no role was stripped.
    #[must_use]
    pub fn is_stripped(&self) -> bool {
        self.inflection.as_ref().is_some_and(|i| !i.is_marking())
    }
}

/// The tokens of one input in one language.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct TokenStream {
    tokens: Vec<Token>,
    language: String,
}

impl TokenStream {
    /// Creates a stream.
    #[must_use]
    pub fn new(tokens: Vec<Token>, language: impl Into<String>) -> Self {
        Self {
            tokens,
            language: language.into(),
        }
    }

    /// The tokens in input order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Language code the input was tokenized as.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if there are no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterates over the tokens.
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Tokens the matcher looks at: everything but punctuation.
    #[must_use]
    pub fn significant(&self) -> Vec<&Token> {
        self.tokens.iter().filter(|t| !t.is_punctuation()).collect()
    }

    /// Distinct actions named by keyword tokens, in order of appearance.
    #[must_use]
    pub fn actions(&self) -> Vec<ActionType> {
        let mut actions = Vec::new();
        for action in self.tokens.iter().filter_map(Token::action) {
            if !actions.contains(&action) {
                actions.push(action);
            }
        }
        actions
    }

    /// Consumes the stream, returning its tokens.
    #[must_use]
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
