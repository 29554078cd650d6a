//! Main parser pipeline.
//!
//! Orchestrates the flow from command text to a Semantic AST node:
//!
//! ```text
//! "toggle .active on #button"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → [Keyword(toggle), Selector(.active), Keyword(on), Selector(#button)]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ CANDIDATE       │  → actions named by keyword tokens: [toggle]
//! │ ACTIONS         │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ PATTERN         │  → en:toggle:standard, confidence 1.0
//! │ MATCHING        │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ AST BUILDER     │  → toggle { patient: .active, destination: #button }
//! └─────────────────┘
//! ```

use polyphrase_foundation::{ActionType, Error, ParseFailure, Result, SemanticNode};
use polyphrase_languages::LanguageProfile;

use crate::builder::build_ast;
use crate::config::ParserConfig;
use crate::explicit::{is_explicit, parse_explicit};
use crate::matcher::{PatternMatch, PatternMatcher};
use crate::registry::PatternRegistry;
use crate::token::TokenStream;
use crate::tokenizer::Tokenizer;

/// Whether input parses, and how confidently.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanParse {
    /// The input parses at or above the confidence floor.
    pub can_parse: bool,
    /// Confidence of the parse, or of the closest attempt.
    pub confidence: f64,
}

/// Parses command text in one language.
pub struct SemanticParser<'a> {
    profile: &'a LanguageProfile,
    patterns: &'a PatternRegistry,
    config: &'a ParserConfig,
}

impl<'a> SemanticParser<'a> {
    /// Creates a parser for a profile.
    #[must_use]
    pub const fn new(
        profile: &'a LanguageProfile,
        patterns: &'a PatternRegistry,
        config: &'a ParserConfig,
    ) -> Self {
        Self {
            profile,
            patterns,
            config,
        }
    }

    /// Parses `input` into a node.
    ///
    /// Bracketed input is read as explicit syntax when the configuration
    /// allows it.
    ///
    /// # Errors
    ///
    /// `Parse` if no pattern matches at or above the confidence floor,
    /// `UnsupportedLanguage` if the profile has no pattern cache.
    pub fn parse(&self, input: &str) -> Result<SemanticNode> {
        let code = self.profile.code();
        if is_explicit(input) {
            if !self.config.explicit_fallback {
                return Err(Error::parse(ParseFailure::new(code, input, "explicit syntax disabled")));
            }
            tracing::debug!(language = %code, "parsing explicit syntax");
            return parse_explicit(input, code);
        }
        let stream = Tokenizer::new(self.profile, self.config).tokenize(input);
        self.parse_stream(input, &stream)
    }

    /// Parses an already tokenized stream. `input` is only used for
    /// diagnostics.
    ///
    /// # Errors
    ///
    /// As for [`parse`](Self::parse).
    pub fn parse_stream(&self, input: &str, stream: &TokenStream) -> Result<SemanticNode> {
        let code = self.profile.code();
        let fail = |reason: String| ParseFailure::new(code, input, reason);

        let tokens = stream.significant();
        if tokens.is_empty() {
            return Err(Error::parse(fail("empty input".to_string())));
        }
        let actions = stream.actions();
        if actions.is_empty() {
            return Err(Error::parse(fail("no action keyword found".to_string())));
        }

        let mut below_floor: Option<PatternMatch<'_>> = None;
        let mut closest: Option<(ActionType, f64)> = None;
        for action in actions {
            for pattern in self.patterns.patterns_for(self.profile, action)? {
                match PatternMatcher::try_match(&tokens, pattern) {
                    Ok(found) => {
                        tracing::trace!(
                            pattern = %pattern.id,
                            confidence = found.confidence,
                            "pattern matched"
                        );
                        if found.confidence >= self.config.min_confidence {
                            return build_ast(found.pattern, found.bindings, found.confidence);
                        }
                        if below_floor.as_ref().is_none_or(|best| found.confidence > best.confidence) {
                            below_floor = Some(found);
                        }
                    }
                    Err(furthest) => {
                        #[allow(clippy::cast_precision_loss)]
                        let progress = furthest as f64 / tokens.len() as f64;
                        tracing::trace!(pattern = %pattern.id, furthest, "pattern failed");
                        if closest.is_none_or(|(_, best)| progress > best) {
                            closest = Some((action, progress));
                        }
                    }
                }
            }
        }

        let failure = match (below_floor, closest) {
            (Some(found), _) => fail(format!(
                "confidence {:.2} below floor {:.2}",
                found.confidence, self.config.min_confidence
            ))
            .with_best(found.pattern.command, found.confidence),
            (None, Some((action, progress))) => {
                fail("no pattern matched".to_string()).with_best(action, progress)
            }
            (None, None) => fail("no pattern matched".to_string()),
        };
        Err(Error::parse(failure))
    }

    /// Reports whether `input` parses without returning the node.
    #[must_use]
    pub fn can_parse(&self, input: &str) -> CanParse {
        match self.parse(input) {
            Ok(node) => CanParse {
                can_parse: true,
                confidence: node.confidence,
            },
            Err(err) => CanParse {
                can_parse: false,
                confidence: err.as_parse_failure().map_or(0.0, |failure| failure.confidence),
            },
        }
    }
}
