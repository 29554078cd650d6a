//! Error types for polyphrase.
//!
//! Uses `thiserror` for error definitions; every fallible operation in the
//! workspace returns [`Result`].

use std::fmt;

use thiserror::Error;

use crate::action::{ActionType, SemanticRole};
use crate::span::Span;

/// Result alias used throughout polyphrase.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for polyphrase operations.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an unsupported language error.
    #[must_use]
    pub fn unsupported_language(language: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnsupportedLanguage {
            language: language.into(),
        })
    }

    /// Creates a parse error.
    #[must_use]
    pub fn parse(failure: ParseFailure) -> Self {
        Self::new(ErrorKind::Parse(failure))
    }

    /// Creates an incomplete node error.
    #[must_use]
    pub fn incomplete_node(action: ActionType, missing: SemanticRole) -> Self {
        Self::new(ErrorKind::IncompleteNode { action, missing })
    }

    /// Creates a render error.
    #[must_use]
    pub fn render(
        action: ActionType,
        language: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::new(ErrorKind::Render {
            action,
            language: language.into(),
            reason: reason.into(),
        })
    }

    /// Creates an invalid pattern error.
    #[must_use]
    pub fn invalid_pattern(
        language: impl Into<String>,
        pattern: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::new(ErrorKind::InvalidPattern {
            language: language.into(),
            pattern: pattern.into(),
            reason: reason.into(),
        })
    }

    /// Returns the parse failure if this is a parse error.
    #[must_use]
    pub fn as_parse_failure(&self) -> Option<&ParseFailure> {
        match &self.kind {
            ErrorKind::Parse(failure) => Some(failure),
            _ => None,
        }
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErrorKind {
    /// The language code is not registered.
    #[error("unsupported language: {language}")]
    UnsupportedLanguage {
        /// The requested code.
        language: String,
    },

    /// No pattern matched the input with sufficient confidence.
    #[error("{0}")]
    Parse(ParseFailure),

    /// A built node lacks a role its action requires.
    #[error("incomplete {action} node: missing {missing}")]
    IncompleteNode {
        /// The node's action.
        action: ActionType,
        /// The first missing role.
        missing: SemanticRole,
    },

    /// A node cannot be expressed in the target language.
    #[error("cannot render {action} in {language}: {reason}")]
    Render {
        /// The node's action.
        action: ActionType,
        /// Target language code.
        language: String,
        /// What went wrong.
        reason: String,
    },

    /// A generated pattern refers to vocabulary the profile does not declare.
    #[error("invalid pattern {pattern} for {language}: {reason}")]
    InvalidPattern {
        /// Language code.
        language: String,
        /// Pattern id.
        pattern: String,
        /// What is wrong with it.
        reason: String,
    },
}

/// Diagnostic payload of a failed parse.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseFailure {
    /// Language the input was parsed as.
    pub language: String,
    /// The input text.
    pub input: String,
    /// The action of the best partial match, if any pattern got started.
    pub best_action: Option<ActionType>,
    /// Confidence the best match reached.
    pub confidence: f64,
    /// Human-readable reason.
    pub reason: String,
}

impl ParseFailure {
    /// Creates a failure with no partial match.
    #[must_use]
    pub fn new(
        language: impl Into<String>,
        input: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            language: language.into(),
            input: input.into(),
            best_action: None,
            confidence: 0.0,
            reason: reason.into(),
        }
    }

    /// Records the best partial match.
    #[must_use]
    pub fn with_best(mut self, action: ActionType, confidence: f64) -> Self {
        self.best_action = Some(action);
        self.confidence = confidence;
        self
    }
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot parse {:?} as {}: {}",
            self.input, self.language, self.reason
        )?;
        if let Some(action) = self.best_action {
            write!(
                f,
                " (closest: {action} at confidence {:.2})",
                self.confidence
            )?;
        }
        Ok(())
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ErrorContext {
    /// Span of the offending input, if known.
    pub span: Option<Span>,
    /// Pipeline stages the error passed through, innermost first.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the input span.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Adds a stage frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(span) = self.span {
            write!(f, "at {}..{}", span.start, span.end)?;
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}
