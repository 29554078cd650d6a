//! Role fillers: selectors, literals, references, and filter expressions.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::action::{DomEvent, Reference};

/// The kind of a CSS-style selector, decided by its first character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SelectorKind {
    /// `#id`, possibly compound (`#menu.open`).
    Id,
    /// `.class`, possibly compound.
    Class,
    /// Query literal (`<button.primary/>`).
    Query,
}

/// A selector, kept verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Selector {
    /// What kind of selector this is.
    pub kind: SelectorKind,
    /// Source text, including the sigil.
    pub text: String,
}

impl Selector {
    /// Creates a selector, inferring its kind from the leading sigil.
    ///
    /// Returns `None` if the text does not start with `#`, `.`, or `<`.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let kind = match text.chars().next()? {
            '#' => SelectorKind::Id,
            '.' => SelectorKind::Class,
            '<' => SelectorKind::Query,
            _ => return None,
        };
        if text.len() < 2 {
            return None;
        }
        Some(Self {
            kind,
            text: text.to_string(),
        })
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A literal operand.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Literal {
    /// A quoted string, without quotes.
    String(String),
    /// A plain number.
    Number(f64),
    /// A duration in milliseconds.
    Duration(u64),
}

/// The kind of a literal token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    /// Quoted string.
    String,
    /// Number.
    Number,
    /// Number with a time unit.
    Duration,
}

impl Literal {
    /// Returns the kind of this literal.
    #[must_use]
    pub const fn kind(&self) -> LiteralKind {
        match self {
            Self::String(_) => LiteralKind::String,
            Self::Number(_) => LiteralKind::Number,
            Self::Duration(_) => LiteralKind::Duration,
        }
    }

    /// Parses a number or duration (`5`, `-2.5`, `2s`, `500ms`).
    #[must_use]
    pub fn parse_numeric(text: &str) -> Option<Self> {
        if let Some(ms) = text.strip_suffix("ms") {
            return parse_duration(ms, 1.0);
        }
        if let Some(secs) = text.strip_suffix('s') {
            return parse_duration(secs, 1000.0);
        }
        let n: f64 = text.parse().ok()?;
        n.is_finite().then_some(Self::Number(n))
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn parse_duration(text: &str, scale: f64) -> Option<Literal> {
    if text.is_empty() || text.starts_with('-') || text.starts_with('+') {
        return None;
    }
    let n: f64 = text.parse().ok()?;
    if !n.is_finite() {
        return None;
    }
    Some(Literal::Duration((n * scale).round() as u64))
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => {
                f.write_str("\"")?;
                for c in s.chars() {
                    match c {
                        '"' => f.write_str("\\\"")?,
                        '\\' => f.write_str("\\\\")?,
                        c => write!(f, "{c}")?,
                    }
                }
                f.write_str("\"")
            }
            Self::Number(n) => write_number(f, *n),
            Self::Duration(ms) => {
                if *ms > 0 && ms % 1000 == 0 {
                    write!(f, "{}s", ms / 1000)
                } else {
                    write!(f, "{ms}ms")
                }
            }
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        write!(f, "{}", n as i64)
    } else {
        write!(f, "{n}")
    }
}

/// Something that can answer whether a selector matches.
///
/// Typically bound to a single element by the caller.
pub trait SelectorMatcher {
    /// Returns true if `selector` matches.
    fn matches(&self, selector: &Selector) -> bool;
}

impl<F> SelectorMatcher for F
where
    F: Fn(&Selector) -> bool,
{
    fn matches(&self, selector: &Selector) -> bool {
        self(selector)
    }
}

/// A filter condition over elements.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FilterExpr {
    /// The element matches the selector.
    Matches(Selector),
    /// Negation.
    Not(Box<FilterExpr>),
}

impl FilterExpr {
    /// Negates this expression. Negating a negation unwraps it, so
    /// expressions built this way carry at most one `Not`.
    #[must_use]
    pub fn negate(self) -> Self {
        match self {
            Self::Not(inner) => *inner,
            matches => Self::Not(Box::new(matches)),
        }
    }

    /// The equivalent expression with at most one negation.
    #[must_use]
    pub fn canonical(&self) -> Self {
        let (selector, negated) = self.flatten();
        let matches = Self::Matches(selector.clone());
        if negated { Self::Not(Box::new(matches)) } else { matches }
    }

    /// Evaluates the expression against a matcher.
    pub fn evaluate<M: SelectorMatcher + ?Sized>(&self, matcher: &M) -> bool {
        match self {
            Self::Matches(selector) => matcher.matches(selector),
            Self::Not(inner) => !inner.evaluate(matcher),
        }
    }

    /// Returns the innermost selector and whether an odd number of
    /// negations wrap it.
    #[must_use]
    pub fn flatten(&self) -> (&Selector, bool) {
        match self {
            Self::Matches(selector) => (selector, false),
            Self::Not(inner) => {
                let (selector, negated) = inner.flatten();
                (selector, !negated)
            }
        }
    }
}

/// One `!` per `Not`.
impl fmt::Display for FilterExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Matches(selector) => write!(f, "{selector}"),
            Self::Not(inner) => write!(f, "!{inner}"),
        }
    }
}

/// A role filler.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", content = "value", rename_all = "lowercase"))]
pub enum SemanticValue {
    /// A CSS-style selector.
    Selector(Selector),
    /// A literal.
    Literal(Literal),
    /// A bare name: event names, variables (`:count`, `$total`), words.
    Identifier(String),
    /// A contextual reference.
    Reference(Reference),
    /// A filter condition.
    Filter(FilterExpr),
}

impl SemanticValue {
    /// Creates a selector value, falling back to an identifier when the
    /// text has no selector sigil.
    #[must_use]
    pub fn selector(text: &str) -> Self {
        Selector::parse(text).map_or_else(|| Self::Identifier(text.to_string()), Self::Selector)
    }

    /// Creates an identifier value.
    #[must_use]
    pub fn identifier(name: impl Into<String>) -> Self {
        Self::Identifier(name.into())
    }

    /// Creates a string literal value.
    #[must_use]
    pub fn string(text: impl Into<String>) -> Self {
        Self::Literal(Literal::String(text.into()))
    }

    /// Creates a number literal value.
    #[must_use]
    pub fn number(n: f64) -> Self {
        Self::Literal(Literal::Number(n))
    }

    /// Creates a duration literal value.
    #[must_use]
    pub fn duration_ms(ms: u64) -> Self {
        Self::Literal(Literal::Duration(ms))
    }

    /// Creates an event-name value.
    #[must_use]
    pub fn event(event: DomEvent) -> Self {
        Self::Identifier(event.name().to_string())
    }

    /// Returns the built-in event this value names, if any.
    #[must_use]
    pub fn as_event(&self) -> Option<DomEvent> {
        match self {
            Self::Identifier(name) => DomEvent::from_name(name),
            _ => None,
        }
    }
}

/// Explicit-syntax form of the value.
impl fmt::Display for SemanticValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Selector(selector) => write!(f, "{selector}"),
            Self::Literal(literal) => write!(f, "{literal}"),
            Self::Identifier(name) => f.write_str(name),
            Self::Reference(reference) => write!(f, "@{}", reference.name()),
            Self::Filter(filter) => write!(f, "{filter}"),
        }
    }
}
