//! Text and JSON output of tokens and nodes.

use std::fmt::Write as _;

use polyphrase_foundation::SemanticNode;
use polyphrase_parser::{TokenRole, TokenStream};
use serde::Serialize;

use crate::error::Result;

#[derive(Serialize)]
struct TokenView<'a> {
    text: &'a str,
    normalized: &'a str,
    role: String,
    start: usize,
    end: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    affix: Option<&'a str>,
}

/// Short name of a token role, e.g. `keyword(toggle)` or `selector`.
#[must_use]
pub fn describe_role(role: TokenRole) -> String {
    match role {
        TokenRole::Keyword(keyword) => format!("keyword({keyword})"),
        TokenRole::Identifier => "identifier".to_string(),
        TokenRole::Selector(kind) => format!("selector({})", format!("{kind:?}").to_lowercase()),
        TokenRole::Literal(kind) => format!("literal({})", format!("{kind:?}").to_lowercase()),
        TokenRole::Particle => "particle".to_string(),
        TokenRole::Punctuation => "punctuation".to_string(),
    }
}

/// One token per line: surface text, lemma when it differs, and role.
#[must_use]
pub fn format_tokens(stream: &TokenStream) -> String {
    let mut out = String::new();
    for token in stream.iter() {
        let _ = write!(out, "{:<16} {}", token.text, describe_role(token.role));
        if token.normalized != token.text {
            let _ = write!(out, " = {}", token.normalized);
        }
        if let Some(inflection) = &token.inflection {
            let _ = write!(out, " [-{}]", inflection.surface);
        }
        out.push('\n');
    }
    out.truncate(out.trim_end().len());
    out
}

/// Tokens as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn tokens_to_json(stream: &TokenStream) -> Result<String> {
    let views: Vec<TokenView<'_>> = stream
        .iter()
        .map(|token| TokenView {
            text: &token.text,
            normalized: &token.normalized,
            role: describe_role(token.role),
            start: token.span.start,
            end: token.span.end,
            affix: token.inflection.as_ref().map(|i| i.surface.as_str()),
        })
        .collect();
    Ok(serde_json::to_string_pretty(&views)?)
}

/// A node as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn node_to_json(node: &SemanticNode) -> Result<String> {
    Ok(serde_json::to_string_pretty(node)?)
}
