//! The explicit, language-neutral command syntax.
//!
//! ```text
//! [toggle event:click patient:.active destination:#button]
//! [put value:"hello \"world\"" destination:#out]
//! [show target:#menu filter:!.hidden]
//! ```
//!
//! Roles are written in canonical order. Values use the same textual forms
//! as [`SemanticValue`]'s `Display`, so rendering then parsing gives back
//! the same node.

use std::fmt::Write as _;

use polyphrase_foundation::{
    ActionType, Error, FilterExpr, Literal, ParseFailure, Reference, Result, Selector,
    SemanticNode, SemanticRole, SemanticValue,
};

/// Language code recorded on nodes read from explicit syntax without a
/// source language.
pub const EXPLICIT_LANGUAGE: &str = "explicit";

/// Returns true if `input` is written in explicit syntax.
#[must_use]
pub fn is_explicit(input: &str) -> bool {
    input.trim_start().starts_with('[')
}

/// Renders a node in explicit syntax.
#[must_use]
pub fn render_explicit(node: &SemanticNode) -> String {
    let mut out = format!("[{}", node.action);
    for (role, value) in &node.roles {
        // Writing to a String cannot fail.
        let _ = write!(out, " {}:{value}", role.tag());
    }
    out.push(']');
    out
}

/// Parses explicit syntax, recording `language` as the node's source.
///
/// # Errors
///
/// `Parse` for malformed input, unknown actions or roles, a role given
/// twice, or a node that violates its action's frame.
pub fn parse_explicit(input: &str, language: &str) -> Result<SemanticNode> {
    let fail = |reason: String| Error::parse(ParseFailure::new(language, input, reason));

    let trimmed = input.trim();
    let inner = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| fail("explicit syntax must be enclosed in brackets".to_string()))?;
    let words = split_words(inner).map_err(fail)?;
    let (head, args) = words
        .split_first()
        .ok_or_else(|| fail("missing action".to_string()))?;
    let action: ActionType = head.parse().map_err(fail)?;

    let mut node = SemanticNode::new(action).with_source_language(language);
    for arg in args {
        let (tag, raw) = arg
            .split_once(':')
            .ok_or_else(|| fail(format!("expected role:value, found {arg:?}")))?;
        let role = SemanticRole::from_tag(tag).ok_or_else(|| fail(format!("unknown role {tag:?}")))?;
        if node.roles.contains_key(&role) {
            return Err(fail(format!("role {role} given twice")));
        }
        let value = parse_value(role, raw).map_err(fail)?;
        node = node.with_role(role, value);
    }
    node.validate().map_err(|err| fail(err.to_string()))?;
    Ok(node)
}

/// Splits on whitespace outside double quotes.
fn split_words(inner: &str) -> std::result::Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '"' => {
                current.push(c);
                let mut closed = false;
                while let Some(c) = chars.next() {
                    current.push(c);
                    match c {
                        '\\' => {
                            if let Some(escaped) = chars.next() {
                                current.push(escaped);
                            }
                        }
                        '"' => {
                            closed = true;
                            break;
                        }
                        _ => {}
                    }
                }
                if !closed {
                    return Err("unterminated string".to_string());
                }
            }
            c if c.is_whitespace() => {
                if !current.is_empty() {
                    words.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }
    if !current.is_empty() {
        words.push(current);
    }
    Ok(words)
}

fn parse_value(role: SemanticRole, raw: &str) -> std::result::Result<SemanticValue, String> {
    if raw.is_empty() {
        return Err(format!("empty value for {role}"));
    }
    if role == SemanticRole::Filter {
        let negations = raw.chars().take_while(|c| *c == '!').count();
        let selector = Selector::parse(&raw[negations..])
            .ok_or_else(|| format!("filter needs a selector, found {raw:?}"))?;
        let mut filter = FilterExpr::Matches(selector);
        for _ in 0..negations {
            filter = filter.negate();
        }
        return Ok(SemanticValue::Filter(filter));
    }
    if raw.starts_with('"') {
        return unquote(raw).map(SemanticValue::string);
    }
    if let Some(name) = raw.strip_prefix('@') {
        return Reference::from_name(name)
            .map(SemanticValue::Reference)
            .ok_or_else(|| format!("unknown reference {raw:?}"));
    }
    if let Some(selector) = Selector::parse(raw) {
        return Ok(SemanticValue::Selector(selector));
    }
    if let Some(literal) = Literal::parse_numeric(raw) {
        return Ok(SemanticValue::Literal(literal));
    }
    Ok(SemanticValue::identifier(raw))
}

fn unquote(raw: &str) -> std::result::Result<String, String> {
    let body = raw
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or_else(|| format!("malformed string {raw:?}"))?;
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                out.push(escaped);
            }
        } else {
            out.push(c);
        }
    }
    Ok(out)
}
