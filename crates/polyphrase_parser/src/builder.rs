//! Semantic AST construction.
//!
//! Turns a pattern match into a [`SemanticNode`].

use polyphrase_foundation::{Result, SemanticNode, SemanticRole, SemanticValue};

use crate::pattern::LanguagePattern;

/// Builds a node from a matched pattern and its role bindings.
///
/// The node kind follows from whether an event was bound. A later binding
/// of the same role replaces an earlier one.
///
/// # Errors
///
/// `IncompleteNode` if a role the action requires is unbound. Patterns are
/// generated from the action frames, so this indicates a generator defect
/// rather than bad input.
pub fn build_ast(
    pattern: &LanguagePattern,
    bindings: impl IntoIterator<Item = (SemanticRole, SemanticValue)>,
    confidence: f64,
) -> Result<SemanticNode> {
    let node = bindings
        .into_iter()
        .fold(SemanticNode::new(pattern.command), |node, (role, value)| {
            node.with_role(role, value)
        })
        .with_confidence(confidence)
        .with_source_language(pattern.language.as_str());
    node.validate()?;
    Ok(node)
}
