//! The Semantic AST node.
//!
//! A node carries no word-order information: the same command in any
//! language produces the same action and role map.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::action::{ActionType, SemanticRole};
use crate::error::{Error, Result};
use crate::value::SemanticValue;

/// Role bindings, iterated in canonical role order.
pub type RoleMap = im::OrdMap<SemanticRole, SemanticValue>;

/// Whether a node is a bare command or an event handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum NodeKind {
    /// A command with no trigger.
    Command,
    /// A command bound to an event.
    EventHandler,
}

/// A parsed command in language-neutral form.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SemanticNode {
    /// Command or event handler.
    pub kind: NodeKind,
    /// The command action.
    pub action: ActionType,
    /// Role bindings.
    pub roles: RoleMap,
    /// Match confidence in `[0, 1]`.
    pub confidence: f64,
    /// Code of the language the node was parsed from.
    pub source_language: String,
}

impl SemanticNode {
    /// Creates a node with no roles and full confidence.
    #[must_use]
    pub fn new(action: ActionType) -> Self {
        Self {
            kind: NodeKind::Command,
            action,
            roles: RoleMap::new(),
            confidence: 1.0,
            source_language: String::new(),
        }
    }

    /// Binds a role, keeping `kind` in step with the event role. Filters
    /// are stored with at most one negation.
    #[must_use]
    pub fn with_role(mut self, role: SemanticRole, value: SemanticValue) -> Self {
        self.roles.insert(role, canonical(value));
        self.kind = Self::kind_for(&self.roles);
        self
    }

    /// Sets the confidence, clamped to `[0, 1]`.
    #[must_use]
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence.clamp(0.0, 1.0);
        self
    }

    /// Sets the source language.
    #[must_use]
    pub fn with_source_language(mut self, language: impl Into<String>) -> Self {
        self.source_language = language.into();
        self
    }

    /// Derives the node kind from a role map.
    #[must_use]
    pub fn kind_for(roles: &RoleMap) -> NodeKind {
        if roles.contains_key(&SemanticRole::EventName) {
            NodeKind::EventHandler
        } else {
            NodeKind::Command
        }
    }

    /// Returns the value bound to `role`.
    #[must_use]
    pub fn role(&self, role: SemanticRole) -> Option<&SemanticValue> {
        self.roles.get(&role)
    }

    /// Returns the triggering event, if this is an event handler.
    #[must_use]
    pub fn event(&self) -> Option<&SemanticValue> {
        self.role(SemanticRole::EventName)
    }

    /// Checks the role map against the action's frame.
    ///
    /// # Errors
    ///
    /// `IncompleteNode` for the first missing required role, `Render` for a
    /// role outside the frame.
    pub fn validate(&self) -> Result<()> {
        for role in self.action.required_roles() {
            if !self.roles.contains_key(&role) {
                return Err(Error::incomplete_node(self.action, role));
            }
        }
        if let Some(role) = self.roles.keys().find(|role| !self.action.accepts(**role)) {
            return Err(Error::render(
                self.action,
                self.source_language.clone(),
                format!("role {role} is not part of the {} frame", self.action),
            ));
        }
        Ok(())
    }

    /// Returns true if both nodes have the same action and role bindings.
    ///
    /// Filters compare by their selector and negation parity, so `!!.a`
    /// means the same as `.a`.
    #[must_use]
    pub fn same_meaning(&self, other: &Self) -> bool {
        self.action == other.action
            && self.roles.len() == other.roles.len()
            && self.roles.iter().all(|(role, value)| {
                other
                    .roles
                    .get(role)
                    .is_some_and(|theirs| same_value(value, theirs))
            })
    }
}

fn canonical(value: SemanticValue) -> SemanticValue {
    match value {
        SemanticValue::Filter(filter) => SemanticValue::Filter(filter.canonical()),
        value => value,
    }
}

fn same_value(ours: &SemanticValue, theirs: &SemanticValue) -> bool {
    match (ours, theirs) {
        (SemanticValue::Filter(a), SemanticValue::Filter(b)) => a.flatten() == b.flatten(),
        _ => ours == theirs,
    }
}
