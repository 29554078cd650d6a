//! Canonical actions, semantic roles, and the closed keyword vocabulary.
//!
//! Everything here is language-neutral: each language profile maps its own
//! surface forms onto these identifiers.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A canonical command action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ActionType {
    /// Toggle a class or attribute.
    Toggle,
    /// Add a class or attribute.
    Add,
    /// Remove a class, attribute, or element.
    Remove,
    /// Make an element visible.
    Show,
    /// Hide an element.
    Hide,
    /// Assign a value to a variable or property.
    Set,
    /// Insert content into an element.
    Put,
    /// Increase a numeric value.
    Increment,
    /// Decrease a numeric value.
    Decrement,
    /// Write a value to the console.
    Log,
    /// Dispatch an event.
    Send,
    /// Pause for a duration.
    Wait,
    /// Move focus to an element.
    Focus,
    /// Remove focus from an element.
    Blur,
}

impl ActionType {
    /// Every action, in declaration order.
    pub const ALL: [ActionType; 14] = [
        Self::Toggle,
        Self::Add,
        Self::Remove,
        Self::Show,
        Self::Hide,
        Self::Set,
        Self::Put,
        Self::Increment,
        Self::Decrement,
        Self::Log,
        Self::Send,
        Self::Wait,
        Self::Focus,
        Self::Blur,
    ];

    /// Returns the canonical (explicit syntax) name of this action.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Toggle => "toggle",
            Self::Add => "add",
            Self::Remove => "remove",
            Self::Show => "show",
            Self::Hide => "hide",
            Self::Set => "set",
            Self::Put => "put",
            Self::Increment => "increment",
            Self::Decrement => "decrement",
            Self::Log => "log",
            Self::Send => "send",
            Self::Wait => "wait",
            Self::Focus => "focus",
            Self::Blur => "blur",
        }
    }

    /// Returns the role frame of this action, primary role first.
    ///
    /// The primary role is the direct object: unmarked in prepositional
    /// languages, carrying the object marker in postpositional ones.
    #[must_use]
    pub const fn frame(self) -> &'static [RoleSlot] {
        match self {
            Self::Toggle | Self::Add | Self::Send => frames::PATIENT_TO,
            Self::Remove => frames::PATIENT_FROM,
            Self::Show | Self::Hide => frames::TARGET_FILTERED,
            Self::Set => frames::SET,
            Self::Put => frames::PUT,
            Self::Increment | Self::Decrement => frames::STEP,
            Self::Log => frames::PATIENT,
            Self::Wait => frames::VALUE,
            Self::Focus | Self::Blur => frames::TARGET,
        }
    }

    /// Returns the primary (direct object) role, if the action takes one.
    #[must_use]
    pub fn primary_role(self) -> Option<SemanticRole> {
        self.frame().first().map(|slot| slot.role)
    }

    /// Returns true if `role` may appear on a node with this action.
    ///
    /// `EventName` is accepted by every action.
    #[must_use]
    pub fn accepts(self, role: SemanticRole) -> bool {
        role == SemanticRole::EventName || self.frame().iter().any(|slot| slot.role == role)
    }

    /// Returns the required roles of this action.
    pub fn required_roles(self) -> impl Iterator<Item = SemanticRole> {
        self.frame()
            .iter()
            .filter(|slot| slot.required)
            .map(|slot| slot.role)
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ActionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|action| action.name() == s)
            .ok_or_else(|| format!("unknown action: {s}"))
    }
}

/// A language-agnostic operand function.
///
/// Declaration order is the canonical order used by the explicit syntax.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SemanticRole {
    /// The triggering event of an event handler.
    EventName,
    /// The thing acted upon.
    Patient,
    /// An element the command operates on directly.
    SelectorTarget,
    /// A literal operand (assigned value, amount, duration).
    LiteralValue,
    /// Where something is taken from.
    Source,
    /// Where the effect lands.
    Destination,
    /// A condition restricting the command.
    Filter,
}

impl SemanticRole {
    /// Every role, in canonical order.
    pub const ALL: [SemanticRole; 7] = [
        Self::EventName,
        Self::Patient,
        Self::SelectorTarget,
        Self::LiteralValue,
        Self::Source,
        Self::Destination,
        Self::Filter,
    ];

    /// Returns the role tag used by the explicit syntax.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::EventName => "event",
            Self::Patient => "patient",
            Self::SelectorTarget => "target",
            Self::LiteralValue => "value",
            Self::Source => "source",
            Self::Destination => "destination",
            Self::Filter => "filter",
        }
    }

    /// Looks up a role by its explicit-syntax tag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|role| role.tag() == tag)
    }
}

impl fmt::Display for SemanticRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Role frames shared by the actions. Each is a `const` so the slots live
/// in static memory.
mod frames {
    use super::RoleSlot;
    use super::SemanticRole::{Destination, Filter, LiteralValue, Patient, SelectorTarget, Source};

    pub(super) const PATIENT: &[RoleSlot] = &[RoleSlot::required(Patient)];
    pub(super) const PATIENT_TO: &[RoleSlot] =
        &[RoleSlot::required(Patient), RoleSlot::optional(Destination)];
    pub(super) const PATIENT_FROM: &[RoleSlot] =
        &[RoleSlot::required(Patient), RoleSlot::optional(Source)];
    pub(super) const TARGET: &[RoleSlot] = &[RoleSlot::optional(SelectorTarget)];
    pub(super) const TARGET_FILTERED: &[RoleSlot] =
        &[RoleSlot::required(SelectorTarget), RoleSlot::optional(Filter)];
    pub(super) const SET: &[RoleSlot] =
        &[RoleSlot::required(Patient), RoleSlot::required(LiteralValue)];
    pub(super) const PUT: &[RoleSlot] =
        &[RoleSlot::required(LiteralValue), RoleSlot::required(Destination)];
    pub(super) const STEP: &[RoleSlot] =
        &[RoleSlot::optional(Patient), RoleSlot::optional(LiteralValue)];
    pub(super) const VALUE: &[RoleSlot] = &[RoleSlot::required(LiteralValue)];
}

/// One entry of an action's role frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoleSlot {
    /// The role.
    pub role: SemanticRole,
    /// Whether a node with this action must bind the role.
    pub required: bool,
}

impl RoleSlot {
    /// A role the action cannot do without.
    #[must_use]
    pub const fn required(role: SemanticRole) -> Self {
        Self {
            role,
            required: true,
        }
    }

    /// A role the action may omit.
    #[must_use]
    pub const fn optional(role: SemanticRole) -> Self {
        Self {
            role,
            required: false,
        }
    }
}

/// A built-in DOM event with native names in every language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DomEvent {
    /// `click`
    Click,
    /// `input`
    Input,
    /// `change`
    Change,
    /// `submit`
    Submit,
    /// `load`
    Load,
    /// `keydown`
    KeyDown,
}

impl DomEvent {
    /// Every built-in event.
    pub const ALL: [DomEvent; 6] = [
        Self::Click,
        Self::Input,
        Self::Change,
        Self::Submit,
        Self::Load,
        Self::KeyDown,
    ];

    /// Returns the DOM event name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Input => "input",
            Self::Change => "change",
            Self::Submit => "submit",
            Self::Load => "load",
            Self::KeyDown => "keydown",
        }
    }

    /// Looks up a built-in event by DOM name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|event| event.name() == name)
    }
}

/// A contextual reference word (`me`, `it`, `result`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Reference {
    /// The element the script is attached to.
    Me,
    /// The result of the previous command.
    It,
    /// The `result` variable.
    Result,
}

impl Reference {
    /// Every reference.
    pub const ALL: [Reference; 3] = [Self::Me, Self::It, Self::Result];

    /// Returns the canonical name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Me => "me",
            Self::It => "it",
            Self::Result => "result",
        }
    }

    /// Looks up a reference by canonical name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|r| r.name() == name)
    }
}

/// The canonical meaning of a native keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Keyword {
    /// A command verb.
    Action(ActionType),
    /// The event-handler introducer (`on`).
    On,
    /// Filter negation (`not`).
    Not,
    /// A contextual reference.
    Reference(Reference),
    /// A built-in event name.
    Event(DomEvent),
}

impl Keyword {
    /// Returns the action this keyword names, if any.
    #[must_use]
    pub const fn action(self) -> Option<ActionType> {
        match self {
            Self::Action(action) => Some(action),
            _ => None,
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Action(action) => write!(f, "{action}"),
            Self::On => f.write_str("on"),
            Self::Not => f.write_str("not"),
            Self::Reference(r) => f.write_str(r.name()),
            Self::Event(e) => write!(f, "event:{}", e.name()),
        }
    }
}
