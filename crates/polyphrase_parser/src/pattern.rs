//! Language patterns.
//!
//! A pattern is a sequence of groups, each binding one slot: the event, the
//! action keyword, or one role. Patterns are generated from a profile's
//! word order, marker tables, and idioms; nothing is hand-written per
//! language. Generated patterns are sorted by priority, highest first, and
//! both parsing and rendering take the first pattern that fits.

use std::fmt::Write as _;

use polyphrase_foundation::{ActionType, Keyword, SemanticRole};
use polyphrase_languages::{
    BodyVariant, EventForm, EventFormKind, EventPart, Form, LanguageProfile, MarkerPosition,
};

/// Priority of the canonical body of every action.
pub const STANDARD_PRIORITY: u32 = 100;

/// How a pattern introduces its command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PatternForm {
    /// A bare command, or `on <event>` before it.
    Standard,
    /// Event introduced as a condition (`クリックしたら`).
    Conditional,
    /// Event introduced as a time clause (`클릭 시`, `当 点击 时`).
    Temporal,
    /// Event introduced as a means (`クリック で`, `بالنقر`).
    Instrumental,
    /// An alternative native body order (`把 .active 切换`).
    Compact,
}

impl PatternForm {
    /// Lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Conditional => "conditional",
            Self::Temporal => "temporal",
            Self::Instrumental => "instrumental",
            Self::Compact => "compact",
        }
    }

    fn from_event_form(kind: EventFormKind) -> Self {
        match kind {
            EventFormKind::Standard => Self::Standard,
            EventFormKind::Conditional => Self::Conditional,
            EventFormKind::Temporal => Self::Temporal,
            EventFormKind::Instrumental => Self::Instrumental,
        }
    }
}

/// What a group binds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    /// The triggering event.
    Event,
    /// The action keyword.
    Action,
    /// One role of the action's frame.
    Role(SemanticRole),
}

/// A role marker expected around a value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkerMatcher {
    /// The role marked.
    pub role: SemanticRole,
    /// Accepted normalized forms.
    pub forms: Vec<String>,
    /// Preferred display form.
    pub display: String,
    /// The marker is an affix fused onto the value word rather than a
    /// separate word.
    pub fused: bool,
    /// The marker may be left out.
    pub optional: bool,
}

impl MarkerMatcher {
    fn from_forms(role: SemanticRole, forms: &[Form]) -> Option<Self> {
        let display = forms.first()?.display.clone();
        Some(Self {
            role,
            forms: forms.iter().map(|f| f.normalized.clone()).collect(),
            display,
            fused: false,
            optional: false,
        })
    }

    fn from_declared(role: SemanticRole, declared: &[String], profile: &LanguageProfile) -> Option<Self> {
        let display = declared.first()?.clone();
        Some(Self {
            role,
            forms: declared.iter().map(|d| profile.normalize(d)).collect(),
            display,
            fused: false,
            optional: false,
        })
    }

    /// Returns true if `normalized` is one of the accepted forms.
    #[must_use]
    pub fn accepts(&self, normalized: &str) -> bool {
        self.forms.iter().any(|form| form == normalized)
    }
}

/// One element of a group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Matcher {
    /// The action keyword.
    Action(ActionType),
    /// The `On` keyword.
    On,
    /// A value bound to a role.
    Value(SemanticRole),
    /// A role marker.
    Marker(MarkerMatcher),
}

/// A run of matchers binding one slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternGroup {
    /// What the group binds.
    pub slot: Slot,
    /// The whole group may be absent.
    pub optional: bool,
    /// Matchers in surface order.
    pub matchers: Vec<Matcher>,
}

impl PatternGroup {
    fn new(slot: Slot, optional: bool, matchers: Vec<Matcher>) -> Self {
        Self {
            slot,
            optional,
            matchers,
        }
    }

    /// The role bound by the group's value matcher, if any.
    #[must_use]
    pub fn value_role(&self) -> Option<SemanticRole> {
        self.matchers.iter().find_map(|m| match m {
            Matcher::Value(role) => Some(*role),
            _ => None,
        })
    }

    /// Returns true if the group is a role carrying a marker, which lets it
    /// move in flexible word orders.
    #[must_use]
    pub fn is_marked(&self) -> bool {
        matches!(self.slot, Slot::Role(_))
            && self.matchers.iter().any(|m| matches!(m, Matcher::Marker(_)))
    }
}

/// A generated surface pattern for one action in one language.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LanguagePattern {
    /// Unique id within the language (`ja:toggle:standard:conditional`).
    pub id: String,
    /// The action the pattern produces.
    pub command: ActionType,
    /// Language code.
    pub language: String,
    /// How the command is introduced.
    pub form: PatternForm,
    /// Higher priorities are tried first.
    pub priority: u32,
    /// Marked role groups may be reordered.
    pub flexible: bool,
    /// Groups in canonical surface order.
    pub groups: Vec<PatternGroup>,
}

impl LanguagePattern {
    /// Roles the pattern can bind, in group order.
    #[must_use]
    pub fn roles(&self) -> Vec<SemanticRole> {
        self.groups.iter().filter_map(PatternGroup::value_role).collect()
    }

    /// Returns true if the pattern introduces an event handler.
    #[must_use]
    pub fn has_event(&self) -> bool {
        self.groups.iter().any(|g| g.slot == Slot::Event)
    }

    /// Number of optional groups.
    #[must_use]
    pub fn optional_groups(&self) -> usize {
        self.groups.iter().filter(|g| g.optional).count()
    }
}

/// Generates every pattern for a profile, highest priority first.
///
/// Actions the profile has no keyword for are skipped, as are event forms
/// needing an `On` keyword the profile lacks.
#[must_use]
pub fn generate_patterns(profile: &LanguageProfile) -> Vec<LanguagePattern> {
    let mut patterns = Vec::new();
    for action in ActionType::ALL {
        if !profile.has_keyword(Keyword::Action(action)) {
            tracing::debug!(language = %profile.code(), %action, "no keyword; skipping action");
            continue;
        }
        for body in bodies(profile, action) {
            patterns.push(body.pattern(profile, action, None));
            for (index, event_form) in profile.event_forms().iter().enumerate() {
                if event_form.uses_on() && !profile.has_keyword(Keyword::On) {
                    continue;
                }
                patterns.push(body.pattern(profile, action, Some((index, event_form))));
            }
        }
    }
    patterns.sort_by(|a, b| b.priority.cmp(&a.priority));
    patterns
}

/// A command body before any event introduction.
struct Body {
    name: &'static str,
    form: PatternForm,
    priority: u32,
    groups: Vec<PatternGroup>,
}

impl Body {
    fn pattern(
        &self,
        profile: &LanguageProfile,
        action: ActionType,
        event: Option<(usize, &EventForm)>,
    ) -> LanguagePattern {
        let mut id = format!("{}:{}:{}", profile.code(), action, self.name);
        let mut groups = Vec::with_capacity(self.groups.len() + 1);
        let mut form = self.form;
        let mut priority = self.priority;
        if let Some((index, event_form)) = event {
            // Writing to a String cannot fail.
            let _ = write!(id, ":{}{}", event_form.kind.name(), index);
            groups.push(event_group(profile, event_form));
            priority += event_form.priority;
            if form == PatternForm::Standard {
                form = PatternForm::from_event_form(event_form.kind);
            }
        }
        groups.extend(self.groups.iter().cloned());
        LanguagePattern {
            id,
            command: action,
            language: profile.code().to_string(),
            form,
            priority,
            flexible: profile.is_flexible(),
            groups,
        }
    }
}

fn bodies(profile: &LanguageProfile, action: ActionType) -> Vec<Body> {
    let mut bodies = vec![Body {
        name: "standard",
        form: PatternForm::Standard,
        priority: STANDARD_PRIORITY,
        groups: match profile.marker_position() {
            MarkerPosition::Prepositional => verb_first(profile, action),
            MarkerPosition::Postpositional => verb_final(profile, action),
        },
    }];
    for variant in profile.body_variants() {
        let groups = match variant {
            BodyVariant::VerbFinal { .. } => Some(prepositional_verb_final(profile, action)),
            BodyVariant::ObjectFronted { marker, .. } => object_fronted(profile, action, marker),
        };
        if let Some(groups) = groups {
            bodies.push(Body {
                name: variant.name(),
                form: PatternForm::Compact,
                priority: variant.priority(),
                groups,
            });
        }
    }
    bodies
}

fn action_group(action: ActionType) -> PatternGroup {
    PatternGroup::new(Slot::Action, false, vec![Matcher::Action(action)])
}

/// `value` alone.
fn bare_group(role: SemanticRole, optional: bool) -> PatternGroup {
    PatternGroup::new(Slot::Role(role), optional, vec![Matcher::Value(role)])
}

/// `marker value`, or the bare value when the role is unmarked.
fn preposed_group(profile: &LanguageProfile, action: ActionType, role: SemanticRole, optional: bool) -> PatternGroup {
    match MarkerMatcher::from_forms(role, profile.markers(action, role)) {
        Some(marker) => PatternGroup::new(
            Slot::Role(role),
            optional,
            vec![Matcher::Marker(marker), Matcher::Value(role)],
        ),
        None => bare_group(role, optional),
    }
}

/// `value marker`, or the bare value when the role is unmarked.
fn postposed_group(profile: &LanguageProfile, action: ActionType, role: SemanticRole, optional: bool) -> PatternGroup {
    match MarkerMatcher::from_forms(role, profile.markers(action, role)) {
        Some(marker) => PatternGroup::new(
            Slot::Role(role),
            optional,
            vec![Matcher::Value(role), Matcher::Marker(marker)],
        ),
        None => bare_group(role, optional),
    }
}

/// `action primary [marker value]...`
fn verb_first(profile: &LanguageProfile, action: ActionType) -> Vec<PatternGroup> {
    let mut groups = vec![action_group(action)];
    let mut frame = action.frame().iter();
    if let Some(primary) = frame.next() {
        groups.push(bare_group(primary.role, !primary.required));
    }
    groups.extend(frame.map(|slot| preposed_group(profile, action, slot.role, !slot.required)));
    groups
}

/// `primary [object-marker] [value marker]... action`
fn verb_final(profile: &LanguageProfile, action: ActionType) -> Vec<PatternGroup> {
    let mut groups = Vec::new();
    let mut frame = action.frame().iter();
    if let Some(primary) = frame.next() {
        let role = primary.role;
        let group = match MarkerMatcher::from_forms(role, profile.object_markers(action, role)) {
            Some(marker) => PatternGroup::new(
                Slot::Role(role),
                !primary.required,
                vec![
                    Matcher::Value(role),
                    Matcher::Marker(MarkerMatcher {
                        optional: true,
                        ..marker
                    }),
                ],
            ),
            None => bare_group(role, !primary.required),
        };
        groups.push(group);
    }
    groups.extend(frame.map(|slot| postposed_group(profile, action, slot.role, !slot.required)));
    groups.push(action_group(action));
    groups
}

/// `primary [marker value]... action`
fn prepositional_verb_final(profile: &LanguageProfile, action: ActionType) -> Vec<PatternGroup> {
    let mut groups = verb_first(profile, action);
    let action = groups.remove(0);
    groups.push(action);
    groups
}

/// `marker primary action [marker value]...`, for patient-first frames only.
fn object_fronted(
    profile: &LanguageProfile,
    action: ActionType,
    declared: &[String],
) -> Option<Vec<PatternGroup>> {
    let primary = action.frame().first()?;
    if primary.role != SemanticRole::Patient {
        return None;
    }
    let marker = MarkerMatcher::from_declared(primary.role, declared, profile)?;
    let mut groups = vec![
        PatternGroup::new(
            Slot::Role(primary.role),
            !primary.required,
            vec![Matcher::Marker(marker), Matcher::Value(primary.role)],
        ),
        action_group(action),
    ];
    groups.extend(
        action.frame()[1..]
            .iter()
            .map(|slot| preposed_group(profile, action, slot.role, !slot.required)),
    );
    Some(groups)
}

fn event_group(profile: &LanguageProfile, form: &EventForm) -> PatternGroup {
    let role = SemanticRole::EventName;
    let matchers = form
        .parts
        .iter()
        .filter_map(|part| match part {
            EventPart::On => Some(Matcher::On),
            EventPart::Event => Some(Matcher::Value(role)),
            EventPart::Marker(declared) => {
                MarkerMatcher::from_declared(role, declared, profile).map(Matcher::Marker)
            }
            EventPart::Fused(declared) => MarkerMatcher::from_declared(role, declared, profile)
                .map(|marker| Matcher::Marker(MarkerMatcher { fused: true, ..marker })),
        })
        .collect();
    PatternGroup::new(Slot::Event, false, matchers)
}
