//! Native idiom tables: how a language introduces an event handler and
//! which alternative body orders it accepts.

/// The style of an event-handler introduction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventFormKind {
    /// `on click ...`
    Standard,
    /// `クリックしたら ...` (if/when clicked)
    Conditional,
    /// `클릭 시 ...` (at the time of)
    Temporal,
    /// `クリック で ...` (by means of)
    Instrumental,
}

impl EventFormKind {
    /// Lowercase name used in pattern ids.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Conditional => "conditional",
            Self::Temporal => "temporal",
            Self::Instrumental => "instrumental",
        }
    }
}

/// One piece of an event form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EventPart {
    /// The profile's `On` keyword.
    On,
    /// The event name.
    Event,
    /// A separate event-marking particle (forms as declared).
    Marker(Vec<String>),
    /// An affix fused onto the event word. Placed after `Event` it is a
    /// suffix, before it a prefix.
    Fused(Vec<String>),
}

/// An event-handler introduction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventForm {
    /// Style of the form.
    pub kind: EventFormKind,
    /// Added to the body priority of every pattern using this form.
    pub priority: u32,
    /// Parts in surface order.
    pub parts: Vec<EventPart>,
}

impl EventForm {
    /// Creates an empty form; add parts with the builder methods.
    #[must_use]
    pub fn new(kind: EventFormKind, priority: u32) -> Self {
        Self {
            kind,
            priority,
            parts: Vec::new(),
        }
    }

    /// `on <event>`.
    #[must_use]
    pub fn standard(priority: u32) -> Self {
        Self::new(EventFormKind::Standard, priority).on().event()
    }

    /// Appends the `On` keyword.
    #[must_use]
    pub fn on(mut self) -> Self {
        self.parts.push(EventPart::On);
        self
    }

    /// Appends the event name.
    #[must_use]
    pub fn event(mut self) -> Self {
        self.parts.push(EventPart::Event);
        self
    }

    /// Appends a separate marker particle.
    #[must_use]
    pub fn marker(mut self, forms: &[&str]) -> Self {
        self.parts
            .push(EventPart::Marker(forms.iter().map(ToString::to_string).collect()));
        self
    }

    /// Appends a fused affix.
    #[must_use]
    pub fn fused(mut self, forms: &[&str]) -> Self {
        self.parts
            .push(EventPart::Fused(forms.iter().map(ToString::to_string).collect()));
        self
    }

    /// Returns true if the form needs the `On` keyword.
    #[must_use]
    pub fn uses_on(&self) -> bool {
        self.parts.contains(&EventPart::On)
    }
}

/// An alternative body order accepted on parse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BodyVariant {
    /// Prepositional phrases first, infinitive verb last
    /// (German `.active auf #button umschalten`).
    VerbFinal {
        /// Body priority.
        priority: u32,
    },
    /// Object fronted by a marker before the verb
    /// (Chinese `把 .active 切换`). Only for actions whose primary role is
    /// the patient.
    ObjectFronted {
        /// The fronting marker forms, as declared.
        marker: Vec<String>,
        /// Body priority.
        priority: u32,
    },
}

impl BodyVariant {
    /// Returns the body priority of the variant.
    #[must_use]
    pub const fn priority(&self) -> u32 {
        match self {
            Self::VerbFinal { priority } | Self::ObjectFronted { priority, .. } => *priority,
        }
    }

    /// Lowercase name used in pattern ids.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::VerbFinal { .. } => "verb-final",
            Self::ObjectFronted { .. } => "object-fronted",
        }
    }
}
