//! Language profiles: the static per-language data every other stage reads.
//!
//! A profile is assembled once with [`ProfileBuilder`] and never mutated.
//! All vocabulary is normalized with the profile's [`Normalization`] at build
//! time so lookups compare normalized input against normalized forms.

use std::collections::{BTreeMap, HashMap, HashSet};

use polyphrase_foundation::{ActionType, DomEvent, Keyword, Reference, SemanticRole};

use crate::idiom::{BodyVariant, EventForm};
use crate::morphology::{AffixPosition, MorphRule};
use crate::normalize::Normalization;

/// Canonical order of subject, verb, and object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WordOrder {
    /// Subject-verb-object: the action comes first in a command.
    Svo,
    /// Subject-object-verb: the action comes last.
    Sov,
    /// Verb-subject-object: the action comes first and marked operands
    /// may appear in any order.
    Vso,
}

/// Whether role markers precede or follow the value they mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkerPosition {
    /// `to #button`
    Prepositional,
    /// `#button に`
    Postpositional,
}

/// How words are delimited in running text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Script {
    /// Words are separated by spaces.
    Spaced,
    /// Words may run together (CJK, Hangul compounds) and need segmentation.
    Compact,
}

/// A vocabulary form in both its declared and normalized spelling.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Form {
    /// The form as declared, used for display.
    pub display: String,
    /// The normalized form, used for matching.
    pub normalized: String,
}

/// Static data for one language.
#[derive(Clone, Debug)]
pub struct LanguageProfile {
    code: String,
    name: String,
    word_order: WordOrder,
    marker_position: MarkerPosition,
    script: Script,
    normalization: Normalization,
    /// Normalized form -> keyword, first declaration wins.
    keywords: HashMap<String, Keyword>,
    /// Every declared form in declaration order, including shadowed ones.
    entries: Vec<(String, Keyword)>,
    forms: HashMap<Keyword, Vec<Form>>,
    max_phrase_words: usize,
    particles: BTreeMap<SemanticRole, Vec<Form>>,
    particle_index: HashSet<String>,
    overrides: HashMap<(ActionType, SemanticRole), Vec<Form>>,
    morphology: Vec<MorphRule>,
    event_forms: Vec<EventForm>,
    body_variants: Vec<BodyVariant>,
    max_lexeme_chars: usize,
}

impl LanguageProfile {
    /// Starts building a profile.
    #[must_use]
    pub fn builder(code: &str, name: &str) -> ProfileBuilder {
        ProfileBuilder::new(code, name)
    }

    /// ISO 639-1 code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// English name of the language.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Canonical word order.
    #[must_use]
    pub const fn word_order(&self) -> WordOrder {
        self.word_order
    }

    /// Marker placement.
    #[must_use]
    pub const fn marker_position(&self) -> MarkerPosition {
        self.marker_position
    }

    /// Word delimiting.
    #[must_use]
    pub const fn script(&self) -> Script {
        self.script
    }

    /// Normalization scheme.
    #[must_use]
    pub const fn normalization(&self) -> Normalization {
        self.normalization
    }

    /// Marked operands may be reordered freely in SOV and VSO languages.
    #[must_use]
    pub fn is_flexible(&self) -> bool {
        self.word_order != WordOrder::Svo
    }

    /// Normalizes text the way this profile's vocabulary was normalized.
    #[must_use]
    pub fn normalize(&self, text: &str) -> String {
        let normalized = self.normalization.apply(text);
        if normalized.contains(char::is_whitespace) {
            normalized.split_whitespace().collect::<Vec<_>>().join(" ")
        } else {
            normalized
        }
    }

    /// Looks up a normalized form. Multi-word forms are joined by single spaces.
    #[must_use]
    pub fn lookup_keyword(&self, normalized: &str) -> Option<Keyword> {
        self.keywords.get(normalized).copied()
    }

    /// Finds a normalized form by scanning the declaration list.
    ///
    /// Agrees with [`lookup_keyword`](Self::lookup_keyword); kept as the
    /// reference the map is checked against.
    #[must_use]
    pub fn scan_keyword(&self, normalized: &str) -> Option<Keyword> {
        self.entries
            .iter()
            .find(|(form, _)| form == normalized)
            .map(|(_, keyword)| *keyword)
    }

    /// Every declared (normalized form, keyword) pair in declaration order.
    pub fn keyword_entries(&self) -> impl Iterator<Item = (&str, Keyword)> {
        self.entries.iter().map(|(form, kw)| (form.as_str(), *kw))
    }

    /// All forms of a keyword; the first is the preferred display form.
    #[must_use]
    pub fn forms(&self, keyword: Keyword) -> &[Form] {
        self.forms.get(&keyword).map_or(&[], Vec::as_slice)
    }

    /// Preferred display form of a keyword.
    #[must_use]
    pub fn display(&self, keyword: Keyword) -> Option<&str> {
        self.forms(keyword).first().map(|form| form.display.as_str())
    }

    /// Returns true if the profile has at least one form for `keyword`.
    #[must_use]
    pub fn has_keyword(&self, keyword: Keyword) -> bool {
        !self.forms(keyword).is_empty()
    }

    /// Longest keyword form, in words.
    #[must_use]
    pub const fn max_phrase_words(&self) -> usize {
        self.max_phrase_words
    }

    /// Longest single-word keyword, particle, or affix, in characters.
    #[must_use]
    pub const fn max_lexeme_chars(&self) -> usize {
        self.max_lexeme_chars
    }

    /// Declared particles marking `role`.
    #[must_use]
    pub fn particles(&self, role: SemanticRole) -> &[Form] {
        self.particles.get(&role).map_or(&[], Vec::as_slice)
    }

    /// Returns true if the normalized word is a declared particle.
    #[must_use]
    pub fn is_particle(&self, normalized: &str) -> bool {
        self.particle_index.contains(normalized)
    }

    /// Marker forms for `role` on `action`: the per-action override if one
    /// is declared (an empty override means unmarked), else the role's
    /// particles.
    #[must_use]
    pub fn markers(&self, action: ActionType, role: SemanticRole) -> &[Form] {
        self.overrides
            .get(&(action, role))
            .map_or_else(|| self.particles(role), Vec::as_slice)
    }

    /// Markers of the primary operand of `action` in postpositional order.
    ///
    /// Like [`markers`](Self::markers), but a role with no particles of its
    /// own borrows the patient's object marker unless an override says the
    /// role is unmarked.
    #[must_use]
    pub fn object_markers(&self, action: ActionType, role: SemanticRole) -> &[Form] {
        if let Some(forms) = self.overrides.get(&(action, role)) {
            return forms;
        }
        match self.particles(role) {
            [] => self.particles(SemanticRole::Patient),
            forms => forms,
        }
    }

    /// Ordered morphology rules.
    #[must_use]
    pub fn morphology(&self) -> &[MorphRule] {
        &self.morphology
    }

    /// The first suffix rule whose whole affix is `normalized` and which
    /// leaves the stem unchanged, for attaching bound endings during
    /// segmentation.
    #[must_use]
    pub fn bound_suffix(&self, normalized: &str) -> Option<&MorphRule> {
        self.morphology.iter().find(|rule| {
            rule.position == AffixPosition::Suffix
                && rule.replacement.is_empty()
                && rule.affix == normalized
        })
    }

    /// Returns true if `normalized` is the affix of a rule marking `role`.
    #[must_use]
    pub fn is_marking_affix(&self, role: SemanticRole, normalized: &str) -> bool {
        self.morphology
            .iter()
            .any(|rule| rule.marks(role) && rule.affix == normalized)
    }

    /// Event-handler introductions, as declared.
    #[must_use]
    pub fn event_forms(&self) -> &[EventForm] {
        &self.event_forms
    }

    /// Alternative body orders accepted on parse.
    #[must_use]
    pub fn body_variants(&self) -> &[BodyVariant] {
        &self.body_variants
    }

    /// Returns true if every keyword form is written in Latin script.
    #[must_use]
    pub fn uses_latin_script(&self) -> bool {
        self.entries
            .iter()
            .all(|(form, _)| form.chars().all(is_latin_char))
    }
}

fn is_latin_char(c: char) -> bool {
    c.is_ascii()
        || matches!(c, '\u{00C0}'..='\u{024F}' | '\u{0300}'..='\u{036F}' | '\u{1E00}'..='\u{1EFF}')
}

/// Builder for [`LanguageProfile`].
#[derive(Clone, Debug)]
pub struct ProfileBuilder {
    code: String,
    name: String,
    word_order: WordOrder,
    marker_position: MarkerPosition,
    script: Script,
    normalization: Normalization,
    keywords: Vec<(Keyword, String)>,
    particles: Vec<(SemanticRole, String)>,
    overrides: Vec<((ActionType, SemanticRole), Vec<String>)>,
    rules: Vec<(String, AffixPosition, String, Option<SemanticRole>)>,
    event_forms: Vec<EventForm>,
    body_variants: Vec<BodyVariant>,
}

impl ProfileBuilder {
    fn new(code: &str, name: &str) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            word_order: WordOrder::Svo,
            marker_position: MarkerPosition::Prepositional,
            script: Script::Spaced,
            normalization: Normalization::Lowercase,
            keywords: Vec::new(),
            particles: Vec::new(),
            overrides: Vec::new(),
            rules: Vec::new(),
            event_forms: Vec::new(),
            body_variants: Vec::new(),
        }
    }

    /// Sets the word order.
    #[must_use]
    pub fn word_order(mut self, order: WordOrder) -> Self {
        self.word_order = order;
        self
    }

    /// Sets the marker position.
    #[must_use]
    pub fn markers(mut self, position: MarkerPosition) -> Self {
        self.marker_position = position;
        self
    }

    /// Sets the script.
    #[must_use]
    pub fn script(mut self, script: Script) -> Self {
        self.script = script;
        self
    }

    /// Sets the normalization scheme.
    #[must_use]
    pub fn normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }

    /// Adds forms for a keyword; the first form ever declared is preferred.
    #[must_use]
    pub fn keyword(mut self, keyword: Keyword, forms: &[&str]) -> Self {
        self.keywords
            .extend(forms.iter().map(|form| (keyword, (*form).to_string())));
        self
    }

    /// Adds forms for an action.
    #[must_use]
    pub fn action(self, action: ActionType, forms: &[&str]) -> Self {
        self.keyword(Keyword::Action(action), forms)
    }

    /// Adds forms for a built-in event.
    #[must_use]
    pub fn event(self, event: DomEvent, forms: &[&str]) -> Self {
        self.keyword(Keyword::Event(event), forms)
    }

    /// Adds forms for a reference.
    #[must_use]
    pub fn reference(self, reference: Reference, forms: &[&str]) -> Self {
        self.keyword(Keyword::Reference(reference), forms)
    }

    /// Adds forms for the event-handler introducer.
    #[must_use]
    pub fn on(self, forms: &[&str]) -> Self {
        self.keyword(Keyword::On, forms)
    }

    /// Adds forms for negation.
    #[must_use]
    pub fn not(self, forms: &[&str]) -> Self {
        self.keyword(Keyword::Not, forms)
    }

    /// Adds particles marking `role`.
    #[must_use]
    pub fn particle(mut self, role: SemanticRole, forms: &[&str]) -> Self {
        self.particles
            .extend(forms.iter().map(|form| (role, (*form).to_string())));
        self
    }

    /// Overrides the marker of `role` for one action. An empty slice leaves
    /// the role unmarked.
    #[must_use]
    pub fn marker_override(mut self, action: ActionType, role: SemanticRole, forms: &[&str]) -> Self {
        self.overrides.push((
            (action, role),
            forms.iter().map(ToString::to_string).collect(),
        ));
        self
    }

    /// Same marker override for several actions.
    #[must_use]
    pub fn marker_overrides(
        mut self,
        actions: &[ActionType],
        role: SemanticRole,
        forms: &[&str],
    ) -> Self {
        for action in actions {
            self = self.marker_override(*action, role, forms);
        }
        self
    }

    /// Adds a suffix rule.
    #[must_use]
    pub fn suffix(mut self, affix: &str, replacement: &str) -> Self {
        self.rules.push((
            affix.to_string(),
            AffixPosition::Suffix,
            replacement.to_string(),
            None,
        ));
        self
    }

    /// Adds a prefix rule.
    #[must_use]
    pub fn prefix(mut self, affix: &str, replacement: &str) -> Self {
        self.rules.push((
            affix.to_string(),
            AffixPosition::Prefix,
            replacement.to_string(),
            None,
        ));
        self
    }

    /// Adds a suffix rule whose affix also marks `role`.
    #[must_use]
    pub fn marking_suffix(mut self, affix: &str, role: SemanticRole) -> Self {
        self.rules.push((
            affix.to_string(),
            AffixPosition::Suffix,
            String::new(),
            Some(role),
        ));
        self
    }

    /// Adds a prefix rule whose affix also marks `role`.
    #[must_use]
    pub fn marking_prefix(mut self, affix: &str, role: SemanticRole) -> Self {
        self.rules.push((
            affix.to_string(),
            AffixPosition::Prefix,
            String::new(),
            Some(role),
        ));
        self
    }

    /// Adds an event-handler introduction.
    #[must_use]
    pub fn event_form(mut self, form: EventForm) -> Self {
        self.event_forms.push(form);
        self
    }

    /// Adds an alternative body order.
    #[must_use]
    pub fn body_variant(mut self, variant: BodyVariant) -> Self {
        self.body_variants.push(variant);
        self
    }

    /// Normalizes all vocabulary and freezes the profile.
    #[must_use]
    pub fn build(self) -> LanguageProfile {
        let mut profile = LanguageProfile {
            code: self.code,
            name: self.name,
            word_order: self.word_order,
            marker_position: self.marker_position,
            script: self.script,
            normalization: self.normalization,
            keywords: HashMap::new(),
            entries: Vec::new(),
            forms: HashMap::new(),
            max_phrase_words: 1,
            particles: BTreeMap::new(),
            particle_index: HashSet::new(),
            overrides: HashMap::new(),
            morphology: Vec::new(),
            event_forms: self.event_forms,
            body_variants: self.body_variants,
            max_lexeme_chars: 1,
        };

        for (keyword, display) in self.keywords {
            let form = profile.form(&display);
            let words = form.normalized.split(' ').count();
            profile.max_phrase_words = profile.max_phrase_words.max(words);
            if words == 1 {
                profile.note_lexeme(&form.normalized);
            }
            profile
                .keywords
                .entry(form.normalized.clone())
                .or_insert(keyword);
            profile.entries.push((form.normalized.clone(), keyword));
            profile.forms.entry(keyword).or_default().push(form);
        }

        for (role, display) in self.particles {
            let form = profile.form(&display);
            profile.note_lexeme(&form.normalized);
            profile.particle_index.insert(form.normalized.clone());
            profile.particles.entry(role).or_default().push(form);
        }

        for (key, displays) in self.overrides {
            let forms = displays.iter().map(|d| profile.form(d)).collect();
            profile.overrides.insert(key, forms);
        }

        for (display, position, replacement, marks) in self.rules {
            let affix = profile.normalize(&display);
            profile.note_lexeme(&affix);
            let replacement = profile.normalize(&replacement);
            profile.morphology.push(MorphRule {
                display,
                affix,
                position,
                replacement,
                marks,
            });
        }

        tracing::trace!(
            code = %profile.code,
            keywords = profile.entries.len(),
            rules = profile.morphology.len(),
            "built language profile"
        );
        profile
    }
}

impl LanguageProfile {
    fn form(&self, display: &str) -> Form {
        Form {
            display: display.to_string(),
            normalized: self.normalize(display),
        }
    }

    fn note_lexeme(&mut self, normalized: &str) {
        self.max_lexeme_chars = self.max_lexeme_chars.max(normalized.chars().count());
    }
}
