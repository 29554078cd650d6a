//! Rendering Semantic AST nodes as native command text.
//!
//! The renderer walks the same generated patterns the parser matches
//! against. Output is only native when each value reads back as itself
//! and the whole text parses back to the same node; anything else is
//! written in explicit syntax.

use polyphrase_foundation::{
    Error, ErrorKind, Keyword, Result, SemanticNode, SemanticRole, SemanticValue,
};
use polyphrase_languages::{LanguageProfile, MarkerPosition};

use crate::config::ParserConfig;
use crate::explicit::render_explicit;
use crate::matcher::operand;
use crate::parser::SemanticParser;
use crate::pattern::{LanguagePattern, Matcher, Slot};
use crate::registry::PatternRegistry;
use crate::tokenizer::Tokenizer;

/// Renders nodes in one language.
pub struct Renderer<'a> {
    profile: &'a LanguageProfile,
    patterns: &'a PatternRegistry,
    config: &'a ParserConfig,
}

impl<'a> Renderer<'a> {
    /// Creates a renderer for a profile. `config` is the configuration the
    /// output will be tokenized under.
    #[must_use]
    pub const fn new(
        profile: &'a LanguageProfile,
        patterns: &'a PatternRegistry,
        config: &'a ParserConfig,
    ) -> Self {
        Self {
            profile,
            patterns,
            config,
        }
    }

    /// Renders `node` with the highest-priority pattern that expresses
    /// exactly its roles and whose output parses back to the node.
    ///
    /// Falls back to explicit syntax when no native pattern fits: the
    /// profile has no keyword for the action, or a value would not read
    /// back as itself (an identifier spelled like a keyword or particle,
    /// or one the scanner splits, such as `foo:bar`).
    ///
    /// # Errors
    ///
    /// `Render` if the node violates its action's frame,
    /// `UnsupportedLanguage` if the profile has no pattern cache.
    pub fn render(&self, node: &SemanticNode) -> Result<String> {
        let code = self.profile.code();
        node.validate().map_err(|err| {
            let reason = match err.kind {
                ErrorKind::Render { reason, .. } => reason,
                kind => kind.to_string(),
            };
            Error::render(node.action, code, reason)
        })?;

        if let Some((role, value)) = node
            .roles
            .iter()
            .find(|(role, value)| !self.can_write(**role, value))
        {
            tracing::warn!(
                language = %code,
                %role,
                %value,
                "value does not read back natively; rendering explicit syntax"
            );
            return Ok(render_explicit(node));
        }

        let patterns = self.patterns.patterns_for(self.profile, node.action)?;
        for pattern in patterns.into_iter().filter(|p| self.expresses(p, node)) {
            let text = self.serialize(pattern, node);
            if self.parses_back(&text, node) {
                tracing::trace!(pattern = %pattern.id, "rendering");
                return Ok(text);
            }
            tracing::debug!(pattern = %pattern.id, %text, "rendering does not parse back");
        }
        tracing::warn!(
            language = %code,
            action = %node.action,
            "no native pattern fits; rendering explicit syntax"
        );
        Ok(render_explicit(node))
    }

    /// Returns true if `text` parses in this language to a node with the
    /// same meaning as `node`.
    fn parses_back(&self, text: &str, node: &SemanticNode) -> bool {
        SemanticParser::new(self.profile, self.patterns, self.config)
            .parse(text)
            .is_ok_and(|parsed| parsed.same_meaning(node))
    }

    /// Returns true if `pattern` binds exactly the node's roles.
    fn expresses(&self, pattern: &LanguagePattern, node: &SemanticNode) -> bool {
        if pattern.has_event() != node.event().is_some() {
            return false;
        }
        let roles = pattern.roles();
        let required_present = pattern.groups.iter().all(|group| match group.slot {
            Slot::Role(role) if !group.optional => node.roles.contains_key(&role),
            _ => true,
        });
        required_present && node.roles.keys().all(|role| roles.contains(role))
    }

    /// Returns true if the words written for `value` parse back as `value`
    /// in `role`.
    fn can_write(&self, role: SemanticRole, value: &SemanticValue) -> bool {
        match value {
            SemanticValue::Filter(filter) => {
                let (selector, negated) = filter.flatten();
                (!negated || self.profile.has_keyword(Keyword::Not))
                    && self.reads_back(&selector.text, &SemanticValue::Selector(selector.clone()))
            }
            _ if role == SemanticRole::EventName && !matches!(value, SemanticValue::Identifier(_)) => {
                false
            }
            _ => match self.value_words(value).as_slice() {
                [word] => self.reads_back(word, value),
                _ => false,
            },
        }
    }

    /// Returns true if `word` tokenizes alone as a single uninflected token
    /// holding exactly `value`.
    fn reads_back(&self, word: &str, value: &SemanticValue) -> bool {
        let stream = Tokenizer::new(self.profile, self.config).tokenize(word);
        match stream.tokens() {
            [token] => token.inflection.is_none() && operand(token).as_ref() == Some(value),
            _ => false,
        }
    }

    fn serialize(&self, pattern: &LanguagePattern, node: &SemanticNode) -> String {
        let mut words: Vec<String> = Vec::new();
        let mut prefix: Option<&str> = None;
        for group in &pattern.groups {
            if group.optional && group.value_role().is_some_and(|role| node.role(role).is_none()) {
                continue;
            }
            let mut value_written = false;
            for matcher in &group.matchers {
                let written = match matcher {
                    Matcher::Action(action) => vec![self.keyword(Keyword::Action(*action))],
                    Matcher::On => vec![self.keyword(Keyword::On)],
                    Matcher::Value(role) => {
                        value_written = true;
                        node.role(*role)
                            .map(|value| self.value_words(value))
                            .unwrap_or_default()
                    }
                    Matcher::Marker(marker) if marker.fused => {
                        if value_written {
                            if let Some(last) = words.last_mut() {
                                last.push_str(&marker.display);
                            }
                        } else {
                            prefix = Some(marker.display.as_str());
                        }
                        Vec::new()
                    }
                    Matcher::Marker(marker) => vec![marker.display.clone()],
                };
                for word in written {
                    match prefix.take() {
                        Some(affix) => words.push(format!("{affix}{word}")),
                        None => words.push(word),
                    }
                }
            }
        }
        words.join(" ")
    }

    fn keyword(&self, keyword: Keyword) -> String {
        self.profile
            .display(keyword)
            .map_or_else(|| keyword.to_string(), ToString::to_string)
    }

    fn value_words(&self, value: &SemanticValue) -> Vec<String> {
        match value {
            SemanticValue::Reference(reference) => {
                let keyword = Keyword::Reference(*reference);
                match self.profile.display(keyword) {
                    Some(display) => vec![display.to_string()],
                    None => vec![value.to_string()],
                }
            }
            SemanticValue::Identifier(name) => {
                let display = value
                    .as_event()
                    .and_then(|event| self.profile.display(Keyword::Event(event)));
                vec![display.map_or_else(|| name.clone(), ToString::to_string)]
            }
            SemanticValue::Filter(filter) => {
                let (selector, negated) = filter.flatten();
                let selector = selector.text.clone();
                if !negated {
                    return vec![selector];
                }
                let not = self.keyword(Keyword::Not);
                match self.profile.marker_position() {
                    MarkerPosition::Prepositional => vec![not, selector],
                    MarkerPosition::Postpositional => vec![selector, not],
                }
            }
            SemanticValue::Selector(_) | SemanticValue::Literal(_) => vec![value.to_string()],
        }
    }
}
