//! Lazily generated, cached patterns for every registered language.
//!
//! The cache map is fixed when the registry is created: one slot per
//! language code, each filled on first use. Lookups never take a lock
//! after a language's patterns exist.

use std::collections::HashMap;
use std::sync::OnceLock;

use polyphrase_foundation::{ActionType, Error, Keyword, Result};
use polyphrase_languages::{EventPart, LanguageProfile, LanguageRegistry};

use crate::config::ParserConfig;
use crate::pattern::{LanguagePattern, Matcher, generate_patterns};
use crate::tokenizer::Tokenizer;

/// Per-language pattern cache.
#[derive(Debug, Default)]
pub struct PatternRegistry {
    cache: HashMap<String, OnceLock<Vec<LanguagePattern>>>,
}

impl PatternRegistry {
    /// Creates an empty cache slot for every language in `languages`.
    #[must_use]
    pub fn new(languages: &LanguageRegistry) -> Self {
        Self {
            cache: languages
                .codes()
                .map(|code| (code.to_string(), OnceLock::new()))
                .collect(),
        }
    }

    /// All patterns of `profile`'s language, highest priority first.
    ///
    /// # Errors
    ///
    /// `UnsupportedLanguage` if the language had no slot when the registry
    /// was created.
    pub fn patterns_for_language(&self, profile: &LanguageProfile) -> Result<&[LanguagePattern]> {
        let slot = self
            .cache
            .get(profile.code())
            .ok_or_else(|| Error::unsupported_language(profile.code()))?;
        Ok(slot.get_or_init(|| {
            let patterns = generate_patterns(profile);
            tracing::debug!(
                language = %profile.code(),
                patterns = patterns.len(),
                "generated patterns"
            );
            patterns
        }))
    }

    /// Patterns producing `action`, highest priority first.
    ///
    /// # Errors
    ///
    /// `UnsupportedLanguage` as for [`patterns_for_language`](Self::patterns_for_language).
    pub fn patterns_for(
        &self,
        profile: &LanguageProfile,
        action: ActionType,
    ) -> Result<Vec<&LanguagePattern>> {
        Ok(self
            .patterns_for_language(profile)?
            .iter()
            .filter(|p| p.command == action)
            .collect())
    }

    /// Checks a profile's patterns against its vocabulary.
    ///
    /// Every action needs a keyword, every separate marker must be a
    /// declared particle, every fused marker a marking affix of its role,
    /// `On` must exist if an event form uses it, and each keyword's display
    /// form must tokenize back to that keyword. Returns one
    /// `InvalidPattern` error per violation.
    ///
    /// # Errors
    ///
    /// `UnsupportedLanguage` as for [`patterns_for_language`](Self::patterns_for_language).
    pub fn validate(&self, profile: &LanguageProfile) -> Result<Vec<Error>> {
        let code = profile.code();
        let mut violations = Vec::new();

        for action in ActionType::ALL {
            if !profile.has_keyword(Keyword::Action(action)) {
                violations.push(Error::invalid_pattern(
                    code,
                    format!("{code}:{action}"),
                    "action has no keyword",
                ));
            }
        }

        let needs_on = profile
            .event_forms()
            .iter()
            .any(|form| form.parts.contains(&EventPart::On));
        if needs_on && !profile.has_keyword(Keyword::On) {
            violations.push(Error::invalid_pattern(
                code,
                format!("{code}:on"),
                "event form uses the On keyword but none is declared",
            ));
        }

        for pattern in self.patterns_for_language(profile)? {
            for marker in pattern.groups.iter().flat_map(|g| &g.matchers).filter_map(|m| match m {
                Matcher::Marker(marker) => Some(marker),
                _ => None,
            }) {
                for form in &marker.forms {
                    let known = if marker.fused {
                        profile.is_marking_affix(marker.role, form)
                    } else {
                        profile.is_particle(form)
                    };
                    if !known {
                        violations.push(Error::invalid_pattern(
                            code,
                            pattern.id.clone(),
                            format!("marker {form:?} for {} is not declared", marker.role),
                        ));
                    }
                }
            }
        }

        let config = ParserConfig::default();
        let tokenizer = Tokenizer::new(profile, &config);
        let mut keywords: Vec<Keyword> = Vec::new();
        for (_, keyword) in profile.keyword_entries() {
            if !keywords.contains(&keyword) {
                keywords.push(keyword);
            }
        }
        for keyword in keywords {
            let Some(display) = profile.display(keyword) else {
                continue;
            };
            let stream = tokenizer.tokenize(display);
            let resolved = match stream.tokens() {
                [token] => token.keyword(),
                _ => None,
            };
            if resolved != Some(keyword) {
                violations.push(Error::invalid_pattern(
                    code,
                    format!("{code}:{keyword}"),
                    format!("display form {display:?} does not resolve to {keyword}"),
                ));
            }
        }
        let mut unique: Vec<Error> = Vec::with_capacity(violations.len());
        for violation in violations {
            if !unique.contains(&violation) {
                unique.push(violation);
            }
        }
        Ok(unique)
    }
}
