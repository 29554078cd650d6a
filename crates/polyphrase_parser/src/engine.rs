//! The engine: languages, cached patterns, and configuration in one place.
//!
//! Every operation takes language codes and resolves them against the
//! engine's registry. The process-wide engine behind [`Engine::global`]
//! serves the free functions at the crate root.

use std::borrow::Cow;
use std::sync::OnceLock;

use polyphrase_foundation::{ActionType, Error, ErrorContext, Result, SemanticNode};
use polyphrase_languages::{LanguageProfile, LanguageRegistry, detect};

use crate::config::ParserConfig;
use crate::explicit::{EXPLICIT_LANGUAGE, parse_explicit, render_explicit};
use crate::parser::{CanParse, SemanticParser};
use crate::pattern::LanguagePattern;
use crate::registry::PatternRegistry;
use crate::render::Renderer;
use crate::token::TokenStream;
use crate::tokenizer::Tokenizer;

/// Parses, renders, and translates commands across registered languages.
#[derive(Debug)]
pub struct Engine {
    languages: Cow<'static, LanguageRegistry>,
    patterns: PatternRegistry,
    config: ParserConfig,
}

impl Engine {
    /// Creates an engine over a custom registry.
    #[must_use]
    pub fn new(languages: LanguageRegistry) -> Self {
        Self::with_languages(Cow::Owned(languages))
    }

    /// Creates an engine over the built-in languages.
    #[must_use]
    pub fn builtin() -> Self {
        Self::with_languages(Cow::Borrowed(LanguageRegistry::builtin()))
    }

    /// The process-wide engine over the built-in languages with the
    /// default configuration. Built on first use.
    pub fn global() -> &'static Engine {
        static ENGINE: OnceLock<Engine> = OnceLock::new();
        ENGINE.get_or_init(Engine::builtin)
    }

    fn with_languages(languages: Cow<'static, LanguageRegistry>) -> Self {
        let patterns = PatternRegistry::new(&languages);
        Self {
            languages,
            patterns,
            config: ParserConfig::default(),
        }
    }

    /// Builder method to replace the parser configuration.
    #[must_use]
    pub fn with_config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }

    /// The parser configuration.
    #[must_use]
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// The language registry.
    #[must_use]
    pub fn languages(&self) -> &LanguageRegistry {
        &self.languages
    }

    /// Looks up a registered profile.
    ///
    /// # Errors
    ///
    /// `UnsupportedLanguage` for an unregistered code.
    pub fn profile(&self, language: &str) -> Result<&LanguageProfile> {
        self.languages
            .get(language)
            .ok_or_else(|| Error::unsupported_language(language))
    }

    /// Tokenizes `input` as `language`.
    ///
    /// # Errors
    ///
    /// `UnsupportedLanguage` for an unregistered code.
    pub fn tokenize(&self, input: &str, language: &str) -> Result<TokenStream> {
        let profile = self.profile(language)?;
        Ok(Tokenizer::new(profile, &self.config).tokenize(input))
    }

    /// All patterns of a language, highest priority first.
    ///
    /// # Errors
    ///
    /// `UnsupportedLanguage` for an unregistered code.
    pub fn patterns_for_language(&self, language: &str) -> Result<&[LanguagePattern]> {
        self.patterns.patterns_for_language(self.profile(language)?)
    }

    /// Patterns of a language producing `action`, highest priority first.
    ///
    /// # Errors
    ///
    /// `UnsupportedLanguage` for an unregistered code.
    pub fn patterns_for(&self, language: &str, action: ActionType) -> Result<Vec<&LanguagePattern>> {
        self.patterns.patterns_for(self.profile(language)?, action)
    }

    /// Checks a language's patterns against its vocabulary, returning one
    /// `InvalidPattern` error per violation.
    ///
    /// # Errors
    ///
    /// `UnsupportedLanguage` for an unregistered code.
    pub fn validate_patterns(&self, language: &str) -> Result<Vec<Error>> {
        self.patterns.validate(self.profile(language)?)
    }

    /// Parses `input` as `language`.
    ///
    /// # Errors
    ///
    /// `UnsupportedLanguage` for an unregistered code, `Parse` if nothing
    /// matches at or above the confidence floor.
    pub fn parse(&self, input: &str, language: &str) -> Result<SemanticNode> {
        let profile = self.profile(language)?;
        SemanticParser::new(profile, &self.patterns, &self.config).parse(input)
    }

    /// Reports whether `input` parses as `language`. An unregistered
    /// language never parses.
    #[must_use]
    pub fn can_parse(&self, input: &str, language: &str) -> CanParse {
        match self.profile(language) {
            Ok(profile) => SemanticParser::new(profile, &self.patterns, &self.config).can_parse(input),
            Err(_) => CanParse {
                can_parse: false,
                confidence: 0.0,
            },
        }
    }

    /// Renders `node` in `language`.
    ///
    /// # Errors
    ///
    /// `UnsupportedLanguage` for an unregistered code, `Render` for a node
    /// that violates its action's frame.
    pub fn render(&self, node: &SemanticNode, language: &str) -> Result<String> {
        let profile = self.profile(language)?;
        Renderer::new(profile, &self.patterns, &self.config).render(node)
    }

    /// Renders `node` in explicit syntax.
    #[must_use]
    pub fn render_explicit(&self, node: &SemanticNode) -> String {
        render_explicit(node)
    }

    /// Parses `input` as `language` and renders it in explicit syntax.
    ///
    /// # Errors
    ///
    /// As for [`parse`](Self::parse).
    pub fn to_explicit(&self, input: &str, language: &str) -> Result<String> {
        self.parse(input, language).map(|node| render_explicit(&node))
    }

    /// Parses explicit syntax. Always accepted, whatever the configuration.
    ///
    /// # Errors
    ///
    /// `Parse` for malformed explicit syntax.
    pub fn from_explicit(&self, input: &str) -> Result<SemanticNode> {
        parse_explicit(input, EXPLICIT_LANGUAGE)
    }

    /// Parses `input` as `from` and renders the node in `to`.
    ///
    /// # Errors
    ///
    /// `UnsupportedLanguage` if either code is unregistered; otherwise the
    /// parse or render error, with the translation recorded in its context.
    pub fn translate(&self, input: &str, from: &str, to: &str) -> Result<String> {
        self.profile(to)?;
        let frame = || ErrorContext::new().with_frame(format!("translate {from} -> {to}"));
        let node = self
            .parse(input, from)
            .map_err(|err| err.with_context(frame()))?;
        let output = self
            .render(&node, to)
            .map_err(|err| err.with_context(frame()))?;
        tracing::trace!(%from, %to, %output, "translated");
        Ok(output)
    }

    /// Registered language codes in registration order.
    #[must_use]
    pub fn supported_languages(&self) -> Vec<&str> {
        self.languages.codes().collect()
    }

    /// Returns true if `language` is registered.
    #[must_use]
    pub fn is_language_supported(&self, language: &str) -> bool {
        self.languages.contains(language)
    }

    /// Registered non-default languages whose vocabulary appears in `text`.
    #[must_use]
    pub fn detect_languages(&self, text: &str) -> Vec<String> {
        detect::detect_languages(&self.languages, text)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Tokenizes with the global engine. See [`Engine::tokenize`].
///
/// # Errors
///
/// `UnsupportedLanguage` for an unregistered code.
pub fn tokenize(input: &str, language: &str) -> Result<TokenStream> {
    Engine::global().tokenize(input, language)
}

/// Parses with the global engine. See [`Engine::parse`].
///
/// # Errors
///
/// As for [`Engine::parse`].
pub fn parse(input: &str, language: &str) -> Result<SemanticNode> {
    Engine::global().parse(input, language)
}

/// See [`Engine::can_parse`].
#[must_use]
pub fn can_parse(input: &str, language: &str) -> CanParse {
    Engine::global().can_parse(input, language)
}

/// Renders with the global engine. See [`Engine::render`].
///
/// # Errors
///
/// As for [`Engine::render`].
pub fn render(node: &SemanticNode, language: &str) -> Result<String> {
    Engine::global().render(node, language)
}

/// See [`Engine::to_explicit`].
///
/// # Errors
///
/// As for [`Engine::parse`].
pub fn to_explicit(input: &str, language: &str) -> Result<String> {
    Engine::global().to_explicit(input, language)
}

/// See [`Engine::from_explicit`].
///
/// # Errors
///
/// `Parse` for malformed explicit syntax.
pub fn from_explicit(input: &str) -> Result<SemanticNode> {
    Engine::global().from_explicit(input)
}

/// Translates with the global engine. See [`Engine::translate`].
///
/// # Errors
///
/// As for [`Engine::translate`].
pub fn translate(input: &str, from: &str, to: &str) -> Result<String> {
    Engine::global().translate(input, from, to)
}

/// Built-in language codes.
#[must_use]
pub fn supported_languages() -> Vec<&'static str> {
    Engine::global().supported_languages()
}

/// Returns true if `language` is a built-in language.
#[must_use]
pub fn is_language_supported(language: &str) -> bool {
    Engine::global().is_language_supported(language)
}

/// Built-in non-default languages whose vocabulary appears in `text`.
#[must_use]
pub fn detect_languages(text: &str) -> Vec<String> {
    Engine::global().detect_languages(text)
}
