//! Segmentation of run-together words in compact scripts.
//!
//! Japanese, Chinese, and Korean text often runs keywords, particles, and
//! endings together (`.activeを切り替え`, `를토글`). A word run that is not
//! itself a known word is split greedily: at each position the longest known
//! lexeme wins, keywords before particles before bound endings. Endings
//! attach to the preceding word as an inflection. Characters that start no
//! lexeme collect into identifiers.

use polyphrase_foundation::{Keyword, Span};
use polyphrase_languages::{AffixPosition, LanguageProfile, MorphRule};

use crate::token::{Inflection, Token, TokenRole};

#[derive(Clone, Copy, Debug)]
enum Lexeme<'p> {
    Keyword(Keyword),
    Particle,
    Ending(&'p MorphRule),
}

/// Splits word runs for one profile.
pub(crate) struct Segmenter<'p> {
    profile: &'p LanguageProfile,
}

impl<'p> Segmenter<'p> {
    pub(crate) const fn new(profile: &'p LanguageProfile) -> Self {
        Self { profile }
    }

    /// Segments `surface`, which starts at byte `offset` of the input.
    pub(crate) fn segment(&self, surface: &str, offset: usize) -> Vec<Token> {
        let bounds: Vec<usize> = surface
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(surface.len()))
            .collect();
        let chars = bounds.len() - 1;

        let mut tokens: Vec<Token> = Vec::new();
        let mut unknown: Option<usize> = None;
        let mut at = 0;
        while at < chars {
            let attachable = unknown.is_some() || tokens.last().is_some_and(accepts_ending);
            let Some((len, lexeme)) = self.longest_at(surface, &bounds, at, attachable) else {
                unknown.get_or_insert(at);
                at += 1;
                continue;
            };

            if let Some(start) = unknown.take() {
                tokens.push(self.identifier(surface, bounds[start], bounds[at], offset));
            }
            let (start, end) = (bounds[at], bounds[at + len]);
            let text = &surface[start..end];
            let span = Span::new(offset + start, offset + end);
            match lexeme {
                Lexeme::Keyword(keyword) => tokens.push(Token::new(
                    text,
                    self.profile.normalize(text),
                    TokenRole::Keyword(keyword),
                    span,
                )),
                Lexeme::Particle => tokens.push(Token::new(
                    text,
                    self.profile.normalize(text),
                    TokenRole::Particle,
                    span,
                )),
                Lexeme::Ending(rule) => {
                    if let Some(host) = tokens.last_mut() {
                        host.text.push_str(text);
                        host.span = host.span.merge(span);
                        host.inflection = Some(Inflection {
                            affix: rule.affix.clone(),
                            surface: text.to_string(),
                            position: AffixPosition::Suffix,
                            marks: rule.marks,
                        });
                    }
                }
            }
            at += len;
        }
        if let Some(start) = unknown {
            tokens.push(self.identifier(surface, bounds[start], surface.len(), offset));
        }
        tokens
    }

    fn longest_at(
        &self,
        surface: &str,
        bounds: &[usize],
        at: usize,
        attachable: bool,
    ) -> Option<(usize, Lexeme<'p>)> {
        let remaining = bounds.len() - 1 - at;
        let longest = self.profile.max_lexeme_chars().min(remaining);
        (1..=longest).rev().find_map(|len| {
            let normalized = self.profile.normalize(&surface[bounds[at]..bounds[at + len]]);
            if let Some(keyword) = self.profile.lookup_keyword(&normalized) {
                return Some((len, Lexeme::Keyword(keyword)));
            }
            if self.profile.is_particle(&normalized) {
                return Some((len, Lexeme::Particle));
            }
            if attachable {
                return self
                    .profile
                    .bound_suffix(&normalized)
                    .map(|rule| (len, Lexeme::Ending(rule)));
            }
            None
        })
    }

    fn identifier(&self, surface: &str, start: usize, end: usize, offset: usize) -> Token {
        let text = &surface[start..end];
        Token::new(
            text,
            self.profile.normalize(text),
            TokenRole::Identifier,
            Span::new(offset + start, offset + end),
        )
    }
}

fn accepts_ending(token: &Token) -> bool {
    matches!(token.role, TokenRole::Keyword(_) | TokenRole::Identifier) && token.inflection.is_none()
}
