//! Language-aware tokenization.
//!
//! Tokenizing happens in two passes. The scanner splits text into raw
//! pieces (selectors, strings, numbers, variables, word runs, punctuation)
//! using rules shared by every language. Each word run is then classified
//! against the language profile: exact keywords, particles, inflected
//! keywords, multi-word phrases, and finally segmentation of run-together
//! compact scripts.

use polyphrase_foundation::{LiteralKind, SelectorKind, Span};
use polyphrase_languages::{AffixPosition, LanguageProfile, Script};
use unicode_normalization::char::is_combining_mark;

use crate::config::ParserConfig;
use crate::segment::Segmenter;
use crate::token::{Inflection, Token, TokenRole, TokenStream};

/// Tokenizes command text for one language.
pub struct Tokenizer<'a> {
    profile: &'a LanguageProfile,
    config: &'a ParserConfig,
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer for a profile.
    #[must_use]
    pub const fn new(profile: &'a LanguageProfile, config: &'a ParserConfig) -> Self {
        Self { profile, config }
    }

    /// Tokenizes `input`. Never fails; unknown words become identifiers.
    #[must_use]
    pub fn tokenize(&self, input: &str) -> TokenStream {
        let pieces = Scanner::new(input).scan_all();
        let mut tokens = Vec::with_capacity(pieces.len());
        let mut index = 0;
        while index < pieces.len() {
            index += self.classify(input, &pieces, index, &mut tokens);
        }
        tracing::trace!(
            language = %self.profile.code(),
            pieces = pieces.len(),
            tokens = tokens.len(),
            "tokenized input"
        );
        TokenStream::new(tokens, self.profile.code())
    }

    /// Classifies the piece at `index`, returning how many pieces it used.
    fn classify(&self, input: &str, pieces: &[Piece], index: usize, out: &mut Vec<Token>) -> usize {
        let piece = &pieces[index];
        let text = piece.span.text(input);
        let token = match &piece.kind {
            PieceKind::Word => return self.classify_word(input, pieces, index, out),
            PieceKind::Selector(kind) => Token::new(text, text, TokenRole::Selector(*kind), piece.span),
            PieceKind::Text(content) => Token::new(
                text,
                content.as_str(),
                TokenRole::Literal(LiteralKind::String),
                piece.span,
            ),
            PieceKind::Number(kind) => Token::new(text, text, TokenRole::Literal(*kind), piece.span),
            PieceKind::Variable => Token::new(text, text, TokenRole::Identifier, piece.span),
            PieceKind::Punctuation => Token::new(text, text, TokenRole::Punctuation, piece.span),
        };
        out.push(token);
        1
    }

    fn classify_word(&self, input: &str, pieces: &[Piece], index: usize, out: &mut Vec<Token>) -> usize {
        let span = pieces[index].span;
        let surface = span.text(input);
        let normalized = self.profile.normalize(surface);
        if let Some(token) = self.lexeme(surface, &normalized, span) {
            out.push(token);
            return 1;
        }
        if let Some((token, used)) = self.phrase(input, pieces, index) {
            out.push(token);
            return used;
        }

        if self.profile.script() == Script::Compact && self.config.compact_segmentation {
            out.extend(Segmenter::new(self.profile).segment(surface, span.start));
        } else {
            out.push(Token::new(surface, normalized, TokenRole::Identifier, span));
        }
        1
    }

    /// Longest multi-word keyword starting at `index`.
    fn phrase(&self, input: &str, pieces: &[Piece], index: usize) -> Option<(Token, usize)> {
        let limit = self
            .config
            .max_phrase_words
            .min(self.profile.max_phrase_words());
        for words in (2..=limit).rev() {
            let Some(window) = pieces.get(index..index + words) else {
                continue;
            };
            if !window.iter().all(|p| p.kind == PieceKind::Word) {
                continue;
            }
            let joined = window
                .iter()
                .map(|p| self.profile.normalize(p.span.text(input)))
                .collect::<Vec<_>>()
                .join(" ");
            if let Some(keyword) = self.profile.lookup_keyword(&joined) {
                let span = window[0].span.merge(window[words - 1].span);
                let token = Token::new(span.text(input), joined, TokenRole::Keyword(keyword), span);
                return Some((token, words));
            }
        }
        None
    }

    /// A single known word: keyword, particle, or inflected keyword.
    fn lexeme(&self, surface: &str, normalized: &str, span: Span) -> Option<Token> {
        if let Some(keyword) = self.profile.lookup_keyword(normalized) {
            return Some(Token::new(surface, normalized, TokenRole::Keyword(keyword), span));
        }
        if self.profile.is_particle(normalized) {
            return Some(Token::new(surface, normalized, TokenRole::Particle, span));
        }
        self.inflected(surface, normalized, span)
    }

    /// The first morphology rule whose stripped form is a keyword wins.
    fn inflected(&self, surface: &str, normalized: &str, span: Span) -> Option<Token> {
        self.profile.morphology().iter().find_map(|rule| {
            let stem = rule.strip(normalized)?;
            let keyword = self.profile.lookup_keyword(&stem)?;
            let inflection = Inflection {
                affix: rule.affix.clone(),
                surface: surface_affix(surface, rule.position, rule.affix.chars().count())
                    .to_string(),
                position: rule.position,
                marks: rule.marks,
            };
            Some(
                Token::new(surface, stem, TokenRole::Keyword(keyword), span)
                    .with_inflection(inflection),
            )
        })
    }
}

/// The `chars` characters at one end of `surface`.
fn surface_affix(surface: &str, position: AffixPosition, chars: usize) -> &str {
    let total = surface.chars().count();
    if chars >= total {
        return surface;
    }
    match position {
        AffixPosition::Suffix => {
            let start = surface
                .char_indices()
                .nth(total - chars)
                .map_or(0, |(i, _)| i);
            &surface[start..]
        }
        AffixPosition::Prefix => {
            let end = surface
                .char_indices()
                .nth(chars)
                .map_or(surface.len(), |(i, _)| i);
            &surface[..end]
        }
    }
}

/// A raw piece of input before classification.
#[derive(Clone, Debug, PartialEq)]
struct Piece {
    kind: PieceKind,
    span: Span,
}

#[derive(Clone, Debug, PartialEq)]
enum PieceKind {
    Word,
    Selector(SelectorKind),
    /// Quoted text, unescaped.
    Text(String),
    Number(LiteralKind),
    Variable,
    Punctuation,
}

/// Splits text into pieces. Shared by every language.
struct Scanner<'src> {
    rest: &'src str,
    position: usize,
}

impl<'src> Scanner<'src> {
    fn new(source: &'src str) -> Self {
        Self {
            rest: source,
            position: 0,
        }
    }

    fn scan_all(mut self) -> Vec<Piece> {
        let mut pieces = Vec::new();
        while let Some(piece) = self.next_piece() {
            pieces.push(piece);
        }
        pieces
    }

    fn next_piece(&mut self) -> Option<Piece> {
        self.skip_whitespace();
        let start = self.position;
        let c = self.peek_char()?;
        let next = self.peek_char_n(1);

        let kind = if matches!(c, '#' | '.') && next.is_some_and(is_selector_start) {
            self.scan_selector(c)
        } else if c == '<' && query_len(self.rest).is_some() {
            let len = query_len(self.rest).unwrap_or(1);
            self.advance_bytes(len);
            PieceKind::Selector(SelectorKind::Query)
        } else if matches!(c, '"' | '\'') {
            self.scan_quoted(c, true)
        } else if c == '「' {
            self.scan_quoted('」', false)
        } else if c == '“' {
            self.scan_quoted('”', false)
        } else if c.is_ascii_digit()
            || (matches!(c, '-' | '+') && next.is_some_and(|n| n.is_ascii_digit()))
        {
            self.scan_number()
        } else if matches!(c, ':' | '$') && next.is_some_and(is_word_char) {
            self.advance();
            self.scan_word_chars();
            PieceKind::Variable
        } else if is_word_char(c) {
            self.scan_word_chars();
            PieceKind::Word
        } else {
            self.advance();
            PieceKind::Punctuation
        };

        Some(Piece {
            kind,
            span: Span::new(start, self.position),
        })
    }

    fn peek_char(&self) -> Option<char> {
        self.rest.chars().next()
    }

    fn peek_char_n(&self, n: usize) -> Option<char> {
        self.rest.chars().nth(n)
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            self.advance_bytes(c.len_utf8());
        }
    }

    fn advance_bytes(&mut self, len: usize) {
        self.rest = &self.rest[len..];
        self.position += len;
    }

    fn skip_whitespace(&mut self) {
        while self.peek_char().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    /// `#id`, `.class`, and compounds like `button.primary#save`.
    fn scan_selector(&mut self, sigil: char) -> PieceKind {
        self.advance();
        loop {
            while self
                .peek_char()
                .is_some_and(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-'))
            {
                self.advance();
            }
            let compound = matches!(self.peek_char(), Some('#' | '.'))
                && self.peek_char_n(1).is_some_and(is_selector_start);
            if !compound {
                break;
            }
            self.advance();
        }
        if sigil == '#' {
            PieceKind::Selector(SelectorKind::Id)
        } else {
            PieceKind::Selector(SelectorKind::Class)
        }
    }

    /// Scans to the closing quote, or to the end of input if there is none.
    fn scan_quoted(&mut self, close: char, escapes: bool) -> PieceKind {
        self.advance();
        let mut text = String::new();
        while let Some(c) = self.peek_char() {
            self.advance();
            if c == close {
                break;
            }
            if escapes && c == '\\' {
                if let Some(escaped) = self.peek_char() {
                    self.advance();
                    text.push(escaped);
                }
                continue;
            }
            text.push(c);
        }
        PieceKind::Text(text)
    }

    fn scan_number(&mut self) -> PieceKind {
        let signed = matches!(self.peek_char(), Some('-' | '+'));
        if signed {
            self.advance();
        }
        self.scan_digits();
        if self.peek_char() == Some('.') && self.peek_char_n(1).is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
            self.scan_digits();
        }

        if signed {
            return PieceKind::Number(LiteralKind::Number);
        }
        let unit_len = if self.rest.starts_with("ms") {
            2
        } else if self.rest.starts_with('s') {
            1
        } else {
            0
        };
        let bounded = self.rest[unit_len..]
            .chars()
            .next()
            .is_none_or(|c| !c.is_alphanumeric());
        if unit_len > 0 && bounded {
            self.advance_bytes(unit_len);
            PieceKind::Number(LiteralKind::Duration)
        } else {
            PieceKind::Number(LiteralKind::Number)
        }
    }

    fn scan_digits(&mut self) {
        while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
    }

    /// A maximal word run. Hyphens and apostrophes join letters on both
    /// sides (`keydown`, `l'élément`).
    fn scan_word_chars(&mut self) {
        while let Some(c) = self.peek_char() {
            let joiner = matches!(c, '-' | '\'' | '’') && self.peek_char_n(1).is_some_and(is_word_char);
            if is_word_char(c) || joiner {
                self.advance();
            } else {
                break;
            }
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || is_combining_mark(c)
}

fn is_selector_start(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, '_' | '-')
}

/// Byte length of a `<query/>` selector at the start of `rest`.
fn query_len(rest: &str) -> Option<usize> {
    let end = rest.find("/>")? + 2;
    let body = &rest[1..end - 2];
    (!body.is_empty() && !body.contains(char::is_whitespace)).then_some(end)
}
