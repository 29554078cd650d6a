//! Syntax highlighting for the REPL.
//!
//! Lines are colored by the roles the tokenizer assigns in the current
//! source language, so the colors show exactly what the parser will see.

use std::borrow::Cow;

use polyphrase_foundation::{Keyword, LiteralKind};
use polyphrase_parser::{Engine, TokenRole};

const RESET: &str = "\x1b[0m";

/// Highlighter for command text in one language.
pub struct CommandHighlighter {
    language: String,
}

impl CommandHighlighter {
    /// Creates a highlighter for `language`.
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
        }
    }

    /// The language lines are tokenized as.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Switches the language lines are tokenized as.
    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
    }

    /// Highlight a line of input.
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        // REPL commands
        if line.trim_start().starts_with(':') {
            return Cow::Owned(format!("\x1b[1;36m{line}{RESET}"));
        }
        let Ok(stream) = Engine::global().tokenize(line, &self.language) else {
            return Cow::Borrowed(line);
        };

        let mut result = String::with_capacity(line.len() * 2);
        let mut cursor = 0;
        for token in stream.iter() {
            let (start, end) = (token.span.start, token.span.end);
            if start < cursor
                || end > line.len()
                || !line.is_char_boundary(start)
                || !line.is_char_boundary(end)
            {
                continue;
            }
            result.push_str(&line[cursor..start]);
            match color(token.role) {
                Some(color) => {
                    result.push_str(color);
                    result.push_str(&line[start..end]);
                    result.push_str(RESET);
                }
                None => result.push_str(&line[start..end]),
            }
            cursor = end;
        }
        result.push_str(&line[cursor..]);
        Cow::Owned(result)
    }
}

fn color(role: TokenRole) -> Option<&'static str> {
    match role {
        TokenRole::Keyword(Keyword::Action(_)) => Some("\x1b[1;32m"), // bold green
        TokenRole::Keyword(Keyword::On | Keyword::Event(_)) => Some("\x1b[32m"), // green
        TokenRole::Keyword(Keyword::Not) => Some("\x1b[31m"), // red
        TokenRole::Keyword(Keyword::Reference(_)) => Some("\x1b[34m"), // blue
        TokenRole::Selector(_) => Some("\x1b[36m"), // cyan
        TokenRole::Literal(LiteralKind::String) => Some("\x1b[33m"), // yellow
        TokenRole::Literal(_) => Some("\x1b[35m"), // magenta
        TokenRole::Particle => Some("\x1b[2m"), // dim
        TokenRole::Identifier | TokenRole::Punctuation => None,
    }
}

impl Default for CommandHighlighter {
    fn default() -> Self {
        Self::new("en")
    }
}
