//! Line editor abstraction for the REPL.
//!
//! The REPL talks to a [`LineEditor`] so tests can script input while the
//! binary uses rustyline.

use std::borrow::Cow;

use polyphrase_foundation::{ActionType, SemanticRole};
use rustyline::completion::Completer;
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Config, Context, Editor, Helper};

use crate::error::{Result, RuntimeError};
use crate::highlight::CommandHighlighter;

/// Result of reading a line from the editor.
#[derive(Debug)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF).
    Eof,
}

/// Abstraction over line editing functionality.
pub trait LineEditor {
    /// Read a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Read a continuation line of unfinished explicit syntax.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_continuation(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Add a line to history.
    fn add_history(&mut self, line: &str);

    /// Set available completions.
    fn set_keywords(&mut self, keywords: Vec<String>);

    /// Set the language input is highlighted in.
    fn set_language(&mut self, language: &str);
}

struct CommandHelper {
    keywords: Vec<String>,
    highlighter: CommandHighlighter,
}

impl Helper for CommandHelper {}

impl Hinter for CommandHelper {
    type Hint = String;
}

impl Highlighter for CommandHelper {
    fn highlight<'l>(&self, line: &'l str, pos: usize) -> Cow<'l, str> {
        self.highlighter.highlight(line, pos)
    }

    // a closing bracket or quote can recolor the whole line
    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }
}

impl Completer for CommandHelper {
    type Candidate = String;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<String>)> {
        Ok(candidates(line, pos, &self.keywords))
    }
}

impl Validator for CommandHelper {
    fn validate(&self, ctx: &mut ValidationContext<'_>) -> rustyline::Result<ValidationResult> {
        if is_complete(ctx.input()) {
            Ok(ValidationResult::Valid(None))
        } else {
            Ok(ValidationResult::Incomplete)
        }
    }
}

/// Completions for the word ending at `pos`, with the byte offset it starts at.
///
/// The first word inside an open bracket completes to an action name and
/// later words to role tags. Outside brackets words complete to `keywords`.
fn candidates(line: &str, pos: usize, keywords: &[String]) -> (usize, Vec<String>) {
    let head = &line[..pos];
    if head.chars().filter(|&c| c == '"').count() % 2 == 1 {
        return (pos, Vec::new());
    }
    let start = head
        .char_indices()
        .rev()
        .find(|&(_, c)| c.is_whitespace() || c == '[')
        .map_or(0, |(i, c)| i + c.len_utf8());
    let word = &head[start..];
    let open = head.rfind('[').filter(|&i| !head[i..].contains(']'));

    let names: Vec<String> = match open {
        Some(i) if start == i + 1 => ActionType::ALL.iter().map(|a| a.name().to_string()).collect(),
        Some(_) => SemanticRole::ALL.iter().map(|r| format!("{}:", r.tag())).collect(),
        None => keywords.to_vec(),
    };
    let found = names.into_iter().filter(|name| name.starts_with(word)).collect();
    (start, found)
}

/// Returns true unless `input` ends inside a bracket or a string.
#[must_use]
pub fn is_complete(input: &str) -> bool {
    let mut depth = 0i32;
    let mut in_string = false;
    let mut escape_next = false;

    for c in input.chars() {
        if escape_next {
            escape_next = false;
            continue;
        }
        match c {
            '\\' if in_string => escape_next = true,
            '"' => in_string = !in_string,
            '[' if !in_string => depth += 1,
            ']' if !in_string => depth -= 1,
            _ => {}
        }
    }

    depth <= 0 && !in_string
}

/// Line editor implementation using rustyline.
pub struct RustylineEditor {
    editor: Editor<CommandHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a rustyline editor highlighting `language`.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails.
    pub fn new(language: &str) -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(1000)?
            .build();

        let helper = CommandHelper {
            keywords: Vec::new(),
            highlighter: CommandHighlighter::new(language),
        };

        let mut editor = Editor::with_config(config)?;
        editor.set_helper(Some(helper));
        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(RuntimeError::from(e)),
        }
    }

    fn read_continuation(&mut self, prompt: &str) -> Result<ReadResult> {
        self.read_line(prompt)
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }

    fn set_keywords(&mut self, keywords: Vec<String>) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.keywords = keywords;
        }
    }

    fn set_language(&mut self, language: &str) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.highlighter.set_language(language);
        }
    }
}
