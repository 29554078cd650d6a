//! The interactive translation REPL.
//!
//! Each line is parsed in the session's source language and rendered in
//! its target language. Lines starting with `:` are commands:
//!
//! ```text
//! :from <code>    parse input as <code>
//! :to <code>      render output in <code>
//! :explicit       toggle printing the explicit form
//! :tokens         toggle printing the input's tokens
//! :languages      list supported languages
//! :help           show this help
//! :quit, :q       leave the REPL
//! ```

use std::io::{self, Write};

use polyphrase_foundation::Keyword;
use polyphrase_parser::Engine;

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::error::{Result, RuntimeError};
use crate::output::format_tokens;
use crate::session::Session;

const COMMANDS: &[&str] = &[
    ":from",
    ":to",
    ":explicit",
    ":tokens",
    ":languages",
    ":help",
    ":quit",
];

const HELP: &str = "\
:from <code>    parse input as <code>
:to <code>      render output in <code>
:explicit       toggle printing the explicit form
:tokens         toggle printing the input's tokens
:languages      list supported languages
:help           show this help
:quit, :q       leave the REPL";

/// What evaluating one line produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    /// Text to print.
    Output(String),
    /// Nothing to print.
    Silent,
    /// The user asked to leave.
    Quit,
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Engine doing the translation.
    engine: Engine,

    /// Translation direction and toggles.
    session: Session,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Continuation prompt for unfinished explicit syntax.
    continuation_prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a REPL with the rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(engine: Engine, session: Session) -> Result<Self> {
        let editor = RustylineEditor::new(session.from())?;
        Ok(Self::with_editor(editor)
            .with_engine(engine)
            .with_session(session))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a REPL over the built-in languages with the given editor.
    pub fn with_editor(editor: E) -> Self {
        let mut repl = Self {
            editor,
            engine: Engine::builtin(),
            session: Session::default(),
            show_banner: true,
            continuation_prompt: ".. ".to_string(),
        };
        repl.sync_editor();
        repl
    }

    /// Replaces the engine.
    #[must_use]
    pub fn with_engine(mut self, engine: Engine) -> Self {
        self.engine = engine;
        self.sync_editor();
        self
    }

    /// Replaces the session.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self.sync_editor();
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Runs the REPL loop.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        loop {
            match self.read_eval_print() {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => self.print_error(&e),
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let Some(input) = self.read_input()? else {
            return Ok(false);
        };
        if input.trim().is_empty() {
            return Ok(true);
        }
        self.editor.add_history(&input);

        match self.eval(&input) {
            Ok(Reply::Output(text)) => println!("{text}"),
            Ok(Reply::Silent) => {}
            Ok(Reply::Quit) => return Ok(false),
            Err(e) => self.print_error(&e),
        }
        Ok(true)
    }

    /// Reads a line, continuing while explicit syntax is unfinished.
    fn read_input(&mut self) -> Result<Option<String>> {
        let prompt = self.prompt();
        let mut input = match self.editor.read_line(&prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => {
                println!();
                return Ok(Some(String::new()));
            }
            ReadResult::Eof => return Ok(None),
        };

        while !crate::editor::is_complete(&input) {
            match self.editor.read_continuation(&self.continuation_prompt)? {
                ReadResult::Line(line) => {
                    input.push('\n');
                    input.push_str(&line);
                }
                ReadResult::Interrupted => {
                    println!("\nInput cancelled.");
                    return Ok(Some(String::new()));
                }
                ReadResult::Eof => {
                    return Err(RuntimeError::Usage(
                        "unexpected EOF in unfinished explicit syntax".to_string(),
                    ));
                }
            }
        }
        Ok(Some(input))
    }

    /// Evaluates one line: a `:` command or a command to translate.
    ///
    /// # Errors
    ///
    /// Returns an error for a bad REPL command or a failed translation.
    pub fn eval(&mut self, input: &str) -> Result<Reply> {
        let line = input.trim();
        if line.is_empty() {
            return Ok(Reply::Silent);
        }
        match line.strip_prefix(':') {
            Some(command) => self.command(command),
            None => self.translate(line).map(Reply::Output),
        }
    }

    fn command(&mut self, command: &str) -> Result<Reply> {
        let mut parts = command.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let arg = parts.next();
        match (name, arg) {
            ("from", Some(code)) => {
                self.require_language(code)?;
                self.session.set_from(code);
                self.sync_editor();
                Ok(Reply::Output(format!("parsing {code}")))
            }
            ("to", Some(code)) => {
                self.require_language(code)?;
                self.session.set_to(code);
                Ok(Reply::Output(format!("rendering {code}")))
            }
            ("from" | "to", None) => Err(RuntimeError::Usage(format!(":{name} needs a language code"))),
            ("explicit", None) => {
                let on = self.session.toggle_explicit();
                Ok(Reply::Output(format!("explicit output {}", on_off(on))))
            }
            ("tokens", None) => {
                let on = self.session.toggle_tokens();
                Ok(Reply::Output(format!("token output {}", on_off(on))))
            }
            ("languages", None) => Ok(Reply::Output(
                self.engine
                    .languages()
                    .profiles()
                    .map(|profile| format!("{:<4}{}", profile.code(), profile.name()))
                    .collect::<Vec<_>>()
                    .join("\n"),
            )),
            ("help", None) => Ok(Reply::Output(HELP.to_string())),
            ("quit" | "q", None) => Ok(Reply::Quit),
            _ => Err(RuntimeError::Usage(format!(
                "unknown command :{command}; try :help"
            ))),
        }
    }

    fn translate(&self, line: &str) -> Result<String> {
        let (from, to) = (self.session.from(), self.session.to());
        let mut lines = Vec::new();
        if self.session.show_tokens() {
            lines.push(format_tokens(&self.engine.tokenize(line, from)?));
        }
        let node = self.engine.parse(line, from)?;
        lines.push(self.engine.render(&node, to)?);
        if self.session.show_explicit() {
            lines.push(self.engine.render_explicit(&node));
        }
        Ok(lines.join("\n"))
    }

    fn require_language(&self, code: &str) -> Result<()> {
        if self.engine.is_language_supported(code) {
            Ok(())
        } else {
            Err(polyphrase_foundation::Error::unsupported_language(code).into())
        }
    }

    /// Points highlighting and completion at the source language.
    fn sync_editor(&mut self) {
        let from = self.session.from().to_string();
        let keywords = completion_words(&self.engine, &from);
        self.editor.set_language(&from);
        self.editor.set_keywords(keywords);
    }

    fn prompt(&self) -> String {
        format!("{}>{} ", self.session.from(), self.session.to())
    }

    #[allow(clippy::unused_self)]
    fn print_error(&self, error: &RuntimeError) {
        eprintln!("\x1b[31mError: {error}\x1b[0m");
    }

    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("\x1b[1;36mpolyphrase\x1b[0m v{}", env!("CARGO_PKG_VERSION"));
        println!(
            "Translating {} into {}. Type :help for commands, Ctrl+D to exit.\n",
            self.session.from(),
            self.session.to()
        );
        let _ = io::stdout().flush();
    }
}

fn on_off(on: bool) -> &'static str {
    if on { "on" } else { "off" }
}

/// Display forms of every keyword of `language`, then the REPL commands.
fn completion_words(engine: &Engine, language: &str) -> Vec<String> {
    let mut words: Vec<String> = Vec::new();
    if let Ok(profile) = engine.profile(language) {
        let mut seen: Vec<Keyword> = Vec::new();
        for (_, keyword) in profile.keyword_entries() {
            if seen.contains(&keyword) {
                continue;
            }
            seen.push(keyword);
            if let Some(display) = profile.display(keyword) {
                words.push(display.to_string());
            }
        }
    }
    words.extend(COMMANDS.iter().map(ToString::to_string));
    words
}
