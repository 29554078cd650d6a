//! Session state for the REPL.

/// Translation direction and display toggles for an interactive session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    from: String,
    to: String,
    show_explicit: bool,
    show_tokens: bool,
}

impl Session {
    /// Creates a session translating `from` into `to`.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            show_explicit: false,
            show_tokens: false,
        }
    }

    /// The language input is parsed as.
    #[must_use]
    pub fn from(&self) -> &str {
        &self.from
    }

    /// The language output is rendered in.
    #[must_use]
    pub fn to(&self) -> &str {
        &self.to
    }

    /// Sets the source language.
    pub fn set_from(&mut self, language: impl Into<String>) {
        self.from = language.into();
    }

    /// Sets the target language.
    pub fn set_to(&mut self, language: impl Into<String>) {
        self.to = language.into();
    }

    /// Whether each translation is followed by its explicit form.
    #[must_use]
    pub const fn show_explicit(&self) -> bool {
        self.show_explicit
    }

    /// Whether each translation is preceded by the input's tokens.
    #[must_use]
    pub const fn show_tokens(&self) -> bool {
        self.show_tokens
    }

    /// Flips explicit output, returning the new setting.
    pub fn toggle_explicit(&mut self) -> bool {
        self.show_explicit = !self.show_explicit;
        self.show_explicit
    }

    /// Flips token output, returning the new setting.
    pub fn toggle_tokens(&mut self) -> bool {
        self.show_tokens = !self.show_tokens;
        self.show_tokens
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new("en", "ja")
    }
}
