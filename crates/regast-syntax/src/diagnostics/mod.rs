//! Accumulated, non-fatal findings about a parsed pattern.

mod message;
mod printer;


use rowan::{TextRange, TextSize};

pub use message::{DiagnosticMessage, RelatedInfo, Severity};
pub use printer::Annotated;

use crate::error::{Error, ParseError};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    messages: Vec<DiagnosticMessage>,
}

#[must_use = "diagnostic not emitted, call .emit()"]
pub struct DiagnosticBuilder<'a> {
    diagnostics: &'a mut Diagnostics,
    message: DiagnosticMessage,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// Start a diagnostic for `error` at `range`.
    ///
    /// The error's own text is the message. Call `.message()` on the builder to override.
    pub fn report(&mut self, error: ParseError, range: TextRange) -> DiagnosticBuilder<'_> {
        DiagnosticBuilder {
            diagnostics: self,
            message: DiagnosticMessage::new(error, range),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticMessage> {
        self.messages.iter()
    }

    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(|d| d.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.messages.iter().any(|d| d.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.messages.iter().filter(|d| d.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.messages.iter().filter(|d| d.is_warning()).count()
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.messages.extend(other.messages);
    }

    /// Moves every range right by `offset`, e.g. from pattern-relative to
    /// literal-relative.
    pub fn shifted(mut self, offset: TextSize) -> Self {
        for msg in &mut self.messages {
            msg.range += offset;
            for related in &mut msg.related {
                related.range += offset;
            }
        }
        self
    }

    /// First error-severity diagnostic, as a fatal error.
    pub fn first_error(&self) -> Option<Error> {
        self.messages
            .iter()
            .find(|d| d.is_error())
            .map(|d| Error::new(d.error.clone(), d.range))
    }
}

/// A fatal error as a one-element list.
impl From<&Error> for Diagnostics {
    fn from(err: &Error) -> Self {
        let mut diagnostics = Diagnostics::new();
        diagnostics.report(err.kind.clone(), err.range).emit();
        diagnostics
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a DiagnosticMessage;
    type IntoIter = std::slice::Iter<'a, DiagnosticMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

impl<'a> DiagnosticBuilder<'a> {
    /// Replace the error's default text.
    pub fn message(mut self, msg: impl Into<String>) -> Self {
        self.message.message = msg.into();
        self
    }

    pub fn related_to(mut self, msg: impl Into<String>, range: TextRange) -> Self {
        self.message.related.push(RelatedInfo::new(range, msg));
        self
    }

    pub fn emit(self) {
        self.diagnostics.messages.push(self.message);
    }
}
