//! Recognition of delimited regex literals in host source.
//!
//! The lexer works on bytes so a host tokenizer can hand it the remainder of
//! a buffer without knowing where the literal ends. It finds the closing
//! delimiter, validates the contents, and reports where lexing should resume.

use crate::options::SyntaxOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DelimiterKind {
    /// `/.../`, optionally fenced as `#/.../#`.
    ForwardSlash,
    /// `#|...|#`
    Experimental,
    /// `re'...'`
    ReSingleQuote,
    /// `rx'...'`
    RxSingleQuote,
}

impl DelimiterKind {
    pub const ALL: [DelimiterKind; 4] = [
        DelimiterKind::ForwardSlash,
        DelimiterKind::Experimental,
        DelimiterKind::ReSingleQuote,
        DelimiterKind::RxSingleQuote,
    ];

    /// Opening spelling, without any pound fence.
    pub fn opening(self) -> &'static str {
        match self {
            DelimiterKind::ForwardSlash => "/",
            DelimiterKind::Experimental => "#|",
            DelimiterKind::ReSingleQuote => "re'",
            DelimiterKind::RxSingleQuote => "rx'",
        }
    }

    /// Closing spelling, without any pound fence.
    pub fn closing(self) -> &'static str {
        match self {
            DelimiterKind::ForwardSlash => "/",
            DelimiterKind::Experimental => "|#",
            DelimiterKind::ReSingleQuote | DelimiterKind::RxSingleQuote => "'",
        }
    }

    pub fn allows_pound_fence(self) -> bool {
        self == DelimiterKind::ForwardSlash
    }

    fn is_quote(self) -> bool {
        matches!(self, DelimiterKind::ReSingleQuote | DelimiterKind::RxSingleQuote)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Delimiter {
    pub kind: DelimiterKind,
    pub pound_count: usize,
}

impl Delimiter {
    pub fn new(kind: DelimiterKind, pound_count: usize) -> Self {
        Self { kind, pound_count }
    }

    pub fn opening(&self) -> String {
        format!("{}{}", "#".repeat(self.pound_count), self.kind.opening())
    }

    pub fn closing(&self) -> String {
        format!("{}{}", self.kind.closing(), "#".repeat(self.pound_count))
    }

    /// Only pound-fenced forward slashes may span lines.
    pub fn allows_multiline(&self) -> bool {
        self.kind == DelimiterKind::ForwardSlash && self.pound_count > 0
    }

    /// Dialect a literal with this delimiter is parsed in.
    pub fn default_syntax(&self, multiline: bool) -> SyntaxOptions {
        match self.kind {
            DelimiterKind::ForwardSlash if multiline && self.pound_count > 0 => {
                SyntaxOptions::EXTENDED_SYNTAX | SyntaxOptions::MULTILINE_COMPILER_LITERAL
            }
            DelimiterKind::ForwardSlash | DelimiterKind::ReSingleQuote => {
                SyntaxOptions::TRADITIONAL
            }
            DelimiterKind::Experimental | DelimiterKind::RxSingleQuote => {
                SyntaxOptions::EXPERIMENTAL
            }
        }
    }
}

/// A successfully lexed literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexed<'a> {
    pub contents: &'a str,
    pub delimiter: Delimiter,
    /// Byte offset just past the closing delimiter.
    pub end: usize,
    pub multiline: bool,
}

/// Lexing failures. `resume` is the byte offset a host should continue from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DelimiterLexError {
    #[error("unknown regex literal delimiter")]
    UnknownDelimiter,
    #[error("unterminated regex literal")]
    Unterminated { resume: usize },
    #[error("multi-line regex closing delimiter must appear on new line")]
    MultilineClosingNotOnNewline { resume: usize },
    #[error("unprintable ASCII character found in source file")]
    UnprintableAscii { resume: usize },
    #[error("invalid UTF-8 found in source file")]
    InvalidUtf8 { resume: usize },
}

impl DelimiterLexError {
    /// Whether a host can keep lexing past the literal as if it were
    /// well-formed.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            DelimiterLexError::Unterminated { .. }
                | DelimiterLexError::MultilineClosingNotOnNewline { .. }
        )
    }

    pub fn resume(&self) -> Option<usize> {
        match *self {
            DelimiterLexError::UnknownDelimiter => None,
            DelimiterLexError::Unterminated { resume }
            | DelimiterLexError::MultilineClosingNotOnNewline { resume }
            | DelimiterLexError::UnprintableAscii { resume }
            | DelimiterLexError::InvalidUtf8 { resume } => Some(resume),
        }
    }
}

type LexResult<T> = std::result::Result<T, DelimiterLexError>;

/// Prefixes after which a `'` may open a name rather than close the literal.
const QUOTE_PREFIXES: [&str; 5] = ["(?", "(?(", "\\k", "\\g", CALLOUT_PREFIX];
const CALLOUT_PREFIX: &str = "(?C";

pub struct DelimiterLexer<'a> {
    input: &'a [u8],
    cursor: usize,
    kinds: Vec<DelimiterKind>,
}

impl<'a> DelimiterLexer<'a> {
    pub fn new(input: &'a (impl AsRef<[u8]> + ?Sized)) -> Self {
        Self {
            input: input.as_ref(),
            cursor: 0,
            kinds: DelimiterKind::ALL.to_vec(),
        }
    }

    /// Restricts recognition to `kinds`, tried in the given order.
    pub fn with_kinds(mut self, kinds: &[DelimiterKind]) -> Self {
        self.kinds = kinds.to_vec();
        self
    }

    pub fn lex(mut self) -> LexResult<Lexed<'a>> {
        let delimiter = self.lex_opening()?;
        tracing::debug!(kind = ?delimiter.kind, pounds = delimiter.pound_count, "regex literal opening");

        let multiline = delimiter.allows_multiline() && self.try_eat_multiline_opening();
        let contents_start = self.cursor;
        let closing = delimiter.closing();

        loop {
            if delimiter.kind.is_quote() {
                self.try_skip_quote();
            }
            if self.starts_with(closing.as_bytes()) {
                let contents_end = self.cursor;
                self.cursor += closing.len();
                let last_line = last_line(&self.input[contents_start..contents_end]);
                if multiline && !last_line.iter().all(is_horizontal_ws) {
                    return Err(DelimiterLexError::MultilineClosingNotOnNewline {
                        resume: self.cursor,
                    });
                }
                let contents = std::str::from_utf8(&self.input[contents_start..contents_end])
                    .map_err(|_| DelimiterLexError::InvalidUtf8 { resume: self.cursor })?;
                return Ok(Lexed {
                    contents,
                    delimiter,
                    end: self.cursor,
                    multiline,
                });
            }
            self.advance(false, multiline)?;
        }
    }

    fn lex_opening(&mut self) -> LexResult<Delimiter> {
        let pounds = self.input.iter().take_while(|&&b| b == b'#').count();
        for &kind in &self.kinds {
            let pound_count = if kind.allows_pound_fence() { pounds } else { 0 };
            let opening = kind.opening().as_bytes();
            if self.input[pound_count..].starts_with(opening) {
                self.cursor = pound_count + opening.len();
                return Ok(Delimiter::new(kind, pound_count));
            }
        }
        Err(DelimiterLexError::UnknownDelimiter)
    }

    /// Horizontal whitespace then a newline right after the opening.
    fn try_eat_multiline_opening(&mut self) -> bool {
        let rest = &self.input[self.cursor..];
        let ws = rest.iter().take_while(|b| is_horizontal_ws(b)).count();
        match newline_len(&rest[ws..]) {
            Some(len) => {
                self.cursor += ws + len;
                true
            }
            None => false,
        }
    }

    fn starts_with(&self, s: &[u8]) -> bool {
        self.input[self.cursor..].starts_with(s)
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.cursor).copied()
    }

    /// `prefix` sits right before the cursor and is not itself escaped.
    fn preceded_by(&self, prefix: &str) -> bool {
        let Some(start) = self.cursor.checked_sub(prefix.len()) else {
            return false;
        };
        if &self.input[start..self.cursor] != prefix.as_bytes() {
            return false;
        }
        start == 0 || self.input[start - 1] != b'\\'
    }

    /// Steps over a `'` that more likely opens a quoted name than closes the
    /// literal, e.g. the one in `re'(?'name'a)'`.
    fn try_skip_quote(&mut self) {
        if self.peek() != Some(b'\'') {
            return;
        }
        let Some(prefix) = QUOTE_PREFIXES.into_iter().find(|p| self.preceded_by(p)) else {
            return;
        };
        let is_callout = prefix == CALLOUT_PREFIX;

        let original = self.cursor;
        self.cursor += 1;
        while let Some(next) = self.peek() {
            if next == b'\'' {
                self.cursor += 1;
                tracing::trace!(prefix, from = original, to = self.cursor, "skipped quoted name");
                return;
            }
            if !is_callout && !is_possibly_group_reference(next) {
                break;
            }
            if self.advance(false, false).is_err() {
                break;
            }
        }
        tracing::trace!(prefix, at = original, "quote is the closing delimiter");
        self.cursor = original;
    }

    fn advance(&mut self, escaped: bool, multiline: bool) -> LexResult<()> {
        let Some(next) = self.peek() else {
            return Err(DelimiterLexError::Unterminated {
                resume: self.cursor,
            });
        };
        match next {
            // Bytes of a multi-byte scalar; validated with the contents.
            b if !b.is_ascii() => self.cursor += 1,
            b'\n' | b'\r' if !multiline => {
                return Err(DelimiterLexError::Unterminated {
                    resume: self.cursor,
                });
            }
            b'\n' | b'\r' | b'\0' => self.cursor += 1,
            b'\t' if multiline => self.cursor += 1,
            b'\\' if !escaped => {
                self.cursor += 1;
                self.advance(true, multiline)?;
            }
            b if !is_printable_ascii(b) => {
                return Err(DelimiterLexError::UnprintableAscii {
                    resume: self.cursor + 1,
                });
            }
            _ => self.cursor += 1,
        }
        Ok(())
    }
}

fn is_horizontal_ws(b: &u8) -> bool {
    matches!(b, b' ' | b'\t')
}

fn is_printable_ascii(b: u8) -> bool {
    matches!(b, b' '..=b'~')
}

/// Text after the last line break, escaped or not.
fn last_line(contents: &[u8]) -> &[u8] {
    match contents.iter().rposition(|&b| matches!(b, b'\n' | b'\r')) {
        Some(i) => &contents[i + 1..],
        None => contents,
    }
}

fn is_possibly_group_reference(b: u8) -> bool {
    !b.is_ascii() || b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-' | b'+')
}

fn newline_len(rest: &[u8]) -> Option<usize> {
    match rest {
        [b'\r', b'\n', ..] => Some(2),
        [b'\n' | b'\r', ..] => Some(1),
        _ => None,
    }
}

/// Contents and delimiter of an already validated literal. The closing
/// delimiter may be missing. Multi-line contents start after the opening
/// newline.
pub fn strip_delimiters(text: &str) -> Option<(&str, Delimiter)> {
    let pounds = text.bytes().take_while(|&b| b == b'#').count();
    DelimiterKind::ALL.into_iter().find_map(|kind| {
        let pound_count = if kind.allows_pound_fence() { pounds } else { 0 };
        let delimiter = Delimiter::new(kind, pound_count);
        let mut contents = text.strip_prefix(delimiter.opening().as_str())?;
        contents = contents
            .strip_suffix(delimiter.closing().as_str())
            .unwrap_or(contents);
        if delimiter.allows_multiline() {
            let ws = contents.bytes().take_while(is_horizontal_ws).count();
            if let Some(len) = newline_len(&contents.as_bytes()[ws..]) {
                contents = &contents[ws + len..];
            }
        }
        Some((contents, delimiter))
    })
}
