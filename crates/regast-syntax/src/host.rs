//! Entry points for a host compiler.
//!
//! A host tokenizer calls [`lex_regex_literal`] when it sees something that
//! may open a regex literal, then hands the whole literal to
//! [`parse_regex_literal`] once it has decided to treat it as one.

use regast_capture::serialization_buffer_size;

use crate::delimiter::{DelimiterLexError, DelimiterLexer};
use crate::diagnostics::Diagnostics;
use crate::error::Error;

/// Version of the regex text handed back to the host for emission.
pub const REGEX_LITERAL_FORMAT_VERSION: u32 = 1;

/// Where the host should resume, plus the error to emit, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostLexResult {
    pub resume: usize,
    pub error: Option<HostLexError>,
}

/// A lexing error, always located at the start of the literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostLexError {
    pub message: String,
    /// No recovery is possible; the host should not treat the literal as
    /// well-formed.
    pub completely_erroneous: bool,
}

/// Tries to lex a regex literal at the start of `input`.
///
/// `None` means "not a regex literal here": always for an unrecognized
/// delimiter, and for any error unless `must_be_regex` is set.
pub fn lex_regex_literal(input: &[u8], must_be_regex: bool) -> Option<HostLexResult> {
    match DelimiterLexer::new(input).lex() {
        Ok(lexed) => Some(HostLexResult {
            resume: lexed.end,
            error: None,
        }),
        Err(DelimiterLexError::UnknownDelimiter) => None,
        Err(_) if !must_be_regex => None,
        Err(err) => {
            tracing::debug!(%err, "regex literal lexing failed");
            Some(HostLexResult {
                resume: err.resume()?,
                error: Some(HostLexError {
                    message: err.to_string(),
                    completely_erroneous: !err.is_recoverable(),
                }),
            })
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLiteral {
    /// Text to emit, currently the literal itself.
    pub regex: String,
    pub version: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct HostParseError {
    pub message: String,
    /// Byte offset into the literal, when the error has one.
    pub location: Option<usize>,
    /// The literal with every finding annotated under it.
    pub rendered: String,
}

impl HostParseError {
    fn new(err: &Error, diagnostics: &Diagnostics, literal: &str) -> Self {
        let location = (!err.is_synthetic()).then(|| usize::from(err.range.start()));
        Self {
            message: format!("cannot parse regular expression: {err}"),
            location,
            rendered: diagnostics.annotate(literal).to_string(),
        }
    }
}

/// Parses `input`, delimiters included, and appends its encoded capture
/// structure to `capture_buf`.
///
/// Any error-severity diagnostic fails the parse; warnings do not.
pub fn parse_regex_literal(
    input: &str,
    capture_buf: &mut Vec<u8>,
) -> Result<ParsedLiteral, HostParseError> {
    let ast = crate::parse_with_delimiters(input)
        .map_err(|err| HostParseError::new(&err, &Diagnostics::from(&err), input))?;
    if let Some(err) = ast.diagnostics.first_error() {
        return Err(HostParseError::new(&err, &ast.diagnostics, input));
    }

    let capacity = serialization_buffer_size(input.len());
    ast.capture_structure()
        .encode(capture_buf, capacity)
        .map_err(|err| HostParseError {
            message: format!("cannot encode capture structure: {err}"),
            location: None,
            rendered: String::new(),
        })?;

    Ok(ParsedLiteral {
        regex: input.to_string(),
        version: REGEX_LITERAL_FORMAT_VERSION,
    })
}
