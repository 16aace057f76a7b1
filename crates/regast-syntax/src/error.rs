//! Error taxonomy shared by the parser and semantic checks.

use std::fmt;

use regast_core::PropertyError;
use rowan::{TextRange, TextSize};

use crate::diagnostics::Severity;

/// Range of nodes and errors that have no source text.
pub const SYNTHETIC: TextRange = TextRange::empty(TextSize::new(u32::MAX));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Radix {
    Octal,
    Decimal,
    Hex,
}

impl Radix {
    pub fn base(self) -> u32 {
        match self {
            Radix::Octal => 8,
            Radix::Decimal => 10,
            Radix::Hex => 16,
        }
    }

    pub fn accepts(self, c: char) -> bool {
        c.is_digit(self.base())
    }

    fn noun(self) -> &'static str {
        match self {
            Radix::Octal => "octal number",
            Radix::Decimal => "number",
            Radix::Hex => "hexadecimal number",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentifierKind {
    GroupName,
    CalloutName,
    CalloutTag,
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentifierKind::GroupName => write!(f, "group name"),
            IdentifierKind::CalloutName => write!(f, "callout name"),
            IdentifierKind::CalloutTag => write!(f, "callout tag"),
        }
    }
}

/// Every error the front end can report, grammatical or semantic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("number overflow: {0}")]
    NumberOverflow(String),
    #[error("expected {1} digits in '{0}'")]
    ExpectedNumDigits(String, usize),
    #[error("expected {}{}", .1.noun(), in_suffix(.0))]
    ExpectedNumber(String, Radix),
    #[error("expected '{0}'")]
    Expected(String),
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    #[error("{0}")]
    Misc(String),
    #[error("pattern is longer than {} bytes", u32::MAX)]
    PatternTooLong,

    #[error("expected 2 branches in conditional, have {0}")]
    TooManyBranchesInConditional(usize),
    #[error("{0} cannot be used as condition")]
    UnsupportedCondition(String),
    #[error("expected 2 expressions in absent expression, have {0}")]
    TooManyAbsentExpressionChildren(usize),
    #[error("matching option '{0}' may only appear at the start of the regex")]
    GlobalMatchingOptionNotAtStart(String),

    #[error("expected ASCII for '{0}'")]
    ExpectedAscii(char),
    #[error("expected non-empty contents")]
    ExpectedNonEmptyContents,
    #[error("expected escape sequence")]
    ExpectedEscape,
    #[error("invalid escape sequence '\\{0}'")]
    InvalidEscape(String),
    #[error("'{0}' is confusable for a metacharacter; use '\\u{{...}}' instead")]
    ConfusableCharacter(char),
    #[error("quoted sequence may not span multiple lines in multi-line literal")]
    QuoteMayNotSpanMultipleLines,

    #[error("cannot refer to whole pattern here")]
    CannotReferToWholePattern,
    #[error("quantifier '{0}' must appear after expression")]
    QuantifierRequiresOperand(String),
    #[error("backtracking directive '{0}' must include name")]
    BacktrackingDirectiveMustHaveName(String),

    #[error("unknown group kind '({0}'")]
    UnknownGroupKind(String),
    #[error("unknown callout kind '{0}'")]
    UnknownCalloutKind(String),
    #[error("invalid matching option '{0}'")]
    InvalidMatchingOption(char),
    #[error("cannot remove matching options with '^' specifier")]
    CannotRemoveMatchingOptionsAfterCaret,

    #[error("expected custom character class members")]
    ExpectedCustomCharacterClassMembers,
    #[error("empty property")]
    EmptyProperty,
    #[error("{}", unknown_property_message(.key.as_deref(), .value))]
    UnknownProperty { key: Option<String>, value: String },
    #[error(transparent)]
    InvalidPropertyValue(PropertyError),

    #[error("expected group specifier")]
    ExpectedGroupSpecifier,
    #[error("closing ')' does not balance any groups openings")]
    UnbalancedEndOfGroup,
    #[error("expected {0}")]
    ExpectedIdentifier(IdentifierKind),
    #[error("{0} must only contain alphanumeric characters")]
    IdentifierMustBeAlphaNumeric(IdentifierKind),
    #[error("{0} must not start with number")]
    IdentifierCannotStartWithNumber(IdentifierKind),

    #[error("text segment mode cannot be unset, only changed")]
    CannotRemoveTextSegmentOptions,
    #[error("semantic level cannot be unset, only changed")]
    CannotRemoveSemanticsOptions,
    #[error("extended syntax may not be disabled in multi-line mode")]
    CannotRemoveExtendedSyntaxInMultilineMode,
    #[error("extended syntax may not be disabled in multi-line mode; use '(?^x)' instead")]
    CannotResetExtendedSyntaxInMultilineMode,
    #[error("group that unsets extended syntax may not span multiple lines")]
    UnsetExtendedSyntaxMayNotSpanMultipleLines,
    #[error("expected argument to callout")]
    ExpectedCalloutArgument,

    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,

    #[error("{0} is not currently supported")]
    Unsupported(String),
    #[error("{0} is a deprecated Unicode property, and is not supported")]
    DeprecatedUnicode(String),
    #[error("no capture numbered {0}")]
    InvalidReference(i32),
    #[error("no capture group named '{0}'")]
    InvalidNamedReference(String),
    #[error("group named '{0}' already exists")]
    DuplicateNamedCapture(String),
    #[error("invalid character class range")]
    InvalidCharacterClassRangeOperand,
    #[error("range lower bound '{0}' must be less than or equal to upper bound '{1}'")]
    InvalidQuantifierRange(i32, i32),
    #[error("character '{from}' must compare less than or equal to '{to}'")]
    InvalidCharacterRange { from: char, to: char },
    #[error("expression is not quantifiable")]
    NotQuantifiable,
}

fn in_suffix(s: &str) -> String {
    if s.is_empty() {
        String::new()
    } else {
        format!(" in '{s}'")
    }
}

fn unknown_property_message(key: Option<&str>, value: &str) -> String {
    match key {
        Some(key) => format!("unknown character property '{key}={value}'"),
        None => format!("unknown character property '{value}'"),
    }
}

impl ParseError {
    pub fn severity(&self) -> Severity {
        match self {
            ParseError::DeprecatedUnicode(_) => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

impl From<PropertyError> for ParseError {
    fn from(err: PropertyError) -> Self {
        match err {
            PropertyError::EmptyProperty => ParseError::EmptyProperty,
            PropertyError::UnknownProperty { key, value } => {
                ParseError::UnknownProperty { key, value }
            }
            other => ParseError::InvalidPropertyValue(other),
        }
    }
}

/// A fatal error together with the source range it applies to.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    pub kind: ParseError,
    pub range: TextRange,
}

impl Error {
    pub fn new(kind: ParseError, range: TextRange) -> Self {
        Self { kind, range }
    }

    pub fn is_synthetic(&self) -> bool {
        self.range == SYNTHETIC
    }

    /// Same error, with its range moved right by `offset` bytes.
    pub fn shifted(self, offset: TextSize) -> Self {
        if self.is_synthetic() {
            return self;
        }
        Self {
            kind: self.kind,
            range: self.range + offset,
        }
    }
}

/// Unranged errors get [`SYNTHETIC`] until a recording scope stamps them.
impl From<ParseError> for Error {
    fn from(kind: ParseError) -> Self {
        Self::new(kind, SYNTHETIC)
    }
}

impl From<PropertyError> for Error {
    fn from(err: PropertyError) -> Self {
        ParseError::from(err).into()
    }
}

pub type Result<T> = std::result::Result<T, Error>;
