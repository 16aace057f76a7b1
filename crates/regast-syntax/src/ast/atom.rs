//! Leaf nodes: characters, escapes, references and the group-like atoms.

use regast_core::PropertyKind;
use rowan::TextRange;

use super::{Located, MatchingOptionSequence, Number};

#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    pub kind: AtomKind,
    pub range: TextRange,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AtomKind {
    Char(char),
    /// `\u{...}`, `\x..`, `\o{...}`, `\0..`
    Scalar(Located<char>),
    /// `\u{A B C}`
    ScalarSequence(ScalarSequence),
    Property(CharacterProperty),
    Escaped(EscapedBuiltin),
    /// `\cX`, `\C-X`
    KeyboardControl(char),
    /// `\M-X`
    KeyboardMeta(char),
    /// `\M-\C-X`
    KeyboardMetaControl(char),
    /// `\N{NAME}`
    NamedCharacter(String),
    Any,
    StartOfLine,
    EndOfLine,
    Backreference(Reference),
    Subpattern(Reference),
    Callout(Callout),
    BacktrackingDirective(BacktrackingDirective),
    /// `(?i)`: applies to the rest of the enclosing group.
    ChangeMatchingOptions(MatchingOptionSequence),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarSequence {
    pub scalars: Vec<Located<char>>,
    pub trivia: Vec<super::Trivia>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CharacterProperty {
    pub kind: PropertyKind,
    pub is_inverted: bool,
    /// Spelled `[:name:]` rather than `\p{name}`.
    pub is_posix: bool,
}

/// Single-character escapes with a fixed meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EscapedBuiltin {
    Alarm,
    Escape,
    Formfeed,
    Newline,
    CarriageReturn,
    Tab,
    SingleDataUnit,
    DecimalDigit,
    NotDecimalDigit,
    HorizontalWhitespace,
    NotHorizontalWhitespace,
    NotNewline,
    NewlineSequence,
    Whitespace,
    NotWhitespace,
    VerticalTab,
    NotVerticalTab,
    WordCharacter,
    NotWordCharacter,
    /// `\b` inside a custom character class.
    Backspace,
    GraphemeCluster,
    WordBoundary,
    NotWordBoundary,
    StartOfSubject,
    EndOfSubjectBeforeNewline,
    EndOfSubject,
    FirstMatchingPositionInSubject,
    ResetStartOfMatch,
    TrueAnychar,
    TextSegment,
    NotTextSegment,
}

impl EscapedBuiltin {
    pub fn from_char(c: char, in_custom_class: bool) -> Option<Self> {
        use EscapedBuiltin::*;
        let builtin = match c {
            'a' => Alarm,
            'e' => Escape,
            'f' => Formfeed,
            'n' => Newline,
            'r' => CarriageReturn,
            't' => Tab,
            'd' => DecimalDigit,
            'D' => NotDecimalDigit,
            'h' => HorizontalWhitespace,
            'H' => NotHorizontalWhitespace,
            's' => Whitespace,
            'S' => NotWhitespace,
            'v' => VerticalTab,
            'V' => NotVerticalTab,
            'w' => WordCharacter,
            'W' => NotWordCharacter,
            'b' if in_custom_class => Backspace,
            'b' => WordBoundary,
            _ if in_custom_class => return None,
            'C' => SingleDataUnit,
            'N' => NotNewline,
            'R' => NewlineSequence,
            'X' => GraphemeCluster,
            'B' => NotWordBoundary,
            'A' => StartOfSubject,
            'Z' => EndOfSubjectBeforeNewline,
            'z' => EndOfSubject,
            'G' => FirstMatchingPositionInSubject,
            'K' => ResetStartOfMatch,
            'O' => TrueAnychar,
            'y' => TextSegment,
            'Y' => NotTextSegment,
            _ => return None,
        };
        Some(builtin)
    }

    pub fn character(self) -> char {
        use EscapedBuiltin::*;
        match self {
            Alarm => 'a',
            Escape => 'e',
            Formfeed => 'f',
            Newline => 'n',
            CarriageReturn => 'r',
            Tab => 't',
            SingleDataUnit => 'C',
            DecimalDigit => 'd',
            NotDecimalDigit => 'D',
            HorizontalWhitespace => 'h',
            NotHorizontalWhitespace => 'H',
            NotNewline => 'N',
            NewlineSequence => 'R',
            Whitespace => 's',
            NotWhitespace => 'S',
            VerticalTab => 'v',
            NotVerticalTab => 'V',
            WordCharacter => 'w',
            NotWordCharacter => 'W',
            Backspace | WordBoundary => 'b',
            GraphemeCluster => 'X',
            NotWordBoundary => 'B',
            StartOfSubject => 'A',
            EndOfSubjectBeforeNewline => 'Z',
            EndOfSubject => 'z',
            FirstMatchingPositionInSubject => 'G',
            ResetStartOfMatch => 'K',
            TrueAnychar => 'O',
            TextSegment => 'y',
            NotTextSegment => 'Y',
        }
    }

    /// The scalar a literal escape stands for.
    pub fn scalar_value(self) -> Option<char> {
        use EscapedBuiltin::*;
        match self {
            Alarm => Some('\u{7}'),
            Backspace => Some('\u{8}'),
            Escape => Some('\u{1b}'),
            Formfeed => Some('\u{c}'),
            Newline => Some('\n'),
            CarriageReturn => Some('\r'),
            Tab => Some('\t'),
            _ => None,
        }
    }

    /// Assertions are zero-width and cannot be repeated.
    pub fn is_quantifiable(self) -> bool {
        use EscapedBuiltin::*;
        !matches!(
            self,
            WordBoundary
                | NotWordBoundary
                | StartOfSubject
                | EndOfSubjectBeforeNewline
                | EndOfSubject
                | FirstMatchingPositionInSubject
                | ResetStartOfMatch
                | TextSegment
                | NotTextSegment
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub kind: ReferenceKind,
    /// Oniguruma `\k<name+1>`.
    pub recursion_level: Option<Number>,
    /// Covers the reference body without its delimiters.
    pub inner_range: TextRange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceKind {
    Absolute(Number),
    Relative(Number),
    Named(String),
    /// `(?R)`
    RecurseWholePattern(TextRange),
}

impl ReferenceKind {
    pub fn recurses_whole_pattern(&self) -> bool {
        match self {
            ReferenceKind::Absolute(n) => n.value == 0,
            ReferenceKind::RecurseWholePattern(_) => true,
            ReferenceKind::Relative(_) | ReferenceKind::Named(_) => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Callout {
    /// `(?C)`, `(?C5)`, `(?C"text")`
    Pcre(Located<CalloutArgument>),
    /// `(*name[tag]{args})`
    OnigurumaNamed {
        name: Located<String>,
        tag: Option<CalloutTag>,
        args: Option<CalloutArgList>,
    },
    /// `(?{contents}[tag]X)`
    OnigurumaOfContents {
        open_braces: TextRange,
        contents: Located<String>,
        close_braces: TextRange,
        tag: Option<CalloutTag>,
        direction: Located<CalloutDirection>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalloutArgument {
    Number(i32),
    String(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalloutTag {
    pub left_bracket: TextRange,
    pub name: Located<String>,
    pub right_bracket: TextRange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalloutArgList {
    pub left_brace: TextRange,
    pub args: Vec<Located<String>>,
    pub right_brace: TextRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalloutDirection {
    /// `>` or unspecified.
    InProgress,
    /// `<`
    InRetraction,
    /// `X`
    Both,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BacktrackingDirective {
    pub kind: Located<DirectiveKind>,
    pub name: Option<Located<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveKind {
    Accept,
    Fail,
    Mark,
    Commit,
    Prune,
    Skip,
    Then,
}

impl Atom {
    pub fn new(kind: AtomKind, range: TextRange) -> Self {
        Self { kind, range }
    }

    /// The character this atom matches literally, if it is a single scalar.
    pub fn literal_char(&self) -> Option<char> {
        match &self.kind {
            AtomKind::Char(c) => Some(*c),
            AtomKind::Scalar(s) => Some(s.value),
            AtomKind::Escaped(e) => e.scalar_value(),
            _ => None,
        }
    }

    /// Whether the atom may appear on either side of a class range `a-z`.
    pub fn is_valid_class_range_bound(&self) -> bool {
        self.literal_char().is_some()
            || matches!(
                self.kind,
                AtomKind::KeyboardControl(_)
                    | AtomKind::KeyboardMeta(_)
                    | AtomKind::KeyboardMetaControl(_)
                    | AtomKind::NamedCharacter(_)
            )
    }

    pub fn is_quantifiable(&self) -> bool {
        match &self.kind {
            // Only (*ACCEPT) may be repeated.
            AtomKind::BacktrackingDirective(b) => b.kind.value == DirectiveKind::Accept,
            AtomKind::ChangeMatchingOptions(_) => false,
            AtomKind::Escaped(e) => e.is_quantifiable(),
            AtomKind::StartOfLine | AtomKind::EndOfLine => false,
            _ => true,
        }
    }
}
