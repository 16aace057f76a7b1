//! Owned syntax tree for a parsed pattern.
//!
//! Every node carries the source range it was parsed from. Generated nodes
//! use [`SYNTHETIC`](crate::error::SYNTHETIC).

mod atom;
pub mod visitor;

#[cfg(test)]
mod ast_tests;

pub use atom::{
    Atom, AtomKind, BacktrackingDirective, Callout, CalloutArgList, CalloutArgument,
    CalloutDirection, CalloutTag, CharacterProperty, DirectiveKind, EscapedBuiltin, Reference,
    ReferenceKind, ScalarSequence,
};

use regast_capture::{CaptureList, CaptureStructure};
use rowan::TextRange;

use crate::diagnostics::Diagnostics;
use crate::options::SyntaxOptions;

/// A value paired with the range it was spelled at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Located<T> {
    pub value: T,
    pub range: TextRange,
}

impl<T> Located<T> {
    pub fn new(value: T, range: TextRange) -> Self {
        Self { value, range }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Located<U> {
        Located::new(f(self.value), self.range)
    }
}

pub type Number = Located<i32>;

/// Result of a successful parse.
#[derive(Debug, Clone)]
pub struct Ast {
    pub root: Node,
    pub global_options: Option<GlobalMatchingOptionSequence>,
    pub diagnostics: Diagnostics,
    pub syntax: SyntaxOptions,
}

impl Ast {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors()
    }

    pub fn capture_list(&self) -> CaptureList {
        crate::captures::capture_list(&self.root)
    }

    pub fn capture_structure(&self) -> CaptureStructure {
        self.capture_list().structure(false)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Alternation(Alternation),
    Concatenation(Concatenation),
    Group(Group),
    Conditional(Conditional),
    Quantification(Quantification),
    Atom(Atom),
    CustomCharacterClass(CustomCharacterClass),
    Quote(Quote),
    Trivia(Trivia),
    AbsentFunction(AbsentFunction),
    Empty(TextRange),
}

impl Node {
    pub fn range(&self) -> TextRange {
        match self {
            Node::Alternation(n) => n.range,
            Node::Concatenation(n) => n.range,
            Node::Group(n) => n.range,
            Node::Conditional(n) => n.range,
            Node::Quantification(n) => n.range,
            Node::Atom(n) => n.range,
            Node::CustomCharacterClass(n) => n.range,
            Node::Quote(n) => n.range,
            Node::Trivia(n) => n.range,
            Node::AbsentFunction(n) => n.range,
            Node::Empty(range) => *range,
        }
    }

    /// Direct children in source order.
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::Alternation(n) => n.children.iter().collect(),
            Node::Concatenation(n) => n.children.iter().collect(),
            Node::Group(n) => vec![&*n.child],
            Node::Conditional(n) => {
                let mut out = Vec::with_capacity(3);
                if let ConditionKind::Group(group) = &n.condition.kind {
                    out.push(&*group.child);
                }
                out.push(&*n.true_branch);
                out.push(&*n.false_branch);
                out
            }
            Node::Quantification(n) => vec![&*n.child],
            Node::AbsentFunction(n) => match &n.kind {
                AbsentFunctionKind::Repeater(c) | AbsentFunctionKind::Stopper(c) => vec![&**c],
                AbsentFunctionKind::Expression {
                    absentee,
                    expr,
                    ..
                } => vec![&**absentee, &**expr],
                AbsentFunctionKind::Clearer => vec![],
            },
            Node::Atom(_)
            | Node::CustomCharacterClass(_)
            | Node::Quote(_)
            | Node::Trivia(_)
            | Node::Empty(_) => vec![],
        }
    }

    /// Trivia and empty nodes have no effect on matching.
    pub fn is_trivia(&self) -> bool {
        matches!(self, Node::Trivia(_) | Node::Empty(_))
    }

    pub fn is_quantifiable(&self) -> bool {
        match self {
            Node::Group(_)
            | Node::Conditional(_)
            | Node::CustomCharacterClass(_)
            | Node::AbsentFunction(_) => true,
            Node::Atom(atom) => atom.is_quantifiable(),
            Node::Alternation(_)
            | Node::Concatenation(_)
            | Node::Quantification(_)
            | Node::Quote(_)
            | Node::Trivia(_)
            | Node::Empty(_) => false,
        }
    }

    pub fn as_atom(&self) -> Option<&Atom> {
        match self {
            Node::Atom(atom) => Some(atom),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Alternation {
    pub children: Vec<Node>,
    /// One fewer than `children`.
    pub pipes: Vec<TextRange>,
    pub range: TextRange,
}

impl Alternation {
    /// Splits a two-armed alternation into `(lhs, pipe, rhs)`, or returns
    /// the arm count.
    pub fn into_pair(self) -> Result<(Node, TextRange, Node), usize> {
        let count = self.children.len();
        let mut children = self.children.into_iter();
        match (children.next(), self.pipes.first(), children.next(), children.next()) {
            (Some(lhs), Some(&pipe), Some(rhs), None) => Ok((lhs, pipe, rhs)),
            _ => Err(count),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Concatenation {
    pub children: Vec<Node>,
    pub range: TextRange,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub kind: Located<GroupKind>,
    pub child: Box<Node>,
    pub range: TextRange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupKind {
    /// `(...)`
    Capture,
    /// `(?<name>...)`, `(?'name'...)`, `(?P<name>...)`
    NamedCapture(Located<String>),
    /// `(?<name-prior>...)`
    BalancedCapture(BalancedCapture),
    /// `(?:...)`, `(_:...)`
    NonCapture,
    /// `(?|...)`
    NonCaptureReset,
    /// `(?>...)`
    AtomicNonCapturing,
    /// `(?=...)`
    Lookahead,
    /// `(?!...)`
    NegativeLookahead,
    /// `(?*...)`
    NonAtomicLookahead,
    /// `(?<=...)`
    Lookbehind,
    /// `(?<!...)`
    NegativeLookbehind,
    /// `(?<*...)`
    NonAtomicLookbehind,
    /// `(*sr:...)`
    ScriptRun,
    /// `(*asr:...)`
    AtomicScriptRun,
    /// `(?i-m:...)`
    ChangeMatchingOptions(MatchingOptionSequence),
}

impl GroupKind {
    pub fn is_capturing(&self) -> bool {
        matches!(
            self,
            GroupKind::Capture | GroupKind::NamedCapture(_) | GroupKind::BalancedCapture(_)
        )
    }

    pub fn name(&self) -> Option<&Located<String>> {
        match self {
            GroupKind::NamedCapture(name) => Some(name),
            GroupKind::BalancedCapture(b) => b.name.as_ref(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalancedCapture {
    pub name: Option<Located<String>>,
    pub dash: TextRange,
    pub prior_name: Located<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Conditional {
    pub condition: Condition,
    pub true_branch: Box<Node>,
    pub pipe: Option<TextRange>,
    pub false_branch: Box<Node>,
    pub range: TextRange,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub kind: ConditionKind,
    pub range: TextRange,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConditionKind {
    /// `(?(1)...)`, `(?(<name>)...)`
    GroupMatched(Reference),
    /// `(?(R)...)`
    RecursionCheck,
    /// `(?(R1)...)`, `(?(R&name)...)`
    GroupRecursionCheck(Reference),
    /// `(?(DEFINE)...)`
    DefineGroup,
    /// `(?(VERSION>=10.32)...)`
    PcreVersionCheck(PcreVersionCheck),
    /// `(?(?=a)...)`
    Group(Box<Group>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PcreVersionCheck {
    pub kind: Located<VersionCheckKind>,
    pub major: Number,
    pub minor: Number,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VersionCheckKind {
    Equal,
    GreaterThanOrEqual,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Quantification {
    pub amount: Located<Amount>,
    pub kind: Located<QuantKind>,
    pub child: Box<Node>,
    /// Trivia between the operand and the quantifier.
    pub trivia: Vec<Trivia>,
    pub range: TextRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Amount {
    /// `*`
    ZeroOrMore,
    /// `+`
    OneOrMore,
    /// `?`
    ZeroOrOne,
    /// `{n}`
    Exactly(Number),
    /// `{n,}`
    NOrMore(Number),
    /// `{,n}`
    UpToN(Number),
    /// `{n,m}`
    Range(Number, Number),
}

impl Amount {
    /// Lower bound, where one is spelled or implied.
    pub fn minimum(&self) -> Option<i32> {
        match self {
            Amount::ZeroOrMore | Amount::ZeroOrOne | Amount::UpToN(_) => Some(0),
            Amount::OneOrMore => Some(1),
            Amount::Exactly(n) | Amount::NOrMore(n) | Amount::Range(n, _) => Some(n.value),
        }
    }

    pub fn is_optional(&self) -> bool {
        self.minimum() == Some(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuantKind {
    Eager,
    Reluctant,
    Possessive,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CustomCharacterClass {
    pub start: Located<ClassStart>,
    pub members: Vec<ClassMember>,
    pub range: TextRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassStart {
    Normal,
    Inverted,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClassMember {
    Custom(CustomCharacterClass),
    Range(ClassRange),
    Atom(Atom),
    Quote(Quote),
    Trivia(Trivia),
    SetOperation {
        lhs: Vec<ClassMember>,
        op: Located<SetOp>,
        rhs: Vec<ClassMember>,
    },
}

impl ClassMember {
    /// Members that contribute characters to the set.
    pub fn is_semantic(&self) -> bool {
        !matches!(self, ClassMember::Trivia(_))
    }

    pub fn range(&self) -> TextRange {
        match self {
            ClassMember::Custom(c) => c.range,
            ClassMember::Range(r) => r.range(),
            ClassMember::Atom(a) => a.range,
            ClassMember::Quote(q) => q.range,
            ClassMember::Trivia(t) => t.range,
            ClassMember::SetOperation { lhs, op, rhs } => {
                let start = lhs.first().map_or(op.range, ClassMember::range);
                let end = rhs.last().map_or(op.range, ClassMember::range);
                start.cover(end)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassRange {
    pub lhs: Atom,
    pub dash: TextRange,
    pub rhs: Atom,
    pub trivia: Vec<Trivia>,
}

impl ClassRange {
    pub fn range(&self) -> TextRange {
        self.lhs.range.cover(self.rhs.range)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetOp {
    /// `--`
    Subtraction,
    /// `&&`
    Intersection,
    /// `~~`
    SymmetricDifference,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub literal: String,
    pub range: TextRange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trivia {
    pub contents: String,
    pub range: TextRange,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AbsentFunction {
    pub start: TextRange,
    pub kind: AbsentFunctionKind,
    pub range: TextRange,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AbsentFunctionKind {
    /// `(?~absent)`
    Repeater(Box<Node>),
    /// `(?~|absent|expr)`
    Expression {
        absentee: Box<Node>,
        pipe: TextRange,
        expr: Box<Node>,
    },
    /// `(?~|absent)`
    Stopper(Box<Node>),
    /// `(?~|)`
    Clearer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchingOptionSequence {
    pub caret: Option<TextRange>,
    pub adding: Vec<MatchingOption>,
    pub minus: Option<TextRange>,
    pub removing: Vec<MatchingOption>,
}

impl MatchingOptionSequence {
    pub fn resets(&self) -> bool {
        self.caret.is_some()
    }

    pub fn all(&self) -> impl Iterator<Item = &MatchingOption> {
        self.adding.iter().chain(&self.removing)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchingOption {
    pub kind: MatchingOptionKind,
    pub range: TextRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchingOptionKind {
    /// `i`
    CaseInsensitive,
    /// `J`
    AllowDuplicateGroupNames,
    /// `m`
    Multiline,
    /// `n`
    NamedCapturesOnly,
    /// `s`
    SingleLine,
    /// `U`
    Reluctant,
    /// `x`
    Extended,
    /// `xx`
    ExtraExtended,
    /// `w`
    UnicodeWordBoundaries,
    /// `D`
    AsciiOnlyDigit,
    /// `P`
    AsciiOnlyPosixProps,
    /// `S`
    AsciiOnlySpace,
    /// `W`
    AsciiOnlyWord,
    /// `y{g}`
    TextSegmentGraphemeMode,
    /// `y{w}`
    TextSegmentWordMode,
    /// `X`
    GraphemeClusterSemantics,
    /// `u`
    UnicodeScalarSemantics,
    /// `b`
    ByteSemantics,
}

impl MatchingOptionKind {
    pub fn is_text_segment_mode(self) -> bool {
        matches!(
            self,
            MatchingOptionKind::TextSegmentGraphemeMode | MatchingOptionKind::TextSegmentWordMode
        )
    }

    pub fn is_semantic_level(self) -> bool {
        matches!(
            self,
            MatchingOptionKind::GraphemeClusterSemantics
                | MatchingOptionKind::UnicodeScalarSemantics
                | MatchingOptionKind::ByteSemantics
        )
    }

    pub fn spelling(self) -> &'static str {
        use MatchingOptionKind::*;
        match self {
            CaseInsensitive => "i",
            AllowDuplicateGroupNames => "J",
            Multiline => "m",
            NamedCapturesOnly => "n",
            SingleLine => "s",
            Reluctant => "U",
            Extended => "x",
            ExtraExtended => "xx",
            UnicodeWordBoundaries => "w",
            AsciiOnlyDigit => "D",
            AsciiOnlyPosixProps => "P",
            AsciiOnlySpace => "S",
            AsciiOnlyWord => "W",
            TextSegmentGraphemeMode => "y{g}",
            TextSegmentWordMode => "y{w}",
            GraphemeClusterSemantics => "X",
            UnicodeScalarSemantics => "u",
            ByteSemantics => "b",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalMatchingOptionSequence {
    pub options: Vec<GlobalMatchingOption>,
}

impl GlobalMatchingOptionSequence {
    /// The newline mode in effect after all options apply.
    pub fn newline_mode(&self) -> Option<NewlineMode> {
        self.options.iter().rev().find_map(|opt| match opt.kind {
            GlobalMatchingOptionKind::NewlineMatching(mode) => Some(mode),
            _ => None,
        })
    }

    pub fn range(&self) -> Option<TextRange> {
        let first = self.options.first()?;
        let last = self.options.last()?;
        Some(first.range.cover(last.range))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalMatchingOption {
    pub kind: GlobalMatchingOptionKind,
    pub range: TextRange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlobalMatchingOptionKind {
    LimitDepth(Number),
    LimitHeap(Number),
    LimitMatch(Number),
    NotEmpty,
    NotEmptyAtStart,
    NoAutoPossess,
    NoDotStarAnchor,
    NoJit,
    NoStartOpt,
    Utf,
    UnicodeProperties,
    NewlineMatching(NewlineMode),
    NewlineSequenceMatching(NewlineSequenceMode),
}

/// Which line endings `$`, `.` and end-of-line comments recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NewlineMode {
    CarriageReturnOnly,
    LinefeedOnly,
    CarriageAndLinefeedOnly,
    /// CR, LF or CRLF.
    #[default]
    AnyCarriageReturnOrLinefeed,
    AnyUnicode,
    NulCharacter,
}

impl NewlineMode {
    /// Length of the newline starting `text`, if one does.
    pub fn newline_len(self, text: &str) -> Option<usize> {
        let c = text.chars().next()?;
        match self {
            NewlineMode::CarriageReturnOnly => (c == '\r').then_some(1),
            NewlineMode::LinefeedOnly => (c == '\n').then_some(1),
            NewlineMode::CarriageAndLinefeedOnly => text.starts_with("\r\n").then_some(2),
            NewlineMode::AnyCarriageReturnOrLinefeed => {
                if text.starts_with("\r\n") {
                    Some(2)
                } else {
                    matches!(c, '\r' | '\n').then_some(1)
                }
            }
            NewlineMode::AnyUnicode => {
                if text.starts_with("\r\n") {
                    Some(2)
                } else {
                    matches!(
                        c,
                        '\n' | '\u{b}' | '\u{c}' | '\r' | '\u{85}' | '\u{2028}' | '\u{2029}'
                    )
                    .then_some(c.len_utf8())
                }
            }
            NewlineMode::NulCharacter => (c == '\0').then_some(1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NewlineSequenceMode {
    AnyCarriageReturnOrLinefeed,
    AnyUnicode,
}
