//! Group openers, matching options, conditions and class delimiters.

use rowan::TextRange;

use crate::ast::{
    BalancedCapture, ClassStart, Condition, ConditionKind, GroupKind, Located, MatchingOption,
    MatchingOptionKind, MatchingOptionSequence, PcreVersionCheck, Reference, ReferenceKind, SetOp,
    VersionCheckKind,
};
use crate::error::{IdentifierKind, ParseError, Radix, Result};
use crate::options::SyntaxOptions;
use crate::parser::Parser;
use crate::parser::keywords::Pcre2Group;

use super::closing_delimiter;

/// How an absent function opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AbsentStart {
    /// `(?~|`
    WithPipe,
    /// `(?~`
    WithoutPipe,
}

/// Openers after `(?` that need no further lexing.
const SIMPLE_GROUP_KINDS: [(&str, GroupKind); 9] = [
    (":", GroupKind::NonCapture),
    ("|", GroupKind::NonCaptureReset),
    (">", GroupKind::AtomicNonCapturing),
    ("=", GroupKind::Lookahead),
    ("!", GroupKind::NegativeLookahead),
    ("*", GroupKind::NonAtomicLookahead),
    ("<=", GroupKind::Lookbehind),
    ("<!", GroupKind::NegativeLookbehind),
    ("<*", GroupKind::NonAtomicLookbehind),
];

impl Parser<'_> {
    pub(crate) fn lex_absent_function_start(&mut self) -> Option<Located<AbsentStart>> {
        let start = self.src.position();
        let kind = if self.src.try_eat_seq("(?~|") {
            AbsentStart::WithPipe
        } else if self.src.try_eat_seq("(?~") {
            AbsentStart::WithoutPipe
        } else {
            return None;
        };
        Some(Located::new(kind, self.src.range_from(start)))
    }

    fn lex_matching_option(&mut self) -> Result<Option<MatchingOption>> {
        use MatchingOptionKind::*;

        let start = self.src.position();
        let kind = self.try_parse(|p| {
            let Ok(c) = p.src.eat() else {
                return Ok(None);
            };
            let kind = match c {
                'i' => CaseInsensitive,
                'J' => AllowDuplicateGroupNames,
                'm' => Multiline,
                'n' => NamedCapturesOnly,
                's' => SingleLine,
                'U' => Reluctant,
                'x' if p.src.try_eat('x') => ExtraExtended,
                'x' => Extended,
                'w' => UnicodeWordBoundaries,
                'D' => AsciiOnlyDigit,
                'P' => AsciiOnlyPosixProps,
                'S' => AsciiOnlySpace,
                'W' => AsciiOnlyWord,
                'y' => {
                    p.expect('{')?;
                    let kind = if p.src.try_eat('w') {
                        TextSegmentWordMode
                    } else {
                        p.expect('g')?;
                        TextSegmentGraphemeMode
                    };
                    p.expect('}')?;
                    kind
                }
                'X' => GraphemeClusterSemantics,
                'u' => UnicodeScalarSemantics,
                'b' => ByteSemantics,
                _ => return Ok(None),
            };
            Ok(Some(kind))
        })?;
        Ok(kind.map(|kind| MatchingOption {
            kind,
            range: self.src.range_from(start),
        }))
    }

    /// `^opts`, `opts`, or `opts-opts`. An empty sequence is accepted
    /// before `)`.
    fn lex_matching_option_sequence(&mut self) -> Result<Option<MatchingOptionSequence>> {
        if self.src.peek() == Some(')') {
            return Ok(Some(MatchingOptionSequence {
                caret: None,
                adding: vec![],
                minus: None,
                removing: vec![],
            }));
        }
        let caret = self.try_eat_located('^');

        let mut adding = Vec::new();
        while let Some(opt) = self.lex_matching_option()? {
            adding.push(opt);
        }

        let mut removing = Vec::new();
        let minus = self.try_eat_located('-');
        if minus.is_some() {
            if let Some(caret) = caret {
                return self.error_at(ParseError::CannotRemoveMatchingOptionsAfterCaret, caret);
            }
            while let Some(opt) = self.lex_matching_option()? {
                if opt.kind.is_text_segment_mode() {
                    return self.error_at(ParseError::CannotRemoveTextSegmentOptions, opt.range);
                }
                if opt.kind.is_semantic_level() {
                    return self.error_at(ParseError::CannotRemoveSemanticsOptions, opt.range);
                }
                removing.push(opt);
            }
        }

        if caret.is_none() && minus.is_none() && adding.is_empty() {
            return Ok(None);
        }
        Ok(Some(MatchingOptionSequence {
            caret,
            adding,
            minus,
            removing,
        }))
    }

    /// `(?opts)`
    pub(super) fn lex_change_matching_option_atom(
        &mut self,
    ) -> Result<Option<MatchingOptionSequence>> {
        self.try_parse(|p| {
            if !p.src.try_eat_seq("(?") {
                return Ok(None);
            }
            let Some(seq) = p.lex_matching_option_sequence()? else {
                return Ok(None);
            };
            p.expect(')')?;
            Ok(Some(seq))
        })
    }

    /// Whether an option sequence closed by `)` follows a consumed `(?`.
    pub(super) fn can_lex_matching_options_as_atom(&mut self) -> bool {
        self.lookahead(|p| {
            matches!(p.lex_matching_option_sequence(), Ok(Some(_))) && p.src.try_eat(')')
        })
    }

    /// `(*atomic:`, `(*pla:` and the other spelled-out PCRE2 openers.
    fn lex_pcre2_group_start(&mut self) -> Option<GroupKind> {
        let rest = self.src.rest();
        let body = rest.strip_prefix("(*")?;
        let (group, len) = Pcre2Group::leading(body)?;
        self.src.try_eat_seq(&rest[..len + 2]);
        Some(group.kind())
    }

    /// `name>`, `-prior>` or `name-prior>`, for the given ending.
    fn expect_named_group(&mut self, ending: &str) -> Result<GroupKind> {
        if let Some(kind) = self.lex_balanced_capture(None, ending)? {
            return Ok(kind);
        }
        let name = self.expect_identifier(IdentifierKind::GroupName, ending, false)?;
        if let Some(kind) = self.lex_balanced_capture(Some(&name), ending)? {
            return Ok(kind);
        }
        self.expect_seq(ending)?;
        Ok(GroupKind::NamedCapture(name))
    }

    fn lex_balanced_capture(
        &mut self,
        name: Option<&Located<String>>,
        ending: &str,
    ) -> Result<Option<GroupKind>> {
        let Some(dash) = self.try_eat_located('-') else {
            return Ok(None);
        };
        let prior_name = self.expect_identifier(IdentifierKind::GroupName, ending, true)?;
        Ok(Some(GroupKind::BalancedCapture(BalancedCapture {
            name: name.cloned(),
            dash,
            prior_name,
        })))
    }

    /// Group opener, through its specifier.
    ///
    /// Declines for `(` that starts a group-like atom, so references and
    /// directives are not mistaken for groups.
    pub(crate) fn lex_group_start(&mut self) -> Result<Option<Located<GroupKind>>> {
        let start = self.src.position();
        let kind = self.record(|p| p.try_parse(|p| p.lex_group_start_kind()))?;
        Ok(kind.map(|kind| Located::new(kind, self.src.range_from(start))))
    }

    fn lex_group_start_kind(&mut self) -> Result<Option<GroupKind>> {
        // `(*` openers come first, since `(*` otherwise starts an atom.
        if let Some(kind) = self.lex_pcre2_group_start() {
            return Ok(Some(kind));
        }
        if self.should_lex_group_like_atom() || !self.src.try_eat('(') {
            return Ok(None);
        }

        if self.src.try_eat('?') {
            for (spelling, kind) in &SIMPLE_GROUP_KINDS {
                if self.src.try_eat_seq(spelling) {
                    return Ok(Some(kind.clone()));
                }
            }
            if self.src.try_eat('<') || self.src.try_eat_seq("P<") {
                return self.expect_named_group(">").map(Some);
            }
            if self.src.try_eat('\'') {
                return self.expect_named_group("'").map(Some);
            }
            if let Some(seq) = self.lex_matching_option_sequence()? {
                if !self.src.try_eat(':') {
                    return match self.peek_located() {
                        Some(next) => {
                            self.error_at(ParseError::InvalidMatchingOption(next.value), next.range)
                        }
                        None => self.error_here(ParseError::Expected(")".to_string())),
                    };
                }
                return Ok(Some(GroupKind::ChangeMatchingOptions(seq)));
            }
            return match self.peek_located() {
                Some(next) => self.error_at(
                    ParseError::UnknownGroupKind(format!("?{}", next.value)),
                    next.range,
                ),
                None => self.error_here(ParseError::ExpectedGroupSpecifier),
            };
        }

        if self.context.experimental_captures() && self.src.try_eat_seq("_:") {
            return Ok(Some(GroupKind::NonCapture));
        }
        if self.context.syntax.contains(SyntaxOptions::NAMED_CAPTURES_ONLY) {
            return Ok(Some(GroupKind::NonCapture));
        }
        Ok(Some(GroupKind::Capture))
    }

    /// `>=10.32` or `=10.32` after `VERSION`.
    fn expect_pcre_version_check(&mut self) -> Result<ConditionKind> {
        let start = self.src.position();
        let kind = if self.src.try_eat('>') {
            VersionCheckKind::GreaterThanOrEqual
        } else {
            VersionCheckKind::Equal
        };
        self.expect('=')?;
        let kind = Located::new(kind, self.src.range_from(start));
        let major = self.expect_number(Radix::Decimal)?;
        self.expect('.')?;
        let minor = self.expect_number(Radix::Decimal)?;
        Ok(ConditionKind::PcreVersionCheck(PcreVersionCheck {
            kind,
            major,
            minor,
        }))
    }

    fn lex_known_condition(&mut self) -> Result<Option<Condition>> {
        let start = self.src.position();
        let kind = self.record(|p| p.try_parse(|p| p.lex_known_condition_kind()))?;
        Ok(kind.map(|kind| Condition {
            kind,
            range: self.src.range_from(start),
        }))
    }

    fn lex_known_condition_kind(&mut self) -> Result<Option<ConditionKind>> {
        if self.src.try_eat('R') {
            if self.src.try_eat('&') {
                let reference = self.expect_named_reference(")", false, false)?;
                return Ok(Some(ConditionKind::GroupRecursionCheck(reference)));
            }
            if let Some(num) = self.lex_number(Radix::Decimal)? {
                return Ok(Some(ConditionKind::GroupRecursionCheck(Reference {
                    kind: ReferenceKind::Absolute(num),
                    recursion_level: None,
                    inner_range: num.range,
                })));
            }
            return Ok(Some(ConditionKind::RecursionCheck));
        }

        // PCRE only takes names here; Oniguruma takes numbers too.
        if let Some(open) = self.src.try_eat_any(&['<', '\'']) {
            let closing = closing_delimiter(open);
            let reference = self.expect_named_or_numbered_reference(&closing, true, false, false)?;
            return Ok(Some(ConditionKind::GroupMatched(reference)));
        }

        if self.src.try_eat_seq("DEFINE") {
            return Ok(Some(ConditionKind::DefineGroup));
        }
        if self.src.try_eat_seq("VERSION") {
            return self.expect_pcre_version_check().map(Some);
        }

        if let Some(reference) = self.lex_numbered_reference(false, true)? {
            return Ok(Some(ConditionKind::GroupMatched(reference)));
        }

        // A bare name only counts when a group by that name is already open.
        let reference = self.lex_named_reference(")", false, true);
        match reference {
            Some(reference) if self.context.is_prior_group_ref(&reference.kind) => {
                Ok(Some(ConditionKind::GroupMatched(reference)))
            }
            _ => Ok(None),
        }
    }

    /// `(?(` condition `)`, for conditions that are not groups.
    pub(crate) fn lex_known_conditional_start(&mut self) -> Result<Option<Condition>> {
        self.try_parse(|p| {
            if !p.src.try_eat_seq("(?(") {
                return Ok(None);
            }
            let Some(condition) = p.lex_known_condition()? else {
                return Ok(None);
            };
            p.expect(')')?;
            Ok(Some(condition))
        })
    }

    /// `(?` followed by a group opener, as in `(?(?=a)b|c)`.
    pub(crate) fn lex_group_conditional_start(&mut self) -> Result<Option<Located<GroupKind>>> {
        self.try_parse(|p| {
            if !p.src.try_eat_seq("(?") {
                return Ok(None);
            }
            p.lex_group_start()
        })
    }

    /// `[` or `[^`, unless this is a POSIX property.
    pub(crate) fn lex_custom_class_start(&mut self) -> Option<Located<ClassStart>> {
        if self.can_lex_posix_property() {
            return None;
        }
        let start = self.src.position();
        if !self.src.try_eat('[') {
            return None;
        }
        let kind = if self.src.try_eat('^') {
            ClassStart::Inverted
        } else {
            ClassStart::Normal
        };
        Some(Located::new(kind, self.src.range_from(start)))
    }

    pub(crate) fn peek_set_op(&self) -> Option<SetOp> {
        if self.src.starts_with("--") {
            Some(SetOp::Subtraction)
        } else if self.src.starts_with("~~") {
            Some(SetOp::SymmetricDifference)
        } else if self.src.starts_with("&&") {
            Some(SetOp::Intersection)
        } else {
            None
        }
    }

    pub(crate) fn lex_set_op(&mut self) -> Option<Located<SetOp>> {
        let op = self.peek_set_op()?;
        let start = self.src.position();
        self.src.eat_prefix(2);
        Some(Located::new(op, self.src.range_from(start)))
    }

    /// A single `-` between range bounds, not the start of `--`.
    pub(crate) fn lex_class_range_operator(&mut self) -> Option<TextRange> {
        if self.peek_set_op().is_some() {
            return None;
        }
        self.try_eat_located('-')
    }
}
