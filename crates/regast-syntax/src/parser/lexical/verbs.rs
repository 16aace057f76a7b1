//! `(*VERB)` constructs and callouts.

use rowan::TextRange;

use crate::ast::{
    BacktrackingDirective, Callout, CalloutArgList, CalloutArgument, CalloutDirection, CalloutTag,
    DirectiveKind, GlobalMatchingOption, GlobalMatchingOptionKind, GlobalMatchingOptionSequence,
    Located,
};
use crate::error::{IdentifierKind, ParseError, Radix, Result};
use crate::parser::Parser;
use crate::parser::keywords::Verb;

use super::closing_delimiter;

impl Parser<'_> {
    /// `(*ACCEPT)`, `(*MARK:name)`, `(*:name)` and the other directives.
    pub(super) fn lex_backtracking_directive(&mut self) -> Result<Option<BacktrackingDirective>> {
        self.try_parse(|p| {
            if !p.src.try_eat_seq("(*") {
                return Ok(None);
            }
            let start = p.src.position();
            let rest = p.src.rest();
            // A verb only counts when the name ends there, so `(*FOO)` is a
            // callout rather than `(*F)` followed by junk.
            let directive = Verb::leading(rest).and_then(|(verb, len)| {
                let kind = verb.directive()?;
                matches!(rest[len..].chars().next(), Some(':' | ')')).then_some((kind, len))
            });
            let kind = match directive {
                Some((kind, len)) => {
                    p.src.try_eat_seq(&rest[..len]);
                    kind
                }
                None if p.src.peek() == Some(':') => DirectiveKind::Mark,
                None => return Ok(None),
            };
            let kind = Located::new(kind, p.src.range_from(start));

            let name = if p.src.try_eat(':') {
                Some(p.expect_quoted(")", 1, false, false)?)
            } else {
                None
            };
            p.expect(')')?;

            if name.is_none() && kind.value == DirectiveKind::Mark {
                let text = p.src.slice(kind.range).to_string();
                return p.error_at(ParseError::BacktrackingDirectiveMustHaveName(text), kind.range);
            }
            Ok(Some(BacktrackingDirective { kind, name }))
        })
    }

    /// `(*UTF)`, `(*CRLF)`, `(*LIMIT_MATCH=n)` and friends.
    pub(super) fn lex_global_matching_option(&mut self) -> Result<Option<GlobalMatchingOption>> {
        let start = self.src.position();
        let kind = self.try_parse(|p| {
            if !p.src.try_eat_seq("(*") {
                return Ok(None);
            }
            let rest = p.src.rest();
            let Some((verb, len)) = Verb::leading(rest) else {
                return Ok(None);
            };
            let terminator = if verb.is_limit() { '=' } else { ')' };
            if verb.directive().is_some() || rest[len..].chars().next() != Some(terminator) {
                return Ok(None);
            }
            p.src.try_eat_seq(&rest[..len]);

            let kind = match verb {
                Verb::LimitDepth => {
                    p.expect('=')?;
                    GlobalMatchingOptionKind::LimitDepth(p.expect_number(Radix::Decimal)?)
                }
                Verb::LimitHeap => {
                    p.expect('=')?;
                    GlobalMatchingOptionKind::LimitHeap(p.expect_number(Radix::Decimal)?)
                }
                Verb::LimitMatch => {
                    p.expect('=')?;
                    GlobalMatchingOptionKind::LimitMatch(p.expect_number(Radix::Decimal)?)
                }
                Verb::NotEmpty => GlobalMatchingOptionKind::NotEmpty,
                Verb::NotEmptyAtStart => GlobalMatchingOptionKind::NotEmptyAtStart,
                Verb::NoAutoPossess => GlobalMatchingOptionKind::NoAutoPossess,
                Verb::NoDotStarAnchor => GlobalMatchingOptionKind::NoDotStarAnchor,
                Verb::NoJit => GlobalMatchingOptionKind::NoJit,
                Verb::NoStartOpt => GlobalMatchingOptionKind::NoStartOpt,
                Verb::Utf => GlobalMatchingOptionKind::Utf,
                Verb::Ucp => GlobalMatchingOptionKind::UnicodeProperties,
                other => match (other.newline_mode(), other.newline_sequence_mode()) {
                    (Some(mode), _) => GlobalMatchingOptionKind::NewlineMatching(mode),
                    (None, Some(mode)) => GlobalMatchingOptionKind::NewlineSequenceMatching(mode),
                    (None, None) => return Ok(None),
                },
            };
            p.expect(')')?;
            Ok(Some(kind))
        })?;
        Ok(kind.map(|kind| GlobalMatchingOption {
            kind,
            range: self.src.range_from(start),
        }))
    }

    pub(crate) fn lex_global_matching_option_sequence(
        &mut self,
    ) -> Result<Option<GlobalMatchingOptionSequence>> {
        let mut options = Vec::new();
        while let Some(opt) = self.lex_global_matching_option()? {
            options.push(opt);
        }
        if options.is_empty() {
            return Ok(None);
        }
        Ok(Some(GlobalMatchingOptionSequence { options }))
    }

    /// `(?C)`, `(?Cn)` or `(?C` followed by a delimited string.
    pub(super) fn lex_pcre_callout(&mut self) -> Result<Option<Callout>> {
        if !self.src.try_eat_seq("(?C") {
            return Ok(None);
        }
        let start = self.src.position();
        let arg = self.record(|p| {
            if let Some(num) = p.lex_number(Radix::Decimal)? {
                return Ok(CalloutArgument::Number(num.value));
            }
            // `(?C)` means `(?C0)`.
            if p.src.peek() == Some(')') {
                return Ok(CalloutArgument::Number(0));
            }
            if let Some(open) = p.src.try_eat_any(&['`', '\'', '"', '^', '%', '#', '$', '{']) {
                let closing = closing_delimiter(open);
                let text = p.expect_quoted(&closing, 1, false, true)?;
                return Ok(CalloutArgument::String(text.value));
            }
            let remaining = p.lex_until(|p| Ok(p.src.is_empty() || p.src.peek() == Some(')')))?;
            if p.src.is_empty() && remaining.value.is_empty() {
                return p.error_here(ParseError::Expected(")".to_string()));
            }
            p.error_at(
                ParseError::UnknownCalloutKind(format!("(?C{}", remaining.value)),
                remaining.range,
            )
        })?;
        let arg = Located::new(arg, self.src.range_from(start));
        self.expect(')')?;
        Ok(Some(Callout::Pcre(arg)))
    }

    /// Comma-separated arguments after a consumed `{`, through `}`.
    fn expect_callout_arg_list(&mut self, left_brace: TextRange) -> Result<CalloutArgList> {
        let mut args = Vec::new();
        loop {
            let start = self.src.position();
            let Some(arg) = self.src.try_eat_prefix(|c| c != ',' && c != '}') else {
                return self.error_here(ParseError::ExpectedCalloutArgument);
            };
            args.push(Located::new(arg.to_string(), self.src.range_from(start)));
            if self.src.is_empty() || self.src.peek() == Some('}') {
                break;
            }
            self.expect(',')?;
        }
        let right_brace = self.expect('}')?;
        Ok(CalloutArgList {
            left_brace,
            args,
            right_brace,
        })
    }

    /// `[tag]`
    fn lex_callout_tag(&mut self) -> Result<Option<CalloutTag>> {
        let Some(left_bracket) = self.try_eat_located('[') else {
            return Ok(None);
        };
        let name = self.expect_identifier(IdentifierKind::CalloutTag, "]", false)?;
        let right_bracket = self.expect(']')?;
        Ok(Some(CalloutTag {
            left_bracket,
            name,
            right_bracket,
        }))
    }

    /// `(*name[tag]{args})`
    pub(super) fn lex_oniguruma_named_callout(&mut self) -> Result<Option<Callout>> {
        self.try_parse(|p| {
            if !p.src.try_eat_seq("(*") {
                return Ok(None);
            }
            let name = p.expect_identifier(IdentifierKind::CalloutName, ")", false)?;
            let tag = p.lex_callout_tag()?;
            let args = match p.try_eat_located('{') {
                Some(left_brace) => Some(p.expect_callout_arg_list(left_brace)?),
                None => None,
            };
            p.expect(')')?;
            Ok(Some(Callout::OnigurumaNamed { name, tag, args }))
        })
    }

    /// `(?{contents}[tag]X)`, with any number of balanced braces.
    pub(super) fn lex_oniguruma_callout_of_contents(&mut self) -> Result<Option<Callout>> {
        self.try_parse(|p| {
            if !p.src.try_eat_seq("(?") {
                return Ok(None);
            }
            let start = p.src.position();
            let Some(braces) = p.src.try_eat_prefix(|c| c == '{') else {
                return Ok(None);
            };
            let open_braces = p.src.range_from(start);
            let contents = p.expect_quoted("}", braces.len(), false, true)?;
            let close_braces = TextRange::new(contents.range.end(), p.src.position());

            let tag = p.lex_callout_tag()?;

            let start = p.src.position();
            let direction = if p.src.try_eat('<') {
                CalloutDirection::InRetraction
            } else if p.src.try_eat('X') {
                CalloutDirection::Both
            } else {
                p.src.try_eat('>');
                CalloutDirection::InProgress
            };
            let direction = Located::new(direction, p.src.range_from(start));
            p.expect(')')?;

            Ok(Some(Callout::OnigurumaOfContents {
                open_braces,
                contents,
                close_braces,
                tag,
                direction,
            }))
        })
    }
}
