//! Backreferences and subpattern calls, escaped and group-like.

use crate::ast::{AtomKind, Number, Reference, ReferenceKind};
use crate::error::{IdentifierKind, ParseError, Radix, Result};
use crate::parser::Parser;

use super::closing_delimiter;

impl Parser<'_> {
    /// `+n`, `-n` or `n`, optionally followed by a recursion level.
    pub(super) fn lex_numbered_reference(
        &mut self,
        allow_whole_pattern: bool,
        allow_recursion_level: bool,
    ) -> Result<Option<Reference>> {
        let lexed = self.try_parse(|p| {
            let start = p.src.position();
            let sign = p.src.try_eat_any(&['+', '-']);
            let Some(num) = p.lex_number(Radix::Decimal)? else {
                return Ok(None);
            };
            // Relative numbers cover their sign.
            let range = p.src.range_from(start);
            let kind = match sign {
                Some('-') => ReferenceKind::Relative(Number::new(-num.value, range)),
                Some(_) => ReferenceKind::Relative(Number::new(num.value, range)),
                None => ReferenceKind::Absolute(num),
            };
            Ok(Some((kind, range)))
        })?;
        let Some((kind, range)) = lexed else {
            return Ok(None);
        };
        if !allow_whole_pattern && kind.recurses_whole_pattern() {
            return self.error_at(ParseError::CannotReferToWholePattern, range);
        }
        let recursion_level = if allow_recursion_level {
            self.lex_recursion_level()?
        } else {
            None
        };
        let inner_range = recursion_level.map_or(range, |level| range.cover(level.range));
        Ok(Some(Reference {
            kind,
            recursion_level,
            inner_range,
        }))
    }

    /// Oniguruma `+n` or `-n` after a reference.
    fn lex_recursion_level(&mut self) -> Result<Option<Number>> {
        let start = self.src.position();
        let negate = if self.src.try_eat('+') {
            false
        } else if self.src.try_eat('-') {
            true
        } else {
            return Ok(None);
        };
        let num = self.expect_number(Radix::Decimal)?;
        let value = if negate { -num.value } else { num.value };
        Ok(Some(Number::new(value, self.src.range_from(start))))
    }

    fn can_lex_numbered_reference(&mut self) -> bool {
        self.lookahead(|p| {
            p.src.try_eat_any(&['+', '-']);
            p.src.peek().is_some_and(|c| Radix::Decimal.accepts(c))
        })
    }

    pub(super) fn expect_named_reference(
        &mut self,
        ending: &str,
        eat_ending: bool,
        allow_recursion_level: bool,
    ) -> Result<Reference> {
        // The ending stays put until a recursion level has had its chance.
        let name = self.expect_identifier(IdentifierKind::GroupName, ending, false)?;
        let recursion_level = if allow_recursion_level {
            self.lex_recursion_level()?
        } else {
            None
        };
        let inner_range = recursion_level.map_or(name.range, |level| name.range.cover(level.range));
        if eat_ending {
            self.expect_seq(ending)?;
        }
        Ok(Reference {
            kind: ReferenceKind::Named(name.value),
            recursion_level,
            inner_range,
        })
    }

    /// Like [`expect_named_reference`](Self::expect_named_reference), but
    /// declines on any error.
    pub(super) fn lex_named_reference(
        &mut self,
        ending: &str,
        eat_ending: bool,
        allow_recursion_level: bool,
    ) -> Option<Reference> {
        let (src, context) = self.snapshot();
        match self.expect_named_reference(ending, eat_ending, allow_recursion_level) {
            Ok(reference) => Some(reference),
            Err(_) => {
                self.restore(src, context);
                None
            }
        }
    }

    pub(super) fn expect_named_or_numbered_reference(
        &mut self,
        ending: &str,
        eat_ending: bool,
        allow_whole_pattern: bool,
        allow_recursion_level: bool,
    ) -> Result<Reference> {
        if let Some(reference) =
            self.lex_numbered_reference(allow_whole_pattern, allow_recursion_level)?
        {
            if eat_ending {
                self.expect_seq(ending)?;
            }
            return Ok(reference);
        }
        self.expect_named_reference(ending, eat_ending, allow_recursion_level)
    }

    /// `\g{..}`, `\g<..>`, `\g'..'`, `\gN`, `\k<..>`, `\k'..'`, `\k{..}`
    /// and `\N` for a non-zero digit `N`.
    pub(super) fn lex_escaped_reference(&mut self) -> Result<Option<AtomKind>> {
        self.record(|p| p.try_parse(|p| p.lex_escaped_reference_kind()))
    }

    fn lex_escaped_reference_kind(&mut self) -> Result<Option<AtomKind>> {
        let Some(first) = self.src.peek() else {
            return Ok(None);
        };

        if self.src.try_eat('g') {
            if self.src.try_eat('{') {
                let reference = self.expect_named_or_numbered_reference("}", true, false, false)?;
                return Ok(Some(AtomKind::Backreference(reference)));
            }
            if let Some(open) = self.src.try_eat_any(&['<', '\'']) {
                let closing = closing_delimiter(open);
                let reference = self.expect_named_or_numbered_reference(&closing, true, true, false)?;
                return Ok(Some(AtomKind::Subpattern(reference)));
            }
            return Ok(self
                .lex_numbered_reference(false, false)?
                .map(AtomKind::Backreference));
        }

        if self.src.try_eat('k') {
            if let Some(open) = self.src.try_eat_any(&['<', '\'']) {
                // Names may not start with a digit or sign, so numbers are
                // unambiguous here.
                let closing = closing_delimiter(open);
                let reference = self.expect_named_or_numbered_reference(&closing, true, false, true)?;
                return Ok(Some(AtomKind::Backreference(reference)));
            }
            if self.src.try_eat('{') {
                let reference = self.expect_named_reference("}", true, false)?;
                return Ok(Some(AtomKind::Backreference(reference)));
            }
            return Ok(None);
        }

        if first == '0' {
            return Ok(None);
        }
        let before = self.src;
        let Some(num) = self.lex_number(Radix::Decimal)? else {
            return Ok(None);
        };
        let kind = ReferenceKind::Absolute(num);

        // `\12` with fewer than 12 groups so far is an octal escape.
        let digits = self.src.slice(num.range);
        if digits.len() > 1
            && !self.context.is_prior_group_ref(&kind)
            && digits.chars().all(|c| Radix::Octal.accepts(c))
        {
            self.src = before;
            let scalar = self.lex_scalar_prefix(3, Radix::Octal)?;
            return Ok(Some(AtomKind::Scalar(scalar)));
        }
        Ok(Some(AtomKind::Backreference(Reference {
            kind,
            recursion_level: None,
            inner_range: num.range,
        })))
    }

    /// `(?P=name)`, `(?P>name)`, `(?&name)`, `(?R)` and `(?n)`.
    pub(super) fn lex_group_like_reference(&mut self) -> Result<Option<AtomKind>> {
        self.record(|p| {
            p.try_parse(|p| {
                if !p.src.try_eat_seq("(?") {
                    return Ok(None);
                }
                if p.src.try_eat_seq("P=") {
                    let reference = p.expect_named_reference(")", true, false)?;
                    return Ok(Some(AtomKind::Backreference(reference)));
                }
                if p.src.try_eat_seq("P>") || p.src.try_eat('&') {
                    let reference = p.expect_named_reference(")", true, false)?;
                    return Ok(Some(AtomKind::Subpattern(reference)));
                }
                if let Some(range) = p.try_eat_located('R') {
                    p.expect(')')?;
                    return Ok(Some(AtomKind::Subpattern(Reference {
                        kind: ReferenceKind::RecurseWholePattern(range),
                        recursion_level: None,
                        inner_range: range,
                    })));
                }
                if let Some(reference) = p.lex_numbered_reference(true, false)? {
                    p.expect(')')?;
                    return Ok(Some(AtomKind::Subpattern(reference)));
                }
                Ok(None)
            })
        })
    }

    /// Whether a group-like reference follows an already consumed `(?`.
    pub(super) fn can_lex_group_like_reference(&mut self) -> bool {
        self.lookahead(|p| {
            if p.src.try_eat('P') {
                return p.src.try_eat_any(&['=', '>']).is_some();
            }
            if p.src.try_eat_any(&['&', 'R']).is_some() {
                return true;
            }
            p.can_lex_numbered_reference()
        })
    }
}
