//! Lexical layer: everything below the grammar productions.
//!
//! Each `lex_*` method either recognizes its construct and returns `Some`,
//! or returns `None` with the cursor where it started. `expect_*` methods
//! fail instead of declining.

mod escapes;
mod groups;
mod references;
mod trivia;
mod verbs;

pub(crate) use groups::AbsentStart;
pub(crate) use trivia::LexedQuantifier;

use rowan::{TextRange, TextSize};

use super::Parser;
use crate::ast::{Atom, AtomKind, Located, Number};
use crate::error::{Error, IdentifierKind, ParseError, Radix, Result};

impl Parser<'_> {
    /// Consumes characters until `pred` holds or input ends.
    ///
    /// `pred` runs before each character and may consume input itself, such
    /// as a terminator. The returned range covers only the collected text.
    pub(super) fn lex_until(
        &mut self,
        mut pred: impl FnMut(&mut Self) -> Result<bool>,
    ) -> Result<Located<String>> {
        let start = self.src.position();
        let mut end = start;
        let mut text = String::new();
        while !pred(self)? {
            let Ok(c) = self.src.eat() else { break };
            text.push(c);
            end = self.src.position();
        }
        Ok(Located::new(text, TextRange::new(start, end)))
    }

    /// Consumes through `end`, which must appear before the end of input.
    pub(super) fn lex_until_eating(&mut self, end: &str) -> Result<Located<String>> {
        self.lex_until(|p| {
            if p.src.is_empty() {
                return p.error_here(ParseError::Expected(end.to_string()));
            }
            Ok(p.src.try_eat_seq(end))
        })
    }

    /// Non-empty text up to `end_single` repeated `count` times.
    pub(super) fn expect_quoted(
        &mut self,
        end_single: &str,
        count: usize,
        ignore_escaped: bool,
        eat_ending: bool,
    ) -> Result<Located<String>> {
        let end = end_single.repeat(count);
        let contents = self.lex_until(|p| {
            if p.src.starts_with(&end) {
                return Ok(true);
            }
            if p.src.is_empty() {
                return p.error_here(ParseError::Expected(end_single.to_string()));
            }
            // The escaped character is collected by the caller loop.
            if ignore_escaped && p.src.try_eat('\\') && p.src.is_empty() {
                return p.error_here(ParseError::ExpectedEscape);
            }
            Ok(false)
        })?;
        if contents.value.is_empty() {
            return self.error_at(ParseError::ExpectedNonEmptyContents, contents.range);
        }
        if eat_ending {
            self.expect_seq(&end)?;
        }
        Ok(contents)
    }

    pub(super) fn lex_number(&mut self, radix: Radix) -> Result<Option<Number>> {
        let start = self.src.position();
        let Some(digits) = self.src.try_eat_prefix(|c| radix.accepts(c)) else {
            return Ok(None);
        };
        let range = self.src.range_from(start);
        match i32::from_str_radix(digits, radix.base()) {
            Ok(value) => Ok(Some(Located::new(value, range))),
            Err(_) => self.error_at(ParseError::NumberOverflow(digits.to_string()), range),
        }
    }

    pub(super) fn expect_number(&mut self, radix: Radix) -> Result<Number> {
        match self.lex_number(radix)? {
            Some(number) => Ok(number),
            None => self.error_here(ParseError::ExpectedNumber(String::new(), radix)),
        }
    }

    /// Converts digits already consumed at `range` into a scalar value.
    pub(super) fn validate_scalar(
        &self,
        digits: &str,
        range: TextRange,
        radix: Radix,
    ) -> Result<Located<char>> {
        if digits.is_empty() || !digits.chars().all(|c| radix.accepts(c)) {
            return self.error_at(ParseError::ExpectedNumber(digits.to_string(), radix), range);
        }
        let value = u32::from_str_radix(digits, radix.base())
            .map_err(|_| Error::new(ParseError::NumberOverflow(digits.to_string()), range))?;
        let c = char::from_u32(value).ok_or_else(|| {
            Error::new(
                ParseError::Misc(format!("Invalid scalar value U+{value:X}")),
                range,
            )
        })?;
        Ok(Located::new(c, range))
    }

    /// `[\w--\d]\w*`, optionally followed by `ending`.
    pub(super) fn expect_identifier(
        &mut self,
        kind: IdentifierKind,
        ending: &str,
        eat_ending: bool,
    ) -> Result<Located<String>> {
        let start = self.src.position();
        let first = match self.src.peek() {
            Some(c) if !self.src.starts_with(ending) => c,
            _ => return self.error_here(ParseError::ExpectedIdentifier(kind)),
        };
        let first_range = TextRange::at(start, TextSize::of(first));
        if first.is_numeric() {
            return self.error_at(ParseError::IdentifierCannotStartWithNumber(kind), first_range);
        }
        let Some(name) = self.src.try_eat_prefix(is_word_char) else {
            return self.error_at(ParseError::IdentifierMustBeAlphaNumeric(kind), first_range);
        };
        let name = Located::new(name.to_string(), self.src.range_from(start));
        if eat_ending {
            self.expect_seq(ending)?;
        }
        Ok(name)
    }

    fn peek_located(&self) -> Option<Located<char>> {
        let c = self.src.peek()?;
        Some(Located::new(
            c,
            TextRange::at(self.src.position(), TextSize::of(c)),
        ))
    }

    /// Next atom, or `None` at a point where a concatenation ends.
    pub(crate) fn lex_atom(&mut self) -> Result<Option<Atom>> {
        let in_class = self.context.in_custom_class;
        let Some(next) = self.src.peek() else {
            return Ok(None);
        };
        if !in_class && matches!(next, ')' | '|') {
            return Ok(None);
        }
        let start = self.src.position();
        let kind = self.record(|p| p.lex_atom_kind(in_class))?;
        Ok(Some(Atom::new(kind, self.src.range_from(start))))
    }

    fn lex_atom_kind(&mut self, in_class: bool) -> Result<AtomKind> {
        // Allowed outside classes too, like `\p{...}`.
        if let Some(prop) = self.lex_posix_property()? {
            return Ok(AtomKind::Property(prop));
        }
        if !in_class && self.should_lex_group_like_atom() {
            return self.expect_group_like_atom();
        }
        if !in_class {
            let start = self.src.position();
            if self.lex_quantifier()?.is_some() {
                let range = self.src.range_from(start);
                let text = self.src.slice(range).to_string();
                return self.error_at(ParseError::QuantifierRequiresOperand(text), range);
            }
        }

        self.reject_confusable()?;
        let kind = match self.src.eat()? {
            '.' if !in_class => AtomKind::Any,
            '^' if !in_class => AtomKind::StartOfLine,
            '$' if !in_class => AtomKind::EndOfLine,
            '\\' => return self.expect_escaped(),
            c => AtomKind::Char(c),
        };
        Ok(kind)
    }

    /// Fails on an ASCII symbol followed by combining marks, such as
    /// `[\u{301}`. The marks would render merged into the symbol, so it reads
    /// as a metacharacter it may not be.
    pub(crate) fn reject_confusable(&mut self) -> Result<()> {
        let rest = self.src.rest();
        let mut chars = rest.chars();
        let (Some(c), Some(mark)) = (chars.next(), chars.next()) else {
            return Ok(());
        };
        if !c.is_ascii() || c.is_ascii_alphanumeric() || c == '\r' || !is_grapheme_extend(mark) {
            return Ok(());
        }
        let end = rest
            .char_indices()
            .skip(1)
            .find(|&(_, m)| !is_grapheme_extend(m))
            .map_or(rest.len(), |(i, _)| i);
        let range = TextRange::at(self.src.position(), TextSize::of(&rest[..end]));
        self.error_at(ParseError::ConfusableCharacter(c), range)
    }

    /// Constructs spelled like groups that are atoms: references, callouts,
    /// directives and option changes.
    fn expect_group_like_atom(&mut self) -> Result<AtomKind> {
        if let Some(kind) = self.lex_group_like_reference()? {
            return Ok(kind);
        }
        if let Some(seq) = self.lex_change_matching_option_atom()? {
            return Ok(AtomKind::ChangeMatchingOptions(seq));
        }
        if let Some(directive) = self.lex_backtracking_directive()? {
            return Ok(AtomKind::BacktrackingDirective(directive));
        }
        if let Some(opt) = self.lex_global_matching_option()? {
            let text = self.src.slice(opt.range).to_string();
            return self.error_at(ParseError::GlobalMatchingOptionNotAtStart(text), opt.range);
        }
        if let Some(callout) = self.lex_pcre_callout()? {
            return Ok(AtomKind::Callout(callout));
        }
        if let Some(callout) = self.lex_oniguruma_named_callout()? {
            return Ok(AtomKind::Callout(callout));
        }
        if let Some(callout) = self.lex_oniguruma_callout_of_contents()? {
            return Ok(AtomKind::Callout(callout));
        }

        self.expect('(')?;
        let rest = self.lex_until(|p| {
            Ok(p.src.is_empty() || p.src.try_eat_any(&[':', ')']).is_some())
        })?;
        if rest.value.is_empty() {
            return self.error_at(ParseError::Expected(")".to_string()), rest.range);
        }
        self.error_at(ParseError::UnknownGroupKind(rest.value), rest.range)
    }

    /// Whether `(` here starts an atom rather than a group.
    pub(super) fn should_lex_group_like_atom(&mut self) -> bool {
        self.lookahead(|p| {
            if !p.src.try_eat('(') {
                return false;
            }
            if p.src.try_eat('?') {
                return p.can_lex_group_like_reference()
                    || p.src.try_eat('C')
                    || p.src.try_eat('{')
                    || p.can_lex_matching_options_as_atom();
            }
            p.src.try_eat('*')
        })
    }
}

/// Closing spelling for a balanced or self-closing opener.
pub(super) fn closing_delimiter(open: char) -> String {
    match open {
        '<' => ">".to_string(),
        '{' => "}".to_string(),
        c => c.to_string(),
    }
}

pub(super) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Combining marks and joiners that attach to the preceding character.
fn is_grapheme_extend(c: char) -> bool {
    matches!(
        c,
        '\u{300}'..='\u{36F}'
            | '\u{1AB0}'..='\u{1AFF}'
            | '\u{1DC0}'..='\u{1DFF}'
            | '\u{200C}'..='\u{200D}'
            | '\u{20D0}'..='\u{20FF}'
            | '\u{FE00}'..='\u{FE0F}'
            | '\u{FE20}'..='\u{FE2F}'
            | '\u{E0100}'..='\u{E01EF}'
    )
}
