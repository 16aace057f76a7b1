//! Everything after a backslash, plus character properties.

use regast_core::PropertyKind;

use crate::ast::{AtomKind, CharacterProperty, EscapedBuiltin, Located, ScalarSequence};
use crate::error::{Error, ParseError, Radix, Result};
use crate::parser::Parser;

impl Parser<'_> {
    /// Escape body, with the backslash already consumed.
    pub(super) fn expect_escaped(&mut self) -> Result<AtomKind> {
        self.record(|p| p.expect_escaped_kind())
    }

    fn expect_escaped_kind(&mut self) -> Result<AtomKind> {
        let in_class = self.context.in_custom_class;

        if self.src.try_eat('c') || self.src.try_eat_seq("C-") {
            return Ok(AtomKind::KeyboardControl(self.expect_ascii()?));
        }
        if self.src.try_eat_seq("M-\\C-") {
            return Ok(AtomKind::KeyboardMetaControl(self.expect_ascii()?));
        }
        if self.src.try_eat_seq("M-") {
            return Ok(AtomKind::KeyboardMeta(self.expect_ascii()?));
        }

        if let Some(kind) = self.lex_named_character()? {
            return Ok(kind);
        }
        if let Some(prop) = self.lex_character_property()? {
            return Ok(AtomKind::Property(prop));
        }
        // References are meaningless inside a class.
        if !in_class && let Some(kind) = self.lex_escaped_reference()? {
            return Ok(kind);
        }
        if let Some(kind) = self.lex_unicode_scalar()? {
            return Ok(kind);
        }

        let Some(c) = self.peek_located() else {
            return self.error_here(ParseError::ExpectedEscape);
        };
        self.src.eat()?;
        if let Some(builtin) = EscapedBuiltin::from_char(c.value, in_class) {
            return Ok(AtomKind::Escaped(builtin));
        }
        // Unknown letters and digits are reserved; punctuation escapes itself.
        if c.value.is_ascii_alphanumeric() || (!c.value.is_ascii() && !c.value.is_whitespace()) {
            return self.error_at(ParseError::InvalidEscape(c.value.to_string()), c.range);
        }
        Ok(AtomKind::Char(c.value))
    }

    fn expect_ascii(&mut self) -> Result<char> {
        let start = self.src.position();
        let c = self.src.eat()?;
        if !c.is_ascii() {
            return self.error_at(ParseError::ExpectedAscii(c), self.src.range_from(start));
        }
        Ok(c)
    }

    /// `\N{U+hex}` or `\N{name}`.
    fn lex_named_character(&mut self) -> Result<Option<AtomKind>> {
        if !self.src.try_eat_seq("N{") {
            return Ok(None);
        }
        if self.src.try_eat_seq("U+") {
            let digits = self.lex_until_eating("}")?;
            let scalar = self.validate_scalar(&digits.value, digits.range, Radix::Hex)?;
            return Ok(Some(AtomKind::Scalar(scalar)));
        }
        let name = self.lex_until_eating("}")?;
        Ok(Some(AtomKind::NamedCharacter(name.value)))
    }

    /// `\p{...}`, `\P{...}` and the one-letter `\pL` form.
    fn lex_character_property(&mut self) -> Result<Option<CharacterProperty>> {
        let is_inverted = if self.src.try_eat_seq("p{") {
            false
        } else if self.src.try_eat_seq("P{") {
            true
        } else {
            return self.lex_single_letter_property();
        };
        let (key, value) = self.lex_property_key_value()?;
        let kind = self.classify_property(key.as_ref(), &value)?;
        self.expect('}')?;
        Ok(Some(CharacterProperty {
            kind,
            is_inverted,
            is_posix: false,
        }))
    }

    fn lex_single_letter_property(&mut self) -> Result<Option<CharacterProperty>> {
        let is_inverted = match (self.src.peek(), self.src.peek_nth(1)) {
            (Some('p'), Some(c)) if c.is_ascii_alphabetic() => false,
            (Some('P'), Some(c)) if c.is_ascii_alphabetic() => true,
            _ => return Ok(None),
        };
        self.src.eat()?;
        let start = self.src.position();
        let letter = self.src.eat()?;
        let value = Located::new(letter.to_string(), self.src.range_from(start));
        let kind = self.classify_property(None, &value)?;
        Ok(Some(CharacterProperty {
            kind,
            is_inverted,
            is_posix: false,
        }))
    }

    /// `[:name:]`, `[:^name:]`, `[:key=value:]`.
    ///
    /// Declines without a closing `:]` so the caller can lex a class instead.
    pub(crate) fn lex_posix_property(&mut self) -> Result<Option<CharacterProperty>> {
        self.try_parse(|p| {
            if !p.src.try_eat_seq("[:") {
                return Ok(None);
            }
            let is_inverted = p.src.try_eat('^');
            let (key, value) = p.lex_property_key_value()?;
            if !p.src.try_eat_seq(":]") {
                return Ok(None);
            }
            let kind = p.classify_property(key.as_ref(), &value)?;
            Ok(Some(CharacterProperty {
                kind,
                is_inverted,
                is_posix: true,
            }))
        })
    }

    /// A malformed but closed POSIX property still counts, so its error
    /// surfaces instead of a class parse.
    pub(crate) fn can_lex_posix_property(&mut self) -> bool {
        self.lookahead(|p| !matches!(p.lex_posix_property(), Ok(None)))
    }

    fn lex_property_key_value(&mut self) -> Result<(Option<Located<String>>, Located<String>)> {
        fn at_possible_ending(p: &mut Parser<'_>) -> Result<bool> {
            Ok(matches!(
                p.src.peek(),
                None | Some('=' | ':' | '[' | ']' | '}' | '\\')
            ))
        }
        let lhs = self.lex_until(at_possible_ending)?;
        if self.src.try_eat('=') {
            let rhs = self.lex_until(at_possible_ending)?;
            return Ok((Some(lhs), rhs));
        }
        Ok((None, lhs))
    }

    fn classify_property(
        &self,
        key: Option<&Located<String>>,
        value: &Located<String>,
    ) -> Result<PropertyKind> {
        let (result, range) = match key {
            Some(key) => (
                regast_core::classify_keyed(&key.value, &value.value),
                key.range.cover(value.range),
            ),
            None => (regast_core::classify(&value.value), value.range),
        };
        result.map_err(|err| Error::new(err.into(), range))
    }

    /// Scalar escapes: `\u{...}`, `\uHHHH`, `\UHHHHHHHH`, `\x{...}`, `\xHH`,
    /// `\o{...}` and `\0ooo`.
    fn lex_unicode_scalar(&mut self) -> Result<Option<AtomKind>> {
        self.try_parse(|p| {
            let Ok(c) = p.src.eat() else {
                return Ok(None);
            };
            let kind = match c {
                'u' if p.src.try_eat('{') => p.expect_unicode_scalar_sequence('}')?,
                'x' if p.src.try_eat('{') => {
                    let digits = p.lex_until_eating("}")?;
                    AtomKind::Scalar(p.validate_scalar(&digits.value, digits.range, Radix::Hex)?)
                }
                // PCRE reads a bare `\x` as NUL.
                'x' => AtomKind::Scalar(p.lex_scalar_prefix(2, Radix::Hex)?),
                'u' => AtomKind::Scalar(p.expect_fixed_width_scalar(4)?),
                'U' => AtomKind::Scalar(p.expect_fixed_width_scalar(8)?),
                'o' if p.src.try_eat('{') => {
                    let digits = p.lex_until_eating("}")?;
                    AtomKind::Scalar(p.validate_scalar(&digits.value, digits.range, Radix::Octal)?)
                }
                '0' => AtomKind::Scalar(p.lex_scalar_prefix(3, Radix::Octal)?),
                _ => return Ok(None),
            };
            Ok(Some(kind))
        })
    }

    /// Up to `max` digits; none at all reads as NUL.
    pub(super) fn lex_scalar_prefix(&mut self, max: usize, radix: Radix) -> Result<Located<char>> {
        let start = self.src.position();
        match self.src.try_eat_prefix_max(max, |c| radix.accepts(c)) {
            Some(digits) => self.validate_scalar(digits, self.src.range_from(start), radix),
            None => Ok(Located::new('\0', self.src.range_from(start))),
        }
    }

    fn expect_fixed_width_scalar(&mut self, width: usize) -> Result<Located<char>> {
        let start = self.src.position();
        let digits = self.src.eat_prefix(width);
        let range = self.src.range_from(start);
        if digits.chars().count() != width {
            return self.error_at(ParseError::ExpectedNumDigits(digits.to_string(), width), range);
        }
        self.validate_scalar(digits, range, Radix::Hex)
    }

    /// Whitespace-separated hex scalars up to `ending`.
    fn expect_unicode_scalar_sequence(&mut self, ending: char) -> Result<AtomKind> {
        let mut scalars = Vec::new();
        let mut trivia: Vec<_> = self.lex_whitespace().into_iter().collect();

        loop {
            let digits = self.lex_until(|p| {
                if p.src.is_empty() || p.src.peek() == Some(ending) {
                    return Ok(true);
                }
                if let Some(ws) = p.lex_whitespace() {
                    trivia.push(ws);
                    return Ok(true);
                }
                Ok(false)
            })?;
            if digits.value.is_empty() {
                break;
            }
            scalars.push(self.validate_scalar(&digits.value, digits.range, Radix::Hex)?);
        }
        self.expect(ending)?;

        match scalars.len() {
            0 => self.error_here(ParseError::ExpectedNumber(String::new(), Radix::Hex)),
            1 => Ok(AtomKind::Scalar(scalars.remove(0))),
            _ => Ok(AtomKind::ScalarSequence(ScalarSequence { scalars, trivia })),
        }
    }
}
