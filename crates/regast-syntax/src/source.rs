//! Character cursor over pattern text.
//!
//! [`Source`] is `Copy`: speculative lexing saves a copy and assigns it back
//! on failure. Positions are byte offsets into the original text.

use rowan::{TextRange, TextSize};

use crate::error::ParseError;

#[derive(Debug, Clone, Copy)]
pub struct Source<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Source<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    pub fn input(&self) -> &'a str {
        self.input
    }

    /// Unconsumed remainder of the input.
    pub fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Saturates past `u32::MAX`; [`Parser::parse`](crate::Parser::parse)
    /// rejects such inputs before reading them.
    pub fn position(&self) -> TextSize {
        TextSize::try_from(self.pos).unwrap_or(TextSize::new(u32::MAX))
    }

    pub fn is_empty(&self) -> bool {
        self.pos >= self.input.len()
    }

    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    pub fn starts_with(&self, s: &str) -> bool {
        self.rest().starts_with(s)
    }

    /// Text covered by `range`. Out-of-bounds ranges yield an empty string.
    pub fn slice(&self, range: TextRange) -> &'a str {
        self.input
            .get(usize::from(range.start())..usize::from(range.end()))
            .unwrap_or("")
    }

    /// Range from `start` to the current position.
    pub fn range_from(&self, start: TextSize) -> TextRange {
        TextRange::new(start, self.position())
    }

    fn advance(&mut self, bytes: usize) {
        self.pos = (self.pos + bytes).min(self.input.len());
    }

    pub fn try_eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.advance(c.len_utf8());
            return true;
        }
        false
    }

    pub fn try_eat_seq(&mut self, s: &str) -> bool {
        if self.starts_with(s) {
            self.advance(s.len());
            return true;
        }
        false
    }

    pub fn try_eat_if(&mut self, pred: impl Fn(char) -> bool) -> Option<char> {
        let c = self.peek().filter(|&c| pred(c))?;
        self.advance(c.len_utf8());
        Some(c)
    }

    pub fn try_eat_any(&mut self, set: &[char]) -> Option<char> {
        self.try_eat_if(|c| set.contains(&c))
    }

    pub fn eat(&mut self) -> Result<char, ParseError> {
        let c = self.peek().ok_or(ParseError::UnexpectedEndOfInput)?;
        self.advance(c.len_utf8());
        Ok(c)
    }

    pub fn expect(&mut self, c: char) -> Result<(), ParseError> {
        if self.try_eat(c) {
            return Ok(());
        }
        Err(ParseError::Expected(c.to_string()))
    }

    pub fn expect_seq(&mut self, s: &str) -> Result<(), ParseError> {
        if self.try_eat_seq(s) {
            return Ok(());
        }
        Err(ParseError::Expected(s.to_string()))
    }

    /// Longest non-empty prefix whose characters all satisfy `pred`.
    pub fn try_eat_prefix(&mut self, pred: impl Fn(char) -> bool) -> Option<&'a str> {
        self.try_eat_prefix_max(usize::MAX, pred)
    }

    /// Like [`try_eat_prefix`](Self::try_eat_prefix), taking at most `max` characters.
    pub fn try_eat_prefix_max(
        &mut self,
        max: usize,
        pred: impl Fn(char) -> bool,
    ) -> Option<&'a str> {
        let rest = self.rest();
        let len = rest
            .char_indices()
            .take(max)
            .take_while(|&(_, c)| pred(c))
            .last()
            .map(|(i, c)| i + c.len_utf8())?;
        self.advance(len);
        Some(&rest[..len])
    }

    /// Up to `n` characters, fewer at end of input.
    pub fn eat_prefix(&mut self, n: usize) -> &'a str {
        let rest = self.rest();
        let len = rest
            .char_indices()
            .nth(n)
            .map_or(rest.len(), |(i, _)| i);
        self.advance(len);
        &rest[..len]
    }
}
