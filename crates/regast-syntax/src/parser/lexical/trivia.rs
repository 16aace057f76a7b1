//! Trivia, quotes, interpolations and quantifiers.

use regast_core::utils::is_pattern_whitespace;

use crate::ast::{Amount, Located, QuantKind, Quote, Trivia};
use crate::error::{ParseError, Radix, Result};
use crate::parser::Parser;

/// A quantifier with the trivia found inside and before it.
#[derive(Debug)]
pub(crate) struct LexedQuantifier {
    pub amount: Located<Amount>,
    pub kind: Located<QuantKind>,
    pub trivia: Vec<Trivia>,
}

impl Parser<'_> {
    /// `(?#...)`, `/*...*/` or `#...` to end of line, per the dialect.
    pub(crate) fn lex_comment(&mut self) -> Result<Option<Trivia>> {
        let start = self.src.position();
        let contents = if !self.context.in_custom_class && self.src.try_eat_seq("(?#") {
            self.lex_until_eating(")")?
        } else if self.context.experimental_comments() && self.src.try_eat_seq("/*") {
            self.lex_until_eating("*/")?
        } else if self.context.end_of_line_comments() && self.src.try_eat('#') {
            let mode = self.context.newline_mode;
            self.lex_until(|p| {
                let rest = p.src.rest();
                if rest.is_empty() {
                    return Ok(true);
                }
                match mode.newline_len(rest) {
                    Some(len) => Ok(p.src.try_eat_seq(&rest[..len])),
                    None => Ok(false),
                }
            })?
        } else {
            return Ok(None);
        };
        Ok(Some(Trivia {
            contents: contents.value,
            range: self.src.range_from(start),
        }))
    }

    pub(crate) fn lex_whitespace(&mut self) -> Option<Trivia> {
        let start = self.src.position();
        let ws = self.src.try_eat_prefix(is_pattern_whitespace)?;
        Some(Trivia {
            contents: ws.to_string(),
            range: self.src.range_from(start),
        })
    }

    /// Whitespace that only counts as trivia under extended syntax.
    pub(crate) fn lex_non_semantic_whitespace(&mut self) -> Option<Trivia> {
        if !self.context.ignore_whitespace() {
            return None;
        }
        self.lex_whitespace()
    }

    pub(crate) fn lex_trivia(&mut self) -> Result<Option<Trivia>> {
        if let Some(comment) = self.lex_comment()? {
            return Ok(Some(comment));
        }
        Ok(self.lex_non_semantic_whitespace())
    }

    /// `\Q...\E`, or `"..."` with experimental quotes.
    pub(crate) fn lex_quote(&mut self) -> Result<Option<Quote>> {
        let start = self.src.position();
        let literal = if self.src.try_eat_seq("\\Q") {
            let contents =
                self.lex_until(|p| Ok(p.src.is_empty() || p.src.try_eat_seq("\\E")))?;
            if self.context.is_multiline_literal() && contents.value.contains(['\n', '\r']) {
                return self.error_at(ParseError::QuoteMayNotSpanMultipleLines, contents.range);
            }
            if self.context.in_custom_class && contents.value.is_empty() {
                return self.error_at(ParseError::ExpectedNonEmptyContents, contents.range);
            }
            contents.value
        } else if self.context.experimental_quotes() && self.src.try_eat('"') {
            self.expect_quoted("\"", 1, true, true)?.value
        } else {
            return Ok(None);
        };
        Ok(Some(Quote {
            literal,
            range: self.src.range_from(start),
        }))
    }

    /// `<{...}>`
    pub(crate) fn lex_interpolation(&mut self) -> Result<Option<Located<String>>> {
        let start = self.src.position();
        let contents = self.try_parse(|p| {
            if !p.src.try_eat_seq("<{") {
                return Ok(None);
            }
            let contents =
                p.lex_until(|p| Ok(p.src.is_empty() || p.src.starts_with("}>")))?;
            if !p.src.try_eat_seq("}>") {
                return Ok(None);
            }
            Ok(Some(contents.value))
        })?;
        Ok(contents.map(|text| Located::new(text, self.src.range_from(start))))
    }

    /// `* + ? {n} {n,} {,m} {n,m}`, each optionally reluctant or possessive.
    ///
    /// A `{` that does not form a range is left for the caller as a literal.
    pub(crate) fn lex_quantifier(&mut self) -> Result<Option<LexedQuantifier>> {
        self.try_parse(|p| {
            let mut trivia: Vec<Trivia> = p.lex_non_semantic_whitespace().into_iter().collect();

            let start = p.src.position();
            let amount = if p.src.try_eat('*') {
                Amount::ZeroOrMore
            } else if p.src.try_eat('+') {
                Amount::OneOrMore
            } else if p.src.try_eat('?') {
                Amount::ZeroOrOne
            } else {
                let range = p.try_parse(|p| {
                    if !p.src.try_eat('{') {
                        return Ok(None);
                    }
                    let Some(amount) = p.lex_range(&mut trivia)? else {
                        return Ok(None);
                    };
                    Ok(p.src.try_eat('}').then_some(amount))
                })?;
                match range {
                    Some(amount) => amount,
                    None => return Ok(None),
                }
            };
            let amount = Located::new(amount, p.src.range_from(start));

            trivia.extend(p.lex_non_semantic_whitespace());

            let start = p.src.position();
            let kind = if p.src.try_eat('?') {
                QuantKind::Reluctant
            } else if p.src.try_eat('+') {
                QuantKind::Possessive
            } else {
                QuantKind::Eager
            };
            let kind = Located::new(kind, p.src.range_from(start));

            Ok(Some(LexedQuantifier {
                amount,
                kind,
                trivia,
            }))
        })
    }

    /// Body of `{...}`. With experimental ranges, `n...m` and `n..<m` too.
    fn lex_range(&mut self, trivia: &mut Vec<Trivia>) -> Result<Option<Amount>> {
        trivia.extend(self.lex_whitespace());
        let lower = self.lex_number(Radix::Decimal)?;
        trivia.extend(self.lex_whitespace());

        // Some(true) for a closed upper bound, Some(false) for `..<`.
        let closed = if self.src.try_eat(',') {
            Some(true)
        } else if self.context.experimental_ranges() && self.src.try_eat('.') {
            self.expect('.')?;
            if self.src.try_eat('.') {
                Some(true)
            } else {
                self.expect('<')?;
                Some(false)
            }
        } else {
            None
        };

        trivia.extend(self.lex_whitespace());
        let mut upper = self.lex_number(Radix::Decimal)?;
        if closed == Some(false)
            && let Some(upper) = upper.as_mut()
        {
            upper.value -= 1;
        }
        trivia.extend(self.lex_whitespace());

        let amount = match (lower, closed, upper) {
            (Some(n), None, None) => Amount::Exactly(n),
            (Some(n), Some(true), None) => Amount::NOrMore(n),
            (None, Some(_), Some(m)) => Amount::UpToN(m),
            (Some(n), Some(_), Some(m)) => Amount::Range(n, m),
            _ => return Ok(None),
        };
        Ok(Some(amount))
    }
}
