//! Recursive-descent parser for regex patterns.
//!
//! # Architecture
//!
//! The parser works directly on a [`Source`] cursor; there is no separate
//! token stream. Most constructs are recognized by the lexical layer
//! (`lexical/`), which the grammar layer (`grammar/`) drives.
//!
//! - Speculation: `try_parse` snapshots the cursor and the [`ParsingContext`]
//!   and restores both when the attempt declines with `Ok(None)`.
//! - Errors: grammar errors are fatal. The first one aborts the parse. Errors
//!   raised without a range are stamped by the innermost `record` scope.
//! - Scoping: group bodies save the dialect options on entry and restore them
//!   on every exit path.
//!
//! Recursion is bounded by fuel; exhausting it is a fatal
//! [`ParseError::RecursionLimitExceeded`].

mod context;
mod grammar;
mod keywords;
mod lexical;

#[cfg(test)]
mod tests;

pub use context::ParsingContext;

use rowan::{TextRange, TextSize};

use crate::ast::Ast;
use crate::diagnostics::Diagnostics;
use crate::error::{Error, ParseError, Result};
use crate::options::SyntaxOptions;
use crate::source::Source;

/// Nesting depth allowed when no explicit fuel is configured.
pub const DEFAULT_RECURSION_FUEL: u32 = 512;

pub struct Parser<'a> {
    src: Source<'a>,
    context: ParsingContext,
    depth: u32,
    recursion_fuel_limit: Option<u32>,
}

impl<'a> Parser<'a> {
    pub fn new(pattern: &'a str, syntax: SyntaxOptions) -> Self {
        Self {
            src: Source::new(pattern),
            context: ParsingContext::new(syntax),
            depth: 0,
            recursion_fuel_limit: Some(DEFAULT_RECURSION_FUEL),
        }
    }

    /// `None` disables the limit.
    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.recursion_fuel_limit = limit;
        self
    }

    /// Parses the whole pattern. Semantic checks are not run.
    pub fn parse(mut self) -> Result<Ast> {
        let syntax = self.context.syntax;
        tracing::debug!(
            len = self.src.input().len(),
            syntax = syntax.bits(),
            "parsing pattern"
        );
        if TextSize::try_from(self.src.input().len()).is_err() {
            return self.error_at(ParseError::PatternTooLong, TextRange::empty(TextSize::new(0)));
        }

        let global_options = self.parse_global_options()?;
        let root = self.parse_node()?;

        if !self.src.is_empty() {
            // Concatenations stop at `)`, and only a group body consumes it.
            let range = self
                .try_eat_located(')')
                .unwrap_or_else(|| TextRange::empty(self.src.position()));
            return Err(Error::new(ParseError::UnbalancedEndOfGroup, range));
        }

        Ok(Ast {
            root,
            global_options,
            diagnostics: Diagnostics::new(),
            syntax,
        })
    }

    /// Runs `f`, stamping range-less errors with the text it consumed.
    fn record<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        let start = self.src.position();
        f(self).map_err(|mut err| {
            if err.is_synthetic() {
                err.range = self.src.range_from(start);
            }
            err
        })
    }

    /// Speculative parse. `Ok(None)` rewinds the cursor and the context.
    fn try_parse<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<Option<T>>) -> Result<Option<T>> {
        let (src, context) = self.snapshot();
        let result = f(self)?;
        if result.is_none() {
            self.restore(src, context);
        }
        Ok(result)
    }

    /// Runs `f` and rewinds unconditionally.
    fn lookahead<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let (src, context) = self.snapshot();
        let result = f(self);
        self.restore(src, context);
        result
    }

    fn snapshot(&self) -> (Source<'a>, ParsingContext) {
        (self.src, self.context.clone())
    }

    fn restore(&mut self, src: Source<'a>, context: ParsingContext) {
        self.src = src;
        self.context = context;
    }

    fn error_here<T>(&self, kind: ParseError) -> Result<T> {
        Err(Error::new(kind, TextRange::empty(self.src.position())))
    }

    fn error_at<T>(&self, kind: ParseError, range: TextRange) -> Result<T> {
        Err(Error::new(kind, range))
    }

    fn expect(&mut self, c: char) -> Result<TextRange> {
        match self.try_eat_located(c) {
            Some(range) => Ok(range),
            None => self.error_here(ParseError::Expected(c.to_string())),
        }
    }

    fn expect_seq(&mut self, s: &str) -> Result<TextRange> {
        match self.try_eat_seq_located(s) {
            Some(range) => Ok(range),
            None => self.error_here(ParseError::Expected(s.to_string())),
        }
    }

    fn try_eat_located(&mut self, c: char) -> Option<TextRange> {
        let start = self.src.position();
        self.src.try_eat(c).then(|| self.src.range_from(start))
    }

    fn try_eat_seq_located(&mut self, s: &str) -> Option<TextRange> {
        let start = self.src.position();
        self.src.try_eat_seq(s).then(|| self.src.range_from(start))
    }

    fn enter_recursion(&mut self) -> Result<()> {
        if let Some(limit) = self.recursion_fuel_limit
            && self.depth >= limit
        {
            return self.error_here(ParseError::RecursionLimitExceeded);
        }
        self.depth += 1;
        Ok(())
    }

    fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
