//! Regex pattern front end: delimiter lexer, parser, and semantic checks.
//!
//! This crate turns regex source text into a validated AST:
//! - `delimiter` - finds regex literals in host source and strips delimiters
//! - `parser` - recursive-descent parser over a character cursor
//! - `sema` - checks for constructs that parse but cannot be compiled
//! - `captures` - derives the capture list consumed by type inference
//! - `diagnostics` - non-fatal findings and their rendering
//! - `host` - entry points for a host compiler's tokenizer and parser

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod ast;
pub mod captures;
pub mod delimiter;
pub mod diagnostics;
pub mod error;
pub mod host;
pub mod options;
pub mod parser;
pub mod sema;
pub mod source;

#[cfg(test)]
mod host_tests;
#[cfg(test)]
pub mod test_utils;

use rowan::{TextRange, TextSize};

pub use ast::Ast;
pub use delimiter::{Delimiter, DelimiterKind, DelimiterLexError, DelimiterLexer, strip_delimiters};
pub use diagnostics::{Annotated, Diagnostics, Severity};
pub use error::{Error, ParseError, Result};
pub use options::SyntaxOptions;
pub use parser::Parser;

/// Parses `pattern` in the given dialect and runs semantic checks.
///
/// Grammar errors are fatal. Semantic findings are attached to the returned
/// AST's diagnostics.
pub fn parse(pattern: &str, syntax: SyntaxOptions) -> Result<Ast> {
    let mut ast = Parser::new(pattern, syntax).parse()?;
    sema::validate(&mut ast);
    Ok(ast)
}

/// Parses a delimited literal such as `#/a+/#`, picking the dialect from its
/// delimiter.
///
/// A literal the delimiter lexer rejects, e.g. one missing its closing
/// delimiter, is still parsed from whatever follows the opening.
///
/// Error and diagnostic ranges are relative to `literal`. AST node ranges stay
/// relative to the contents.
pub fn parse_with_delimiters(literal: &str) -> Result<Ast> {
    let (contents, delimiter, multiline) = match DelimiterLexer::new(literal).lex() {
        Ok(lexed) => (lexed.contents, lexed.delimiter, lexed.multiline),
        Err(err) => {
            let (contents, delimiter) = strip_delimiters(literal).ok_or_else(|| {
                Error::new(
                    ParseError::Misc(err.to_string()),
                    TextRange::empty(TextSize::new(0)),
                )
            })?;
            let after_opening = &literal[delimiter.opening().len()..];
            let multiline = delimiter.allows_multiline() && after_opening.contains(['\n', '\r']);
            (contents, delimiter, multiline)
        }
    };
    let offset = contents.as_ptr() as usize - literal.as_ptr() as usize;
    let syntax = delimiter.default_syntax(multiline);
    tracing::debug!(kind = ?delimiter.kind, multiline, offset, "parsing delimited literal");

    let shift = TextSize::try_from(offset).map_err(|_| {
        Error::new(ParseError::PatternTooLong, TextRange::empty(TextSize::new(0)))
    })?;
    let mut ast = parse(contents, syntax).map_err(|err| err.shifted(shift))?;
    ast.diagnostics = std::mem::take(&mut ast.diagnostics).shifted(shift);
    Ok(ast)
}
