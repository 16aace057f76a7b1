//! Quantifier parsing tests.

use rowan::TextRange;

use crate::ast::Node;
use crate::error::ParseError;
use crate::options::SyntaxOptions;
use crate::test_utils::{dump, dump_with, parse_err, parse_ok_with};

#[test]
fn kinds() {
    insta::assert_snapshot!(dump("a*b+?c??d*+"), @r"
    Concatenation
      Quantification * eager
        Atom Char 'a'
      Quantification + reluctant
        Atom Char 'b'
      Quantification ? reluctant
        Atom Char 'c'
      Quantification * possessive
        Atom Char 'd'
    ");
}

#[test]
fn bounded_ranges() {
    insta::assert_snapshot!(dump("a{2}b{2,}c{,3}d{2,3}"), @r"
    Concatenation
      Quantification {2} eager
        Atom Char 'a'
      Quantification {2,} eager
        Atom Char 'b'
      Quantification {,3} eager
        Atom Char 'c'
      Quantification {2,3} eager
        Atom Char 'd'
    ");
}

#[test]
fn quantified_group() {
    insta::assert_snapshot!(dump("(ab)+"), @r"
    Quantification + eager
      Group Capture
        Concatenation
          Atom Char 'a'
          Atom Char 'b'
    ");
}

#[test]
fn brace_without_range_is_literal() {
    insta::assert_snapshot!(dump("a{x}"), @r"
    Concatenation
      Atom Char 'a'
      Atom Char '{'
      Atom Char 'x'
      Atom Char '}'
    ");
}

#[test]
fn experimental_ranges() {
    insta::assert_snapshot!(dump_with("a{2...4}b{2..<4}", SyntaxOptions::EXPERIMENTAL), @r"
    Concatenation
      Quantification {2,4} eager
        Atom Char 'a'
      Quantification {2,3} eager
        Atom Char 'b'
    ");
}

#[test]
fn trivia_before_quantifier_is_kept() {
    let ast = parse_ok_with("a *", SyntaxOptions::EXTENDED_SYNTAX);
    let Node::Quantification(quant) = ast.root else {
        panic!("expected quantification");
    };
    assert_eq!(quant.trivia.len(), 1);
    assert_eq!(quant.trivia[0].contents, " ");
    assert_eq!(quant.range, TextRange::new(0.into(), 3.into()));
}

#[test]
fn quantifier_without_operand() {
    let err = parse_err("*a");
    assert_eq!(err.kind, ParseError::QuantifierRequiresOperand("*".to_string()));
    assert_eq!(err.range, TextRange::new(0.into(), 1.into()));
}

#[test]
fn double_quantifier() {
    let err = parse_err("a**");
    assert_eq!(err.kind, ParseError::QuantifierRequiresOperand("*".to_string()));
    assert_eq!(err.range, TextRange::new(2.into(), 3.into()));
}

#[test]
fn anchor_is_not_quantifiable() {
    let err = parse_err("^*");
    assert_eq!(err.kind, ParseError::NotQuantifiable);
    assert_eq!(err.range, TextRange::new(1.into(), 2.into()));
}

#[test]
fn word_boundary_is_not_quantifiable() {
    let err = parse_err(r"\b+?");
    assert_eq!(err.kind, ParseError::NotQuantifiable);
    assert_eq!(err.range, TextRange::new(2.into(), 4.into()));
}

#[test]
fn overflowing_bound() {
    let err = parse_err("a{99999999999}");
    assert_eq!(err.kind, ParseError::NumberOverflow("99999999999".to_string()));
    assert_eq!(err.range, TextRange::new(2.into(), 13.into()));
}
