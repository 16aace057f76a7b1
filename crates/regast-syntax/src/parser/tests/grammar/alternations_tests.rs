//! Alternation and concatenation parsing tests.

use crate::ast::Node;
use crate::error::ParseError;
use crate::test_utils::{dump, parse_err, parse_ok};

#[test]
fn empty_pattern() {
    insta::assert_snapshot!(dump(""), @"Empty");
}

#[test]
fn concatenation() {
    insta::assert_snapshot!(dump("abc"), @r"
    Concatenation
      Atom Char 'a'
      Atom Char 'b'
      Atom Char 'c'
    ");
}

#[test]
fn single_atom_is_not_wrapped() {
    insta::assert_snapshot!(dump("a"), @"Atom Char 'a'");
}

#[test]
fn alternation() {
    insta::assert_snapshot!(dump("a|bc"), @r"
    Alternation
      Atom Char 'a'
      Concatenation
        Atom Char 'b'
        Atom Char 'c'
    ");
}

#[test]
fn alternation_with_empty_arms() {
    insta::assert_snapshot!(dump("|a|"), @r"
    Alternation
      Empty
      Atom Char 'a'
      Empty
    ");
}

#[test]
fn pipes_are_one_fewer_than_arms() {
    let ast = parse_ok("a|b|c");
    let Node::Alternation(alt) = ast.root else {
        panic!("expected alternation");
    };
    assert_eq!(alt.children.len(), 3);
    assert_eq!(alt.pipes.len(), 2);
    assert_eq!(u32::from(alt.pipes[1].start()), 3);
}

#[test]
fn unbalanced_close() {
    let err = parse_err("a)b");
    assert_eq!(err.kind, ParseError::UnbalancedEndOfGroup);
    assert_eq!(err.range, rowan::TextRange::new(1.into(), 2.into()));
}
