//! Conditional parsing tests.

use rowan::TextRange;

use crate::error::ParseError;
use crate::test_utils::{dump, parse_err};

#[test]
fn numbered_condition() {
    insta::assert_snapshot!(dump("(?(1)a|b)"), @r"
    Conditional GroupMatched 1
      Atom Char 'a'
      Atom Char 'b'
    ");
}

#[test]
fn single_branch_gets_empty_false_branch() {
    insta::assert_snapshot!(dump("(?(+1)ab)"), @r"
    Conditional GroupMatched +1
      Concatenation
        Atom Char 'a'
        Atom Char 'b'
      Empty
    ");
}

#[test]
fn named_conditions() {
    insta::assert_snapshot!(dump("(?(<n>)a|b)(?('m')c)"), @r"
    Concatenation
      Conditional GroupMatched n
        Atom Char 'a'
        Atom Char 'b'
      Conditional GroupMatched m
        Atom Char 'c'
        Empty
    ");
}

#[test]
fn recursion_checks() {
    insta::assert_snapshot!(dump("(?(R)a)(?(R2)b)(?(R&n)c)"), @r"
    Concatenation
      Conditional RecursionCheck
        Atom Char 'a'
        Empty
      Conditional GroupRecursionCheck 2
        Atom Char 'b'
        Empty
      Conditional GroupRecursionCheck n
        Atom Char 'c'
        Empty
    ");
}

#[test]
fn define_and_version() {
    insta::assert_snapshot!(dump("(?(DEFINE)x)(?(VERSION>=10.32)a|b)"), @r"
    Concatenation
      Conditional Define
        Atom Char 'x'
        Empty
      Conditional Version GreaterThanOrEqual 10.32
        Atom Char 'a'
        Atom Char 'b'
    ");
}

#[test]
fn group_condition() {
    insta::assert_snapshot!(dump("(?(?=a)b|c)"), @r"
    Conditional Group
      Group Lookahead
        Atom Char 'a'
      Atom Char 'b'
      Atom Char 'c'
    ");
}

#[test]
fn bare_name_of_prior_group() {
    insta::assert_snapshot!(dump("(?<n>x)(?(n)a|b)"), @r"
    Concatenation
      Group NamedCapture n
        Atom Char 'x'
      Conditional GroupMatched n
        Atom Char 'a'
        Atom Char 'b'
    ");
}

#[test]
fn bare_name_without_prior_group_is_a_capture() {
    insta::assert_snapshot!(dump("(?(n)a|b)"), @r"
    Conditional Group
      Group Capture
        Atom Char 'n'
      Atom Char 'a'
      Atom Char 'b'
    ");
}

#[test]
fn too_many_branches() {
    let err = parse_err("(?(1)a|b|c)");
    assert_eq!(err.kind, ParseError::TooManyBranchesInConditional(3));
    assert_eq!(err.range, TextRange::new(5.into(), 10.into()));
}

#[test]
fn conditional_is_quantifiable() {
    insta::assert_snapshot!(dump("(?(1)a)*"), @r"
    Quantification * eager
      Conditional GroupMatched 1
        Atom Char 'a'
        Empty
    ");
}
