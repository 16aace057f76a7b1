//! Backreference and subpattern parsing tests.

use rowan::TextRange;

use crate::error::ParseError;
use crate::test_utils::{dump, parse_err};

#[test]
fn escaped_backreferences() {
    insta::assert_snapshot!(dump(r"(a)\1\g{-1}"), @r"
    Concatenation
      Group Capture
        Atom Char 'a'
      Atom Backreference 1
      Atom Backreference -1
    ");
}

#[test]
fn named_backreferences() {
    insta::assert_snapshot!(dump(r"(?<n>a)\k<n>\k{n}(?P=n)"), @r"
    Concatenation
      Group NamedCapture n
        Atom Char 'a'
      Atom Backreference n
      Atom Backreference n
      Atom Backreference n
    ");
}

#[test]
fn recursion_level() {
    insta::assert_snapshot!(dump(r"(?<n>a)\k<n+1>"), @r"
    Concatenation
      Group NamedCapture n
        Atom Char 'a'
      Atom Backreference n level +1
    ");
}

#[test]
fn subpattern_calls() {
    insta::assert_snapshot!(dump(r"\g<0>(?R)(?1)(?+1)(?&n)"), @r"
    Concatenation
      Atom Subpattern 0
      Atom Subpattern R
      Atom Subpattern 1
      Atom Subpattern +1
      Atom Subpattern n
    ");
}

#[test]
fn backreference_to_whole_pattern() {
    let err = parse_err(r"\k<0>");
    assert_eq!(err.kind, ParseError::CannotReferToWholePattern);
    assert_eq!(err.range, TextRange::new(3.into(), 4.into()));
}

#[test]
fn octal_fallback_without_enough_groups() {
    insta::assert_snapshot!(dump(r"\12"), @"Atom Scalar U+000A");
}

#[test]
fn non_octal_digits_stay_a_backreference() {
    insta::assert_snapshot!(dump(r"\18"), @"Atom Backreference 18");
}

#[test]
fn name_starting_with_digit() {
    let err = parse_err(r"\k{1a}");
    assert_eq!(
        err.kind,
        ParseError::IdentifierCannotStartWithNumber(crate::error::IdentifierKind::GroupName)
    );
    assert_eq!(err.range, TextRange::new(3.into(), 4.into()));
}
