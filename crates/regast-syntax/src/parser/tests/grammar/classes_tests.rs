//! Custom character class parsing tests.

use indoc::indoc;
use rowan::TextRange;

use crate::error::ParseError;
use crate::options::SyntaxOptions;
use crate::test_utils::{dump, dump_with, parse_err};

#[test]
fn range_and_atoms() {
    insta::assert_snapshot!(dump("[a-z_]"), @r"
    CustomClass
      Range
        Atom Char 'a'
        Atom Char 'z'
      Atom Char '_'
    ");
}

#[test]
fn leading_bracket_and_trailing_dash_are_literal() {
    insta::assert_snapshot!(dump("[^]a-]"), @r"
    CustomClass ^
      Atom Char ']'
      Atom Char 'a'
      Atom Char '-'
    ");
}

#[test]
fn metacharacters_are_literal_inside() {
    insta::assert_snapshot!(dump("[.(|)]"), @r"
    CustomClass
      Atom Char '.'
      Atom Char '('
      Atom Char '|'
      Atom Char ')'
    ");
}

#[test]
fn escapes_inside() {
    insta::assert_snapshot!(dump(r"[\b\d-z]"), @r"
    CustomClass
      Atom Escaped Backspace
      Range
        Atom Escaped DecimalDigit
        Atom Char 'z'
    ");
}

#[test]
fn nested_class() {
    insta::assert_snapshot!(dump("[a[^bc]]"), @r"
    CustomClass
      Atom Char 'a'
      CustomClass ^
        Atom Char 'b'
        Atom Char 'c'
    ");
}

#[test]
fn set_operations_fold_left() {
    insta::assert_snapshot!(dump("[a--b&&c]"), @r"
    CustomClass
      SetOperation &&
        Lhs
          SetOperation --
            Lhs
              Atom Char 'a'
            Rhs
              Atom Char 'b'
        Rhs
          Atom Char 'c'
    ");
}

#[test]
fn posix_property_inside_and_outside() {
    insta::assert_snapshot!(dump("[[:alnum:]x][:^xdigit:]"), @r"
    Concatenation
      CustomClass
        Atom Property Posix(Alnum) posix
        Atom Char 'x'
      Atom Property Posix(Xdigit) inverted posix
    ");
}

#[test]
fn quote_inside() {
    insta::assert_snapshot!(dump(r"[\Q]-\E]"), @r#"
    CustomClass
      Quote "]-"
    "#);
}

#[test]
fn extended_syntax_trivia() {
    let pattern = indoc! {"
        [ a - c # letters
          d ]
    "};
    insta::assert_snapshot!(dump_with(pattern.trim_end(), SyntaxOptions::EXTENDED_SYNTAX), @r#"
    CustomClass
      Trivia " "
      Range
        Atom Char 'a'
        Atom Char 'c'
      Trivia " "
      Trivia " letters"
      Trivia "  "
      Atom Char 'd'
      Trivia " "
    "#);
}

#[test]
fn empty_operand_of_set_operation() {
    let err = parse_err("[a&&]");
    assert_eq!(err.kind, ParseError::ExpectedCustomCharacterClassMembers);
    assert_eq!(err.range, TextRange::new(0.into(), 1.into()));
}

#[test]
fn unclosed_class() {
    let err = parse_err("[ab");
    assert_eq!(err.kind, ParseError::Expected("]".to_string()));
    assert_eq!(err.range, TextRange::empty(3.into()));
}
