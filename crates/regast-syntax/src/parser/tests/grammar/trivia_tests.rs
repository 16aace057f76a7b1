//! Comments, quotes and whitespace.

use indoc::indoc;

use crate::options::SyntaxOptions;
use crate::test_utils::{dump, dump_with};

#[test]
fn inline_comment() {
    insta::assert_snapshot!(dump("a(?#note)b"), @r#"
    Concatenation
      Atom Char 'a'
      Trivia "note"
      Atom Char 'b'
    "#);
}

#[test]
fn whitespace_is_literal_by_default() {
    insta::assert_snapshot!(dump("a b"), @r"
    Concatenation
      Atom Char 'a'
      Atom Char ' '
      Atom Char 'b'
    ");
}

#[test]
fn end_of_line_comment() {
    let pattern = indoc! {"
        a # c
        b"};
    insta::assert_snapshot!(dump_with(pattern, SyntaxOptions::EXTENDED_SYNTAX), @r#"
    Concatenation
      Atom Char 'a'
      Trivia " "
      Trivia " c"
      Atom Char 'b'
    "#);
}

#[test]
fn quoted_sequence() {
    insta::assert_snapshot!(dump(r"\Qa*\Eb"), @r#"
    Concatenation
      Quote "a*"
      Atom Char 'b'
    "#);
}

#[test]
fn unterminated_quote_runs_to_end() {
    insta::assert_snapshot!(dump(r"x\Qa("), @r#"
    Concatenation
      Atom Char 'x'
      Quote "a("
    "#);
}

#[test]
fn experimental_quotes_and_comments() {
    insta::assert_snapshot!(dump_with(r#""a b" /* c */ d"#, SyntaxOptions::EXPERIMENTAL), @r#"
    Concatenation
      Quote "a b"
      Trivia " "
      Trivia " c "
      Trivia " "
      Atom Char 'd'
    "#);
}

#[test]
fn hash_is_literal_in_experimental_syntax() {
    insta::assert_snapshot!(dump_with("a#", SyntaxOptions::EXPERIMENTAL), @r"
    Concatenation
      Atom Char 'a'
      Atom Char '#'
    ");
}
