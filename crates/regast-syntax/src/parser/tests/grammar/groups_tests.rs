//! Group, absent function and global option parsing tests.

use rowan::TextRange;

use crate::error::ParseError;
use crate::options::SyntaxOptions;
use crate::parser::Parser;
use crate::test_utils::{dump, dump_with, parse_err};

#[test]
fn captures() {
    insta::assert_snapshot!(dump("(a)(?:b)(?<n>c)(?'m'd)(?P<o>e)"), @r"
    Concatenation
      Group Capture
        Atom Char 'a'
      Group NonCapture
        Atom Char 'b'
      Group NamedCapture n
        Atom Char 'c'
      Group NamedCapture m
        Atom Char 'd'
      Group NamedCapture o
        Atom Char 'e'
    ");
}

#[test]
fn lookarounds() {
    insta::assert_snapshot!(dump("(?=a)(?!b)(?<=c)(?<!d)"), @r"
    Concatenation
      Group Lookahead
        Atom Char 'a'
      Group NegativeLookahead
        Atom Char 'b'
      Group Lookbehind
        Atom Char 'c'
      Group NegativeLookbehind
        Atom Char 'd'
    ");
}

#[test]
fn pcre2_spelled_out_groups() {
    insta::assert_snapshot!(dump("(*atomic:a)(*pla:b)(*sr:c)"), @r"
    Concatenation
      Group AtomicNonCapturing
        Atom Char 'a'
      Group Lookahead
        Atom Char 'b'
      Group ScriptRun
        Atom Char 'c'
    ");
}

#[test]
fn balanced_capture() {
    insta::assert_snapshot!(dump("(?<a-b>x)"), @r"
    Group BalancedCapture a-b
      Atom Char 'x'
    ");
}

#[test]
fn empty_group() {
    insta::assert_snapshot!(dump("()"), @r"
    Group Capture
      Empty
    ");
}

#[test]
fn option_group() {
    insta::assert_snapshot!(dump("(?i-s:a)"), @r"
    Group Options i-s
      Atom Char 'a'
    ");
}

#[test]
fn option_atom_applies_to_rest_of_group() {
    insta::assert_snapshot!(dump("(a(?x)b c)d e"), @r#"
    Concatenation
      Group Capture
        Concatenation
          Atom Char 'a'
          Atom Options x
          Atom Char 'b'
          Trivia " "
          Atom Char 'c'
      Atom Char 'd'
      Atom Char ' '
      Atom Char 'e'
    "#);
}

#[test]
fn scoped_extended_syntax() {
    insta::assert_snapshot!(dump("(?x: a)b c"), @r#"
    Concatenation
      Group Options x
        Concatenation
          Trivia " "
          Atom Char 'a'
      Atom Char 'b'
      Atom Char ' '
      Atom Char 'c'
    "#);
}

#[test]
fn named_captures_only() {
    insta::assert_snapshot!(dump("(?n)(a)(?<b>c)"), @r"
    Concatenation
      Atom Options n
      Group NonCapture
        Atom Char 'a'
      Group NamedCapture b
        Atom Char 'c'
    ");
}

#[test]
fn experimental_non_capture() {
    insta::assert_snapshot!(dump_with("(_:a)", SyntaxOptions::EXPERIMENTAL), @r"
    Group NonCapture
      Atom Char 'a'
    ");
}

#[test]
fn absent_functions() {
    insta::assert_snapshot!(dump("(?~a)(?~|)(?~|b)(?~|c|d)"), @r"
    Concatenation
      AbsentFunction Repeater
        Atom Char 'a'
      AbsentFunction Clearer
      AbsentFunction Stopper
        Atom Char 'b'
      AbsentFunction Expression
        Atom Char 'c'
        Atom Char 'd'
    ");
}

#[test]
fn absent_expression_with_too_many_arms() {
    let err = parse_err("(?~|a|b|c)");
    assert_eq!(err.kind, ParseError::TooManyAbsentExpressionChildren(3));
    assert_eq!(err.range, TextRange::new(4.into(), 9.into()));
}

#[test]
fn global_options() {
    insta::assert_snapshot!(dump("(*NO_JIT)(*CRLF)a"), @r"
    Global NoJit
    Global NewlineMatching(CarriageAndLinefeedOnly)
    Atom Char 'a'
    ");
}

#[test]
fn global_option_after_start() {
    let err = parse_err("a(*UTF)");
    assert_eq!(err.kind, ParseError::GlobalMatchingOptionNotAtStart("(*UTF)".to_string()));
    assert_eq!(err.range, TextRange::new(1.into(), 7.into()));
}

#[test]
fn unknown_group_kind() {
    let err = parse_err("(?z)");
    assert_eq!(err.kind, ParseError::UnknownGroupKind("?z".to_string()));
    assert_eq!(err.range, TextRange::new(2.into(), 3.into()));
}

#[test]
fn unclosed_group() {
    let err = parse_err("(a");
    assert_eq!(err.kind, ParseError::Expected(")".to_string()));
    assert_eq!(err.range, TextRange::empty(2.into()));
}

#[test]
fn removing_after_caret() {
    let err = parse_err("(?^-i)");
    assert_eq!(err.kind, ParseError::CannotRemoveMatchingOptionsAfterCaret);
}

#[test]
fn removing_semantic_level() {
    let err = parse_err("(?-X)");
    assert_eq!(err.kind, ParseError::CannotRemoveSemanticsOptions);
    assert_eq!(err.range, TextRange::new(3.into(), 4.into()));
}

#[test]
fn removing_extended_in_multiline_literal() {
    let syntax = SyntaxOptions::EXTENDED_SYNTAX | SyntaxOptions::MULTILINE_COMPILER_LITERAL;
    let err = Parser::new("a(?-x)b", syntax).parse().unwrap_err();
    assert_eq!(err.kind, ParseError::CannotRemoveExtendedSyntaxInMultilineMode);
    assert_eq!(err.range, TextRange::new(4.into(), 5.into()));
}

#[test]
fn unset_extended_group_spanning_lines() {
    let syntax = SyntaxOptions::EXTENDED_SYNTAX | SyntaxOptions::MULTILINE_COMPILER_LITERAL;
    let err = Parser::new("(?-x:a\nb)", syntax).parse().unwrap_err();
    assert_eq!(err.kind, ParseError::UnsetExtendedSyntaxMayNotSpanMultipleLines);

    assert!(Parser::new("(?-x:a b)", syntax).parse().is_ok());
}

#[test]
fn recursion_fuel() {
    let pattern = format!("{}a{}", "(".repeat(10), ")".repeat(10));
    let err = Parser::new(&pattern, SyntaxOptions::TRADITIONAL)
        .with_recursion_fuel(Some(4))
        .parse()
        .unwrap_err();
    assert_eq!(err.kind, ParseError::RecursionLimitExceeded);

    let ast = Parser::new(&pattern, SyntaxOptions::TRADITIONAL)
        .with_recursion_fuel(None)
        .parse();
    assert!(ast.is_ok());
}
