//! Atom parsing tests: escapes, scalars, properties, directives, callouts.

use rowan::TextRange;

use crate::error::{ParseError, Radix};
use crate::test_utils::{dump, parse_err};

#[test]
fn anchors_and_dot() {
    insta::assert_snapshot!(dump("^.$"), @r"
    Concatenation
      Atom StartOfLine
      Atom Any
      Atom EndOfLine
    ");
}

#[test]
fn builtin_escapes() {
    insta::assert_snapshot!(dump(r"\d\W\n\A\z"), @r"
    Concatenation
      Atom Escaped DecimalDigit
      Atom Escaped NotWordCharacter
      Atom Escaped Newline
      Atom Escaped StartOfSubject
      Atom Escaped EndOfSubject
    ");
}

#[test]
fn punctuation_escapes_itself() {
    insta::assert_snapshot!(dump(r"\-\."), @r"
    Concatenation
      Atom Char '-'
      Atom Char '.'
    ");
}

#[test]
fn scalars() {
    insta::assert_snapshot!(dump(r"\x41\x{1F600}B\u{43}\o{101}\0101"), @r"
    Concatenation
      Atom Scalar U+0041
      Atom Scalar U+1F600
      Atom Char 'B'
      Atom Scalar U+0043
      Atom Scalar U+0041
      Atom Scalar U+0041
    ");
}

#[test]
fn scalar_sequence() {
    insta::assert_snapshot!(dump(r"\u{61 62 63}"), @"Atom ScalarSequence U+0061 U+0062 U+0063");
}

#[test]
fn keyboard_and_named_characters() {
    insta::assert_snapshot!(dump(r"\cA\M-x\N{LATIN SMALL LETTER A}\N{U+41}"), @r"
    Concatenation
      Atom KeyboardControl 'A'
      Atom KeyboardMeta 'x'
      Atom NamedCharacter LATIN SMALL LETTER A
      Atom Scalar U+0041
    ");
}

#[test]
fn properties() {
    insta::assert_snapshot!(dump(r"\p{Lu}\P{Greek}\pL\p{sc=Greek}"), @r"
    Concatenation
      Atom Property GeneralCategory(UppercaseLetter)
      Atom Property ScriptExtension(Greek) inverted
      Atom Property GeneralCategory(Letter)
      Atom Property Script(Greek)
    ");
}

#[test]
fn unknown_property() {
    let err = parse_err(r"\p{Nope}");
    assert_eq!(
        err.kind,
        ParseError::UnknownProperty {
            key: None,
            value: "Nope".to_string()
        }
    );
    assert_eq!(err.range, TextRange::new(3.into(), 7.into()));
}

#[test]
fn invalid_escape() {
    let err = parse_err(r"a\i");
    assert_eq!(err.kind, ParseError::InvalidEscape("i".to_string()));
    assert_eq!(err.range, TextRange::new(2.into(), 3.into()));
}

#[test]
fn trailing_backslash() {
    let err = parse_err(r"a\");
    assert_eq!(err.kind, ParseError::ExpectedEscape);
}

#[test]
fn short_fixed_width_scalar() {
    let err = parse_err(r"\u12");
    assert_eq!(err.kind, ParseError::ExpectedNumDigits("12".to_string(), 4));
}

#[test]
fn non_hex_braced_scalar() {
    let err = parse_err(r"\x{zz}");
    assert_eq!(err.kind, ParseError::ExpectedNumber("zz".to_string(), Radix::Hex));
    assert_eq!(err.range, TextRange::new(3.into(), 5.into()));
}

#[test]
fn combining_mark_after_metacharacter() {
    let err = parse_err("-\u{301}");
    assert_eq!(err.kind, ParseError::ConfusableCharacter('-'));
    assert_eq!(err.range, TextRange::new(0.into(), 3.into()));
}

#[test]
fn combining_mark_never_forms_syntax() {
    let cases = [
        ("[\u{301}]", '[', 0),
        ("(\u{358})", '(', 0),
        ("{\u{35B}}", '{', 0),
        ("\\\u{35C}", '\\', 0),
        ("^\u{35D}", '^', 0),
        ("$\u{35E}", '$', 0),
        (".\u{35F}", '.', 0),
        ("a|\u{360}", '|', 1),
        (" \u{361}", ' ', 0),
        ("a*\u{301}", '*', 1),
        ("(a)\u{301}", ')', 2),
        ("[a.\u{301}]", '.', 2),
    ];
    for (pattern, c, start) in cases {
        let err = parse_err(pattern);
        assert_eq!(err.kind, ParseError::ConfusableCharacter(c), "{pattern:?}");
        assert_eq!(err.range, TextRange::new(start.into(), (start + 3).into()), "{pattern:?}");
    }
}

#[test]
fn combining_mark_after_letter_is_literal() {
    insta::assert_snapshot!(dump("e\u{301}"), @r"
    Concatenation
      Atom Char 'e'
      Atom Char '\u{301}'
    ");
}

#[test]
fn backtracking_directives() {
    insta::assert_snapshot!(dump("(*ACCEPT)(*F)(*MARK:m)(*:n)(*PRUNE:p)"), @r"
    Concatenation
      Atom Directive Accept
      Atom Directive Fail
      Atom Directive Mark:m
      Atom Directive Mark:n
      Atom Directive Prune:p
    ");
}

#[test]
fn mark_requires_name() {
    let err = parse_err("(*MARK)");
    assert_eq!(
        err.kind,
        ParseError::BacktrackingDirectiveMustHaveName("MARK".to_string())
    );
    assert_eq!(err.range, TextRange::new(2.into(), 6.into()));
}

#[test]
fn callouts() {
    insta::assert_snapshot!(dump(r#"(?C)(?C7)(?C"text")(*FOO)(?{x}<)"#), @r#"
    Concatenation
      Atom Callout C0
      Atom Callout C7
      Atom Callout C"text"
      Atom Callout FOO
      Atom Callout {x} InRetraction
    "#);
}

#[test]
fn unknown_callout() {
    let err = parse_err("(?C!)");
    assert_eq!(err.kind, ParseError::UnknownCalloutKind("(?C!".to_string()));
    assert_eq!(err.range, TextRange::new(3.into(), 4.into()));
}

#[test]
fn interpolation_is_reserved() {
    let err = parse_err("a<{b}>");
    assert_eq!(err.kind, ParseError::Unsupported("interpolation".to_string()));
    assert_eq!(err.range, TextRange::new(1.into(), 6.into()));
}
