use indoc::indoc;
use regast_capture::CaptureStructure;

use crate::host::{
    HostLexError, HostLexResult, REGEX_LITERAL_FORMAT_VERSION, lex_regex_literal,
    parse_regex_literal,
};

#[test]
fn lex_well_formed_literal() {
    assert_eq!(
        lex_regex_literal(b"/a+/ + x", true),
        Some(HostLexResult {
            resume: 4,
            error: None
        })
    );
}

#[test]
fn unknown_delimiter_is_never_a_literal() {
    assert_eq!(lex_regex_literal(b"abc", true), None);
    assert_eq!(lex_regex_literal(b"abc", false), None);
}

#[test]
fn errors_are_silent_unless_required() {
    let input = b"/ab\ncd/";
    assert_eq!(lex_regex_literal(input, false), None);
    assert_eq!(
        lex_regex_literal(input, true),
        Some(HostLexResult {
            resume: 3,
            error: Some(HostLexError {
                message: "unterminated regex literal".to_string(),
                completely_erroneous: false,
            }),
        })
    );
}

#[test]
fn unprintable_is_completely_erroneous() {
    let result = lex_regex_literal(b"/a\x07b/", true).unwrap();
    assert_eq!(result.resume, 3);
    let error = result.error.unwrap();
    assert!(error.completely_erroneous);
    insta::assert_snapshot!(error.message, @"unprintable ASCII character found in source file");
}

#[test]
fn parse_encodes_captures() {
    let mut buf = Vec::new();
    let parsed = parse_regex_literal("/(a)|(b)/", &mut buf).unwrap();
    assert_eq!(parsed.regex, "/(a)|(b)/");
    assert_eq!(parsed.version, REGEX_LITERAL_FORMAT_VERSION);
    assert_eq!(
        CaptureStructure::decode(&buf).unwrap(),
        CaptureStructure::Tuple(vec![
            CaptureStructure::optional(CaptureStructure::atom()),
            CaptureStructure::optional(CaptureStructure::atom()),
        ])
    );
}

#[test]
fn parse_appends_to_buffer() {
    let mut buf = vec![0xAA];
    parse_regex_literal("re'(?<n>a)'", &mut buf).unwrap();
    assert_eq!(buf[0], 0xAA);
    assert_eq!(
        CaptureStructure::decode(&buf[1..]).unwrap(),
        CaptureStructure::named("n")
    );
}

#[test]
fn parse_multiline_literal() {
    let literal = indoc! {"
        #/
          (?<word> \\w+ )  # a word
          \\s*
        /#"};
    let mut buf = Vec::new();
    parse_regex_literal(literal, &mut buf).unwrap();
    assert_eq!(
        CaptureStructure::decode(&buf).unwrap(),
        CaptureStructure::named("word")
    );
}

#[test]
fn grammar_error_is_located_in_literal() {
    let err = parse_regex_literal("/ab)/", &mut Vec::new()).unwrap_err();
    insta::assert_snapshot!(
        err.message,
        @"cannot parse regular expression: closing ')' does not balance any groups openings"
    );
    assert_eq!(err.location, Some(3));
    insta::assert_snapshot!(err.rendered, @r"
    error: closing ')' does not balance any groups openings
      |
    1 | /ab)/
      |    ^
    ");
}

#[test]
fn semantic_error_renders_related_ranges() {
    let err = parse_regex_literal("/(?<n>a)(?<n>b)/", &mut Vec::new()).unwrap_err();
    assert_eq!(err.location, Some(11));
    assert!(err.rendered.starts_with("error: group named 'n' already exists"));
    assert!(err.rendered.contains("1 | /(?<n>a)(?<n>b)/"));
    assert!(err.rendered.contains("first declared here"));
}

#[test]
fn semantic_error_fails_the_parse() {
    let mut buf = Vec::new();
    let err = parse_regex_literal("/x(?>a)/", &mut buf).unwrap_err();
    insta::assert_snapshot!(
        err.message,
        @"cannot parse regular expression: atomic group is not currently supported"
    );
    assert_eq!(err.location, Some(2));
    assert!(buf.is_empty());
}

#[test]
fn warnings_do_not_fail_the_parse() {
    assert!(parse_regex_literal(r"/\p{XO_NFC}/", &mut Vec::new()).is_ok());
}
