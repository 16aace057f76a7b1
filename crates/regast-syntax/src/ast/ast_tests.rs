use rowan::TextRange;

use super::visitor::{Visitor, walk_group};
use super::*;
use crate::test_utils::parse_ok;

fn range(start: u32, end: u32) -> TextRange {
    TextRange::new(start.into(), end.into())
}

#[test]
fn node_ranges_cover_their_text() {
    let ast = parse_ok("ab(c)*");
    assert_eq!(ast.root.range(), range(0, 6));
    let Node::Concatenation(concat) = &ast.root else {
        panic!("expected concatenation");
    };
    let ranges: Vec<_> = concat.children.iter().map(Node::range).collect();
    assert_eq!(ranges, vec![range(0, 1), range(1, 2), range(2, 6)]);
}

#[test]
fn children_include_condition_group() {
    let ast = parse_ok("(?(?=a)b|c)");
    let children = ast.root.children();
    assert_eq!(children.len(), 3);
    assert_eq!(children[0].as_atom().and_then(Atom::literal_char), Some('a'));
    assert_eq!(children[2].as_atom().and_then(Atom::literal_char), Some('c'));
}

#[test]
fn into_pair() {
    let Node::Alternation(alt) = parse_ok("a|b").root else {
        panic!("expected alternation");
    };
    let (lhs, pipe, rhs) = alt.into_pair().unwrap();
    assert_eq!(lhs.range(), range(0, 1));
    assert_eq!(pipe, range(1, 2));
    assert_eq!(rhs.range(), range(2, 3));

    let Node::Alternation(alt) = parse_ok("a|b|c").root else {
        panic!("expected alternation");
    };
    assert_eq!(alt.into_pair().unwrap_err(), 3);
}

#[test]
fn amount_minimum() {
    let n = Number::new(3, range(0, 1));
    assert_eq!(Amount::ZeroOrMore.minimum(), Some(0));
    assert_eq!(Amount::OneOrMore.minimum(), Some(1));
    assert_eq!(Amount::Range(n, n).minimum(), Some(3));
    assert!(Amount::UpToN(n).is_optional());
    assert!(!Amount::Exactly(n).is_optional());
}

#[test]
fn capturing_group_kinds() {
    let name = Located::new("n".to_string(), range(0, 1));
    assert!(GroupKind::Capture.is_capturing());
    assert!(GroupKind::NamedCapture(name.clone()).is_capturing());
    assert!(!GroupKind::NonCapture.is_capturing());
    assert!(!GroupKind::Lookahead.is_capturing());
    assert_eq!(GroupKind::NamedCapture(name.clone()).name(), Some(&name));
}

#[test]
fn newline_lengths() {
    assert_eq!(NewlineMode::AnyCarriageReturnOrLinefeed.newline_len("\r\nx"), Some(2));
    assert_eq!(NewlineMode::AnyCarriageReturnOrLinefeed.newline_len("\u{85}"), None);
    assert_eq!(NewlineMode::AnyUnicode.newline_len("\u{2028}"), Some(3));
    assert_eq!(NewlineMode::LinefeedOnly.newline_len("\r\n"), None);
    assert_eq!(NewlineMode::CarriageAndLinefeedOnly.newline_len("\r"), None);
    assert_eq!(NewlineMode::NulCharacter.newline_len("\0"), Some(1));
}

#[test]
fn quantifiable_atoms() {
    let ast = parse_ok(r"^\b\d(*ACCEPT)(*FAIL)");
    let Node::Concatenation(concat) = &ast.root else {
        panic!("expected concatenation");
    };
    let quantifiable: Vec<_> = concat.children.iter().map(Node::is_quantifiable).collect();
    assert_eq!(quantifiable, vec![false, false, true, true, false]);
}

#[test]
fn visitor_reaches_nested_groups() {
    #[derive(Default)]
    struct Groups(Vec<bool>);

    impl Visitor for Groups {
        fn visit_group(&mut self, group: &Group) {
            self.0.push(group.kind.value.is_capturing());
            walk_group(self, group);
        }
    }

    let ast = parse_ok("(a(?:b[c(]))|(?(?=d)e)");
    let mut groups = Groups::default();
    groups.visit_node(&ast.root);
    assert_eq!(groups.0, vec![true, false, false]);
}
