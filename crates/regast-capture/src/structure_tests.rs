use crate::structure::CaptureStructure;

#[test]
fn empty_is_empty_tuple() {
    assert!(CaptureStructure::empty().is_empty());
    assert!(!CaptureStructure::atom().is_empty());
    assert!(!CaptureStructure::Tuple(vec![CaptureStructure::empty()]).is_empty());
}

#[test]
fn display() {
    let s = CaptureStructure::Tuple(vec![
        CaptureStructure::optional(CaptureStructure::atom()),
        CaptureStructure::optional(CaptureStructure::named("year")),
    ]);
    insta::assert_snapshot!(s.to_string(), @"Tuple(Optional(Atom), Optional(Atom(year)))");
    assert_eq!(CaptureStructure::empty().to_string(), "Tuple()");
}

#[test]
fn display_typed_atom() {
    let typed = CaptureStructure::Atom {
        name: None,
        type_name: Some("Int".to_string()),
    };
    assert_eq!(typed.to_string(), "Atom(_: Int)");
    assert!(typed.has_typed_atoms());
    assert!(!CaptureStructure::named("x").has_typed_atoms());
}

#[test]
fn serde_json_shape() {
    let s = CaptureStructure::optional(CaptureStructure::named("n"));
    let json = serde_json::to_string(&s).unwrap();
    assert_eq!(json, r#"{"Optional":{"Atom":{"name":"n","type_name":null}}}"#);
    let back: CaptureStructure = serde_json::from_str(&json).unwrap();
    assert_eq!(back, s);
}
