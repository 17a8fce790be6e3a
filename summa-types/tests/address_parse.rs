use summa_types::{SummaError, SummaryAddress};

#[test]
fn parses_field_and_object_vectors() {
    let f: SummaryAddress = "FOPT".parse().unwrap();
    assert_eq!(f, SummaryAddress::field("FOPT").unwrap());
    assert_eq!(f.object(), None);

    let w: SummaryAddress = " WOPR:OP_1 ".parse().unwrap();
    assert_eq!(w.vector(), "WOPR");
    assert_eq!(w.object(), Some("OP_1"));
}

#[test]
fn display_matches_parse_input() {
    for s in ["FOPT", "WOPR:OP_1", "RPR:3", "BPR:1:2:3"] {
        let a: SummaryAddress = s.parse().unwrap();
        assert_eq!(a.to_string(), s);
    }
}

#[test]
fn rejects_empty_parts() {
    for s in ["", ":OP_1", "WOPR:"] {
        let res = s.parse::<SummaryAddress>();
        assert!(matches!(res, Err(SummaError::InvalidArg(_))), "input {s:?}");
    }
}

#[test]
fn constructors_reject_names_that_would_not_parse_back() {
    let bad = [
        SummaryAddress::field(""),
        SummaryAddress::field("A:B"),
        SummaryAddress::field(" FOPT"),
        SummaryAddress::with_object("A:B", "x"),
        SummaryAddress::with_object("WOPR", ""),
        SummaryAddress::with_object("", "OP_1"),
        SummaryAddress::with_object("WOPR", "OP_1 "),
    ];
    for res in bad {
        assert!(matches!(res, Err(SummaError::InvalidArg(_))), "got {res:?}");
    }

    let ok = SummaryAddress::with_object("BPR", "1:2:3").unwrap();
    assert_eq!(ok.to_string().parse::<SummaryAddress>().unwrap(), ok);
}

#[test]
fn serde_uses_display_form_and_validates() {
    let a = SummaryAddress::with_object("WOPR", "OP_1").unwrap();
    let json = serde_json::to_string(&a).unwrap();
    assert_eq!(json, "\"WOPR:OP_1\"");
    let back: SummaryAddress = serde_json::from_str(&json).unwrap();
    assert_eq!(back, a);

    assert!(serde_json::from_str::<SummaryAddress>("\"WOPR:\"").is_err());
}

#[test]
fn ordering_is_vector_then_object() {
    let mut v = vec![
        SummaryAddress::with_object("WOPR", "OP_2").unwrap(),
        SummaryAddress::field("FOPT").unwrap(),
        SummaryAddress::with_object("WOPR", "OP_1").unwrap(),
    ];
    v.sort();
    let names: Vec<String> = v.iter().map(ToString::to_string).collect();
    assert_eq!(names, ["FOPT", "WOPR:OP_1", "WOPR:OP_2"]);
}
