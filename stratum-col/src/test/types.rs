use crate::{code_to_desc, desc_to_code, ColError, ElemKind, Order, Width};
use test_log::test;

#[test]
fn test_codes_round_trip() {
    for kind in ElemKind::ALL {
        let desc = kind.desc();
        assert_eq!(desc.kind, kind);
        let code = desc_to_code(desc);
        assert_eq!(code_to_desc(code).unwrap().kind, kind);
        assert_eq!(ElemKind::from_code(code).unwrap(), kind);
    }
}

#[test]
fn test_codes_are_distinct() {
    let mut codes: Vec<&str> = ElemKind::ALL.iter().map(|k| k.code()).collect();
    codes.sort();
    codes.dedup();
    assert_eq!(codes.len(), 11);
}

#[test]
fn test_unknown_code() {
    for code in ["", "int", "I32", "i128", "bool "] {
        let e = code_to_desc(code).unwrap_err();
        assert_eq!(
            e.downcast_ref::<ColError>(),
            Some(&ColError::UnknownTypeCode(code.to_string()))
        );
    }
}

#[test]
fn test_descriptors() {
    assert_eq!(ElemKind::String.desc().width, Width::Variable);
    assert_eq!(ElemKind::Long.desc().width, Width::Fixed(8));
    assert_eq!(ElemKind::Boolean.desc().order, Order::Boolean);
    assert!(ElemKind::Decimal.desc().is_numeric());
    assert!(!ElemKind::Date.desc().is_numeric());
    assert_eq!(ElemKind::DateTime.to_string(), "datetime");
}

#[test]
fn test_serde_uses_code() {
    let bytes = rmp_serde::to_vec(&ElemKind::Decimal).unwrap();
    assert_eq!(bytes, rmp_serde::to_vec("dec").unwrap());
    let kind: ElemKind = rmp_serde::from_slice(&bytes).unwrap();
    assert_eq!(kind, ElemKind::Decimal);

    let bad = rmp_serde::to_vec("u64").unwrap();
    assert!(rmp_serde::from_slice::<ElemKind>(&bad).is_err());
}
