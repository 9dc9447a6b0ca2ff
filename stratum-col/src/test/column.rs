use crate::{ColError, Column, Date, DateTime, Decimal, ElemKind, Nullable};
use ordered_float::OrderedFloat;
use test_log::test;

#[test]
fn test_empty_of_every_kind() {
    for kind in ElemKind::ALL {
        let col = Column::empty(kind);
        assert_eq!(col.kind(), kind);
        assert_eq!(col.desc().code, kind.code());
        assert!(col.is_empty());
    }
}

#[test]
fn test_from_nullable_picks_variant() {
    let col = Column::from(Nullable::from_options([Some(Date(3)), None]));
    assert_eq!(col.kind(), ElemKind::Date);
    assert_eq!(col.null_count(), 1);
    assert!(col.try_is_null(1).unwrap());
    assert!(col.downcast::<Date>().is_some());
    assert!(col.downcast::<i32>().is_none());
    let col = Column::from(Nullable::from_values(vec![DateTime(9)]));
    assert_eq!(col.kind(), ElemKind::DateTime);
}

#[test]
fn test_typed_getters() {
    let col = Column::from(Nullable::from_options([Some(OrderedFloat(2.5_f64)), None]));
    assert_eq!(col.try_get_double(0).unwrap(), 2.5);
    let e = col.try_get_double(1).unwrap_err();
    assert_eq!(e.downcast_ref::<ColError>(), Some(&ColError::NullValue { index: 1 }));
    let e = col.try_get_int(0).unwrap_err();
    assert_eq!(
        e.downcast_ref::<ColError>(),
        Some(&ColError::KindMismatch {
            expected: ElemKind::Int,
            found: ElemKind::Double
        })
    );

    let col = Column::from(Nullable::from_values(vec![true, false]));
    assert!(!col.try_get_boolean(1).unwrap());
    let col = Column::from(Nullable::from_values(vec![-3_i8]));
    assert_eq!(col.try_get_byte(0).unwrap(), -3);
    let col = Column::from(Nullable::from_values(vec![Decimal::new(5, 1).unwrap()]));
    assert_eq!(col.try_get_decimal(0).unwrap().to_string(), "0.5");
}

#[test]
fn test_slice_keeps_kind() {
    let col = Column::from(Nullable::from_values(vec![1_i16, 2, 3]));
    let s = col.try_slice(1, 3).unwrap();
    assert_eq!(s.kind(), ElemKind::Short);
    assert_eq!(s.try_get_short(0).unwrap(), 2);
    assert!(col.try_slice(2, 4).is_err());
}

#[test]
fn test_try_mean() {
    let col = Column::from(Nullable::from_options([Some(1_i64), None, Some(4)]));
    assert_eq!(col.try_mean().unwrap(), 2.5);
    let col = Column::from(Nullable::from_values(vec!["x".to_string()]));
    let e = col.try_mean().unwrap_err();
    assert_eq!(
        e.downcast_ref::<ColError>(),
        Some(&ColError::NotNumeric(ElemKind::String))
    );
    assert!(Column::empty(ElemKind::Float).try_mean().unwrap().is_nan());
}
