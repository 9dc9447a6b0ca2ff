use super::{lcg_rand_step, random_sorted};
use crate::{intersect, ColError, Column, ElemKind, Nullable};
use test_log::test;

#[test]
fn test_window_excludes_backing_match() {
    let left = Nullable::from_options([None, Some(5_i32), Some(7)]);
    let right = Nullable::from_values(vec![5_i32, 6, 7, 9]).slice(1, 3);
    let res = intersect(&left, &right);
    assert_eq!(res.len(), 1);
    assert_eq!(res.pairs().collect::<Vec<_>>(), vec![(2, 1)]);
    assert_eq!(res.right, vec![1]);
    assert!(!res.keep.get(1));
    assert_eq!(*left.get(2), *right.get(1));
}

#[test]
fn test_nulls_never_match() {
    let left = Nullable::<i64>::from_options([None, None]);
    let right = Nullable::from_options([None, Some(1_i64)]);
    let res = intersect(&left, &right);
    assert!(res.is_empty());
    assert_eq!(res.keep.len(), 2);
    assert!(!res.keep.any());
}

#[test]
fn test_right_nulls_map_to_logical_rows() {
    let left = Nullable::from_values(vec![2_i64, 3, 8]);
    let right = Nullable::from_options([None, Some(2_i64), None, None, Some(3), Some(4), None, Some(8)]);
    let res = intersect(&left, &right);
    assert_eq!(res.pairs().collect::<Vec<_>>(), vec![(0, 1), (1, 4), (2, 7)]);

    let window = right.slice(2, 7);
    let res = intersect(&left, &window);
    assert_eq!(res.pairs().collect::<Vec<_>>(), vec![(1, 2)]);
    assert_eq!(*window.get(2), 3);
}

#[test]
fn test_sliced_left_is_window_relative() {
    let left = Nullable::from_options([Some(1_i64), Some(4), None, Some(6), Some(9)]).slice(1, 4);
    let right = Nullable::from_values(vec![4_i64, 5, 6]);
    let res = intersect(&left, &right);
    assert_eq!(res.keep.len(), 3);
    assert_eq!(res.pairs().collect::<Vec<_>>(), vec![(0, 0), (2, 2)]);
}

#[test]
fn test_duplicates_probe_once() {
    let left = Nullable::from_values(vec![3_i32, 3, 5]);
    let right = Nullable::from_values(vec![1_i32, 3, 3, 3, 5]);
    let res = intersect(&left, &right);
    // One candidate per left element, the first equal right row.
    assert_eq!(res.pairs().collect::<Vec<_>>(), vec![(0, 1), (1, 1), (2, 4)]);

    // A run straddling the window start still matches inside the window.
    let res = intersect(&left, &right.slice(2, 5));
    assert_eq!(res.pairs().collect::<Vec<_>>(), vec![(0, 0), (1, 0), (2, 2)]);
}

#[test]
fn test_soundness_and_completeness() {
    let mut state = 4321;
    for _ in 0..20 {
        let left = random_sorted(&mut state, 150);
        let right = random_sorted(&mut state, 200);
        let a = (lcg_rand_step(&mut state) as usize) % 100;
        let b = 100 + (lcg_rand_step(&mut state) as usize) % 101;
        let left = left.slice(a / 2, 150 - a / 3);
        let right = right.slice(a, b);
        let res = intersect(&left, &right);
        assert_eq!(res.keep.count(), res.len());
        for (l, r) in res.pairs() {
            assert_eq!(left.get(l), right.get(r));
        }
        let in_window: Vec<i64> = right.values().to_vec();
        for i in 0..left.len() {
            let expect = left
                .get_opt(i)
                .map_or(false, |v| in_window.binary_search(v).is_ok());
            assert_eq!(res.keep.get(i), expect, "left row {}", i);
        }
    }
}

#[test]
fn test_column_kind_mismatch() {
    let ints = Column::from(Nullable::from_values(vec![1_i32, 2]));
    let longs = Column::from(Nullable::from_values(vec![1_i64, 2]));
    let e = ints.intersect(&longs).unwrap_err();
    assert_eq!(
        e.downcast_ref::<ColError>(),
        Some(&ColError::KindMismatch {
            expected: ElemKind::Int,
            found: ElemKind::Long
        })
    );
    let res = ints.intersect(&ints.try_slice(1, 2).unwrap()).unwrap();
    assert_eq!(res.pairs().collect::<Vec<_>>(), vec![(1, 0)]);
}

#[test]
fn test_column_join_then_gather() {
    let left = Column::from(Nullable::from_options([
        Some("ant".to_string()),
        None,
        Some("bee".to_string()),
        Some("cat".to_string()),
    ]));
    let right = Column::from(Nullable::from_values(vec![
        "bee".to_string(),
        "cat".to_string(),
        "dog".to_string(),
    ]));
    let res = left.intersect(&right).unwrap();
    let kept = left.filter(&res.keep).unwrap();
    let matched = right.take(&res.right).unwrap();
    assert_eq!(kept, matched);
    assert_eq!(kept.try_get_string(1).unwrap(), "cat");
}
