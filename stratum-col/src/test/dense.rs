use crate::Dense;
use test_log::test;

#[test]
fn test_search() {
    let d = Dense::from(vec![1_i32, 3, 3, 3, 8]);
    assert!(d.is_sorted());
    assert_eq!(d.search(&3), Ok(1));
    assert_eq!(d.search(&8), Ok(4));
    assert_eq!(d.search(&0), Err(0));
    assert_eq!(d.search(&4), Err(4));
    assert_eq!(d.search(&9), Err(5));
}

#[test]
fn test_search_in_reports_absolute_positions() {
    let d = Dense::from(vec![1_i32, 3, 3, 3, 8]);
    assert_eq!(d.search_in(2..5, &3), Ok(2));
    assert_eq!(d.search_in(2..4, &8), Err(4));
    assert_eq!(d.search_in(0..1, &3), Err(1));
    assert_eq!(d.search_in(3..3, &3), Err(3));
}

#[test]
fn test_clones_share() {
    let d: Dense<String> = ["b", "a"].iter().map(|s| s.to_string()).collect();
    let e = d.clone();
    assert!(d.shares_buffer(&e));
    assert!(!d.is_sorted());
    assert_eq!(e.at(1), "a");
    assert_eq!(d.get(2), None);
    assert!(Dense::<i8>::default().is_empty());
}
