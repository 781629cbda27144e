//! Cross-operation properties that must hold on every kind.

use std::collections::LinkedList;

use seqext::carrier::SinglyList;
use seqext::prelude::*;

// =============================================================================
// Length accounting
// =============================================================================

#[test]
fn test_concat_length_is_the_sum() {
    let a = seq![1, 2, 3];
    let b = vec![4, 5];
    assert_eq!(a.concat(&b).len(), a.len() + b.len());
}

#[test]
fn test_filter_plus_erase_if_partition_the_elements() {
    let v = seq![1, 2, 3, 4, 5, 6];
    let even = |n: &i32| n % 2 == 0;
    let kept = v.filter(even);
    let mut dropped = v.clone();
    dropped.erase_if(even);
    assert_eq!(kept.len() + dropped.len(), v.len());
    assert_eq!(kept.concat(dropped.inner()).count_if(|_| true), v.len());
}

#[test]
fn test_map_preserves_length() {
    let s = seq![SinglyList<i32>; 1, 2, 3, 4];
    assert_eq!(s.map(|n| n.to_string()).len(), s.len());
}

#[test]
fn test_zip_length_is_the_minimum() {
    let a = seq![1, 2, 3, 4];
    let b: LinkedList<char> = ['x', 'y', 'z'].into_iter().collect();
    assert_eq!(a.zip(&b).len(), 3);
}

// =============================================================================
// Composition
// =============================================================================

#[test]
fn test_map_composition() {
    // map(f) then map(g) equals map(g . f).
    let v = seq![1, 2, 3];
    let two_steps = v.map(|n| n + 1).map(|n| n * 10);
    let one_step = v.map(|n| (n + 1) * 10);
    assert_eq!(two_steps, one_step);
}

#[test]
fn test_filter_commutes_with_map_on_preserved_predicate() {
    let v = seq![1, 2, 3, 4];
    let a = v.filter(|n| n % 2 == 0).map(|n| n * 10);
    let b = v.map(|n| n * 10).into_filter(|n| n % 20 == 0);
    assert_eq!(a, b);
}

#[test]
fn test_unzip_inverts_zip() {
    let a = seq![1, 2, 3];
    let b = vec!["p", "q", "r"];
    let (a2, b2) = a.zip(&b).into_unzip();
    assert_eq!(a2, a);
    assert_eq!(b2.into_inner(), b);
}

// =============================================================================
// Fold / reduce agreement
// =============================================================================

#[test]
fn test_reduce_agrees_with_fold_on_nonempty() {
    let v = seq![3, 1, 4, 1, 5];
    assert_eq!(v.reduce(|acc, n| acc + n), Ok(v.fold(0, |acc, n| acc + n)));
}

#[test]
fn test_persistent_and_disposable_forms_agree() {
    let v = seq![5, 3, 8, 1];
    assert_eq!(v.filter(|n| *n > 2), v.clone().into_filter(|n| *n > 2));
    assert_eq!(v.take(2), v.clone().into_take(2));
    assert_eq!(
        v.take_while(|n| *n > 2),
        v.clone().into_take_while(|n| *n > 2)
    );
    assert_eq!(v.reduce(|a, b| a + b), v.clone().into_reduce(|a, b| a + b));
}

// =============================================================================
// Kind round trips
// =============================================================================

#[test]
fn test_conversion_round_trip_preserves_order() {
    let v = seq![1, 2, 3];
    let through_list: Extended<LinkedList<i32>> = Extended::new(v.to());
    let back: Vec<i32> = through_list.to();
    assert_eq!(v.into_inner(), back);
}
