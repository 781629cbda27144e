//! Tests for the rebinding resolver and its derive.
//!
//! Covers the structural rule on parameterized kinds, the explicit
//! `#[rebind(as = ...)]` override, and the priority of the override over
//! the structural rule.

use std::collections::LinkedList;

use seqext::carrier::SinglyList;
use seqext::prelude::*;

// =============================================================================
// Structural rule on the provided kinds
// =============================================================================

#[test]
fn test_map_rebinds_vec_structurally() {
    let v = seq![1, 2, 3];
    let halves: ExtVec<f64> = v.map(|n| f64::from(*n) / 2.0);
    assert_eq!(halves, seq![0.5, 1.0, 1.5]);
}

#[test]
fn test_map_rebinds_singly_list_structurally() {
    let s = seq![SinglyList<i32>; 1, 2, 3];
    let doubled: ExtSingly<i64> = s.map(|n| i64::from(*n) * 2);
    assert_eq!(doubled, seq![SinglyList<i64>; 2, 4, 6]);
}

#[test]
fn test_rebind_chains_through_repeated_maps() {
    let v = seq![1, 2];
    let out: ExtVec<usize> = v.map(|n| n.to_string()).map(|s| s.len());
    assert_eq!(out, seq![1usize, 1]);
}

// =============================================================================
// Derive: structural substitution on a custom kind
// =============================================================================

/// A vector that remembers nothing extra; the derive substitutes `T`.
#[derive(Debug, Clone, PartialEq, Rebind)]
struct Tagged<T> {
    elems: Vec<T>,
}

// Manual impl: the derived one would demand `T: Default`, which the
// carrier contract must not.
impl<T> Default for Tagged<T> {
    fn default() -> Self {
        Tagged { elems: Vec::new() }
    }
}

impl<T> Carrier for Tagged<T> {
    type Elem = T;
    type Iter<'a>
        = std::slice::Iter<'a, T>
    where
        Self: 'a;
    type IntoElems = std::vec::IntoIter<T>;

    fn collect<I: IntoIterator<Item = T>>(elems: I) -> Self {
        Tagged {
            elems: elems.into_iter().collect(),
        }
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.elems.iter()
    }

    fn into_elems(self) -> Self::IntoElems {
        self.elems.into_iter()
    }

    fn push_back(&mut self, value: T) {
        self.elems.push(value);
    }

    fn append(&mut self, other: &mut Self) {
        self.elems.append(&mut other.elems);
    }

    fn retain<F: FnMut(&T) -> bool>(&mut self, keep: F) {
        self.elems.retain(keep);
    }

    fn truncate(&mut self, len: usize) {
        self.elems.truncate(len);
    }

    fn len(&self) -> usize {
        self.elems.len()
    }
}

#[test]
fn test_derive_structural_on_custom_kind() {
    let t: Extended<Tagged<i32>> = [1, 2, 3].into_iter().collect();
    let mapped: Extended<Tagged<String>> = t.map(|n| n.to_string());
    assert_eq!(mapped.len(), 3);
}

// =============================================================================
// Derive: explicit override
// =============================================================================

/// Parameterized by its element type, but rebinding is overridden to land
/// in a linked list regardless. The override must win over the structural
/// rule.
#[derive(Debug, Clone, PartialEq, Rebind)]
#[rebind(as = LinkedList)]
struct Spilling<T> {
    elems: Vec<T>,
}

impl<T> Default for Spilling<T> {
    fn default() -> Self {
        Spilling { elems: Vec::new() }
    }
}

impl<T> Carrier for Spilling<T> {
    type Elem = T;
    type Iter<'a>
        = std::slice::Iter<'a, T>
    where
        Self: 'a;
    type IntoElems = std::vec::IntoIter<T>;

    fn collect<I: IntoIterator<Item = T>>(elems: I) -> Self {
        Spilling {
            elems: elems.into_iter().collect(),
        }
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.elems.iter()
    }

    fn into_elems(self) -> Self::IntoElems {
        self.elems.into_iter()
    }

    fn push_back(&mut self, value: T) {
        self.elems.push(value);
    }

    fn append(&mut self, other: &mut Self) {
        self.elems.append(&mut other.elems);
    }

    fn retain<F: FnMut(&T) -> bool>(&mut self, keep: F) {
        self.elems.retain(keep);
    }

    fn truncate(&mut self, len: usize) {
        self.elems.truncate(len);
    }

    fn len(&self) -> usize {
        self.elems.len()
    }
}

#[test]
fn test_override_beats_structural_rule() {
    let s: Extended<Spilling<i32>> = [1, 2, 3].into_iter().collect();
    // Without the override this would be Extended<Spilling<String>>.
    let mapped: ExtList<String> = s.map(|n| n.to_string());
    assert_eq!(
        mapped,
        seq![LinkedList<String>; "1".to_string(), "2".to_string(), "3".to_string()]
    );
}

#[test]
fn test_override_applies_to_zip_too() {
    let s: Extended<Spilling<i32>> = [1, 2].into_iter().collect();
    let b = vec!['x', 'y'];
    let zipped: ExtList<(i32, char)> = s.zip(&b);
    assert_eq!(zipped, seq![LinkedList<(i32, char)>; (1, 'x'), (2, 'y')]);
}

// =============================================================================
// Resolved kinds stay rebindable
// =============================================================================

#[test]
fn test_resolution_is_transitive() {
    // Spilling resolves to LinkedList; LinkedList must itself resolve, so
    // a second type-changing map keeps working.
    let s: Extended<Spilling<i32>> = [1, 2].into_iter().collect();
    let out: ExtList<usize> = s.map(|n| n.to_string()).map(|t| t.len());
    assert_eq!(out, seq![LinkedList<usize>; 1usize, 1]);
}
