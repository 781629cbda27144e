//! The `Carrier` trait and its impls for the std sequence kinds.
//!
//! A carrier is any ordered collection the extension layer can drive.
//! The trait is deliberately minimal: it is exactly the set of primitives
//! the operations in [`crate::Extended`] consume, nothing more. Anything
//! beyond this set (equality, cloning, ordering of elements) is asked for
//! at the call sites that need it.

use std::collections::{LinkedList, VecDeque};
use std::mem;

/// An ordered collection the extension layer can drive.
///
/// Required primitives:
/// - default construction ([`Default`]) and range construction
///   ([`Carrier::collect`]);
/// - forward traversal, borrowed ([`Carrier::iter`]) and owned
///   ([`Carrier::into_elems`]);
/// - end insertion ([`Carrier::push_back`]) and move-append
///   ([`Carrier::append`]);
/// - order-preserving predicate erase ([`Carrier::retain`]) and tail erase
///   ([`Carrier::truncate`]);
/// - a size query ([`Carrier::len`]) — O(1) where the kind has one, a
///   linear walk otherwise (see [`crate::caps::Classify`] for which).
pub trait Carrier: Default {
    /// The element type.
    type Elem;

    /// Borrowing forward iterator.
    type Iter<'a>: Iterator<Item = &'a Self::Elem>
    where
        Self: 'a;

    /// Consuming forward iterator.
    type IntoElems: Iterator<Item = Self::Elem>;

    /// Build a carrier from a range of elements, in order.
    fn collect<I: IntoIterator<Item = Self::Elem>>(elems: I) -> Self;

    /// Traverse the elements front to back.
    fn iter(&self) -> Self::Iter<'_>;

    /// Consume the carrier, yielding its elements front to back.
    fn into_elems(self) -> Self::IntoElems;

    /// Insert `value` after the last element.
    fn push_back(&mut self, value: Self::Elem);

    /// Move every element of `other` to the end of `self`, in order,
    /// leaving `other` empty.
    fn append(&mut self, other: &mut Self);

    /// Keep only the elements satisfying `keep`, preserving the relative
    /// order of survivors.
    fn retain<F: FnMut(&Self::Elem) -> bool>(&mut self, keep: F);

    /// Drop every element past the first `len`. No effect when `len`
    /// exceeds the current length.
    fn truncate(&mut self, len: usize);

    /// Number of elements.
    fn len(&self) -> usize;

    /// Whether the carrier holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// =============================================================================
// Std kinds
// =============================================================================

impl<T> Carrier for Vec<T> {
    type Elem = T;
    type Iter<'a>
        = std::slice::Iter<'a, T>
    where
        Self: 'a;
    type IntoElems = std::vec::IntoIter<T>;

    fn collect<I: IntoIterator<Item = T>>(elems: I) -> Self {
        elems.into_iter().collect()
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.as_slice().iter()
    }

    fn into_elems(self) -> Self::IntoElems {
        self.into_iter()
    }

    fn push_back(&mut self, value: T) {
        self.push(value);
    }

    fn append(&mut self, other: &mut Self) {
        Vec::append(self, other);
    }

    fn retain<F: FnMut(&T) -> bool>(&mut self, keep: F) {
        Vec::retain(self, keep);
    }

    fn truncate(&mut self, len: usize) {
        Vec::truncate(self, len);
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<T> Carrier for VecDeque<T> {
    type Elem = T;
    type Iter<'a>
        = std::collections::vec_deque::Iter<'a, T>
    where
        Self: 'a;
    type IntoElems = std::collections::vec_deque::IntoIter<T>;

    fn collect<I: IntoIterator<Item = T>>(elems: I) -> Self {
        elems.into_iter().collect()
    }

    fn iter(&self) -> Self::Iter<'_> {
        VecDeque::iter(self)
    }

    fn into_elems(self) -> Self::IntoElems {
        self.into_iter()
    }

    fn push_back(&mut self, value: T) {
        VecDeque::push_back(self, value);
    }

    fn append(&mut self, other: &mut Self) {
        VecDeque::append(self, other);
    }

    fn retain<F: FnMut(&T) -> bool>(&mut self, keep: F) {
        VecDeque::retain(self, keep);
    }

    fn truncate(&mut self, len: usize) {
        VecDeque::truncate(self, len);
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}

impl<T> Carrier for LinkedList<T> {
    type Elem = T;
    type Iter<'a>
        = std::collections::linked_list::Iter<'a, T>
    where
        Self: 'a;
    type IntoElems = std::collections::linked_list::IntoIter<T>;

    fn collect<I: IntoIterator<Item = T>>(elems: I) -> Self {
        elems.into_iter().collect()
    }

    fn iter(&self) -> Self::Iter<'_> {
        LinkedList::iter(self)
    }

    fn into_elems(self) -> Self::IntoElems {
        self.into_iter()
    }

    fn push_back(&mut self, value: T) {
        LinkedList::push_back(self, value);
    }

    fn append(&mut self, other: &mut Self) {
        LinkedList::append(self, other);
    }

    // LinkedList::retain is not stable; relink by draining.
    fn retain<F: FnMut(&T) -> bool>(&mut self, mut keep: F) {
        let drained = mem::take(self);
        for value in drained {
            if keep(&value) {
                self.push_back(value);
            }
        }
    }

    fn truncate(&mut self, len: usize) {
        if len < LinkedList::len(self) {
            drop(self.split_off(len));
        }
    }

    fn len(&self) -> usize {
        LinkedList::len(self)
    }
}
