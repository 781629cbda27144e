//! Sort dispatch.
//!
//! Two strategies exist, and exactly one applies to any given kind:
//!
//! - [`SliceSort`] — a general comparison sort over the kind's contiguous
//!   view, for kinds classified `RandomAccess = Present`.
//! - [`KindSort`] — the kind's own in-place sort, for the rest.
//!
//! The choice is a pure type selection through [`Bool::If`], made once per
//! kind by the blanket [`SortDispatch`] impl — never per call. A kind with
//! neither capability has no `SortStrategy` for its selected strategy type
//! and fails to compile the moment something tries to sort it.

use core::cmp::Ordering;
use std::collections::{LinkedList, VecDeque};

use crate::caps::bool::Bool;
use crate::caps::classify::Classify;
use crate::carrier::Carrier;

// =============================================================================
// Capability traits
// =============================================================================

/// Direct indexed access over the element storage.
pub trait DirectAccess: Carrier {
    /// Borrow the element at `index`, if any.
    fn at(&self, index: usize) -> Option<&Self::Elem>;

    /// The elements as one mutable contiguous run, rearranging storage if
    /// the kind keeps them split.
    fn contiguous(&mut self) -> &mut [Self::Elem];
}

/// A kind-supplied in-place sort.
pub trait NativeSort: Carrier {
    /// Sort in place, stable, with `cmp` deciding the order.
    fn sort_native<F: FnMut(&Self::Elem, &Self::Elem) -> Ordering>(&mut self, cmp: F);
}

// =============================================================================
// Strategies
// =============================================================================

/// How a strategy type sorts a carrier.
pub trait SortStrategy<C: Carrier> {
    fn sort<F: FnMut(&C::Elem, &C::Elem) -> Ordering>(seq: &mut C, cmp: F);
}

/// Comparison sort over the contiguous view.
pub struct SliceSort;

/// Delegation to the kind's own sort.
pub struct KindSort;

impl<C: DirectAccess> SortStrategy<C> for SliceSort {
    fn sort<F: FnMut(&C::Elem, &C::Elem) -> Ordering>(seq: &mut C, mut cmp: F) {
        seq.contiguous().sort_by(|a, b| cmp(a, b));
    }
}

impl<C: NativeSort> SortStrategy<C> for KindSort {
    fn sort<F: FnMut(&C::Elem, &C::Elem) -> Ordering>(seq: &mut C, cmp: F) {
        seq.sort_native(cmp);
    }
}

// =============================================================================
// Dispatch
// =============================================================================

/// The strategy selected for a kind from its capability flags.
pub trait SortDispatch: Carrier {
    type Strategy: SortStrategy<Self>;
}

impl<C> SortDispatch for C
where
    C: Carrier + Classify,
    <<C as Classify>::RandomAccess as Bool>::If<SliceSort, KindSort>: SortStrategy<C>,
{
    type Strategy = <<C as Classify>::RandomAccess as Bool>::If<SliceSort, KindSort>;
}

// =============================================================================
// Std kind capabilities
// =============================================================================

impl<T> DirectAccess for Vec<T> {
    fn at(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    fn contiguous(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> DirectAccess for VecDeque<T> {
    fn at(&self, index: usize) -> Option<&T> {
        self.get(index)
    }

    fn contiguous(&mut self) -> &mut [T] {
        self.make_contiguous()
    }
}

impl<T> NativeSort for LinkedList<T> {
    fn sort_native<F: FnMut(&T, &T) -> Ordering>(&mut self, mut cmp: F) {
        merge_sort(self, &mut cmp);
    }
}

/// Stable top-down merge sort by relinking, the counterpart of what a
/// linked list's member sort provides elsewhere.
fn merge_sort<T, F>(list: &mut LinkedList<T>, cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if list.len() < 2 {
        return;
    }
    let mut right = list.split_off(list.len() / 2);
    merge_sort(list, cmp);
    merge_sort(&mut right, cmp);

    let mut merged = LinkedList::new();
    loop {
        // Ties take from the left half: keeps the sort stable.
        let take_left = match (list.front(), right.front()) {
            (Some(a), Some(b)) => cmp(a, b) != Ordering::Greater,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        let popped = if take_left {
            list.pop_front()
        } else {
            right.pop_front()
        };
        if let Some(value) = popped {
            merged.push_back(value);
        }
    }
    *list = merged;
}
