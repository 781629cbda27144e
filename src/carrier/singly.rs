//! A singly linked carrier kind.
//!
//! `SinglyList` fills the slot the std collections leave open: a kind with
//! no O(1) size query. Its length is a walk from the head, so it exercises
//! the linear fallback of the size query, and it sorts through its own
//! merge sort rather than a contiguous view.
//!
//! Interior links are owned `Box`es threaded through `&mut Option<..>`
//! slots; no unsafe.

use core::cmp::Ordering;
use core::fmt;

use crate::caps::sort::NativeSort;
use crate::carrier::Carrier;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

/// Singly linked list: O(1) front insertion, linear everything else.
#[derive(macros::Rebind)]
pub struct SinglyList<T> {
    head: Link<T>,
}

impl<T> SinglyList<T> {
    /// An empty list.
    pub fn new() -> Self {
        SinglyList { head: None }
    }

    /// Insert `value` before the first element.
    pub fn push_front(&mut self, value: T) {
        self.head = Some(Box::new(Node {
            value,
            next: self.head.take(),
        }));
    }

    /// Remove and return the first element.
    pub fn pop_front(&mut self) -> Option<T> {
        self.pop_node().map(|node| node.value)
    }

    /// Borrow the first element.
    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    /// Detach everything from position `at` onward into a new list.
    /// Splitting past the end yields an empty list.
    pub fn split_off(&mut self, at: usize) -> SinglyList<T> {
        let mut cur = &mut self.head;
        for _ in 0..at {
            match cur {
                Some(node) => cur = &mut node.next,
                None => return SinglyList::new(),
            }
        }
        SinglyList { head: cur.take() }
    }

    /// Detach the head node, relinking the rest.
    fn pop_node(&mut self) -> Option<Box<Node<T>>> {
        self.head.take().map(|mut node| {
            self.head = node.next.take();
            node
        })
    }

    /// The empty slot after the last node.
    fn last_slot(&mut self) -> &mut Link<T> {
        let mut cur = &mut self.head;
        while let Some(node) = cur {
            cur = &mut node.next;
        }
        cur
    }
}

impl<T> Default for SinglyList<T> {
    fn default() -> Self {
        SinglyList::new()
    }
}

// Node drop is recursive; unlink iteratively so long lists cannot blow the
// stack.
impl<T> Drop for SinglyList<T> {
    fn drop(&mut self) {
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
    }
}

impl<T: Clone> Clone for SinglyList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for SinglyList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for SinglyList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyList<T> {}

impl<T> FromIterator<T> for SinglyList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(elems: I) -> Self {
        let mut list = SinglyList::new();
        let mut tail = &mut list.head;
        for value in elems {
            *tail = Some(Box::new(Node { value, next: None }));
            if let Some(node) = tail {
                tail = &mut node.next;
            }
        }
        list
    }
}

impl<T> Extend<T> for SinglyList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, elems: I) {
        let mut tail = self.last_slot();
        for value in elems {
            *tail = Some(Box::new(Node { value, next: None }));
            if let Some(node) = tail {
                tail = &mut node.next;
            }
        }
    }
}

// =============================================================================
// Iteration
// =============================================================================

/// Borrowing iterator over a [`SinglyList`].
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

/// Consuming iterator over a [`SinglyList`].
pub struct IntoIter<T>(SinglyList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.pop_front()
    }
}

impl<T> IntoIterator for SinglyList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a SinglyList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

// =============================================================================
// Carrier
// =============================================================================

impl<T> Carrier for SinglyList<T> {
    type Elem = T;
    type Iter<'a>
        = Iter<'a, T>
    where
        Self: 'a;
    type IntoElems = IntoIter<T>;

    fn collect<I: IntoIterator<Item = T>>(elems: I) -> Self {
        elems.into_iter().collect()
    }

    fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    fn into_elems(self) -> IntoIter<T> {
        self.into_iter()
    }

    fn push_back(&mut self, value: T) {
        *self.last_slot() = Some(Box::new(Node { value, next: None }));
    }

    fn append(&mut self, other: &mut Self) {
        *self.last_slot() = other.head.take();
    }

    fn retain<F: FnMut(&T) -> bool>(&mut self, mut keep: F) {
        let mut kept = SinglyList::new();
        let mut tail = &mut kept.head;
        while let Some(node) = self.pop_node() {
            if keep(&node.value) {
                *tail = Some(node);
                if let Some(n) = tail {
                    tail = &mut n.next;
                }
            }
        }
        self.head = kept.head.take();
    }

    fn truncate(&mut self, len: usize) {
        let mut cur = &mut self.head;
        for _ in 0..len {
            match cur {
                Some(node) => cur = &mut node.next,
                None => return,
            }
        }
        *cur = None;
    }

    // The linear fallback: no count field is kept.
    fn len(&self) -> usize {
        self.iter().count()
    }

    fn is_empty(&self) -> bool {
        self.head.is_none()
    }
}

// =============================================================================
// Native sort
// =============================================================================

impl<T> NativeSort for SinglyList<T> {
    fn sort_native<F: FnMut(&T, &T) -> Ordering>(&mut self, mut cmp: F) {
        let len = self.len();
        merge_sort(self, len, &mut cmp);
    }
}

/// Stable top-down merge sort over the links. `len` is threaded to avoid
/// re-walking each half.
fn merge_sort<T, F>(list: &mut SinglyList<T>, len: usize, cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if len < 2 {
        return;
    }
    let half = len / 2;
    let mut right = list.split_off(half);
    merge_sort(list, half, cmp);
    merge_sort(&mut right, len - half, cmp);
    merge(list, right, cmp);
}

fn merge<T, F>(left: &mut SinglyList<T>, mut right: SinglyList<T>, cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut merged = SinglyList::new();
    let mut tail = &mut merged.head;
    loop {
        // Ties take from the left half: keeps the sort stable.
        let take_left = match (left.front(), right.front()) {
            (Some(a), Some(b)) => cmp(a, b) != Ordering::Greater,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        let node = if take_left {
            left.pop_node()
        } else {
            right.pop_node()
        };
        if let Some(node) = node {
            *tail = Some(node);
            if let Some(n) = tail {
                tail = &mut n.next;
            }
        }
    }
    left.head = merged.head.take();
}
