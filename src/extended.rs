//! # Layer 3: The extended collection wrapper
//!
//! [`Extended<C>`] owns one carrier value and layers the functional
//! operation set on top of it. It never changes what the carrier's own
//! primitives mean — `Deref` hands the inner value back untouched.
//!
//! Every operation comes in up to two forms:
//!
//! - **persistent** (`&self`): builds a fresh collection, the receiver is
//!   unchanged;
//! - **disposable** (`self`, named `into_*`): consumes the receiver and
//!   reuses its storage where possible. Opting in is explicit at the call
//!   site; there is no silent selection.
//!
//! Type-changing operations (`map`, `zip`, `unzip`, `zip_n`) resolve their
//! output kind through [`Rebind`]; `sort` picks its strategy through the
//! capability classifier. Everything is eager and single-threaded; user
//! closures that panic unwind through unmodified.

use core::cmp::Ordering;
use core::fmt;
use core::mem;
use core::ops::{Deref, DerefMut};

use crate::caps::sort::{DirectAccess, NativeSort, SortDispatch, SortStrategy};
use crate::caps::Classify;
use crate::carrier::Carrier;
use crate::error::EmptyReduce;
use crate::rebind::{Rebind, RebindOf};

/// A carrier value with the extended operation set.
///
/// Plain value semantics: cloning duplicates the owned storage, moving
/// transfers it, nothing is shared between instances.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Extended<C>(C);

impl<C> Extended<C> {
    /// Wrap a carrier value.
    pub fn new(inner: C) -> Self {
        Extended(inner)
    }

    /// Unwrap, returning the carrier value.
    pub fn into_inner(self) -> C {
        self.0
    }

    /// Borrow the carrier value.
    pub fn inner(&self) -> &C {
        &self.0
    }
}

// =============================================================================
// Queries
// =============================================================================

impl<C: Carrier> Extended<C> {
    /// Number of elements. O(1) when the kind is classified `FastLen`,
    /// a linear walk otherwise.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the collection holds no elements.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Traverse the elements front to back.
    pub fn iter(&self) -> C::Iter<'_> {
        self.0.iter()
    }

    /// True iff some element equals `value`. Linear equality scan.
    pub fn contains(&self, value: &C::Elem) -> bool
    where
        C::Elem: PartialEq,
    {
        self.0.iter().any(|elem| elem == value)
    }

    /// Number of elements equal to `value`. Linear scan.
    pub fn count(&self, value: &C::Elem) -> usize
    where
        C::Elem: PartialEq,
    {
        self.0.iter().filter(|elem| *elem == value).count()
    }

    /// Number of elements satisfying `p`. Linear scan.
    pub fn count_if<P: FnMut(&C::Elem) -> bool>(&self, mut p: P) -> usize {
        self.0.iter().filter(|elem| p(*elem)).count()
    }
}

// =============================================================================
// Concatenation / extension
// =============================================================================

impl<C: Carrier> Extended<C> {
    /// A copy of this collection with `other`'s elements appended, same
    /// kind as self.
    pub fn concat<D>(&self, other: &D) -> Self
    where
        C: Clone,
        C::Elem: Clone,
        D: Carrier<Elem = C::Elem>,
    {
        let mut out = self.clone();
        out.extend_from(other);
        out
    }

    /// Disposable [`concat`](Self::concat): appends into the receiver's
    /// own storage.
    pub fn into_concat<D>(mut self, other: &D) -> Self
    where
        C::Elem: Clone,
        D: Carrier<Elem = C::Elem>,
    {
        self.extend_from(other);
        self
    }

    /// Append copies of `other`'s elements at the end, in place.
    pub fn extend_from<D>(&mut self, other: &D) -> &mut Self
    where
        C::Elem: Clone,
        D: Carrier<Elem = C::Elem>,
    {
        for elem in other.iter() {
            self.0.push_back(elem.clone());
        }
        self
    }

    /// Move every element of `other` to the end, in place, leaving
    /// `other` empty.
    pub fn append(&mut self, other: &mut C) -> &mut Self {
        self.0.append(other);
        self
    }
}

// =============================================================================
// Erasure / filtering
// =============================================================================

impl<C: Carrier> Extended<C> {
    /// Remove every element equal to `value`, in place, preserving the
    /// relative order of survivors.
    pub fn erase_all(&mut self, value: &C::Elem) -> &mut Self
    where
        C::Elem: PartialEq,
    {
        self.0.retain(|elem| elem != value);
        self
    }

    /// Remove every element satisfying `p`, in place, preserving the
    /// relative order of survivors.
    ///
    /// The predicate's sense is the reverse of [`filter`](Self::filter),
    /// matching the conventional definitions of the two.
    pub fn erase_if<P: FnMut(&C::Elem) -> bool>(&mut self, mut p: P) -> &mut Self {
        self.0.retain(|elem| !p(elem));
        self
    }

    /// A new collection, same kind, holding the elements satisfying `p`
    /// in their original order.
    pub fn filter<P: FnMut(&C::Elem) -> bool>(&self, mut p: P) -> Self
    where
        C::Elem: Clone,
    {
        let mut out = C::default();
        for elem in self.0.iter() {
            if p(elem) {
                out.push_back(elem.clone());
            }
        }
        Extended(out)
    }

    /// Disposable [`filter`](Self::filter): retains matching elements in
    /// the receiver's own storage.
    pub fn into_filter<P: FnMut(&C::Elem) -> bool>(mut self, mut p: P) -> Self {
        self.0.retain(|elem| p(elem));
        self
    }
}

// =============================================================================
// Mapping / transformation
// =============================================================================

impl<C: Carrier> Extended<C> {
    /// Apply `f` to every element in order, collecting into the kind
    /// resolved for `f`'s return type.
    pub fn map<U, F>(&self, mut f: F) -> Extended<RebindOf<C, U>>
    where
        C: Rebind,
        F: FnMut(&C::Elem) -> U,
    {
        let mut out = RebindOf::<C, U>::default();
        for elem in self.0.iter() {
            out.push_back(f(elem));
        }
        Extended(out)
    }

    /// Disposable, same-type [`map`](Self::map): transforms in place
    /// instead of allocating.
    pub fn into_map<F: FnMut(C::Elem) -> C::Elem>(mut self, f: F) -> Self {
        self.transform(f);
        self
    }

    /// Replace every element with `f(element)`, in place.
    pub fn transform<F: FnMut(C::Elem) -> C::Elem>(&mut self, f: F) -> &mut Self {
        let taken = mem::take(&mut self.0);
        self.0 = C::collect(taken.into_elems().map(f));
        self
    }
}

// =============================================================================
// Folding
// =============================================================================

impl<C: Carrier> Extended<C> {
    /// Seeded left fold over the elements in order.
    pub fn fold<B, F: FnMut(B, &C::Elem) -> B>(&self, init: B, mut f: F) -> B {
        let mut acc = init;
        for elem in self.0.iter() {
            acc = f(acc, elem);
        }
        acc
    }

    /// Disposable [`fold`](Self::fold): the elements are moved into `f`.
    pub fn into_fold<B, F: FnMut(B, C::Elem) -> B>(self, init: B, mut f: F) -> B {
        let mut acc = init;
        for elem in self.0.into_elems() {
            acc = f(acc, elem);
        }
        acc
    }

    /// Seedless left fold: the first element seeds the accumulator and
    /// folding starts at the second.
    ///
    /// # Errors
    ///
    /// [`EmptyReduce`] when the collection is empty — there is nothing to
    /// seed with, and no default is invented.
    pub fn reduce<F>(&self, mut f: F) -> Result<C::Elem, EmptyReduce>
    where
        C::Elem: Clone,
        F: FnMut(C::Elem, &C::Elem) -> C::Elem,
    {
        let mut elems = self.0.iter();
        let Some(first) = elems.next() else {
            return Err(EmptyReduce);
        };
        let mut acc = first.clone();
        for elem in elems {
            acc = f(acc, elem);
        }
        Ok(acc)
    }

    /// Disposable [`reduce`](Self::reduce): the elements are moved into
    /// `f`, no cloning.
    ///
    /// # Errors
    ///
    /// [`EmptyReduce`] when the collection is empty.
    pub fn into_reduce<F>(self, mut f: F) -> Result<C::Elem, EmptyReduce>
    where
        F: FnMut(C::Elem, C::Elem) -> C::Elem,
    {
        let mut elems = self.0.into_elems();
        let Some(mut acc) = elems.next() else {
            return Err(EmptyReduce);
        };
        for elem in elems {
            acc = f(acc, elem);
        }
        Ok(acc)
    }
}

// =============================================================================
// Sorting
// =============================================================================

impl<C: Carrier> Extended<C> {
    /// Sort in place by the element type's order.
    ///
    /// The strategy is fixed per kind by the capability classifier:
    /// random-access kinds get a comparison sort over their contiguous
    /// view, the rest delegate to their own native sort.
    pub fn sort(&mut self) -> &mut Self
    where
        C: SortDispatch,
        C::Elem: Ord,
    {
        self.sort_by(Ord::cmp)
    }

    /// Sort in place with `cmp` deciding the order. Same dispatch as
    /// [`sort`](Self::sort).
    pub fn sort_by<F>(&mut self, cmp: F) -> &mut Self
    where
        C: SortDispatch,
        F: FnMut(&C::Elem, &C::Elem) -> Ordering,
    {
        <<C as SortDispatch>::Strategy as SortStrategy<C>>::sort(&mut self.0, cmp);
        self
    }
}

// =============================================================================
// Prefixes
// =============================================================================

impl<C: Carrier> Extended<C> {
    /// A new collection holding the first `min(n, len)` elements.
    ///
    /// `n` past the end is clamped to the length — by policy, not
    /// accident; asking for more than there is yields everything.
    pub fn take(&self, n: usize) -> Self
    where
        C::Elem: Clone,
    {
        Extended(C::collect(self.0.iter().take(n).cloned()))
    }

    /// Disposable [`take`](Self::take): erases the tail in place. Same
    /// clamping policy.
    pub fn into_take(mut self, n: usize) -> Self {
        self.0.truncate(n);
        self
    }

    /// A new collection holding the longest prefix where `p` holds for
    /// every element; stops at the first failure.
    pub fn take_while<P: FnMut(&C::Elem) -> bool>(&self, mut p: P) -> Self
    where
        C::Elem: Clone,
    {
        let mut out = C::default();
        for elem in self.0.iter() {
            if !p(elem) {
                break;
            }
            out.push_back(elem.clone());
        }
        Extended(out)
    }

    /// Disposable [`take_while`](Self::take_while): erases from the first
    /// failing element onward, in place.
    pub fn into_take_while<P: FnMut(&C::Elem) -> bool>(mut self, mut p: P) -> Self {
        let prefix = self.0.iter().take_while(|elem| p(*elem)).count();
        self.0.truncate(prefix);
        self
    }
}

// =============================================================================
// Conversion
// =============================================================================

impl<C: Carrier> Extended<C> {
    /// Full linear copy into an explicitly named, unrelated kind.
    pub fn to<D>(&self) -> D
    where
        C::Elem: Clone,
        D: Carrier<Elem = C::Elem>,
    {
        D::collect(self.0.iter().cloned())
    }

    /// Disposable [`to`](Self::to): moves the elements across.
    pub fn into_to<D>(self) -> D
    where
        D: Carrier<Elem = C::Elem>,
    {
        D::collect(self.0.into_elems())
    }
}

// =============================================================================
// Flattening (element type is itself a carrier)
// =============================================================================

impl<C> Extended<C>
where
    C: Carrier,
    C::Elem: Carrier,
{
    /// Concatenate the inner collections in encounter order, removing one
    /// nesting level. The result has the inner kind.
    pub fn flatten(&self) -> Extended<C::Elem>
    where
        <C::Elem as Carrier>::Elem: Clone,
    {
        self.flatten_to()
    }

    /// [`flatten`](Self::flatten) into an explicitly named kind.
    pub fn flatten_to<D>(&self) -> Extended<D>
    where
        D: Carrier<Elem = <C::Elem as Carrier>::Elem>,
        <C::Elem as Carrier>::Elem: Clone,
    {
        let mut out = D::default();
        for inner in self.0.iter() {
            for elem in inner.iter() {
                out.push_back(elem.clone());
            }
        }
        Extended(out)
    }

    /// Disposable [`flatten`](Self::flatten): the inner collections are
    /// consumed and their elements moved, not copied.
    pub fn into_flatten(self) -> Extended<C::Elem> {
        let mut out = C::Elem::default();
        for mut inner in self.0.into_elems() {
            out.append(&mut inner);
        }
        Extended(out)
    }
}

// =============================================================================
// Zipping / unzipping
// =============================================================================

impl<C: Carrier> Extended<C> {
    /// Element-wise pairing with `other`, truncated to the shorter of the
    /// two. The result kind holds pairs.
    pub fn zip<D>(&self, other: &D) -> Extended<RebindOf<C, (C::Elem, D::Elem)>>
    where
        C: Rebind,
        C::Elem: Clone,
        D: Carrier,
        D::Elem: Clone,
    {
        let mut out = RebindOf::<C, (C::Elem, D::Elem)>::default();
        let mut left = self.0.iter();
        let mut right = other.iter();
        while let (Some(a), Some(b)) = (left.next(), right.next()) {
            out.push_back((a.clone(), b.clone()));
        }
        Extended(out)
    }
}

impl<C, A, B> Extended<C>
where
    C: Carrier<Elem = (A, B)> + Rebind,
{
    /// Split a collection of pairs into a pair of collections: first
    /// components in order, then second components in order.
    pub fn unzip(&self) -> (Extended<RebindOf<C, A>>, Extended<RebindOf<C, B>>)
    where
        A: Clone,
        B: Clone,
    {
        let mut firsts = RebindOf::<C, A>::default();
        let mut seconds = RebindOf::<C, B>::default();
        for (a, b) in self.0.iter() {
            firsts.push_back(a.clone());
            seconds.push_back(b.clone());
        }
        (Extended(firsts), Extended(seconds))
    }

    /// Disposable [`unzip`](Self::unzip): the pairs are consumed, no
    /// cloning.
    pub fn into_unzip(self) -> (Extended<RebindOf<C, A>>, Extended<RebindOf<C, B>>) {
        let mut firsts = RebindOf::<C, A>::default();
        let mut seconds = RebindOf::<C, B>::default();
        for (a, b) in self.0.into_elems() {
            firsts.push_back(a);
            seconds.push_back(b);
        }
        (Extended(firsts), Extended(seconds))
    }
}

// =============================================================================
// Std trait surface
// =============================================================================

impl<C: fmt::Debug> fmt::Debug for Extended<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<C> Deref for Extended<C> {
    type Target = C;

    fn deref(&self) -> &C {
        &self.0
    }
}

impl<C> DerefMut for Extended<C> {
    fn deref_mut(&mut self) -> &mut C {
        &mut self.0
    }
}

impl<C> From<C> for Extended<C> {
    fn from(inner: C) -> Self {
        Extended(inner)
    }
}

impl<C: Carrier> FromIterator<C::Elem> for Extended<C> {
    fn from_iter<I: IntoIterator<Item = C::Elem>>(elems: I) -> Self {
        Extended(C::collect(elems))
    }
}

impl<C: Carrier> Extend<C::Elem> for Extended<C> {
    fn extend<I: IntoIterator<Item = C::Elem>>(&mut self, elems: I) {
        for elem in elems {
            self.0.push_back(elem);
        }
    }
}

impl<C: Carrier> IntoIterator for Extended<C> {
    type Item = C::Elem;
    type IntoIter = C::IntoElems;

    fn into_iter(self) -> C::IntoElems {
        self.0.into_elems()
    }
}

impl<'a, C: Carrier> IntoIterator for &'a Extended<C> {
    type Item = &'a C::Elem;
    type IntoIter = C::Iter<'a>;

    fn into_iter(self) -> C::Iter<'a> {
        self.0.iter()
    }
}

// Comparisons against the bare carrier, handy at call sites holding both.
impl<C: PartialEq> PartialEq<C> for Extended<C> {
    fn eq(&self, other: &C) -> bool {
        self.0 == *other
    }
}

// =============================================================================
// Extended collections are carriers too
// =============================================================================

// Delegation: a wrapped value participates anywhere a carrier is accepted
// (zip packs, join, nesting).

impl<C: Carrier> Carrier for Extended<C> {
    type Elem = C::Elem;
    type Iter<'a>
        = C::Iter<'a>
    where
        Self: 'a;
    type IntoElems = C::IntoElems;

    fn collect<I: IntoIterator<Item = C::Elem>>(elems: I) -> Self {
        Extended(C::collect(elems))
    }

    fn iter(&self) -> C::Iter<'_> {
        self.0.iter()
    }

    fn into_elems(self) -> C::IntoElems {
        self.0.into_elems()
    }

    fn push_back(&mut self, value: C::Elem) {
        self.0.push_back(value);
    }

    fn append(&mut self, other: &mut Self) {
        self.0.append(&mut other.0);
    }

    fn retain<F: FnMut(&C::Elem) -> bool>(&mut self, keep: F) {
        self.0.retain(keep);
    }

    fn truncate(&mut self, len: usize) {
        self.0.truncate(len);
    }

    fn len(&self) -> usize {
        self.0.len()
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<C: Carrier + Rebind> Rebind for Extended<C> {
    type Of<U> = Extended<C::Of<U>>;
}

impl<C: Classify> Classify for Extended<C> {
    type RandomAccess = <C as Classify>::RandomAccess;
    type NativeSort = <C as Classify>::NativeSort;
    type FastLen = <C as Classify>::FastLen;
}

impl<C: DirectAccess> DirectAccess for Extended<C> {
    fn at(&self, index: usize) -> Option<&C::Elem> {
        self.0.at(index)
    }

    fn contiguous(&mut self) -> &mut [C::Elem] {
        self.0.contiguous()
    }
}

impl<C: NativeSort> NativeSort for Extended<C> {
    fn sort_native<F: FnMut(&C::Elem, &C::Elem) -> Ordering>(&mut self, cmp: F) {
        self.0.sort_native(cmp);
    }
}
