//! # N-ary zip engine
//!
//! [`Extended::zip_n`] generalizes pairwise zipping to a tuple of 1 to 6
//! participating collections, each of a possibly different kind, each
//! contributing one coordinate to a fixed-size tuple (self's coordinate
//! first, then the arguments in order).
//!
//! The engine first sizes every participant through the carrier size
//! query (O(1) where the kind has one, a linear walk otherwise) and takes
//! the minimum. It then advances one cursor per participant in lockstep
//! for exactly that many steps — no cursor ever moves past the shortest
//! participant. The result kind is resolved by [`Rebind`] with the tuple
//! of element types.
//!
//! The per-arity impls are macro-generated, one invocation per arity.

use crate::carrier::Carrier;
use crate::extended::Extended;
use crate::rebind::{Rebind, RebindOf};

/// A tuple of carrier references that can zip against a base carrier.
///
/// Implemented for `(&D1,)` through `(&D1, …, &D6)`.
pub trait ZipPack<C: Carrier + Rebind> {
    /// The tuple of element types, base first.
    type Out;

    /// Lockstep-zip `base` with the pack, truncated to the shortest
    /// participant.
    fn zip_into(base: &C, pack: Self) -> RebindOf<C, Self::Out>;
}

impl<C: Carrier + Rebind> Extended<C> {
    /// Zip with an arbitrary pack of collections into tuples.
    ///
    /// ```
    /// use seqext::prelude::*;
    /// use std::collections::LinkedList;
    ///
    /// let nums = seq![4, 3, 2, 1];
    /// let shorts: LinkedList<i16> = [1, 2, 3, 4].into_iter().collect();
    /// let chars = vec!['c', 'a', 't', 's'];
    ///
    /// let zipped = nums.zip_n((&shorts, &chars));
    /// assert_eq!(zipped, seq![(4, 1, 'c'), (3, 2, 'a'), (2, 3, 't'), (1, 4, 's')]);
    /// ```
    pub fn zip_n<P: ZipPack<C>>(&self, pack: P) -> Extended<RebindOf<C, P::Out>> {
        Extended::new(P::zip_into(self.inner(), pack))
    }
}

macro_rules! impl_zip_pack {
    ($(($D:ident, $seq:ident, $cursor:ident)),+) => {
        impl<'p, C, $($D,)+> ZipPack<C> for ($(&'p $D,)+)
        where
            C: Carrier + Rebind,
            C::Elem: Clone,
            $($D: Carrier, $D::Elem: Clone,)+
        {
            type Out = (C::Elem, $($D::Elem,)+);

            fn zip_into(base: &C, pack: Self) -> RebindOf<C, Self::Out> {
                let ($($seq,)+) = pack;

                // Size query on every participant, then the minimum.
                let mut shortest = base.len();
                $(shortest = shortest.min($seq.len());)+

                let mut out = RebindOf::<C, Self::Out>::default();
                let mut base_cursor = base.iter();
                $(let mut $cursor = $seq.iter();)+
                for _ in 0..shortest {
                    match (base_cursor.next(), $($cursor.next(),)+) {
                        (Some(head), $(Some($seq),)+) => {
                            out.push_back((head.clone(), $($seq.clone(),)+));
                        }
                        _ => break,
                    }
                }
                out
            }
        }
    };
}

impl_zip_pack!((D1, s1, c1));
impl_zip_pack!((D1, s1, c1), (D2, s2, c2));
impl_zip_pack!((D1, s1, c1), (D2, s2, c2), (D3, s3, c3));
impl_zip_pack!((D1, s1, c1), (D2, s2, c2), (D3, s3, c3), (D4, s4, c4));
impl_zip_pack!(
    (D1, s1, c1),
    (D2, s2, c2),
    (D3, s3, c3),
    (D4, s4, c4),
    (D5, s5, c5)
);
impl_zip_pack!(
    (D1, s1, c1),
    (D2, s2, c2),
    (D3, s3, c3),
    (D4, s4, c4),
    (D5, s5, c5),
    (D6, s6, c6)
);
