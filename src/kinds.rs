//! Convenience aliases and constructors for the provided kinds.
//!
//! One alias per carrier kind, plus the [`seq!`] literal macro.

use std::collections::{LinkedList, VecDeque};

use crate::carrier::SinglyList;
use crate::extended::Extended;

/// Extended dynamic array.
pub type ExtVec<T> = Extended<Vec<T>>;

/// Extended double-ended queue.
pub type ExtDeque<T> = Extended<VecDeque<T>>;

/// Extended doubly linked list.
pub type ExtList<T> = Extended<LinkedList<T>>;

/// Extended singly linked list.
pub type ExtSingly<T> = Extended<SinglyList<T>>;

/// Extended character sequence.
#[cfg(feature = "text")]
pub type ExtText = Extended<crate::text::Text>;

/// Build an extended collection from element literals.
///
/// Usage:
/// - `seq![1, 2, 3]` — an [`ExtVec`]
/// - `seq![LinkedList<i32>; 1, 2, 3]` — any named carrier kind
///
/// ```
/// use seqext::prelude::*;
/// use std::collections::LinkedList;
///
/// let v = seq![1, 2, 3];
/// assert_eq!(v.len(), 3);
///
/// let l = seq![LinkedList<i32>; 1, 2, 3];
/// assert!(l.contains(&2));
/// ```
#[macro_export]
macro_rules! seq {
    () => {
        $crate::Extended::<::std::vec::Vec<_>>::default()
    };
    ($($tokens:tt)+) => {
        $crate::__seq_impl!([] $($tokens)+)
    };
}

/// Implementation detail of [`seq!`]: scans for a `;` separating the carrier
/// kind from the element list, since a `ty` fragment cannot backtrack.
#[doc(hidden)]
#[macro_export]
macro_rules! __seq_impl {
    ([$($kind:tt)+] ; $($elem:expr),* $(,)?) => {{
        let mut out = <$($kind)+ as ::core::default::Default>::default();
        $($crate::Carrier::push_back(&mut out, $elem);)*
        $crate::Extended::new(out)
    }};
    ([$($kind:tt)*] $next:tt $($rest:tt)*) => {
        $crate::__seq_impl!([$($kind)* $next] $($rest)*)
    };
    ([$($elem:tt)+]) => {
        $crate::Extended::new(::std::vec![$($elem)+])
    };
}
