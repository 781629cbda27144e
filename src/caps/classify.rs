//! The capability classifier.
//!
//! Each carrier kind is classified exactly once, by its `Classify` impl.
//! The three flags are type-level booleans fixed for the lifetime of the
//! program; no flag ever depends on a particular instance or element
//! value.
//!
//! - `RandomAccess` — direct indexed access over the element storage.
//! - `NativeSort` — the kind ships its own in-place sort.
//! - `FastLen` — the size query is O(1); otherwise it is a linear walk.
//!
//! [`Caps`] reflects the flags as `const`s for runtime inspection.

use core::marker::PhantomData;
use std::collections::{LinkedList, VecDeque};

use crate::caps::bool::{Absent, Bool, Present};
use crate::carrier::SinglyList;

/// Per-kind capability flags.
///
/// Sort dispatch selects on `RandomAccess` first, so a kind declaring both
/// a random-access view and a native sort is still unambiguous: random
/// access wins. A kind declaring neither has no sort strategy at all and
/// any attempt to sort it fails to compile.
pub trait Classify {
    /// Direct indexed access over the element storage.
    type RandomAccess: Bool;
    /// The kind ships its own in-place sort.
    type NativeSort: Bool;
    /// O(1) size query.
    type FastLen: Bool;
}

// =============================================================================
// Const reflection (generated)
// =============================================================================

/// Runtime view of a kind's capability flags.
///
/// ```
/// use seqext::caps::Caps;
///
/// assert!(Caps::<Vec<i32>>::RANDOM_ACCESS);
/// assert!(!Caps::<std::collections::LinkedList<i32>>::RANDOM_ACCESS);
/// ```
pub struct Caps<C>(PhantomData<C>);

macro_rules! reflect_flags {
    ($($Flag:ident),+ $(,)?) => {
        ::paste::paste! {
            impl<C: Classify> Caps<C> {
                $(
                    #[doc = concat!("The `", stringify!($Flag), "` flag of the kind.")]
                    pub const [<$Flag:snake:upper>]: bool =
                        <<C as Classify>::$Flag as Bool>::VALUE;
                )+
            }
        }
    };
}

reflect_flags!(RandomAccess, NativeSort, FastLen);

// =============================================================================
// Classification table
// =============================================================================

macro_rules! classify_kind {
    ($Kind:ident<$T:ident> => $ra:ty, $ns:ty, $fl:ty) => {
        impl<$T> Classify for $Kind<$T> {
            type RandomAccess = $ra;
            type NativeSort = $ns;
            type FastLen = $fl;
        }
    };
}

//             kind            random access, native sort, fast len
classify_kind!(Vec<T>        => Present,      Absent,      Present);
classify_kind!(VecDeque<T>   => Present,      Absent,      Present);
classify_kind!(LinkedList<T> => Absent,       Present,     Present);
classify_kind!(SinglyList<T> => Absent,       Present,     Absent);
