//! # Layer 2: Rebinding resolver
//!
//! Operations that change the element type (`map`, `zip`, `unzip`,
//! `zip_n`) need to know what kind the result should have: a collection
//! of `T` went in, a collection of `U` must come out. [`Rebind`] answers
//! that, once per kind, at compile time.
//!
//! Two rules, in fixed priority order:
//!
//! 1. **Explicit override** — an impl written by hand or generated from
//!    `#[rebind(as = Kind)]`, naming the analogous kind outright. This
//!    wins even on kinds that are parameterized by their element type
//!    (there is only ever one `Rebind` impl per kind, so the override
//!    simply *is* the resolution).
//! 2. **Structural substitution** — for a kind parameterized by element
//!    type, substitute the new element type for that parameter and leave
//!    every other generic parameter unchanged. `#[derive(Rebind)]`
//!    generates exactly this.
//!
//! A non-parameterized kind with no override has no rule at all; the
//! derive rejects it with a compile error, and a hand-rolled use of such
//! a kind in `map` simply fails the `C: Rebind` bound. Either way the
//! failure is structural — before anything runs:
//!
//! ```compile_fail
//! use seqext::prelude::*;
//!
//! // No element type parameter and no `#[rebind(as = ...)]`:
//! // "cannot rebind a kind with no element type parameter"
//! #[derive(Rebind)]
//! struct Opaque(Vec<u8>);
//! ```

use std::collections::{LinkedList, VecDeque};

use crate::carrier::{Carrier, SinglyList};

/// Derives the carrier kind able to hold a new element type.
///
/// The bound on `Of<U>` makes the guarantees structural: every resolved
/// kind supports default construction and end insertion (it is a
/// [`Carrier`]) and can itself be rebound further, so chained
/// type-changing operations keep resolving.
pub trait Rebind: Carrier {
    /// The analogous kind whose element type is `U`.
    type Of<U>: Carrier<Elem = U> + Rebind;
}

/// Shorthand for the resolved kind.
pub type RebindOf<C, U> = <C as Rebind>::Of<U>;

// =============================================================================
// Structural rule for the std kinds
// =============================================================================

impl<T> Rebind for Vec<T> {
    type Of<U> = Vec<U>;
}

impl<T> Rebind for VecDeque<T> {
    type Of<U> = VecDeque<U>;
}

impl<T> Rebind for LinkedList<T> {
    type Of<U> = LinkedList<U>;
}

// `SinglyList` carries `#[derive(Rebind)]` at its definition; keep the
// derive honest here.
#[allow(dead_code)]
fn singly_list_rebinds() {
    fn assert_structural<C: Rebind>()
    where
        C: Rebind<Of<f64> = SinglyList<f64>>,
    {
    }
    assert_structural::<SinglyList<i32>>();
}
