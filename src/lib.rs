//! # seqext
//!
//! Extended sequence collections: one uniform functional operation set
//! (map, filter, reduce, zip, flatten, sort, take, unzip, …) over any
//! ordered carrier collection, with the result kind of type-changing
//! operations resolved at compile time.
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Carriers                                                |
//! |  - Carrier trait (traverse, insert, erase, size query)            |
//! |  - Vec, VecDeque, LinkedList, SinglyList, Text                    |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Capabilities                                            |
//! |  - Classify (RandomAccess / NativeSort / FastLen flags)           |
//! |  - Sort dispatch via type-level Bool::If, once per kind           |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Rebinding                                               |
//! |  - Rebind::Of<U>: collection-of-T to collection-of-U              |
//! |  - #[derive(Rebind)] structural rule, #[rebind(as = K)] override  |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Operations                                              |
//! |  - Extended<C> wrapper, persistent + disposable entry points      |
//! |  - N-ary zip engine over tuples of carriers                       |
//! +-------------------------------------------------------------------+
//! ```
//!
//! Everything is eager and single-threaded: each operation either
//! materializes a fresh collection or mutates owned storage in place.
//! The disposable (`into_*`) variants exist purely so an intermediate
//! result can be repurposed without another allocation; ownership
//! transfer is explicit and total.
//!
//! ## Quick start
//!
//! ```
//! use seqext::prelude::*;
//!
//! let mut nums = seq![3, 2, 1, 15, 2, 15];
//! nums.sort();
//! assert_eq!(nums, seq![1, 2, 2, 3, 15, 15]);
//!
//! // map resolves the output kind from the closure's return type:
//! // Vec<i32> in, Vec<String> out.
//! let labels = nums.map(|n| format!("#{n}"));
//! assert_eq!(labels.len(), 6);
//!
//! let parts = seq![String::from("Hel"), String::from("lo")];
//! let msg = parts.reduce(|acc, part| acc + part)?;
//! assert_eq!(msg, "Hello");
//! # Ok::<(), seqext::EmptyReduce>(())
//! ```

// Allow `::seqext` paths (as generated by the derive) inside the crate.
extern crate self as seqext;

// =============================================================================
// Layer 0: Carriers
// =============================================================================
pub mod carrier;

// =============================================================================
// Layer 1: Capabilities
// =============================================================================
pub mod caps;

// =============================================================================
// Layer 2: Rebinding
// =============================================================================
pub mod rebind;

// =============================================================================
// Layer 3: Operations
// =============================================================================
pub mod extended;
pub mod zip;

// Aliases, errors, adaptors
pub mod error;
pub mod kinds;
#[cfg(feature = "text")]
pub mod text;

// =============================================================================
// Re-exports at crate root
// =============================================================================

pub use carrier::{Carrier, SinglyList};
pub use caps::{Caps, Classify, DirectAccess, NativeSort, SortDispatch};
pub use error::EmptyReduce;
pub use extended::Extended;
pub use kinds::{ExtDeque, ExtList, ExtSingly, ExtVec};
pub use rebind::{Rebind, RebindOf};
pub use zip::ZipPack;

#[cfg(feature = "text")]
pub use kinds::ExtText;
#[cfg(feature = "text")]
pub use text::Text;

// The derive lives in the macros crate; same name as the trait, different
// namespace.
pub use macros::Rebind;

/// Common items for working with extended collections.
pub mod prelude {
    pub use crate::carrier::{Carrier, SinglyList};
    pub use crate::caps::{Caps, Classify, SortDispatch};
    pub use crate::error::EmptyReduce;
    pub use crate::extended::Extended;
    pub use crate::kinds::{ExtDeque, ExtList, ExtSingly, ExtVec};
    pub use crate::rebind::{Rebind, RebindOf};
    pub use crate::seq;
    pub use crate::zip::ZipPack;
    pub use macros::Rebind;

    #[cfg(feature = "text")]
    pub use crate::kinds::ExtText;
    #[cfg(feature = "text")]
    pub use crate::text::Text;
}
