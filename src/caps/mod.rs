//! # Layer 1: Capability classification
//!
//! Per-kind, compile-time facts about a carrier, and the dispatch built on
//! them.
//!
//! - **`bool`**: type-level booleans (`Present` / `Absent`) with a type
//!   selector.
//! - **`classify`**: the three capability flags of every kind, plus const
//!   reflection.
//! - **`sort`**: the two sort strategies and the once-per-kind selection
//!   between them.

pub mod bool;
pub mod classify;
pub mod sort;

pub use bool::{Absent, Bool, Present};
pub use classify::{Caps, Classify};
pub use sort::{DirectAccess, KindSort, NativeSort, SliceSort, SortDispatch, SortStrategy};
