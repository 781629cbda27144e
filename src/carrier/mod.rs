//! # Layer 0: Carrier abstraction
//!
//! The minimal primitive set the operation layer consumes, and the kinds
//! that provide it.
//!
//! - **`Carrier`**: default construction, range construction, forward
//!   traversal, end insertion, move-append, order-preserving erase, tail
//!   erase, size query.
//! - **Kinds**: `Vec`, `VecDeque`, `LinkedList` (std), plus the in-crate
//!   [`SinglyList`] — the one kind whose size query is a linear walk.

pub mod seq;
pub mod singly;

pub use seq::Carrier;
pub use singly::SinglyList;
