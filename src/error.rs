//! Runtime errors.
//!
//! Almost everything that can go wrong here goes wrong at compile time
//! (an unresolvable rebind, a kind with no sort strategy). The one
//! genuinely runtime condition is a seedless reduce over an empty
//! collection: there is no first element to seed the fold with, and
//! inventing a default would hide the bug.

use thiserror::Error;

/// Seedless reduce called on an empty collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("reduce without a seed over an empty collection")]
pub struct EmptyReduce;
