//! Type-level boolean logic.
//!
//! Core types: `Present` (true), `Absent` (false), `Bool` trait. The
//! `If` selector is what turns a capability flag into a choice of type —
//! the sort dispatcher picks its strategy with it, once per kind, with no
//! runtime branch.

/// Type-level boolean.
pub trait Bool: 'static {
    /// The value, reflected for runtime inspection.
    const VALUE: bool;

    /// Type-level conditional: selects `Then` or `Else`.
    type If<Then, Else>;
}

/// Type-level True.
#[derive(Debug)]
pub struct Present;

/// Type-level False.
#[derive(Debug)]
pub struct Absent;

impl Bool for Present {
    const VALUE: bool = true;
    type If<Then, Else> = Then;
}

impl Bool for Absent {
    const VALUE: bool = false;
    type If<Then, Else> = Else;
}
