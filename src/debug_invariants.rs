//! Internal consistency checks for topology and correspondence tables.
//!
//! Checks are always callable through [`DebugInvariants::validate_invariants`];
//! the [`debug_invariants!`](crate::debug_invariants) macro turns a failure into
//! a panic in debug builds, or in release builds with `strict-invariants` or
//! `check-invariants` enabled.

use crate::mesh_error::SymmetryError;

/// Structures that can check their own invariants.
pub trait DebugInvariants {
    /// Panic on a broken invariant when checking is compiled in.
    fn debug_assert_invariants(&self);
    /// Report the first broken invariant as a [`SymmetryError`].
    fn validate_invariants(&self) -> Result<(), SymmetryError>;
}

/// Evaluate a `Result<(), SymmetryError>` and, if checking is compiled in,
/// log and panic on `Err`. The trailing tokens name the call site.
#[macro_export]
macro_rules! debug_invariants {
    ($check:expr, $($site:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(err) = $check {
            ::log::error!("{} broke an invariant: {}", $($site)*, err);
            panic!(concat!("[mesh-symmetry] invariant broken after ", $($site)*, ": {}"), err);
        }
    };
}
