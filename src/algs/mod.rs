//! Re-export public algorithms.

pub mod output;
pub mod symmetry;

pub use output::{OutputKind, OutputSelection, select_output};
pub use symmetry::{CorrespondenceTables, PropagationStats, SymmetryPropagator, Task, propagate};
