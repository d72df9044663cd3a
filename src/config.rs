//! Run configuration.
//!
//! Options mirror the flags a host command exposes. Every field has a
//! default, so partial JSON is accepted.

use serde::{Deserialize, Serialize};

use crate::algs::output::{OutputKind, OutputSelection};

/// Options for one symmetry computation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SymmetryOptions {
    /// Which table the flat output array carries.
    pub output: OutputSelection,
    /// Keep only the right half of the vertex table; the left half reads `-1`.
    pub half_only: bool,
    /// Log build and propagation times at info level.
    pub verbose_timing: bool,
}

impl SymmetryOptions {
    /// Vertex table output (the default).
    pub fn vertex() -> Self {
        Self::with_output(OutputKind::Vertex)
    }

    /// Edge table output.
    pub fn edge() -> Self {
        Self::with_output(OutputKind::Edge)
    }

    /// Face table output.
    pub fn face() -> Self {
        Self::with_output(OutputKind::Face)
    }

    fn with_output(kind: OutputKind) -> Self {
        Self {
            output: kind.into(),
            ..Self::default()
        }
    }

    pub fn half_only(mut self, on: bool) -> Self {
        self.half_only = on;
        self
    }

    pub fn verbose_timing(mut self, on: bool) -> Self {
        self.verbose_timing = on;
        self
    }
}
