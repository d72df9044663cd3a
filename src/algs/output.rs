//! Projection of finished correspondence tables into a flat host array.

use serde::{Deserialize, Serialize};

use crate::algs::symmetry::CorrespondenceTables;
use crate::topology::ids::to_signed;

/// Which table(s) the host asked for.
///
/// Several flags may be set at once; [`OutputSelection::kind`] resolves them
/// with the fixed precedence edge > face > vertex.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSelection {
    pub vertex: bool,
    pub edge: bool,
    pub face: bool,
}

impl Default for OutputSelection {
    fn default() -> Self {
        Self {
            vertex: true,
            edge: false,
            face: false,
        }
    }
}

/// The single table that ends up in the output array.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    Vertex,
    Edge,
    Face,
}

impl OutputSelection {
    /// Resolve the flags: edge wins over face, face over vertex, and vertex
    /// is used when nothing is set.
    pub fn kind(self) -> OutputKind {
        if self.edge {
            OutputKind::Edge
        } else if self.face {
            OutputKind::Face
        } else {
            OutputKind::Vertex
        }
    }
}

impl From<OutputKind> for OutputSelection {
    fn from(kind: OutputKind) -> Self {
        Self {
            vertex: kind == OutputKind::Vertex,
            edge: kind == OutputKind::Edge,
            face: kind == OutputKind::Face,
        }
    }
}

/// Render the selected table: entry `i` is the mirror id of element `i`, or
/// `-1` when unresolved or suppressed.
pub fn select_output(tables: &CorrespondenceTables, selection: OutputSelection) -> Vec<i64> {
    match selection.kind() {
        OutputKind::Edge => tables.edges.iter().map(|&e| to_signed(e)).collect(),
        OutputKind::Face => tables.faces.iter().map(|&f| to_signed(f)).collect(),
        OutputKind::Vertex => tables.vertices.iter().map(|&v| to_signed(v)).collect(),
    }
}
