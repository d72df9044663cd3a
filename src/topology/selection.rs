//! Boundary with the host's component selection.
//!
//! Hosts typically let a user pick "a middle edge"; the pick arrives as a
//! typed list of component ids. Only the first id of an edge selection is
//! used as the seed.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::mesh_error::SymmetryError;
use crate::topology::ids::EdgeId;

/// Kind of mesh component a selection is made of.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Vertex,
    Edge,
    Face,
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ComponentKind::Vertex => "vertex",
            ComponentKind::Edge => "edge",
            ComponentKind::Face => "face",
        };
        f.write_str(name)
    }
}

/// A host selection: component kind plus raw ids in selection order.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub kind: ComponentKind,
    pub ids: Vec<u32>,
}

impl Selection {
    /// Convenience constructor for an edge selection.
    pub fn edges(ids: impl IntoIterator<Item = u32>) -> Self {
        Self {
            kind: ComponentKind::Edge,
            ids: ids.into_iter().collect(),
        }
    }
}

/// Extract the seed edge from a host selection.
///
/// The selection must be edge-typed and non-empty. Whether the edge exists
/// and is interior is checked later, when propagation starts.
pub fn seed_from_selection(selection: &Selection) -> Result<EdgeId, SymmetryError> {
    if selection.kind != ComponentKind::Edge {
        return Err(SymmetryError::InvalidSelectionKind {
            found: selection.kind,
        });
    }
    selection
        .ids
        .first()
        .map(|&raw| EdgeId::new(raw))
        .ok_or(SymmetryError::EmptySelection)
}
