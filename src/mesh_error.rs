//! SymmetryError: Unified error type for mesh-symmetry public APIs
//!
//! Every fallible operation in the crate (building a topology, running the
//! propagation, decoding host input) reports through this single enum, so a
//! caller gets one failure classification per run and never a partial result.

use thiserror::Error;

use crate::topology::ids::{EdgeId, FaceId, VertexId};
use crate::topology::selection::ComponentKind;

/// Unified error type for mesh-symmetry operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SymmetryError {
    /// An edge reports more than two incident faces.
    #[error("Non-manifold edge {edge}: {faces} incident faces (at most 2 allowed)")]
    NonManifoldEdge { edge: EdgeId, faces: usize },
    /// An edge reports no incident face at all.
    #[error("Edge {edge} has no incident face")]
    IsolatedEdge { edge: EdgeId },
    /// The host-supplied boundary flag contradicts the incident face count.
    #[error("Edge {edge}: boundary flag {on_boundary} contradicts {faces} incident face(s)")]
    BoundaryFlagMismatch {
        edge: EdgeId,
        on_boundary: bool,
        faces: usize,
    },
    /// A vertex id lies outside the implicit vertex table.
    #[error("Vertex {vertex} out of range (vertex count {vertex_count})")]
    VertexOutOfRange { vertex: VertexId, vertex_count: usize },
    /// An edge id lies outside the edge table.
    #[error("Edge {edge} out of range (edge count {edge_count})")]
    EdgeOutOfRange { edge: EdgeId, edge_count: usize },
    /// A face id lies outside the face table.
    #[error("Face {face} out of range (face count {face_count})")]
    FaceOutOfRange { face: FaceId, face_count: usize },
    /// A face loop has fewer than three entries.
    #[error("Face {face} is degenerate ({len} vertices)")]
    DegenerateFace { face: FaceId, len: usize },
    /// A face's vertex loop and edge loop differ in length.
    #[error("Face {face}: vertex loop has {vertices} entries but edge loop has {edges}")]
    LoopLengthMismatch {
        face: FaceId,
        vertices: usize,
        edges: usize,
    },
    /// `edge_loop[i]` does not join `vertex_loop[i]` and `vertex_loop[i + 1]`.
    #[error("Face {face}: edge loop is not co-rotational with vertex loop at position {position}")]
    LoopNotCoRotational { face: FaceId, position: usize },
    /// A face and an edge disagree on whether they are incident.
    #[error("Face {face} and edge {edge} disagree on their incidence")]
    IncidenceMismatch { face: FaceId, edge: EdgeId },
    /// The seed edge does not exist or cannot start a propagation.
    #[error("Invalid seed edge {edge}: {reason}")]
    InvalidSeed { edge: EdgeId, reason: &'static str },
    /// The mesh has no topological mirror symmetry reachable from the seed.
    #[error("Mesh may not be symmetrical: faces {left} and {right} cannot be mirrored ({reason})")]
    AsymmetricMesh {
        left: FaceId,
        right: FaceId,
        reason: &'static str,
    },
    /// A finished table maps an element to a partner that does not map back.
    #[error("Correspondence is not mutual: {kind} {index} is not mapped back by its partner")]
    NonMutualCorrespondence { kind: ComponentKind, index: usize },
    /// The host selection is not made of edges.
    #[error("Selected component is not an edge component (found {found}); select a middle edge for symmetry")]
    InvalidSelectionKind { found: ComponentKind },
    /// The host selection carries no component ids.
    #[error("Selection is empty; select a middle edge for symmetry")]
    EmptySelection,
    /// Reading or writing host data failed.
    #[error("I/O error: {0}")]
    Io(String),
    /// Host data could not be (de)serialized.
    #[error("JSON error: {0}")]
    Json(String),
}

impl From<std::io::Error> for SymmetryError {
    fn from(e: std::io::Error) -> Self {
        SymmetryError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for SymmetryError {
    fn from(e: serde_json::Error) -> Self {
        SymmetryError::Json(e.to_string())
    }
}
