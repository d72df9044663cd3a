//! Top-level module for mesh topology.
//!
//! This module provides the arena that the symmetry propagation works on:
//! - Typed ids for vertices, edges and faces
//! - Raw host adjacency and its conversion into a validated [`MeshTopology`]
//! - Winding/parity helpers that line up two mirrored face loops
//! - The boundary with host component selections

pub mod adjacency;
pub mod ids;
pub mod mesh;
pub mod orientation;
pub mod selection;

pub use adjacency::{MeshAdjacency, RawEdge, RawFace};
pub use ids::{EdgeId, FaceId, VertexId};
pub use mesh::{Edge, Face, MeshTopology, find_local_index};
pub use orientation::{Parity, Traversal};
pub use selection::{ComponentKind, Selection, seed_from_selection};
