//! Raw mesh adjacency as supplied by a host application.
//!
//! A host (editor plugin, CLI, service) extracts connectivity from its own
//! mesh representation and hands it over in this plain form. Nothing here is
//! validated; [`MeshTopology::build`](crate::topology::mesh::MeshTopology::build)
//! checks every invariant before propagation starts.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::topology::ids::{EdgeId, FaceId, VertexId};

/// One face: its ordered vertex loop and the co-rotational edge loop.
///
/// `edges[i]` must join `vertices[i]` and `vertices[(i + 1) % n]`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFace {
    pub vertices: Vec<VertexId>,
    pub edges: Vec<EdgeId>,
}

/// One edge: endpoints, incident faces and the host's boundary flag.
///
/// A missing boundary flag is derived from the incident face count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEdge {
    pub vertices: [VertexId; 2],
    pub faces: Vec<FaceId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_boundary: Option<bool>,
}

/// Complete host-side adjacency for one mesh.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeshAdjacency {
    pub vertex_count: usize,
    pub faces: Vec<RawFace>,
    pub edges: Vec<RawEdge>,
}

impl MeshAdjacency {
    /// Derive face/edge adjacency from ordered polygon vertex loops.
    ///
    /// Edges receive dense ids in order of first appearance while walking the
    /// polygons in order; an edge keeps the direction in which it was first
    /// seen. Incident faces are listed in face order, and an edge is flagged
    /// as boundary when exactly one face uses it. Malformed polygons are passed
    /// through unchanged and rejected later by `MeshTopology::build`.
    pub fn from_polygons<P>(vertex_count: usize, polygons: &[P]) -> Self
    where
        P: AsRef<[u32]>,
    {
        let mut edge_of: HashMap<(u32, u32), EdgeId> = HashMap::new();
        let mut edges: Vec<RawEdge> = Vec::new();
        let mut faces = Vec::with_capacity(polygons.len());

        for (f, poly) in polygons.iter().enumerate() {
            let poly = poly.as_ref();
            let face = FaceId::new(f as u32);
            let n = poly.len();
            let mut loop_edges = Vec::with_capacity(n);
            for i in 0..n {
                let (a, b) = (poly[i], poly[(i + 1) % n]);
                let key = (a.min(b), a.max(b));
                let id = *edge_of.entry(key).or_insert_with(|| {
                    edges.push(RawEdge {
                        vertices: [VertexId::new(a), VertexId::new(b)],
                        faces: Vec::new(),
                        on_boundary: None,
                    });
                    EdgeId::new((edges.len() - 1) as u32)
                });
                let incident = &mut edges[id.index()].faces;
                if !incident.contains(&face) {
                    incident.push(face);
                }
                loop_edges.push(id);
            }
            faces.push(RawFace {
                vertices: poly.iter().copied().map(VertexId::new).collect(),
                edges: loop_edges,
            });
        }

        for e in &mut edges {
            e.on_boundary = Some(e.faces.len() == 1);
        }

        MeshAdjacency {
            vertex_count,
            faces,
            edges,
        }
    }

    /// Number of faces supplied by the host.
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Number of edges supplied by the host.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Look up the edge joining `a` and `b`, in either direction.
    pub fn find_edge(&self, a: u32, b: u32) -> Option<EdgeId> {
        let (a, b) = (VertexId::new(a), VertexId::new(b));
        self.edges
            .iter()
            .position(|e| e.vertices == [a, b] || e.vertices == [b, a])
            .and_then(EdgeId::from_index)
    }
}
