//! `MeshTopology`: arena of face and edge records addressed by dense ids.
//!
//! The topology is built once from host adjacency, validated, and then only
//! touched by the symmetry propagator through ids. No record ever holds a
//! reference to another record; a pending propagation task names its faces
//! and edges by id, so a face can sit in several pending tasks before one of
//! them claims it.

use crate::debug_invariants::DebugInvariants;
use crate::mesh_error::SymmetryError;
use crate::topology::adjacency::MeshAdjacency;
use crate::topology::ids::{EdgeId, FaceId, VertexId};

/// Edge record.
///
/// `faces.1` is `None` exactly when the edge lies on the mesh boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    pub vertices: [VertexId; 2],
    pub faces: (FaceId, Option<FaceId>),
    pub on_boundary: bool,
    pub opposite: Option<EdgeId>,
}

impl Edge {
    /// The face across this edge from `current`.
    ///
    /// Boundary edges have only one face, which is returned as is.
    #[inline]
    pub fn other_face(&self, current: FaceId) -> FaceId {
        match self.faces {
            (only, None) => only,
            (a, Some(b)) if a == current => b,
            (a, Some(_)) => a,
        }
    }
}

/// Face record: parallel, co-rotational vertex and edge loops.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Face {
    pub vertices: Vec<VertexId>,
    pub edges: Vec<EdgeId>,
    pub visited: bool,
    pub opposite: Option<FaceId>,
}

impl Face {
    /// Number of corners (equal to the number of sides).
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false for a validated face.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Immutable-after-build adjacency plus the mutable correspondence fields.
#[derive(Clone, Debug)]
pub struct MeshTopology {
    faces: Vec<Face>,
    edges: Vec<Edge>,
    vertex_count: usize,
}

impl MeshTopology {
    /// Build and validate a topology from host adjacency.
    ///
    /// Every edge must have one or two incident faces; more is
    /// [`SymmetryError::NonManifoldEdge`]. Face loops must be co-rotational
    /// and every face/edge incidence must be listed on both sides: by the
    /// face's edge loop and by the edge's face list.
    pub fn build(adj: &MeshAdjacency) -> Result<Self, SymmetryError> {
        let face_count = adj.faces.len();
        let edge_count = adj.edges.len();
        let vertex_count = adj.vertex_count;

        let check_vertex = |v: VertexId| {
            if v.index() < vertex_count {
                Ok(v)
            } else {
                Err(SymmetryError::VertexOutOfRange {
                    vertex: v,
                    vertex_count,
                })
            }
        };

        let mut edges = Vec::with_capacity(edge_count);
        for (i, raw) in adj.edges.iter().enumerate() {
            let id = EdgeId::new(i as u32);
            for &v in &raw.vertices {
                check_vertex(v)?;
            }
            for &f in &raw.faces {
                if f.index() >= face_count {
                    return Err(SymmetryError::FaceOutOfRange { face: f, face_count });
                }
            }
            let faces = match raw.faces.as_slice() {
                [] => return Err(SymmetryError::IsolatedEdge { edge: id }),
                [only] => (*only, None),
                [a, b] => (*a, Some(*b)),
                many => {
                    return Err(SymmetryError::NonManifoldEdge {
                        edge: id,
                        faces: many.len(),
                    });
                }
            };
            let on_boundary = faces.1.is_none();
            if let Some(flag) = raw.on_boundary {
                if flag != on_boundary {
                    return Err(SymmetryError::BoundaryFlagMismatch {
                        edge: id,
                        on_boundary: flag,
                        faces: raw.faces.len(),
                    });
                }
            }
            edges.push(Edge {
                vertices: raw.vertices,
                faces,
                on_boundary,
                opposite: None,
            });
        }

        let mut faces = Vec::with_capacity(face_count);
        for (i, raw) in adj.faces.iter().enumerate() {
            let id = FaceId::new(i as u32);
            let n = raw.vertices.len();
            if raw.edges.len() != n {
                return Err(SymmetryError::LoopLengthMismatch {
                    face: id,
                    vertices: n,
                    edges: raw.edges.len(),
                });
            }
            if n < 3 {
                return Err(SymmetryError::DegenerateFace { face: id, len: n });
            }
            for &v in &raw.vertices {
                check_vertex(v)?;
            }
            for &e in &raw.edges {
                let edge = edges.get(e.index()).ok_or(SymmetryError::EdgeOutOfRange {
                    edge: e,
                    edge_count,
                })?;
                if edge.faces.0 != id && edge.faces.1 != Some(id) {
                    return Err(SymmetryError::IncidenceMismatch { face: id, edge: e });
                }
            }
            faces.push(Face {
                vertices: raw.vertices.clone(),
                edges: raw.edges.clone(),
                visited: false,
                opposite: None,
            });
        }

        for (i, edge) in edges.iter().enumerate() {
            let id = EdgeId::new(i as u32);
            if edge.faces.1 == Some(edge.faces.0) {
                return Err(SymmetryError::IncidenceMismatch {
                    face: edge.faces.0,
                    edge: id,
                });
            }
            for f in std::iter::once(edge.faces.0).chain(edge.faces.1) {
                if !faces[f.index()].edges.contains(&id) {
                    return Err(SymmetryError::IncidenceMismatch { face: f, edge: id });
                }
            }
        }

        let topo = MeshTopology {
            faces,
            edges,
            vertex_count,
        };
        topo.validate_loops()?;
        crate::debug_invariants!(topo.validate_invariants(), "MeshTopology::build");
        log::debug!(
            "built mesh topology: {} faces, {} edges, {} vertices",
            topo.num_faces(),
            topo.num_edges(),
            topo.num_vertices()
        );
        Ok(topo)
    }

    /// Number of faces in the arena.
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Number of edges in the arena.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Size of the implicit vertex table.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertex_count
    }

    #[inline]
    pub fn face(&self, f: FaceId) -> Option<&Face> {
        self.faces.get(f.index())
    }

    #[inline]
    pub fn edge(&self, e: EdgeId) -> Option<&Edge> {
        self.edges.get(e.index())
    }

    pub(crate) fn face_mut(&mut self, f: FaceId) -> &mut Face {
        &mut self.faces[f.index()]
    }

    pub(crate) fn edge_mut(&mut self, e: EdgeId) -> &mut Edge {
        &mut self.edges[e.index()]
    }

    /// All faces, indexed by `FaceId`.
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// All edges, indexed by `EdgeId`.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Iterate face ids in arena order.
    pub fn face_ids(&self) -> impl Iterator<Item = FaceId> + '_ {
        (0..self.faces.len()).map(|i| FaceId::new(i as u32))
    }

    /// Iterate edge ids in arena order.
    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        (0..self.edges.len()).map(|i| EdgeId::new(i as u32))
    }

    /// Forget every face and edge pairing left by an earlier run.
    pub fn clear_correspondence(&mut self) {
        for face in &mut self.faces {
            face.visited = false;
            face.opposite = None;
        }
        for edge in &mut self.edges {
            edge.opposite = None;
        }
    }

    /// Check that every face's edge loop joins consecutive loop vertices.
    fn validate_loops(&self) -> Result<(), SymmetryError> {
        for (i, face) in self.faces.iter().enumerate() {
            let n = face.len();
            for (pos, &e) in face.edges.iter().enumerate() {
                let [a, b] = self.edges[e.index()].vertices;
                let (u, v) = (face.vertices[pos], face.vertices[(pos + 1) % n]);
                if !((a == u && b == v) || (a == v && b == u)) {
                    return Err(SymmetryError::LoopNotCoRotational {
                        face: FaceId::new(i as u32),
                        position: pos,
                    });
                }
            }
        }
        Ok(())
    }
}

/// Linear scan for `id` inside a face loop.
///
/// `None` means the loop does not contain `id`; during propagation that is
/// evidence of an asymmetric mesh rather than a programming error.
#[inline]
pub fn find_local_index<T: PartialEq + Copy>(items: &[T], id: T) -> Option<usize> {
    items.iter().position(|&x| x == id)
}

impl DebugInvariants for MeshTopology {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "MeshTopology");
    }

    fn validate_invariants(&self) -> Result<(), SymmetryError> {
        for (i, edge) in self.edges.iter().enumerate() {
            if edge.on_boundary != edge.faces.1.is_none() {
                return Err(SymmetryError::BoundaryFlagMismatch {
                    edge: EdgeId::new(i as u32),
                    on_boundary: edge.on_boundary,
                    faces: 1 + usize::from(edge.faces.1.is_some()),
                });
            }
        }
        self.validate_loops()
    }
}
