//! Breadth-first propagation of a mirror correspondence over the face dual graph.
//!
//! Starting from the two faces of an interior seed edge, every step takes a
//! pair of faces believed to mirror each other across a shared seam, lines up
//! their loops (see [`crate::topology::orientation`]) and records the vertex,
//! edge and face pairs it finds. Each newly paired edge that is not a seam
//! fixed point opens the next pair of faces across it.
//!
//! A face is claimed by at most one pairing: a task whose faces are already
//! paired with each other is dropped, which also stops the walk around cycles
//! in the dual graph. A task that finds only one of its faces claimed, or
//! both claimed by other partners, cannot belong to a mirror symmetry and
//! fails the run. The result does not depend on queue order for a mesh that
//! really is symmetric about the seed.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::debug_invariants::DebugInvariants;
use crate::mesh_error::SymmetryError;
use crate::topology::ids::{EdgeId, FaceId, VertexId};
use crate::topology::mesh::MeshTopology;
use crate::topology::orientation::{
    Traversal, align_loop_to_start, mirror_edge_loop, mirror_right_loop,
};
use crate::topology::selection::ComponentKind;

/// Unit of work: two faces believed to mirror each other across the seam
/// formed by `left_seam` / `right_seam`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Task {
    pub left_face: FaceId,
    pub right_face: FaceId,
    pub left_seam: EdgeId,
    pub right_seam: EdgeId,
}

/// Final per-element mirror tables.
///
/// `None` means unresolved, or suppressed when `half_only` is set. A fixed
/// point (`x -> x`) lies on the seam.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrespondenceTables {
    pub vertices: Vec<Option<VertexId>>,
    pub edges: Vec<Option<EdgeId>>,
    pub faces: Vec<Option<FaceId>>,
    pub half_only: bool,
}

impl CorrespondenceTables {
    #[inline]
    pub fn vertex(&self, v: VertexId) -> Option<VertexId> {
        self.vertices.get(v.index()).copied().flatten()
    }

    #[inline]
    pub fn edge(&self, e: EdgeId) -> Option<EdgeId> {
        self.edges.get(e.index()).copied().flatten()
    }

    #[inline]
    pub fn face(&self, f: FaceId) -> Option<FaceId> {
        self.faces.get(f.index()).copied().flatten()
    }

    /// Number of faces that found a partner.
    pub fn resolved_faces(&self) -> usize {
        self.faces.iter().filter(|f| f.is_some()).count()
    }

    /// Edges that map to themselves.
    pub fn seam_edges(&self) -> Vec<EdgeId> {
        self.edges
            .iter()
            .enumerate()
            .filter(|&(i, e)| e.map(|e| e.index()) == Some(i))
            .map(|(i, _)| EdgeId::new(i as u32))
            .collect()
    }
}

fn check_mutual<T: Copy + Eq>(
    table: &[Option<T>],
    index: impl Fn(T) -> usize,
) -> Result<(), usize> {
    for (i, entry) in table.iter().enumerate() {
        if let Some(partner) = *entry {
            let back = table.get(index(partner)).copied().flatten();
            if back.map(&index) != Some(i) {
                return Err(i);
            }
        }
    }
    Ok(())
}

impl DebugInvariants for CorrespondenceTables {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "CorrespondenceTables");
    }

    fn validate_invariants(&self) -> Result<(), SymmetryError> {
        let broken = |kind: ComponentKind| {
            move |index: usize| SymmetryError::NonMutualCorrespondence { kind, index }
        };
        check_mutual(&self.faces, FaceId::index).map_err(broken(ComponentKind::Face))?;
        check_mutual(&self.edges, EdgeId::index).map_err(broken(ComponentKind::Edge))?;
        if !self.half_only {
            check_mutual(&self.vertices, VertexId::index)
                .map_err(broken(ComponentKind::Vertex))?;
        }
        Ok(())
    }
}

/// Counters reported at the end of a run.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PropagationStats {
    pub tasks_processed: usize,
    pub tasks_discarded: usize,
    pub faces_paired: usize,
}

/// Queue-draining engine. Holds ids only; all records live in the topology.
pub struct SymmetryPropagator<'a> {
    topo: &'a mut MeshTopology,
    queue: VecDeque<Task>,
    half_only: bool,
    /// Full mirror map, used to detect contradicting vertex pairs.
    mirror: Vec<Option<VertexId>>,
    /// Host-facing vertex table, written once per pair, right side first.
    vertices: Vec<Option<VertexId>>,
    stats: PropagationStats,
}

impl<'a> SymmetryPropagator<'a> {
    /// Prepare a run seeded with the two faces of `seed`.
    ///
    /// Fails with [`SymmetryError::InvalidSeed`] if the edge does not exist or
    /// lies on the boundary. Pairings left in `topo` by an earlier run are
    /// cleared, so the same topology can be propagated again.
    pub fn new(
        topo: &'a mut MeshTopology,
        seed: EdgeId,
        half_only: bool,
    ) -> Result<Self, SymmetryError> {
        let edge = topo.edge(seed).ok_or(SymmetryError::InvalidSeed {
            edge: seed,
            reason: "edge does not exist",
        })?;
        let (left_face, right_face) = match edge.faces {
            (a, Some(b)) => (a, b),
            (_, None) => {
                return Err(SymmetryError::InvalidSeed {
                    edge: seed,
                    reason: "boundary edge has only one incident face",
                });
            }
        };
        topo.clear_correspondence();
        let n = topo.num_vertices();
        let mut queue = VecDeque::with_capacity(topo.num_edges().max(1));
        queue.push_back(Task {
            left_face,
            right_face,
            left_seam: seed,
            right_seam: seed,
        });
        Ok(Self {
            topo,
            queue,
            half_only,
            mirror: vec![None; n],
            vertices: vec![None; n],
            stats: PropagationStats::default(),
        })
    }

    /// Drain the queue and return the finished tables.
    ///
    /// On error the topology is left partially claimed until the next run.
    pub fn run(mut self) -> Result<CorrespondenceTables, SymmetryError> {
        while let Some(task) = self.queue.pop_front() {
            self.step(task)?;
        }
        log::debug!(
            "symmetry propagation done: {} tasks processed, {} discarded, {} faces paired",
            self.stats.tasks_processed,
            self.stats.tasks_discarded,
            self.stats.faces_paired
        );
        let tables = CorrespondenceTables {
            vertices: self.vertices,
            edges: self.topo.edges().iter().map(|e| e.opposite).collect(),
            faces: self.topo.faces().iter().map(|f| f.opposite).collect(),
            half_only: self.half_only,
        };
        crate::debug_invariants!(tables.validate_invariants(), "SymmetryPropagator::run");
        Ok(tables)
    }

    /// Counters so far.
    pub fn stats(&self) -> PropagationStats {
        self.stats
    }

    fn asymmetric(&self, task: &Task, reason: &'static str) -> SymmetryError {
        log::warn!(
            "mesh may not be symmetrical: faces {} and {} ({reason})",
            task.left_face,
            task.right_face
        );
        SymmetryError::AsymmetricMesh {
            left: task.left_face,
            right: task.right_face,
            reason,
        }
    }

    fn step(&mut self, task: Task) -> Result<(), SymmetryError> {
        let (l, r) = (task.left_face, task.right_face);
        let (left, right) = (&self.topo.faces()[l.index()], &self.topo.faces()[r.index()]);
        if left.visited || right.visited {
            if left.opposite != Some(r) || right.opposite != Some(l) {
                return Err(self.asymmetric(&task, "face already paired with another face"));
            }
            log::trace!("discard task {task:?}: faces already paired");
            self.stats.tasks_discarded += 1;
            return Ok(());
        }
        log::trace!("process task {task:?}");
        self.stats.tasks_processed += 1;
        self.stats.faces_paired += if l == r { 1 } else { 2 };

        {
            let left = self.topo.face_mut(l);
            left.visited = true;
            left.opposite = Some(r);
        }
        {
            let right = self.topo.face_mut(r);
            right.visited = true;
            right.opposite = Some(l);
        }

        let left_seam = self.topo.edges()[task.left_seam.index()].vertices;
        let right_seam = self.topo.edges()[task.right_seam.index()].vertices;
        let mut left_loop = self.topo.faces()[l.index()].vertices.clone();
        let mut right_loop = self.topo.faces()[r.index()].vertices.clone();
        if left_loop.len() != right_loop.len() {
            return Err(self.asymmetric(&task, "face loops differ in length"));
        }

        align_loop_to_start(&mut left_loop, left_seam[0])
            .ok_or_else(|| self.asymmetric(&task, "seam vertex missing from left face"))?;
        align_loop_to_start(&mut right_loop, right_seam[0])
            .ok_or_else(|| self.asymmetric(&task, "seam vertex missing from right face"))?;
        let parity =
            Traversal::of(&left_loop, left_seam).parity(Traversal::of(&right_loop, right_seam));
        mirror_right_loop(&mut right_loop, right_seam, parity)
            .ok_or_else(|| self.asymmetric(&task, "seam vertex missing from right face"))?;

        for (&lv, &rv) in left_loop.iter().zip(&right_loop) {
            self.pair_vertices(&task, lv, rv)?;
        }

        let mut left_edges = self.topo.faces()[l.index()].edges.clone();
        let mut right_edges = self.topo.faces()[r.index()].edges.clone();
        align_loop_to_start(&mut left_edges, task.left_seam)
            .ok_or_else(|| self.asymmetric(&task, "seam edge missing from left face"))?;
        mirror_edge_loop(&mut right_edges, task.right_seam)
            .ok_or_else(|| self.asymmetric(&task, "seam edge missing from right face"))?;

        for (&le, &re) in left_edges.iter().zip(&right_edges) {
            self.pair_edges(&task, le, re)?;
        }
        Ok(())
    }

    fn pair_vertices(
        &mut self,
        task: &Task,
        l: VertexId,
        r: VertexId,
    ) -> Result<(), SymmetryError> {
        match (self.mirror[l.index()], self.mirror[r.index()]) {
            (None, None) => {}
            (Some(x), Some(y)) if x == r && y == l => return Ok(()),
            _ => return Err(self.asymmetric(task, "vertex already mirrored to another vertex")),
        }
        self.mirror[r.index()] = Some(l);
        self.mirror[l.index()] = Some(r);

        // Right first, then left: under half-only a seam vertex ends up suppressed.
        self.vertices[r.index()] = Some(l);
        self.vertices[l.index()] = if self.half_only { None } else { Some(r) };
        Ok(())
    }

    fn pair_edges(&mut self, task: &Task, le: EdgeId, re: EdgeId) -> Result<(), SymmetryError> {
        let le_opp = self.topo.edges()[le.index()].opposite;
        let re_opp = self.topo.edges()[re.index()].opposite;
        if le_opp.is_some() || re_opp.is_some() {
            if le_opp != Some(re) || re_opp != Some(le) {
                return Err(self.asymmetric(task, "edge already mirrored to another edge"));
            }
            return Ok(());
        }
        self.topo.edge_mut(le).opposite = Some(re);
        self.topo.edge_mut(re).opposite = Some(le);
        if le == re {
            return Ok(());
        }

        let next = Task {
            left_face: self.topo.edges()[le.index()].other_face(task.left_face),
            right_face: self.topo.edges()[re.index()].other_face(task.right_face),
            left_seam: le,
            right_seam: re,
        };
        self.queue.push_back(next);
        Ok(())
    }
}

/// Run a full propagation from `seed` over `topo`.
///
/// After success every face reached through the dual graph is `visited` and
/// has an `opposite`. Errors are terminal; nothing partial is returned.
pub fn propagate(
    topo: &mut MeshTopology,
    seed: EdgeId,
    half_only: bool,
) -> Result<CorrespondenceTables, SymmetryError> {
    SymmetryPropagator::new(topo, seed, half_only)?.run()
}
