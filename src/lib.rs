#![cfg_attr(docsrs, feature(doc_cfg))]
//! # mesh-symmetry
//!
//! mesh-symmetry computes a topological symmetry table for a polygon mesh: given one
//! seed edge on the mirror seam, it finds the mirror counterpart of every vertex, edge
//! and face purely from adjacency. No coordinates are read.
//!
//! ## Features
//! - Arena-based mesh topology with typed ids and build-time validation (manifold edges,
//!   co-rotational face loops, consistent incidence)
//! - Breadth-first propagation over the face dual graph with per-step winding parity
//! - Detection of asymmetric input: a run either returns complete tables or a single error
//! - Flat `-1`-padded output arrays for vertex, edge or face tables, optionally half-only
//! - JSON readers/writers for hosts that exchange adjacency as text
//!
//! ## Usage
//!
//! ```rust
//! use mesh_symmetry::prelude::*;
//!
//! // Quad 0-1-2-3 split along the diagonal 1-3.
//! let adj = MeshAdjacency::from_polygons(4, &[[0u32, 1, 3], [1, 2, 3]]);
//! let seed = adj.find_edge(1, 3).unwrap();
//!
//! let table = symmetry_table(&adj, seed, &SymmetryOptions::default()).unwrap();
//! assert_eq!(table, vec![2, 1, 0, 3]);
//! ```
//!
//! ## Determinism
//!
//! For a mesh that really is symmetric about the seed, every face and edge is claimed
//! exactly once, so the tables do not depend on the order in which the work queue is
//! drained.
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade. Set
//! [`SymmetryOptions::verbose_timing`](config::SymmetryOptions::verbose_timing) to get
//! build and propagation times at info level.

use std::time::Instant;

pub mod algs;
pub mod config;
pub mod debug_invariants;
pub mod io;
pub mod mesh_error;
pub mod topology;

pub use debug_invariants::DebugInvariants;

use crate::algs::output::select_output;
use crate::algs::symmetry::{CorrespondenceTables, propagate};
use crate::config::SymmetryOptions;
use crate::mesh_error::SymmetryError;
use crate::topology::adjacency::MeshAdjacency;
use crate::topology::ids::EdgeId;
use crate::topology::mesh::MeshTopology;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::output::{OutputKind, OutputSelection, select_output};
    pub use crate::algs::symmetry::{CorrespondenceTables, SymmetryPropagator, propagate};
    pub use crate::config::SymmetryOptions;
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::mesh_error::SymmetryError;
    pub use crate::topology::adjacency::{MeshAdjacency, RawEdge, RawFace};
    pub use crate::topology::ids::{EdgeId, FaceId, VertexId};
    pub use crate::topology::mesh::MeshTopology;
    pub use crate::topology::selection::{ComponentKind, Selection, seed_from_selection};
    pub use crate::{compute_symmetry, symmetry_table};
}

fn log_elapsed(enabled: bool, start: Instant, message: &str) {
    if enabled {
        log::info!("{message}: {} seconds", start.elapsed().as_secs_f64());
    }
}

/// Build a topology from `adjacency` and propagate a mirror correspondence from `seed`.
///
/// The topology lives only for this call; on failure nothing partial is returned.
pub fn compute_symmetry(
    adjacency: &MeshAdjacency,
    seed: EdgeId,
    options: &SymmetryOptions,
) -> Result<CorrespondenceTables, SymmetryError> {
    run_timed(adjacency, seed, options, |tables| tables)
}

/// [`compute_symmetry`] followed by projection onto the table selected in `options`.
pub fn symmetry_table(
    adjacency: &MeshAdjacency,
    seed: EdgeId,
    options: &SymmetryOptions,
) -> Result<Vec<i64>, SymmetryError> {
    run_timed(adjacency, seed, options, |tables| {
        select_output(&tables, options.output)
    })
}

/// Build, then propagate and `assemble` the result under one timer.
fn run_timed<T>(
    adjacency: &MeshAdjacency,
    seed: EdgeId,
    options: &SymmetryOptions,
    assemble: impl FnOnce(CorrespondenceTables) -> T,
) -> Result<T, SymmetryError> {
    let start = Instant::now();
    let mut topo = MeshTopology::build(adjacency)?;
    log_elapsed(options.verbose_timing, start, "mesh init time");

    let start = Instant::now();
    let tables = propagate(&mut topo, seed, options.half_only)?;
    let result = assemble(tables);
    log_elapsed(
        options.verbose_timing,
        start,
        "topological symmetry calculated in",
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn split_quad_tables() {
        let adj = MeshAdjacency::from_polygons(4, &[[0u32, 1, 3], [1, 2, 3]]);
        let seed = adj.find_edge(1, 3).unwrap();

        let faces = symmetry_table(&adj, seed, &SymmetryOptions::face()).unwrap();
        assert_eq!(faces, vec![1, 0]);

        let edges = symmetry_table(&adj, seed, &SymmetryOptions::edge()).unwrap();
        assert_eq!(edges.len(), adj.num_edges());
        assert_eq!(edges[seed.index()], seed.get() as i64);

        let half = symmetry_table(&adj, seed, &SymmetryOptions::vertex().half_only(true)).unwrap();
        assert_eq!(half, vec![-1, -1, 0, -1]);
    }

    #[test]
    fn build_errors_surface_before_propagation() {
        let adj = MeshAdjacency::from_polygons(5, &[[0u32, 1, 2], [1, 0, 3], [0, 1, 4]]);
        let seed = adj.find_edge(0, 1).unwrap();
        assert!(matches!(
            compute_symmetry(&adj, seed, &SymmetryOptions::default()),
            Err(SymmetryError::NonManifoldEdge { .. })
        ));
    }

    #[test]
    fn timed_table_matches_projected_tables() {
        let adj = MeshAdjacency::from_polygons(4, &[[0u32, 1, 3], [1, 2, 3]]);
        let seed = adj.find_edge(1, 3).unwrap();
        for opts in [SymmetryOptions::vertex(), SymmetryOptions::edge(), SymmetryOptions::face()] {
            let tables = compute_symmetry(&adj, seed, &opts).unwrap();
            let timed = symmetry_table(&adj, seed, &opts.verbose_timing(true)).unwrap();
            assert_eq!(timed, select_output(&tables, opts.output));
        }
    }
}
