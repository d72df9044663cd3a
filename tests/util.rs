#![allow(dead_code)]
use std::collections::HashMap;

use mesh_symmetry::prelude::*;
use rand::Rng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

/// Polygon soup plus the vertex mirror map it was generated with.
#[derive(Clone, Debug)]
pub struct MirrorMesh {
    pub vertex_count: usize,
    pub polygons: Vec<Vec<u32>>,
    pub mirror: Vec<u32>,
    /// Endpoints of an interior edge on the seam.
    pub seed: (u32, u32),
}

impl MirrorMesh {
    pub fn adjacency(&self) -> MeshAdjacency {
        MeshAdjacency::from_polygons(self.vertex_count, &self.polygons)
    }

    pub fn seed_edge(&self, adj: &MeshAdjacency) -> EdgeId {
        adj.find_edge(self.seed.0, self.seed.1)
            .expect("seed edge present")
    }

    /// Relabel vertices, shuffle face order and rotate every loop start.
    /// Winding is preserved, edge storage directions are not.
    pub fn scrambled(&self, rng: &mut SmallRng) -> MirrorMesh {
        let mut perm: Vec<u32> = (0..self.vertex_count as u32).collect();
        perm.shuffle(rng);
        let mut polygons: Vec<Vec<u32>> = self
            .polygons
            .iter()
            .map(|p| {
                let mut q: Vec<u32> = p.iter().map(|&v| perm[v as usize]).collect();
                let k = rng.gen_range(0..q.len());
                q.rotate_left(k);
                q
            })
            .collect();
        polygons.shuffle(rng);
        let mut mirror = vec![0u32; self.vertex_count];
        for (v, &m) in self.mirror.iter().enumerate() {
            mirror[perm[v] as usize] = perm[m as usize];
        }
        MirrorMesh {
            vertex_count: self.vertex_count,
            polygons,
            mirror,
            seed: (perm[self.seed.0 as usize], perm[self.seed.1 as usize]),
        }
    }
}

/// `2w x h` quad grid mirrored about column `w`; optionally each quad is
/// split into two triangles with mirror-symmetric diagonals.
pub fn grid(w: u32, h: u32, triangulate: bool) -> MirrorMesh {
    let cols = 2 * w;
    let vid = |i: u32, j: u32| j * (cols + 1) + i;
    let mut polygons = Vec::new();
    for j in 0..h {
        for i in 0..cols {
            let (a, b, c, d) = (vid(i, j), vid(i + 1, j), vid(i + 1, j + 1), vid(i, j + 1));
            if !triangulate {
                polygons.push(vec![a, b, c, d]);
            } else if i < w {
                polygons.push(vec![a, b, c]);
                polygons.push(vec![a, c, d]);
            } else {
                polygons.push(vec![a, b, d]);
                polygons.push(vec![b, c, d]);
            }
        }
    }
    let vertex_count = ((cols + 1) * (h + 1)) as usize;
    let mut mirror = vec![0u32; vertex_count];
    for j in 0..=h {
        for i in 0..=cols {
            mirror[vid(i, j) as usize] = vid(cols - i, j);
        }
    }
    MirrorMesh {
        vertex_count,
        polygons,
        mirror,
        seed: (vid(w, 0), vid(w, 1)),
    }
}

/// Open cylinder of `2w` quad columns around and `h` rows, mirrored about
/// the seam lines at columns `0` and `w`.
pub fn cylinder(w: u32, h: u32) -> MirrorMesh {
    let cols = 2 * w;
    let vid = |i: u32, j: u32| j * cols + (i % cols);
    let mut polygons = Vec::new();
    for j in 0..h {
        for i in 0..cols {
            polygons.push(vec![vid(i, j), vid(i + 1, j), vid(i + 1, j + 1), vid(i, j + 1)]);
        }
    }
    let vertex_count = (cols * (h + 1)) as usize;
    let mut mirror = vec![0u32; vertex_count];
    for j in 0..=h {
        for i in 0..cols {
            mirror[vid(i, j) as usize] = vid((cols - i) % cols, j);
        }
    }
    MirrorMesh {
        vertex_count,
        polygons,
        mirror,
        seed: (vid(0, 0), vid(0, 1)),
    }
}

/// Closed square pyramid; the mirror plane holds base corners 0, 2 and apex 4.
pub fn pyramid() -> MirrorMesh {
    MirrorMesh {
        vertex_count: 5,
        polygons: vec![
            vec![0, 1, 4],
            vec![1, 2, 4],
            vec![2, 3, 4],
            vec![3, 0, 4],
            vec![0, 3, 2, 1],
        ],
        mirror: vec![0, 3, 2, 1, 4],
        seed: (0, 4),
    }
}

fn face_key(adj: &MeshAdjacency, f: usize) -> Vec<u32> {
    let mut k: Vec<u32> = adj.faces[f].vertices.iter().map(|v| v.get()).collect();
    k.sort_unstable();
    k
}

/// Assert that `tables` is exactly the mirror map of `mesh` (full tables, not half-only).
pub fn assert_matches_mirror(mesh: &MirrorMesh, adj: &MeshAdjacency, tables: &CorrespondenceTables) {
    for (v, &m) in mesh.mirror.iter().enumerate() {
        assert_eq!(
            tables.vertex(VertexId::new(v as u32)),
            Some(VertexId::new(m)),
            "vertex {v}"
        );
    }
    for (i, e) in adj.edges.iter().enumerate() {
        let [a, b] = e.vertices;
        let want = adj
            .find_edge(mesh.mirror[a.index()], mesh.mirror[b.index()])
            .expect("mirrored edge exists");
        assert_eq!(tables.edge(EdgeId::new(i as u32)), Some(want), "edge {i}");
    }
    let by_key: HashMap<Vec<u32>, usize> = (0..adj.faces.len())
        .map(|f| (face_key(adj, f), f))
        .collect();
    for f in 0..adj.faces.len() {
        let mut mk: Vec<u32> = face_key(adj, f)
            .into_iter()
            .map(|v| mesh.mirror[v as usize])
            .collect();
        mk.sort_unstable();
        let want = by_key[&mk];
        assert_eq!(
            tables.face(FaceId::new(f as u32)),
            Some(FaceId::new(want as u32)),
            "face {f}"
        );
    }
}
