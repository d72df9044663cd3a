mod util;

use mesh_symmetry::algs::symmetry::propagate;
use mesh_symmetry::prelude::*;
use util::{assert_matches_mirror, cylinder, grid, pyramid};

fn run(mesh: &util::MirrorMesh) -> (MeshAdjacency, MeshTopology, CorrespondenceTables) {
    let adj = mesh.adjacency();
    let seed = mesh.seed_edge(&adj);
    let mut topo = MeshTopology::build(&adj).unwrap();
    let tables = propagate(&mut topo, seed, false).unwrap();
    (adj, topo, tables)
}

#[test]
fn split_quad_scenario() {
    // A = (0, 1, 3), B = (1, 2, 3), seed d = (1, 3).
    let adj = MeshAdjacency::from_polygons(4, &[[0u32, 1, 3], [1, 2, 3]]);
    let d = adj.find_edge(1, 3).unwrap();
    let e = |a, b| adj.find_edge(a, b).unwrap();

    let t = compute_symmetry(&adj, d, &SymmetryOptions::default()).unwrap();
    assert_eq!(t.face(FaceId::new(0)), Some(FaceId::new(1)));
    assert_eq!(t.face(FaceId::new(1)), Some(FaceId::new(0)));
    assert_eq!(t.edge(d), Some(d));
    assert_eq!(t.edge(e(0, 1)), Some(e(1, 2)));
    assert_eq!(t.edge(e(2, 3)), Some(e(3, 0)));
    let verts: Vec<_> = (0..4).map(|v| t.vertex(VertexId::new(v)).map(|x| x.get())).collect();
    assert_eq!(verts, vec![Some(2), Some(1), Some(0), Some(3)]);
}

#[test]
fn quad_grid_mirrors_about_center_column() {
    let mesh = grid(3, 2, false);
    let (adj, topo, t) = run(&mesh);
    assert_matches_mirror(&mesh, &adj, &t);
    assert!(topo.faces().iter().all(|f| f.visited && f.opposite.is_some()));
    // The center column carries h seam edges.
    assert_eq!(t.seam_edges().len(), 2);
    assert!(t.validate_invariants().is_ok());
}

#[test]
fn triangulated_grid_mirrors() {
    let mesh = grid(2, 3, true);
    let (adj, topo, t) = run(&mesh);
    assert_matches_mirror(&mesh, &adj, &t);
    assert_eq!(t.resolved_faces(), topo.num_faces());
}

#[test]
fn cylinder_closes_around_the_dual_cycle() {
    let mesh = cylinder(3, 2);
    let (adj, topo, t) = run(&mesh);
    assert_matches_mirror(&mesh, &adj, &t);
    assert!(topo.faces().iter().all(|f| f.visited));
    // Two seam lines of two rows each.
    assert_eq!(t.seam_edges().len(), 4);
}

#[test]
fn closed_pyramid_pairs_base_with_itself() {
    let mesh = pyramid();
    let (adj, _, t) = run(&mesh);
    assert_matches_mirror(&mesh, &adj, &t);
    let base = FaceId::new(4);
    assert_eq!(t.face(base), Some(base));
    let fixed: Vec<u32> = (0..5)
        .filter(|&v| t.vertex(VertexId::new(v)) == Some(VertexId::new(v)))
        .collect();
    assert_eq!(fixed, vec![0, 2, 4]);
}

#[test]
fn seam_fixed_points_on_grid() {
    let mesh = grid(2, 2, false);
    let (adj, _, t) = run(&mesh);
    for (i, e) in adj.edges.iter().enumerate() {
        let [a, b] = e.vertices;
        let on_seam = mesh.mirror[a.index()] == a.get() && mesh.mirror[b.index()] == b.get();
        assert_eq!(
            t.edge(EdgeId::new(i as u32)) == Some(EdgeId::new(i as u32)),
            on_seam,
            "edge {i}"
        );
    }
}

#[test]
fn seed_on_either_seam_edge_gives_same_tables() {
    let mesh = grid(2, 3, false);
    let adj = mesh.adjacency();
    let cols = 4u32;
    let vid = |i: u32, j: u32| j * (cols + 1) + i;
    let low = adj.find_edge(vid(2, 0), vid(2, 1)).unwrap();
    let high = adj.find_edge(vid(2, 2), vid(2, 3)).unwrap();
    let a = compute_symmetry(&adj, low, &SymmetryOptions::default()).unwrap();
    let b = compute_symmetry(&adj, high, &SymmetryOptions::default()).unwrap();
    assert_eq!(a.vertices, b.vertices);
    assert_eq!(a.edges, b.edges);
    assert_eq!(a.faces, b.faces);
}

#[test]
fn output_lengths_follow_selected_kind() {
    let mesh = grid(1, 1, false);
    let adj = mesh.adjacency();
    let seed = mesh.seed_edge(&adj);
    let v = symmetry_table(&adj, seed, &SymmetryOptions::vertex()).unwrap();
    let e = symmetry_table(&adj, seed, &SymmetryOptions::edge()).unwrap();
    let f = symmetry_table(&adj, seed, &SymmetryOptions::face()).unwrap();
    assert_eq!(v.len(), mesh.vertex_count);
    assert_eq!(e.len(), adj.num_edges());
    assert_eq!(f, vec![1, 0]);
}

#[test]
fn propagating_a_topology_twice_gives_the_same_tables() {
    let mesh = cylinder(3, 2);
    let (adj, mut topo, first) = run(&mesh);
    let second = propagate(&mut topo, mesh.seed_edge(&adj), false).unwrap();
    assert_eq!(first, second);
    assert_matches_mirror(&mesh, &adj, &second);
}
