use polyset_clip::core::math::{vec2, Vector2};
use polyset_clip::{to_indexed_mesh, to_triangle_list, Triangle, Tristrip};

fn strip(points: &[(f64, f64)]) -> Vec<Vector2> {
    points.iter().map(|&p| p.into()).collect()
}

/// Zig-zag strip over a row of unit quads: bottom and top vertexes alternate.
fn zigzag(quads: usize) -> Vec<Vector2> {
    let mut result = Vec::new();
    for i in 0..=quads {
        result.push(vec2(i as f64, 0.0));
        result.push(vec2(i as f64, 1.0));
    }
    result
}

#[test]
fn unit_square_strip() {
    let tristrip = Tristrip::from(vec![strip(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)])]);
    let triangles = to_triangle_list(&tristrip);
    assert_eq!(
        triangles,
        vec![
            Triangle::new(vec2(0.0, 0.0), vec2(1.0, 0.0), vec2(0.0, 1.0)),
            Triangle::new(vec2(0.0, 1.0), vec2(1.0, 0.0), vec2(1.0, 1.0)),
        ]
    );
    assert!(triangles.iter().all(|t| t.signed_area() > 0.0));
}

#[test]
fn triangle_count_matches_strip_lengths() {
    let lengths = [0usize, 1, 2, 3, 4, 7, 10];
    let tristrip = Tristrip::from(
        lengths
            .iter()
            .map(|&n| (0..n).map(|i| vec2(i as f64, (i % 2) as f64)).collect())
            .collect::<Vec<Vec<Vector2>>>(),
    );
    let expected: usize = lengths.iter().map(|&n| n.saturating_sub(2)).sum();
    assert_eq!(tristrip.triangle_count(), expected);
    assert_eq!(to_triangle_list(&tristrip).len(), expected);
    assert_eq!(to_indexed_mesh(&tristrip).triangle_count(), expected);
}

#[test]
fn short_strips_emit_nothing() {
    let tristrip = Tristrip::from(vec![vec![], strip(&[(1.0, 1.0)]), strip(&[(1.0, 1.0), (2.0, 2.0)])]);
    assert!(to_triangle_list(&tristrip).is_empty());

    let mesh = to_indexed_mesh(&tristrip);
    assert!(mesh.indices.is_empty());
    // vertexes of short strips are still registered
    assert_eq!(mesh.vertices, vec![vec2(1.0, 1.0), vec2(2.0, 2.0)]);
}

#[test]
fn empty_tristrip() {
    let tristrip = Tristrip::new();
    assert!(to_triangle_list(&tristrip).is_empty());
    let mesh = to_indexed_mesh(&tristrip);
    assert!(mesh.vertices.is_empty());
    assert!(mesh.indices.is_empty());
}

#[test]
fn winding_is_consistent_along_strip() {
    for orientation in [1.0, -1.0] {
        let s: Vec<Vector2> = zigzag(6).into_iter().map(|p| vec2(p.x, orientation * p.y)).collect();
        let triangles = to_triangle_list(&Tristrip::from(vec![s]));
        assert_eq!(triangles.len(), 12);
        let first_sign = triangles[0].signed_area().signum();
        for t in &triangles {
            assert_eq!(t.signed_area().signum(), first_sign, "winding flipped at {:?}", t);
        }
    }
}

#[test]
fn indexed_mesh_dedups_shared_vertexes() {
    let tristrip = Tristrip::from(vec![
        strip(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)]),
        strip(&[(1.0, 1.0), (2.0, 1.0), (1.0, 2.0)]),
    ]);
    let mesh = to_indexed_mesh(&tristrip);
    assert_eq!(
        mesh.vertices,
        vec![
            vec2(0.0, 0.0),
            vec2(1.0, 0.0),
            vec2(0.0, 1.0),
            vec2(1.0, 1.0),
            vec2(2.0, 1.0),
            vec2(1.0, 2.0),
        ]
    );
    assert_eq!(mesh.indices, vec![[0, 1, 2], [2, 1, 3], [3, 4, 5]]);

    // (1, 1) has a single index referenced by triangles of both strips
    let shared = mesh.vertices.iter().position(|&v| v == vec2(1.0, 1.0)).unwrap();
    let referencing: Vec<usize> = mesh
        .indices
        .iter()
        .enumerate()
        .filter(|(_, t)| t.contains(&shared))
        .map(|(i, _)| i)
        .collect();
    assert_eq!(referencing, vec![1, 2]);
}

#[test]
fn indexed_mesh_matches_triangle_list() {
    let tristrip = Tristrip::from(vec![
        zigzag(5),
        strip(&[(10.0, 0.0), (12.0, 0.0), (10.0, 3.0), (12.0, 2.0), (11.0, 5.0)]),
        zigzag(2),
    ]);
    let list = to_triangle_list(&tristrip);
    let mesh = to_indexed_mesh(&tristrip);
    let resolved: Vec<Triangle> = mesh.triangles().collect();
    assert_eq!(resolved, list);
    // the repeated zigzag strip adds no new vertexes
    assert_eq!(mesh.vertices.len(), 12 + 5);
}

#[test]
fn dedup_is_exact() {
    let eps = 1.0e-12;
    let tristrip = Tristrip::from(vec![
        strip(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]),
        strip(&[(-0.0, 0.0), (1.0 + eps, 0.0), (0.0, 1.0)]),
    ]);
    let mesh = to_indexed_mesh(&tristrip);
    // -0.0 and 1 + eps are distinct points, (0, 1) is shared
    assert_eq!(mesh.vertices.len(), 5);
    assert_eq!(mesh.indices, vec![[0, 1, 2], [3, 4, 2]]);
}

#[test]
fn mesh_triangle_out_of_range() {
    let mesh = to_indexed_mesh(&Tristrip::from(vec![zigzag(1)]));
    assert_eq!(mesh.triangle_count(), 2);
    assert!(mesh.triangle(1).is_some());
    assert!(mesh.triangle(2).is_none());
}
