//! Procedural shapes: the anchor icosahedron and the tile disc.

use glam::{Vec2, Vec3};

use super::mesh::Geometry;

const ICOSAHEDRON_FACES: [[u32; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

/// Regular icosahedron with golden-ratio vertices, faces wound outward.
///
/// All 12 vertices lie at radius `sqrt(1 + phi^2)`.
pub fn build_icosahedron() -> Geometry {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let positions = [
        Vec3::new(-1.0, t, 0.0),
        Vec3::new(1.0, t, 0.0),
        Vec3::new(-1.0, -t, 0.0),
        Vec3::new(1.0, -t, 0.0),
        Vec3::new(0.0, -1.0, t),
        Vec3::new(0.0, 1.0, t),
        Vec3::new(0.0, -1.0, -t),
        Vec3::new(0.0, 1.0, -t),
        Vec3::new(t, 0.0, -1.0),
        Vec3::new(t, 0.0, 1.0),
        Vec3::new(-t, 0.0, -1.0),
        Vec3::new(-t, 0.0, 1.0),
    ];

    let mut g = Geometry::new();
    for p in positions {
        g.add_vertex(p, Vec2::ZERO);
    }
    for [a, b, c] in ICOSAHEDRON_FACES {
        g.add_face(a, b, c);
    }
    g
}

/// Triangle fan of `steps` segments (at least 4) in the XY plane.
///
/// The center vertex maps to uv (0.5, 0.5); rim vertex `i` sits at angle
/// `i * 2pi / steps` with uv `(cos*0.5+0.5, sin*0.5+0.5)`.
pub fn build_disc(steps: u32, radius: f32) -> Geometry {
    let steps = steps.max(4);
    let alpha = std::f32::consts::TAU / steps as f32;

    let mut g = Geometry::new();
    g.add_vertex(Vec3::ZERO, Vec2::splat(0.5));

    for i in 0..steps {
        let (y, x) = (alpha * i as f32).sin_cos();
        g.add_vertex(
            Vec3::new(radius * x, radius * y, 0.0),
            Vec2::new(x * 0.5 + 0.5, y * 0.5 + 0.5),
        );
        if i > 0 {
            g.add_face(0, i, i + 1);
        }
    }
    g.add_face(0, steps, 1);

    g.compute_vertex_normals();
    g
}

/// Tile anchor directions: icosahedron subdivided `subdivisions` times and
/// pushed onto a sphere of `radius`.
pub fn build_anchor_sphere(subdivisions: u32, radius: f32) -> Geometry {
    build_icosahedron().subdivide(subdivisions).spherize(radius)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Every undirected edge must be used by exactly two faces, once in each
    /// direction.
    fn assert_closed_manifold(g: &Geometry) {
        let mut directed: HashMap<(u32, u32), u32> = HashMap::new();
        for f in g.faces() {
            for (a, b) in [(f.a, f.b), (f.b, f.c), (f.c, f.a)] {
                *directed.entry((a, b)).or_default() += 1;
            }
        }
        for (&(a, b), &count) in &directed {
            assert_eq!(count, 1, "edge {a}->{b} used {count} times");
            assert_eq!(directed.get(&(b, a)), Some(&1), "edge {a}-{b} is open");
        }
    }

    #[test]
    fn icosahedron_counts() {
        let g = build_icosahedron();
        assert_eq!(g.vertex_count(), 12);
        assert_eq!(g.face_count(), 20);
    }

    #[test]
    fn icosahedron_vertices_share_radius() {
        let g = build_icosahedron();
        let r = g.vertices()[0].position.length();
        for v in g.vertices() {
            assert!((v.position.length() - r).abs() < 1e-5);
        }
    }

    #[test]
    fn icosahedron_faces_wind_outward() {
        let g = build_icosahedron();
        for f in g.faces() {
            let [a, b, c] = f.indices().map(|i| g.vertices()[i as usize].position);
            let n = (b - a).cross(c - a);
            assert!(n.dot(a + b + c) > 0.0, "face {f:?} faces inward");
        }
    }

    #[test]
    fn subdivided_vertex_count_formula() {
        for d in 0..4u32 {
            let g = build_icosahedron().subdivide(d);
            assert_eq!(g.vertex_count(), 10 * 4usize.pow(d) + 2, "depth {d}");
            assert_eq!(g.face_count(), 20 * 4usize.pow(d));
        }
    }

    #[test]
    fn subdivided_icosahedron_is_closed_manifold() {
        for d in 0..4 {
            assert_closed_manifold(&build_icosahedron().subdivide(d));
        }
    }

    #[test]
    fn subdivide_has_no_duplicate_positions() {
        let g = build_icosahedron().subdivide(2);
        let positions = g.positions();
        for (i, a) in positions.iter().enumerate() {
            for b in &positions[i + 1..] {
                assert!((*a - *b).length() > 1e-4);
            }
        }
    }

    #[test]
    fn subdivide_is_order_independent() {
        // Same faces, reversed traversal order.
        let forward = build_icosahedron();
        let mut reversed = Geometry::new();
        for v in forward.vertices() {
            reversed.add_vertex(v.position, v.uv);
        }
        for f in forward.faces().iter().rev() {
            reversed.add_face(f.a, f.b, f.c);
        }
        let a = forward.subdivide(2);
        let b = reversed.subdivide(2);
        assert_eq!(a.vertex_count(), b.vertex_count());
        for p in a.positions() {
            assert!(b.positions().iter().any(|q| (p - *q).length() < 1e-5));
        }
    }

    #[test]
    fn anchor_sphere_default_layout() {
        let g = build_anchor_sphere(1, 2.0);
        assert_eq!(g.vertex_count(), 42);
        for v in g.vertices() {
            assert!((v.position.length() - 2.0).abs() < 1e-5);
            assert!((v.normal.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn construction_is_deterministic() {
        assert_eq!(build_anchor_sphere(2, 2.0), build_anchor_sphere(2, 2.0));
        assert_eq!(build_disc(56, 1.0), build_disc(56, 1.0));
    }

    #[test]
    fn disc_steps_clamped_to_four() {
        let g = build_disc(2, 1.0);
        assert_eq!(g.vertex_count(), 5);
        assert_eq!(g.face_count(), 4);
    }

    #[test]
    fn disc_fan_layout() {
        let g = build_disc(56, 1.0);
        assert_eq!(g.vertex_count(), 57);
        assert_eq!(g.face_count(), 56);
        assert_eq!(g.faces()[0].indices(), [0, 1, 2]);
        assert_eq!(g.faces()[55].indices(), [0, 56, 1]);
        for f in g.faces() {
            assert_eq!(f.a, 0);
        }
    }

    #[test]
    fn disc_uvs_stay_in_unit_square() {
        let g = build_disc(12, 3.0);
        assert_eq!(g.vertices()[0].uv, Vec2::splat(0.5));
        for v in &g.vertices()[1..] {
            assert!(((v.uv - Vec2::splat(0.5)).length() - 0.5).abs() < 1e-5);
            assert!((v.position.length() - 3.0).abs() < 1e-5);
        }
        // First rim vertex at angle 0
        assert!((g.vertices()[1].uv - Vec2::new(1.0, 0.5)).length() < 1e-6);
    }

    #[test]
    fn disc_faces_toward_positive_z() {
        let g = build_disc(8, 1.0);
        for v in g.vertices() {
            assert!((v.normal - Vec3::Z).length() < 1e-5);
        }
    }
}
