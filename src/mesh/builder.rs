use super::{GridAxes, RadialMesh, Triangle, Vertex};

/// Flat index of the vertex on ring `i`, ray `j` in a grid with
/// `angular_count` rays.
#[inline]
pub fn vertex_index(i: usize, j: usize, angular_count: usize) -> u32 {
    (i * angular_count + j) as u32
}

/// Expand the axes into a vertex grid and triangulate it.
pub fn build(axes: &GridAxes) -> RadialMesh {
    build_from(&axes.radii, &axes.angles)
}

/// Expand `radii` x `angles` into Cartesian vertices and triangulate the grid.
///
/// Vertices are row-major, ring outer and ray inner. Cells are visited in the
/// same order and each one emits two triangles back to back:
/// `(c00, c01, c11)` then `(c00, c11, c10)`, where the first digit steps the
/// ring and the second steps the ray.
///
/// Fewer than two rings or rays gives vertices but no triangles.
pub fn build_from(radii: &[f64], angles: &[f64]) -> RadialMesh {
    let rings = radii.len();
    let rays = angles.len();

    let mut verts: Vec<Vertex> = Vec::with_capacity(rings * rays);
    for &r in radii {
        for &theta in angles {
            verts.push([r * theta.cos(), r * theta.sin()]);
        }
    }

    let cells = rings.saturating_sub(1) * rays.saturating_sub(1);
    let mut tris: Vec<Triangle> = Vec::with_capacity(cells * 2);
    for i in 0..rings.saturating_sub(1) {
        for j in 0..rays.saturating_sub(1) {
            let c00 = vertex_index(i, j, rays);
            let c01 = vertex_index(i + 1, j, rays);
            let c10 = vertex_index(i, j + 1, rays);
            let c11 = vertex_index(i + 1, j + 1, rays);

            tris.push([c00, c01, c11]);
            tris.push([c00, c11, c10]);
        }
    }

    RadialMesh { verts, tris }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::MeshParams;
    use std::f64::consts::FRAC_PI_4;

    const EPS: f64 = 1e-9;

    fn assert_close(a: Vertex, b: Vertex) {
        assert!(
            (a[0] - b[0]).abs() < EPS && (a[1] - b[1]).abs() < EPS,
            "{:?} != {:?}",
            a,
            b
        );
    }

    #[test]
    fn two_by_two_mesh() {
        let params = MeshParams {
            radial_count: 2,
            angular_count: 2,
            field_of_view_degrees: 90.0,
            min_distance: 1.0,
            max_distance: 2.0,
        };
        let mesh = RadialMesh::generate(&params).unwrap();

        let (s, c) = (-FRAC_PI_4).sin_cos();
        let (s2, c2) = FRAC_PI_4.sin_cos();
        let expected = [[c, s], [c2, s2], [2.0 * c, 2.0 * s], [2.0 * c2, 2.0 * s2]];
        assert_eq!(mesh.verts.len(), 4);
        for (v, e) in mesh.verts.iter().zip(expected) {
            assert_close(*v, e);
        }
        assert_eq!(mesh.tris, vec![[0, 1, 3], [0, 3, 2]]);
    }

    #[test]
    fn counts_match_grid_size() {
        for (r, t) in [(2, 2), (10, 4), (3, 7), (16, 2)] {
            let params = MeshParams {
                radial_count: r,
                angular_count: t,
                ..MeshParams::default()
            };
            let mesh = RadialMesh::generate(&params).unwrap();
            assert_eq!(mesh.vertex_count(), r * t);
            assert_eq!(mesh.triangle_count(), 2 * (r - 1) * (t - 1));
        }
    }

    #[test]
    fn indices_stay_in_range() {
        let mesh = RadialMesh::generate(&MeshParams::default()).unwrap();
        let n = mesh.vertex_count() as u32;
        assert!(mesh.tris.iter().flatten().all(|&idx| idx < n));
    }

    #[test]
    fn vertices_round_trip_to_polar() {
        let params = MeshParams::default();
        let axes = GridAxes::sample(&params).unwrap();
        let mesh = build(&axes);
        let rays = params.angular_count;

        for (i, &r) in axes.radii.iter().enumerate() {
            for (j, &theta) in axes.angles.iter().enumerate() {
                let [x, y] = mesh.verts[vertex_index(i, j, rays) as usize];
                assert!((x.hypot(y) - r).abs() < EPS * r.max(1.0));
                assert!((y.atan2(x) - theta).abs() < EPS);
            }
        }
    }

    #[test]
    fn cells_emit_interleaved_pairs() {
        // 3 rings x 3 rays, vertex grid:
        //   0 1 2
        //   3 4 5
        //   6 7 8
        let mesh = build_from(&[1.0, 2.0, 4.0], &[-0.1, 0.0, 0.1]);
        assert_eq!(
            mesh.tris,
            vec![
                [0, 3, 4],
                [0, 4, 1],
                [1, 4, 5],
                [1, 5, 2],
                [3, 6, 7],
                [3, 7, 4],
                [4, 7, 8],
                [4, 8, 5],
            ]
        );
    }

    #[test]
    fn degenerate_axes_have_no_triangles() {
        let mesh = build_from(&[1.0], &[0.0, 0.5, 1.0]);
        assert_eq!(mesh.vertex_count(), 3);
        assert!(mesh.tris.is_empty());

        let mesh = build_from(&[1.0, 2.0], &[0.0]);
        assert_eq!(mesh.vertex_count(), 2);
        assert!(mesh.tris.is_empty());

        assert_eq!(build_from(&[], &[]), RadialMesh::default());
    }
}
