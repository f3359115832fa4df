//! Radial mesh model: parameters, the sampled grid axes and the triangulated
//! vertex grid.
//!
//! Generation is a pure function of [`MeshParams`]:
//! sample the axes ([`GridAxes::sample`]), then expand and triangulate them
//! ([`builder::build`]). [`RadialMesh::generate`] does both.

pub mod builder;
pub mod sampler;

pub use sampler::GridAxes;

use serde::{Deserialize, Serialize};

use crate::error::{MeshError, MeshResult};

/// A 2-D vertex position `[x, y]`.
pub type Vertex = [f64; 2];

/// Three indices into [`RadialMesh::verts`].
pub type Triangle = [u32; 3];

/// Inputs for one generation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshParams {
    /// Number of radial sample rings.
    pub radial_count: usize,
    /// Number of angular sample rays.
    pub angular_count: usize,
    /// Total angular span in degrees, centred on zero.
    pub field_of_view_degrees: f64,
    pub min_distance: f64,
    pub max_distance: f64,
}

impl Default for MeshParams {
    fn default() -> Self {
        Self {
            radial_count: 10,
            angular_count: 4,
            field_of_view_degrees: 45.0,
            min_distance: 0.01,
            max_distance: 200.0,
        }
    }
}

impl MeshParams {
    /// Reject parameters that cannot produce a triangulated grid.
    ///
    /// The error names the first parameter that failed.
    pub fn validate(&self) -> MeshResult<()> {
        if self.radial_count < 2 {
            return Err(MeshError::invalid(
                "radial_count",
                format!("must be at least 2, got {}", self.radial_count),
            ));
        }
        if self.angular_count < 2 {
            return Err(MeshError::invalid(
                "angular_count",
                format!("must be at least 2, got {}", self.angular_count),
            ));
        }
        let fits = self
            .radial_count
            .checked_mul(self.angular_count)
            .is_some_and(|n| u32::try_from(n).is_ok());
        if !fits {
            return Err(MeshError::invalid(
                "radial_count",
                format!(
                    "{} x {} vertices cannot be addressed by 32-bit indices",
                    self.radial_count, self.angular_count
                ),
            ));
        }
        if !self.field_of_view_degrees.is_finite() || self.field_of_view_degrees <= 0.0 {
            return Err(MeshError::invalid(
                "field_of_view_degrees",
                format!("must be a positive number, got {}", self.field_of_view_degrees),
            ));
        }
        if !self.min_distance.is_finite() || self.min_distance <= 0.0 {
            return Err(MeshError::invalid(
                "min_distance",
                format!("must be a positive number, got {}", self.min_distance),
            ));
        }
        if !self.max_distance.is_finite() || self.max_distance <= 0.0 {
            return Err(MeshError::invalid(
                "max_distance",
                format!("must be a positive number, got {}", self.max_distance),
            ));
        }
        if self.min_distance >= self.max_distance {
            return Err(MeshError::invalid(
                "max_distance",
                format!(
                    "must be greater than min_distance ({} >= {})",
                    self.min_distance, self.max_distance
                ),
            ));
        }
        Ok(())
    }
}

/// Vertices and triangles of a radial mesh.
///
/// Field order matters: it is the key order of the exported JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RadialMesh {
    /// Row-major positions: vertex `i * angular_count + j` sits on ring `i`, ray `j`.
    pub verts: Vec<Vertex>,
    pub tris: Vec<Triangle>,
}

impl RadialMesh {
    /// Validate `params`, sample the grid and triangulate it.
    pub fn generate(params: &MeshParams) -> MeshResult<Self> {
        let axes = GridAxes::sample(params)?;
        Ok(builder::build(&axes))
    }

    pub fn vertex_count(&self) -> usize {
        self.verts.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.tris.len()
    }

    /// Axis-aligned bounding box as `(min, max)`, or `None` for an empty mesh.
    pub fn bounds(&self) -> Option<(Vertex, Vertex)> {
        let first = *self.verts.first()?;
        Some(self.verts.iter().fold((first, first), |(lo, hi), v| {
            (
                [lo[0].min(v[0]), lo[1].min(v[1])],
                [hi[0].max(v[0]), hi[1].max(v[1])],
            )
        }))
    }

    /// The closed outline of a triangle: `a -> b`, `b -> c`, `c -> a`.
    pub fn edges_of(&self, tri: &Triangle) -> [(Vertex, Vertex); 3] {
        let [a, b, c] = tri.map(|idx| self.verts[idx as usize]);
        [(a, b), (b, c), (c, a)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(r: usize, t: usize) -> MeshParams {
        MeshParams {
            radial_count: r,
            angular_count: t,
            ..MeshParams::default()
        }
    }

    fn rejected_name(p: MeshParams) -> &'static str {
        match p.validate() {
            Err(MeshError::InvalidParameter { name, .. }) => name,
            other => panic!("expected InvalidParameter, got {:?}", other),
        }
    }

    #[test]
    fn defaults_are_valid() {
        let p = MeshParams::default();
        assert_eq!(p.radial_count, 10);
        assert_eq!(p.angular_count, 4);
        assert_eq!(p.field_of_view_degrees, 45.0);
        assert_eq!(p.min_distance, 0.01);
        assert_eq!(p.max_distance, 200.0);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn single_ring_or_ray_is_rejected() {
        assert_eq!(rejected_name(params(1, 4)), "radial_count");
        assert_eq!(rejected_name(params(10, 1)), "angular_count");
        assert_eq!(rejected_name(params(0, 0)), "radial_count");
    }

    #[test]
    fn bad_distances_are_rejected() {
        let mut p = MeshParams::default();
        p.min_distance = 0.0;
        assert_eq!(rejected_name(p), "min_distance");

        p.min_distance = -1.0;
        assert_eq!(rejected_name(p), "min_distance");

        p.min_distance = f64::NAN;
        assert_eq!(rejected_name(p), "min_distance");

        p.min_distance = 5.0;
        p.max_distance = 5.0;
        assert_eq!(rejected_name(p), "max_distance");

        p.max_distance = 1.0;
        assert_eq!(rejected_name(p), "max_distance");

        p.max_distance = f64::INFINITY;
        assert_eq!(rejected_name(p), "max_distance");
    }

    #[test]
    fn non_positive_fov_is_rejected() {
        let mut p = MeshParams::default();
        p.field_of_view_degrees = 0.0;
        assert_eq!(rejected_name(p), "field_of_view_degrees");
        p.field_of_view_degrees = -45.0;
        assert_eq!(rejected_name(p), "field_of_view_degrees");
    }

    #[test]
    fn oversized_grid_is_rejected() {
        assert_eq!(rejected_name(params(1 << 20, 1 << 20)), "radial_count");
    }

    #[test]
    fn generate_rejects_before_building() {
        assert!(RadialMesh::generate(&params(1, 1)).is_err());
    }

    #[test]
    fn bounds_cover_all_vertices() {
        let mesh = RadialMesh::generate(&MeshParams::default()).unwrap();
        let (lo, hi) = mesh.bounds().unwrap();
        for v in &mesh.verts {
            assert!(v[0] >= lo[0] && v[0] <= hi[0]);
            assert!(v[1] >= lo[1] && v[1] <= hi[1]);
        }
        // Rays are symmetric about the x axis.
        assert!((lo[1] + hi[1]).abs() < 1e-9);
        assert!(RadialMesh::default().bounds().is_none());
    }

    #[test]
    fn edges_close_the_loop() {
        let mesh = RadialMesh::generate(&params(2, 2)).unwrap();
        let edges = mesh.edges_of(&mesh.tris[0]);
        assert_eq!(edges[0].0, edges[2].1);
        assert_eq!(edges[0].1, edges[1].0);
        assert_eq!(edges[1].1, edges[2].0);
    }
}
