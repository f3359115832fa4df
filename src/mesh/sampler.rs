use super::MeshParams;
use crate::error::MeshResult;

/// The two 1-D axes of the polar grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GridAxes {
    /// Ring radii, log-spaced from `min_distance` to `max_distance`.
    pub radii: Vec<f64>,
    /// Ray angles in radians, evenly spaced across the field of view.
    pub angles: Vec<f64>,
}

impl GridAxes {
    /// Validate `params` and sample both axes.
    pub fn sample(params: &MeshParams) -> MeshResult<Self> {
        params.validate()?;
        Ok(Self {
            radii: radii(params),
            angles: angles(params),
        })
    }
}

/// `radial_count` radii with a constant ratio between neighbours.
pub fn radii(params: &MeshParams) -> Vec<f64> {
    log_space(params.min_distance, params.max_distance, params.radial_count)
}

/// `angular_count` angles in radians from `-fov/2` to `+fov/2`.
pub fn angles(params: &MeshParams) -> Vec<f64> {
    let half = params.field_of_view_degrees / 2.0;
    lin_space(-half, half, params.angular_count)
        .into_iter()
        .map(f64::to_radians)
        .collect()
}

/// `n` samples from `start` to `end` inclusive, uniform in log space.
///
/// `start` and `end` must be positive. Endpoints are returned exactly.
/// Interpolates the logarithms so `end / start` never has to be representable.
pub fn log_space(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let (ln_start, ln_end) = (start.ln(), end.ln());
            let last = (n - 1) as f64;
            (0..n)
                .map(|k| match k {
                    0 => start,
                    k if k == n - 1 => end,
                    k => (ln_start + (ln_end - ln_start) * k as f64 / last).exp(),
                })
                .collect()
        }
    }
}

/// `n` samples from `start` to `end` inclusive, uniformly spaced.
///
/// Endpoints are returned exactly.
pub fn lin_space(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|k| if k == n - 1 { end } else { start + step * k as f64 })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_4;

    const EPS: f64 = 1e-9;

    #[test]
    fn radii_hit_both_distances() {
        let p = MeshParams::default();
        let r = radii(&p);
        assert_eq!(r.len(), 10);
        assert_eq!(r[0], 0.01);
        assert_eq!(r[9], 200.0);
    }

    #[test]
    fn radii_have_constant_ratio() {
        let r = radii(&MeshParams::default());
        let ratio = r[1] / r[0];
        for pair in r.windows(2) {
            assert!((pair[1] / pair[0] - ratio).abs() < EPS * ratio);
        }
        // (200 / 0.01) ^ (1/9)
        assert!((ratio - 20_000f64.powf(1.0 / 9.0)).abs() < EPS);
    }

    #[test]
    fn angles_span_fov_uniformly() {
        let p = MeshParams::default();
        let a = angles(&p);
        let half = 22.5f64.to_radians();
        assert_eq!(a.len(), 4);
        assert!((a[0] + half).abs() < EPS);
        assert!((a[3] - half).abs() < EPS);

        let step = a[1] - a[0];
        for pair in a.windows(2) {
            assert!((pair[1] - pair[0] - step).abs() < EPS);
        }
    }

    #[test]
    fn two_by_two_axes() {
        let p = MeshParams {
            radial_count: 2,
            angular_count: 2,
            field_of_view_degrees: 90.0,
            min_distance: 1.0,
            max_distance: 2.0,
        };
        let axes = GridAxes::sample(&p).unwrap();
        assert_eq!(axes.radii, vec![1.0, 2.0]);
        assert!((axes.angles[0] + FRAC_PI_4).abs() < EPS);
        assert!((axes.angles[1] - FRAC_PI_4).abs() < EPS);
    }

    #[test]
    fn extreme_distance_ratio_stays_finite() {
        let p = MeshParams {
            radial_count: 3,
            min_distance: 1e-300,
            max_distance: 1e300,
            ..MeshParams::default()
        };
        assert!(p.validate().is_ok());

        let r = radii(&p);
        assert!(r.iter().all(|v| v.is_finite()), "{:?}", r);
        assert_eq!(r[0], 1e-300);
        assert!((r[1] - 1.0).abs() < 1e-9);
        assert_eq!(r[2], 1e300);
    }

    #[test]
    fn sample_validates_first() {
        let p = MeshParams {
            min_distance: 0.0,
            ..MeshParams::default()
        };
        assert!(GridAxes::sample(&p).is_err());
    }

    #[test]
    fn short_ranges() {
        assert!(lin_space(0.0, 1.0, 0).is_empty());
        assert_eq!(lin_space(3.0, 7.0, 1), vec![3.0]);
        assert_eq!(lin_space(0.0, 1.0, 3), vec![0.0, 0.5, 1.0]);
        assert_eq!(log_space(1.0, 100.0, 1), vec![1.0]);

        let l = log_space(1.0, 100.0, 3);
        assert_eq!(l[0], 1.0);
        assert!((l[1] - 10.0).abs() < EPS);
        assert_eq!(l[2], 100.0);
    }
}
