use crate::mesh::Vertex;

/// Maps mesh coordinates onto a braille dot grid with equal scale on both axes.
///
/// Braille dots are close enough to square (a 1:2 character cell holds 2x4
/// dots) that one scale factor keeps circles round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    scale: f64,
    origin: Vertex,
    offset: (f64, f64),
    grid_h: usize,
}

impl Projection {
    /// Fit the box `(min, max)` inside a `grid_w` x `grid_h` dot grid,
    /// leaving `margin` dots on every side and centring the slack.
    pub fn fit(bounds: (Vertex, Vertex), grid_w: usize, grid_h: usize, margin: usize) -> Self {
        let (min, max) = bounds;
        let avail_w = grid_w.saturating_sub(2 * margin + 1) as f64;
        let avail_h = grid_h.saturating_sub(2 * margin + 1) as f64;
        let span_w = (max[0] - min[0]).max(f64::EPSILON);
        let span_h = (max[1] - min[1]).max(f64::EPSILON);

        let scale = (avail_w / span_w).min(avail_h / span_h);
        let offset = (
            margin as f64 + (avail_w - span_w * scale) / 2.0,
            margin as f64 + (avail_h - span_h * scale) / 2.0,
        );

        Self {
            scale,
            origin: min,
            offset,
            grid_h,
        }
    }

    /// Dot coordinates for a mesh point. The y axis points up on screen.
    pub fn project(&self, v: Vertex) -> (isize, isize) {
        let x = self.offset.0 + (v[0] - self.origin[0]) * self.scale;
        let y = self.offset.1 + (v[1] - self.origin[1]) * self.scale;
        let gy = self.grid_h as f64 - 1.0 - y;
        (x.round() as isize, gy.round() as isize)
    }
}
