use ratatui::prelude::*;

/// Braille dot positions within a 2x4 cell:
/// (0,0)=0x01 (1,0)=0x08
/// (0,1)=0x02 (1,1)=0x10
/// (0,2)=0x04 (1,2)=0x20
/// (0,3)=0x40 (1,3)=0x80
pub const DOT_MAP: [[u8; 4]; 2] = [
    [0x01, 0x02, 0x04, 0x40],
    [0x08, 0x10, 0x20, 0x80],
];

/// What put a dot on the canvas. Decides the color of its character cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ink {
    /// Outline of the triangle with this index.
    Edge(usize),
    Vertex,
}

/// A canvas for sub-character braille rendering.
/// Each terminal character cell maps to a 2x4 grid of braille dots.
pub struct BrailleCanvas {
    grid: Vec<Option<Ink>>,
    pub grid_w: usize,
    pub grid_h: usize,
    char_w: usize,
    char_h: usize,
}

impl BrailleCanvas {
    /// Create a new braille canvas for the given character dimensions.
    pub fn new(char_w: usize, char_h: usize) -> Self {
        let grid_w = char_w * 2;
        let grid_h = char_h * 4;
        Self {
            grid: vec![None; grid_w * grid_h],
            grid_w,
            grid_h,
            char_w,
            char_h,
        }
    }

    /// Set a single dot on the braille grid (bounds-checked).
    /// Vertex markers are never overwritten by edges.
    #[inline]
    pub fn set(&mut self, gx: isize, gy: isize, ink: Ink) {
        if gx < 0 || gy < 0 || gx as usize >= self.grid_w || gy as usize >= self.grid_h {
            return;
        }
        let dot = &mut self.grid[gy as usize * self.grid_w + gx as usize];
        if *dot != Some(Ink::Vertex) {
            *dot = Some(ink);
        }
    }

    pub fn get(&self, gx: usize, gy: usize) -> Option<Ink> {
        if gx < self.grid_w && gy < self.grid_h {
            self.grid[gy * self.grid_w + gx]
        } else {
            None
        }
    }

    /// Draw a line using Bresenham's algorithm. Endpoints may lie off the canvas.
    pub fn line(&mut self, x0: isize, y0: isize, x1: isize, y1: isize, ink: Ink) {
        let (mut x0, mut y0) = (x0, y0);

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx: isize = if x0 < x1 { 1 } else { -1 };
        let sy: isize = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.set(x0, y0, ink);

            if x0 == x1 && y0 == y1 {
                break;
            }

            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// A small plus-shaped marker centred on a dot.
    pub fn marker(&mut self, gx: isize, gy: isize) {
        for (dx, dy) in [(0, 0), (-1, 0), (1, 0), (0, -1), (0, 1)] {
            self.set(gx + dx, gy + dy, Ink::Vertex);
        }
    }

    /// Braille glyph for character cell `(cx, cy)` and the ink that colors it.
    ///
    /// A vertex dot anywhere in the cell wins; otherwise the highest-numbered
    /// triangle drawn in the cell does, so later strokes sit on top.
    pub fn glyph(&self, cx: usize, cy: usize) -> Option<(char, Ink)> {
        let mut braille: u8 = 0;
        let mut ink: Option<Ink> = None;

        for (dx, col) in DOT_MAP.iter().enumerate() {
            for (dy, &bit) in col.iter().enumerate() {
                let Some(dot) = self.get(cx * 2 + dx, cy * 4 + dy) else {
                    continue;
                };
                braille |= bit;
                ink = Some(match (ink, dot) {
                    (Some(Ink::Vertex), _) | (_, Ink::Vertex) => Ink::Vertex,
                    (Some(Ink::Edge(a)), Ink::Edge(b)) => Ink::Edge(a.max(b)),
                    (None, edge) => edge,
                });
            }
        }

        let ch = char::from_u32(0x2800 + braille as u32)?;
        ink.map(|ink| (ch, ink))
    }

    /// Encode braille grid to characters and write to the frame buffer.
    /// `color_fn(ink)` returns the RGB color for a cell drawn with `ink`.
    pub fn render(&self, frame: &mut Frame, area: Rect, color_fn: impl Fn(Ink) -> (u8, u8, u8)) {
        for cy in 0..self.char_h.min(area.height as usize) {
            for cx in 0..self.char_w.min(area.width as usize) {
                let Some((ch, ink)) = self.glyph(cx, cy) else {
                    continue;
                };
                let (r, g, b) = color_fn(ink);
                let cell = frame
                    .buffer_mut()
                    .cell_mut((area.x + cx as u16, area.y + cy as u16));
                if let Some(cell) = cell {
                    cell.set_char(ch);
                    cell.set_fg(Color::Rgb(r, g, b));
                }
            }
        }
    }
}
