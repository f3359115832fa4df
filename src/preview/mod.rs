//! Terminal wireframe preview of a generated mesh.
//!
//! Debug aid only: nothing here touches the exported file.

mod canvas;
mod projection;

pub use canvas::{BrailleCanvas, Ink};
pub use projection::Projection;

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::prelude::*;
use std::io::{self, stdout};
use std::time::Duration;
use tracing::debug;

use crate::color::{ColorScheme, VERTEX_COLOR};
use crate::config::PreviewConfig;
use crate::mesh::RadialMesh;

/// Dots kept clear around the wireframe.
const MARGIN: usize = 2;

/// Whether the preview can run: enabled and attached to a terminal.
pub fn is_available(config: &PreviewConfig) -> bool {
    if !config.enabled {
        debug!("Preview disabled");
        return false;
    }
    if !stdout().is_tty() {
        debug!("Stdout is not a terminal, skipping preview");
        return false;
    }
    true
}

/// Show the wireframe until the user quits.
pub fn run(mesh: &RadialMesh, config: &PreviewConfig) -> Result<()> {
    // Setup terminal; the guard restores it however this returns
    enable_raw_mode()?;
    let _guard = TerminalGuard;
    execute!(stdout(), EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    run_app(&mut terminal, mesh, config)
}

/// Leaves raw mode and the alternate screen on drop.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            debug!("Failed to disable raw mode: {}", e);
        }
        if let Err(e) = restore_screen(&mut stdout()) {
            debug!("Failed to restore terminal: {}", e);
        }
    }
}

fn restore_screen(out: &mut impl io::Write) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, Show)
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mesh: &RadialMesh,
    config: &PreviewConfig,
) -> Result<()> {
    let mut color_scheme = config.color_scheme;

    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            let block = ratatui::widgets::Block::default()
                .style(Style::default().bg(Color::Reset));
            frame.render_widget(block, area);

            let plot_area = Rect::new(
                area.x,
                area.y + 1,
                area.width,
                area.height.saturating_sub(1),
            );
            draw_wireframe(frame, plot_area, mesh, &color_scheme, config.show_vertices);
            render_status(frame, area, mesh, &color_scheme);
        })?;

        // Redraw on resize or any key; nothing animates.
        match event::read()? {
            Event::Key(KeyEvent {
                kind: KeyEventKind::Release,
                ..
            }) => {}
            Event::Key(
                KeyEvent {
                    code: KeyCode::Char('q') | KeyCode::Esc,
                    ..
                }
                | KeyEvent {
                    code: KeyCode::Char('c'),
                    modifiers: KeyModifiers::CONTROL,
                    ..
                },
            ) => break,
            Event::Key(KeyEvent {
                code: KeyCode::Char('c'),
                ..
            }) => {
                color_scheme = color_scheme.next();
            }
            _ => {}
        }

        // Drain queued events so a held key does not lag the redraw.
        while event::poll(Duration::ZERO)? {
            event::read()?;
        }
    }

    Ok(())
}

/// Rasterize `mesh` into a braille canvas sized for `area`.
///
/// Every triangle is drawn as its closed outline; vertices get a marker on top.
pub fn rasterize(mesh: &RadialMesh, width: u16, height: u16, show_vertices: bool) -> BrailleCanvas {
    let mut canvas = BrailleCanvas::new(width as usize, height as usize);
    let Some(bounds) = mesh.bounds() else {
        return canvas;
    };
    let projection = Projection::fit(bounds, canvas.grid_w, canvas.grid_h, MARGIN);

    for (index, tri) in mesh.tris.iter().enumerate() {
        for (from, to) in mesh.edges_of(tri) {
            let (x0, y0) = projection.project(from);
            let (x1, y1) = projection.project(to);
            canvas.line(x0, y0, x1, y1, Ink::Edge(index));
        }
    }

    if show_vertices {
        for &v in &mesh.verts {
            let (x, y) = projection.project(v);
            canvas.marker(x, y);
        }
    }

    canvas
}

pub fn draw_wireframe(
    frame: &mut Frame,
    area: Rect,
    mesh: &RadialMesh,
    color_scheme: &ColorScheme,
    show_vertices: bool,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let canvas = rasterize(mesh, area.width, area.height, show_vertices);
    let count = mesh.triangle_count();
    canvas.render(frame, area, |ink| match ink {
        Ink::Edge(index) => color_scheme.triangle_color(index, count),
        Ink::Vertex => VERTEX_COLOR,
    });
}

fn render_status(frame: &mut Frame, area: Rect, mesh: &RadialMesh, color_scheme: &ColorScheme) {
    let status = format!(
        " {} verts, {} tris | [c]olor: {:?} | [q]uit ",
        mesh.vertex_count(),
        mesh.triangle_count(),
        color_scheme
    );

    for (i, ch) in status.chars().enumerate() {
        if i < area.width as usize {
            let cell = frame.buffer_mut().cell_mut((area.x + i as u16, area.y));
            if let Some(cell) = cell {
                cell.set_char(ch);
                cell.set_fg(Color::DarkGray);
            }
        }
    }
}
