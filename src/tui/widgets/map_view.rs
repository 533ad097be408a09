//! World map with a movable cursor; the terminal stand-in for clicking a map.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::Line;
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine, Map, MapResolution, Points};
use ratatui::widgets::{Block, Borders};

use crate::model::{Position, Trip};

/// Cursor step in degrees.
const STEP: f64 = 1.0;
/// Cursor step in degrees when Shift is held.
const LARGE_STEP: f64 = 10.0;
/// Half-length of the cursor cross arms, in degrees.
const CURSOR_ARM: f64 = 3.0;

/// Direction to move the map cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// State of the map panel.
#[derive(Debug, Clone, Default)]
pub struct MapState {
    cursor: Position,
}

impl MapState {
    /// Creates a map with the cursor at `cursor`.
    pub fn new(cursor: Position) -> Self {
        Self { cursor }
    }

    /// Returns the position under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Moves the cursor one step (or a large step) in `direction`.
    pub fn move_cursor(&mut self, direction: Direction, large: bool) {
        let step = if large { LARGE_STEP } else { STEP };
        let (d_lat, d_lng) = match direction {
            Direction::Up => (step, 0.0),
            Direction::Down => (-step, 0.0),
            Direction::Left => (0.0, -step),
            Direction::Right => (0.0, step),
        };
        self.cursor = self.cursor.moved_by(d_lat, d_lng);
    }

    /// Jumps the cursor to `position`.
    pub fn fly_to(&mut self, position: Position) {
        self.cursor = position;
    }
}

/// Renders the world outline, saved trips as yellow dots, and the cursor as a red cross.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_map(state: &MapState, trips: &[Trip], frame: &mut Frame, area: Rect) {
    let cursor = state.cursor();
    let visited: Vec<(f64, f64)> = trips
        .iter()
        .map(|t| (t.position.lng, t.position.lat))
        .collect();

    let block = Block::default()
        .title(" Map ")
        .title_bottom(Line::from(format!(
            " {cursor}  ←↑↓→ move  Shift: faster  Ctrl+P: pin "
        )))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([-180.0, 180.0])
        .y_bounds([-90.0, 90.0])
        .paint(|ctx| {
            ctx.draw(&Map {
                color: Color::Green,
                resolution: MapResolution::High,
            });
            ctx.layer();
            ctx.draw(&Points {
                coords: &visited,
                color: Color::Yellow,
            });
            ctx.draw(&CanvasLine::new(
                cursor.lng - CURSOR_ARM,
                cursor.lat,
                cursor.lng + CURSOR_ARM,
                cursor.lat,
                Color::Red,
            ));
            ctx.draw(&CanvasLine::new(
                cursor.lng,
                cursor.lat - CURSOR_ARM,
                cursor.lng,
                cursor.lat + CURSOR_ARM,
                Color::Red,
            ));
        });
    frame.render_widget(canvas, area);
}
