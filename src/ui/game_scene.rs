//! Rasterises the play field onto terminal cells.

use crate::core::constants::{GROUND_SCROLL_PER_TICK, TILT_PER_VELOCITY};
use crate::core::game_state::GameState;
use crate::world::Bird;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Wing glyph per animation frame: up, down, up.
const WING_GLYPHS: [char; 3] = ['^', 'v', '^'];

/// Tilt (degrees) beyond which the bird is drawn climbing or diving.
const TILT_THRESHOLD: f64 = 9.0;

/// Width of one ground stripe in field units.
const GROUND_TILE: f64 = 20.0;

/// What occupies a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Sky,
    Pipe,
    Ground(char),
    Wing(char),
    Body(char),
}

/// Sprite rotation hint: positive while climbing.
pub fn bird_tilt(velocity: f64) -> f64 {
    -velocity * TILT_PER_VELOCITY
}

/// Body glyph for a tilt angle.
pub fn body_glyph(tilt: f64) -> char {
    if tilt >= TILT_THRESHOLD {
        '▲'
    } else if tilt <= -TILT_THRESHOLD {
        '▼'
    } else {
        '►'
    }
}

pub fn wing_glyph(wing_frame: usize) -> char {
    WING_GLYPHS[wing_frame % WING_GLYPHS.len()]
}

/// Ground scroll in field units, wrapping at the field width.
pub fn ground_offset(tick_index: u64, field_width: f64) -> f64 {
    if field_width <= 0.0 {
        return 0.0;
    }
    (tick_index as f64 * GROUND_SCROLL_PER_TICK) % field_width
}

/// Stripe glyph for the ground at field column `x`.
pub fn ground_glyph(x: f64, offset: f64) -> char {
    if ((x + offset) / GROUND_TILE).floor() as i64 % 2 == 0 {
        '▓'
    } else {
        '▒'
    }
}

/// Maps between field units and terminal cells.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
    pub field_width: f64,
    pub field_height: f64,
}

impl Viewport {
    pub fn new(area: Rect, field_width: f64, field_height: f64) -> Self {
        Self {
            cols: area.width,
            rows: area.height,
            field_width,
            field_height,
        }
    }

    /// Field coordinates at the center of a cell.
    pub fn cell_center(&self, col: u16, row: u16) -> (f64, f64) {
        (
            (col as f64 + 0.5) * self.field_width / self.cols as f64,
            (row as f64 + 0.5) * self.field_height / self.rows as f64,
        )
    }

    /// Cell containing a field point, if it is on screen.
    pub fn to_cell(&self, x: f64, y: f64) -> Option<(u16, u16)> {
        if self.cols == 0 || self.rows == 0 {
            return None;
        }
        let col = (x / self.field_width * self.cols as f64).floor();
        let row = (y / self.field_height * self.rows as f64).floor();
        if col < 0.0 || row < 0.0 || col >= self.cols as f64 || row >= self.rows as f64 {
            return None;
        }
        Some((col as u16, row as u16))
    }
}

/// Body and wing cells for the bird. The wing trails one cell behind.
fn bird_cells(bird: &Bird, view: &Viewport) -> Option<((u16, u16), Option<(u16, u16)>)> {
    let body = view.to_cell(bird.x, bird.y)?;
    let wing = body.0.checked_sub(1).map(|col| (col, body.1));
    Some((body, wing))
}

fn classify(state: &GameState, view: &Viewport, col: u16, row: u16, offset: f64) -> Cell {
    let (x, y) = view.cell_center(col, row);
    if y >= state.config.ground_top() {
        return Cell::Ground(ground_glyph(x, offset));
    }
    if state.pipes.rects().any(|r| r.contains_point(x, y)) {
        return Cell::Pipe;
    }
    Cell::Sky
}

/// Render pipes, ground, bird and the score line.
pub fn render_play_area(frame: &mut Frame, area: Rect, state: &GameState, tick_index: u64) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let view = Viewport::new(area, state.config.field_width, state.config.field_height);
    let offset = ground_offset(tick_index, state.config.field_width);
    let bird = bird_cells(&state.bird, &view);
    let body = body_glyph(bird_tilt(state.bird.velocity));
    let wing = wing_glyph(state.bird.wing_frame);

    let mut lines = Vec::with_capacity(area.height as usize);
    for row in 0..area.height {
        let mut spans = Vec::with_capacity(area.width as usize);
        for col in 0..area.width {
            let cell = match bird {
                Some((b, _)) if b == (col, row) => Cell::Body(body),
                Some((_, Some(w))) if w == (col, row) => Cell::Wing(wing),
                _ => classify(state, &view, col, row, offset),
            };
            spans.push(match cell {
                Cell::Sky => Span::raw(" "),
                Cell::Pipe => Span::styled("█", Style::default().fg(Color::Green)),
                Cell::Ground(c) => Span::styled(c.to_string(), Style::default().fg(Color::Yellow)),
                Cell::Wing(c) => Span::styled(c.to_string(), Style::default().fg(Color::White)),
                Cell::Body(c) => Span::styled(
                    c.to_string(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            });
        }
        lines.push(Line::from(spans));
    }
    frame.render_widget(Paragraph::new(lines), area);

    let score = Paragraph::new(Span::styled(
        state.score.value().to_string(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(score, Rect { height: 1, ..area });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn view() -> Viewport {
        Viewport::new(Rect::new(0, 0, 40, 30), 400.0, 600.0)
    }

    #[test]
    fn test_tilt_follows_velocity() {
        assert_eq!(bird_tilt(-7.0), 21.0);
        assert_eq!(bird_tilt(0.0), 0.0);
        assert_eq!(bird_tilt(4.0), -12.0);
    }

    #[test]
    fn test_body_glyph_thresholds() {
        assert_eq!(body_glyph(21.0), '▲');
        assert_eq!(body_glyph(0.0), '►');
        assert_eq!(body_glyph(-12.0), '▼');
    }

    #[test]
    fn test_wing_frames_cycle() {
        assert_eq!(wing_glyph(0), '^');
        assert_eq!(wing_glyph(1), 'v');
        assert_eq!(wing_glyph(2), '^');
        assert_eq!(wing_glyph(3), '^');
    }

    #[test]
    fn test_ground_offset_wraps() {
        assert_eq!(ground_offset(0, 400.0), 0.0);
        assert_eq!(ground_offset(399, 400.0), 399.0);
        assert_eq!(ground_offset(400, 400.0), 0.0);
        assert_eq!(ground_offset(1234, 400.0), 34.0);
    }

    #[test]
    fn test_ground_stripes_shift_with_offset() {
        assert_eq!(ground_glyph(0.0, 0.0), '▓');
        assert_eq!(ground_glyph(25.0, 0.0), '▒');
        assert_eq!(ground_glyph(0.0, 20.0), '▒');
    }

    #[test]
    fn test_viewport_maps_bird_start() {
        // 10 field units per column, 20 per row.
        assert_eq!(view().to_cell(100.0, 300.0), Some((10, 15)));
        assert_eq!(view().cell_center(10, 15), (105.0, 310.0));
    }

    #[test]
    fn test_viewport_rejects_offscreen() {
        assert_eq!(view().to_cell(100.0, -10.0), None);
        assert_eq!(view().to_cell(400.0, 10.0), None);
        assert_eq!(view().to_cell(-1.0, 10.0), None);
    }

    #[test]
    fn test_classify_ground_and_sky() {
        let state = GameState::new(GameConfig::default());
        let v = view();
        // Row 25 starts at y = 500.
        assert!(matches!(classify(&state, &v, 0, 25, 0.0), Cell::Ground(_)));
        assert_eq!(classify(&state, &v, 0, 24, 0.0), Cell::Sky);
    }

    #[test]
    fn test_wing_trails_body() {
        let state = GameState::new(GameConfig::default());
        let cells = bird_cells(&state.bird, &view());
        assert_eq!(cells, Some(((10, 15), Some((9, 15)))));
    }
}
