//! The player's bird: vertical position, velocity and hitbox.

use crate::config::GameConfig;
use crate::core::constants::WING_FRAMES;
use crate::core::geometry::Rect;

/// The player-controlled actor.
///
/// Only the vertical coordinate moves; `x` stays at the start column for the
/// whole round.
#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    /// Horizontal center (fixed).
    pub x: f64,
    /// Vertical center. Grows downward.
    pub y: f64,
    /// Vertical velocity in units/tick (positive = downward).
    pub velocity: f64,
    pub width: f64,
    pub height: f64,
    /// Index into the wing animation sequence.
    pub wing_frame: usize,
    start_x: f64,
    start_y: f64,
}

impl Bird {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: config.bird_start_x,
            y: config.bird_start_y,
            velocity: 0.0,
            width: config.bird_width,
            height: config.bird_height,
            wing_frame: 0,
            start_x: config.bird_start_x,
            start_y: config.bird_start_y,
        }
    }

    /// Override the velocity with an upward flap. Does not accumulate.
    pub fn apply_impulse(&mut self, impulse: f64) {
        self.velocity = impulse;
    }

    /// Semi-implicit Euler: velocity picks up gravity before position moves.
    pub fn integrate(&mut self, delta_ticks: u32, gravity: f64) {
        for _ in 0..delta_ticks {
            self.velocity += gravity;
            self.y += self.velocity;
        }
    }

    /// Back to the start position at rest.
    pub fn reset(&mut self) {
        self.x = self.start_x;
        self.y = self.start_y;
        self.velocity = 0.0;
        self.wing_frame = 0;
    }

    /// Hitbox centred on the current position.
    pub fn hitbox(&self) -> Rect {
        Rect::from_center(self.x, self.y, self.width, self.height)
    }

    pub fn advance_wing_frame(&mut self) {
        self.wing_frame = (self.wing_frame + 1) % WING_FRAMES;
    }
}
