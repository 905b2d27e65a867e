//! Round-ending collision rules.
//!
//! Everything here is a pure query over the current positions; the state
//! machine decides what to do with the answer.

use crate::config::GameConfig;
use crate::core::geometry::Rect;

/// Vertical limits of the playable band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// The bird dies once its top edge is at or above this y.
    pub ceiling: f64,
    /// The bird dies once its bottom edge is at or below this y (ground top).
    pub ground: f64,
}

impl Bounds {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            ceiling: -config.ceiling_allowance,
            ground: config.ground_top(),
        }
    }
}

/// What ended the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    Pipe,
    Ceiling,
    Ground,
}

impl Collision {
    pub fn describe(&self) -> &'static str {
        match self {
            Collision::Pipe => "hit a pipe",
            Collision::Ceiling => "flew off the top",
            Collision::Ground => "hit the ground",
        }
    }
}

/// First rule the hitbox violates, if any. Pipes are checked before bounds.
pub fn detect_collision<'a, I>(hitbox: &Rect, pipes: I, bounds: &Bounds) -> Option<Collision>
where
    I: IntoIterator<Item = &'a Rect>,
{
    if pipes.into_iter().any(|pipe| hitbox.intersects(pipe)) {
        return Some(Collision::Pipe);
    }
    if hitbox.top() <= bounds.ceiling {
        return Some(Collision::Ceiling);
    }
    if hitbox.bottom() >= bounds.ground {
        return Some(Collision::Ground);
    }
    None
}

/// Returns true while the bird is still alive.
pub fn check_collision<'a, I>(hitbox: &Rect, pipes: I, bounds: &Bounds) -> bool
where
    I: IntoIterator<Item = &'a Rect>,
{
    detect_collision(hitbox, pipes, bounds).is_none()
}
