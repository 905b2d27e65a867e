//! Pipe obstacles: spawning, scrolling and culling.

use crate::config::GameConfig;
use crate::core::geometry::Rect;
use rand::Rng;

/// A top and bottom pipe sharing one gap.
#[derive(Debug, Clone, PartialEq)]
pub struct PipePair {
    pub top: Rect,
    pub bottom: Rect,
    /// Y of the bottom pipe's top edge.
    pub gap_center: i32,
}

impl PipePair {
    /// Build a pair whose gap ends at `gap_center`, centred horizontally on `x`.
    pub fn new(x: f64, gap_center: i32, config: &GameConfig) -> Self {
        let center = gap_center as f64;
        Self {
            bottom: Rect::from_midtop(x, center, config.pipe_width, config.pipe_height),
            top: Rect::from_midbottom(
                x,
                center - config.pipe_gap,
                config.pipe_width,
                config.pipe_height,
            ),
            gap_center,
        }
    }

    /// Rightmost edge of the pair.
    pub fn right(&self) -> f64 {
        self.top.right().max(self.bottom.right())
    }

    pub fn rects(&self) -> [&Rect; 2] {
        [&self.top, &self.bottom]
    }
}

/// Live pipes in spawn order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipeField {
    pub pairs: Vec<PipePair>,
}

impl PipeField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a pair just past the right edge with a random gap position.
    pub fn spawn_pair<R: Rng>(&mut self, config: &GameConfig, rng: &mut R) -> &PipePair {
        let gap_center = rng.gen_range(config.gap_center_min..=config.gap_center_max);
        self.pairs
            .push(PipePair::new(config.pipe_spawn_x(), gap_center, config));
        log::debug!("spawned pipe pair with gap center {}", gap_center);
        &self.pairs[self.pairs.len() - 1]
    }

    /// Scroll every pipe left, then drop pairs that have fully left the field.
    pub fn advance(&mut self, delta_ticks: u32, speed: f64) {
        let dx = -speed * delta_ticks as f64;
        for pair in &mut self.pairs {
            pair.top.translate_x(dx);
            pair.bottom.translate_x(dx);
        }
        self.pairs.retain(|pair| pair.right() > 0.0);
    }

    pub fn clear(&mut self) {
        self.pairs.clear();
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Every pipe rectangle, in spawn order (top before bottom).
    pub fn rects(&self) -> impl Iterator<Item = &Rect> {
        self.pairs.iter().flat_map(|pair| pair.rects())
    }
}
