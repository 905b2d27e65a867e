//! Survival score.


/// Fractional survival score. Only the integer part is ever shown.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreTracker {
    total: f64,
    per_tick: f64,
}

impl ScoreTracker {
    pub fn new(per_tick: f64) -> Self {
        Self {
            total: 0.0,
            per_tick,
        }
    }

    pub fn accumulate(&mut self, delta_ticks: u32) {
        self.total += self.per_tick * delta_ticks as f64;
    }

    pub fn reset(&mut self) {
        self.total = 0.0;
    }

    /// Display value: the total truncated toward zero.
    pub fn value(&self) -> u32 {
        self.total as u32
    }

    pub fn total(&self) -> f64 {
        self.total
    }
}
