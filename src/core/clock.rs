//! Fixed-rate tick clock and the per-tick event batch.
//!
//! Platform timers are replaced by tick counters: the pipe spawner and the
//! wing animation each own an [`IntervalTimer`] that fires after a whole
//! number of ticks. Input events gathered between ticks are queued with
//! [`TickClock::push`] and handed out, ahead of timer firings, in the next
//! [`TickFrame`].

use crate::config::GameConfig;
use std::io;
use std::time::{Duration, Instant};

/// A discrete signal delivered to the simulation at the start of a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// Leave the game between ticks.
    Quit,
    /// Space: flap while playing, restart after game over.
    Flap,
    /// Pipe spawn timer fired.
    SpawnPipe,
    /// Wing animation timer fired.
    WingFrame,
}

/// Everything the simulation needs for one loop iteration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickFrame {
    /// Total ticks elapsed since the clock started, including this frame.
    pub tick_index: u64,
    /// Ticks covered by this frame (1 unless the loop fell behind).
    pub delta_ticks: u32,
    /// Input events first, then timer firings.
    pub events: Vec<TickEvent>,
}

/// Source of tick frames. This is the only place the game loop may block.
pub trait Ticker {
    fn on_tick(&mut self) -> io::Result<TickFrame>;
}

/// Fires once every `interval` ticks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalTimer {
    interval: u32,
    elapsed: u32,
}

impl IntervalTimer {
    pub fn new(interval: u32) -> Self {
        Self {
            interval: interval.max(1),
            elapsed: 0,
        }
    }

    /// Count `delta_ticks` and return how many times the timer fired.
    pub fn advance(&mut self, delta_ticks: u32) -> u32 {
        self.elapsed += delta_ticks;
        let fired = self.elapsed / self.interval;
        self.elapsed %= self.interval;
        fired
    }
}

/// Paces the loop at the configured tick rate and produces [`TickFrame`]s.
#[derive(Debug, Clone)]
pub struct TickClock {
    tick_duration: Duration,
    next_deadline: Instant,
    tick_index: u64,
    max_catch_up: u32,
    spawn_timer: IntervalTimer,
    wing_timer: IntervalTimer,
    pending: Vec<TickEvent>,
}

impl TickClock {
    pub fn new(config: &GameConfig, now: Instant) -> Self {
        let tick_duration = config.tick_duration();
        Self {
            tick_duration,
            next_deadline: now + tick_duration,
            tick_index: 0,
            max_catch_up: config.max_catch_up_ticks.max(1),
            spawn_timer: IntervalTimer::new(config.spawn_interval_ticks()),
            wing_timer: IntervalTimer::new(config.wing_interval_ticks()),
            pending: Vec::new(),
        }
    }

    /// Queue an input event for the next frame.
    pub fn push(&mut self, event: TickEvent) {
        self.pending.push(event);
    }

    /// Time left before the next tick is due, or `None` if it is due now.
    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.next_deadline
            .checked_duration_since(now)
            .filter(|remaining| !remaining.is_zero())
    }

    /// Close the current tick at `now`.
    ///
    /// Deadlines missed since the last call are folded into `delta_ticks`,
    /// capped at `max_catch_up_ticks`; beyond that the schedule restarts from
    /// `now` instead of trying to replay the backlog.
    pub fn tick(&mut self, now: Instant) -> TickFrame {
        let overdue = now.saturating_duration_since(self.next_deadline);
        let missed = overdue.as_nanos() / self.tick_duration.as_nanos().max(1);
        let delta = 1 + missed.min(u32::MAX as u128 - 1) as u32;

        let delta = if delta > self.max_catch_up {
            log::warn!(
                "tick loop fell {} ticks behind, clamping to {}",
                delta,
                self.max_catch_up
            );
            self.next_deadline = now + self.tick_duration;
            self.max_catch_up
        } else {
            self.next_deadline += self.tick_duration * delta;
            delta
        };

        self.advance(delta)
    }

    /// Build the frame for `delta_ticks` ticks without consulting wall time.
    pub fn advance(&mut self, delta_ticks: u32) -> TickFrame {
        self.tick_index += delta_ticks as u64;

        let mut events = std::mem::take(&mut self.pending);
        for _ in 0..self.spawn_timer.advance(delta_ticks) {
            events.push(TickEvent::SpawnPipe);
        }
        for _ in 0..self.wing_timer.advance(delta_ticks) {
            events.push(TickEvent::WingFrame);
        }

        TickFrame {
            tick_index: self.tick_index,
            delta_ticks,
            events,
        }
    }

    pub fn tick_index(&self) -> u64 {
        self.tick_index
    }
}
