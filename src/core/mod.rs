//! Core simulation: geometry, clock, round state and the frame loop.

pub mod clock;
pub mod constants;
pub mod game_state;
pub mod geometry;
pub mod tick;

pub use clock::{IntervalTimer, TickClock, TickEvent, TickFrame, Ticker};
pub use game_state::{GamePhase, GameState};
pub use geometry::Rect;
pub use tick::{process_frame, run, FrameOutcome, RunSummary};
