//! The frame loop: one batch of events and one simulation step per tick.
//!
//! The driver owns the [`GameState`] exclusively. Each iteration asks the
//! [`Ticker`] for a frame (the only blocking call), applies the frame's events
//! in order, runs the simulation for `delta_ticks`, then hands a read-only
//! view to the presenter.

use crate::core::clock::{TickEvent, TickFrame, Ticker};
use crate::core::game_state::GameState;
use rand::Rng;
use std::io;

/// What the driver should do after a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Quit,
}

/// Totals reported when the loop exits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Last tick index seen.
    pub ticks: u64,
    pub rounds: u32,
    pub last_score: u32,
}

/// Apply one frame to the state.
///
/// A `Quit` anywhere in the batch stops processing before the simulation
/// step, so the game never exits half-way through a tick.
pub fn process_frame<R: Rng>(state: &mut GameState, frame: &TickFrame, rng: &mut R) -> FrameOutcome {
    for &event in &frame.events {
        if event == TickEvent::Quit {
            return FrameOutcome::Quit;
        }
        state.handle_event(event, rng);
    }
    state.update(frame.delta_ticks);
    FrameOutcome::Continue
}

/// Run until the ticker delivers `Quit` or fails.
///
/// `present` is called after every completed frame.
pub fn run<T, R, P>(
    state: &mut GameState,
    ticker: &mut T,
    rng: &mut R,
    mut present: P,
) -> io::Result<RunSummary>
where
    T: Ticker,
    R: Rng,
    P: FnMut(&GameState, &TickFrame) -> io::Result<()>,
{
    let mut summary = RunSummary::default();

    loop {
        let frame = ticker.on_tick()?;
        summary.ticks = frame.tick_index;

        if process_frame(state, &frame, rng) == FrameOutcome::Quit {
            break;
        }
        present(state, &frame)?;
    }

    summary.rounds = state.rounds;
    summary.last_score = state.score.value();
    log::info!(
        "quit after {} ticks and {} rounds",
        summary.ticks,
        summary.rounds
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::core::game_state::GamePhase;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::VecDeque;

    struct QueueTicker {
        frames: VecDeque<TickFrame>,
    }

    impl Ticker for QueueTicker {
        fn on_tick(&mut self) -> io::Result<TickFrame> {
            self.frames
                .pop_front()
                .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "out of frames"))
        }
    }

    fn frame(tick_index: u64, events: Vec<TickEvent>) -> TickFrame {
        TickFrame {
            tick_index,
            delta_ticks: 1,
            events,
        }
    }

    #[test]
    fn test_quit_skips_simulation_step() {
        let mut state = GameState::new(GameConfig::default());
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let outcome = process_frame(
            &mut state,
            &frame(1, vec![TickEvent::Flap, TickEvent::Quit, TickEvent::SpawnPipe]),
            &mut rng,
        );
        assert_eq!(outcome, FrameOutcome::Quit);
        // Flap was applied, but neither the spawn nor the integration ran.
        assert_eq!(state.bird.velocity, -7.0);
        assert_eq!(state.bird.y, 300.0);
        assert!(state.pipes.is_empty());
    }

    #[test]
    fn test_events_apply_before_update() {
        let mut state = GameState::new(GameConfig::default());
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        process_frame(&mut state, &frame(1, vec![TickEvent::Flap]), &mut rng);
        assert_eq!(state.bird.velocity, -6.75);
        assert_eq!(state.bird.y, 293.25);
    }

    #[test]
    fn test_restart_and_spawn_in_same_frame() {
        let mut state = GameState::new(GameConfig::default());
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        state.phase = GamePhase::GameOver;
        process_frame(
            &mut state,
            &frame(1, vec![TickEvent::Flap, TickEvent::SpawnPipe]),
            &mut rng,
        );
        assert!(state.is_playing());
        assert_eq!(state.pipes.len(), 1);
    }

    #[test]
    fn test_run_presents_each_frame_until_quit() {
        let mut state = GameState::new(GameConfig::default());
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut ticker = QueueTicker {
            frames: (1..=5)
                .map(|i| frame(i, Vec::new()))
                .chain(std::iter::once(frame(6, vec![TickEvent::Quit])))
                .collect(),
        };

        let mut presented = Vec::new();
        let summary = run(&mut state, &mut ticker, &mut rng, |_, f| {
            presented.push(f.tick_index);
            Ok(())
        })
        .unwrap();

        assert_eq!(presented, vec![1, 2, 3, 4, 5]);
        assert_eq!(summary.ticks, 6);
        assert_eq!(summary.rounds, 1);
    }

    #[test]
    fn test_ticker_failure_propagates() {
        let mut state = GameState::new(GameConfig::default());
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut ticker = QueueTicker {
            frames: VecDeque::new(),
        };
        let err = run(&mut state, &mut ticker, &mut rng, |_, _| Ok(())).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_presenter_failure_propagates() {
        let mut state = GameState::new(GameConfig::default());
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut ticker = QueueTicker {
            frames: vec![frame(1, Vec::new())].into(),
        };
        let err = run(&mut state, &mut ticker, &mut rng, |_, _| {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal gone"))
        })
        .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
