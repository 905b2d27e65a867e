//! The round state and its Playing/GameOver state machine.

use crate::config::GameConfig;
use crate::core::clock::TickEvent;
use crate::world::{detect_collision, Bird, Bounds, Collision, PipeField, ScoreTracker};
use rand::Rng;

/// Current phase of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// The bird is flying; pipes scroll and the score grows.
    Playing,
    /// The bird crashed. Everything is frozen until restart.
    GameOver,
}

/// Complete round state, owned by the loop driver.
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    pub phase: GamePhase,
    pub bird: Bird,
    pub pipes: PipeField,
    pub score: ScoreTracker,
    pub bounds: Bounds,
    /// Cause of the most recent game over.
    pub last_collision: Option<Collision>,
    /// Rounds started so far, including the current one.
    pub rounds: u32,
}

impl GameState {
    /// Start the first round. `config` is expected to have passed
    /// [`GameConfig::validate`].
    pub fn new(config: GameConfig) -> Self {
        Self {
            phase: GamePhase::Playing,
            bird: Bird::new(&config),
            pipes: PipeField::new(),
            score: ScoreTracker::new(config.score_per_tick),
            bounds: Bounds::from_config(&config),
            last_collision: None,
            rounds: 1,
            config,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Apply one event from the tick batch. `Quit` is left to the driver.
    pub fn handle_event<R: Rng>(&mut self, event: TickEvent, rng: &mut R) {
        match (self.phase, event) {
            (GamePhase::Playing, TickEvent::Flap) => {
                self.bird.apply_impulse(self.config.flap_impulse);
            }
            (GamePhase::GameOver, TickEvent::Flap) => self.restart(),
            (GamePhase::Playing, TickEvent::SpawnPipe) => {
                self.pipes.spawn_pair(&self.config, rng);
            }
            (GamePhase::Playing, TickEvent::WingFrame) => self.bird.advance_wing_frame(),
            (GamePhase::GameOver, TickEvent::SpawnPipe | TickEvent::WingFrame) => {}
            (_, TickEvent::Quit) => {}
        }
    }

    /// Begin a fresh round: no pipes, bird at rest at the start, zero score.
    pub fn restart(&mut self) {
        self.pipes.clear();
        self.bird.reset();
        self.score.reset();
        self.last_collision = None;
        self.phase = GamePhase::Playing;
        self.rounds += 1;
        log::info!("round {} started", self.rounds);
    }

    /// Run `delta_ticks` simulation ticks, stopping at a crash.
    ///
    /// Returns the collision if this call ended the round. A no-op while
    /// GameOver.
    pub fn update(&mut self, delta_ticks: u32) -> Option<Collision> {
        for _ in 0..delta_ticks {
            if !self.is_playing() {
                break;
            }
            if let Some(collision) = self.step() {
                return Some(collision);
            }
        }
        None
    }

    /// One Playing tick: pipes, physics, collision, then score.
    fn step(&mut self) -> Option<Collision> {
        self.pipes.advance(1, self.config.pipe_speed);
        self.bird.integrate(1, self.config.gravity);

        let collision = detect_collision(&self.bird.hitbox(), self.pipes.rects(), &self.bounds);
        match collision {
            Some(cause) => {
                self.phase = GamePhase::GameOver;
                self.last_collision = Some(cause);
                log::info!(
                    "round {} over: {} with score {}",
                    self.rounds,
                    cause.describe(),
                    self.score.value()
                );
            }
            None => self.score.accumulate(1),
        }
        collision
    }
}
