//! Flappy - Terminal side-scrolling reflex game
//!
//! The library holds the simulation so it can be driven by tests as well as
//! by the terminal binary.

pub mod config;
pub mod core;
pub mod input;
pub mod logging;
pub mod ui;
pub mod world;

pub use config::{ConfigStore, GameConfig};
pub use crate::core::{GamePhase, GameState, TickEvent, TickFrame, Ticker};
