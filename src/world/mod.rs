//! Entities of a round and the rules that act on them.

pub mod bird;
pub mod collision;
pub mod pipes;
pub mod score;

pub use bird::Bird;
pub use collision::{check_collision, detect_collision, Bounds, Collision};
pub use pipes::{PipeField, PipePair};
pub use score::ScoreTracker;
