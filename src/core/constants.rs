// Tick and timing
pub const TICK_RATE_HZ: u32 = 60;
/// Fastest accepted tick rate; keeps the tick duration well above zero.
pub const MAX_TICK_RATE_HZ: u32 = 1000;
pub const PIPE_SPAWN_INTERVAL_MS: u64 = 1300;
pub const WING_FRAME_INTERVAL_MS: u64 = 200;
/// Upper bound on ticks reported in one frame after the loop falls behind.
pub const MAX_CATCH_UP_TICKS: u32 = 5;

// Playfield (units are field pixels)
pub const FIELD_WIDTH: f64 = 400.0;
pub const FIELD_HEIGHT: f64 = 600.0;
pub const GROUND_HEIGHT: f64 = 100.0;
/// How far the bird may fly above the top edge before the round ends.
pub const CEILING_ALLOWANCE: f64 = 50.0;

// Bird
pub const BIRD_START_X: f64 = 100.0;
pub const BIRD_START_Y: f64 = FIELD_HEIGHT / 2.0;
pub const BIRD_WIDTH: f64 = 34.0;
pub const BIRD_HEIGHT: f64 = 24.0;
pub const GRAVITY: f64 = 0.25;
pub const FLAP_IMPULSE: f64 = -7.0;
/// Wing sprite sequence length (up, down, up).
pub const WING_FRAMES: usize = 3;
/// Degrees of sprite tilt per unit of vertical velocity.
pub const TILT_PER_VELOCITY: f64 = 3.0;

// Pipes
pub const PIPE_WIDTH: f64 = 70.0;
pub const PIPE_HEIGHT: f64 = 400.0;
pub const PIPE_GAP: f64 = 160.0;
pub const PIPE_SPEED: f64 = 3.0;
pub const GAP_CENTER_MIN: i32 = 180;
pub const GAP_CENTER_MAX: i32 = 420;

// Score
pub const SCORE_PER_TICK: f64 = 0.01;

// Ground strip scroll (presentation only)
pub const GROUND_SCROLL_PER_TICK: f64 = 1.0;
