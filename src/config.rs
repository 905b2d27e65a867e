//! Tunable game parameters, loaded from JSON with built-in defaults.
//!
//! Every field falls back to the built-in default, so a config file only
//! needs to list what it changes. A config is validated once at startup; an
//! invalid one never reaches the simulation.

use crate::core::constants::*;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE_NAME: &str = "config.json";
const LOG_FILE_NAME: &str = "flappy.log";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // ── Field ─────────────────────────────────────────────────────
    pub field_width: f64,
    pub field_height: f64,
    /// Height of the ground strip at the bottom of the field.
    pub ground_height: f64,
    /// Distance above the top edge the bird may reach before dying.
    pub ceiling_allowance: f64,

    // ── Bird ──────────────────────────────────────────────────────
    pub bird_start_x: f64,
    pub bird_start_y: f64,
    pub bird_width: f64,
    pub bird_height: f64,
    /// Velocity added every tick (positive = downward).
    pub gravity: f64,
    /// Velocity set by a flap (negative = upward).
    pub flap_impulse: f64,

    // ── Pipes ─────────────────────────────────────────────────────
    pub pipe_width: f64,
    pub pipe_height: f64,
    /// Vertical clearance between the top and bottom pipe.
    pub pipe_gap: f64,
    /// Leftward movement per tick.
    pub pipe_speed: f64,
    pub gap_center_min: i32,
    pub gap_center_max: i32,

    // ── Timing ────────────────────────────────────────────────────
    pub tick_rate_hz: u32,
    pub pipe_spawn_interval_ms: u64,
    pub wing_frame_interval_ms: u64,
    pub max_catch_up_ticks: u32,

    // ── Score ─────────────────────────────────────────────────────
    pub score_per_tick: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            ground_height: GROUND_HEIGHT,
            ceiling_allowance: CEILING_ALLOWANCE,

            bird_start_x: BIRD_START_X,
            bird_start_y: BIRD_START_Y,
            bird_width: BIRD_WIDTH,
            bird_height: BIRD_HEIGHT,
            gravity: GRAVITY,
            flap_impulse: FLAP_IMPULSE,

            pipe_width: PIPE_WIDTH,
            pipe_height: PIPE_HEIGHT,
            pipe_gap: PIPE_GAP,
            pipe_speed: PIPE_SPEED,
            gap_center_min: GAP_CENTER_MIN,
            gap_center_max: GAP_CENTER_MAX,

            tick_rate_hz: TICK_RATE_HZ,
            pipe_spawn_interval_ms: PIPE_SPAWN_INTERVAL_MS,
            wing_frame_interval_ms: WING_FRAME_INTERVAL_MS,
            max_catch_up_ticks: MAX_CATCH_UP_TICKS,

            score_per_tick: SCORE_PER_TICK,
        }
    }
}

impl GameConfig {
    /// Top edge of the ground strip.
    pub fn ground_top(&self) -> f64 {
        self.field_height - self.ground_height
    }

    /// Horizontal center at which new pipes appear, just past the right edge.
    pub fn pipe_spawn_x(&self) -> f64 {
        self.field_width + self.pipe_width
    }

    pub fn tick_duration(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate_hz.max(1)
    }

    pub fn spawn_interval_ticks(&self) -> u32 {
        self.ms_to_ticks(self.pipe_spawn_interval_ms)
    }

    pub fn wing_interval_ticks(&self) -> u32 {
        self.ms_to_ticks(self.wing_frame_interval_ms)
    }

    /// Convert a millisecond interval to whole ticks (rounded, never zero).
    fn ms_to_ticks(&self, ms: u64) -> u32 {
        let ticks = (ms as f64 * self.tick_rate_hz as f64 / 1000.0).round();
        (ticks as u32).max(1)
    }

    /// Check that the parameters describe a playable field.
    ///
    /// Returns a human-readable description of the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        let finite = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("ground_height", self.ground_height),
            ("ceiling_allowance", self.ceiling_allowance),
            ("bird_start_x", self.bird_start_x),
            ("bird_start_y", self.bird_start_y),
            ("bird_width", self.bird_width),
            ("bird_height", self.bird_height),
            ("gravity", self.gravity),
            ("flap_impulse", self.flap_impulse),
            ("pipe_width", self.pipe_width),
            ("pipe_height", self.pipe_height),
            ("pipe_gap", self.pipe_gap),
            ("pipe_speed", self.pipe_speed),
            ("score_per_tick", self.score_per_tick),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(format!("{} must be a finite number (got {})", name, value));
            }
        }

        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("bird_width", self.bird_width),
            ("bird_height", self.bird_height),
            ("pipe_width", self.pipe_width),
            ("pipe_height", self.pipe_height),
            ("pipe_gap", self.pipe_gap),
            ("pipe_speed", self.pipe_speed),
            ("score_per_tick", self.score_per_tick),
        ];
        for (name, value) in positive {
            if value <= 0.0 {
                return Err(format!("{} must be greater than zero (got {})", name, value));
            }
        }

        if self.ground_height < 0.0 || self.ground_height >= self.field_height {
            return Err(format!(
                "ground_height {} must be between 0 and field_height {}",
                self.ground_height, self.field_height
            ));
        }
        if self.ceiling_allowance < 0.0 {
            return Err(format!(
                "ceiling_allowance must not be negative (got {})",
                self.ceiling_allowance
            ));
        }
        if self.gravity < 0.0 {
            return Err(format!("gravity must not be negative (got {})", self.gravity));
        }
        if self.flap_impulse >= 0.0 {
            return Err(format!(
                "flap_impulse must be negative (upward), got {}",
                self.flap_impulse
            ));
        }

        // Gap placement
        if self.gap_center_min > self.gap_center_max {
            return Err(format!(
                "gap_center_min {} is above gap_center_max {}",
                self.gap_center_min, self.gap_center_max
            ));
        }
        if self.pipe_gap >= self.ground_top() {
            return Err(format!(
                "pipe_gap {} does not fit above the ground at {}",
                self.pipe_gap,
                self.ground_top()
            ));
        }
        let highest_gap_top = self.gap_center_min as f64 - self.pipe_gap;
        if highest_gap_top < 0.0 {
            return Err(format!(
                "gap_center_min {} with pipe_gap {} puts the gap above the field",
                self.gap_center_min, self.pipe_gap
            ));
        }
        if self.gap_center_max as f64 > self.ground_top() {
            return Err(format!(
                "gap_center_max {} is below the ground at {}",
                self.gap_center_max,
                self.ground_top()
            ));
        }
        if self.gap_center_max as f64 - self.pipe_gap - self.pipe_height > 0.0 {
            return Err(format!(
                "pipe_height {} leaves a hole above the top pipe",
                self.pipe_height
            ));
        }
        if self.gap_center_min as f64 + self.pipe_height < self.ground_top() {
            return Err(format!(
                "pipe_height {} leaves a hole above the ground under the bottom pipe",
                self.pipe_height
            ));
        }

        // Bird placement
        if self.bird_height >= self.pipe_gap {
            return Err(format!(
                "bird_height {} does not fit through pipe_gap {}",
                self.bird_height, self.pipe_gap
            ));
        }
        let half_height = self.bird_height / 2.0;
        if self.bird_start_y - half_height <= -self.ceiling_allowance
            || self.bird_start_y + half_height >= self.ground_top()
        {
            return Err(format!(
                "bird_start_y {} starts the bird outside the playable band",
                self.bird_start_y
            ));
        }
        if self.bird_start_x < 0.0 || self.bird_start_x > self.field_width {
            return Err(format!(
                "bird_start_x {} is outside the field width {}",
                self.bird_start_x, self.field_width
            ));
        }

        // Timing
        if self.tick_rate_hz == 0 || self.tick_rate_hz > MAX_TICK_RATE_HZ {
            return Err(format!(
                "tick_rate_hz must be between 1 and {} (got {})",
                MAX_TICK_RATE_HZ, self.tick_rate_hz
            ));
        }
        if self.pipe_spawn_interval_ms == 0 {
            return Err("pipe_spawn_interval_ms must be greater than zero".to_string());
        }
        if self.wing_frame_interval_ms == 0 {
            return Err("wing_frame_interval_ms must be greater than zero".to_string());
        }
        if self.max_catch_up_ticks == 0 {
            return Err("max_catch_up_ticks must be at least 1".to_string());
        }

        Ok(())
    }
}

/// Locates, reads and writes the configuration file.
pub struct ConfigStore {
    config_path: PathBuf,
    log_path: PathBuf,
}

impl ConfigStore {
    /// Resolve the platform config and data directories for the game.
    ///
    /// `override_path` replaces the config file location (e.g. `--config`).
    pub fn new(override_path: Option<PathBuf>) -> io::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "flappy").ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine config directory",
            )
        })?;

        let config_path =
            override_path.unwrap_or_else(|| project_dirs.config_dir().join(CONFIG_FILE_NAME));
        let log_path = project_dirs.data_dir().join(LOG_FILE_NAME);

        Ok(Self {
            config_path,
            log_path,
        })
    }

    /// Store rooted at explicit paths.
    pub fn at(config_path: PathBuf, log_path: PathBuf) -> Self {
        Self {
            config_path,
            log_path,
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    /// Load and validate the config. A missing file yields the defaults.
    pub fn load(&self) -> io::Result<GameConfig> {
        let config = if self.config_path.exists() {
            let json = fs::read_to_string(&self.config_path)?;
            parse_config(&json)?
        } else {
            GameConfig::default()
        };

        config.validate().map_err(|msg| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{}: {}", self.config_path.display(), msg),
            )
        })?;

        Ok(config)
    }

    /// Write `config` as pretty JSON, creating parent directories.
    pub fn save(&self, config: &GameConfig) -> io::Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&self.config_path, json)
    }
}

/// Parse a (possibly partial) JSON config. Missing fields take defaults.
pub fn parse_config(json: &str) -> io::Result<GameConfig> {
    serde_json::from_str(json).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> ConfigStore {
        let dir = std::env::temp_dir().join(format!(
            "flappy_config_test_{}_{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        ConfigStore::at(dir.join("config.json"), dir.join("flappy.log"))
    }

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_derived_tick_values() {
        let config = GameConfig::default();
        assert_eq!(config.spawn_interval_ticks(), 78);
        assert_eq!(config.wing_interval_ticks(), 12);
        assert_eq!(config.ground_top(), 500.0);
        assert_eq!(config.pipe_spawn_x(), 470.0);
        assert_eq!(config.tick_duration(), Duration::from_nanos(16_666_666));
    }

    #[test]
    fn test_interval_never_rounds_to_zero() {
        let config = GameConfig {
            wing_frame_interval_ms: 1,
            ..GameConfig::default()
        };
        assert_eq!(config.wing_interval_ticks(), 1);
    }

    #[test]
    fn test_gap_larger_than_field_rejected() {
        let config = GameConfig {
            pipe_gap: 700.0,
            ..GameConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.contains("pipe_gap"));
    }

    #[test]
    fn test_gap_range_inverted_rejected() {
        let config = GameConfig {
            gap_center_min: 400,
            gap_center_max: 200,
            ..GameConfig::default()
        };
        assert!(config.validate().unwrap_err().contains("gap_center_min"));
    }

    #[test]
    fn test_gap_above_field_rejected() {
        let config = GameConfig {
            gap_center_min: 100,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_gap_center_below_ground_rejected() {
        let config = GameConfig {
            gap_center_max: 550,
            ..GameConfig::default()
        };
        assert!(config.validate().unwrap_err().contains("gap_center_max"));
    }

    #[test]
    fn test_short_pipes_rejected() {
        let config = GameConfig {
            pipe_height: 100.0,
            ..GameConfig::default()
        };
        assert!(config.validate().unwrap_err().contains("pipe_height"));
    }

    #[test]
    fn test_upward_gravity_and_downward_flap_rejected() {
        let config = GameConfig {
            gravity: -1.0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            flap_impulse: 2.0,
            ..GameConfig::default()
        };
        assert!(config.validate().unwrap_err().contains("flap_impulse"));
    }

    #[test]
    fn test_non_finite_rejected() {
        let config = GameConfig {
            gravity: f64::NAN,
            ..GameConfig::default()
        };
        assert!(config.validate().unwrap_err().contains("finite"));
    }

    #[test]
    fn test_bird_starting_in_ground_rejected() {
        let config = GameConfig {
            bird_start_y: 495.0,
            ..GameConfig::default()
        };
        assert!(config.validate().unwrap_err().contains("bird_start_y"));
    }

    #[test]
    fn test_zero_tick_rate_rejected() {
        let config = GameConfig {
            tick_rate_hz: 0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_huge_tick_rate_rejected() {
        let config = GameConfig {
            tick_rate_hz: 2_000_000_000,
            ..GameConfig::default()
        };
        assert!(config.validate().unwrap_err().contains("tick_rate_hz"));

        let fastest = GameConfig {
            tick_rate_hz: MAX_TICK_RATE_HZ,
            ..GameConfig::default()
        };
        assert!(!fastest.tick_duration().is_zero());
        assert_eq!(fastest.validate(), Ok(()));
    }

    #[test]
    fn test_bird_taller_than_gap_rejected() {
        let config = GameConfig {
            bird_height: 200.0,
            ..GameConfig::default()
        };
        assert!(config.validate().unwrap_err().contains("bird_height"));

        let exact = GameConfig {
            bird_height: 160.0,
            ..GameConfig::default()
        };
        assert!(exact.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = parse_config(r#"{ "gravity": 0.5, "pipe_gap": 180.0 }"#).unwrap();
        assert_eq!(config.gravity, 0.5);
        assert_eq!(config.pipe_gap, 180.0);
        assert_eq!(config.field_height, FIELD_HEIGHT);
        assert_eq!(config.gap_center_min, GAP_CENTER_MIN);
    }

    #[test]
    fn test_malformed_json_is_invalid_data() {
        let err = parse_config("{ not json").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let store = temp_store("missing");
        let config = store.load().unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let store = temp_store("save_load");
        let config = GameConfig {
            pipe_speed: 4.0,
            ..GameConfig::default()
        };
        store.save(&config).unwrap();
        assert_eq!(store.load().unwrap(), config);
        let _ = fs::remove_dir_all(store.config_path().parent().unwrap());
    }

    #[test]
    fn test_invalid_file_rejected_on_load() {
        let store = temp_store("invalid");
        fs::create_dir_all(store.config_path().parent().unwrap()).unwrap();
        fs::write(store.config_path(), r#"{ "pipe_gap": 900.0 }"#).unwrap();

        let err = store.load().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(err.to_string().contains("pipe_gap"));
        let _ = fs::remove_dir_all(store.config_path().parent().unwrap());
    }
}
