use std::fs;

use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "termfolio.json";

/// Tunables for the Dino Runner simulation. The numbers have no derivation
/// beyond playtesting, so they live in config rather than in code.
#[derive(Copy, Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct RunnerConfig {
    pub cols: u32,
    pub rows: u32,
    pub tick_ms: f32,
    pub gravity: f32,
    pub jump_velocity: f32,
    pub player_col: u32,
    pub start_speed: f32,
    pub speed_increment: f32,
    pub max_speed: f32,
    pub min_spawn_ticks: u32,
    pub spawn_gap: f32,
    pub spawn_jitter: f32,
    pub clearance: f32,
    pub ground_tolerance: f32,
}

impl RunnerConfig {
    /// Clamps file-supplied tunables to values the engine can run with.
    /// The grid needs room for the ground row and a 3-cell jump arc, the
    /// player must sit inside the grid, and a zero tick would spin the
    /// accumulator forever.
    pub fn sanitized(mut self) -> Self {
        self.cols = self.cols.max(10);
        self.rows = self.rows.max(6);
        self.player_col = self.player_col.min(self.cols - 1);
        self.tick_ms = self.tick_ms.max(1.0);
        self
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            cols: 40,
            rows: 8,
            tick_ms: 50.0,
            gravity: -0.6,
            jump_velocity: 2.8,
            player_col: 3,
            start_speed: 0.7,
            speed_increment: 0.0009,
            max_speed: 1.6,
            min_spawn_ticks: 18,
            spawn_gap: 14.0,
            spawn_jitter: 6.0,
            clearance: 1.0,
            ground_tolerance: 0.1,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    pub runner: RunnerConfig,
    pub leaderboard_path: String,
    pub site_url: String,
    pub player_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            runner: RunnerConfig::default(),
            leaderboard_path: "lb_dino.json".to_string(),
            site_url: "https://alexvega.dev".to_string(),
            player_name: "guest".to_string(),
        }
    }
}

/// Loads `termfolio.json` from the working directory. A missing file is the
/// normal case; a malformed one falls back to defaults with a warning.
pub fn load() -> AppConfig {
    let mut config = match fs::read_to_string(CONFIG_FILE) {
        Ok(text) => match serde_json::from_str(&text) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(error = %err, file = CONFIG_FILE, "invalid config, using defaults");
                AppConfig::default()
            }
        },
        Err(_) => AppConfig::default(),
    };
    config.runner = config.runner.sanitized();
    config
}
