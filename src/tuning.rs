//! Data-driven game balance
//!
//! Defaults live here; a JSON override can be supplied at startup. Values
//! feed the simulation through `GameState`, never through globals, so a
//! test can tune a single knob without touching the rest.

use serde::{Deserialize, Serialize};

/// Balance values for one session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Paddle travel speed, pixels/second
    pub paddle_speed: f32,
    /// Ball travel speed, pixels/second
    pub ball_speed: f32,
    /// Gem fall speed before the built-in halving, pixels/second
    pub gem_speed: f32,
    /// Score for destroying a block
    pub block_score: u64,
    /// Score for catching a gem
    pub gem_score: u64,
    /// Accumulated chance needed to trigger a gem spawn
    pub gem_spawn_threshold: u32,
    /// Seconds of play that widen the chance-roll window by one
    pub gem_chance_ramp_secs: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            paddle_speed: 450.0,
            ball_speed: 350.0,
            gem_speed: 150.0,
            block_score: 10,
            gem_score: 100,
            gem_spawn_threshold: 50,
            gem_chance_ramp_secs: 2.0,
        }
    }
}

impl Tuning {
    /// Parse a JSON override; missing fields fall back to defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
