//! Breakout - a single-screen arcade brick breaker
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, collisions, game state)
//! - `input`: Key/click events folded into per-tick intents
//! - `render`: Thin adapter submitting visible entities to the engine renderer
//! - `tuning`: Data-driven game balance

pub mod input;
pub mod render;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Arena dimensions (pixels, top-left origin, y increasing downward)
    pub const GAME_WIDTH: f32 = 640.0;
    pub const GAME_HEIGHT: f32 = 920.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 104.0;
    pub const PADDLE_HEIGHT: f32 = 24.0;
    /// Paddle rest height above the floor
    pub const PADDLE_FLOOR_OFFSET: f32 = 50.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 22.0;
    /// Fixed upward nudge applied when the ball meets the paddle
    pub const BALL_PADDLE_NUDGE: f32 = 10.0;
    /// Respawn height above the floor
    pub const BALL_RESPAWN_OFFSET: f32 = 80.0;

    /// Block grid
    pub const BLOCK_COUNT: usize = 48;
    pub const BLOCK_WIDTH: f32 = 64.0;
    pub const BLOCK_HEIGHT: f32 = 32.0;
    pub const BLOCK_START_X: f32 = 20.0;
    pub const BLOCK_GAP: f32 = 10.0;
    pub const BLOCK_ROW_HEIGHT: f32 = 35.0;

    /// Gem pool
    pub const GEM_COUNT: usize = 3;
    pub const GEM_SIZE: f32 = 30.0;
    /// Gems drop in from just above the visible arena
    pub const GEM_SPAWN_Y: f32 = -40.0;
}

/// Normalize a direction vector. The zero vector stays zero rather than
/// producing NaNs.
#[inline]
pub fn unit_direction(v: Vec2) -> Vec2 {
    v.normalize_or_zero()
}
