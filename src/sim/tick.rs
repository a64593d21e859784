//! Per-frame simulation advance
//!
//! Order is load-bearing: reflection checks run against pre-move positions,
//! then movement integrates with the possibly-flipped direction, so a
//! bounce is visible in the same frame it is detected.

use rand::Rng;

use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Input intents for a single tick, drained from the input mapper
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// New paddle drive in {-1, 0, 1}; `None` keeps the current drive
    /// (a held key produces no further events)
    pub paddle_axis: Option<f32>,
    /// Confirm action: leaves the menu
    pub confirm: bool,
}

/// Advance the game by one frame
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.phase == GamePhase::Menu {
        if input.confirm {
            state.start();
        }
        return;
    }

    state.elapsed_secs += dt;
    if let Some(axis) = input.paddle_axis {
        state.paddle.vel_x = axis;
    }

    paddle_movement(state, dt);
    ball_movement(state, dt);
    gem_movement(state, dt);
    resolve_collisions(state);
}

/// Advance the paddle. Wall contact reverses its drive rather than
/// clamping, so a held key walks the paddle back off the edge.
fn paddle_movement(state: &mut GameState, dt: f32) {
    state.paddle.pos.x += state.paddle.vel_x * state.tuning.paddle_speed * dt;

    let aabb = state.paddle.aabb();
    if aabb.x <= 0.0 || aabb.right() >= GAME_WIDTH {
        state.paddle.vel_x = -state.paddle.vel_x;
    }
}

/// Reflect the ball off the paddle and the arena bounds, then integrate
fn ball_movement(state: &mut GameState, dt: f32) {
    let ball_box = state.ball.aabb();
    let paddle_box = state.paddle.aabb();

    if ball_box.overlaps(&paddle_box) {
        state.ball.dir.y = -state.ball.dir.y;
        state.ball.pos.y -= BALL_PADDLE_NUDGE;
    }

    if ball_box.x <= 0.0 || ball_box.right() >= GAME_WIDTH {
        state.ball.dir.x = -state.ball.dir.x;
    }

    if ball_box.y <= 0.0 {
        state.ball.dir.y = -state.ball.dir.y;
    }

    if ball_box.bottom() >= GAME_HEIGHT {
        // Floor contact costs a life and resets the ball; no reflection
        // and no movement this frame
        state.lives = state.lives.saturating_sub(1);
        state.respawn_ball();
        return;
    }

    state.ball.pos += state.ball.dir * state.tuning.ball_speed * dt;
}

/// Visible gems drift toward the floor at half their configured speed
fn gem_movement(state: &mut GameState, dt: f32) {
    let fall = state.tuning.gem_speed / 2.0 * dt;
    for gem in state.gems.iter_mut().filter(|g| g.visible) {
        gem.pos.y += fall;
    }
}

/// Collision & scoring engine: block destruction, gem spawn triggers, and
/// gem consumption. Visibility transitions and counters are mutated only
/// here.
fn resolve_collisions(state: &mut GameState) {
    let ball_box = state.ball.aabb();

    // First visible block overlapping the ball; at most one per tick
    let hit = state
        .blocks
        .iter()
        .position(|b| b.visible && ball_box.overlaps(&b.aabb()));
    if let Some(index) = hit {
        state.blocks[index].visible = false;
        state.ball.dir.y = -state.ball.dir.y;
        state.score += state.tuning.block_score;
        state.blocks_remaining -= 1;

        let roll = gem_chance_roll(state);
        state.gem_chance += roll;
        if state.gem_chance >= state.tuning.gem_spawn_threshold && state.gems_pooled > 0 {
            state.spawn_gem();
        }
    }

    let paddle_box = state.paddle.aabb();
    let mut caught: u32 = 0;
    let mut lost: u32 = 0;
    for gem in state.gems.iter_mut().filter(|g| g.visible) {
        if gem.aabb().overlaps(&paddle_box) {
            gem.visible = false;
            caught += 1;
        } else if gem.pos.y > GAME_HEIGHT {
            gem.visible = false;
            lost += 1;
        }
    }
    state.gems_pooled += caught + lost;
    state.score += u64::from(caught) * state.tuning.gem_score;
}

/// Roll the gem-chance increment. The window widens as the session runs,
/// so gems surface more often late in a field. The roll is strictly
/// positive and the window is clamped away from zero for a just-started
/// session.
fn gem_chance_roll(state: &mut GameState) -> u32 {
    let ramp = state.tuning.gem_chance_ramp_secs.max(0.001);
    let window = ((state.elapsed_secs / ramp) as u32).saturating_add(1);
    state.rng.random_range(1..=window)
}
