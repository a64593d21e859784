//! Game state and core simulation types

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::Aabb;
use crate::consts::*;
use crate::tuning::Tuning;
use crate::unit_direction;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting at the "press enter" gate; the simulation is a no-op
    Menu,
    /// Active gameplay. There is no way back to `Menu`.
    Playing,
}

/// Terminal result, derived from counters by the presentation layer.
/// The simulation itself never halts on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

/// The player's paddle
#[derive(Debug, Clone)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    /// Horizontal drive in {-1, 0, 1}; reversed on wall contact
    pub vel_x: f32,
}

impl Paddle {
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos.x, self.pos.y, PADDLE_WIDTH, PADDLE_HEIGHT)
    }
}

/// The ball
#[derive(Debug, Clone)]
pub struct Ball {
    /// Top-left corner
    pub pos: Vec2,
    /// Unit direction of travel
    pub dir: Vec2,
}

impl Ball {
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos.x, self.pos.y, BALL_SIZE, BALL_SIZE)
    }
}

/// Texture variant for a block, fixed at layout time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockColor {
    Red,
    Blue,
}

/// A destructible block
#[derive(Debug, Clone)]
pub struct Block {
    pub pos: Vec2,
    pub color: BlockColor,
    pub visible: bool,
}

impl Block {
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos.x, self.pos.y, BLOCK_WIDTH, BLOCK_HEIGHT)
    }
}

/// A collectible gem. Invisible gems sit in the spawn pool.
#[derive(Debug, Clone)]
pub struct Gem {
    pub pos: Vec2,
    pub visible: bool,
}

impl Gem {
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos.x, self.pos.y, GEM_SIZE, GEM_SIZE)
    }
}

/// Complete game state for one session, advanced by [`tick`](super::tick)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Injected RNG; all randomness flows through here
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u8,
    /// Blocks still standing; reaching zero wins the session
    pub blocks_remaining: u32,
    /// Accumulates on block destruction until it crosses the spawn threshold
    pub gem_chance: u32,
    /// Gems waiting in the spawn pool
    pub gems_pooled: u32,
    /// Gameplay seconds, advanced only while `Playing`
    pub elapsed_secs: f32,
    pub tuning: Tuning,
    pub paddle: Paddle,
    pub ball: Ball,
    pub blocks: Vec<Block>,
    pub gems: Vec<Gem>,
}

impl GameState {
    /// Create a new session with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Menu,
            score: 0,
            lives: 3,
            blocks_remaining: BLOCK_COUNT as u32,
            gem_chance: 0,
            gems_pooled: GEM_COUNT as u32,
            elapsed_secs: 0.0,
            tuning,
            paddle: Paddle {
                pos: Vec2::new(
                    (GAME_WIDTH - PADDLE_WIDTH) / 2.0,
                    GAME_HEIGHT - PADDLE_FLOOR_OFFSET,
                ),
                vel_x: 0.0,
            },
            ball: Ball {
                pos: Vec2::ZERO,
                dir: Vec2::ZERO,
            },
            blocks: layout_blocks(),
            gems: vec![
                Gem {
                    pos: Vec2::ZERO,
                    visible: false,
                };
                GEM_COUNT
            ],
        };
        state.respawn_ball();
        state
    }

    /// Leave the menu. One-way: nothing transitions back.
    pub fn start(&mut self) {
        self.phase = GamePhase::Playing;
    }

    /// Terminal result, if any. A cleared field wins even at zero lives.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.blocks_remaining == 0 {
            Some(Outcome::Won)
        } else if self.lives == 0 {
            Some(Outcome::Lost)
        } else {
            None
        }
    }

    /// Re-center the ball above the floor with a fresh, mostly-upward
    /// direction
    pub fn respawn_ball(&mut self) {
        let x = self.rng.random_range(-4..=5) as f32;
        self.ball.dir = unit_direction(Vec2::new(x, -10.0));
        self.ball.pos = Vec2::new(
            (GAME_WIDTH - BALL_SIZE) / 2.0,
            GAME_HEIGHT - BALL_RESPAWN_OFFSET,
        );
    }

    /// Activate the top slot of the gem pool at a random horizontal offset.
    ///
    /// No-op when the pool is empty or the target slot is somehow still on
    /// screen (double-spawn guard). `gem_chance` resets only on an actual
    /// spawn.
    pub fn spawn_gem(&mut self) {
        let Some(index) = self.gems_pooled.checked_sub(1) else {
            return;
        };
        if self.gems[index as usize].visible {
            return;
        }
        let x = self.rng.random_range(0.0..GAME_WIDTH - GEM_SIZE);
        let gem = &mut self.gems[index as usize];
        gem.pos = Vec2::new(x, GEM_SPAWN_Y);
        gem.visible = true;
        self.gems_pooled = index;
        self.gem_chance = 0;
    }
}

/// Lay out the block grid: left to right from the top-left corner, wrapping
/// to a new row when the next block would cross the right edge. Colors
/// alternate by row and column parity so rows form a checker pattern.
fn layout_blocks() -> Vec<Block> {
    let mut blocks = Vec::with_capacity(BLOCK_COUNT);
    let mut x = BLOCK_START_X;
    let mut y = BLOCK_ROW_HEIGHT;
    let mut row: usize = 1;

    for i in 0..BLOCK_COUNT {
        let color = if (row % 2 == 0) == (i % 2 == 0) {
            BlockColor::Red
        } else {
            BlockColor::Blue
        };
        blocks.push(Block {
            pos: Vec2::new(x, y),
            color,
            visible: true,
        });

        x += BLOCK_WIDTH + BLOCK_GAP;
        if x + BLOCK_WIDTH >= GAME_WIDTH {
            row += 1;
            x = BLOCK_START_X;
            y = row as f32 * BLOCK_ROW_HEIGHT;
        }
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_counters() {
        let state = GameState::new(7);
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.lives, 3);
        assert_eq!(state.score, 0);
        assert_eq!(state.blocks_remaining, 48);
        assert_eq!(state.gems_pooled, 3);
        assert_eq!(state.gem_chance, 0);
        assert!(state.gems.iter().all(|g| !g.visible));
    }

    #[test]
    fn test_block_layout_grid() {
        let state = GameState::new(7);
        assert_eq!(state.blocks.len(), 48);
        assert!(state.blocks.iter().all(|b| b.visible));

        // 8 columns per row, 6 rows
        assert_eq!(state.blocks[0].pos, Vec2::new(20.0, 35.0));
        assert_eq!(state.blocks[7].pos, Vec2::new(20.0 + 7.0 * 74.0, 35.0));
        assert_eq!(state.blocks[8].pos, Vec2::new(20.0, 70.0));
        assert_eq!(state.blocks[47].pos, Vec2::new(20.0 + 7.0 * 74.0, 210.0));

        // No block crosses the right edge
        assert!(state.blocks.iter().all(|b| b.aabb().right() < GAME_WIDTH));
    }

    #[test]
    fn test_block_colors_checker() {
        let state = GameState::new(7);
        // Row 1 (odd): even columns blue, odd columns red
        assert_eq!(state.blocks[0].color, BlockColor::Blue);
        assert_eq!(state.blocks[1].color, BlockColor::Red);
        // Row 2 (even) inverts
        assert_eq!(state.blocks[8].color, BlockColor::Red);
        assert_eq!(state.blocks[9].color, BlockColor::Blue);
    }

    #[test]
    fn test_start_is_one_way() {
        let mut state = GameState::new(7);
        state.start();
        assert_eq!(state.phase, GamePhase::Playing);
        state.start();
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_outcome_priorities() {
        let mut state = GameState::new(7);
        assert_eq!(state.outcome(), None);

        state.lives = 0;
        assert_eq!(state.outcome(), Some(Outcome::Lost));

        // A cleared field outranks an empty life counter
        state.blocks_remaining = 0;
        assert_eq!(state.outcome(), Some(Outcome::Won));
    }

    #[test]
    fn test_respawn_ball_recenters() {
        let mut state = GameState::new(7);
        state.respawn_ball();
        assert_eq!(state.ball.pos, Vec2::new((640.0 - 22.0) / 2.0, 840.0));
        assert!((state.ball.dir.length() - 1.0).abs() < 1e-5);
        assert!(state.ball.dir.y < 0.0);
    }

    #[test]
    fn test_spawn_gem_takes_top_of_pool() {
        let mut state = GameState::new(7);
        state.gem_chance = 50;
        state.spawn_gem();

        assert!(state.gems[2].visible);
        assert_eq!(state.gems_pooled, 2);
        assert_eq!(state.gem_chance, 0);
        assert_eq!(state.gems[2].pos.y, GEM_SPAWN_Y);
        assert!(state.gems[2].pos.x >= 0.0);
        assert!(state.gems[2].pos.x <= GAME_WIDTH - GEM_SIZE);

        state.spawn_gem();
        assert!(state.gems[1].visible);
        assert_eq!(state.gems_pooled, 1);
    }

    #[test]
    fn test_spawn_gem_empty_pool_is_noop() {
        let mut state = GameState::new(7);
        state.gems_pooled = 0;
        state.gem_chance = 99;
        state.spawn_gem();
        assert_eq!(state.gems_pooled, 0);
        assert_eq!(state.gem_chance, 99);
        assert!(state.gems.iter().all(|g| !g.visible));
    }

    #[test]
    fn test_spawn_gem_double_spawn_guard() {
        let mut state = GameState::new(7);
        // Force the target slot on screen without draining the pool
        state.gems[2].visible = true;
        state.gem_chance = 75;
        state.spawn_gem();
        // Guard fires: nothing spawns and the accumulator is untouched
        assert_eq!(state.gems_pooled, 3);
        assert_eq!(state.gem_chance, 75);
    }

    #[test]
    fn test_gem_pool_conservation_across_spawns() {
        let mut state = GameState::new(7);
        for _ in 0..3 {
            state.spawn_gem();
            let visible = state.gems.iter().filter(|g| g.visible).count() as u32;
            assert_eq!(state.gems_pooled + visible, 3);
        }
        // Pool exhausted; a further spawn changes nothing
        state.spawn_gem();
        assert_eq!(state.gems_pooled, 0);
    }
}
