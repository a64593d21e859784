//! Presentation adapter
//!
//! Queries visible entities each frame and submits sprites plus HUD text to
//! the engine-owned renderer. No simulation logic lives here; win/lose only
//! short-circuits what gets drawn while the simulation keeps running.

use anyhow::Context;

use crate::consts::*;
use crate::sim::{BlockColor, GamePhase, GameState, Outcome};

/// RGBA text color
pub type Color = [f32; 4];

pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];

/// Identifies a sprite created during init
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteId {
    Paddle,
    Ball,
    Block(usize),
    Gem(usize),
}

/// The engine-owned rendering surface the game draws through
pub trait Renderer {
    fn set_window_title(&mut self, title: &str);
    fn set_resolution(&mut self, width: u32, height: u32);
    /// Load `texture` and bind it to `id`
    fn create_sprite(&mut self, id: SpriteId, texture: &str) -> anyhow::Result<()>;
    fn draw_sprite(&mut self, id: SpriteId, x: f32, y: f32, width: f32, height: f32);
    fn draw_text(&mut self, text: &str, x: f32, y: f32, color: Color);
}

const PADDLE_TEXTURE: &str = "Resources/Textures/puzzlepack/png/paddleBlue.png";
const BALL_TEXTURE: &str = "Resources/Textures/puzzlepack/png/ballBlue.png";
const GEM_TEXTURE: &str = "Resources/Textures/puzzlepack/png/particleStar.png";

fn block_texture(color: BlockColor) -> &'static str {
    match color {
        BlockColor::Red => "Resources/Textures/puzzlepack/png/element_red_rectangle_glossy.png",
        BlockColor::Blue => "Resources/Textures/puzzlepack/png/element_blue_rectangle_glossy.png",
    }
}

/// Configure the window and load every sprite.
///
/// Paddle and ball failures abort startup. Block and gem failures are
/// retried once with identical parameters; a failed retry is reported and
/// the entity is left without a sprite.
pub fn init_sprites(renderer: &mut dyn Renderer, state: &GameState) -> anyhow::Result<()> {
    renderer.set_resolution(GAME_WIDTH as u32, GAME_HEIGHT as u32);
    renderer.set_window_title("Breakout!");

    renderer
        .create_sprite(SpriteId::Paddle, PADDLE_TEXTURE)
        .context("loading paddle sprite")?;
    renderer
        .create_sprite(SpriteId::Ball, BALL_TEXTURE)
        .context("loading ball sprite")?;

    for (i, block) in state.blocks.iter().enumerate() {
        create_with_retry(renderer, SpriteId::Block(i), block_texture(block.color));
    }
    for i in 0..state.gems.len() {
        create_with_retry(renderer, SpriteId::Gem(i), GEM_TEXTURE);
    }

    Ok(())
}

fn create_with_retry(renderer: &mut dyn Renderer, id: SpriteId, texture: &str) {
    if renderer.create_sprite(id, texture).is_ok() {
        return;
    }
    if let Err(err) = renderer.create_sprite(id, texture) {
        log::error!("sprite {id:?} failed to load after retry: {err:#}");
    }
}

/// Submit one frame: gate screens first, otherwise sprites plus HUD
pub fn render(renderer: &mut dyn Renderer, state: &GameState) {
    let banner_x = GAME_WIDTH / 2.0 - 160.0;
    let banner_y = GAME_HEIGHT / 2.0;

    if state.phase == GamePhase::Menu {
        renderer.draw_text("Press Enter to continue", banner_x, banner_y, WHITE);
        return;
    }

    match state.outcome() {
        Some(Outcome::Won) => {
            renderer.draw_text("Congratulations", banner_x, banner_y, WHITE);
        }
        Some(Outcome::Lost) => {
            renderer.draw_text("You Lose", banner_x, banner_y, WHITE);
        }
        None => {
            let paddle = state.paddle.aabb();
            renderer.draw_sprite(
                SpriteId::Paddle,
                paddle.x,
                paddle.y,
                paddle.width,
                paddle.height,
            );
            let ball = state.ball.aabb();
            renderer.draw_sprite(SpriteId::Ball, ball.x, ball.y, ball.width, ball.height);

            for (i, block) in state.blocks.iter().enumerate() {
                if block.visible {
                    let aabb = block.aabb();
                    renderer.draw_sprite(SpriteId::Block(i), aabb.x, aabb.y, aabb.width, aabb.height);
                }
            }
            for (i, gem) in state.gems.iter().enumerate() {
                if gem.visible {
                    let aabb = gem.aabb();
                    renderer.draw_sprite(SpriteId::Gem(i), aabb.x, aabb.y, aabb.width, aabb.height);
                }
            }

            renderer.draw_text(
                &format!("Score: {}", state.score),
                20.0,
                GAME_HEIGHT - 20.0,
                WHITE,
            );
            renderer.draw_text(
                &format!("Lives: {}", state.lives),
                20.0,
                GAME_HEIGHT - 40.0,
                WHITE,
            );
        }
    }
}
