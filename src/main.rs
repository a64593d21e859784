//! Breakout entry point
//!
//! A real engine drives `update` then `render` each frame and feeds the
//! input callbacks. Native builds have no engine attached, so this binary
//! runs a short scripted session against a logging renderer to exercise
//! the full frame loop.

use std::time::{SystemTime, UNIX_EPOCH};

use breakout::input::{InputEvent, InputMapper, Key, KeyAction};
use breakout::render::{self, Color, Renderer, SpriteId};
use breakout::sim::{GameState, tick};
use breakout::tuning::Tuning;

/// Demo timestep (120 Hz)
const DT: f32 = 1.0 / 120.0;

/// One game session: the state plus the intent queue feeding it
struct Game {
    state: GameState,
    input: InputMapper,
}

impl Game {
    fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            state: GameState::with_tuning(seed, tuning),
            input: InputMapper::new(),
        }
    }

    /// Engine callback side: events queue up until the next update
    fn on_event(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Frame driver contract: update first, then render
    fn update(&mut self, dt: f32) {
        let intent = self.input.drain();
        tick(&mut self.state, &intent, dt);
    }

    fn render(&self, renderer: &mut dyn Renderer) {
        render::render(renderer, &self.state);
    }
}

/// Renderer that counts sprite submissions and logs text draws
#[derive(Default)]
struct HeadlessRenderer {
    sprites_drawn: u64,
}

impl Renderer for HeadlessRenderer {
    fn set_window_title(&mut self, title: &str) {
        log::info!("window title: {title}");
    }

    fn set_resolution(&mut self, width: u32, height: u32) {
        log::info!("resolution: {width}x{height}");
    }

    fn create_sprite(&mut self, _id: SpriteId, texture: &str) -> anyhow::Result<()> {
        log::debug!("sprite bound: {texture}");
        Ok(())
    }

    fn draw_sprite(&mut self, _id: SpriteId, _x: f32, _y: f32, _width: f32, _height: f32) {
        self.sprites_drawn += 1;
    }

    fn draw_text(&mut self, text: &str, _x: f32, _y: f32, _color: Color) {
        log::debug!("text: {text}");
    }
}

fn load_tuning() -> Tuning {
    match std::fs::read_to_string("tuning.json") {
        Ok(json) => match Tuning::from_json(&json) {
            Ok(tuning) => {
                log::info!("loaded tuning.json");
                tuning
            }
            Err(err) => {
                log::warn!("tuning.json is invalid, using defaults: {err}");
                Tuning::default()
            }
        },
        Err(_) => Tuning::default(),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    log::info!("Breakout starting with seed {seed}");

    let mut game = Game::new(seed, load_tuning());
    let mut renderer = HeadlessRenderer::default();
    render::init_sprites(&mut renderer, &game.state)?;

    // Scripted session: confirm past the menu, then sweep the paddle
    game.on_event(InputEvent::Key {
        key: Key::Enter,
        action: KeyAction::Pressed,
    });
    game.on_event(InputEvent::Key {
        key: Key::D,
        action: KeyAction::Pressed,
    });

    for frame in 0..1200u32 {
        if game.input.exit_requested() {
            log::info!("exit requested");
            break;
        }
        game.update(DT);
        game.render(&mut renderer);

        if frame == 600 {
            game.on_event(InputEvent::Key {
                key: Key::A,
                action: KeyAction::Pressed,
            });
        }
    }

    log::info!(
        "session over: score {}, lives {}, blocks left {}, {} sprites drawn",
        game.state.score,
        game.state.lives,
        game.state.blocks_remaining,
        renderer.sprites_drawn
    );
    Ok(())
}
