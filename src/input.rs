//! Input mapping
//!
//! Engine callbacks enqueue raw events; the frame loop drains them into a
//! single [`TickInput`] before physics runs, keeping one writer per tick.

use crate::sim::TickInput;

/// Keys the game reacts to; anything else folds to `Other`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    A,
    D,
    Enter,
    Escape,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Pressed,
    Released,
}

/// A raw event as delivered by the engine's callbacks
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    Key { key: Key, action: KeyAction },
    Click { x: f32, y: f32 },
}

/// Folds queued events into per-tick intents
#[derive(Debug, Default)]
pub struct InputMapper {
    queue: Vec<InputEvent>,
    cursor: (f32, f32),
    exit_requested: bool,
}

impl InputMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Callback side: enqueue only, no game state is touched here
    pub fn push(&mut self, event: InputEvent) {
        self.queue.push(event);
    }

    /// Drain queued events into the intents for the next tick.
    ///
    /// Releasing any key stops the paddle; pressing A or D restarts it.
    /// With no key events the paddle intent is `None` and the previous
    /// drive keeps applying.
    pub fn drain(&mut self) -> TickInput {
        let mut intent = TickInput::default();
        for event in self.queue.drain(..) {
            match event {
                InputEvent::Key { key, action } => {
                    if key == Key::Escape {
                        self.exit_requested = true;
                    }
                    if key == Key::Enter {
                        intent.confirm = true;
                    }
                    match action {
                        KeyAction::Pressed => match key {
                            Key::A => intent.paddle_axis = Some(-1.0),
                            Key::D => intent.paddle_axis = Some(1.0),
                            _ => {}
                        },
                        KeyAction::Released => intent.paddle_axis = Some(0.0),
                    }
                }
                InputEvent::Click { x, y } => {
                    self.cursor = (x, y);
                }
            }
        }
        intent
    }

    /// Set by an escape key event; the outer frame driver checks this
    /// between frames
    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    /// Last reported cursor position
    pub fn cursor(&self) -> (f32, f32) {
        self.cursor
    }
}
