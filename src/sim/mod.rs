//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and testable:
//! - Seeded RNG only
//! - Stable iteration order (blocks scan in layout order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::Aabb;
pub use state::{Ball, Block, BlockColor, GamePhase, GameState, Gem, Outcome, Paddle};
pub use tick::{TickInput, tick};
