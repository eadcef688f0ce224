//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed tick per frame
//! - Seeded, explicitly owned RNG only
//! - Fixed update order (paddle one, paddle two, ball, goal)
//! - No rendering or platform dependencies

pub mod ball;
pub mod geometry;
pub mod paddle;
pub mod score;
pub mod state;
pub mod tick;

pub use ball::Ball;
pub use geometry::{Rect, circle_rect_overlap};
pub use paddle::{Paddle, PaddleInput};
pub use score::{Score, check_goal};
pub use state::{GameEvent, GameState, Player, Wall};
pub use tick::{TickInput, tick};
