//! Player paddles

use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use super::state::Player;
use crate::consts::*;

/// Digital movement intent for one paddle during a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaddleInput {
    pub up: bool,
    pub down: bool,
}

/// A player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
}

impl Paddle {
    /// Create a paddle for `player`, vertically centered
    ///
    /// Player one sits `PADDLE_MARGIN` from the left edge. Player two is measured
    /// from the right edge to the paddle's horizontal midpoint, so it sits half a
    /// paddle width closer to its wall.
    pub fn new(player: Player, arena: &Rect) -> Self {
        let x = match player {
            Player::One => arena.left() + PADDLE_MARGIN,
            Player::Two => arena.right() - PADDLE_WIDTH / 2.0 - PADDLE_MARGIN,
        };
        let y = arena.top() + arena.height / 2.0 - PADDLE_HEIGHT / 2.0;

        Self {
            rect: Rect::new(x, y, PADDLE_WIDTH, PADDLE_HEIGHT),
        }
    }

    /// Apply one tick of input, then clamp into the arena
    ///
    /// Down is applied before up, so holding both cancels out.
    pub fn apply(&mut self, input: PaddleInput, arena: &Rect) {
        if input.down {
            self.rect.y += PADDLE_STEP;
        }
        if input.up {
            self.rect.y -= PADDLE_STEP;
        }

        let max_y = arena.bottom() - self.rect.height;
        self.rect.y = self.rect.y.clamp(arena.top(), max_y);
    }
}
