//! Score keeping and goal detection

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::geometry::Rect;
use super::state::Player;

/// Points per player for the current process
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub player1: u32,
    pub player2: u32,
}

impl Score {
    /// Points for `player`
    pub fn points(&self, player: Player) -> u32 {
        match player {
            Player::One => self.player1,
            Player::Two => self.player2,
        }
    }

    /// Credit one point to `player`
    pub fn award(&mut self, player: Player) {
        match player {
            Player::One => self.player1 += 1,
            Player::Two => self.player2 += 1,
        }
    }
}

/// Check whether the ball reached a side wall and, if so, score and respawn
///
/// Reaching the left wall scores for player two; reaching the right wall scores
/// for player one. At most one goal fires per call. Returns the scoring player.
pub fn check_goal<R: Rng + ?Sized>(
    ball: &mut Ball,
    score: &mut Score,
    arena: &Rect,
    rng: &mut R,
) -> Option<Player> {
    let scorer = if ball.pos.x <= arena.left() + ball.size {
        Player::Two
    } else if ball.pos.x + ball.size >= arena.right() {
        Player::One
    } else {
        return None;
    };

    score.award(scorer);
    *ball = Ball::spawn(arena, rng);
    Some(scorer)
}
