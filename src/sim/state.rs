//! Game state and core simulation types

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::geometry::Rect;
use super::paddle::Paddle;
use super::score::Score;
use crate::consts::*;

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Left paddle
    One,
    /// Right paddle
    Two,
}

impl Player {
    /// Both players in update order
    pub const BOTH: [Player; 2] = [Player::One, Player::Two];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

/// Arena border
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wall {
    Left,
    Right,
    Top,
    Bottom,
}

/// Something noteworthy that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball rebounded off an arena border
    WallBounce { wall: Wall },
    /// Ball rebounded off a paddle
    PaddleHit { player: Player },
    /// Ball left the arena; `score` is the tally after the goal
    Goal { scorer: Player, score: Score },
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Owned RNG, threaded into every ball spawn
    pub rng: Pcg32,
    /// Fixed play area
    pub arena: Rect,
    pub ball: Ball,
    /// Paddles indexed by `Player::index`
    pub paddles: [Paddle; 2],
    pub score: Score,
    /// Simulation tick counter
    pub frame: u64,
    /// Events produced by the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        let arena = Rect::new(0.0, 0.0, ARENA_WIDTH, ARENA_HEIGHT);
        let mut rng = Pcg32::seed_from_u64(seed);
        let ball = Ball::spawn(&arena, &mut rng);

        Self {
            seed,
            rng,
            arena,
            ball,
            paddles: [
                Paddle::new(Player::One, &arena),
                Paddle::new(Player::Two, &arena),
            ],
            score: Score::default(),
            frame: 0,
            events: Vec::new(),
        }
    }

    #[inline]
    pub fn paddle(&self, player: Player) -> &Paddle {
        &self.paddles[player.index()]
    }

    /// Arena center, where every ball spawns
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.arena.center()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(42);
        assert_eq!(state.score, Score::default());
        assert_eq!(state.frame, 0);
        assert_eq!(state.ball.pos, state.center());
        assert!(state.events.is_empty());

        let one = state.paddle(Player::One).rect;
        let two = state.paddle(Player::Two).rect;
        assert_eq!(one.x, 32.0);
        assert_eq!(two.x, 1240.0);
        assert_eq!(one.y, (ARENA_HEIGHT - PADDLE_HEIGHT) / 2.0);
        assert_eq!(two.y, one.y);
    }

    #[test]
    fn test_same_seed_same_ball() {
        let a = GameState::new(1234);
        let b = GameState::new(1234);
        assert_eq!(a.ball, b.ball);

        let c = GameState::new(4321);
        assert_ne!(a.ball, c.ball);
    }
}
