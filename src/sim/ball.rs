//! Ball entity: spawning, motion, and rebounds
//!
//! The ball travels `velocity` units per tick along a unit `direction`. Rebounds
//! only ever flip the sign of one direction component, so the heading stays unit
//! length for the life of the ball.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geometry::{Rect, circle_rect_overlap};
use super::state::{GameEvent, Player, Wall};
use crate::consts::*;

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Center position
    pub pos: Vec2,
    /// Radius
    pub size: f32,
    /// Unit heading
    pub direction: Vec2,
    /// Speed in units per tick (always positive)
    pub velocity: f32,
}

impl Ball {
    /// Spawn a fresh ball at the arena center heading right
    ///
    /// The vertical heading component is drawn from the half-open range
    /// `[-SPREAD/2, SPREAD/2)` before normalization, and the speed from
    /// `[BALL_MIN_VELOCITY, BALL_MIN_VELOCITY + BALL_VELOCITY_SPREAD)`.
    pub fn spawn<R: Rng + ?Sized>(arena: &Rect, rng: &mut R) -> Self {
        let half_spread = BALL_VERTICAL_SPREAD / 2.0;
        let vertical = rng.random_range(-half_spread..half_spread);
        let velocity =
            rng.random_range(BALL_MIN_VELOCITY..BALL_MIN_VELOCITY + BALL_VELOCITY_SPREAD);

        Self {
            pos: arena.center(),
            size: BALL_SIZE,
            direction: Vec2::new(1.0, vertical).normalize(),
            velocity,
        }
    }

    /// Advance one tick, rebounding off the arena borders and both paddles
    ///
    /// Paddle contact is tested at the position *before* this tick's motion, and
    /// the correction is applied to the candidate position. A fast ball can
    /// therefore pass through a paddle between two ticks.
    pub fn advance(&mut self, arena: &Rect, paddles: [&Rect; 2], events: &mut Vec<GameEvent>) {
        let mut next = self.pos + self.direction * self.velocity;

        if next.x < arena.left() + self.size {
            next.x = arena.left() + self.size;
            self.direction.x = -self.direction.x;
            events.push(GameEvent::WallBounce { wall: Wall::Left });
        }
        if next.x + self.size > arena.right() {
            next.x = arena.right() - self.size;
            self.direction.x = -self.direction.x;
            events.push(GameEvent::WallBounce { wall: Wall::Right });
        }
        if next.y < arena.top() + self.size {
            next.y = arena.top() + self.size;
            self.direction.y = -self.direction.y;
            events.push(GameEvent::WallBounce { wall: Wall::Top });
        }
        if next.y + self.size > arena.bottom() {
            next.y = arena.bottom() - self.size;
            self.direction.y = -self.direction.y;
            events.push(GameEvent::WallBounce { wall: Wall::Bottom });
        }

        for (player, paddle) in Player::BOTH.into_iter().zip(paddles) {
            if self.resolve_paddle(paddle, &mut next) {
                events.push(GameEvent::PaddleHit { player });
            }
        }

        self.pos = next;
    }

    /// Push `next` out of `paddle` if the ball currently overlaps it
    ///
    /// Every side the current center lies beyond gets its own correction, so a
    /// corner contact pushes and flips on both axes. Returns whether any
    /// correction was applied.
    fn resolve_paddle(&mut self, paddle: &Rect, next: &mut Vec2) -> bool {
        if !circle_rect_overlap(self.pos, self.size, paddle) {
            return false;
        }

        let clearance = self.size + PADDLE_PUSH_OUT;
        let mut hit = false;

        if self.pos.x > paddle.right() {
            next.x = paddle.right() + clearance;
            self.direction.x = -self.direction.x;
            hit = true;
        }
        if self.pos.x < paddle.left() {
            next.x = paddle.left() - clearance;
            self.direction.x = -self.direction.x;
            hit = true;
        }
        if self.pos.y > paddle.bottom() {
            next.y = paddle.bottom() + clearance;
            self.direction.y = -self.direction.y;
            hit = true;
        }
        if self.pos.y < paddle.top() {
            next.y = paddle.top() - clearance;
            self.direction.y = -self.direction.y;
            hit = true;
        }

        hit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const ARENA: Rect = Rect::new(0.0, 0.0, ARENA_WIDTH, ARENA_HEIGHT);
    /// Paddles parked in the top corners, out of the way of mid-height tests
    const PARKED: [Rect; 2] = [
        Rect::new(PADDLE_MARGIN, 0.0, PADDLE_WIDTH, PADDLE_HEIGHT),
        Rect::new(1240.0, 0.0, PADDLE_WIDTH, PADDLE_HEIGHT),
    ];

    fn ball(pos: Vec2, direction: Vec2, velocity: f32) -> Ball {
        Ball {
            pos,
            size: BALL_SIZE,
            direction,
            velocity,
        }
    }

    fn step(ball: &mut Ball, paddles: &[Rect; 2]) -> Vec<GameEvent> {
        let mut events = Vec::new();
        ball.advance(&ARENA, [&paddles[0], &paddles[1]], &mut events);
        events
    }

    proptest! {
        #[test]
        fn spawn_is_centered_unit_and_in_speed_range(seed in any::<u64>()) {
            let mut rng = Pcg32::seed_from_u64(seed);
            for _ in 0..16 {
                let ball = Ball::spawn(&ARENA, &mut rng);
                prop_assert!((ball.direction.length() - 1.0).abs() < 1e-5);
                prop_assert!(ball.direction.x > 0.0);
                prop_assert!(ball.velocity >= 4.0 && ball.velocity < 10.0);
                prop_assert_eq!(ball.pos, Vec2::new(ARENA_WIDTH / 2.0, ARENA_HEIGHT / 2.0));
                prop_assert_eq!(ball.size, BALL_SIZE);
            }
        }

        #[test]
        fn ball_stays_inside_arena(
            seed in any::<u64>(),
            x in 100.0f32..1180.0,
            y in 100.0f32..620.0,
        ) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut b = Ball::spawn(&ARENA, &mut rng);
            b.pos = Vec2::new(x, y);
            for _ in 0..600 {
                step(&mut b, &PARKED);
                prop_assert!(b.pos.y >= b.size && b.pos.y + b.size <= ARENA_HEIGHT);
                prop_assert!((b.direction.length() - 1.0).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn test_spawn_vertical_spread_is_half_open() {
        // normalize(1, v) with v in [-2.5, 2.5): |dir.y / dir.x| never exceeds 2.5
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..1000 {
            let b = Ball::spawn(&ARENA, &mut rng);
            let v = b.direction.y / b.direction.x;
            assert!((-2.5..2.5).contains(&v), "vertical component {v} out of range");
        }
    }

    #[test]
    fn test_free_flight() {
        let mut b = ball(Vec2::new(640.0, 360.0), Vec2::new(0.6, 0.8), 5.0);
        let events = step(&mut b, &PARKED);
        assert!(events.is_empty());
        assert!((b.pos - Vec2::new(643.0, 364.0)).length() < 1e-4);
    }

    #[test]
    fn test_left_border_clamps_and_flips() {
        let mut b = ball(Vec2::new(BALL_SIZE, ARENA_HEIGHT / 2.0), Vec2::new(-1.0, 0.0), 5.0);
        let events = step(&mut b, &PARKED);
        assert_eq!(b.pos.x, BALL_SIZE);
        assert_eq!(b.direction.x, 1.0);
        assert_eq!(events, vec![GameEvent::WallBounce { wall: Wall::Left }]);
    }

    #[test]
    fn test_right_border_clamps_and_flips() {
        let mut b = ball(
            Vec2::new(ARENA_WIDTH - BALL_SIZE - 2.0, 600.0),
            Vec2::new(1.0, 0.0),
            9.0,
        );
        step(&mut b, &PARKED);
        assert_eq!(b.pos.x, ARENA_WIDTH - BALL_SIZE);
        assert_eq!(b.direction.x, -1.0);
    }

    #[test]
    fn test_top_and_bottom_borders() {
        let mut b = ball(Vec2::new(640.0, 18.0), Vec2::new(0.0, -1.0), 6.0);
        step(&mut b, &PARKED);
        assert_eq!(b.pos.y, BALL_SIZE);
        assert_eq!(b.direction.y, 1.0);

        let mut b = ball(Vec2::new(640.0, ARENA_HEIGHT - 20.0), Vec2::new(0.0, 1.0), 6.0);
        step(&mut b, &PARKED);
        assert_eq!(b.pos.y, ARENA_HEIGHT - BALL_SIZE);
        assert_eq!(b.direction.y, -1.0);
    }

    #[test]
    fn test_corner_flips_both_axes() {
        let dir = Vec2::new(-1.0, -1.0).normalize();
        let mut b = ball(Vec2::new(20.0, 20.0), dir, 8.0);
        let events = step(&mut b, &PARKED_LOW);
        assert_eq!(b.pos, Vec2::splat(BALL_SIZE));
        assert!(b.direction.x > 0.0 && b.direction.y > 0.0);
        assert_eq!(events.len(), 2);
    }

    /// Paddles parked at the bottom, leaving the top-left corner free
    const PARKED_LOW: [Rect; 2] = [
        Rect::new(PADDLE_MARGIN, ARENA_HEIGHT - PADDLE_HEIGHT, PADDLE_WIDTH, PADDLE_HEIGHT),
        Rect::new(1240.0, ARENA_HEIGHT - PADDLE_HEIGHT, PADDLE_WIDTH, PADDLE_HEIGHT),
    ];

    #[test]
    fn test_paddle_hit_from_right() {
        // Ball just right of paddle 1 heading left
        let paddles = [
            Rect::new(PADDLE_MARGIN, 232.0, PADDLE_WIDTH, PADDLE_HEIGHT),
            PARKED[1],
        ];
        let mut b = ball(Vec2::new(60.0, 360.0), Vec2::new(-1.0, 0.0), 4.0);
        let events = step(&mut b, &paddles);

        assert_eq!(b.pos.x, paddles[0].right() + BALL_SIZE + 1.0);
        assert_eq!(b.direction.x, 1.0);
        assert_eq!(events, vec![GameEvent::PaddleHit { player: Player::One }]);
        // Corrected position is clear of the paddle edge
        assert!(!circle_rect_overlap(b.pos, b.size, &paddles[0]));
    }

    #[test]
    fn test_paddle_hit_from_left() {
        let paddles = [
            PARKED[0],
            Rect::new(1240.0, 232.0, PADDLE_WIDTH, PADDLE_HEIGHT),
        ];
        let mut b = ball(Vec2::new(1226.0, 400.0), Vec2::new(1.0, 0.0), 7.0);
        let events = step(&mut b, &paddles);

        assert_eq!(b.pos.x, paddles[1].left() - BALL_SIZE - 1.0);
        assert_eq!(b.direction.x, -1.0);
        assert_eq!(events, vec![GameEvent::PaddleHit { player: Player::Two }]);
        assert!(!circle_rect_overlap(b.pos, b.size, &paddles[1]));
    }

    #[test]
    fn test_paddle_hit_on_top_edge() {
        let paddles = [
            Rect::new(600.0, 300.0, PADDLE_WIDTH, PADDLE_HEIGHT),
            PARKED[1],
        ];
        // Center above the paddle, horizontally within its span
        let mut b = ball(Vec2::new(608.0, 290.0), Vec2::new(0.0, 1.0), 5.0);
        step(&mut b, &paddles);

        assert_eq!(b.pos.y, 300.0 - BALL_SIZE - 1.0);
        assert_eq!(b.direction.y, -1.0);
        assert_eq!(b.pos.x, 608.0);
    }

    #[test]
    fn test_paddle_hit_on_bottom_edge() {
        let paddle = Rect::new(600.0, 300.0, PADDLE_WIDTH, PADDLE_HEIGHT);
        let paddles = [paddle, PARKED[1]];
        // Center below the paddle, moving up into it
        let mut b = ball(Vec2::new(608.0, 566.0), Vec2::new(0.0, -1.0), 5.0);
        let events = step(&mut b, &paddles);

        assert_eq!(b.pos.y, paddle.bottom() + BALL_SIZE + 1.0);
        assert_eq!(b.direction.y, 1.0);
        assert_eq!(b.pos.x, 608.0);
        assert_eq!(events, vec![GameEvent::PaddleHit { player: Player::One }]);
        assert!(!circle_rect_overlap(b.pos, b.size, &paddle));
    }

    #[test]
    fn test_paddle_corner_corrects_both_axes() {
        let paddles = [
            Rect::new(600.0, 300.0, PADDLE_WIDTH, PADDLE_HEIGHT),
            PARKED[1],
        ];
        // Up and to the left of the top-left corner, within reach
        let dir = Vec2::new(1.0, 1.0).normalize();
        let mut b = ball(Vec2::new(592.0, 292.0), dir, 4.0);
        let events = step(&mut b, &paddles);

        assert_eq!(b.pos, Vec2::new(600.0 - 17.0, 300.0 - 17.0));
        assert!(b.direction.x < 0.0 && b.direction.y < 0.0);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_center_inside_paddle_is_not_corrected() {
        let paddles = [
            Rect::new(600.0, 300.0, PADDLE_WIDTH, PADDLE_HEIGHT),
            PARKED[1],
        ];
        let mut b = ball(Vec2::new(608.0, 400.0), Vec2::new(1.0, 0.0), 5.0);
        let events = step(&mut b, &paddles);
        assert!(events.is_empty());
        assert_eq!(b.pos, Vec2::new(613.0, 400.0));
    }

    #[test]
    fn test_contact_uses_position_before_motion() {
        // Regression: the overlap test runs on the pre-move position. A ball that is
        // clear of the paddle now but will overlap after moving is not corrected
        // this tick.
        let paddles = [
            Rect::new(PADDLE_MARGIN, 232.0, PADDLE_WIDTH, PADDLE_HEIGHT),
            PARKED[1],
        ];
        let mut b = ball(Vec2::new(70.0, 360.0), Vec2::new(-1.0, 0.0), 9.0);
        let events = step(&mut b, &paddles);
        assert!(events.is_empty());
        assert_eq!(b.pos.x, 61.0);
        assert_eq!(b.direction.x, -1.0);

        // Next tick the ball now overlaps and is pushed back out
        let events = step(&mut b, &paddles);
        assert_eq!(events, vec![GameEvent::PaddleHit { player: Player::One }]);
        assert_eq!(b.pos.x, paddles[0].right() + BALL_SIZE + 1.0);
        assert_eq!(b.direction.x, 1.0);
    }
}
