//! Fixed timestep simulation tick
//!
//! One tick per rendered frame: paddle one, paddle two, ball, goal check.

use super::paddle::PaddleInput;
use super::score::check_goal;
use super::state::{GameEvent, GameState, Player};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Movement intent indexed by `Player::index`
    pub paddles: [PaddleInput; 2],
}

impl TickInput {
    #[inline]
    pub fn paddle(&self, player: Player) -> PaddleInput {
        self.paddles[player.index()]
    }
}

/// Advance the game state by one fixed timestep
///
/// Events from the previous tick are discarded; `state.events` afterwards holds
/// exactly what happened during this one.
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();
    state.frame += 1;

    for player in Player::BOTH {
        state.paddles[player.index()].apply(input.paddle(player), &state.arena);
    }

    let [one, two] = &state.paddles;
    state
        .ball
        .advance(&state.arena, [&one.rect, &two.rect], &mut state.events);

    if let Some(scorer) = check_goal(
        &mut state.ball,
        &mut state.score,
        &state.arena,
        &mut state.rng,
    ) {
        state.events.push(GameEvent::Goal {
            scorer,
            score: state.score,
        });
    }
}
