//! Frame orchestration
//!
//! Each frame: sample both players' bindings, run one simulation tick, then
//! draw the arena. `run` repeats that until the window asks to close.

use glam::Vec2;

use crate::consts::*;
use crate::input::{InputBindings, InputSource};
use crate::platform::Window;
use crate::renderer::{Canvas, colors, shapes};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, Player, Score, TickInput, tick};

/// FPS counter placement
const FPS_FONT_SIZE: f32 = 16.0;
const FPS_MARGIN: f32 = 8.0;

/// A running match plus everything needed to drive it
#[derive(Debug, Clone)]
pub struct Game {
    pub state: GameState,
    bindings: [InputBindings; 2],
    show_fps: bool,
    fps: Option<u32>,
}

impl Game {
    pub fn new(settings: &Settings, seed: u64) -> Self {
        log::info!(
            "New match (seed {}): player one {}/{}, player two {}/{}",
            seed,
            settings.player_one.up,
            settings.player_one.down,
            settings.player_two.up,
            settings.player_two.down,
        );
        Self {
            state: GameState::new(seed),
            bindings: Player::BOTH.map(|player| settings.bindings(player)),
            show_fps: settings.show_fps,
            fps: None,
        }
    }

    pub fn score(&self) -> Score {
        self.state.score
    }

    /// Latest measured frame rate, shown when enabled in settings
    pub fn set_fps(&mut self, fps: u32) {
        self.fps = Some(fps);
    }

    /// Read both players' intent through their bindings
    pub fn sample_input(&self, input: &(impl InputSource + ?Sized)) -> TickInput {
        TickInput {
            paddles: self.bindings.map(|b| b.sample(input)),
        }
    }

    /// Run one simulation tick
    pub fn update(&mut self, input: &(impl InputSource + ?Sized)) {
        let input = self.sample_input(input);
        tick(&mut self.state, &input);

        for event in &self.state.events {
            match event {
                GameEvent::Goal { scorer, score } => log::info!(
                    "Goal for player {}! {} - {}",
                    player_number(*scorer),
                    score.player1,
                    score.player2
                ),
                GameEvent::PaddleHit { player } => {
                    log::debug!("Paddle {} hit", player_number(*player))
                }
                GameEvent::WallBounce { wall } => log::debug!("Bounce off {:?} wall", wall),
            }
        }
    }

    /// Draw the current state
    pub fn draw(&self, canvas: &mut (impl Canvas + ?Sized)) {
        canvas.clear(colors::BACKGROUND);

        for paddle in &self.state.paddles {
            canvas.fill_rect(paddle.rect, colors::FOREGROUND);
        }

        let ball = &self.state.ball;
        canvas.fill_circle(ball.pos, ball.size, colors::FOREGROUND);

        let score = self.state.score;
        canvas.draw_text(
            &score.player1.to_string(),
            Vec2::new(SCORE_INSET_X, SCORE_Y),
            SCORE_FONT_SIZE,
            colors::FOREGROUND,
        );
        canvas.draw_text(
            &score.player2.to_string(),
            Vec2::new(self.state.arena.right() - SCORE_INSET_X, SCORE_Y),
            SCORE_FONT_SIZE,
            colors::FOREGROUND,
        );

        if let (true, Some(fps)) = (self.show_fps, self.fps) {
            let text = fps.to_string();
            let x = self.state.arena.right() - FPS_MARGIN - shapes::text_width(&text, FPS_FONT_SIZE);
            let y = self.state.arena.bottom() - FPS_MARGIN - FPS_FONT_SIZE;
            canvas.draw_text(&text, Vec2::new(x, y), FPS_FONT_SIZE, colors::HUD_DIM);
        }
    }

    /// Draw the current state as one presented frame
    pub fn render<W: Window + ?Sized>(&self, window: &mut W) {
        window.begin_frame();
        self.draw(window);
        window.end_frame();
    }

    /// One loop iteration: update then render
    pub fn frame<W: Window + ?Sized>(&mut self, window: &mut W) {
        self.update(&*window);
        self.render(window);
    }
}

fn player_number(player: Player) -> usize {
    player.index() + 1
}

/// Run the game loop until the window asks to close
///
/// The close request is checked only between frames, so a started frame always
/// finishes.
pub fn run<W: Window + ?Sized>(game: &mut Game, window: &mut W) {
    window.set_target_fps(TARGET_FPS);

    while !window.should_close() {
        game.frame(window);
    }

    window.close();
    let score = game.score();
    log::info!(
        "Match over after {} frames (seed {}): {} - {}",
        game.state.frame,
        game.state.seed,
        score.points(Player::One),
        score.points(Player::Two)
    );
}
