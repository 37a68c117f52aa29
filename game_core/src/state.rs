use glam::Vec2;

use crate::{Ball, Config, ConfigError, GameRng, Paddle, Score, Side, Surface};

/// Everything that changes during a match
#[derive(Debug, Clone, PartialEq)]
pub struct MatchState {
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
    pub ball: Ball,
    pub score: Score,
    pub surface: Surface,
}

impl MatchState {
    /// Build the opening layout: centered paddles, ball at center with a
    /// random diagonal. Rejects geometry the match cannot be played on.
    pub fn new(config: &Config, rng: &mut GameRng) -> Result<Self, ConfigError> {
        config.validate()?;

        let surface = Surface::new(config.surface_width, config.surface_height);
        let start_y = config.paddle_start_y();

        let left_paddle = Paddle::new(
            config.paddle_x(Side::Left),
            start_y,
            config.paddle_width,
            config.paddle_height,
            config.left_paddle_color,
        );
        let right_paddle = Paddle::new(
            config.paddle_x(Side::Right),
            start_y,
            config.paddle_width,
            config.paddle_height,
            config.right_paddle_color,
        )
        .with_speed(config.ai_paddle_speed);

        let mut ball = Ball::new(
            surface.center(),
            Vec2::ZERO,
            config.ball_radius,
            config.ball_speed,
            config.ball_color,
        );
        ball.reset(surface.center(), rng);

        Ok(Self {
            left_paddle,
            right_paddle,
            ball,
            score: Score::new(),
            surface,
        })
    }

    /// Put the ball back at the center with a fresh random diagonal
    pub fn reset_ball(&mut self, rng: &mut GameRng) {
        let center = self.surface.center();
        self.ball.reset(center, rng);
    }
}

/// Opening state on a surface of the given size with default tuning
pub fn create_initial_state(
    surface_width: f32,
    surface_height: f32,
    rng: &mut GameRng,
) -> Result<MatchState, ConfigError> {
    MatchState::new(&Config::with_surface(surface_width, surface_height), rng)
}
