use crate::{Color, Params};
use thiserror::Error;

/// Geometry that cannot host a match
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("surface must be finite and positive, got {width}x{height}")]
    InvalidSurface { width: f32, height: f32 },
    #[error("paddle must be finite and positive, got {width}x{height}")]
    InvalidPaddle { width: f32, height: f32 },
    #[error("paddle height {paddle_height} does not fit surface height {surface_height}")]
    PaddleTooTall {
        paddle_height: f32,
        surface_height: f32,
    },
    #[error("paddles need {required} horizontal pixels but surface is {surface_width} wide")]
    PaddlesTooWide { required: f32, surface_width: f32 },
    #[error("ball radius {0} must be finite, positive and fit the surface")]
    InvalidBallRadius(f32),
    #[error("{name} must be finite and non-negative, got {value}")]
    InvalidSpeed { name: &'static str, value: f32 },
}

/// Game configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub surface_width: f32,
    pub surface_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub ai_paddle_speed: f32,
    pub ai_dead_zone: f32,
    pub ball_radius: f32,
    pub ball_speed: f32,
    pub left_paddle_color: Color,
    pub right_paddle_color: Color,
    pub ball_color: Color,
    pub center_line_color: Color,
    pub score_color: Color,
    pub center_line_dash: [f32; 2],
    pub score_font: &'static str,
    pub score_top_offset: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            surface_width: Params::SURFACE_WIDTH,
            surface_height: Params::SURFACE_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            ai_paddle_speed: Params::AI_PADDLE_SPEED,
            ai_dead_zone: Params::AI_DEAD_ZONE,
            ball_radius: Params::BALL_RADIUS,
            ball_speed: Params::BALL_SPEED,
            left_paddle_color: Color::GREEN,
            right_paddle_color: Color::RED,
            ball_color: Color::WHITE,
            center_line_color: Color::GREY,
            score_color: Color::WHITE,
            center_line_dash: Params::CENTER_LINE_DASH,
            score_font: Params::SCORE_FONT,
            score_top_offset: Params::SCORE_TOP_OFFSET,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default tuning on a surface of the given size
    pub fn with_surface(width: f32, height: f32) -> Self {
        Self {
            surface_width: width,
            surface_height: height,
            ..Self::default()
        }
    }

    /// X position of a paddle's left edge
    pub fn paddle_x(&self, side: crate::Side) -> f32 {
        match side {
            crate::Side::Left => self.paddle_margin,
            crate::Side::Right => self.surface_width - self.paddle_margin - self.paddle_width,
        }
    }

    /// Y position that vertically centers a paddle on the surface
    pub fn paddle_start_y(&self) -> f32 {
        self.surface_height / 2.0 - self.paddle_height / 2.0
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |v: f32| v.is_finite() && v > 0.0;

        if !positive(self.surface_width) || !positive(self.surface_height) {
            return Err(ConfigError::InvalidSurface {
                width: self.surface_width,
                height: self.surface_height,
            });
        }
        if !positive(self.paddle_width) || !positive(self.paddle_height) {
            return Err(ConfigError::InvalidPaddle {
                width: self.paddle_width,
                height: self.paddle_height,
            });
        }
        if self.paddle_height > self.surface_height {
            return Err(ConfigError::PaddleTooTall {
                paddle_height: self.paddle_height,
                surface_height: self.surface_height,
            });
        }

        let required = 2.0 * (self.paddle_margin + self.paddle_width);
        if !self.paddle_margin.is_finite() || self.paddle_margin < 0.0 || required > self.surface_width
        {
            return Err(ConfigError::PaddlesTooWide {
                required,
                surface_width: self.surface_width,
            });
        }

        let diameter = self.ball_radius * 2.0;
        if !positive(self.ball_radius)
            || diameter > self.surface_width
            || diameter > self.surface_height
        {
            return Err(ConfigError::InvalidBallRadius(self.ball_radius));
        }

        for (name, value) in [
            ("ball_speed", self.ball_speed),
            ("ai_paddle_speed", self.ai_paddle_speed),
            ("ai_dead_zone", self.ai_dead_zone),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidSpeed { name, value });
            }
        }

        Ok(())
    }
}
