//! Turn match state into draw commands
//!
//! Rendering is split in two: [`render_frame`] is a pure function from state to
//! an ordered command list, and [`paint`] replays that list against any
//! [`DrawTarget`]. Every frame is a full repaint; nothing is retained.

use glam::Vec2;

use crate::{Color, Config, MatchState, Paddle};

/// One drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Wipe the whole surface
    Clear { width: f32, height: f32 },
    /// Stroked line with an on/off dash pattern
    DashedLine {
        from: Vec2,
        to: Vec2,
        dash: [f32; 2],
        color: Color,
    },
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    /// Text anchored at its baseline-left point
    Text {
        text: String,
        x: f32,
        y: f32,
        font: &'static str,
        color: Color,
    },
}

/// Something that can execute draw primitives (a 2D canvas, a recorder, ...)
pub trait DrawTarget {
    type Error;

    fn clear(&mut self, width: f32, height: f32) -> Result<(), Self::Error>;

    fn dashed_line(
        &mut self,
        from: Vec2,
        to: Vec2,
        dash: [f32; 2],
        color: Color,
    ) -> Result<(), Self::Error>;

    fn fill_rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    ) -> Result<(), Self::Error>;

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) -> Result<(), Self::Error>;

    fn fill_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        font: &str,
        color: Color,
    ) -> Result<(), Self::Error>;
}

impl DrawCommand {
    pub fn apply<T: DrawTarget>(&self, target: &mut T) -> Result<(), T::Error> {
        match self {
            DrawCommand::Clear { width, height } => target.clear(*width, *height),
            DrawCommand::DashedLine {
                from,
                to,
                dash,
                color,
            } => target.dashed_line(*from, *to, *dash, *color),
            DrawCommand::FillRect {
                x,
                y,
                width,
                height,
                color,
            } => target.fill_rect(*x, *y, *width, *height, *color),
            DrawCommand::FillCircle {
                center,
                radius,
                color,
            } => target.fill_circle(*center, *radius, *color),
            DrawCommand::Text {
                text,
                x,
                y,
                font,
                color,
            } => target.fill_text(text, *x, *y, font, *color),
        }
    }
}

/// Build the full command list for one frame.
///
/// Order: clear, center line, left paddle, right paddle, ball, left score,
/// right score.
pub fn render_frame(state: &MatchState, config: &Config) -> Vec<DrawCommand> {
    let width = state.surface.width;
    let height = state.surface.height;

    vec![
        DrawCommand::Clear { width, height },
        DrawCommand::DashedLine {
            from: Vec2::new(width / 2.0, 0.0),
            to: Vec2::new(width / 2.0, height),
            dash: config.center_line_dash,
            color: config.center_line_color,
        },
        paddle_rect(&state.left_paddle),
        paddle_rect(&state.right_paddle),
        DrawCommand::FillCircle {
            center: state.ball.pos,
            radius: state.ball.radius,
            color: state.ball.color,
        },
        score_text(state.score.left, width / 4.0, config),
        score_text(state.score.right, width * 3.0 / 4.0, config),
    ]
}

/// Replay `commands` in order, stopping at the first failure
pub fn paint<T: DrawTarget>(commands: &[DrawCommand], target: &mut T) -> Result<(), T::Error> {
    commands.iter().try_for_each(|command| command.apply(target))
}

fn paddle_rect(paddle: &Paddle) -> DrawCommand {
    DrawCommand::FillRect {
        x: paddle.x,
        y: paddle.y,
        width: paddle.width,
        height: paddle.height,
        color: paddle.color,
    }
}

fn score_text(value: u32, x: f32, config: &Config) -> DrawCommand {
    DrawCommand::Text {
        text: value.to_string(),
        x,
        y: config.score_top_offset,
        font: config.score_font,
        color: config.score_color,
    }
}
