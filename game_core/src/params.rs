/// Game tuning parameters (pixels, pixels per frame)
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Surface
    pub const SURFACE_WIDTH: f32 = 800.0;
    pub const SURFACE_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_MARGIN: f32 = 20.0;

    // AI paddle
    pub const AI_PADDLE_SPEED: f32 = 4.0;
    pub const AI_DEAD_ZONE: f32 = 10.0; // Half-width of the no-move band around paddle center

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED: f32 = 6.0;

    // Scoreboard
    pub const SCORE_FONT: &'static str = "32px Arial";
    pub const SCORE_TOP_OFFSET: f32 = 40.0;

    // Center line
    pub const CENTER_LINE_DASH: [f32; 2] = [10.0, 15.0];
}
