use crate::{Ball, Paddle, Surface};

/// Chase the ball's height, holding still inside the dead zone around the
/// paddle center. Paddles without a speed never move.
pub fn move_ai_paddle(paddle: &mut Paddle, ball: &Ball, surface: &Surface, dead_zone: f32) {
    let Some(speed) = paddle.speed else {
        return;
    };

    let center = paddle.center_y();
    if ball.pos.y < center - dead_zone {
        paddle.y -= speed;
    } else if ball.pos.y > center + dead_zone {
        paddle.y += speed;
    }

    paddle.clamp_to(surface.height);
}
