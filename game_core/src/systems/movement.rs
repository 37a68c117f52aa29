use crate::Ball;

/// Move ball by one frame of velocity
pub fn move_ball(ball: &mut Ball) {
    ball.pos += ball.vel;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;
    use glam::Vec2;

    #[test]
    fn test_move_ball_integrates_velocity() {
        let mut ball = Ball::new(
            Vec2::new(100.0, 200.0),
            Vec2::new(6.0, -6.0),
            10.0,
            6.0,
            Color::WHITE,
        );

        move_ball(&mut ball);
        assert_eq!(ball.pos, Vec2::new(106.0, 194.0));

        move_ball(&mut ball);
        assert_eq!(ball.pos, Vec2::new(112.0, 188.0));
        assert_eq!(ball.vel, Vec2::new(6.0, -6.0), "Velocity is untouched");
    }
}
