use crate::{Ball, Events, Paddle, Side, Surface};

/// Flip vertical velocity when the ball's top or bottom edge is past a wall.
///
/// The position is left alone, so the ball can overlap the wall for a frame.
pub fn bounce_off_walls(ball: &mut Ball, surface: &Surface, events: &mut Events) {
    if ball.pos.y - ball.radius < 0.0 || ball.pos.y + ball.radius > surface.height {
        ball.vel.y = -ball.vel.y;
        events.wall_bounce = true;
    }
}

/// Send the ball back toward the opponent if it overlaps `paddle`.
///
/// Vertical velocity is replaced by "spin": base speed scaled by how far from
/// the paddle center the ball struck, normalised to the paddle half height.
/// A hit is reported through `events`.
pub fn deflect_off_paddle(ball: &mut Ball, paddle: &Paddle, side: Side, events: &mut Events) {
    if !ball.bounds().overlaps(&paddle.bounds()) {
        return;
    }

    ball.vel.x = match side {
        Side::Left => ball.vel.x.abs(),
        Side::Right => -ball.vel.x.abs(),
    };

    let collide_point = (ball.pos.y - paddle.center_y()) / (paddle.height / 2.0);
    ball.vel.y = ball.speed * collide_point;

    events.record_paddle_hit(side);
    log::trace!("{side:?} paddle hit, collide point {collide_point:.3}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;
    use glam::Vec2;

    fn ball_at(pos: Vec2, vel: Vec2) -> Ball {
        Ball::new(pos, vel, 10.0, 6.0, Color::WHITE)
    }

    fn left_paddle() -> Paddle {
        Paddle::new(20.0, 250.0, 15.0, 100.0, Color::GREEN)
    }

    fn right_paddle() -> Paddle {
        Paddle::new(765.0, 250.0, 15.0, 100.0, Color::RED).with_speed(4.0)
    }

    fn surface() -> Surface {
        Surface::new(800.0, 600.0)
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let mut events = Events::new();
        let mut ball = ball_at(Vec2::new(400.0, 5.0), Vec2::new(6.0, -6.0));

        bounce_off_walls(&mut ball, &surface(), &mut events);

        assert_eq!(ball.vel, Vec2::new(6.0, 6.0));
        assert_eq!(ball.pos.y, 5.0, "Position is not corrected");
        assert!(events.wall_bounce);
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let mut events = Events::new();
        let mut ball = ball_at(Vec2::new(400.0, 595.0), Vec2::new(-6.0, 6.0));

        bounce_off_walls(&mut ball, &surface(), &mut events);

        assert_eq!(ball.vel, Vec2::new(-6.0, -6.0));
        assert_eq!(ball.pos.y, 595.0);
        assert!(events.wall_bounce);
    }

    #[test]
    fn test_ball_touching_wall_does_not_bounce() {
        let mut events = Events::new();
        let mut ball = ball_at(Vec2::new(400.0, 10.0), Vec2::new(6.0, -6.0));

        bounce_off_walls(&mut ball, &surface(), &mut events);

        assert_eq!(ball.vel.y, -6.0);
        assert!(!events.wall_bounce);
    }

    #[test]
    fn test_ball_collides_with_left_paddle() {
        let mut events = Events::new();
        let mut ball = ball_at(Vec2::new(40.0, 300.0), Vec2::new(-6.0, 3.0));

        deflect_off_paddle(&mut ball, &left_paddle(), Side::Left, &mut events);

        assert_eq!(ball.vel.x, 6.0);
        assert_eq!(ball.vel.y, 0.0, "Center hit has no spin");
        assert!(events.left_paddle_hit);
        assert!(!events.right_paddle_hit);
    }

    #[test]
    fn test_ball_collides_with_right_paddle() {
        let mut events = Events::new();
        let mut ball = ball_at(Vec2::new(760.0, 325.0), Vec2::new(6.0, 0.0));

        deflect_off_paddle(&mut ball, &right_paddle(), Side::Right, &mut events);

        assert_eq!(ball.vel.x, -6.0);
        assert_eq!(ball.vel.y, 3.0, "Half way down the paddle gives half speed");
        assert!(events.right_paddle_hit);
    }

    #[test]
    fn test_direction_is_forced_not_flipped() {
        let mut events = Events::new();
        // Already moving away from the left paddle; stays moving right
        let mut ball = ball_at(Vec2::new(40.0, 300.0), Vec2::new(6.0, 0.0));

        deflect_off_paddle(&mut ball, &left_paddle(), Side::Left, &mut events);

        assert_eq!(ball.vel.x, 6.0);
    }

    #[test]
    fn test_spin_follows_hit_position() {
        let mut events = Events::new();

        let mut top = ball_at(Vec2::new(40.0, 260.0), Vec2::new(-6.0, 0.0));
        deflect_off_paddle(&mut top, &left_paddle(), Side::Left, &mut events);
        assert!(top.vel.y < 0.0, "Top hit deflects upward");

        let mut bottom = ball_at(Vec2::new(40.0, 340.0), Vec2::new(-6.0, 0.0));
        deflect_off_paddle(&mut bottom, &left_paddle(), Side::Left, &mut events);
        assert!(bottom.vel.y > 0.0, "Bottom hit deflects downward");
        assert_eq!(top.vel.y, -bottom.vel.y);
    }

    #[test]
    fn test_spin_is_not_clamped() {
        let mut events = Events::new();
        // Ball center below the paddle but its top edge still overlaps
        let mut ball = ball_at(Vec2::new(40.0, 355.0), Vec2::new(-6.0, 0.0));

        deflect_off_paddle(&mut ball, &left_paddle(), Side::Left, &mut events);

        // (355 - 300) / 50 = 1.1
        assert!((ball.vel.y - 6.6).abs() < 1e-4);
        assert!(events.left_paddle_hit);
    }

    #[test]
    fn test_miss_leaves_ball_untouched() {
        let mut events = Events::new();
        let mut ball = ball_at(Vec2::new(40.0, 100.0), Vec2::new(-6.0, 2.0));
        let before = ball;

        deflect_off_paddle(&mut ball, &left_paddle(), Side::Left, &mut events);

        assert_eq!(ball, before);
        assert!(!events.left_paddle_hit);
    }

    #[test]
    fn test_touching_paddle_edge_is_not_a_hit() {
        let mut events = Events::new();
        // Left edge of ball exactly on paddle's right face
        let mut ball = ball_at(Vec2::new(45.0, 300.0), Vec2::new(-6.0, 0.0));

        deflect_off_paddle(&mut ball, &left_paddle(), Side::Left, &mut events);

        assert_eq!(ball.vel, Vec2::new(-6.0, 0.0));
        assert!(!events.left_paddle_hit);
    }

    #[test]
    fn test_events_mark_only_the_side_hit() {
        let mut events = Events::new();
        let mut ball = ball_at(Vec2::new(760.0, 300.0), Vec2::new(6.0, 0.0));

        deflect_off_paddle(&mut ball, &left_paddle(), Side::Left, &mut events);
        assert!(!events.left_paddle_hit && !events.right_paddle_hit);

        deflect_off_paddle(&mut ball, &right_paddle(), Side::Right, &mut events);
        assert!(events.right_paddle_hit);
        assert!(!events.left_paddle_hit);
    }
}
