use crate::{Paddle, Surface};

/// Center the paddle on the pointer's vertical position, then clamp.
///
/// Non-finite pointer values are ignored so the paddle never leaves the
/// surface.
pub fn apply_pointer(paddle: &mut Paddle, pointer_y: f32, surface: &Surface) {
    if !pointer_y.is_finite() {
        return;
    }
    paddle.y = pointer_y - paddle.height / 2.0;
    paddle.clamp_to(surface.height);
}
