pub mod components;
pub mod config;
pub mod controller;
pub mod params;
pub mod render;
pub mod resources;
pub mod simulation;
pub mod state;
pub mod surface;
pub mod systems;

pub use components::*;
pub use config::*;
pub use controller::*;
pub use params::*;
pub use render::{paint, render_frame, DrawCommand, DrawTarget};
pub use resources::*;
pub use simulation::*;
pub use state::*;
pub use surface::*;

use systems::*;

/// Run one frame of the match simulation.
///
/// Each step can invalidate conditions checked by a later one, so the order is
/// fixed: move, wall bounce, left paddle, right paddle, scoring, AI.
pub fn step(state: &mut MatchState, config: &Config, events: &mut Events, rng: &mut GameRng) {
    // Clear events at start of frame
    events.clear();

    // 1. Integrate ball position
    move_ball(&mut state.ball);

    // 2. Top/bottom walls
    bounce_off_walls(&mut state.ball, &state.surface, events);

    // 3-4. Paddles; both can fire in one frame, the right one wins
    deflect_off_paddle(&mut state.ball, &state.left_paddle, Side::Left, events);
    deflect_off_paddle(&mut state.ball, &state.right_paddle, Side::Right, events);

    // 5-6. Ball past a side wall
    check_scoring(state, events, rng);

    // 7. AI paddle follows the ball
    move_ai_paddle(
        &mut state.right_paddle,
        &state.ball,
        &state.surface,
        config.ai_dead_zone,
    );
}
