use crate::{Events, GameRng, MatchState, Side};

/// Award a point when the ball's edge is past a side wall, then re-serve.
///
/// The left wall is checked before the right one; after a reset the ball sits
/// at the center so at most one side scores per frame.
pub fn check_scoring(state: &mut MatchState, events: &mut Events, rng: &mut GameRng) {
    if state.ball.pos.x - state.ball.radius < 0.0 {
        award_point(state, Side::Right, events, rng);
    }

    if state.ball.pos.x + state.ball.radius > state.surface.width {
        award_point(state, Side::Left, events, rng);
    }
}

fn award_point(state: &mut MatchState, side: Side, events: &mut Events, rng: &mut GameRng) {
    state.score.award(side);
    events.record_score(side);
    state.reset_ball(rng);

    log::debug!(
        "{side:?} scored: {} - {}",
        state.score.left,
        state.score.right
    );
}
