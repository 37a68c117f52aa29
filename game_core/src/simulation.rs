use crate::{step, Config, ConfigError, Events, GameRng, MatchState};

/// A single running match: state plus everything needed to advance it
pub struct MatchSimulator {
    pub state: MatchState,
    pub config: Config,
    pub events: Events,
    pub rng: GameRng,
}

impl MatchSimulator {
    pub fn new(config: Config, mut rng: GameRng) -> Result<Self, ConfigError> {
        let state = MatchState::new(&config, &mut rng)?;

        log::info!(
            "match created on {}x{} surface",
            config.surface_width,
            config.surface_height
        );

        Ok(Self {
            state,
            config,
            events: Events::new(),
            rng,
        })
    }

    /// Align the left paddle's center with the pointer, clamped to the surface
    pub fn set_left_paddle_target(&mut self, pointer_y: f32) {
        crate::systems::apply_pointer(
            &mut self.state.left_paddle,
            pointer_y,
            &self.state.surface,
        );
    }

    /// Run one frame of the simulation
    pub fn advance_frame(&mut self) {
        step(
            &mut self.state,
            &self.config,
            &mut self.events,
            &mut self.rng,
        );
    }
}
