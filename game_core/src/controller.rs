//! Frame loop driver
//!
//! The controller owns the simulator and the two host-provided pieces: where
//! to draw and how to ask for the next frame. It never loops by itself; the
//! host calls [`MatchController::tick`] whenever the scheduled frame fires.

use crate::render::{paint, render_frame, DrawTarget};
use crate::MatchSimulator;

/// Host hook that arranges for the next `tick` (e.g. `requestAnimationFrame`)
pub trait FrameScheduler {
    fn request_frame(&mut self);
}

impl<F: FnMut()> FrameScheduler for F {
    fn request_frame(&mut self) {
        self()
    }
}

pub struct MatchController<T, S> {
    pub simulator: MatchSimulator,
    target: T,
    scheduler: S,
}

impl<T: DrawTarget, S: FrameScheduler> MatchController<T, S> {
    pub fn new(simulator: MatchSimulator, target: T, scheduler: S) -> Self {
        Self {
            simulator,
            target,
            scheduler,
        }
    }

    /// Paint the opening state and schedule the first frame
    pub fn start(&mut self) -> Result<(), T::Error> {
        self.draw()?;
        self.scheduler.request_frame();
        Ok(())
    }

    /// Latch the latest pointer position into the left paddle
    pub fn pointer_moved(&mut self, pointer_y: f32) {
        self.simulator.set_left_paddle_target(pointer_y);
    }

    /// Advance, repaint, then schedule the next frame.
    ///
    /// A paint failure is returned and no further frame is requested.
    pub fn tick(&mut self) -> Result<(), T::Error> {
        self.simulator.advance_frame();
        self.draw()?;
        self.scheduler.request_frame();
        Ok(())
    }

    fn draw(&mut self) -> Result<(), T::Error> {
        let commands = render_frame(&self.simulator.state, &self.simulator.config);
        paint(&commands, &mut self.target)
    }
}
