//! Instantaneous frame rate from consecutive frame timestamps.

use crate::constants::FPS_EPSILON;
use std::time::Instant;

/// Frames per second for an elapsed time, flooring the interval at [`FPS_EPSILON`]
#[must_use]
pub fn fps_from_elapsed(elapsed_secs: f64) -> f64 {
    1.0 / elapsed_secs.max(FPS_EPSILON)
}

/// Tracks the previous frame timestamp across loop iterations
#[derive(Debug, Default)]
pub struct FpsCounter {
    previous: Option<Instant>,
}

impl FpsCounter {
    #[must_use]
    pub const fn new() -> Self {
        Self { previous: None }
    }

    /// Record a frame at `now` and return the rate since the previous frame.
    ///
    /// The first call has nothing to compare against and reports 0.
    pub fn tick_at(&mut self, now: Instant) -> f64 {
        let fps = self
            .previous
            .map_or(0.0, |prev| fps_from_elapsed(now.saturating_duration_since(prev).as_secs_f64()));
        self.previous = Some(now);
        fps
    }

    pub fn tick(&mut self) -> f64 {
        self.tick_at(Instant::now())
    }
}
