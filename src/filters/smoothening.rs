use super::PointerFilter;
use crate::{Error, Result};

/// One-pole low-pass filter: each step moves `1 / factor` of the way to the target.
///
/// `current = previous + (target - previous) / factor`. The state starts at the
/// screen origin and persists until [`PointerFilter::reset`].
#[derive(Debug, Clone)]
pub struct Smoother {
    factor: f64,
    previous: (f64, f64),
}

impl Smoother {
    /// Create a smoother with the given divisor
    ///
    /// # Errors
    ///
    /// Returns an error unless `factor` is finite and greater than zero
    pub fn new(factor: f64) -> Result<Self> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(Error::InvalidInput(format!(
                "Smoothening factor must be a positive number, got {factor}"
            )));
        }
        Ok(Self {
            factor,
            previous: (0.0, 0.0),
        })
    }

    #[must_use]
    pub const fn factor(&self) -> f64 {
        self.factor
    }

    /// Last smoothed location
    #[must_use]
    pub const fn location(&self) -> (f64, f64) {
        self.previous
    }
}

impl PointerFilter for Smoother {
    fn apply(&mut self, x: f64, y: f64) -> (f64, f64) {
        let (prev_x, prev_y) = self.previous;
        let current = (prev_x + (x - prev_x) / self.factor, prev_y + (y - prev_y) / self.factor);
        self.previous = current;
        current
    }

    fn reset(&mut self) {
        self.previous = (0.0, 0.0);
    }

    fn name(&self) -> &str {
        "Smoother"
    }
}
