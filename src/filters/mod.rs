//! Pointer filters for reducing fingertip jitter.
//!
//! Landmark positions wobble by a few pixels from frame to frame even when the
//! hand is still. Filters sit between the coordinate mapper and the mouse
//! actuator and trade responsiveness for a steadier cursor.

/// One-pole divisor smoother
pub mod smoothening;

pub use smoothening::Smoother;

/// Trait for all pointer filters
pub trait PointerFilter: Send {
    /// Feed a mapped screen position and return the filtered position
    fn apply(&mut self, x: f64, y: f64) -> (f64, f64);

    /// Reset filter state to its initial value
    fn reset(&mut self);

    /// Get filter name
    fn name(&self) -> &str;
}

/// No-op filter that passes through values unchanged
pub struct NoFilter;

impl PointerFilter for NoFilter {
    fn apply(&mut self, x: f64, y: f64) -> (f64, f64) {
        (x, y)
    }

    fn reset(&mut self) {}

    fn name(&self) -> &str {
        "NoFilter"
    }
}
