//! Hand detector interface.

use crate::{hand::Hand, Result};
use opencv::core::Mat;

/// Finds hands in a frame.
///
/// Implementations may draw their own annotations (landmarks, skeleton) onto
/// the frame; the returned hands are in frame pixel coordinates.
pub trait HandDetector {
    fn detect(&mut self, frame: &mut Mat) -> Result<Vec<Hand>>;
}
