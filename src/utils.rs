//! Utility functions for coordinate conversion and frame geometry.

pub mod safe_cast;

use crate::{Error, Result};
use opencv::{core::Mat, prelude::*};

/// Width and height of a frame in pixels
///
/// # Errors
///
/// Returns an error if the frame is empty
pub fn frame_size(frame: &Mat) -> Result<(i32, i32)> {
    if frame.empty() {
        return Err(Error::InvalidInput("Frame is empty".to_string()));
    }
    Ok((frame.cols(), frame.rows()))
}
