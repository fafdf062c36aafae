//! Checked numeric conversions for pixel and screen coordinates

use crate::{Error, Result};

/// Convert usize to i32, failing on overflow
///
/// # Errors
///
/// Returns an error if the value exceeds `i32::MAX`
pub fn usize_to_i32(value: usize) -> Result<i32> {
    value
        .try_into()
        .map_err(|_| Error::InvalidInput(format!("Value {value} too large to fit in i32")))
}

/// Round an f32 to the nearest i32 inside `[min, max]`; non-finite input yields `min`
#[must_use]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_possible_truncation)]
pub fn f32_to_i32_clamp(value: f32, min: i32, max: i32) -> i32 {
    let (min, max) = if min <= max { (min, max) } else { (max, min) };
    if !value.is_finite() {
        return min;
    }
    (value.round().clamp(min as f32, max as f32) as i32).clamp(min, max)
}

/// Clamp an f64 screen coordinate into `[0, max]` as an i16 for X11 requests
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn f64_to_i16_clamp(value: f64, max: i16) -> i16 {
    let max = max.max(0);
    if !value.is_finite() {
        return 0;
    }
    value.round().clamp(0.0, f64::from(max)) as i16
}
