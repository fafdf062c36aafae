//! Mapping from camera-frame coordinates to screen coordinates.
//!
//! Only an inner "active rectangle" of the camera frame is mapped onto the
//! full screen; the margin around it is a dead zone so the fingertip can reach
//! the screen edges without leaving the camera view.

/// Linearly map `value` from `input` range onto `output` range.
///
/// Values outside `input` extrapolate along the same line; there is no clamping.
/// A degenerate input range maps everything to `output.0`.
#[must_use]
pub fn interp(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let span = input.1 - input.0;
    if span == 0.0 {
        return output.0;
    }
    output.0 + (value - input.0) * (output.1 - output.0) / span
}

/// Inset region of the camera frame that is mapped onto the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveRegion {
    /// Inset from every frame edge, in pixels
    pub margin: i32,
    /// Camera frame width
    pub frame_width: i32,
    /// Camera frame height
    pub frame_height: i32,
}

impl ActiveRegion {
    #[must_use]
    pub const fn new(margin: i32, frame_width: i32, frame_height: i32) -> Self {
        Self {
            margin,
            frame_width,
            frame_height,
        }
    }

    /// Top-left corner of the active rectangle
    #[must_use]
    pub const fn top_left(&self) -> (i32, i32) {
        (self.margin, self.margin)
    }

    /// Bottom-right corner of the active rectangle
    #[must_use]
    pub const fn bottom_right(&self) -> (i32, i32) {
        (self.frame_width - self.margin, self.frame_height - self.margin)
    }

    /// Map a frame pixel to screen coordinates in `[0, width] x [0, height]`
    #[must_use]
    pub fn map_to_screen(&self, x: f64, y: f64, screen: (u32, u32)) -> (f64, f64) {
        let (left, top) = self.top_left();
        let (right, bottom) = self.bottom_right();
        (
            interp(x, (f64::from(left), f64::from(right)), (0.0, f64::from(screen.0))),
            interp(y, (f64::from(top), f64::from(bottom)), (0.0, f64::from(screen.1))),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: (u32, u32) = (1920, 1080);

    #[test]
    fn test_interp_basic() {
        assert_eq!(interp(5.0, (0.0, 10.0), (0.0, 100.0)), 50.0);
        assert_eq!(interp(0.0, (0.0, 10.0), (0.0, 100.0)), 0.0);
        assert_eq!(interp(10.0, (0.0, 10.0), (0.0, 100.0)), 100.0);
    }

    #[test]
    fn test_interp_extrapolates() {
        assert_eq!(interp(-5.0, (0.0, 10.0), (0.0, 100.0)), -50.0);
        assert_eq!(interp(15.0, (0.0, 10.0), (0.0, 100.0)), 150.0);
    }

    #[test]
    fn test_interp_degenerate_range() {
        assert_eq!(interp(42.0, (3.0, 3.0), (7.0, 100.0)), 7.0);
    }

    #[test]
    fn test_region_boundaries_map_to_screen_edges() {
        let region = ActiveRegion::new(100, 1280, 720);

        assert_eq!(region.map_to_screen(100.0, 100.0, SCREEN), (0.0, 0.0));
        assert_eq!(region.map_to_screen(1180.0, 620.0, SCREEN), (1920.0, 1080.0));
    }

    #[test]
    fn test_region_midpoint_maps_to_screen_midpoint() {
        let region = ActiveRegion::new(100, 1280, 720);
        let (x, y) = region.map_to_screen(640.0, 360.0, SCREEN);
        assert!((x - 960.0).abs() < 1e-9);
        assert!((y - 540.0).abs() < 1e-9);
    }

    #[test]
    fn test_region_dead_zone_extrapolates() {
        let region = ActiveRegion::new(100, 1280, 720);
        let (x, y) = region.map_to_screen(50.0, 700.0, SCREEN);
        assert!(x < 0.0);
        assert!(y > 1080.0);
    }

    #[test]
    fn test_region_corners() {
        let region = ActiveRegion::new(100, 1280, 720);
        assert_eq!(region.top_left(), (100, 100));
        assert_eq!(region.bottom_right(), (1180, 620));
    }
}
