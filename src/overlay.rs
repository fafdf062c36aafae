//! Drawing helpers for the preview frame.

use crate::{
    constants::{colors, landmarks::CONNECTIONS, MARKER_RADIUS},
    controller::FrameOutcome,
    hand::{Hand, Pinch},
    mapping::ActiveRegion,
    Result,
};
use opencv::{
    core::{Mat, Point, Scalar},
    imgproc::{self, FILLED, FONT_HERSHEY_PLAIN, LINE_8},
};

fn scalar(color: (f64, f64, f64)) -> Scalar {
    Scalar::new(color.0, color.1, color.2, 0.0)
}

fn point(p: (i32, i32)) -> Point {
    Point::new(p.0, p.1)
}

/// Draw the hand skeleton and its landmarks
pub fn draw_hand(frame: &mut Mat, hand: &Hand) -> Result<()> {
    for &(a, b) in &CONNECTIONS {
        if let (Some(p1), Some(p2)) = (hand.landmark(a), hand.landmark(b)) {
            imgproc::line(
                frame,
                Point::new(p1.x, p1.y),
                Point::new(p2.x, p2.y),
                scalar(colors::WHITE),
                2,
                LINE_8,
                0,
            )?;
        }
    }
    for lm in &hand.landmarks {
        imgproc::circle(frame, Point::new(lm.x, lm.y), 4, scalar(colors::RED), FILLED, LINE_8, 0)?;
    }
    Ok(())
}

/// Outline the active rectangle
pub fn draw_active_region(frame: &mut Mat, region: &ActiveRegion) -> Result<()> {
    imgproc::rectangle_points(
        frame,
        point(region.top_left()),
        point(region.bottom_right()),
        scalar(colors::MAGENTA),
        2,
        LINE_8,
        0,
    )?;
    Ok(())
}

/// Draw the line between two fingertips with their end and mid points
pub fn draw_pinch(frame: &mut Mat, pinch: &Pinch) -> Result<()> {
    imgproc::line(frame, point(pinch.from), point(pinch.to), scalar(colors::MAGENTA), 3, LINE_8, 0)?;
    for end in [pinch.from, pinch.to] {
        imgproc::circle(frame, point(end), MARKER_RADIUS, scalar(colors::MAGENTA), FILLED, LINE_8, 0)?;
    }
    imgproc::circle(frame, point(pinch.midpoint), MARKER_RADIUS, scalar(colors::RED), FILLED, LINE_8, 0)?;
    Ok(())
}

/// Draw move and click feedback for a processed frame
pub fn draw_outcome(frame: &mut Mat, outcome: &FrameOutcome) -> Result<()> {
    if let Some(tip) = outcome.index_tip {
        imgproc::circle(frame, point(tip), MARKER_RADIUS, scalar(colors::MAGENTA), FILLED, LINE_8, 0)?;
    }
    if let Some(pinch) = &outcome.pinch {
        draw_pinch(frame, pinch)?;
        if outcome.clicked {
            imgproc::circle(frame, point(pinch.midpoint), MARKER_RADIUS, scalar(colors::GREEN), FILLED, LINE_8, 0)?;
        }
    }
    Ok(())
}

/// Draw the frame rate as a whole number in the top-left corner
#[allow(clippy::cast_possible_truncation)]
pub fn draw_fps(frame: &mut Mat, fps: f64) -> Result<()> {
    imgproc::put_text(
        frame,
        &(fps as i64).to_string(),
        Point::new(20, 50),
        FONT_HERSHEY_PLAIN,
        3.0,
        scalar(colors::BLUE),
        3,
        LINE_8,
        false,
    )?;
    Ok(())
}
