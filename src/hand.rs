//! Detected hand data: landmark positions and the geometry derived from them.

use crate::{
    constants::{landmarks, NUM_HAND_LANDMARKS},
    gesture::FingerState,
};

/// A single hand keypoint in frame pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Landmark {
    /// Landmark id in the 21-point hand scheme
    pub id: usize,
    pub x: i32,
    pub y: i32,
}

/// Axis-aligned box around all landmarks of a hand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoundingBox {
    pub x_min: i32,
    pub y_min: i32,
    pub x_max: i32,
    pub y_max: i32,
}

impl BoundingBox {
    /// Smallest box containing every landmark, or `None` for an empty list
    #[must_use]
    pub fn around(landmarks: &[Landmark]) -> Option<Self> {
        let first = landmarks.first()?;
        let init = Self {
            x_min: first.x,
            y_min: first.y,
            x_max: first.x,
            y_max: first.y,
        };
        Some(landmarks.iter().fold(init, |b, lm| Self {
            x_min: b.x_min.min(lm.x),
            y_min: b.y_min.min(lm.y),
            x_max: b.x_max.max(lm.x),
            y_max: b.y_max.max(lm.y),
        }))
    }

    #[must_use]
    pub const fn width(&self) -> i32 {
        self.x_max - self.x_min
    }

    #[must_use]
    pub const fn height(&self) -> i32 {
        self.y_max - self.y_min
    }
}

/// Distance between two landmarks together with the points needed to draw it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pinch {
    pub from: (i32, i32),
    pub to: (i32, i32),
    pub midpoint: (i32, i32),
    /// Euclidean distance in frame pixels
    pub distance: f64,
}

/// One detected hand
#[derive(Debug, Clone, PartialEq)]
pub struct Hand {
    /// Landmarks ordered by id
    pub landmarks: Vec<Landmark>,
    pub bbox: BoundingBox,
    /// Detector confidence that a hand is present
    pub score: f32,
}

impl Hand {
    /// Build a hand from landmark positions listed in id order
    #[must_use]
    pub fn from_points(points: &[(i32, i32)], score: f32) -> Self {
        let landmarks: Vec<Landmark> = points
            .iter()
            .enumerate()
            .map(|(id, &(x, y))| Landmark { id, x, y })
            .collect();
        let bbox = BoundingBox::around(&landmarks).unwrap_or_default();
        Self { landmarks, bbox, score }
    }

    #[must_use]
    pub fn landmark(&self, id: usize) -> Option<&Landmark> {
        self.landmarks.get(id)
    }

    /// True when the full 21-point landmark set is present
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.landmarks.len() >= NUM_HAND_LANDMARKS
    }

    /// Which fingers are extended, thumb to pinky.
    ///
    /// The thumb is up when its tip lies right of the joint below it; the other
    /// fingers are up when the tip is above the middle (PIP) joint. An
    /// incomplete landmark list reports every finger down.
    #[must_use]
    pub fn fingers_up(&self) -> FingerState {
        let mut fingers = [false; 5];
        if !self.is_complete() {
            return FingerState(fingers);
        }
        let lm = &self.landmarks;

        fingers[0] = lm[landmarks::THUMB_TIP].x > lm[landmarks::THUMB_IP].x;
        for (finger, &tip) in landmarks::TIP_IDS.iter().enumerate().skip(1) {
            fingers[finger] = lm[tip].y < lm[tip - 2].y;
        }
        FingerState(fingers)
    }

    /// Distance between two landmarks, or `None` if either is missing
    #[must_use]
    pub fn distance(&self, a: usize, b: usize) -> Option<Pinch> {
        let p1 = self.landmark(a)?;
        let p2 = self.landmark(b)?;
        let dx = f64::from(p2.x - p1.x);
        let dy = f64::from(p2.y - p1.y);
        Some(Pinch {
            from: (p1.x, p1.y),
            to: (p2.x, p2.y),
            midpoint: ((p1.x + p2.x) / 2, (p1.y + p2.y) / 2),
            distance: dx.hypot(dy),
        })
    }
}
