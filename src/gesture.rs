//! Gesture classification from finger-up patterns.
//!
//! Classification is stateless: every frame is judged on its own finger
//! pattern. There is no hysteresis, so holding a pinch under the click
//! threshold fires a click on every frame.

use std::fmt;

/// Extended (`true`) or folded (`false`) state of each finger, thumb to pinky
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FingerState(pub [bool; 5]);

impl FingerState {
    /// Build from a 0/1 pattern such as `[0, 1, 0, 0, 0]`
    #[must_use]
    pub fn from_pattern(pattern: [u8; 5]) -> Self {
        Self(pattern.map(|f| f != 0))
    }

    #[must_use]
    pub const fn thumb(&self) -> bool {
        self.0[0]
    }

    #[must_use]
    pub const fn index(&self) -> bool {
        self.0[1]
    }

    #[must_use]
    pub const fn middle(&self) -> bool {
        self.0[2]
    }

    /// Number of extended fingers
    #[must_use]
    pub fn count(&self) -> usize {
        self.0.iter().filter(|&&up| up).count()
    }
}

impl fmt::Display for FingerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bits: Vec<&str> = self.0.iter().map(|&up| if up { "1" } else { "0" }).collect();
        write!(f, "[{}]", bits.join(","))
    }
}

/// Action implied by the current hand pose
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Index up, middle down: the index fingertip drives the cursor
    Move,
    /// Index and middle up: pinching them together clicks
    Click,
    /// Anything else, including no hand
    Idle,
}

impl Gesture {
    #[must_use]
    pub const fn classify(fingers: FingerState) -> Self {
        match (fingers.index(), fingers.middle()) {
            (true, false) => Self::Move,
            (true, true) => Self::Click,
            _ => Self::Idle,
        }
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Move => write!(f, "move"),
            Self::Click => write!(f, "click"),
            Self::Idle => write!(f, "idle"),
        }
    }
}

/// Whether a fingertip distance is close enough to count as a click (strictly below threshold)
#[must_use]
pub fn is_click(distance: f64, threshold: f64) -> bool {
    distance < threshold
}
