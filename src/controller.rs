//! Per-frame gesture handling: classify the hand, drive the cursor, fire clicks.
//!
//! The controller owns the cross-frame pointer state (the smoother) for the
//! lifetime of a webcam session. Actuator failures never abort a frame; they
//! are logged and the overlay is still produced.

use crate::{
    config::GestureConfig,
    constants::landmarks::{INDEX_FINGER_TIP, MIDDLE_FINGER_TIP},
    cursor_control::MouseActuator,
    error::Result,
    filters::{PointerFilter, Smoother},
    gesture::{is_click, FingerState, Gesture},
    hand::{Hand, Pinch},
    mapping::ActiveRegion,
};
use log::debug;

/// What happened on one frame, for drawing and inspection
#[derive(Debug, Clone, PartialEq)]
pub struct FrameOutcome {
    pub gesture: Gesture,
    pub fingers: FingerState,
    /// Index fingertip in frame pixels, when a Move gesture was handled
    pub index_tip: Option<(i32, i32)>,
    /// Smoothed screen location (before mirroring) after a Move gesture
    pub cursor: Option<(f64, f64)>,
    /// Index-middle measurement during a Click gesture
    pub pinch: Option<Pinch>,
    /// Click threshold met this frame
    pub clicked: bool,
}

impl FrameOutcome {
    /// Outcome for a frame with no usable hand
    #[must_use]
    pub fn idle() -> Self {
        Self {
            gesture: Gesture::Idle,
            fingers: FingerState::default(),
            index_tip: None,
            cursor: None,
            pinch: None,
            clicked: false,
        }
    }
}

/// Session state for gesture-driven cursor control
pub struct GestureController<M: MouseActuator> {
    settings: GestureConfig,
    filter: Box<dyn PointerFilter>,
    actuator: Option<M>,
    screen: (u32, u32),
}

impl<M: MouseActuator> GestureController<M> {
    /// Create a controller using the divisor smoother from `settings`
    ///
    /// # Errors
    ///
    /// Returns an error if the smoothening factor is not positive
    pub fn new(settings: GestureConfig, screen: (u32, u32), actuator: Option<M>) -> Result<Self> {
        let filter = Box::new(Smoother::new(settings.smoothening)?);
        Ok(Self::with_filter(settings, screen, actuator, filter))
    }

    /// Create a controller with a custom pointer filter
    #[must_use]
    pub fn with_filter(
        settings: GestureConfig,
        screen: (u32, u32),
        actuator: Option<M>,
        filter: Box<dyn PointerFilter>,
    ) -> Self {
        debug!("Pointer filter: {}", filter.name());
        Self {
            settings,
            filter,
            actuator,
            screen,
        }
    }

    #[must_use]
    pub const fn screen(&self) -> (u32, u32) {
        self.screen
    }

    #[must_use]
    pub const fn actuator(&self) -> Option<&M> {
        self.actuator.as_ref()
    }

    /// Active rectangle for a frame of the given size
    #[must_use]
    pub const fn active_region(&self, frame_size: (i32, i32)) -> ActiveRegion {
        ActiveRegion::new(self.settings.frame_margin, frame_size.0, frame_size.1)
    }

    /// Handle one detected hand
    pub fn process(&mut self, hand: &Hand, frame_size: (i32, i32)) -> FrameOutcome {
        // Both fingertips must exist before any gesture logic runs
        if hand.landmark(MIDDLE_FINGER_TIP).is_none() {
            return FrameOutcome::idle();
        }

        let fingers = hand.fingers_up();
        let gesture = Gesture::classify(fingers);
        let mut outcome = FrameOutcome {
            gesture,
            fingers,
            ..FrameOutcome::idle()
        };

        match gesture {
            Gesture::Move => {
                if let Some(tip) = hand.landmark(INDEX_FINGER_TIP) {
                    let cursor = self.move_cursor((tip.x, tip.y), frame_size);
                    outcome.index_tip = Some((tip.x, tip.y));
                    outcome.cursor = Some(cursor);
                }
            }
            Gesture::Click => {
                if let Some(pinch) = hand.distance(INDEX_FINGER_TIP, MIDDLE_FINGER_TIP) {
                    if is_click(pinch.distance, self.settings.click_threshold) {
                        self.send_click();
                        outcome.clicked = true;
                    }
                    outcome.pinch = Some(pinch);
                }
            }
            Gesture::Idle => {}
        }

        outcome
    }

    fn move_cursor(&mut self, tip: (i32, i32), frame_size: (i32, i32)) -> (f64, f64) {
        let region = self.active_region(frame_size);
        let (mapped_x, mapped_y) = region.map_to_screen(f64::from(tip.0), f64::from(tip.1), self.screen);
        let (x, y) = self.filter.apply(mapped_x, mapped_y);

        let target_x = if self.settings.mirror_x { f64::from(self.screen.0) - x } else { x };
        if let Some(actuator) = &mut self.actuator {
            if let Err(e) = actuator.move_to(target_x, y) {
                debug!("Cursor move ignored: {e}");
            }
        }
        (x, y)
    }

    fn send_click(&mut self) {
        if let Some(actuator) = &mut self.actuator {
            if let Err(e) = actuator.click() {
                debug!("Click ignored: {e}");
            }
        }
    }
}
