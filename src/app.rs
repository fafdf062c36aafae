//! Main application module: the webcam loop and the single-image mode.

use crate::{
    capture::FrameSource,
    constants::QUIT_KEY,
    controller::{FrameOutcome, GestureController},
    cursor_control::MouseActuator,
    detector::HandDetector,
    display::PreviewWindow,
    fps::FpsCounter,
    overlay,
    utils::frame_size,
    Result,
};
use log::{debug, error, info};
use opencv::{
    imgcodecs::{self, IMREAD_COLOR},
    prelude::*,
};
use std::path::Path;

/// Mode picked at the interactive prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Live webcam gesture control
    Webcam,
    /// One-shot detection on a still image
    Image,
}

impl Mode {
    /// Parse the prompt answer: `1` for webcam, `2` for image
    #[must_use]
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::Webcam),
            "2" => Some(Self::Image),
            _ => None,
        }
    }
}

/// Why the webcam loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionExit {
    /// The quit key was pressed
    Quit,
    /// The camera stopped delivering frames
    CaptureFailed,
}

/// Per-session display options
#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    pub show_fps: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self { show_fps: true }
    }
}

/// Webcam gesture-control session.
///
/// Owns the capture source and preview window; both release their resources
/// when the session is dropped, whichever way the loop ended.
pub struct WebcamSession<S, D, W, M>
where
    S: FrameSource,
    D: HandDetector,
    W: PreviewWindow,
    M: MouseActuator,
{
    source: S,
    detector: D,
    window: W,
    controller: GestureController<M>,
    fps: FpsCounter,
    options: SessionOptions,
    frames: u64,
}

impl<S, D, W, M> WebcamSession<S, D, W, M>
where
    S: FrameSource,
    D: HandDetector,
    W: PreviewWindow,
    M: MouseActuator,
{
    pub fn new(source: S, detector: D, window: W, controller: GestureController<M>, options: SessionOptions) -> Self {
        Self {
            source,
            detector,
            window,
            controller,
            fps: FpsCounter::new(),
            options,
            frames: 0,
        }
    }

    #[must_use]
    pub const fn controller(&self) -> &GestureController<M> {
        &self.controller
    }

    #[must_use]
    pub const fn window(&self) -> &W {
        &self.window
    }

    #[must_use]
    pub const fn frames_processed(&self) -> u64 {
        self.frames
    }

    /// Run until the quit key is pressed or the camera fails
    ///
    /// # Errors
    ///
    /// Returns an error if detection, drawing or display fails
    pub fn run(&mut self) -> Result<SessionExit> {
        info!("Starting webcam loop");
        let exit = loop {
            if let Some(exit) = self.step()? {
                break exit;
            }
        };
        info!("Webcam loop finished after {} frames ({:?})", self.frames, exit);
        Ok(exit)
    }

    /// Process one frame; returns `Some` when the loop should stop
    ///
    /// # Errors
    ///
    /// Returns an error if detection, drawing or display fails
    pub fn step(&mut self) -> Result<Option<SessionExit>> {
        let Some(mut frame) = self.source.read_frame()? else {
            error!("Failed to capture frame from camera.");
            return Ok(Some(SessionExit::CaptureFailed));
        };

        let size = frame_size(&frame)?;
        let hands = self.detector.detect(&mut frame)?;

        if let Some(hand) = hands.first() {
            overlay::draw_active_region(&mut frame, &self.controller.active_region(size))?;
            let outcome = self.controller.process(hand, size);
            self.log_outcome(&outcome);
            overlay::draw_outcome(&mut frame, &outcome)?;
        }

        let fps = self.fps.tick();
        if self.options.show_fps {
            overlay::draw_fps(&mut frame, fps)?;
        }

        self.window.keep_on_top();
        self.window.show(&frame)?;
        self.frames += 1;

        let key = self.window.wait_key(1)?;
        if key >= 0 && (key & 0xFF) == QUIT_KEY {
            info!("Exit requested by user");
            return Ok(Some(SessionExit::Quit));
        }
        Ok(None)
    }

    fn log_outcome(&self, outcome: &FrameOutcome) {
        match outcome.cursor {
            Some((x, y)) => debug!(
                "frame {}: {} fingers={} cursor=({:.1}, {:.1})",
                self.frames, outcome.gesture, outcome.fingers, x, y
            ),
            None => debug!(
                "frame {}: {} fingers={} clicked={}",
                self.frames, outcome.gesture, outcome.fingers, outcome.clicked
            ),
        }
    }
}

/// Open the camera and preview window, then run the webcam loop.
///
/// A camera or window that cannot be opened ends webcam mode the same way a
/// failed frame read does: the failure is logged and `Ok(None)` is returned.
///
/// # Errors
///
/// Returns an error if detection, drawing or display fails once running
pub fn run_webcam_mode<S, D, W, M, FS, FW>(
    open_source: FS,
    detector: D,
    open_window: FW,
    controller: GestureController<M>,
    options: SessionOptions,
) -> Result<Option<SessionExit>>
where
    S: FrameSource,
    D: HandDetector,
    W: PreviewWindow,
    M: MouseActuator,
    FS: FnOnce() -> Result<S>,
    FW: FnOnce() -> Result<W>,
{
    let source = match open_source() {
        Ok(source) => source,
        Err(e) => {
            error!("Failed to open camera: {e}");
            return Ok(None);
        }
    };
    let window = match open_window() {
        Ok(window) => window,
        Err(e) => {
            error!("Failed to open preview window: {e}");
            return Ok(None);
        }
    };

    let mut session = WebcamSession::new(source, detector, window, controller, options);
    session.run().map(Some)
}

/// Detect hands in a still image and show the annotated result until a key is pressed.
///
/// The window is only opened once the image has loaded; if it cannot be
/// opened the failure is logged and the detection result is still returned.
/// Returns the landmark
/// count of the first detected hand, or `None` when the image could not be
/// loaded or no hand was found.
///
/// # Errors
///
/// Returns an error if detection or display fails
pub fn run_image_mode<D, W, F>(path: &Path, detector: &mut D, open_window: F) -> Result<Option<usize>>
where
    D: HandDetector,
    W: PreviewWindow,
    F: FnOnce() -> Result<W>,
{
    let Some(path_str) = path.to_str() else {
        error!("Image path is not valid UTF-8: {}", path.display());
        return Ok(None);
    };

    let mut image = imgcodecs::imread(path_str, IMREAD_COLOR)?;
    if image.empty() {
        error!("Image not found: {}", path.display());
        return Ok(None);
    }

    let hands = detector.detect(&mut image)?;
    let count = hands.first().map(|hand| hand.landmarks.len());
    match count {
        Some(n) => println!("Hand landmarks found: {n}"),
        None => info!("No hand detected in {}", path.display()),
    }

    let mut window = match open_window() {
        Ok(window) => window,
        Err(e) => {
            error!("Failed to open preview window: {e}");
            return Ok(count);
        }
    };
    window.show(&image)?;
    window.wait_key(0)?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_choice() {
        assert_eq!(Mode::from_choice("1"), Some(Mode::Webcam));
        assert_eq!(Mode::from_choice(" 2\n"), Some(Mode::Image));
        assert_eq!(Mode::from_choice("3"), None);
        assert_eq!(Mode::from_choice(""), None);
        assert_eq!(Mode::from_choice("webcam"), None);
    }

    #[test]
    fn test_session_options_default() {
        assert!(SessionOptions::default().show_fps);
    }
}
