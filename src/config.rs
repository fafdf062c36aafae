//! Configuration management for the hand gesture mouse application

use crate::{
    constants::{
        DEFAULT_CAMERA_HEIGHT, DEFAULT_CAMERA_WIDTH, DEFAULT_CLICK_THRESHOLD, DEFAULT_FRAME_MARGIN,
        DEFAULT_LANDMARK_INPUT_SIZE, DEFAULT_PRESENCE_THRESHOLD, DEFAULT_SMOOTHENING, IMAGE_MAX_HANDS,
        IMAGE_WINDOW_NAME, WEBCAM_MAX_HANDS, WEBCAM_WINDOW_NAME,
    },
    Error, Result,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Capture device settings
    pub camera: CameraConfig,

    /// Hand landmark detector settings
    pub detector: DetectorConfig,

    /// Gesture mapping and smoothing
    pub gesture: GestureConfig,

    /// Preview window settings
    pub display: DisplayConfig,
}

/// Capture device configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Camera index passed to the capture backend
    pub index: i32,

    /// Requested frame width (the camera may pick the nearest supported)
    pub width: i32,

    /// Requested frame height
    pub height: i32,
}

/// Landmark detector configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Path to the hand landmark ONNX model
    pub model: PathBuf,

    /// Hands tracked in webcam mode
    pub max_hands: usize,

    /// Hands tracked in image mode
    pub image_max_hands: usize,

    /// Minimum hand presence score (0.0-1.0)
    pub presence_threshold: f32,

    /// Square model input size in pixels
    pub input_size: i32,
}

/// Gesture configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Inset of the active rectangle from the frame edges
    pub frame_margin: i32,

    /// Smoother divisor; must be greater than zero
    pub smoothening: f64,

    /// Fingertip distance in pixels below which a click fires
    pub click_threshold: f64,

    /// Mirror the horizontal axis so the cursor follows the hand like a mirror
    pub mirror_x: bool,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Webcam preview window title
    pub webcam_window: String,

    /// Image mode window title
    pub image_window: String,

    /// Ask the window manager to keep the preview above other windows
    pub always_on_top: bool,

    /// Draw the FPS counter
    pub show_fps: bool,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            index: 0,
            width: DEFAULT_CAMERA_WIDTH,
            height: DEFAULT_CAMERA_HEIGHT,
        }
    }
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            model: PathBuf::from("assets/hand_landmark.onnx"),
            max_hands: WEBCAM_MAX_HANDS,
            image_max_hands: IMAGE_MAX_HANDS,
            presence_threshold: DEFAULT_PRESENCE_THRESHOLD,
            input_size: DEFAULT_LANDMARK_INPUT_SIZE,
        }
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            frame_margin: DEFAULT_FRAME_MARGIN,
            smoothening: DEFAULT_SMOOTHENING,
            click_threshold: DEFAULT_CLICK_THRESHOLD,
            mirror_x: true,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            webcam_window: WEBCAM_WINDOW_NAME.to_string(),
            image_window: IMAGE_WINDOW_NAME.to_string(),
            always_on_top: true,
            show_fps: true,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content =
            serde_yaml::to_string(self).map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration values
    ///
    /// The model path is not checked here; a missing model surfaces when the
    /// detector is built.
    pub fn validate(&self) -> Result<()> {
        if self.camera.width <= 0 || self.camera.height <= 0 {
            return Err(Error::ConfigError("Camera resolution must be positive".to_string()));
        }

        let margin = self.gesture.frame_margin;
        if margin < 0 || 2 * margin >= self.camera.width || 2 * margin >= self.camera.height {
            return Err(Error::ConfigError(format!(
                "Frame margin {margin} leaves no active region in a {}x{} frame",
                self.camera.width, self.camera.height
            )));
        }
        if !self.gesture.smoothening.is_finite() || self.gesture.smoothening <= 0.0 {
            return Err(Error::ConfigError("Smoothening must be greater than 0".to_string()));
        }
        if !self.gesture.click_threshold.is_finite() || self.gesture.click_threshold <= 0.0 {
            return Err(Error::ConfigError("Click threshold must be greater than 0".to_string()));
        }

        if self.detector.max_hands == 0 || self.detector.image_max_hands == 0 {
            return Err(Error::ConfigError("Maximum hands must be at least 1".to_string()));
        }
        if !(0.0..=1.0).contains(&self.detector.presence_threshold) {
            return Err(Error::ConfigError(
                "Presence threshold must be between 0.0 and 1.0".to_string(),
            ));
        }
        if self.detector.input_size <= 0 {
            return Err(Error::ConfigError("Model input size must be positive".to_string()));
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Hand Gesture Mouse Configuration

# Capture device
camera:
  index: 0
  width: 1280
  height: 720

# Hand landmark model
detector:
  model: "assets/hand_landmark.onnx"
  max_hands: 1
  image_max_hands: 2
  presence_threshold: 0.5
  input_size: 224

# Gesture mapping
gesture:
  frame_margin: 100
  smoothening: 7.0
  click_threshold: 40.0
  mirror_x: true

# Preview windows
display:
  webcam_window: "Webcam Hand Tracking (press 'q' to quit)"
  image_window: "Image Hand Tracking"
  always_on_top: true
  show_fps: true
"#;
