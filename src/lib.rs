//! Hand-gesture mouse control from a webcam.
//!
//! Each camera frame goes through a small pipeline:
//! 1. A hand landmark detector finds the 21 keypoints of a hand
//! 2. The finger-up pattern selects a gesture (move, click or idle)
//! 3. For a move, the index fingertip is mapped from an inset "active
//!    rectangle" of the frame onto the screen and smoothed
//! 4. The cursor is moved or clicked through X11
//!
//! # Examples
//!
//! ## Gesture handling without a camera
//!
//! ```no_run
//! use hand_gesture_mouse::{
//!     config::GestureConfig,
//!     controller::GestureController,
//!     cursor_control::CursorController,
//!     hand::Hand,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cursor = CursorController::new()?;
//! let screen = (1920, 1080);
//! let mut controller = GestureController::new(GestureConfig::default(), screen, Some(cursor))?;
//!
//! // Landmarks would normally come from a HandDetector
//! let points = vec![(640, 360); 21];
//! let hand = Hand::from_points(&points, 1.0);
//! let outcome = controller.process(&hand, (1280, 720));
//! println!("Gesture: {}", outcome.gesture);
//! # Ok(())
//! # }
//! ```
//!
//! ## Smoothing
//!
//! ```
//! use hand_gesture_mouse::filters::{PointerFilter, Smoother};
//!
//! let mut smoother = Smoother::new(7.0).unwrap();
//! let (x, _) = smoother.apply(70.0, 0.0);
//! assert!((x - 10.0).abs() < 1e-9);
//! ```

/// Hand detector interface
pub mod detector;

/// ONNX hand landmark detector
pub mod landmark_detection;

/// Detected hand data and derived geometry
pub mod hand;

/// Gesture classification
pub mod gesture;

/// Frame-to-screen coordinate mapping
pub mod mapping;

/// Pointer smoothing filters
pub mod filters;

/// Per-frame gesture handling and session state
pub mod controller;

/// Frame rate measurement
pub mod fps;

/// Camera frame sources
pub mod capture;

/// Preview windows
pub mod display;

/// Drawing helpers for the preview
pub mod overlay;

/// Main application module
pub mod app;

/// Interactive prompts
pub mod prompt;

/// Cursor control module for X11 systems
pub mod cursor_control;

/// Utility functions
pub mod utils;

/// Error types and result handling
pub mod error;

/// Constants used throughout the application
pub mod constants;

/// Configuration management
pub mod config;

pub use error::{Error, Result};
