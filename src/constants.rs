//! Constants used throughout the application

/// Requested capture width for webcam mode
pub const DEFAULT_CAMERA_WIDTH: i32 = 1280;

/// Requested capture height for webcam mode
pub const DEFAULT_CAMERA_HEIGHT: i32 = 720;

/// Inset in pixels between the camera frame edge and the active rectangle
pub const DEFAULT_FRAME_MARGIN: i32 = 100;

/// Divisor of the pointer smoother; larger is smoother but lags more
pub const DEFAULT_SMOOTHENING: f64 = 7.0;

/// Index-to-middle fingertip distance (pixels) below which a click fires
pub const DEFAULT_CLICK_THRESHOLD: f64 = 40.0;

/// Maximum hands tracked in webcam mode
pub const WEBCAM_MAX_HANDS: usize = 1;

/// Maximum hands tracked in image mode
pub const IMAGE_MAX_HANDS: usize = 2;

/// Floor on the elapsed time between frames when computing FPS
pub const FPS_EPSILON: f64 = 1e-6;

/// Number of keypoints produced per hand
pub const NUM_HAND_LANDMARKS: usize = 21;

/// Square input size of the landmark model
pub const DEFAULT_LANDMARK_INPUT_SIZE: i32 = 224;

/// Minimum hand presence score for a detection to count
pub const DEFAULT_PRESENCE_THRESHOLD: f32 = 0.5;

/// Key that ends the webcam loop
pub const QUIT_KEY: i32 = b'q' as i32;

/// Preview window titles
pub const WEBCAM_WINDOW_NAME: &str = "Webcam Hand Tracking (press 'q' to quit)";
pub const IMAGE_WINDOW_NAME: &str = "Image Hand Tracking";

/// Radius of the move/click feedback markers
pub const MARKER_RADIUS: i32 = 15;

/// Hand landmark ids (21-point hand model)
pub mod landmarks {
    pub const THUMB_IP: usize = 3;
    pub const THUMB_TIP: usize = 4;
    pub const INDEX_FINGER_TIP: usize = 8;
    pub const MIDDLE_FINGER_TIP: usize = 12;
    pub const RING_FINGER_TIP: usize = 16;
    pub const PINKY_TIP: usize = 20;

    /// Fingertips ordered thumb to pinky
    pub const TIP_IDS: [usize; 5] = [THUMB_TIP, INDEX_FINGER_TIP, MIDDLE_FINGER_TIP, RING_FINGER_TIP, PINKY_TIP];

    /// Bone connections used to draw the hand skeleton
    pub const CONNECTIONS: [(usize, usize); 21] = [
        (0, 1), (1, 2), (2, 3), (3, 4),
        (0, 5), (5, 6), (6, 7), (7, 8),
        (5, 9), (9, 10), (10, 11), (11, 12),
        (9, 13), (13, 14), (14, 15), (15, 16),
        (13, 17), (17, 18), (18, 19), (19, 20),
        (0, 17),
    ];
}

/// BGR colours used by the overlay
pub mod colors {
    pub const MAGENTA: (f64, f64, f64) = (255.0, 0.0, 255.0);
    pub const GREEN: (f64, f64, f64) = (0.0, 255.0, 0.0);
    pub const BLUE: (f64, f64, f64) = (255.0, 0.0, 0.0);
    pub const RED: (f64, f64, f64) = (0.0, 0.0, 255.0);
    pub const WHITE: (f64, f64, f64) = (255.0, 255.0, 255.0);
}
