//! Frame sources for the webcam loop.

use crate::Result;
use log::{info, warn};
use opencv::{
    core::Mat,
    prelude::*,
    videoio::{self, VideoCapture, CAP_PROP_BUFFERSIZE, CAP_PROP_FRAME_HEIGHT, CAP_PROP_FRAME_WIDTH},
};

/// Something that yields video frames
pub trait FrameSource {
    /// Next frame, or `None` when the source failed or is exhausted
    fn read_frame(&mut self) -> Result<Option<Mat>>;
}

/// Webcam capture through `OpenCV`; the device is released on drop
pub struct CameraSource {
    capture: VideoCapture,
}

impl CameraSource {
    /// Open a camera and request a capture resolution
    ///
    /// # Errors
    ///
    /// Returns an error if the capture backend cannot be created or the device does not open
    pub fn open(index: i32, width: i32, height: i32) -> Result<Self> {
        info!("Opening camera {} at {}x{}", index, width, height);
        let mut capture = VideoCapture::new(index, videoio::CAP_ANY)?;
        if !capture.is_opened()? {
            return Err(crate::Error::Camera(format!("index {index} could not be opened")));
        }

        // The camera may fall back to its nearest supported mode
        capture.set(CAP_PROP_FRAME_WIDTH, f64::from(width))?;
        capture.set(CAP_PROP_FRAME_HEIGHT, f64::from(height))?;
        capture.set(CAP_PROP_BUFFERSIZE, 1.0)?;

        Ok(Self { capture })
    }
}

impl FrameSource for CameraSource {
    fn read_frame(&mut self) -> Result<Option<Mat>> {
        let mut frame = Mat::default();
        match self.capture.read(&mut frame) {
            Ok(true) if !frame.empty() => Ok(Some(frame)),
            Ok(_) => Ok(None),
            Err(e) => {
                warn!("Camera read failed: {e}");
                Ok(None)
            }
        }
    }
}

impl Drop for CameraSource {
    fn drop(&mut self) {
        if let Err(e) = self.capture.release() {
            warn!("Failed to release camera: {e}");
        } else {
            info!("Camera released");
        }
    }
}
