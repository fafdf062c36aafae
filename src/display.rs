//! Preview windows.

use crate::Result;
use log::{debug, warn};
use opencv::{
    core::Mat,
    highgui::{self, WINDOW_NORMAL},
};

/// `WND_PROP_TOPMOST`; not generated by every `OpenCV` binding version
const WND_PROP_TOPMOST: i32 = 5;

/// A window that shows frames and reports key presses
pub trait PreviewWindow {
    fn show(&mut self, frame: &Mat) -> Result<()>;

    /// Wait up to `delay_ms` for a key (0 waits forever); returns the key code or -1
    fn wait_key(&mut self, delay_ms: i32) -> Result<i32>;

    /// Best-effort request to stay above other windows
    fn keep_on_top(&mut self) {}
}

/// `OpenCV` highgui window, destroyed on drop
pub struct HighguiWindow {
    name: String,
    always_on_top: bool,
}

impl HighguiWindow {
    /// Create a resizable named window
    ///
    /// # Errors
    ///
    /// Returns an error if the GUI backend cannot create the window
    pub fn open(name: &str, always_on_top: bool) -> Result<Self> {
        highgui::named_window(name, WINDOW_NORMAL)?;
        let mut window = Self {
            name: name.to_string(),
            always_on_top,
        };
        window.keep_on_top();
        Ok(window)
    }
}

impl PreviewWindow for HighguiWindow {
    fn show(&mut self, frame: &Mat) -> Result<()> {
        highgui::imshow(&self.name, frame)?;
        Ok(())
    }

    fn wait_key(&mut self, delay_ms: i32) -> Result<i32> {
        Ok(highgui::wait_key(delay_ms)?)
    }

    fn keep_on_top(&mut self) {
        if !self.always_on_top {
            return;
        }
        // Some builds need this re-asserted every frame; unsupported backends just fail
        if let Err(e) = highgui::set_window_property(&self.name, WND_PROP_TOPMOST, 1.0) {
            debug!("Always-on-top hint unsupported: {e}");
        }
    }
}

impl Drop for HighguiWindow {
    fn drop(&mut self) {
        if let Err(e) = highgui::destroy_window(&self.name) {
            warn!("Failed to close window '{}': {e}", self.name);
        }
    }
}
