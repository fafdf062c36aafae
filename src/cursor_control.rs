//! Cursor control module for X11-based systems.
//!
//! Pointer moves are issued with `WarpPointer` on the root window; clicks are
//! synthesised through the XTEST extension so they reach whatever window is
//! under the cursor.

use crate::{
    error::{Error, Result},
    utils::safe_cast::f64_to_i16_clamp,
};
use log::{debug, info};
use x11rb::{
    connection::Connection,
    protocol::{
        xproto::{ConnectionExt as _, Screen, BUTTON_PRESS_EVENT, BUTTON_RELEASE_EVENT},
        xtest::ConnectionExt as _,
    },
    rust_connection::RustConnection,
};

/// X11 pointer button number of the left button
const LEFT_BUTTON: u8 = 1;

/// Something that can place the OS cursor and click it
pub trait MouseActuator {
    /// Move the cursor to an absolute screen position
    fn move_to(&mut self, x: f64, y: f64) -> Result<()>;

    /// Left click at the current cursor position
    fn click(&mut self) -> Result<()>;
}

/// Source of the screen resolution the cursor moves over
pub trait ScreenInfo {
    fn screen_size(&self) -> Result<(u32, u32)>;
}

/// Screen resolution from `screen`, or `fallback` when it is unavailable
pub fn resolve_screen_size<S: ScreenInfo>(screen: Option<&S>, fallback: (u32, u32)) -> (u32, u32) {
    match screen.map(|s| s.screen_size()) {
        Some(Ok(size)) => size,
        Some(Err(e)) => {
            debug!("Screen size unavailable ({e}), using {}x{}", fallback.0, fallback.1);
            fallback
        }
        None => fallback,
    }
}

/// Cursor control implementation for X11
pub struct CursorController {
    connection: RustConnection,
    screen: Screen,
    screen_width: u16,
    screen_height: u16,
}

impl CursorController {
    /// Connect to the X server named by `DISPLAY` and check for XTEST
    ///
    /// # Errors
    ///
    /// Returns an error if no X server is reachable or XTEST is missing
    pub fn new() -> Result<Self> {
        info!("Initializing X11 cursor controller");

        let (connection, screen_num) =
            RustConnection::connect(None).map_err(|e| Error::X11(format!("Failed to connect to X11: {e}")))?;

        let screen = connection
            .setup()
            .roots
            .get(screen_num)
            .ok_or_else(|| Error::X11("Failed to get screen".to_string()))?
            .clone();

        let xtest = connection
            .xtest_get_version(2, 2)
            .map_err(|e| Error::X11(format!("Failed to query XTEST: {e}")))?
            .reply()
            .map_err(|e| Error::X11(format!("XTEST extension unavailable: {e}")))?;
        debug!("XTEST version {}.{}", xtest.major_version, xtest.minor_version);

        let screen_width = screen.width_in_pixels;
        let screen_height = screen.height_in_pixels;

        info!("Connected to X11 display, screen: {}x{}", screen_width, screen_height);

        Ok(Self {
            connection,
            screen,
            screen_width,
            screen_height,
        })
    }

    /// Set cursor position, clamped to the screen
    pub fn set_position(&self, x: i16, y: i16) -> Result<()> {
        let max_x = i16::try_from(self.screen_width.saturating_sub(1)).unwrap_or(i16::MAX);
        let max_y = i16::try_from(self.screen_height.saturating_sub(1)).unwrap_or(i16::MAX);
        let x = x.clamp(0, max_x);
        let y = y.clamp(0, max_y);

        debug!("Setting cursor position to ({}, {})", x, y);

        self.connection
            .warp_pointer(x11rb::NONE, self.screen.root, 0, 0, 0, 0, x, y)
            .map_err(|e| Error::CursorControl(format!("Failed to warp pointer: {e}")))?;

        self.flush()
    }

    /// Press and release the left button through XTEST
    pub fn left_click(&self) -> Result<()> {
        for event in [BUTTON_PRESS_EVENT, BUTTON_RELEASE_EVENT] {
            self.connection
                .xtest_fake_input(event, LEFT_BUTTON, x11rb::CURRENT_TIME, self.screen.root, 0, 0, 0)
                .map_err(|e| Error::CursorControl(format!("Failed to send fake button event: {e}")))?;
        }
        debug!("Left click sent");
        self.flush()
    }

    /// Get screen dimensions
    pub const fn get_screen_size(&self) -> (u16, u16) {
        (self.screen_width, self.screen_height)
    }

    fn flush(&self) -> Result<()> {
        self.connection
            .flush()
            .map_err(|e| Error::CursorControl(format!("Failed to flush connection: {e}")))
    }
}

impl MouseActuator for CursorController {
    fn move_to(&mut self, x: f64, y: f64) -> Result<()> {
        let max = i16::MAX;
        self.set_position(f64_to_i16_clamp(x, max), f64_to_i16_clamp(y, max))
    }

    fn click(&mut self) -> Result<()> {
        self.left_click()
    }
}

impl ScreenInfo for CursorController {
    fn screen_size(&self) -> Result<(u32, u32)> {
        let (w, h) = self.get_screen_size();
        Ok((u32::from(w), u32::from(h)))
    }
}
