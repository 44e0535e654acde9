//! Ports - traits at the hardware boundary
//!
//! The monitor only talks to its collaborators through these traits, so the
//! same loop runs against the DHT22/SSD1306/UART hardware on the board and
//! against the in-memory adapters in tests.
//!
//! - **Hygrometer**: temperature and humidity source (DHT22, fixed values)
//! - **Screen**: small text display (SSD1306 OLED, text buffer)
//! - **Console**: line-oriented log channel (UART, line buffer)
//!
//! Blocking pauses use `embedded_hal::delay::DelayNs` directly.

use crate::error::MonitorError;

/// Temperature and humidity source.
///
/// Failed measurements are reported with the NaN sentinel; there is no other
/// error channel.
pub trait Hygrometer {
    /// Prepare the sensor for its first measurement
    fn begin(&mut self) {}

    /// Temperature in Celsius, or NaN
    fn read_temperature(&mut self) -> f32;

    /// Relative humidity in percent, or NaN
    fn read_humidity(&mut self) -> f32;
}

/// Small monochrome text display.
///
/// Drawing calls only touch the frame buffer; nothing reaches the panel until
/// [`Screen::flush`].
pub trait Screen {
    /// Bring up the panel. Failure is fatal for the firmware.
    fn init(&mut self) -> Result<(), MonitorError>;

    /// Blank the frame buffer
    fn clear(&mut self);

    /// Move the text cursor to pixel position (x, y)
    fn set_cursor(&mut self, x: i32, y: i32);

    /// Draw text at the cursor and advance it
    fn print(&mut self, text: &str);

    /// Push the frame buffer to the panel
    fn flush(&mut self);
}

/// Append-only plain-text log channel.
pub trait Console {
    /// Write `line` followed by a line terminator
    fn write_line(&mut self, line: &str);
}
