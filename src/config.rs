//! Compile-time configuration for the monitor.
//!
//! Board wiring, display geometry and timing live here as constants. The
//! values the loop actually consumes are grouped into [`MonitorConfig`], whose
//! `Default` carries these constants.

use crate::comfort::ComfortThresholds;

// =============================================================================
// Comfort Thresholds
// =============================================================================

/// Lowest comfortable temperature in Celsius (inclusive).
pub const TEMP_LOW: f32 = 18.0;

/// Highest comfortable temperature in Celsius (inclusive).
pub const TEMP_HIGH: f32 = 25.0;

/// Lowest comfortable relative humidity in percent (inclusive).
pub const HUMIDITY_LOW: f32 = 40.0;

/// Highest comfortable relative humidity in percent (inclusive).
pub const HUMIDITY_HIGH: f32 = 60.0;

const _: () = assert!(TEMP_LOW < TEMP_HIGH);
const _: () = assert!(HUMIDITY_LOW < HUMIDITY_HIGH);

// =============================================================================
// Timing
// =============================================================================

pub const READING_INTERVAL_MS: u32 = 5000; // 5000ms between cycles
pub const SENSOR_STABILIZE_MS: u32 = 2000; // DHT22 needs ~2s after power-up

// =============================================================================
// Display
// =============================================================================

pub const SCREEN_WIDTH: i32 = 128;
pub const SCREEN_HEIGHT: i32 = 64;

/// I2C address for most SSD1306 modules
pub const OLED_I2C_ADDR: u8 = 0x3C;

/// Cursor row of the temperature line
pub const TEMP_ROW_Y: i32 = 0;
/// Cursor row of the humidity line
pub const HUMIDITY_ROW_Y: i32 = 16;

// =============================================================================
// Board wiring (Raspberry Pi Pico)
// =============================================================================

/// Serial console speed
pub const CONSOLE_BAUD: u32 = 115_200;

/// I2C bus speed for the OLED in kHz
pub const I2C_FREQ_KHZ: u32 = 400;

/// Runtime view of the configuration consumed by [`crate::monitor::Monitor`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MonitorConfig {
    /// Comfort bounds used for markers and the warning line
    pub thresholds: ComfortThresholds,
    /// Blocking pause after every cycle
    pub reading_interval_ms: u32,
    /// Blocking pause after the sensor is started
    pub stabilize_ms: u32,
}

impl MonitorConfig {
    pub const DEFAULT: Self = Self {
        thresholds: ComfortThresholds::DEFAULT,
        reading_interval_ms: READING_INTERVAL_MS,
        stabilize_ms: SENSOR_STABILIZE_MS,
    };
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
