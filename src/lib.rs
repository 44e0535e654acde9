#![cfg_attr(not(test), no_std)]

//! # comfort-monitor
//! ## A temperature & humidity comfort monitor for the Raspberry Pi Pico
//!
//! Features:
//! - DHT22 temperature and humidity sampling every 5 seconds
//! - Readings on a 128x64 SSD1306 OLED, marked `!!` when uncomfortable
//! - Plain-text log on the serial console
//! - Warning line when conditions leave the comfort zone (18-25C, 40-60%)
//!
//! The loop in [`monitor`] only sees the traits in [`ports`]; the hardware and
//! in-memory implementations live in [`adapters`] and [`sensors`].

pub mod adapters;
pub mod comfort;
pub mod config;
pub mod error;
pub mod monitor;
pub mod ports;
pub mod reading;
pub mod rendering;
pub mod sensors;

pub use comfort::{is_humidity_comfortable, is_temp_comfortable, ComfortRange, ComfortThresholds};
pub use config::MonitorConfig;
pub use error::MonitorError;
pub use monitor::{Cycle, Monitor};
pub use reading::Reading;
