//! Adapters - concrete implementations of ports
//!
//! - **oled**: SSD1306 128x64 OLED over I2C ([`Screen`](crate::ports::Screen))
//! - **serial**: plain-text console over a `core::fmt::Write` sink
//! - **memory**: in-memory sensor, screen and console for tests and dry runs

pub mod memory;
pub mod oled;
pub mod serial;

pub use memory::{FixedHygrometer, LineConsole, ManualDelay, TextScreen};
pub use oled::OledScreen;
pub use serial::SerialConsole;
