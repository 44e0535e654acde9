//! SSD1306 OLED adapter
//!
//! Implements [`Screen`] for a 128x64 SSD1306 panel on I2C, using the
//! `ssd1306` crate in buffered graphics mode and `embedded-graphics` for text.

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use embedded_hal::i2c::I2c;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::{I2CDisplayInterface, Ssd1306};

use crate::config::SCREEN_WIDTH;
use crate::error::MonitorError;
use crate::ports::Screen;

/// Glyph advance of `FONT_6X10`
pub const CHAR_WIDTH: i32 = 6;
/// Row advance when text wraps
pub const LINE_HEIGHT: i32 = 10;

type Oled<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Number of whole glyphs that still fit on the row starting at `x`
fn columns_left(x: i32) -> usize {
    ((SCREEN_WIDTH - x) / CHAR_WIDTH).max(0) as usize
}

/// SSD1306 128x64 OLED with a text cursor
pub struct OledScreen<I2C> {
    display: Oled<I2C>,
    cursor: Point,
    style: MonoTextStyle<'static, BinaryColor>,
}

impl<I2C: I2c> OledScreen<I2C> {
    /// Create the adapter; nothing is sent to the panel until [`Screen::init`]
    /// param i2c: bus the panel is attached to
    /// param address: 7 bit panel address, usually 0x3C
    pub fn new(i2c: I2C, address: u8) -> Self {
        let interface = I2CDisplayInterface::new_custom_address(i2c, address);
        let display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        Self {
            display,
            cursor: Point::zero(),
            style: MonoTextStyle::new(&FONT_6X10, BinaryColor::On),
        }
    }

    /// Current text cursor
    pub fn cursor(&self) -> Point {
        self.cursor
    }
}

impl<I2C: I2c> Screen for OledScreen<I2C> {
    fn init(&mut self) -> Result<(), MonitorError> {
        self.display.init().map_err(|_| MonitorError::DisplayInit)
    }

    /// Clears the buffer only, the cursor stays where it was
    fn clear(&mut self) {
        self.display.clear_buffer();
    }

    fn set_cursor(&mut self, x: i32, y: i32) {
        self.cursor = Point::new(x, y);
    }

    /// Draws `text` and wraps to the next row at the right edge
    fn print(&mut self, text: &str) {
        let mut rest = text;
        while !rest.is_empty() {
            let columns = columns_left(self.cursor.x);
            if columns == 0 {
                self.cursor = Point::new(0, self.cursor.y + LINE_HEIGHT);
                continue;
            }

            let split = rest
                .char_indices()
                .nth(columns)
                .map_or(rest.len(), |(index, _)| index);
            let (segment, tail) = rest.split_at(split);

            // Drawing into the RAM buffer cannot fail
            self.cursor = Text::with_baseline(segment, self.cursor, self.style, Baseline::Top)
                .draw(&mut self.display)
                .unwrap_or(self.cursor);
            rest = tail;
        }
    }

    fn flush(&mut self) {
        if self.display.flush().is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("SSD1306 flush failed");
        }
    }
}
