//! Serial console adapter
//!
//! Writes plain-text lines to anything implementing `core::fmt::Write`. On the
//! board this is the RP2040 UART0, enabled at 115200 baud before the monitor
//! is constructed.

use core::fmt::Write;

use crate::ports::Console;

/// Line terminator, matching what serial monitors expect
const LINE_END: &str = "\r\n";

/// Console over a `core::fmt::Write` sink
pub struct SerialConsole<W> {
    writer: W,
}

impl<W: Write> SerialConsole<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Give back the underlying writer
    pub fn release(self) -> W {
        self.writer
    }
}

impl<W: Write> Console for SerialConsole<W> {
    fn write_line(&mut self, line: &str) {
        // The log channel has no failure mode; a dropped line is not retried
        self.writer.write_str(line).ok();
        self.writer.write_str(LINE_END).ok();
    }
}
