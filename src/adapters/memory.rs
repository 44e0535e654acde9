//! In-memory adapters
//!
//! Stand-ins for the sensor, display, console and delay that record what the
//! monitor did instead of touching hardware. Everything is fixed capacity so
//! they also build for the firmware target.

use embedded_hal::delay::DelayNs;
use heapless::{Deque, String, Vec};

use crate::error::MonitorError;
use crate::ports::{Console, Hygrometer, Screen};
use crate::rendering::LOG_CAPACITY;

/// Text rows a [`TextScreen`] keeps
pub const TEXT_ROWS: usize = 8;
/// Characters per [`TextScreen`] row
pub const ROW_CAPACITY: usize = 64;

/// Sensor that returns whatever it was last given.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedHygrometer {
    temperature: f32,
    humidity: f32,
    begun: bool,
    reads: u32,
}

impl FixedHygrometer {
    pub const fn new(temperature: f32, humidity: f32) -> Self {
        Self {
            temperature,
            humidity,
            begun: false,
            reads: 0,
        }
    }

    /// A sensor whose every read fails
    pub const fn failing() -> Self {
        Self::new(f32::NAN, f32::NAN)
    }

    /// Change the values returned from now on
    pub fn set(&mut self, temperature: f32, humidity: f32) {
        self.temperature = temperature;
        self.humidity = humidity;
    }

    pub fn is_begun(&self) -> bool {
        self.begun
    }

    /// Total temperature and humidity reads
    pub fn reads(&self) -> u32 {
        self.reads
    }
}

impl Hygrometer for FixedHygrometer {
    fn begin(&mut self) {
        self.begun = true;
    }

    fn read_temperature(&mut self) -> f32 {
        self.reads += 1;
        self.temperature
    }

    fn read_humidity(&mut self) -> f32 {
        self.reads += 1;
        self.humidity
    }
}

type Row = (i32, String<ROW_CAPACITY>);

/// Text-only screen keyed by cursor row.
///
/// The x coordinate is not tracked: printed text is appended to the row the
/// cursor is on. What [`Screen::flush`] pushed is kept apart from the buffer
/// still being drawn.
#[derive(Debug, Default)]
pub struct TextScreen {
    fail_init: bool,
    initialised: bool,
    cursor_y: i32,
    buffer: Vec<Row, TEXT_ROWS>,
    shown: Vec<Row, TEXT_ROWS>,
    clears: u32,
    flushes: u32,
}

impl TextScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// A panel that never answers
    pub fn failing() -> Self {
        Self {
            fail_init: true,
            ..Self::default()
        }
    }

    pub fn is_initialised(&self) -> bool {
        self.initialised
    }

    /// Text flushed on row `y`
    pub fn shown_row(&self, y: i32) -> Option<&str> {
        self.shown
            .iter()
            .find(|(row, _)| *row == y)
            .map(|(_, text)| text.as_str())
    }

    /// All flushed rows, top to bottom
    pub fn shown_rows(&self) -> impl Iterator<Item = (i32, &str)> {
        self.shown.iter().map(|(y, text)| (*y, text.as_str()))
    }

    /// Number of flushed rows
    pub fn shown_len(&self) -> usize {
        self.shown.len()
    }

    pub fn clears(&self) -> u32 {
        self.clears
    }

    pub fn flushes(&self) -> u32 {
        self.flushes
    }
}

impl Screen for TextScreen {
    fn init(&mut self) -> Result<(), MonitorError> {
        if self.fail_init {
            return Err(MonitorError::DisplayInit);
        }
        self.initialised = true;
        Ok(())
    }

    fn clear(&mut self) {
        self.buffer.clear();
        self.clears += 1;
    }

    fn set_cursor(&mut self, _x: i32, y: i32) {
        self.cursor_y = y;
    }

    fn print(&mut self, text: &str) {
        let y = self.cursor_y;
        let index = match self.buffer.iter().position(|(row, _)| *row == y) {
            Some(index) => index,
            None => {
                if self.buffer.push((y, String::new())).is_err() {
                    return;
                }
                self.buffer.len() - 1
            }
        };
        self.buffer[index].1.push_str(text).ok();
    }

    fn flush(&mut self) {
        self.shown = self.buffer.clone();
        self.shown.sort_unstable_by_key(|(y, _)| *y);
        self.flushes += 1;
    }
}

/// Console keeping the last `N` lines.
#[derive(Debug, Default)]
pub struct LineConsole<const N: usize> {
    lines: Deque<String<LOG_CAPACITY>, N>,
    written: u32,
}

impl<const N: usize> LineConsole<N> {
    pub fn new() -> Self {
        Self {
            lines: Deque::new(),
            written: 0,
        }
    }

    /// Retained lines, oldest first
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Most recent line
    pub fn last(&self) -> Option<&str> {
        self.lines.back().map(String::as_str)
    }

    /// How many retained lines equal `line`
    pub fn count(&self, line: &str) -> usize {
        self.lines().filter(|l| *l == line).count()
    }

    /// Lines written since creation, including dropped ones
    pub fn written(&self) -> u32 {
        self.written
    }
}

impl<const N: usize> Console for LineConsole<N> {
    fn write_line(&mut self, line: &str) {
        if self.lines.is_full() {
            self.lines.pop_front();
        }
        let mut entry = String::new();
        entry.push_str(line).ok();
        self.lines.push_back(entry).ok();
        self.written += 1;
    }
}

/// Delay that only adds up the time it was asked to wait.
#[derive(Clone, Copy, Debug, Default)]
pub struct ManualDelay {
    elapsed_ns: u64,
    pauses: u32,
}

impl ManualDelay {
    pub const fn new() -> Self {
        Self {
            elapsed_ns: 0,
            pauses: 0,
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ns / 1_000_000
    }

    /// Number of delay calls
    pub fn pauses(&self) -> u32 {
        self.pauses
    }
}

impl DelayNs for ManualDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.elapsed_ns += u64::from(ns);
        self.pauses += 1;
    }

    fn delay_us(&mut self, us: u32) {
        self.elapsed_ns += u64::from(us) * 1_000;
        self.pauses += 1;
    }

    fn delay_ms(&mut self, ms: u32) {
        self.elapsed_ns += u64::from(ms) * 1_000_000;
        self.pauses += 1;
    }
}
