use heapless::String;
use ufmt::{uDisplay, uWrite, uwrite, Formatter};

use crate::comfort::ComfortThresholds;
use crate::config::{HUMIDITY_ROW_Y, TEMP_ROW_Y};
use crate::error::MonitorError;
use crate::ports::Screen;
use crate::reading::Reading;

/// Startup text shown until the first cycle completes
pub const BANNER: &str = "Temp & Humidity Monitor";

/// Suffix appended to a value outside its comfort range
pub const DISCOMFORT_MARKER: &str = "!!";

/// Console line emitted once per cycle when either value is uncomfortable
pub const COMFORT_WARNING: &str = "Environmental conditions outside comfort zone!";

/// Capacity of one display line. Fits the widest formatted value plus labels.
pub const LINE_CAPACITY: usize = 32;

/// Capacity of one console line
pub const LOG_CAPACITY: usize = 64;

/// Largest magnitude printed as digits; anything beyond prints "ovf"
const FIXED_LIMIT: f32 = 4_294_967_040.0;

/// A float printed with a fixed number of decimal places.
///
/// Rounds by adding half of the last printed unit before truncating, so
/// `Fixed(22.34, 1)` prints `22.3` and `Fixed(22.36, 1)` prints `22.4`.
/// NaN prints `nan`, infinities `inf` and out of range values `ovf`.
#[derive(Clone, Copy, Debug)]
pub struct Fixed(pub f32, pub u8);

impl uDisplay for Fixed {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        let Fixed(mut number, places) = *self;

        if number.is_nan() {
            return f.write_str("nan");
        }
        if number.is_infinite() {
            return f.write_str("inf");
        }
        if !(-FIXED_LIMIT..=FIXED_LIMIT).contains(&number) {
            return f.write_str("ovf");
        }

        if number < 0.0 {
            f.write_str("-")?;
            number = -number;
        }

        let mut rounding = 0.5;
        for _ in 0..places {
            rounding /= 10.0;
        }
        number += rounding;

        let whole = number as u32;
        let mut remainder = number - whole as f32;
        uDisplay::fmt(&whole, f)?;

        if places > 0 {
            f.write_str(".")?;
        }
        for _ in 0..places {
            remainder *= 10.0;
            let digit = remainder as u32;
            uDisplay::fmt(&digit, f)?;
            remainder -= digit as f32;
        }
        Ok(())
    }
}

/// Formats the temperature display line: `Temp: 22.3 C ` plus the marker
/// param temperature: Celsius
/// param uncomfortable: whether to append the discomfort marker
pub fn temperature_line(temperature: f32, uncomfortable: bool) -> String<LINE_CAPACITY> {
    let mut line = String::new();
    // Capacity covers "ovf" and the widest digit run, so this cannot overflow
    uwrite!(line, "Temp: {} C ", Fixed(temperature, 1)).ok();
    if uncomfortable {
        line.push_str(DISCOMFORT_MARKER).ok();
    }
    line
}

/// Formats the humidity display line: `Humidity: 50.0 % ` plus the marker
/// param humidity: relative humidity percentage
/// param uncomfortable: whether to append the discomfort marker
pub fn humidity_line(humidity: f32, uncomfortable: bool) -> String<LINE_CAPACITY> {
    let mut line = String::new();
    uwrite!(line, "Humidity: {} % ", Fixed(humidity, 1)).ok();
    if uncomfortable {
        line.push_str(DISCOMFORT_MARKER).ok();
    }
    line
}

/// Formats the console line for a valid reading, both values at two decimals
/// returns: `Temperature: 22.34 °C | Humidity: 50.00 %`
pub fn reading_log_line(reading: &Reading) -> String<LOG_CAPACITY> {
    let mut line = String::new();
    uwrite!(
        line,
        "Temperature: {} °C | Humidity: {} %",
        Fixed(reading.temperature, 2),
        Fixed(reading.humidity, 2)
    )
    .ok();
    line
}

/// Renders the startup banner and pushes it to the panel
/// param screen: Screen instance
pub fn render_banner<S: Screen + ?Sized>(screen: &mut S) {
    screen.clear();
    screen.set_cursor(0, TEMP_ROW_Y);
    screen.print(BANNER);
    screen.flush();
}

/// Renders both readings, each followed by the discomfort marker when it is
/// outside its comfort range. The whole frame is rewritten every call.
/// param screen: Screen instance
/// param reading: a valid reading; callers check NaN first
/// param thresholds: comfort bounds deciding the markers
pub fn render_readings<S: Screen + ?Sized>(
    screen: &mut S,
    reading: &Reading,
    thresholds: &ComfortThresholds,
) {
    screen.clear();

    screen.set_cursor(0, TEMP_ROW_Y);
    screen.print(&temperature_line(
        reading.temperature,
        !thresholds.is_temp_comfortable(reading.temperature),
    ));

    screen.set_cursor(0, HUMIDITY_ROW_Y);
    screen.print(&humidity_line(
        reading.humidity,
        !thresholds.is_humidity_comfortable(reading.humidity),
    ));

    screen.flush();
}

/// Replaces the frame with a single error message
/// param screen: Screen instance
/// param error: the error whose message is shown
pub fn render_error<S: Screen + ?Sized>(screen: &mut S, error: MonitorError) {
    screen.clear();
    screen.set_cursor(0, TEMP_ROW_Y);
    screen.print(error.message());
    screen.flush();
}
