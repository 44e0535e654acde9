//! Reporting loop
//!
//! [`Monitor`] owns the screen, sensor, console and delay, runs the one-time
//! startup sequence and then repeats the cycle
//! sample → render → log → evaluate → sleep forever.

use embedded_hal::delay::DelayNs;

use crate::config::MonitorConfig;
use crate::error::MonitorError;
use crate::ports::{Console, Hygrometer, Screen};
use crate::reading::Reading;
use crate::rendering::{
    reading_log_line, render_banner, render_error, render_readings, COMFORT_WARNING,
};

/// Outcome of one cycle
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Cycle {
    /// Both values were valid and got rendered and logged
    Reported {
        reading: Reading,
        /// Both values inside their comfort ranges
        comfortable: bool,
    },
    /// The sensor returned NaN; the error message was shown instead
    SensorError,
}

/// The polling loop and the devices it drives
pub struct Monitor<S, H, C, D> {
    screen: S,
    sensor: H,
    console: C,
    delay: D,
    config: MonitorConfig,
}

impl<S, H, C, D> Monitor<S, H, C, D>
where
    S: Screen,
    H: Hygrometer,
    C: Console,
    D: DelayNs,
{
    /// Take ownership of the devices. Nothing is touched until [`Monitor::start`].
    pub fn new(screen: S, sensor: H, console: C, delay: D, config: MonitorConfig) -> Self {
        Self {
            screen,
            sensor,
            console,
            delay,
            config,
        }
    }

    /// One-time startup: display, banner, sensor, stabilisation pause.
    ///
    /// A display that fails to initialise is logged and returned as
    /// [`MonitorError::DisplayInit`]; the banner, sensor and pause are skipped.
    /// The caller is expected to halt.
    pub fn start(&mut self) -> Result<(), MonitorError> {
        if let Err(error) = self.screen.init() {
            self.console.write_line(error.message());
            return Err(error);
        }

        render_banner(&mut self.screen);

        self.sensor.begin();
        self.delay.delay_ms(self.config.stabilize_ms);
        Ok(())
    }

    /// Reads temperature then humidity
    pub fn sample(&mut self) -> Reading {
        let temperature = self.sensor.read_temperature();
        let humidity = self.sensor.read_humidity();
        Reading::new(temperature, humidity)
    }

    /// Runs one full cycle, including the pause that ends it
    pub fn run_cycle(&mut self) -> Cycle {
        let cycle = match self.sample().validate() {
            Ok(reading) => self.report(reading),
            Err(error) => {
                self.report_error(error);
                Cycle::SensorError
            }
        };

        #[cfg(feature = "defmt")]
        defmt::debug!("cycle: {}", cycle);

        self.delay.delay_ms(self.config.reading_interval_ms);
        cycle
    }

    /// Cycles forever
    pub fn run(mut self) -> ! {
        loop {
            self.run_cycle();
        }
    }

    fn report(&mut self, reading: Reading) -> Cycle {
        let thresholds = self.config.thresholds;

        render_readings(&mut self.screen, &reading, &thresholds);
        self.console.write_line(&reading_log_line(&reading));

        let comfortable = thresholds.is_comfortable(reading.temperature, reading.humidity);
        if !comfortable {
            self.console.write_line(COMFORT_WARNING);
        }

        Cycle::Reported {
            reading,
            comfortable,
        }
    }

    fn report_error(&mut self, error: MonitorError) {
        #[cfg(feature = "defmt")]
        defmt::warn!("{}", error.message());

        render_error(&mut self.screen, error);
        self.console.write_line(error.message());
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    pub fn sensor_mut(&mut self) -> &mut H {
        &mut self.sensor
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }

    /// Give the devices back
    pub fn release(self) -> (S, H, C, D) {
        (self.screen, self.sensor, self.console, self.delay)
    }
}
