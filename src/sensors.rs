//! DHT22 (AM2302) temperature and humidity sensor.
//!
//! The single-wire protocol is handled by the `dht22-sensor` driver, this
//! module adapts it to [`Hygrometer`]. The data line must be usable as both
//! input and output (open drain with a pull-up), e.g. `rp2040_hal::gpio::InOutPin`.

use dht22_sensor::Dht22;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use crate::ports::Hygrometer;

/// DHT22 behind the [`Hygrometer`] port
pub struct DhtSensor<P, D> {
    driver: Dht22<P, D>,
    /// Humidity half of the last transaction, waiting for `read_humidity`
    pending_humidity: Option<f32>,
}

impl<P, D> DhtSensor<P, D>
where
    P: InputPin + OutputPin,
    D: DelayNs,
{
    pub fn new(pin: P, delay: D) -> Self {
        Self {
            driver: Dht22::new(pin, delay),
            pending_humidity: None,
        }
    }

    /// Runs one full transaction
    /// returns (temperature, humidity), or None when the sensor did not answer
    /// or the frame was corrupt
    fn measure(&mut self) -> Option<(f32, f32)> {
        match self.driver.read() {
            Ok(reading) => Some((reading.temperature, reading.relative_humidity)),
            Err(_) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("DHT22 read failed");
                None
            }
        }
    }
}

impl<P, D> Hygrometer for DhtSensor<P, D>
where
    P: InputPin + OutputPin,
    D: DelayNs,
{
    fn begin(&mut self) {
        self.pending_humidity = None;
    }

    /// Starts a transaction and keeps its humidity for the next `read_humidity`
    fn read_temperature(&mut self) -> f32 {
        match self.measure() {
            Some((temperature, humidity)) => {
                self.pending_humidity = Some(humidity);
                temperature
            }
            None => {
                self.pending_humidity = None;
                f32::NAN
            }
        }
    }

    /// Uses the pending humidity, or starts a transaction of its own
    fn read_humidity(&mut self) -> f32 {
        if let Some(humidity) = self.pending_humidity.take() {
            return humidity;
        }
        self.measure().map_or(f32::NAN, |(_, humidity)| humidity)
    }
}
