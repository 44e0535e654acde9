//! One temperature + humidity sample.

use crate::error::MonitorError;

/// A reading produced fresh every cycle and discarded at its end.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reading {
    /// Temperature in Celsius
    pub temperature: f32,
    /// Relative humidity in percent
    pub humidity: f32,
}

impl Reading {
    pub const fn new(temperature: f32, humidity: f32) -> Self {
        Self {
            temperature,
            humidity,
        }
    }

    /// Neither component carries the NaN failure sentinel
    pub fn is_valid(&self) -> bool {
        !self.temperature.is_nan() && !self.humidity.is_nan()
    }

    /// Returns the reading if valid, otherwise [`MonitorError::SensorRead`]
    pub fn validate(self) -> Result<Self, MonitorError> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(MonitorError::SensorRead)
        }
    }
}
