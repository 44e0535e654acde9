//! Comfort evaluation.
//!
//! Pure range checks deciding whether a temperature or humidity value is
//! comfortable. Both ends of every range are inclusive. NaN is never
//! comfortable, but the monitor does not evaluate invalid readings at all.

use crate::config::{HUMIDITY_HIGH, HUMIDITY_LOW, TEMP_HIGH, TEMP_LOW};

/// Inclusive range of acceptable values.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ComfortRange {
    pub low: f32,
    pub high: f32,
}

impl ComfortRange {
    pub const fn new(low: f32, high: f32) -> Self {
        Self { low, high }
    }

    /// Returns true iff `low <= value <= high`
    #[inline]
    pub fn contains(&self, value: f32) -> bool {
        value >= self.low && value <= self.high
    }
}

/// Temperature and humidity comfort bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ComfortThresholds {
    /// Celsius
    pub temperature: ComfortRange,
    /// Relative humidity in percent
    pub humidity: ComfortRange,
}

impl ComfortThresholds {
    /// 18-25C and 40-60% RH
    pub const DEFAULT: Self = Self {
        temperature: ComfortRange::new(TEMP_LOW, TEMP_HIGH),
        humidity: ComfortRange::new(HUMIDITY_LOW, HUMIDITY_HIGH),
    };

    #[inline]
    pub fn is_temp_comfortable(&self, temperature: f32) -> bool {
        self.temperature.contains(temperature)
    }

    #[inline]
    pub fn is_humidity_comfortable(&self, humidity: f32) -> bool {
        self.humidity.contains(humidity)
    }

    /// Both values inside their ranges
    pub fn is_comfortable(&self, temperature: f32, humidity: f32) -> bool {
        self.is_temp_comfortable(temperature) && self.is_humidity_comfortable(humidity)
    }
}

impl Default for ComfortThresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Check if temperature is within the default comfort range.
pub fn is_temp_comfortable(temperature: f32) -> bool {
    ComfortThresholds::DEFAULT.is_temp_comfortable(temperature)
}

/// Check if humidity is within the default comfort range.
pub fn is_humidity_comfortable(humidity: f32) -> bool {
    ComfortThresholds::DEFAULT.is_humidity_comfortable(humidity)
}
