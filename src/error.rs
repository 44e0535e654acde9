//! Monitor failure kinds.
//!
//! Only two failures are modelled. A sensor read failure is recovered every
//! cycle; a display initialisation failure halts the firmware for good.

/// Error type for monitor operations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MonitorError {
    /// Temperature or humidity came back as NaN
    SensorRead,
    /// The display rejected initialisation at startup
    DisplayInit,
}

impl MonitorError {
    /// Fixed text shown on the display and written to the console
    pub const fn message(&self) -> &'static str {
        match self {
            Self::SensorRead => "Sensor Read Error",
            Self::DisplayInit => "SSD1306 allocation failed",
        }
    }

    /// Whether the firmware must stop after this error
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::DisplayInit)
    }
}

impl ufmt::uDisplay for MonitorError {
    fn fmt<W>(&self, f: &mut ufmt::Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: ufmt::uWrite + ?Sized,
    {
        f.write_str(self.message())
    }
}
