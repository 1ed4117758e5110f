//! Frequency <-> wavelength conversion

use serde::Serialize;
use tracing::debug;

use crate::bands::{find_band, Band};
use crate::format::Quantity;
use crate::units::UnitEntry;

/// Speed of light in vacuum, m/s
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Result of converting one value
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Conversion {
    /// Value as entered, in `unit`
    pub value: f64,
    pub unit: &'static UnitEntry,
    pub frequency_hz: f64,
    pub wavelength_m: f64,
}

impl Conversion {
    /// The complementary quantity: wavelength for frequency input and
    /// frequency for distance input
    pub fn output(&self) -> Quantity {
        if self.unit.is_frequency() {
            Quantity::Wavelength(self.wavelength_m)
        } else {
            Quantity::Frequency(self.frequency_hz)
        }
    }

    /// ITU band of the frequency, if any
    pub fn band(&self) -> Option<&'static Band> {
        find_band(self.frequency_hz)
    }
}

/// Convert a positive value in `unit` to its complementary quantity
pub fn convert(value: f64, unit: &'static UnitEntry) -> Conversion {
    let (frequency_hz, wavelength_m) = if unit.is_frequency() {
        let hz = unit.to_base(value);
        (hz, SPEED_OF_LIGHT / hz)
    } else {
        let m = unit.to_base(value);
        (SPEED_OF_LIGHT / m, m)
    };
    debug!("{} {} -> {} Hz, {} m", value, unit.suffix, frequency_hz, wavelength_m);

    Conversion {
        value,
        unit,
        frequency_hz,
        wavelength_m,
    }
}
