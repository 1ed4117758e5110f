//! Scaled-unit formatting for frequencies and wavelengths

use serde::Serialize;
use std::fmt;

use crate::bands::Band;

/// Digits printed after the decimal point
pub const PRECISION: usize = 4;

/// A converted quantity in its base unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Quantity {
    /// Hz
    Frequency(f64),
    /// Metres
    Wavelength(f64),
}

impl Quantity {
    /// Pick the largest display unit whose threshold the magnitude meets
    pub fn scaled(&self) -> (f64, &'static str) {
        match *self {
            Quantity::Frequency(hz) => {
                if hz >= 1e12 {
                    (hz / 1e12, "THz")
                } else if hz >= 1e9 {
                    (hz / 1e9, "GHz")
                } else if hz >= 1e6 {
                    (hz / 1e6, "MHz")
                } else if hz >= 1e3 {
                    (hz / 1e3, "kHz")
                } else {
                    (hz, "Hz")
                }
            }
            Quantity::Wavelength(m) => {
                if m >= 1000.0 {
                    (m / 1000.0, "km")
                } else if m >= 1.0 {
                    (m, "m")
                } else if m >= 0.01 {
                    (m * 100.0, "cm")
                } else {
                    (m * 1000.0, "mm")
                }
            }
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (value, unit) = self.scaled();
        write!(f, "{:.*} {}", PRECISION, value, unit)
    }
}

/// The `Band: ...` report line
pub fn band_line(band: Option<&Band>) -> String {
    match band {
        Some(band) => format!("Band: {}", band),
        None => "Band: Unknown".to_string(),
    }
}
