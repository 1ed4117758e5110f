//! ITU radio band table and classification

use serde::Serialize;
use std::fmt;
use tracing::debug;

/// An ITU radio band covering the half-open range `[lo_hz, hi_hz)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Band {
    pub name: &'static str,
    pub abbrev: &'static str,
    pub itu: u8,
    pub lo_hz: f64,
    pub hi_hz: f64,
    /// Human readable range, printed verbatim
    pub range: &'static str,
}

impl Band {
    const fn new(
        itu: u8,
        abbrev: &'static str,
        name: &'static str,
        lo_hz: f64,
        hi_hz: f64,
        range: &'static str,
    ) -> Self {
        Self { name, abbrev, itu, lo_hz, hi_hz, range }
    }

    /// Check whether a frequency falls inside this band
    pub fn contains(&self, freq_hz: f64) -> bool {
        freq_hz >= self.lo_hz && freq_hz < self.hi_hz
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}), ITU {} ({})", self.name, self.abbrev, self.itu, self.range)
    }
}

pub const ITU_BANDS: &[Band] = &[
    Band::new(1, "ELF", "Extremely low frequency", 3.0, 30.0, "3\u{2013}30 Hz"),
    Band::new(2, "SLF", "Super low frequency", 30.0, 300.0, "30\u{2013}300 Hz"),
    Band::new(3, "ULF", "Ultra low frequency", 300.0, 3e3, "300\u{2013}3,000 Hz"),
    Band::new(4, "VLF", "Very low frequency", 3e3, 30e3, "3\u{2013}30 kHz"),
    Band::new(5, "LF", "Low frequency", 30e3, 300e3, "30\u{2013}300 kHz"),
    Band::new(6, "MF", "Medium frequency", 300e3, 3e6, "300\u{2013}3,000 kHz"),
    Band::new(7, "HF", "High frequency", 3e6, 30e6, "3\u{2013}30 MHz"),
    Band::new(8, "VHF", "Very high frequency", 30e6, 300e6, "30\u{2013}300 MHz"),
    Band::new(9, "UHF", "Ultra high frequency", 300e6, 3e9, "300\u{2013}3,000 MHz"),
    Band::new(10, "SHF", "Super high frequency", 3e9, 30e9, "3\u{2013}30 GHz"),
    Band::new(11, "EHF", "Extremely high frequency", 30e9, 300e9, "30\u{2013}300 GHz"),
    Band::new(12, "THF", "Tremendously high frequency", 300e9, 3e12, "300\u{2013}3,000 GHz"),
];

/// Find the band containing `freq_hz`, scanning in ascending order.
///
/// Returns `None` below 3 Hz, at or above 3 THz, and for NaN.
pub fn find_band(freq_hz: f64) -> Option<&'static Band> {
    let band = ITU_BANDS.iter().find(|band| band.contains(freq_hz));
    match band {
        Some(b) => debug!("{} Hz is in {}", freq_hz, b.abbrev),
        None => debug!("{} Hz is outside all ITU bands", freq_hz),
    }
    band
}
