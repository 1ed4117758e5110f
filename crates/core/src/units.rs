//! Unit suffix table and lookup

use serde::Serialize;
use tracing::{debug, trace};

use crate::{ConvertError, Result};

/// Unit text longer than this is truncated before lookup
pub const MAX_UNIT_LEN: usize = 31;

/// Physical quantity a unit measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    /// Base unit Hz
    Frequency,
    /// Base unit metres
    Distance,
}

/// A recognised unit suffix
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnitEntry {
    pub suffix: &'static str,
    pub kind: UnitKind,
    /// Factor converting a value in this unit to its base unit
    pub multiplier: f64,
}

impl UnitEntry {
    const fn freq(suffix: &'static str, multiplier: f64) -> Self {
        Self { suffix, kind: UnitKind::Frequency, multiplier }
    }

    const fn dist(suffix: &'static str, multiplier: f64) -> Self {
        Self { suffix, kind: UnitKind::Distance, multiplier }
    }

    pub fn is_frequency(&self) -> bool {
        self.kind == UnitKind::Frequency
    }

    /// Value expressed in the unit's base (Hz or metres)
    pub fn to_base(&self, value: f64) -> f64 {
        value * self.multiplier
    }
}

pub const UNITS: &[UnitEntry] = &[
    UnitEntry::freq("terahertz", 1e12),
    UnitEntry::freq("thz", 1e12),
    UnitEntry::freq("gigahertz", 1e9),
    UnitEntry::freq("ghz", 1e9),
    UnitEntry::freq("megahertz", 1e6),
    UnitEntry::freq("mhz", 1e6),
    UnitEntry::freq("kilohertz", 1e3),
    UnitEntry::freq("khz", 1e3),
    UnitEntry::freq("hertz", 1.0),
    UnitEntry::freq("hz", 1.0),
    UnitEntry::dist("kilometers", 1e3),
    UnitEntry::dist("kilometer", 1e3),
    UnitEntry::dist("km", 1e3),
    UnitEntry::dist("meters", 1.0),
    UnitEntry::dist("meter", 1.0),
    UnitEntry::dist("m", 1.0),
    UnitEntry::dist("centimeters", 1e-2),
    UnitEntry::dist("centimeter", 1e-2),
    UnitEntry::dist("cm", 1e-2),
    UnitEntry::dist("millimeters", 1e-3),
    UnitEntry::dist("millimeter", 1e-3),
    UnitEntry::dist("mm", 1e-3),
];

/// Resolve unit text to a table entry.
///
/// Matching is exact after ASCII case folding. Only the first
/// [`MAX_UNIT_LEN`] characters take part; the error carries the text as given.
pub fn find_unit(text: &str) -> Result<&'static UnitEntry> {
    let folded: String = text
        .chars()
        .take(MAX_UNIT_LEN)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    trace!("looking up unit {:?}", folded);

    match UNITS.iter().find(|unit| unit.suffix == folded) {
        Some(unit) => {
            debug!("resolved unit {:?} to {:?} x{}", text, unit.kind, unit.multiplier);
            Ok(unit)
        }
        None => Err(ConvertError::UnknownUnit { unit: text.to_string() }),
    }
}
