//! freqwave Core - frequency/wavelength conversion
//!
//! This crate provides the unit and ITU band tables, input parsing,
//! the frequency <-> wavelength conversion and scaled formatting.

pub mod units;
pub mod bands;
pub mod input;
pub mod convert;
pub mod format;
pub mod error;

pub use error::{ConvertError, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        units::{UnitEntry, UnitKind, UNITS, find_unit},
        bands::{Band, ITU_BANDS, find_band},
        input::{RawInput, parse_input},
        convert::{Conversion, SPEED_OF_LIGHT, convert},
        format::{Quantity, band_line},
        error::{ConvertError, Result},
    };
}
