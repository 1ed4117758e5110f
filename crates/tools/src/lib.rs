//! freqwave Tools library

pub mod calc;
pub mod common;

pub use calc::{CalcConfig, Calculator};
pub use common::{init_logging, error_message, usage};
