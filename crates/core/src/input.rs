//! Command-line input parsing
//!
//! Accepts either a single argument with the number and unit run together
//! (`144mhz`, `1.5e3 khz`) or the number and unit as two arguments
//! (`10 m`). Both forms split into a [`RawInput`] and share one validation
//! step.

use serde::Serialize;
use tracing::trace;

use crate::{ConvertError, Result};

/// Value and unit text as typed, before unit resolution
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawInput {
    pub value: f64,
    pub unit_text: String,
}

/// Parse the argument list (program name excluded) into a value and unit text
pub fn parse_input<S: AsRef<str>>(args: &[S]) -> Result<RawInput> {
    let (value, unit_text) = match args {
        [combined] => split_combined(combined.as_ref()),
        [number, unit] => split_separate(number.as_ref(), unit.as_ref()),
        _ => return Err(ConvertError::Usage { given: args.len() }),
    };
    trace!("split input into value={} unit={:?}", value, unit_text);

    validate(value, unit_text)
}

/// `144mhz` / `144 mhz` in one argument
fn split_combined(arg: &str) -> (f64, &str) {
    let (value, rest) = numeric_prefix(arg);
    (value, rest.trim_start())
}

/// Number and unit given as separate arguments
fn split_separate<'a>(number: &str, unit: &'a str) -> (f64, &'a str) {
    let value = number.trim().parse::<f64>().unwrap_or(0.0);
    (value, unit)
}

fn validate(value: f64, unit_text: &str) -> Result<RawInput> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ConvertError::invalid(format!("value must be a positive number, got {}", value)));
    }
    if unit_text.is_empty() {
        return Err(ConvertError::invalid("missing unit"));
    }

    Ok(RawInput {
        value,
        unit_text: unit_text.to_string(),
    })
}

/// Read the longest decimal floating-point literal at the start of `s`.
///
/// Leading whitespace is skipped. Returns `0.0` and the untouched input when
/// no number is present. An exponent marker is only consumed when digits
/// follow it, so `10e` reads as `10` with `e` left over.
fn numeric_prefix(s: &str) -> (f64, &str) {
    let trimmed = s.trim_start();
    let bytes = trimmed.as_bytes();
    let mut pos = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }

    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        frac_digits = count_digits(&bytes[pos + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            pos += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return (0.0, s);
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp = pos + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = count_digits(&bytes[exp.min(bytes.len())..]);
        if exp_digits > 0 {
            pos = exp + exp_digits;
        }
    }

    // Only ASCII was consumed, so `pos` is a char boundary.
    let (number, rest) = trimmed.split_at(pos);
    (number.parse().unwrap_or(0.0), rest)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
