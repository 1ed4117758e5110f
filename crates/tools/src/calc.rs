//! Calculator configuration and implementation

use anyhow::{Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::io::Write;
use tracing::info;

use freqwave_core::prelude::*;

/// Calculator configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "freqwave", version)]
#[command(about = "Convert between frequency and wavelength and show the ITU band")]
pub struct CalcConfig {
    /// Value and unit, as `144mhz` or `10 m`
    #[arg(value_name = "INPUT", allow_hyphen_values = true)]
    pub input: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// List recognised units and ITU bands, then exit
    #[arg(long)]
    pub list: bool,
}

/// JSON form of a conversion
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    input: &'a RawInput,
    unit: &'static UnitEntry,
    frequency_hz: f64,
    wavelength_m: f64,
    result: String,
    band: Option<&'static Band>,
}

/// Single-shot frequency/wavelength calculator
pub struct Calculator {
    config: CalcConfig,
}

impl Calculator {
    /// Create a new calculator with the given configuration
    pub fn new(config: CalcConfig) -> Self {
        Self { config }
    }

    /// Run one conversion and write the report to `out`.
    ///
    /// Input errors are returned before anything is written.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.config.list {
            write_tables(out).context("failed to write unit tables")?;
            return Ok(());
        }

        let raw = parse_input(&self.config.input)?;
        let unit = find_unit(&raw.unit_text)?;
        let conversion = convert(raw.value, unit);
        info!(
            "converted {} {} ({:?})",
            raw.value, raw.unit_text, unit.kind
        );

        if self.config.json {
            write_json(out, &raw, &conversion).context("failed to write JSON report")?;
        } else {
            write_text(out, &conversion).context("failed to write report")?;
        }
        out.flush().context("failed to flush output")?;

        Ok(())
    }
}

fn write_text<W: Write>(out: &mut W, conversion: &Conversion) -> std::io::Result<()> {
    writeln!(out, "{}", conversion.output())?;
    writeln!(out, "{}", band_line(conversion.band()))?;
    writeln!(out)
}

fn write_json<W: Write>(out: &mut W, raw: &RawInput, conversion: &Conversion) -> Result<()> {
    let report = JsonReport {
        input: raw,
        unit: conversion.unit,
        frequency_hz: conversion.frequency_hz,
        wavelength_m: conversion.wavelength_m,
        result: conversion.output().to_string(),
        band: conversion.band(),
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

fn write_tables<W: Write>(out: &mut W) -> std::io::Result<()> {
    for (title, kind) in [("Frequency units", UnitKind::Frequency), ("Distance units", UnitKind::Distance)] {
        writeln!(out, "{}:", title)?;
        for unit in UNITS.iter().filter(|u| u.kind == kind) {
            writeln!(out, "  {:<12} x {:e}", unit.suffix, unit.multiplier)?;
        }
        writeln!(out)?;
    }

    writeln!(out, "ITU bands:")?;
    for band in ITU_BANDS {
        writeln!(out, "  {:>2}  {:<4} {:<28} {}", band.itu, band.abbrev, band.name, band.range)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(input: &[&str]) -> CalcConfig {
        CalcConfig {
            input: input.iter().map(|s| s.to_string()).collect(),
            ..CalcConfig::default()
        }
    }

    fn run(config: CalcConfig) -> (Result<()>, String) {
        let mut out = Vec::new();
        let result = Calculator::new(config).run(&mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_frequency_input() {
        let (result, out) = run(config(&["144mhz"]));
        result.unwrap();
        assert_eq!(
            out,
            "2.0819 m\nBand: Very high frequency (VHF), ITU 8 (30\u{2013}300 MHz)\n\n"
        );
    }

    #[test]
    fn test_wavelength_input() {
        let (result, out) = run(config(&["10", "m"]));
        result.unwrap();
        assert_eq!(
            out,
            "29.9792 MHz\nBand: High frequency (HF), ITU 7 (3\u{2013}30 MHz)\n\n"
        );
    }

    #[test]
    fn test_case_insensitive_units() {
        let outputs: Vec<String> = ["144MHz", "144mhz", "144MHZ"]
            .into_iter()
            .map(|input| run(config(&[input])).1)
            .collect();
        assert_eq!(outputs[0], outputs[1]);
        assert_eq!(outputs[1], outputs[2]);
    }

    #[test]
    fn test_unknown_band() {
        let (result, out) = run(config(&["1", "hz"]));
        result.unwrap();
        assert_eq!(out, "299792.4580 km\nBand: Unknown\n\n");

        let (result, out) = run(config(&["5thz"]));
        result.unwrap();
        assert_eq!(out, "0.0600 mm\nBand: Unknown\n\n");
    }

    #[test]
    fn test_errors_write_nothing() {
        let cases: [(&[&str], fn(&ConvertError) -> bool); 4] = [
            (&[], |e| matches!(e, ConvertError::Usage { given: 0 })),
            (&["1", "m", "x"], |e| matches!(e, ConvertError::Usage { given: 3 })),
            (&["-5", "m"], |e| matches!(e, ConvertError::InvalidInput { .. })),
            (&["3", "furlong"], |e| *e == ConvertError::UnknownUnit { unit: "furlong".to_string() }),
        ];

        for (input, expected) in cases {
            let (result, out) = run(config(input));
            let err = result.unwrap_err();
            let convert_err = err.downcast_ref::<ConvertError>().unwrap();
            assert!(expected(convert_err), "{:?}: {:?}", input, convert_err);
            assert!(out.is_empty());
        }
    }

    #[test]
    fn test_json_output() {
        let mut cfg = config(&["10", "m"]);
        cfg.json = true;
        let (result, out) = run(cfg);
        result.unwrap();

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["input"]["value"], 10.0);
        assert_eq!(value["input"]["unit_text"], "m");
        assert_eq!(value["unit"]["suffix"], "m");
        assert_eq!(value["unit"]["kind"], "distance");
        assert_eq!(value["result"], "29.9792 MHz");
        assert_eq!(value["band"]["abbrev"], "HF");
        assert_eq!(value["band"]["itu"], 7);
    }

    #[test]
    fn test_json_unknown_band_is_null() {
        let mut cfg = config(&["1hz"]);
        cfg.json = true;
        let (result, out) = run(cfg);
        result.unwrap();

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(value["band"].is_null());
    }

    #[test]
    fn test_list_ignores_input() {
        let mut cfg = config(&["144mhz"]);
        cfg.list = true;
        let (result, out) = run(cfg);
        result.unwrap();

        assert!(out.starts_with("Frequency units:\n  terahertz    x 1e12\n"));
        assert!(out.contains("  mm           x 1e-3\n"));
        assert!(out.contains("ITU bands:\n   1  ELF  Extremely low frequency"));
        assert_eq!(out.lines().filter(|l| l.contains("ITU") || l.contains('\u{2013}')).count(), 13);
    }

    #[test]
    fn test_cli_parsing() {
        let cfg = CalcConfig::try_parse_from(["freqwave", "144mhz"]).unwrap();
        assert_eq!(cfg.input, vec!["144mhz"]);
        assert!(!cfg.json);

        let cfg = CalcConfig::try_parse_from(["freqwave", "--json", "-v", "10", "m"]).unwrap();
        assert_eq!(cfg.input, vec!["10", "m"]);
        assert!(cfg.json && cfg.verbose);

        let cfg = CalcConfig::try_parse_from(["freqwave", "-5", "m"]).unwrap();
        assert_eq!(cfg.input, vec!["-5", "m"]);

        let cfg = CalcConfig::try_parse_from(["freqwave"]).unwrap();
        assert!(cfg.input.is_empty());
    }
}
