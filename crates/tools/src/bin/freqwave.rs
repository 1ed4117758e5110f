//! freqwave - frequency/wavelength calculator with ITU band lookup

use clap::Parser;
use std::io;
use std::process::ExitCode;
use tracing::info;

use freqwave_tools::common::program_name;
use freqwave_tools::{error_message, init_logging, CalcConfig, Calculator};

fn main() -> ExitCode {
    let config = match CalcConfig::try_parse() {
        Ok(config) => config,
        Err(e) => {
            // --help and --version also land here
            let _ = e.print();
            return if e.use_stderr() { ExitCode::FAILURE } else { ExitCode::SUCCESS };
        }
    };

    init_logging(&config);
    info!("freqwave starting");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match Calculator::new(config).run(&mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprint!("{}", error_message(&err, &program_name()));
            ExitCode::FAILURE
        }
    }
}
