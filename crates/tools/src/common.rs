//! Logging setup and error reporting shared by the tools

use freqwave_core::ConvertError;
use tracing::Level;

use crate::calc::CalcConfig;

/// Program name used when argv[0] is unavailable
pub const DEFAULT_PROGRAM_NAME: &str = "freqwave";

/// Initialize logging based on configuration.
///
/// Logs go to stderr so stdout only carries the conversion result.
pub fn init_logging(config: &CalcConfig) {
    tracing_subscriber::fmt()
        .with_max_level(log_level(config))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn log_level(config: &CalcConfig) -> Level {
    if config.debug {
        Level::DEBUG
    } else if config.verbose {
        Level::INFO
    } else {
        Level::WARN
    }
}

/// Name the program was invoked as
pub fn program_name() -> String {
    std::env::args_os()
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_PROGRAM_NAME.to_string())
}

/// Usage text printed for a wrong argument count
pub fn usage(prog: &str) -> String {
    format!(
        "Usage: {prog} <value><unit>\n  e.g. {prog} 144mhz\n       {prog} 10 m\n",
        prog = prog
    )
}

/// Text to print on stderr for a failed run
pub fn error_message(err: &anyhow::Error, prog: &str) -> String {
    match err.downcast_ref::<ConvertError>() {
        Some(ConvertError::Usage { .. }) => usage(prog),
        _ => format!("Error: {:#}\n", err),
    }
}
