//! pdfocr CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: set up logging, pick up the
//! backend configuration, run once and exit with the resulting status.
//! For programmatic use, prefer the library API (`pdfocr::api`).

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use pdfocr::{OcrConfig, OcrmypdfBackend, cli};

fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the result message.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let backend = OcrmypdfBackend::new(OcrConfig::from_env());
    let code = cli::run(std::env::args_os(), &backend, &mut std::io::stdout());
    ExitCode::from(code)
}
