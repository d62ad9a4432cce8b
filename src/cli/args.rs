use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use tracing::debug;

use crate::error::{Error, Result};

/// Fallback program name for usage text when `argv[0]` is absent
pub const DEFAULT_PROGRAM: &str = "pdfocr";

// Built-in flags are off and hyphen values allowed so that every argument
// counts toward the two positionals, including `-h` or `--version`. Paths
// stay `PathBuf` so non-UTF-8 file names parse.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "pdfocr",
    about = "Add a searchable OCR text layer to a PDF",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct CliArgs {
    /// Input PDF path
    #[arg(allow_hyphen_values = true)]
    pub input: PathBuf,

    /// Output PDF path
    #[arg(allow_hyphen_values = true)]
    pub output: PathBuf,
}

impl CliArgs {
    /// Parse a full argument list, program name first. A wrong argument
    /// count becomes [`Error::Usage`].
    pub fn from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let program = args
            .first()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_PROGRAM.to_string());

        if args.is_empty() {
            return Err(Error::Usage { program });
        }
        Self::try_parse_from(&args).map_err(|e| {
            debug!("Argument parsing failed: {:?}", e.kind());
            Error::Usage { program }
        })
    }
}
