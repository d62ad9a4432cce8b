use std::ffi::OsString;
use std::io::Write;

use tracing::{debug, warn};

use crate::api::apply_ocr_to_path;
use crate::backend::OcrBackend;
use crate::error::Error;

use super::args::CliArgs;

/// Run one invocation and return the process exit status.
///
/// `args` includes the program name. All user-facing messages go to `out`;
/// failure detail is logged through `tracing`.
pub fn run<I, T, W>(args: I, backend: &dyn OcrBackend, out: &mut W) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    W: Write,
{
    let outcome = CliArgs::from_args(args).and_then(|args| {
        debug!("Input: {:?}, output: {:?}", args.input, args.output);
        apply_ocr_to_path(&args.input, &args.output, backend)
    });

    match outcome {
        Ok(outcome) => {
            report(
                out,
                &format!("OCR applied successfully using {}", outcome.mechanism),
            );
            0
        }
        Err(e @ Error::Usage { .. }) => {
            report(out, &e.to_string());
            e.exit_code()
        }
        Err(e) => {
            if let Some(reason) = e.reason() {
                warn!("{}: {}", e, reason);
            }
            report(out, &format!("Error: {}", e));
            e.exit_code()
        }
    }
}

fn report<W: Write>(out: &mut W, message: &str) {
    if let Err(e) = writeln!(out, "{}", message) {
        warn!("Cannot write message {:?}: {}", message, e);
    }
}
