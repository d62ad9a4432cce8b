//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Each variant maps to one terminal failure of an OCR run; `Display` yields the
//! user-facing message, while `reason` fields carry detail for the logs.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Usage: {program} <input_pdf> <output_pdf>")]
    Usage { program: String },

    #[error("Failed to load PDF from {path}")]
    InputLoad { path: String, reason: String },

    #[error("saving text from OCR requires {requirement}")]
    UnsupportedCapability { requirement: String },

    #[error("Failed to write PDF with OCR to {path}")]
    OutputWrite { path: String, reason: String },
}

impl Error {
    pub fn input_load<E: std::fmt::Display>(path: impl Into<String>, e: E) -> Self {
        Error::InputLoad {
            path: path.into(),
            reason: e.to_string(),
        }
    }

    pub fn output_write<E: std::fmt::Display>(path: impl Into<String>, e: E) -> Self {
        Error::OutputWrite {
            path: path.into(),
            reason: e.to_string(),
        }
    }

    /// Underlying cause, when the variant records one.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Error::InputLoad { reason, .. } | Error::OutputWrite { reason, .. } => Some(reason),
            _ => None,
        }
    }

    /// Process exit status for this failure. Every failure is terminal.
    pub fn exit_code(&self) -> u8 {
        1
    }
}
