//! Command Line Interface (CLI) layer for pdfocr.
//!
//! This module defines argument parsing (`args`) and the orchestration logic
//! (`runner`) that validates arguments, runs the OCR save through
//! `pdfocr::api` and maps each outcome to a message and exit status.
//!
//! If you are embedding pdfocr into another application, prefer calling
//! [`crate::api::apply_ocr_to_path`] directly.
pub mod args;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
