//! Backend driving the host's `ocrmypdf` command.
use std::path::Path;
use std::process::Command;

use tracing::{debug, warn};

use super::version::ToolVersion;
use super::{OcrBackend, WriteOptions};
use crate::config::OcrConfig;
use crate::document::{DocumentHandle, resolve_locator};
use crate::error::{Error, Result};

const MECHANISM: &str = "ocrmypdf";

// Lines of tool stderr kept in error reasons
const STDERR_TAIL_LINES: usize = 5;

/// Runs `ocrmypdf` as a child process. The tool renders each page, runs
/// Tesseract on it and writes a PDF with an invisible text layer.
#[derive(Debug, Clone)]
pub struct OcrmypdfBackend {
    config: OcrConfig,
}

impl OcrmypdfBackend {
    pub fn new(config: OcrConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OcrConfig {
        &self.config
    }

    /// Ask the configured program for its version.
    pub fn detect_version(&self) -> Option<ToolVersion> {
        let program = &self.config.program;
        let output = match Command::new(program).arg("--version").output() {
            Ok(output) => output,
            Err(e) => {
                debug!("Cannot run {:?}: {}", program, e);
                return None;
            }
        };
        if !output.status.success() {
            debug!("{:?} --version exited with {}", program, output.status);
            return None;
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let version = ToolVersion::find_in(&stdout);
        if version.is_none() {
            debug!("Unrecognized version output from {:?}: {:?}", program, stdout.trim());
        }
        version
    }
}

impl Default for OcrmypdfBackend {
    fn default() -> Self {
        Self::new(OcrConfig::default())
    }
}

impl OcrBackend for OcrmypdfBackend {
    fn mechanism(&self) -> &str {
        MECHANISM
    }

    fn requirement(&self) -> String {
        format!("{} {} or later", MECHANISM, self.config.min_version)
    }

    fn supports_ocr_save(&self) -> bool {
        match self.detect_version() {
            Some(found) if found >= self.config.min_version => {
                debug!("Found {} {}", MECHANISM, found);
                true
            }
            Some(found) => {
                warn!(
                    "{} {} is older than required {}",
                    MECHANISM, found, self.config.min_version
                );
                false
            }
            None => false,
        }
    }

    fn apply_ocr(
        &self,
        mut document: DocumentHandle,
        output: &Path,
        options: &WriteOptions,
    ) -> Result<()> {
        let output_name = output.display().to_string();

        if !options.save_text_from_ocr {
            return document.write_to(output);
        }

        // The tool reads from a file, so stage the loaded document first.
        let mut staged = tempfile::Builder::new()
            .prefix("pdfocr-")
            .suffix(".pdf")
            .tempfile()
            .map_err(|e| Error::output_write(&output_name, e))?;
        document
            .write_to_writer(staged.as_file_mut())
            .map_err(|e| Error::output_write(&output_name, e))?;
        drop(document);

        // Absolute so that names like `-` or `-h` reach the tool as files,
        // never as stdout or an option.
        let target = resolve_locator(output).map_err(|e| Error::output_write(&output_name, e))?;

        debug!(
            "Running {:?} on {:?} -> {:?}",
            self.config.program,
            staged.path(),
            target
        );
        let result = Command::new(&self.config.program)
            .args(["--output-type", "pdf", "--skip-text", "--"])
            .arg(staged.path())
            .arg(&target)
            .output()
            .map_err(|e| Error::output_write(&output_name, e))?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(Error::output_write(
                &output_name,
                format!("{} exited with {}: {}", MECHANISM, result.status, tail(&stderr)),
            ));
        }
        if !target.is_file() {
            return Err(Error::output_write(
                &output_name,
                format!("{} exited successfully but wrote no file", MECHANISM),
            ));
        }
        Ok(())
    }
}

fn tail(text: &str) -> String {
    let lines: Vec<&str> = text.trim_end().lines().collect();
    let start = lines.len().saturating_sub(STDERR_TAIL_LINES);
    lines[start..].join("\n")
}
