use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::backend::version::ToolVersion;

/// Environment variable naming the `ocrmypdf` executable to run.
pub const PROGRAM_ENV: &str = "PDFOCR_OCRMYPDF";

/// Oldest `ocrmypdf` release whose `--output-type pdf` and `--skip-text`
/// behave the way the backend expects.
pub const MIN_OCRMYPDF_VERSION: ToolVersion = ToolVersion::new(10, 0, 0);

/// Settings for the OCR backend, suitable for config files and embedding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// Executable name or path; bare names are looked up on `PATH`
    pub program: PathBuf,
    /// Minimum tool version that counts as supporting OCR save
    pub min_version: ToolVersion,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from("ocrmypdf"),
            min_version: MIN_OCRMYPDF_VERSION,
        }
    }
}

impl OcrConfig {
    /// Defaults, with `program` taken from `PDFOCR_OCRMYPDF` when set.
    pub fn from_env() -> Self {
        Self::default().with_program_override(std::env::var_os(PROGRAM_ENV).map(PathBuf::from))
    }

    fn with_program_override(mut self, program: Option<PathBuf>) -> Self {
        if let Some(program) = program.filter(|p| !p.as_os_str().is_empty()) {
            self.program = program;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_ocrmypdf_on_path() {
        let config = OcrConfig::default();
        assert_eq!(config.program, PathBuf::from("ocrmypdf"));
        assert_eq!(config.min_version, ToolVersion::new(10, 0, 0));
    }

    #[test]
    fn override_replaces_program_unless_empty() {
        let config = OcrConfig::default().with_program_override(Some("/opt/ocr/bin/ocrmypdf".into()));
        assert_eq!(config.program, PathBuf::from("/opt/ocr/bin/ocrmypdf"));

        let config = OcrConfig::default().with_program_override(Some(PathBuf::new()));
        assert_eq!(config.program, PathBuf::from("ocrmypdf"));

        let config = OcrConfig::default().with_program_override(None);
        assert_eq!(config, OcrConfig::default());
    }

    #[test]
    fn deserializes_partial_config_with_defaults() {
        let config: OcrConfig = serde_json::from_str(r#"{ "min_version": "12.1" }"#).unwrap();
        assert_eq!(config.program, PathBuf::from("ocrmypdf"));
        assert_eq!(config.min_version, ToolVersion::new(12, 1, 0));

        let err = serde_json::from_str::<OcrConfig>(r#"{ "min_version": "twelve" }"#);
        assert!(err.is_err());
    }
}
