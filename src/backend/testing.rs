//! In-memory stand-in for the host OCR engine.
use std::cell::Cell;
use std::path::Path;

use super::{OcrBackend, WriteOptions};
use crate::document::DocumentHandle;
use crate::error::{Error, Result};

/// Records how often it is probed and asked to save. A successful save
/// writes the document unchanged.
#[derive(Debug, Default)]
pub(crate) struct MockBackend {
    pub unsupported: bool,
    pub fail_save: bool,
    pub probes: Cell<usize>,
    pub saves: Cell<usize>,
    pub last_options: Cell<Option<WriteOptions>>,
}

impl MockBackend {
    pub fn supported() -> Self {
        Self::default()
    }

    pub fn unsupported() -> Self {
        Self {
            unsupported: true,
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_save: true,
            ..Self::default()
        }
    }
}

impl OcrBackend for MockBackend {
    fn mechanism(&self) -> &str {
        "mock engine"
    }

    fn requirement(&self) -> String {
        "mock engine 2.0 or later".to_string()
    }

    fn supports_ocr_save(&self) -> bool {
        self.probes.set(self.probes.get() + 1);
        !self.unsupported
    }

    fn apply_ocr(
        &self,
        mut document: DocumentHandle,
        output: &Path,
        options: &WriteOptions,
    ) -> Result<()> {
        self.saves.set(self.saves.get() + 1);
        self.last_options.set(Some(*options));
        if self.fail_save {
            return Err(Error::output_write(
                output.display().to_string(),
                "engine rejected document",
            ));
        }
        document.write_to(output)
    }
}
