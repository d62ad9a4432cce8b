//! The external OCR capability.
//!
//! Recognition itself happens outside this crate. [`OcrBackend`] is the seam
//! between the orchestrator and whatever engine the host provides, so the
//! capability gate and the save call can be swapped out in tests.
pub mod ocrmypdf;
pub mod version;

#[cfg(test)]
pub(crate) mod testing;

pub use ocrmypdf::OcrmypdfBackend;
pub use version::ToolVersion;

use std::path::Path;

use crate::document::DocumentHandle;
use crate::error::Result;

/// Options for [`OcrBackend::apply_ocr`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteOptions {
    /// Embed recognized text as an invisible layer on each page
    pub save_text_from_ocr: bool,
}

impl WriteOptions {
    pub fn with_ocr_text() -> Self {
        Self {
            save_text_from_ocr: true,
        }
    }
}

pub trait OcrBackend {
    /// Name of the engine, shown in the success message.
    fn mechanism(&self) -> &str;

    /// What the host needs for [`supports_ocr_save`](Self::supports_ocr_save)
    /// to hold, e.g. `"ocrmypdf 10.0.0 or later"`.
    fn requirement(&self) -> String;

    /// Whether the host can currently perform an OCR save.
    fn supports_ocr_save(&self) -> bool;

    /// Write `document` to `output`, adding a text layer when requested.
    ///
    /// Blocks until the engine finishes. On failure the state of `output` is
    /// unspecified; nothing is cleaned up.
    fn apply_ocr(
        &self,
        document: DocumentHandle,
        output: &Path,
        options: &WriteOptions,
    ) -> Result<()>;
}
