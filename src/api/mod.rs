//! High-level library API: apply OCR to a file in one call. Prefer this over
//! driving [`DocumentHandle`] and [`OcrBackend`] by hand when embedding.
use std::path::Path;

use tracing::{debug, info};

use crate::backend::{OcrBackend, WriteOptions};
use crate::document::DocumentHandle;
use crate::error::{Error, Result};

/// Summary of a completed save
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub pages: usize,
    pub mechanism: String,
    /// Whether a text layer was requested from the backend
    pub ocr_applied: bool,
}

/// Load `input`, check that `backend` can save OCR text, and write the result
/// to `output`.
///
/// Steps run strictly in that order and the first failure aborts: a missing
/// input never reaches the capability check, and an unsupported host never
/// reaches the save call.
pub fn apply_ocr_to_path(input: &Path, output: &Path, backend: &dyn OcrBackend) -> Result<Outcome> {
    convert_document(input, output, true, backend)
}

/// Load `input` and write it to `output` through `backend`, with a text
/// layer only when `apply_ocr` is set. Without OCR the capability check is
/// skipped and the document is written unchanged.
pub fn convert_document(
    input: &Path,
    output: &Path,
    apply_ocr: bool,
    backend: &dyn OcrBackend,
) -> Result<Outcome> {
    let document = DocumentHandle::load(input)?;
    let pages = document.page_count();
    let output_name = output.display().to_string();

    if apply_ocr && !backend.supports_ocr_save() {
        return Err(Error::UnsupportedCapability {
            requirement: backend.requirement(),
        });
    }

    let options = WriteOptions {
        save_text_from_ocr: apply_ocr,
    };
    debug!(
        "Saving {} page(s) with {} ({:?})",
        pages,
        backend.mechanism(),
        options
    );
    backend
        .apply_ocr(document, output, &options)
        .map_err(|e| match e {
            // Report the path the caller gave, not the backend's rendering of it
            Error::OutputWrite { reason, .. } => Error::OutputWrite {
                path: output_name.clone(),
                reason,
            },
            other => Error::output_write(&output_name, other),
        })?;

    info!("Wrote {} page(s) to {}", pages, output_name);
    Ok(Outcome {
        pages,
        mechanism: backend.mechanism().to_string(),
        ocr_applied: apply_ocr,
    })
}
