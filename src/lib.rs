#![doc = r#"
pdfocr: add an invisible, searchable OCR text layer to PDF documents.

The crate loads a PDF, checks that the host offers an OCR-capable save, and
hands the document to that engine to write a copy whose pages carry recognized
text. Recognition itself is done by the host's `ocrmypdf` installation; this
crate owns only the orchestration around it. It powers the `pdfocr` CLI and
can be embedded in your own Rust applications.

Requirements
------------
- `ocrmypdf` 10.0 or later on `PATH`, or its location in `PDFOCR_OCRMYPDF`.
- Rust 2024 edition toolchain.

Quick start
-----------
```rust,no_run
use std::path::Path;
use pdfocr::{apply_ocr_to_path, OcrConfig, OcrmypdfBackend};

fn main() -> pdfocr::Result<()> {
    let backend = OcrmypdfBackend::new(OcrConfig::from_env());
    let outcome = apply_ocr_to_path(
        Path::new("scan.pdf"),
        Path::new("scan-searchable.pdf"),
        &backend,
    )?;
    println!("{} page(s) processed with {}", outcome.pages, outcome.mechanism);
    Ok(())
}
```

Error handling
--------------
All public functions return `pdfocr::Result<T>`; match on `pdfocr::Error` to
tell the failure stages apart.

```rust,no_run
use std::path::Path;
use pdfocr::{apply_ocr_to_path, Error, OcrmypdfBackend};

fn main() {
    let backend = OcrmypdfBackend::default();
    match apply_ocr_to_path(Path::new("in.pdf"), Path::new("out.pdf"), &backend) {
        Ok(_) => {}
        Err(Error::InputLoad { path, reason }) => eprintln!("cannot load {path}: {reason}"),
        Err(Error::UnsupportedCapability { requirement }) => eprintln!("install {requirement}"),
        Err(other) => eprintln!("{other}"),
    }
}
```

Useful modules
--------------
- [`api`]: one-call entry points; `convert_document` can also save without OCR.
- [`backend`]: the `OcrBackend` seam and the `ocrmypdf` binding.
- [`document`]: input loading into an owned handle.
- [`error`]: crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod backend;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;

// Curated public API surface
pub use api::{Outcome, apply_ocr_to_path, convert_document};
pub use backend::{OcrBackend, OcrmypdfBackend, ToolVersion, WriteOptions};
pub use config::OcrConfig;
pub use document::DocumentHandle;
pub use error::{Error, Result};
