//! Loading input documents into an owned handle.
//!
//! A [`DocumentHandle`] is created once per run from the user's input path and
//! moved into the OCR backend, which consumes it. The handle is never cloned.
use std::io::Write;
use std::path::{Path, PathBuf};

use lopdf::Document;
use tracing::debug;

use crate::error::{Error, Result};

/// Turn a user-supplied path into an absolute filesystem locator.
///
/// Relative paths are joined to the current directory without touching the
/// filesystem, so symlinks are kept and the path need not exist yet. Spaces,
/// `#`, `%` and non-ASCII characters pass through untouched.
pub fn resolve_locator(path: &Path) -> std::io::Result<PathBuf> {
    std::path::absolute(path)
}

/// A loaded PDF document, owned by a single run.
pub struct DocumentHandle {
    source: PathBuf,
    inner: Document,
}

impl std::fmt::Debug for DocumentHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentHandle")
            .field("source", &self.source)
            .field("pages", &self.page_count())
            .finish()
    }
}

impl DocumentHandle {
    /// Resolve and load `input`. Failures name `input` as given.
    pub fn load(input: &Path) -> Result<Self> {
        let name = input.display().to_string();
        let source = resolve_locator(input).map_err(|e| Error::input_load(&name, e))?;
        debug!("Loading document from {:?}", source);

        let inner = Document::load(&source).map_err(|e| Error::input_load(&name, e))?;
        debug!("Loaded {} page(s) from {:?}", inner.get_pages().len(), source);
        Ok(Self { source, inner })
    }

    /// Absolute locator the document was loaded from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn page_count(&self) -> usize {
        self.inner.get_pages().len()
    }

    /// Serialize the document to `path`, replacing any existing file.
    pub fn write_to(&mut self, path: &Path) -> Result<()> {
        self.inner
            .save(path)
            .map_err(|e| Error::output_write(path.display().to_string(), e))?;
        Ok(())
    }

    /// Serialize the document into an arbitrary writer.
    pub fn write_to_writer<W: Write>(&mut self, writer: &mut W) -> std::io::Result<()> {
        self.inner
            .save_to(writer)
            .map_err(|e| std::io::Error::other(e.to_string()))?;
        writer.flush()
    }
}
