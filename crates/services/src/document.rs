//! Document text source: PDFs go through `pdf-extract`, anything else is read as text.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::DocumentError;

const PDF_MAGIC: &[u8] = b"%PDF";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Text,
}

impl DocumentKind {
    /// Sniff the kind from file content first, then from the extension.
    #[must_use]
    pub fn detect(path: &Path, bytes: &[u8]) -> Self {
        let pdf_extension = path
            .extension()
            .and_then(OsStr::to_str)
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
        if bytes.starts_with(PDF_MAGIC) || pdf_extension {
            Self::Pdf
        } else {
            Self::Text
        }
    }
}

/// Plain text extracted from a file, ready for flashcard generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub path: PathBuf,
    pub kind: DocumentKind,
    pub pages: usize,
    pub text: String,
}

impl Document {
    /// File name for display, falling back to the full path.
    #[must_use]
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map_or_else(|| self.path.display().to_string(), |n| n.to_string_lossy().into_owned())
    }
}

/// Read `path` and extract its text.
///
/// # Errors
///
/// Returns `DocumentError::Io` if the file cannot be read, `DocumentError::Pdf` if PDF
/// extraction fails and `DocumentError::NotText` for non-PDF files that are not UTF-8.
pub fn load_document(path: impl AsRef<Path>) -> Result<Document, DocumentError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| DocumentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let kind = DocumentKind::detect(path, &bytes);
    debug!("loading {} as {kind:?} ({} bytes)", path.display(), bytes.len());

    let (text, pages) = match kind {
        DocumentKind::Pdf => pdf_text(&bytes)?,
        DocumentKind::Text => (plain_text(path, bytes)?, 1),
    };

    Ok(Document {
        path: path.to_path_buf(),
        kind,
        pages,
        text,
    })
}

/// Pages are joined with a single space.
fn pdf_text(bytes: &[u8]) -> Result<(String, usize), DocumentError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes).map_err(|e| {
        warn!("pdf extraction failed: {e}");
        DocumentError::Pdf(e.to_string())
    })?;
    Ok((pages.join(" "), pages.len()))
}

fn plain_text(path: &Path, bytes: Vec<u8>) -> Result<String, DocumentError> {
    let text = String::from_utf8(bytes).map_err(|_| DocumentError::NotText {
        path: path.to_path_buf(),
    })?;
    // Paragraph detection looks for "\n\n", so fold Windows line endings first.
    Ok(text.replace("\r\n", "\n"))
}
