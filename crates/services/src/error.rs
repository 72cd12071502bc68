//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use flashquiz_core::{GenerateError, SessionError};

/// Errors emitted while reading a document.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DocumentError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to extract text from PDF: {0}")]
    Pdf(String),
    #[error("{} is neither a PDF nor UTF-8 text", path.display())]
    NotText { path: PathBuf },
}

/// Errors emitted by `DeckService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DeckError {
    #[error(transparent)]
    Document(#[from] DocumentError),
    #[error(transparent)]
    Generate(#[from] GenerateError),
}

impl DeckError {
    /// True when the document was readable but yielded no flashcards.
    #[must_use]
    pub fn is_content_problem(&self) -> bool {
        matches!(self, DeckError::Generate(_))
    }
}

/// Errors emitted by `QuizService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error(transparent)]
    Session(#[from] SessionError),
}
