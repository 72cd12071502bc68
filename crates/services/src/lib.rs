#![forbid(unsafe_code)]

pub mod deck_service;
pub mod document;
pub mod error;
pub mod quiz_service;
pub mod report;

pub use flashquiz_core::Clock;

pub use deck_service::{Deck, DeckService};
pub use document::{Document, DocumentKind, load_document};
pub use error::{DeckError, DocumentError, QuizError};
pub use quiz_service::{AnswerOutcome, QuizService};
pub use report::{Breakdown, ChartBar, SummaryReport};
