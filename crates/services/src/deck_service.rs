use std::path::Path;
use std::sync::Arc;

use log::info;

use flashquiz_core::GeneratorConfig;
use flashquiz_core::generator::GenerationMode;
use flashquiz_core::model::Flashcard;

use crate::document::{Document, load_document};
use crate::error::DeckError;

/// A generated, non-empty flashcard sequence plus where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    source: String,
    mode: GenerationMode,
    cards: Arc<[Flashcard]>,
}

impl Deck {
    /// Human-readable origin of the deck (usually the file name).
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn mode(&self) -> GenerationMode {
        self.mode
    }

    /// Shared card sequence; cloning the `Arc` is how sessions borrow it.
    #[must_use]
    pub fn cards(&self) -> &Arc<[Flashcard]> {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Turns documents into decks.
#[derive(Debug, Clone, Default)]
pub struct DeckService {
    config: GeneratorConfig,
}

impl DeckService {
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Build a deck from already extracted text.
    ///
    /// # Errors
    ///
    /// Returns `DeckError::Generate` when the text is blank or yields no cards.
    pub fn build_from_text(&self, source: impl Into<String>, text: &str) -> Result<Deck, DeckError> {
        let source = source.into();
        let mode = self.config.mode_for(text);
        let cards = self.config.try_generate(text)?;
        info!(
            "generated {} flashcards from {source} ({mode:?} mode)",
            cards.len()
        );
        Ok(Deck {
            source,
            mode,
            cards: cards.into(),
        })
    }

    /// Build a deck from a loaded document.
    ///
    /// # Errors
    ///
    /// See [`DeckService::build_from_text`].
    pub fn build_from_document(&self, document: &Document) -> Result<Deck, DeckError> {
        self.build_from_text(document.name(), &document.text)
    }

    /// Read `path` and build a deck from its text.
    ///
    /// # Errors
    ///
    /// Returns `DeckError::Document` if the file cannot be read or extracted, and
    /// `DeckError::Generate` if it yields no cards.
    pub fn build_from_path(&self, path: impl AsRef<Path>) -> Result<Deck, DeckError> {
        let document = load_document(path)?;
        self.build_from_document(&document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flashquiz_core::GenerateError;

    const BIOLOGY: &str = "Photosynthesis is the process plants use to convert light into energy. \
        Mitochondria are the powerhouse of the cell. ";

    #[test]
    fn builds_deck_from_text() {
        let service = DeckService::default();
        let deck = service.build_from_text("biology", &BIOLOGY.repeat(5)).unwrap();
        assert_eq!(deck.source(), "biology");
        assert_eq!(deck.mode(), GenerationMode::Sentences);
        assert_eq!(deck.len(), 8);
        assert_eq!(deck.cards()[0].question(), "What is Photosynthesis?");
    }

    #[test]
    fn custom_config_caps_the_deck() {
        let service = DeckService::new(GeneratorConfig {
            max_cards: 4,
            ..GeneratorConfig::default()
        });
        let deck = service.build_from_text("biology", &BIOLOGY.repeat(5)).unwrap();
        assert_eq!(deck.len(), 4);
    }

    #[test]
    fn blank_text_is_reported() {
        let err = DeckService::default().build_from_text("blank", "   ").unwrap_err();
        assert!(matches!(err, DeckError::Generate(GenerateError::EmptyInput)));
        assert!(err.is_content_problem());
    }

    #[test]
    fn unusable_text_is_insufficient() {
        let err = DeckService::default()
            .build_from_text("tiny", "Too short. Really.")
            .unwrap_err();
        assert!(matches!(
            err,
            DeckError::Generate(GenerateError::InsufficientContent)
        ));
    }

    #[test]
    fn unreadable_path_is_a_document_error() {
        let err = DeckService::default()
            .build_from_path("/no/such/file.txt")
            .unwrap_err();
        assert!(!err.is_content_problem());
    }
}
