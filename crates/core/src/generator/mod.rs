//! Heuristic flashcard generation from extracted document text.
//!
//! Text with enough usable sentences is sampled sentence by sentence at an even stride;
//! otherwise it falls back to one card per paragraph.

mod question;
mod select;
mod split;

use log::debug;
use thiserror::Error;

use crate::model::{CardId, Flashcard};

pub use question::synthesize;

use split::{longer_than, take_chars};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GenerateError {
    #[error("document text is empty")]
    EmptyInput,

    #[error("no sentence or paragraph is long enough to build a flashcard")]
    InsufficientContent,
}

//
// ─── CONFIG ────────────────────────────────────────────────────────────────────
//

/// Which splitting strategy produced a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    Sentences,
    Paragraphs,
}

/// Length thresholds and card limits. All character thresholds are exclusive
/// ("longer than"), measured on trimmed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// A sentence enters the pool when longer than this.
    pub min_pool_sentence_chars: usize,
    /// Below this many pooled sentences, generation switches to paragraphs.
    pub min_pool_size: usize,
    /// A pooled sentence becomes a card when longer than this.
    pub min_card_sentence_chars: usize,
    /// Pool entries per card when sizing a sentence-mode deck.
    pub sentences_per_card: usize,
    pub min_cards: usize,
    pub max_cards: usize,
    /// A paragraph is usable when longer than this.
    pub min_paragraph_chars: usize,
    /// A paragraph's lead sentence is used for its question when longer than this.
    pub min_lead_sentence_chars: usize,
    /// Question basis when a paragraph has no usable lead sentence.
    pub paragraph_basis_chars: usize,
    /// Paragraph answers are cut to this many characters.
    pub max_answer_chars: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_pool_sentence_chars: 20,
            min_pool_size: 8,
            min_card_sentence_chars: 30,
            sentences_per_card: 3,
            min_cards: 8,
            max_cards: 12,
            min_paragraph_chars: 50,
            min_lead_sentence_chars: 10,
            paragraph_basis_chars: 200,
            max_answer_chars: 300,
        }
    }
}

impl GeneratorConfig {
    /// Untrimmed sentences long enough to be card candidates.
    #[must_use]
    pub fn sentence_pool<'a>(&self, text: &'a str) -> Vec<&'a str> {
        split::sentences(text)
            .filter(|s| longer_than(s, self.min_pool_sentence_chars))
            .collect()
    }

    #[must_use]
    pub fn mode_for(&self, text: &str) -> GenerationMode {
        if self.sentence_pool(text).len() < self.min_pool_size {
            GenerationMode::Paragraphs
        } else {
            GenerationMode::Sentences
        }
    }

    /// Generate an ordered deck. Deterministic; an empty result means failure.
    #[must_use]
    pub fn generate(&self, text: &str) -> Vec<Flashcard> {
        let pool = self.sentence_pool(text);
        let pairs = if pool.len() < self.min_pool_size {
            debug!(
                "sentence pool has {} entries, falling back to paragraphs",
                pool.len()
            );
            self.from_paragraphs(text)
        } else {
            debug!("building cards from a pool of {} sentences", pool.len());
            self.from_sentences(&pool)
        };
        number_cards(pairs)
    }

    /// Like [`GeneratorConfig::generate`], but reports why nothing was produced.
    ///
    /// # Errors
    ///
    /// Returns `GenerateError::EmptyInput` for blank text and
    /// `GenerateError::InsufficientContent` when no card could be built.
    pub fn try_generate(&self, text: &str) -> Result<Vec<Flashcard>, GenerateError> {
        if text.trim().is_empty() {
            return Err(GenerateError::EmptyInput);
        }
        let cards = self.generate(text);
        if cards.is_empty() {
            return Err(GenerateError::InsufficientContent);
        }
        Ok(cards)
    }

    fn from_sentences(&self, pool: &[&str]) -> Vec<(String, String)> {
        let target = select::target_count(
            pool.len(),
            self.sentences_per_card,
            self.min_cards,
            self.max_cards,
        );
        select::spaced_indices(pool, target, self.min_card_sentence_chars)
            .into_iter()
            .map(|i| (synthesize(pool[i]), pool[i].trim().to_string()))
            .collect()
    }

    fn from_paragraphs(&self, text: &str) -> Vec<(String, String)> {
        let usable: Vec<&str> = split::paragraphs(text)
            .into_iter()
            .filter(|p| longer_than(p, self.min_paragraph_chars))
            .collect();
        let count = usable.len().max(self.min_cards).min(self.max_cards);

        usable
            .into_iter()
            .take(count)
            .map(|paragraph| {
                let basis = split::sentences(paragraph)
                    .find(|s| longer_than(s, self.min_lead_sentence_chars))
                    .unwrap_or_else(|| take_chars(paragraph, self.paragraph_basis_chars));
                let answer = take_chars(paragraph.trim(), self.max_answer_chars);
                (synthesize(basis), answer.to_string())
            })
            .collect()
    }
}

fn number_cards(pairs: Vec<(String, String)>) -> Vec<Flashcard> {
    pairs
        .into_iter()
        .filter(|(question, answer)| !question.trim().is_empty() && !answer.trim().is_empty())
        .enumerate()
        .filter_map(|(i, (question, answer))| {
            Flashcard::new(CardId::from_index(i), question, answer).ok()
        })
        .collect()
}

/// Generate flashcards with the default thresholds.
#[must_use]
pub fn generate(text: &str) -> Vec<Flashcard> {
    GeneratorConfig::default().generate(text)
}

/// Generate flashcards with the default thresholds, reporting empty results as errors.
///
/// # Errors
///
/// See [`GeneratorConfig::try_generate`].
pub fn try_generate(text: &str) -> Result<Vec<Flashcard>, GenerateError> {
    GeneratorConfig::default().try_generate(text)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
