use serde::Serialize;
use thiserror::Error;

use crate::model::ids::CardId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FlashcardError {
    #[error("flashcard question cannot be empty")]
    EmptyQuestion,

    #[error("flashcard answer cannot be empty")]
    EmptyAnswer,
}

//
// ─── FLASHCARD ─────────────────────────────────────────────────────────────────
//

/// A generated question/answer pair.
///
/// Cards are immutable once built; a session only ever reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flashcard {
    id: CardId,
    question: String,
    answer: String,
}

impl Flashcard {
    /// Build a card, rejecting blank question or answer text.
    ///
    /// # Errors
    ///
    /// Returns `FlashcardError::EmptyQuestion` or `FlashcardError::EmptyAnswer`
    /// when the respective text is empty after trimming.
    pub fn new(
        id: CardId,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Result<Self, FlashcardError> {
        let question = question.into();
        let answer = answer.into();
        if question.trim().is_empty() {
            return Err(FlashcardError::EmptyQuestion);
        }
        if answer.trim().is_empty() {
            return Err(FlashcardError::EmptyAnswer);
        }
        Ok(Self {
            id,
            question,
            answer,
        })
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u32) -> CardId {
        CardId::new(n).unwrap()
    }

    #[test]
    fn blank_question_is_rejected() {
        let err = Flashcard::new(id(1), "   ", "answer").unwrap_err();
        assert_eq!(err, FlashcardError::EmptyQuestion);
    }

    #[test]
    fn blank_answer_is_rejected() {
        let err = Flashcard::new(id(1), "question?", "\n\t").unwrap_err();
        assert_eq!(err, FlashcardError::EmptyAnswer);
    }

    #[test]
    fn serializes_with_plain_id() {
        let card = Flashcard::new(id(3), "What is rust?", "A metal.").unwrap();
        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["question"], "What is rust?");
        assert_eq!(json["answer"], "A metal.");
    }
}
