use std::fmt;

use log::info;

use flashquiz_core::model::{CardResponse, Flashcard, StatsSummary};
use flashquiz_core::session::SessionProgress;
use flashquiz_core::{Clock, Navigation, SessionPhase, SessionTracker};

use crate::deck_service::Deck;
use crate::error::QuizError;

/// What happened after answering the current card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Moved on to the card at this index.
    Advanced { to: usize },
    /// The last card was answered and the session closed.
    Completed(StatsSummary),
}

/// Drives a `SessionTracker` with timestamps from a `Clock`.
///
/// This is the surface the presentation layer talks to: it never passes times itself.
#[derive(Clone, Default)]
pub struct QuizService {
    clock: Clock,
    tracker: SessionTracker,
}

impl QuizService {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            clock,
            tracker: SessionTracker::new(),
        }
    }

    /// Mutable access to the clock, for advancing a fixed clock in tests and demos.
    pub fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }

    #[must_use]
    pub fn tracker(&self) -> &SessionTracker {
        &self.tracker
    }

    /// Start a new session over the deck, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Session` if the deck is empty.
    pub fn start(&mut self, deck: &Deck) -> Result<(), QuizError> {
        let now = self.clock.now();
        self.tracker.start(deck.cards().clone(), now)?;
        info!("quiz started on {} ({} cards)", deck.source(), deck.len());
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `QuizError::Session` for an invalid index or a session not in progress.
    pub fn go_to(&mut self, index: usize) -> Result<Navigation, QuizError> {
        Ok(self.tracker.go_to(index, self.clock.now())?)
    }

    /// # Errors
    ///
    /// Returns `QuizError::Session` when the session is not in progress.
    pub fn next(&mut self) -> Result<Navigation, QuizError> {
        Ok(self.tracker.next(self.clock.now())?)
    }

    /// # Errors
    ///
    /// Returns `QuizError::Session` when the session is not in progress.
    pub fn previous(&mut self) -> Result<Navigation, QuizError> {
        Ok(self.tracker.previous(self.clock.now())?)
    }

    /// Grade the current card without moving.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Session` when the session is not in progress.
    pub fn grade(&mut self, is_correct: bool) -> Result<CardResponse, QuizError> {
        Ok(self.tracker.grade(is_correct, self.clock.now())?)
    }

    /// Grade the current card, then advance, or finish when it was the last card.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Session` when the session is not in progress.
    pub fn answer(&mut self, is_correct: bool) -> Result<AnswerOutcome, QuizError> {
        self.grade(is_correct)?;
        if self.tracker.is_last() {
            return Ok(AnswerOutcome::Completed(self.finish()?));
        }
        match self.next()? {
            Navigation::Moved { to, .. } => Ok(AnswerOutcome::Advanced { to }),
            Navigation::Stayed | Navigation::AtBoundary => Ok(AnswerOutcome::Completed(self.finish()?)),
        }
    }

    /// # Errors
    ///
    /// Returns `QuizError::Session` when the session is not in progress.
    pub fn finish(&mut self) -> Result<StatsSummary, QuizError> {
        Ok(self.tracker.finish(self.clock.now())?)
    }

    /// Current statistics; the final report once finished.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Session` when no session was started.
    pub fn snapshot(&self) -> Result<StatsSummary, QuizError> {
        Ok(self.tracker.snapshot(self.clock.now())?)
    }

    pub fn reset(&mut self) {
        self.tracker.reset();
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.tracker.phase()
    }

    #[must_use]
    pub fn current_card(&self) -> Option<&Flashcard> {
        self.tracker.current_card()
    }

    /// Session timer derived from the clock on every call.
    #[must_use]
    pub fn elapsed_ms(&self) -> u64 {
        self.tracker.elapsed_ms(self.clock.now()).unwrap_or(0)
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        self.tracker.progress()
    }
}

impl fmt::Debug for QuizService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizService")
            .field("clock", &self.clock)
            .field("phase", &self.tracker.phase())
            .field("cards_len", &self.tracker.len())
            .field("current", &self.tracker.current_index())
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
