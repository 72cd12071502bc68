//! Quiz progression: navigation, self-grading, per-card timing and the final report.
//!
//! `SessionTracker` is a small state machine:
//! `Idle -> InProgress (start) -> InProgress (go_to / grade) -> Finished (finish) -> Idle (reset)`.
//! Every operation takes the current timestamp so callers control the clock.

mod progress;
mod state;

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use thiserror::Error;

use crate::model::{CardResponse, Flashcard, StatsSummary};
use crate::time::millis_between;

pub use progress::SessionProgress;

use state::SessionState;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("cannot start a session without cards")]
    EmptyDeck,

    #[error("card index {index} is out of range for {len} cards")]
    InvalidIndex { index: usize, len: usize },

    #[error("cannot {op} while the session is {phase}")]
    InvalidTransition {
        op: &'static str,
        phase: SessionPhase,
    },
}

//
// ─── PHASES ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    InProgress,
    Finished,
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SessionPhase::Idle => "idle",
            SessionPhase::InProgress => "in progress",
            SessionPhase::Finished => "finished",
        };
        f.write_str(label)
    }
}

/// Result of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Moved { from: usize, to: usize },
    /// The requested card is already current.
    Stayed,
    /// `next` on the last card or `previous` on the first.
    AtBoundary,
}

#[derive(Debug, Clone, Default)]
enum Phase {
    #[default]
    Idle,
    InProgress(SessionState),
    Finished {
        state: SessionState,
        summary: StatsSummary,
    },
}

//
// ─── TRACKER ───────────────────────────────────────────────────────────────────
//

/// Owns the state of one quiz attempt and is its only mutation surface.
#[derive(Debug, Clone, Default)]
pub struct SessionTracker {
    phase: Phase,
}

impl SessionTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new attempt over `cards`, replacing whatever came before.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyDeck` if `cards` is empty; the tracker is unchanged.
    pub fn start(
        &mut self,
        cards: impl Into<Arc<[Flashcard]>>,
        now: DateTime<Utc>,
    ) -> Result<(), SessionError> {
        let cards = cards.into();
        if cards.is_empty() {
            warn!("refusing to start a session without cards");
            return Err(SessionError::EmptyDeck);
        }
        info!("session started with {} cards", cards.len());
        self.phase = Phase::InProgress(SessionState::open(cards, now));
        Ok(())
    }

    /// Make `index` the current card.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` outside `InProgress` and
    /// `SessionError::InvalidIndex` for an out-of-range index. State is unchanged on error.
    pub fn go_to(&mut self, index: usize, now: DateTime<Utc>) -> Result<Navigation, SessionError> {
        let state = self.in_progress_mut("navigate")?;
        let len = state.len();
        if index >= len {
            warn!("rejected navigation to card {index} of {len}");
            return Err(SessionError::InvalidIndex { index, len });
        }
        let from = state.current();
        if index == from {
            return Ok(Navigation::Stayed);
        }
        state.move_to(index, now);
        debug!("moved from card {from} to card {index}");
        Ok(Navigation::Moved { from, to: index })
    }

    /// Move to the following card, or report the boundary on the last one.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` outside `InProgress`.
    pub fn next(&mut self, now: DateTime<Utc>) -> Result<Navigation, SessionError> {
        let state = self.in_progress("navigate")?;
        let target = state.current() + 1;
        if target >= state.len() {
            return Ok(Navigation::AtBoundary);
        }
        self.go_to(target, now)
    }

    /// Move to the preceding card, or report the boundary on the first one.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` outside `InProgress`.
    pub fn previous(&mut self, now: DateTime<Utc>) -> Result<Navigation, SessionError> {
        let state = self.in_progress("navigate")?;
        let Some(target) = state.current().checked_sub(1) else {
            return Ok(Navigation::AtBoundary);
        };
        self.go_to(target, now)
    }

    /// Self-grade the current card.
    ///
    /// Grading a card again replaces its earlier response and moves the tally with it.
    /// Returns the response that was replaced.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` outside `InProgress`.
    pub fn grade(&mut self, is_correct: bool, now: DateTime<Utc>) -> Result<CardResponse, SessionError> {
        let state = self.in_progress_mut("grade")?;
        state.close_interval(now);
        let previous = state.record(CardResponse::from_correct(is_correct));
        debug!(
            "card {} graded {} (was {})",
            state.current(),
            if is_correct { "correct" } else { "incorrect" },
            previous.as_str()
        );
        Ok(previous)
    }

    /// Close the session and produce its report.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` outside `InProgress`.
    pub fn finish(&mut self, now: DateTime<Utc>) -> Result<StatsSummary, SessionError> {
        let state = self.in_progress_mut("finish")?;
        state.close_interval(now);
        let summary = state.summary_at(now, false);

        if let Phase::InProgress(state) = std::mem::take(&mut self.phase) {
            info!(
                "session finished: {}/{} correct, {}% accuracy",
                summary.correct_count(),
                summary.answered_count(),
                summary.accuracy_percent()
            );
            self.phase = Phase::Finished {
                state,
                summary: summary.clone(),
            };
        }
        Ok(summary)
    }

    /// Statistics as of `now` without ending the session. The current card's
    /// running visit is included.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` when no session has been started.
    pub fn snapshot(&self, now: DateTime<Utc>) -> Result<StatsSummary, SessionError> {
        match &self.phase {
            Phase::Idle => Err(SessionError::InvalidTransition {
                op: "take a snapshot",
                phase: SessionPhase::Idle,
            }),
            Phase::InProgress(state) => Ok(state.summary_at(now, true)),
            Phase::Finished { summary, .. } => Ok(summary.clone()),
        }
    }

    /// Discard the session entirely.
    pub fn reset(&mut self) {
        if !matches!(self.phase, Phase::Idle) {
            debug!("session reset");
        }
        self.phase = Phase::Idle;
    }

    //
    // ─── QUERIES ───────────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        match self.phase {
            Phase::Idle => SessionPhase::Idle,
            Phase::InProgress(_) => SessionPhase::InProgress,
            Phase::Finished { .. } => SessionPhase::Finished,
        }
    }

    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        matches!(self.phase, Phase::InProgress(_))
    }

    /// The card sequence of the current or finished session.
    #[must_use]
    pub fn cards(&self) -> Option<&[Flashcard]> {
        self.state().map(|state| &state.cards()[..])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.state().map_or(0, SessionState::len)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.state().map(SessionState::current)
    }

    #[must_use]
    pub fn current_card(&self) -> Option<&Flashcard> {
        let state = self.state()?;
        state.cards().get(state.current())
    }

    #[must_use]
    pub fn is_first(&self) -> bool {
        self.current_index() == Some(0)
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.state()
            .is_some_and(|state| state.current() + 1 == state.len())
    }

    #[must_use]
    pub fn response(&self, index: usize) -> Option<CardResponse> {
        self.state()?.responses().get(index).copied()
    }

    /// Responses per card; empty while idle.
    #[must_use]
    pub fn responses(&self) -> &[CardResponse] {
        self.state()
            .map(SessionState::responses)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn correct_count(&self) -> u32 {
        self.state().map_or(0, SessionState::correct)
    }

    #[must_use]
    pub fn incorrect_count(&self) -> u32 {
        self.state().map_or(0, SessionState::incorrect)
    }

    #[must_use]
    pub fn answered_count(&self) -> u32 {
        self.correct_count() + self.incorrect_count()
    }

    /// Time attributed to card `index` so far, including a running visit.
    #[must_use]
    pub fn card_elapsed_ms(&self, index: usize, now: DateTime<Utc>) -> Option<u64> {
        let state = self.state()?;
        (index < state.len()).then(|| match &self.phase {
            Phase::InProgress(_) => state.live_ms(index, now),
            _ => state.recorded_ms(index),
        })
    }

    #[must_use]
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.state().map(SessionState::started_at)
    }

    /// Session clock: time since start, frozen at the total once finished.
    #[must_use]
    pub fn elapsed_ms(&self, now: DateTime<Utc>) -> Option<u64> {
        match &self.phase {
            Phase::Idle => None,
            Phase::InProgress(state) => Some(millis_between(state.started_at(), now)),
            Phase::Finished { summary, .. } => Some(summary.total_elapsed_ms()),
        }
    }

    /// The report produced by `finish`, while the tracker is `Finished`.
    #[must_use]
    pub fn summary(&self) -> Option<&StatsSummary> {
        match &self.phase {
            Phase::Finished { summary, .. } => Some(summary),
            _ => None,
        }
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        let total = self.len();
        let answered = self.answered_count() as usize;
        SessionProgress {
            total,
            answered,
            remaining: total.saturating_sub(answered),
            is_complete: matches!(self.phase, Phase::Finished { .. }),
        }
    }

    fn state(&self) -> Option<&SessionState> {
        match &self.phase {
            Phase::Idle => None,
            Phase::InProgress(state) | Phase::Finished { state, .. } => Some(state),
        }
    }

    fn in_progress(&self, op: &'static str) -> Result<&SessionState, SessionError> {
        match &self.phase {
            Phase::InProgress(state) => Ok(state),
            _ => Err(rejected(op, self.phase())),
        }
    }

    fn in_progress_mut(&mut self, op: &'static str) -> Result<&mut SessionState, SessionError> {
        let phase = self.phase();
        match &mut self.phase {
            Phase::InProgress(state) => Ok(state),
            _ => Err(rejected(op, phase)),
        }
    }
}

fn rejected(op: &'static str, phase: SessionPhase) -> SessionError {
    warn!("rejected {op} while session is {phase}");
    SessionError::InvalidTransition { op, phase }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
