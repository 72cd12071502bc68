use serde::Serialize;
use thiserror::Error;

use crate::model::CardResponse;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StatsError {
    #[error("per-card timings ({timings}) do not match responses ({responses})")]
    LengthMismatch { timings: usize, responses: usize },
}

/// Rounded percentage of correct answers among answered cards.
///
/// Halves round up; zero answered cards yields 0.
#[must_use]
pub fn accuracy_percent(correct: u32, answered: u32) -> u32 {
    if answered == 0 {
        return 0;
    }
    let correct = u64::from(correct.min(answered));
    let answered = u64::from(answered);
    let rounded = (200 * correct + answered) / (2 * answered);
    u32::try_from(rounded).unwrap_or(100)
}

/// End-of-session report handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsSummary {
    total_elapsed_ms: u64,
    per_card_elapsed_ms: Vec<u64>,
    responses: Vec<CardResponse>,
    correct_count: u32,
    incorrect_count: u32,
    answered_count: u32,
    accuracy_percent: u32,
    cards_reviewed: u32,
}

impl StatsSummary {
    /// Derive a summary from per-card timings and responses.
    ///
    /// Counts are recomputed from `responses`, so they always agree with it.
    ///
    /// # Errors
    ///
    /// Returns `StatsError::LengthMismatch` if the two per-card slices differ in length.
    pub fn new(
        total_elapsed_ms: u64,
        per_card_elapsed_ms: Vec<u64>,
        responses: Vec<CardResponse>,
    ) -> Result<Self, StatsError> {
        if per_card_elapsed_ms.len() != responses.len() {
            return Err(StatsError::LengthMismatch {
                timings: per_card_elapsed_ms.len(),
                responses: responses.len(),
            });
        }
        Ok(Self::from_aligned(total_elapsed_ms, per_card_elapsed_ms, responses))
    }

    /// Caller guarantees one timing per response.
    pub(crate) fn from_aligned(
        total_elapsed_ms: u64,
        per_card_elapsed_ms: Vec<u64>,
        responses: Vec<CardResponse>,
    ) -> Self {
        let mut correct = 0_u32;
        let mut incorrect = 0_u32;
        for response in &responses {
            match response {
                CardResponse::Correct => correct = correct.saturating_add(1),
                CardResponse::Incorrect => incorrect = incorrect.saturating_add(1),
                CardResponse::Unanswered => {}
            }
        }
        let answered = correct.saturating_add(incorrect);

        Self {
            total_elapsed_ms,
            per_card_elapsed_ms,
            responses,
            correct_count: correct,
            incorrect_count: incorrect,
            answered_count: answered,
            accuracy_percent: accuracy_percent(correct, answered),
            cards_reviewed: answered,
        }
    }

    #[must_use]
    pub fn total_elapsed_ms(&self) -> u64 {
        self.total_elapsed_ms
    }

    /// Time in view per card, 0 for cards that were never timed.
    #[must_use]
    pub fn per_card_elapsed_ms(&self) -> &[u64] {
        &self.per_card_elapsed_ms
    }

    #[must_use]
    pub fn responses(&self) -> &[CardResponse] {
        &self.responses
    }

    #[must_use]
    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    #[must_use]
    pub fn incorrect_count(&self) -> u32 {
        self.incorrect_count
    }

    #[must_use]
    pub fn answered_count(&self) -> u32 {
        self.answered_count
    }

    #[must_use]
    pub fn accuracy_percent(&self) -> u32 {
        self.accuracy_percent
    }

    #[must_use]
    pub fn cards_reviewed(&self) -> u32 {
        self.cards_reviewed
    }

    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.responses.len()
    }

    #[must_use]
    pub fn unanswered_count(&self) -> usize {
        self.total_cards()
            .saturating_sub(self.answered_count as usize)
    }

    /// Mean time over cards that were actually timed; 0 when none were.
    #[must_use]
    pub fn average_card_ms(&self) -> u64 {
        let timed: Vec<u64> = self
            .per_card_elapsed_ms
            .iter()
            .copied()
            .filter(|ms| *ms > 0)
            .collect();
        if timed.is_empty() {
            return 0;
        }
        timed.iter().sum::<u64>() / timed.len() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use CardResponse::{Correct, Incorrect, Unanswered};

    #[test]
    fn accuracy_rounds_half_up() {
        assert_eq!(accuracy_percent(2, 3), 67);
        assert_eq!(accuracy_percent(1, 3), 33);
        assert_eq!(accuracy_percent(1, 8), 13);
        assert_eq!(accuracy_percent(0, 0), 0);
        assert_eq!(accuracy_percent(5, 5), 100);
    }

    #[test]
    fn counts_follow_responses() {
        let summary = StatsSummary::new(
            9_000,
            vec![1_000, 0, 2_500, 4_000],
            vec![Correct, Unanswered, Incorrect, Correct],
        )
        .unwrap();

        assert_eq!(summary.correct_count(), 2);
        assert_eq!(summary.incorrect_count(), 1);
        assert_eq!(summary.answered_count(), 3);
        assert_eq!(summary.cards_reviewed(), 3);
        assert_eq!(summary.unanswered_count(), 1);
        assert_eq!(summary.accuracy_percent(), 67);
        assert_eq!(summary.average_card_ms(), 2_500);
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let err = StatsSummary::new(0, vec![0, 0], vec![Unanswered]).unwrap_err();
        assert_eq!(
            err,
            StatsError::LengthMismatch {
                timings: 2,
                responses: 1
            }
        );
    }

    #[test]
    fn nothing_timed_averages_to_zero() {
        let summary = StatsSummary::new(0, vec![0, 0], vec![Unanswered, Unanswered]).unwrap();
        assert_eq!(summary.average_card_ms(), 0);
        assert_eq!(summary.accuracy_percent(), 0);
    }
}
