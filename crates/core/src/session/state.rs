use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::model::{CardResponse, Flashcard, StatsSummary};
use crate::time::millis_between;

/// Mutable data of one quiz attempt. Per-card vectors are sized once at start.
#[derive(Debug, Clone)]
pub(crate) struct SessionState {
    cards: Arc<[Flashcard]>,
    current: usize,
    started_at: DateTime<Utc>,
    shown_at: Vec<Option<DateTime<Utc>>>,
    // Time from visits that already ended.
    banked_ms: Vec<u64>,
    // Latest measurement of the current (or most recent) visit.
    visit_ms: Vec<u64>,
    responses: Vec<CardResponse>,
    correct: u32,
    incorrect: u32,
}

impl SessionState {
    /// Caller guarantees `cards` is non-empty.
    pub(crate) fn open(cards: Arc<[Flashcard]>, now: DateTime<Utc>) -> Self {
        let len = cards.len();
        let mut shown_at = vec![None; len];
        shown_at[0] = Some(now);
        Self {
            cards,
            current: 0,
            started_at: now,
            shown_at,
            banked_ms: vec![0; len],
            visit_ms: vec![0; len],
            responses: vec![CardResponse::Unanswered; len],
            correct: 0,
            incorrect: 0,
        }
    }

    pub(crate) fn cards(&self) -> &Arc<[Flashcard]> {
        &self.cards
    }

    pub(crate) fn len(&self) -> usize {
        self.cards.len()
    }

    pub(crate) fn current(&self) -> usize {
        self.current
    }

    pub(crate) fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub(crate) fn responses(&self) -> &[CardResponse] {
        &self.responses
    }

    pub(crate) fn correct(&self) -> u32 {
        self.correct
    }

    pub(crate) fn incorrect(&self) -> u32 {
        self.incorrect
    }

    /// Re-measure the current visit. Overwrites, so closing twice never double counts.
    pub(crate) fn close_interval(&mut self, now: DateTime<Utc>) {
        if let Some(shown) = self.shown_at[self.current] {
            self.visit_ms[self.current] = millis_between(shown, now);
        }
    }

    /// End the current visit and make `index` current. `index` must be in bounds.
    pub(crate) fn move_to(&mut self, index: usize, now: DateTime<Utc>) {
        self.close_interval(now);
        let from = self.current;
        self.banked_ms[from] = self.banked_ms[from].saturating_add(self.visit_ms[from]);
        self.visit_ms[from] = 0;

        self.current = index;
        self.shown_at[index] = Some(now);
        self.visit_ms[index] = 0;
    }

    /// Record a grade for the current card, keeping the tallies consistent with
    /// `responses` when a card is graded again.
    pub(crate) fn record(&mut self, response: CardResponse) -> CardResponse {
        let previous = self.responses[self.current];
        match previous {
            CardResponse::Correct => self.correct = self.correct.saturating_sub(1),
            CardResponse::Incorrect => self.incorrect = self.incorrect.saturating_sub(1),
            CardResponse::Unanswered => {}
        }
        match response {
            CardResponse::Correct => self.correct = self.correct.saturating_add(1),
            CardResponse::Incorrect => self.incorrect = self.incorrect.saturating_add(1),
            CardResponse::Unanswered => {}
        }
        self.responses[self.current] = response;
        previous
    }

    /// Recorded time for `index`, without any still-running visit.
    pub(crate) fn recorded_ms(&self, index: usize) -> u64 {
        self.banked_ms[index].saturating_add(self.visit_ms[index])
    }

    /// Time for `index` including the live visit if it is the current card.
    pub(crate) fn live_ms(&self, index: usize, now: DateTime<Utc>) -> u64 {
        if index != self.current {
            return self.recorded_ms(index);
        }
        let live = self.shown_at[index].map_or(0, |shown| millis_between(shown, now));
        self.banked_ms[index].saturating_add(live)
    }

    pub(crate) fn summary_at(&self, now: DateTime<Utc>, live: bool) -> StatsSummary {
        let per_card = (0..self.len())
            .map(|i| {
                if live {
                    self.live_ms(i, now)
                } else {
                    self.recorded_ms(i)
                }
            })
            .collect();
        StatsSummary::from_aligned(
            millis_between(self.started_at, now),
            per_card,
            self.responses.clone(),
        )
    }
}
