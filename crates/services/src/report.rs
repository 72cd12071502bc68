//! Chart-ready data derived from a finished (or in-progress) session.
//!
//! Presentation-agnostic: numbers only, no pre-formatted strings. The UI decides how
//! to label bars and format durations.

use serde::Serialize;

use flashquiz_core::model::StatsSummary;

/// One bar of the time-per-card chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartBar {
    /// 1-based card number.
    pub card: u32,
    /// Whole seconds spent on the card.
    pub seconds: u64,
}

/// Slices of the performance doughnut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Breakdown {
    pub correct: u32,
    pub incorrect: u32,
    pub not_answered: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryReport {
    pub total_elapsed_ms: u64,
    pub average_card_ms: u64,
    pub correct: u32,
    pub incorrect: u32,
    pub accuracy_percent: u32,
    pub cards_reviewed: u32,
    pub time_chart: Vec<ChartBar>,
    pub breakdown: Breakdown,
}

impl SummaryReport {
    #[must_use]
    pub fn from_summary(summary: &StatsSummary) -> Self {
        let time_chart = summary
            .per_card_elapsed_ms()
            .iter()
            .enumerate()
            .map(|(i, ms)| ChartBar {
                card: u32::try_from(i + 1).unwrap_or(u32::MAX),
                seconds: ms / 1_000,
            })
            .collect();

        Self {
            total_elapsed_ms: summary.total_elapsed_ms(),
            average_card_ms: summary.average_card_ms(),
            correct: summary.correct_count(),
            incorrect: summary.incorrect_count(),
            accuracy_percent: summary.accuracy_percent(),
            cards_reviewed: summary.cards_reviewed(),
            time_chart,
            breakdown: Breakdown {
                correct: summary.correct_count(),
                incorrect: summary.incorrect_count(),
                not_answered: u32::try_from(summary.unanswered_count()).unwrap_or(u32::MAX),
            },
        }
    }

    /// Longest bar, used to scale the chart. Never zero.
    #[must_use]
    pub fn max_seconds(&self) -> u64 {
        self.time_chart
            .iter()
            .map(|bar| bar.seconds)
            .max()
            .unwrap_or(0)
            .max(1)
    }

    /// # Errors
    ///
    /// Returns the serializer error if encoding fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl From<&StatsSummary> for SummaryReport {
    fn from(summary: &StatsSummary) -> Self {
        Self::from_summary(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flashquiz_core::model::CardResponse::{Correct, Incorrect, Unanswered};

    fn summary() -> StatsSummary {
        StatsSummary::new(
            12_345,
            vec![2_999, 0, 7_001],
            vec![Correct, Unanswered, Incorrect],
        )
        .unwrap()
    }

    #[test]
    fn chart_uses_whole_seconds_per_card() {
        let report = SummaryReport::from_summary(&summary());
        assert_eq!(
            report.time_chart,
            vec![
                ChartBar { card: 1, seconds: 2 },
                ChartBar { card: 2, seconds: 0 },
                ChartBar { card: 3, seconds: 7 },
            ]
        );
        assert_eq!(report.max_seconds(), 7);
    }

    #[test]
    fn breakdown_counts_unanswered_cards() {
        let report = SummaryReport::from(&summary());
        assert_eq!(
            report.breakdown,
            Breakdown {
                correct: 1,
                incorrect: 1,
                not_answered: 1,
            }
        );
        assert_eq!(report.accuracy_percent, 50);
        assert_eq!(report.average_card_ms, 5_000);
    }

    #[test]
    fn serializes_to_json() {
        let json = SummaryReport::from_summary(&summary()).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total_elapsed_ms"], 12_345);
        assert_eq!(value["time_chart"][2]["seconds"], 7);
        assert_eq!(value["breakdown"]["not_answered"], 1);
    }

    #[test]
    fn empty_chart_still_scales() {
        let empty = StatsSummary::new(0, vec![0], vec![Unanswered]).unwrap();
        assert_eq!(SummaryReport::from_summary(&empty).max_seconds(), 1);
    }
}
