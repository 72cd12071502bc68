use flashquiz_core::model::{StatsSummary, accuracy_percent};
use services::SummaryReport;

use crate::vm::time_fmt::{format_clock, format_seconds};

/// One bar of the time-per-card chart, scaled against the longest card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BarVm {
    pub label: String,
    pub value_label: String,
    pub height_percent: u64,
}

/// One segment of the correct / incorrect / not answered breakdown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SliceVm {
    pub label: &'static str,
    pub class: &'static str,
    pub count: u32,
    pub percent: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryVm {
    pub total_time: String,
    pub average_time: String,
    pub correct: u32,
    pub incorrect: u32,
    pub accuracy: String,
    pub cards_reviewed: u32,
    pub bars: Vec<BarVm>,
    pub slices: Vec<SliceVm>,
}

impl From<&SummaryReport> for SummaryVm {
    fn from(report: &SummaryReport) -> Self {
        let max = report.max_seconds();
        let bars = report
            .time_chart
            .iter()
            .map(|bar| BarVm {
                label: format!("Card {}", bar.card),
                value_label: format_seconds(bar.seconds),
                height_percent: bar.seconds * 100 / max,
            })
            .collect();

        let breakdown = report.breakdown;
        let cards = breakdown.correct + breakdown.incorrect + breakdown.not_answered;
        let slice = |label, class, count| SliceVm {
            label,
            class,
            count,
            percent: accuracy_percent(count, cards),
        };

        Self {
            total_time: format_clock(report.total_elapsed_ms),
            average_time: format_clock(report.average_card_ms),
            correct: report.correct,
            incorrect: report.incorrect,
            accuracy: format!("{}%", report.accuracy_percent),
            cards_reviewed: report.cards_reviewed,
            bars,
            slices: vec![
                slice("Correct", "correct", breakdown.correct),
                slice("Incorrect", "incorrect", breakdown.incorrect),
                slice("Not Answered", "unanswered", breakdown.not_answered),
            ],
        }
    }
}

impl From<&StatsSummary> for SummaryVm {
    fn from(summary: &StatsSummary) -> Self {
        Self::from(&SummaryReport::from_summary(summary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flashquiz_core::model::CardResponse::{Correct, Incorrect, Unanswered};

    #[test]
    fn maps_totals_and_scales_bars() {
        let summary = StatsSummary::new(
            125_000,
            vec![10_000, 5_000, 0],
            vec![Correct, Incorrect, Unanswered],
        )
        .unwrap();
        let vm = SummaryVm::from(&summary);

        assert_eq!(vm.total_time, "02:05");
        assert_eq!(vm.average_time, "00:07");
        assert_eq!(vm.accuracy, "50%");
        assert_eq!(vm.cards_reviewed, 2);
        assert_eq!(
            vm.bars,
            vec![
                BarVm {
                    label: "Card 1".into(),
                    value_label: "10s".into(),
                    height_percent: 100,
                },
                BarVm {
                    label: "Card 2".into(),
                    value_label: "5s".into(),
                    height_percent: 50,
                },
                BarVm {
                    label: "Card 3".into(),
                    value_label: "0s".into(),
                    height_percent: 0,
                },
            ]
        );
        let counts: Vec<u32> = vm.slices.iter().map(|s| s.count).collect();
        assert_eq!(counts, vec![1, 1, 1]);
        assert_eq!(vm.slices[0].percent, 33);
    }
}
