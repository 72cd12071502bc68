use dioxus::prelude::*;
use flashquiz_core::model::CardResponse::{Correct, Incorrect, Unanswered};
use flashquiz_core::model::StatsSummary;
use services::QuizService;

use super::test_harness::{ViewHarness, ViewKind, started_quiz};
use crate::views::{BreakdownChart, FlashcardFace, StatsGrid, TimeChart};
use crate::vm::SummaryVm;

fn sample_summary() -> SummaryVm {
    let summary = StatsSummary::new(
        95_000,
        vec![4_000, 12_000, 0],
        vec![Correct, Incorrect, Unanswered],
    )
    .unwrap();
    SummaryVm::from(&summary)
}

#[test]
fn stats_grid_renders_formatted_totals() {
    let vm = sample_summary();
    let html = dioxus_ssr::render_element(rsx! { StatsGrid { vm } });
    assert!(html.contains("01:35"), "missing total time in {html}");
    assert!(html.contains("00:08"), "missing average time in {html}");
    assert!(html.contains("50%"), "missing accuracy in {html}");
    assert!(html.contains("Cards Reviewed"), "missing label in {html}");
}

#[test]
fn time_chart_renders_one_bar_per_card() {
    let bars = sample_summary().bars;
    let html = dioxus_ssr::render_element(rsx! { TimeChart { bars } });
    assert_eq!(html.matches("bar-column").count(), 3);
    assert!(html.contains("Card 2"), "missing label in {html}");
    assert!(html.contains("height: 100%"), "missing tallest bar in {html}");
}

#[test]
fn breakdown_lists_every_category() {
    let slices = sample_summary().slices;
    let html = dioxus_ssr::render_element(rsx! { BreakdownChart { slices } });
    assert!(html.contains("Correct: 1"), "missing correct in {html}");
    assert!(html.contains("Incorrect: 1"), "missing incorrect in {html}");
    assert!(html.contains("Not Answered: 1"), "missing not answered in {html}");
}

#[test]
fn flashcard_hides_answer_until_revealed() {
    let hidden = dioxus_ssr::render_element(rsx! {
        FlashcardFace { question: "What is Gravity?", answer: "A force.", revealed: false }
    });
    assert!(hidden.contains("What is Gravity?"));
    assert!(!hidden.contains("A force."));

    let shown = dioxus_ssr::render_element(rsx! {
        FlashcardFace { question: "What is Gravity?", answer: "A force.", revealed: true }
    });
    assert!(shown.contains("A force."));
    assert!(shown.contains("flipped"));
}

#[tokio::test(flavor = "current_thread")]
async fn welcome_view_links_to_upload() {
    let harness = ViewHarness::new(ViewKind::Welcome, QuizService::default());
    let html = harness.render();
    assert!(html.contains("Get Started"), "missing call to action in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn upload_view_renders_form() {
    let harness = ViewHarness::new(ViewKind::Upload, QuizService::default());
    let html = harness.render();
    assert!(html.contains("Generate Flashcards"), "missing button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_renders_first_card() {
    let harness = ViewHarness::new(ViewKind::Quiz, started_quiz());
    let html = harness.render();
    assert!(html.contains("Card 1 of 8"), "missing counter in {html}");
    assert!(html.contains("What is Gravity?"), "missing question in {html}");
    assert!(html.contains("Reveal Answer"), "missing reveal in {html}");
    assert_eq!(html.matches("class=\"indicator").count(), 8);
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_without_session_points_to_upload() {
    let harness = ViewHarness::new(ViewKind::Quiz, QuizService::default());
    let html = harness.render();
    assert!(html.contains("No quiz in progress."), "missing empty state in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn progress_view_offers_back_to_quiz_mid_session() {
    let harness = ViewHarness::new(ViewKind::Progress, started_quiz());
    let html = harness.render();
    assert!(html.contains("Progress So Far"), "missing heading in {html}");
    assert!(html.contains("Back to Quiz"), "missing back link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn progress_view_after_finishing() {
    let mut quiz = started_quiz();
    quiz.answer(true).unwrap();
    quiz.finish().unwrap();
    let harness = ViewHarness::new(ViewKind::Progress, quiz);
    let html = harness.render();
    assert!(html.contains("Quiz Complete"), "missing heading in {html}");
    assert!(html.contains("100%"), "missing accuracy in {html}");
    assert!(!html.contains("Back to Quiz"), "unexpected back link in {html}");
}
