use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use flashquiz_core::SessionPhase;

use crate::context::QuizStore;
use crate::routes::Route;
use crate::vm::{BarVm, SliceVm, SummaryVm};

#[component]
pub fn ProgressView() -> Element {
    let store = use_context::<QuizStore>();
    let navigator = use_navigator();

    let (summary, phase) = {
        let quiz = store.quiz.read();
        (quiz.snapshot().ok(), quiz.phase())
    };
    let Some(summary) = summary else {
        return rsx! {
            section { class: "screen progress empty",
                p { "No quiz results yet." }
                Link { class: "btn primary", to: Route::Upload {}, "Upload a document" }
            }
        };
    };
    let vm = SummaryVm::from(&summary);

    let new_session = move |_: MouseEvent| {
        let mut store = store;
        store.quiz.write().reset();
        store.revealed.set(false);
        navigator.push(Route::Upload {});
    };

    rsx! {
        section { class: "screen progress",
            h2 {
                if phase == SessionPhase::Finished { "Quiz Complete" } else { "Progress So Far" }
            }
            StatsGrid { vm: vm.clone() }
            div { class: "charts",
                TimeChart { bars: vm.bars.clone() }
                BreakdownChart { slices: vm.slices.clone() }
            }
            div { class: "progress-actions",
                if phase == SessionPhase::InProgress {
                    Link { class: "btn secondary", to: Route::Quiz {}, "Back to Quiz" }
                }
                button { class: "btn primary", onclick: new_session, "New Session" }
            }
        }
    }
}

#[component]
pub fn StatsGrid(vm: SummaryVm) -> Element {
    rsx! {
        div { class: "stats-grid",
            Stat { label: "Total Time", value: vm.total_time.clone() }
            Stat { label: "Avg. Time per Card", value: vm.average_time.clone() }
            Stat { label: "Correct", value: vm.correct.to_string() }
            Stat { label: "Incorrect", value: vm.incorrect.to_string() }
            Stat { label: "Accuracy", value: vm.accuracy.clone() }
            Stat { label: "Cards Reviewed", value: vm.cards_reviewed.to_string() }
        }
    }
}

#[component]
fn Stat(label: &'static str, value: String) -> Element {
    rsx! {
        div { class: "stat",
            span { class: "stat-value", "{value}" }
            span { class: "stat-label", "{label}" }
        }
    }
}

#[component]
pub fn TimeChart(bars: Vec<BarVm>) -> Element {
    rsx! {
        figure { class: "chart time-chart",
            figcaption { "Time per Card" }
            div { class: "bars",
                for bar in bars {
                    div { key: "{bar.label}", class: "bar-column",
                        span { class: "bar-value", "{bar.value_label}" }
                        div { class: "bar", style: "height: {bar.height_percent}%" }
                        span { class: "bar-label", "{bar.label}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn BreakdownChart(slices: Vec<SliceVm>) -> Element {
    rsx! {
        figure { class: "chart breakdown-chart",
            figcaption { "Performance" }
            div { class: "stacked",
                for slice in slices.iter().filter(|s| s.count > 0) {
                    div {
                        key: "{slice.class}",
                        class: "segment {slice.class}",
                        style: "width: {slice.percent}%",
                    }
                }
            }
            ul { class: "legend",
                for slice in slices.iter() {
                    li { key: "{slice.class}", class: "{slice.class}",
                        "{slice.label}: {slice.count}"
                    }
                }
            }
        }
    }
}
