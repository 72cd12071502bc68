use std::time::Duration;

use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use log::warn;
use services::AnswerOutcome;

use crate::context::QuizStore;
use crate::routes::Route;
use crate::vm::{IndicatorVm, QuizVm};

#[component]
pub fn QuizView() -> Element {
    let store = use_context::<QuizStore>();
    let navigator = use_navigator();

    // Re-render once a second so the timer follows the clock.
    let mut tick = use_signal(|| 0_u64);
    use_future(move || async move {
        loop {
            tokio::time::sleep(Duration::from_secs(1)).await;
            *tick.write() += 1;
        }
    });
    let _ = tick();

    let Some(vm) = QuizVm::from_service(&store.quiz.read()) else {
        return rsx! {
            section { class: "screen quiz empty",
                p { "No quiz in progress." }
                Link { class: "btn primary", to: Route::Upload {}, "Upload a document" }
            }
        };
    };
    let revealed = (store.revealed)();

    let answer = move |correct: bool| {
        let mut store = store;
        let outcome = store.quiz.write().answer(correct);
        match outcome {
            Ok(AnswerOutcome::Advanced { .. }) => store.revealed.set(false),
            Ok(AnswerOutcome::Completed(_)) => {
                store.revealed.set(false);
                navigator.push(Route::Progress {});
            }
            Err(err) => warn!("answer rejected: {err}"),
        }
    };

    let navigate = move |step: Step| {
        let mut store = store;
        let moved = {
            let mut quiz = store.quiz.write();
            match step {
                Step::Previous => quiz.previous(),
                Step::Next => quiz.next(),
                Step::To(index) => quiz.go_to(index),
            }
        };
        match moved {
            Ok(_) => store.revealed.set(false),
            Err(err) => warn!("navigation rejected: {err}"),
        }
    };

    rsx! {
        section { class: "screen quiz",
            div { class: "quiz-header",
                span { class: "counter", "Card {vm.position} of {vm.total}" }
                span { class: "timer", "{vm.timer}" }
                button {
                    class: "btn secondary",
                    onclick: move |_| {
                        navigator.push(Route::Progress {});
                    },
                    "View Progress"
                }
            }

            FlashcardFace {
                question: vm.question.clone(),
                answer: vm.answer.clone(),
                revealed,
            }

            div { class: "grade-actions",
                if revealed {
                    button { class: "btn correct", onclick: move |_| answer(true), "Correct" }
                    button { class: "btn incorrect", onclick: move |_| answer(false), "Incorrect" }
                } else {
                    button {
                        class: "btn primary",
                        onclick: move |_| {
                            let mut revealed = store.revealed;
                            revealed.set(true);
                        },
                        "Reveal Answer"
                    }
                }
            }

            div { class: "nav-actions",
                button {
                    class: "btn secondary",
                    disabled: !vm.can_go_back,
                    onclick: move |_| navigate(Step::Previous),
                    "Previous"
                }
                button {
                    class: "btn secondary",
                    disabled: !vm.can_go_forward,
                    onclick: move |_| navigate(Step::Next),
                    "Next"
                }
            }

            IndicatorStrip {
                indicators: vm.indicators.clone(),
                on_select: move |index| navigate(Step::To(index)),
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Previous,
    Next,
    To(usize),
}

#[component]
pub fn FlashcardFace(question: String, answer: String, revealed: bool) -> Element {
    let class = if revealed { "flashcard flipped" } else { "flashcard" };
    rsx! {
        div { class: "{class}",
            div { class: "card-front",
                span { class: "label", "Question" }
                p { class: "question", "{question}" }
            }
            if revealed {
                div { class: "card-back",
                    span { class: "label", "Answer" }
                    p { class: "answer", "{answer}" }
                }
            }
        }
    }
}

#[component]
pub fn IndicatorStrip(indicators: Vec<IndicatorVm>, on_select: EventHandler<usize>) -> Element {
    rsx! {
        div { class: "card-indicators",
            for (index, class) in indicators.iter().map(|i| (i.index, i.class())) {
                div {
                    key: "{index}",
                    class: "{class}",
                    onclick: move |_| on_select.call(index),
                }
            }
        }
    }
}
