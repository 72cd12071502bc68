use std::path::PathBuf;

use dioxus::prelude::*;
use dioxus_router::use_navigator;
use log::warn;
use services::Deck;

use crate::context::{AppContext, QuizStore};
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};

#[component]
pub fn UploadView() -> Element {
    let ctx = use_context::<AppContext>();
    let store = use_context::<QuizStore>();
    let navigator = use_navigator();
    let deck_service = ctx.deck_service();

    let initial = ctx.initial_file();
    let mut path_input = use_signal({
        let initial = initial.clone();
        move || {
            initial
                .map(|path| path.display().to_string())
                .unwrap_or_default()
        }
    });
    let mut submitted = use_signal(move || initial);

    let resource = use_resource(move || {
        let deck_service = deck_service.clone();
        let path = submitted();
        async move {
            let Some(path) = path else {
                return Ok::<_, ViewError>(None);
            };
            let built = tokio::task::spawn_blocking(move || deck_service.build_from_path(path))
                .await
                .map_err(|_| ViewError::Unknown)?;
            match built {
                Ok(deck) => Ok(Some(deck)),
                Err(err) => {
                    warn!("deck generation failed: {err}");
                    Err(ViewError::from(&err))
                }
            }
        }
    });
    let state = view_state_from_resource(resource);

    let generate = move |_: MouseEvent| {
        let raw = path_input.read().trim().to_string();
        if !raw.is_empty() {
            submitted.set(Some(PathBuf::from(raw)));
        }
    };

    let start_quiz = move |deck: &Deck| {
        let mut store = store;
        match store.quiz.write().start(deck) {
            Ok(()) => {
                store.revealed.set(false);
                navigator.push(Route::Quiz {});
            }
            Err(err) => warn!("could not start quiz: {err}"),
        }
    };

    let busy = matches!(state, ViewState::Loading);

    rsx! {
        section { class: "screen upload",
            h2 { "Upload your document" }
            p { class: "hint", "Enter the path of a PDF or plain text file." }
            div { class: "upload-form",
                input {
                    r#type: "text",
                    placeholder: "/path/to/notes.pdf",
                    value: "{path_input}",
                    disabled: busy,
                    oninput: move |evt| path_input.set(evt.value()),
                }
                button {
                    class: "btn primary",
                    disabled: busy || path_input.read().trim().is_empty(),
                    onclick: generate,
                    "Generate Flashcards"
                }
            }
            match state {
                ViewState::Idle | ViewState::Ready(None) => rsx! {},
                ViewState::Loading => rsx! {
                    p { class: "status", "Extracting text and generating flashcards..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
                ViewState::Ready(Some(deck)) => rsx! {
                    DeckReady {
                        source: deck.source().to_string(),
                        count: deck.len(),
                        on_start: move |()| start_quiz(&deck),
                    }
                },
            }
        }
    }
}

#[component]
pub fn DeckReady(source: String, count: usize, on_start: EventHandler<()>) -> Element {
    rsx! {
        div { class: "deck-ready",
            p { class: "file-info", "{source}" }
            p { class: "success", "Generated {count} flashcards." }
            button { class: "btn primary", onclick: move |_| on_start.call(()), "Start Quiz" }
        }
    }
}
