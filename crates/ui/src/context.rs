use std::path::PathBuf;
use std::sync::Arc;

use dioxus::prelude::*;
use services::{DeckService, QuizService};

pub trait UiApp: Send + Sync {
    fn deck_service(&self) -> Arc<DeckService>;
    /// Document to generate a deck from as soon as the upload screen opens.
    fn initial_file(&self) -> Option<PathBuf>;
}

#[derive(Clone)]
pub struct AppContext {
    deck_service: Arc<DeckService>,
    initial_file: Option<PathBuf>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            deck_service: app.deck_service(),
            initial_file: app.initial_file(),
        }
    }

    #[must_use]
    pub fn deck_service(&self) -> Arc<DeckService> {
        Arc::clone(&self.deck_service)
    }

    #[must_use]
    pub fn initial_file(&self) -> Option<PathBuf> {
        self.initial_file.clone()
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

/// Quiz state shared by the quiz and progress screens.
///
/// Created once under `App`, so it outlives route changes.
#[derive(Clone, Copy)]
pub struct QuizStore {
    pub quiz: Signal<QuizService>,
    /// Whether the current card shows its answer side.
    pub revealed: Signal<bool>,
}

impl QuizStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            quiz: Signal::new(QuizService::default()),
            revealed: Signal::new(false),
        }
    }
}

/// Shared quiz store, creating it on first use in this scope.
pub fn use_quiz_store_provider() -> QuizStore {
    use_context_provider(QuizStore::new)
}
