mod progress;
mod quiz;
mod state;
mod upload;
mod welcome;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use progress::{BreakdownChart, ProgressView, StatsGrid, TimeChart};
pub use quiz::{FlashcardFace, IndicatorStrip, QuizView};
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use upload::{DeckReady, UploadView};
pub use welcome::WelcomeView;
