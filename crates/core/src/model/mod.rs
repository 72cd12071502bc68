mod flashcard;
mod ids;
mod response;
mod stats;

pub use ids::{CardId, ParseIdError};

pub use flashcard::{Flashcard, FlashcardError};
pub use response::CardResponse;
pub use stats::{StatsError, StatsSummary, accuracy_percent};
