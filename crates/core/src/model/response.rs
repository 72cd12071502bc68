use serde::Serialize;

/// Self-graded outcome recorded for a card during a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CardResponse {
    /// The card has not been graded in this session.
    #[default]
    Unanswered,
    Correct,
    Incorrect,
}

impl CardResponse {
    #[must_use]
    pub fn from_correct(is_correct: bool) -> Self {
        if is_correct {
            Self::Correct
        } else {
            Self::Incorrect
        }
    }

    #[must_use]
    pub fn is_answered(self) -> bool {
        !matches!(self, Self::Unanswered)
    }

    /// Stable lowercase label, also used as a style hook by the presentation layer.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unanswered => "unanswered",
            Self::Correct => "correct",
            Self::Incorrect => "incorrect",
        }
    }
}
