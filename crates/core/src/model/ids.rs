use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a generated flashcard: its 1-based position in the deck.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(u32);

impl CardId {
    /// Creates a `CardId` from a 1-based position.
    ///
    /// Returns `None` for zero, which is never a valid card position.
    #[must_use]
    pub fn new(id: u32) -> Option<Self> {
        (id > 0).then_some(Self(id))
    }

    /// Identifier for the card stored at the given 0-based index.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        let position = u32::try_from(index).unwrap_or(u32::MAX - 1);
        Self(position.saturating_add(1))
    }

    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }

    /// 0-based index of the card this id points at.
    #[must_use]
    pub fn index(&self) -> usize {
        (self.0 as usize).saturating_sub(1)
    }
}

impl fmt::Debug for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CardId({})", self.0)
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for parsing a `CardId` from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    raw: String,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse CardId from {:?}", self.raw)
    }
}

impl std::error::Error for ParseIdError {}

impl FromStr for CardId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .ok()
            .and_then(CardId::new)
            .ok_or_else(|| ParseIdError { raw: s.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_not_a_card_id() {
        assert!(CardId::new(0).is_none());
        assert!("0".parse::<CardId>().is_err());
    }

    #[test]
    fn index_and_position_line_up() {
        let id = CardId::from_index(0);
        assert_eq!(id.value(), 1);
        assert_eq!(id.index(), 0);
        assert_eq!(CardId::from_index(11).to_string(), "12");
    }

    #[test]
    fn parses_from_str() {
        let id: CardId = " 7 ".parse().unwrap();
        assert_eq!(id, CardId::new(7).unwrap());
        assert!("seven".parse::<CardId>().is_err());
    }
}
