//! Card value type.

use super::{BoardDomainError, CardId, LaneId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Card title, trimmed and guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CardTitle(String);

impl CardTitle {
    /// Creates a validated title from raw input.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyCardTitle`] when the input is empty
    /// or whitespace only.
    pub fn new(value: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(BoardDomainError::EmptyCardTitle);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CardTitle {
    type Error = BoardDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CardTitle> for String {
    fn from(value: CardTitle) -> Self {
        value.0
    }
}

impl fmt::Display for CardTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single work item on the board.
///
/// Lane membership is carried by the card itself; there is no separate
/// per-lane list anywhere in the crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    title: CardTitle,
    column: LaneId,
    created_at: DateTime<Utc>,
}

impl Card {
    /// Creates a card stamped with the clock's current time.
    #[must_use]
    pub fn new(id: CardId, title: CardTitle, column: LaneId, clock: &impl Clock) -> Self {
        Self::with_timestamp(id, title, column, clock.utc())
    }

    /// Creates a card with an explicit creation timestamp.
    #[must_use]
    pub const fn with_timestamp(
        id: CardId,
        title: CardTitle,
        column: LaneId,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            column,
            created_at,
        }
    }

    /// Returns the card identifier.
    #[must_use]
    pub const fn id(&self) -> &CardId {
        &self.id
    }

    /// Returns the card title.
    #[must_use]
    pub const fn title(&self) -> &CardTitle {
        &self.title
    }

    /// Returns the lane the card currently belongs to.
    #[must_use]
    pub const fn column(&self) -> &LaneId {
        &self.column
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns whether the card belongs to `lane`.
    #[must_use]
    pub fn is_in(&self, lane: &LaneId) -> bool {
        self.column == *lane
    }

    /// Returns this card reassigned to `lane`.
    #[must_use]
    pub fn moved_to(self, lane: LaneId) -> Self {
        Self {
            column: lane,
            ..self
        }
    }
}
