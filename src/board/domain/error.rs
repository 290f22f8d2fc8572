//! Error types for board domain validation.

use super::{CardId, LaneId};
use thiserror::Error;

/// Errors returned while constructing or mutating board domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The card title is empty after trimming.
    #[error("card title must not be empty")]
    EmptyCardTitle,

    /// The lane identifier is empty after trimming.
    #[error("lane identifier must not be empty")]
    EmptyLaneId,

    /// The card identifier is empty after trimming.
    #[error("card identifier must not be empty")]
    EmptyCardId,

    /// The lane is not part of the board configuration.
    #[error("unknown lane: {0}")]
    UnknownLane(LaneId),

    /// The same lane identifier was configured more than once.
    #[error("duplicate lane identifier: {0}")]
    DuplicateLane(LaneId),

    /// The board configuration declares no lanes.
    #[error("a board needs at least one lane")]
    NoLanes,

    /// A card with the same identifier is already in the store.
    #[error("duplicate card identifier: {0}")]
    DuplicateCard(CardId),
}
