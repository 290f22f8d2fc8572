//! Insertion-point location from pointer coordinates.
//!
//! Measuring card positions is the renderer's job; this module only compares
//! the measured anchors against the pointer, so it runs without any layout
//! engine.

use super::CardId;
use serde::{Deserialize, Serialize};

/// Measured vertical midpoint of one rendered card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardAnchor {
    card_id: CardId,
    midpoint: f64,
}

impl CardAnchor {
    /// Creates an anchor for `card_id` at vertical position `midpoint`.
    #[must_use]
    pub const fn new(card_id: CardId, midpoint: f64) -> Self {
        Self { card_id, midpoint }
    }

    /// Returns the anchored card.
    #[must_use]
    pub const fn card_id(&self) -> &CardId {
        &self.card_id
    }

    /// Returns the vertical midpoint. Larger values are further down.
    #[must_use]
    pub const fn midpoint(&self) -> f64 {
        self.midpoint
    }
}

/// Locates the lane-local index a dragged card would be dropped at.
///
/// `anchors` must be in the lane's display order. The dragged card's own
/// anchor is skipped, so the returned index addresses the lane as it will
/// look once the card has been lifted out of it. The result is the position
/// of the first remaining anchor whose midpoint lies below `pointer_y`, or
/// the count of remaining anchors when the pointer is past all of them.
/// Anchors sharing a midpoint resolve to the earlier one.
#[must_use]
pub fn locate_insertion_index(
    anchors: &[CardAnchor],
    dragged: Option<&CardId>,
    pointer_y: f64,
) -> usize {
    let mut index = 0;
    for anchor in anchors
        .iter()
        .filter(|anchor| dragged.is_none_or(|id| anchor.card_id() != id))
    {
        if anchor.midpoint() > pointer_y {
            return index;
        }
        index += 1;
    }
    index
}
