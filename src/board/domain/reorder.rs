//! Drop commit: moving a card to a lane-local position.

use super::{Card, CardId, CardStore, LaneId};

/// Result of committing a reorder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReorderOutcome {
    /// The card was moved; `store` is the replacement snapshot.
    Moved {
        /// Store after the move.
        store: CardStore,
        /// The moved card with its new lane.
        card: Card,
        /// Lane the card left.
        from_lane: LaneId,
        /// Lane the card now belongs to.
        to_lane: LaneId,
        /// Lane-local index the card landed at, after clamping.
        index: usize,
    },
    /// The dragged card is no longer in the store; nothing changed.
    Missing(CardId),
}

impl ReorderOutcome {
    /// Returns the replacement store for a completed move.
    #[must_use]
    pub const fn store(&self) -> Option<&CardStore> {
        match self {
            Self::Moved { store, .. } => Some(store),
            Self::Missing(_) => None,
        }
    }
}

/// Moves `dragged` into `target` at lane-local `insertion_index`.
///
/// The card is lifted out first and the index addresses the target lane
/// without it, matching what the locator reports while the card is held.
/// Indexes past the end of the lane are clamped to an append. The relative
/// order of every other card is preserved and the id set never changes.
#[must_use]
pub fn commit_reorder(
    store: &CardStore,
    dragged: &CardId,
    target: &LaneId,
    insertion_index: usize,
) -> ReorderOutcome {
    let Some(original) = store.get(dragged) else {
        return ReorderOutcome::Missing(dragged.clone());
    };
    let from_lane = original.column().clone();
    let moved = original.clone().moved_to(target.clone());

    let rest: Vec<&Card> = store.iter().filter(|card| card.id() != dragged).collect();
    let lane_len = rest.iter().filter(|card| card.is_in(target)).count();
    let index = insertion_index.min(lane_len);

    let mut next = Vec::with_capacity(store.len());
    let mut pending = Some(moved.clone());
    let mut seen = 0_usize;
    for card in rest {
        if card.is_in(target) {
            if seen == index {
                next.extend(pending.take());
            }
            seen += 1;
        }
        next.push(card.clone());
    }
    next.extend(pending);

    ReorderOutcome::Moved {
        store: CardStore::from_unique(next),
        card: moved,
        from_lane,
        to_lane: target.clone(),
        index,
    }
}
