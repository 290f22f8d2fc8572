//! Lane views derived from the card store.
//!
//! Views are recomputed from the current snapshot on every call and hold no
//! state of their own, so they cannot drift from the store.

use super::{Card, CardId, CardStore, LaneId};

/// Returns the cards of `lane` in their store order.
#[must_use]
pub fn lane_view<'a>(store: &'a CardStore, lane: &LaneId) -> Vec<&'a Card> {
    store.iter().filter(|card| card.is_in(lane)).collect()
}

/// Returns the number of cards in `lane`.
#[must_use]
pub fn lane_len(store: &CardStore, lane: &LaneId) -> usize {
    store.iter().filter(|card| card.is_in(lane)).count()
}

/// Returns the lane-local index of `card_id` within `lane`.
#[must_use]
pub fn lane_index_of(store: &CardStore, lane: &LaneId, card_id: &CardId) -> Option<usize> {
    store
        .iter()
        .filter(|card| card.is_in(lane))
        .position(|card| card.id() == card_id)
}
