//! Unit tests for the board context.


use crate::board::domain::{BoardDomainError, Card, CardId, CardStore, CardTitle, LaneId, lane_view};
use mockable::{Clock, DefaultClock};

/// Builds a card titled after its id.
fn card(id: &str, lane: &str) -> Result<Card, BoardDomainError> {
    Ok(Card::with_timestamp(
        CardId::new(id)?,
        CardTitle::new(format!("Card {id}"))?,
        LaneId::new(lane)?,
        DefaultClock.utc(),
    ))
}

/// Builds a store from `(id, lane)` pairs in order.
fn store_of(cards: &[(&str, &str)]) -> Result<CardStore, BoardDomainError> {
    let built = cards
        .iter()
        .map(|(id, lane)| card(id, lane))
        .collect::<Result<Vec<_>, _>>()?;
    CardStore::from_cards(built)
}

/// Returns the ids shown in `lane`, in order.
fn lane_ids(store: &CardStore, lane: &str) -> Result<Vec<String>, BoardDomainError> {
    let lane_id = LaneId::new(lane)?;
    Ok(lane_view(store, &lane_id)
        .into_iter()
        .map(|card| card.id().as_str().to_owned())
        .collect())
}

/// Returns the store's ids sorted, for set comparisons.
fn sorted_ids(store: &CardStore) -> Vec<String> {
    let mut ids: Vec<String> = store.iter().map(|card| card.id().as_str().to_owned()).collect();
    ids.sort();
    ids
}
