//! Shared helpers for board engine integration tests.

use std::sync::Arc;

use laneboard::board::{
    adapters::ids::SequentialCardIdGenerator,
    config::BoardConfig,
    domain::{BoardDomainError, CardAnchor, LaneId},
    services::{BoardService, BoardServiceError},
};
use mockable::DefaultClock;

/// Service type used across integration tests.
pub type TestBoard = BoardService<SequentialCardIdGenerator, DefaultClock>;

/// Lane identifiers of the reference board.
pub const LANES: [&str; 4] = ["backlog", "todo", "doing", "done"];

/// Builds the reference board with the demo cards.
///
/// # Errors
///
/// Returns an error if the demo configuration fails validation.
pub fn demo_board() -> Result<TestBoard, BoardServiceError> {
    BoardService::from_config(
        &BoardConfig::with_demo_cards(),
        Arc::new(SequentialCardIdGenerator::new("it")),
        Arc::new(DefaultClock),
    )
}

/// Returns the ids shown in `lane`, in order.
///
/// # Errors
///
/// Returns an error if `lane` is not a valid lane identifier.
pub fn ids_in(board: &TestBoard, lane: &str) -> Result<Vec<String>, BoardDomainError> {
    Ok(board
        .lane_view(&LaneId::new(lane)?)
        .into_iter()
        .map(|card| card.id().as_str().to_owned())
        .collect())
}

/// Lays the cards of `lane` out as 40-unit tall rows starting at y = 0 and
/// returns their midpoints (20, 60, 100, ...).
///
/// # Errors
///
/// Returns an error if `lane` is not a valid lane identifier.
pub fn layout(board: &TestBoard, lane: &str) -> Result<Vec<CardAnchor>, BoardDomainError> {
    let mut midpoint = 20_u32;
    let mut anchors = Vec::new();
    for card in board.lane_view(&LaneId::new(lane)?) {
        anchors.push(CardAnchor::new(card.id().clone(), f64::from(midpoint)));
        midpoint += 40;
    }
    Ok(anchors)
}

/// Returns every id on the board, sorted.
#[must_use]
pub fn sorted_ids(board: &TestBoard) -> Vec<String> {
    let mut ids: Vec<String> = board
        .store()
        .iter()
        .map(|card| card.id().as_str().to_owned())
        .collect();
    ids.sort();
    ids
}
