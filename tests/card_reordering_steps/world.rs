//! Shared world state for card reordering BDD scenarios.

use laneboard::board::{
    adapters::ids::SequentialCardIdGenerator,
    domain::{Card, CardAnchor, LaneId},
    services::{BoardService, BoardServiceError, DropOutcome},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestBoard = BoardService<SequentialCardIdGenerator, DefaultClock>;

/// Scenario world for card reordering behaviour tests.
#[derive(Default)]
pub struct BoardWorld {
    pub board: Option<TestBoard>,
    pub located: Option<usize>,
    pub last_drop: Option<DropOutcome>,
    pub last_created: Option<Result<Card, BoardServiceError>>,
}

impl BoardWorld {
    /// Returns the board, failing when no Given step built one.
    pub fn board(&self) -> Result<&TestBoard, eyre::Report> {
        self.board
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing board in scenario world"))
    }

    /// Returns the board mutably, failing when no Given step built one.
    pub fn board_mut(&mut self) -> Result<&mut TestBoard, eyre::Report> {
        self.board
            .as_mut()
            .ok_or_else(|| eyre::eyre!("missing board in scenario world"))
    }

    /// Measures `lane` as rows whose midpoints are 10, 30, 50, ...
    pub fn anchors(&self, lane: &str) -> Result<Vec<CardAnchor>, eyre::Report> {
        const MIDPOINTS: [f64; 8] = [10.0, 30.0, 50.0, 70.0, 90.0, 110.0, 130.0, 150.0];
        Ok(self
            .board()?
            .lane_view(&LaneId::new(lane)?)
            .into_iter()
            .zip(MIDPOINTS)
            .map(|(card, midpoint)| CardAnchor::new(card.id().clone(), midpoint))
            .collect())
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}
