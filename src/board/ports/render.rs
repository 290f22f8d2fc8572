//! Render port and the frame handed to renderers.

use crate::board::domain::{
    Card, CardId, CardStore, DragSession, DropTarget, Lane, LaneSet, lane_view,
};
use serde::Serialize;

/// Everything a renderer needs to draw one lane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaneFrame {
    /// Lane configuration.
    pub lane: Lane,
    /// Cards in lane order.
    pub cards: Vec<Card>,
    /// Whether the lane is the current drop target.
    pub highlighted: bool,
    /// Marker slot to light up, when a drag hovers this lane.
    ///
    /// Slot `i` sits before the `i`-th card that is not being dragged; slot
    /// `n` sits at the end of the lane. `cards` still holds the dragged card,
    /// so use [`LaneFrame::marker_before`] to place the marker.
    pub marker: Option<usize>,
    /// Card the marker is drawn in front of; `None` when the marker is at
    /// the lane's end or not shown.
    pub marker_before: Option<CardId>,
}

impl LaneFrame {
    /// Returns the number of cards in the lane.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Returns the lane's card identifiers in order.
    #[must_use]
    pub fn card_ids(&self) -> Vec<CardId> {
        self.cards.iter().map(|card| card.id().clone()).collect()
    }
}

/// Snapshot of the whole board for one render pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardFrame {
    /// Lanes in display order.
    pub lanes: Vec<LaneFrame>,
    /// Whether the discard target is highlighted.
    pub discard_highlighted: bool,
    /// Card being dragged, if any.
    pub dragged: Option<CardId>,
}

impl BoardFrame {
    /// Builds a frame from a store snapshot and the drag state.
    #[must_use]
    pub fn build(lanes: &LaneSet, store: &CardStore, session: &DragSession) -> Self {
        let lane_frames = lanes
            .iter()
            .map(|lane| {
                let target = DropTarget::Lane(lane.id().clone());
                let cards: Vec<Card> = lane_view(store, lane.id()).into_iter().cloned().collect();
                let marker = session
                    .active()
                    .and_then(|active| active.insertion_for(lane.id()));
                let marker_before = marker.and_then(|slot| {
                    cards
                        .iter()
                        .filter(|card| session.dragged_card() != Some(card.id()))
                        .nth(slot)
                        .map(|card| card.id().clone())
                });
                LaneFrame {
                    lane: lane.clone(),
                    cards,
                    highlighted: session.is_hovered(&target),
                    marker,
                    marker_before,
                }
            })
            .collect();

        Self {
            lanes: lane_frames,
            discard_highlighted: session.is_hovered(&DropTarget::Discard),
            dragged: session.dragged_card().cloned(),
        }
    }

    /// Returns the frame for `lane_id`.
    #[must_use]
    pub fn lane(&self, lane_id: &str) -> Option<&LaneFrame> {
        self.lanes
            .iter()
            .find(|frame| frame.lane.id().as_str() == lane_id)
    }
}

/// Receives a fresh frame after every visible board change.
#[cfg_attr(test, mockall::automock)]
pub trait RenderSink: Send {
    /// Draws `frame`.
    fn render(&self, frame: &BoardFrame);
}
