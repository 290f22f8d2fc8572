//! Board-level coordinator.
//!
//! The service is the only writer of the card store. It owns the lane
//! configuration, the current store snapshot and the drag session, applies
//! input events synchronously and hands every registered render sink a fresh
//! frame after each visible change.

use crate::board::{
    config::{BoardConfig, BoardConfigError},
    domain::{
        ActiveDrag, BoardDomainError, Card, CardAnchor, CardId, CardStore, CardTitle,
        DragSession, DropTarget, LaneId, LaneSet, ReorderOutcome, commit_reorder,
        lane_len, lane_view, locate_insertion_index,
    },
    ports::{BoardFrame, CardIdGenerator, InputEvent, RenderSink},
};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Request payload from the card creation collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCardRequest {
    title: String,
    column: String,
}

impl CreateCardRequest {
    /// Creates a request for a card titled `title` in lane `column`.
    #[must_use]
    pub fn new(title: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            column: column.into(),
        }
    }
}

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum BoardServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    /// The board configuration is invalid.
    #[error(transparent)]
    Config(#[from] BoardConfigError),
}

/// Result type for board service operations.
pub type BoardServiceResult<T> = Result<T, BoardServiceError>;

/// What a drop did to the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// The card was moved to `lane` at lane-local `index`.
    Reordered {
        /// Moved card.
        card_id: CardId,
        /// Destination lane.
        lane: LaneId,
        /// Lane-local index after clamping.
        index: usize,
    },
    /// The card was dropped on the discard target and deleted.
    Discarded(Card),
    /// The dragged card no longer exists; nothing changed.
    Missing(CardId),
    /// The drop target is not a configured lane; the drag was abandoned.
    Cancelled,
    /// No drag was in flight.
    NoActiveDrag,
}

/// Result of applying one [`InputEvent`].
#[derive(Debug)]
pub enum EventOutcome {
    /// Whether the drag started.
    DragStarted(bool),
    /// Insertion index located for a lane hover.
    Located(Option<usize>),
    /// Whether a highlight was cleared.
    Left(bool),
    /// Effect of a drop.
    Dropped(DropOutcome),
    /// Whether an active drag was cancelled.
    Cancelled(bool),
    /// Result of a card creation.
    Created(BoardServiceResult<Card>),
}

/// Board coordinator.
pub struct BoardService<G, C>
where
    G: CardIdGenerator,
    C: Clock + Send + Sync,
{
    lanes: LaneSet,
    store: CardStore,
    session: DragSession,
    ids: Arc<G>,
    clock: Arc<C>,
    sinks: Vec<Box<dyn RenderSink>>,
}

impl<G, C> BoardService<G, C>
where
    G: CardIdGenerator,
    C: Clock + Send + Sync,
{
    /// Creates an empty board with the given lanes.
    #[must_use]
    pub fn new(lanes: LaneSet, ids: Arc<G>, clock: Arc<C>) -> Self {
        Self {
            lanes,
            store: CardStore::new(),
            session: DragSession::Idle,
            ids,
            clock,
            sinks: Vec::new(),
        }
    }

    /// Builds a board from configuration, placing any seed cards.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError`] when the lanes are invalid or a seed
    /// card has a blank title, an unknown lane or a repeated id.
    pub fn from_config(config: &BoardConfig, ids: Arc<G>, clock: Arc<C>) -> BoardServiceResult<Self> {
        let lanes = config.lane_set()?;
        let created_at = clock.utc();
        let mut cards = Vec::with_capacity(config.seed_cards.len());
        for seed in &config.seed_cards {
            let column = LaneId::new(seed.column.as_str())?;
            lanes.require(&column)?;
            cards.push(Card::with_timestamp(
                CardId::new(seed.id.as_str())?,
                CardTitle::new(seed.title.as_str())?,
                column,
                created_at,
            ));
        }
        let store = CardStore::from_cards(cards)?;
        tracing::debug!(lanes = lanes.len(), cards = store.len(), "board built from config");
        Ok(Self {
            store,
            ..Self::new(lanes, ids, clock)
        })
    }

    /// Registers a render sink and immediately renders the current frame to
    /// it.
    pub fn subscribe(&mut self, sink: impl RenderSink + 'static) {
        sink.render(&self.frame());
        self.sinks.push(Box::new(sink));
    }

    /// Returns the configured lanes.
    #[must_use]
    pub const fn lanes(&self) -> &LaneSet {
        &self.lanes
    }

    /// Returns the current store snapshot.
    #[must_use]
    pub const fn store(&self) -> &CardStore {
        &self.store
    }

    /// Returns the drag session.
    #[must_use]
    pub const fn session(&self) -> &DragSession {
        &self.session
    }

    /// Returns the cards of `lane` in order.
    #[must_use]
    pub fn lane_view(&self, lane: &LaneId) -> Vec<&Card> {
        lane_view(&self.store, lane)
    }

    /// Builds the frame renderers would receive right now.
    #[must_use]
    pub fn frame(&self) -> BoardFrame {
        BoardFrame::build(&self.lanes, &self.store, &self.session)
    }

    /// Creates a card at the end of its lane.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyCardTitle`] for a blank title,
    /// [`BoardDomainError::UnknownLane`] for a lane outside the board and
    /// [`BoardDomainError::DuplicateCard`] if the id generator repeats
    /// itself. The store is unchanged on error.
    pub fn create_card(&mut self, request: CreateCardRequest) -> BoardServiceResult<Card> {
        let CreateCardRequest { title, column } = request;
        let card_title = CardTitle::new(title).inspect_err(|_| {
            tracing::warn!(lane = %column, "rejected card with empty title");
        })?;
        let lane = LaneId::new(column)?;
        self.lanes.require(&lane)?;

        let card = Card::new(self.ids.next_id(), card_title, lane, &*self.clock);
        self.store = self.store.append(card.clone())?;
        tracing::info!(card_id = %card.id(), lane = %card.column(), "card created");
        self.publish();
        Ok(card)
    }

    /// Deletes a card outright.
    ///
    /// Returns the removed card, or `None` when it did not exist.
    pub fn discard_card(&mut self, card_id: &CardId) -> Option<Card> {
        let removed = self.remove_card(card_id)?;
        self.publish();
        Some(removed)
    }

    /// Moves a card to lane-local `index` of `lane` without a drag gesture.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::UnknownLane`] when `lane` is not
    /// configured.
    pub fn move_card(
        &mut self,
        card_id: &CardId,
        lane: &LaneId,
        index: usize,
    ) -> BoardServiceResult<ReorderOutcome> {
        self.lanes.require(lane)?;
        let outcome = self.commit(card_id, lane, index);
        if outcome.store().is_some() {
            self.publish();
        }
        Ok(outcome)
    }

    /// Replaces every card on the board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::UnknownLane`] when a card names a lane
    /// outside the board, or [`BoardDomainError::DuplicateCard`] for
    /// repeated ids. The store is unchanged on error.
    pub fn replace_all(&mut self, cards: Vec<Card>) -> BoardServiceResult<()> {
        if let Some(card) = cards.iter().find(|card| !self.lanes.contains(card.column())) {
            return Err(BoardDomainError::UnknownLane(card.column().clone()).into());
        }
        self.store = self.store.replace_all(cards)?;
        self.publish();
        Ok(())
    }

    /// Begins dragging `card_id`, replacing any drag in flight.
    ///
    /// Returns `false` for an unknown card; the session is left idle.
    pub fn drag_start(&mut self, card_id: CardId) -> bool {
        let Some(origin) = self.store.get(&card_id).map(|card| card.column().clone()) else {
            tracing::warn!(card_id = %card_id, "drag start on unknown card ignored");
            if self.session.cancel().is_some() {
                self.publish();
            }
            return false;
        };

        if let Some(replaced) = self.session.begin(card_id, origin) {
            tracing::debug!(card_id = %replaced.card_id(), "replaced drag in flight");
        }
        self.publish();
        true
    }

    /// Records the pointer over `target` and locates the insertion index.
    ///
    /// Returns the located index for lane targets, `None` for the discard
    /// target, unknown lanes or when no drag is in flight. Never touches the
    /// store.
    pub fn drag_over(
        &mut self,
        target: DropTarget,
        pointer_y: f64,
        anchors: &[CardAnchor],
    ) -> Option<usize> {
        let dragged = self.session.dragged_card()?;
        let insertion = match &target {
            DropTarget::Lane(lane) if !self.lanes.contains(lane) => {
                tracing::warn!(lane = %lane, "drag over unknown lane ignored");
                return None;
            }
            DropTarget::Lane(_) => Some(locate_insertion_index(anchors, Some(dragged), pointer_y)),
            DropTarget::Discard => None,
        };

        let changed = !self.session.is_hovered(&target)
            || self.session.active().and_then(ActiveDrag::insertion) != insertion;
        if changed {
            tracing::debug!(target = %target, insertion = ?insertion, "drag hover moved");
            self.session.hover(target, insertion);
            self.publish();
        }
        insertion
    }

    /// Clears the highlight of `target` when the pointer leaves it.
    pub fn drag_leave(&mut self, target: &DropTarget) -> bool {
        let cleared = self.session.leave(target);
        if cleared {
            self.publish();
        }
        cleared
    }

    /// Drops the dragged card onto `target`.
    ///
    /// Lane targets commit a reorder at the last located index for that
    /// lane, or at the lane's end if the pointer never hovered it. The
    /// discard target deletes the card.
    pub fn drop_on(&mut self, target: DropTarget) -> DropOutcome {
        let Some(active) = self.session.finish() else {
            tracing::debug!(target = %target, "drop without active drag ignored");
            return DropOutcome::NoActiveDrag;
        };

        let outcome = match target {
            DropTarget::Discard => self
                .remove_card(active.card_id())
                .map_or_else(|| DropOutcome::Missing(active.card_id().clone()), DropOutcome::Discarded),
            DropTarget::Lane(lane) if !self.lanes.contains(&lane) => {
                tracing::warn!(lane = %lane, "drop on unknown lane cancelled");
                DropOutcome::Cancelled
            }
            DropTarget::Lane(lane) => {
                let index = active
                    .insertion_for(&lane)
                    .unwrap_or_else(|| lane_len(&self.store, &lane));
                match self.commit(active.card_id(), &lane, index) {
                    ReorderOutcome::Moved { card, index: landed, .. } => DropOutcome::Reordered {
                        card_id: card.id().clone(),
                        lane,
                        index: landed,
                    },
                    ReorderOutcome::Missing(card_id) => DropOutcome::Missing(card_id),
                }
            }
        };
        self.publish();
        outcome
    }

    /// Abandons the drag in flight, leaving the store untouched.
    pub fn cancel_drag(&mut self) -> bool {
        let Some(active) = self.session.cancel() else {
            return false;
        };
        tracing::debug!(card_id = %active.card_id(), "drag cancelled");
        self.publish();
        true
    }

    /// Applies one input event.
    pub fn handle(&mut self, event: InputEvent) -> EventOutcome {
        match event {
            InputEvent::DragStart { card_id } => EventOutcome::DragStarted(self.drag_start(card_id)),
            InputEvent::DragOver {
                target,
                pointer_y,
                anchors,
            } => EventOutcome::Located(self.drag_over(target, pointer_y, &anchors)),
            InputEvent::DragLeave { target } => EventOutcome::Left(self.drag_leave(&target)),
            InputEvent::Drop { target } => EventOutcome::Dropped(self.drop_on(target)),
            InputEvent::Cancel => EventOutcome::Cancelled(self.cancel_drag()),
            InputEvent::CreateCard(request) => EventOutcome::Created(self.create_card(request)),
        }
    }

    fn commit(&mut self, card_id: &CardId, lane: &LaneId, index: usize) -> ReorderOutcome {
        let outcome = commit_reorder(&self.store, card_id, lane, index);
        match &outcome {
            ReorderOutcome::Moved {
                store,
                from_lane,
                to_lane,
                index: landed,
                ..
            } => {
                tracing::info!(
                    card_id = %card_id,
                    from = %from_lane,
                    to = %to_lane,
                    index = landed,
                    "card moved"
                );
                self.store = store.clone();
            }
            ReorderOutcome::Missing(_) => {
                tracing::debug!(card_id = %card_id, "reorder of missing card skipped");
            }
        }
        outcome
    }

    fn remove_card(&mut self, card_id: &CardId) -> Option<Card> {
        let removed = self.store.get(card_id).cloned()?;
        self.store = self.store.remove(card_id)?;
        tracing::info!(card_id = %card_id, lane = %removed.column(), "card discarded");
        Some(removed)
    }

    fn publish(&self) {
        if self.sinks.is_empty() {
            return;
        }
        let frame = self.frame();
        for sink in &self.sinks {
            sink.render(&frame);
        }
    }
}
