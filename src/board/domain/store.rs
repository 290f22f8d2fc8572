//! Copy-on-write card store.
//!
//! The store is the single source of truth for every card on the board.
//! Each mutation builds a new sequence and returns a new store; existing
//! snapshots are never modified, so a reader holding one can never observe a
//! half-applied change.

use super::{BoardDomainError, Card, CardId};
use std::collections::HashSet;
use std::sync::Arc;

/// Ordered, immutable snapshot of all cards across all lanes.
///
/// Order is only meaningful as the relative order of cards sharing a lane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardStore {
    cards: Arc<[Card]>,
}

impl Default for CardStore {
    fn default() -> Self {
        Self {
            cards: Arc::from(Vec::new()),
        }
    }
}

impl CardStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store from an ordered card sequence.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::DuplicateCard`] when two cards share an id.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, BoardDomainError> {
        let mut seen = HashSet::with_capacity(cards.len());
        for card in &cards {
            if !seen.insert(card.id()) {
                return Err(BoardDomainError::DuplicateCard(card.id().clone()));
            }
        }
        Ok(Self {
            cards: Arc::from(cards),
        })
    }

    /// Builds a store from a sequence already known to hold unique ids.
    pub(crate) fn from_unique(cards: Vec<Card>) -> Self {
        Self {
            cards: Arc::from(cards),
        }
    }

    /// Returns a new store with `card` appended at the end.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::DuplicateCard`] when the id is already
    /// present; the store is left as it was.
    pub fn append(&self, card: Card) -> Result<Self, BoardDomainError> {
        if self.contains(card.id()) {
            return Err(BoardDomainError::DuplicateCard(card.id().clone()));
        }
        let mut next = Vec::with_capacity(self.len() + 1);
        next.extend(self.cards.iter().cloned());
        next.push(card);
        Ok(Self::from_unique(next))
    }

    /// Returns a new store without the card `id`, or `None` when no such
    /// card exists.
    #[must_use]
    pub fn remove(&self, id: &CardId) -> Option<Self> {
        self.position(id)?;
        let next = self
            .cards
            .iter()
            .filter(|card| card.id() != id)
            .cloned()
            .collect();
        Some(Self::from_unique(next))
    }

    /// Returns a store holding exactly `cards`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::DuplicateCard`] when two cards share an id.
    pub fn replace_all(&self, cards: Vec<Card>) -> Result<Self, BoardDomainError> {
        let replacement = Self::from_cards(cards)?;
        tracing::debug!(
            previous = self.len(),
            next = replacement.len(),
            "card store replaced"
        );
        Ok(replacement)
    }

    /// Looks up a card by identifier.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id() == id)
    }

    /// Returns the global position of a card.
    #[must_use]
    pub fn position(&self, id: &CardId) -> Option<usize> {
        self.cards.iter().position(|card| card.id() == id)
    }

    /// Returns whether a card with `id` exists.
    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.position(id).is_some()
    }

    /// Iterates over all cards in store order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Returns the identifiers of all cards in store order.
    #[must_use]
    pub fn ids(&self) -> Vec<CardId> {
        self.cards.iter().map(|card| card.id().clone()).collect()
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the store holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether two stores share the same underlying snapshot.
    #[must_use]
    pub fn same_snapshot(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.cards, &other.cards)
    }
}
