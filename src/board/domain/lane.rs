//! Lane configuration values.

use super::{BoardDomainError, LaneId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A named workflow stage cards are grouped into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lane {
    id: LaneId,
    title: String,
    accent: String,
}

impl Lane {
    /// Creates a lane definition.
    #[must_use]
    pub fn new(id: LaneId, title: impl Into<String>, accent: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            accent: accent.into(),
        }
    }

    /// Returns the lane identifier.
    #[must_use]
    pub const fn id(&self) -> &LaneId {
        &self.id
    }

    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the accent colour used for the lane heading.
    #[must_use]
    pub fn accent(&self) -> &str {
        &self.accent
    }
}

/// The ordered set of lanes a board is configured with.
///
/// The set is fixed for the lifetime of a board and defines which `column`
/// values are valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaneSet {
    lanes: Vec<Lane>,
}

impl LaneSet {
    /// Creates a validated lane set in display order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::NoLanes`] for an empty list and
    /// [`BoardDomainError::DuplicateLane`] when an identifier repeats.
    pub fn new(lanes: Vec<Lane>) -> Result<Self, BoardDomainError> {
        if lanes.is_empty() {
            return Err(BoardDomainError::NoLanes);
        }
        let mut seen = HashSet::with_capacity(lanes.len());
        for lane in &lanes {
            if !seen.insert(lane.id()) {
                return Err(BoardDomainError::DuplicateLane(lane.id().clone()));
            }
        }
        Ok(Self { lanes })
    }

    /// Returns whether `id` names a configured lane.
    #[must_use]
    pub fn contains(&self, id: &LaneId) -> bool {
        self.get(id).is_some()
    }

    /// Looks up a lane by identifier.
    #[must_use]
    pub fn get(&self, id: &LaneId) -> Option<&Lane> {
        self.lanes.iter().find(|lane| lane.id() == id)
    }

    /// Looks up a lane, failing for identifiers outside the set.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::UnknownLane`] when `id` is not configured.
    pub fn require(&self, id: &LaneId) -> Result<&Lane, BoardDomainError> {
        self.get(id)
            .ok_or_else(|| BoardDomainError::UnknownLane(id.clone()))
    }

    /// Iterates over lanes in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Lane> {
        self.lanes.iter()
    }

    /// Returns the number of configured lanes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.lanes.len()
    }

    /// Always `false`; a lane set holds at least one lane.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }
}
