//! Drag session state machine.

use super::{CardId, LaneId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Something a card can be dropped onto.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "lane", rename_all = "snake_case")]
pub enum DropTarget {
    /// A regular lane; dropping reorders.
    Lane(LaneId),
    /// The discard target; dropping deletes.
    Discard,
}

impl DropTarget {
    /// Returns the lane for lane targets.
    #[must_use]
    pub const fn lane(&self) -> Option<&LaneId> {
        match self {
            Self::Lane(lane) => Some(lane),
            Self::Discard => None,
        }
    }
}

impl fmt::Display for DropTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lane(lane) => write!(f, "lane {lane}"),
            Self::Discard => f.write_str("discard"),
        }
    }
}

/// A drag gesture in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveDrag {
    card_id: CardId,
    origin_lane: LaneId,
    hovered: Option<DropTarget>,
    insertion: Option<usize>,
}

impl ActiveDrag {
    /// Returns the dragged card.
    #[must_use]
    pub const fn card_id(&self) -> &CardId {
        &self.card_id
    }

    /// Returns the lane the card was picked up from.
    #[must_use]
    pub const fn origin_lane(&self) -> &LaneId {
        &self.origin_lane
    }

    /// Returns the currently highlighted drop target.
    #[must_use]
    pub const fn hovered(&self) -> Option<&DropTarget> {
        self.hovered.as_ref()
    }

    /// Returns the last located insertion index for the hovered lane.
    #[must_use]
    pub const fn insertion(&self) -> Option<usize> {
        self.insertion
    }

    /// Returns the insertion index recorded for `lane`, if it is the
    /// hovered lane.
    #[must_use]
    pub fn insertion_for(&self, lane: &LaneId) -> Option<usize> {
        match &self.hovered {
            Some(DropTarget::Lane(hovered)) if hovered == lane => self.insertion,
            _ => None,
        }
    }
}

/// Ephemeral drag state owned by the board coordinator.
///
/// ```text
/// Idle --begin--> Dragging --finish/cancel--> Idle
///                 Dragging --begin--> Dragging (replaced)
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragSession {
    /// No card is being dragged.
    #[default]
    Idle,
    /// A card is being dragged.
    Dragging(ActiveDrag),
}

impl DragSession {
    /// Starts dragging `card_id`, replacing any drag already in flight.
    ///
    /// Returns the replaced drag, if there was one.
    pub fn begin(&mut self, card_id: CardId, origin_lane: LaneId) -> Option<ActiveDrag> {
        let previous = self.take();
        *self = Self::Dragging(ActiveDrag {
            card_id,
            origin_lane,
            hovered: None,
            insertion: None,
        });
        previous
    }

    /// Records the hovered target and its located insertion index.
    ///
    /// Returns `false` while idle, in which case nothing changes.
    pub fn hover(&mut self, target: DropTarget, insertion: Option<usize>) -> bool {
        match self {
            Self::Idle => false,
            Self::Dragging(active) => {
                active.hovered = Some(target);
                active.insertion = insertion;
                true
            }
        }
    }

    /// Clears the highlight when the pointer leaves `target`.
    ///
    /// Leaving a target other than the hovered one is ignored, since enter
    /// and leave events of neighbouring targets may interleave.
    pub fn leave(&mut self, target: &DropTarget) -> bool {
        match self {
            Self::Dragging(active) if active.hovered.as_ref() == Some(target) => {
                active.hovered = None;
                active.insertion = None;
                true
            }
            _ => false,
        }
    }

    /// Ends the drag for a drop, returning it.
    pub fn finish(&mut self) -> Option<ActiveDrag> {
        self.take()
    }

    /// Abandons the drag, returning it.
    pub fn cancel(&mut self) -> Option<ActiveDrag> {
        self.take()
    }

    /// Returns the active drag.
    #[must_use]
    pub const fn active(&self) -> Option<&ActiveDrag> {
        match self {
            Self::Idle => None,
            Self::Dragging(active) => Some(active),
        }
    }

    /// Returns the dragged card.
    #[must_use]
    pub const fn dragged_card(&self) -> Option<&CardId> {
        match self {
            Self::Idle => None,
            Self::Dragging(active) => Some(&active.card_id),
        }
    }

    /// Returns whether a drag is in flight.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    /// Returns whether `target` is currently highlighted.
    #[must_use]
    pub fn is_hovered(&self, target: &DropTarget) -> bool {
        self.active()
            .is_some_and(|active| active.hovered.as_ref() == Some(target))
    }

    fn take(&mut self) -> Option<ActiveDrag> {
        match std::mem::take(self) {
            Self::Idle => None,
            Self::Dragging(active) => Some(active),
        }
    }
}
