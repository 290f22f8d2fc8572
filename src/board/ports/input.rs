//! Input events surfaced by the pointer/gesture collaborator.

use crate::board::domain::{CardAnchor, CardId, DropTarget};
use crate::board::services::CreateCardRequest;
use serde::{Deserialize, Serialize};

/// One input event, applied to the board in arrival order.
///
/// Hosts that forward gestures as JSON use the `event` field as the tag:
///
/// ```
/// use laneboard::board::ports::InputEvent;
///
/// let event: InputEvent = serde_json::from_str(
///     r#"{ "event": "drop", "target": { "type": "discard" } }"#,
/// )?;
/// assert!(matches!(event, InputEvent::Drop { .. }));
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum InputEvent {
    /// A drag gesture began on a card.
    DragStart {
        /// Card under the pointer.
        card_id: CardId,
    },
    /// The pointer moved over a drop target.
    DragOver {
        /// Target under the pointer.
        target: DropTarget,
        /// Pointer vertical position, in the same space as the anchors.
        pointer_y: f64,
        /// Measured card midpoints of the hovered lane, in display order.
        anchors: Vec<CardAnchor>,
    },
    /// The pointer left a drop target.
    DragLeave {
        /// Target that was left.
        target: DropTarget,
    },
    /// The card was released over a drop target.
    Drop {
        /// Target under the pointer.
        target: DropTarget,
    },
    /// The gesture was aborted (release outside any target, focus loss).
    Cancel,
    /// The creation collaborator submitted a new card.
    CreateCard(CreateCardRequest),
}
