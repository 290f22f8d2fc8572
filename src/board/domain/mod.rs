//! Domain model for the card board.
//!
//! Everything here is pure: values, the copy-on-write store, lane
//! projections, the insertion-point locator, the drag state machine and the
//! reorder commit. Coordination lives in the service layer.

mod card;
mod error;
mod ids;
mod lane;
mod locator;
mod projection;
mod reorder;
mod session;
mod store;

pub use card::{Card, CardTitle};
pub use error::BoardDomainError;
pub use ids::{CardId, LaneId};
pub use lane::{Lane, LaneSet};
pub use locator::{CardAnchor, locate_insertion_index};
pub use projection::{lane_index_of, lane_len, lane_view};
pub use reorder::{ReorderOutcome, commit_reorder};
pub use session::{ActiveDrag, DragSession, DropTarget};
pub use store::CardStore;
