//! Card identifier source.

use crate::board::domain::CardId;

/// Supplies fresh card identifiers.
///
/// Implementations must never hand out the same identifier twice for the
/// lifetime of a board; the store rejects collisions rather than repairing
/// them.
pub trait CardIdGenerator: Send + Sync {
    /// Returns an identifier not previously returned by this generator.
    fn next_id(&self) -> CardId;
}
