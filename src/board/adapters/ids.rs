//! Card identifier generators.

use crate::board::{domain::CardId, ports::CardIdGenerator};
use std::sync::atomic::{AtomicU64, Ordering};

/// Generates random v4 UUID identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidCardIdGenerator;

impl CardIdGenerator for UuidCardIdGenerator {
    fn next_id(&self) -> CardId {
        CardId::random()
    }
}

/// Generates `"{prefix}-{n}"` identifiers from a monotonically increasing
/// counter. Deterministic, so useful for tests and demos.
#[derive(Debug)]
pub struct SequentialCardIdGenerator {
    prefix: String,
    next: AtomicU64,
}

impl SequentialCardIdGenerator {
    /// Creates a generator whose first identifier is `"{prefix}-1"`.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl Default for SequentialCardIdGenerator {
    fn default() -> Self {
        Self::new("card")
    }
}

impl CardIdGenerator for SequentialCardIdGenerator {
    fn next_id(&self) -> CardId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        CardId::new(format!("{}-{n}", self.prefix)).unwrap_or_else(|_| CardId::random())
    }
}
