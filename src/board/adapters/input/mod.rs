//! Async input pump.
//!
//! Input collaborators push [`InputEvent`]s into a `tokio` channel; a single
//! consumer applies them to the board one at a time, so events from one
//! pointer are always applied in the order they were sent.

use crate::board::{
    ports::{CardIdGenerator, InputEvent},
    services::BoardService,
};
use mockable::Clock;
use tokio::sync::mpsc;

/// Creates a bounded input channel.
#[must_use]
pub fn input_channel(capacity: usize) -> (mpsc::Sender<InputEvent>, mpsc::Receiver<InputEvent>) {
    mpsc::channel(capacity.max(1))
}

/// Applies events from `events` until every sender is dropped.
///
/// Returns the number of events applied.
pub async fn run_input_loop<G, C>(
    service: &mut BoardService<G, C>,
    mut events: mpsc::Receiver<InputEvent>,
) -> usize
where
    G: CardIdGenerator,
    C: Clock + Send + Sync,
{
    let mut applied = 0_usize;
    while let Some(event) = events.recv().await {
        let outcome = service.handle(event);
        tracing::trace!(outcome = ?outcome, "input event applied");
        applied += 1;
    }
    tracing::debug!(applied, "input channel closed");
    applied
}
