//! Render sink that keeps every frame it receives.

use crate::board::ports::{BoardFrame, RenderSink};
use std::sync::{Arc, Mutex};

/// Records rendered frames in memory.
///
/// Clones share the same history, so a test can keep one handle and give the
/// other to the board.
#[derive(Debug, Clone, Default)]
pub struct FrameRecorder {
    frames: Arc<Mutex<Vec<BoardFrame>>>,
}

impl FrameRecorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all frames received so far.
    #[must_use]
    pub fn frames(&self) -> Vec<BoardFrame> {
        self.frames
            .lock()
            .map(|frames| frames.clone())
            .unwrap_or_default()
    }

    /// Returns the most recent frame.
    #[must_use]
    pub fn last(&self) -> Option<BoardFrame> {
        self.frames
            .lock()
            .ok()
            .and_then(|frames| frames.last().cloned())
    }

    /// Returns the number of frames received.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.lock().map(|frames| frames.len()).unwrap_or_default()
    }

    /// Returns whether no frame has been received.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RenderSink for FrameRecorder {
    fn render(&self, frame: &BoardFrame) {
        match self.frames.lock() {
            Ok(mut frames) => frames.push(frame.clone()),
            Err(err) => tracing::warn!(error = %err, "frame recorder lock poisoned"),
        }
    }
}
