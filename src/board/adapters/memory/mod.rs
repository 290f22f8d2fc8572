//! In-memory adapters.

mod recorder;

pub use recorder::FrameRecorder;
