//! Port contracts for the board engine.
//!
//! Ports define the collaborators the engine talks to without depending on
//! any concrete renderer or id source.

pub mod id_generator;
pub mod input;
pub mod render;

pub use id_generator::CardIdGenerator;
pub use input::InputEvent;
pub use render::{BoardFrame, LaneFrame, RenderSink};
