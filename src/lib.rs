//! Laneboard: the reorder engine behind a drag-and-drop task board.
//!
//! Cards live in one ordered store and are grouped into lanes by their own
//! `column` field. The engine tracks a drag in flight, locates the insertion
//! point under the pointer from measured card midpoints and commits moves and
//! discards as whole-store replacements. Rendering, text input and gesture
//! capture stay outside the crate behind small ports.
//!
//! # Architecture
//!
//! - **Domain**: pure values and algorithms with no I/O
//! - **Ports**: traits and event types for the external collaborators
//! - **Adapters**: id generators, an in-memory frame recorder and the async
//!   input pump
//! - **Services**: the board coordinator
//!
//! # Modules
//!
//! - [`board`]: the board engine

pub mod board;
