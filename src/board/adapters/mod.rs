//! Adapter implementations of board ports.

pub mod ids;
pub mod input;
pub mod memory;
