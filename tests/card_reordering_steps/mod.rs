//! Step definitions for card reordering scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
