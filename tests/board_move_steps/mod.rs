//! Step definitions and shared world for board movement scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
