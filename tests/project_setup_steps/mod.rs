//! Step definitions and shared world for project setup scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
