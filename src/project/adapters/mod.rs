//! Adapter implementations for project and template ports.

pub mod memory;
pub mod postgres;
