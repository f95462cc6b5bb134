//! Project management with template-driven board setup.
//!
//! Follows the hexagonal layout: `domain` holds the project aggregate and
//! the read-only workflow template model, `ports` defines repository
//! traits, `adapters` provides in-memory and `PostgreSQL` implementations,
//! and `services` orchestrates creation, template instantiation, and
//! lifecycle changes. Board structure itself lives in [`crate::board`];
//! this module only seeds it.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
