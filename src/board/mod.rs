//! Kanban board management for Atelier.
//!
//! This module owns a project's board: the ordered stage columns, the tasks
//! they contain, the position invariants between them, and the drag-and-drop
//! mutation protocol that moves tasks within and across stages. It also
//! provides the pure aggregate derivations (progress, overdue and blocked
//! counts) the dashboards compute over a board snapshot. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
