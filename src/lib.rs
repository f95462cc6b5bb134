//! Atelier: agency project delivery platform.
//!
//! This crate provides the core functionality for running client projects
//! on Kanban boards: stage and task management, drag-and-drop task
//! movement, and workflow templates that seed a new project's board.
//!
//! # Architecture
//!
//! Atelier follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, APIs, etc.)
//!
//! # Modules
//!
//! - [`board`]: Kanban board state, task lifecycle, and drag-and-drop moves
//! - [`project`]: Project lifecycle and template-driven board setup

pub mod board;
pub mod project;
