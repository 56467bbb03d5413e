//! Domain model for projects and their todo items.
//!
//! # Responsibility
//! - Define the records persisted in the project blob.
//! - Keep entity-level list operations (add/remove/find) next to the data.
//!
//! # Invariants
//! - Every project and todo is identified by a random UUID v4.
//! - A todo belongs to exactly one project; membership is list containment.

pub mod project;
pub mod todo;
