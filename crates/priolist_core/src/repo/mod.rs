//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the key-value backend contract the project blob lives in.
//! - Provide whole-collection project persistence over that backend.
//!
//! # Invariants
//! - Every project write is a full read-modify-write of one blob entry.
//! - Missing IDs on update/remove are silent no-ops, not errors.

pub mod kv_store;
pub mod project_store;
