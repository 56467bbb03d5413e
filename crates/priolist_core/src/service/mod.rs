//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate project store calls into the view-layer collaborator API.
//! - Keep CLI/view callers decoupled from persistence details.

pub mod filter;
pub mod task_service;
