//! Whole-collection project persistence.
//!
//! # Responsibility
//! - Read and write the full project list as one JSON blob entry.
//! - Provide add/update/remove keyed by project identity.
//!
//! # Invariants
//! - A blob that fails to parse is treated as an empty collection.
//! - Backend failures propagate; they are never masked as empty data.
//! - Update/remove with an unknown ID leave the stored blob untouched.

use crate::model::project::{Project, ProjectId};
use crate::repo::kv_store::{KeyValueStore, StoreResult};
use log::{debug, warn};

/// Key of the blob entry holding all projects.
pub const DEFAULT_STORAGE_KEY: &str = "projects";

/// Durable collection of all projects.
pub struct ProjectStore<S: KeyValueStore> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> ProjectStore<S> {
    /// Creates a store using `DEFAULT_STORAGE_KEY`.
    pub fn new(backend: S) -> Self {
        Self::with_key(backend, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Returns all stored projects, or an empty list when nothing is stored
    /// or the stored blob is malformed.
    pub fn get_projects(&self) -> StoreResult<Vec<Project>> {
        let Some(raw) = self.backend.get(&self.key)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<Project>>(&raw) {
            Ok(projects) => Ok(projects),
            Err(err) => {
                warn!(
                    "event=projects_load module=repo status=recovered key={} error_code=malformed_blob error={}",
                    self.key, err
                );
                Ok(Vec::new())
            }
        }
    }

    /// Replaces the full stored collection with a single write.
    pub fn save_projects(&self, projects: &[Project]) -> StoreResult<()> {
        let raw = serde_json::to_string(projects)?;
        self.backend.set(&self.key, &raw)?;
        debug!(
            "event=projects_save module=repo status=ok key={} project_count={}",
            self.key,
            projects.len()
        );
        Ok(())
    }

    pub fn add_project(&self, project: Project) -> StoreResult<()> {
        let mut projects = self.get_projects()?;
        projects.push(project);
        self.save_projects(&projects)
    }

    /// Replaces the stored project with the same ID.
    ///
    /// Returns `Ok(false)` and writes nothing when the ID is unknown.
    pub fn update_project(&self, updated: &Project) -> StoreResult<bool> {
        let mut projects = self.get_projects()?;
        let Some(slot) = projects.iter_mut().find(|p| p.id == updated.id) else {
            return Ok(false);
        };
        *slot = updated.clone();
        self.save_projects(&projects)?;
        Ok(true)
    }

    /// Removes the project with `project_id`.
    ///
    /// Returns `Ok(false)` and writes nothing when the ID is unknown.
    pub fn remove_project(&self, project_id: ProjectId) -> StoreResult<bool> {
        let mut projects = self.get_projects()?;
        let before = projects.len();
        projects.retain(|p| p.id != project_id);
        if projects.len() == before {
            return Ok(false);
        }
        self.save_projects(&projects)?;
        Ok(true)
    }
}
