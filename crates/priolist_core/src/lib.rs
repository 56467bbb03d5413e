//! Core data layer for Prio-List.
//! Projects and their todos, persisted as one blob in a key-value store.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::AppConfig;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::project::{Project, ProjectId};
pub use model::todo::{ParsePriorityError, Priority, Todo, TodoId};
pub use repo::kv_store::{
    KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore, StoreError, StoreResult,
};
pub use repo::project_store::{ProjectStore, DEFAULT_STORAGE_KEY};
pub use service::filter::{today_local, Filter, ParseFilterError};
pub use service::task_service::{
    ProjectCount, TaskCounts, TaskService, TaskServiceError, TaskServiceResult, TodoDraft,
    TodoListItem,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
