//! Project domain model.
//!
//! # Responsibility
//! - Define the named bucket that owns an ordered list of todos.
//! - Provide in-place todo list operations for one project.
//!
//! # Invariants
//! - `id` is unique across the store and never reused.
//! - `todos` order is insertion order, which is also display order.
//! - Aggregate views ("all", "today", ...) are never stored as projects.

use crate::model::todo::{Todo, TodoId};
use crate::repo::kv_store::{KeyValueStore, StoreResult};
use crate::repo::project_store::ProjectStore;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of a project.
pub type ProjectId = Uuid;

/// Named bucket of todos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    #[serde(default)]
    pub todos: Vec<Todo>,
    #[serde(default)]
    pub is_default: bool,
}

impl Project {
    /// Creates an empty, non-default project with a generated ID.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            todos: Vec::new(),
            is_default: false,
        }
    }

    /// Appends a todo. Duplicate IDs are not checked.
    pub fn add_todo(&mut self, todo: Todo) {
        self.todos.push(todo);
    }

    /// Removes every todo with `todo_id`, returning whether any was removed.
    pub fn remove_todo(&mut self, todo_id: TodoId) -> bool {
        let before = self.todos.len();
        self.todos.retain(|todo| todo.id != todo_id);
        self.todos.len() != before
    }

    pub fn get_todo(&self, todo_id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == todo_id)
    }

    pub fn get_todo_mut(&mut self, todo_id: TodoId) -> Option<&mut Todo> {
        self.todos.iter_mut().find(|todo| todo.id == todo_id)
    }

    /// Writes this project over its stored record.
    ///
    /// Returns `Ok(false)` without touching the store when no record with
    /// this ID exists.
    pub fn update_in<S: KeyValueStore>(&self, store: &ProjectStore<S>) -> StoreResult<bool> {
        store.update_project(self)
    }
}

#[cfg(test)]
mod tests {
    use super::Project;
    use crate::model::todo::{Priority, Todo};
    use chrono::NaiveDate;

    fn todo_for(project: &Project, title: &str) -> Todo {
        let due = NaiveDate::from_ymd_opt(2026, 10, 15).expect("valid date");
        Todo::new(title, "", due, Priority::Medium, project.id)
    }

    #[test]
    fn add_todo_keeps_insertion_order() {
        let mut project = Project::new("Work");
        let first = todo_for(&project, "first");
        let second = todo_for(&project, "second");
        project.add_todo(first.clone());
        project.add_todo(second.clone());

        let titles: Vec<_> = project.todos.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second"]);
    }

    #[test]
    fn remove_then_get_returns_none() {
        let mut project = Project::new("Work");
        let todo = todo_for(&project, "ship");
        let id = todo.id;
        project.add_todo(todo);

        assert!(project.get_todo(id).is_some());
        assert!(project.remove_todo(id));
        assert!(project.get_todo(id).is_none());
        assert!(!project.remove_todo(id));
    }

    #[test]
    fn add_todo_does_not_deduplicate() {
        let mut project = Project::new("Work");
        let todo = todo_for(&project, "twice");
        project.add_todo(todo.clone());
        project.add_todo(todo.clone());
        assert_eq!(project.todos.len(), 2);

        project.remove_todo(todo.id);
        assert!(project.todos.is_empty());
    }
}
