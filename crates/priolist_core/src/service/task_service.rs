//! Task use-case service.
//!
//! # Responsibility
//! - Expose the read/write API the view layer drives after each user action.
//! - Compute aggregate views by walking all stored projects.
//!
//! # Invariants
//! - Every write persists before returning, so callers can re-read at once.
//! - Each write performs at most one store save.
//! - Unknown project/todo IDs are silent no-ops (`false` / `None`).
//! - Names and titles are trimmed and must not be blank.

use crate::model::project::{Project, ProjectId};
use crate::model::todo::{Priority, Todo, TodoId};
use crate::repo::kv_store::{KeyValueStore, StoreError};
use crate::repo::project_store::ProjectStore;
use crate::service::filter::{today_local, Filter};
use chrono::{Duration, NaiveDate};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

const SEED_PROJECT_NAME: &str = "Getting Started";

pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Errors from task service operations.
#[derive(Debug)]
pub enum TaskServiceError {
    /// Required text field is blank after trim.
    InvalidInput(&'static str),
    /// Persistence-layer failure.
    Store(StoreError),
}

impl Display for TaskServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(field) => write!(f, "{field} must not be blank"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for TaskServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::InvalidInput(_) => None,
        }
    }
}

impl From<StoreError> for TaskServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Request model for creating or editing a todo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoDraft {
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
    pub priority: Priority,
    /// Project the todo should live in after the write.
    pub project_id: ProjectId,
}

/// Todo row for list views, annotated with its owning project's name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoListItem {
    pub todo: Todo,
    pub project_name: String,
}

/// Per-project todo count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCount {
    pub project_id: ProjectId,
    pub name: String,
    pub count: usize,
}

/// Sidebar counters for every aggregate view and project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskCounts {
    pub all: usize,
    pub today: usize,
    pub this_week: usize,
    pub completed: usize,
    /// In stored project order.
    pub per_project: Vec<ProjectCount>,
}

/// Collaborator API over an injected project store.
pub struct TaskService<S: KeyValueStore> {
    store: ProjectStore<S>,
}

impl<S: KeyValueStore> TaskService<S> {
    pub fn new(store: ProjectStore<S>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &ProjectStore<S> {
        &self.store
    }

    /// Lists stored projects in stored order.
    pub fn list_projects(&self) -> TaskServiceResult<Vec<Project>> {
        Ok(self.store.get_projects()?)
    }

    /// Lists todos for `filter` using the local calendar date.
    pub fn list_todos(&self, filter: Filter) -> TaskServiceResult<Vec<TodoListItem>> {
        self.list_todos_on(filter, today_local())
    }

    /// Lists todos for `filter` relative to `today`.
    ///
    /// Items follow project order, then insertion order inside each project.
    /// An unknown project ID yields an empty list.
    pub fn list_todos_on(
        &self,
        filter: Filter,
        today: NaiveDate,
    ) -> TaskServiceResult<Vec<TodoListItem>> {
        let projects = self.store.get_projects()?;
        let items = projects
            .iter()
            .flat_map(|project| {
                project
                    .todos
                    .iter()
                    .filter(move |todo| filter.matches(project, todo, today))
                    .map(move |todo| TodoListItem {
                        todo: todo.clone(),
                        project_name: project.name.clone(),
                    })
            })
            .collect();
        Ok(items)
    }

    /// Finds one todo across all projects.
    pub fn get_todo(&self, todo_id: TodoId) -> TaskServiceResult<Option<TodoListItem>> {
        let projects = self.store.get_projects()?;
        Ok(projects.iter().find_map(|project| {
            project.get_todo(todo_id).map(|todo| TodoListItem {
                todo: todo.clone(),
                project_name: project.name.clone(),
            })
        }))
    }

    pub fn task_counts(&self) -> TaskServiceResult<TaskCounts> {
        self.task_counts_on(today_local())
    }

    /// Counts todos per aggregate view relative to `today`, and per project.
    pub fn task_counts_on(&self, today: NaiveDate) -> TaskServiceResult<TaskCounts> {
        let projects = self.store.get_projects()?;
        let mut counts = TaskCounts::default();
        for project in &projects {
            for todo in &project.todos {
                counts.all += 1;
                counts.today += usize::from(todo.is_due_today(today));
                counts.this_week += usize::from(todo.is_due_this_week(today));
                counts.completed += usize::from(todo.completed);
            }
            counts.per_project.push(ProjectCount {
                project_id: project.id,
                name: project.name.clone(),
                count: project.todos.len(),
            });
        }
        Ok(counts)
    }

    /// Creates and stores a new empty project.
    pub fn create_project(&self, name: &str) -> TaskServiceResult<Project> {
        let name = normalize_required(name, "project name")?;
        let project = Project::new(name);
        self.store.add_project(project.clone())?;
        info!(
            "event=project_create module=service status=ok project_id={}",
            project.id
        );
        Ok(project)
    }

    /// Renames a project. Returns `None` when the project does not exist.
    pub fn rename_project(
        &self,
        project_id: ProjectId,
        name: &str,
    ) -> TaskServiceResult<Option<Project>> {
        let name = normalize_required(name, "project name")?;
        let mut projects = self.store.get_projects()?;
        let Some(project) = projects.iter_mut().find(|p| p.id == project_id) else {
            return Ok(None);
        };
        project.name = name;
        let renamed = project.clone();
        self.store.save_projects(&projects)?;
        Ok(Some(renamed))
    }

    /// Writes `project` over its stored record; `false` when unknown.
    pub fn update_project(&self, project: &Project) -> TaskServiceResult<bool> {
        Ok(project.update_in(&self.store)?)
    }

    /// Deletes a project together with its todos; `false` when unknown.
    pub fn delete_project(&self, project_id: ProjectId) -> TaskServiceResult<bool> {
        let removed = self.store.remove_project(project_id)?;
        if removed {
            info!("event=project_delete module=service status=ok project_id={project_id}");
        }
        Ok(removed)
    }

    /// Creates a todo, or edits the todo `existing_id` and moves it into
    /// `draft.project_id`.
    ///
    /// Editing keeps `completed`, `important` and `created_at`. Returns `None`
    /// without writing when the target project or the edited todo is unknown.
    pub fn create_or_update_todo(
        &self,
        draft: &TodoDraft,
        existing_id: Option<TodoId>,
    ) -> TaskServiceResult<Option<Todo>> {
        let title = normalize_required(&draft.title, "todo title")?;
        let mut projects = self.store.get_projects()?;
        let Some(target) = projects.iter().position(|p| p.id == draft.project_id) else {
            return Ok(None);
        };

        let todo = match existing_id {
            Some(todo_id) => {
                let Some(mut todo) = take_todo(&mut projects, todo_id) else {
                    return Ok(None);
                };
                todo.title = title;
                todo.description = draft.description.clone();
                todo.due_date = draft.due_date;
                todo.priority = draft.priority;
                todo.project_id = draft.project_id;
                todo
            }
            None => Todo::new(
                title,
                draft.description.clone(),
                draft.due_date,
                draft.priority,
                draft.project_id,
            ),
        };

        projects[target].add_todo(todo.clone());
        self.store.save_projects(&projects)?;
        info!(
            "event=todo_save module=service status=ok mode={} todo_id={} project_id={}",
            if existing_id.is_some() { "update" } else { "create" },
            todo.id,
            todo.project_id
        );
        Ok(Some(todo))
    }

    /// Deletes a todo from whichever project holds it; `false` when unknown.
    pub fn delete_todo(&self, todo_id: TodoId) -> TaskServiceResult<bool> {
        let mut projects = self.store.get_projects()?;
        if take_todo(&mut projects, todo_id).is_none() {
            return Ok(false);
        }
        self.store.save_projects(&projects)?;
        info!("event=todo_delete module=service status=ok todo_id={todo_id}");
        Ok(true)
    }

    pub fn set_todo_completed(&self, todo_id: TodoId, completed: bool) -> TaskServiceResult<bool> {
        self.modify_todo(todo_id, |todo| todo.completed = completed)
    }

    pub fn set_todo_important(&self, todo_id: TodoId, important: bool) -> TaskServiceResult<bool> {
        self.modify_todo(todo_id, |todo| todo.important = important)
    }

    /// Stores a starter project with two example todos when the store is
    /// empty. Returns whether anything was written.
    pub fn seed_if_empty(&self, today: NaiveDate) -> TaskServiceResult<bool> {
        if !self.store.get_projects()?.is_empty() {
            return Ok(false);
        }

        let mut project = Project::new(SEED_PROJECT_NAME);
        project.add_todo(Todo::new(
            "Welcome to Prio-List!",
            "This is an example task to help you get started. Try checking it off, editing it, or deleting it!",
            today,
            Priority::High,
            project.id,
        ));
        project.add_todo(Todo::new(
            "Try These Features",
            "1. Create a new project\n2. Add tasks with different priorities\n3. Check completed tasks\n4. View tasks by date\n5. Delete or edit tasks",
            today + Duration::days(1),
            Priority::Medium,
            project.id,
        ));
        let project_id = project.id;
        self.store.save_projects(&[project])?;
        info!("event=store_seed module=service status=ok project_id={project_id}");
        Ok(true)
    }

    fn modify_todo(
        &self,
        todo_id: TodoId,
        apply: impl FnOnce(&mut Todo),
    ) -> TaskServiceResult<bool> {
        let mut projects = self.store.get_projects()?;
        let Some(todo) = projects
            .iter_mut()
            .find_map(|project| project.get_todo_mut(todo_id))
        else {
            return Ok(false);
        };
        apply(todo);
        self.store.save_projects(&projects)?;
        Ok(true)
    }
}

/// Removes the todo from the first project holding it.
fn take_todo(projects: &mut [Project], todo_id: TodoId) -> Option<Todo> {
    projects.iter_mut().find_map(|project| {
        let todo = project.get_todo(todo_id).cloned()?;
        project.remove_todo(todo_id);
        Some(todo)
    })
}

fn normalize_required(value: &str, field: &'static str) -> TaskServiceResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TaskServiceError::InvalidInput(field));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::normalize_required;

    #[test]
    fn normalize_required_trims_and_rejects_blank() {
        assert_eq!(normalize_required("  Work ", "name").unwrap(), "Work");
        let err = normalize_required(" \t", "project name").unwrap_err();
        assert_eq!(err.to_string(), "project name must not be blank");
    }
}
