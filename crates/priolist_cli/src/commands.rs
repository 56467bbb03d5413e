//! CLI argument model and command dispatch.

use anyhow::{bail, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use priolist_core::{
    today_local, AppConfig, Filter, KeyValueStore, Priority, ProjectId, TaskService, TodoDraft,
    TodoId, TodoListItem,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "priolist", version, about = "Projects and prioritized todos")]
pub struct Cli {
    /// Directory holding the database and logs
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Key of the project collection inside the store
    #[arg(long, global = true)]
    pub storage_key: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Applies command-line overrides on top of environment config.
    pub fn resolve_config(&self, mut config: AppConfig) -> Result<AppConfig> {
        if let Some(dir) = &self.data_dir {
            config.data_dir = dir.clone();
        }
        if let Some(key) = &self.storage_key {
            if key.trim().is_empty() {
                bail!("--storage-key must not be blank");
            }
            config.storage_key = key.trim().to_string();
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
        Ok(config)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List projects
    Projects,

    /// Create a project
    AddProject {
        name: String,
    },

    /// Rename a project
    RenameProject {
        project_id: ProjectId,
        name: String,
    },

    /// Delete a project and all of its todos
    DeleteProject {
        project_id: ProjectId,
    },

    /// List todos: all, today, thisWeek, completed, or a project id
    Todos {
        #[arg(default_value = "all")]
        filter: Filter,
    },

    /// Add a todo to a project
    AddTodo(TodoArgs),

    /// Edit a todo, optionally moving it to another project
    EditTodo {
        todo_id: TodoId,
        #[command(flatten)]
        fields: TodoArgs,
    },

    /// Mark a todo completed
    Complete {
        todo_id: TodoId,
    },

    /// Mark a todo not completed
    Reopen {
        todo_id: TodoId,
    },

    /// Mark a todo important
    Star {
        todo_id: TodoId,
    },

    /// Clear the important flag
    Unstar {
        todo_id: TodoId,
    },

    /// Delete a todo
    DeleteTodo {
        todo_id: TodoId,
    },

    /// Show todo counts per view and project
    Counts,
}

#[derive(Args)]
pub struct TodoArgs {
    /// Owning project id
    #[arg(long)]
    pub project: ProjectId,

    /// Todo title
    #[arg(long)]
    pub title: String,

    #[arg(long, default_value = "")]
    pub description: String,

    /// Due date as YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub due: Option<NaiveDate>,

    /// Priority (low, medium, high)
    #[arg(long, default_value = "medium")]
    pub priority: Priority,
}

impl TodoArgs {
    fn into_draft(self) -> TodoDraft {
        TodoDraft {
            title: self.title,
            description: self.description,
            due_date: self.due.unwrap_or_else(today_local),
            priority: self.priority,
            project_id: self.project,
        }
    }
}

pub fn execute<S: KeyValueStore>(command: Commands, service: &TaskService<S>) -> Result<()> {
    match command {
        Commands::Projects => {
            for project in service.list_projects()? {
                println!("{}  {} ({})", project.id, project.name, project.todos.len());
            }
        }
        Commands::AddProject { name } => {
            let project = service.create_project(&name)?;
            println!("Created project {} ({})", project.name, project.id);
        }
        Commands::RenameProject { project_id, name } => {
            match service.rename_project(project_id, &name)? {
                Some(project) => println!("Renamed project to {}", project.name),
                None => println!("No project {project_id}"),
            }
        }
        Commands::DeleteProject { project_id } => {
            report(service.delete_project(project_id)?, "Deleted project", project_id);
        }
        Commands::Todos { filter } => {
            let items = service.list_todos(filter)?;
            if items.is_empty() {
                println!("No todos.");
            }
            for item in &items {
                print_todo(item);
            }
        }
        Commands::AddTodo(args) => match service.create_or_update_todo(&args.into_draft(), None)? {
            Some(todo) => println!("Created todo {} ({})", todo.title, todo.id),
            None => println!("No such project"),
        },
        Commands::EditTodo { todo_id, fields } => {
            match service.create_or_update_todo(&fields.into_draft(), Some(todo_id))? {
                Some(todo) => println!("Updated todo {} ({})", todo.title, todo.id),
                None => println!("No such todo or project"),
            }
        }
        Commands::Complete { todo_id } => {
            report(service.set_todo_completed(todo_id, true)?, "Completed", todo_id);
        }
        Commands::Reopen { todo_id } => {
            report(service.set_todo_completed(todo_id, false)?, "Reopened", todo_id);
        }
        Commands::Star { todo_id } => {
            report(service.set_todo_important(todo_id, true)?, "Starred", todo_id);
        }
        Commands::Unstar { todo_id } => {
            report(service.set_todo_important(todo_id, false)?, "Unstarred", todo_id);
        }
        Commands::DeleteTodo { todo_id } => {
            report(service.delete_todo(todo_id)?, "Deleted todo", todo_id);
        }
        Commands::Counts => {
            let counts = service.task_counts()?;
            println!("all        {}", counts.all);
            println!("today      {}", counts.today);
            println!("this week  {}", counts.this_week);
            println!("completed  {}", counts.completed);
            for project in &counts.per_project {
                println!("{:<10} {}", project.name, project.count);
            }
        }
    }
    Ok(())
}

fn report(changed: bool, verb: &str, id: uuid::Uuid) {
    if changed {
        println!("{verb} {id}");
    } else {
        println!("Nothing matched {id}");
    }
}

fn print_todo(item: &TodoListItem) {
    let todo = &item.todo;
    println!(
        "[{}] {}{} ({}) - {} - {}  {}",
        if todo.completed { "x" } else { " " },
        if todo.important { "* " } else { "" },
        todo.title,
        todo.priority,
        todo.formatted_due_date(),
        item.project_name,
        todo.id
    );
    if !todo.description.is_empty() {
        println!("      {}", todo.description);
    }
}
