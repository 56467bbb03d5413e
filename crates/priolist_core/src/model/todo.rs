//! Todo domain model.
//!
//! # Responsibility
//! - Define the todo record nested inside a project.
//! - Provide due-date classification helpers used by list filters.
//!
//! # Invariants
//! - `id` and `created_at` are fixed at construction.
//! - `project_id` mirrors the project whose list contains the todo.

use crate::model::project::ProjectId;
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Stable identifier of a todo item.
pub type TodoId = Uuid;

const DUE_DATE_DISPLAY_FORMAT: &str = "%b %d, %Y";

/// Todo priority level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Stable string id used in the persisted blob.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ParsePriorityError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParsePriorityError(value.to_string())),
        }
    }
}

/// Priority parse error carrying the rejected input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePriorityError(pub String);

impl Display for ParsePriorityError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported priority `{}`; expected low|medium|high",
            self.0
        )
    }
}

impl Error for ParsePriorityError {}

/// A single task with due date, priority and completion state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub description: String,
    /// Serialized as ISO-8601 `YYYY-MM-DD`.
    pub due_date: NaiveDate,
    pub priority: Priority,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub important: bool,
    pub created_at: DateTime<Utc>,
    pub project_id: ProjectId,
}

impl Todo {
    /// Creates a todo with a generated ID and the current UTC timestamp.
    ///
    /// `completed` and `important` start as `false`.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: NaiveDate,
        priority: Priority,
        project_id: ProjectId,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            due_date,
            priority,
            completed: false,
            important: false,
            created_at: Utc::now(),
            project_id,
        }
    }

    /// Returns whether the due date falls on `today`.
    pub fn is_due_today(&self, today: NaiveDate) -> bool {
        self.due_date == today
    }

    /// Returns whether the due date falls in the Sunday-based week of `today`.
    pub fn is_due_this_week(&self, today: NaiveDate) -> bool {
        let (start, end) = week_bounds(today);
        start <= self.due_date && self.due_date <= end
    }

    /// Formats the due date for display, e.g. `Oct 15, 2026`.
    pub fn formatted_due_date(&self) -> String {
        self.due_date.format(DUE_DATE_DISPLAY_FORMAT).to_string()
    }
}

/// Returns the inclusive Sunday..=Saturday window containing `day`.
pub fn week_bounds(day: NaiveDate) -> (NaiveDate, NaiveDate) {
    let offset = i64::from(day.weekday().num_days_from_sunday());
    let start = day - Duration::days(offset);
    (start, start + Duration::days(6))
}
