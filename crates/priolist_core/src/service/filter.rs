//! Todo list filters.
//!
//! # Responsibility
//! - Model the aggregate views ("all", "today", ...) and single-project view
//!   as one tagged variant.
//! - Parse the keyword-or-project-id form used by command surfaces.

use crate::model::project::{Project, ProjectId};
use crate::model::todo::Todo;
use chrono::{Local, NaiveDate};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Which todos a list view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Filter {
    All,
    Today,
    ThisWeek,
    Completed,
    ByProject(ProjectId),
}

impl Filter {
    /// Returns whether `todo` in `project` is part of this view on `today`.
    pub fn matches(&self, project: &Project, todo: &Todo, today: NaiveDate) -> bool {
        match self {
            Self::All => true,
            Self::Today => todo.is_due_today(today),
            Self::ThisWeek => todo.is_due_this_week(today),
            Self::Completed => todo.completed,
            Self::ByProject(project_id) => project.id == *project_id,
        }
    }
}

impl Display for Filter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Today => f.write_str("today"),
            Self::ThisWeek => f.write_str("thisWeek"),
            Self::Completed => f.write_str("completed"),
            Self::ByProject(id) => write!(f, "{id}"),
        }
    }
}

impl FromStr for Filter {
    type Err = ParseFilterError;

    /// Keywords win; anything else must be a project ID.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        match trimmed {
            "all" => Ok(Self::All),
            "today" => Ok(Self::Today),
            "thisWeek" | "this_week" | "week" => Ok(Self::ThisWeek),
            "completed" => Ok(Self::Completed),
            other => Uuid::parse_str(other)
                .map(Self::ByProject)
                .map_err(|_| ParseFilterError(other.to_string())),
        }
    }
}

/// Filter parse error carrying the rejected input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFilterError(pub String);

impl Display for ParseFilterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown filter `{}`; expected all|today|thisWeek|completed or a project id",
            self.0
        )
    }
}

impl Error for ParseFilterError {}

/// Current calendar date in the local time zone.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::Filter;
    use uuid::Uuid;

    #[test]
    fn keywords_parse_to_aggregate_views() {
        assert_eq!("all".parse::<Filter>().unwrap(), Filter::All);
        assert_eq!("today".parse::<Filter>().unwrap(), Filter::Today);
        assert_eq!("thisWeek".parse::<Filter>().unwrap(), Filter::ThisWeek);
        assert_eq!("week".parse::<Filter>().unwrap(), Filter::ThisWeek);
        assert_eq!("completed".parse::<Filter>().unwrap(), Filter::Completed);
    }

    #[test]
    fn other_values_parse_as_project_id() {
        let id = Uuid::new_v4();
        assert_eq!(
            id.to_string().parse::<Filter>().unwrap(),
            Filter::ByProject(id)
        );
        assert!("inbox".parse::<Filter>().is_err());
    }

    #[test]
    fn display_roundtrips_through_from_str() {
        let id = Uuid::new_v4();
        for filter in [
            Filter::All,
            Filter::Today,
            Filter::ThisWeek,
            Filter::Completed,
            Filter::ByProject(id),
        ] {
            assert_eq!(filter.to_string().parse::<Filter>().unwrap(), filter);
        }
    }
}
