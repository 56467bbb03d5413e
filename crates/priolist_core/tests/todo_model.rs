use chrono::NaiveDate;
use priolist_core::{Priority, Project, Todo};
use std::collections::HashSet;
use uuid::Uuid;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn todo_new_sets_defaults() {
    let project = Project::new("Work");
    let todo = Todo::new("Ship", "release v1", date(2026, 10, 15), Priority::High, project.id);

    assert!(!todo.id.is_nil());
    assert_eq!(todo.title, "Ship");
    assert_eq!(todo.description, "release v1");
    assert_eq!(todo.priority, Priority::High);
    assert_eq!(todo.project_id, project.id);
    assert!(!todo.completed);
    assert!(!todo.important);
}

#[test]
fn project_new_is_empty_and_not_default() {
    let project = Project::new("Work");
    assert!(!project.id.is_nil());
    assert!(project.todos.is_empty());
    assert!(!project.is_default);
}

#[test]
fn generated_ids_are_unique() {
    let project_id = Uuid::new_v4();
    let mut seen = HashSet::new();
    for _ in 0..10_000 {
        let todo = Todo::new("t", "", date(2026, 1, 1), Priority::Low, project_id);
        assert!(seen.insert(todo.id));
        assert!(seen.insert(Project::new("p").id));
    }
    assert_eq!(seen.len(), 20_000);
}

#[test]
fn due_date_windows_follow_calendar() {
    let today = date(2026, 10, 15);
    let project_id = Uuid::new_v4();
    let at = |due| Todo::new("t", "", due, Priority::Medium, project_id);

    let due_today = at(today);
    assert!(due_today.is_due_today(today));
    assert!(due_today.is_due_this_week(today));

    let next_week = at(date(2026, 10, 23));
    assert!(!next_week.is_due_today(today));
    assert!(!next_week.is_due_this_week(today));

    let last_year = at(date(2025, 10, 15));
    assert!(!last_year.is_due_today(today));
    assert!(!last_year.is_due_this_week(today));

    let saturday = at(date(2026, 10, 17));
    assert!(saturday.is_due_this_week(today));
    let next_sunday = at(date(2026, 10, 18));
    assert!(!next_sunday.is_due_this_week(today));
}

#[test]
fn todo_serialization_uses_expected_wire_fields() {
    let project_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let mut todo = Todo::new("Ship", "notes", date(2026, 10, 15), Priority::Medium, project_id);
    todo.important = true;

    let json = serde_json::to_value(&todo).unwrap();
    assert_eq!(json["id"], todo.id.to_string());
    assert_eq!(json["dueDate"], "2026-10-15");
    assert_eq!(json["priority"], "medium");
    assert_eq!(json["completed"], false);
    assert_eq!(json["important"], true);
    assert_eq!(json["projectId"], "11111111-2222-4333-8444-555555555555");

    let decoded: Todo = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, todo);
}

#[test]
fn missing_flags_deserialize_as_false() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "title": "legacy",
        "description": "",
        "dueDate": "2026-10-15",
        "priority": "low",
        "createdAt": "2026-10-01T08:00:00Z",
        "projectId": "11111111-2222-4333-8444-666666666666"
    });

    let todo: Todo = serde_json::from_value(value).unwrap();
    assert!(!todo.completed);
    assert!(!todo.important);
}

#[test]
fn unknown_priority_is_rejected_on_deserialize() {
    let value = serde_json::json!("urgent");
    assert!(serde_json::from_value::<Priority>(value).is_err());
}
