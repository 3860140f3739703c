//! Drag session state and drop resolution.

use tack_protocol::{Column, Task, TaskId};

/// Whether a task is currently being dragged.
///
/// A session exists only between a drag start and the matching drag end;
/// it holds nothing but the id of the task in flight.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// The task with this id is being dragged.
    Dragging(TaskId),
}

impl DragState {
    /// Returns `true` if a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    /// Returns the id of the task being dragged, if any.
    #[must_use]
    pub fn active_task(&self) -> Option<&TaskId> {
        match self {
            Self::Idle => None,
            Self::Dragging(task) => Some(task),
        }
    }
}

/// Works out the status a drop should write, if any.
///
/// `over` is whatever the pointer was released on. Resolution tries, in
/// order:
///
/// 1. A column whose display name equals `over` exactly: the drop writes
///    that name. Dropping a task on its own column rewrites the value it
///    already has.
/// 2. A task whose id equals `over`: the drop adopts that task's status,
///    but only when it differs from the dragged task's own.
///
/// Anything else, including an `over` naming a task or column that no
/// longer exists, resolves to `None`.
#[must_use]
pub fn resolve_drop(
    tasks: &[Task],
    columns: &[Column],
    active: &TaskId,
    over: &str,
) -> Option<String> {
    if let Some(column) = columns.iter().find(|column| column.name == over) {
        return Some(column.name.clone());
    }

    let dragged = tasks.iter().find(|task| task.id == *active)?;
    let target = tasks.iter().find(|task| task.id.as_str() == over)?;
    if target.status == dragged.status {
        return None;
    }
    Some(target.status.clone())
}

#[cfg(test)]
mod tests {
    use tack_protocol::default_columns;

    use super::*;

    fn task(id: &str, status: &str) -> Task {
        Task::with_id(id, format!("Task {id}"), "work").with_status(status)
    }

    fn board_tasks() -> Vec<Task> {
        vec![
            task("1", "TO DO"),
            task("2", "IN PROGRESS"),
            task("3", "TO DO"),
        ]
    }

    #[test]
    fn drag_state_defaults_to_idle() {
        assert_eq!(DragState::default(), DragState::Idle);
        assert!(!DragState::Idle.is_dragging());
        assert!(DragState::Idle.active_task().is_none());
    }

    #[test]
    fn dragging_exposes_the_active_task() {
        let state = DragState::Dragging(TaskId::from("1"));

        assert!(state.is_dragging());
        assert_eq!(state.active_task().map(TaskId::as_str), Some("1"));
    }

    #[test]
    fn dropping_on_a_column_writes_its_name() {
        let tasks = board_tasks();
        let active = TaskId::from("1");

        let status = resolve_drop(&tasks, &default_columns(), &active, "IN PROGRESS");

        assert_eq!(status.as_deref(), Some("IN PROGRESS"));
    }

    #[test]
    fn dropping_on_the_current_column_rewrites_the_same_value() {
        let tasks = board_tasks();
        let active = TaskId::from("1");

        let status = resolve_drop(&tasks, &default_columns(), &active, "TO DO");

        assert_eq!(status.as_deref(), Some("TO DO"));
    }

    #[test]
    fn column_names_match_exactly_not_case_insensitively() {
        let tasks = board_tasks();
        let active = TaskId::from("1");

        // "in progress" is not a column display name, and not a task id
        // either, so the drop resolves to nothing.
        let status = resolve_drop(&tasks, &default_columns(), &active, "in progress");

        assert_eq!(status, None);
    }

    #[test]
    fn dropping_on_a_task_in_another_column_adopts_its_status() {
        let tasks = board_tasks();
        let active = TaskId::from("1");

        let status = resolve_drop(&tasks, &default_columns(), &active, "2");

        assert_eq!(status.as_deref(), Some("IN PROGRESS"));
    }

    #[test]
    fn dropping_on_a_task_with_the_same_status_is_a_no_op() {
        let tasks = board_tasks();
        let active = TaskId::from("1");

        let status = resolve_drop(&tasks, &default_columns(), &active, "3");

        assert_eq!(status, None);
    }

    #[test]
    fn dropping_a_task_onto_itself_is_a_no_op() {
        let tasks = board_tasks();
        let active = TaskId::from("1");

        let status = resolve_drop(&tasks, &default_columns(), &active, "1");

        assert_eq!(status, None);
    }

    #[test]
    fn an_unknown_target_resolves_to_nothing() {
        let tasks = board_tasks();
        let active = TaskId::from("1");

        let status = resolve_drop(&tasks, &default_columns(), &active, "no-such-thing");

        assert_eq!(status, None);
    }

    #[test]
    fn a_vanished_dragged_task_resolves_to_nothing() {
        let tasks = board_tasks();
        let active = TaskId::from("gone");

        let status = resolve_drop(&tasks, &default_columns(), &active, "2");

        assert_eq!(status, None);
    }

    #[test]
    fn a_task_status_matching_a_column_id_still_resolves() {
        // The dragged task's own status plays no part in column matching;
        // only the drop target does.
        let mut tasks = board_tasks();
        tasks[0].status = "todo".to_owned();
        let active = TaskId::from("1");

        let status = resolve_drop(&tasks, &default_columns(), &active, "2");

        assert_eq!(status.as_deref(), Some("IN PROGRESS"));
    }
}
