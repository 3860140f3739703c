//! The board engine: scoping, assembly, and the drag entry points.

use tracing::debug;

use tack_protocol::{Column, ListId, SpaceId, Task, TaskId};

use crate::classify::{ColumnTasks, classify};
use crate::columns::resolve_columns;
use crate::drag::{DragState, resolve_drop};
use crate::store::BoardStore;

/// Which slice of the store a board shows.
///
/// An unset level applies no filter, so the default scope shows every
/// task in the store.
///
/// # Examples
///
/// ```
/// use tack_board::BoardScope;
/// use tack_protocol::Task;
///
/// let task = Task::new("Water the plants", "home");
///
/// assert!(BoardScope::everything().contains(&task));
/// assert!(BoardScope::for_space("home").contains(&task));
/// assert!(!BoardScope::for_space("work").contains(&task));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardScope {
    /// Only show tasks filed under this space.
    pub space: Option<SpaceId>,
    /// Only show tasks filed under this list.
    pub list: Option<ListId>,
}

impl BoardScope {
    /// A scope showing every task in the store.
    #[must_use]
    pub fn everything() -> Self {
        Self::default()
    }

    /// A scope showing one space.
    #[must_use]
    pub fn for_space(space: impl Into<SpaceId>) -> Self {
        Self {
            space: Some(space.into()),
            list: None,
        }
    }

    /// A scope showing one list within a space.
    #[must_use]
    pub fn for_list(space: impl Into<SpaceId>, list: impl Into<ListId>) -> Self {
        Self {
            space: Some(space.into()),
            list: Some(list.into()),
        }
    }

    /// Returns `true` if `task` falls inside this scope.
    #[must_use]
    pub fn contains(&self, task: &Task) -> bool {
        if let Some(space) = &self.space
            && task.space != *space
        {
            return false;
        }
        if let Some(list) = &self.list
            && task.list.as_ref() != Some(list)
        {
            return false;
        }
        true
    }
}

/// Drives one board: resolves its columns, groups its tasks, and owns the
/// drag session.
///
/// The engine holds no task data of its own. Every operation takes the
/// store it should read or write, so one engine can sit on top of
/// whatever storage the application chose.
#[derive(Debug, Clone, Default)]
pub struct BoardEngine {
    scope: BoardScope,
    drag: DragState,
}

impl BoardEngine {
    /// Creates an engine showing `scope`.
    #[must_use]
    pub fn new(scope: BoardScope) -> Self {
        Self {
            scope,
            drag: DragState::Idle,
        }
    }

    /// Returns the scope this engine shows.
    #[must_use]
    pub fn scope(&self) -> &BoardScope {
        &self.scope
    }

    /// Narrows or widens what the board shows.
    pub fn set_scope(&mut self, scope: BoardScope) {
        self.scope = scope;
    }

    /// Returns the drag session state.
    #[must_use]
    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    /// Returns the columns in effect for the current scope.
    #[must_use]
    pub fn columns<S: BoardStore>(&self, store: &S) -> Vec<Column> {
        let list = self.scope.list.as_ref().and_then(|id| store.list(id));
        let space = self.scope.space.as_ref().and_then(|id| store.space(id));
        resolve_columns(list, space)
    }

    /// Assembles the board: every in-scope task grouped under the columns
    /// in effect.
    #[must_use]
    pub fn board<'a, S: BoardStore>(&self, store: &'a S) -> Vec<ColumnTasks<'a>> {
        let columns = self.columns(store);
        let tasks = store
            .tasks()
            .iter()
            .filter(|task| self.scope.contains(task));
        classify(tasks, &columns)
    }

    /// Begins a drag session for `task`.
    ///
    /// Starting a new drag while one is in progress replaces the held
    /// task id; there is no queue of drags.
    pub fn on_drag_start(&mut self, task: impl Into<TaskId>) {
        let task = task.into();
        debug!(task = %task, "drag started");
        self.drag = DragState::Dragging(task);
    }

    /// Ends the drag session and applies the drop, if it resolves.
    ///
    /// The session is destroyed before the drop is looked at, so the
    /// engine is idle again no matter what happens next. A missing or
    /// unresolvable target is the everyday outcome of a cancelled
    /// gesture, not an error; the store is only touched when the drop
    /// resolves to a status. Returns the status written, or `None` when
    /// nothing was.
    ///
    /// Drop targets are matched against the full task list, not just the
    /// tasks in scope, so a drop recorded against an off-board card still
    /// lands.
    pub fn on_drag_end<S: BoardStore>(
        &mut self,
        store: &mut S,
        over: Option<&str>,
    ) -> Option<String> {
        let DragState::Dragging(active) = std::mem::take(&mut self.drag) else {
            return None;
        };
        let Some(over) = over else {
            debug!(task = %active, "drag cancelled");
            return None;
        };

        let columns = self.columns(store);
        let Some(status) = resolve_drop(store.tasks(), &columns, &active, over) else {
            debug!(task = %active, over, "drop target did not resolve");
            return None;
        };

        if store.set_task_status(&active, &status) {
            debug!(task = %active, status = %status, "task moved");
            Some(status)
        } else {
            debug!(task = %active, "store rejected the status write");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use tack_protocol::{Column, ColumnKind, List, Space};

    use super::*;

    /// In-memory store that records every status write it receives.
    #[derive(Debug, Default)]
    struct StubStore {
        tasks: Vec<Task>,
        spaces: Vec<Space>,
        lists: Vec<List>,
        status_writes: Vec<(TaskId, String)>,
    }

    impl BoardStore for StubStore {
        fn tasks(&self) -> &[Task] {
            &self.tasks
        }

        fn space(&self, id: &SpaceId) -> Option<&Space> {
            self.spaces.iter().find(|space| space.id == *id)
        }

        fn list(&self, id: &ListId) -> Option<&List> {
            self.lists.iter().find(|list| list.id == *id)
        }

        fn set_task_status(&mut self, id: &TaskId, status: &str) -> bool {
            self.status_writes.push((id.clone(), status.to_owned()));
            match self.tasks.iter_mut().find(|task| task.id == *id) {
                Some(task) => {
                    task.set_status(status);
                    true
                }
                None => false,
            }
        }
    }

    /// A store that refuses every status write.
    #[derive(Debug, Default)]
    struct VetoStore {
        inner: StubStore,
    }

    impl BoardStore for VetoStore {
        fn tasks(&self) -> &[Task] {
            self.inner.tasks()
        }

        fn space(&self, id: &SpaceId) -> Option<&Space> {
            self.inner.space(id)
        }

        fn list(&self, id: &ListId) -> Option<&List> {
            self.inner.list(id)
        }

        fn set_task_status(&mut self, id: &TaskId, status: &str) -> bool {
            self.inner.status_writes.push((id.clone(), status.to_owned()));
            false
        }
    }

    fn store() -> StubStore {
        StubStore {
            tasks: vec![
                Task::with_id("1", "Write the changelog", "work").with_status("TO DO"),
                Task::with_id("2", "Fix the login button", "work").with_status("IN PROGRESS"),
                Task::with_id("3", "Cut a release", "work").with_status("TO DO"),
                Task::with_id("4", "Water the plants", "home").with_status("COMPLETED"),
            ],
            spaces: vec![Space::new("work", "Work"), Space::new("home", "Home")],
            ..StubStore::default()
        }
    }

    #[test]
    fn board_groups_every_task_under_the_default_scope() {
        let store = store();
        let engine = BoardEngine::default();

        let board = engine.board(&store);

        assert_eq!(board.len(), 3);
        assert_eq!(board[0].len(), 2);
        assert_eq!(board[1].len(), 1);
        assert_eq!(board[2].len(), 1);
    }

    #[test]
    fn scope_filters_tasks_by_space() {
        let store = store();
        let engine = BoardEngine::new(BoardScope::for_space("work"));

        let board = engine.board(&store);

        assert_eq!(board[0].len(), 2);
        assert_eq!(board[1].len(), 1);
        assert!(board[2].is_empty());
    }

    #[test]
    fn scope_filters_tasks_by_list() {
        let mut store = store();
        store.tasks[0] = store.tasks[0].clone().with_list("sprint-12");
        let engine = BoardEngine::new(BoardScope::for_list("work", "sprint-12"));

        let board = engine.board(&store);

        assert_eq!(board[0].len(), 1);
        assert_eq!(board[0].tasks[0].id.as_str(), "1");
        assert!(board[1].is_empty());
    }

    #[test]
    fn columns_follow_the_scoped_space() {
        let mut store = store();
        store.spaces[0] = Space::new("work", "Work").with_columns(vec![
            Column::new("open", "OPEN", "#3b82f6", ColumnKind::Todo),
            Column::new("shipped", "SHIPPED", "#10b981", ColumnKind::Done),
        ]);
        let engine = BoardEngine::new(BoardScope::for_space("work"));

        let columns = engine.columns(&store);

        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].name, "OPEN");
    }

    #[test]
    fn columns_follow_the_scoped_list_over_its_space() {
        let mut store = store();
        store.spaces[0] = Space::new("work", "Work").with_columns(vec![Column::new(
            "open",
            "OPEN",
            "#3b82f6",
            ColumnKind::Todo,
        )]);
        store.lists.push(
            List::new("sprint-12", "Sprint 12", "work").with_columns(vec![Column::new(
                "queued",
                "QUEUED",
                "#8b5cf6",
                ColumnKind::Todo,
            )]),
        );
        let engine = BoardEngine::new(BoardScope::for_list("work", "sprint-12"));

        let columns = engine.columns(&store);

        assert_eq!(columns.len(), 1);
        assert_eq!(columns[0].name, "QUEUED");
    }

    #[test]
    fn drag_start_begins_a_session() {
        let mut engine = BoardEngine::default();

        engine.on_drag_start("1");

        assert_eq!(engine.drag().active_task().map(TaskId::as_str), Some("1"));
    }

    #[test]
    fn a_second_drag_start_replaces_the_first() {
        let mut engine = BoardEngine::default();

        engine.on_drag_start("1");
        engine.on_drag_start("2");

        assert_eq!(engine.drag().active_task().map(TaskId::as_str), Some("2"));
    }

    #[test]
    fn drop_on_a_column_writes_its_name_exactly_once() {
        let mut store = store();
        let mut engine = BoardEngine::default();

        engine.on_drag_start("1");
        let written = engine.on_drag_end(&mut store, Some("IN PROGRESS"));

        assert_eq!(written.as_deref(), Some("IN PROGRESS"));
        assert_eq!(
            store.status_writes,
            vec![(TaskId::from("1"), "IN PROGRESS".to_owned())]
        );
        assert_eq!(store.tasks[0].status, "IN PROGRESS");
        assert_eq!(engine.drag(), &DragState::Idle);
    }

    #[test]
    fn drop_on_the_current_column_rewrites_the_same_value() {
        let mut store = store();
        let mut engine = BoardEngine::default();

        engine.on_drag_start("1");
        let written = engine.on_drag_end(&mut store, Some("TO DO"));

        assert_eq!(written.as_deref(), Some("TO DO"));
        assert_eq!(store.status_writes.len(), 1);
        assert_eq!(store.tasks[0].status, "TO DO");
    }

    #[test]
    fn drop_on_a_task_in_another_column_adopts_its_status() {
        let mut store = store();
        let mut engine = BoardEngine::default();

        engine.on_drag_start("1");
        let written = engine.on_drag_end(&mut store, Some("2"));

        assert_eq!(written.as_deref(), Some("IN PROGRESS"));
        assert_eq!(store.status_writes.len(), 1);
        assert_eq!(store.tasks[0].status, "IN PROGRESS");
    }

    #[test]
    fn drop_on_a_task_with_the_same_status_writes_nothing() {
        let mut store = store();
        let mut engine = BoardEngine::default();

        engine.on_drag_start("1");
        let written = engine.on_drag_end(&mut store, Some("3"));

        assert_eq!(written, None);
        assert!(store.status_writes.is_empty());
    }

    #[test]
    fn a_cancelled_drag_writes_nothing() {
        let mut store = store();
        let mut engine = BoardEngine::default();

        engine.on_drag_start("1");
        let written = engine.on_drag_end(&mut store, None);

        assert_eq!(written, None);
        assert!(store.status_writes.is_empty());
        assert_eq!(engine.drag(), &DragState::Idle);
    }

    #[test]
    fn an_unresolvable_target_writes_nothing_and_ends_the_session() {
        let mut store = store();
        let mut engine = BoardEngine::default();

        engine.on_drag_start("1");
        let written = engine.on_drag_end(&mut store, Some("no-such-target"));

        assert_eq!(written, None);
        assert!(store.status_writes.is_empty());
        assert_eq!(engine.drag(), &DragState::Idle);
    }

    #[test]
    fn drag_end_without_a_session_is_a_no_op() {
        let mut store = store();
        let mut engine = BoardEngine::default();

        let written = engine.on_drag_end(&mut store, Some("IN PROGRESS"));

        assert_eq!(written, None);
        assert!(store.status_writes.is_empty());
    }

    #[test]
    fn drop_resolution_sees_tasks_outside_the_scope() {
        let mut store = store();
        let mut engine = BoardEngine::new(BoardScope::for_space("work"));

        // Task 4 lives in the "home" space, outside the board's scope.
        engine.on_drag_start("1");
        let written = engine.on_drag_end(&mut store, Some("4"));

        assert_eq!(written.as_deref(), Some("COMPLETED"));
        assert_eq!(store.tasks[0].status, "COMPLETED");
    }

    #[test]
    fn drop_targets_match_the_scoped_columns() {
        let mut store = store();
        store.spaces[0] = Space::new("work", "Work").with_columns(vec![Column::new(
            "open",
            "OPEN",
            "#3b82f6",
            ColumnKind::Todo,
        )]);
        let mut engine = BoardEngine::new(BoardScope::for_space("work"));

        // "IN PROGRESS" is not one of the scoped columns, and no task has
        // that id, so the drop dissolves.
        engine.on_drag_start("1");
        let written = engine.on_drag_end(&mut store, Some("IN PROGRESS"));

        assert_eq!(written, None);
        assert!(store.status_writes.is_empty());

        engine.on_drag_start("1");
        let written = engine.on_drag_end(&mut store, Some("OPEN"));

        assert_eq!(written.as_deref(), Some("OPEN"));
    }

    #[test]
    fn a_rejected_write_reports_nothing_written() {
        let mut store = VetoStore {
            inner: store(),
        };
        let mut engine = BoardEngine::default();

        engine.on_drag_start("1");
        let written = engine.on_drag_end(&mut store, Some("IN PROGRESS"));

        assert_eq!(written, None);
        // The write was attempted once and refused; the engine moves on.
        assert_eq!(store.inner.status_writes.len(), 1);
        assert_eq!(engine.drag(), &DragState::Idle);
    }

    #[test]
    fn set_scope_changes_what_the_board_shows() {
        let store = store();
        let mut engine = BoardEngine::default();

        engine.set_scope(BoardScope::for_space("home"));

        let board = engine.board(&store);
        assert_eq!(board[2].len(), 1);
        assert_eq!(board[2].tasks[0].id.as_str(), "4");
        assert_eq!(engine.scope(), &BoardScope::for_space("home"));
    }
}
