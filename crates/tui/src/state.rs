//! UI state: focus, selection, and the carry gesture.
//!
//! Everything the widgets draw from lives here. The board itself is
//! never cached; it is reassembled from the store on demand so each
//! frame sees the current tasks.

use tack_board::{BoardEngine, BoardScope, ColumnTasks};
use tack_protocol::{Task, TaskId};
use tack_store::MemoryStore;

/// Which pane keyboard input goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The board columns.
    #[default]
    Board,
    /// The task detail panel.
    Detail,
}

/// Mutable state of a running session.
///
/// Holds the task store, the board engine that projects it into
/// columns, and the focus and selection bookkeeping around them.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Task storage backing the board.
    pub store: MemoryStore,
    /// Column resolution and drag transitions.
    pub engine: BoardEngine,
    /// Pane receiving keyboard input.
    pub focus: Focus,
    /// Index of the highlighted column.
    pub selected_column: usize,
    /// Index of the highlighted task within that column, if any.
    pub selected_task: Option<usize>,
    /// Detail panel visibility.
    pub detail_visible: bool,
    /// Scroll offset into the detail description.
    pub detail_scroll: u16,
    /// Help overlay visibility.
    pub help_visible: bool,
}

impl AppState {
    /// Creates the state over a store, scoped to the whole board.
    ///
    /// Focus starts on the board with the first column highlighted and
    /// no task selected.
    ///
    /// # Examples
    ///
    /// ```
    /// use tack_store::MemoryStore;
    /// use tack_tui::AppState;
    ///
    /// let state = AppState::new(MemoryStore::new());
    /// assert_eq!(state.selected_column, 0);
    /// ```
    #[must_use]
    pub fn new(store: MemoryStore) -> Self {
        Self {
            store,
            engine: BoardEngine::new(BoardScope::everything()),
            focus: Focus::default(),
            selected_column: 0,
            selected_task: None,
            detail_visible: false,
            detail_scroll: 0,
            help_visible: false,
        }
    }

    /// Consumes the state, returning the task store for persistence.
    #[must_use]
    pub fn into_store(self) -> MemoryStore {
        self.store
    }

    /// Assembles the current board view: in-scope tasks grouped under
    /// the columns in effect.
    #[must_use]
    pub fn board(&self) -> Vec<ColumnTasks<'_>> {
        self.engine.board(&self.store)
    }

    /// Number of columns on the current board.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.engine.columns(&self.store).len()
    }

    /// Number of tasks in the highlighted column.
    fn selected_column_len(&self) -> usize {
        self.board()
            .get(self.selected_column)
            .map_or(0, ColumnTasks::len)
    }

    /// Shows or hides the help overlay.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Hides the help overlay, reporting whether it was showing.
    #[must_use]
    pub fn dismiss_help(&mut self) -> bool {
        let was_visible = self.help_visible;
        self.help_visible = false;
        was_visible
    }

    /// Highlights the column to the left, wrapping past the edge.
    pub fn navigate_left(&mut self) {
        self.rotate_column(-1);
    }

    /// Highlights the column to the right, wrapping past the edge.
    pub fn navigate_right(&mut self) {
        self.rotate_column(1);
    }

    fn rotate_column(&mut self, step: isize) {
        let count = self.column_count();
        if count == 0 {
            return;
        }
        let at = self.selected_column as isize;
        self.selected_column = (at + step).rem_euclid(count as isize) as usize;
        self.clamp_task_selection();
    }

    /// Highlights the previous task in the column, wrapping to the
    /// bottom from the top.
    pub fn navigate_up(&mut self) {
        self.rotate_task(-1);
    }

    /// Highlights the next task in the column, wrapping to the top
    /// from the bottom.
    pub fn navigate_down(&mut self) {
        self.rotate_task(1);
    }

    fn rotate_task(&mut self, step: isize) {
        let len = self.selected_column_len();
        if len == 0 {
            self.selected_task = None;
            return;
        }
        // Entering an unselected column always lands on the first task
        self.selected_task = Some(match self.selected_task {
            None => 0,
            Some(at) => (at as isize + step).rem_euclid(len as isize) as usize,
        });
    }

    /// Opens or closes the detail panel, moving focus along with it.
    ///
    /// The description scroll restarts from the top on every toggle.
    pub fn toggle_detail(&mut self) {
        self.detail_visible = !self.detail_visible;
        self.detail_scroll = 0;
        self.focus = match self.detail_visible {
            true => Focus::Detail,
            false => Focus::Board,
        };
    }

    /// Scrolls the detail description by `delta` rows, positive meaning
    /// down.
    ///
    /// The offset saturates at the top. The bottom bound is applied
    /// separately through [`clamp_detail_scroll`], since only the
    /// renderer knows how tall the content is.
    ///
    /// [`clamp_detail_scroll`]: AppState::clamp_detail_scroll
    pub fn scroll_detail(&mut self, delta: i16) {
        self.detail_scroll = self.detail_scroll.saturating_add_signed(delta);
    }

    /// Caps the scroll offset at `max`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tack_store::MemoryStore;
    /// use tack_tui::AppState;
    ///
    /// let mut state = AppState::new(MemoryStore::new());
    /// state.scroll_detail(100);
    /// state.clamp_detail_scroll(5);
    /// assert_eq!(state.detail_scroll, 5);
    /// ```
    pub fn clamp_detail_scroll(&mut self, max: u16) {
        self.detail_scroll = self.detail_scroll.min(max);
    }

    /// The highlighted task, when the selection points at a real one.
    #[must_use]
    pub fn selected_task(&self) -> Option<&Task> {
        let task_idx = self.selected_task?;
        let columns = self.board();
        let column = columns.get(self.selected_column)?;
        column.tasks.get(task_idx).copied()
    }

    /// Id of the highlighted task, if any.
    #[must_use]
    pub fn selected_task_id(&self) -> Option<TaskId> {
        self.selected_task().map(|task| task.id.clone())
    }

    /// Whether a card is currently being carried.
    #[must_use]
    pub fn is_carrying(&self) -> bool {
        self.engine.drag().is_dragging()
    }

    /// Returns the carried task, if a carry is in progress and the task
    /// still exists in the store.
    #[must_use]
    pub fn carried_task(&self) -> Option<&Task> {
        let id = self.engine.drag().active_task()?;
        self.store.task(id)
    }

    /// Picks up the selected card, starting a carry.
    ///
    /// Does nothing when no card is selected. Picking up while already
    /// carrying replaces the held card.
    pub fn pick_up(&mut self) {
        let Some(id) = self.selected_task_id() else {
            return;
        };
        self.engine.on_drag_start(id);
    }

    /// Sets the carried card down on the current selection.
    ///
    /// The drop target is the highlighted card when one is selected,
    /// otherwise the highlighted column. Returns the status the card
    /// was moved to, or `None` when the drop did not move anything
    /// (which includes not carrying at all).
    pub fn set_down(&mut self) -> Option<String> {
        let target = self.drop_target();
        self.engine.on_drag_end(&mut self.store, target.as_deref())
    }

    /// Cancels the carry without touching any task.
    pub fn cancel_carry(&mut self) {
        self.engine.on_drag_end(&mut self.store, None);
    }

    /// Resolves the current selection into a drop target.
    ///
    /// A highlighted card is targeted by id; a column with no card
    /// highlighted is targeted by name.
    fn drop_target(&self) -> Option<String> {
        if let Some(task) = self.selected_task() {
            return Some(task.id.as_str().to_owned());
        }
        let columns = self.engine.columns(&self.store);
        let column = columns.get(self.selected_column)?;
        Some(column.name.clone())
    }

    /// Archives the selected card.
    ///
    /// The card moves to the archive status and shows up in whatever
    /// column matches it. Returns `true` when a card was archived.
    pub fn archive_selected(&mut self) -> bool {
        let Some(id) = self.selected_task_id() else {
            return false;
        };
        let archived = self.store.archive_task(&id);
        if archived {
            self.clamp_task_selection();
        }
        archived
    }

    /// Drops the task highlight, leaving the column selection alone.
    pub fn clear_selection(&mut self) {
        self.selected_task = None;
    }

    /// Pulls the task selection back into range after the column under
    /// it changed.
    fn clamp_task_selection(&mut self) {
        let len = self.selected_column_len();
        if len == 0 {
            self.selected_task = None;
        } else if let Some(idx) = self.selected_task
            && idx >= len
        {
            self.selected_task = Some(len.saturating_sub(1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tack_protocol::Task;
    use tack_store::ARCHIVE_STATUS;

    /// Builds a store whose tasks land on the default three-column
    /// board in the given order. Stores list newest first, so names go
    /// in reversed.
    fn store_with_tasks(names: &[&str]) -> MemoryStore {
        let mut store = MemoryStore::new();
        for name in names.iter().rev() {
            store.add_task(Task::new(*name, "space-1"));
        }
        store
    }

    #[test]
    fn a_fresh_state_sits_idle_on_the_board() {
        let state = AppState::new(MemoryStore::new());

        assert_eq!(state.focus, Focus::Board);
        assert_eq!(state.selected_column, 0);
        assert_eq!(state.selected_task, None);
        assert!(!state.detail_visible);
        assert_eq!(state.detail_scroll, 0);
        assert!(!state.help_visible);
        assert!(!state.is_carrying());
    }

    #[test]
    fn an_empty_store_still_shows_the_default_columns() {
        let state = AppState::new(MemoryStore::new());
        assert_eq!(state.column_count(), 3);
    }

    #[test]
    fn column_selection_wraps_in_both_directions() {
        let mut state = AppState::new(MemoryStore::new());

        state.navigate_left();
        assert_eq!(state.selected_column, 2);

        state.navigate_right();
        assert_eq!(state.selected_column, 0);

        state.navigate_right();
        assert_eq!(state.selected_column, 1);
    }

    #[test]
    fn task_selection_walks_and_wraps_within_the_column() {
        let mut state = AppState::new(store_with_tasks(&["Task 1", "Task 2", "Task 3"]));

        // First press lands on the top card
        state.navigate_down();
        assert_eq!(state.selected_task, Some(0));

        state.navigate_down();
        state.navigate_down();
        assert_eq!(state.selected_task, Some(2));

        // Off the bottom wraps to the top, and back again
        state.navigate_down();
        assert_eq!(state.selected_task, Some(0));
        state.navigate_up();
        assert_eq!(state.selected_task, Some(2));
    }

    #[test]
    fn an_empty_column_never_holds_a_selection() {
        let mut state = AppState::new(MemoryStore::new());

        state.navigate_up();
        assert_eq!(state.selected_task, None);
        state.navigate_down();
        assert_eq!(state.selected_task, None);
    }

    #[test]
    fn moving_to_an_empty_column_drops_the_task_highlight() {
        let mut state = AppState::new(store_with_tasks(&["Task 1", "Task 2"]));

        state.navigate_down();
        state.navigate_down();
        assert_eq!(state.selected_task, Some(1));

        state.navigate_right();
        assert_eq!(state.selected_task, None);
    }

    #[test]
    fn toggling_the_detail_flips_focus_and_restarts_the_scroll() {
        let mut state = AppState::new(MemoryStore::new());
        state.detail_scroll = 10;

        state.toggle_detail();
        assert_eq!(state.focus, Focus::Detail);
        assert!(state.detail_visible);
        assert_eq!(state.detail_scroll, 0);

        state.toggle_detail();
        assert_eq!(state.focus, Focus::Board);
        assert!(!state.detail_visible);
    }

    #[test]
    fn scrolling_accumulates_downward() {
        let mut state = AppState::new(MemoryStore::new());

        state.scroll_detail(5);
        state.scroll_detail(3);
        assert_eq!(state.detail_scroll, 8);
    }

    #[test]
    fn scrolling_saturates_at_the_top() {
        let mut state = AppState::new(MemoryStore::new());
        state.detail_scroll = 5;

        state.scroll_detail(-10);
        assert_eq!(state.detail_scroll, 0);
    }

    #[test]
    fn clamping_caps_the_scroll_but_never_raises_it() {
        let mut state = AppState::new(MemoryStore::new());

        state.detail_scroll = 100;
        state.clamp_detail_scroll(10);
        assert_eq!(state.detail_scroll, 10);

        state.clamp_detail_scroll(50);
        assert_eq!(state.detail_scroll, 10);
    }

    #[test]
    fn no_selection_means_no_selected_task() {
        let state = AppState::new(store_with_tasks(&["Task 1"]));
        assert!(state.selected_task().is_none());
    }

    #[test]
    fn the_selection_resolves_to_its_task() {
        let mut state = AppState::new(store_with_tasks(&["Task 1", "Task 2"]));
        state.navigate_down();

        let task = state.selected_task().expect("task under the highlight");
        assert_eq!(task.name, "Task 1");
    }

    #[test]
    fn a_stale_selection_resolves_to_none() {
        let mut state = AppState::new(MemoryStore::new());
        state.selected_task = Some(0);

        assert!(state.selected_task().is_none());
    }

    #[test]
    fn pick_up_without_selection_is_a_no_op() {
        let mut state = AppState::new(store_with_tasks(&["Task 1"]));

        state.pick_up();
        assert!(!state.is_carrying());
    }

    #[test]
    fn pick_up_holds_the_selected_card() {
        let mut state = AppState::new(store_with_tasks(&["Task 1", "Task 2"]));
        state.navigate_down();

        state.pick_up();
        assert!(state.is_carrying());

        let carried = state.carried_task().expect("carry should hold a task");
        assert_eq!(carried.name, "Task 1");
    }

    #[test]
    fn set_down_on_a_column_moves_the_card() {
        let mut state = AppState::new(store_with_tasks(&["Task 1"]));
        state.navigate_down();
        state.pick_up();

        // Carry to the second column and drop with no card highlighted
        state.navigate_right();
        assert_eq!(state.selected_task, None);

        let moved = state.set_down();
        assert_eq!(moved.as_deref(), Some("IN PROGRESS"));
        assert!(!state.is_carrying());

        let board = state.board();
        assert!(board[0].is_empty());
        assert_eq!(board[1].len(), 1);
    }

    #[test]
    fn set_down_on_a_card_adopts_its_status() {
        let mut store = store_with_tasks(&["Task 1"]);
        store.add_task(Task::new("Task 0", "space-1").with_status("IN PROGRESS"));
        let mut state = AppState::new(store);

        state.navigate_down();
        state.pick_up();

        // Highlight the card sitting in the second column and drop on it
        state.navigate_right();
        state.navigate_down();

        let moved = state.set_down();
        assert_eq!(moved.as_deref(), Some("IN PROGRESS"));

        let board = state.board();
        assert_eq!(board[1].len(), 2);
    }

    #[test]
    fn set_down_in_place_leaves_the_card_alone() {
        let mut state = AppState::new(store_with_tasks(&["Task 1"]));
        state.navigate_down();
        state.pick_up();

        // Dropping on the carried card itself resolves to its own status
        let moved = state.set_down();
        assert_eq!(moved, None);
        assert!(!state.is_carrying());
        assert_eq!(state.board()[0].len(), 1);
    }

    #[test]
    fn cancel_carry_leaves_the_board_unchanged() {
        let mut state = AppState::new(store_with_tasks(&["Task 1"]));
        state.navigate_down();
        state.pick_up();
        state.navigate_right();

        state.cancel_carry();
        assert!(!state.is_carrying());
        assert_eq!(state.board()[0].len(), 1);
    }

    #[test]
    fn set_down_without_carrying_does_nothing() {
        let mut state = AppState::new(store_with_tasks(&["Task 1"]));
        state.navigate_down();

        assert_eq!(state.set_down(), None);
        assert_eq!(state.board()[0].len(), 1);
    }

    #[test]
    fn archive_selected_moves_card_to_archive_status() {
        let mut state = AppState::new(store_with_tasks(&["Task 1"]));
        state.navigate_down();

        assert!(state.archive_selected());

        let task = &state.store.tasks()[0];
        assert_eq!(task.status, ARCHIVE_STATUS);
        // The first column emptied out, so the selection was dropped
        assert_eq!(state.selected_task, None);
    }

    #[test]
    fn archive_without_selection_returns_false() {
        let mut state = AppState::new(MemoryStore::new());
        assert!(!state.archive_selected());
    }

    #[test]
    fn help_toggles_and_dismissal_reports_visibility() {
        let mut state = AppState::new(MemoryStore::new());

        state.toggle_help();
        assert!(state.help_visible);
        state.toggle_help();
        assert!(!state.help_visible);

        // Dismissing reports whether there was anything to dismiss
        assert!(!state.dismiss_help());
        state.toggle_help();
        assert!(state.dismiss_help());
        assert!(!state.help_visible);
    }

    #[test]
    fn clearing_the_selection_keeps_the_column() {
        let mut state = AppState::new(store_with_tasks(&["Task 1"]));
        state.navigate_right();
        state.navigate_left();
        state.navigate_down();
        assert!(state.selected_task.is_some());

        state.clear_selection();
        assert!(state.selected_task.is_none());
        assert_eq!(state.selected_column, 0);
    }
}
