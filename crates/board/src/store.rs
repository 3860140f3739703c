//! The storage seam the board engine works against.

use tack_protocol::{List, ListId, Space, SpaceId, Task, TaskId};

/// Read and write access to the data behind a board.
///
/// The engine never creates or destroys tasks, columns, spaces, or lists;
/// it reads them and requests exactly one kind of mutation, a status write
/// on a single task. Anything that can hand out tasks and apply that write
/// can sit behind a board.
pub trait BoardStore {
    /// Returns every task known to the store, in stored order.
    fn tasks(&self) -> &[Task];

    /// Looks up a space by id.
    fn space(&self, id: &SpaceId) -> Option<&Space>;

    /// Looks up a list by id.
    fn list(&self, id: &ListId) -> Option<&List>;

    /// Writes a new status onto a task.
    ///
    /// Returns `true` if the task existed and the write was applied. A
    /// rejected write leaves the store untouched; the caller treats it as
    /// a no-op, not a failure.
    fn set_task_status(&mut self, id: &TaskId, status: &str) -> bool;
}
