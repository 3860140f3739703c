//! A ready-made board for first runs.
//!
//! When no snapshot exists yet, the application starts from this board
//! instead of an empty screen. The content doubles as a tour of the
//! features: carrying cards, markdown descriptions, priorities, and a
//! space with its own column set.

use chrono::{Days, Utc};

use tack_protocol::{Column, ColumnKind, List, Priority, Space, Task};

use crate::memory::MemoryStore;

/// Builds the board a fresh installation starts with.
///
/// Two spaces, one list, and eight tasks spread across the default
/// columns. The `home` space defines its own columns, so one task only
/// shows up when the board is scoped to that space.
///
/// # Examples
///
/// ```
/// use tack_store::sample_store;
///
/// let store = sample_store();
/// assert_eq!(store.tasks().len(), 8);
/// assert_eq!(store.spaces().len(), 2);
/// ```
#[must_use]
pub fn sample_store() -> MemoryStore {
    let today = Utc::now().date_naive();
    let mut store = MemoryStore::new();

    store.add_space(Space::new("work", "Work"));
    store.add_space(Space::new("home", "Home").with_columns(vec![
        Column::new("someday", "SOMEDAY", "#8b5cf6", ColumnKind::Todo),
        Column::new("this-week", "THIS WEEK", "#f59e0b", ColumnKind::InProgress),
        Column::new("done", "DONE", "#10b981", ColumnKind::Done),
    ]));
    store.add_list(List::new("sprint-12", "Sprint 12", "work"));

    // Tasks prepend, so the last one added shows first in its column.
    store.add_task(
        Task::with_id("seed-trays", "Start the seed trays", "home")
            .with_status("SOMEDAY")
            .with_description(
                "## Note\n\
                 This task's status is **SOMEDAY**, which only exists on the\n\
                 *Home* space's own columns. On a board showing every space it\n\
                 matches no column, so it quietly stays off-screen.",
            )
            .with_priority(Priority::Low),
    );

    store.add_task(
        Task::with_id("plants", "Water the plants", "home")
            .with_priority(Priority::Low)
            .with_description("Kitchen herbs first. The fern forgives nothing."),
    );

    store.add_task(
        Task::with_id("release-notes", "Draft the release notes", "work")
            .with_status("COMPLETED")
            .with_list("sprint-12")
            .with_description(
                "## Done\n\
                 Covered in the notes:\n\
                 - Keyboard-first board navigation\n\
                 - JSON snapshots you can hand-edit\n\
                 - Per-space column sets",
            ),
    );

    store.add_task(
        Task::with_id("changelog", "Write the changelog", "work")
            .with_status("IN PROGRESS")
            .with_list("sprint-12")
            .with_due_date(today + Days::new(7))
            .with_description(
                "## Sources\n\
                 1. `git log --oneline` since the last tag\n\
                 2. The closed items on this board\n\n\
                 Keep entries in the *imperative* mood.",
            ),
    );

    store.add_task(
        Task::with_id("login-fix", "Fix the login button", "work")
            .with_status("IN PROGRESS")
            .with_priority(Priority::Urgent)
            .with_assignee("romain")
            .with_due_date(today + Days::new(2))
            .with_description(
                "## Problem\n\
                 The login button does nothing on mobile Safari.\n\n\
                 ## Findings\n\
                 - Reproduces on iOS 17 and 18\n\
                 - The click handler is attached to `mousedown`\n\
                 - Touch events never fire it\n\n\
                 ## Fix\n\
                 Switch to `pointerdown` and retest on device.",
            ),
    );

    store.add_task(
        Task::with_id("detail", "Open a card with Enter", "work")
            .with_priority(Priority::Low)
            .with_description(
                "## Detail view\n\
                 Press `Enter` on a highlighted card to read its full\n\
                 description, rendered from **markdown**.\n\n\
                 | Key | Action |\n\
                 |-----|--------|\n\
                 | arrows | Scroll |\n\
                 | `Esc` | Back to the board |",
            ),
    );

    store.add_task(
        Task::with_id("carry", "Carry a card across the board", "work").with_description(
            "## The carry gesture\n\
             1. Highlight a card and press `Space` to pick it up\n\
             2. Move the highlight to another column or card\n\
             3. Press `Space` again to set it down\n\n\
             `Esc` drops the card back where it came from.",
        ),
    );

    store.add_task(
        Task::with_id("welcome", "Welcome to tack", "work")
            .with_priority(Priority::High)
            .with_description(
                "## Getting around\n\n\
                 | Key | Action |\n\
                 |-----|--------|\n\
                 | arrows | Move the highlight |\n\
                 | `Enter` | Open the card |\n\
                 | `Space` | Carry / set down |\n\
                 | `a` | Archive |\n\
                 | `?` | Help |\n\
                 | `Ctrl+C` | Quit |\n\n\
                 Everything you do is saved to a JSON snapshot on exit.",
            ),
    );

    store
}
