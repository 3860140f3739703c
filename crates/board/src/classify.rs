//! Partitioning of tasks into the columns they belong to.

use tack_protocol::{Column, Task};

/// One column paired with the tasks that fall into it.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnTasks<'a> {
    /// The column itself.
    pub column: Column,
    /// Tasks in the column, in the order they appeared in the input.
    pub tasks: Vec<&'a Task>,
}

impl ColumnTasks<'_> {
    /// Returns `true` if no task fell into this column.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the number of tasks in this column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }
}

/// Partitions `tasks` across `columns`.
///
/// Each task lands in the first column whose name equals its status
/// ignoring ASCII case, or whose id equals it exactly. A task matching no
/// column appears nowhere in the result; the board simply does not show
/// it. Within a column, tasks keep their input order.
///
/// Every column is present in the result, including empty ones, so the
/// caller can render the full board without consulting the column set
/// again.
///
/// # Examples
///
/// ```
/// use tack_board::classify;
/// use tack_protocol::{Task, default_columns};
///
/// let tasks = vec![
///     Task::with_id("1", "Write the changelog", "work").with_status("to do"),
///     Task::with_id("2", "Fix the login button", "work").with_status("IN PROGRESS"),
/// ];
///
/// let board = classify(tasks.iter(), &default_columns());
/// assert_eq!(board[0].tasks[0].id.as_str(), "1");
/// assert_eq!(board[1].tasks[0].id.as_str(), "2");
/// assert!(board[2].is_empty());
/// ```
#[must_use]
pub fn classify<'a>(
    tasks: impl IntoIterator<Item = &'a Task>,
    columns: &[Column],
) -> Vec<ColumnTasks<'a>> {
    let mut board: Vec<ColumnTasks<'a>> = columns
        .iter()
        .map(|column| ColumnTasks {
            column: column.clone(),
            tasks: Vec::new(),
        })
        .collect();

    for task in tasks {
        let home = board
            .iter_mut()
            .find(|group| group.column.matches_status(&task.status));
        if let Some(group) = home {
            group.tasks.push(task);
        }
    }

    board
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;
    use tack_protocol::ColumnKind;

    use super::*;

    fn arb_kind() -> impl Strategy<Value = ColumnKind> {
        prop_oneof![
            Just(ColumnKind::Todo),
            Just(ColumnKind::InProgress),
            Just(ColumnKind::Done),
            Just(ColumnKind::Closed),
        ]
    }

    prop_compose! {
        fn arb_column()(
            id in "[a-z]{1,8}",
            name in "[A-Z]{1,8}",
            kind in arb_kind(),
        ) -> Column {
            Column::new(id, name, "#808080", kind)
        }
    }

    /// Statuses overlap column names and ids often enough to exercise both
    /// match rules, and miss often enough to produce orphans.
    fn arb_status() -> impl Strategy<Value = String> {
        prop_oneof![
            "[A-Z]{1,8}",
            "[a-z]{1,8}",
            "[A-Za-z]{1,8}",
            "[0-9]{1,4}",
        ]
    }

    fn arb_tasks() -> impl Strategy<Value = Vec<Task>> {
        prop::collection::vec(arb_status(), 0..20).prop_map(|statuses| {
            statuses
                .into_iter()
                .enumerate()
                .map(|(i, status)| {
                    Task::with_id(format!("task-{i}"), format!("Task {i}"), "work")
                        .with_status(status)
                })
                .collect()
        })
    }

    proptest! {
        /// Tests that a task appears in exactly one column when some column
        /// matches its status, and in none otherwise.
        #[test]
        fn each_task_appears_at_most_once(
            columns in prop::collection::vec(arb_column(), 1..5),
            tasks in arb_tasks(),
        ) {
            let board = classify(tasks.iter(), &columns);

            for task in &tasks {
                let appearances: usize = board
                    .iter()
                    .map(|group| {
                        group
                            .tasks
                            .iter()
                            .filter(|member| member.id == task.id)
                            .count()
                    })
                    .sum();
                let matched = columns.iter().any(|column| column.matches_status(&task.status));

                prop_assert_eq!(appearances, usize::from(matched));
            }
        }

        /// Tests that classification preserves the input order of the tasks
        /// within every column.
        #[test]
        fn classification_preserves_input_order(
            columns in prop::collection::vec(arb_column(), 1..5),
            tasks in arb_tasks(),
        ) {
            let board = classify(tasks.iter(), &columns);

            for group in &board {
                let positions: Vec<usize> = group
                    .tasks
                    .iter()
                    .map(|member| {
                        tasks
                            .iter()
                            .position(|task| task.id == member.id)
                            .expect("classified task came from the input")
                    })
                    .collect();

                prop_assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
            }
        }

        /// Tests that every column of the input is present in the output,
        /// in order, whether or not any task fell into it.
        #[test]
        fn every_column_is_represented(
            columns in prop::collection::vec(arb_column(), 1..5),
            tasks in arb_tasks(),
        ) {
            let board = classify(tasks.iter(), &columns);

            prop_assert_eq!(board.len(), columns.len());
            for (group, column) in board.iter().zip(&columns) {
                prop_assert_eq!(&group.column, column);
            }
        }
    }
}
