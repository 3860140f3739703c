//! Tasks, their identifiers, and their priorities.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::column::DEFAULT_STATUS;
use crate::space::{ListId, SpaceId};

/// Unique identifier for a task.
///
/// Ids are opaque strings. Tasks created at runtime get a UUID v4, but any
/// string loaded from a data file is accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Creates a task id from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh random id.
    ///
    /// # Examples
    ///
    /// ```
    /// use tack_protocol::TaskId;
    ///
    /// assert_ne!(TaskId::generate(), TaskId::generate());
    /// ```
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for TaskId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// How urgent a task is.
///
/// Priorities order from least to most urgent, so they can be compared
/// directly.
///
/// # Examples
///
/// ```
/// use tack_protocol::Priority;
///
/// assert!(Priority::Low < Priority::Urgent);
/// assert_eq!(Priority::default(), Priority::Medium);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Can wait.
    Low,
    /// The ordinary case.
    #[default]
    Medium,
    /// Should be picked up soon.
    High,
    /// Drop everything.
    Urgent,
}

impl Priority {
    /// Returns all priorities from least to most urgent.
    ///
    /// # Examples
    ///
    /// ```
    /// use tack_protocol::Priority;
    ///
    /// let priorities = Priority::all();
    /// assert_eq!(priorities.len(), 4);
    /// assert_eq!(priorities[0], Priority::Low);
    /// ```
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Low, Self::Medium, Self::High, Self::Urgent]
    }

    /// Returns a human-readable display name for the priority.
    ///
    /// # Examples
    ///
    /// ```
    /// use tack_protocol::Priority;
    ///
    /// assert_eq!(Priority::High.display_name(), "High");
    /// ```
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Urgent => "Urgent",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A task on the board.
///
/// The status is a free-form string rather than an enum: which statuses
/// exist depends on the columns of the space or list the task is filed
/// under, and those are user data.
///
/// # Examples
///
/// ```
/// use tack_protocol::{Priority, Task, DEFAULT_STATUS};
///
/// let task = Task::new("Ship the release", "work");
/// assert_eq!(task.status, DEFAULT_STATUS);
/// assert_eq!(task.priority, Priority::Medium);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Opaque identifier, unique within a board.
    pub id: TaskId,
    /// Short title shown on the board card.
    pub name: String,
    /// Longer markdown body, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Current status, matched against column names and ids.
    pub status: String,
    /// Urgency of the task.
    #[serde(default)]
    pub priority: Priority,
    /// The space this task is filed under.
    pub space: SpaceId,
    /// The list inside the space, if the task belongs to one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list: Option<ListId>,
    /// Who is working on this, if anyone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    /// Due date, if one was set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    /// Creation time, set once.
    pub created_at: DateTime<Utc>,
    /// Refreshed every time the task changes.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task with the given name, filed under a space.
    ///
    /// The task gets a freshly generated id and starts in the default
    /// status with medium priority. Timestamps are set to the current time.
    ///
    /// # Examples
    ///
    /// ```
    /// use tack_protocol::Task;
    ///
    /// let task = Task::new("Fix the login button", "work");
    /// assert_eq!(task.name, "Fix the login button");
    /// assert_eq!(task.space.as_str(), "work");
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>, space: impl Into<SpaceId>) -> Self {
        Self::with_id(TaskId::generate(), name, space)
    }

    /// Creates a new task keeping an id the caller already has, as saved
    /// boards and tests do.
    ///
    /// # Examples
    ///
    /// ```
    /// use tack_protocol::Task;
    ///
    /// let task = Task::with_id("task-1", "Fix the login button", "work");
    /// assert_eq!(task.id.as_str(), "task-1");
    /// ```
    #[must_use]
    pub fn with_id(
        id: impl Into<TaskId>,
        name: impl Into<String>,
        space: impl Into<SpaceId>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            status: DEFAULT_STATUS.to_owned(),
            priority: Priority::default(),
            space: space.into(),
            list: None,
            assignee: None,
            due_date: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the status without refreshing the timestamps.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the priority.
    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Files the task under a list.
    #[must_use]
    pub fn with_list(mut self, list: impl Into<ListId>) -> Self {
        self.list = Some(list.into());
        self
    }

    /// Sets the assignee.
    #[must_use]
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    /// Sets the due date.
    #[must_use]
    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Moves the task to a new status and refreshes the `updated_at`
    /// timestamp.
    ///
    /// # Examples
    ///
    /// ```
    /// use tack_protocol::Task;
    ///
    /// let mut task = Task::new("Work item", "work");
    /// task.set_status("IN PROGRESS");
    /// assert_eq!(task.status, "IN PROGRESS");
    /// ```
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
        self.updated_at = Utc::now();
    }
}
