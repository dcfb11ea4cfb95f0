use super::collection::{Collection, Index};
use super::record::{Record, non_empty};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Stored task status. `overdue` is never stored, see [`TaskState`].
///
/// Values written by other clients (`"in-progress"`, ...) are kept as
/// [`TaskStatus::Other`] and count as not completed; `null` reads as pending.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum TaskStatus {
    #[default]
    Pending,
    Completed,
    Other(String),
}

impl TaskStatus {
    pub fn as_str(&self) -> &str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Completed => "completed",
            TaskStatus::Other(s) => s,
        }
    }
}

impl From<Option<String>> for TaskStatus {
    fn from(raw: Option<String>) -> Self {
        match raw {
            None => TaskStatus::Pending,
            Some(s) if s == "pending" => TaskStatus::Pending,
            Some(s) if s == "completed" => TaskStatus::Completed,
            Some(s) => TaskStatus::Other(s),
        }
    }
}

impl From<&str> for TaskStatus {
    fn from(raw: &str) -> Self {
        Self::from(Some(raw.to_string()))
    }
}

impl From<TaskStatus> for String {
    fn from(status: TaskStatus) -> Self {
        status.as_str().to_string()
    }
}

/// Derived view of a task: stored status plus the overdue check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    Pending,
    Completed,
    Overdue,
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TaskState::Pending => "pending",
            TaskState::Completed => "completed",
            TaskState::Overdue => "overdue",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// `YYYY-MM-DD` or any timestamp; may be unparsable.
    #[serde(default)]
    pub due_date: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Task {
    pub fn new(id: impl Into<String>, title: impl Into<String>, due_date: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            due_date: due_date.into(),
            category: String::new(),
            status: TaskStatus::Pending,
            priority: None,
            description: None,
            extra: Map::new(),
        }
    }

    pub fn in_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }
}

impl Record for Task {
    const COLLECTION: Collection = Collection::Tasks;

    fn key(&self) -> &str {
        &self.id
    }

    fn index_value(&self, index: Index) -> Option<&str> {
        match index {
            Index::DueDate => non_empty(&self.due_date),
            Index::Category => non_empty(&self.category),
            Index::Status => Some(self.status.as_str()),
            Index::Date => None,
        }
    }
}
