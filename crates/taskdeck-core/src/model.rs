//! Entity types owned by the task store.
//!
//! Collections of child entities hold [`Arc`]-ed elements so that a store
//! mutation only rebuilds the path down to the modified entity; untouched
//! siblings keep their allocation and screens can use [`Arc::ptr_eq`] as a
//! cheap "did this subtree change" test.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use time::{Date, OffsetDateTime};

use crate::id::{CollaboratorId, EpicId, QuickHitId, SubTaskId};

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// Completion state of an epic or sub-task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Work has not begun.
    #[default]
    NotStarted,
    /// Work is underway.
    InProgress,
    /// Work is done.
    Completed,
}

impl TaskStatus {
    /// Snake-case name used in serialized form and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }

    /// Human-readable label shown by status badges.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }

    /// Next status in the tap cycle used by checklist rows.
    ///
    /// The cycle exists for UI convenience only; any status may also be set
    /// directly through an update.
    #[must_use]
    pub const fn cycled(self) -> Self {
        match self {
            Self::NotStarted => Self::InProgress,
            Self::InProgress => Self::Completed,
            Self::Completed => Self::NotStarted,
        }
    }
}

/// A contact (email address or phone number) attached to an epic or quick
/// hit. Identity is the `id`; the store does not enforce `contact`
/// uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collaborator {
    /// Store-assigned identifier.
    pub id: CollaboratorId,
    /// Email address or phone number.
    pub contact: String,
    /// Optional display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A checklist item owned by exactly one epic. Its lifecycle is bound to the
/// parent: deleting the epic discards its sub-tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubTask {
    /// Store-assigned identifier, unique within the parent epic.
    pub id: SubTaskId,
    /// Checklist row text.
    pub title: String,
    /// Completion state.
    pub status: TaskStatus,
}

/// A large task with sub-tasks, a due date, a status, and collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Epic {
    /// Store-assigned identifier, unique within the epic collection.
    pub id: EpicId,
    /// Epic title.
    pub title: String,
    /// Optional longer description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Overall completion state.
    pub status: TaskStatus,
    /// Optional due date.
    #[serde(
        with = "iso_date::option",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub due_date: Option<Date>,
    /// Checklist items, insertion ordered, ids unique within this epic.
    pub sub_tasks: Vec<Arc<SubTask>>,
    /// Attached contacts, insertion ordered, ids unique within this epic.
    pub collaborators: Vec<Arc<Collaborator>>,
    /// Creation timestamp stamped by the store.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Epic {
    /// Number of sub-tasks in the `Completed` state.
    #[must_use]
    pub fn completed_sub_tasks(&self) -> usize {
        self.sub_tasks
            .iter()
            .filter(|sub| sub.status == TaskStatus::Completed)
            .count()
    }

    /// Completed-over-total progress fraction in `0.0..=1.0`.
    ///
    /// An epic without sub-tasks reports `0.0`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        if self.sub_tasks.is_empty() {
            return 0.0;
        }
        self.completed_sub_tasks() as f64 / self.sub_tasks.len() as f64
    }

    /// True when the due date has passed and the epic is not completed.
    #[must_use]
    pub fn is_overdue(&self, today: Date) -> bool {
        self.due_date
            .is_some_and(|due| due < today && self.status != TaskStatus::Completed)
    }
}

/// A small, single-step task with an optional due date and boolean
/// completion. No sub-tasks, no status enum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickHit {
    /// Store-assigned identifier, unique within the quick-hit collection.
    pub id: QuickHitId,
    /// Quick-hit title.
    pub title: String,
    /// Optional due date.
    #[serde(
        with = "iso_date::option",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub due_date: Option<Date>,
    /// Whether the quick hit is done.
    pub completed: bool,
    /// Attached contacts, insertion ordered, ids unique within this quick hit.
    pub collaborators: Vec<Arc<Collaborator>>,
    /// Creation timestamp stamped by the store.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl QuickHit {
    /// True when the due date has passed and the quick hit is not completed.
    #[must_use]
    pub fn is_overdue(&self, today: Date) -> bool {
        self.due_date
            .is_some_and(|due| due < today && !self.completed)
    }
}
