//! Partial-update payloads applied by the task store.
//!
//! Each patch enumerates the updatable fields of its entity explicitly;
//! a field left as `None` is carried over unchanged (shallow merge).
//! Clearable optional fields use [`FieldPatch`] so a patch can distinguish
//! "leave alone" from "clear".

use time::Date;

use crate::model::{Epic, QuickHit, SubTask, TaskStatus};

/// Patch for a clearable optional field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldPatch<T> {
    /// Set the field to the provided value.
    Set(T),
    /// Clear the field entirely.
    Clear,
}

impl<T> FieldPatch<T> {
    /// The field value this patch produces.
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Set(value) => Some(value),
            Self::Clear => None,
        }
    }
}

/// Partial update for an [`Epic`]. Sub-tasks and collaborators are mutated
/// through their own store operations, not through this patch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EpicPatch {
    /// Overwrite the title.
    pub title: Option<String>,
    /// Set or clear the description.
    pub description: Option<FieldPatch<String>>,
    /// Overwrite the status.
    pub status: Option<TaskStatus>,
    /// Set or clear the due date.
    pub due_date: Option<FieldPatch<Date>>,
}

impl EpicPatch {
    /// Returns true when no field would change.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.due_date.is_none()
    }

    /// Merge the named fields into `epic`, leaving the rest untouched.
    pub fn apply(self, epic: &mut Epic) {
        if let Some(title) = self.title {
            epic.title = title;
        }
        if let Some(description) = self.description {
            epic.description = description.into_option();
        }
        if let Some(status) = self.status {
            epic.status = status;
        }
        if let Some(due_date) = self.due_date {
            epic.due_date = due_date.into_option();
        }
    }
}

/// Partial update for a [`SubTask`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubTaskPatch {
    /// Overwrite the title.
    pub title: Option<String>,
    /// Overwrite the status.
    pub status: Option<TaskStatus>,
}

impl SubTaskPatch {
    /// Returns true when no field would change.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.status.is_none()
    }

    /// Merge the named fields into `sub_task`, leaving the rest untouched.
    pub fn apply(self, sub_task: &mut SubTask) {
        if let Some(title) = self.title {
            sub_task.title = title;
        }
        if let Some(status) = self.status {
            sub_task.status = status;
        }
    }
}

/// Partial update for a [`QuickHit`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuickHitPatch {
    /// Overwrite the title.
    pub title: Option<String>,
    /// Set or clear the due date.
    pub due_date: Option<FieldPatch<Date>>,
    /// Overwrite the completion flag.
    pub completed: Option<bool>,
}

impl QuickHitPatch {
    /// Returns true when no field would change.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.due_date.is_none() && self.completed.is_none()
    }

    /// Merge the named fields into `quick_hit`, leaving the rest untouched.
    pub fn apply(self, quick_hit: &mut QuickHit) {
        if let Some(title) = self.title {
            quick_hit.title = title;
        }
        if let Some(due_date) = self.due_date {
            quick_hit.due_date = due_date.into_option();
        }
        if let Some(completed) = self.completed {
            quick_hit.completed = completed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::{EpicId, QuickHitId};
    use time::macros::{date, datetime};

    fn sample_epic() -> Epic {
        Epic {
            id: EpicId::generate(),
            title: "Launch Mobile App v2.0".to_owned(),
            description: Some("Complete redesign.".to_owned()),
            status: TaskStatus::InProgress,
            due_date: Some(date!(2026 - 03 - 31)),
            sub_tasks: Vec::new(),
            collaborators: Vec::new(),
            created_at: datetime!(2026-02-01 0:00 UTC),
        }
    }

    #[test]
    fn default_patch_is_empty_and_changes_nothing() {
        let mut epic = sample_epic();
        let before = epic.clone();

        let patch = EpicPatch::default();
        assert!(patch.is_empty());
        patch.apply(&mut epic);

        assert_eq!(epic, before);
    }

    #[test]
    fn status_only_patch_leaves_other_fields_alone() {
        let mut epic = sample_epic();

        EpicPatch {
            status: Some(TaskStatus::Completed),
            ..EpicPatch::default()
        }
        .apply(&mut epic);

        assert_eq!(epic.status, TaskStatus::Completed);
        assert_eq!(epic.title, "Launch Mobile App v2.0");
        assert_eq!(epic.description.as_deref(), Some("Complete redesign."));
        assert_eq!(epic.due_date, Some(date!(2026 - 03 - 31)));
    }

    #[test]
    fn field_patch_distinguishes_clear_from_leave_alone() {
        let mut epic = sample_epic();

        EpicPatch {
            description: Some(FieldPatch::Clear),
            ..EpicPatch::default()
        }
        .apply(&mut epic);
        assert_eq!(epic.description, None);
        // A patch that does not name the field leaves the cleared value alone.
        assert_eq!(epic.due_date, Some(date!(2026 - 03 - 31)));

        EpicPatch {
            due_date: Some(FieldPatch::Set(date!(2026 - 04 - 15))),
            ..EpicPatch::default()
        }
        .apply(&mut epic);
        assert_eq!(epic.due_date, Some(date!(2026 - 04 - 15)));
    }

    #[test]
    fn quick_hit_patch_toggles_completion() {
        let mut hit = QuickHit {
            id: QuickHitId::generate(),
            title: "Update team standup notes".to_owned(),
            due_date: None,
            completed: false,
            collaborators: Vec::new(),
            created_at: datetime!(2026-02-25 0:00 UTC),
        };

        QuickHitPatch {
            completed: Some(true),
            ..QuickHitPatch::default()
        }
        .apply(&mut hit);

        assert!(hit.completed);
        assert_eq!(hit.title, "Update team standup notes");
    }
}
