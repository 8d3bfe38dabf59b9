//! Domain types for taskdeck: epics, quick hits, and their patch payloads.

/// Identifier types.
pub mod id;
/// Entity definitions.
pub mod model;
/// Partial-update payloads.
pub mod patch;

pub use id::{CollaboratorId, EpicId, ParseIdError, QuickHitId, SubTaskId};
pub use model::{Collaborator, Epic, QuickHit, SubTask, TaskStatus};
pub use patch::{EpicPatch, FieldPatch, QuickHitPatch, SubTaskPatch};
