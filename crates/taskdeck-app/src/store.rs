//! In-memory task store shared by every screen.
//!
//! The store owns the authoritative epic and quick-hit collections and is
//! mutated synchronously from UI event handlers, one operation at a time.
//! Every mutation rebuilds only the path down to the modified entity and
//! republishes the full state as a [`StoreSnapshot`]; earlier snapshots stay
//! valid, so readers never observe a partially applied update.
//!
//! Operations addressing an unknown id are silent no-ops. Each mutation
//! returns an indicator (`bool` or `Option<Id>`) so tests and callers can
//! observe whether it applied, but a miss is never an error.

use std::sync::Arc;

use taskdeck_core::{
    Collaborator, CollaboratorId, Epic, EpicId, EpicPatch, QuickHit, QuickHitId, QuickHitPatch,
    SubTask, SubTaskId, SubTaskPatch, TaskStatus,
};
use time::{Date, OffsetDateTime};
use tokio::sync::watch;
use tracing::{debug, trace};

use crate::fixtures;

/// Immutable view of the full store state.
///
/// Snapshots share structure: cloning one is two reference bumps, and after a
/// mutation every entity outside the rebuilt path is pointer-equal
/// ([`Arc::ptr_eq`]) to the previous snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSnapshot {
    /// All epics, insertion ordered.
    pub epics: Arc<Vec<Arc<Epic>>>,
    /// All quick hits, insertion ordered.
    pub quick_hits: Arc<Vec<Arc<QuickHit>>>,
}

impl StoreSnapshot {
    fn empty() -> Self {
        Self {
            epics: Arc::new(Vec::new()),
            quick_hits: Arc::new(Vec::new()),
        }
    }

    /// Look up an epic by id.
    #[must_use]
    pub fn epic(&self, id: &EpicId) -> Option<&Arc<Epic>> {
        self.epics.iter().find(|epic| epic.id == *id)
    }

    /// Look up a quick hit by id.
    #[must_use]
    pub fn quick_hit(&self, id: &QuickHitId) -> Option<&Arc<QuickHit>> {
        self.quick_hits.iter().find(|hit| hit.id == *id)
    }

    /// Epics that are not yet completed, in insertion order.
    #[must_use]
    pub fn active_epics(&self) -> impl Iterator<Item = &Arc<Epic>> {
        self.epics
            .iter()
            .filter(|epic| epic.status != TaskStatus::Completed)
    }

    /// Completed epics, in insertion order.
    #[must_use]
    pub fn completed_epics(&self) -> impl Iterator<Item = &Arc<Epic>> {
        self.epics
            .iter()
            .filter(|epic| epic.status == TaskStatus::Completed)
    }

    /// Quick hits still open, in insertion order.
    #[must_use]
    pub fn pending_quick_hits(&self) -> impl Iterator<Item = &Arc<QuickHit>> {
        self.quick_hits.iter().filter(|hit| !hit.completed)
    }

    /// Quick hits already done, in insertion order.
    #[must_use]
    pub fn completed_quick_hits(&self) -> impl Iterator<Item = &Arc<QuickHit>> {
        self.quick_hits.iter().filter(|hit| hit.completed)
    }
}

/// Epic fields minus the store-assigned id and creation timestamp.
#[derive(Debug, Clone, Default)]
pub struct EpicDraft {
    /// Epic title.
    pub title: String,
    /// Optional longer description.
    pub description: Option<String>,
    /// Initial status.
    pub status: TaskStatus,
    /// Optional due date.
    pub due_date: Option<Date>,
    /// Initial checklist items.
    pub sub_tasks: Vec<SubTaskDraft>,
    /// Initial collaborators.
    pub collaborators: Vec<CollaboratorDraft>,
}

/// Sub-task fields minus the store-assigned id.
#[derive(Debug, Clone, Default)]
pub struct SubTaskDraft {
    /// Checklist row text.
    pub title: String,
    /// Initial status.
    pub status: TaskStatus,
}

/// Quick-hit fields minus the store-assigned id and creation timestamp.
#[derive(Debug, Clone, Default)]
pub struct QuickHitDraft {
    /// Quick-hit title.
    pub title: String,
    /// Optional due date.
    pub due_date: Option<Date>,
    /// Initial completion flag.
    pub completed: bool,
    /// Initial collaborators.
    pub collaborators: Vec<CollaboratorDraft>,
}

/// Collaborator fields minus the store-assigned id.
#[derive(Debug, Clone, Default)]
pub struct CollaboratorDraft {
    /// Email address or phone number.
    pub contact: String,
    /// Optional display name.
    pub name: Option<String>,
}

impl CollaboratorDraft {
    fn materialize(self) -> Arc<Collaborator> {
        Arc::new(Collaborator {
            id: CollaboratorId::generate(),
            contact: self.contact,
            name: self.name,
        })
    }
}

/// Owner of the epic and quick-hit collections.
///
/// Constructed once at application start and handed to the screen layer by
/// reference; all mutation entry points take `&mut self` and complete fully
/// before the next begins (single-threaded UI dispatch, no locking).
#[derive(Debug)]
pub struct TaskStore {
    snapshot: StoreSnapshot,
    publisher: watch::Sender<StoreSnapshot>,
}

impl TaskStore {
    /// Create a store with empty collections.
    #[must_use]
    pub fn new() -> Self {
        Self::from_snapshot(StoreSnapshot::empty())
    }

    /// Create a store seeded with the startup fixture data
    /// (two sample epics, three sample quick hits).
    #[must_use]
    pub fn with_fixtures() -> Self {
        Self::from_snapshot(fixtures::seed())
    }

    fn from_snapshot(snapshot: StoreSnapshot) -> Self {
        let (publisher, _) = watch::channel(snapshot.clone());
        Self {
            snapshot,
            publisher,
        }
    }

    /// Current state. Cheap to clone and valid until dropped; later
    /// mutations produce new snapshots instead of touching this one.
    #[must_use]
    pub fn snapshot(&self) -> StoreSnapshot {
        self.snapshot.clone()
    }

    /// Subscribe to state changes. The receiver is marked changed after
    /// every mutation and always yields the latest full snapshot.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<StoreSnapshot> {
        self.publisher.subscribe()
    }

    fn publish_epics(&mut self, epics: Vec<Arc<Epic>>) {
        let next = StoreSnapshot {
            epics: Arc::new(epics),
            quick_hits: Arc::clone(&self.snapshot.quick_hits),
        };
        self.snapshot = next.clone();
        self.publisher.send_replace(next);
    }

    fn publish_quick_hits(&mut self, quick_hits: Vec<Arc<QuickHit>>) {
        let next = StoreSnapshot {
            epics: Arc::clone(&self.snapshot.epics),
            quick_hits: Arc::new(quick_hits),
        };
        self.snapshot = next.clone();
        self.publisher.send_replace(next);
    }

    /// Append a new epic and return its generated id.
    pub fn add_epic(&mut self, draft: EpicDraft) -> EpicId {
        let id = EpicId::generate();
        let epic = Arc::new(Epic {
            id: id.clone(),
            title: draft.title,
            description: draft.description,
            status: draft.status,
            due_date: draft.due_date,
            sub_tasks: draft
                .sub_tasks
                .into_iter()
                .map(|sub| {
                    Arc::new(SubTask {
                        id: SubTaskId::generate(),
                        title: sub.title,
                        status: sub.status,
                    })
                })
                .collect(),
            collaborators: draft
                .collaborators
                .into_iter()
                .map(CollaboratorDraft::materialize)
                .collect(),
            created_at: OffsetDateTime::now_utc(),
        });

        let mut epics = (*self.snapshot.epics).clone();
        epics.push(epic);
        self.publish_epics(epics);
        debug!(id = %id, "epic added");
        id
    }

    /// Shallow-merge `patch` into the matching epic.
    ///
    /// Returns false (and changes nothing) when the id is unknown.
    pub fn update_epic(&mut self, id: &EpicId, patch: EpicPatch) -> bool {
        let Some(index) = self.epic_index(id) else {
            return false;
        };

        let mut epics = (*self.snapshot.epics).clone();
        let mut epic = (*epics[index]).clone();
        patch.apply(&mut epic);
        epics[index] = Arc::new(epic);
        self.publish_epics(epics);
        debug!(id = %id, "epic updated");
        true
    }

    /// Remove the matching epic, discarding its sub-tasks and collaborators.
    ///
    /// Returns false (and changes nothing) when the id is unknown.
    pub fn delete_epic(&mut self, id: &EpicId) -> bool {
        let Some(index) = self.epic_index(id) else {
            return false;
        };

        let mut epics = (*self.snapshot.epics).clone();
        epics.remove(index);
        self.publish_epics(epics);
        debug!(id = %id, "epic deleted");
        true
    }

    /// Append a sub-task (status `NotStarted`) to the named epic and return
    /// its generated id, or `None` when the epic is unknown.
    pub fn add_sub_task(
        &mut self,
        epic_id: &EpicId,
        title: impl Into<String>,
    ) -> Option<SubTaskId> {
        let index = self.epic_index(epic_id)?;

        let id = SubTaskId::generate();
        let sub_task = Arc::new(SubTask {
            id: id.clone(),
            title: title.into(),
            status: TaskStatus::NotStarted,
        });

        let mut epics = (*self.snapshot.epics).clone();
        let mut epic = (*epics[index]).clone();
        epic.sub_tasks.push(sub_task);
        epics[index] = Arc::new(epic);
        self.publish_epics(epics);
        debug!(epic = %epic_id, sub_task = %id, "sub-task added");
        Some(id)
    }

    /// Shallow-merge `patch` into the matching sub-task.
    ///
    /// Returns false (and changes nothing) when either id is unknown.
    pub fn update_sub_task(
        &mut self,
        epic_id: &EpicId,
        sub_task_id: &SubTaskId,
        patch: SubTaskPatch,
    ) -> bool {
        let Some((epic_index, sub_index)) = self.sub_task_index(epic_id, sub_task_id) else {
            return false;
        };

        let mut epics = (*self.snapshot.epics).clone();
        let mut epic = (*epics[epic_index]).clone();
        let mut sub_task = (*epic.sub_tasks[sub_index]).clone();
        patch.apply(&mut sub_task);
        epic.sub_tasks[sub_index] = Arc::new(sub_task);
        epics[epic_index] = Arc::new(epic);
        self.publish_epics(epics);
        debug!(epic = %epic_id, sub_task = %sub_task_id, "sub-task updated");
        true
    }

    /// Remove the matching sub-task.
    ///
    /// Returns false (and changes nothing) when either id is unknown, so a
    /// repeated delete is a safe no-op.
    pub fn delete_sub_task(&mut self, epic_id: &EpicId, sub_task_id: &SubTaskId) -> bool {
        let Some((epic_index, sub_index)) = self.sub_task_index(epic_id, sub_task_id) else {
            return false;
        };

        let mut epics = (*self.snapshot.epics).clone();
        let mut epic = (*epics[epic_index]).clone();
        epic.sub_tasks.remove(sub_index);
        epics[epic_index] = Arc::new(epic);
        self.publish_epics(epics);
        debug!(epic = %epic_id, sub_task = %sub_task_id, "sub-task deleted");
        true
    }

    /// Append a new quick hit and return its generated id.
    pub fn add_quick_hit(&mut self, draft: QuickHitDraft) -> QuickHitId {
        let id = QuickHitId::generate();
        let quick_hit = Arc::new(QuickHit {
            id: id.clone(),
            title: draft.title,
            due_date: draft.due_date,
            completed: draft.completed,
            collaborators: draft
                .collaborators
                .into_iter()
                .map(CollaboratorDraft::materialize)
                .collect(),
            created_at: OffsetDateTime::now_utc(),
        });

        let mut quick_hits = (*self.snapshot.quick_hits).clone();
        quick_hits.push(quick_hit);
        self.publish_quick_hits(quick_hits);
        debug!(id = %id, "quick hit added");
        id
    }

    /// Shallow-merge `patch` into the matching quick hit.
    ///
    /// Returns false (and changes nothing) when the id is unknown.
    pub fn update_quick_hit(&mut self, id: &QuickHitId, patch: QuickHitPatch) -> bool {
        let Some(index) = self.quick_hit_index(id) else {
            return false;
        };

        let mut quick_hits = (*self.snapshot.quick_hits).clone();
        let mut quick_hit = (*quick_hits[index]).clone();
        patch.apply(&mut quick_hit);
        quick_hits[index] = Arc::new(quick_hit);
        self.publish_quick_hits(quick_hits);
        debug!(id = %id, "quick hit updated");
        true
    }

    /// Remove the matching quick hit.
    ///
    /// Returns false (and changes nothing) when the id is unknown.
    pub fn delete_quick_hit(&mut self, id: &QuickHitId) -> bool {
        let Some(index) = self.quick_hit_index(id) else {
            return false;
        };

        let mut quick_hits = (*self.snapshot.quick_hits).clone();
        quick_hits.remove(index);
        self.publish_quick_hits(quick_hits);
        debug!(id = %id, "quick hit deleted");
        true
    }

    /// Append a collaborator to the named epic and return its generated id,
    /// or `None` when the epic is unknown. Duplicate contacts are allowed.
    pub fn add_collaborator_to_epic(
        &mut self,
        epic_id: &EpicId,
        draft: CollaboratorDraft,
    ) -> Option<CollaboratorId> {
        let index = self.epic_index(epic_id)?;

        let collaborator = draft.materialize();
        let id = collaborator.id.clone();

        let mut epics = (*self.snapshot.epics).clone();
        let mut epic = (*epics[index]).clone();
        epic.collaborators.push(collaborator);
        epics[index] = Arc::new(epic);
        self.publish_epics(epics);
        debug!(epic = %epic_id, collaborator = %id, "collaborator added");
        Some(id)
    }

    /// Append a collaborator to the named quick hit and return its generated
    /// id, or `None` when the quick hit is unknown.
    pub fn add_collaborator_to_quick_hit(
        &mut self,
        quick_hit_id: &QuickHitId,
        draft: CollaboratorDraft,
    ) -> Option<CollaboratorId> {
        let index = self.quick_hit_index(quick_hit_id)?;

        let collaborator = draft.materialize();
        let id = collaborator.id.clone();

        let mut quick_hits = (*self.snapshot.quick_hits).clone();
        let mut quick_hit = (*quick_hits[index]).clone();
        quick_hit.collaborators.push(collaborator);
        quick_hits[index] = Arc::new(quick_hit);
        self.publish_quick_hits(quick_hits);
        debug!(quick_hit = %quick_hit_id, collaborator = %id, "collaborator added");
        Some(id)
    }

    /// Remove the matching collaborator from the named epic.
    ///
    /// Returns false (and changes nothing) when either id is unknown, so a
    /// repeated delete is a safe no-op.
    pub fn delete_collaborator_from_epic(
        &mut self,
        epic_id: &EpicId,
        collaborator_id: &CollaboratorId,
    ) -> bool {
        let Some(epic_index) = self.epic_index(epic_id) else {
            return false;
        };
        let Some(collab_index) = self.snapshot.epics[epic_index]
            .collaborators
            .iter()
            .position(|collab| collab.id == *collaborator_id)
        else {
            trace!(epic = %epic_id, collaborator = %collaborator_id, "mutation for unknown collaborator ignored");
            return false;
        };

        let mut epics = (*self.snapshot.epics).clone();
        let mut epic = (*epics[epic_index]).clone();
        epic.collaborators.remove(collab_index);
        epics[epic_index] = Arc::new(epic);
        self.publish_epics(epics);
        debug!(epic = %epic_id, collaborator = %collaborator_id, "collaborator removed");
        true
    }

    /// Remove the matching collaborator from the named quick hit.
    ///
    /// Returns false (and changes nothing) when either id is unknown.
    pub fn delete_collaborator_from_quick_hit(
        &mut self,
        quick_hit_id: &QuickHitId,
        collaborator_id: &CollaboratorId,
    ) -> bool {
        let Some(hit_index) = self.quick_hit_index(quick_hit_id) else {
            return false;
        };
        let Some(collab_index) = self.snapshot.quick_hits[hit_index]
            .collaborators
            .iter()
            .position(|collab| collab.id == *collaborator_id)
        else {
            trace!(quick_hit = %quick_hit_id, collaborator = %collaborator_id, "mutation for unknown collaborator ignored");
            return false;
        };

        let mut quick_hits = (*self.snapshot.quick_hits).clone();
        let mut quick_hit = (*quick_hits[hit_index]).clone();
        quick_hit.collaborators.remove(collab_index);
        quick_hits[hit_index] = Arc::new(quick_hit);
        self.publish_quick_hits(quick_hits);
        debug!(quick_hit = %quick_hit_id, collaborator = %collaborator_id, "collaborator removed");
        true
    }

    fn epic_index(&self, id: &EpicId) -> Option<usize> {
        let index = self.snapshot.epics.iter().position(|epic| epic.id == *id);
        if index.is_none() {
            trace!(id = %id, "mutation for unknown epic ignored");
        }
        index
    }

    fn quick_hit_index(&self, id: &QuickHitId) -> Option<usize> {
        let index = self
            .snapshot
            .quick_hits
            .iter()
            .position(|hit| hit.id == *id);
        if index.is_none() {
            trace!(id = %id, "mutation for unknown quick hit ignored");
        }
        index
    }

    fn sub_task_index(
        &self,
        epic_id: &EpicId,
        sub_task_id: &SubTaskId,
    ) -> Option<(usize, usize)> {
        let epic_index = self.epic_index(epic_id)?;
        let sub_index = self.snapshot.epics[epic_index]
            .sub_tasks
            .iter()
            .position(|sub| sub.id == *sub_task_id);
        if sub_index.is_none() {
            trace!(epic = %epic_id, sub_task = %sub_task_id, "mutation for unknown sub-task ignored");
        }
        Some((epic_index, sub_index?))
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}
