//! Application layer for taskdeck.
//!
//! Provides the in-memory [`TaskStore`] with snapshot publication, the
//! stack-based [`Navigator`], and the startup fixture data. Screens read
//! snapshots, invoke the mutation operations in response to user input, and
//! re-render from the republished state.

mod fixtures;
/// Navigation history.
pub mod navigation;
/// Task state and mutations.
pub mod store;

pub use navigation::{Frame, NavParams, Navigator, Screen};
pub use store::{
    CollaboratorDraft, EpicDraft, QuickHitDraft, StoreSnapshot, SubTaskDraft, TaskStore,
};
