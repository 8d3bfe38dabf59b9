//! Sample data seeded once at startup.
//!
//! The fixture content mirrors what a fresh install shows: two epics in
//! different stages and three quick hits, one already done. Ids are
//! generated at seed time; titles, statuses, and dates are fixed.

use std::sync::Arc;

use taskdeck_core::{
    Collaborator, CollaboratorId, Epic, EpicId, QuickHit, QuickHitId, SubTask, SubTaskId,
    TaskStatus,
};
use time::macros::{date, datetime};

use crate::store::StoreSnapshot;

fn sub_task(title: &str, status: TaskStatus) -> Arc<SubTask> {
    Arc::new(SubTask {
        id: SubTaskId::generate(),
        title: title.to_owned(),
        status,
    })
}

fn collaborator(contact: &str, name: Option<&str>) -> Arc<Collaborator> {
    Arc::new(Collaborator {
        id: CollaboratorId::generate(),
        contact: contact.to_owned(),
        name: name.map(str::to_owned),
    })
}

pub(crate) fn seed() -> StoreSnapshot {
    let epics = vec![
        Arc::new(Epic {
            id: EpicId::generate(),
            title: "Launch Mobile App v2.0".to_owned(),
            description: Some(
                "Complete redesign and new feature rollout for the mobile app.".to_owned(),
            ),
            status: TaskStatus::InProgress,
            due_date: Some(date!(2026 - 03 - 31)),
            sub_tasks: vec![
                sub_task("Design new onboarding flow", TaskStatus::Completed),
                sub_task("Implement dark mode", TaskStatus::InProgress),
                sub_task("Performance optimizations", TaskStatus::NotStarted),
                sub_task("Beta testing with 50 users", TaskStatus::NotStarted),
            ],
            collaborators: vec![
                collaborator("alex@company.com", Some("Alex")),
                collaborator("+1 555-0100", Some("Jordan")),
            ],
            created_at: datetime!(2026-02-01 0:00 UTC),
        }),
        Arc::new(Epic {
            id: EpicId::generate(),
            title: "Q1 Marketing Campaign".to_owned(),
            description: Some(
                "Plan and execute the Q1 marketing push across all channels.".to_owned(),
            ),
            status: TaskStatus::NotStarted,
            due_date: Some(date!(2026 - 03 - 15)),
            sub_tasks: vec![
                sub_task("Define target audience", TaskStatus::NotStarted),
                sub_task("Create ad creatives", TaskStatus::NotStarted),
                sub_task("Set up analytics tracking", TaskStatus::NotStarted),
            ],
            collaborators: Vec::new(),
            created_at: datetime!(2026-02-10 0:00 UTC),
        }),
    ];

    let quick_hits = vec![
        Arc::new(QuickHit {
            id: QuickHitId::generate(),
            title: "Review open pull requests".to_owned(),
            due_date: Some(date!(2026 - 02 - 26)),
            completed: false,
            collaborators: Vec::new(),
            created_at: datetime!(2026-02-25 0:00 UTC),
        }),
        Arc::new(QuickHit {
            id: QuickHitId::generate(),
            title: "Update team standup notes".to_owned(),
            due_date: Some(date!(2026 - 02 - 25)),
            completed: true,
            collaborators: Vec::new(),
            created_at: datetime!(2026-02-25 0:00 UTC),
        }),
        Arc::new(QuickHit {
            id: QuickHitId::generate(),
            title: "Schedule 1:1 with design team".to_owned(),
            due_date: Some(date!(2026 - 02 - 28)),
            completed: false,
            collaborators: vec![collaborator("design@company.com", None)],
            created_at: datetime!(2026-02-24 0:00 UTC),
        }),
    ];

    StoreSnapshot {
        epics: Arc::new(epics),
        quick_hits: Arc::new(quick_hits),
    }
}
