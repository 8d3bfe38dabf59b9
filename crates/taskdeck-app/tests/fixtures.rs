use taskdeck_app::TaskStore;
use taskdeck_core::TaskStatus;
use time::macros::date;

#[test]
fn fixture_load_yields_two_epics_and_three_quick_hits() {
    let store = TaskStore::with_fixtures();
    let snapshot = store.snapshot();

    assert_eq!(snapshot.epics.len(), 2);
    assert_eq!(snapshot.quick_hits.len(), 3);

    let launch = &snapshot.epics[0];
    assert_eq!(launch.title, "Launch Mobile App v2.0");
    assert_eq!(launch.status, TaskStatus::InProgress);
    assert_eq!(launch.due_date, Some(date!(2026 - 03 - 31)));
    assert_eq!(launch.sub_tasks.len(), 4);
    assert_eq!(launch.completed_sub_tasks(), 1);
    assert_eq!(launch.collaborators.len(), 2);
    assert_eq!(launch.collaborators[0].contact, "alex@company.com");

    let campaign = &snapshot.epics[1];
    assert_eq!(campaign.title, "Q1 Marketing Campaign");
    assert_eq!(campaign.status, TaskStatus::NotStarted);
    assert_eq!(campaign.sub_tasks.len(), 3);
    assert!(campaign.collaborators.is_empty());

    let titles: Vec<&str> = snapshot
        .quick_hits
        .iter()
        .map(|hit| hit.title.as_str())
        .collect();
    assert_eq!(
        titles,
        [
            "Review open pull requests",
            "Update team standup notes",
            "Schedule 1:1 with design team"
        ]
    );
    assert!(snapshot.quick_hits[1].completed);
    assert_eq!(
        snapshot.quick_hits[2].collaborators[0].contact,
        "design@company.com"
    );
}

#[test]
fn fixture_ids_are_unique_within_their_collections() {
    let snapshot = TaskStore::with_fixtures().snapshot();

    assert_ne!(snapshot.epics[0].id, snapshot.epics[1].id);
    for (i, hit) in snapshot.quick_hits.iter().enumerate() {
        for other in &snapshot.quick_hits[i + 1..] {
            assert_ne!(hit.id, other.id);
        }
    }
    let launch = &snapshot.epics[0];
    for (i, sub) in launch.sub_tasks.iter().enumerate() {
        for other in &launch.sub_tasks[i + 1..] {
            assert_ne!(sub.id, other.id);
        }
    }
}

#[test]
fn home_screen_partitions_reflect_fixture_statuses() {
    let snapshot = TaskStore::with_fixtures().snapshot();

    assert_eq!(snapshot.active_epics().count(), 2);
    assert_eq!(snapshot.completed_epics().count(), 0);
    assert_eq!(snapshot.pending_quick_hits().count(), 2);
    assert_eq!(snapshot.completed_quick_hits().count(), 1);
}

#[test]
fn an_empty_store_has_no_fixture_data() {
    let snapshot = TaskStore::new().snapshot();
    assert!(snapshot.epics.is_empty());
    assert!(snapshot.quick_hits.is_empty());
}
