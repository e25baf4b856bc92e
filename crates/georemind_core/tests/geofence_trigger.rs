mod common;

use common::{reminder1, reminder2, FakeReminderRepository};
use georemind_core::db::open_db_in_memory;
use georemind_core::{
    resolve_triggered, GeofenceEvent, GeofenceTransition, LocalReminderRepository,
    ReminderRepository, SqliteReminderStore,
};

#[tokio::test]
async fn enter_trigger_resolves_known_ids_in_order() {
    let first = reminder1();
    let second = reminder2();
    let repo = FakeReminderRepository::with_reminders(vec![first.clone(), second.clone()]);
    let event = GeofenceEvent {
        transition: GeofenceTransition::Enter,
        request_ids: vec![second.id.clone(), "unknown".to_string(), first.id.clone()],
    };

    let notifications = resolve_triggered(&repo, &event).await;

    assert_eq!(notifications.len(), 2);
    assert_eq!(notifications[0].reminder.id, second.id);
    assert_eq!(notifications[0].headline(), "Title2");
    assert_eq!(notifications[1].reminder.id, first.id);
}

#[tokio::test]
async fn non_enter_transitions_are_ignored() {
    let first = reminder1();
    let repo = FakeReminderRepository::with_reminders(vec![first.clone()]);
    let event = GeofenceEvent {
        transition: GeofenceTransition::Exit,
        request_ids: vec![first.id],
    };

    assert!(resolve_triggered(&repo, &event).await.is_empty());
}

#[tokio::test]
async fn trigger_after_clear_yields_nothing() {
    let store = SqliteReminderStore::try_new(open_db_in_memory().unwrap()).unwrap();
    let repo = LocalReminderRepository::new(store);
    let record = reminder1();
    repo.save_reminder(record.clone()).await;
    repo.delete_all_reminders().await;

    let event = GeofenceEvent {
        transition: GeofenceTransition::Enter,
        request_ids: vec![record.id],
    };

    assert!(resolve_triggered(&repo, &event).await.is_empty());
}
