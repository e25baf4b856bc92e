mod common;

use common::{reminder1, reminder2};
use georemind_core::db::open_db_in_memory;
use georemind_core::{
    InMemoryReminderStore, LocalReminderRepository, Outcome, ReminderRecord, ReminderRepository,
    SqliteReminderStore, REMINDER_NOT_FOUND,
};
use std::collections::HashSet;

fn sqlite_repository() -> LocalReminderRepository<SqliteReminderStore> {
    let store = SqliteReminderStore::try_new(open_db_in_memory().unwrap()).unwrap();
    LocalReminderRepository::new(store)
}

#[tokio::test]
async fn get_reminders_returns_every_saved_record() {
    let repository = sqlite_repository();
    let first = reminder1();
    let second = reminder2();
    repository.save_reminder(first.clone()).await;
    repository.save_reminder(second.clone()).await;

    let records = match repository.get_reminders().await {
        Outcome::Success(records) => records,
        other => panic!("expected success, got {other:?}"),
    };

    assert_eq!(records.len(), 2);
    let ids: HashSet<_> = records.iter().map(|record| record.id.clone()).collect();
    assert!(ids.contains(&first.id));
    assert!(ids.contains(&second.id));
    assert!(records.contains(&first));
    assert!(records.contains(&second));
}

#[tokio::test]
async fn saved_record_is_fetched_field_for_field() {
    let repository = sqlite_repository();
    let record = ReminderRecord::new("title", "description", "location", 1.37, 103.84);
    repository.save_reminder(record.clone()).await;

    assert_eq!(
        repository.get_reminder(&record.id).await,
        Outcome::Success(record)
    );
}

#[tokio::test]
async fn save_overwrites_existing_id() {
    let repository = sqlite_repository();
    let mut record = reminder1();
    repository.save_reminder(record.clone()).await;

    record.title = Some("Renamed".to_string());
    repository.save_reminder(record.clone()).await;

    assert_eq!(
        repository.get_reminders().await,
        Outcome::Success(vec![record])
    );
}

#[tokio::test]
async fn unknown_id_returns_not_found() {
    let repository = sqlite_repository();

    assert_eq!(
        repository.get_reminder("105").await,
        Outcome::error(REMINDER_NOT_FOUND)
    );
}

#[tokio::test]
async fn delete_all_leaves_empty_success_and_not_found() {
    let repository = sqlite_repository();
    let record = reminder1();
    repository.save_reminder(record.clone()).await;

    repository.delete_all_reminders().await;

    assert_eq!(
        repository.get_reminders().await,
        Outcome::Success(Vec::new())
    );
    assert_eq!(
        repository.get_reminder(&record.id).await,
        Outcome::error(REMINDER_NOT_FOUND)
    );
}

#[tokio::test]
async fn delete_all_is_idempotent() {
    let repository = LocalReminderRepository::new(InMemoryReminderStore::new());
    repository.save_reminder(reminder1()).await;

    repository.delete_all_reminders().await;
    let after_once = repository.get_reminders().await;
    repository.delete_all_reminders().await;

    assert_eq!(repository.get_reminders().await, after_once);
    assert_eq!(repository.last_write_error(), None);
}

#[tokio::test]
async fn read_failure_surfaces_engine_message() {
    let broken = open_db_in_memory().unwrap();
    broken.execute_batch("DROP TABLE reminders;").unwrap();
    let broken_repository =
        LocalReminderRepository::new(SqliteReminderStore::try_new(broken).unwrap());

    let outcome = broken_repository.get_reminders().await;
    let message = outcome.error_message().unwrap_or_default().to_string();
    assert!(message.contains("no such table"), "unexpected: {message}");

    let lookup = broken_repository.get_reminder("any").await;
    assert!(lookup.is_error());
    assert_ne!(lookup.error_message(), Some(REMINDER_NOT_FOUND));
}

#[tokio::test]
async fn write_failure_is_published_out_of_band() {
    let broken = open_db_in_memory().unwrap();
    broken.execute_batch("DROP TABLE reminders;").unwrap();
    let repository = LocalReminderRepository::new(SqliteReminderStore::try_new(broken).unwrap());
    let mut write_errors = repository.write_errors();

    repository.save_reminder(reminder1()).await;

    write_errors.changed().await.unwrap();
    let message = write_errors.borrow_and_update().clone().unwrap();
    assert!(message.starts_with("save_reminder failed"));

    repository.delete_all_reminders().await;
    assert!(repository
        .last_write_error()
        .unwrap()
        .starts_with("delete_all_reminders failed"));
}
