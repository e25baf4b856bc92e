mod common;

use common::{reminder1, reminder2, FakeReminderRepository};
use georemind_core::{
    Destination, NavigationCommand, ReminderDataItem, RemindersListViewModel, REMINDER_NOT_FOUND,
};
use std::sync::Arc;

fn view_model(repo: &Arc<FakeReminderRepository>) -> Arc<RemindersListViewModel> {
    Arc::new(RemindersListViewModel::new(repo.clone()))
}

#[tokio::test]
async fn load_reminders_shows_loading_until_fetch_completes() {
    let repo = Arc::new(FakeReminderRepository::with_reminders(vec![
        reminder1(),
        reminder2(),
    ]));
    let vm = view_model(&repo);
    let mut loading = vm.base.loading.subscribe();
    repo.pause();

    let task = tokio::spawn({
        let vm = vm.clone();
        async move { vm.load_reminders().await }
    });

    loading.wait_for(|is_loading| *is_loading).await.unwrap();
    assert!(vm.base.loading.get());
    assert!(vm.items.get().is_empty());

    repo.resume();
    task.await.unwrap();

    assert!(!vm.base.loading.get());
    assert!(!vm.base.no_data.get());
}

#[tokio::test]
async fn load_reminders_projects_records_to_display_items() {
    let first = reminder1();
    let second = reminder2();
    let repo = Arc::new(FakeReminderRepository::with_reminders(vec![
        first.clone(),
        second.clone(),
    ]));
    let vm = view_model(&repo);

    vm.load_reminders().await;

    assert_eq!(
        vm.items.get(),
        vec![ReminderDataItem::from(first), ReminderDataItem::from(second)]
    );
}

#[tokio::test]
async fn no_reminders_shows_empty_state() {
    let repo = Arc::new(FakeReminderRepository::with_reminders(vec![reminder1()]));
    let vm = view_model(&repo);

    georemind_core::ReminderRepository::delete_all_reminders(repo.as_ref()).await;
    vm.load_reminders().await;

    assert!(vm.base.no_data.get());
    assert!(vm.items.get().is_empty());
    assert!(!vm.base.loading.get());
}

#[tokio::test]
async fn load_error_shows_message_and_empty_state() {
    let repo = Arc::new(FakeReminderRepository::with_reminders(vec![reminder1()]));
    repo.set_should_return_error(true);
    let vm = view_model(&repo);

    vm.load_reminders().await;

    assert_eq!(
        vm.base.snack_bar.get().as_deref(),
        Some("GetReminders Exception")
    );
    assert!(vm.base.no_data.get());
    assert!(vm.items.get().is_empty());
    assert!(!vm.base.loading.get());
}

#[tokio::test]
async fn reload_after_error_recovers() {
    let repo = Arc::new(FakeReminderRepository::with_reminders(vec![reminder1()]));
    repo.set_should_return_error(true);
    let vm = view_model(&repo);
    vm.load_reminders().await;

    repo.set_should_return_error(false);
    vm.load_reminders().await;

    assert!(!vm.base.no_data.get());
    assert_eq!(vm.items.get().len(), 1);
}

#[tokio::test]
async fn reminder_details_hits_and_misses() {
    let record = reminder1();
    let repo = Arc::new(FakeReminderRepository::with_reminders(vec![record.clone()]));
    let vm = view_model(&repo);

    let item = vm.reminder_details(&record.id).await.unwrap();
    assert_eq!(item.id, record.id);

    assert!(vm.reminder_details("105").await.is_none());
    assert_eq!(
        vm.base.snack_bar.get().as_deref(),
        Some(REMINDER_NOT_FOUND)
    );
}

#[test]
fn add_reminder_navigates_to_save_screen() {
    let repo = Arc::new(FakeReminderRepository::new());
    let vm = view_model(&repo);

    vm.navigate_to_add_reminder();

    assert_eq!(
        vm.base.navigation.get(),
        Some(NavigationCommand::To(Destination::SaveReminder))
    );
}
