//! Reminder list view-model.
//!
//! # Responsibility
//! - Load all reminders and project them to display items.
//! - Drive the loading and empty-state signals of the list screen.
//!
//! # Invariants
//! - `loading` is `true` only while the repository fetch is in flight.
//! - After a load, `no_data` is `true` iff the list is empty or the load failed.

use crate::model::reminder::ReminderDataItem;
use crate::outcome::Outcome;
use crate::repo::reminder_repo::ReminderRepository;
use crate::viewmodel::base::{BaseViewModel, Destination, NavigationCommand};
use crate::viewmodel::signal::Signal;
use log::{info, warn};
use std::sync::Arc;

pub struct RemindersListViewModel {
    pub base: BaseViewModel,
    /// Display items from the last completed load.
    pub items: Signal<Vec<ReminderDataItem>>,
    repo: Arc<dyn ReminderRepository>,
}

impl RemindersListViewModel {
    pub fn new(repo: Arc<dyn ReminderRepository>) -> Self {
        Self {
            base: BaseViewModel::new(),
            items: Signal::new(Vec::new()),
            repo,
        }
    }

    /// Fetches every reminder and publishes the resulting list state.
    ///
    /// Dropping the returned future before completion abandons the load; the
    /// `loading` signal is then left as last published.
    pub async fn load_reminders(&self) {
        self.base.show_loading(true);

        let items = match self.repo.get_reminders().await {
            Outcome::Success(records) => {
                info!(
                    "event=load_reminders module=viewmodel status=ok count={}",
                    records.len()
                );
                records
                    .into_iter()
                    .map(ReminderDataItem::from)
                    .collect::<Vec<_>>()
            }
            Outcome::Error { message, .. } => {
                warn!("event=load_reminders module=viewmodel status=error error={message}");
                self.base.show_snack_bar(message);
                Vec::new()
            }
        };

        self.base.no_data.set(items.is_empty());
        self.items.set(items);
        self.base.show_loading(false);
    }

    /// Looks up one reminder for a detail view.
    ///
    /// A miss or storage failure is published on `snack_bar` and yields `None`.
    pub async fn reminder_details(&self, id: &str) -> Option<ReminderDataItem> {
        match self.repo.get_reminder(id).await {
            Outcome::Success(record) => Some(ReminderDataItem::from(record)),
            Outcome::Error { message, .. } => {
                self.base.show_snack_bar(message);
                None
            }
        }
    }

    pub fn navigate_to_add_reminder(&self) {
        self.base
            .navigate(NavigationCommand::To(Destination::SaveReminder));
    }
}
