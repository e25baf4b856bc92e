//! Reminder repository contract and storage-backed implementation.
//!
//! # Responsibility
//! - Mediate between view-models and the storage engine.
//! - Translate every storage outcome into an [`Outcome`] value.
//!
//! # Invariants
//! - Repository calls never panic and never return `Err` to callers.
//! - A lookup miss yields exactly `Error("Reminder not found!")`.
//! - There is no cache: every read goes to storage and sees the latest write.
//! - Write failures are logged and published on `write_errors()`; callers
//!   that need the outcome of a save use `try_save_reminder`.

use crate::model::reminder::ReminderRecord;
use crate::outcome::Outcome;
use crate::repo::reminder_store::{ReminderStore, StoreResult};
use crate::viewmodel::signal::Signal;
use async_trait::async_trait;
use log::{debug, error, info, warn};
use std::sync::{Arc, Mutex};
use std::time::Instant;
use tokio::sync::watch;

/// Error message returned when no record has the requested id.
pub const REMINDER_NOT_FOUND: &str = "Reminder not found!";

/// Asynchronous data source for reminders.
#[async_trait]
pub trait ReminderRepository: Send + Sync {
    /// Returns every stored reminder in storage iteration order.
    async fn get_reminders(&self) -> Outcome<Vec<ReminderRecord>>;

    /// Returns the reminder with `id`, or `Error("Reminder not found!")`.
    async fn get_reminder(&self, id: &str) -> Outcome<ReminderRecord>;

    /// Upserts `record` and reports whether storage accepted it.
    async fn try_save_reminder(&self, record: ReminderRecord) -> Outcome<()>;

    /// Upserts `record`. Fire-and-forget; failures go out of band.
    async fn save_reminder(&self, record: ReminderRecord) {
        if let Outcome::Error { message, .. } = self.try_save_reminder(record).await {
            debug!("event=save_reminder module=repo status=error error={message}");
        }
    }

    /// Removes every reminder. Idempotent.
    async fn delete_all_reminders(&self);
}

/// Repository over a local [`ReminderStore`].
///
/// Storage calls run on the blocking thread pool; they are the only
/// suspension points of every operation.
pub struct LocalReminderRepository<S: ReminderStore> {
    store: Arc<Mutex<S>>,
    write_errors: Signal<Option<String>>,
}

impl<S: ReminderStore> LocalReminderRepository<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            write_errors: Signal::new(None),
        }
    }

    /// Subscribes to write-path failures (`save_reminder`, `delete_all_reminders`).
    pub fn write_errors(&self) -> watch::Receiver<Option<String>> {
        self.write_errors.subscribe()
    }

    /// Returns the most recent write-path failure, if any.
    pub fn last_write_error(&self) -> Option<String> {
        self.write_errors.get()
    }

    async fn run<T, F>(&self, op: &'static str, task: F) -> Result<T, String>
    where
        T: Send + 'static,
        F: FnOnce(&mut S) -> StoreResult<T> + Send + 'static,
    {
        let started_at = Instant::now();
        let store = Arc::clone(&self.store);
        let joined = tokio::task::spawn_blocking(move || {
            let mut guard = store
                .lock()
                .map_err(|_| "reminder storage lock poisoned".to_string())?;
            task(&mut *guard).map_err(|err| err.to_string())
        })
        .await;

        let result = match joined {
            Ok(result) => result,
            Err(err) => Err(format!("reminder storage task failed: {err}")),
        };

        match &result {
            Ok(_) => debug!(
                "event={op} module=repo status=ok duration_ms={}",
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event={op} module=repo status=error duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            ),
        }
        result
    }

    fn report_write_failure(&self, message: String) {
        self.write_errors.set(Some(message));
    }
}

#[async_trait]
impl<S: ReminderStore> ReminderRepository for LocalReminderRepository<S> {
    async fn get_reminders(&self) -> Outcome<Vec<ReminderRecord>> {
        match self.run("get_reminders", |store| store.find_all()).await {
            Ok(records) => {
                info!(
                    "event=get_reminders module=repo status=ok count={}",
                    records.len()
                );
                Outcome::Success(records)
            }
            Err(message) => Outcome::error(message),
        }
    }

    async fn get_reminder(&self, id: &str) -> Outcome<ReminderRecord> {
        let lookup_id = id.to_string();
        match self
            .run("get_reminder", move |store| store.find_by_id(&lookup_id))
            .await
        {
            Ok(Some(record)) => Outcome::Success(record),
            Ok(None) => {
                warn!("event=get_reminder module=repo status=not_found id={id}");
                Outcome::error(REMINDER_NOT_FOUND)
            }
            Err(message) => Outcome::error(message),
        }
    }

    async fn try_save_reminder(&self, record: ReminderRecord) -> Outcome<()> {
        let id = record.id.clone();
        let result = self
            .run("save_reminder", move |store| store.insert_or_replace(&record))
            .await;
        match result {
            Ok(()) => {
                info!("event=save_reminder module=repo status=ok id={id}");
                Outcome::Success(())
            }
            Err(message) => {
                let message = format!("save_reminder failed: {message}");
                self.report_write_failure(message.clone());
                Outcome::error(message)
            }
        }
    }

    async fn delete_all_reminders(&self) {
        if let Err(message) = self
            .run("delete_all_reminders", |store| store.delete_all())
            .await
        {
            self.report_write_failure(format!("delete_all_reminders failed: {message}"));
        }
    }
}
