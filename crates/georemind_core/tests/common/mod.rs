#![allow(dead_code)]

use async_trait::async_trait;
use georemind_core::{
    Outcome, ReminderRecord, ReminderRepository, ReminderStore, Signal, StoreError, StoreResult,
    REMINDER_NOT_FOUND,
};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

/// List-backed repository double.
///
/// `set_should_return_error(true)` makes reads fail; `pause()` holds every
/// operation at its suspension point until `resume()`.
pub struct FakeReminderRepository {
    reminders: Mutex<Vec<ReminderRecord>>,
    should_return_error: AtomicBool,
    paused: Signal<bool>,
    save_calls: AtomicUsize,
}

impl FakeReminderRepository {
    pub fn new() -> Self {
        Self::with_reminders(Vec::new())
    }

    pub fn with_reminders(reminders: Vec<ReminderRecord>) -> Self {
        Self {
            reminders: Mutex::new(reminders),
            should_return_error: AtomicBool::new(false),
            paused: Signal::new(false),
            save_calls: AtomicUsize::new(0),
        }
    }

    pub fn set_should_return_error(&self, value: bool) {
        self.should_return_error.store(value, Ordering::SeqCst);
    }

    pub fn pause(&self) {
        self.paused.set(true);
    }

    pub fn resume(&self) {
        self.paused.set(false);
    }

    pub fn save_calls(&self) -> usize {
        self.save_calls.load(Ordering::SeqCst)
    }

    pub fn snapshot(&self) -> Vec<ReminderRecord> {
        self.reminders.lock().unwrap().clone()
    }

    async fn wait_until_resumed(&self) {
        let mut paused = self.paused.subscribe();
        let _ = paused.wait_for(|is_paused| !*is_paused).await;
    }

    fn fails(&self) -> bool {
        self.should_return_error.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReminderRepository for FakeReminderRepository {
    async fn get_reminders(&self) -> Outcome<Vec<ReminderRecord>> {
        self.wait_until_resumed().await;
        if self.fails() {
            return Outcome::error("GetReminders Exception");
        }
        Outcome::Success(self.snapshot())
    }

    async fn get_reminder(&self, id: &str) -> Outcome<ReminderRecord> {
        self.wait_until_resumed().await;
        if self.fails() {
            return Outcome::error("GetReminder Exception");
        }
        match self.snapshot().into_iter().find(|record| record.id == id) {
            Some(record) => Outcome::Success(record),
            None => Outcome::error(REMINDER_NOT_FOUND),
        }
    }

    async fn try_save_reminder(&self, record: ReminderRecord) -> Outcome<()> {
        self.wait_until_resumed().await;
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        let mut reminders = self.reminders.lock().unwrap();
        match reminders.iter_mut().find(|row| row.id == record.id) {
            Some(existing) => *existing = record,
            None => reminders.push(record),
        }
        Outcome::Success(())
    }

    async fn delete_all_reminders(&self) {
        self.wait_until_resumed().await;
        self.reminders.lock().unwrap().clear();
    }
}

/// Store that reads as empty and refuses every write.
pub struct ReadOnlyDiskStore;

impl ReminderStore for ReadOnlyDiskStore {
    fn insert_or_replace(&mut self, _record: &ReminderRecord) -> StoreResult<()> {
        Err(StoreError::Unavailable("disk".to_string()))
    }

    fn find_by_id(&self, _id: &str) -> StoreResult<Option<ReminderRecord>> {
        Ok(None)
    }

    fn find_all(&self) -> StoreResult<Vec<ReminderRecord>> {
        Ok(Vec::new())
    }

    fn delete_all(&mut self) -> StoreResult<()> {
        Err(StoreError::Unavailable("disk".to_string()))
    }
}

pub fn reminder1() -> ReminderRecord {
    ReminderRecord::new("Title1", "Description1", "Location1", 1.37, 103.84)
}

pub fn reminder2() -> ReminderRecord {
    ReminderRecord::new("Title2", "Description2", "Location2", 103.84, 1.37)
}
