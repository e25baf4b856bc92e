//! Volatile in-memory reminder store.
//!
//! Keeps rows in insertion order so `find_all` matches the SQLite store's
//! iteration order. Contents are lost when the store is dropped.

use crate::model::reminder::ReminderRecord;
use crate::repo::reminder_store::{ReminderStore, StoreResult};

#[derive(Debug, Default)]
pub struct InMemoryReminderStore {
    rows: Vec<ReminderRecord>,
}

impl InMemoryReminderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `records`, applying upsert semantics.
    pub fn with_records(records: impl IntoIterator<Item = ReminderRecord>) -> StoreResult<Self> {
        let mut store = Self::new();
        for record in records {
            store.insert_or_replace(&record)?;
        }
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl ReminderStore for InMemoryReminderStore {
    fn insert_or_replace(&mut self, record: &ReminderRecord) -> StoreResult<()> {
        record.validate()?;

        match self.rows.iter_mut().find(|row| row.id == record.id) {
            Some(existing) => *existing = record.clone(),
            None => self.rows.push(record.clone()),
        }
        Ok(())
    }

    fn find_by_id(&self, id: &str) -> StoreResult<Option<ReminderRecord>> {
        Ok(self.rows.iter().find(|row| row.id == id).cloned())
    }

    fn find_all(&self) -> StoreResult<Vec<ReminderRecord>> {
        Ok(self.rows.clone())
    }

    fn delete_all(&mut self) -> StoreResult<()> {
        self.rows.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::InMemoryReminderStore;
    use crate::model::reminder::ReminderRecord;
    use crate::repo::reminder_store::ReminderStore;

    #[test]
    fn with_records_applies_upsert() {
        let mut record = ReminderRecord::new("a", "d", "l", 1.0, 2.0);
        let original = record.clone();
        record.title = Some("b".to_string());

        let store = InMemoryReminderStore::with_records([original, record.clone()]).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.find_by_id(&record.id).unwrap(), Some(record));
    }
}
