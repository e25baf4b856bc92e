//! Storage engine contract and SQLite implementation.
//!
//! # Responsibility
//! - Define the row-store contract the reminder repository is built on.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths call `ReminderRecord::validate()` before SQL mutations.
//! - Every call is durable on return; there is no write buffering.
//! - `find_all` returns rows in insertion order; upserts keep a row's position.

use crate::db::schema::ensure_current;
use crate::model::reminder::{ReminderRecord, ReminderValidationError};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const REMINDER_SELECT_SQL: &str = "SELECT
    id,
    title,
    description,
    location,
    latitude,
    longitude
FROM reminders";

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage engine failure.
#[derive(Debug)]
pub enum StoreError {
    Validation(ReminderValidationError),
    Sqlite(rusqlite::Error),
    /// Database file was written by a newer build.
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
    /// Connection schema is missing or not at the expected migration version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Persisted row violates record invariants.
    InvalidData(String),
    /// Storage was closed or is otherwise unavailable.
    Unavailable(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "reminders schema version {db_version} is newer than supported {latest_supported}"
            ),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}"
            ),
            Self::InvalidData(message) => write!(f, "invalid persisted reminder data: {message}"),
            Self::Unavailable(message) => write!(f, "reminder storage unavailable: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Sqlite(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ReminderValidationError> for StoreError {
    fn from(value: ReminderValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Durable row store keyed by reminder id.
pub trait ReminderStore: Send + 'static {
    /// Inserts the record, or overwrites the row with the same id.
    fn insert_or_replace(&mut self, record: &ReminderRecord) -> StoreResult<()>;
    fn find_by_id(&self, id: &str) -> StoreResult<Option<ReminderRecord>>;
    fn find_all(&self) -> StoreResult<Vec<ReminderRecord>>;
    /// Removes every row. Safe on an empty store.
    fn delete_all(&mut self) -> StoreResult<()>;
}

/// SQLite-backed reminder store.
pub struct SqliteReminderStore {
    conn: Connection,
}

impl SqliteReminderStore {
    /// Wraps a migrated connection.
    ///
    /// # Errors
    /// - `UninitializedConnection` when the schema was never upgraded, so the
    ///   store never runs against a missing `reminders` table.
    pub fn try_new(conn: Connection) -> StoreResult<Self> {
        ensure_current(&conn)?;
        Ok(Self { conn })
    }

    /// Returns the number of stored rows.
    pub fn count(&self) -> StoreResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM reminders;", [], |row| row.get(0))?;
        usize::try_from(count)
            .map_err(|_| StoreError::InvalidData(format!("negative row count `{count}`")))
    }
}

impl ReminderStore for SqliteReminderStore {
    fn insert_or_replace(&mut self, record: &ReminderRecord) -> StoreResult<()> {
        record.validate()?;

        self.conn.execute(
            "INSERT INTO reminders (
                id,
                title,
                description,
                location,
                latitude,
                longitude
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            ON CONFLICT(id) DO UPDATE SET
                title = excluded.title,
                description = excluded.description,
                location = excluded.location,
                latitude = excluded.latitude,
                longitude = excluded.longitude,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![
                record.id.as_str(),
                record.title.as_deref(),
                record.description.as_deref(),
                record.location.as_deref(),
                record.latitude,
                record.longitude,
            ],
        )?;

        Ok(())
    }

    fn find_by_id(&self, id: &str) -> StoreResult<Option<ReminderRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{REMINDER_SELECT_SQL} WHERE id = ?1;"))?;
        let row = stmt
            .query_row([id], |row| Ok(read_reminder_row(row)))
            .optional()?;

        match row {
            Some(parsed) => Ok(Some(parsed?)),
            None => Ok(None),
        }
    }

    fn find_all(&self) -> StoreResult<Vec<ReminderRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{REMINDER_SELECT_SQL} ORDER BY rowid ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut records = Vec::new();

        while let Some(row) = rows.next()? {
            records.push(read_reminder_row(row)?);
        }

        Ok(records)
    }

    fn delete_all(&mut self) -> StoreResult<()> {
        self.conn.execute("DELETE FROM reminders;", [])?;
        Ok(())
    }
}

fn read_reminder_row(row: &Row<'_>) -> StoreResult<ReminderRecord> {
    let record = ReminderRecord {
        id: row.get("id")?,
        title: row.get("title")?,
        description: row.get("description")?,
        location: row.get("location")?,
        latitude: row.get("latitude")?,
        longitude: row.get("longitude")?,
    };
    record
        .validate()
        .map_err(|err| StoreError::InvalidData(format!("row `{}`: {err}", record.id)))?;
    Ok(record)
}
