//! Versioned layout of the `reminders` table.
//!
//! # Invariants
//! - Step versions increase by one; the applied version lives in
//!   `PRAGMA user_version`.
//! - All pending steps land in one transaction or none do.

use crate::repo::reminder_store::{StoreError, StoreResult};
use log::info;
use rusqlite::Connection;

/// `(version, sql)` upgrade steps for the reminders table, oldest first.
const SCHEMA_STEPS: &[(u32, &str)] = &[(1, include_str!("0001_reminders.sql"))];

/// Newest reminders schema this build can read and write.
pub fn latest_schema_version() -> u32 {
    SCHEMA_STEPS.last().map_or(0, |(version, _)| *version)
}

/// Reminders schema version recorded on `conn`; `0` for a fresh database.
pub fn schema_version(conn: &Connection) -> StoreResult<u32> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}

/// Upgrades `conn` to [`latest_schema_version`].
///
/// # Errors
/// - `UnsupportedSchemaVersion` when the file was written by a newer build.
pub(crate) fn upgrade(conn: &mut Connection) -> StoreResult<()> {
    let from = schema_version(conn)?;
    let latest = latest_schema_version();
    if from > latest {
        return Err(StoreError::UnsupportedSchemaVersion {
            db_version: from,
            latest_supported: latest,
        });
    }
    if from == latest {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for (version, sql) in SCHEMA_STEPS.iter().filter(|(version, _)| *version > from) {
        tx.execute_batch(sql)?;
        tx.pragma_update(None, "user_version", version)?;
    }
    tx.commit()?;

    info!("event=schema_upgrade module=db status=ok from={from} to={latest}");
    Ok(())
}

/// Rejects connections that were not upgraded to the latest schema.
pub(crate) fn ensure_current(conn: &Connection) -> StoreResult<()> {
    let actual_version = schema_version(conn)?;
    let expected_version = latest_schema_version();
    if actual_version != expected_version {
        return Err(StoreError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }
    Ok(())
}
