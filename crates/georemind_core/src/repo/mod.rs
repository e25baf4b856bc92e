//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the storage engine contract and its SQLite/in-memory engines.
//! - Wrap storage behind the asynchronous, non-failing reminder repository.
//!
//! # Invariants
//! - Storage writes must enforce `ReminderRecord::validate()` before persistence.
//! - The repository boundary returns `Outcome` values, never `Err` or panics.

pub mod memory_store;
pub mod reminder_repo;
pub mod reminder_store;
