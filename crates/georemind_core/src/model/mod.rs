//! Domain model for location-bound reminders.
//!
//! # Responsibility
//! - Define the persisted reminder record and its display projection.
//! - Keep identity generation and record-level validation in one place.
//!
//! # Invariants
//! - Every persisted reminder is identified by a non-blank `ReminderId`.
//! - An id is assigned once at creation and never reassigned.

pub mod reminder;
