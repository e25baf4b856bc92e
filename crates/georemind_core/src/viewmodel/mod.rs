//! View-models orchestrating reminder flows for UI callers.
//!
//! # Responsibility
//! - Turn repository outcomes and validation results into observable signals.
//! - Keep UI code free of storage and validation details.
//!
//! # Invariants
//! - View-models never panic or return errors; every outcome becomes a signal.
//! - Operations are `async fn`s whose only suspension points are repository
//!   calls; dropping an operation's future abandons it.

pub mod auth;
pub mod base;
pub mod list;
pub mod save;
pub mod signal;
