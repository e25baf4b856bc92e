//! Core data and state layer for GeoRemind.
//! This crate is the single source of truth for reminder persistence,
//! validation and the UI-state signals built on top of them.

pub mod config;
pub mod db;
pub mod geofence;
pub mod logging;
pub mod model;
pub mod outcome;
pub mod repo;
pub mod viewmodel;

pub use config::{ConfigError, CoreConfig};
pub use geofence::{
    resolve_triggered, GeofenceEvent, GeofenceRequest, GeofenceTransition, ReminderNotification,
    DEFAULT_GEOFENCE_RADIUS_METERS,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::reminder::{
    generate_reminder_id, PointOfInterest, ReminderDataItem, ReminderId, ReminderRecord,
    ReminderValidationError,
};
pub use outcome::Outcome;
pub use repo::memory_store::InMemoryReminderStore;
pub use repo::reminder_repo::{LocalReminderRepository, ReminderRepository, REMINDER_NOT_FOUND};
pub use repo::reminder_store::{ReminderStore, SqliteReminderStore, StoreError, StoreResult};
pub use viewmodel::auth::{AuthenticationState, AuthenticationViewModel};
pub use viewmodel::base::{BaseViewModel, Destination, NavigationCommand, ValidationError};
pub use viewmodel::list::RemindersListViewModel;
pub use viewmodel::save::{SaveReminderViewModel, REMINDER_SAVED};
pub use viewmodel::signal::Signal;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
