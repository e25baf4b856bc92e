//! Geofence data contract between reminders and platform location services.
//!
//! # Responsibility
//! - Describe the geofence a saved reminder asks the platform to register.
//! - Resolve platform geofence triggers back into reminder notifications.
//!
//! # Invariants
//! - A geofence request id is the reminder id it was built from.
//! - Only reminders with location label and coordinates produce a request.
//! - Only `Enter` transitions produce notifications.

use crate::model::reminder::{ReminderDataItem, ReminderId, ReminderRecord};
use crate::outcome::Outcome;
use crate::repo::reminder_repo::ReminderRepository;
use log::{info, warn};
use serde::{Deserialize, Serialize};

pub const DEFAULT_GEOFENCE_RADIUS_METERS: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeofenceTransition {
    Enter,
    Exit,
    Dwell,
}

/// Registration data handed to the platform geofencing client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeofenceRequest {
    pub request_id: ReminderId,
    pub latitude: f64,
    pub longitude: f64,
    pub radius_meters: f64,
    pub transition: GeofenceTransition,
}

impl GeofenceRequest {
    /// Builds an enter-transition request, or `None` when the record is not
    /// geofence-capable.
    pub fn for_record(record: &ReminderRecord, radius_meters: f64) -> Option<Self> {
        if !record.is_geofence_capable() {
            return None;
        }
        Some(Self {
            request_id: record.id.clone(),
            latitude: record.latitude?,
            longitude: record.longitude?,
            radius_meters,
            transition: GeofenceTransition::Enter,
        })
    }
}

/// Trigger delivered by platform location services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeofenceEvent {
    pub transition: GeofenceTransition,
    pub request_ids: Vec<ReminderId>,
}

/// Notification payload for a reminder whose geofence was entered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReminderNotification {
    pub reminder: ReminderDataItem,
}

impl ReminderNotification {
    pub fn headline(&self) -> &str {
        self.reminder.title.as_deref().unwrap_or("Reminder")
    }
}

/// Resolves the reminders behind a geofence trigger.
///
/// Ids with no stored reminder are logged and skipped; the returned
/// notifications keep the order of `event.request_ids`.
pub async fn resolve_triggered(
    repo: &dyn ReminderRepository,
    event: &GeofenceEvent,
) -> Vec<ReminderNotification> {
    if event.transition != GeofenceTransition::Enter {
        return Vec::new();
    }

    let mut notifications = Vec::with_capacity(event.request_ids.len());
    for request_id in &event.request_ids {
        match repo.get_reminder(request_id).await {
            Outcome::Success(record) => notifications.push(ReminderNotification {
                reminder: ReminderDataItem::from(record),
            }),
            Outcome::Error { message, .. } => warn!(
                "event=geofence_trigger module=geofence status=skipped id={request_id} error={message}"
            ),
        }
    }

    info!(
        "event=geofence_trigger module=geofence status=ok triggered={} notified={}",
        event.request_ids.len(),
        notifications.len()
    );
    notifications
}
