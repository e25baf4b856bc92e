//! Reminder domain model.
//!
//! # Responsibility
//! - Define the canonical reminder record persisted by storage.
//! - Define the display item consumed by view-models and UI callers.
//! - Define the map point of interest picked while drafting a reminder.
//!
//! # Invariants
//! - `id` is stable and never reused for another reminder.
//! - Every other field is free-form and independently optional.
//! - Title/location uniqueness is not enforced across records.

use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a reminder.
///
/// Kept as a string so ids minted outside this crate (platform geofence
/// request ids, imported data) stay valid.
pub type ReminderId = String;

/// Generates a fresh globally unique reminder id.
pub fn generate_reminder_id() -> ReminderId {
    Uuid::new_v4().to_string()
}

/// Record-level validation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ReminderValidationError {
    /// The record has no usable identity and cannot be persisted.
    EmptyId,
}

impl Display for ReminderValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "reminder id must not be empty"),
        }
    }
}

impl Error for ReminderValidationError {}

/// Canonical persisted reminder record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReminderRecord {
    pub id: ReminderId,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Human-readable label of the selected place.
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl ReminderRecord {
    /// Creates a new record with a generated stable id.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        location: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            id: generate_reminder_id(),
            title: Some(title.into()),
            description: Some(description.into()),
            location: Some(location.into()),
            latitude: Some(latitude),
            longitude: Some(longitude),
        }
    }

    /// Creates an empty record with a caller-provided id.
    ///
    /// Used by import paths and by geofence lookups where identity already
    /// exists externally.
    pub fn with_id(id: impl Into<ReminderId>) -> Self {
        Self {
            id: id.into(),
            title: None,
            description: None,
            location: None,
            latitude: None,
            longitude: None,
        }
    }

    /// Validates record-level invariants required before persistence.
    pub fn validate(&self) -> Result<(), ReminderValidationError> {
        if self.id.trim().is_empty() {
            return Err(ReminderValidationError::EmptyId);
        }
        Ok(())
    }

    /// Returns whether this record carries enough data to register a geofence.
    pub fn is_geofence_capable(&self) -> bool {
        self.location.is_some() && self.latitude.is_some() && self.longitude.is_some()
    }
}

#[derive(Deserialize)]
struct ReminderRecordWire {
    id: ReminderId,
    title: Option<String>,
    description: Option<String>,
    location: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

impl<'de> Deserialize<'de> for ReminderRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = ReminderRecordWire::deserialize(deserializer)?;
        let record = ReminderRecord {
            id: wire.id,
            title: wire.title,
            description: wire.description,
            location: wire.location,
            latitude: wire.latitude,
            longitude: wire.longitude,
        };
        record.validate().map_err(serde::de::Error::custom)?;
        Ok(record)
    }
}

/// Display projection of a reminder, as rendered by list and form views.
///
/// Same fields as [`ReminderRecord`]; conversion is a shape change only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReminderDataItem {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(default = "generate_reminder_id")]
    pub id: ReminderId,
}

impl ReminderDataItem {
    /// Creates a display item with a generated id.
    pub fn new(
        title: Option<String>,
        description: Option<String>,
        location: Option<String>,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Self {
        Self {
            title,
            description,
            location,
            latitude,
            longitude,
            id: generate_reminder_id(),
        }
    }
}

impl From<ReminderRecord> for ReminderDataItem {
    fn from(record: ReminderRecord) -> Self {
        Self {
            title: record.title,
            description: record.description,
            location: record.location,
            latitude: record.latitude,
            longitude: record.longitude,
            id: record.id,
        }
    }
}

impl From<ReminderDataItem> for ReminderRecord {
    /// Builds a record from a display item, minting an id if the item has none.
    fn from(item: ReminderDataItem) -> Self {
        let id = if item.id.trim().is_empty() {
            generate_reminder_id()
        } else {
            item.id
        };
        Self {
            id,
            title: item.title,
            description: item.description,
            location: item.location,
            latitude: item.latitude,
            longitude: item.longitude,
        }
    }
}

/// Map point of interest selected while drafting a reminder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointOfInterest {
    /// Map provider place id, when the pick came from a named place.
    pub place_id: Option<String>,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl PointOfInterest {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            place_id: None,
            name: name.into(),
            latitude,
            longitude,
        }
    }
}
