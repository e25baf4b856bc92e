//! Save-reminder view-model.
//!
//! # Responsibility
//! - Hold the in-progress reminder draft edited by the form and map screens.
//! - Validate drafts and persist them through the repository.
//! - Publish the geofence request for a saved, geofence-capable reminder.
//!
//! # Invariants
//! - Title is validated strictly before location; a draft missing both
//!   reports only `TitleRequired`.
//! - A draft that fails validation never reaches the repository.
//! - `loading` is `true` only while the repository write is in flight.
//! - A rejected write publishes `error_message` only: no toast, no geofence
//!   request, no navigation.

use crate::geofence::{GeofenceRequest, DEFAULT_GEOFENCE_RADIUS_METERS};
use crate::model::reminder::{PointOfInterest, ReminderDataItem, ReminderRecord};
use crate::outcome::Outcome;
use crate::repo::reminder_repo::ReminderRepository;
use crate::viewmodel::base::{BaseViewModel, Destination, NavigationCommand, ValidationError};
use crate::viewmodel::signal::Signal;
use log::{debug, info, warn};
use std::sync::Arc;

/// Confirmation shown after a reminder is saved.
pub const REMINDER_SAVED: &str = "Reminder Saved !";

pub struct SaveReminderViewModel {
    pub base: BaseViewModel,
    pub reminder_title: Signal<Option<String>>,
    pub reminder_description: Signal<Option<String>>,
    pub reminder_selected_location: Signal<Option<String>>,
    pub selected_poi: Signal<Option<PointOfInterest>>,
    pub latitude: Signal<Option<f64>>,
    pub longitude: Signal<Option<f64>>,
    /// Geofence registration data for the last saved reminder.
    pub geofence_request: Signal<Option<GeofenceRequest>>,
    geofence_radius_meters: f64,
    repo: Arc<dyn ReminderRepository>,
}

impl SaveReminderViewModel {
    pub fn new(repo: Arc<dyn ReminderRepository>) -> Self {
        Self::with_geofence_radius(repo, DEFAULT_GEOFENCE_RADIUS_METERS)
    }

    pub fn with_geofence_radius(repo: Arc<dyn ReminderRepository>, radius_meters: f64) -> Self {
        Self {
            base: BaseViewModel::new(),
            reminder_title: Signal::new(None),
            reminder_description: Signal::new(None),
            reminder_selected_location: Signal::new(None),
            selected_poi: Signal::new(None),
            latitude: Signal::new(None),
            longitude: Signal::new(None),
            geofence_request: Signal::new(None),
            geofence_radius_meters: radius_meters,
            repo,
        }
    }

    /// Resets every draft field to unset.
    pub fn on_clear(&self) {
        self.reminder_title.set(None);
        self.reminder_description.set(None);
        self.reminder_selected_location.set(None);
        self.selected_poi.set(None);
        self.latitude.set(None);
        self.longitude.set(None);
    }

    /// Opens the map screen to pick the reminder's place.
    pub fn navigate_to_select_location(&self) {
        self.base
            .navigate(NavigationCommand::To(Destination::SelectLocation));
    }

    /// Applies a map pick to the draft and returns to the form.
    pub fn on_location_selected(&self, poi: PointOfInterest) {
        self.latitude.set(Some(poi.latitude));
        self.longitude.set(Some(poi.longitude));
        self.reminder_selected_location.set(Some(poi.name.clone()));
        self.selected_poi.set(Some(poi));
        self.base.navigate(NavigationCommand::Back);
    }

    /// Builds a display item from the current draft fields with a fresh id.
    pub fn draft_item(&self) -> ReminderDataItem {
        ReminderDataItem::new(
            self.reminder_title.get(),
            self.reminder_description.get(),
            self.reminder_selected_location.get(),
            self.latitude.get(),
            self.longitude.get(),
        )
    }

    /// Checks the fields required before a save.
    ///
    /// On failure publishes the matching `validation_error` and returns `false`.
    pub fn validate_entered_data(&self, item: &ReminderDataItem) -> bool {
        if is_blank(item.title.as_deref()) {
            self.base.show_validation_error(ValidationError::TitleRequired);
            return false;
        }
        if is_blank(item.location.as_deref()) {
            self.base
                .show_validation_error(ValidationError::LocationRequired);
            return false;
        }
        true
    }

    /// Persists `item` and publishes the save confirmation.
    ///
    /// When storage rejects the write the message lands on `error_message`
    /// and the form stays open. Does not validate; use
    /// [`Self::validate_and_save_reminder`] for form input.
    pub async fn save_reminder(&self, item: ReminderDataItem) {
        self.base.show_loading(true);

        let record = ReminderRecord::from(item);
        let geofence = GeofenceRequest::for_record(&record, self.geofence_radius_meters);
        let id = record.id.clone();
        let outcome = self.repo.try_save_reminder(record).await;

        self.base.show_loading(false);
        if let Outcome::Error { message, .. } = outcome {
            warn!("event=save_reminder module=viewmodel status=error id={id}");
            self.base.show_error_message(message);
            return;
        }
        self.base.show_toast(REMINDER_SAVED);
        info!(
            "event=save_reminder module=viewmodel status=ok id={id} geofence={}",
            geofence.is_some()
        );
        if let Some(request) = geofence {
            self.geofence_request.set(Some(request));
        }
        self.base.navigate(NavigationCommand::Back);
    }

    /// Validates `item` and saves it only when validation passes.
    ///
    /// Returns whether the save was attempted; a storage rejection still
    /// returns `true` and shows on `error_message`.
    pub async fn validate_and_save_reminder(&self, item: ReminderDataItem) -> bool {
        if !self.validate_entered_data(&item) {
            debug!("event=save_reminder module=viewmodel status=skipped reason=validation");
            return false;
        }
        self.save_reminder(item).await;
        true
    }

    /// Validates and saves the current draft fields.
    pub async fn validate_and_save_draft(&self) -> bool {
        let item = self.draft_item();
        self.validate_and_save_reminder(item).await
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |text| text.trim().is_empty())
}
