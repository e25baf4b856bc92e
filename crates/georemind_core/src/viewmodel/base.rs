//! Signals shared by every reminder view-model.
//!
//! # Responsibility
//! - Own the loading/empty/notification/navigation signals UI code renders.
//! - Define the UI-facing validation and navigation vocabularies.
//!
//! # Invariants
//! - Each signal is latest-wins; one-shot notifications are `Option` values
//!   that stay set until the next publish.

use crate::viewmodel::signal::Signal;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Form validation failure raised before any storage call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationError {
    TitleRequired,
    LocationRequired,
}

impl ValidationError {
    /// User-facing message shown in the snack bar.
    pub fn message(self) -> &'static str {
        match self {
            Self::TitleRequired => "Please enter title",
            Self::LocationRequired => "Please select location",
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Screens reachable from the reminder flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Destination {
    SaveReminder,
    SelectLocation,
}

/// Navigation instruction emitted by a view-model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "destination", rename_all = "snake_case")]
pub enum NavigationCommand {
    To(Destination),
    Back,
}

/// Observable state common to list and save view-models.
#[derive(Debug)]
pub struct BaseViewModel {
    pub loading: Signal<bool>,
    pub no_data: Signal<bool>,
    /// Storage failure on a write the user asked for.
    pub error_message: Signal<Option<String>>,
    /// Read failures and lookup misses.
    pub snack_bar: Signal<Option<String>>,
    pub validation_error: Signal<Option<ValidationError>>,
    pub toast: Signal<Option<String>>,
    pub navigation: Signal<Option<NavigationCommand>>,
}

impl BaseViewModel {
    pub fn new() -> Self {
        Self {
            loading: Signal::new(false),
            no_data: Signal::new(false),
            error_message: Signal::new(None),
            snack_bar: Signal::new(None),
            validation_error: Signal::new(None),
            toast: Signal::new(None),
            navigation: Signal::new(None),
        }
    }

    pub fn show_loading(&self, loading: bool) {
        self.loading.set(loading);
    }

    pub fn show_snack_bar(&self, message: impl Into<String>) {
        self.snack_bar.set(Some(message.into()));
    }

    pub fn show_validation_error(&self, error: ValidationError) {
        self.validation_error.set(Some(error));
    }

    pub fn show_toast(&self, message: impl Into<String>) {
        self.toast.set(Some(message.into()));
    }

    pub fn show_error_message(&self, message: impl Into<String>) {
        self.error_message.set(Some(message.into()));
    }

    pub fn navigate(&self, command: NavigationCommand) {
        self.navigation.set(Some(command));
    }
}

impl Default for BaseViewModel {
    fn default() -> Self {
        Self::new()
    }
}
