//! Authentication state derived from the external identity provider.
//!
//! The provider reports either an authenticated identity or nothing; this
//! module only maps that callback to a UI state.

use crate::viewmodel::signal::Signal;
use log::info;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthenticationState {
    Authenticated,
    Unauthenticated,
    InvalidAuthentication,
}

impl AuthenticationState {
    /// Maps an identity-provider callback to a state.
    ///
    /// A present but blank identity is treated as invalid.
    pub fn from_identity(identity: Option<&str>) -> Self {
        match identity {
            Some(value) if value.trim().is_empty() => Self::InvalidAuthentication,
            Some(_) => Self::Authenticated,
            None => Self::Unauthenticated,
        }
    }
}

#[derive(Debug)]
pub struct AuthenticationViewModel {
    pub authentication_state: Signal<AuthenticationState>,
}

impl AuthenticationViewModel {
    pub fn new() -> Self {
        Self {
            authentication_state: Signal::new(AuthenticationState::Unauthenticated),
        }
    }

    pub fn on_identity_changed(&self, identity: Option<&str>) {
        let state = AuthenticationState::from_identity(identity);
        info!("event=auth_state module=viewmodel status=ok state={state:?}");
        self.authentication_state.set(state);
    }
}

impl Default for AuthenticationViewModel {
    fn default() -> Self {
        Self::new()
    }
}
