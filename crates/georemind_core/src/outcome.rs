//! Two-variant outcome envelope returned across the repository boundary.
//!
//! # Responsibility
//! - Carry either a typed payload or a human-readable failure message.
//! - Stay plain data so it can cross task boundaries and be compared in tests.
//!
//! # Invariants
//! - There is no pending/unknown variant; in-flight state lives in view-models.
//! - Producing an `Outcome` never panics and never carries an error object.

use serde::{Deserialize, Serialize};

/// Outcome of a repository operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum Outcome<T> {
    Success(T),
    Error {
        message: String,
        /// Optional numeric status code supplied by the failing layer.
        code: Option<i32>,
    },
}

impl<T> Outcome<T> {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
            code: None,
        }
    }

    pub fn error_with_code(message: impl Into<String>, code: i32) -> Self {
        Self::Error {
            message: message.into(),
            code: Some(code),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Error { message, .. } => Some(message.as_str()),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Success(data) => Outcome::Success(f(data)),
            Self::Error { message, code } => Outcome::Error { message, code },
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, String> {
    fn from(value: Outcome<T>) -> Self {
        match value {
            Outcome::Success(data) => Ok(data),
            Outcome::Error { message, .. } => Err(message),
        }
    }
}
