//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

use crate::utils::validation::{FormField, ValidationIssue};

// Re-export library error type
pub use proxy_warden_api::ApiError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// A client-side check rejected the form before any network call
    #[error("Validation error on {field}: {issue}")]
    Validation {
        field: FormField,
        issue: ValidationIssue,
    },

    /// The row is not in the currently displayed table
    #[error("Item not found: {0}")]
    ItemNotFound(i64),

    /// No add/edit dialog is open
    #[error("No dialog is open")]
    NoDialog,

    /// The open dialog is already waiting for the server
    #[error("Submission already in progress")]
    SubmissionPending,

    /// API error (converting from library)
    #[error("{0}")]
    Api(#[from] ApiError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, server rejection, etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Validation { .. }
            | Self::ItemNotFound(_)
            | Self::NoDialog
            | Self::SubmissionPending => true,
            Self::Api(e) => e.is_expected(),
        }
    }

    /// Text the server attached to an application failure.
    ///
    /// `None` for every other error; callers show a localized fallback then.
    #[must_use]
    pub fn server_message(&self) -> Option<String> {
        match self {
            Self::Api(e) => e.server_message().map(str::to_string),
            _ => None,
        }
    }

    /// Log this error at `warn` or `error` depending on [`is_expected`](Self::is_expected).
    pub(crate) fn log(&self, context: &str) {
        if self.is_expected() {
            log::warn!("{context}: {self}");
        } else {
            log::error!("{context}: {self}");
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
