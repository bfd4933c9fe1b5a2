//! Error types for form validation and backend calls.

use thiserror::Error;

/// Client-side rejection of the add-animal form.
///
/// These never reach the network: a form that fails validation is reported
/// in the notice area and the request is not sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("name is required")]
    MissingName,
    #[error("species is required")]
    MissingSpecies,
    #[error("age is required")]
    MissingAge,
    #[error("age must be a whole number of years")]
    InvalidAge,
}

/// Failure of a call against the animals backend.
///
/// The `Display` text is exactly what the UI shows in the notice area, so
/// variants carry the finished message rather than raw protocol detail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS,
    /// CORS rejection and friends).
    #[error("{0}")]
    Transport(String),
    /// The server answered with a non-success status and no usable body.
    #[error("{message}")]
    Status { message: String, status: u16 },
    /// The server rejected a create and supplied validation messages.
    #[error("{0}")]
    Validation(String),
    /// The response arrived but its body was not the JSON we expected.
    #[error("{0}")]
    Decode(String),
}

impl ApiError {
    /// Non-success status with the generic message for that call site.
    pub fn status(message: impl Into<String>, status: u16) -> Self {
        Self::Status {
            message: message.into(),
            status,
        }
    }
}
