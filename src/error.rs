//! Error types for the FlowOps site backend.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationErrors;
use thiserror::Error;

/// Errors that can occur when submitting a contact form to the site API.
///
/// `Transport` and `Server` look the same to a visitor: something went wrong,
/// try again. Both keep the form intact so it can be resubmitted.
#[derive(Error, Debug)]
pub enum SubmitError {
    /// One or more fields failed validation, locally or on the server
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// Network failure before a full response arrived, timeouts included
    #[error("Network error: {0}")]
    Transport(String),

    /// Server returned a 5xx status
    #[error("Server error (status {status}): {message}")]
    Server { status: u16, message: String },

    /// Server refused the request for a reason other than field validation
    #[error("Request rejected (status {status}): {message}")]
    Rejected { status: u16, message: String },

    /// Response body could not be parsed
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl SubmitError {
    /// Whether resubmitting the same form could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::Server { .. }
        )
    }

    /// The per-field errors, when this is a validation failure.
    pub fn field_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Errors raised by a lead sink while handing off an accepted lead.
#[derive(Error, Debug)]
pub enum LeadSinkError {
    /// HTTP request to the downstream system failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Downstream system answered with a non-success status
    #[error("Downstream error (status {status}): {message}")]
    Downstream { status: u16, message: String },

    /// Downstream system did not answer within the request timeout
    #[error("Request timeout")]
    Timeout,

    /// Lead could not be encoded
    #[error("JSON encode error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with SubmitError
pub type SubmitResult<T> = Result<T, SubmitError>;

/// Convenience type alias for Results with LeadSinkError
pub type LeadSinkResult<T> = Result<T, LeadSinkError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
