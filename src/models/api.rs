//! JSON bodies exchanged between the site and the gateway.

use crate::domain::ValidationErrors;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Text shown to the visitor once a demo request is accepted.
pub const ACCEPTED_MESSAGE: &str =
    "Your demo request has been submitted. We'll contact you shortly.";

/// Text returned when the lead could not be handed off.
pub const FAILED_MESSAGE: &str = "Failed to submit form. Please try again.";

/// 200 body for `POST /api/contact`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactAccepted {
    pub success: bool,
    pub message: String,
    pub lead_id: Uuid,
}

impl ContactAccepted {
    pub fn new(lead_id: Uuid) -> Self {
        Self {
            success: true,
            message: ACCEPTED_MESSAGE.to_string(),
            lead_id,
        }
    }
}

/// 400 body when fields fail validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInvalid {
    pub success: bool,
    pub errors: ValidationErrors,
}

impl ContactInvalid {
    pub fn new(errors: ValidationErrors) -> Self {
        Self {
            success: false,
            errors,
        }
    }
}

/// Body for every other failure: malformed request or server error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

/// Body for `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}
