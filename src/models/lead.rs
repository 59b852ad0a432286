//! Lead model: an accepted submission as handed to the lead sink.

use super::contact_form::ContactSubmission;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A prospective customer's accepted contact submission.
///
/// Every accepted request becomes a new lead with its own id, even when the
/// same visitor submits the same data twice.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub lead_id: Uuid,
    pub received_at: DateTime<Utc>,
    #[serde(flatten)]
    pub submission: ContactSubmission,
}

impl Lead {
    /// Wrap a validated submission with a fresh id and the current time.
    pub fn new(submission: ContactSubmission) -> Self {
        Self {
            lead_id: Uuid::new_v4(),
            received_at: Utc::now(),
            submission,
        }
    }
}
