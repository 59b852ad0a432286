//! HTTP client for the FlowOps site API.
//!
//! This is the submission side of the contact form: validate locally, make
//! one request per submission, and sort failures into the categories a
//! visitor sees. The client is synchronous; use [`AsyncSiteClientImpl`] from
//! async code.

mod async_wrapper;
mod retry;

pub use async_wrapper::{AsyncSiteClient, AsyncSiteClientImpl};
pub use retry::{retry_with_backoff, submit_form_with_retry, RetryPolicy};

use crate::error::{SubmitError, SubmitResult};
use crate::models::{ContactAccepted, ContactForm, ContactInvalid, ContactSubmission, ErrorBody, HealthStatus};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// HTTP client for the site API.
#[derive(Clone)]
pub struct SiteClient {
    /// Base URL of the site, e.g. `https://flowops.example.com`
    base_url: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,
}

impl SiteClient {
    /// Create a client for `base_url` with the given request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();

        Self {
            base_url: base_url.into(),
            agent: Arc::new(agent),
        }
    }

    /// Create a client with the default 10 second timeout.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::new(base_url, Duration::from_secs(10))
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Check that the API is up.
    pub fn health(&self) -> SubmitResult<HealthStatus> {
        let url = self.build_url("/api/health");
        let response = self.agent.get(&url).call().map_err(map_error)?;
        read_json(response)
    }

    /// Validate `form` and submit it.
    ///
    /// An invalid form returns [`SubmitError::Validation`] without touching
    /// the network. The form is only borrowed, so the caller still has every
    /// value to show again after any error.
    pub fn submit_form(&self, form: &ContactForm) -> SubmitResult<ContactAccepted> {
        let submission = form.validate().map_err(SubmitError::Validation)?;
        self.submit(&submission)
    }

    /// Send an already-validated submission to `POST /api/contact`.
    pub fn submit(&self, submission: &ContactSubmission) -> SubmitResult<ContactAccepted> {
        let start = Instant::now();
        let url = self.build_url("/api/contact");

        tracing::debug!("POST {}", url);

        let result = self
            .agent
            .post(&url)
            .set("Content-Type", "application/json")
            .send_json(submission)
            .map_err(map_error)
            .and_then(read_json::<ContactAccepted>);

        let duration_ms = start.elapsed().as_millis() as u64;
        match &result {
            Ok(ack) => tracing::debug!(lead_id = %ack.lead_id, duration_ms, "Submission accepted"),
            Err(e) => tracing::warn!(error = %e, duration_ms, "Submission failed"),
        }

        result
    }
}

fn read_json<T: serde::de::DeserializeOwned>(response: ureq::Response) -> SubmitResult<T> {
    let body = response
        .into_string()
        .map_err(|e| SubmitError::Transport(e.to_string()))?;
    Ok(serde_json::from_str(&body)?)
}

/// Map a ureq error to the visitor-facing error categories.
fn map_error(error: ureq::Error) -> SubmitError {
    match error {
        ureq::Error::Status(status, response) => {
            let body = response.into_string().unwrap_or_default();

            if status == 400 {
                if let Ok(invalid) = serde_json::from_str::<ContactInvalid>(&body) {
                    return SubmitError::Validation(invalid.errors);
                }
            }

            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or(body);

            if status >= 500 {
                SubmitError::Server { status, message }
            } else {
                SubmitError::Rejected { status, message }
            }
        }
        ureq::Error::Transport(transport) => SubmitError::Transport(transport.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_joins_slashes() {
        let client = SiteClient::with_base_url("http://localhost:5000/");
        assert_eq!(
            client.build_url("/api/contact"),
            "http://localhost:5000/api/contact"
        );

        let client = SiteClient::with_base_url("http://localhost:5000");
        assert_eq!(
            client.build_url("api/health"),
            "http://localhost:5000/api/health"
        );
    }
}
