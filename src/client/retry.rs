//! Retry-with-backoff for submissions.
//!
//! Only transport and server failures are retried. Validation and other
//! rejections would fail the same way again.

use crate::client::AsyncSiteClient;
use crate::error::{SubmitError, SubmitResult};
use crate::models::{ContactAccepted, ContactForm};
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::info;

/// How many times to try and how long to wait in between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first. Values below 1 are treated as 1.
    pub max_attempts: u32,

    /// Wait before the second attempt; doubles after each failure
    pub initial_backoff: Duration,

    /// Upper bound for the wait
    pub max_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff: Duration::from_millis(500),
            max_backoff: Duration::from_secs(5),
        }
    }
}

impl RetryPolicy {
    /// A policy that tries once and never waits.
    pub fn no_retry() -> Self {
        Self {
            max_attempts: 1,
            initial_backoff: Duration::ZERO,
            max_backoff: Duration::ZERO,
        }
    }

    /// The wait after failed attempt number `attempt` (1-based).
    pub fn backoff_for(&self, attempt: u32) -> Duration {
        let shift = attempt.saturating_sub(1).min(31);
        self.initial_backoff
            .saturating_mul(1u32 << shift)
            .min(self.max_backoff)
    }
}

/// Run `op` until it succeeds, fails with a non-retryable error, or the
/// policy runs out of attempts. The last error is returned.
pub async fn retry_with_backoff<T, F, Fut>(policy: &RetryPolicy, mut op: F) -> SubmitResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = SubmitResult<T>>,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) if e.is_retryable() && attempt < max_attempts => {
                let backoff = policy.backoff_for(attempt);
                info!(attempt, error = %e, "Submission failed, retrying in {:?}", backoff);
                sleep(backoff).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Validate `form` once, then submit it with retries.
pub async fn submit_form_with_retry(
    client: &dyn AsyncSiteClient,
    form: &ContactForm,
    policy: &RetryPolicy,
) -> SubmitResult<ContactAccepted> {
    let submission = form.validate().map_err(SubmitError::Validation)?;
    let submission = &submission;
    retry_with_backoff(policy, move || client.submit(submission)).await
}
