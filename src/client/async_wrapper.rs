//! Async wrapper around the synchronous SiteClient.
//!
//! HTTP calls run on tokio's blocking pool via `spawn_blocking`, so they never
//! stall the async runtime.

use crate::client::SiteClient;
use crate::error::{SubmitError, SubmitResult};
use crate::models::{ContactAccepted, ContactForm, ContactSubmission, HealthStatus};
use async_trait::async_trait;
use std::sync::Arc;

/// Async interface to the site API.
#[async_trait]
pub trait AsyncSiteClient: Send + Sync {
    async fn health(&self) -> SubmitResult<HealthStatus>;

    /// Validate locally, then submit. Invalid forms never reach the network.
    async fn submit_form(&self, form: &ContactForm) -> SubmitResult<ContactAccepted>;

    async fn submit(&self, submission: &ContactSubmission) -> SubmitResult<ContactAccepted>;
}

/// [`AsyncSiteClient`] backed by a [`SiteClient`].
#[derive(Clone)]
pub struct AsyncSiteClientImpl {
    client: Arc<SiteClient>,
}

impl AsyncSiteClientImpl {
    pub fn new(client: SiteClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

fn join_error(e: tokio::task::JoinError) -> SubmitError {
    SubmitError::Transport(format!("Task join error: {}", e))
}

#[async_trait]
impl AsyncSiteClient for AsyncSiteClientImpl {
    async fn health(&self) -> SubmitResult<HealthStatus> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.health())
            .await
            .map_err(join_error)?
    }

    async fn submit_form(&self, form: &ContactForm) -> SubmitResult<ContactAccepted> {
        let submission = form.validate().map_err(SubmitError::Validation)?;
        self.submit(&submission).await
    }

    async fn submit(&self, submission: &ContactSubmission) -> SubmitResult<ContactAccepted> {
        let client = self.client.clone();
        let submission = submission.clone();

        tokio::task::spawn_blocking(move || client.submit(&submission))
            .await
            .map_err(join_error)?
    }
}
