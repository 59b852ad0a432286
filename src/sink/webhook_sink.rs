//! Lead sink that forwards accepted leads to an HTTP webhook.
//!
//! The HTTP call uses the blocking `ureq` agent, so it runs on tokio's
//! blocking pool to keep the request handlers responsive.

use crate::error::{LeadSinkError, LeadSinkResult};
use crate::models::Lead;
use crate::sink::traits::LeadSink;
use async_trait::async_trait;
use std::error::Error as _;
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// POSTs each lead as JSON to a CRM or automation webhook.
#[derive(Clone)]
pub struct WebhookLeadSink {
    url: String,
    agent: Arc<ureq::Agent>,
}

impl WebhookLeadSink {
    /// Create a sink posting to `url` with the given request timeout.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();

        Self {
            url: url.into(),
            agent: Arc::new(agent),
        }
    }

    /// Send the lead synchronously.
    fn post_lead(&self, body: &serde_json::Value) -> LeadSinkResult<()> {
        let start = Instant::now();

        let result = self
            .agent
            .post(&self.url)
            .set("Content-Type", "application/json")
            .send_json(body)
            .map(|_| ())
            .map_err(map_error);

        match &result {
            Ok(()) => tracing::debug!(
                url = %self.url,
                duration_ms = start.elapsed().as_millis() as u64,
                "Lead forwarded"
            ),
            Err(e) => tracing::error!(url = %self.url, error = %e, "Lead webhook failed"),
        }

        result
    }
}

fn map_error(error: ureq::Error) -> LeadSinkError {
    match error {
        ureq::Error::Status(status, response) => {
            let message = response
                .into_string()
                .unwrap_or_else(|_| "Unknown error".to_string());
            LeadSinkError::Downstream { status, message }
        }
        ureq::Error::Transport(transport) if is_timeout(&transport) => LeadSinkError::Timeout,
        ureq::Error::Transport(transport) => LeadSinkError::HttpError(transport.to_string()),
    }
}

/// Only a socket read/write deadline counts as a timeout. Resets and other
/// I/O failures stay plain transport errors.
fn is_timeout(transport: &ureq::Transport) -> bool {
    transport.kind() == ureq::ErrorKind::Io
        && transport
            .source()
            .and_then(|source| source.downcast_ref::<io::Error>())
            .is_some_and(|e| matches!(e.kind(), io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock))
}

#[async_trait]
impl LeadSink for WebhookLeadSink {
    async fn submit_lead(&self, lead: &Lead) -> LeadSinkResult<()> {
        let body = serde_json::to_value(lead)?;
        let sink = self.clone();

        tokio::task::spawn_blocking(move || sink.post_lead(&body))
            .await
            .map_err(|e| LeadSinkError::HttpError(format!("Task join error: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContactForm;
    use mockito::{Matcher, Server};
    use std::io::Read;
    use std::net::TcpListener;
    use std::thread;

    fn lead() -> Lead {
        let submission = ContactForm::new("John Smith", "Acme Mfg", "john@acme.com", "+13035551234")
            .with_message("Interested in scheduling")
            .validate()
            .unwrap();
        Lead::new(submission)
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_webhook_posts_lead_json() {
        let mut server = Server::new_async().await;
        let lead = lead();

        let mock = server
            .mock("POST", "/leads")
            .match_header("content-type", "application/json")
            .match_body(Matcher::PartialJson(serde_json::json!({
                "leadId": lead.lead_id.to_string(),
                "name": "John Smith",
                "company": "Acme Mfg",
                "email": "john@acme.com",
                "phone": "+13035551234",
                "message": "Interested in scheduling"
            })))
            .with_status(202)
            .create_async()
            .await;

        let sink = WebhookLeadSink::new(format!("{}/leads", server.url()), Duration::from_secs(5));
        sink.submit_lead(&lead).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_webhook_error_status_surfaces() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/leads")
            .with_status(502)
            .with_body("upstream down")
            .create_async()
            .await;

        let sink = WebhookLeadSink::new(format!("{}/leads", server.url()), Duration::from_secs(5));
        let err = sink.submit_lead(&lead()).await.unwrap_err();

        mock.assert_async().await;
        match err {
            LeadSinkError::Downstream { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "upstream down");
            }
            other => panic!("Expected Downstream error, got: {:?}", other),
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_webhook_unreachable_is_transport_error() {
        // Port 9 (discard) on localhost is not listening in test environments.
        let sink = WebhookLeadSink::new("http://127.0.0.1:9/leads", Duration::from_secs(2));
        let err = sink.submit_lead(&lead()).await.unwrap_err();
        assert!(matches!(err, LeadSinkError::HttpError(_)), "got: {:?}", err);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_webhook_stalled_response_is_timeout() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        // Accept and hold the connection open without ever answering.
        thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            thread::sleep(Duration::from_secs(2));
            drop(stream);
        });

        let sink = WebhookLeadSink::new(format!("http://{}/leads", addr), Duration::from_millis(200));
        let err = sink.submit_lead(&lead()).await.unwrap_err();
        assert!(matches!(err, LeadSinkError::Timeout), "got: {:?}", err);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_webhook_connection_closed_is_not_timeout() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        // Read the request, then hang up without a response.
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf);
        });

        let sink = WebhookLeadSink::new(format!("http://{}/leads", addr), Duration::from_secs(5));
        let err = sink.submit_lead(&lead()).await.unwrap_err();
        assert!(matches!(err, LeadSinkError::HttpError(_)), "got: {:?}", err);
    }
}
