//! Lead sinks: where accepted contact submissions go.

mod logging_sink;
mod traits;
mod webhook_sink;

pub use logging_sink::LoggingLeadSink;
pub use traits::LeadSink;
pub use webhook_sink::WebhookLeadSink;

use crate::config::Config;
use std::sync::Arc;
use std::time::Duration;

/// Pick the sink the configuration asks for.
///
/// A configured webhook wins; otherwise leads are only logged.
pub fn from_config(config: &Config) -> Arc<dyn LeadSink> {
    match &config.lead_webhook_url {
        Some(url) => Arc::new(WebhookLeadSink::new(
            url.clone(),
            Duration::from_secs(config.request_timeout),
        )),
        None => Arc::new(LoggingLeadSink::new()),
    }
}
