use crate::error::LeadSinkResult;
use crate::models::Lead;
use crate::sink::traits::LeadSink;
use async_trait::async_trait;

/// Lead sink that records the lead in the log and does nothing else.
///
/// Used when no downstream system is configured.
#[derive(Debug, Clone, Default)]
pub struct LoggingLeadSink;

impl LoggingLeadSink {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LeadSink for LoggingLeadSink {
    async fn submit_lead(&self, lead: &Lead) -> LeadSinkResult<()> {
        tracing::info!(
            lead_id = %lead.lead_id,
            company = %lead.submission.company(),
            email_domain = %lead.submission.email().domain(),
            "Lead received"
        );
        Ok(())
    }
}
