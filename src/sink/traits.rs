use crate::error::LeadSinkResult;
use crate::models::Lead;
use async_trait::async_trait;

/// Destination for accepted leads.
///
/// The gateway depends only on this trait, so the downstream system (CRM,
/// email, automation webhook) can be swapped or faked in tests.
#[async_trait]
pub trait LeadSink: Send + Sync {
    /// Hand off one accepted lead.
    async fn submit_lead(&self, lead: &Lead) -> LeadSinkResult<()>;
}
