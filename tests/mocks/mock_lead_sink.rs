use async_trait::async_trait;
use flowops_site::error::{LeadSinkError, LeadSinkResult};
use flowops_site::models::Lead;
use flowops_site::sink::LeadSink;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// In-memory lead sink for tests.
///
/// Records every lead it receives and can be switched into a failing mode to
/// simulate a downstream outage, or a stalled mode that never answers.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockLeadSink {
    leads: Arc<Mutex<Vec<Lead>>>,
    failing: Arc<AtomicBool>,
    stalled: Arc<AtomicBool>,
}

#[allow(dead_code)]
impl MockLeadSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink whose every call fails with a downstream error.
    pub fn failing() -> Self {
        let sink = Self::new();
        sink.set_failing(true);
        sink
    }

    /// A sink whose calls never complete.
    pub fn stalled() -> Self {
        let sink = Self::new();
        sink.stalled.store(true, Ordering::SeqCst);
        sink
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Leads received so far, in arrival order.
    pub fn leads(&self) -> Vec<Lead> {
        self.leads.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.leads.lock().unwrap().len()
    }
}

#[async_trait]
impl LeadSink for MockLeadSink {
    async fn submit_lead(&self, lead: &Lead) -> LeadSinkResult<()> {
        if self.stalled.load(Ordering::SeqCst) {
            std::future::pending::<()>().await;
        }
        if self.failing.load(Ordering::SeqCst) {
            return Err(LeadSinkError::Downstream {
                status: 503,
                message: "CRM unavailable".to_string(),
            });
        }
        self.leads.lock().unwrap().push(lead.clone());
        Ok(())
    }
}
