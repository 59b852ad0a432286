//! Request counters for the submission gateway.
//!
//! Counters are shared atomics so handlers can record outcomes without locks.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// How a single contact submission ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Lead accepted and handed to the sink
    Accepted,
    /// Body parsed but one or more fields failed validation
    Invalid,
    /// Body was not a usable JSON object
    Malformed,
    /// Lead sink failed
    Failed,
    /// Caller went away before a response was produced
    Abandoned,
}

/// Metrics collector for the gateway.
#[derive(Debug, Clone)]
pub struct Metrics {
    submissions_total: Arc<AtomicU64>,
    accepted_total: Arc<AtomicU64>,
    invalid_total: Arc<AtomicU64>,
    malformed_total: Arc<AtomicU64>,
    failed_total: Arc<AtomicU64>,
    abandoned_total: Arc<AtomicU64>,
    duration_total_ms: Arc<AtomicU64>,
    health_checks_total: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            submissions_total: Arc::new(AtomicU64::new(0)),
            accepted_total: Arc::new(AtomicU64::new(0)),
            invalid_total: Arc::new(AtomicU64::new(0)),
            malformed_total: Arc::new(AtomicU64::new(0)),
            failed_total: Arc::new(AtomicU64::new(0)),
            abandoned_total: Arc::new(AtomicU64::new(0)),
            duration_total_ms: Arc::new(AtomicU64::new(0)),
            health_checks_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record a finished submission and how long it took.
    pub fn record_submission(&self, outcome: SubmissionOutcome, duration: Duration) {
        self.submissions_total.fetch_add(1, Ordering::Relaxed);
        self.duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);

        let counter = match outcome {
            SubmissionOutcome::Accepted => &self.accepted_total,
            SubmissionOutcome::Invalid => &self.invalid_total,
            SubmissionOutcome::Malformed => &self.malformed_total,
            SubmissionOutcome::Failed => &self.failed_total,
            SubmissionOutcome::Abandoned => &self.abandoned_total,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_health_check(&self) {
        self.health_checks_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn submissions_total(&self) -> u64 {
        self.submissions_total.load(Ordering::Relaxed)
    }

    pub fn accepted_total(&self) -> u64 {
        self.accepted_total.load(Ordering::Relaxed)
    }

    pub fn invalid_total(&self) -> u64 {
        self.invalid_total.load(Ordering::Relaxed)
    }

    pub fn malformed_total(&self) -> u64 {
        self.malformed_total.load(Ordering::Relaxed)
    }

    pub fn failed_total(&self) -> u64 {
        self.failed_total.load(Ordering::Relaxed)
    }

    pub fn abandoned_total(&self) -> u64 {
        self.abandoned_total.load(Ordering::Relaxed)
    }

    pub fn health_checks_total(&self) -> u64 {
        self.health_checks_total.load(Ordering::Relaxed)
    }

    /// Get average submission handling time in milliseconds.
    pub fn duration_avg_ms(&self) -> f64 {
        let total = self.duration_total_ms.load(Ordering::Relaxed);
        let count = self.submissions_total();
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            submissions_total: self.submissions_total(),
            accepted_total: self.accepted_total(),
            invalid_total: self.invalid_total(),
            malformed_total: self.malformed_total(),
            failed_total: self.failed_total(),
            abandoned_total: self.abandoned_total(),
            duration_avg_ms: self.duration_avg_ms(),
            health_checks_total: self.health_checks_total(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsSummary {
    pub submissions_total: u64,
    pub accepted_total: u64,
    pub invalid_total: u64,
    pub malformed_total: u64,
    pub failed_total: u64,
    pub abandoned_total: u64,
    pub duration_avg_ms: f64,
    pub health_checks_total: u64,
}

/// Times one submission from arrival to response.
///
/// A timer dropped without [`finish`](Self::finish) counts as
/// [`SubmissionOutcome::Abandoned`]. That happens when the client disconnects
/// and the handler future is dropped mid-await.
pub struct SubmissionTimer {
    start: Instant,
    metrics: Metrics,
    finished: bool,
}

impl SubmissionTimer {
    pub fn new(metrics: Metrics) -> Self {
        Self {
            start: Instant::now(),
            metrics,
            finished: false,
        }
    }

    /// Stop the timer and record the outcome.
    pub fn finish(mut self, outcome: SubmissionOutcome) {
        self.record(outcome);
    }

    fn record(&mut self, outcome: SubmissionOutcome) {
        self.finished = true;
        self.metrics
            .record_submission(outcome, self.start.elapsed());
    }
}

impl Drop for SubmissionTimer {
    fn drop(&mut self) {
        if !self.finished {
            self.record(SubmissionOutcome::Abandoned);
        }
    }
}
