//! FlowOps site backend.
//!
//! The marketing site's only server-side contract is the contact form: a
//! visitor asks for a demo, the form is validated, and the lead is handed to
//! whatever system sales works from.
//!
//! # Architecture
//!
//! - **domain**: Value objects (email, phone) and per-field validation errors
//! - **models**: The raw contact form, the validated submission, leads, API bodies
//! - **sink**: The `LeadSink` collaborator and its logging / webhook implementations
//! - **server**: Axum router with `/api/health` and `/api/contact`
//! - **client**: Blocking and async clients for the site API, with retry
//! - **metrics**: Submission counters
//! - **config**: Configuration from environment variables
//! - **error**: Error types

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod server;
pub mod sink;

pub use client::{AsyncSiteClient, AsyncSiteClientImpl, RetryPolicy, SiteClient};
pub use config::Config;
pub use domain::{EmailAddress, Field, FieldError, PhoneNumber, ValidationErrors};
pub use error::{ConfigError, LeadSinkError, SubmitError};
pub use metrics::{Metrics, MetricsSummary};
pub use models::{ContactAccepted, ContactForm, ContactSubmission, Lead};
pub use server::{router, AppState};
pub use sink::{LeadSink, LoggingLeadSink, WebhookLeadSink};
