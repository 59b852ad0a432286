//! Data models for the contact-form pipeline.
//!
//! `ContactForm` is the raw record from the site, `ContactSubmission` the
//! validated entity, and `Lead` what the gateway hands to the lead sink. The
//! `api` module holds the JSON bodies the gateway answers with.

pub mod api;
pub mod contact_form;
pub mod lead;

pub use api::{ContactAccepted, ContactInvalid, ErrorBody, HealthStatus};
pub use contact_form::{ContactForm, ContactSubmission};
pub use lead::Lead;
