//! Domain value objects and types.
//!
//! Type-safe wrappers for the contact form's constrained fields, plus the
//! per-field error collection the validator reports. Value objects validate at
//! construction time so invalid data cannot be represented.

pub mod email;
pub mod errors;
pub mod phone;
pub mod text;

pub use email::EmailAddress;
pub use errors::{Field, FieldError, ValidationError, ValidationErrors};
pub use phone::PhoneNumber;
pub use text::require_min_chars;
