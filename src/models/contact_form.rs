//! Contact form model: the raw candidate record and its validated form.

use crate::domain::{require_min_chars, EmailAddress, Field, PhoneNumber, ValidationErrors};
use serde::{Deserialize, Serialize};

pub const NAME_MIN_LEN: usize = 2;
pub const COMPANY_MIN_LEN: usize = 2;

pub const NAME_MESSAGE: &str = "Name must be at least 2 characters";
pub const COMPANY_MESSAGE: &str = "Company name is required";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const PHONE_MESSAGE: &str = "Please enter a valid phone number";

/// A contact form exactly as the visitor filled it in.
///
/// Every field is optional here so that a missing field is reported against
/// that field by [`ContactForm::validate`] rather than failing the whole parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ContactForm {
    /// Build a form with all four required fields and no message.
    pub fn new(
        name: impl Into<String>,
        company: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            company: Some(company.into()),
            email: Some(email.into()),
            phone: Some(phone.into()),
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Check every field and build a [`ContactSubmission`].
    ///
    /// All fields are checked even after one fails, so the returned
    /// [`ValidationErrors`] lists every violation at once.
    pub fn validate(&self) -> Result<ContactSubmission, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = require_min_chars(text(&self.name), NAME_MIN_LEN)
            .map_err(|_| errors.add(Field::Name, NAME_MESSAGE))
            .ok();
        let company = require_min_chars(text(&self.company), COMPANY_MIN_LEN)
            .map_err(|_| errors.add(Field::Company, COMPANY_MESSAGE))
            .ok();
        let email = EmailAddress::new(text(&self.email))
            .map_err(|_| errors.add(Field::Email, EMAIL_MESSAGE))
            .ok();
        let phone = PhoneNumber::new(text(&self.phone))
            .map_err(|_| errors.add(Field::Phone, PHONE_MESSAGE))
            .ok();

        match (name, company, email, phone) {
            (Some(name), Some(company), Some(email), Some(phone)) if errors.is_empty() => {
                Ok(ContactSubmission {
                    name,
                    company,
                    email,
                    phone,
                    message: self.message.clone(),
                })
            }
            _ => Err(errors),
        }
    }
}

fn text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or_default()
}

/// A lead-generation request that passed validation.
///
/// Fields are private: the only way to obtain one is through
/// [`ContactForm::validate`] or by deserializing JSON, which validates too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ContactForm", into = "ContactForm")]
pub struct ContactSubmission {
    name: String,
    company: String,
    email: EmailAddress,
    phone: PhoneNumber,
    message: Option<String>,
}

impl ContactSubmission {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn phone(&self) -> &PhoneNumber {
        &self.phone
    }

    /// The free-text message, if the visitor sent one. May be empty.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl TryFrom<ContactForm> for ContactSubmission {
    type Error = ValidationErrors;

    fn try_from(form: ContactForm) -> Result<Self, Self::Error> {
        form.validate()
    }
}

impl From<ContactSubmission> for ContactForm {
    fn from(submission: ContactSubmission) -> Self {
        Self {
            name: Some(submission.name),
            company: Some(submission.company),
            email: Some(submission.email.into_inner()),
            phone: Some(submission.phone.into_inner()),
            message: submission.message,
        }
    }
}
