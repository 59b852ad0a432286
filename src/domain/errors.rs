//! Domain validation errors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The value is shorter than the required minimum once trimmed.
    TooShort { min: usize, actual: usize },

    /// The provided email address is invalid.
    InvalidEmail(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort { min, actual } => write!(
                f,
                "Value must be at least {} characters, got {}",
                min, actual
            ),
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
        }
    }
}

impl std::error::Error for ValidationError {}

/// The constrained contact form fields, in the order they appear on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Company,
    Email,
    Phone,
}

impl Field {
    /// The JSON / form name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Company => "company",
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user-facing error attached to one form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

/// Every field violation found in a single validation pass.
///
/// Entries keep form order and there is at most one entry per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for `field`. A second error for the same field is ignored.
    pub fn add(&mut self, field: Field, message: impl Into<String>) {
        if self.contains(field) {
            return;
        }
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    /// The message recorded for `field`, if any.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// The fields that failed, in form order.
    pub fn fields(&self) -> Vec<Field> {
        self.0.iter().map(|e| e.field).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_keeps_first_error_per_field() {
        let mut errors = ValidationErrors::new();
        errors.add(Field::Name, "first");
        errors.add(Field::Name, "second");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Name), Some("first"));
    }

    #[test]
    fn test_fields_in_insertion_order() {
        let mut errors = ValidationErrors::new();
        errors.add(Field::Email, "bad email");
        errors.add(Field::Phone, "bad phone");
        assert_eq!(errors.fields(), vec![Field::Email, Field::Phone]);
        assert!(!errors.contains(Field::Name));
    }

    #[test]
    fn test_serializes_as_list() {
        let mut errors = ValidationErrors::new();
        errors.add(Field::Company, "Company name is required");
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{"field": "company", "message": "Company name is required"}])
        );
    }

    #[test]
    fn test_display() {
        let mut errors = ValidationErrors::new();
        errors.add(Field::Name, "too short");
        errors.add(Field::Email, "invalid");
        assert_eq!(errors.to_string(), "name: too short; email: invalid");

        let err = ValidationError::TooShort { min: 2, actual: 1 };
        assert_eq!(err.to_string(), "Value must be at least 2 characters, got 1");
    }
}
