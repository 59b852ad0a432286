//! Length rules shared by the free-text form fields.

use super::errors::ValidationError;

/// Trim `value` and require at least `min` characters to remain.
///
/// Length counts `char`s, so "José" is four characters, not five bytes.
pub fn require_min_chars(value: &str, min: usize) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    let actual = trimmed.chars().count();
    if actual < min {
        return Err(ValidationError::TooShort { min, actual });
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_exact_minimum() {
        assert_eq!(require_min_chars("Jo", 2).unwrap(), "Jo");
    }

    #[test]
    fn test_rejects_whitespace_only() {
        assert_eq!(
            require_min_chars("   ", 2),
            Err(ValidationError::TooShort { min: 2, actual: 0 })
        );
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        assert!(require_min_chars("Ü", 2).is_err());
        assert_eq!(require_min_chars(" Øy ", 2).unwrap(), "Øy");
    }
}
