use validator::ValidateUrl;

use crate::error::{AppError, AppResult};

/// A required text field must be non-blank and at most `max_len` characters
pub fn validate_required(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    validate_length(value, field, max_len)
}

/// An optional text field, when present, must be at most `max_len` characters
pub fn validate_optional(value: &Option<String>, field: &str, max_len: usize) -> AppResult<()> {
    match value {
        Some(v) => validate_length(v, field, max_len),
        None => Ok(()),
    }
}

pub fn validate_url(value: &str, field: &str) -> AppResult<()> {
    if !value.validate_url() {
        return Err(AppError::Validation(format!(
            "{} must be a valid URL, got '{}'",
            field, value
        )));
    }
    validate_length(value, field, 200)
}

pub fn validate_non_negative(value: i32, field: &str) -> AppResult<()> {
    if value < 0 {
        return Err(AppError::Validation(format!(
            "{} must be zero or greater, got {}",
            field, value
        )));
    }
    Ok(())
}

fn validate_length(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    if value.chars().count() > max_len {
        return Err(AppError::Validation(format!(
            "{} must be at most {} characters",
            field, max_len
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_blank() {
        assert!(validate_required("Essie", "name", 100).is_ok());
        assert!(validate_required("", "name", 100).is_err());
        assert!(validate_required("   ", "name", 100).is_err());
    }

    #[test]
    fn test_length_counts_characters() {
        let name = "é".repeat(100);
        assert!(validate_required(&name, "name", 100).is_ok());
        assert!(validate_required(&format!("{}x", name), "name", 100).is_err());
        assert!(validate_optional(&Some("x".repeat(256)), "notes", 255).is_err());
        assert!(validate_optional(&None, "notes", 255).is_ok());
    }

    #[test]
    fn test_url() {
        assert!(validate_url("https://essie.com/ballet-slippers", "product_url").is_ok());

        let err = validate_url("not a url", "product_url").unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("product_url")));
    }

    #[test]
    fn test_non_negative() {
        assert!(validate_non_negative(0, "order").is_ok());
        assert!(validate_non_negative(-1, "order").is_err());
    }
}
