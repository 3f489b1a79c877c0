//! Request validation helpers.

use crate::error::AppError;
use once_cell::sync::Lazy;
use regex::Regex;

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9][0-9 \-]{5,14}$").expect("phone pattern compiles"));

/// Phone numbers are 7-15 digits with an optional leading `+` and
/// optional space/dash separators.
pub fn check_phone(phone_number: &str) -> Result<(), AppError> {
    if PHONE_RE.is_match(phone_number) {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "phone_number must be 7-15 digits: {}",
            phone_number
        )))
    }
}

pub fn check_not_empty(field: &'static str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

pub fn check_positive(field: &'static str, value: f64) -> Result<(), AppError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(AppError::Validation(format!("{} must be positive", field)))
    }
}

pub fn check_non_negative(field: &'static str, value: f64) -> Result<(), AppError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "{} must not be negative",
            field
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_phone_shapes() {
        assert!(check_phone("9876543210").is_ok());
        assert!(check_phone("+91 98765 43210").is_ok());
        assert!(check_phone("040-2345678").is_ok());
    }

    #[test]
    fn rejects_malformed_phones() {
        assert!(check_phone("12345").is_err());
        assert!(check_phone("not-a-number").is_err());
        assert!(check_phone("").is_err());
    }

    #[test]
    fn positive_and_non_negative_bounds() {
        assert!(check_positive("quantity", 0.1).is_ok());
        assert!(check_positive("quantity", 0.0).is_err());
        assert!(check_non_negative("stock", 0.0).is_ok());
        assert!(check_non_negative("stock", -0.1).is_err());
    }
}
