//! Validation utilities.

use crate::{FieldError, JobseekError};
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `JobseekError` on failure.
    fn validate_request(&self) -> Result<(), JobseekError> {
        self.validate().map_err(validation_errors_to_jobseek_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Flattens `validator::ValidationErrors` into field errors.
#[must_use]
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| FieldError {
                field: (*field).to_string(),
                message: error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), ToString::to_string),
                code: error.code.to_string(),
            })
        })
        .collect()
}

/// Converts `validator::ValidationErrors` to `JobseekError`.
#[must_use]
pub fn validation_errors_to_jobseek_error(errors: ValidationErrors) -> JobseekError {
    let message = field_errors(&errors)
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ");

    JobseekError::Validation(message)
}

/// Common validation functions.
pub mod rules {
    use validator::ValidationError;

    /// Validates that a string is not blank (not empty after trimming).
    pub fn not_blank(value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new("not_blank"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::rules::*;
    use super::*;

    #[derive(Validate)]
    struct Body {
        #[validate(custom(function = not_blank, message = "Message must not be blank"))]
        message: String,
    }

    #[test]
    fn test_not_blank() {
        assert!(not_blank("hello").is_ok());
        assert!(not_blank("   ").is_err());
        assert!(not_blank("").is_err());
        assert!(not_blank("\n\t").is_err());
    }

    #[test]
    fn test_validate_request_reports_field() {
        let body = Body {
            message: "  ".to_string(),
        };
        let err = body.validate_request().unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert!(err.to_string().contains("message: Message must not be blank"));
    }

    #[test]
    fn test_validate_request_accepts_text() {
        let body = Body {
            message: "hi".to_string(),
        };
        assert!(body.validate_request().is_ok());
    }
}
