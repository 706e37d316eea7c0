//! Typed errors for the projection engine
//!
//! Calculators validate their inputs and fail fast with one of these kinds
//! instead of letting NaN or infinity flow into displayed results.

use thiserror::Error;

pub type SipResult<T> = Result<T, SipError>;

#[derive(Debug, Clone, Error)]
pub enum SipError {
    /// An input failed validation before any arithmetic ran
    #[error("invalid parameter `{field}`: {message}")]
    InvalidParameter { field: &'static str, message: String },

    /// Arithmetic that would divide by zero
    #[error("division by zero in {context}")]
    DivisionByZero { context: &'static str },
}

impl SipError {
    /// Shorthand for an `InvalidParameter` with a formatted message
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        SipError::InvalidParameter {
            field,
            message: message.into(),
        }
    }

    /// The offending input field, when the error identifies one
    pub fn field(&self) -> Option<&'static str> {
        match self {
            SipError::InvalidParameter { field, .. } => Some(field),
            SipError::DivisionByZero { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let err = SipError::invalid("years", "must be positive, got -3");
        assert_eq!(
            err.to_string(),
            "invalid parameter `years`: must be positive, got -3"
        );
        assert_eq!(err.field(), Some("years"));
    }

    #[test]
    fn test_division_by_zero_has_no_field() {
        let err = SipError::DivisionByZero {
            context: "wealth multiple",
        };
        assert_eq!(err.to_string(), "division by zero in wealth multiple");
        assert_eq!(err.field(), None);
    }
}
