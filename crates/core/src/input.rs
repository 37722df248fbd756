use thiserror::Error;

/// Rejected component input. Carries the quantity name so callers can point at the field.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{quantity} must be positive (got {value})")]
    NonPositive { quantity: &'static str, value: f64 },
    #[error("{quantity} must not be negative (got {value})")]
    Negative { quantity: &'static str, value: f64 },
    #[error("{quantity} must be finite (got {value})")]
    NonFinite { quantity: &'static str, value: f64 },
    #[error("{quantity} is out of range: {reason}")]
    OutOfRange {
        quantity: &'static str,
        reason: String,
    },
}

impl InputError {
    /// Name of the offending quantity.
    pub fn quantity(&self) -> &'static str {
        match self {
            InputError::NonPositive { quantity, .. }
            | InputError::Negative { quantity, .. }
            | InputError::NonFinite { quantity, .. }
            | InputError::OutOfRange { quantity, .. } => quantity,
        }
    }
}

/// Accept any finite value.
pub fn require_finite(quantity: &'static str, value: f64) -> Result<f64, InputError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InputError::NonFinite { quantity, value })
    }
}

/// Accept finite values strictly greater than zero.
pub fn require_positive(quantity: &'static str, value: f64) -> Result<f64, InputError> {
    let value = require_finite(quantity, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(InputError::NonPositive { quantity, value })
    }
}

/// Accept finite values greater than or equal to zero.
pub fn require_non_negative(quantity: &'static str, value: f64) -> Result<f64, InputError> {
    let value = require_finite(quantity, value)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(InputError::Negative { quantity, value })
    }
}
