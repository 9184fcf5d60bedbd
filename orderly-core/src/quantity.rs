use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A non-negative order quantity.
///
/// Construction rejects NaN and negative values. Serializes as a bare JSON
/// number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Quantity(f64);

impl Quantity {
    /// Creates a `Quantity` from a non-negative, non-NaN value.
    ///
    /// # Errors
    /// Returns [`ValidationError::InvalidQuantity`] if `value` is NaN or
    /// negative.
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if value.is_nan() || value < 0.0 {
            return Err(ValidationError::InvalidQuantity { value });
        }
        Ok(Self(value))
    }

    /// Returns the inner `f64` value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Quantity {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
