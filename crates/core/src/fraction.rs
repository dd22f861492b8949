use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FractionError {
    #[error("fraction must be finite, got {provided}")]
    NotFinite { provided: f64 },
    #[error("fraction must be in [0, 1], got {provided}")]
    OutOfRange { provided: f64 },
}

/// A real number validated to lie in `[0, 1]`.
///
/// External data (component inputs, parsed configuration) is parsed into
/// this once at the boundary; everything past the boundary can rely on the
/// range without re-checking it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Fraction(f64);

impl Fraction {
    /// Parse a raw value into a fraction.
    ///
    /// # Errors
    ///
    /// - `NotFinite` for NaN and infinities
    /// - `OutOfRange` for values outside `[0, 1]`
    pub fn parse(value: f64) -> Result<Self, FractionError> {
        if !value.is_finite() {
            return Err(FractionError::NotFinite { provided: value });
        }
        if !(0.0..=1.0).contains(&value) {
            return Err(FractionError::OutOfRange { provided: value });
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.0
    }
}
