//! Field validation helpers shared by every entity.
//!
//! Each helper takes the field name used in the error message and the raw
//! argument, and returns the accepted value or a [`DomainError`].
//!
//! # Examples
//!
//! ```
//! use labkit_domain::common::validate;
//! use labkit_domain::error::ErrorKind;
//!
//! assert_eq!(validate::non_negative_real("Length", 2.5), Ok(2.5));
//! assert_eq!(
//!     validate::non_negative_real("Length", -1.0).map_err(|e| e.kind()),
//!     Err(ErrorKind::Value)
//! );
//! assert_eq!(
//!     validate::real("Length", f64::NAN).map_err(|e| e.kind()),
//!     Err(ErrorKind::Type)
//! );
//! ```

use crate::error::DomainError;

/// Accepts any finite float. NaN and infinities are not real numbers.
pub fn real(field: &str, value: f64) -> Result<f64, DomainError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::type_mismatch(format!(
            "{} must be a real number, got {}",
            field, value
        )))
    }
}

/// Accepts finite floats >= 0.
pub fn non_negative_real(field: &str, value: f64) -> Result<f64, DomainError> {
    let value = real(field, value)?;
    if value < 0.0 {
        return Err(DomainError::invalid_value(format!(
            "{} must be non-negative, got {}",
            field, value
        )));
    }
    Ok(value)
}

/// Accepts finite floats > 0.
pub fn positive_real(field: &str, value: f64) -> Result<f64, DomainError> {
    let value = real(field, value)?;
    if value <= 0.0 {
        return Err(DomainError::invalid_value(format!(
            "{} must be positive, got {}",
            field, value
        )));
    }
    Ok(value)
}

/// Accepts integers in `0..=u32::MAX`.
pub fn non_negative_int(field: &str, value: i64) -> Result<u32, DomainError> {
    if value < 0 {
        return Err(DomainError::invalid_value(format!(
            "{} must be non-negative, got {}",
            field, value
        )));
    }
    u32::try_from(value).map_err(|_| {
        DomainError::invalid_value(format!("{} is too large: {}", field, value))
    })
}

/// Checks that `requested` can be taken out of `available`.
pub fn within(field: &str, requested: f64, available: f64) -> Result<(), DomainError> {
    if requested > available {
        return Err(DomainError::invalid_value(format!(
            "{} to remove ({}) exceeds the current value ({})",
            field, requested, available
        )));
    }
    Ok(())
}
