use crate::error::{DomainError, DomainResult};

/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;
/// Largest signed integer exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_I64_INT: i64 = 9_007_199_254_740_991;

/// Returns `true` if `value` is finite and has no fractional part.
///
/// ## Example
/// ```
/// use calcx::util::num::is_integral;
///
/// assert!(is_integral(-3.0));
/// assert!(!is_integral(2.5));
/// assert!(!is_integral(f64::INFINITY));
/// ```
#[must_use]
pub fn is_integral(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}

/// Safely converts a `u64` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds `MAX_SAFE_U64_INT`.
///
/// ## Example
/// ```
/// use calcx::util::num::{MAX_SAFE_U64_INT, u64_to_f64_checked};
///
/// assert_eq!(u64_to_f64_checked(42, "too big!"), Ok(42.0));
/// assert!(u64_to_f64_checked(MAX_SAFE_U64_INT + 1, "too big!").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn u64_to_f64_checked<E>(value: u64, error: E) -> Result<f64, E> {
    if value > MAX_SAFE_U64_INT {
        return Err(error);
    }
    Ok(value as f64)
}

/// Converts a collection length to `f64`.
///
/// Lengths beyond `MAX_SAFE_U64_INT` cannot occur for in-memory data of
/// `f64` values, so the conversion is exact in practice.
///
/// ## Example
/// ```
/// use calcx::util::num::usize_to_f64;
///
/// assert_eq!(usize_to_f64(3), 3.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn usize_to_f64(value: usize) -> f64 {
    value as f64
}

/// Safely converts an `f64` to `u64` if the value is a non-negative integer
/// no larger than `MAX_SAFE_U64_INT`.
///
/// ## Errors
/// Returns a [`DomainError`] for negative, fractional, non-finite or
/// out-of-range values.
///
/// ## Example
/// ```
/// use calcx::util::num::f64_to_u64_checked;
///
/// assert_eq!(f64_to_u64_checked(7.0), Ok(7));
/// assert!(f64_to_u64_checked(-5.0).is_err());
/// assert!(f64_to_u64_checked(1.23).is_err());
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_sign_loss)]
pub fn f64_to_u64_checked(value: f64) -> DomainResult<u64> {
    if !is_integral(value) || value < 0.0 {
        return Err(DomainError::new("expected a non-negative integer"));
    }
    if value > MAX_SAFE_U64_INT as f64 {
        return Err(DomainError::new("integer argument is too large"));
    }
    Ok(value as u64)
}

/// Safely converts an `f64` to `i64` if the value is an integer whose
/// magnitude does not exceed `MAX_SAFE_I64_INT`.
///
/// ## Errors
/// Returns a [`DomainError`] for fractional, non-finite or out-of-range
/// values.
///
/// ## Example
/// ```
/// use calcx::util::num::f64_to_i64_checked;
///
/// assert_eq!(f64_to_i64_checked(-1000.0), Ok(-1000));
/// assert!(f64_to_i64_checked(1.5).is_err());
/// assert!(f64_to_i64_checked(1e20).is_err());
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_to_i64_checked(value: f64) -> DomainResult<i64> {
    if !is_integral(value) {
        return Err(DomainError::new("expected an integer"));
    }
    if value.abs() > MAX_SAFE_I64_INT as f64 {
        return Err(DomainError::new("integer argument is too large"));
    }
    Ok(value as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safe_bounds_are_inclusive() {
        #[allow(clippy::cast_precision_loss)]
        let limit = MAX_SAFE_U64_INT as f64;
        assert_eq!(f64_to_u64_checked(limit), Ok(MAX_SAFE_U64_INT));
        assert_eq!(f64_to_i64_checked(-limit), Ok(-MAX_SAFE_I64_INT));
        assert!(f64_to_u64_checked(limit + 1.0).is_err());
    }

    #[test]
    fn non_finite_values_are_rejected() {
        assert!(f64_to_u64_checked(f64::NAN).is_err());
        assert!(f64_to_i64_checked(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn negative_zero_is_zero() {
        assert_eq!(f64_to_u64_checked(-0.0), Ok(0));
    }
}
