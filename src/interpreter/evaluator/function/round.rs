use crate::{
    error::{DomainError, DomainResult},
    interpreter::evaluator::utils::single,
    settings::AngleMode,
    util::num::f64_to_i64_checked,
};

/// Most fractional digits that can change an `f64` when rounding.
const MAX_ROUND_DIGITS: i64 = 15;
/// Past this many integer digits every `f64` rounds to zero.
const MIN_ROUND_DIGITS: i64 = -308;

/// Absolute value.
pub fn abs(args: &[f64], _: AngleMode) -> DomainResult<f64> {
    Ok(single(args)?.abs())
}

/// Largest integer not greater than `x`.
pub fn floor(args: &[f64], _: AngleMode) -> DomainResult<f64> {
    Ok(single(args)?.floor())
}

/// Smallest integer not less than `x`.
pub fn ceil(args: &[f64], _: AngleMode) -> DomainResult<f64> {
    Ok(single(args)?.ceil())
}

/// Removes the fractional part of `x`, rounding toward zero.
///
/// # Example
/// ```
/// use calcx::{interpreter::evaluator::function::round::trunc, settings::AngleMode};
///
/// assert_eq!(trunc(&[-2.7], AngleMode::default()), Ok(-2.0));
/// ```
pub fn trunc(args: &[f64], _: AngleMode) -> DomainResult<f64> {
    Ok(single(args)?.trunc())
}

/// Returns `-1`, `0` or `1` according to the sign of `x`.
///
/// Unlike [`f64::signum`], zero maps to zero.
pub fn sign(args: &[f64], _: AngleMode) -> DomainResult<f64> {
    let x = single(args)?;
    Ok(if x > 0.0 {
           1.0
       } else if x < 0.0 {
           -1.0
       } else {
           0.0
       })
}

/// Rounds half to even, either to an integer (`round(x)`) or to a number of
/// decimal digits (`round(x, digits)`). Negative `digits` round to tens,
/// hundreds and so on.
///
/// # Errors
/// A [`DomainError`] if `digits` is not an integer.
///
/// # Example
/// ```
/// use calcx::{interpreter::evaluator::function::round::round, settings::AngleMode};
///
/// let mode = AngleMode::default();
/// assert_eq!(round(&[2.5], mode), Ok(2.0));
/// assert_eq!(round(&[3.5], mode), Ok(4.0));
/// assert_eq!(round(&[1234.5678, 2.0], mode), Ok(1234.57));
/// assert_eq!(round(&[1234.5678, -2.0], mode), Ok(1200.0));
/// ```
pub fn round(args: &[f64], _: AngleMode) -> DomainResult<f64> {
    match args {
        [x] => Ok(x.round_ties_even()),
        [x, digits] => round_to(*x, *digits),
        _ => Err(DomainError::new(format!("expected 1 or 2 arguments, got {}", args.len()))),
    }
}

fn round_to(x: f64, digits: f64) -> DomainResult<f64> {
    let digits = f64_to_i64_checked(digits).map_err(|_| {
                                                DomainError::new("the number of digits must be an integer")
                                            })?;
    if digits > MAX_ROUND_DIGITS {
        return Ok(x);
    }
    if digits < MIN_ROUND_DIGITS {
        return Ok(0.0);
    }
    let exponent = i32::try_from(digits).map_err(|_| DomainError::new("too many digits"))?;
    let factor = 10f64.powi(exponent);
    let scaled = x * factor;
    if !scaled.is_finite() {
        return Ok(x);
    }
    Ok(scaled.round_ties_even() / factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODE: AngleMode = AngleMode::Degrees;

    #[test]
    fn sign_of_zero_is_zero() {
        assert_eq!(sign(&[0.0], MODE), Ok(0.0));
        assert_eq!(sign(&[-0.0], MODE), Ok(0.0));
        assert_eq!(sign(&[-3.2], MODE), Ok(-1.0));
    }

    #[test]
    fn rounding_family() {
        assert_eq!(floor(&[-2.5], MODE), Ok(-3.0));
        assert_eq!(ceil(&[-2.5], MODE), Ok(-2.0));
        assert_eq!(abs(&[-2.5], MODE), Ok(2.5));
        assert_eq!(round(&[-2.5], MODE), Ok(-2.0));
        assert_eq!(round(&[0.125, 2.0], MODE), Ok(0.12));
    }

    #[test]
    fn extreme_digit_counts() {
        assert_eq!(round(&[1.5, 400.0], MODE), Ok(1.5));
        assert_eq!(round(&[1e300, 10.0], MODE), Ok(1e300));
        assert_eq!(round(&[123.0, -400.0], MODE), Ok(0.0));
        assert!(round(&[1.0, 0.5], MODE).is_err());
    }
}
