use crate::{
    error::DomainResult,
    interpreter::evaluator::utils::{finite_product, pair, single},
    settings::AngleMode,
    util::num::f64_to_u64_checked,
};

/// Largest `n` whose factorial is finite as an `f64`.
pub const MAX_FACTORIAL: u64 = 170;

/// Computes `n!` for a non-negative integer `n`.
///
/// For `n > 170` the result does not fit in an `f64`; infinity is returned
/// and the evaluator reports it as an overflow.
///
/// # Errors
/// A [`crate::error::DomainError`] for negative or fractional `n`.
///
/// # Example
/// ```
/// use calcx::{interpreter::evaluator::function::combinatorics::factorial, settings::AngleMode};
///
/// let mode = AngleMode::default();
/// assert_eq!(factorial(&[5.0], mode), Ok(120.0));
/// assert_eq!(factorial(&[0.0], mode), Ok(1.0));
/// assert!(factorial(&[171.0], mode).unwrap().is_infinite());
/// assert!(factorial(&[-1.0], mode).is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn factorial(args: &[f64], _: AngleMode) -> DomainResult<f64> {
    let n = f64_to_u64_checked(single(args)?)?;
    if n > MAX_FACTORIAL {
        return Ok(f64::INFINITY);
    }
    Ok(finite_product((2..=n).map(|k| k as f64)))
}

/// Computes `n!! = n * (n - 2) * (n - 4) * ...` for a non-negative integer
/// `n`. `0!!` and `1!!` are 1.
///
/// # Example
/// ```
/// use calcx::{
///     interpreter::evaluator::function::combinatorics::double_factorial, settings::AngleMode,
/// };
///
/// assert_eq!(double_factorial(&[7.0], AngleMode::default()), Ok(105.0));
/// assert_eq!(double_factorial(&[8.0], AngleMode::default()), Ok(384.0));
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn double_factorial(args: &[f64], _: AngleMode) -> DomainResult<f64> {
    let n = f64_to_u64_checked(single(args)?)?;
    let factors = (1..=n).rev().step_by(2).map(|k| k as f64);
    Ok(finite_product(factors))
}

/// Number of ways to choose `r` items from `n`, ignoring order.
///
/// Zero when `r > n`.
///
/// # Errors
/// A [`crate::error::DomainError`] unless both arguments are non-negative
/// integers.
///
/// # Example
/// ```
/// use calcx::{interpreter::evaluator::function::combinatorics::comb, settings::AngleMode};
///
/// assert_eq!(comb(&[5.0, 2.0], AngleMode::default()), Ok(10.0));
/// assert_eq!(comb(&[2.0, 5.0], AngleMode::default()), Ok(0.0));
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn comb(args: &[f64], _: AngleMode) -> DomainResult<f64> {
    let (n, r) = non_negative_pair(args)?;
    if r > n {
        return Ok(0.0);
    }
    let r = r.min(n - r);

    let mut result = 1.0;
    for i in 1..=r {
        // Multiplying before dividing keeps every partial result integral.
        result = result * (n - r + i) as f64 / i as f64;
        if !result.is_finite() {
            break;
        }
    }
    Ok(result.round())
}

/// Number of ordered arrangements of `r` items taken from `n`.
///
/// Zero when `r > n`.
///
/// # Example
/// ```
/// use calcx::{interpreter::evaluator::function::combinatorics::perm, settings::AngleMode};
///
/// assert_eq!(perm(&[5.0, 2.0], AngleMode::default()), Ok(20.0));
/// assert_eq!(perm(&[4.0, 4.0], AngleMode::default()), Ok(24.0));
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn perm(args: &[f64], _: AngleMode) -> DomainResult<f64> {
    let (n, r) = non_negative_pair(args)?;
    if r > n {
        return Ok(0.0);
    }
    Ok(finite_product((n - r + 1..=n).map(|k| k as f64)))
}

fn non_negative_pair(args: &[f64]) -> DomainResult<(u64, u64)> {
    let (n, r) = pair(args)?;
    Ok((f64_to_u64_checked(n)?, f64_to_u64_checked(r)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODE: AngleMode = AngleMode::Radians;

    #[test]
    fn factorial_boundaries() {
        assert!(factorial(&[170.0], MODE).unwrap().is_finite());
        assert!(factorial(&[170.0], MODE).unwrap() > 7.25e306);
        assert!(factorial(&[1e15], MODE).unwrap().is_infinite());
        assert!(factorial(&[2.5], MODE).is_err());
    }

    #[test]
    fn double_factorial_of_small_values() {
        assert_eq!(double_factorial(&[0.0], MODE), Ok(1.0));
        assert_eq!(double_factorial(&[1.0], MODE), Ok(1.0));
        assert!(double_factorial(&[1e15], MODE).unwrap().is_infinite());
    }

    #[test]
    fn combinations_are_symmetric_and_exact() {
        assert_eq!(comb(&[52.0, 5.0], MODE), Ok(2_598_960.0));
        assert_eq!(comb(&[52.0, 47.0], MODE), comb(&[52.0, 5.0], MODE));
        assert_eq!(comb(&[10.0, 0.0], MODE), Ok(1.0));
        assert!(comb(&[5.0, -1.0], MODE).is_err());
        assert!(comb(&[1e15, 5e14], MODE).unwrap().is_infinite());
    }

    #[test]
    fn permutations() {
        assert_eq!(perm(&[10.0, 3.0], MODE), Ok(720.0));
        assert_eq!(perm(&[3.0, 0.0], MODE), Ok(1.0));
        assert_eq!(perm(&[3.0, 4.0], MODE), Ok(0.0));
    }
}
