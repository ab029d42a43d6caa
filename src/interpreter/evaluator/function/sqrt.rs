use crate::{
    error::{DomainError, DomainResult},
    interpreter::evaluator::utils::{pair, single},
    settings::AngleMode,
    util::num::is_integral,
};

/// Computes the square root of a value.
///
/// # Errors
/// A [`DomainError`] for negative input.
///
/// # Example
/// ```
/// use calcx::{interpreter::evaluator::function::sqrt::sqrt, settings::AngleMode};
///
/// assert_eq!(sqrt(&[16.0], AngleMode::default()), Ok(4.0));
/// assert!(sqrt(&[-1.0], AngleMode::default()).is_err());
/// ```
pub fn sqrt(args: &[f64], _: AngleMode) -> DomainResult<f64> {
    let x = single(args)?;
    if x < 0.0 {
        return Err(DomainError::new("square root of a negative number"));
    }
    Ok(x.sqrt())
}

/// Real cube root; defined for negative input.
pub fn cbrt(args: &[f64], _: AngleMode) -> DomainResult<f64> {
    Ok(single(args)?.cbrt())
}

/// Computes the `n`-th root of `x`, called as `nthroot(x, n)`.
///
/// Negative `x` is accepted for odd integer `n`, giving the real root.
///
/// # Errors
/// A [`DomainError`] for `n == 0`, or for negative `x` with any other `n`.
///
/// # Example
/// ```
/// use calcx::{interpreter::evaluator::function::sqrt::nthroot, settings::AngleMode};
///
/// let root = nthroot(&[32.0, 5.0], AngleMode::default()).unwrap();
/// assert!((root - 2.0).abs() < 1e-12);
///
/// let root = nthroot(&[-27.0, 3.0], AngleMode::default()).unwrap();
/// assert!((root + 3.0).abs() < 1e-12);
/// assert!(nthroot(&[-16.0, 4.0], AngleMode::default()).is_err());
/// ```
pub fn nthroot(args: &[f64], _: AngleMode) -> DomainResult<f64> {
    let (x, n) = pair(args)?;
    if n == 0.0 {
        return Err(DomainError::new("the root index cannot be zero"));
    }
    if x >= 0.0 {
        return Ok(x.powf(n.recip()));
    }
    if is_integral(n) && n % 2.0 != 0.0 {
        return Ok(-(-x).powf(n.recip()));
    }
    Err(DomainError::new("even or fractional root of a negative number"))
}

/// `x * x`.
pub fn square(args: &[f64], _: AngleMode) -> DomainResult<f64> {
    Ok(single(args)?.powi(2))
}

/// `x * x * x`.
pub fn cube(args: &[f64], _: AngleMode) -> DomainResult<f64> {
    Ok(single(args)?.powi(3))
}

/// `x` raised to `y`, with the same domain rules as the `^` operator.
///
/// # Errors
/// A [`DomainError`] for zero raised to a negative power, or a negative base
/// with a fractional exponent.
pub fn pow(args: &[f64], _: AngleMode) -> DomainResult<f64> {
    let (base, exponent) = pair(args)?;
    if base == 0.0 && exponent < 0.0 {
        return Err(DomainError::new("zero cannot be raised to a negative power"));
    }
    if base < 0.0 && !is_integral(exponent) {
        return Err(DomainError::new("a negative base needs an integer exponent"));
    }
    Ok(base.powf(exponent))
}

/// `1 / x`.
///
/// # Errors
/// A [`DomainError`] for `x == 0`.
pub fn reciprocal(args: &[f64], _: AngleMode) -> DomainResult<f64> {
    let x = single(args)?;
    if x == 0.0 {
        return Err(DomainError::new("zero has no reciprocal"));
    }
    Ok(x.recip())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODE: AngleMode = AngleMode::Degrees;

    #[test]
    fn roots() {
        assert_eq!(cbrt(&[-8.0], MODE), Ok(-2.0));
        assert!((nthroot(&[81.0, 4.0], MODE).unwrap() - 3.0).abs() < 1e-12);
        assert_eq!(nthroot(&[4.0, -2.0], MODE), Ok(0.5));
        assert!(nthroot(&[8.0, 0.0], MODE).is_err());
        assert!(nthroot(&[-8.0, 1.5], MODE).is_err());
    }

    #[test]
    fn powers() {
        assert_eq!(square(&[-3.0], MODE), Ok(9.0));
        assert_eq!(cube(&[-3.0], MODE), Ok(-27.0));
        assert!((pow(&[2.0, 0.5], MODE).unwrap() - std::f64::consts::SQRT_2).abs() < 1e-15);
        assert!(pow(&[0.0, -2.0], MODE).is_err());
        assert!(pow(&[-4.0, 0.5], MODE).is_err());
    }

    #[test]
    fn reciprocal_of_zero() {
        assert_eq!(reciprocal(&[4.0], MODE), Ok(0.25));
        assert!(reciprocal(&[0.0], MODE).is_err());
    }
}
