use crate::{
    error::{DomainError, DomainResult},
    interpreter::evaluator::utils::{pair, single},
    settings::AngleMode,
};

/// Natural logarithm.
///
/// # Errors
/// A [`DomainError`] for `x <= 0`.
pub fn ln(args: &[f64], _: AngleMode) -> DomainResult<f64> {
    Ok(positive(single(args)?)?.ln())
}

/// Base-10 logarithm, registered as both `log` and `log10`.
///
/// # Example
/// ```
/// use calcx::{interpreter::evaluator::function::log::log10, settings::AngleMode};
///
/// assert_eq!(log10(&[1000.0], AngleMode::default()), Ok(3.0));
/// assert!(log10(&[0.0], AngleMode::default()).is_err());
/// ```
pub fn log10(args: &[f64], _: AngleMode) -> DomainResult<f64> {
    Ok(positive(single(args)?)?.log10())
}

/// Base-2 logarithm.
pub fn log2(args: &[f64], _: AngleMode) -> DomainResult<f64> {
    Ok(positive(single(args)?)?.log2())
}

/// Computes the logarithm of a value with respect to a given base.
///
/// Accepts exactly two arguments: `value` and `base`, and computes
/// `ln(value) / ln(base)`.
///
/// # Errors
/// A [`DomainError`] for a non-positive value, or a base that is not
/// positive or equals 1.
///
/// # Example
/// ```
/// use calcx::{interpreter::evaluator::function::log::logn, settings::AngleMode};
///
/// let result = logn(&[81.0, 3.0], AngleMode::default()).unwrap();
/// assert!((result - 4.0).abs() < 1e-12);
///
/// assert!(logn(&[10.0, 1.0], AngleMode::default()).is_err());
/// ```
pub fn logn(args: &[f64], _: AngleMode) -> DomainResult<f64> {
    let (value, base) = pair(args)?;
    let value = positive(value)?;
    if base <= 0.0 || base == 1.0 {
        return Err(DomainError::new("the base must be positive and not equal to 1"));
    }
    Ok(value.ln() / base.ln())
}

/// `e` raised to `x`.
pub fn exp(args: &[f64], _: AngleMode) -> DomainResult<f64> {
    Ok(single(args)?.exp())
}

/// `2` raised to `x`.
pub fn exp2(args: &[f64], _: AngleMode) -> DomainResult<f64> {
    Ok(single(args)?.exp2())
}

/// `10` raised to `x`.
pub fn exp10(args: &[f64], _: AngleMode) -> DomainResult<f64> {
    Ok(10f64.powf(single(args)?))
}

fn positive(x: f64) -> DomainResult<f64> {
    if x > 0.0 {
        Ok(x)
    } else {
        Err(DomainError::new("logarithm requires a positive argument"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODE: AngleMode = AngleMode::Radians;

    #[test]
    fn logarithms_of_exact_powers() {
        assert_eq!(ln(&[1.0], MODE), Ok(0.0));
        assert_eq!(log2(&[1024.0], MODE), Ok(10.0));
        assert_eq!(log10(&[0.01], MODE), Ok(-2.0));
    }

    #[test]
    fn non_positive_arguments_are_rejected() {
        for x in [0.0, -1.0] {
            assert!(ln(&[x], MODE).is_err());
            assert!(log10(&[x], MODE).is_err());
            assert!(log2(&[x], MODE).is_err());
            assert!(logn(&[x, 10.0], MODE).is_err());
        }
        assert!(logn(&[8.0, -2.0], MODE).is_err());
    }

    #[test]
    fn exponentials() {
        assert_eq!(exp(&[0.0], MODE), Ok(1.0));
        assert_eq!(exp2(&[10.0], MODE), Ok(1024.0));
        assert_eq!(exp10(&[3.0], MODE), Ok(1000.0));
        assert!(exp(&[1000.0], MODE).unwrap().is_infinite());
    }
}
