use crate::{
    error::{DomainError, DomainResult},
    interpreter::evaluator::utils::pair,
    settings::AngleMode,
};

/// Returns the smallest argument.
///
/// # Errors
/// A [`DomainError`] when called without arguments.
///
/// # Example
/// ```
/// use calcx::interpreter::evaluator::function::min_max::min;
///
/// assert_eq!(min(&[3.0, -1.0, 7.0]), Ok(-1.0));
/// assert!(min(&[]).is_err());
/// ```
pub fn min(args: &[f64]) -> DomainResult<f64> {
    args.iter()
        .copied()
        .reduce(f64::min)
        .ok_or_else(|| DomainError::new("min needs at least one argument"))
}

/// Returns the largest argument.
///
/// # Errors
/// A [`DomainError`] when called without arguments.
pub fn max(args: &[f64]) -> DomainResult<f64> {
    args.iter()
        .copied()
        .reduce(f64::max)
        .ok_or_else(|| DomainError::new("max needs at least one argument"))
}

/// Length of the hypotenuse, `sqrt(x^2 + y^2)`, computed without
/// intermediate overflow.
pub fn hypot(args: &[f64], _: AngleMode) -> DomainResult<f64> {
    let (x, y) = pair(args)?;
    Ok(x.hypot(y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_argument_is_its_own_extreme() {
        assert_eq!(min(&[4.0]), Ok(4.0));
        assert_eq!(max(&[4.0]), Ok(4.0));
    }

    #[test]
    fn max_of_many() {
        assert_eq!(max(&[1.0, 9.5, -3.0, 9.0]), Ok(9.5));
    }

    #[test]
    fn hypot_avoids_overflow() {
        assert_eq!(hypot(&[3.0, 4.0], AngleMode::Radians), Ok(5.0));
        assert!(hypot(&[1e200, 1e200], AngleMode::Radians).unwrap().is_finite());
    }
}
