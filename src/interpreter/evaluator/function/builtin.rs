use crate::{
    error::{DomainError, DomainResult},
    interpreter::evaluator::utils::{pair, single},
    settings::AngleMode,
};

/// Applies a direct trigonometric function to an angle given in the current
/// angle mode.
///
/// # Example
/// ```
/// use calcx::{interpreter::evaluator::function::builtin::sin, settings::AngleMode};
///
/// let r = sin(&[90.0], AngleMode::Degrees).unwrap();
/// assert_eq!(r, 1.0);
///
/// let r = sin(&[std::f64::consts::FRAC_PI_2], AngleMode::Radians).unwrap();
/// assert_eq!(r, 1.0);
/// ```
macro_rules! angle_builtin {
    ($fname:ident) => {
        pub fn $fname(args: &[f64], mode: AngleMode) -> DomainResult<f64> {
            Ok(mode.to_radians(single(args)?).$fname())
        }
    };
}

/// Applies a real function that does not depend on the angle mode and is
/// defined everywhere.
macro_rules! plain_builtin {
    ($fname:ident) => {
        pub fn $fname(args: &[f64], _: AngleMode) -> DomainResult<f64> {
            Ok(single(args)?.$fname())
        }
    };
}

angle_builtin!(sin);
angle_builtin!(cos);
angle_builtin!(tan);

plain_builtin!(sinh);
plain_builtin!(cosh);
plain_builtin!(tanh);
plain_builtin!(asinh);

/// Inverse sine, returned in the current angle mode.
///
/// # Errors
/// A [`DomainError`] unless `-1 <= x <= 1`.
pub fn asin(args: &[f64], mode: AngleMode) -> DomainResult<f64> {
    let x = unit_interval(single(args)?)?;
    Ok(mode.from_radians(x.asin()))
}

/// Inverse cosine, returned in the current angle mode.
///
/// # Errors
/// A [`DomainError`] unless `-1 <= x <= 1`.
///
/// # Example
/// ```
/// use calcx::{interpreter::evaluator::function::builtin::acos, settings::AngleMode};
///
/// assert_eq!(acos(&[-1.0], AngleMode::Degrees), Ok(180.0));
/// assert!(acos(&[1.5], AngleMode::Degrees).is_err());
/// ```
pub fn acos(args: &[f64], mode: AngleMode) -> DomainResult<f64> {
    let x = unit_interval(single(args)?)?;
    Ok(mode.from_radians(x.acos()))
}

/// Inverse tangent, returned in the current angle mode.
pub fn atan(args: &[f64], mode: AngleMode) -> DomainResult<f64> {
    Ok(mode.from_radians(single(args)?.atan()))
}

/// Angle of the point `(x, y)` for `atan2(y, x)`, in the current angle mode.
pub fn atan2(args: &[f64], mode: AngleMode) -> DomainResult<f64> {
    let (y, x) = pair(args)?;
    Ok(mode.from_radians(y.atan2(x)))
}

/// Inverse hyperbolic cosine.
///
/// # Errors
/// A [`DomainError`] for `x < 1`.
pub fn acosh(args: &[f64], _: AngleMode) -> DomainResult<f64> {
    let x = single(args)?;
    if x < 1.0 {
        return Err(DomainError::new("acosh requires x >= 1"));
    }
    Ok(x.acosh())
}

/// Inverse hyperbolic tangent.
///
/// # Errors
/// A [`DomainError`] unless `-1 < x < 1`.
pub fn atanh(args: &[f64], _: AngleMode) -> DomainResult<f64> {
    let x = single(args)?;
    if x.abs() >= 1.0 {
        return Err(DomainError::new("atanh requires -1 < x < 1"));
    }
    Ok(x.atanh())
}

/// Converts a value from degrees to radians, regardless of the angle mode.
///
/// # Example
/// ```
/// use calcx::{interpreter::evaluator::function::builtin::radians, settings::AngleMode};
///
/// let r = radians(&[180.0], AngleMode::Radians).unwrap();
/// assert_eq!(r, std::f64::consts::PI);
/// ```
pub fn radians(args: &[f64], _: AngleMode) -> DomainResult<f64> {
    Ok(single(args)?.to_radians())
}

/// Converts a value from radians to degrees, regardless of the angle mode.
pub fn degrees(args: &[f64], _: AngleMode) -> DomainResult<f64> {
    Ok(single(args)?.to_degrees())
}

fn unit_interval(x: f64) -> DomainResult<f64> {
    if (-1.0..=1.0).contains(&x) {
        Ok(x)
    } else {
        Err(DomainError::new("argument must be between -1 and 1"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn degree_mode_is_applied_both_ways() {
        let mode = AngleMode::Degrees;
        assert!((sin(&[30.0], mode).unwrap() - 0.5).abs() < EPS);
        assert!((cos(&[60.0], mode).unwrap() - 0.5).abs() < EPS);
        assert!((tan(&[45.0], mode).unwrap() - 1.0).abs() < EPS);
        assert!((asin(&[0.5], mode).unwrap() - 30.0).abs() < EPS);
        assert!((atan(&[1.0], mode).unwrap() - 45.0).abs() < EPS);
        assert!((atan2(&[1.0, -1.0], mode).unwrap() - 135.0).abs() < EPS);
    }

    #[test]
    fn hyperbolic_functions_ignore_the_angle_mode() {
        assert_eq!(sinh(&[1.0], AngleMode::Degrees), sinh(&[1.0], AngleMode::Radians));
        assert_eq!(tanh(&[0.0], AngleMode::Degrees), Ok(0.0));
    }

    #[test]
    fn inverse_domains() {
        let mode = AngleMode::Radians;
        assert!(asin(&[1.0001], mode).is_err());
        assert!(acos(&[-2.0], mode).is_err());
        assert!(acosh(&[0.5], mode).is_err());
        assert_eq!(acosh(&[1.0], mode), Ok(0.0));
        assert!(atanh(&[1.0], mode).is_err());
        assert!(atanh(&[-1.0], mode).is_err());
    }
}
