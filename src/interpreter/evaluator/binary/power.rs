use crate::{
    error::EvalError,
    interpreter::evaluator::core::{Context, EvalResult},
    util::num::is_integral,
};

impl Context<'_> {
    /// Evaluates an exponentiation operation.
    ///
    /// A negative base is only accepted with an integral exponent, since the
    /// real result would otherwise be undefined. Zero raised to a negative
    /// power is a division by zero. Results too large for `f64` come back as
    /// infinity and are reported by the caller as an overflow.
    ///
    /// # Parameters
    /// - `base`: The base value.
    /// - `exponent`: The exponent value.
    ///
    /// # Example
    /// ```
    /// use calcx::interpreter::evaluator::core::Context;
    ///
    /// assert_eq!(Context::eval_pow(2.0, 10.0), Ok(1024.0));
    /// assert_eq!(Context::eval_pow(-2.0, 3.0), Ok(-8.0));
    /// assert!(Context::eval_pow(-8.0, 1.0 / 3.0).is_err());
    /// ```
    ///
    /// # Errors
    /// - [`EvalError::DomainError`] for a negative base with a fractional
    ///   exponent.
    /// - [`EvalError::DivisionByZero`] for `0 ^ negative`.
    pub fn eval_pow(base: f64, exponent: f64) -> EvalResult<f64> {
        if base == 0.0 && exponent < 0.0 {
            return Err(EvalError::DivisionByZero);
        }
        if base < 0.0 && !is_integral(exponent) {
            return Err(EvalError::operator_domain(&[base, exponent],
                                                  "a negative base needs an integer exponent"));
        }
        Ok(base.powf(exponent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_one_edge_cases() {
        assert_eq!(Context::eval_pow(0.0, 0.0), Ok(1.0));
        assert_eq!(Context::eval_pow(0.0, 5.0), Ok(0.0));
        assert_eq!(Context::eval_pow(0.0, -1.0), Err(EvalError::DivisionByZero));
        assert_eq!(Context::eval_pow(1.0, 1e300), Ok(1.0));
    }

    #[test]
    fn negative_bases() {
        assert_eq!(Context::eval_pow(-2.0, 2.0), Ok(4.0));
        assert_eq!(Context::eval_pow(-2.0, -1.0), Ok(-0.5));
        assert!(matches!(Context::eval_pow(-1.0, 0.5),
                         Err(EvalError::DomainError { function: None, .. })));
    }

    #[test]
    fn huge_results_are_left_to_the_overflow_check() {
        assert!(Context::eval_pow(10.0, 400.0).unwrap().is_infinite());
    }
}
