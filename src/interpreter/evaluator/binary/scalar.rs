use crate::{
    ast::BinaryOperator,
    error::EvalError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context<'_> {
    /// Evaluates a scalar arithmetic operation.
    ///
    /// `+`, `-` and `*` follow IEEE-754. `/`, `//` and `%` reject a divisor of
    /// exactly zero. `%` takes the sign of the divisor and `//` is derived
    /// from that remainder, so `a == b * (a // b) + a % b` holds for finite
    /// operands, fractional divisors included: `1 // 0.1` is `9`.
    ///
    /// The operator must not be `Pow`; [`Context::eval_pow`] handles it.
    ///
    /// # Example
    /// ```
    /// use calcx::{ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_scalar_op(BinaryOperator::Mod, -7.0, 3.0), Ok(2.0));
    /// assert_eq!(Context::eval_scalar_op(BinaryOperator::FloorDiv, -7.0, 2.0), Ok(-4.0));
    /// ```
    ///
    /// # Errors
    /// [`EvalError::DivisionByZero`] for `/`, `//` or `%` by zero.
    pub fn eval_scalar_op(op: BinaryOperator, left: f64, right: f64) -> EvalResult<f64> {
        use BinaryOperator::{Add, Div, FloorDiv, Mod, Mul, Pow, Sub};

        if matches!(op, Div | FloorDiv | Mod) && right == 0.0 {
            return Err(EvalError::DivisionByZero);
        }

        Ok(match op {
               Add => left + right,
               Sub => left - right,
               Mul => left * right,
               Div => left / right,
               FloorDiv => floored_div(left, right),
               Mod => floored_mod(left, right),
               Pow => left.powf(right),
           })
    }
}

/// Remainder whose sign follows the divisor.
fn floored_mod(left: f64, right: f64) -> f64 {
    let rem = left % right;
    if rem != 0.0 && (rem < 0.0) != (right < 0.0) {
        rem + right
    } else {
        rem
    }
}

/// Quotient matching [`floored_mod`]: the exact multiple `left - rem` is
/// divided and snapped to the nearest integer to absorb rounding.
fn floored_div(left: f64, right: f64) -> f64 {
    let rem = left % right;
    let mut quotient = (left - rem) / right;
    if rem != 0.0 && (rem < 0.0) != (right < 0.0) {
        quotient -= 1.0;
    }
    if quotient == 0.0 {
        return 0.0_f64.copysign(left / right);
    }
    let floor = quotient.floor();
    if quotient - floor > 0.5 { floor + 1.0 } else { floor }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn op(op: BinaryOperator, left: f64, right: f64) -> EvalResult<f64> {
        Context::eval_scalar_op(op, left, right)
    }

    #[test]
    fn division_by_zero_is_an_error() {
        for kind in [BinaryOperator::Div, BinaryOperator::FloorDiv, BinaryOperator::Mod] {
            assert_eq!(op(kind, 1.0, 0.0), Err(EvalError::DivisionByZero));
            assert_eq!(op(kind, 1.0, -0.0), Err(EvalError::DivisionByZero));
        }
        assert_eq!(op(BinaryOperator::Div, 0.0, 0.0), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn modulo_takes_the_sign_of_the_divisor() {
        assert_eq!(op(BinaryOperator::Mod, 7.0, 3.0), Ok(1.0));
        assert_eq!(op(BinaryOperator::Mod, -7.0, 3.0), Ok(2.0));
        assert_eq!(op(BinaryOperator::Mod, 7.0, -3.0), Ok(-2.0));
        assert_eq!(op(BinaryOperator::Mod, -7.0, -3.0), Ok(-1.0));
        assert_eq!(op(BinaryOperator::Mod, 5.5, 2.0), Ok(1.5));
    }

    #[test]
    fn floor_division_rounds_down() {
        assert_eq!(op(BinaryOperator::FloorDiv, 7.0, 2.0), Ok(3.0));
        assert_eq!(op(BinaryOperator::FloorDiv, -7.0, 2.0), Ok(-4.0));
        assert_eq!(op(BinaryOperator::FloorDiv, 7.5, 2.5), Ok(3.0));
        assert_eq!(op(BinaryOperator::FloorDiv, 5.5, -2.0), Ok(-3.0));
    }

    #[test]
    fn floor_division_agrees_with_modulo_for_fractions() {
        assert_eq!(op(BinaryOperator::FloorDiv, 1.0, 0.1), Ok(9.0));
        assert_eq!(op(BinaryOperator::FloorDiv, -1.0, 0.1), Ok(-10.0));
        assert_eq!(op(BinaryOperator::FloorDiv, 7.5, 0.3), Ok(25.0));
        assert_eq!(op(BinaryOperator::FloorDiv, 0.5, 0.1), Ok(4.0));
        assert_eq!(op(BinaryOperator::FloorDiv, 2.5, 0.5), Ok(5.0));
    }

    #[test]
    fn division_identity_holds() {
        for (a, b) in [(17.0, 5.0), (-17.0, 5.0), (17.0, -5.0), (-17.0, -5.0)] {
            let quotient = op(BinaryOperator::FloorDiv, a, b).unwrap();
            let remainder = op(BinaryOperator::Mod, a, b).unwrap();
            assert_eq!(b * quotient + remainder, a);
        }
        for (a, b) in [(1.0, 0.1), (7.5, 0.3), (-1.0, 0.1), (0.5, 0.1), (5.5, -2.0), (-3.7, 1.2)] {
            let quotient = op(BinaryOperator::FloorDiv, a, b).unwrap();
            let remainder = op(BinaryOperator::Mod, a, b).unwrap();
            assert_eq!(quotient, quotient.round(), "{a} // {b} is not whole");
            assert!((b * quotient + remainder - a).abs() <= 1e-12,
                    "{b} * ({a} // {b}) + {a} % {b} != {a}");
        }
    }
}
