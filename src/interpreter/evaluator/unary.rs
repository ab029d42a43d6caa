use crate::{ast::UnaryOperator, interpreter::evaluator::core::Context};

impl Context<'_> {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Neg`: numeric negation.
    /// - `Pos`: identity.
    ///
    /// # Example
    /// ```
    /// use calcx::{ast::UnaryOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_unary(UnaryOperator::Neg, 5.0), -5.0);
    /// assert_eq!(Context::eval_unary(UnaryOperator::Pos, 5.0), 5.0);
    /// ```
    #[must_use]
    pub const fn eval_unary(op: UnaryOperator, value: f64) -> f64 {
        match op {
            UnaryOperator::Neg => -value,
            UnaryOperator::Pos => value,
        }
    }
}
