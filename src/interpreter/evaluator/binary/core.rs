use crate::{
    ast::BinaryOperator,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context<'_> {
    /// Evaluates a binary operation between two values.
    ///
    /// Power calls [`Context::eval_pow`]; every other operator is handled by
    /// [`Context::eval_scalar_op`]. The result is not yet checked for
    /// finiteness; [`Context::eval`] does that for every node.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Example
    /// ```
    /// use calcx::{ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_binary(BinaryOperator::Add, 3.0, 4.0), Ok(7.0));
    /// assert_eq!(Context::eval_binary(BinaryOperator::Pow, 2.0, 10.0), Ok(1024.0));
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> EvalResult<f64> {
        match op {
            BinaryOperator::Pow => Self::eval_pow(left, right),
            BinaryOperator::Add
            | BinaryOperator::Sub
            | BinaryOperator::Mul
            | BinaryOperator::Div
            | BinaryOperator::Mod
            | BinaryOperator::FloorDiv => Self::eval_scalar_op(op, left, right),
        }
    }
}
