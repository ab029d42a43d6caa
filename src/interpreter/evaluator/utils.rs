use tracing::trace;

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::{DomainError, DomainResult, EvalError},
    interpreter::evaluator::core::{Context, EvalResult, check_finite},
};

impl Context<'_> {
    /// Resolves a constant or variable name.
    ///
    /// Constants are consulted first, then the injected variable store.
    ///
    /// # Errors
    /// [`EvalError::UnknownIdentifier`] if the name resolves to nothing.
    pub fn eval_name(&self, name: &str) -> EvalResult<f64> {
        self.symbols
            .resolve(name)
            .ok_or_else(|| EvalError::UnknownIdentifier(name.to_string()))
    }

    /// Evaluates a unary operator applied to a subexpression.
    ///
    /// The operand is evaluated first, then handed to
    /// [`Context::eval_unary`].
    pub fn eval_unary_op(&self, op: UnaryOperator, operand: &Expr) -> EvalResult<f64> {
        let value = self.eval(operand)?;
        Ok(Self::eval_unary(op, value))
    }

    /// Evaluates a binary operator applied to two subexpressions.
    ///
    /// Both operands are evaluated, left first, before the operator is
    /// applied through [`Context::eval_binary`].
    ///
    /// A left-leaning chain such as `1 + 2 - 3 + ...` is walked in a loop, so
    /// its length costs no stack. Each folded step is checked for
    /// finiteness like any other node.
    pub fn eval_binary_op(&self,
                          left: &Expr,
                          op: BinaryOperator,
                          right: &Expr)
                          -> EvalResult<f64> {
        let mut pending = vec![(op, right)];
        let mut leftmost = left;
        while let Expr::BinaryOp { left, op, right, .. } = leftmost {
            pending.push((*op, right.as_ref()));
            leftmost = left.as_ref();
        }

        let mut value = self.eval(leftmost)?;
        for (op, right) in pending.into_iter().rev() {
            let right = self.eval(right)?;
            value = check_finite(Self::eval_binary(op, value, right)?)?;
        }
        Ok(value)
    }

    /// Evaluates a function call.
    ///
    /// The name is looked up first, so an unknown function is reported even
    /// when its arguments would fail. Arguments are then evaluated in order,
    /// their count checked against the function's arity, and the function
    /// invoked. A domain failure is tagged with the function name and the
    /// argument values.
    ///
    /// # Errors
    /// - [`EvalError::UnknownFunction`] for unregistered names.
    /// - [`EvalError::ArityMismatch`] for a wrong argument count.
    /// - [`EvalError::DomainError`] when the function rejects its arguments or
    ///   produces an undefined result.
    pub fn eval_function_call(&self, name: &str, args: &[Expr]) -> EvalResult<f64> {
        let def = self.registry
                      .lookup(name)
                      .ok_or_else(|| EvalError::UnknownFunction(name.to_string()))?;

        let values = args.iter()
                         .map(|arg| self.eval(arg))
                         .collect::<EvalResult<Vec<_>>>()?;

        if !def.arity.accepts(values.len()) {
            return Err(EvalError::ArityMismatch { name:     name.to_string(),
                                                  expected: def.arity,
                                                  got:      values.len(), });
        }

        trace!(function = name, args = ?values, "calling function");
        let result = (def.func)(&values, self.angle_mode).map_err(|err| {
                                                             EvalError::DomainError {
                function: Some(name.to_string()),
                args:     values.clone(),
                reason:   err.reason,
            }
                                                         })?;

        if result.is_nan() {
            return Err(EvalError::DomainError { function: Some(name.to_string()),
                                                args:     values,
                                                reason:   "the result is undefined".to_string(), });
        }
        Ok(result)
    }
}

/// Extracts the only argument of a one-argument function.
///
/// ## Errors
/// A [`DomainError`] if `args` does not hold exactly one value. The evaluator
/// checks arities before calling, so this only fires for direct calls.
///
/// ## Example
/// ```
/// use calcx::interpreter::evaluator::utils::single;
///
/// assert_eq!(single(&[4.0]), Ok(4.0));
/// assert!(single(&[1.0, 2.0]).is_err());
/// ```
pub fn single(args: &[f64]) -> DomainResult<f64> {
    match args {
        [x] => Ok(*x),
        _ => Err(DomainError::new(format!("expected 1 argument, got {}", args.len()))),
    }
}

/// Extracts both arguments of a two-argument function.
///
/// ## Errors
/// A [`DomainError`] if `args` does not hold exactly two values.
pub fn pair(args: &[f64]) -> DomainResult<(f64, f64)> {
    match args {
        [a, b] => Ok((*a, *b)),
        _ => Err(DomainError::new(format!("expected 2 arguments, got {}", args.len()))),
    }
}

/// Multiplies the factors yielded by `factors`, stopping as soon as the
/// product stops being finite.
///
/// Long products of large integers (`factorial`, `perm`, ...) overflow
/// quickly; stopping early keeps huge inputs from looping for a long time.
/// The caller reports the infinite product as an overflow.
///
/// ## Example
/// ```
/// use calcx::interpreter::evaluator::utils::finite_product;
///
/// assert_eq!(finite_product((1..=5).map(f64::from)), 120.0);
/// assert!(finite_product(std::iter::repeat(1e300)).is_infinite());
/// ```
pub fn finite_product(factors: impl IntoIterator<Item = f64>) -> f64 {
    let mut product = 1.0;
    for factor in factors {
        product *= factor;
        if !product.is_finite() {
            break;
        }
    }
    product
}
