use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::{evaluator::function::core::FunctionRegistry, symbols::SymbolTable},
    settings::AngleMode,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// [`EvalError`] describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Stores what an evaluation may read.
///
/// A `Context` borrows the symbol table and the function registry; it never
/// owns or mutates variable state. Evaluating the same tree twice against the
/// same context yields the same result.
///
/// ## Usage
///
/// `Context` is created per evaluation (it is cheap) or reused across
/// evaluations that share the same symbols and settings.
pub struct Context<'a> {
    /// Resolves constant and variable names.
    pub symbols:    SymbolTable<'a>,
    /// The functions callable from expressions.
    pub registry:   &'a FunctionRegistry,
    /// Angle unit used by the trigonometric functions.
    pub angle_mode: AngleMode,
}

impl<'a> Context<'a> {
    /// Creates a context using the default angle mode (degrees).
    #[must_use]
    pub fn new(symbols: SymbolTable<'a>, registry: &'a FunctionRegistry) -> Self {
        Self { symbols,
               registry,
               angle_mode: AngleMode::default() }
    }

    /// Replaces the angle mode used by trigonometric functions.
    #[must_use]
    pub const fn with_angle_mode(mut self, angle_mode: AngleMode) -> Self {
        self.angle_mode = angle_mode;
        self
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Children are
    /// evaluated before their parent, left to right; nothing short-circuits.
    /// Every intermediate result is checked: an infinite value is reported as
    /// [`EvalError::Overflow`] and a NaN as [`EvalError::DomainError`], so no
    /// non-finite number ever escapes.
    ///
    /// # Example
    /// ```
    /// use calcx::interpreter::{
    ///     evaluator::{core::Context, function::core::FunctionRegistry},
    ///     lexer::tokenize,
    ///     parser::core::parse,
    ///     symbols::SymbolTable,
    /// };
    ///
    /// let expr = parse(&tokenize("2 ^ 10 - 24").unwrap()).unwrap();
    /// let context = Context::new(SymbolTable::constants_only(), FunctionRegistry::standard());
    ///
    /// assert_eq!(context.eval(&expr).unwrap(), 1000.0);
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<f64> {
        let value = match expr {
            Expr::Literal { value, .. } => *value,
            Expr::Variable { name, .. } | Expr::Constant { name, .. } => self.eval_name(name)?,
            Expr::UnaryOp { op, operand, .. } => self.eval_unary_op(*op, operand)?,
            Expr::BinaryOp { left, op, right, .. } => self.eval_binary_op(left, *op, right)?,
            Expr::Call { function, args, .. } => self.eval_function_call(function, args)?,
        };
        check_finite(value)
    }
}

/// Evaluates `expr` against `symbols` and `registry` in the default angle
/// mode.
///
/// # Example
/// ```
/// use std::collections::HashMap;
///
/// use calcx::interpreter::{
///     evaluator::{core::evaluate, function::core::FunctionRegistry},
///     lexer::tokenize,
///     parser::core::parse,
///     symbols::SymbolTable,
/// };
///
/// let mut vars = HashMap::new();
/// vars.insert("r".to_string(), 2.0);
///
/// let expr = parse(&tokenize("pi * r ^ 2").unwrap()).unwrap();
/// let area = evaluate(&expr, SymbolTable::with_variables(&vars), FunctionRegistry::standard());
/// assert_eq!(area.unwrap(), std::f64::consts::PI * 4.0);
/// ```
pub fn evaluate(expr: &Expr,
                symbols: SymbolTable<'_>,
                registry: &FunctionRegistry)
                -> EvalResult<f64> {
    Context::new(symbols, registry).eval(expr)
}

/// Rejects infinite and NaN results.
pub(crate) fn check_finite(value: f64) -> EvalResult<f64> {
    if value.is_nan() {
        return Err(EvalError::operator_domain(&[], "the result is undefined"));
    }
    if value.is_infinite() {
        return Err(EvalError::Overflow);
    }
    Ok(value)
}
