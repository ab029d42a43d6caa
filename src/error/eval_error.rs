use thiserror::Error;

use crate::interpreter::evaluator::function::core::Arity;

/// Represents all errors that can occur during evaluation.
///
/// Evaluation failures never corrupt the symbol table or the registry; both
/// are read-only while an expression is evaluated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// A constant or variable name that resolves to nothing.
    #[error("Unknown identifier '{0}'.")]
    UnknownIdentifier(String),
    /// A call to a function that is not registered.
    #[error("Unknown function '{0}'.")]
    UnknownFunction(String),
    /// A call with the wrong number of arguments.
    #[error("Function '{name}' expects {expected} argument(s), but got {got}.")]
    ArityMismatch {
        /// The function name.
        name:     String,
        /// The accepted argument count.
        expected: Arity,
        /// The number of arguments supplied.
        got:      usize,
    },
    /// `/`, `//` or `%` by zero, or zero raised to a negative power.
    #[error("Division by zero.")]
    DivisionByZero,
    /// A mathematically invalid argument.
    #[error("{}", describe_domain(.function.as_deref(), .args, .reason))]
    DomainError {
        /// The function that rejected its arguments, `None` for operators.
        function: Option<String>,
        /// The offending argument values.
        args:     Vec<f64>,
        /// Why the arguments are invalid.
        reason:   String,
    },
    /// The result is too large to represent as a finite `f64`.
    #[error("Overflow: the result is too large to represent.")]
    Overflow,
}

impl EvalError {
    /// Builds a domain error raised by an operator rather than a function.
    #[must_use]
    pub fn operator_domain(args: &[f64], reason: impl Into<String>) -> Self {
        Self::DomainError { function: None,
                            args:     args.to_vec(),
                            reason:   reason.into(), }
    }
}

fn describe_domain(function: Option<&str>, args: &[f64], reason: &str) -> String {
    match function {
        Some(name) => {
            let rendered = args.iter()
                               .map(ToString::to_string)
                               .collect::<Vec<_>>()
                               .join(", ");
            format!("Domain error in {name}({rendered}): {reason}.")
        },
        None => format!("Domain error: {reason}."),
    }
}

/// The failure returned by a registered function when its arguments fall
/// outside its domain (e.g. `sqrt(-1)`, `log(0)`).
///
/// The evaluator tags it with the function name and argument values before
/// surfacing it as [`EvalError::DomainError`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct DomainError {
    /// Why the arguments are invalid.
    pub reason: String,
}

impl DomainError {
    /// Creates a domain error with the given reason.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

/// Result type returned by registered functions.
pub type DomainResult<T> = Result<T, DomainError>;
