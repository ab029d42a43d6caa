//! # calcx
//!
//! calcx is a scientific calculator written in Rust.
//! At its heart is a free-text expression evaluator that tokenizes, parses
//! with correct precedence and associativity, resolves constants, variables
//! and function calls, and evaluates to an `f64` or a classified error.
//!
//! Around the evaluator sit the collaborators a calculator needs: a memory
//! register with named variables, a bounded history, statistics over data
//! sets, unit conversion, result formatting and an interactive session.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc, clippy::multiple_crate_versions)]

use tracing::{debug, trace};

use crate::{
    error::EvaluationError,
    interpreter::{
        evaluator::{core::Context, function::core::FunctionRegistry},
        lexer::tokenize,
        parser::core::parse,
        symbols::{SymbolTable, VariableStore},
    },
    settings::AngleMode,
};

/// Defines the structure of parsed expressions.
///
/// The `Expr` tree is built bottom-up by the parser and walked exactly once
/// by the evaluator. Every node records the character offset of the token
/// that produced it.
pub mod ast;
/// Unit conversion between temperature, angle and length units.
pub mod convert;
/// Error types for every phase of evaluation and for the collaborators.
///
/// Lexing, parsing and evaluation each have their own enum. They are
/// combined into [`EvaluationError`] at the public entry points, which also
/// exposes the character offset of the failure when one exists.
pub mod error;
/// Display formatting of results with a configurable precision.
pub mod format;
/// The bounded list of successful calculations.
pub mod history;
/// The expression pipeline: lexer, parser, evaluator and symbol table.
///
/// # Responsibilities
/// - Converts text into positioned tokens.
/// - Builds an AST honoring the precedence table.
/// - Evaluates the AST against the function registry and symbol table.
pub mod interpreter;
/// The memory register, named variables and last answer.
pub mod memory;
/// Line-oriented calculator session used by the command-line front end.
pub mod session;
/// Calculator settings: angle mode and display precision.
pub mod settings;
/// Statistics over a data set.
pub mod stats;
/// Safe numeric conversions between floats and integers.
pub mod util;

/// Evaluates an expression using only the built-in constants.
///
/// Trigonometric functions use the default angle mode (degrees).
///
/// # Errors
/// Returns the lexing, parsing or evaluation error that stopped the
/// computation.
///
/// # Examples
/// ```
/// use calcx::evaluate_expression;
///
/// assert_eq!(evaluate_expression("2 + 3 * 4").unwrap(), 14.0);
/// assert_eq!(evaluate_expression("2 ^ 3 ^ 2").unwrap(), 512.0);
/// assert!(evaluate_expression("10 / 0").is_err());
/// ```
pub fn evaluate_expression(text: &str) -> Result<f64, EvaluationError> {
    run(text, SymbolTable::constants_only(), AngleMode::default())
}

/// Evaluates an expression, resolving variables through `variables`.
///
/// Constants always win over variables of the same name.
///
/// # Errors
/// Returns the lexing, parsing or evaluation error that stopped the
/// computation.
///
/// # Examples
/// ```
/// use std::collections::HashMap;
///
/// use calcx::{evaluate_expression_with, settings::AngleMode};
///
/// let mut vars = HashMap::new();
/// vars.insert("x".to_string(), 5.0);
///
/// let value = evaluate_expression_with("x + 1", &vars, AngleMode::Radians).unwrap();
/// assert_eq!(value, 6.0);
/// ```
pub fn evaluate_expression_with(text: &str,
                                variables: &dyn VariableStore,
                                angle_mode: AngleMode)
                                -> Result<f64, EvaluationError> {
    run(text, SymbolTable::with_variables(variables), angle_mode)
}

fn run(text: &str, symbols: SymbolTable<'_>, angle_mode: AngleMode) -> Result<f64, EvaluationError> {
    let tokens = tokenize(text)?;
    trace!(count = tokens.len(), "tokenized expression");

    let expr = parse(&tokens)?;
    trace!(%expr, "parsed expression");

    let value = Context::new(symbols, FunctionRegistry::standard()).with_angle_mode(angle_mode)
                                                                   .eval(&expr)?;
    debug!(text, value, "evaluated expression");

    Ok(value)
}
