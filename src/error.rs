/// Lexing errors.
///
/// Raised while turning source text into tokens: characters outside the
/// expression alphabet and malformed numeric literals.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree from
/// tokens, such as unexpected tokens, unbalanced parentheses or input that
/// ends mid-expression.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while walking the syntax tree:
/// unknown names, arity mismatches, division by zero, domain violations and
/// overflow.
pub mod eval_error;
/// The combined error returned by the public entry points.
pub mod evaluation_error;

pub use eval_error::{DomainError, DomainResult, EvalError};
pub use evaluation_error::EvaluationError;
pub use lex_error::LexError;
pub use parse_error::ParseError;
