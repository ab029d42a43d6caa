/// Binary operator evaluation logic.
///
/// Handles the arithmetic operators, including floored division and modulo,
/// and exponentiation with its domain checks.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements prefix negation and identity.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the main evaluation entry point, the evaluation context and the
/// finiteness check applied to every node.
pub mod core;

/// Utility functions for evaluation.
///
/// Provides the per-node evaluation routines and argument helpers shared by
/// the built-in functions.
pub mod utils;

/// Function evaluation.
///
/// Holds the function registry and the built-in scientific functions.
pub mod function;
