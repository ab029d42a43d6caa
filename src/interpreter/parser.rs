/// Parser entry point, shared result type and depth limit.
pub mod core;

/// Unary operators and atoms.
///
/// Handles prefix `+`/`-`, literals, identifiers, calls and parenthesized
/// groups.
pub mod unary;

/// Binary operator parsing.
///
/// Implements the additive, multiplicative and power levels of the
/// precedence table.
pub mod binary;

/// Utility functions for the parser.
///
/// Provides helpers shared by several productions, such as comma-separated
/// argument lists.
pub mod utils;
