/// Dispatch of binary operators to their implementations.
pub mod core;

/// Exponentiation with domain and division checks.
pub mod power;

/// Addition, subtraction, multiplication, division, floor division and
/// modulo.
pub mod scalar;
