/// Trigonometric, hyperbolic and angle conversion functions.
///
/// Direct trigonometric functions read their argument in the current angle
/// mode; inverse ones return their result in it.
pub mod builtin;
/// Factorials, binomial coefficients and permutations.
pub mod combinatorics;
/// Logarithm and exponential function implementations.
///
/// Supports natural, base-10, base-2 and base-n logarithms.
pub mod log;
/// `min`, `max` and `hypot` function implementations.
pub mod min_max;
/// `gcd`, `lcm`, `fibonacci` and `is_prime`.
pub mod number_theory;
/// Rounding and sign functions.
pub mod round;
/// Roots, powers and the reciprocal.
pub mod sqrt;

pub mod core;
