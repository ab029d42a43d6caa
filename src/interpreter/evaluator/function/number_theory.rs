use crate::{
    error::DomainResult,
    interpreter::evaluator::utils::{pair, single},
    settings::AngleMode,
    util::num::{f64_to_i64_checked, f64_to_u64_checked},
};

/// Largest index whose Fibonacci number is finite as an `f64`.
pub const MAX_FIBONACCI: u64 = 1476;

/// Greatest common divisor of two integers; always non-negative.
/// `gcd(0, 0)` is 0.
///
/// # Errors
/// A [`crate::error::DomainError`] unless both arguments are integers.
///
/// # Example
/// ```
/// use calcx::{interpreter::evaluator::function::number_theory::gcd, settings::AngleMode};
///
/// assert_eq!(gcd(&[48.0, -18.0], AngleMode::default()), Ok(6.0));
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn gcd(args: &[f64], _: AngleMode) -> DomainResult<f64> {
    let (a, b) = integer_pair(args)?;
    Ok(euclid(a, b) as f64)
}

/// Least common multiple of two integers; always non-negative.
/// Zero if either argument is zero.
///
/// # Example
/// ```
/// use calcx::{interpreter::evaluator::function::number_theory::lcm, settings::AngleMode};
///
/// assert_eq!(lcm(&[4.0, 6.0], AngleMode::default()), Ok(12.0));
/// assert_eq!(lcm(&[0.0, 6.0], AngleMode::default()), Ok(0.0));
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn lcm(args: &[f64], _: AngleMode) -> DomainResult<f64> {
    let (a, b) = integer_pair(args)?;
    if a == 0 || b == 0 {
        return Ok(0.0);
    }
    let divisor = euclid(a, b);
    Ok(((a / divisor) as f64 * b as f64).abs())
}

/// The `n`-th Fibonacci number, with `fibonacci(0) = 0` and
/// `fibonacci(1) = 1`.
///
/// Past index 1476 the value no longer fits in an `f64`; infinity is
/// returned and the evaluator reports it as an overflow.
///
/// # Errors
/// A [`crate::error::DomainError`] for negative or fractional `n`.
///
/// # Example
/// ```
/// use calcx::{interpreter::evaluator::function::number_theory::fibonacci, settings::AngleMode};
///
/// assert_eq!(fibonacci(&[10.0], AngleMode::default()), Ok(55.0));
/// ```
pub fn fibonacci(args: &[f64], _: AngleMode) -> DomainResult<f64> {
    let n = f64_to_u64_checked(single(args)?)?;
    if n > MAX_FIBONACCI {
        return Ok(f64::INFINITY);
    }
    let (mut current, mut next) = (0.0_f64, 1.0_f64);
    for _ in 0..n {
        (current, next) = (next, current + next);
    }
    Ok(current)
}

/// `1` if `n` is prime, otherwise `0`. Integers below 2 are not prime.
///
/// # Errors
/// A [`crate::error::DomainError`] for fractional `n`.
///
/// # Example
/// ```
/// use calcx::{interpreter::evaluator::function::number_theory::is_prime, settings::AngleMode};
///
/// assert_eq!(is_prime(&[97.0], AngleMode::default()), Ok(1.0));
/// assert_eq!(is_prime(&[91.0], AngleMode::default()), Ok(0.0));
/// ```
pub fn is_prime(args: &[f64], _: AngleMode) -> DomainResult<f64> {
    let n = f64_to_i64_checked(single(args)?)?;
    let prime = u64::try_from(n).is_ok_and(trial_division);
    Ok(if prime { 1.0 } else { 0.0 })
}

/// Euclid's algorithm on the magnitudes of `a` and `b`.
fn euclid(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    // Both inputs are at most 2^53 - 1, so the divisor fits.
    i64::try_from(a).unwrap_or(i64::MAX)
}

fn trial_division(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut divisor = 5_u64;
    while divisor * divisor <= n {
        if n % divisor == 0 || n % (divisor + 2) == 0 {
            return false;
        }
        divisor += 6;
    }
    true
}

fn integer_pair(args: &[f64]) -> DomainResult<(i64, i64)> {
    let (a, b) = pair(args)?;
    Ok((f64_to_i64_checked(a)?, f64_to_i64_checked(b)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::num::u64_to_f64_checked;

    const MODE: AngleMode = AngleMode::Degrees;

    #[test]
    fn gcd_and_lcm_edge_cases() {
        assert_eq!(gcd(&[0.0, 0.0], MODE), Ok(0.0));
        assert_eq!(gcd(&[0.0, -7.0], MODE), Ok(7.0));
        assert_eq!(lcm(&[-4.0, 6.0], MODE), Ok(12.0));
        assert_eq!(lcm(&[21.0, 6.0], MODE), Ok(42.0));
        assert!(gcd(&[1.5, 3.0], MODE).is_err());
    }

    #[test]
    fn fibonacci_sequence() {
        let values = (0..8).map(|n| fibonacci(&[f64::from(n)], MODE).unwrap())
                           .collect::<Vec<_>>();
        assert_eq!(values, vec![0.0, 1.0, 1.0, 2.0, 3.0, 5.0, 8.0, 13.0]);
        assert!(fibonacci(&[1476.0], MODE).unwrap().is_finite());
        assert!(fibonacci(&[1477.0], MODE).unwrap().is_infinite());
        assert!(fibonacci(&[-1.0], MODE).is_err());
    }

    #[test]
    fn primality() {
        let primes = (0..30).filter(|n| is_prime(&[f64::from(*n)], MODE) == Ok(1.0))
                            .collect::<Vec<_>>();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
        assert_eq!(is_prime(&[-7.0], MODE), Ok(0.0));
        assert_eq!(is_prime(&[2_147_483_647.0], MODE), Ok(1.0));
        assert!(is_prime(&[7.5], MODE).is_err());
    }

    #[test]
    fn results_stay_exact() {
        let big = u64_to_f64_checked(1 << 52, ()).unwrap();
        assert_eq!(gcd(&[big, 6.0], MODE), Ok(2.0));
    }
}
