use crate::settings::Precision;

/// Magnitudes below this display as `0`.
pub const ZERO_THRESHOLD: f64 = 1e-10;
/// Magnitudes above this display in scientific notation.
pub const SCIENTIFIC_THRESHOLD: f64 = 1e10;

/// Renders a result for display.
///
/// - magnitudes below `1e-10` become `"0"`;
/// - magnitudes above `1e10` use scientific notation with `precision`
///   fractional digits and a signed, two-digit exponent;
/// - everything else is fixed-point with `precision` digits, trailing zeros
///   and a dangling decimal point removed.
///
/// # Example
/// ```
/// use calcx::{format::format_result, settings::Precision};
///
/// let precision = Precision::default();
/// assert_eq!(format_result(14.0, precision), "14");
/// assert_eq!(format_result(0.1 + 0.2, precision), "0.3");
/// assert_eq!(format_result(1.0 / 3.0, precision), "0.333333");
/// assert_eq!(format_result(12_345_600_000.0, precision), "1.234560e+10");
/// assert_eq!(format_result(1e-12, precision), "0");
/// ```
#[must_use]
pub fn format_result(value: f64, precision: Precision) -> String {
    let digits = precision.digits();
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.abs() < ZERO_THRESHOLD {
        return "0".to_string();
    }
    if value.abs() > SCIENTIFIC_THRESHOLD {
        return scientific(value, digits);
    }

    let fixed = format!("{value:.digits$}");
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        &fixed
    };
    // Rounding can leave a negative zero such as "-0.000".
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

fn scientific(value: f64, digits: usize) -> String {
    let rendered = format!("{value:.digits$e}");
    match rendered.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exponent) => {
                let sign = if exponent < 0 { '-' } else { '+' };
                format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
            },
            Err(_) => rendered,
        },
        // Infinities have no exponent.
        None => rendered,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn precision(digits: i64) -> Precision {
        Precision::new(digits).unwrap()
    }

    #[test]
    fn fixed_point_trims_zeros() {
        assert_eq!(format_result(2.5, precision(6)), "2.5");
        assert_eq!(format_result(-7.0, precision(6)), "-7");
        assert_eq!(format_result(1.23456, precision(2)), "1.23");
        assert_eq!(format_result(1e10, precision(6)), "10000000000");
    }

    #[test]
    fn zero_precision_keeps_integer_zeros() {
        assert_eq!(format_result(120.0, precision(0)), "120");
        assert_eq!(format_result(2.7, precision(0)), "3");
        assert_eq!(format_result(100.4, precision(0)), "100");
    }

    #[test]
    fn tiny_values_are_zero() {
        assert_eq!(format_result(0.0, precision(6)), "0");
        assert_eq!(format_result(-1e-11, precision(6)), "0");
        assert_eq!(format_result(-0.000_000_1, precision(3)), "0");
    }

    #[test]
    fn large_values_are_scientific() {
        assert_eq!(format_result(-2.5e12, precision(2)), "-2.50e+12");
        assert_eq!(format_result(6.022_140_76e23, precision(3)), "6.022e+23");
        assert_eq!(format_result(1.7e300, precision(0)), "2e+300");
        assert_eq!(format_result(f64::INFINITY, precision(6)), "inf");
    }
}
