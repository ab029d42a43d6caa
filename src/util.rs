/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between integer and
/// floating-point types without risking silent data loss or rounding errors.
/// Functions that take integer-valued arguments (`factorial`, `gcd`, ...)
/// use these helpers to validate their input before converting it.
///
/// All conversions return a `Result`, which is `Ok` if the conversion is
/// lossless and valid, or a domain error if the value is out of range or not
/// an integer.
pub mod num;
