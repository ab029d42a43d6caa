use std::{fmt, str::FromStr};

use thiserror::Error;

/// Feet in one meter.
const FEET_PER_METER: f64 = 3.28084;
/// Centimeters in one inch.
const CM_PER_INCH: f64 = 2.54;

/// Errors raised by [`convert`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The unit name is not recognized.
    #[error("Unknown unit '{0}'.")]
    UnknownUnit(String),
    /// The two units measure different quantities.
    #[error("Cannot convert {from} ({from_kind}) to {to} ({to_kind}).")]
    Incompatible {
        from:      Unit,
        from_kind: Quantity,
        to:        Unit,
        to_kind:   Quantity,
    },
}

/// The physical quantity a unit measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    Temperature,
    Angle,
    Length,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Temperature => write!(f, "temperature"),
            Self::Angle => write!(f, "angle"),
            Self::Length => write!(f, "length"),
        }
    }
}

/// A unit understood by [`convert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Celsius,
    Fahrenheit,
    Kelvin,
    Degrees,
    Radians,
    Gradians,
    Meters,
    Feet,
    Inches,
    Centimeters,
}

impl Unit {
    /// Every unit, grouped by quantity.
    pub const ALL: [Self; 10] = [Self::Celsius,
                                 Self::Fahrenheit,
                                 Self::Kelvin,
                                 Self::Degrees,
                                 Self::Radians,
                                 Self::Gradians,
                                 Self::Meters,
                                 Self::Feet,
                                 Self::Inches,
                                 Self::Centimeters];

    #[must_use]
    pub const fn quantity(self) -> Quantity {
        match self {
            Self::Celsius | Self::Fahrenheit | Self::Kelvin => Quantity::Temperature,
            Self::Degrees | Self::Radians | Self::Gradians => Quantity::Angle,
            Self::Meters | Self::Feet | Self::Inches | Self::Centimeters => Quantity::Length,
        }
    }

    /// The canonical name of the unit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Celsius => "celsius",
            Self::Fahrenheit => "fahrenheit",
            Self::Kelvin => "kelvin",
            Self::Degrees => "degrees",
            Self::Radians => "radians",
            Self::Gradians => "gradians",
            Self::Meters => "meters",
            Self::Feet => "feet",
            Self::Inches => "inches",
            Self::Centimeters => "cm",
        }
    }

    /// Expresses `value` in the base unit of its quantity: celsius, degrees
    /// or meters.
    fn to_base(self, value: f64) -> f64 {
        match self {
            Self::Celsius | Self::Degrees | Self::Meters => value,
            Self::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
            Self::Kelvin => value - 273.15,
            Self::Radians => value.to_degrees(),
            Self::Gradians => value * 9.0 / 10.0,
            Self::Feet => value / FEET_PER_METER,
            Self::Inches => value * CM_PER_INCH / 100.0,
            Self::Centimeters => value / 100.0,
        }
    }

    fn from_base(self, value: f64) -> f64 {
        match self {
            Self::Celsius | Self::Degrees | Self::Meters => value,
            Self::Fahrenheit => value * 9.0 / 5.0 + 32.0,
            Self::Kelvin => value + 273.15,
            Self::Radians => value.to_radians(),
            Self::Gradians => value * 10.0 / 9.0,
            Self::Feet => value * FEET_PER_METER,
            Self::Inches => value * 100.0 / CM_PER_INCH,
            Self::Centimeters => value * 100.0,
        }
    }
}

impl FromStr for Unit {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
               "c" | "celsius" => Self::Celsius,
               "f" | "fahrenheit" => Self::Fahrenheit,
               "k" | "kelvin" => Self::Kelvin,
               "deg" | "degree" | "degrees" => Self::Degrees,
               "rad" | "radian" | "radians" => Self::Radians,
               "grad" | "gradian" | "gradians" => Self::Gradians,
               "m" | "meter" | "meters" | "metre" | "metres" => Self::Meters,
               "ft" | "foot" | "feet" => Self::Feet,
               "in" | "inch" | "inches" => Self::Inches,
               "cm" | "centimeter" | "centimeters" | "centimetre" | "centimetres" => Self::Centimeters,
               _ => return Err(ConversionError::UnknownUnit(s.to_string())),
           })
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Converts `value` from one unit to another of the same quantity.
///
/// # Errors
/// [`ConversionError::Incompatible`] if the units measure different
/// quantities.
///
/// # Example
/// ```
/// use calcx::convert::{convert, Unit};
///
/// assert_eq!(convert(100.0, Unit::Celsius, Unit::Fahrenheit), Ok(212.0));
/// assert_eq!(convert(0.0, Unit::Celsius, Unit::Kelvin), Ok(273.15));
/// assert!(convert(1.0, Unit::Meters, Unit::Kelvin).is_err());
/// ```
pub fn convert(value: f64, from: Unit, to: Unit) -> Result<f64, ConversionError> {
    if from.quantity() != to.quantity() {
        return Err(ConversionError::Incompatible { from,
                                                   from_kind: from.quantity(),
                                                   to,
                                                   to_kind: to.quantity() });
    }
    if from == to {
        return Ok(value);
    }
    Ok(to.from_base(from.to_base(value)))
}

/// Parses both unit names and converts.
///
/// # Errors
/// [`ConversionError::UnknownUnit`] for an unrecognized name, otherwise as
/// [`convert`].
pub fn convert_named(value: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
    convert(value, from.parse()?, to.parse()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9 * b.abs().max(1.0)
    }

    #[test]
    fn temperature() {
        assert_eq!(convert(-40.0, Unit::Celsius, Unit::Fahrenheit), Ok(-40.0));
        assert_eq!(convert(32.0, Unit::Fahrenheit, Unit::Celsius), Ok(0.0));
        assert_eq!(convert(273.15, Unit::Kelvin, Unit::Celsius), Ok(0.0));
        assert!(close(convert(212.0, Unit::Fahrenheit, Unit::Kelvin).unwrap(), 373.15));
        assert!(close(convert(0.0, Unit::Kelvin, Unit::Fahrenheit).unwrap(), -459.67));
    }

    #[test]
    fn angles() {
        assert!(close(convert(180.0, Unit::Degrees, Unit::Radians).unwrap(), std::f64::consts::PI));
        assert!(close(convert(90.0, Unit::Degrees, Unit::Gradians).unwrap(), 100.0));
        assert!(close(convert(200.0, Unit::Gradians, Unit::Radians).unwrap(),
                      std::f64::consts::PI));
    }

    #[test]
    fn lengths() {
        assert!(close(convert(1.0, Unit::Meters, Unit::Feet).unwrap(), 3.28084));
        assert!(close(convert(3.28084, Unit::Feet, Unit::Meters).unwrap(), 1.0));
        assert!(close(convert(1.0, Unit::Inches, Unit::Centimeters).unwrap(), 2.54));
        assert!(close(convert(2.54, Unit::Centimeters, Unit::Inches).unwrap(), 1.0));
        assert!(close(convert(1.0, Unit::Meters, Unit::Inches).unwrap(), 100.0 / 2.54));
    }

    #[test]
    fn same_unit_is_identity() {
        for unit in Unit::ALL {
            assert_eq!(convert(1.25, unit, unit), Ok(1.25));
        }
    }

    #[test]
    fn bad_units() {
        assert_eq!(convert_named(1.0, "parsec", "m"),
                   Err(ConversionError::UnknownUnit("parsec".to_string())));
        assert!(matches!(convert_named(1.0, "C", "ft"),
                         Err(ConversionError::Incompatible { from_kind: Quantity::Temperature,
                                                             to_kind: Quantity::Length,
                                                             .. })));
    }
}
