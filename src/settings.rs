use std::{fmt, str::FromStr};

use thiserror::Error;

/// Largest number of fractional digits a result may be displayed with.
pub const MAX_PRECISION: u8 = 15;
/// Number of fractional digits used when none is configured.
pub const DEFAULT_PRECISION: u8 = 6;

/// Errors raised while changing calculator settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// The angle mode name is neither degrees nor radians.
    #[error("Unknown angle mode '{0}'. Use 'deg' or 'rad'.")]
    UnknownAngleMode(String),
    /// The precision is not a whole number.
    #[error("Invalid precision '{0}'. Expected a whole number.")]
    InvalidPrecision(String),
    /// The precision lies outside `0..=15`.
    #[error("Precision must be between 0 and 15, got {0}.")]
    PrecisionOutOfRange(i64),
}

/// How trigonometric functions interpret and return angles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleMode {
    /// Angles are in degrees.
    #[default]
    Degrees,
    /// Angles are in radians.
    Radians,
}

impl AngleMode {
    /// Converts an angle expressed in this mode to radians.
    ///
    /// # Example
    /// ```
    /// use calcx::settings::AngleMode;
    ///
    /// assert!((AngleMode::Degrees.to_radians(180.0) - std::f64::consts::PI).abs() < 1e-15);
    /// assert_eq!(AngleMode::Radians.to_radians(1.5), 1.5);
    /// ```
    #[must_use]
    pub fn to_radians(self, angle: f64) -> f64 {
        match self {
            Self::Degrees => angle.to_radians(),
            Self::Radians => angle,
        }
    }

    /// Converts an angle in radians to this mode.
    #[must_use]
    pub fn from_radians(self, angle: f64) -> f64 {
        match self {
            Self::Degrees => angle.to_degrees(),
            Self::Radians => angle,
        }
    }
}

impl FromStr for AngleMode {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "deg" | "degree" | "degrees" => Ok(Self::Degrees),
            "rad" | "radian" | "radians" => Ok(Self::Radians),
            _ => Err(SettingsError::UnknownAngleMode(s.to_string())),
        }
    }
}

impl fmt::Display for AngleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Degrees => write!(f, "degrees"),
            Self::Radians => write!(f, "radians"),
        }
    }
}

/// Number of fractional digits shown for results, always within
/// `0..=MAX_PRECISION`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Precision(u8);

impl Precision {
    /// Validates a precision value.
    ///
    /// # Example
    /// ```
    /// use calcx::settings::Precision;
    ///
    /// assert_eq!(Precision::new(4).unwrap().digits(), 4);
    /// assert!(Precision::new(16).is_err());
    /// ```
    pub fn new(digits: i64) -> Result<Self, SettingsError> {
        u8::try_from(digits).ok()
                            .filter(|d| *d <= MAX_PRECISION)
                            .map(Self)
                            .ok_or(SettingsError::PrecisionOutOfRange(digits))
    }

    /// The number of fractional digits.
    #[must_use]
    pub const fn digits(self) -> usize {
        self.0 as usize
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self(DEFAULT_PRECISION)
    }
}

impl FromStr for Precision {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim()
                      .parse::<i64>()
                      .map_err(|_| SettingsError::InvalidPrecision(s.to_string()))?;
        Self::new(digits)
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User-adjustable calculator settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    /// Angle unit used by trigonometric functions.
    pub angle_mode: AngleMode,
    /// Display precision of results.
    pub precision:  Precision,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_calculator() {
        let settings = Settings::default();
        assert_eq!(settings.angle_mode, AngleMode::Degrees);
        assert_eq!(settings.precision.digits(), 6);
    }

    #[test]
    fn angle_mode_names() {
        assert_eq!("RAD".parse::<AngleMode>(), Ok(AngleMode::Radians));
        assert_eq!("degrees".parse::<AngleMode>(), Ok(AngleMode::Degrees));
        assert_eq!("grad".parse::<AngleMode>(),
                   Err(SettingsError::UnknownAngleMode("grad".to_string())));
    }

    #[test]
    fn precision_bounds() {
        assert!(Precision::new(0).is_ok());
        assert!(Precision::new(15).is_ok());
        assert_eq!(Precision::new(-1), Err(SettingsError::PrecisionOutOfRange(-1)));
        assert_eq!("abc".parse::<Precision>(),
                   Err(SettingsError::InvalidPrecision("abc".to_string())));
        assert_eq!(" 3 ".parse::<Precision>().map(Precision::digits), Ok(3));
    }

    #[test]
    fn round_trip_through_radians() {
        let mode = AngleMode::Degrees;
        assert!((mode.from_radians(mode.to_radians(30.0)) - 30.0).abs() < 1e-12);
    }
}
