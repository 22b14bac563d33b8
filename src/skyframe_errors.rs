use rust_decimal::Decimal;
use thiserror::Error;

/// Boxed failure returned by an Earth-orientation provider implementation.
pub type LookupFailure = Box<dyn std::error::Error + Send + Sync>;

/// Input validation failures, raised before any numeric work is done.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid date, expected YYYY-MM-DD: {0}")]
    InvalidDateFormat(String),

    #[error("Invalid time of day, expected HH:MM:SS: {0}")]
    InvalidTimeFormat(String),

    #[error("Not a valid Gregorian calendar date: {0}")]
    InvalidCalendarDate(String),

    #[error("{name} out of range: {value}")]
    CoordinateOutOfRange { name: &'static str, value: Decimal },

    #[error("Angle must be a finite number, got {0}")]
    NonFiniteAngle(f64),

    #[error("Digit count must be at most {max}, got {got}")]
    InvalidDigits { got: u32, max: u32 },

    #[error("Angle too large to format: {0}")]
    FormatOverflow(f64),

    #[error("Unknown IANA time zone: {0}")]
    UnknownTimeZone(String),

    #[error("Julian Date outside the Gregorian conversion range: {0}")]
    JulianDateOutOfRange(Decimal),
}

/// Which of the two Earth-orientation lookups failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    DeltaT,
    PolarMotion,
}

impl std::fmt::Display for LookupKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupKind::DeltaT => write!(f, "Couldn't get ΔT (Delta T) value"),
            LookupKind::PolarMotion => {
                write!(f, "Couldn't get polar motion value from IERS service")
            }
        }
    }
}

/// Line-level parsing errors for the IERS / USNO tabulated files.
///
/// Line numbers are 1-based, counted in the original file.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IersParseError {
    #[error("Line {0} is too short")]
    TooShortLine(usize),

    #[error("Line {line}: invalid {field} field: {value:?}")]
    InvalidField {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("Table has no usable rows")]
    EmptyTable,
}

#[derive(Error, Debug)]
pub enum SkyframeError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("{kind}")]
    EarthOrientationLookup {
        kind: LookupKind,
        #[source]
        source: Option<LookupFailure>,
    },

    #[error("Error while parsing IERS table: {0}")]
    IersParse(#[from] IersParseError),

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),
}

impl SkyframeError {
    pub(crate) fn lookup(kind: LookupKind, source: Option<LookupFailure>) -> Self {
        SkyframeError::EarthOrientationLookup { kind, source }
    }
}

impl PartialEq for SkyframeError {
    fn eq(&self, other: &Self) -> bool {
        use SkyframeError::*;
        match (self, other) {
            (Validation(a), Validation(b)) => a == b,
            (IersParse(a), IersParse(b)) => a == b,

            // the provider's own failure is opaque, only the lookup kind is compared
            (
                EarthOrientationLookup { kind: a, .. },
                EarthOrientationLookup { kind: b, .. },
            ) => a == b,
            (IoError(_), IoError(_)) => true,

            _ => false,
        }
    }
}

#[cfg(test)]
mod skyframe_errors_test {
    use super::*;

    #[test]
    fn test_lookup_messages() {
        let err = SkyframeError::lookup(LookupKind::DeltaT, None);
        assert_eq!(err.to_string(), "Couldn't get ΔT (Delta T) value");

        let err = SkyframeError::lookup(LookupKind::PolarMotion, Some("timeout".into()));
        assert_eq!(
            err.to_string(),
            "Couldn't get polar motion value from IERS service"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_equality_ignores_provider_source() {
        let a = SkyframeError::lookup(LookupKind::DeltaT, Some("db down".into()));
        let b = SkyframeError::lookup(LookupKind::DeltaT, None);
        assert_eq!(a, b);
        assert_ne!(a, SkyframeError::lookup(LookupKind::PolarMotion, None));
    }
}
