//! # Sexagesimal formatting
//!
//! Render angles as `DD:MM:SS.ssss` (degrees) or `HH:MM:SS.ssss` (hours), the notation
//! used for FITS header values such as `RA`, `DEC`, `ST` and `HA`.
//!
//! * The sign is a leading `-` for negative input, nothing otherwise.
//! * The whole part and the minutes are zero-padded to two digits.
//! * Seconds are rounded to [`FormatOptions::digits`] decimals and padded to two integer
//!   digits. Rounding carries into the minutes and the whole part, so `59.99999″` never
//!   prints as `60.0000`.
//! * Hours wrap at 24, so the rounding carry of a sidereal time just under 360° prints
//!   `00:00:00.0000`. [`angle_to_dms`] wraps at 360° in the same way; [`deg_to_dms`] does
//!   not wrap, for signed values such as declinations.
//! * Values whose tick count overflows a `u64` are rejected instead of saturating.
use serde::Deserialize;

use crate::{
    precision::{angle::Angle, to_f64},
    skyframe_errors::{SkyframeError, ValidationError},
};

/// Largest supported number of decimals on the seconds field.
pub const MAX_DIGITS: u32 = 9;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Decimals on the seconds field
    pub digits: u32,
    /// Separator between the three fields
    pub sep: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            digits: 4,
            sep: ":".to_string(),
        }
    }
}

impl FormatOptions {
    pub fn with_digits(digits: u32) -> Self {
        FormatOptions {
            digits,
            ..Default::default()
        }
    }
}

/// Split `value` (in whole units, e.g. degrees or hours) into sexagesimal fields.
///
/// With `turn`, the whole part is reduced modulo `turn` after rounding.
fn sexagesimal(
    value: f64,
    turn: Option<u64>,
    opts: &FormatOptions,
) -> Result<String, SkyframeError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteAngle(value).into());
    }
    if opts.digits > MAX_DIGITS {
        return Err(ValidationError::InvalidDigits {
            got: opts.digits,
            max: MAX_DIGITS,
        }
        .into());
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let scale = 10u64.pow(opts.digits);

    // total in units of 10^-digits seconds, rounded once
    let scaled = (value.abs() * 3600.0 * scale as f64).round();
    if scaled >= u64::MAX as f64 {
        return Err(ValidationError::FormatOverflow(value).into());
    }
    let ticks = scaled as u64;
    let seconds = ticks % (60 * scale);
    let minutes = (ticks / (60 * scale)) % 60;
    let whole = match turn {
        Some(turn) => (ticks / (3600 * scale)) % turn,
        None => ticks / (3600 * scale),
    };

    let sep = &opts.sep;
    let sec_field = if opts.digits == 0 {
        format!("{seconds:02}")
    } else {
        format!(
            "{:02}.{:0width$}",
            seconds / scale,
            seconds % scale,
            width = opts.digits as usize
        )
    };
    Ok(format!("{sign}{whole:02}{sep}{minutes:02}{sep}{sec_field}"))
}

/// Degrees → `DD:MM:SS.ssss`.
///
/// ```rust
/// use skyframe::format::{deg_to_dms, FormatOptions};
///
/// assert_eq!(deg_to_dms(-64.5467, &FormatOptions::default()).unwrap(), "-64:32:48.1200");
/// ```
pub fn deg_to_dms(deg: f64, opts: &FormatOptions) -> Result<String, SkyframeError> {
    sexagesimal(deg, None, opts)
}

/// A normalized angle → `DD:MM:SS.ssss`, wrapping a rounding carry at 360° back to 0.
pub fn angle_to_dms(angle: &Angle, opts: &FormatOptions) -> Result<String, SkyframeError> {
    sexagesimal(to_f64(angle.degrees()), Some(360), opts)
}

/// Degrees → `HH:MM:SS.ssss`, with 15° per hour, wrapped to `[0, 24)` hours.
pub fn deg_to_hms(deg: f64, opts: &FormatOptions) -> Result<String, SkyframeError> {
    sexagesimal(deg * (24.0 / 360.0), Some(24), opts)
}

/// Radians → `HH:MM:SS.ssss`.
pub fn rad_to_hms(rad: f64, opts: &FormatOptions) -> Result<String, SkyframeError> {
    deg_to_hms(rad.to_degrees(), opts)
}
