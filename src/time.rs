//! # Calendar conversions
//!
//! Gregorian calendar date and UT time of day to Julian Date, Modified Julian Date and
//! Julian/Besselian epochs, plus the inverse Julian Date → calendar conversion.
//!
//! Both directions follow Urban & Seidelmann (2013), *Explanatory Supplement to the
//! Astronomical Almanac*, §15.11, with the Gregorian parameters of Table 15.14.
//! All intermediate quantities of the integer algorithms are non-negative for years after
//! −4716, and floor division is used throughout.
//!
//! ## Example
//!
//! ```rust
//! use skyframe::time::{date_to_jd, julian_epoch, modified_julian_date};
//! use rust_decimal_macros::dec;
//!
//! let jd = date_to_jd("2000-01-01", "12:00:00")?;
//! assert_eq!(jd, dec!(2451545));
//! assert_eq!(modified_julian_date(jd), dec!(51544.5));
//! assert_eq!(julian_epoch(jd).to_string(), "J2000.00");
//! # Ok::<(), skyframe::skyframe_errors::SkyframeError>(())
//! ```
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use chrono_tz::Tz;
use hifitime::Epoch;
use regex::Regex;
use rust_decimal::prelude::*;

use crate::constants::{
    JulianDate, Seconds, BESSELIAN_YEAR, JDTOMJD, JD_B1900, JD_J2000, JULIAN_YEAR, MJD,
    SECONDS_PER_DAY,
};
use crate::skyframe_errors::{SkyframeError, ValidationError};

// Gregorian calendar parameters (Urban & Seidelmann, Table 15.14)
const Y: i64 = 4716;
const J: i64 = 1401;
const M: i64 = 2;
const N: i64 = 12;
const R: i64 = 4;
const P: i64 = 1461;
const V: i64 = 3;
const U: i64 = 5;
const S: i64 = 153;
const T: i64 = 2;
const W: i64 = 2;
const A: i64 = 184;
const B: i64 = 274277;
const C: i64 = -38;

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").expect("valid date regex"));

static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{2}):(\d{2}):(\d{2})$").expect("valid time regex"));

/// A valid proleptic-Gregorian calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl CalendarDate {
    /// Build a date, checking month range, month length and leap years.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, ValidationError> {
        Epoch::maybe_from_gregorian_utc(year, month, day, 0, 0, 0, 0).map_err(|_| {
            ValidationError::InvalidCalendarDate(format!("{year:04}-{month:02}-{day:02}"))
        })?;
        Ok(CalendarDate { year, month, day })
    }
}

impl FromStr for CalendarDate {
    type Err = ValidationError;

    /// Parse an ISO `YYYY-MM-DD` date.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = DATE_RE
            .captures(s)
            .ok_or_else(|| ValidationError::InvalidDateFormat(s.to_string()))?;

        let field = |i: usize| {
            caps[i]
                .parse::<u16>()
                .map_err(|_| ValidationError::InvalidDateFormat(s.to_string()))
        };
        let year = field(1)? as i32;
        let month = u8::try_from(field(2)?)
            .map_err(|_| ValidationError::InvalidCalendarDate(s.to_string()))?;
        let day = u8::try_from(field(3)?)
            .map_err(|_| ValidationError::InvalidCalendarDate(s.to_string()))?;

        CalendarDate::new(year, month, day)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// A UT time of day with whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeOfDay {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl TimeOfDay {
    pub fn new(hour: u8, minute: u8, second: u8) -> Result<Self, ValidationError> {
        if hour >= 24 || minute >= 60 || second >= 60 {
            return Err(ValidationError::InvalidTimeFormat(format!(
                "{hour:02}:{minute:02}:{second:02}"
            )));
        }
        Ok(TimeOfDay {
            hour,
            minute,
            second,
        })
    }

    /// Offset from noon, in seconds. Negative in the morning.
    fn seconds_from_noon(&self) -> i64 {
        (self.hour as i64 - 12) * 3600 + self.minute as i64 * 60 + self.second as i64
    }
}

impl FromStr for TimeOfDay {
    type Err = ValidationError;

    /// Parse an ISO `HH:MM:SS` time, without fractional seconds.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidTimeFormat(s.to_string());
        let caps = TIME_RE.captures(s).ok_or_else(invalid)?;
        let field = |i: usize| caps[i].parse::<u8>().map_err(|_| invalid());
        TimeOfDay::new(field(1)?, field(2)?, field(3)?).map_err(|_| invalid())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// Julian Date of a Gregorian date and UT time of day.
///
/// Implements "Algorithm 3" of Urban & Seidelmann to obtain the integer day number `J`
/// (which is the JD at 12:00), then adds the signed fraction of day from noon.
///
/// Arguments
/// ---------
/// * `date`: the calendar date.
/// * `time`: the UT (≈UTC) time of day.
///
/// Return
/// ------
/// * The fractional Julian Date.
pub fn julian_date(date: &CalendarDate, time: &TimeOfDay) -> JulianDate {
    let (year, month, day) = (date.year as i64, date.month as i64, date.day as i64);

    let h = month - M;
    let g = year + Y - (N - h).div_euclid(N);
    let f = (h - 1 + N).rem_euclid(N);
    let e = (P * g).div_euclid(R) + day - 1 - J;
    let jd_noon = e + (S * f + T).div_euclid(U) - (3 * (g + A).div_euclid(100)).div_euclid(4) - C;

    Decimal::from(jd_noon) + Decimal::from(time.seconds_from_noon()) / SECONDS_PER_DAY
}

/// Parse `YYYY-MM-DD` and `HH:MM:SS` strings and return their Julian Date.
///
/// Both strings are validated before any arithmetic. See [`julian_date`].
pub fn date_to_jd(date: &str, time: &str) -> Result<JulianDate, SkyframeError> {
    let date = CalendarDate::from_str(date)?;
    let time = TimeOfDay::from_str(time)?;
    Ok(julian_date(&date, &time))
}

/// Modified Julian Date: `jd − 2400000.5`.
pub fn modified_julian_date(jd: JulianDate) -> MJD {
    jd - JDTOMJD
}

/// Inverse of [`modified_julian_date`].
pub fn mjd_to_jd(mjd: MJD) -> JulianDate {
    mjd + JDTOMJD
}

/// Calendar date and UT seconds-of-day of a Julian Date.
///
/// "Algorithm 4" of Urban & Seidelmann. The day boundary is at midnight, so the seconds
/// lie in `[0, 86400)`.
///
/// Errors
/// ------
/// * [`ValidationError::JulianDateOutOfRange`] for a negative JD or one whose year does
///   not fit an `i32`.
pub fn jd_to_calendar(jd: JulianDate) -> Result<(CalendarDate, Seconds), ValidationError> {
    let out_of_range = || ValidationError::JulianDateOutOfRange(jd);
    if jd.is_sign_negative() && !jd.is_zero() {
        return Err(out_of_range());
    }

    let shifted = jd + Decimal::new(5, 1);
    let day_number = shifted.floor();
    let seconds = (shifted - day_number) * SECONDS_PER_DAY;

    // i128 keeps every intermediate of a non-negative i64 day number exact
    let jdn = i128::from(day_number.to_i64().ok_or_else(out_of_range)?);
    let (y, j, m, n, r, p) = (Y as i128, J as i128, M as i128, N as i128, R as i128, P as i128);
    let (v, u, s, w, b, c) = (V as i128, U as i128, S as i128, W as i128, B as i128, C as i128);

    let f = jdn + j + (((4 * jdn + b).div_euclid(146097)) * 3).div_euclid(4) + c;
    let e = r * f + v;
    let g = e.rem_euclid(p).div_euclid(r);
    let h = u * g + w;
    let day = h.rem_euclid(s).div_euclid(u) + 1;
    let month = (h.div_euclid(s) + m).rem_euclid(n) + 1;
    let year = e.div_euclid(p) - y + (n + m - month).div_euclid(n);

    Ok((
        CalendarDate {
            year: i32::try_from(year).map_err(|_| out_of_range())?,
            month: month as u8,
            day: day as u8,
        },
        seconds,
    ))
}

/// Wall-clock time in the IANA zone `tz` at a UT date and time.
///
/// This is the FITS `TIME-OBS` value of an observation.
///
/// ```rust
/// use skyframe::time::{local_time, CalendarDate, TimeOfDay};
///
/// let date: CalendarDate = "2000-01-01".parse()?;
/// let ut: TimeOfDay = "03:12:00".parse()?;
/// let local = local_time(&date, &ut, "America/Argentina/Buenos_Aires")?;
/// assert_eq!(local.to_string(), "00:12:00");
/// # Ok::<(), skyframe::skyframe_errors::ValidationError>(())
/// ```
///
/// Errors
/// ------
/// * [`ValidationError::UnknownTimeZone`] if `tz` is not in the tz database.
pub fn local_time(
    date: &CalendarDate,
    time: &TimeOfDay,
    tz: &str,
) -> Result<TimeOfDay, ValidationError> {
    let zone: Tz = tz
        .parse()
        .map_err(|_| ValidationError::UnknownTimeZone(tz.to_string()))?;

    let naive_date =
        NaiveDate::from_ymd_opt(date.year, date.month.into(), date.day.into())
            .ok_or_else(|| ValidationError::InvalidCalendarDate(date.to_string()))?;
    let naive_time =
        NaiveTime::from_hms_opt(time.hour.into(), time.minute.into(), time.second.into())
            .ok_or_else(|| ValidationError::InvalidTimeFormat(time.to_string()))?;

    let local = NaiveDateTime::new(naive_date, naive_time)
        .and_utc()
        .with_timezone(&zone);

    // chrono keeps the components in range, so the narrowing cannot truncate
    TimeOfDay::new(local.hour() as u8, local.minute() as u8, local.second() as u8)
}

/// A Julian or Besselian epoch, in fractional years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpochLabel {
    Julian(Decimal),
    Besselian(Decimal),
}

impl EpochLabel {
    pub fn year(&self) -> Decimal {
        match self {
            EpochLabel::Julian(y) | EpochLabel::Besselian(y) => *y,
        }
    }

    /// The year with exactly two decimals, half-up rounding (`2000.00`).
    ///
    /// This is the value of the FITS `EQUINOX` keyword.
    pub fn equinox(&self) -> String {
        let mut y = self
            .year()
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        y.rescale(2);
        y.to_string()
    }
}

impl fmt::Display for EpochLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self {
            EpochLabel::Julian(_) => 'J',
            EpochLabel::Besselian(_) => 'B',
        };
        write!(f, "{prefix}{}", self.equinox())
    }
}

/// Julian epoch: `2000 + (jd − 2451545) / 365.25`.
pub fn julian_epoch(jd: JulianDate) -> EpochLabel {
    EpochLabel::Julian(Decimal::from(2000) + (jd - JD_J2000) / JULIAN_YEAR)
}

/// Besselian epoch: `1900 + (jd − 2415020.31352) / 365.242198781`.
pub fn besselian_epoch(jd: JulianDate) -> EpochLabel {
    EpochLabel::Besselian(Decimal::from(1900) + (jd - JD_B1900) / BESSELIAN_YEAR)
}
