//! # Constants and type definitions for Skyframe
//!
//! This module centralizes the **astronomical constants**, **conversion factors**, and
//! **common type aliases** used throughout the `skyframe` library.
//!
//! ## Overview
//!
//! - Reference epochs (J2000.0, B1900.0) and calendar lengths
//! - Unit conversions (degrees ↔ radians, arcseconds → radians, days ↔ seconds)
//! - IAU model coefficients shared by several modules
//! - Core type aliases
//!
//! Every quantity is a [`Decimal`] so the numeric core never round-trips through `f64`.
//! The conversion factors carry the 28 significant digits `rust_decimal` can hold.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = Decimal;
/// Angle in arcseconds
pub type ArcSec = Decimal;
/// Angle in radians
pub type Radian = Decimal;
/// Duration in seconds
pub type Seconds = Decimal;
/// Julian Date (days, noon-referenced)
pub type JulianDate = Decimal;
/// Modified Julian Date (days)
pub type MJD = Decimal;

// -------------------------------------------------------------------------------------------------
// Reference epochs and calendar lengths
// -------------------------------------------------------------------------------------------------

/// Julian Date of J2000.0 (2000-01-01 12:00:00)
pub const JD_J2000: Decimal = dec!(2451545.0);

/// Julian Date of B1900.0
pub const JD_B1900: Decimal = dec!(2415020.31352);

/// Offset between Julian Date and Modified Julian Date
pub const JDTOMJD: Decimal = dec!(2400000.5);

/// Days in a Julian century
pub const JD_CENTURY: Decimal = dec!(36525);

/// Days in a Julian year
pub const JULIAN_YEAR: Decimal = dec!(365.25);

/// Days in a tropical (Besselian) year
pub const BESSELIAN_YEAR: Decimal = dec!(365.242198781);

/// Number of seconds in a day
pub const SECONDS_PER_DAY: Decimal = dec!(86400);

// -------------------------------------------------------------------------------------------------
// Unit conversions
// -------------------------------------------------------------------------------------------------

/// Arcseconds → radians (π / 648000)
pub const RADSEC: Decimal = dec!(0.0000048481368110953599358991);

/// Degrees → radians (π / 180)
pub const RADEG: Decimal = dec!(0.0174532925199432957692369077);

/// Radians → degrees (180 / π)
pub const DEGRAD: Decimal = dec!(57.29577951308232087679815481);

/// A full turn in degrees
pub const FULL_TURN_DEG: Decimal = dec!(360);

/// Degrees per hour of right ascension
pub const DEG_PER_HOUR: Decimal = dec!(15);

// -------------------------------------------------------------------------------------------------
// Earth orientation
// -------------------------------------------------------------------------------------------------

/// Mean pole x coordinate (arcsec), mean of the 1962–2014 IERS B series
pub const MEAN_POLE_X: ArcSec = dec!(0.035);

/// Mean pole y coordinate (arcsec), mean of the 1962–2014 IERS B series
pub const MEAN_POLE_Y: ArcSec = dec!(0.29);
