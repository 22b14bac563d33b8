//! # Horizontal coordinates
//!
//! Hour angle, equatorial → horizontal conversion and airmass.
//!
//! Conventions
//! -----------------
//! * Azimuth is measured from north through east, in `[0, 360)`.
//! * Altitude, declination and latitude are signed degrees in `[-90, 90]` and are plain
//!   [`Degree`] values, not wrapped [`Angle`]s.
//! * The target coordinates are ICRS (J2000) and no precession, nutation, aberration or
//!   refraction is applied.
use rust_decimal::prelude::*;
use serde::Serialize;

use crate::{
    constants::{Degree, DEGRAD, RADEG},
    precision::{
        angle::{normalize, Angle, AngleUnit},
        atan2, sin_cos, sqrt, to_f64, MathConfig,
    },
};

/// Position of a target on the local sky.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HorizontalCoordinates {
    /// From north through east, degrees
    pub azimuth: Angle,
    /// Above the horizon, degrees
    pub altitude: Degree,
}

/// Local hour angle `normalize(ST − RA)`, in degrees.
///
/// Arguments
/// -----------------
/// * `ra2000`: right ascension in degrees (ICRS).
/// * `st`: local sidereal time.
pub fn hour_angle(ra2000: Degree, st: &Angle) -> Angle {
    Angle::from_degrees(st.degrees() - ra2000)
}

/// Convert hour angle and declination to azimuth and altitude.
///
/// The unit vector of the target in the horizon frame is
///
/// ```text
/// x = sin δ cos φ − cos h cos δ sin φ
/// y = −sin h cos δ
/// z = sin δ sin φ + cos h cos δ cos φ
/// ```
///
/// then `azimuth = atan2(y, x)` (0 at the poles of the horizon frame, where `x = y = 0`)
/// and `altitude = atan2(z, √(x² + y²))`.
///
/// Arguments
/// -----------------
/// * `ha`: local hour angle in degrees.
/// * `dec2000`: declination in degrees (ICRS).
/// * `lat`: observer latitude in degrees.
/// * `config`: decimal series tolerances.
pub fn equatorial_to_horizontal(
    ha: Degree,
    dec2000: Degree,
    lat: Degree,
    config: &MathConfig,
) -> HorizontalCoordinates {
    let (h, d, p) = (ha * RADEG, dec2000 * RADEG, lat * RADEG);
    let (sh, ch) = sin_cos(h);
    let (sd, cd) = sin_cos(d);
    let (sp, cp) = sin_cos(p);

    let x = sd * cp - ch * cd * sp;
    let y = -sh * cd;
    let z = sd * sp + ch * cd * cp;

    let r = sqrt(x * x + y * y);
    let azimuth = if r.is_zero() {
        Decimal::ZERO
    } else {
        normalize(atan2(y, x, config), AngleUnit::Radians)
    };
    let altitude = atan2(z, r, config);

    HorizontalCoordinates {
        azimuth: Angle::from_degrees(azimuth * DEGRAD),
        altitude: altitude * DEGRAD,
    }
}

/// Plane-parallel airmass `csc(altitude)`.
///
/// No horizon guard: an altitude of exactly 0 gives `+∞` and a negative altitude a
/// negative airmass.
pub fn airmass(altitude: Degree) -> f64 {
    let (s, _) = sin_cos(altitude * RADEG);
    match Decimal::ONE.checked_div(s) {
        Some(csc) => to_f64(csc),
        None => f64::INFINITY,
    }
}
