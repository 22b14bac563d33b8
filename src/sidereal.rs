//! # Apparent local sidereal time
//!
//! Local sidereal time from a UT Julian Date and an east-positive longitude, following the
//! IAU 2000/2006 CIO-based chain:
//!
//! 1. **Earth Rotation Angle** θ (Capitaine et al. 2003, eq. 1),
//! 2. **GMST** = θ + a polynomial in TT Julian centuries (Capitaine et al. 2005, table 4),
//!    which needs ΔT,
//! 3. **TIO locator** s′ = −47 µas · t,
//! 4. **polar motion** and the observer longitude, applied as a chain of frame rotations
//!    `Rz(λ) · Rx(−y) · Ry(−x) · Rz(GMST + s′)`,
//!
//! the sidereal time being the angle `atan2(R[0,1], R[0,0])` of the resulting matrix.
//!
//! Every step runs in [`Decimal`]. ΔT and polar motion come from an
//! [`EarthOrientationProvider`]; both lookups are awaited together.
//!
//! ## Example
//!
//! ```rust,no_run
//! use skyframe::iers::IersTables;
//! use skyframe::precision::MathConfig;
//! use skyframe::sidereal::sidereal_time;
//! use rust_decimal_macros::dec;
//!
//! # async fn run(tables: IersTables) -> Result<(), skyframe::skyframe_errors::SkyframeError> {
//! let st = sidereal_time(dec!(2451545.0), dec!(-64.5467), &tables, &MathConfig::default()).await?;
//! println!("ST = {st}");
//! # Ok(())
//! # }
//! ```
use nalgebra::Matrix3;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::{debug, instrument};

use crate::{
    constants::{
        ArcSec, Degree, JulianDate, Radian, Seconds, JD_CENTURY, JD_J2000, RADEG, RADSEC,
        SECONDS_PER_DAY,
    },
    earth_orientation::{EarthOrientationProvider, PolarMotion},
    precision::{
        angle::{normalize, Angle, AngleUnit},
        atan2, MathConfig,
    },
    ref_system::{rotmt, Axis},
    skyframe_errors::{LookupKind, SkyframeError},
    time::modified_julian_date,
};

/// ERA at J2000.0, in turns
const ERA_AT_J2000: Decimal = dec!(0.779057273264);
/// Earth rotation rate, in turns per UT1 day
const ERA_RATE: Decimal = dec!(1.00273781191135448);

// GMST − ERA polynomial, arcseconds
const GMST_C0: ArcSec = dec!(0.014506);
const GMST_C1: ArcSec = dec!(4612.156534);
const GMST_C2: ArcSec = dec!(1.3915817);
const GMST_C3: ArcSec = dec!(-0.00000044);
const GMST_C4: ArcSec = dec!(-0.000029956);
const GMST_C5: ArcSec = dec!(-0.0000000368);

/// TIO locator rate, arcseconds per Julian century
const TIO_RATE: ArcSec = dec!(-0.000047);

/// Earth Rotation Angle at a UT Julian Date, in radians, in `[0, 2π)`.
pub fn earth_rotation_angle(jd: JulianDate) -> Radian {
    normalize(
        Decimal::TWO_PI * (ERA_AT_J2000 + ERA_RATE * (jd - JD_J2000)),
        AngleUnit::Radians,
    )
}

/// Julian centuries of TT since J2000.0: `(jd + ΔT/86400 − 2451545) / 36525`.
pub fn julian_centuries_tt(jd: JulianDate, delta_t: Seconds) -> Decimal {
    (jd + delta_t / SECONDS_PER_DAY - JD_J2000) / JD_CENTURY
}

/// Greenwich Mean Sidereal Time, in radians, in `[0, 2π)`.
///
/// Arguments
/// ---------
/// * `jd`: UT Julian Date.
/// * `delta_t`: TT − UT, in seconds.
///
/// Return
/// ------
/// * `normalize(ERA + P(t))` where `P` is the fifth-order polynomial in TT Julian
///   centuries, evaluated in Horner form and converted from arcseconds.
pub fn greenwich_mean_sidereal_time(jd: JulianDate, delta_t: Seconds) -> Radian {
    let t = julian_centuries_tt(jd, delta_t);
    let poly = ((((GMST_C5 * t + GMST_C4) * t + GMST_C3) * t + GMST_C2) * t + GMST_C1) * t
        + GMST_C0;
    normalize(earth_rotation_angle(jd) + poly * RADSEC, AngleUnit::Radians)
}

/// TIO locator s′ for `t` TT Julian centuries, in radians.
pub fn tio_locator(t: Decimal) -> Radian {
    TIO_RATE * t * RADSEC
}

/// Full rotation from the celestial intermediate frame to the observer meridian.
///
/// `Rz(λ) · Rx(−y) · Ry(−x) · Rz(GMST + s′)`, with the pole coordinates converted from
/// arcseconds.
pub fn polar_motion_matrix(
    longitude: Radian,
    pm: &PolarMotion,
    gmst: Radian,
    tio: Radian,
) -> Matrix3<Decimal> {
    rotmt(longitude, Axis::Z)
        * rotmt(-pm.y * RADSEC, Axis::X)
        * rotmt(-pm.x * RADSEC, Axis::Y)
        * rotmt(gmst + tio, Axis::Z)
}

/// Apparent local sidereal time.
///
/// Arguments
/// ---------
/// * `jd`: UT (≈UTC) Julian Date.
/// * `longitude`: observer longitude in degrees, positive east.
/// * `provider`: source of ΔT and polar motion, queried at `mjd = jd − 2400000.5`.
/// * `config`: decimal series tolerances.
///
/// Return
/// ------
/// * The sidereal time as an [`Angle`] in degrees, in `[0, 360)`.
///
/// Errors
/// ------
/// * [`SkyframeError::EarthOrientationLookup`] with [`LookupKind::DeltaT`] when the
///   provider fails or has no ΔT for the date. This takes precedence over a polar-motion
///   failure.
/// * [`SkyframeError::EarthOrientationLookup`] with [`LookupKind::PolarMotion`] when the
///   polar-motion lookup fails.
///
/// # See also
/// * [`greenwich_mean_sidereal_time`]
/// * [`polar_motion_matrix`]
#[instrument(level = "debug", skip_all, fields(%jd, %longitude))]
pub async fn sidereal_time(
    jd: JulianDate,
    longitude: Degree,
    provider: &dyn EarthOrientationProvider,
    config: &MathConfig,
) -> Result<Angle, SkyframeError> {
    let mjd = modified_julian_date(jd);

    let (delta_t, pm) = tokio::join!(
        provider.lookup_delta_t(mjd),
        provider.lookup_polar_motion(mjd)
    );

    let delta_t = match delta_t {
        Ok(Some(value)) => value,
        Ok(None) => return Err(SkyframeError::lookup(LookupKind::DeltaT, None)),
        Err(e) => return Err(SkyframeError::lookup(LookupKind::DeltaT, Some(e))),
    };
    let pm = pm.map_err(|e| SkyframeError::lookup(LookupKind::PolarMotion, Some(e)))?;

    let t = julian_centuries_tt(jd, delta_t);
    let gmst = greenwich_mean_sidereal_time(jd, delta_t);
    let sp = tio_locator(t);
    debug!(%delta_t, %t, %gmst, pm_x = %pm.x, pm_y = %pm.y, "sidereal time inputs");

    let r = polar_motion_matrix(longitude * RADEG, &pm, gmst, sp);
    let st = normalize(atan2(r[(0, 1)], r[(0, 0)], config), AngleUnit::Radians);

    Ok(Angle::from_radians(st).to_degrees())
}
