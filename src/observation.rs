//! # Observation metadata
//!
//! Input and output records of [`Skyframe::observation_metadata`](crate::skyframe::Skyframe::observation_metadata).
//! Both serialize with FITS header keywords (`DATE-OBS`, `UT`, `EQUINOX`, `AIRMASS`, ...),
//! so a metadata record can be written into a header as-is.
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    constants::{Degree, JulianDate, MJD},
    coordinates::HorizontalCoordinates,
    precision::angle::Angle,
};

/// An observation to reduce: what was observed, and when (UT).
///
/// The target coordinates are ICRS (J2000) degrees, resolved by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationRequest {
    #[serde(rename = "OBJECT")]
    pub object: String,
    /// `YYYY-MM-DD`
    #[serde(rename = "DATE-OBS")]
    pub date_obs: String,
    /// `HH:MM:SS`
    #[serde(rename = "UT")]
    pub ut: String,
    #[serde(rename = "RA2000")]
    pub ra2000: Degree,
    #[serde(rename = "DEC2000")]
    pub dec2000: Degree,
}

/// Derived time and position keywords of one observation.
///
/// Fields
/// -----------------
/// * `time_obs`: local wall-clock time in the observatory's zone, `HH:MM:SS`; `None`
///   when the observer has no time zone.
/// * `jd`, `mjd`: Julian and Modified Julian Dates of the UT instant.
/// * `epoch`: Julian epoch label, `J2000.00`.
/// * `equinox`: the epoch year alone, `2000.00`.
/// * `ra`, `ra2000`: right ascension, `HH:MM:SS.ssss`.
/// * `dec`, `dec2000`: declination, `DD:MM:SS.ssss`.
/// * `st`: local sidereal time, `HH:MM:SS.ssss`.
/// * `ha`: hour angle, `DD:MM:SS.ssss`.
/// * `airmass`: `csc(altitude)`, infinite on the horizon.
///
/// `sidereal_time`, `hour_angle` and `horizontal` keep the typed values and are not
/// serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObservationMetadata {
    #[serde(rename = "OBJECT")]
    pub object: String,
    #[serde(rename = "DATE-OBS")]
    pub date_obs: String,
    #[serde(rename = "UT")]
    pub ut: String,
    #[serde(rename = "TIME-OBS", skip_serializing_if = "Option::is_none")]
    pub time_obs: Option<String>,
    #[serde(rename = "RA")]
    pub ra: String,
    #[serde(rename = "DEC")]
    pub dec: String,
    #[serde(rename = "EPOCH")]
    pub epoch: String,
    #[serde(rename = "EQUINOX")]
    pub equinox: String,
    #[serde(rename = "RA2000")]
    pub ra2000: String,
    #[serde(rename = "DEC2000")]
    pub dec2000: String,
    #[serde(rename = "JD", with = "rust_decimal::serde::float")]
    pub jd: JulianDate,
    #[serde(rename = "MJD", with = "rust_decimal::serde::float")]
    pub mjd: MJD,
    #[serde(rename = "ST")]
    pub st: String,
    #[serde(rename = "HA")]
    pub ha: String,
    #[serde(rename = "ALTITUDE", with = "rust_decimal::serde::float")]
    pub altitude: Decimal,
    #[serde(rename = "AZIMUTH", with = "rust_decimal::serde::float")]
    pub azimuth: Decimal,
    #[serde(rename = "AIRMASS")]
    pub airmass: f64,

    #[serde(skip)]
    pub sidereal_time: Angle,
    #[serde(skip)]
    pub hour_angle: Angle,
    #[serde(skip)]
    pub horizontal: HorizontalCoordinates,
}
