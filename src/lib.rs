//! # Skyframe
//!
//! Astronomical time and reference-frame computations in decimal arithmetic: calendar
//! dates to Julian Dates and epochs, apparent local sidereal time with ΔT and polar-motion
//! corrections, hour angle, horizontal coordinates and airmass.
//!
//! ## Modules
//!
//! - [`time`] – Gregorian calendar ⇄ JD / MJD, Julian and Besselian epochs.
//! - [`sidereal`] – Earth Rotation Angle, GMST, TIO locator, local sidereal time.
//! - [`coordinates`] – hour angle, equatorial → horizontal, airmass.
//! - [`earth_orientation`] – the [`EarthOrientationProvider`] contract.
//! - [`iers`] – in-memory ΔT / Bulletin A tables and their file readers.
//! - [`format`] – sexagesimal renderings.
//! - [`skyframe`] – the [`Skyframe`] façade producing FITS-style observation metadata.
//! - [`precision`], [`ref_system`], [`constants`] – numeric building blocks.
pub mod constants;
pub mod coordinates;
pub mod earth_orientation;
pub mod env_state;
pub mod format;
pub mod iers;
pub mod observation;
pub mod observers;
pub mod precision;
pub mod ref_system;
pub mod sidereal;
pub mod skyframe;
pub mod skyframe_errors;
pub mod time;

pub use crate::earth_orientation::{CoverageStatus, EarthOrientationProvider, PolarMotion};
pub use crate::precision::{
    angle::{Angle, AngleUnit},
    MathConfig,
};
pub use crate::skyframe::Skyframe;
pub use crate::skyframe_errors::SkyframeError;

#[cfg(test)]
pub(crate) mod unit_test_global {
    use std::sync::LazyLock;

    use camino::Utf8Path;

    use crate::iers::IersTables;

    pub(crate) static IERS_TEST_TABLES: LazyLock<IersTables> = LazyLock::new(|| {
        IersTables::from_files(
            Utf8Path::new("tests/data/deltat.data"),
            Some(Utf8Path::new("tests/data/historic_deltat.data")),
            Utf8Path::new("tests/data/finals2000A.all"),
        )
        .unwrap()
    });
}
