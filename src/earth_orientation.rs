//! # Earth orientation parameters
//!
//! The sidereal-time computation needs two time-dependent corrections that are only
//! known from observation:
//!
//! - **ΔT = TT − UT**, in seconds, to move from UT to the TT-based Julian centuries used
//!   by the GMST polynomial;
//! - **polar motion** `(x, y)`, in arcseconds, the position of the Celestial Intermediate
//!   Pole relative to the terrestrial frame.
//!
//! Both come from an [`EarthOrientationProvider`]. The engine never fetches them itself;
//! the crate ships [`IersTables`](crate::iers::IersTables) as an in-memory implementation.
//!
//! ## Missing data
//!
//! The two lookups do not treat gaps alike:
//!
//! - ΔT has no fallback. `Ok(None)` means "no data for that date" and the caller fails.
//! - Polar motion always yields a value. Outside the tabulated range a provider returns
//!   the mean pole `(0.035″, 0.29″)` and flags the side with [`CoverageStatus`].
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::constants::{ArcSec, MEAN_POLE_X, MEAN_POLE_Y, MJD};
use crate::skyframe_errors::LookupFailure;

/// Where a polar-motion value came from, relative to the tabulated range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverageStatus {
    /// The date precedes the first tabulated row; the mean pole was used.
    BeforeRange,
    /// Interpolated between two tabulated rows.
    WithinRange,
    /// The date follows the last tabulated row; the mean pole was used.
    AfterRange,
}

impl CoverageStatus {
    /// `-1`, `0` or `1`, the integer flag used by the IERS service.
    pub fn as_flag(self) -> i8 {
        match self {
            CoverageStatus::BeforeRange => -1,
            CoverageStatus::WithinRange => 0,
            CoverageStatus::AfterRange => 1,
        }
    }
}

/// Pole coordinates in arcseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PolarMotion {
    pub x: ArcSec,
    pub y: ArcSec,
    pub status: CoverageStatus,
}

impl PolarMotion {
    pub fn new(x: ArcSec, y: ArcSec) -> Self {
        PolarMotion {
            x,
            y,
            status: CoverageStatus::WithinRange,
        }
    }

    /// The mean pole, used outside the tabulated range.
    pub fn mean_pole(status: CoverageStatus) -> Self {
        PolarMotion {
            x: MEAN_POLE_X,
            y: MEAN_POLE_Y,
            status,
        }
    }
}

/// Source of ΔT and polar motion for a given Modified Julian Date.
///
/// Implementations may hit a database, a file or a remote service; any I/O failure is
/// returned as a boxed [`LookupFailure`] and mapped by the caller to
/// [`SkyframeError::EarthOrientationLookup`](crate::skyframe_errors::SkyframeError::EarthOrientationLookup).
///
/// Implementations must be `Send + Sync` so a provider can be shared across tasks behind
/// an `Arc`.
#[async_trait]
pub trait EarthOrientationProvider: Send + Sync {
    /// ΔT in seconds at `mjd`, or `None` when the date is not covered.
    async fn lookup_delta_t(&self, mjd: MJD) -> Result<Option<Decimal>, LookupFailure>;

    /// Polar motion at `mjd`. Never "missing": outside the data range the mean pole is
    /// returned with a non-[`WithinRange`](CoverageStatus::WithinRange) status.
    async fn lookup_polar_motion(&self, mjd: MJD) -> Result<PolarMotion, LookupFailure>;
}
