//! # In-memory IERS tables
//!
//! Tabulated ΔT and polar motion, with the bracketing and linear interpolation used to
//! answer [`EarthOrientationProvider`] lookups.
//!
//! ## Overview
//! -----------------
//! - [`DeltaTTable`] – `(mjd, ΔT)` rows from the USNO `deltat.data` and
//!   `historic_deltat.data` files ([`deltat_reader`]).
//! - [`PolarMotionTable`] – `(mjd, x, y, UT1−UTC)` rows from the IERS Bulletin A
//!   `finals2000A.all` file ([`finals_reader`]).
//! - [`IersTables`] – both tables together; implements [`EarthOrientationProvider`].
//!
//! ## Bracketing
//! -----------------
//! For a query date `mjd`, the **left** row is the last one with `row.mjd ≤ mjd` and the
//! **right** row the first one with `row.mjd > mjd`. A query that falls exactly on the last
//! row therefore has no right neighbour.
//!
//! - ΔT without both neighbours is `None`.
//! - Polar motion without a left neighbour is the mean pole with
//!   [`CoverageStatus::BeforeRange`], without a right neighbour the mean pole with
//!   [`CoverageStatus::AfterRange`].
//!
//! ## Example
//! -----------------
//! ```rust
//! use skyframe::iers::{DeltaTRow, DeltaTTable};
//! use rust_decimal_macros::dec;
//!
//! let table = DeltaTTable::new(vec![
//!     DeltaTRow { mjd: dec!(51544), delta_t: dec!(63.8) },
//!     DeltaTRow { mjd: dec!(51545), delta_t: dec!(63.9) },
//! ]);
//! assert_eq!(table.interpolate(dec!(51544.5)), Some(dec!(63.85)));
//! assert_eq!(table.interpolate(dec!(51545)), None);
//! ```
pub mod deltat_reader;
pub mod finals_reader;

use async_trait::async_trait;
use camino::Utf8Path;
use itertools::Itertools;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::constants::{ArcSec, Seconds, MJD};
use crate::earth_orientation::{CoverageStatus, EarthOrientationProvider, PolarMotion};
use crate::skyframe_errors::{LookupFailure, SkyframeError};

/// One ΔT sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeltaTRow {
    pub mjd: MJD,
    pub delta_t: Seconds,
}

/// One Bulletin A sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolarMotionRow {
    pub mjd: MJD,
    pub x: ArcSec,
    pub y: ArcSec,
    /// UT1 − UTC, in seconds
    pub dut1: Seconds,
}

/// Sort by date and keep the first row of each date.
fn sorted_unique<T>(rows: Vec<T>, key: impl Fn(&T) -> MJD) -> Vec<T> {
    rows.into_iter()
        .sorted_by(|a, b| key(a).cmp(&key(b)))
        .dedup_by(|a, b| key(a) == key(b))
        .collect()
}

/// Left (`≤ mjd`) and right (`> mjd`) neighbours in a table sorted by date.
fn bracket<T>(rows: &[T], mjd: MJD, key: impl Fn(&T) -> MJD) -> (Option<&T>, Option<&T>) {
    let idx = rows.partition_point(|row| key(row) <= mjd);
    let left = idx.checked_sub(1).and_then(|i| rows.get(i));
    (left, rows.get(idx))
}

fn lerp(x0: MJD, y0: Decimal, x1: MJD, y1: Decimal, x: MJD) -> Decimal {
    y0 + (y1 - y0) * (x - x0) / (x1 - x0)
}

/// ΔT samples sorted by date, one per date.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeltaTTable {
    rows: Vec<DeltaTRow>,
}

impl DeltaTTable {
    pub fn new(rows: Vec<DeltaTRow>) -> Self {
        DeltaTTable {
            rows: sorted_unique(rows, |r| r.mjd),
        }
    }

    pub fn rows(&self) -> &[DeltaTRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Prepend historic samples strictly older than the oldest row already present.
    ///
    /// The modern series takes precedence where the two overlap. Returns the number of
    /// rows kept.
    pub fn merge_historic(&mut self, historic: Vec<DeltaTRow>) -> usize {
        let oldest = self.rows.first().map(|r| r.mjd);
        let older: Vec<DeltaTRow> = historic
            .into_iter()
            .filter(|r| oldest.is_none_or(|o| r.mjd < o))
            .collect();
        let kept = older.len();

        let merged = older.into_iter().chain(self.rows.drain(..)).collect();
        self.rows = sorted_unique(merged, |r| r.mjd);
        kept
    }

    /// Linearly interpolated ΔT, or `None` outside the bracketed range.
    pub fn interpolate(&self, mjd: MJD) -> Option<Seconds> {
        match bracket(&self.rows, mjd, |r| r.mjd) {
            (Some(l), Some(r)) => Some(lerp(l.mjd, l.delta_t, r.mjd, r.delta_t, mjd)),
            _ => None,
        }
    }
}

/// Bulletin A samples sorted by date, one per date.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolarMotionTable {
    rows: Vec<PolarMotionRow>,
}

impl PolarMotionTable {
    pub fn new(rows: Vec<PolarMotionRow>) -> Self {
        PolarMotionTable {
            rows: sorted_unique(rows, |r| r.mjd),
        }
    }

    pub fn rows(&self) -> &[PolarMotionRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Interpolated pole coordinates, falling back to the mean pole outside the range.
    pub fn interpolate(&self, mjd: MJD) -> PolarMotion {
        match bracket(&self.rows, mjd, |r| r.mjd) {
            (Some(l), Some(r)) => PolarMotion::new(
                lerp(l.mjd, l.x, r.mjd, r.x, mjd),
                lerp(l.mjd, l.y, r.mjd, r.y, mjd),
            ),
            (left, _) => {
                let status = if left.is_none() {
                    CoverageStatus::BeforeRange
                } else {
                    CoverageStatus::AfterRange
                };
                warn!(%mjd, ?status, "polar motion not tabulated, using the mean pole");
                PolarMotion::mean_pole(status)
            }
        }
    }

    /// Interpolated UT1 − UTC, or `None` outside the bracketed range.
    pub fn dut1(&self, mjd: MJD) -> Option<Seconds> {
        match bracket(&self.rows, mjd, |r| r.mjd) {
            (Some(l), Some(r)) => Some(lerp(l.mjd, l.dut1, r.mjd, r.dut1, mjd)),
            _ => None,
        }
    }
}

/// ΔT and polar-motion tables held in memory.
///
/// Lookups never fail: a gap in ΔT is reported as `Ok(None)` and a gap in polar motion
/// as the mean pole.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IersTables {
    pub delta_t: DeltaTTable,
    pub polar_motion: PolarMotionTable,
}

impl IersTables {
    pub fn new(delta_t: DeltaTTable, polar_motion: PolarMotionTable) -> Self {
        IersTables {
            delta_t,
            polar_motion,
        }
    }

    /// Load the tables from the USNO text files.
    ///
    /// Arguments
    /// -----------------
    /// * `deltat`: path to `deltat.data`.
    /// * `historic_deltat`: optional path to `historic_deltat.data`, merged before the
    ///   oldest modern row.
    /// * `finals`: path to `finals2000A.all`.
    ///
    /// Return
    /// ----------
    /// * The loaded tables, or a [`SkyframeError::IoError`] / [`SkyframeError::IersParse`].
    pub fn from_files(
        deltat: &Utf8Path,
        historic_deltat: Option<&Utf8Path>,
        finals: &Utf8Path,
    ) -> Result<Self, SkyframeError> {
        let mut delta_t = deltat_reader::read_deltat_file(deltat)?;
        if let Some(path) = historic_deltat {
            let kept = delta_t.merge_historic(deltat_reader::read_historic_deltat_file(path)?);
            debug!(rows = kept, path = %path, "merged historic ΔT rows");
        }
        let polar_motion = finals_reader::read_finals_file(finals)?;

        debug!(
            delta_t_rows = delta_t.rows().len(),
            polar_motion_rows = polar_motion.rows().len(),
            "IERS tables loaded"
        );
        Ok(IersTables::new(delta_t, polar_motion))
    }
}

#[async_trait]
impl EarthOrientationProvider for IersTables {
    async fn lookup_delta_t(&self, mjd: MJD) -> Result<Option<Decimal>, LookupFailure> {
        Ok(self.delta_t.interpolate(mjd))
    }

    async fn lookup_polar_motion(&self, mjd: MJD) -> Result<PolarMotion, LookupFailure> {
        Ok(self.polar_motion.interpolate(mjd))
    }
}

#[cfg(test)]
mod iers_test {
    use super::*;
    use rust_decimal_macros::dec;

    use crate::unit_test_global::IERS_TEST_TABLES;

    fn delta_t_table() -> DeltaTTable {
        DeltaTTable::new(vec![
            DeltaTRow {
                mjd: dec!(51575),
                delta_t: dec!(64),
            },
            DeltaTRow {
                mjd: dec!(51544),
                delta_t: dec!(63.8),
            },
            DeltaTRow {
                mjd: dec!(51544),
                delta_t: dec!(99),
            },
        ])
    }

    fn pm_table() -> PolarMotionTable {
        PolarMotionTable::new(vec![
            PolarMotionRow {
                mjd: dec!(51544),
                x: dec!(0.04),
                y: dec!(0.37),
                dut1: dec!(0.355),
            },
            PolarMotionRow {
                mjd: dec!(51545),
                x: dec!(0.06),
                y: dec!(0.39),
                dut1: dec!(0.354),
            },
        ])
    }

    #[test]
    fn test_table_is_sorted_and_unique() {
        let table = delta_t_table();
        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.rows()[0].mjd, dec!(51544));
        assert_eq!(table.rows()[0].delta_t, dec!(63.8));
    }

    #[test]
    fn test_delta_t_bracketing() {
        let table = delta_t_table();
        assert_eq!(table.interpolate(dec!(51544)), Some(dec!(63.8)));
        assert_eq!(table.interpolate(dec!(51559.5)), Some(dec!(63.9)));
        assert_eq!(table.interpolate(dec!(51543.9)), None);
        // no row strictly after the last one
        assert_eq!(table.interpolate(dec!(51575)), None);
        assert_eq!(DeltaTTable::default().interpolate(dec!(51544)), None);
    }

    #[test]
    fn test_polar_motion_interpolation() {
        let pm = pm_table().interpolate(dec!(51544.5));
        assert_eq!(pm, PolarMotion::new(dec!(0.05), dec!(0.38)));
        assert_eq!(pm_table().dut1(dec!(51544.5)), Some(dec!(0.3545)));
    }

    #[test]
    fn test_polar_motion_fallback() {
        let table = pm_table();
        assert_eq!(
            table.interpolate(dec!(50000)),
            PolarMotion::mean_pole(CoverageStatus::BeforeRange)
        );
        assert_eq!(
            table.interpolate(dec!(51545)),
            PolarMotion::mean_pole(CoverageStatus::AfterRange)
        );
        assert_eq!(
            PolarMotionTable::default().interpolate(dec!(0)).status,
            CoverageStatus::BeforeRange
        );
    }

    #[test]
    fn test_merge_historic() {
        let mut table = delta_t_table();
        let kept = table.merge_historic(vec![
            DeltaTRow {
                mjd: dec!(51000),
                delta_t: dec!(62),
            },
            DeltaTRow {
                mjd: dec!(51544),
                delta_t: dec!(0),
            },
            DeltaTRow {
                mjd: dec!(51560),
                delta_t: dec!(0),
            },
        ]);
        assert_eq!(kept, 1);
        let mjds: Vec<_> = table.rows().iter().map(|r| r.mjd).collect();
        assert_eq!(mjds, vec![dec!(51000), dec!(51544), dec!(51575)]);
        assert_eq!(table.rows()[1].delta_t, dec!(63.8));
    }

    #[test]
    fn test_from_files() {
        let tables = &*IERS_TEST_TABLES;
        // 6 modern rows and the 4 historic rows that predate them
        assert_eq!(tables.delta_t.rows().len(), 10);
        // predictions are skipped
        assert_eq!(tables.polar_motion.rows().len(), 8);

        assert_eq!(
            tables.delta_t.interpolate(dec!(51544.5)),
            Some(dec!(63.8285))
        );
        assert_eq!(
            tables.polar_motion.interpolate(dec!(51544.5)),
            PolarMotion::new(dec!(0.050), dec!(0.379))
        );
        assert_eq!(
            tables.polar_motion.interpolate(dec!(51547)).status,
            CoverageStatus::AfterRange
        );
    }

    #[test]
    fn test_from_files_missing() {
        let err = IersTables::from_files(
            Utf8Path::new("tests/data/missing.data"),
            None,
            Utf8Path::new("tests/data/finals2000A.all"),
        )
        .unwrap_err();
        assert!(matches!(err, SkyframeError::IoError(_)));
    }

    #[tokio::test]
    async fn test_provider_impl() {
        let tables = IersTables::new(delta_t_table(), pm_table());
        assert_eq!(
            tables.lookup_delta_t(dec!(51544)).await.unwrap(),
            Some(dec!(63.8))
        );
        assert_eq!(tables.lookup_delta_t(dec!(40000)).await.unwrap(), None);
        let pm = tables.lookup_polar_motion(dec!(60000)).await.unwrap();
        assert_eq!(pm.status, CoverageStatus::AfterRange);
    }
}
