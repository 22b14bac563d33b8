#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use camino::Utf8Path;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use skyframe::{
    constants::MJD, iers::IersTables, skyframe_errors::LookupFailure, EarthOrientationProvider,
    PolarMotion,
};

/// Same ΔT and polar motion for every date.
pub struct ConstantProvider {
    pub delta_t: Option<Decimal>,
    pub pm: PolarMotion,
}

#[async_trait]
impl EarthOrientationProvider for ConstantProvider {
    async fn lookup_delta_t(&self, _mjd: MJD) -> Result<Option<Decimal>, LookupFailure> {
        Ok(self.delta_t)
    }

    async fn lookup_polar_motion(&self, _mjd: MJD) -> Result<PolarMotion, LookupFailure> {
        Ok(self.pm)
    }
}

/// ΔT = 63.83 s and pole (0.05″, 0.38″), the J2000.0 reference case.
pub fn j2000_provider() -> ConstantProvider {
    ConstantProvider {
        delta_t: Some(dec!(63.83)),
        pm: PolarMotion::new(dec!(0.05), dec!(0.38)),
    }
}

/// Provider whose lookups fail as configured, counting every call.
#[derive(Default)]
pub struct FailingProvider {
    pub fail_delta_t: bool,
    pub fail_polar_motion: bool,
    pub calls: AtomicUsize,
}

impl FailingProvider {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EarthOrientationProvider for FailingProvider {
    async fn lookup_delta_t(&self, _mjd: MJD) -> Result<Option<Decimal>, LookupFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_delta_t {
            return Err("ΔT database unreachable".into());
        }
        Ok(Some(dec!(63.83)))
    }

    async fn lookup_polar_motion(&self, _mjd: MJD) -> Result<PolarMotion, LookupFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_polar_motion {
            return Err("IERS service unreachable".into());
        }
        Ok(PolarMotion::new(dec!(0.05), dec!(0.38)))
    }
}

pub fn load_test_tables() -> IersTables {
    IersTables::from_files(
        Utf8Path::new("tests/data/deltat.data"),
        Some(Utf8Path::new("tests/data/historic_deltat.data")),
        Utf8Path::new("tests/data/finals2000A.all"),
    )
    .expect("test IERS tables should load")
}
