//! # Skyframe environment state
//!
//! [`SkyframeEnv`] bundles what every computation needs besides its own inputs:
//!
//! - the [`MathConfig`] tolerances, built once;
//! - the [`EarthOrientationProvider`] answering ΔT and polar-motion lookups;
//! - the [`FormatOptions`] used for sexagesimal renderings.
//!
//! ```text
//! SkyframeEnv
//! ├── math      (MathConfig)
//! ├── provider  (Arc<dyn EarthOrientationProvider>)
//! └── format    (FormatOptions)
//! ```
//!
//! The provider sits behind an [`Arc`], so cloning the environment is cheap and clones can
//! be moved into other tokio tasks.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use camino::Utf8Path;
//! use skyframe::env_state::SkyframeEnv;
//! use skyframe::iers::IersTables;
//!
//! let tables = IersTables::from_files(
//!     Utf8Path::new("data/deltat.data"),
//!     Some(Utf8Path::new("data/historic_deltat.data")),
//!     Utf8Path::new("data/finals2000A.all"),
//! )?;
//! let env = SkyframeEnv::new(tables);
//! # Ok::<(), skyframe::skyframe_errors::SkyframeError>(())
//! ```
use std::{fmt, sync::Arc};

use crate::{
    earth_orientation::EarthOrientationProvider, format::FormatOptions, precision::MathConfig,
};

#[derive(Clone)]
pub struct SkyframeEnv {
    pub math: MathConfig,
    pub provider: Arc<dyn EarthOrientationProvider>,
    pub format: FormatOptions,
}

impl SkyframeEnv {
    /// Environment with default tolerances and formatting around `provider`.
    pub fn new(provider: impl EarthOrientationProvider + 'static) -> Self {
        SkyframeEnv::from_shared(Arc::new(provider))
    }

    /// Same as [`SkyframeEnv::new`] for a provider that is already shared.
    pub fn from_shared(provider: Arc<dyn EarthOrientationProvider>) -> Self {
        SkyframeEnv {
            math: MathConfig::default(),
            provider,
            format: FormatOptions::default(),
        }
    }

    pub fn with_math(mut self, math: MathConfig) -> Self {
        self.math = math;
        self
    }

    pub fn with_format(mut self, format: FormatOptions) -> Self {
        self.format = format;
        self
    }
}

impl fmt::Debug for SkyframeEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SkyframeEnv")
            .field("math", &self.math)
            .field("provider", &"<dyn EarthOrientationProvider>")
            .field("format", &self.format)
            .finish()
    }
}
