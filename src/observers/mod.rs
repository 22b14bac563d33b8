//! # Observer locations
//!
//! An [`ObserverLocation`] is the geographic site an observation is reduced for: an
//! east-positive longitude used by the sidereal-time rotation and a latitude used by the
//! horizontal-coordinate conversion.
//!
//! ## Units
//!
//! - Longitude: **degrees**, east positive, in `[-180, 180]`.
//! - Latitude: **degrees**, in `[-90, 90]`.
//!
//! The optional IANA time-zone label (e.g. `"America/Argentina/Buenos_Aires"`) is used
//! only for the local `TIME-OBS` keyword, see [`local_time`](crate::time::local_time).
//!
//! ## Example
//!
//! ```rust
//! use skyframe::observers::ObserverLocation;
//! use rust_decimal_macros::dec;
//!
//! let la_plata = ObserverLocation::new(dec!(-57.9322), dec!(-34.9066))?
//!     .with_name("Observatorio de La Plata")
//!     .with_timezone("America/Argentina/Buenos_Aires");
//! assert_eq!(la_plata.name.as_deref(), Some("Observatorio de La Plata"));
//! # Ok::<(), skyframe::skyframe_errors::ValidationError>(())
//! ```
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::{constants::Degree, skyframe_errors::ValidationError};

const MAX_LONGITUDE: Decimal = dec!(180);
const MAX_LATITUDE: Decimal = dec!(90);

/// A geographic observing site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObserverLocation {
    pub name: Option<String>,
    /// Degrees, east positive
    pub longitude: Degree,
    /// Degrees
    pub latitude: Degree,
    /// IANA time-zone label
    pub timezone: Option<String>,
}

impl ObserverLocation {
    /// Create a site from its geographic coordinates.
    ///
    /// Arguments
    /// -----------------
    /// * `longitude`: degrees, east positive.
    /// * `latitude`: degrees.
    ///
    /// Errors
    /// ----------
    /// * [`ValidationError::CoordinateOutOfRange`] if `|longitude| > 180` or `|latitude| > 90`.
    pub fn new(longitude: Degree, latitude: Degree) -> Result<Self, ValidationError> {
        let loc = ObserverLocation {
            name: None,
            longitude,
            latitude,
            timezone: None,
        };
        loc.validate()?;
        Ok(loc)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }

    /// Check coordinate ranges, e.g. after deserialization.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.longitude.abs() > MAX_LONGITUDE {
            return Err(ValidationError::CoordinateOutOfRange {
                name: "longitude",
                value: self.longitude,
            });
        }
        if self.latitude.abs() > MAX_LATITUDE {
            return Err(ValidationError::CoordinateOutOfRange {
                name: "latitude",
                value: self.latitude,
            });
        }
        Ok(())
    }
}
