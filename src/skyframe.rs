//! # Skyframe: the observation-reduction façade
//!
//! [`Skyframe`] wires the numeric modules together around a [`SkyframeEnv`]:
//!
//! ```text
//! DATE-OBS + UT ──► JD ──► Julian epoch / EQUINOX
//!                    │
//!                    └──► sidereal time (ΔT, polar motion from the provider)
//!                              │
//!                 RA2000 ──────┴──► hour angle ──► alt/az (DEC2000, latitude) ──► airmass
//! ```
//!
//! and renders the FITS-style [`ObservationMetadata`] record.
//!
//! ## Typical usage
//!
//! ```rust,no_run
//! use camino::Utf8Path;
//! use rust_decimal_macros::dec;
//! use skyframe::{
//!     env_state::SkyframeEnv, iers::IersTables, observation::ObservationRequest,
//!     observers::ObserverLocation, skyframe::Skyframe,
//! };
//!
//! # async fn run() -> Result<(), skyframe::skyframe_errors::SkyframeError> {
//! let tables = IersTables::from_files(
//!     Utf8Path::new("data/deltat.data"),
//!     None,
//!     Utf8Path::new("data/finals2000A.all"),
//! )?;
//! let skyframe = Skyframe::new(SkyframeEnv::new(tables));
//!
//! let site = ObserverLocation::new(dec!(-57.9322), dec!(-34.9066))?;
//! let request = ObservationRequest {
//!     object: "HD 50896".into(),
//!     date_obs: "1950-02-14".into(),
//!     ut: "03:12:00".into(),
//!     ra2000: dec!(103.3872),
//!     dec2000: dec!(-23.9297),
//! };
//! let meta = skyframe.observation_metadata(&site, &request).await?;
//! println!("ST = {}, AIRMASS = {}", meta.st, meta.airmass);
//! # Ok(())
//! # }
//! ```
use tracing::debug;

use crate::{
    constants::{Degree, JulianDate},
    coordinates::{airmass, equatorial_to_horizontal, hour_angle},
    env_state::SkyframeEnv,
    format::{angle_to_dms, deg_to_dms, deg_to_hms},
    observation::{ObservationMetadata, ObservationRequest},
    observers::ObserverLocation,
    precision::{angle::Angle, to_f64},
    sidereal,
    skyframe_errors::SkyframeError,
    time::{julian_date, julian_epoch, local_time, modified_julian_date, CalendarDate, TimeOfDay},
};

#[derive(Debug, Clone)]
pub struct Skyframe {
    env_state: SkyframeEnv,
}

impl Skyframe {
    pub fn new(env_state: SkyframeEnv) -> Self {
        Skyframe { env_state }
    }

    pub fn env(&self) -> &SkyframeEnv {
        &self.env_state
    }

    /// Local sidereal time using the environment's provider and tolerances.
    ///
    /// # See also
    /// * [`sidereal::sidereal_time`]
    pub async fn sidereal_time(
        &self,
        jd: JulianDate,
        longitude: Degree,
    ) -> Result<Angle, SkyframeError> {
        sidereal::sidereal_time(
            jd,
            longitude,
            self.env_state.provider.as_ref(),
            &self.env_state.math,
        )
        .await
    }

    /// Compute the time and position keywords of an observation.
    ///
    /// Arguments
    /// -----------------
    /// * `observer`: the observing site.
    /// * `request`: object name, UT date and time, ICRS target coordinates.
    ///
    /// Return
    /// ----------
    /// * The [`ObservationMetadata`] record, or the first error met: an invalid date or
    ///   time string, an out-of-range site, an unknown time zone, a failed
    ///   Earth-orientation lookup.
    ///
    /// `TIME-OBS` is only filled in when the observer carries a time zone.
    pub async fn observation_metadata(
        &self,
        observer: &ObserverLocation,
        request: &ObservationRequest,
    ) -> Result<ObservationMetadata, SkyframeError> {
        observer.validate()?;
        let math = &self.env_state.math;
        let fmt = &self.env_state.format;

        let date: CalendarDate = request.date_obs.parse()?;
        let ut: TimeOfDay = request.ut.parse()?;
        let time_obs = observer
            .timezone
            .as_deref()
            .map(|tz| local_time(&date, &ut, tz).map(|t| t.to_string()))
            .transpose()?;

        let jd = julian_date(&date, &ut);
        let epoch = julian_epoch(jd);

        let st = self.sidereal_time(jd, observer.longitude).await?;
        let ha = hour_angle(request.ra2000, &st);
        let horizontal =
            equatorial_to_horizontal(ha.degrees(), request.dec2000, observer.latitude, math);
        let air = airmass(horizontal.altitude);
        debug!(
            object = %request.object,
            %jd,
            %st,
            altitude = %horizontal.altitude,
            "observation reduced"
        );

        let ra = deg_to_hms(to_f64(request.ra2000), fmt)?;
        let dec = deg_to_dms(to_f64(request.dec2000), fmt)?;

        Ok(ObservationMetadata {
            object: request.object.clone(),
            date_obs: request.date_obs.clone(),
            ut: request.ut.clone(),
            time_obs,
            ra: ra.clone(),
            dec: dec.clone(),
            epoch: epoch.to_string(),
            equinox: epoch.equinox(),
            ra2000: ra,
            dec2000: dec,
            jd,
            mjd: modified_julian_date(jd),
            st: deg_to_hms(to_f64(st.degrees()), fmt)?,
            ha: angle_to_dms(&ha, fmt)?,
            altitude: horizontal.altitude,
            azimuth: horizontal.azimuth.degrees(),
            airmass: air,
            sidereal_time: st,
            hour_angle: ha,
            horizontal,
        })
    }
}
