mod common;

use approx::assert_abs_diff_eq;
use common::{j2000_provider, load_test_tables, ConstantProvider, FailingProvider};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use skyframe::{
    constants::JD_J2000,
    coordinates::{airmass, equatorial_to_horizontal, hour_angle},
    env_state::SkyframeEnv,
    observation::ObservationRequest,
    observers::ObserverLocation,
    precision::to_f64,
    sidereal::sidereal_time,
    skyframe_errors::LookupKind,
    AngleUnit, CoverageStatus, MathConfig, PolarMotion, Skyframe, SkyframeError,
};

#[tokio::test]
async fn test_sidereal_time_reference_case() {
    let st = sidereal_time(JD_J2000, Decimal::ZERO, &j2000_provider(), &MathConfig::default())
        .await
        .unwrap();
    assert_eq!(st.unit(), AngleUnit::Degrees);
    // within a few arcseconds of 280.46061837504 + GMST polynomial
    assert_abs_diff_eq!(st.to_f64(), 280.4606, epsilon = 1e-3);
    assert!(st.value() >= Decimal::ZERO && st.value() < dec!(360));
}

#[tokio::test]
async fn test_sidereal_time_from_tables_matches_constant_inputs() {
    let cfg = MathConfig::default();
    let tables = load_test_tables();
    let from_tables = sidereal_time(JD_J2000, dec!(-64.5467), &tables, &cfg)
        .await
        .unwrap();
    let constant = ConstantProvider {
        delta_t: Some(dec!(63.8285)),
        pm: PolarMotion::new(dec!(0.050), dec!(0.379)),
    };
    let from_constant = sidereal_time(JD_J2000, dec!(-64.5467), &constant, &cfg)
        .await
        .unwrap();
    assert_abs_diff_eq!(from_tables.to_f64(), from_constant.to_f64(), epsilon = 1e-12);
}

#[tokio::test]
async fn test_mean_pole_fallback_still_yields_a_result() {
    let provider = ConstantProvider {
        delta_t: Some(dec!(63.83)),
        pm: PolarMotion::mean_pole(CoverageStatus::AfterRange),
    };
    let st = sidereal_time(JD_J2000, Decimal::ZERO, &provider, &MathConfig::default())
        .await
        .unwrap();
    assert_abs_diff_eq!(st.to_f64(), 280.4606, epsilon = 1e-3);
}

#[tokio::test]
async fn test_delta_t_failure_wins_over_polar_motion_failure() {
    let provider = FailingProvider {
        fail_delta_t: true,
        fail_polar_motion: true,
        ..Default::default()
    };
    let err = sidereal_time(JD_J2000, Decimal::ZERO, &provider, &MathConfig::default())
        .await
        .unwrap_err();
    assert_eq!(
        err,
        SkyframeError::EarthOrientationLookup {
            kind: LookupKind::DeltaT,
            source: None
        }
    );
    assert!(std::error::Error::source(&err).is_some());
    // both lookups were issued
    assert_eq!(provider.calls(), 2);
}

#[tokio::test]
async fn test_polar_motion_failure() {
    let provider = FailingProvider {
        fail_polar_motion: true,
        ..Default::default()
    };
    let err = sidereal_time(JD_J2000, Decimal::ZERO, &provider, &MathConfig::default())
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Couldn't get polar motion value from IERS service"
    );
}

#[tokio::test]
async fn test_missing_delta_t() {
    let provider = ConstantProvider {
        delta_t: None,
        pm: PolarMotion::new(dec!(0.05), dec!(0.38)),
    };
    let err = sidereal_time(JD_J2000, Decimal::ZERO, &provider, &MathConfig::default())
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Couldn't get ΔT (Delta T) value");
}

#[tokio::test]
async fn test_hour_angle_altitude_airmass_chain() {
    let cfg = MathConfig::default();
    let st = sidereal_time(JD_J2000, dec!(-64.5467), &j2000_provider(), &cfg)
        .await
        .unwrap();

    // a target one hour west of the meridian, on the observer's zenith declination
    let ha = hour_angle(st.degrees() - dec!(15), &st);
    assert_abs_diff_eq!(ha.to_f64(), 15.0, epsilon = 1e-12);

    let hz = equatorial_to_horizontal(ha.degrees(), dec!(-34.9066), dec!(-34.9066), &cfg);
    assert!(hz.altitude < dec!(90) && hz.altitude > dec!(70));
    assert!(airmass(hz.altitude) > 1.0);
    // west of the meridian in the southern hemisphere
    assert!(hz.azimuth.to_f64() > 180.0 && hz.azimuth.to_f64() < 360.0);
}

#[tokio::test]
async fn test_observation_metadata_serialization() {
    let skyframe = Skyframe::new(SkyframeEnv::new(load_test_tables()));
    let site = ObserverLocation::new(dec!(-64.5467), dec!(-34.9066))
        .unwrap()
        .with_name("Test site");
    let request: ObservationRequest = serde_json::from_str(
        r#"{
            "OBJECT": "HD 50896",
            "DATE-OBS": "2000-01-01",
            "UT": "06:30:00",
            "RA2000": 103.3872,
            "DEC2000": -23.9297
        }"#,
    )
    .unwrap();

    let meta = skyframe.observation_metadata(&site, &request).await.unwrap();
    let json = serde_json::to_value(&meta).unwrap();

    assert_eq!(json["OBJECT"], "HD 50896");
    assert_eq!(json["EPOCH"], "J2000.00");
    assert_eq!(json["EQUINOX"], "2000.00");
    assert_eq!(json["RA"], "06:53:32.9280");
    assert_eq!(json["DEC"], "-23:55:46.9200");
    assert_abs_diff_eq!(json["JD"].as_f64().unwrap(), 2451544.7708333335, epsilon = 1e-6);
    assert_abs_diff_eq!(
        json["AIRMASS"].as_f64().unwrap(),
        meta.airmass,
        epsilon = 1e-12
    );
    assert_abs_diff_eq!(
        json["ALTITUDE"].as_f64().unwrap(),
        to_f64(meta.altitude),
        epsilon = 1e-9
    );
    assert!(json.get("sidereal_time").is_none());
    // no time zone on the site
    assert!(json.get("TIME-OBS").is_none());
}

#[tokio::test]
async fn test_time_obs_serialized_for_zoned_site() {
    let skyframe = Skyframe::new(SkyframeEnv::new(load_test_tables()));
    let la_plata = ObserverLocation::new(dec!(-57.9322), dec!(-34.9066))
        .unwrap()
        .with_timezone("America/Argentina/Buenos_Aires");
    let request = ObservationRequest {
        object: "HD 50896".into(),
        date_obs: "2000-01-01".into(),
        ut: "03:12:00".into(),
        ra2000: dec!(103.3872),
        dec2000: dec!(-23.9297),
    };

    let meta = skyframe
        .observation_metadata(&la_plata, &request)
        .await
        .unwrap();
    let json = serde_json::to_value(&meta).unwrap();
    assert_eq!(json["UT"], "03:12:00");
    assert_eq!(json["TIME-OBS"], "00:12:00");
}
