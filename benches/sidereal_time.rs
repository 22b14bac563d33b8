use async_trait::async_trait;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tokio::runtime::Runtime;

use skyframe::{
    constants::{JulianDate, MJD},
    coordinates::{equatorial_to_horizontal, hour_angle},
    sidereal::sidereal_time,
    skyframe_errors::LookupFailure,
    EarthOrientationProvider, MathConfig, PolarMotion,
};

struct FixedProvider;

#[async_trait]
impl EarthOrientationProvider for FixedProvider {
    async fn lookup_delta_t(&self, _mjd: MJD) -> Result<Option<Decimal>, LookupFailure> {
        Ok(Some(dec!(63.83)))
    }

    async fn lookup_polar_motion(&self, _mjd: MJD) -> Result<PolarMotion, LookupFailure> {
        Ok(PolarMotion::new(dec!(0.05), dec!(0.38)))
    }
}

/// JD in 1950..2050 and longitude in [-180, 180), both at millidegree/microday resolution.
fn random_inputs(rng: &mut StdRng, samples: usize) -> Vec<(JulianDate, Decimal)> {
    (0..samples)
        .map(|_| {
            let jd = Decimal::new(rng.random_range(2_433_282_500_000..2_469_807_500_000), 6);
            let lon = Decimal::new(rng.random_range(-180_000..180_000), 3);
            (jd, lon)
        })
        .collect()
}

fn bench_sidereal_time(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let provider = FixedProvider;
    let config = MathConfig::default();
    let mut rng = StdRng::seed_from_u64(0x5EED);

    c.bench_function("sidereal_time/random_dates", |b| {
        b.iter_batched(
            || random_inputs(&mut rng, 100),
            |cases| {
                for (jd, lon) in cases {
                    let st = rt
                        .block_on(sidereal_time(black_box(jd), black_box(lon), &provider, &config))
                        .unwrap();
                    black_box(st);
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_horizontal(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let config = MathConfig::default();
    let st = rt
        .block_on(sidereal_time(dec!(2451545), dec!(-64.5467), &FixedProvider, &config))
        .unwrap();

    c.bench_function("equatorial_to_horizontal/fixed_target", |b| {
        b.iter(|| {
            let ha = hour_angle(black_box(dec!(103.3872)), &st);
            black_box(equatorial_to_horizontal(
                ha.degrees(),
                black_box(dec!(-23.9297)),
                dec!(-34.9066),
                &config,
            ))
        })
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default().sample_size(20);
    targets = bench_sidereal_time, bench_horizontal
);
criterion_main!(benches);
