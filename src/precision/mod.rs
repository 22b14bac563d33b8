//! # Decimal precision primitives
//!
//! Everything the numeric core needs on top of [`rust_decimal::Decimal`]:
//!
//! - [`MathConfig`] – the single, immutable set of tolerances used by series evaluations
//!   and approximate comparisons. Build it once and pass it by reference.
//! - [`angle`] – unit-tagged angles normalized with floor-based (Euclidean) modulo.
//! - [`sin_cos`], [`atan`], [`atan2`], [`sqrt`], [`to_f64`] – decimal counterparts of the
//!   `f64` helpers. `rust_decimal` has no inverse trigonometry, and its `sin`/`cos` stop
//!   after a fixed number of Taylor terms (about 1e-10 near π/4), so the forward
//!   functions are summed here to full `Decimal` precision.
//!
//! ## Units
//!
//! All functions here take and return **radians**. Degree handling lives in [`angle`].
//!
//! ## Precision
//!
//! `Decimal` carries 28 significant digits. Series are summed until the next term drops
//! below [`MathConfig::series_epsilon`], which keeps results well inside the 1e-12 relative
//! tolerance required by the sidereal-time model.
pub mod angle;

use rust_decimal::prelude::*;

use self::angle::{normalize, AngleUnit};
use rust_decimal_macros::dec;
use serde::Deserialize;

/// Reduction threshold for the `atan` argument-halving loop.
const ATAN_REDUCTION_LIMIT: Decimal = dec!(0.125);

/// Tolerances shared by the whole numeric core.
///
/// Fields
/// -----------------
/// * `series_epsilon`: a series is truncated once its next term is smaller than this.
/// * `rel_tol`: relative tolerance for [`MathConfig::approx_eq`].
/// * `abs_tol`: absolute tolerance for [`MathConfig::approx_eq`], used near zero.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct MathConfig {
    pub series_epsilon: Decimal,
    pub rel_tol: Decimal,
    pub abs_tol: Decimal,
}

impl Default for MathConfig {
    fn default() -> Self {
        MathConfig {
            series_epsilon: dec!(0.00000000000000000000000001),
            rel_tol: dec!(0.000000000001),
            abs_tol: dec!(0.000000000000001),
        }
    }
}

impl MathConfig {
    /// Compare two decimals with the configured relative and absolute tolerances.
    ///
    /// Returns `true` when `|a - b| <= max(rel_tol * max(|a|, |b|), abs_tol)`.
    pub fn approx_eq(&self, a: Decimal, b: Decimal) -> bool {
        let diff = (a - b).abs();
        let scale = a.abs().max(b.abs());
        diff <= (self.rel_tol * scale).max(self.abs_tol)
    }
}

/// Square root of a non-negative decimal.
///
/// Negative input has no real root; it is clamped to zero, which is what the
/// callers (norms of direction cosines) need when rounding leaves a `-0.000…1`.
pub fn sqrt(x: Decimal) -> Decimal {
    if x <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    x.sqrt().unwrap_or(Decimal::ZERO)
}

/// Sine and cosine of `x` radians.
///
/// `x` is wrapped into `[-π, π]` and reduced by the nearest multiple of π/2 to
/// `|y| ≤ π/4`; both Taylor series are then summed until their terms vanish at `Decimal`
/// precision, and the quadrant is restored.
pub fn sin_cos(x: Decimal) -> (Decimal, Decimal) {
    let mut r = normalize(x, AngleUnit::Radians);
    if r > Decimal::PI {
        r -= Decimal::TWO_PI;
    }
    let quadrant = (r / Decimal::HALF_PI).round();
    let y = r - quadrant * Decimal::HALF_PI;

    let y2 = y * y;
    let mut sin = y;
    let mut cos = Decimal::ONE;
    let mut sin_term = y;
    let mut cos_term = Decimal::ONE;
    let mut n: u32 = 0;
    loop {
        n += 2;
        cos_term = -cos_term * y2 / Decimal::from((n - 1) * n);
        sin_term = -sin_term * y2 / Decimal::from(n * (n + 1));
        if cos_term.is_zero() && sin_term.is_zero() {
            break;
        }
        cos += cos_term;
        sin += sin_term;
    }

    match quadrant.to_i64().unwrap_or(0).rem_euclid(4) {
        0 => (sin, cos),
        1 => (cos, -sin),
        2 => (-sin, -cos),
        _ => (-cos, sin),
    }
}

/// Arc tangent of a decimal, in radians, in (-π/2, π/2).
///
/// The argument is first folded into [0, 1] with `atan(x) = π/2 − atan(1/x)`, then halved
/// with `atan(x) = 2·atan(x / (1 + √(1 + x²)))` until it is below 1/8, and finally summed
/// as the alternating Taylor series `x − x³/3 + x⁵/5 − …`.
pub fn atan(x: Decimal, config: &MathConfig) -> Decimal {
    if x.is_zero() {
        return Decimal::ZERO;
    }
    if x.is_sign_negative() {
        return -atan(-x, config);
    }
    if x > Decimal::ONE {
        return Decimal::HALF_PI - atan(Decimal::ONE / x, config);
    }

    let mut reduced = x;
    let mut doublings: u32 = 0;
    while reduced > ATAN_REDUCTION_LIMIT {
        reduced /= Decimal::ONE + sqrt(Decimal::ONE + reduced * reduced);
        doublings += 1;
    }

    let x2 = reduced * reduced;
    let mut power = reduced;
    let mut sum = reduced;
    let mut n: u32 = 1;
    loop {
        power = -power * x2;
        n += 2;
        let term = power / Decimal::from(n);
        if term.abs() < config.series_epsilon {
            break;
        }
        sum += term;
    }

    sum * Decimal::from(1u64 << doublings)
}

/// Four-quadrant arc tangent of `y / x`, in radians, in (-π, π].
///
/// `atan2(0, 0)` is `0`.
pub fn atan2(y: Decimal, x: Decimal, config: &MathConfig) -> Decimal {
    if x.is_zero() {
        return match y.cmp(&Decimal::ZERO) {
            std::cmp::Ordering::Greater => Decimal::HALF_PI,
            std::cmp::Ordering::Less => -Decimal::HALF_PI,
            std::cmp::Ordering::Equal => Decimal::ZERO,
        };
    }

    // y / x overflows only when x is vanishingly small compared to y
    let Some(ratio) = y.checked_div(x) else {
        return if y.is_sign_negative() {
            -Decimal::HALF_PI
        } else {
            Decimal::HALF_PI
        };
    };

    let base = atan(ratio, config);
    if x.is_sign_positive() {
        base
    } else if y.is_sign_negative() {
        base - Decimal::PI
    } else {
        base + Decimal::PI
    }
}

/// Lossy conversion to `f64` for the public, plain-number outputs.
pub fn to_f64(x: Decimal) -> f64 {
    x.to_f64().unwrap_or(f64::NAN)
}
