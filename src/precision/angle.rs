//! Unit-tagged angles, always normalized to a single turn.
//!
//! Rust's `%` on [`Decimal`] is a truncated remainder and keeps the sign of the dividend
//! (`-1 % 360 == -1`). Angle wrapping needs the floor-based modulo instead
//! (`-1 mod 360 == 359`), so [`normalize`] computes `x − turn·⌊x / turn⌋` explicitly.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::constants::{DEGRAD, FULL_TURN_DEG, RADEG};

use super::to_f64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    Degrees,
    Radians,
}

impl AngleUnit {
    /// One full turn in this unit: 360 or 2π.
    pub fn turn(self) -> Decimal {
        match self {
            AngleUnit::Degrees => FULL_TURN_DEG,
            AngleUnit::Radians => Decimal::TWO_PI,
        }
    }
}

/// Wrap `x` into `[0, turn)` with floor-based modulo.
///
/// The result is never negative. A value that rounds up to exactly one turn is folded
/// back to zero so the upper bound stays open.
pub fn normalize(x: Decimal, unit: AngleUnit) -> Decimal {
    let turn = unit.turn();
    let wrapped = x - turn * (x / turn).floor();
    if wrapped >= turn || (wrapped.is_sign_negative() && !wrapped.is_zero()) {
        // only reachable through the last-digit rounding of `x / turn`
        normalize_slow(wrapped, turn)
    } else {
        wrapped
    }
}

fn normalize_slow(mut x: Decimal, turn: Decimal) -> Decimal {
    while x >= turn {
        x -= turn;
    }
    while x < Decimal::ZERO {
        x += turn;
    }
    if x >= turn {
        Decimal::ZERO
    } else {
        x
    }
}

/// An angle in degrees or radians, normalized to one turn at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Angle {
    value: Decimal,
    unit: AngleUnit,
}

impl Angle {
    pub fn new(value: Decimal, unit: AngleUnit) -> Self {
        Angle {
            value: normalize(value, unit),
            unit,
        }
    }

    pub fn from_degrees(value: Decimal) -> Self {
        Angle::new(value, AngleUnit::Degrees)
    }

    pub fn from_radians(value: Decimal) -> Self {
        Angle::new(value, AngleUnit::Radians)
    }

    /// The normalized value, in [`Angle::unit`].
    pub fn value(&self) -> Decimal {
        self.value
    }

    pub fn unit(&self) -> AngleUnit {
        self.unit
    }

    pub fn degrees(&self) -> Decimal {
        match self.unit {
            AngleUnit::Degrees => self.value,
            AngleUnit::Radians => self.value * DEGRAD,
        }
    }

    pub fn radians(&self) -> Decimal {
        match self.unit {
            AngleUnit::Degrees => self.value * RADEG,
            AngleUnit::Radians => self.value,
        }
    }

    pub fn to_degrees(self) -> Angle {
        Angle::from_degrees(self.degrees())
    }

    pub fn to_radians(self) -> Angle {
        Angle::from_radians(self.radians())
    }

    pub fn to_f64(&self) -> f64 {
        to_f64(self.value)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            AngleUnit::Degrees => write!(f, "{}°", self.value),
            AngleUnit::Radians => write!(f, "{} rad", self.value),
        }
    }
}
