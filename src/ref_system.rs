//! # Axis rotation matrices
//!
//! Elementary frame rotations about the X, Y and Z axes, built on
//! [`nalgebra::Matrix3`] with [`Decimal`] entries so the sidereal-time chain never leaves
//! decimal arithmetic.
//!
//! ## Convention
//!
//! [`rotmt`] returns the **frame** (passive) rotation: for an axis index `i` and the two
//! following indices `a1 = (i + 1) mod 3`, `a2 = (i + 2) mod 3`,
//!
//! ```text
//! R[i][i]   = 1
//! R[a1][a1] = cos α     R[a1][a2] = sin α
//! R[a2][a1] = −sin α    R[a2][a2] = cos α
//! ```
//!
//! which is the transpose of the active rotation returned by
//! `nalgebra::Rotation3::from_axis_angle`. Composing `rotmt(a, Z) * rotmt(b, Z)` yields
//! `rotmt(a + b, Z)`.

use nalgebra::Matrix3;
use rust_decimal::prelude::*;

use crate::{constants::Radian, precision::sin_cos};

/// Coordinate axis of an elementary rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// Build the 3×3 frame rotation by `alpha` radians about `axis`.
///
/// Arguments
/// ---------
/// * `alpha`: rotation angle in radians.
/// * `axis`: the fixed axis.
///
/// Returns
/// --------
/// * An orthonormal [`Matrix3<Decimal>`] following the convention in the module docs.
///
/// # See also
/// * [`polar_motion_matrix`](crate::sidereal::polar_motion_matrix) – chains four of these.
pub fn rotmt(alpha: Radian, axis: Axis) -> Matrix3<Decimal> {
    let (s, c) = sin_cos(alpha);

    let i = axis.index();
    let a1 = (i + 1) % 3;
    let a2 = (i + 2) % 3;

    let mut r = Matrix3::<Decimal>::zeros();
    r[(i, i)] = Decimal::ONE;
    r[(a1, a1)] = c;
    r[(a1, a2)] = s;
    r[(a2, a1)] = -s;
    r[(a2, a2)] = c;
    r
}
