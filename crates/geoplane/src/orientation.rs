//! Strike, dip and dip direction from a plane normal.
//!
//! Convention (the only one used in this crate)
//! - strike = atan2(ny, nx) in degrees, wrapped to `[0, 360)`.
//! - dip direction = strike + 90 (mod 360).
//! - dip = inclination from horizontal = angle between normal and vertical,
//!   `atan(sqrt(nx² + ny²) / |nz|)`, in `[0, 90]`. This is the same angle as
//!   `arccos(|nz| / |n|)`; the atan form avoids normalizing `n`. It is not
//!   `atan(|nz| / sqrt(nx² + ny²))`, which is the complement (90 − dip).
//! - dip-towards = dip direction when nz > 0, else the opposite bearing.
//!
//! Degenerate planes are not errors:
//! - nx = ny = 0 (flat plane, or zero normal from collinear points): every
//!   angle is 0.
//! - nz = 0 with a horizontal component (vertical plane): dip is exactly 90.
//! - a normal with a non-finite component has no usable direction and is
//!   treated as flat. Point triples never get there: when their cross product
//!   overflows, the normal is recomputed on rescaled points.
//!
//! Values are kept at full precision; `PlaneOrientation::rounded` produces the
//! two-decimal presentation copy.

use std::fmt;

use nalgebra::Vector3;

use crate::angles::{normalize_azimuth, round_azimuth, round_to};
use crate::cfg::{ANGLE_DECIMALS, NORMAL_DECIMALS, POINTS_PER_PLANE};
use crate::geometry::{plane_normal, plane_normal_rescaled, Point3D};

/// Orientation of a plane, all angles in degrees.
///
/// Invariants:
/// - `dip ∈ [0, 90]`.
/// - `strike`, `dip_direction`, `dip_towards ∈ [0, 360)`.
/// - `dip_direction == normalize(strike + 90)` unless the plane is flat.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaneOrientation {
    pub strike: f64,
    pub dip: f64,
    pub dip_direction: f64,
    pub dip_towards: f64,
    pub normal: Vector3<f64>,
}

impl PlaneOrientation {
    /// True when the normal has no horizontal component.
    #[inline]
    pub fn is_horizontal(&self) -> bool {
        self.normal.x == 0.0 && self.normal.y == 0.0
    }

    /// Presentation copy: angles to 2 decimals, normal to 4 decimals.
    pub fn rounded(&self) -> Self {
        Self {
            strike: round_azimuth(self.strike, ANGLE_DECIMALS),
            dip: round_to(self.dip, ANGLE_DECIMALS),
            dip_direction: round_azimuth(self.dip_direction, ANGLE_DECIMALS),
            dip_towards: round_azimuth(self.dip_towards, ANGLE_DECIMALS),
            normal: self.normal.map(|c| round_to(c, NORMAL_DECIMALS)),
        }
    }
}

/// Raised when a single-plane computation is not handed exactly three points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidInputError {
    pub got: usize,
}

impl fmt::Display for InvalidInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "exactly {POINTS_PER_PLANE} points are required, got {}",
            self.got
        )
    }
}

impl std::error::Error for InvalidInputError {}

fn flat(normal: Vector3<f64>) -> PlaneOrientation {
    PlaneOrientation {
        strike: 0.0,
        dip: 0.0,
        dip_direction: 0.0,
        dip_towards: 0.0,
        normal,
    }
}

/// Solve the orientation of the plane with normal `n`.
///
/// Total: every output angle is finite and in range for any input.
pub fn orientation_from_normal(n: Vector3<f64>) -> PlaneOrientation {
    if !n.iter().all(|c| c.is_finite()) {
        return flat(Vector3::zeros());
    }
    let horizontal = n.x.hypot(n.y);
    if horizontal == 0.0 {
        return flat(n);
    }
    if !horizontal.is_finite() {
        // |n| near f64::MAX; the direction survives a uniform scale.
        return orientation_from_normal(n / n.amax());
    }

    let strike = normalize_azimuth(n.y.atan2(n.x).to_degrees());
    let dip_direction = normalize_azimuth(strike + 90.0);
    let dip = if n.z == 0.0 {
        90.0
    } else {
        (horizontal / n.z.abs()).atan().to_degrees().clamp(0.0, 90.0)
    };
    let dip_towards = if n.z > 0.0 {
        dip_direction
    } else {
        normalize_azimuth(dip_direction + 180.0)
    };

    PlaneOrientation {
        strike,
        dip,
        dip_direction,
        dip_towards,
        normal: n,
    }
}

/// Orientation of the plane through the three given points.
///
/// Fails with [`InvalidInputError`] when `points.len() != 3`. Collinear points
/// are accepted and yield a flat (dip 0) orientation.
pub fn compute_orientation(points: &[Point3D]) -> Result<PlaneOrientation, InvalidInputError> {
    match points {
        [p1, p2, p3] => Ok(orientation_from_triple(p1, p2, p3)),
        _ => Err(InvalidInputError { got: points.len() }),
    }
}

/// Infallible form for callers that already hold a triple.
///
/// Keeps the raw cross product as `normal` unless it overflows, in which case
/// the normal of the rescaled points is used instead.
pub fn orientation_from_triple(p1: &Point3D, p2: &Point3D, p3: &Point3D) -> PlaneOrientation {
    let n = plane_normal(p1, p2, p3);
    if n.iter().all(|c| c.is_finite()) {
        orientation_from_normal(n)
    } else {
        orientation_from_normal(plane_normal_rescaled(p1, p2, p3))
    }
}
