//! Presentation and bookkeeping defaults (internal).
//!
//! Policy
//! - Fixed constants, no runtime knobs. The solver itself has no tolerances:
//!   degenerate planes are detected on exact zeros of the normal, which is what
//!   survey grids with repeated elevations produce.

/// Decimal digits kept by `PlaneOrientation::rounded` and friends for angles.
pub const ANGLE_DECIMALS: i32 = 2;
/// Decimal digits kept for raw normal components in presentation copies.
pub const NORMAL_DECIMALS: i32 = 4;
/// Lithology bucket for layers that do not name one.
pub const UNKNOWN_LITHOLOGY: &str = "Unknown";
/// Points per plane in a three-point problem.
pub const POINTS_PER_PLANE: usize = 3;
