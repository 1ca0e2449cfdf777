//! Compass-angle helpers shared by the solver and section correction.
//!
//! All azimuths are degrees clockwise-agnostic bearings in `[0, 360)`; the
//! helpers only wrap, fold and round, they never pick a convention.

/// Wrap an angle into `[0, 360)`.
///
/// `rem_euclid` can return exactly `360.0` for tiny negative inputs, so that
/// case is mapped back to `0.0`. NaN and ±inf carry no bearing and map to `0.0`.
#[inline]
pub fn normalize_azimuth(deg: f64) -> f64 {
    if !deg.is_finite() {
        return 0.0;
    }
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 {
        0.0
    } else {
        r
    }
}

/// Acute angle in `[0, 90]` between two undirected lines with the given bearings.
#[inline]
pub fn acute_between(a: f64, b: f64) -> f64 {
    let g = (a - b).abs().rem_euclid(180.0);
    if g > 90.0 {
        180.0 - g
    } else {
        g
    }
}

/// Round to `decimals` digits after the point.
///
/// Values too large to scale are returned as is (they have no fraction left).
#[inline]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    let scaled = value * scale;
    if scaled.is_finite() {
        scaled.round() / scale
    } else {
        value
    }
}

/// Round an azimuth for display and re-wrap (359.999 → 0.0, never 360.0).
#[inline]
pub fn round_azimuth(deg: f64, decimals: i32) -> f64 {
    normalize_azimuth(round_to(deg, decimals))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_wraps_negative_and_large() {
        assert_eq!(normalize_azimuth(-90.0), 270.0);
        assert_eq!(normalize_azimuth(450.0), 90.0);
        assert_eq!(normalize_azimuth(360.0), 0.0);
        let tiny = normalize_azimuth(-1e-18);
        assert!((0.0..360.0).contains(&tiny));
        assert_eq!(normalize_azimuth(f64::NAN), 0.0);
        assert_eq!(normalize_azimuth(f64::INFINITY), 0.0);
        assert_eq!(normalize_azimuth(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn acute_between_is_direction_agnostic() {
        assert_eq!(acute_between(10.0, 10.0), 0.0);
        assert_eq!(acute_between(0.0, 90.0), 90.0);
        assert_eq!(acute_between(0.0, 180.0), 0.0);
        assert!((acute_between(350.0, 10.0) - 20.0).abs() < 1e-12);
        assert!((acute_between(30.0, 160.0) - 50.0).abs() < 1e-12);
    }

    #[test]
    fn round_azimuth_never_returns_full_turn() {
        assert_eq!(round_azimuth(359.999, 2), 0.0);
        assert_eq!(round_to(12.345_6, 2), 12.35);
        assert_eq!(round_to(1e306, 4), 1e306);
    }
}
