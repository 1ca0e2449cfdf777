//! Apparent dip in a vertical section of arbitrary azimuth.
//!
//! `tan(apparent) = tan(dip) · cos γ`, where γ ∈ [0, 90] is the acute angle
//! between the section line and the dip line (dip direction = strike + 90).
//! A section along the dip direction shows the true dip; a section along
//! strike shows the layer flat.

use crate::angles::{acute_between, normalize_azimuth, round_azimuth, round_to};
use crate::cfg::ANGLE_DECIMALS;
use crate::orientation::PlaneOrientation;

/// Apparent dip of a plane seen in a section, with the plane it came from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionResult {
    /// Section bearing, wrapped to `[0, 360)`.
    pub section_azimuth: f64,
    pub apparent_dip: f64,
    /// `source.dip - apparent_dip`, never negative.
    pub correction_angle: f64,
    pub source: PlaneOrientation,
}

impl SectionResult {
    /// Presentation copy rounded like [`PlaneOrientation::rounded`].
    ///
    /// The correction angle is recomputed from the rounded dips so the three
    /// displayed numbers stay consistent.
    pub fn rounded(&self) -> Self {
        let source = self.source.rounded();
        let apparent_dip = round_to(self.apparent_dip, ANGLE_DECIMALS);
        Self {
            section_azimuth: round_azimuth(self.section_azimuth, ANGLE_DECIMALS),
            apparent_dip,
            correction_angle: round_to(source.dip - apparent_dip, ANGLE_DECIMALS),
            source,
        }
    }
}

/// Angle between the section line and the dip line, folded into `[0, 90]`.
///
/// Bearings go through `normalize_azimuth` first, so a non-finite azimuth is
/// read as 0 (north), the same bearing `compute_section` reports.
#[inline]
pub fn section_gamma(strike: f64, section_azimuth: f64) -> f64 {
    acute_between(
        normalize_azimuth(strike + 90.0),
        normalize_azimuth(section_azimuth),
    )
}

/// Apparent dip (degrees) of a plane with `strike`/`dip` in a section along
/// `section_azimuth`.
///
/// The two limits are returned exactly instead of through the trig identity:
/// γ = 0 gives `dip`, γ = 90 gives 0 (also for vertical planes, where
/// `tan(dip)` is unbounded).
pub fn apparent_dip(strike: f64, dip: f64, section_azimuth: f64) -> f64 {
    let gamma = section_gamma(strike, section_azimuth);
    if gamma == 0.0 {
        return dip;
    }
    if gamma == 90.0 {
        return 0.0;
    }
    if dip >= 90.0 {
        return 90.0;
    }
    let t = dip.to_radians().tan() * gamma.to_radians().cos();
    t.atan().to_degrees().max(0.0).min(dip)
}

/// Correct `orientation` for a section along `section_azimuth`.
///
/// Pre: `section_azimuth` is a finite bearing in degrees.
/// Post: the result is NaN-free; NaN or ±inf is taken as bearing 0.
pub fn compute_section(orientation: &PlaneOrientation, section_azimuth: f64) -> SectionResult {
    let section_azimuth = normalize_azimuth(section_azimuth);
    let apparent = apparent_dip(orientation.strike, orientation.dip, section_azimuth);
    SectionResult {
        section_azimuth,
        apparent_dip: apparent,
        correction_angle: orientation.dip - apparent,
        source: *orientation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orientation::compute_orientation;
    use nalgebra::point;

    fn inclined() -> PlaneOrientation {
        compute_orientation(&[
            point![0.0, 0.0, 100.0],
            point![10.0, 0.0, 120.0],
            point![0.0, 10.0, 110.0],
        ])
        .unwrap()
    }

    #[test]
    fn section_along_dip_direction_shows_true_dip() {
        let o = inclined();
        let s = compute_section(&o, o.strike + 90.0);
        assert!((s.apparent_dip - o.dip).abs() < 0.1);
        assert!(s.correction_angle.abs() < 0.1);
        // opposite bearing is the same line
        let back = compute_section(&o, o.strike + 270.0);
        assert!((back.apparent_dip - o.dip).abs() < 0.1);
        assert!(s.section_azimuth < 360.0);
    }

    #[test]
    fn section_along_strike_is_flat() {
        let o = inclined();
        let s = compute_section(&o, o.strike);
        assert!(s.apparent_dip.abs() < 0.1);
        assert!((s.correction_angle - o.dip).abs() < 0.1);
    }

    #[test]
    fn exact_limits() {
        assert_eq!(apparent_dip(0.0, 30.0, 90.0), 30.0);
        assert_eq!(apparent_dip(0.0, 30.0, 0.0), 0.0);
        assert_eq!(apparent_dip(0.0, 90.0, 180.0), 0.0);
        assert_eq!(apparent_dip(0.0, 90.0, 45.0), 90.0);
        assert_eq!(apparent_dip(10.0, 0.0, 70.0), 0.0);
    }

    #[test]
    fn oblique_section_matches_formula() {
        // dip direction 90, section 150 → γ = 60, tan(app) = tan(40)·0.5
        let got = apparent_dip(0.0, 40.0, 150.0);
        let want = (40f64.to_radians().tan() * 0.5).atan().to_degrees();
        assert!((got - want).abs() < 1e-9);
        assert!(got < 40.0 && got > 0.0);
        // same line regardless of direction
        assert!((apparent_dip(0.0, 40.0, 330.0) - got).abs() < 1e-9);
    }

    #[test]
    fn non_finite_azimuth_reads_as_north() {
        let o = inclined();
        let north = compute_section(&o, 0.0);
        for az in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let s = compute_section(&o, az);
            assert_eq!(s.section_azimuth, 0.0);
            assert_eq!(s.apparent_dip, north.apparent_dip);
            assert!(!s.correction_angle.is_nan());
        }
        assert_eq!(apparent_dip(0.0, 30.0, f64::NAN), apparent_dip(0.0, 30.0, 0.0));
    }

    #[test]
    fn azimuth_is_wrapped_and_rounded() {
        let o = inclined();
        let s = compute_section(&o, -45.0);
        assert_eq!(s.section_azimuth, 315.0);
        let r = s.rounded();
        assert_eq!(r.source.dip, 65.91);
        assert_eq!(r.correction_angle, round_to(r.source.dip - r.apparent_dip, 2));
    }
}
