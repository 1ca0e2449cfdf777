//! Property tests for the orientation convention and section correction.

use nalgebra::Point3;
use proptest::prelude::*;

use crate::angles::normalize_azimuth;
use crate::batch::{compute_batch, RawPoint};
use crate::orientation::compute_orientation;
use crate::section::compute_section;

fn coord() -> impl Strategy<Value = f64> {
    -1.0e4..1.0e4f64
}

fn point() -> impl Strategy<Value = Point3<f64>> {
    (coord(), coord(), coord()).prop_map(|(x, y, z)| Point3::new(x, y, z))
}

fn wide_point() -> impl Strategy<Value = Point3<f64>> {
    let c = -1.0e300..1.0e300f64;
    (c.clone(), c.clone(), c).prop_map(|(x, y, z)| Point3::new(x, y, z))
}

proptest! {
    #[test]
    fn extreme_coordinates_stay_in_range(a in wide_point(), b in wide_point(), c in wide_point()) {
        let o = compute_orientation(&[a, b, c]).unwrap();
        prop_assert!((0.0..=90.0).contains(&o.dip), "dip {}", o.dip);
        prop_assert!((0.0..360.0).contains(&o.strike));
        prop_assert!((0.0..360.0).contains(&o.dip_direction));
        prop_assert!((0.0..360.0).contains(&o.dip_towards));
        prop_assert!(o.normal.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn any_azimuth_gives_a_bearing(a in point(), b in point(), c in point(), az in any::<f64>()) {
        let o = compute_orientation(&[a, b, c]).unwrap();
        let s = compute_section(&o, az);
        prop_assert!((0.0..360.0).contains(&s.section_azimuth));
        prop_assert!(!s.apparent_dip.is_nan());
        prop_assert!(!s.correction_angle.is_nan());
    }

    #[test]
    fn angles_stay_in_range(a in point(), b in point(), c in point()) {
        let o = compute_orientation(&[a, b, c]).unwrap();
        prop_assert!((0.0..=90.0).contains(&o.dip));
        prop_assert!((0.0..360.0).contains(&o.strike));
        prop_assert!((0.0..360.0).contains(&o.dip_direction));
        prop_assert!((0.0..360.0).contains(&o.dip_towards));
        let r = o.rounded();
        prop_assert!((0.0..=90.0).contains(&r.dip));
        prop_assert!((0.0..360.0).contains(&r.strike));
        prop_assert!((0.0..360.0).contains(&r.dip_direction));
    }

    #[test]
    fn dip_direction_is_strike_plus_ninety(a in point(), b in point(), c in point()) {
        let o = compute_orientation(&[a, b, c]).unwrap();
        prop_assume!(!o.is_horizontal());
        prop_assert_eq!(o.dip_direction, normalize_azimuth(o.strike + 90.0));
    }

    #[test]
    fn apparent_dip_never_exceeds_true_dip(
        a in point(), b in point(), c in point(), az in 0.0..360.0f64
    ) {
        let o = compute_orientation(&[a, b, c]).unwrap();
        let s = compute_section(&o, az);
        prop_assert!(s.apparent_dip >= 0.0);
        prop_assert!(s.apparent_dip <= o.dip);
        prop_assert!(s.correction_angle >= 0.0);
        prop_assert!((0.0..360.0).contains(&s.section_azimuth));
    }

    #[test]
    fn batch_len_is_kept_points_div_three(n in 0usize..40) {
        let cells: Vec<String> = (0..n).map(|i| i.to_string()).collect();
        let rows: Vec<RawPoint<'_>> = cells
            .iter()
            .map(|c| RawPoint::new(Some(c.as_str()), Some("1"), Some(c.as_str())))
            .collect();
        prop_assert_eq!(compute_batch(&rows).unwrap().len(), n / 3);
    }
}
