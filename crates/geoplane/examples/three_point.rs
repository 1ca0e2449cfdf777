//! Worked three-point problem: orientation of a dipping bed and its apparent
//! dip in a NE–SW section.

use geoplane::prelude::*;

fn main() {
    let points = [
        point![0.0, 0.0, 100.0],
        point![10.0, 0.0, 120.0],
        point![0.0, 10.0, 110.0],
    ];
    let orientation = compute_orientation(&points).expect("three points");
    let o = orientation.rounded();
    println!(
        "strike={:.2} dip={:.2} dip_direction={:.2} dip_towards={:.2}",
        o.strike, o.dip, o.dip_direction, o.dip_towards
    );

    let section = compute_section(&orientation, 45.0).rounded();
    println!(
        "section_azimuth={:.2} apparent_dip={:.2} correction={:.2}",
        section.section_azimuth, section.apparent_dip, section.correction_angle
    );
}
