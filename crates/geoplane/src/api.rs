//! Flat entry points for collaborator code (CLI, bindings, services).
//!
//! The four contracts:
//! - `compute_orientation(&[Point3D]) -> Result<PlaneOrientation, InvalidInputError>`
//! - `compute_section(&PlaneOrientation, azimuth) -> SectionResult`
//! - `compute_batch(&[RawPoint]) -> Result<Vec<PlaneOrientation>, ParseError>`
//! - `summarize_stratigraphy(&[StratigraphicLayer]) -> StratigraphicSummary`

// Orientation
pub use crate::geometry::{plane_normal, Point3D};
pub use crate::orientation::{
    compute_orientation, orientation_from_normal, orientation_from_triple, InvalidInputError,
    PlaneOrientation,
};
// Sections
pub use crate::section::{apparent_dip, compute_section, section_gamma, SectionResult};
// Batches
pub use crate::batch::{
    compute_batch, compute_batch_triples, group_triples, parse_points, ParseError, RawPoint,
    TripleOrientation,
};
// Stratigraphy
pub use crate::strata::{
    summarize_stratigraphy, Age, LayerDescription, StratigraphicLayer, StratigraphicSummary,
};

/// Orientation and section in one call, for callers holding raw points.
pub fn section_from_points(
    points: &[Point3D],
    section_azimuth: f64,
) -> Result<SectionResult, InvalidInputError> {
    let orientation = compute_orientation(points)?;
    Ok(compute_section(&orientation, section_azimuth))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::point;

    #[test]
    fn section_from_points_chains_solver() {
        let pts = [
            point![0.0, 0.0, 100.0],
            point![10.0, 0.0, 120.0],
            point![0.0, 10.0, 110.0],
        ];
        let s = section_from_points(&pts, 45.0).unwrap();
        assert_eq!(s.source, compute_orientation(&pts).unwrap());
        assert_eq!(s.section_azimuth, 45.0);
        assert!(s.apparent_dip <= s.source.dip);
        assert!(section_from_points(&pts[..2], 45.0).is_err());
    }
}
