//! Three-point structural geology: plane orientation, section correction,
//! batch grouping and stratigraphic summaries.
//!
//! Everything here is pure value code: no I/O, no logging, no shared state.
//! Serialization, file formats and the command-line surface live in the `cli`
//! crate.
//!
//! API Policy
//! - Module paths are the source of truth; `api` is a flat convenience surface
//!   for callers that want the four entry points and their types only.

pub mod angles;
pub mod api;
pub mod batch;
pub mod cfg;
pub mod geometry;
pub mod orientation;
pub mod section;
pub mod strata;

#[cfg(test)]
mod props;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use batch::{compute_batch, ParseError, RawPoint};
pub use geometry::Point3D;
pub use orientation::{compute_orientation, InvalidInputError, PlaneOrientation};
pub use section::{compute_section, SectionResult};
pub use strata::{summarize_stratigraphy, StratigraphicLayer, StratigraphicSummary};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::batch::{compute_batch, compute_batch_triples, RawPoint, TripleOrientation};
    pub use crate::geometry::{plane_normal, Point3D};
    pub use crate::orientation::{compute_orientation, orientation_from_normal, PlaneOrientation};
    pub use crate::section::{apparent_dip, compute_section, SectionResult};
    pub use crate::strata::{summarize_stratigraphy, Age, StratigraphicLayer};
    pub use nalgebra::{point, Vector3};
}
