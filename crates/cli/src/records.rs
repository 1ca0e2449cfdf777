//! Serializable records for command output and layer input.
//!
//! The core types carry full precision; records are built from the rounded
//! presentation copies.

use std::collections::BTreeMap;

use anyhow::{bail, Result};
use geoplane::batch::TripleOrientation;
use geoplane::strata::{Age, LayerDescription, StratigraphicLayer, StratigraphicSummary};
use geoplane::{PlaneOrientation, Point3D, SectionResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct NormalRecord {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrientationRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    pub strike: f64,
    pub dip: f64,
    pub dip_direction: f64,
    pub dip_towards: f64,
    pub normal_vector: NormalRecord,
}

impl OrientationRecord {
    pub fn new(orientation: &PlaneOrientation, project: Option<&str>) -> Self {
        let o = orientation.rounded();
        Self {
            project_id: project.map(str::to_string),
            strike: o.strike,
            dip: o.dip,
            dip_direction: o.dip_direction,
            dip_towards: o.dip_towards,
            normal_vector: NormalRecord {
                x: o.normal.x,
                y: o.normal.y,
                z: o.normal.z,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    pub section_azimuth: f64,
    pub true_dip: f64,
    pub apparent_dip: f64,
    pub correction_angle: f64,
    pub structural_elements: OrientationRecord,
}

impl SectionRecord {
    pub fn new(section: &SectionResult, project: Option<&str>) -> Self {
        let s = section.rounded();
        Self {
            project_id: project.map(str::to_string),
            section_azimuth: s.section_azimuth,
            true_dip: s.source.dip,
            apparent_dip: s.apparent_dip,
            correction_angle: s.correction_angle,
            structural_elements: OrientationRecord::new(&section.source, None),
        }
    }
}

/// One triple of a batch: its position, source points and orientation.
#[derive(Debug, Clone, Serialize)]
pub struct BatchRecord {
    pub index: usize,
    pub points: [[f64; 3]; 3],
    #[serde(flatten)]
    pub orientation: OrientationRecord,
}

fn xyz(p: &Point3D) -> [f64; 3] {
    [p.x, p.y, p.z]
}

impl BatchRecord {
    pub fn new(index: usize, triple: &TripleOrientation, project: Option<&str>) -> Self {
        Self {
            index,
            points: [
                xyz(&triple.points[0]),
                xyz(&triple.points[1]),
                xyz(&triple.points[2]),
            ],
            orientation: OrientationRecord::new(&triple.orientation, project),
        }
    }
}

/// Layer age as written in JSON: a number (Ma) or a label.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AgeInput {
    Ma(f64),
    Text(String),
}

/// Layer as accepted on input. `type` is accepted as an alias of `lithology`.
#[derive(Debug, Clone, Deserialize)]
pub struct LayerInput {
    pub name: String,
    #[serde(default)]
    pub age: Option<AgeInput>,
    #[serde(default)]
    pub thickness: f64,
    #[serde(default, alias = "type")]
    pub lithology: Option<String>,
}

impl LayerInput {
    pub fn into_layer(self) -> Result<StratigraphicLayer> {
        if !self.thickness.is_finite() || self.thickness < 0.0 {
            bail!(
                "layer {:?}: thickness must be a non-negative number, got {}",
                self.name,
                self.thickness
            );
        }
        Ok(StratigraphicLayer {
            name: self.name,
            age: self.age.map(|a| match a {
                AgeInput::Ma(v) => Age::Ma(v),
                AgeInput::Text(t) => Age::parse(&t),
            }),
            thickness: self.thickness,
            lithology: self.lithology.filter(|l| !l.trim().is_empty()),
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LayerRecord {
    pub layer_name: String,
    pub age: Option<String>,
    pub age_ma: Option<f64>,
    pub thickness: f64,
    pub lithology: Option<String>,
    pub description: String,
}

impl From<&LayerDescription> for LayerRecord {
    fn from(l: &LayerDescription) -> Self {
        Self {
            layer_name: l.name.clone(),
            age: l.age.as_ref().map(|a| match a {
                Age::Ma(v) => v.to_string(),
                Age::Label(s) => s.clone(),
            }),
            age_ma: l.age.as_ref().and_then(Age::ma),
            thickness: l.thickness,
            lithology: l.lithology.clone(),
            description: l.description.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    pub total_layers: usize,
    pub total_thickness: f64,
    pub thickness_by_lithology: BTreeMap<String, f64>,
    pub summary: String,
    pub layers: Vec<LayerRecord>,
}

impl SummaryRecord {
    pub fn new(s: &StratigraphicSummary, project: Option<&str>) -> Self {
        Self {
            project_id: project.map(str::to_string),
            total_layers: s.total_layers,
            total_thickness: s.total_thickness,
            thickness_by_lithology: s.thickness_by_lithology.clone(),
            summary: s.headline(),
            layers: s.layers.iter().map(LayerRecord::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geoplane::prelude::*;
    use serde_json::json;

    #[test]
    fn orientation_record_is_rounded() {
        let o = compute_orientation(&[
            point![0.0, 0.0, 100.0],
            point![10.0, 0.0, 120.0],
            point![0.0, 10.0, 110.0],
        ])
        .unwrap();
        let v = serde_json::to_value(OrientationRecord::new(&o, Some("demo"))).unwrap();
        assert_eq!(v["dip"], json!(65.91));
        assert_eq!(v["project_id"], "demo");
        assert_eq!(v["normal_vector"]["x"], json!(-200.0));
    }

    #[test]
    fn batch_record_flattens_orientation() {
        let rows = [
            RawPoint::new(Some("0"), Some("0"), Some("0")),
            RawPoint::new(Some("0"), Some("0"), Some("10")),
            RawPoint::new(Some("10"), Some("0"), Some("0")),
        ];
        let triples = compute_batch_triples(&rows).unwrap();
        let v = serde_json::to_value(BatchRecord::new(0, &triples[0], None)).unwrap();
        assert_eq!(v["dip"], json!(90.0));
        assert_eq!(v["points"][1], json!([0.0, 0.0, 10.0]));
        assert!(v.get("project_id").is_none());
    }

    #[test]
    fn layer_input_accepts_type_alias_and_numeric_age() {
        let raw = json!([
            {"name": "A", "age": "Jurassic", "thickness": 100, "type": "Sandstone"},
            {"name": "B", "age": 12.5, "thickness": 150.0, "lithology": "Limestone"},
            {"name": "C"}
        ]);
        let inputs: Vec<LayerInput> = serde_json::from_value(raw).unwrap();
        let layers: Vec<StratigraphicLayer> = inputs
            .into_iter()
            .map(|l| l.into_layer().unwrap())
            .collect();
        assert_eq!(layers[0].lithology.as_deref(), Some("Sandstone"));
        assert_eq!(layers[1].age, Some(Age::Ma(12.5)));
        assert_eq!(layers[2].thickness, 0.0);
        assert!(layers[2].age.is_none());
    }

    #[test]
    fn negative_thickness_is_rejected() {
        let input: LayerInput =
            serde_json::from_value(json!({"name": "bad", "thickness": -1})).unwrap();
        assert!(input.into_layer().is_err());
    }
}
