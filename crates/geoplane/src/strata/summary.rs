use std::collections::BTreeMap;

use super::types::{Age, AgeKey, StratigraphicLayer};
use crate::cfg::UNKNOWN_LITHOLOGY;

/// One ordered entry of the column with a readable one-liner.
#[derive(Clone, Debug, PartialEq)]
pub struct LayerDescription {
    pub name: String,
    pub age: Option<Age>,
    pub thickness: f64,
    pub lithology: Option<String>,
    pub description: String,
}

/// Totals and ordering of a stratigraphic column.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StratigraphicSummary {
    pub total_layers: usize,
    pub total_thickness: f64,
    pub thickness_by_lithology: BTreeMap<String, f64>,
    /// Youngest first; undated layers last.
    pub layers: Vec<LayerDescription>,
}

impl StratigraphicSummary {
    /// Lithology with the largest total thickness (first by name on ties).
    pub fn dominant_lithology(&self) -> Option<(&str, f64)> {
        self.thickness_by_lithology
            .iter()
            .fold(None, |best: Option<(&str, f64)>, (k, &v)| match best {
                Some((_, bv)) if bv >= v => best,
                _ => Some((k.as_str(), v)),
            })
    }

    /// One-line text summary of the column.
    pub fn headline(&self) -> String {
        match self.dominant_lithology() {
            Some((lith, t)) => format!(
                "{} layers, {} total thickness; thickest lithology {} ({})",
                self.total_layers, self.total_thickness, lith, t
            ),
            None => "empty column".to_string(),
        }
    }
}

fn describe(layer: &StratigraphicLayer) -> String {
    let lith = layer.lithology.as_deref().unwrap_or("unspecified lithology");
    match &layer.age {
        Some(age) => format!("{}: {}, {} thick, {}", layer.name, lith, layer.thickness, age),
        None => format!("{}: {}, {} thick, undated", layer.name, lith, layer.thickness),
    }
}

/// Summarize a column: order by age, total thickness, thickness per lithology.
///
/// Pre: thicknesses are non-negative (the CLI rejects negative input).
/// Post: thicknesses are summed as given, without validation; empty input
/// yields an all-zero summary.
pub fn summarize_stratigraphy(layers: &[StratigraphicLayer]) -> StratigraphicSummary {
    let mut ordered: Vec<&StratigraphicLayer> = layers.iter().collect();
    // `sort_by` is stable: equal keys keep input order.
    ordered.sort_by(|a, b| AgeKey::of(a.age.as_ref()).compare(&AgeKey::of(b.age.as_ref())));

    let mut by_lith: BTreeMap<String, f64> = BTreeMap::new();
    let mut total = 0.0;
    for layer in &ordered {
        total += layer.thickness;
        let key = layer.lithology.as_deref().unwrap_or(UNKNOWN_LITHOLOGY);
        *by_lith.entry(key.to_string()).or_insert(0.0) += layer.thickness;
    }

    StratigraphicSummary {
        total_layers: ordered.len(),
        total_thickness: total,
        thickness_by_lithology: by_lith,
        layers: ordered
            .into_iter()
            .map(|l| LayerDescription {
                name: l.name.clone(),
                age: l.age.clone(),
                thickness: l.thickness,
                lithology: l.lithology.clone(),
                description: describe(l),
            })
            .collect(),
    }
}
