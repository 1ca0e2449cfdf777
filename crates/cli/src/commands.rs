//! Subcommand bodies. `main` only parses arguments and prints.

use std::path::Path;

use anyhow::{Context, Result};
use geoplane::batch::{compute_batch_triples, RawPoint};
use geoplane::strata::{summarize_stratigraphy, StratigraphicLayer};
use geoplane::{compute_orientation, compute_section, Point3D};
use serde_json::json;

use crate::provenance::{write_sidecar, Payload};
use crate::records::{BatchRecord, LayerInput, OrientationRecord, SectionRecord, SummaryRecord};
use crate::tabular::{read_point_cells, write_records, Format};

fn finite(v: &str) -> Result<f64, String> {
    v.trim()
        .parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
        .ok_or_else(|| format!("not a finite number: {v:?}"))
}

/// Parse `x,y,z` (whitespace around numbers allowed).
pub fn parse_point(s: &str) -> Result<Point3D, String> {
    let parts: Vec<&str> = s.split(',').collect();
    let [x, y, z] = parts.as_slice() else {
        return Err(format!("expected x,y,z but got {s:?}"));
    };
    Ok(Point3D::new(finite(x)?, finite(y)?, finite(z)?))
}

/// Parse a section bearing in degrees; NaN and infinities are rejected.
pub fn parse_azimuth(s: &str) -> Result<f64, String> {
    finite(s)
}

pub fn orient(points: &[Point3D], project: Option<&str>) -> Result<OrientationRecord> {
    let o = compute_orientation(points)?;
    tracing::info!(strike = o.strike, dip = o.dip, "orient");
    Ok(OrientationRecord::new(&o, project))
}

pub fn section(points: &[Point3D], azimuth: f64, project: Option<&str>) -> Result<SectionRecord> {
    let o = compute_orientation(points)?;
    let s = compute_section(&o, azimuth);
    tracing::info!(azimuth, apparent_dip = s.apparent_dip, "section");
    Ok(SectionRecord::new(&s, project))
}

/// Counts reported after a batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchStats {
    pub rows: usize,
    pub triples: usize,
}

pub fn batch(
    input: &Path,
    out: &Path,
    format: Option<Format>,
    project: Option<&str>,
) -> Result<BatchStats> {
    let format = Format::resolve(format, out)?;
    let cells = read_point_cells(input)?;
    let rows: Vec<RawPoint<'_>> = cells
        .iter()
        .map(|[x, y, z]| RawPoint::new(x.as_deref(), y.as_deref(), z.as_deref()))
        .collect();
    let triples = compute_batch_triples(&rows)
        .with_context(|| format!("processing {}", input.display()))?;
    let records: Vec<BatchRecord> = triples
        .iter()
        .enumerate()
        .map(|(i, t)| BatchRecord::new(i, t, project))
        .collect();
    write_records(&records, out, format)?;

    let stats = BatchStats {
        rows: rows.len(),
        triples: records.len(),
    };
    tracing::info!(
        input = %input.display(),
        out = %out.display(),
        rows = stats.rows,
        triples = stats.triples,
        "batch"
    );
    write_sidecar(
        out,
        Payload::new(
            "batch",
            project.map(str::to_string),
            json!({
                "input": input.to_string_lossy(),
                "format": format!("{format:?}").to_lowercase(),
                "rows": stats.rows,
                "triples": stats.triples,
            }),
        ),
    )?;
    Ok(stats)
}

pub fn load_layers(input: &Path) -> Result<Vec<StratigraphicLayer>> {
    let bytes = std::fs::read(input).with_context(|| format!("reading {}", input.display()))?;
    let raw: Vec<LayerInput> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing layers from {}", input.display()))?;
    raw.into_iter().map(LayerInput::into_layer).collect()
}

pub fn strata(input: &Path, out: Option<&Path>, project: Option<&str>) -> Result<SummaryRecord> {
    let layers = load_layers(input)?;
    let summary = summarize_stratigraphy(&layers);
    tracing::info!(
        layers = summary.total_layers,
        total_thickness = summary.total_thickness,
        "strata"
    );
    let record = SummaryRecord::new(&summary, project);
    if let Some(out) = out {
        std::fs::write(out, serde_json::to_vec_pretty(&record)?)
            .with_context(|| format!("writing {}", out.display()))?;
        write_sidecar(
            out,
            Payload::new(
                "strata",
                project.map(str::to_string),
                json!({ "input": input.to_string_lossy(), "layers": summary.total_layers }),
            ),
        )?;
    }
    Ok(record)
}
