//! CSV/Parquet/JSON plumbing for batch input and output.

use std::fs::File;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use clap::ValueEnum;
use polars::prelude::*;

use crate::records::BatchRecord;

/// Output encodings for batch results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Csv,
    Parquet,
}

impl Format {
    /// Explicit choice wins; otherwise the output extension decides.
    pub fn resolve(explicit: Option<Format>, out: &Path) -> Result<Format> {
        if let Some(f) = explicit {
            return Ok(f);
        }
        match out.extension().and_then(|e| e.to_str()) {
            Some(e) if e.eq_ignore_ascii_case("json") => Ok(Format::Json),
            Some(e) if e.eq_ignore_ascii_case("csv") => Ok(Format::Csv),
            Some(e) if e.eq_ignore_ascii_case("parquet") => Ok(Format::Parquet),
            _ => bail!(
                "cannot infer output format from {}; pass --format json|csv|parquet",
                out.display()
            ),
        }
    }
}

/// Raw text cells of the `x`, `y`, `z` columns, one entry per data row.
pub type PointCells = Vec<[Option<String>; 3]>;

/// Read the coordinate columns of a CSV file as text.
///
/// Every column is read as a string so that missing cells stay `None` and
/// malformed numbers reach the core parser untouched.
pub fn read_point_cells(path: &Path) -> Result<PointCells> {
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
    if !is_csv {
        bail!("only CSV files are accepted: {}", path.display());
    }
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;

    let column = |name: &str| -> Result<Vec<Option<String>>> {
        let col = df
            .column(name)
            .map_err(|_| anyhow!("CSV must have x, y, z columns (missing `{name}`)"))?;
        Ok(col
            .str()?
            .into_iter()
            .map(|v| v.map(str::to_string))
            .collect())
    };
    let (xs, ys, zs) = (column("x")?, column("y")?, column("z")?);
    Ok(xs
        .into_iter()
        .zip(ys)
        .zip(zs)
        .map(|((x, y), z)| [x, y, z])
        .collect())
}

fn records_frame(records: &[BatchRecord]) -> PolarsResult<DataFrame> {
    let pick = |f: fn(&BatchRecord) -> f64| -> Vec<f64> { records.iter().map(f).collect() };
    let mut df = df!(
        "index" => records.iter().map(|r| r.index as u64).collect::<Vec<_>>(),
        "strike" => pick(|r| r.orientation.strike),
        "dip" => pick(|r| r.orientation.dip),
        "dip_direction" => pick(|r| r.orientation.dip_direction),
        "dip_towards" => pick(|r| r.orientation.dip_towards),
        "normal_x" => pick(|r| r.orientation.normal_vector.x),
        "normal_y" => pick(|r| r.orientation.normal_vector.y),
        "normal_z" => pick(|r| r.orientation.normal_vector.z)
    )?;
    for (k, p) in ["1", "2", "3"].iter().enumerate() {
        for (axis, name) in ["x", "y", "z"].iter().enumerate() {
            let values: Vec<f64> = records.iter().map(|r| r.points[k][axis]).collect();
            let column = format!("{name}{p}");
            df.with_column(Series::new(column.as_str().into(), values))?;
        }
    }
    let project: Vec<Option<String>> = records
        .iter()
        .map(|r| r.orientation.project_id.clone())
        .collect();
    df.with_column(Series::new("project_id".into(), project))?;
    Ok(df)
}

/// Write batch records to `out` in `format`.
pub fn write_records(records: &[BatchRecord], out: &Path, format: Format) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    match format {
        Format::Json => {
            std::fs::write(out, serde_json::to_vec_pretty(records)?)
                .with_context(|| format!("writing {}", out.display()))?;
        }
        Format::Csv | Format::Parquet => {
            let mut df = records_frame(records)?;
            let mut file =
                File::create(out).with_context(|| format!("creating {}", out.display()))?;
            if format == Format::Csv {
                CsvWriter::new(&mut file)
                    .include_header(true)
                    .finish(&mut df)?;
            } else {
                ParquetWriter::new(&mut file).finish(&mut df)?;
            }
        }
    }
    Ok(())
}
