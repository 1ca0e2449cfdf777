use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use geoplane::Point3D;
use serde::Serialize;
use tracing_subscriber::fmt::SubscriberBuilder;

mod commands;
mod provenance;
mod records;
mod tabular;

use commands::{parse_azimuth, parse_point};
use tabular::Format;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Three-point strike/dip, section correction and stratigraphic summaries")]
struct Cmd {
    /// Optional project id; propagated to outputs and logs
    #[arg(long, global = true)]
    project: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Strike, dip and dip direction of the plane through three points
    Orient {
        /// Survey point as x,y,z; pass exactly three times
        #[arg(long = "point", required = true, allow_hyphen_values = true, value_parser = parse_point)]
        points: Vec<Point3D>,
    },
    /// Apparent dip of the plane in a vertical section
    Section {
        #[arg(long = "point", required = true, allow_hyphen_values = true, value_parser = parse_point)]
        points: Vec<Point3D>,
        /// Section bearing in degrees
        #[arg(long, allow_hyphen_values = true, value_parser = parse_azimuth)]
        azimuth: f64,
    },
    /// Orientation per consecutive triple of a CSV with x,y,z columns
    Batch {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Defaults to the extension of --out
        #[arg(long, value_enum)]
        format: Option<Format>,
    },
    /// Summarize a stratigraphic column given as a JSON layer list
    Strata {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let project = cmd.project.as_deref();
    match cmd.action {
        Action::Orient { points } => print_json(&commands::orient(&points, project)?),
        Action::Section { points, azimuth } => {
            print_json(&commands::section(&points, azimuth, project)?)
        }
        Action::Batch { input, out, format } => {
            let stats = commands::batch(&input, &out, format, project)?;
            print_json(&serde_json::json!({
                "rows": stats.rows,
                "triples": stats.triples,
                "out": out.to_string_lossy(),
            }))
        }
        Action::Strata { input, out } => {
            print_json(&commands::strata(&input, out.as_deref(), project)?)
        }
        Action::Report => print_json(&provenance::provenance_doc(project)),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
