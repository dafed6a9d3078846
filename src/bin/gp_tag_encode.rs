//! CLI front end for the GP-Tag encoder: a thin wrapper that parses flags or a batch TOML file
//! into [`gp_tag_encoder::GpTagParams`], calls [`gp_tag_encoder::encode`], and writes the
//! resulting image as a PNG.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use gp_tag_encoder::error::{GpTagError, GpTagResult};
use gp_tag_encoder::{convert, encode, GpTagParams};
use log::{debug, error};
use serde::Deserialize;

/// Generates GP-Tag fiducial markers encoding geospatial pose data.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Latitude in degrees, -90 to 90.
    #[arg(long)]
    lat: Option<f64>,
    /// Longitude in degrees, -180 to 180.
    #[arg(long)]
    lon: Option<f64>,
    /// Altitude in meters, -10000 to 10000.
    #[arg(long)]
    alt: Option<f64>,
    /// Orientation quaternion x component, -1 to 1.
    #[arg(long)]
    qx: Option<f64>,
    /// Orientation quaternion y component, -1 to 1.
    #[arg(long)]
    qy: Option<f64>,
    /// Orientation quaternion z component, -1 to 1.
    #[arg(long)]
    qz: Option<f64>,
    /// Orientation quaternion w component, -1 to 1.
    #[arg(long)]
    qw: Option<f64>,
    /// Position accuracy level, 0 to 3.
    #[arg(long)]
    accuracy: Option<u32>,
    /// Tag identifier, 0 to 4095.
    #[arg(long = "tag-id")]
    tag_id: Option<u32>,
    /// Format version identifier, 0 to 15.
    #[arg(long)]
    version: Option<u32>,
    /// Base unit size in pixels per module.
    #[arg(long)]
    u: Option<u32>,

    /// Physical scale in cells per millimeter. Mutually exclusive with `--dpi`/`--size-mm`.
    #[arg(long)]
    scale: Option<f64>,
    /// Target printer resolution in dots per inch, used with `--u` or `--size-mm` to derive scale.
    #[arg(long)]
    dpi: Option<f64>,
    /// Desired physical tag size in millimeters, used with `--dpi` to derive `U` and scale.
    #[arg(long = "size-mm")]
    size_mm: Option<f64>,

    /// Output PNG path for a single tag.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Path to a TOML file describing a batch of tags to encode.
    #[arg(long)]
    batch: Option<PathBuf>,

    /// Raise the log level to show per-stage progress.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Deserialize)]
struct BatchFile {
    #[serde(rename = "tag")]
    tags: Vec<BatchEntry>,
}

#[derive(Deserialize)]
struct BatchEntry {
    lat: f64,
    lon: f64,
    alt: f64,
    qx: f64,
    qy: f64,
    qz: f64,
    qw: f64,
    accuracy: u32,
    tag_id: u32,
    version: u32,
    #[serde(default)]
    u: Option<u32>,
    scale: Option<f64>,
    dpi: Option<f64>,
    size_mm: Option<f64>,
    output: PathBuf,
}

impl BatchEntry {
    fn into_params(self) -> GpTagResult<GpTagParams> {
        let (unit, scale) = resolve_unit_and_scale(self.u, self.scale, self.dpi, self.size_mm)?;
        Ok(GpTagParams::builder()
            .latitude(self.lat)
            .longitude(self.lon)
            .altitude(self.alt)
            .quaternion(self.qx, self.qy, self.qz, self.qw)
            .scale(scale)
            .accuracy(self.accuracy)
            .tag_id(self.tag_id)
            .version_id(self.version)
            .unit(unit)
            .build())
    }
}

/// Resolves `(U, scale)` from whichever combination of `--scale`, `--dpi`, `--size-mm`, and `--u`
/// the caller supplied.
fn resolve_unit_and_scale(
    u: Option<u32>,
    scale: Option<f64>,
    dpi: Option<f64>,
    size_mm: Option<f64>,
) -> GpTagResult<(u32, f64)> {
    match (scale, dpi, size_mm, u) {
        (Some(scale), None, None, Some(u)) => Ok((u, scale)),
        (Some(_), Some(_), _, _) | (Some(_), _, Some(_), _) => Err(GpTagError::Config(
            "--scale cannot be combined with --dpi or --size-mm".into(),
        )),
        (None, Some(dpi), None, Some(u)) => Ok((u, convert::scale_from_dpi_and_u(dpi, u))),
        (None, Some(dpi), Some(size_mm), None) => {
            Ok(convert::u_and_scale_from_dpi_and_size(dpi, size_mm))
        }
        _ => Err(GpTagError::Config(
            "specify --scale and --u, or --dpi with --u or --size-mm".into(),
        )),
    }
}

fn run_single(cli: &Cli) -> GpTagResult<()> {
    let (unit, scale) = resolve_unit_and_scale(cli.u, cli.scale, cli.dpi, cli.size_mm)?;
    let output = cli
        .output
        .clone()
        .ok_or_else(|| GpTagError::Config("--output is required".into()))?;

    let params = GpTagParams::builder()
        .latitude(cli.lat.ok_or_else(|| GpTagError::Config("--lat is required".into()))?)
        .longitude(cli.lon.ok_or_else(|| GpTagError::Config("--lon is required".into()))?)
        .altitude(cli.alt.ok_or_else(|| GpTagError::Config("--alt is required".into()))?)
        .quaternion(
            cli.qx.ok_or_else(|| GpTagError::Config("--qx is required".into()))?,
            cli.qy.ok_or_else(|| GpTagError::Config("--qy is required".into()))?,
            cli.qz.ok_or_else(|| GpTagError::Config("--qz is required".into()))?,
            cli.qw.ok_or_else(|| GpTagError::Config("--qw is required".into()))?,
        )
        .scale(scale)
        .accuracy(cli.accuracy.ok_or_else(|| GpTagError::Config("--accuracy is required".into()))?)
        .tag_id(cli.tag_id.ok_or_else(|| GpTagError::Config("--tag-id is required".into()))?)
        .version_id(cli.version.ok_or_else(|| GpTagError::Config("--version is required".into()))?)
        .unit(unit)
        .build();

    encode_and_write(&params, &output)
}

fn encode_and_write(params: &GpTagParams, output: &PathBuf) -> GpTagResult<()> {
    debug!("quantizing and packing fields for {output:?}");
    let image = encode(params)?;
    debug!("rasterized {}x{} image, writing to {output:?}", image.width(), image.height());
    image
        .save(output)
        .map_err(|e| GpTagError::ImageWrite(e.to_string()))?;
    Ok(())
}

fn run_batch(path: &PathBuf, verbose: bool) -> GpTagResult<usize> {
    let raw = std::fs::read_to_string(path)?;
    let batch: BatchFile =
        toml::from_str(&raw).map_err(|e| GpTagError::Config(format!("invalid batch file: {e}")))?;

    use rayon::prelude::*;
    let failures: usize = batch
        .tags
        .into_par_iter()
        .map(|entry| {
            let output = entry.output.clone();
            let result = entry.into_params().and_then(|params| encode_and_write(&params, &output));
            if let Err(err) = &result {
                error!("failed to encode {output:?}: {err}");
            } else if verbose {
                debug!("encoded {output:?}");
            }
            result.is_err() as usize
        })
        .sum();
    Ok(failures)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { log::LevelFilter::Debug } else { log::LevelFilter::Info };
    env_logger::Builder::new().filter_level(level).init();

    let result = if let Some(batch_path) = &cli.batch {
        run_batch(batch_path, cli.verbose).map(|failures| {
            if failures > 0 {
                error!("{failures} of the batch's tags failed to encode");
            }
        })
    } else {
        run_single(&cli)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err @ GpTagError::Config(_)) => {
            error!("{err}");
            ExitCode::from(2)
        }
        Err(err @ GpTagError::Encode(_)) => {
            error!("{err}");
            ExitCode::from(2)
        }
        Err(err) => {
            error!("{err}");
            ExitCode::from(1)
        }
    }
}
