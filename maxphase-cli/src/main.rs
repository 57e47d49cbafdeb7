use clap::Parser;
use maxphase::{
    ImageGeometry, MaxFinder, MaxPhaseOptimizer, OptimizerConfig, OptimizerResult, OwnedSurface,
    ParallelMaxFinder, PeakInterpolation, TopNMaxFinder,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "MaxPhase CLI (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print the JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output for the optimizer stages.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct OptimizerConfigJson {
    interpolation: String,
    zero_suppression: f64,
    offset_count: usize,
    parallel: bool,
}

impl Default for OptimizerConfigJson {
    fn default() -> Self {
        let cfg = OptimizerConfig::default();
        Self {
            interpolation: cfg.interpolation.to_string(),
            zero_suppression: cfg.zero_suppression,
            offset_count: cfg.offset_count,
            parallel: false,
        }
    }
}

impl OptimizerConfigJson {
    fn to_config(&self) -> Result<OptimizerConfig, Box<dyn std::error::Error>> {
        let interpolation: PeakInterpolation = self.interpolation.parse()?;
        let cfg = OptimizerConfig {
            interpolation,
            zero_suppression: self.zero_suppression,
            offset_count: self.offset_count,
        };
        cfg.validate()?;
        Ok(cfg)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Config {
    surface_path: String,
    fixed_origin: Option<Vec<f64>>,
    moving_origin: Option<Vec<f64>>,
    output_path: Option<String>,
    optimizer: OptimizerConfigJson,
}

#[derive(Debug, Deserialize)]
struct SurfaceJson {
    size: Vec<usize>,
    data: Vec<f64>,
    spacing: Option<Vec<f64>>,
    origin: Option<Vec<f64>>,
    index_origin: Option<Vec<isize>>,
}

impl SurfaceJson {
    fn into_surface(self) -> Result<OwnedSurface<f64>, Box<dyn std::error::Error>> {
        let mut surface = OwnedSurface::new(self.data, &self.size)?;
        if let Some(spacing) = self.spacing {
            surface = surface.with_spacing(&spacing)?;
        }
        if let Some(origin) = self.origin {
            surface = surface.with_origin(&origin)?;
        }
        if let Some(index_origin) = self.index_origin {
            surface = surface.with_index_origin(&index_origin)?;
        }
        Ok(surface)
    }
}

#[derive(Debug, Serialize)]
struct PeakRecord {
    offset: Vec<f64>,
    location: Vec<f64>,
    index: Vec<isize>,
    value: f64,
}

#[derive(Debug, Serialize)]
struct Output {
    best: Option<Vec<f64>>,
    requested: usize,
    shortened: bool,
    peaks: Vec<PeakRecord>,
}

impl From<OptimizerResult> for Output {
    fn from(result: OptimizerResult) -> Self {
        let best = result.best().map(<[f64]>::to_vec);
        let requested = result.requested;
        let shortened = result.is_shortened();
        let peaks = result
            .offsets
            .into_iter()
            .zip(result.peaks)
            .map(|(offset, peak)| PeakRecord {
                offset,
                location: peak.location,
                index: peak.index,
                value: peak.value,
            })
            .collect();
        Self {
            best,
            requested,
            shortened,
            peaks,
        }
    }
}

fn run<F: MaxFinder<f64>>(
    finder: F,
    cfg: OptimizerConfig,
    surface: &OwnedSurface<f64>,
    fixed: &ImageGeometry,
    moving: &ImageGeometry,
) -> Result<OptimizerResult, Box<dyn std::error::Error>> {
    let optimizer = MaxPhaseOptimizer::with_finder(finder).with_config(cfg)?;
    let view = surface.view();
    Ok(optimizer.compute_offsets(Some(&view), fixed, moving)?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("maxphase=info".parse()?))
            .with_target(false)
            .init();
    }

    if cli.print_schema {
        println!("{SCHEMA_JSON}");
        return Ok(());
    }
    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;
    if config.surface_path.is_empty() {
        return Err("surface_path must be set in the config".into());
    }
    let cfg = config.optimizer.to_config()?;

    let surface_text = fs::read_to_string(&config.surface_path)?;
    let surface = serde_json::from_str::<SurfaceJson>(&surface_text)?.into_surface()?;
    let dims = surface.size().len();
    let fixed = ImageGeometry::new(config.fixed_origin.unwrap_or_else(|| vec![0.0; dims]));
    let moving = ImageGeometry::new(config.moving_origin.unwrap_or_else(|| vec![0.0; dims]));

    let result = if config.optimizer.parallel {
        run(ParallelMaxFinder, cfg, &surface, &fixed, &moving)?
    } else {
        run(TopNMaxFinder, cfg, &surface, &fixed, &moving)?
    };

    let json = serde_json::to_string_pretty(&Output::from(result))?;
    match config.output_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
