//! numscope - Duplicate, gap, membership and summary analysis for binary integer datasets.
//!
//! Usage:
//!   numscope [PATH]              Analyze a dataset (default: data.bin, created if missing)
//!   numscope generate [PATH]     Write a synthetic dataset
//!   numscope --help              Show help

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Result, WrapErr, bail};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::EnvFilter;

use numscope_analyze::{
    AnalysisKind, AnalysisPipeline, DuplicateConfig, MissingConfig, PipelineConfig,
};
use numscope_load::{
    BinaryLoader, BinaryWriter, Dataset, Framing, LoadConfig, SyntheticConfig,
    SyntheticGenerator,
};

#[derive(Parser)]
#[command(
    name = "numscope",
    version,
    about = "Analyze binary integer datasets",
    long_about = "numscope loads a file of little-endian 32-bit integers and reports \
                  duplicates, missing values, random search hits and summary statistics.\n\n\
                  Run `numscope [PATH]` to analyze a file (a synthetic one is created if it \
                  does not exist), or `numscope generate` to write a new dataset."
)]
struct Cli {
    /// Dataset file to analyze
    #[arg(default_value = "data.bin")]
    path: PathBuf,

    /// File has no count header; the element count is the file length / 4
    #[arg(long)]
    raw: bool,

    /// Fail instead of generating a synthetic dataset when the file is missing
    #[arg(long)]
    no_create: bool,

    /// Only run these analyses (comma separated)
    #[arg(long, value_delimiter = ',')]
    only: Vec<AnalysisKind>,

    /// Seed for the random search probes (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Most missing or duplicated values to list in text output (0 = all)
    #[arg(long, default_value = "20")]
    max_listed: usize,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Write a synthetic dataset file
    Generate {
        /// Output path
        #[arg(default_value = "data.bin")]
        path: PathBuf,

        /// Number of values
        #[arg(short = 'n', long, default_value = "200")]
        count: usize,

        /// Smallest value (inclusive)
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        min: i32,

        /// Largest value (inclusive)
        #[arg(long, default_value = "999", allow_negative_numbers = true)]
        max: i32,

        /// Write without a count header
        #[arg(long)]
        raw: bool,

        /// Seed for the generator (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Command::Generate {
            path,
            count,
            min,
            max,
            raw,
            seed,
        }) => {
            run_generate(&path, count, min, max, framing(raw), seed)?;
        }
        None => {
            run_analyze(
                &cli.path,
                &cli.only,
                framing(cli.raw),
                !cli.no_create,
                cli.seed,
                cli.max_listed,
                cli.format,
            )?;
        }
    }

    Ok(())
}

/// Install a stderr subscriber so stdout carries only reports.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn framing(raw: bool) -> Framing {
    if raw { Framing::Raw } else { Framing::Counted }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Load `config`, refusing a dataset with nothing to analyze.
fn load_dataset<R: Rng>(config: &LoadConfig, rng: &mut R) -> Result<Dataset> {
    let dataset = BinaryLoader::new()
        .load_with_rng(config, rng)
        .wrap_err_with(|| format!("Failed to load {}", config.path.display()))?;

    if dataset.is_empty() {
        bail!("No valid data to analyze.");
    }
    Ok(dataset)
}

/// Analyses to run, with value listings capped at `max_listed` (0 = no cap).
fn pipeline_config(only: &[AnalysisKind], max_listed: usize) -> Result<PipelineConfig> {
    let kinds = if only.is_empty() {
        AnalysisKind::all()
    } else {
        only.to_vec()
    };

    let config = PipelineConfig::builder()
        .kinds(kinds)
        .duplicates(DuplicateConfig { max_listed })
        .missing(MissingConfig { max_listed })
        .build()
        .wrap_err("Invalid analysis configuration")?;
    Ok(config)
}

/// Load a dataset and run the selected analyses.
fn run_analyze(
    path: &Path,
    only: &[AnalysisKind],
    framing: Framing,
    create_if_missing: bool,
    seed: Option<u64>,
    max_listed: usize,
    format: OutputFormat,
) -> Result<()> {
    let load_config = LoadConfig::builder()
        .path(path)
        .framing(framing)
        .create_if_missing(create_if_missing)
        .build()
        .wrap_err("Invalid load configuration")?;

    let mut rng = make_rng(seed);
    let dataset = load_dataset(&load_config, &mut rng)?;

    let pipeline_config = pipeline_config(only, max_listed)?;
    tracing::debug!(
        kinds = ?pipeline_config.kinds,
        values = dataset.len(),
        max_listed,
        "running analyses"
    );

    let reports = AnalysisPipeline::from_config(&dataset, rng, &pipeline_config).run();

    match format {
        OutputFormat::Text => {
            println!();
            println!("{}", "─".repeat(60));
            println!(" {} - {} values", path.display(), dataset.len());
            println!("{}", "─".repeat(60));
            println!();

            for report in &reports {
                println!("{}:", report.kind().label());
                println!("{report}");
                println!();
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "path": path,
                "values": dataset.len(),
                "reports": reports,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

/// Write a synthetic dataset.
fn run_generate(
    path: &Path,
    count: usize,
    min: i32,
    max: i32,
    framing: Framing,
    seed: Option<u64>,
) -> Result<()> {
    let config = SyntheticConfig::builder()
        .count(count)
        .min(min)
        .max(max)
        .build()
        .wrap_err("Invalid value range")?;

    let values = SyntheticGenerator::new(config)
        .generate(&mut make_rng(seed))
        .wrap_err("Failed to generate values")?;
    BinaryWriter::new(framing)
        .write(path, &values)
        .wrap_err_with(|| format!("Failed to write {}", path.display()))?;

    eprintln!("Wrote {} values to {}", values.len(), path.display());
    Ok(())
}
