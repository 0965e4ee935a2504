//! Chanstruct CLI — run the structural decomposition over a bar file.
//!
//! Commands:
//! - `analyze` — read OHLC bars from CSV, run the full pipeline, and write
//!   the structure document as JSON

use anyhow::{bail, Context, Result};
use chrono::{DateTime, TimeZone, Utc};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use chanstruct_core::domain::Bar;
use chanstruct_core::{Analyzer, AnalyzerConfig, StructureDocument};

#[derive(Parser)]
#[command(
    name = "chanstruct",
    about = "Chanstruct CLI — market structure decomposition"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read bars from CSV, run the pipeline, and write the structure document.
    Analyze {
        /// Input CSV with columns: timestamp (epoch ms), open, high, low, close.
        #[arg(long)]
        input: PathBuf,

        /// Optional TOML config overriding the default thresholds.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output path for the structure document JSON. Defaults to stdout.
        #[arg(long)]
        output: Option<PathBuf>,

        /// Pretty-print the JSON output.
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },
}

/// One CSV row. Timestamps are epoch milliseconds, UTC.
#[derive(Debug, Deserialize)]
struct BarRecord {
    timestamp: i64,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            input,
            config,
            output,
            pretty,
        } => run_analyze(&input, config.as_deref(), output.as_deref(), pretty),
    }
}

fn run_analyze(
    input: &Path,
    config_path: Option<&Path>,
    output: Option<&Path>,
    pretty: bool,
) -> Result<()> {
    let config = match config_path {
        Some(path) => load_config(path)?,
        None => AnalyzerConfig::default(),
    };

    let bars = read_bars(input)?;
    println!("Loaded {} bars from {}", bars.len(), input.display());

    let analyzer = Analyzer::new(config)?;
    let analysis = analyzer.analyze(&bars)?;

    print_summary(&analysis);

    let document = StructureDocument::from_analysis(&analysis);
    let json = if pretty {
        serde_json::to_string_pretty(&document)?
    } else {
        serde_json::to_string(&document)?
    };

    match output {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Structure document written to {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}

fn load_config(path: &Path) -> Result<AnalyzerConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: AnalyzerConfig =
        toml::from_str(&text).with_context(|| format!("invalid config {}", path.display()))?;
    Ok(config)
}

fn read_bars(path: &Path) -> Result<Vec<Bar>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let mut bars = Vec::new();
    for (i, record) in reader.deserialize::<BarRecord>().enumerate() {
        let record = record.with_context(|| format!("bad CSV record at row {}", i + 1))?;
        let timestamp = parse_timestamp(record.timestamp)
            .with_context(|| format!("bad timestamp at row {}", i + 1))?;
        bars.push(Bar {
            timestamp,
            open: record.open,
            high: record.high,
            low: record.low,
            close: record.close,
        });
    }
    Ok(bars)
}

fn parse_timestamp(millis: i64) -> Result<DateTime<Utc>> {
    match Utc.timestamp_millis_opt(millis).single() {
        Some(ts) => Ok(ts),
        None => bail!("{millis} is not a valid epoch-millisecond timestamp"),
    }
}

fn print_summary(analysis: &chanstruct_core::Analysis) {
    println!(
        "Structures: {} fractals, {} strokes, {} segments",
        analysis.fractals().len(),
        analysis.strokes().len(),
        analysis.segments().len()
    );
    println!(
        "Pivots: {} stroke-level, {} segment-level",
        analysis.stroke_pivots().len(),
        analysis.segment_pivots().len()
    );

    let stroke_signals: usize = analysis.strokes().iter().map(|s| s.markers.len()).sum();
    let segment_signals: usize = analysis.segments().iter().map(|s| s.markers.len()).sum();
    let divergences: usize = analysis
        .strokes()
        .iter()
        .map(|s| s.divergences.len())
        .sum::<usize>()
        + analysis
            .segments()
            .iter()
            .map(|s| s.divergences.len())
            .sum::<usize>();
    println!(
        "Signals: {} turning points ({} on strokes, {} on segments), {} divergences",
        stroke_signals + segment_signals,
        stroke_signals,
        segment_signals,
        divergences
    );
}
