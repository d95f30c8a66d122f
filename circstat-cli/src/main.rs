use circstat::{circular_correlation_with, circular_mean, AngleRange, CorrelationConfig};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "Circstat CLI (JSON config driven)")]
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
    /// Enable tracing output.
    #[arg(long)]
    trace: bool,
}

#[derive(Clone, Copy, Debug, Deserialize)]
enum RangeConfig {
    #[serde(rename = "deg0_360")]
    Deg0To360,
    #[serde(rename = "deg_neg180_180")]
    DegNeg180To180,
    #[serde(rename = "rad0_2pi")]
    Rad0To2Pi,
    #[serde(rename = "rad_negpi_pi")]
    RadNegPiToPi,
}

impl From<RangeConfig> for AngleRange {
    fn from(value: RangeConfig) -> Self {
        match value {
            RangeConfig::Deg0To360 => AngleRange::Deg0To360,
            RangeConfig::DegNeg180To180 => AngleRange::DegNeg180To180,
            RangeConfig::Rad0To2Pi => AngleRange::Rad0To2Pi,
            RangeConfig::RadNegPiToPi => AngleRange::RadNegPiToPi,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ColumnConfig {
    column: String,
    range: RangeConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct Config {
    data_path: String,
    x: Option<ColumnConfig>,
    y: Option<ColumnConfig>,
    output_path: Option<String>,
    parallel: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: String::new(),
            x: None,
            y: None,
            output_path: None,
            parallel: CorrelationConfig::default().parallel,
        }
    }
}

#[derive(Debug, Serialize)]
struct Output {
    samples: usize,
    x_mean: f64,
    y_mean: f64,
    correlation: f64,
}

/// Reads the named numeric columns from a CSV file with a header row.
///
/// Records are read as bytes so non-UTF-8 text columns elsewhere in the file
/// do not abort the load.
fn load_columns(
    path: &Path,
    x_column: &str,
    y_column: &str,
) -> Result<(Vec<f64>, Vec<f64>), Box<dyn std::error::Error>> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.byte_headers()?.clone();
    let find = |name: &str| {
        headers
            .iter()
            .position(|h| h == name.as_bytes())
            .ok_or_else(|| format!("column {name:?} not found in {}", path.display()))
    };
    let x_idx = find(x_column)?;
    let y_idx = find(y_column)?;

    let mut x = Vec::new();
    let mut y = Vec::new();
    for (row, record) in reader.byte_records().enumerate() {
        let record = record?;
        let parse = |idx: usize, name: &str| -> Result<f64, Box<dyn std::error::Error>> {
            let field = record
                .get(idx)
                .ok_or_else(|| format!("row {}: missing column {name:?}", row + 1))?;
            let text = std::str::from_utf8(field)?.trim();
            text.parse::<f64>()
                .map_err(|err| format!("row {}: column {name:?}: {err}", row + 1).into())
        };
        x.push(parse(x_idx, x_column)?);
        y.push(parse(y_idx, y_column)?);
    }
    tracing::info!(rows = x.len(), path = %path.display(), "loaded angle columns");
    Ok((x, y))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("circstat=info".parse()?))
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
    if config.data_path.is_empty() {
        return Err("data_path must be set in the config".into());
    }
    let (Some(x_cfg), Some(y_cfg)) = (config.x, config.y) else {
        return Err("both x and y columns must be set in the config".into());
    };

    let x_range = AngleRange::from(x_cfg.range);
    let y_range = AngleRange::from(y_cfg.range);
    let (x, y) = load_columns(Path::new(&config.data_path), &x_cfg.column, &y_cfg.column)?;

    let correlation = circular_correlation_with(
        &x,
        x_range,
        &y,
        y_range,
        &CorrelationConfig {
            parallel: config.parallel,
        },
    )?;
    let output = Output {
        samples: x.len(),
        x_mean: circular_mean(&x, x_range)?,
        y_mean: circular_mean(&y, y_range)?,
        correlation,
    };
    let json = serde_json::to_string_pretty(&output)?;

    match config.output_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
