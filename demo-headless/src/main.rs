use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wildfire_climate_core::menu::parse_month;
use wildfire_climate_core::{
    AnalysisConfig, AnalysisError, AnalysisSession, ConfigOverrides, Extremum,
};

/// Run one wildfire / temperature analysis and print the renderer payload as JSON
#[derive(Parser, Debug)]
#[command(name = "wildfire-analysis")]
#[command(about = "California wildfire / temperature correlation, non-interactive", long_about = None)]
struct Args {
    /// JSON configuration file (defaults are used when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the first year of the study window
    #[arg(long)]
    begin_year: Option<i32>,

    /// Override the last year of the study window
    #[arg(long)]
    end_year: Option<i32>,

    /// Override the daily temperature dataset
    #[arg(long)]
    climate: Option<PathBuf>,

    /// Override the wildfire dataset
    #[arg(long)]
    events: Option<PathBuf>,

    /// Emit compact instead of pretty-printed JSON
    #[arg(long)]
    compact: bool,

    #[command(subcommand)]
    analysis: Analysis,
}

#[derive(Subcommand, Debug)]
enum Analysis {
    /// Year → average daily temperature trend
    YearTrend {
        #[arg(value_enum)]
        kind: Kind,
    },
    /// Day temperature → fire intensity trend
    IntensityTrend {
        #[arg(value_enum)]
        kind: Kind,
    },
    /// Predicted fire intensity for any year
    Predict { year: i32 },
    /// Fire map payload for one month of the study window
    Map {
        year: i32,
        /// Month name (January - December)
        month: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Kind {
    Max,
    Min,
}

impl From<Kind> for Extremum {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Max => Extremum::Max,
            Kind::Min => Extremum::Min,
        }
    }
}

impl Args {
    fn config(&self) -> Result<AnalysisConfig, AnalysisError> {
        AnalysisConfig::resolve(
            self.config.as_deref(),
            ConfigOverrides {
                begin_year: self.begin_year,
                end_year: self.end_year,
                climate_path: self.climate.clone(),
                events_path: self.events.clone(),
            },
        )
    }
}

fn to_json<T: Serialize>(payload: &T, compact: bool) -> Result<String, AnalysisError> {
    let json = if compact {
        serde_json::to_string(payload)
    } else {
        serde_json::to_string_pretty(payload)
    };
    json.map_err(|e| AnalysisError::Ingestion(format!("cannot serialize result: {e}")))
}

fn run(args: &Args) -> Result<String, AnalysisError> {
    let config = args.config()?;
    let session = AnalysisSession::load(&config)?;

    match &args.analysis {
        Analysis::YearTrend { kind } => {
            to_json(&session.year_temperature_trend((*kind).into())?, args.compact)
        }
        Analysis::IntensityTrend { kind } => {
            to_json(&session.temperature_intensity_trend((*kind).into())?, args.compact)
        }
        Analysis::Predict { year } => {
            let prediction = session.predict(*year)?;
            info!("{prediction}");
            to_json(&prediction, args.compact)
        }
        Analysis::Map { year, month } => {
            if !config.years().contains(year) {
                return Err(AnalysisError::InputValidation(format!(
                    "{year} is outside {} - {}",
                    config.begin_year, config.end_year
                )));
            }
            let map = session.period_map(*year, parse_month(month)?)?;
            info!("{}", map.title());
            to_json(&map, args.compact)
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
