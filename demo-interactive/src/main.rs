//! Interactive Wildfire / Temperature Analysis Menu
//!
//! A terminal menu over one analysis session. The datasets are loaded once
//! at startup; each menu choice then runs one analysis and prints its result.
//!
//! # Usage
//!
//! ```bash
//! cargo run --package demo-interactive -- --config analysis.json
//! ```
//!
//! # Options
//!
//! 1. Year → average maximum temperature trend
//! 2. Year → average minimum temperature trend
//! 3. Day maximum temperature → fire intensity trend
//! 4. Day minimum temperature → fire intensity trend
//! 5. Intensity prediction for a year (any year)
//! 6. Fire map for a month of the study window
//!
//! Ctrl-C or Ctrl-D leaves the menu.

use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use serde::Serialize;
use std::fs;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use wildfire_climate_core::menu::{parse_month, parse_year};
use wildfire_climate_core::{
    AnalysisConfig, AnalysisError, AnalysisSession, ConfigOverrides, MenuOption, PeriodMap,
    Prediction, TrendChart,
};

/// Interactive wildfire / temperature correlation explorer
#[derive(Parser, Debug)]
#[command(name = "demo-interactive")]
#[command(about = "Explore how daily temperatures relate to wildfire intensity", long_about = None)]
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

    /// Also write each chart/map payload as JSON into this directory
    #[arg(short, long)]
    export_dir: Option<PathBuf>,
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

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    println!("╔═══════════════════════════════════════════════════════════╗");
    println!("║      California Wildfire & Temperature - Analysis Menu    ║");
    println!("╚═══════════════════════════════════════════════════════════╝");
    println!();

    let config = match args.config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    println!(
        "Loading {} wildfire records and temperatures for {} - {}...",
        config.region, config.begin_year, config.end_year
    );
    let session = match AnalysisSession::load(&config) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    println!(
        "Loaded {} fires and {} days of temperatures.",
        session.events().len(),
        session.climate().len()
    );

    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("Failed to create readline: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let window = config.years();
    loop {
        show_menu();
        let option = match rl.readline("option> ") {
            Ok(line) => {
                let _ = rl.add_history_entry(&line);
                line
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("^D");
                break;
            }
            Err(err) => {
                eprintln!("Error: {:?}", err);
                break;
            }
        };

        let result = option.parse::<MenuOption>().and_then(|choice| {
            run_option(&mut rl, &session, &window, choice, args.export_dir.as_deref())
        });
        match result {
            Ok(()) => {}
            Err(e) if e.is_recoverable() => println!("{e}"),
            Err(e) => {
                tracing::warn!(kind = e.kind(), "Analysis aborted");
                println!("Analysis aborted. {e}");
            }
        }
        println!();
    }
    ExitCode::SUCCESS
}

fn show_menu() {
    println!("═══════════════════ ANALYSES ═══════════════════");
    for (i, option) in MenuOption::ALL.iter().enumerate() {
        println!("  {}. {}", i + 1, option);
    }
    println!("════════════════════════════════════════════════");
}

/// Ask one question; Ctrl-C / Ctrl-D count as an empty answer
fn prompt(rl: &mut DefaultEditor, question: &str) -> String {
    println!("{question}");
    rl.readline("> ").unwrap_or_default()
}

fn run_option(
    rl: &mut DefaultEditor,
    session: &AnalysisSession,
    window: &RangeInclusive<i32>,
    choice: MenuOption,
    export_dir: Option<&Path>,
) -> Result<(), AnalysisError> {
    match choice {
        MenuOption::YearTrend(extremum) => {
            let chart = session.year_temperature_trend(extremum)?;
            show_chart(&chart);
            export(export_dir, &format!("year_{extremum}_trend.json"), &chart);
        }
        MenuOption::IntensityTrend(extremum) => {
            let chart = session.temperature_intensity_trend(extremum)?;
            show_chart(&chart);
            export(export_dir, &format!("{extremum}_temp_intensity_trend.json"), &chart);
        }
        MenuOption::Prediction => {
            let year = parse_year(&prompt(rl, "Please enter a year for the prediction..."), None)?;
            let prediction = session.predict(year)?;
            show_prediction(&prediction);
        }
        MenuOption::PeriodMap => {
            let year = parse_year(
                &prompt(
                    rl,
                    &format!(
                        "Please enter a year ({} - {}) for the wildfire map...",
                        window.start(),
                        window.end()
                    ),
                ),
                Some(window),
            )?;
            let month = parse_month(&prompt(
                rl,
                "Please enter a month (January - December) for the wildfire map...",
            ))?;
            let map = session.period_map(year, month)?;
            show_map(&map);
            export(export_dir, &format!("map_{year}_{month}.json"), &map);
        }
    }
    Ok(())
}

fn show_chart(chart: &TrendChart) {
    println!("\n{}", chart.title);
    println!("  x: {}", chart.x_label);
    println!("  y: {}", chart.y_label);
    println!("  Points:     {}", chart.points.len());
    println!(
        "  Fitted:     y = {:.4} + {:.4}·x",
        chart.model.intercept(),
        chart.model.slope()
    );
    if let Some((from, to)) = chart.line_segment() {
        println!(
            "  Line:       ({:.2}, {:.3}) → ({:.2}, {:.3})",
            from.x, from.y, to.x, to.y
        );
    }
}

fn show_prediction(prediction: &Prediction) {
    println!("\nPrediction: {prediction}");
    for estimate in &prediction.estimates {
        println!(
            "  from {} temperature: average {} → intensity {:.3}",
            estimate.extremum, estimate.temperature, estimate.intensity
        );
    }
}

fn show_map(map: &PeriodMap) {
    println!("\n{}", map.title());
    if map.is_empty() {
        println!("  No wildfires recorded.");
        return;
    }
    println!("  {:>10} {:>11} {:>14} {:>8}", "Latitude", "Longitude", "Intensity", "Marker");
    for i in 0..map.len() {
        println!(
            "  {:>10.4} {:>11.4} {:>14.3} {:>8.3}",
            map.latitudes[i], map.longitudes[i], map.intensities[i], map.marker_sizes[i]
        );
    }
    println!("  {} fire(s)", map.len());
}

/// Write a renderer payload; failures are reported but never abort the menu
fn export<T: Serialize>(dir: Option<&Path>, file_name: &str, payload: &T) {
    let Some(dir) = dir else {
        return;
    };
    let path = dir.join(file_name);
    let written = fs::create_dir_all(dir)
        .map_err(|e| e.to_string())
        .and_then(|()| serde_json::to_string_pretty(payload).map_err(|e| e.to_string()))
        .and_then(|json| fs::write(&path, json).map_err(|e| e.to_string()));
    match written {
        Ok(()) => println!("  Saved {}", path.display()),
        Err(e) => eprintln!("  Could not save {}: {e}", path.display()),
    }
}
