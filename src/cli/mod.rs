//! Command-line parsing for the traffic survey analyser.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! aggregation and reporting code. Every flag can also come from the
//! environment (a `.env` file is loaded before parsing).

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

use crate::domain::SurveyDate;

pub mod prompt;

/// Top-level CLI.
#[derive(Debug, Parser, Clone)]
#[command(
    name = "survey",
    version,
    about = "Daily junction traffic survey report and hourly histogram"
)]
pub struct Cli {
    /// Directory containing `traffic_data<DDMMYYYY>.csv` files.
    #[arg(long, env = "SURVEY_DATA_DIR", default_value = ".")]
    pub data_dir: PathBuf,

    /// Text file each report is appended to.
    #[arg(long, env = "SURVEY_RESULTS_FILE", default_value = "results.txt")]
    pub results: PathBuf,

    /// Process a single survey date and exit (DD/MM/YYYY, DD-MM-YYYY, DDMMYYYY or YYYY-MM-DD).
    #[arg(long, value_parser = parse_survey_date, conflicts_with = "file")]
    pub date: Option<SurveyDate>,

    /// Process a single CSV file and exit.
    #[arg(short = 'f', long, value_name = "CSV")]
    pub file: Option<PathBuf>,

    /// Skip the histogram.
    #[arg(long)]
    pub no_plot: bool,

    /// Histogram height (rows).
    #[arg(long, default_value_t = 15)]
    pub height: usize,

    /// Log filter, e.g. `info` or `traffic_survey=debug`.
    #[arg(long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,
}

/// Parse a survey date given on the command line.
pub fn parse_survey_date(s: &str) -> Result<SurveyDate, String> {
    const FMTS: [&str; 4] = ["%d/%m/%Y", "%d-%m-%Y", "%d%m%Y", "%Y-%m-%d"];
    let date = FMTS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s.trim(), fmt).ok())
        .ok_or_else(|| {
            format!("Invalid date '{s}'. Expected one of: DD/MM/YYYY, DD-MM-YYYY, DDMMYYYY, YYYY-MM-DD.")
        })?;
    SurveyDate::from_naive(date).ok_or_else(|| format!("Date '{s}' is outside the survey years 2000-2024."))
}
