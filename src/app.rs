//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and parses CLI arguments
//! - initialises logging
//! - runs either a one-shot file/date or the interactive date loop

use std::io::{self, BufRead, Write};
use std::path::Path;

use clap::Parser;
use tracing::warn;

use crate::cli::Cli;
use crate::cli::prompt::Prompter;
use crate::domain::SurveyConfig;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `survey` binary.
pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    crate::logging::init(&cli.log_level);

    let config = survey_config_from_args(&cli);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(path) = &cli.file {
        pipeline::process_file(&mut out, path, &label_for_path(path), &config)?;
        return Ok(());
    }
    if let Some(date) = cli.date {
        pipeline::process_file(&mut out, &config.data_path(&date), &date.display(), &config)?;
        return Ok(());
    }

    let stdin = io::stdin();
    run_session(stdin.lock(), out, &config)
}

/// Interactive loop: ask for a date, process its file, ask whether to go again.
///
/// Input and schema failures are shown and the loop carries on; only a closed
/// or broken prompt ends the session with an error.
pub fn run_session<R: BufRead, W: Write>(input: R, output: W, config: &SurveyConfig) -> Result<(), AppError> {
    let mut prompter = Prompter::new(input, output);
    loop {
        let date = prompter.ask_date()?;
        let path = config.data_path(&date);

        if let Err(err) = pipeline::process_file(prompter.writer(), &path, &date.display(), config) {
            warn!(path = %path.display(), kind = ?err.kind(), "Survey file not processed");
            prompter.say(&err.to_string())?;
        }

        if !prompter.ask_continue()? {
            return Ok(());
        }
    }
}

pub fn survey_config_from_args(cli: &Cli) -> SurveyConfig {
    SurveyConfig {
        data_dir: cli.data_dir.clone(),
        results_path: cli.results.clone(),
        plot: !cli.no_plot,
        plot_height: cli.height,
    }
}

/// Histogram label for an explicit `--file`: the file name.
fn label_for_path(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn config_from_args_maps_flags() {
        let cli = Cli::parse_from(["survey", "--data-dir", "surveys", "--no-plot", "--height", "8"]);
        let config = survey_config_from_args(&cli);
        assert_eq!(config.data_dir, PathBuf::from("surveys"));
        assert!(!config.plot);
        assert_eq!(config.plot_height, 8);
    }

    #[test]
    fn label_is_file_name() {
        assert_eq!(label_for_path(Path::new("data/traffic_data15062024.csv")), "traffic_data15062024.csv");
    }
}
