//! Shared "survey pipeline" logic used by both one-shot and interactive runs.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! read CSV -> normalize + aggregate -> format report -> append to results
//! -> render histogram
//!
//! The front-ends then only decide *which* file to process and where output goes.

use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::domain::SurveyConfig;
use crate::error::AppError;
use crate::survey::MetricsSnapshot;

/// All computed outputs for one survey file.
#[derive(Debug, Clone)]
pub struct SurveyRun {
    pub snapshot: MetricsSnapshot,
    pub report: String,
}

/// Aggregate a survey file and format its report. Nothing is written.
pub fn analyse_file(path: &Path) -> Result<SurveyRun, AppError> {
    let snapshot = crate::io::load_survey(path)?;
    let report = crate::report::format_report(&path.display().to_string(), &snapshot);
    Ok(SurveyRun { snapshot, report })
}

/// Run the full pipeline for one file, writing the report (and histogram) to `out`
/// and appending the report to the results file.
pub fn process_file<W: Write>(
    out: &mut W,
    path: &Path,
    date_label: &str,
    config: &SurveyConfig,
) -> Result<SurveyRun, AppError> {
    let run = analyse_file(path)?;

    writeln!(out, "{}", run.report).map_err(|e| AppError::output(format!("Failed to print report: {e}")))?;
    crate::io::append_report(&config.results_path, &run.report)?;
    info!(results = %config.results_path.display(), "Report appended");

    if config.plot && !run.snapshot.junction_hourly_table.is_empty() {
        let plot = crate::plot::render_histogram(&run.snapshot.junction_hourly_table, date_label, config.plot_height);
        writeln!(out, "{plot}").map_err(|e| AppError::output(format!("Failed to print histogram: {e}")))?;
    }

    Ok(run)
}
