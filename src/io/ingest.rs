//! CSV ingest for daily survey files.
//!
//! This module owns everything between "a path" and "a metrics snapshot":
//! - **Strict schema**: all ten survey columns must be present (order and extra
//!   columns don't matter); otherwise the whole file is rejected.
//! - **Row-level tolerance**: rows that fail to decode or normalize are skipped
//!   and only show up in `rows_skipped`.
//! - **Streaming**: records are fed to the accumulator as they are read.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use tracing::{debug, info};

use crate::domain::{REQUIRED_COLUMNS, RawRecord};
use crate::error::AppError;
use crate::survey::{MetricsAccumulator, MetricsSnapshot};

/// Open a survey CSV and aggregate it.
pub fn load_survey(path: &Path) -> Result<MetricsSnapshot, AppError> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            AppError::input(format!("Error: The file '{}' was not found.", path.display()))
        } else {
            AppError::input(format!("Failed to open CSV '{}': {e}", path.display()))
        }
    })?;

    let snapshot = aggregate_csv(file)?;
    info!(
        path = %path.display(),
        rows_read = snapshot.rows_read,
        rows_used = snapshot.total_vehicles,
        rows_skipped = snapshot.rows_skipped,
        "Survey file aggregated"
    );
    Ok(snapshot)
}

/// Validate the header row, then stream every record into a fresh accumulator.
pub fn aggregate_csv<R: Read>(source: R) -> Result<MetricsSnapshot, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(source);

    let headers = reader
        .headers()
        .map_err(|e| AppError::input(format!("Failed to read CSV headers: {e}")))?
        .clone();

    let missing = missing_columns(&headers);
    if !missing.is_empty() {
        return Err(AppError::schema(missing));
    }

    let mut acc = MetricsAccumulator::new();
    for (idx, result) in reader.deserialize::<RawRecord>().enumerate() {
        match result {
            Ok(raw) => {
                if let Err(e) = acc.push_raw(&raw) {
                    // +2: 1-based lines plus the header row.
                    debug!(line = idx + 2, reason = %e, "Row skipped");
                }
            }
            Err(e) => {
                if let csv::ErrorKind::Io(io_err) = e.kind() {
                    return Err(AppError::input(format!("Failed to read CSV: {io_err}")));
                }
                acc.push_unreadable();
            }
        }
    }

    Ok(acc.finish())
}

/// Required columns absent from `headers`, in their canonical order.
fn missing_columns(headers: &StringRecord) -> Vec<String> {
    let present: Vec<&str> = headers.iter().map(normalize_header_name).collect();
    REQUIRED_COLUMNS
        .iter()
        .filter(|col| !present.contains(col))
        .map(|col| col.to_string())
        .collect()
}

fn normalize_header_name(name: &str) -> &str {
    // Spreadsheet exports often prefix the first header with a UTF-8 BOM.
    name.trim().trim_start_matches('\u{feff}')
}
