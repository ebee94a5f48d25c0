//! Append-only results file.
//!
//! Each processed survey appends its report verbatim; earlier reports are never
//! rewritten.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::error::AppError;

/// Append `report` to `path`, creating the file on first use.
pub fn append_report(path: &Path, report: &str) -> Result<(), AppError> {
    debug!(path = %path.display(), exists = path.exists(), "Appending report");

    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map_err(|e| AppError::output(format!("Error writing to file '{}': {e}", path.display())))?;

    file.write_all(report.as_bytes())
        .and_then(|()| file.flush())
        .map_err(|e| AppError::output(format!("Error writing to file '{}': {e}", path.display())))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    #[test]
    fn append_creates_file() {
        let path = env::temp_dir().join("traffic_survey_results_create.txt");
        let _ = fs::remove_file(&path);

        append_report(&path, "first\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "first\n");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn appends_preserve_call_order() {
        let path = env::temp_dir().join("traffic_survey_results_order.txt");
        let _ = fs::remove_file(&path);

        append_report(&path, "report one\n").unwrap();
        append_report(&path, "report two\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "report one\nreport two\n");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn unwritable_path_is_output_error() {
        let dir = env::temp_dir();
        // A directory cannot be opened for appending.
        let err = append_report(&dir, "x").unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Output);
    }
}
