//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - raw and normalized survey rows (`RawRecord`, `NormalizedRow`)
//! - per-hour tables (`HourlyCounts`, `JunctionHourlyTable`)
//! - survey dates and run configuration (`SurveyDate`, `SurveyConfig`)

pub mod types;

pub use types::*;
