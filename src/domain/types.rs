//! Shared domain types.
//!
//! These types are deliberately plain data so they can be:
//!
//! - deserialized straight out of the survey CSV (`RawRecord`)
//! - passed between the normalizer, aggregator, formatter and renderer
//! - built in tests without touching the filesystem

use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

/// Junction names as they appear after lower-casing and trimming.
pub const ELM_AVENUE_RABBIT_ROAD: &str = "elm avenue/rabbit road";
pub const HANLEY_HIGHWAY_WESTWAY: &str = "hanley highway/westway";

/// Every column the survey CSV must carry. Order in the file is irrelevant.
pub const REQUIRED_COLUMNS: [&str; 10] = [
    "JunctionName",
    "Date",
    "timeOfDay",
    "travel_Direction_in",
    "travel_Direction_out",
    "Weather_Conditions",
    "JunctionSpeedLimit",
    "VehicleSpeed",
    "VehicleType",
    "elctricHybrid",
];

pub const HOURS_PER_DAY: usize = 24;

/// One untouched CSV row. All fields are text until normalized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "JunctionName")]
    pub junction_name: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "timeOfDay")]
    pub time_of_day: String,
    #[serde(rename = "travel_Direction_in")]
    pub direction_in: String,
    #[serde(rename = "travel_Direction_out")]
    pub direction_out: String,
    #[serde(rename = "Weather_Conditions")]
    pub weather: String,
    #[serde(rename = "JunctionSpeedLimit")]
    pub speed_limit: String,
    #[serde(rename = "VehicleSpeed")]
    pub vehicle_speed: String,
    #[serde(rename = "VehicleType")]
    pub vehicle_type: String,
    /// Often left off the end of a line entirely; reads as blank.
    #[serde(rename = "elctricHybrid", default)]
    pub electric_hybrid: String,
}

/// A row that survived normalization.
///
/// Invariant: `hour < 24`, speeds are finite and non-negative.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRow {
    pub junction: String,
    pub hour: u8,
    pub direction_in: String,
    pub direction_out: String,
    pub weather: String,
    pub speed_limit: f64,
    pub vehicle_speed: f64,
    pub vehicle_type: String,
    pub is_electric_or_hybrid: bool,
}

/// Vehicle counts for each hour of one day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HourlyCounts([u32; HOURS_PER_DAY]);

impl HourlyCounts {
    pub fn increment(&mut self, hour: u8) {
        self.0[usize::from(hour)] += 1;
    }

    /// Count for `hour`; hours outside the day read as zero.
    pub fn get(&self, hour: u8) -> u32 {
        self.0.get(usize::from(hour)).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    pub fn max(&self) -> u32 {
        self.0.iter().copied().max().unwrap_or(0)
    }

    /// Number of hours with at least one vehicle.
    pub fn active_hours(&self) -> usize {
        self.0.iter().filter(|&&c| c > 0).count()
    }

    /// `(hour, count)` pairs in ascending hour order, including empty hours.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u32)> + '_ {
        (0u8..).zip(self.0.iter().copied())
    }
}

impl From<[u32; HOURS_PER_DAY]> for HourlyCounts {
    fn from(counts: [u32; HOURS_PER_DAY]) -> Self {
        Self(counts)
    }
}

/// Junction name -> per-hour counts. Sorted by name so rendering is stable.
pub type JunctionHourlyTable = BTreeMap<String, HourlyCounts>;

pub const DAY_RANGE: (u32, u32) = (1, 31);
pub const MONTH_RANGE: (u32, u32) = (1, 12);
pub const YEAR_RANGE: (i32, i32) = (2000, 2024);

/// Day/month/year of a survey, each checked against its own range.
///
/// The components are validated independently (31/02/2024 is accepted), which
/// matches how survey files are named rather than calendar validity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurveyDate {
    day: u32,
    month: u32,
    year: i32,
}

impl SurveyDate {
    pub fn new(day: u32, month: u32, year: i32) -> Option<Self> {
        let in_range = (DAY_RANGE.0..=DAY_RANGE.1).contains(&day)
            && (MONTH_RANGE.0..=MONTH_RANGE.1).contains(&month)
            && (YEAR_RANGE.0..=YEAR_RANGE.1).contains(&year);
        in_range.then_some(Self { day, month, year })
    }

    pub fn from_naive(date: NaiveDate) -> Option<Self> {
        Self::new(date.day(), date.month(), date.year())
    }

    /// `DDMMYYYY`, as used in survey file names.
    pub fn compact(&self) -> String {
        format!("{:02}{:02}{}", self.day, self.month, self.year)
    }

    /// `DD/MM/YYYY`, as shown on the histogram.
    pub fn display(&self) -> String {
        format!("{:02}/{:02}/{}", self.day, self.month, self.year)
    }

    pub fn data_file_name(&self) -> String {
        format!("traffic_data{}.csv", self.compact())
    }
}

/// Resolved run configuration (CLI flags + environment).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyConfig {
    pub data_dir: PathBuf,
    pub results_path: PathBuf,
    pub plot: bool,
    pub plot_height: usize,
}

impl SurveyConfig {
    pub fn data_path(&self, date: &SurveyDate) -> PathBuf {
        self.data_dir.join(date.data_file_name())
    }
}
