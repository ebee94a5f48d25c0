//! Single-pass aggregation over survey rows.
//!
//! Rows are pushed one at a time into a `MetricsAccumulator`; rows that fail
//! normalization are counted as skipped and otherwise ignored. `finish` turns
//! the raw counters into a `MetricsSnapshot` with the derived metrics filled in.

use std::collections::BTreeSet;

use crate::domain::{
    ELM_AVENUE_RABBIT_ROAD, HANLEY_HIGHWAY_WESTWAY, HourlyCounts, JunctionHourlyTable, NormalizedRow, RawRecord,
};
use crate::survey::metrics::{self, MetricsSnapshot};
use crate::survey::normalize::{RowError, normalize};

const TWO_WHEELED: [&str; 3] = ["bicycle", "motorcycle", "scooter"];
// Survey exports spell buses "Buss"; accept the correct spelling too.
const BUS_TYPES: [&str; 2] = ["bus", "buss"];

/// Running counters for one survey file.
#[derive(Debug, Clone, Default)]
pub struct MetricsAccumulator {
    rows_read: usize,
    rows_skipped: usize,

    total_vehicles: u32,
    total_trucks: u32,
    total_electric: u32,
    total_two_wheeled: u32,
    total_buses_elmavenue_north: u32,
    total_straight: u32,
    total_over_speed_limit: u32,
    total_through_elmavenue_rabbitroad: u32,
    total_through_hanleyhighway_westway: u32,
    total_scooters_elmavenue_rabbitroad: u32,

    bicycle_hourly: HourlyCounts,
    hanley_hourly: HourlyCounts,
    rain_hours: BTreeSet<u8>,
    junction_hourly_table: JunctionHourlyTable,
}

impl MetricsAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize and count one raw record. A row that fails normalization
    /// leaves every counter untouched.
    pub fn push_raw(&mut self, raw: &RawRecord) -> Result<(), RowError> {
        self.rows_read += 1;
        match normalize(raw) {
            Ok(row) => {
                self.observe(&row);
                Ok(())
            }
            Err(e) => {
                self.rows_skipped += 1;
                Err(e)
            }
        }
    }

    /// Count a line the CSV reader could not decode at all.
    pub fn push_unreadable(&mut self) {
        self.rows_read += 1;
        self.rows_skipped += 1;
    }

    pub fn observe(&mut self, row: &NormalizedRow) {
        let vehicle = row.vehicle_type.as_str();
        let at_elm = row.junction == ELM_AVENUE_RABBIT_ROAD;
        let at_hanley = row.junction == HANLEY_HIGHWAY_WESTWAY;

        self.total_vehicles += 1;
        self.junction_hourly_table
            .entry(row.junction.clone())
            .or_default()
            .increment(row.hour);

        if vehicle == "truck" {
            self.total_trucks += 1;
        }
        if row.is_electric_or_hybrid {
            self.total_electric += 1;
        }
        if TWO_WHEELED.contains(&vehicle) {
            self.total_two_wheeled += 1;
        }
        if vehicle == "bicycle" {
            self.bicycle_hourly.increment(row.hour);
        }
        if vehicle == "scooter" && at_elm {
            self.total_scooters_elmavenue_rabbitroad += 1;
        }
        if row.vehicle_speed > row.speed_limit {
            self.total_over_speed_limit += 1;
        }
        if at_elm {
            self.total_through_elmavenue_rabbitroad += 1;
        }
        if at_hanley {
            self.total_through_hanleyhighway_westway += 1;
            self.hanley_hourly.increment(row.hour);
        }
        if BUS_TYPES.contains(&vehicle) && at_elm && row.direction_in == "N" {
            self.total_buses_elmavenue_north += 1;
        }
        if row.direction_in == row.direction_out {
            self.total_straight += 1;
        }
        if row.weather.contains("rain") {
            self.rain_hours.insert(row.hour);
        }
    }

    pub fn finish(self) -> MetricsSnapshot {
        let percentage_of_trucks = metrics::percentage(self.total_trucks, self.total_vehicles).unwrap_or(0);
        let average_bikes_per_hour = metrics::average_over_active_hours(&self.bicycle_hourly);
        let max_hanley_count = self.hanley_hourly.max();
        let peak_hours = metrics::peak_hours(&self.hanley_hourly);
        let scooter_percentage_elmavenue = metrics::percentage(
            self.total_scooters_elmavenue_rabbitroad,
            self.total_through_elmavenue_rabbitroad,
        );
        let number_of_rain_hours = self.rain_hours.len();

        MetricsSnapshot {
            rows_read: self.rows_read,
            rows_skipped: self.rows_skipped,
            total_vehicles: self.total_vehicles,
            total_trucks: self.total_trucks,
            total_electric: self.total_electric,
            total_two_wheeled: self.total_two_wheeled,
            total_buses_elmavenue_north: self.total_buses_elmavenue_north,
            total_straight: self.total_straight,
            total_over_speed_limit: self.total_over_speed_limit,
            total_through_elmavenue_rabbitroad: self.total_through_elmavenue_rabbitroad,
            total_through_hanleyhighway_westway: self.total_through_hanleyhighway_westway,
            total_scooters_elmavenue_rabbitroad: self.total_scooters_elmavenue_rabbitroad,
            bicycle_hourly: self.bicycle_hourly,
            hanley_hourly: self.hanley_hourly,
            rain_hours: self.rain_hours,
            junction_hourly_table: self.junction_hourly_table,
            percentage_of_trucks,
            average_bikes_per_hour,
            max_hanley_count,
            peak_hours,
            scooter_percentage_elmavenue,
            number_of_rain_hours,
        }
    }
}

/// Aggregate a stream of raw records in one pass.
pub fn aggregate<I>(records: I) -> MetricsSnapshot
where
    I: IntoIterator<Item = RawRecord>,
{
    let mut acc = MetricsAccumulator::new();
    for raw in records {
        // Failed rows only show up as `rows_skipped`.
        let _ = acc.push_raw(&raw);
    }
    acc.finish()
}
