//! Finalized survey metrics.

use std::collections::BTreeSet;

use crate::domain::{HourlyCounts, JunctionHourlyTable};

/// Everything the report and the histogram need from one survey file.
///
/// Built once by `MetricsAccumulator::finish` and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsSnapshot {
    pub rows_read: usize,
    pub rows_skipped: usize,

    pub total_vehicles: u32,
    pub total_trucks: u32,
    pub total_electric: u32,
    pub total_two_wheeled: u32,
    pub total_buses_elmavenue_north: u32,
    pub total_straight: u32,
    pub total_over_speed_limit: u32,
    pub total_through_elmavenue_rabbitroad: u32,
    pub total_through_hanleyhighway_westway: u32,
    pub total_scooters_elmavenue_rabbitroad: u32,

    pub bicycle_hourly: HourlyCounts,
    pub hanley_hourly: HourlyCounts,
    pub rain_hours: BTreeSet<u8>,
    pub junction_hourly_table: JunctionHourlyTable,

    // Derived once the pass is complete.
    pub percentage_of_trucks: u32,
    pub average_bikes_per_hour: u32,
    pub max_hanley_count: u32,
    /// Ascending hour order.
    pub peak_hours: Vec<u8>,
    /// `None` when nothing passed through Elm Avenue/Rabbit Road.
    pub scooter_percentage_elmavenue: Option<u32>,
    pub number_of_rain_hours: usize,
}

impl MetricsSnapshot {
    pub fn first_peak_hour(&self) -> Option<u8> {
        self.peak_hours.first().copied()
    }
}

/// `round(100 * part / total)`, or `None` for an empty denominator.
pub fn percentage(part: u32, total: u32) -> Option<u32> {
    if total == 0 {
        return None;
    }
    Some(round_half_even(100.0 * f64::from(part) / f64::from(total)))
}

/// Mean count over hours that saw at least one vehicle; zero when none did.
pub fn average_over_active_hours(counts: &HourlyCounts) -> u32 {
    let active = counts.active_hours();
    if active == 0 {
        return 0;
    }
    round_half_even(f64::from(counts.total()) / active as f64)
}

/// All hours whose count equals the maximum. Empty when no vehicles were seen.
pub fn peak_hours(counts: &HourlyCounts) -> Vec<u8> {
    let max = counts.max();
    if max == 0 {
        return Vec::new();
    }
    counts
        .iter()
        .filter(|&(_, c)| c == max)
        .map(|(hour, _)| hour)
        .collect()
}

/// Halves go to the nearest even integer (2.5 -> 2, 3.5 -> 4).
pub fn round_half_even(value: f64) -> u32 {
    value.round_ties_even().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_guards_zero_denominator() {
        assert_eq!(percentage(3, 0), None);
        assert_eq!(percentage(0, 7), Some(0));
        assert_eq!(percentage(1, 2), Some(50));
        assert_eq!(percentage(1, 3), Some(33));
        assert_eq!(percentage(2, 3), Some(67));
        assert_eq!(percentage(5, 5), Some(100));
    }

    #[test]
    fn rounding_is_half_to_even() {
        assert_eq!(round_half_even(2.5), 2);
        assert_eq!(round_half_even(3.5), 4);
        assert_eq!(round_half_even(0.4), 0);
        assert_eq!(round_half_even(12.5), 12);
    }

    #[test]
    fn average_uses_active_hours_not_whole_day() {
        let mut bikes = HourlyCounts::default();
        for _ in 0..3 {
            bikes.increment(7);
        }
        bikes.increment(18);
        // 4 bikes over 2 active hours, not over 24.
        assert_eq!(average_over_active_hours(&bikes), 2);
        assert_eq!(average_over_active_hours(&HourlyCounts::default()), 0);
    }

    #[test]
    fn peak_hours_are_ascending_and_include_ties() {
        let mut counts = HourlyCounts::default();
        counts.increment(17);
        counts.increment(17);
        counts.increment(9);
        counts.increment(9);
        counts.increment(12);
        assert_eq!(peak_hours(&counts), vec![9, 17]);
        assert!(peak_hours(&HourlyCounts::default()).is_empty());
    }
}
