//! Fixed-template survey report.
//!
//! The wording and line order are relied upon by whoever reads `results.txt`,
//! so changes here must keep the template byte-compatible.

use crate::survey::MetricsSnapshot;

const BANNER: &str = "***************************";

/// Render the report for one survey file.
pub fn format_report(data_file: &str, snap: &MetricsSnapshot) -> String {
    let mut out = String::new();

    out.push_str(BANNER);
    out.push('\n');
    out.push_str(&format!("Data file selected: {data_file}\n"));
    out.push_str(BANNER);
    out.push('\n');
    out.push_str(&format!(
        "The total number of vehicles recorded for this date is {}\n",
        snap.total_vehicles
    ));
    out.push_str(&format!(
        "The total number of trucks recorded for this date is {}\n",
        snap.total_trucks
    ));
    out.push_str(&format!(
        "The total number of electric vehicles for this date is {}\n",
        snap.total_electric
    ));
    out.push_str(&format!(
        "The total number of two-wheeled vehicles for this date is {}\n",
        snap.total_two_wheeled
    ));
    out.push_str(&format!(
        "The total number of busses leaving Elm Avenue/Rabbit Road heading North is {}\n",
        snap.total_buses_elmavenue_north
    ));
    out.push_str(&format!(
        "The total number of vehicles through both junctions not turning left or right is {}\n",
        snap.total_straight
    ));
    out.push_str(&format!(
        "The percentage of total vehicles recorded that are trucks for this date is {}%\n",
        snap.percentage_of_trucks
    ));
    out.push_str(&format!(
        "The average number of bikes per hour for this date is {}\n",
        snap.average_bikes_per_hour
    ));
    out.push_str(&format!(
        "The total number of vehicles recorded as over the speed limit for this date is {}\n",
        snap.total_over_speed_limit
    ));
    out.push_str(&format!(
        "The total number of vehicles recorded through Elm Avenue/Rabbit Road junction is {}\n",
        snap.total_through_elmavenue_rabbitroad
    ));
    out.push_str(&format!(
        "The total number of vehicles recorded through Hanley Highway/Westway junction is {}\n",
        snap.total_through_hanleyhighway_westway
    ));
    out.push_str(&format!(
        "{}% of vehicles recorded through Elm Avenue/Rabbit Road are scooters.\n",
        snap.scooter_percentage_elmavenue.unwrap_or(0)
    ));
    out.push_str(&format!(
        "The highest number of vehicles in an hour on Hanley Highway/Westway is {}\n",
        snap.max_hanley_count
    ));
    out.push_str(&peak_hour_line(snap));
    out.push('\n');
    out.push_str(&format!(
        "The number of hours of rain for this date is {}\n",
        snap.number_of_rain_hours
    ));

    out
}

fn peak_hour_line(snap: &MetricsSnapshot) -> String {
    match snap.first_peak_hour() {
        Some(hour) => format!(
            "The most vehicles through Hanley Highway/Westway were recorded between {hour}:00 and {}:00",
            u32::from(hour) + 1
        ),
        None => "No vehicles were recorded through Hanley Highway/Westway for this date".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RawRecord;
    use crate::survey::aggregate;

    fn record(junction: &str, time: &str, vehicle: &str, speed: &str) -> RawRecord {
        RawRecord {
            junction_name: junction.to_string(),
            date: "15/06/2024".to_string(),
            time_of_day: time.to_string(),
            direction_in: "N".to_string(),
            direction_out: "E".to_string(),
            weather: "Light Rain".to_string(),
            speed_limit: "30".to_string(),
            vehicle_speed: speed.to_string(),
            vehicle_type: vehicle.to_string(),
            electric_hybrid: "FALSE".to_string(),
        }
    }

    #[test]
    fn report_golden_snapshot() {
        let snap = aggregate(vec![
            record("Elm Avenue/Rabbit Road", "08:10:00", "Truck", "40"),
            record("Elm Avenue/Rabbit Road", "08:20:00", "Scooter", "20"),
            record("Hanley Highway/Westway", "17:05:00", "Car", "25"),
            record("Hanley Highway/Westway", "17:35:00", "Bicycle", "12"),
        ]);

        let txt = format_report("traffic_data15062024.csv", &snap);
        let expected = concat!(
            "***************************\n",
            "Data file selected: traffic_data15062024.csv\n",
            "***************************\n",
            "The total number of vehicles recorded for this date is 4\n",
            "The total number of trucks recorded for this date is 1\n",
            "The total number of electric vehicles for this date is 0\n",
            "The total number of two-wheeled vehicles for this date is 2\n",
            "The total number of busses leaving Elm Avenue/Rabbit Road heading North is 0\n",
            "The total number of vehicles through both junctions not turning left or right is 0\n",
            "The percentage of total vehicles recorded that are trucks for this date is 25%\n",
            "The average number of bikes per hour for this date is 1\n",
            "The total number of vehicles recorded as over the speed limit for this date is 1\n",
            "The total number of vehicles recorded through Elm Avenue/Rabbit Road junction is 2\n",
            "The total number of vehicles recorded through Hanley Highway/Westway junction is 2\n",
            "50% of vehicles recorded through Elm Avenue/Rabbit Road are scooters.\n",
            "The highest number of vehicles in an hour on Hanley Highway/Westway is 2\n",
            "The most vehicles through Hanley Highway/Westway were recorded between 17:00 and 18:00\n",
            "The number of hours of rain for this date is 2\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn empty_survey_does_not_panic() {
        let snap = aggregate(Vec::new());
        let txt = format_report("empty.csv", &snap);
        assert!(txt.contains("0% of vehicles recorded through Elm Avenue/Rabbit Road are scooters."));
        assert!(txt.contains("No vehicles were recorded through Hanley Highway/Westway for this date\n"));
        assert!(txt.ends_with("The number of hours of rain for this date is 0\n"));
    }

    #[test]
    fn peak_hour_uses_earliest_tie() {
        let snap = aggregate(vec![
            record("Hanley Highway/Westway", "23:05:00", "Car", "25"),
            record("Hanley Highway/Westway", "07:35:00", "Car", "25"),
        ]);
        let txt = format_report("x.csv", &snap);
        assert!(txt.contains("were recorded between 7:00 and 8:00\n"));
    }
}
