//! Row normalization: one `RawRecord` in, one `NormalizedRow` (or `RowError`) out.

use crate::domain::{HOURS_PER_DAY, NormalizedRow, RawRecord};

/// Why a single row was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    /// The CSV layer could not turn the line into a record.
    Unreadable,
    /// `timeOfDay` has no colon or a non-integer hour.
    MalformedTime(String),
    /// The hour parsed but is not in 0..=23.
    HourOutOfRange(u32),
    /// A numeric column is not a finite, non-negative number.
    InvalidNumber { field: &'static str, value: String },
}

impl std::fmt::Display for RowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RowError::Unreadable => write!(f, "unreadable CSV record"),
            RowError::MalformedTime(v) => write!(f, "malformed timeOfDay '{v}'"),
            RowError::HourOutOfRange(h) => write!(f, "hour {h} is outside 0..=23"),
            RowError::InvalidNumber { field, value } => write!(f, "invalid {field} '{value}'"),
        }
    }
}

impl std::error::Error for RowError {}

/// Trim and case-fold string fields, parse the hour and speeds.
pub fn normalize(raw: &RawRecord) -> Result<NormalizedRow, RowError> {
    let hour = parse_hour(&raw.time_of_day)?;
    let speed_limit = parse_speed("JunctionSpeedLimit", &raw.speed_limit)?;
    let vehicle_speed = parse_speed("VehicleSpeed", &raw.vehicle_speed)?;

    Ok(NormalizedRow {
        junction: raw.junction_name.trim().to_lowercase(),
        hour,
        direction_in: raw.direction_in.trim().to_uppercase(),
        direction_out: raw.direction_out.trim().to_uppercase(),
        weather: raw.weather.trim().to_lowercase(),
        speed_limit,
        vehicle_speed,
        vehicle_type: raw.vehicle_type.trim().to_lowercase(),
        is_electric_or_hybrid: raw.electric_hybrid.trim().eq_ignore_ascii_case("true"),
    })
}

fn parse_hour(time_of_day: &str) -> Result<u8, RowError> {
    let malformed = || RowError::MalformedTime(time_of_day.to_string());
    let (hh, _) = time_of_day.trim().split_once(':').ok_or_else(malformed)?;
    let hour: u32 = hh.trim().parse().map_err(|_| malformed())?;
    if hour as usize >= HOURS_PER_DAY {
        return Err(RowError::HourOutOfRange(hour));
    }
    u8::try_from(hour).map_err(|_| RowError::HourOutOfRange(hour))
}

/// An empty cell means zero; a cell of only whitespace is not a number.
fn parse_speed(field: &'static str, value: &str) -> Result<f64, RowError> {
    if value.is_empty() {
        return Ok(0.0);
    }
    match value.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(RowError::InvalidNumber {
            field,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw() -> RawRecord {
        RawRecord {
            junction_name: "  Elm Avenue/Rabbit Road ".to_string(),
            date: "15/06/2024".to_string(),
            time_of_day: "08:15:00".to_string(),
            direction_in: "n".to_string(),
            direction_out: " s".to_string(),
            weather: "Light Rain".to_string(),
            speed_limit: "30".to_string(),
            vehicle_speed: "41.5".to_string(),
            vehicle_type: "Truck".to_string(),
            electric_hybrid: "True".to_string(),
        }
    }

    #[test]
    fn normalizes_case_and_whitespace() {
        let row = normalize(&raw()).unwrap();
        assert_eq!(row.junction, "elm avenue/rabbit road");
        assert_eq!(row.hour, 8);
        assert_eq!(row.direction_in, "N");
        assert_eq!(row.direction_out, "S");
        assert_eq!(row.weather, "light rain");
        assert_eq!(row.speed_limit, 30.0);
        assert_eq!(row.vehicle_speed, 41.5);
        assert_eq!(row.vehicle_type, "truck");
        assert!(row.is_electric_or_hybrid);
    }

    #[test]
    fn blank_speeds_and_flag_default() {
        let mut r = raw();
        r.speed_limit = String::new();
        r.vehicle_speed = String::new();
        r.electric_hybrid = String::new();
        let row = normalize(&r).unwrap();
        assert_eq!(row.speed_limit, 0.0);
        assert_eq!(row.vehicle_speed, 0.0);
        assert!(!row.is_electric_or_hybrid);
    }

    #[test]
    fn whitespace_only_speed_is_rejected() {
        let mut r = raw();
        r.vehicle_speed = "   ".to_string();
        assert!(matches!(
            normalize(&r),
            Err(RowError::InvalidNumber { field: "VehicleSpeed", .. })
        ));

        let mut r = raw();
        r.speed_limit = " 30 ".to_string();
        assert_eq!(normalize(&r).unwrap().speed_limit, 30.0);
    }

    #[test]
    fn electric_flag_requires_true() {
        let mut r = raw();
        r.electric_hybrid = "FALSE".to_string();
        assert!(!normalize(&r).unwrap().is_electric_or_hybrid);
        r.electric_hybrid = "yes".to_string();
        assert!(!normalize(&r).unwrap().is_electric_or_hybrid);
    }

    #[test]
    fn time_without_colon_is_rejected() {
        let mut r = raw();
        r.time_of_day = "0815".to_string();
        assert_eq!(normalize(&r), Err(RowError::MalformedTime("0815".to_string())));
    }

    #[test]
    fn non_integer_hour_is_rejected() {
        let mut r = raw();
        r.time_of_day = "ab:15:00".to_string();
        assert!(matches!(normalize(&r), Err(RowError::MalformedTime(_))));
    }

    #[test]
    fn hour_past_midnight_is_rejected() {
        let mut r = raw();
        r.time_of_day = "24:00:00".to_string();
        assert_eq!(normalize(&r), Err(RowError::HourOutOfRange(24)));
    }

    #[test]
    fn bad_speed_is_rejected() {
        let mut r = raw();
        r.vehicle_speed = "fast".to_string();
        assert_eq!(
            normalize(&r),
            Err(RowError::InvalidNumber {
                field: "VehicleSpeed",
                value: "fast".to_string()
            })
        );

        let mut r = raw();
        r.speed_limit = "-30".to_string();
        assert!(matches!(
            normalize(&r),
            Err(RowError::InvalidNumber { field: "JunctionSpeedLimit", .. })
        ));
    }
}
