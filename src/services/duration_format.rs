pub struct DurationFormatter;

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("{} {}", count, unit)
    } else {
        format!("{} {}s", count, unit)
    }
}

impl DurationFormatter {
    /// Format a trip duration given in minutes ("1h 30m", "2 hours", "45 minutes")
    pub fn trip(minutes: Option<i64>) -> String {
        let minutes = match minutes {
            Some(m) if m > 0 => m,
            _ => return "Duration TBD".to_string(),
        };

        if minutes >= 60 {
            let hours = minutes / 60;
            let remainder = minutes % 60;
            if remainder > 0 {
                format!("{}h {}m", hours, remainder)
            } else {
                plural(hours, "hour")
            }
        } else {
            plural(minutes, "minute")
        }
    }

    /// Format a trip duration that carries its own unit. Unknown or missing
    /// units are read as minutes.
    pub fn trip_with_unit(duration: Option<i64>, unit: Option<&str>) -> String {
        let unit = unit.map(|u| u.trim().to_ascii_lowercase());
        match unit.as_deref() {
            Some("hour") | Some("hours") => {
                Self::trip(duration.and_then(|h| h.checked_mul(60)))
            }
            Some("day") | Some("days") => match duration {
                Some(d) if d > 0 => plural(d, "day"),
                _ => "Duration TBD".to_string(),
            },
            _ => Self::trip(duration),
        }
    }

    /// Format a course length given in days ("1 Day", "5 Days")
    pub fn course(days: Option<f64>) -> String {
        match days {
            Some(d) if d.is_finite() && d > 0.0 => {
                if d == 1.0 {
                    "1 Day".to_string()
                } else {
                    format!("{} Days", d)
                }
            }
            _ => "N/A".to_string(),
        }
    }
}
