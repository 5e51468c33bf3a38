use thiserror::Error;

/// Minutes in one calendar day; the inclusive upper bound for
/// minute-of-day offsets ("24:00" marks a midnight close).
pub const MINUTES_PER_DAY: i32 = 24 * 60;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeParseError {
    #[error("Expected an HH:MM clock time, got '{0}'")]
    InvalidFormat(String),

    #[error("Clock time '{0}' is outside the calendar day")]
    OutOfRange(String),
}

/// Parse an "HH:MM" clock time into a minute-of-day offset.
pub fn parse_clock_time(value: &str) -> Result<i32, TimeParseError> {
    let (hours, minutes) = value
        .split_once(':')
        .ok_or_else(|| TimeParseError::InvalidFormat(value.to_string()))?;

    let hours: i32 = hours
        .parse()
        .map_err(|_| TimeParseError::InvalidFormat(value.to_string()))?;
    let minutes: i32 = minutes
        .parse()
        .map_err(|_| TimeParseError::InvalidFormat(value.to_string()))?;

    if !(0..=24).contains(&hours) || !(0..60).contains(&minutes) {
        return Err(TimeParseError::OutOfRange(value.to_string()));
    }

    let minute_of_day = hours * 60 + minutes;
    if minute_of_day > MINUTES_PER_DAY {
        return Err(TimeParseError::OutOfRange(value.to_string()));
    }

    Ok(minute_of_day)
}

/// Format a minute-of-day offset as an "HH:MM" label.
pub fn format_clock_time(minute_of_day: i32) -> String {
    format!("{:02}:{:02}", minute_of_day / 60, minute_of_day % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn parses_clock_times() {
        assert_eq!(parse_clock_time("00:00").unwrap(), 0);
        assert_eq!(parse_clock_time("08:00").unwrap(), 480);
        assert_eq!(parse_clock_time("12:30").unwrap(), 750);
        assert_eq!(parse_clock_time("24:00").unwrap(), MINUTES_PER_DAY);
    }

    #[test]
    fn rejects_malformed_input() {
        assert_matches!(parse_clock_time("0800"), Err(TimeParseError::InvalidFormat(_)));
        assert_matches!(parse_clock_time("eight:00"), Err(TimeParseError::InvalidFormat(_)));
        assert_matches!(parse_clock_time("12:"), Err(TimeParseError::InvalidFormat(_)));
    }

    #[test]
    fn rejects_out_of_range_input() {
        assert_matches!(parse_clock_time("25:00"), Err(TimeParseError::OutOfRange(_)));
        assert_matches!(parse_clock_time("12:60"), Err(TimeParseError::OutOfRange(_)));
        assert_matches!(parse_clock_time("24:01"), Err(TimeParseError::OutOfRange(_)));
    }

    #[test]
    fn formats_minute_offsets() {
        assert_eq!(format_clock_time(0), "00:00");
        assert_eq!(format_clock_time(480), "08:00");
        assert_eq!(format_clock_time(1075), "17:55");
    }

    #[test]
    fn format_round_trips_parse() {
        for minute in [0, 30, 480, 735, 1080, 1439] {
            assert_eq!(parse_clock_time(&format_clock_time(minute)).unwrap(), minute);
        }
    }
}
