pub mod time;

pub use time::{format_clock_time, parse_clock_time, TimeParseError, MINUTES_PER_DAY};
