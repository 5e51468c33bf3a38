use thiserror::Error;

use shared_utils::time::TimeParseError;

#[derive(Error, Debug)]
pub enum AvailabilityError {
    #[error("Invalid appointment duration: {minutes} minutes")]
    InvalidDuration { minutes: i32 },

    #[error("Opening time (minute {work_start}) must precede closing time (minute {work_end}) within one day")]
    InvalidWorkingHours { work_start: i32, work_end: i32 },

    #[error("Lunch break (minutes {lunch_start}-{lunch_end}) must fall inside working hours")]
    InvalidLunchBreak { lunch_start: i32, lunch_end: i32 },

    #[error("Malformed clock time in clinic settings: {0}")]
    MalformedTime(#[from] TimeParseError),

    #[error("Unknown weekday in clinic settings: '{0}'")]
    UnknownWeekday(String),
}
