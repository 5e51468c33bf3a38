use std::str::FromStr;

use chrono::Weekday;
use tracing::debug;

use shared_utils::time::{format_clock_time, parse_clock_time, MINUTES_PER_DAY};

use crate::error::AvailabilityError;
use crate::models::{ClinicSchedule, ClinicScheduleSettings};

// Clinic defaults applied when a settings field is absent
pub const DEFAULT_WORKING_DAYS: [Weekday; 5] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];
pub const DEFAULT_WORK_START: i32 = 8 * 60;
pub const DEFAULT_WORK_END: i32 = 18 * 60;
pub const DEFAULT_LUNCH_START: i32 = 12 * 60;
pub const DEFAULT_LUNCH_END: i32 = 13 * 60;

/// Resolve a raw clinic settings record into a validated schedule.
///
/// Absent fields take the clinic defaults (Mon-Fri, 08:00-18:00, lunch
/// 12:00-13:00). Malformed fields are rejected, never clamped.
pub fn resolve_schedule(
    settings: &ClinicScheduleSettings,
) -> Result<ClinicSchedule, AvailabilityError> {
    let working_days = match &settings.working_days {
        Some(names) => names
            .iter()
            .map(|name| {
                Weekday::from_str(name)
                    .map_err(|_| AvailabilityError::UnknownWeekday(name.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?,
        None => DEFAULT_WORKING_DAYS.to_vec(),
    };

    let schedule = ClinicSchedule {
        clinic_id: settings.clinic_id,
        working_days,
        work_start: resolve_time(settings.work_start.as_deref(), DEFAULT_WORK_START)?,
        work_end: resolve_time(settings.work_end.as_deref(), DEFAULT_WORK_END)?,
        has_lunch_break: settings.has_lunch_break.unwrap_or(true),
        lunch_start: resolve_time(settings.lunch_start.as_deref(), DEFAULT_LUNCH_START)?,
        lunch_end: resolve_time(settings.lunch_end.as_deref(), DEFAULT_LUNCH_END)?,
    };

    validate_schedule(&schedule)?;

    debug!(
        "Resolved schedule for clinic {}: {} working days, hours {}-{}",
        schedule.clinic_id,
        schedule.working_days.len(),
        format_clock_time(schedule.work_start),
        format_clock_time(schedule.work_end)
    );

    Ok(schedule)
}

/// Enforce the schedule invariants on an already-built schedule.
pub fn validate_schedule(schedule: &ClinicSchedule) -> Result<(), AvailabilityError> {
    if schedule.work_start < 0
        || schedule.work_end > MINUTES_PER_DAY
        || schedule.work_start >= schedule.work_end
    {
        return Err(AvailabilityError::InvalidWorkingHours {
            work_start: schedule.work_start,
            work_end: schedule.work_end,
        });
    }

    // A zero-width lunch window blocks nothing, so only a real window
    // must sit inside working hours.
    if schedule.has_lunch_break
        && schedule.lunch_start != schedule.lunch_end
        && (schedule.lunch_start > schedule.lunch_end
            || schedule.lunch_start < schedule.work_start
            || schedule.lunch_end > schedule.work_end)
    {
        return Err(AvailabilityError::InvalidLunchBreak {
            lunch_start: schedule.lunch_start,
            lunch_end: schedule.lunch_end,
        });
    }

    Ok(())
}

fn resolve_time(value: Option<&str>, default: i32) -> Result<i32, AvailabilityError> {
    match value {
        Some(raw) => Ok(parse_clock_time(raw)?),
        None => Ok(default),
    }
}
