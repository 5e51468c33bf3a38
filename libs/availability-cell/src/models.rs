// libs/availability-cell/src/models.rs
use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use shared_utils::time::format_clock_time;

// ==============================================================================
// CLINIC SCHEDULE MODELS
// ==============================================================================

/// Raw clinic settings record as the configuration provider returns it.
///
/// Clock times are "HH:MM" strings and every field besides the clinic id
/// is optional; absent fields take the clinic defaults during resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClinicScheduleSettings {
    pub clinic_id: Uuid,
    pub working_days: Option<Vec<String>>,
    pub work_start: Option<String>,
    pub work_end: Option<String>,
    pub has_lunch_break: Option<bool>,
    pub lunch_start: Option<String>,
    pub lunch_end: Option<String>,
}

/// Validated operating calendar for one clinic, minute-of-day resolution.
///
/// Immutable for the duration of one availability computation. Invariants
/// (`work_start < work_end`, lunch window inside working hours) are
/// enforced by `services::schedule::validate_schedule`.
#[derive(Debug, Clone, PartialEq)]
pub struct ClinicSchedule {
    pub clinic_id: Uuid,
    pub working_days: Vec<Weekday>,
    pub work_start: i32,
    pub work_end: i32,
    pub has_lunch_break: bool,
    pub lunch_start: i32,
    pub lunch_end: i32,
}

impl ClinicSchedule {
    pub fn is_working_day(&self, weekday: Weekday) -> bool {
        self.working_days.contains(&weekday)
    }

    /// Lunch window, when enabled and non-degenerate. A zero-width lunch
    /// break blocks nothing.
    pub fn lunch_window(&self) -> Option<(i32, i32)> {
        if self.has_lunch_break && self.lunch_start < self.lunch_end {
            Some((self.lunch_start, self.lunch_end))
        } else {
            None
        }
    }
}

// ==============================================================================
// BOOKING MODELS
// ==============================================================================

/// A confirmed appointment occupying time on the clinic calendar.
///
/// Owned by the booking repository; the engine only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExistingBooking {
    pub date: NaiveDate,
    pub start_minute: i32,
    pub duration_minutes: i32,
}

impl ExistingBooking {
    /// Minute-of-day at which the booking ends.
    pub fn end_minute(&self) -> i32 {
        self.start_minute + self.duration_minutes
    }
}

// ==============================================================================
// SLOT MODELS
// ==============================================================================

/// Why a candidate slot cannot be booked. Presentation layers map these
/// codes to user-facing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotUnavailableReason {
    NonWorkingDay,
    OutsideHours,
    LunchBreakConflict,
    BookingConflict,
}

impl fmt::Display for SlotUnavailableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotUnavailableReason::NonWorkingDay => write!(f, "non_working_day"),
            SlotUnavailableReason::OutsideHours => write!(f, "outside_hours"),
            SlotUnavailableReason::LunchBreakConflict => write!(f, "lunch_break_conflict"),
            SlotUnavailableReason::BookingConflict => write!(f, "booking_conflict"),
        }
    }
}

/// Morning/afternoon/evening display bucket, keyed by slot start hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DaySegment {
    Morning,
    Afternoon,
    Evening,
}

impl DaySegment {
    /// Morning before 12:00, afternoon before 18:00, evening after.
    pub fn from_start_minute(start_minute: i32) -> Self {
        match start_minute / 60 {
            0..=11 => DaySegment::Morning,
            12..=17 => DaySegment::Afternoon,
            _ => DaySegment::Evening,
        }
    }
}

impl fmt::Display for DaySegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DaySegment::Morning => write!(f, "morning"),
            DaySegment::Afternoon => write!(f, "afternoon"),
            DaySegment::Evening => write!(f, "evening"),
        }
    }
}

/// One fixed-duration time window on the clinic calendar.
///
/// `unavailable_reason` is present exactly when `is_available` is false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start_minute: i32,
    pub end_minute: i32,
    pub segment: DaySegment,
    pub is_available: bool,
    pub unavailable_reason: Option<SlotUnavailableReason>,
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            format_clock_time(self.start_minute),
            format_clock_time(self.end_minute)
        )
    }
}

// ==============================================================================
// RESPONSE MODELS
// ==============================================================================

/// Every candidate slot for one clinic-local day, ordered by start time.
///
/// The full sequence (unavailable slots included) is the canonical
/// output; callers filter to available-only as needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayAvailability {
    pub clinic_id: Uuid,
    pub date: NaiveDate,
    pub slots: Vec<TimeSlot>,
}

impl DayAvailability {
    /// True when at least one enumerated slot can still be booked.
    pub fn has_availability(&self) -> bool {
        self.slots.iter().any(|slot| slot.is_available)
    }

    pub fn available_slots(&self) -> impl Iterator<Item = &TimeSlot> {
        self.slots.iter().filter(|slot| slot.is_available)
    }

    /// Earliest bookable slot of the day, if any.
    pub fn first_available(&self) -> Option<&TimeSlot> {
        self.slots.iter().find(|slot| slot.is_available)
    }

    /// Split the ordered slot list into morning/afternoon/evening groups.
    ///
    /// Every slot lands in exactly one group and order is preserved. A
    /// segment whose candidates are all unavailable is still present, so
    /// callers can tell "no candidates" from "candidates, none free".
    pub fn into_segments(self) -> SegmentedDayAvailability {
        let has_availability = self.has_availability();

        let mut morning = Vec::new();
        let mut afternoon = Vec::new();
        let mut evening = Vec::new();

        for slot in self.slots {
            match slot.segment {
                DaySegment::Morning => morning.push(slot),
                DaySegment::Afternoon => afternoon.push(slot),
                DaySegment::Evening => evening.push(slot),
            }
        }

        SegmentedDayAvailability {
            clinic_id: self.clinic_id,
            date: self.date,
            morning,
            afternoon,
            evening,
            has_availability,
        }
    }
}

// DTO for the grouped availability response consumed by the rendering layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentedDayAvailability {
    pub clinic_id: Uuid,
    pub date: NaiveDate,
    pub morning: Vec<TimeSlot>,
    pub afternoon: Vec<TimeSlot>,
    pub evening: Vec<TimeSlot>,
    pub has_availability: bool,
}
