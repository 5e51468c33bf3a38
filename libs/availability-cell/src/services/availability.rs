use chrono::{Datelike, Duration, NaiveDate};
use tracing::debug;

use crate::error::AvailabilityError;
use crate::models::{
    ClinicSchedule, ClinicScheduleSettings, DayAvailability, DaySegment, ExistingBooking,
    SlotUnavailableReason, TimeSlot,
};
use crate::services::schedule::{resolve_schedule, validate_schedule};

/// Candidate slot starts are enumerated on a fixed 30 minute grid.
pub const SLOT_INTERVAL_MINUTES: i32 = 30;

/// Computes bookable time windows on a clinic's shared calendar.
///
/// The service is a pure function of its inputs: the caller fetches the
/// clinic settings and the confirmed bookings, the service only does the
/// interval arithmetic. No clock is read; the target date is always an
/// explicit argument.
#[derive(Debug)]
pub struct AvailabilityService {
    schedule: ClinicSchedule,
}

impl AvailabilityService {
    pub fn new(schedule: ClinicSchedule) -> Result<Self, AvailabilityError> {
        validate_schedule(&schedule)?;
        Ok(Self { schedule })
    }

    /// Build the service straight from a raw clinic settings record.
    pub fn from_settings(settings: &ClinicScheduleSettings) -> Result<Self, AvailabilityError> {
        Ok(Self {
            schedule: resolve_schedule(settings)?,
        })
    }

    pub fn schedule(&self) -> &ClinicSchedule {
        &self.schedule
    }

    /// Compute every candidate slot for one clinic-local day.
    ///
    /// Slots come back in ascending start order, each either available or
    /// tagged with the first failing check. Candidates that would run past
    /// closing time are dropped entirely: they can never be booked, so
    /// they do not appear even as unavailable.
    pub fn compute_day_availability(
        &self,
        date: NaiveDate,
        duration_minutes: i32,
        bookings: &[ExistingBooking],
    ) -> Result<DayAvailability, AvailabilityError> {
        if duration_minutes <= 0 {
            return Err(AvailabilityError::InvalidDuration {
                minutes: duration_minutes,
            });
        }

        debug!(
            "Computing availability for clinic {} on {} with {} minute slots",
            self.schedule.clinic_id, date, duration_minutes
        );

        // Slots on a closed day are still enumerated and individually
        // tagged, so callers can render "closed today" per slot and a
        // clinic can still take an exceptional same-day booking.
        let is_working_day = self.schedule.is_working_day(date.weekday());

        let day_bookings: Vec<&ExistingBooking> = bookings
            .iter()
            .filter(|booking| booking.date == date)
            .collect();

        let mut slots = Vec::new();
        let mut start = self.schedule.work_start;

        while start + duration_minutes <= self.schedule.work_end {
            let end = start + duration_minutes;
            let reason = self.evaluate_slot(start, end, is_working_day, &day_bookings);

            slots.push(TimeSlot {
                start_minute: start,
                end_minute: end,
                segment: DaySegment::from_start_minute(start),
                is_available: reason.is_none(),
                unavailable_reason: reason,
            });

            start += SLOT_INTERVAL_MINUTES;
        }

        let available = slots.iter().filter(|slot| slot.is_available).count();
        debug!(
            "Enumerated {} candidate slots for {}, {} available",
            slots.len(),
            date,
            available
        );

        Ok(DayAvailability {
            clinic_id: self.schedule.clinic_id,
            date,
            slots,
        })
    }

    /// Scan forward day by day, starting at `from`, for the first
    /// bookable slot.
    ///
    /// Bookings are matched to each scanned day by their date field, so
    /// one list can cover the whole search range.
    pub fn find_next_available_slot(
        &self,
        from: NaiveDate,
        max_search_days: i32,
        duration_minutes: i32,
        bookings: &[ExistingBooking],
    ) -> Result<Option<(NaiveDate, TimeSlot)>, AvailabilityError> {
        for day_offset in 0..max_search_days {
            let date = from + Duration::days(day_offset as i64);
            let availability = self.compute_day_availability(date, duration_minutes, bookings)?;

            if let Some(slot) = availability.first_available() {
                debug!(
                    "Next available slot for clinic {} is {} on {}",
                    self.schedule.clinic_id, slot, date
                );
                return Ok(Some((date, slot.clone())));
            }
        }

        Ok(None)
    }

    // Private helper methods

    /// First failing check in precedence order, or None when bookable.
    fn evaluate_slot(
        &self,
        start: i32,
        end: i32,
        is_working_day: bool,
        bookings: &[&ExistingBooking],
    ) -> Option<SlotUnavailableReason> {
        if !is_working_day {
            return Some(SlotUnavailableReason::NonWorkingDay);
        }

        // Working hours are enforced structurally by the enumeration
        // bounds; this check cannot fire for enumerated candidates.
        if start < self.schedule.work_start || end > self.schedule.work_end {
            return Some(SlotUnavailableReason::OutsideHours);
        }

        if let Some((lunch_start, lunch_end)) = self.schedule.lunch_window() {
            if intervals_overlap(start, end, lunch_start, lunch_end) {
                return Some(SlotUnavailableReason::LunchBreakConflict);
            }
        }

        let booked = bookings
            .iter()
            .any(|booking| intervals_overlap(start, end, booking.start_minute, booking.end_minute()));
        if booked {
            return Some(SlotUnavailableReason::BookingConflict);
        }

        None
    }
}

/// Half-open interval overlap: touching endpoints do not conflict.
fn intervals_overlap(start1: i32, end1: i32, start2: i32, end2: i32) -> bool {
    start1 < end2 && start2 < end1
}
