pub mod availability;
pub mod schedule;

pub use availability::{AvailabilityService, SLOT_INTERVAL_MINUTES};
pub use schedule::{resolve_schedule, validate_schedule};
