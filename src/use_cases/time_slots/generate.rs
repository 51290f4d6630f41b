use chrono::NaiveDate;
use entities::{
    custom_methods::time_of_day::{format_hour_minute, minutes_since_midnight, MINUTES_PER_DAY},
    store_override, store_time,
};

use crate::{
    availability::{resolve_availability, types::OpenHours},
    time_slots::types::TimeSlot,
    UseCaseError,
};

pub const SLOT_MINUTES: u32 = 15;
pub const SLOTS_PER_DAY: usize = (MINUTES_PER_DAY / SLOT_MINUTES) as usize;

/// Lists every 15-minute slot of `date` with its availability.
///
/// Returns no slots at all when the store is closed that day, otherwise
/// exactly [`SLOTS_PER_DAY`] slots starting at 00:00.
pub fn generate_time_slots(
    date: NaiveDate,
    store_times: &[store_time::Model],
    store_overrides: &[store_override::Model],
) -> Result<Vec<TimeSlot>, UseCaseError> {
    let availability = resolve_availability(date, store_times, store_overrides);
    if !availability.is_open || availability.hours.is_empty() {
        return Ok(vec![]);
    }

    let ranges = availability
        .hours
        .iter()
        .map(MinuteRange::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    let slots = (0..SLOTS_PER_DAY)
        .map(|index| {
            let current = index as u32 * SLOT_MINUTES;
            let (hour, minute) = (current / 60, current % 60);
            TimeSlot {
                id: format!("slot-{}", index),
                hour,
                minute,
                time: format_hour_minute(hour, minute),
                is_available: ranges.iter().any(|range| range.contains(current)),
            }
        })
        .collect();
    Ok(slots)
}

struct MinuteRange {
    start: u32,
    end: u32,
}

impl MinuteRange {
    /// Start inclusive, end exclusive. An end before the start runs past midnight.
    fn contains(&self, minutes: u32) -> bool {
        if self.end < self.start {
            minutes >= self.start || minutes < self.end
        } else {
            self.start <= minutes && minutes < self.end
        }
    }
}

impl TryFrom<&OpenHours> for MinuteRange {
    type Error = UseCaseError;

    fn try_from(hours: &OpenHours) -> Result<Self, Self::Error> {
        Ok(Self {
            start: minutes_since_midnight(&hours.start_time)?,
            end: minutes_since_midnight(&hours.end_time)?,
        })
    }
}
