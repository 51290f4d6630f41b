use std::fmt::Display;

use chrono::{NaiveDate, NaiveTime, TimeZone};

use crate::{
    appointments::wall_clock_to_instant,
    time_slots::types::{LocalTimeSlot, TimeSlot},
};

/// Renders the slots of `date` in `local_timezone`.
///
/// Each slot is resolved through the reference timezone on that date, so the
/// offset used is the one in force at the slot itself. Slots whose wall-clock
/// time is skipped by a forward DST transition cannot be booked and are left
/// out.
pub fn localize_time_slots<R, L>(
    date: NaiveDate,
    slots: &[TimeSlot],
    reference_timezone: &R,
    local_timezone: &L,
) -> Vec<LocalTimeSlot>
where
    R: TimeZone,
    L: TimeZone,
    L::Offset: Display,
{
    slots
        .iter()
        .filter_map(|slot| {
            let time = NaiveTime::from_hms_opt(slot.hour, slot.minute, 0)?;
            let local = wall_clock_to_instant(reference_timezone, date, time)
                .ok()?
                .with_timezone(local_timezone);
            Some(LocalTimeSlot {
                id: slot.id.clone(),
                time: slot.time.clone(),
                local_date: local.date_naive(),
                local_time: local.format("%H:%M").to_string(),
                is_available: slot.is_available,
            })
        })
        .collect()
}
