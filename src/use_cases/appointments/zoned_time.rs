use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone};

use crate::UseCaseError;

/// Resolves a wall-clock time in `timezone` to an instant.
///
/// A time repeated by a backward transition resolves to its earliest
/// occurrence. A time skipped by a forward transition is rejected.
pub fn wall_clock_to_instant<Tz: TimeZone>(
    timezone: &Tz,
    date: NaiveDate,
    time: NaiveTime,
) -> Result<DateTime<Tz>, UseCaseError> {
    timezone
        .from_local_datetime(&date.and_time(time))
        .earliest()
        .ok_or_else(|| {
            UseCaseError::BadRequest(format!(
                "{} {} does not exist in the store's timezone",
                date,
                time.format("%H:%M")
            ))
        })
}
