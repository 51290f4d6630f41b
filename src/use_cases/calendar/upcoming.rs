use chrono::{Days, NaiveDate};

use crate::calendar::types::UpcomingDate;

pub const DEFAULT_UPCOMING_DAYS: u32 = 30;

/// `Friday, October 16, 2026`
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// The next `count` dates starting with `today`.
pub fn upcoming_dates(today: NaiveDate, count: u32) -> Vec<UpcomingDate> {
    (0..count)
        .map_while(|index| {
            let date = today.checked_add_days(Days::new(index.into()))?;
            Some(UpcomingDate {
                id: index.to_string(),
                date,
                formatted_date: format_long_date(date),
                short_date: date.format("%b %-d").to_string(),
                day_name: date.format("%A").to_string(),
                is_today: index == 0,
            })
        })
        .collect()
}
