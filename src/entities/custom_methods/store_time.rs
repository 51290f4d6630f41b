use chrono::Weekday;

use crate::store_time;

pub trait StoreTimeTrait {
    fn get_weekday(&self) -> Option<Weekday>;
}

impl StoreTimeTrait for store_time::Model {
    fn get_weekday(&self) -> Option<Weekday> {
        weekday_from_sunday(self.day_of_week)
    }
}

impl StoreTimeTrait for store_time::CreateParams {
    fn get_weekday(&self) -> Option<Weekday> {
        weekday_from_sunday(self.day_of_week)
    }
}

/// `day_of_week` counts from Sunday, chrono's `Weekday` counts from Monday.
fn weekday_from_sunday(day_of_week: u8) -> Option<Weekday> {
    match day_of_week {
        0 => Some(Weekday::Sun),
        1..=6 => Weekday::try_from(day_of_week - 1).ok(),
        _ => None,
    }
}
