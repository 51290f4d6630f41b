use chrono::NaiveDate;
use entities::{store_override, store_time};

use crate::availability::{resolve_availability, types::StoreStatus};

pub fn store_status(
    date: NaiveDate,
    store_times: &[store_time::Model],
    store_overrides: &[store_override::Model],
) -> StoreStatus {
    let availability = resolve_availability(date, store_times, store_overrides);
    let status_text = match (availability.is_override, availability.is_open) {
        (true, true) => "Special Hours",
        (true, false) => "Holiday/Closed",
        (false, true) => "Open",
        (false, false) => "Closed",
    };
    StoreStatus {
        is_open: availability.is_open,
        is_override: availability.is_override,
        status_text,
    }
}
