use std::path::PathBuf;

use chrono::{Datelike, Days, NaiveDate, Utc};
use chrono_tz::{America::New_York, Tz};
use common::factory::{self, StoreOverrideFactory, StoreTimeFactory};
use storage_adapters::FileStore;
use test_utils::InMemoryStoreApi;
use uuid::Uuid;

pub fn temp_storage_dir() -> PathBuf {
    std::env::temp_dir().join(format!("store_scheduler_tests_{}", Uuid::now_v7()))
}

pub fn init_file_store() -> (FileStore, PathBuf) {
    let dir = temp_storage_dir();
    (FileStore::new(&dir), dir)
}

/// Open 09:00-17:00 Monday to Saturday, closed on Sundays and on the day
/// returned by [`holiday`].
pub fn init_store_api() -> InMemoryStoreApi {
    let mut store_times = (1..=6)
        .map(|day| factory::store_time(day).hours("09:00", "17:00"))
        .collect::<Vec<_>>();
    store_times.push(factory::store_time(0).is_open(false));

    let holiday = holiday();
    let store_overrides = vec![factory::store_override(holiday.month() as u8, holiday.day() as u8)
        .is_open(false)
        .id("holiday")];
    InMemoryStoreApi::new(store_times, store_overrides)
}

pub fn holiday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 12, 25).unwrap()
}

pub fn today_in_new_york() -> NaiveDate {
    Utc::now().with_timezone(&New_York).date_naive()
}

/// The first day strictly after today in New York that is a weekday other
/// than Sunday and not the holiday.
pub fn next_open_day() -> NaiveDate {
    let mut date = today_in_new_york();
    loop {
        date = date.checked_add_days(Days::new(1)).unwrap();
        if date.weekday().num_days_from_sunday() != 0
            && (date.month(), date.day()) != (holiday().month(), holiday().day())
        {
            return date;
        }
    }
}

pub fn new_york() -> Tz {
    New_York
}
