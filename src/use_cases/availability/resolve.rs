use chrono::{Datelike, NaiveDate};
use entities::{
    custom_methods::{store_override::StoreOverrideTrait, store_time::StoreTimeTrait},
    store_override, store_time,
};

use crate::availability::types::{AvailabilityResult, OpenHours};

/// Decides whether the store is open on `date` and with which hours.
///
/// A date override matching the date's month and day wins outright and the
/// weekly rules are not consulted. When several overrides match, the one
/// with the lowest id is used. Otherwise every open weekly rule for the
/// weekday contributes its hours.
pub fn resolve_availability(
    date: NaiveDate,
    store_times: &[store_time::Model],
    store_overrides: &[store_override::Model],
) -> AvailabilityResult {
    let store_override = store_overrides
        .iter()
        .filter(|store_override| store_override.matches_date(date))
        .min_by(|a, b| a.id.cmp(&b.id));

    if let Some(store_override) = store_override {
        return match store_override.is_open {
            true => AvailabilityResult {
                is_open: true,
                hours: vec![OpenHours {
                    start_time: store_override.start_time.clone(),
                    end_time: store_override.end_time.clone(),
                }],
                is_override: true,
            },
            false => AvailabilityResult::closed(true),
        };
    }

    let weekday = date.weekday();
    let hours = store_times
        .iter()
        .filter(|store_time| store_time.is_open && store_time.get_weekday() == Some(weekday))
        .map(|store_time| OpenHours {
            start_time: store_time.start_time.clone(),
            end_time: store_time.end_time.clone(),
        })
        .collect::<Vec<_>>();

    AvailabilityResult {
        is_open: !hours.is_empty(),
        hours,
        is_override: false,
    }
}

pub fn is_store_closed(
    date: NaiveDate,
    store_times: &[store_time::Model],
    store_overrides: &[store_override::Model],
) -> bool {
    !resolve_availability(date, store_times, store_overrides).is_open
}
