use api_adapters::store_time_adapter::{StoreTimeMutation, StoreTimeQuery};
use chrono::Weekday;
use entities::{
    custom_methods::{store_time::StoreTimeTrait, time_of_day::parse_hour_minute},
    store_time,
};

use crate::{error_500, UseCaseError};

/// Creates a weekly rule. Only one rule per weekday may exist.
#[tracing::instrument(name = "Creating a store time", skip(store_time_adapter))]
pub async fn create_store_time<A>(
    store_time_adapter: A,
    params: store_time::CreateParams,
) -> Result<store_time::Model, UseCaseError>
where
    A: StoreTimeQuery + StoreTimeMutation + Clone,
{
    let weekday = params.get_weekday().ok_or(UseCaseError::BadRequest(format!(
        "day_of_week must be between 0 and 6, got {}",
        params.day_of_week
    )))?;
    parse_hour_minute(&params.start_time)?;
    parse_hour_minute(&params.end_time)?;

    let existing = store_time_adapter
        .clone()
        .get_by_day(params.day_of_week)
        .await
        .map_err(error_500)?;
    if !existing.is_empty() {
        return Err(UseCaseError::Conflict(format!(
            "Store time for {} already exists. Please delete the existing one first.",
            day_name(weekday)
        )));
    }

    store_time_adapter
        .create(params)
        .await
        .map_err(error_500)
}

fn day_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
