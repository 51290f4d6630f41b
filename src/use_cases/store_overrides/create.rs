use api_adapters::store_override_adapter::{StoreOverrideMutation, StoreOverrideQuery};
use chrono::{Month, NaiveDate};
use entities::{custom_methods::time_of_day::parse_hour_minute, store_override};

use crate::{error_500, UseCaseError};

/// Creates a date override. Only one override per month and day may exist.
///
/// The date is checked against a leap year so that February 29 is accepted.
#[tracing::instrument(name = "Creating a store override", skip(store_override_adapter))]
pub async fn create_store_override<A>(
    store_override_adapter: A,
    params: store_override::CreateParams,
) -> Result<store_override::Model, UseCaseError>
where
    A: StoreOverrideQuery + StoreOverrideMutation + Clone,
{
    let month = Month::try_from(params.month).map_err(|_| {
        UseCaseError::BadRequest(format!("month must be between 1 and 12, got {}", params.month))
    })?;
    if NaiveDate::from_ymd_opt(2024, params.month.into(), params.day.into()).is_none() {
        return Err(UseCaseError::BadRequest(format!(
            "{} has no day {}",
            month.name(),
            params.day
        )));
    }
    parse_hour_minute(&params.start_time)?;
    parse_hour_minute(&params.end_time)?;

    let existing = store_override_adapter
        .clone()
        .get_by_date(params.month, params.day)
        .await
        .map_err(error_500)?;
    if !existing.is_empty() {
        return Err(UseCaseError::Conflict(format!(
            "Override for {} {} already exists. Please delete the existing one first.",
            month.name(),
            params.day
        )));
    }

    store_override_adapter
        .create(params)
        .await
        .map_err(error_500)
}
