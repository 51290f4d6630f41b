use chrono::NaiveDate;
use entities::store_time;
use use_cases::{
    availability::store_status,
    calendar::upcoming_dates,
    store_overrides::list_store_overrides,
    store_times::{create_store_time, delete_store_time, list_store_times},
    UseCaseError,
};

use crate::utils::init_store_api;

#[tokio::test]
async fn replacing_sunday_hours_opens_sundays() -> Result<(), UseCaseError> {
    let api = init_store_api();
    let params = store_time::CreateParams {
        day_of_week: 0,
        is_open: true,
        start_time: "11:00".to_string(),
        end_time: "15:00".to_string(),
    };

    assert!(matches!(
        create_store_time(api.store_times(), params.clone()).await,
        Err(UseCaseError::Conflict(_))
    ));

    let sunday = list_store_times(api.store_times())
        .await?
        .into_iter()
        .find(|store_time| store_time.day_of_week == 0)
        .unwrap();
    delete_store_time(api.store_times(), &sunday.id).await?;
    create_store_time(api.store_times(), params).await?;

    let store_times = list_store_times(api.store_times()).await?;
    let store_overrides = list_store_overrides(api.store_overrides()).await?;
    // 2026-10-18 is a Sunday.
    let week = upcoming_dates(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(), 7);
    let statuses = week
        .iter()
        .map(|upcoming| store_status(upcoming.date, &store_times, &store_overrides).status_text)
        .collect::<Vec<_>>();
    assert_eq!(statuses, vec!["Open"; 7]);
    assert_eq!(week[0].day_name, "Sunday");
    Ok(())
}

#[tokio::test]
async fn unavailable_api_is_reported() {
    let api = test_utils::InMemoryStoreApi::unavailable();
    assert!(matches!(
        list_store_times(api.store_times()).await,
        Err(UseCaseError::InternalServerError(_))
    ));
}
