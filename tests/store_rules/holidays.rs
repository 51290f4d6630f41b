use entities::store_override;
use use_cases::{
    availability::{is_store_closed, store_status},
    store_overrides::{create_store_override, delete_store_override, list_store_overrides},
    store_times::list_store_times,
    time_slots::generate_time_slots,
    UseCaseError,
};

use crate::utils::{holiday, init_store_api};

#[tokio::test]
async fn holiday_closes_an_otherwise_open_day() -> Result<(), UseCaseError> {
    let api = init_store_api();
    let store_times = list_store_times(api.store_times()).await?;
    let store_overrides = list_store_overrides(api.store_overrides()).await?;

    // 2026-12-25 is a Friday.
    let date = holiday();
    assert!(is_store_closed(date, &store_times, &store_overrides));
    assert!(generate_time_slots(date, &store_times, &store_overrides)?.is_empty());
    assert_eq!(store_status(date, &store_times, &store_overrides).status_text, "Holiday/Closed");

    delete_store_override(api.store_overrides(), "holiday").await?;
    let store_overrides = list_store_overrides(api.store_overrides()).await?;
    assert!(store_overrides.is_empty());
    assert_eq!(store_status(date, &store_times, &store_overrides).status_text, "Open");
    assert_eq!(generate_time_slots(date, &store_times, &store_overrides)?.len(), 96);
    Ok(())
}

#[tokio::test]
async fn special_hours_open_a_closed_sunday() -> Result<(), UseCaseError> {
    let api = init_store_api();
    // 2026-12-27 is a Sunday.
    let date = chrono::NaiveDate::from_ymd_opt(2026, 12, 27).unwrap();
    create_store_override(
        api.store_overrides(),
        store_override::CreateParams {
            month: 12,
            day: 27,
            is_open: true,
            start_time: "12:00".to_string(),
            end_time: "14:00".to_string(),
        },
    )
    .await?;

    let store_times = list_store_times(api.store_times()).await?;
    let store_overrides = list_store_overrides(api.store_overrides()).await?;
    let status = store_status(date, &store_times, &store_overrides);
    assert!(status.is_open);
    assert!(status.is_override);
    assert_eq!(status.status_text, "Special Hours");

    let available = generate_time_slots(date, &store_times, &store_overrides)?
        .into_iter()
        .filter(|slot| slot.is_available)
        .map(|slot| slot.time)
        .collect::<Vec<_>>();
    assert_eq!(available, vec!["12:00", "12:15", "12:30", "12:45", "13:00", "13:15", "13:30", "13:45"]);
    Ok(())
}

#[tokio::test]
async fn duplicate_holiday_is_rejected() {
    let api = init_store_api();
    let result = create_store_override(
        api.store_overrides(),
        store_override::CreateParams {
            month: 12,
            day: 25,
            is_open: true,
            start_time: "10:00".to_string(),
            end_time: "12:00".to_string(),
        },
    )
    .await;

    assert!(matches!(result, Err(UseCaseError::Conflict(_))));
}
