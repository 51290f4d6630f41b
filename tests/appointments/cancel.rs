use chrono::{Duration, FixedOffset, TimeZone, Utc};
use notifier::LocalNotifier;
use storage_adapters::{
    scheduled_notification_adapter::ScheduledNotificationAdapter, KeyValueStore, MemoryStore,
};
use test_utils::FakeNotifier;
use use_cases::{
    appointments::{
        cancel_appointment, list_scheduled_notifications, schedule_appointment,
        types::SchedulingContext,
    },
    time_slots::generate_time_slots,
    UseCaseError,
};

use crate::utils::{init_file_store, init_store_api, new_york, next_open_day};

async fn book_all<N, S>(notifier: &N, store: &S, times: &[&str]) -> Result<(), UseCaseError>
where
    N: notifier::NotificationScheduler,
    S: KeyValueStore,
{
    let api = init_store_api();
    let date = next_open_day();
    let slots = generate_time_slots(
        date,
        &api.store_times.lock().unwrap().clone(),
        &api.store_overrides.lock().unwrap().clone(),
    )?;
    let context = SchedulingContext {
        reference_timezone: new_york(),
        reference_timezone_label: "NYC".to_string(),
        local_timezone: FixedOffset::east_opt(9 * 3600).unwrap(),
        now: Utc::now(),
    };
    for time in times {
        let slot = slots.iter().find(|slot| slot.time == *time).unwrap();
        schedule_appointment(
            date,
            slot,
            &context,
            notifier,
            ScheduledNotificationAdapter::init(store),
        )
        .await?;
    }
    Ok(())
}

#[tokio::test]
async fn cancel_removes_one_reminder_and_its_timer() -> Result<(), UseCaseError> {
    let (store, dir) = init_file_store();
    let (notifier, _delivered) = LocalNotifier::new();
    book_all(&notifier, &store, &["09:00", "12:00", "15:30"]).await?;
    assert_eq!(notifier.pending_count().await, 3);

    let before = list_scheduled_notifications(ScheduledNotificationAdapter::init(&store)).await?;
    cancel_appointment(before[1].id, &notifier, ScheduledNotificationAdapter::init(&store)).await?;

    let after = list_scheduled_notifications(ScheduledNotificationAdapter::init(&store)).await?;
    assert_eq!(after, vec![before[0].clone(), before[2].clone()]);
    assert_eq!(notifier.pending_count().await, 2);

    // The record is gone, so a second cancel is NotFound.
    assert!(matches!(
        cancel_appointment(before[1].id, &notifier, ScheduledNotificationAdapter::init(&store)).await,
        Err(UseCaseError::NotFound(_))
    ));

    std::fs::remove_dir_all(dir).ok();
    Ok(())
}

#[tokio::test]
async fn reminder_from_earlier_process_is_removed() -> Result<(), UseCaseError> {
    let store = MemoryStore::default();
    book_all(&FakeNotifier::new(), &store, &["11:00", "13:00"]).await?;
    let records = list_scheduled_notifications(ScheduledNotificationAdapter::init(&store)).await?;

    // A fresh notifier has no pending timer for the stored handle.
    let (notifier, _delivered) = LocalNotifier::new();
    cancel_appointment(records[0].id, &notifier, ScheduledNotificationAdapter::init(&store)).await?;

    assert_eq!(
        list_scheduled_notifications(ScheduledNotificationAdapter::init(&store)).await?,
        vec![records[1].clone()]
    );
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn fired_reminder_can_be_canceled() -> Result<(), UseCaseError> {
    let store = MemoryStore::default();
    let (notifier, mut delivered) = LocalNotifier::new();
    book_all(&notifier, &store, &["10:00"]).await?;
    let records = list_scheduled_notifications(ScheduledNotificationAdapter::init(&store)).await?;

    // Paused time auto-advances to the reminder.
    let notification = delivered.recv().await.unwrap();
    assert_eq!(notification.notification_id, records[0].notification_id);

    cancel_appointment(records[0].id, &notifier, ScheduledNotificationAdapter::init(&store)).await?;

    assert!(list_scheduled_notifications(ScheduledNotificationAdapter::init(&store))
        .await?
        .is_empty());
    Ok(())
}

#[tokio::test]
async fn refused_cancel_keeps_record() -> Result<(), UseCaseError> {
    let store = MemoryStore::default();
    let notifier = FakeNotifier::refusing_cancel();
    book_all(&notifier, &store, &["11:00"]).await?;
    let records = list_scheduled_notifications(ScheduledNotificationAdapter::init(&store)).await?;

    let result = cancel_appointment(records[0].id, &notifier, ScheduledNotificationAdapter::init(&store)).await;

    assert!(matches!(result, Err(UseCaseError::InternalServerError(_))));
    assert_eq!(
        list_scheduled_notifications(ScheduledNotificationAdapter::init(&store)).await?,
        records
    );
    Ok(())
}

#[tokio::test]
async fn past_appointment_sets_no_reminder() -> Result<(), UseCaseError> {
    let store = MemoryStore::default();
    let notifier = FakeNotifier::new();
    let api = init_store_api();
    let date = next_open_day();
    let slots = generate_time_slots(
        date,
        &api.store_times.lock().unwrap().clone(),
        &api.store_overrides.lock().unwrap().clone(),
    )?;
    let slot = slots.iter().find(|slot| slot.time == "09:00").unwrap();
    let appointment = new_york()
        .from_local_datetime(&date.and_hms_opt(9, 0, 0).unwrap())
        .unwrap()
        .with_timezone(&Utc);

    let context = SchedulingContext {
        reference_timezone: new_york(),
        reference_timezone_label: "NYC".to_string(),
        local_timezone: Utc,
        now: appointment - Duration::minutes(10),
    };
    let confirmation = schedule_appointment(
        date,
        slot,
        &context,
        &notifier,
        ScheduledNotificationAdapter::init(&store),
    )
    .await?;

    assert_eq!(confirmation.reminder, None);
    assert!(notifier.scheduled_calls().is_empty());
    assert!(list_scheduled_notifications(ScheduledNotificationAdapter::init(&store))
        .await?
        .is_empty());
    Ok(())
}
