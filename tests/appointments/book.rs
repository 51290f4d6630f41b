use chrono::{Local, Utc};
use notifier::LocalNotifier;
use storage_adapters::{
    scheduled_notification_adapter::{ScheduledNotificationAdapter, ScheduledNotificationQuery},
    FileStore,
};
use use_cases::{
    appointments::{list_scheduled_notifications, schedule_appointment, types::SchedulingContext, REMINDER_TITLE},
    store_overrides::list_store_overrides,
    store_times::list_store_times,
    time_slots::generate_time_slots,
    UseCaseError,
};

use crate::utils::{init_file_store, init_store_api, new_york, next_open_day};

#[tokio::test]
async fn book_persists_reminder_across_store_instances() -> Result<(), UseCaseError> {
    let api = init_store_api();
    let (store, dir) = init_file_store();
    let (notifier, _delivered) = LocalNotifier::new();
    let date = next_open_day();

    let store_times = list_store_times(api.store_times()).await?;
    let store_overrides = list_store_overrides(api.store_overrides()).await?;
    let slots = generate_time_slots(date, &store_times, &store_overrides)?;
    let slot = slots.iter().find(|slot| slot.time == "10:00").unwrap();
    assert!(slot.is_available);

    let context = SchedulingContext {
        reference_timezone: new_york(),
        reference_timezone_label: "NYC".to_string(),
        local_timezone: Local,
        now: Utc::now(),
    };
    let confirmation = schedule_appointment(
        date,
        slot,
        &context,
        &notifier,
        ScheduledNotificationAdapter::init(&store),
    )
    .await?;

    assert_eq!(confirmation.nyc_time, "10:00");
    let reminder = confirmation.reminder.unwrap();
    assert_eq!(reminder.title, REMINDER_TITLE);
    assert!(reminder.body.contains("10:00 NYC time"));
    assert_eq!(notifier.pending_count().await, 1);

    let reopened = FileStore::new(&dir);
    let persisted = list_scheduled_notifications(ScheduledNotificationAdapter::init(&reopened)).await?;
    assert_eq!(persisted, vec![reminder.clone()]);
    assert_eq!(
        ScheduledNotificationAdapter::init(&reopened)
            .get_by_id(reminder.id)
            .await
            .unwrap(),
        Some(reminder)
    );

    std::fs::remove_dir_all(dir).ok();
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn reminder_is_delivered_fifteen_minutes_ahead() -> Result<(), UseCaseError> {
    let api = init_store_api();
    let (store, dir) = init_file_store();
    let (notifier, mut delivered) = LocalNotifier::new();
    let date = next_open_day();

    let slots = generate_time_slots(
        date,
        &list_store_times(api.store_times()).await?,
        &list_store_overrides(api.store_overrides()).await?,
    )?;
    let slot = slots.iter().find(|slot| slot.time == "16:45").unwrap();

    let context = SchedulingContext {
        reference_timezone: new_york(),
        reference_timezone_label: "NYC".to_string(),
        local_timezone: new_york(),
        now: Utc::now(),
    };
    let confirmation = schedule_appointment(
        date,
        slot,
        &context,
        &notifier,
        ScheduledNotificationAdapter::init(&store),
    )
    .await?;
    let reminder = confirmation.reminder.unwrap();
    assert_eq!(reminder.scheduled_time, "16:30");

    // Paused time auto-advances to the reminder.
    let notification = delivered.recv().await.unwrap();
    assert_eq!(notification.notification_id, reminder.notification_id);
    assert_eq!(notification.title, REMINDER_TITLE);
    assert_eq!(notification.body, reminder.body);
    assert_eq!(notifier.pending_count().await, 0);

    std::fs::remove_dir_all(dir).ok();
    Ok(())
}
