use std::fmt::Display;

use chrono::{NaiveDate, NaiveTime, TimeDelta, TimeZone, Utc};
use entities::{custom_methods::time_of_day::parse_hour_minute, scheduled_notification};
use notifier::NotificationScheduler;
use storage_adapters::{
    scheduled_notification_adapter::{ScheduledNotificationAdapter, ScheduledNotificationMutation},
    KeyValueStore,
};
use tracing::{event, Level};
use uuid::Uuid;

use crate::{
    appointments::{
        types::{AppointmentConfirmation, SchedulingContext},
        zoned_time::wall_clock_to_instant,
    },
    calendar::format_long_date,
    error_500,
    time_slots::types::TimeSlot,
    UseCaseError,
};

pub const REMINDER_LEAD_MINUTES: i64 = 15;
pub const REMINDER_TITLE: &str = "Appointment Reminder";

/// Books `time_slot` on `date` and registers a reminder ahead of it.
///
/// A reminder that would already be due is silently skipped; the
/// confirmation is returned either way.
#[tracing::instrument(name = "Scheduling an appointment", skip_all, fields(date = %date, time = %time_slot.time))]
pub async fn schedule_appointment<'a, R, L, N, S>(
    date: NaiveDate,
    time_slot: &TimeSlot,
    context: &SchedulingContext<R, L>,
    notifier: &N,
    notification_adapter: ScheduledNotificationAdapter<'a, S>,
) -> Result<AppointmentConfirmation, UseCaseError>
where
    R: TimeZone,
    R::Offset: Display,
    L: TimeZone,
    L::Offset: Display,
    N: NotificationScheduler,
    S: KeyValueStore,
{
    let (hour, minute) = parse_hour_minute(&time_slot.time)?;
    let time = NaiveTime::from_hms_opt(hour, minute, 0)
        .ok_or_else(|| UseCaseError::BadRequest(format!("Invalid time: {}", time_slot.time)))?;

    let appointment = wall_clock_to_instant(&context.reference_timezone, date, time)?;
    let nyc_time = appointment.format("%H:%M").to_string();
    let local_time = appointment
        .with_timezone(&context.local_timezone)
        .format("%H:%M")
        .to_string();
    let formatted_date = format_long_date(date);

    let reminder_at = appointment.with_timezone(&Utc) - TimeDelta::minutes(REMINDER_LEAD_MINUTES);
    let reminder = if reminder_at <= context.now {
        event!(Level::INFO, %reminder_at, "Reminder is already due, skipping");
        None
    } else {
        let body = format!(
            "You have an appointment scheduled at {} {} time ({} local time) on {}",
            nyc_time, context.reference_timezone_label, local_time, formatted_date
        );
        let notification_id = notifier
            .schedule_at(REMINDER_TITLE, &body, reminder_at)
            .await
            .map_err(error_500)?;

        match notification_id {
            Some(notification_id) => {
                let reminder_local = reminder_at.with_timezone(&context.local_timezone);
                let notification = scheduled_notification::Model {
                    id: Uuid::now_v7(),
                    title: REMINDER_TITLE.to_string(),
                    body,
                    scheduled_date: reminder_local.format("%Y-%m-%d").to_string(),
                    scheduled_time: reminder_local.format("%H:%M").to_string(),
                    notification_id,
                    created_at: context.now,
                };
                notification_adapter
                    .create(notification.clone())
                    .await
                    .map_err(error_500)?;
                Some(notification)
            }
            None => None,
        }
    };

    Ok(AppointmentConfirmation {
        nyc_time,
        local_time,
        date: formatted_date,
        reminder,
    })
}
