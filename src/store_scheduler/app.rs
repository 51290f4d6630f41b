use api_adapters::{
    store_override_adapter::StoreOverrideAdapter, store_time_adapter::StoreTimeAdapter, ApiClient,
};
use chrono::{Local, NaiveDate, Utc};
use chrono_tz::Tz;
use common::settings::types::Settings;
use entities::{
    custom_methods::time_of_day::{format_hour_minute, parse_hour_minute},
    store_override, store_time,
};
use notifier::LocalNotifier;
use storage_adapters::{scheduled_notification_adapter::ScheduledNotificationAdapter, FileStore};
use tracing::{event, Level};
use use_cases::{
    appointments::{
        cancel_appointment, list_scheduled_notifications, schedule_appointment,
        types::{AppointmentConfirmation, SchedulingContext},
    },
    availability::store_status,
    calendar::upcoming_dates,
    store_overrides::list_store_overrides,
    store_times::list_store_times,
    time_slots::{generate_time_slots, localize_time_slots},
    UseCaseError,
};
use uuid::Uuid;

pub struct App {
    client: ApiClient,
    store: FileStore,
    pub notifier: LocalNotifier,
    reference_timezone: Tz,
    reference_timezone_label: String,
    upcoming_days: u32,
}

impl App {
    pub fn build(settings: &Settings, notifier: LocalNotifier) -> Result<Self, String> {
        Ok(Self {
            client: ApiClient::new(
                settings.store_api.base_url.clone(),
                settings.store_api.token.clone(),
            ),
            store: FileStore::new(&settings.storage.dir),
            notifier,
            reference_timezone: settings.scheduling.reference_tz()?,
            reference_timezone_label: settings.scheduling.reference_timezone_label.clone(),
            upcoming_days: settings.application.upcoming_days,
        })
    }

    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.reference_timezone).date_naive()
    }

    async fn fetch_rules(
        &self,
    ) -> Result<(Vec<store_time::Model>, Vec<store_override::Model>), UseCaseError> {
        let store_times = list_store_times(StoreTimeAdapter::init(&self.client)).await?;
        let store_overrides = list_store_overrides(StoreOverrideAdapter::init(&self.client)).await?;
        Ok((store_times, store_overrides))
    }

    pub async fn status(&self) -> Result<(), UseCaseError> {
        let (store_times, store_overrides) = self.fetch_rules().await?;
        for upcoming in upcoming_dates(self.today(), self.upcoming_days) {
            let status = store_status(upcoming.date, &store_times, &store_overrides);
            println!(
                "{:<28} {}{}",
                upcoming.formatted_date,
                status.status_text,
                if upcoming.is_today { "  (today)" } else { "" }
            );
        }
        Ok(())
    }

    pub async fn slots(&self, date: NaiveDate, local: bool) -> Result<(), UseCaseError> {
        let (store_times, store_overrides) = self.fetch_rules().await?;
        let slots = generate_time_slots(date, &store_times, &store_overrides)?;
        if slots.is_empty() {
            println!("Store is closed on {}", date);
            return Ok(());
        }
        if !local {
            println!("Time slots ({} time) for {}", self.reference_timezone_label, date);
            for slot in slots.iter().filter(|slot| slot.is_available) {
                println!("  {}", slot.time);
            }
            return Ok(());
        }

        println!("Time slots (Local time) for {}", date);
        for slot in localize_time_slots(date, &slots, &self.reference_timezone, &Local)
            .into_iter()
            .filter(|slot| slot.is_available)
        {
            let day = if slot.local_date == date {
                String::new()
            } else {
                format!(" ({})", slot.local_date)
            };
            println!(
                "  {}{}  [book as {} {}]",
                slot.local_time, day, slot.time, self.reference_timezone_label
            );
        }
        Ok(())
    }

    pub async fn book(
        &self,
        date: NaiveDate,
        time: &str,
    ) -> Result<AppointmentConfirmation, UseCaseError> {
        let (hour, minute) = parse_hour_minute(time)?;
        let time = format_hour_minute(hour, minute);

        let (store_times, store_overrides) = self.fetch_rules().await?;
        let slots = generate_time_slots(date, &store_times, &store_overrides)?;
        let slot = slots
            .iter()
            .find(|slot| slot.time == time)
            .ok_or_else(|| UseCaseError::NotFound(format!("No time slot at {} on {}", time, date)))?;
        if !slot.is_available {
            return Err(UseCaseError::BadRequest(format!(
                "Store is not open at {} on {}",
                time, date
            )));
        }

        let context = SchedulingContext {
            reference_timezone: self.reference_timezone,
            reference_timezone_label: self.reference_timezone_label.clone(),
            local_timezone: Local,
            now: Utc::now(),
        };
        let confirmation = schedule_appointment(
            date,
            slot,
            &context,
            &self.notifier,
            ScheduledNotificationAdapter::init(&self.store),
        )
        .await?;

        println!(
            "Appointment booked on {} at {} {} time ({} local time)",
            confirmation.date, confirmation.nyc_time, self.reference_timezone_label, confirmation.local_time
        );
        match &confirmation.reminder {
            Some(reminder) => println!(
                "Reminder {} set for {} {}",
                reminder.id, reminder.scheduled_date, reminder.scheduled_time
            ),
            None => println!("Too late for a reminder, none was set"),
        }
        Ok(confirmation)
    }

    pub async fn reminders(&self) -> Result<(), UseCaseError> {
        let notifications =
            list_scheduled_notifications(ScheduledNotificationAdapter::init(&self.store)).await?;
        if notifications.is_empty() {
            println!("No scheduled reminders");
        }
        for notification in notifications {
            println!(
                "{}  {} {}  {}",
                notification.id,
                notification.scheduled_date,
                notification.scheduled_time,
                notification.body
            );
        }
        Ok(())
    }

    pub async fn cancel(&self, id: Uuid) -> Result<(), UseCaseError> {
        cancel_appointment(id, &self.notifier, ScheduledNotificationAdapter::init(&self.store))
            .await?;
        event!(Level::INFO, %id, "Reminder canceled");
        println!("Reminder {} canceled", id);
        Ok(())
    }
}
