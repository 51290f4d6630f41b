use chrono::Utc;
use entities::scheduled_notification;
use uuid::Uuid;

pub fn scheduled_notification() -> scheduled_notification::Model {
    let id = Uuid::now_v7();
    scheduled_notification::Model {
        id,
        title: "Appointment Reminder".to_string(),
        body: format!("Reminder {}", id),
        scheduled_date: "2026-01-01".to_string(),
        scheduled_time: "09:45".to_string(),
        notification_id: Uuid::now_v7().to_string(),
        created_at: Utc::now(),
    }
}

pub trait ScheduledNotificationFactory {
    fn notification_id(self, notification_id: &str) -> scheduled_notification::Model;
}

impl ScheduledNotificationFactory for scheduled_notification::Model {
    fn notification_id(mut self, notification_id: &str) -> scheduled_notification::Model {
        self.notification_id = notification_id.to_string();
        self
    }
}
