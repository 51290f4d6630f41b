use std::sync::Mutex;

use chrono::{DateTime, Utc};
use notifier::{NotificationScheduler, NotifierError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduledCall {
    pub title: String,
    pub body: String,
    pub instant: DateTime<Utc>,
    pub notification_id: String,
}

/// Records every call. Pending handles are `notification-<n>`.
#[derive(Debug, Default)]
pub struct FakeNotifier {
    pub scheduled: Mutex<Vec<ScheduledCall>>,
    pub canceled: Mutex<Vec<String>>,
    pub fail_schedule: bool,
    pub fail_cancel: bool,
    pub refuse_cancel: bool,
}

impl FakeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_schedule() -> Self {
        Self {
            fail_schedule: true,
            ..Default::default()
        }
    }

    pub fn failing_cancel() -> Self {
        Self {
            fail_cancel: true,
            ..Default::default()
        }
    }

    pub fn refusing_cancel() -> Self {
        Self {
            refuse_cancel: true,
            ..Default::default()
        }
    }

    pub fn scheduled_calls(&self) -> Vec<ScheduledCall> {
        self.scheduled.lock().unwrap().clone()
    }

    pub fn canceled_ids(&self) -> Vec<String> {
        self.canceled.lock().unwrap().clone()
    }
}

impl NotificationScheduler for FakeNotifier {
    async fn schedule_at(
        &self,
        title: &str,
        body: &str,
        instant: DateTime<Utc>,
    ) -> Result<Option<String>, NotifierError> {
        if self.fail_schedule {
            return Err(NotifierError::Unavailable("schedule failed".to_string()));
        }
        let mut scheduled = self.scheduled.lock().unwrap();
        let notification_id = format!("notification-{}", scheduled.len());
        scheduled.push(ScheduledCall {
            title: title.to_string(),
            body: body.to_string(),
            instant,
            notification_id: notification_id.clone(),
        });
        Ok(Some(notification_id))
    }

    async fn cancel(&self, notification_id: &str) -> Result<bool, NotifierError> {
        if self.fail_cancel {
            return Err(NotifierError::Unavailable("cancel failed".to_string()));
        }
        if self.refuse_cancel {
            return Ok(false);
        }
        self.canceled
            .lock()
            .unwrap()
            .push(notification_id.to_string());
        Ok(true)
    }
}
