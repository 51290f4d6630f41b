use std::future::Future;

use chrono::{DateTime, Utc};
use thiserror::Error;

mod local_notifier;

pub use local_notifier::{DeliveredNotification, LocalNotifier};

#[derive(Debug, Error)]
pub enum NotifierError {
    #[error("Reminder instant out of range: {0}")]
    OutOfRange(#[from] chrono::OutOfRangeError),
    #[error("Notifier unavailable: {0}")]
    Unavailable(String),
}

/// Registers reminders that fire at an absolute instant.
pub trait NotificationScheduler {
    /// Returns the handle of the registered reminder, or `None` when `instant`
    /// is not strictly in the future.
    fn schedule_at(
        &self,
        title: &str,
        body: &str,
        instant: DateTime<Utc>,
    ) -> impl Future<Output = Result<Option<String>, NotifierError>>;

    /// Returns `true` once nothing will fire under this handle, including
    /// when it already fired. `false` means the collaborator refused.
    fn cancel(&self, notification_id: &str) -> impl Future<Output = Result<bool, NotifierError>>;
}
