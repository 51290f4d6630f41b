use std::future::Future;

use entities::scheduled_notification::Model;
use tracing::{event, Level};
use uuid::Uuid;

use crate::{KeyValueStore, StorageError};

pub const SCHEDULED_NOTIFICATIONS_KEY: &str = "scheduled_notifications";

/// The whole list lives under one key and is rewritten on every mutation.
/// Callers must not interleave mutations on the same store.
pub struct ScheduledNotificationAdapter<'a, S: KeyValueStore> {
    pub store: &'a S,
}

impl<S: KeyValueStore> Clone for ScheduledNotificationAdapter<'_, S> {
    fn clone(&self) -> Self {
        Self { store: self.store }
    }
}

impl<'a, S: KeyValueStore> ScheduledNotificationAdapter<'a, S> {
    pub fn init(store: &'a S) -> Self {
        Self { store }
    }

    async fn read_all(&self) -> Result<Vec<Model>, StorageError> {
        match self.store.get_item(SCHEDULED_NOTIFICATIONS_KEY).await? {
            Some(value) => Ok(serde_json::from_str(&value)?),
            None => Ok(vec![]),
        }
    }

    async fn write_all(&self, notifications: &[Model]) -> Result<(), StorageError> {
        let value = serde_json::to_string(notifications)?;
        event!(
            Level::DEBUG,
            count = notifications.len(),
            "Writing scheduled notifications"
        );
        self.store
            .set_item(SCHEDULED_NOTIFICATIONS_KEY, value)
            .await
    }
}

pub trait ScheduledNotificationQuery {
    fn get_all(self) -> impl Future<Output = Result<Vec<Model>, StorageError>>;
    fn get_by_id(self, id: Uuid) -> impl Future<Output = Result<Option<Model>, StorageError>>;
}

impl<S: KeyValueStore> ScheduledNotificationQuery for ScheduledNotificationAdapter<'_, S> {
    async fn get_all(self) -> Result<Vec<Model>, StorageError> {
        self.read_all().await
    }

    async fn get_by_id(self, id: Uuid) -> Result<Option<Model>, StorageError> {
        Ok(self
            .read_all()
            .await?
            .into_iter()
            .find(|notification| notification.id == id))
    }
}

pub trait ScheduledNotificationMutation {
    fn create(self, notification: Model) -> impl Future<Output = Result<(), StorageError>>;
    fn delete(self, id: Uuid) -> impl Future<Output = Result<(), StorageError>>;
}

impl<S: KeyValueStore> ScheduledNotificationMutation for ScheduledNotificationAdapter<'_, S> {
    async fn create(self, notification: Model) -> Result<(), StorageError> {
        let mut notifications = self.read_all().await?;
        notifications.push(notification);
        self.write_all(&notifications).await
    }

    async fn delete(self, id: Uuid) -> Result<(), StorageError> {
        let mut notifications = self.read_all().await?;
        notifications.retain(|notification| notification.id != id);
        self.write_all(&notifications).await
    }
}
