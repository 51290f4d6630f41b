use entities::scheduled_notification;
use storage_adapters::{
    scheduled_notification_adapter::{ScheduledNotificationAdapter, ScheduledNotificationQuery},
    KeyValueStore,
};

use crate::{error_500, UseCaseError};

pub async fn list_scheduled_notifications<'a, S: KeyValueStore>(
    notification_adapter: ScheduledNotificationAdapter<'a, S>,
) -> Result<Vec<scheduled_notification::Model>, UseCaseError> {
    notification_adapter.get_all().await.map_err(error_500)
}
