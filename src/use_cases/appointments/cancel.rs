use notifier::NotificationScheduler;
use storage_adapters::{
    scheduled_notification_adapter::{
        ScheduledNotificationAdapter, ScheduledNotificationMutation, ScheduledNotificationQuery,
    },
    KeyValueStore,
};
use tracing::{event, Level};
use uuid::Uuid;

use crate::{error_500, UseCaseError};

/// Cancels the pending reminder first and forgets the record only once the
/// notifier confirms it.
#[tracing::instrument(name = "Cancelling an appointment reminder", skip(notifier, notification_adapter))]
pub async fn cancel_appointment<'a, N, S>(
    id: Uuid,
    notifier: &N,
    notification_adapter: ScheduledNotificationAdapter<'a, S>,
) -> Result<(), UseCaseError>
where
    N: NotificationScheduler,
    S: KeyValueStore,
{
    let notification = notification_adapter
        .clone()
        .get_by_id(id)
        .await
        .map_err(error_500)?
        .ok_or(UseCaseError::NotFound(format!(
            "Scheduled notification {} not found",
            id
        )))?;

    let canceled = notifier
        .cancel(&notification.notification_id)
        .await
        .map_err(error_500)?;
    if !canceled {
        event!(
            Level::WARN,
            notification_id = %notification.notification_id,
            "Notifier did not cancel the reminder, keeping the record"
        );
        return Err(UseCaseError::InternalServerError(format!(
            "Failed to cancel notification {}",
            notification.notification_id
        )));
    }

    notification_adapter.delete(id).await.map_err(error_500)
}
