use std::{collections::HashMap, sync::Arc};

use chrono::{DateTime, Utc};
use tokio::sync::{mpsc, RwLock};
use tracing::{event, Level};
use uuid::Uuid;

use crate::{NotificationScheduler, NotifierError};

/// <notification_id, Sender>
type CancelMap = HashMap<String, mpsc::Sender<bool>>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeliveredNotification {
    pub notification_id: String,
    pub title: String,
    pub body: String,
    pub fired_at: DateTime<Utc>,
}

/// In-process reminders backed by tokio timers. Fired reminders are sent to
/// the receiver returned by [`LocalNotifier::new`].
#[derive(Clone)]
pub struct LocalNotifier {
    cancel_channels: Arc<RwLock<CancelMap>>,
    delivered: mpsc::UnboundedSender<DeliveredNotification>,
}

impl LocalNotifier {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<DeliveredNotification>) {
        let (delivered, rx) = mpsc::unbounded_channel();
        (
            Self {
                cancel_channels: Arc::new(RwLock::new(HashMap::new())),
                delivered,
            },
            rx,
        )
    }

    pub async fn pending_count(&self) -> usize {
        self.cancel_channels.read().await.len()
    }
}

impl NotificationScheduler for LocalNotifier {
    async fn schedule_at(
        &self,
        title: &str,
        body: &str,
        instant: DateTime<Utc>,
    ) -> Result<Option<String>, NotifierError> {
        let now = Utc::now();
        if instant <= now {
            event!(Level::DEBUG, %instant, "Refusing to schedule a reminder in the past");
            return Ok(None);
        }
        let wait_time = (instant - now).to_std()?;

        let notification_id = Uuid::now_v7().to_string();
        let (tx, rx) = mpsc::channel(1);
        self.cancel_channels
            .write()
            .await
            .insert(notification_id.clone(), tx);

        tokio::spawn(wait_and_deliver(
            DeliveredNotification {
                notification_id: notification_id.clone(),
                title: title.to_string(),
                body: body.to_string(),
                fired_at: instant,
            },
            wait_time,
            rx,
            Arc::clone(&self.cancel_channels),
            self.delivered.clone(),
        ));

        event!(Level::INFO, %notification_id, %instant, "Reminder scheduled");
        Ok(Some(notification_id))
    }

    /// Whoever removes the handle from the map decides its fate, so a
    /// handle that is no longer there has either fired or been canceled.
    async fn cancel(&self, notification_id: &str) -> Result<bool, NotifierError> {
        let cancel = self.cancel_channels.write().await.remove(notification_id);
        match cancel {
            Some(tx) => {
                // The timer task may already be past its select; it checks the map again.
                let _ = tx.try_send(true);
                event!(Level::DEBUG, %notification_id, "Reminder canceled");
            }
            None => event!(Level::DEBUG, %notification_id, "No pending reminder, nothing to cancel"),
        }
        Ok(true)
    }
}

async fn wait_and_deliver(
    mut notification: DeliveredNotification,
    wait_time: std::time::Duration,
    mut cancel: mpsc::Receiver<bool>,
    cancel_channels: Arc<RwLock<CancelMap>>,
    delivered: mpsc::UnboundedSender<DeliveredNotification>,
) {
    tokio::select! {
        _ = tokio::time::sleep(wait_time) => {}
        _ = cancel.recv() => {
            event!(Level::DEBUG, notification_id = %notification.notification_id, "Reminder canceled");
            return;
        }
    }

    let still_pending = cancel_channels
        .write()
        .await
        .remove(&notification.notification_id)
        .is_some();
    if !still_pending {
        event!(Level::DEBUG, notification_id = %notification.notification_id, "Reminder canceled after its timer elapsed");
        return;
    }
    notification.fired_at = Utc::now();
    event!(
        Level::INFO,
        notification_id = %notification.notification_id,
        title = %notification.title,
        "Reminder fired"
    );
    if delivered.send(notification).is_err() {
        event!(Level::WARN, "Reminder receiver dropped");
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use chrono::TimeDelta;
    use tokio::time::timeout;

    use super::*;

    #[tokio::test]
    async fn past_instant_is_not_scheduled() -> Result<(), NotifierError> {
        let (notifier, _rx) = LocalNotifier::new();
        let res = notifier
            .schedule_at("title", "body", Utc::now() - TimeDelta::seconds(1))
            .await?;
        assert_eq!(res, None);
        assert_eq!(notifier.pending_count().await, 0);
        Ok(())
    }

    #[tokio::test]
    async fn future_instant_is_delivered() -> Result<(), NotifierError> {
        let (notifier, mut rx) = LocalNotifier::new();
        let notification_id = notifier
            .schedule_at("title", "body", Utc::now() + TimeDelta::milliseconds(50))
            .await?
            .expect("reminder should be scheduled");
        assert_eq!(notifier.pending_count().await, 1);

        let delivered = timeout(Duration::from_secs(5), rx.recv())
            .await
            .expect("reminder should fire")
            .expect("channel open");
        assert_eq!(delivered.notification_id, notification_id);
        assert_eq!(delivered.title, "title");
        assert_eq!(delivered.body, "body");
        assert_eq!(notifier.pending_count().await, 0);
        Ok(())
    }

    #[tokio::test]
    async fn canceled_reminder_never_fires() -> Result<(), NotifierError> {
        let (notifier, mut rx) = LocalNotifier::new();
        let notification_id = notifier
            .schedule_at("title", "body", Utc::now() + TimeDelta::milliseconds(100))
            .await?
            .expect("reminder should be scheduled");

        assert!(notifier.cancel(&notification_id).await?);
        assert!(notifier.cancel(&notification_id).await?);
        assert_eq!(notifier.pending_count().await, 0);
        assert!(timeout(Duration::from_millis(300), rx.recv()).await.is_err());
        Ok(())
    }

    #[tokio::test]
    async fn cancel_unknown_handle() -> Result<(), NotifierError> {
        let (notifier, _rx) = LocalNotifier::new();
        assert!(notifier.cancel("unknown").await?);
        Ok(())
    }

    #[tokio::test]
    async fn cancel_after_delivery_succeeds() -> Result<(), NotifierError> {
        let (notifier, mut rx) = LocalNotifier::new();
        let notification_id = notifier
            .schedule_at("title", "body", Utc::now() + TimeDelta::milliseconds(20))
            .await?
            .expect("reminder should be scheduled");
        timeout(Duration::from_secs(5), rx.recv())
            .await
            .expect("reminder should fire")
            .expect("channel open");

        assert!(notifier.cancel(&notification_id).await?);
        Ok(())
    }

    fn notification(notification_id: &str) -> DeliveredNotification {
        DeliveredNotification {
            notification_id: notification_id.to_string(),
            title: "title".to_string(),
            body: "body".to_string(),
            fired_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn elapsed_timer_does_not_deliver_once_handle_is_removed() {
        // The handle was taken out of the map between the timer elapsing and
        // the task taking the lock.
        let cancel_channels = Arc::new(RwLock::new(CancelMap::new()));
        let (cancel_tx, cancel_rx) = mpsc::channel(1);
        cancel_tx.try_send(true).unwrap();
        let (delivered_tx, mut delivered_rx) = mpsc::unbounded_channel();

        wait_and_deliver(
            notification("raced"),
            Duration::ZERO,
            cancel_rx,
            Arc::clone(&cancel_channels),
            delivered_tx,
        )
        .await;

        assert!(delivered_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn elapsed_timer_delivers_while_handle_is_pending() {
        let (cancel_tx, cancel_rx) = mpsc::channel(1);
        let cancel_channels = Arc::new(RwLock::new(CancelMap::from([(
            "pending".to_string(),
            cancel_tx,
        )])));
        let (delivered_tx, mut delivered_rx) = mpsc::unbounded_channel();

        wait_and_deliver(
            notification("pending"),
            Duration::ZERO,
            cancel_rx,
            Arc::clone(&cancel_channels),
            delivered_tx,
        )
        .await;

        assert_eq!(delivered_rx.try_recv().unwrap().notification_id, "pending");
        assert!(cancel_channels.read().await.is_empty());
    }
}
