use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use crate::api::{ApiClient, ApiError};
use crate::lifetime::ViewLifetime;
use crate::models::Notification;

/// How often the notification bell re-fetches.
pub const POLL_PERIOD: Duration = Duration::from_secs(10);

/// The notification bell.
pub struct NotificationCenter {
    api: Arc<ApiClient>,
    notifications: RwLock<Vec<Notification>>,
}

impl NotificationCenter {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            notifications: RwLock::new(Vec::new()),
        }
    }

    pub async fn notifications(&self) -> Vec<Notification> {
        self.notifications.read().await.clone()
    }

    pub async fn unread(&self) -> usize {
        self.notifications.read().await.iter().filter(|n| !n.read).count()
    }

    pub async fn refresh(&self) -> Result<(), ApiError> {
        let notifications = self.api.notifications().await?;
        *self.notifications.write().await = notifications;

        Ok(())
    }

    /// Marks one notification read. The local copy is flipped before the
    /// request so the unread count drops immediately; the next poll is
    /// the reconciliation path, so a failed request is not rolled back.
    pub async fn mark_read(&self, notification_id: &str) -> Result<(), ApiError> {
        {
            let mut notifications = self.notifications.write().await;

            if let Some(notification) = notifications.iter_mut().find(|n| n.id == notification_id) {
                notification.read = true;
            }
        }

        self.api.mark_notification_read(notification_id).await
    }

    /// Marks everything read server-side, then re-fetches.
    pub async fn mark_all_read(&self) -> Result<(), ApiError> {
        self.api.mark_all_notifications_read().await?;
        self.refresh().await
    }

    pub fn spawn_poll(self: &Arc<Self>, lifetime: ViewLifetime) {
        self.spawn_poll_every(lifetime, POLL_PERIOD);
    }

    pub fn spawn_poll_every(self: &Arc<Self>, lifetime: ViewLifetime, period: Duration) {
        let center = self.clone();

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = lifetime.ended() => break,
                    _ = interval.tick() => {
                        if let Err(err) = center.refresh().await {
                            tracing::warn!(error = %err, "notification poll failed");
                        }
                    }
                }
            }
        });
    }
}
