use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use crate::api::{ApiClient, ApiError};
use crate::lifetime::ViewLifetime;
use crate::models::ChatMessage;

/// How often the open chat view re-fetches the history.
pub const POLL_PERIOD: Duration = Duration::from_secs(3);

/// How many recent messages the view keeps.
pub const RECENT_LIMIT: usize = 50;

/// The unit chat. The history is re-fetched on a short poll while the
/// view is mounted; there is no push channel.
pub struct ChatView {
    api: Arc<ApiClient>,
    messages: RwLock<Vec<ChatMessage>>,
}

impl ChatView {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            messages: RwLock::new(Vec::new()),
        }
    }

    /// The current history, oldest first.
    pub async fn messages(&self) -> Vec<ChatMessage> {
        self.messages.read().await.clone()
    }

    pub async fn refresh(&self) -> Result<(), ApiError> {
        let messages = self.api.chat_messages(RECENT_LIMIT).await?;
        *self.messages.write().await = messages;

        Ok(())
    }

    /// Sends a message and re-fetches. Whitespace-only input is dropped
    /// without a request.
    pub async fn send(&self, content: &str) -> Result<(), ApiError> {
        let content = content.trim();

        if content.is_empty() {
            return Ok(());
        }

        self.api.send_message(content).await?;
        self.refresh().await
    }

    pub async fn send_image(&self, file_name: &str, bytes: Vec<u8>) -> Result<(), ApiError> {
        self.api.send_image(file_name, bytes).await?;
        self.refresh().await
    }

    /// Asks the assistant. The question and the reply both land in the
    /// shared history server-side, so a refresh picks them up.
    /// Whitespace-only input is dropped without a request.
    pub async fn ask_assistant(&self, content: &str) -> Result<Option<ChatMessage>, ApiError> {
        let content = content.trim();

        if content.is_empty() {
            return Ok(None);
        }

        let reply = self.api.ask_assistant(content).await?;
        self.refresh().await?;

        Ok(Some(reply))
    }

    pub fn spawn_poll(self: &Arc<Self>, lifetime: ViewLifetime) {
        self.spawn_poll_every(lifetime, POLL_PERIOD);
    }

    /// Polls are serial: a slow fetch delays the next tick rather than
    /// stacking requests.
    pub fn spawn_poll_every(self: &Arc<Self>, lifetime: ViewLifetime, period: Duration) {
        let view = self.clone();

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = lifetime.ended() => break,
                    _ = interval.tick() => {
                        if let Err(err) = view.refresh().await {
                            tracing::warn!(error = %err, "chat poll failed");
                        }
                    }
                }
            }
        });
    }
}
