use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One message in the unit chat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// The unique identifier for the message.
    pub id: String,
    /// The sender. The AI assistant posts under a fixed sentinel id.
    pub user_id: String,
    /// The sender's handle.
    pub username: String,
    /// The sender's role as a raw string: the assistant posts with role
    /// `"ai"`, which sits outside the member role enumeration.
    #[serde(default)]
    pub role: String,
    /// Message body.
    pub content: String,
    /// Whether the message came from the AI assistant.
    pub is_ai: bool,
    /// The time the message was sent.
    pub created_at: DateTime<Utc>,
}
