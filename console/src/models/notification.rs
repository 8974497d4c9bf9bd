use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A notification addressed to the current member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// The unique identifier for the notification.
    pub id: String,
    /// Human-readable body.
    pub message: String,
    /// Whether the member has read it.
    #[serde(default)]
    pub read: bool,
    /// The time the notification was created.
    pub created_at: DateTime<Utc>,
}
