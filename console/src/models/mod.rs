//! Wire models for the backend payloads the views render.
//!
//! These mirror the backend's response shapes; the console never computes
//! over them beyond display. The identity model lives in [`admins_core`]
//! because the policy and rank rules consume it.

mod badge;
mod chat_message;
mod mission;
mod notification;
mod report;
mod stats;
mod tool;

pub use badge::{Badge, BadgeRequirement};
pub use chat_message::ChatMessage;
pub use mission::{Mission, MissionCategory, MissionCreate, MissionPriority, MissionStatus};
pub use notification::Notification;
pub use report::{Report, ReportCreate, ReportStatus};
pub use stats::{CategoryStats, MissionCounts, ReportCounts, Stats, UserCounts};
pub use tool::{Tool, ToolCreate, ToolUploaded};
