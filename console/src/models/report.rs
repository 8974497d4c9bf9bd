use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::mission::MissionCategory;

/// A member-submitted flag on a suspicious target, pending review by the
/// command roles. An accepted report becomes a mission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// The unique identifier for the report.
    pub id: String,
    /// Short title.
    pub title: String,
    /// What was observed.
    pub description: String,
    /// The URL being flagged.
    pub target_url: String,
    /// The category of the target.
    pub category: MissionCategory,
    /// Review state.
    pub status: ReportStatus,
    /// The member who submitted the report.
    pub submitted_by: String,
    /// Their handle, denormalized for display.
    pub submitted_username: String,
    /// The reviewer, once reviewed.
    pub reviewed_by: Option<String>,
    /// The time the report was submitted.
    pub created_at: DateTime<Utc>,
    /// The time the report was reviewed, if it was.
    pub reviewed_at: Option<DateTime<Utc>>,
    /// Free-form evidence attached at submission.
    pub evidence: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Pending,
    Accepted,
    Rejected,
}

/// Payload for submitting a report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportCreate {
    pub title: String,
    pub description: String,
    pub target_url: String,
    pub category: MissionCategory,
    pub evidence: Option<String>,
}
