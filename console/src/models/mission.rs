use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A takedown mission against a malicious target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    /// The unique identifier for the mission.
    pub id: String,
    /// Short title shown on the board.
    pub title: String,
    /// What the target is and why it must go down.
    pub description: String,
    /// The URL of the target.
    pub target_url: String,
    /// The category of the target.
    pub category: MissionCategory,
    /// Operator-assigned priority.
    pub priority: MissionPriority,
    /// Where the mission is in its lifecycle.
    pub status: MissionStatus,
    /// Last observed HTTP status of the target. 0 means unreachable.
    #[serde(default)]
    pub site_status: u16,
    /// The member the mission is assigned to, if accepted.
    pub assigned_to: Option<String>,
    /// Their handle, denormalized for display.
    pub assigned_username: Option<String>,
    /// The member who created the mission.
    pub created_by: String,
    /// The time the mission was created.
    pub created_at: DateTime<Utc>,
    /// The time the mission was completed, if it was.
    pub completed_at: Option<DateTime<Utc>>,
    /// Free-form evidence attached at creation.
    pub evidence: Option<String>,
}

/// Lifecycle of a mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissionStatus {
    Pending,
    InProgress,
    Completed,
    Failed,
}

/// Target categories tracked by the unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissionCategory {
    Golpe,
    Fraude,
    Phishing,
    Malware,
    GrupoWhatsapp,
    ConteudoIlegal,
    Trojan,
    Spyware,
    ApkMalicioso,
    Outros,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissionPriority {
    Low,
    #[default]
    Medium,
    High,
}

/// Payload for creating a mission.
#[derive(Debug, Clone, Serialize)]
pub struct MissionCreate {
    pub title: String,
    pub description: String,
    pub target_url: String,
    pub category: MissionCategory,
    pub priority: MissionPriority,
    pub evidence: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enums_match_the_wire_form() {
        assert_eq!(serde_json::to_string(&MissionStatus::InProgress).unwrap(), "\"in_progress\"");
        assert_eq!(serde_json::to_string(&MissionCategory::GrupoWhatsapp).unwrap(), "\"grupo_whatsapp\"");
        assert_eq!(serde_json::to_string(&MissionCategory::ApkMalicioso).unwrap(), "\"apk_malicioso\"");
        assert_eq!(serde_json::to_string(&MissionPriority::Medium).unwrap(), "\"medium\"");
    }

    #[test]
    fn deserializes_backend_payload() {
        let mission: Mission = serde_json::from_str(
            r#"{
                "id": "m-1",
                "title": "Fake bank portal",
                "description": "Credential phishing clone",
                "target_url": "https://bank-login.example",
                "category": "phishing",
                "priority": "high",
                "status": "pending",
                "site_status": 200,
                "assigned_to": null,
                "assigned_username": null,
                "created_by": "member-1",
                "created_at": "2024-11-02T18:30:00+00:00",
                "completed_at": null,
                "evidence": null
            }"#,
        )
        .unwrap();

        assert_eq!(mission.status, MissionStatus::Pending);
        assert_eq!(mission.category, MissionCategory::Phishing);
        assert_eq!(mission.site_status, 200);
    }
}
