use admins_core::Identity;
use serde::{Deserialize, Serialize};

/// An achievement badge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    /// Stable identifier, e.g. `first_mission`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// What earned it.
    pub description: String,
    /// Icon token for the UI.
    pub icon: String,
    /// Which counter the badge tracks.
    pub requirement_type: BadgeRequirement,
    /// The counter value that earns the badge.
    pub requirement_value: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeRequirement {
    Missions,
    Reports,
    Points,
}

impl Badge {
    /// Mirrors the backend's earned check so the profile can label badges
    /// without a second round trip.
    pub fn earned_by(&self, identity: &Identity) -> bool {
        let counter = match self.requirement_type {
            BadgeRequirement::Missions => identity.missions_completed,
            BadgeRequirement::Reports => identity.reports_submitted,
            BadgeRequirement::Points => identity.rank_points,
        };

        counter >= self.requirement_value
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use admins_core::Role;

    fn member(missions: u64, reports: u64, points: u64) -> Identity {
        Identity {
            id: "member-1".into(),
            username: "night_owl".into(),
            email: "night_owl@example.com".into(),
            role: Role::Soldado,
            rank_points: points,
            missions_completed: missions,
            reports_submitted: reports,
            created_at: Utc::now(),
        }
    }

    fn badge(requirement_type: BadgeRequirement, requirement_value: u64) -> Badge {
        Badge {
            id: "badge".into(),
            name: "Badge".into(),
            description: String::new(),
            icon: "award".into(),
            requirement_type,
            requirement_value,
        }
    }

    #[test]
    fn earned_at_the_threshold() {
        assert!(badge(BadgeRequirement::Missions, 10).earned_by(&member(10, 0, 0)));
        assert!(!badge(BadgeRequirement::Missions, 10).earned_by(&member(9, 0, 0)));
        assert!(badge(BadgeRequirement::Reports, 5).earned_by(&member(0, 7, 0)));
        assert!(badge(BadgeRequirement::Points, 500).earned_by(&member(0, 0, 500)));
    }
}
