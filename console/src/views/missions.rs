use std::sync::Arc;

use admins_core::Role;
use tokio::sync::RwLock;

use crate::api::{ApiClient, ApiError};
use crate::models::{Mission, MissionCategory, MissionCreate, MissionStatus};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MissionFilter {
    pub status: Option<MissionStatus>,
    pub category: Option<MissionCategory>,
}

#[derive(Debug, thiserror::Error)]
pub enum MissionError {
    /// The completion gate: a mission only counts once the target is
    /// actually offline.
    #[error("target is still online ({status})")]
    TargetStillOnline { status: u16 },
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// The mission board.
pub struct MissionBoard {
    api: Arc<ApiClient>,
    filter: RwLock<MissionFilter>,
    missions: RwLock<Vec<Mission>>,
}

impl MissionBoard {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            filter: RwLock::new(MissionFilter::default()),
            missions: RwLock::new(Vec::new()),
        }
    }

    pub async fn missions(&self) -> Vec<Mission> {
        self.missions.read().await.clone()
    }

    pub async fn set_filter(&self, filter: MissionFilter) -> Result<(), ApiError> {
        *self.filter.write().await = filter;
        self.refresh().await
    }

    pub async fn refresh(&self) -> Result<(), ApiError> {
        let filter = *self.filter.read().await;
        let missions = self.api.missions(filter.status, filter.category).await?;
        *self.missions.write().await = missions;

        Ok(())
    }

    /// Only operators from elite up open missions.
    pub fn can_create(role: Role) -> bool {
        matches!(role, Role::Admin | Role::Tenente | Role::Elite)
    }

    /// Only command deletes missions.
    pub fn can_delete(role: Role) -> bool {
        matches!(role, Role::Admin | Role::Tenente)
    }

    /// Any member can take an unassigned mission; outsiders cannot.
    pub fn can_accept(role: Role, mission: &Mission) -> bool {
        mission.status == MissionStatus::Pending && role != Role::Externo
    }

    pub async fn create(&self, mission: MissionCreate) -> Result<Mission, ApiError> {
        let created = self.api.create_mission(&mission).await?;
        self.refresh().await?;

        Ok(created)
    }

    pub async fn accept(&self, mission_id: &str) -> Result<Mission, ApiError> {
        let mission = self.api.accept_mission(mission_id).await?;
        self.refresh().await?;

        Ok(mission)
    }

    /// Completes a mission, but only after probing the target and finding
    /// it offline. A live target fails fast without touching the mission.
    pub async fn complete(&self, mission_id: &str) -> Result<Mission, MissionError> {
        let target_url = match self.missions.read().await.iter().find(|m| m.id == mission_id) {
            Some(mission) => mission.target_url.clone(),
            None => self.api.mission(mission_id).await?.target_url,
        };

        let check = self.api.check_site(&target_url).await?;

        if check.is_online {
            return Err(MissionError::TargetStillOnline { status: check.status_code });
        }

        let mission = self.api.complete_mission(mission_id).await?;
        self.refresh().await?;

        Ok(mission)
    }

    pub async fn delete(&self, mission_id: &str) -> Result<(), ApiError> {
        self.api.delete_mission(mission_id).await?;
        self.refresh().await
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::models::MissionPriority;

    fn mission(status: MissionStatus) -> Mission {
        Mission {
            id: "m-1".into(),
            title: "Fake bank portal".into(),
            description: String::new(),
            target_url: "https://bank-login.example".into(),
            category: MissionCategory::Phishing,
            priority: MissionPriority::High,
            status,
            site_status: 200,
            assigned_to: None,
            assigned_username: None,
            created_by: "member-1".into(),
            created_at: Utc::now(),
            completed_at: None,
            evidence: None,
        }
    }

    #[test]
    fn creation_is_limited_to_elite_and_up() {
        assert!(MissionBoard::can_create(Role::Admin));
        assert!(MissionBoard::can_create(Role::Tenente));
        assert!(MissionBoard::can_create(Role::Elite));
        assert!(!MissionBoard::can_create(Role::Soldado));
        assert!(!MissionBoard::can_create(Role::Externo));
    }

    #[test]
    fn deletion_is_limited_to_command() {
        assert!(MissionBoard::can_delete(Role::Admin));
        assert!(MissionBoard::can_delete(Role::Tenente));
        assert!(!MissionBoard::can_delete(Role::Elite));
    }

    #[test]
    fn only_pending_missions_can_be_accepted() {
        assert!(MissionBoard::can_accept(Role::Soldado, &mission(MissionStatus::Pending)));
        assert!(!MissionBoard::can_accept(Role::Soldado, &mission(MissionStatus::InProgress)));
        assert!(!MissionBoard::can_accept(Role::Externo, &mission(MissionStatus::Pending)));
    }
}
