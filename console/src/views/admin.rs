use std::collections::HashMap;
use std::sync::Arc;

use admins_core::{Capability, Identity, Role};
use tokio::sync::RwLock;

use crate::api::{ApiClient, ApiError, UserUpdate};
use crate::models::Stats;

#[derive(Debug, thiserror::Error)]
pub enum AdminError {
    #[error("insufficient permissions")]
    Forbidden,
    #[error("cannot modify your own account")]
    OwnAccount,
    #[error("role cannot be assigned")]
    UnassignableRole,
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// The administration panel: member management plus the unit counters.
pub struct AdminPanel {
    api: Arc<ApiClient>,
    users: RwLock<Vec<Identity>>,
    stats: RwLock<Stats>,
}

impl AdminPanel {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            users: RwLock::new(Vec::new()),
            stats: RwLock::new(Stats::default()),
        }
    }

    pub async fn users(&self) -> Vec<Identity> {
        self.users.read().await.clone()
    }

    pub async fn stats(&self) -> Stats {
        self.stats.read().await.clone()
    }

    pub async fn refresh(&self) -> Result<(), ApiError> {
        let (users, stats) = tokio::try_join!(self.api.users(), self.api.stats())?;
        *self.users.write().await = users;
        *self.stats.write().await = stats;

        Ok(())
    }

    /// Member counts per role, for the panel header.
    pub async fn users_by_role(&self) -> HashMap<Role, u64> {
        let mut counts = HashMap::new();

        for user in self.users.read().await.iter() {
            *counts.entry(user.role).or_insert(0) += 1;
        }

        counts
    }

    /// Changes a member's role. The actor must hold the management
    /// capability, cannot touch their own account, and cannot hand out
    /// the outsider role.
    pub async fn update_role(&self, actor: &Identity, user_id: &str, role: Role) -> Result<Identity, AdminError> {
        if !actor.role.can(Capability::ManageUsers) {
            return Err(AdminError::Forbidden);
        }

        if actor.id == user_id {
            return Err(AdminError::OwnAccount);
        }

        if !Role::ASSIGNABLE.contains(&role) {
            return Err(AdminError::UnassignableRole);
        }

        let updated = self
            .api
            .update_user(
                user_id,
                &UserUpdate {
                    role: Some(role),
                    ..UserUpdate::default()
                },
            )
            .await?;
        self.refresh().await?;

        Ok(updated)
    }

    pub async fn delete_user(&self, actor: &Identity, user_id: &str) -> Result<(), AdminError> {
        if !actor.role.can(Capability::ManageUsers) {
            return Err(AdminError::Forbidden);
        }

        if actor.id == user_id {
            return Err(AdminError::OwnAccount);
        }

        self.api.delete_user(user_id).await?;
        self.refresh().await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn actor(role: Role) -> Identity {
        Identity {
            id: "actor-1".into(),
            username: "quartermaster".into(),
            email: "quartermaster@example.com".into(),
            role,
            rank_points: 0,
            missions_completed: 0,
            reports_submitted: 0,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn soldiers_cannot_manage_members() {
        let panel = AdminPanel::new(Arc::new(ApiClient::new("http://localhost:9/api/".parse().unwrap())));
        let err = panel.update_role(&actor(Role::Soldado), "member-2", Role::Elite).await.unwrap_err();
        assert!(matches!(err, AdminError::Forbidden));
    }

    #[tokio::test]
    async fn own_account_is_off_limits() {
        let panel = AdminPanel::new(Arc::new(ApiClient::new("http://localhost:9/api/".parse().unwrap())));
        let err = panel.update_role(&actor(Role::Admin), "actor-1", Role::Elite).await.unwrap_err();
        assert!(matches!(err, AdminError::OwnAccount));

        let err = panel.delete_user(&actor(Role::Tenente), "actor-1").await.unwrap_err();
        assert!(matches!(err, AdminError::OwnAccount));
    }

    #[tokio::test]
    async fn the_outsider_role_cannot_be_assigned() {
        let panel = AdminPanel::new(Arc::new(ApiClient::new("http://localhost:9/api/".parse().unwrap())));
        let err = panel.update_role(&actor(Role::Admin), "member-2", Role::Externo).await.unwrap_err();
        assert!(matches!(err, AdminError::UnassignableRole));
    }
}
