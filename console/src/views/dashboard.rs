use std::sync::Arc;

use admins_core::{Identity, Role};

use crate::api::{ApiClient, ApiError};
use crate::models::Stats;

/// What the dashboard shows for a given member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardMode {
    /// Full view: unit statistics and the points ranking.
    Operational,
    /// Outsiders get a stripped view with no unit internals.
    Restricted,
}

impl DashboardMode {
    pub fn for_role(role: Role) -> Self {
        if role == Role::Externo {
            Self::Restricted
        } else {
            Self::Operational
        }
    }
}

/// The operational dashboard payload.
#[derive(Debug, Clone, Default)]
pub struct DashboardData {
    pub stats: Stats,
    /// Members ordered by points, outsiders excluded.
    pub ranking: Vec<Identity>,
}

pub struct Dashboard {
    api: Arc<ApiClient>,
}

impl Dashboard {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Loads the dashboard for `identity`. The restricted view fetches
    /// nothing.
    pub async fn load(&self, identity: &Identity) -> Result<(DashboardMode, DashboardData), ApiError> {
        let mode = DashboardMode::for_role(identity.role);

        if mode == DashboardMode::Restricted {
            return Ok((mode, DashboardData::default()));
        }

        let (stats, ranking) = tokio::try_join!(self.api.stats(), self.api.ranking())?;

        Ok((mode, DashboardData { stats, ranking }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outsiders_are_restricted() {
        assert_eq!(DashboardMode::for_role(Role::Externo), DashboardMode::Restricted);

        for role in [Role::Admin, Role::Tenente, Role::Elite, Role::Soldado] {
            assert_eq!(DashboardMode::for_role(role), DashboardMode::Operational);
        }
    }
}
