use std::collections::HashSet;
use std::sync::Arc;

use admins_core::{progression, Identity, RankProgress};

use crate::api::{ApiClient, ApiError};
use crate::models::Badge;

/// A badge annotated with whether the member has earned it.
#[derive(Debug, Clone, PartialEq)]
pub struct BadgeStatus {
    pub badge: Badge,
    pub earned: bool,
}

/// The profile view: the member's identity, rank progression, and the
/// full badge catalog with earned markers.
pub struct Profile {
    pub identity: Arc<Identity>,
    pub badges: Vec<BadgeStatus>,
}

impl Profile {
    pub async fn load(api: &ApiClient, identity: Arc<Identity>) -> Result<Self, ApiError> {
        let (all, earned) = tokio::try_join!(api.badges(), api.user_badges(&identity.id))?;

        let earned: HashSet<String> = earned.into_iter().map(|badge| badge.id).collect();
        let badges = all
            .into_iter()
            .map(|badge| {
                let earned = earned.contains(&badge.id);
                BadgeStatus { badge, earned }
            })
            .collect();

        Ok(Self { identity, badges })
    }

    pub fn rank(&self) -> RankProgress {
        progression(self.identity.rank_points)
    }

    pub fn earned_count(&self) -> usize {
        self.badges.iter().filter(|status| status.earned).count()
    }
}
