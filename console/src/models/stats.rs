use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Aggregate counters for the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub missions: MissionCounts,
    pub reports: ReportCounts,
    pub users: UserCounts,
    /// Targets observed offline or gone (unreachable or 404).
    pub sites_down: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionCounts {
    pub total: u64,
    pub completed: u64,
    pub in_progress: u64,
    pub pending: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportCounts {
    pub total: u64,
    pub pending: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCounts {
    pub total: u64,
    /// Members with an operational role (everyone but externo).
    pub active_members: u64,
}

/// Per-category counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStats {
    pub missions_by_category: HashMap<String, u64>,
    pub reports_by_category: HashMap<String, u64>,
}
