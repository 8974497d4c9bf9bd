use std::sync::Arc;

use admins_core::Role;
use tokio::sync::RwLock;

use crate::api::{ApiClient, ApiError};
use crate::models::{Mission, Report, ReportCreate, ReportStatus};

/// The report review queue. Every member can submit; review takes elite
/// or above.
pub struct ReportDesk {
    api: Arc<ApiClient>,
    status: RwLock<Option<ReportStatus>>,
    reports: RwLock<Vec<Report>>,
}

impl ReportDesk {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            status: RwLock::new(None),
            reports: RwLock::new(Vec::new()),
        }
    }

    pub async fn reports(&self) -> Vec<Report> {
        self.reports.read().await.clone()
    }

    pub async fn set_status_filter(&self, status: Option<ReportStatus>) -> Result<(), ApiError> {
        *self.status.write().await = status;
        self.refresh().await
    }

    pub async fn refresh(&self) -> Result<(), ApiError> {
        let status = *self.status.read().await;
        let reports = self.api.reports(status).await?;
        *self.reports.write().await = reports;

        Ok(())
    }

    pub fn can_review(role: Role) -> bool {
        matches!(role, Role::Admin | Role::Tenente | Role::Elite)
    }

    pub async fn submit(&self, report: ReportCreate) -> Result<Report, ApiError> {
        let created = self.api.create_report(&report).await?;
        self.refresh().await?;

        Ok(created)
    }

    /// Accepting a report turns it into a mission.
    pub async fn accept(&self, report_id: &str) -> Result<Mission, ApiError> {
        let mission = self.api.accept_report(report_id).await?;
        self.refresh().await?;

        Ok(mission)
    }

    pub async fn reject(&self, report_id: &str) -> Result<(), ApiError> {
        self.api.reject_report(report_id).await?;
        self.refresh().await
    }
}
