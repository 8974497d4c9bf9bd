use std::sync::Arc;

use admins_core::Role;
use tokio::sync::RwLock;

use crate::api::{ApiClient, ApiError};
use crate::models::{Tool, ToolCreate, ToolUploaded};

/// The shared tool library: link tools plus uploaded files.
pub struct ToolLibrary {
    api: Arc<ApiClient>,
    category: RwLock<Option<String>>,
    tools: RwLock<Vec<Tool>>,
}

impl ToolLibrary {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            category: RwLock::new(None),
            tools: RwLock::new(Vec::new()),
        }
    }

    pub async fn tools(&self) -> Vec<Tool> {
        self.tools.read().await.clone()
    }

    pub async fn set_category(&self, category: Option<String>) -> Result<(), ApiError> {
        *self.category.write().await = category;
        self.refresh().await
    }

    pub async fn refresh(&self) -> Result<(), ApiError> {
        let category = self.category.read().await.clone();
        let tools = self.api.tools(category.as_deref()).await?;
        *self.tools.write().await = tools;

        Ok(())
    }

    /// Only command adds or removes tools; everyone downloads.
    pub fn can_manage(role: Role) -> bool {
        matches!(role, Role::Admin | Role::Tenente)
    }

    pub async fn create(&self, tool: ToolCreate) -> Result<Tool, ApiError> {
        let created = self.api.create_tool(&tool).await?;
        self.refresh().await?;

        Ok(created)
    }

    pub async fn upload(
        &self,
        name: &str,
        description: &str,
        category: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<ToolUploaded, ApiError> {
        let uploaded = self.api.upload_tool(name, description, category, file_name, bytes).await?;
        self.refresh().await?;

        Ok(uploaded)
    }

    pub async fn download(&self, tool_id: &str) -> Result<bytes::Bytes, ApiError> {
        self.api.download_tool(tool_id).await
    }

    pub async fn delete(&self, tool_id: &str) -> Result<(), ApiError> {
        self.api.delete_tool(tool_id).await?;
        self.refresh().await
    }
}
