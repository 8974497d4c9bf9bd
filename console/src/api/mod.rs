//! The REST client for the unit backend.
//!
//! JSON over HTTP, bearer-token authenticated: after login the token is
//! attached as `Authorization: Bearer <token>` on every request. Request
//! and response bodies are the backend's contract; this client only gives
//! them types.

mod error;

use admins_core::{Identity, Role};
use arc_swap::ArcSwapOption;
use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use url::Url;

pub use error::ApiError;

use crate::config::BackendConfig;
use crate::models::{
    Badge, CategoryStats, ChatMessage, Mission, MissionCategory, MissionCreate, MissionStatus, Notification, Report,
    ReportCreate, ReportStatus, Stats, Tool, ToolCreate, ToolUploaded,
};

/// Response to a successful login or registration.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: Identity,
}

/// Payload for registration.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub username: String,
    pub role: Role,
}

/// Fields an admin can change on a member.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// Result of probing a target URL.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteCheck {
    pub url: String,
    /// HTTP status observed, 0 when unreachable.
    pub status_code: u16,
    pub is_online: bool,
}

#[derive(Serialize)]
struct MissionQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<MissionStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<MissionCategory>,
}

pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
    token: ArcSwapOption<String>,
}

impl ApiClient {
    /// `base` must end with a trailing slash so endpoint paths join
    /// underneath it, e.g. `https://unit.example/api/`.
    pub fn new(base: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            base,
            token: ArcSwapOption::empty(),
        }
    }

    pub fn from_config(config: &BackendConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    pub fn set_token(&self, token: impl Into<String>) {
        self.token.store(Some(Arc::new(token.into())));
    }

    pub fn clear_token(&self) {
        self.token.store(None);
    }

    pub fn token(&self) -> Option<Arc<String>> {
        self.token.load_full()
    }

    fn endpoint(&self, path: &str) -> Url {
        // Paths are static strings relative to the base; join cannot fail
        // on them.
        self.base.join(path).expect("invalid endpoint path")
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let mut request = self.http.request(method, self.endpoint(path));

        if let Some(token) = self.token.load_full() {
            request = request.bearer_auth(token);
        }

        request
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();

        if status.is_success() {
            Ok(response.json().await?)
        } else {
            Err(ApiError::from_response(status, &response.text().await.unwrap_or_default()))
        }
    }

    /// For endpoints whose success body is just an acknowledgement.
    async fn ensure(response: reqwest::Response) -> Result<(), ApiError> {
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::from_response(status, &response.text().await.unwrap_or_default()))
        }
    }

    // Auth

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let response = self
            .request(Method::POST, "auth/login")
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;

        Self::decode(response).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let response = self.request(Method::POST, "auth/register").json(request).send().await?;

        Self::decode(response).await
    }

    /// Fetches the identity behind the current token.
    pub async fn me(&self) -> Result<Identity, ApiError> {
        let response = self.request(Method::GET, "auth/me").send().await?;

        Self::decode(response).await
    }

    // Users

    pub async fn users(&self) -> Result<Vec<Identity>, ApiError> {
        let response = self.request(Method::GET, "users").send().await?;

        Self::decode(response).await
    }

    /// Members ordered by points, outsiders excluded.
    pub async fn ranking(&self) -> Result<Vec<Identity>, ApiError> {
        let response = self.request(Method::GET, "users/ranking").send().await?;

        Self::decode(response).await
    }

    pub async fn update_user(&self, user_id: &str, update: &UserUpdate) -> Result<Identity, ApiError> {
        let response = self
            .request(Method::PUT, &format!("users/{user_id}"))
            .json(update)
            .send()
            .await?;

        Self::decode(response).await
    }

    pub async fn delete_user(&self, user_id: &str) -> Result<(), ApiError> {
        let response = self.request(Method::DELETE, &format!("users/{user_id}")).send().await?;

        Self::ensure(response).await
    }

    // Missions

    pub async fn missions(
        &self,
        status: Option<MissionStatus>,
        category: Option<MissionCategory>,
    ) -> Result<Vec<Mission>, ApiError> {
        let response = self
            .request(Method::GET, "missions")
            .query(&MissionQuery { status, category })
            .send()
            .await?;

        Self::decode(response).await
    }

    pub async fn mission(&self, mission_id: &str) -> Result<Mission, ApiError> {
        let response = self.request(Method::GET, &format!("missions/{mission_id}")).send().await?;

        Self::decode(response).await
    }

    pub async fn create_mission(&self, mission: &MissionCreate) -> Result<Mission, ApiError> {
        let response = self.request(Method::POST, "missions").json(mission).send().await?;

        Self::decode(response).await
    }

    pub async fn accept_mission(&self, mission_id: &str) -> Result<Mission, ApiError> {
        let response = self
            .request(Method::POST, &format!("missions/{mission_id}/accept"))
            .send()
            .await?;

        Self::decode(response).await
    }

    pub async fn complete_mission(&self, mission_id: &str) -> Result<Mission, ApiError> {
        let response = self
            .request(Method::POST, &format!("missions/{mission_id}/complete"))
            .send()
            .await?;

        Self::decode(response).await
    }

    pub async fn delete_mission(&self, mission_id: &str) -> Result<(), ApiError> {
        let response = self.request(Method::DELETE, &format!("missions/{mission_id}")).send().await?;

        Self::ensure(response).await
    }

    // Reports

    pub async fn reports(&self, status: Option<ReportStatus>) -> Result<Vec<Report>, ApiError> {
        #[derive(Serialize)]
        struct Query {
            #[serde(skip_serializing_if = "Option::is_none")]
            status: Option<ReportStatus>,
        }

        let response = self.request(Method::GET, "reports").query(&Query { status }).send().await?;

        Self::decode(response).await
    }

    pub async fn create_report(&self, report: &ReportCreate) -> Result<Report, ApiError> {
        let response = self.request(Method::POST, "reports").json(report).send().await?;

        Self::decode(response).await
    }

    /// Accepting a report spawns a mission; the backend returns it.
    pub async fn accept_report(&self, report_id: &str) -> Result<Mission, ApiError> {
        let response = self
            .request(Method::POST, &format!("reports/{report_id}/accept"))
            .send()
            .await?;

        Self::decode(response).await
    }

    pub async fn reject_report(&self, report_id: &str) -> Result<(), ApiError> {
        let response = self
            .request(Method::POST, &format!("reports/{report_id}/reject"))
            .send()
            .await?;

        Self::ensure(response).await
    }

    // Tools

    pub async fn tools(&self, category: Option<&str>) -> Result<Vec<Tool>, ApiError> {
        #[derive(Serialize)]
        struct Query<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            category: Option<&'a str>,
        }

        let response = self.request(Method::GET, "tools").query(&Query { category }).send().await?;

        Self::decode(response).await
    }

    pub async fn create_tool(&self, tool: &ToolCreate) -> Result<Tool, ApiError> {
        let response = self.request(Method::POST, "tools").json(tool).send().await?;

        Self::decode(response).await
    }

    pub async fn upload_tool(
        &self,
        name: &str,
        description: &str,
        category: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<ToolUploaded, ApiError> {
        let form = Form::new().part("file", Part::bytes(bytes).file_name(file_name.to_owned()));

        let response = self
            .request(Method::POST, "tools/upload")
            .query(&[("name", name), ("description", description), ("category", category)])
            .multipart(form)
            .send()
            .await?;

        Self::decode(response).await
    }

    pub async fn download_tool(&self, tool_id: &str) -> Result<bytes::Bytes, ApiError> {
        let response = self
            .request(Method::GET, &format!("tools/download/{tool_id}"))
            .send()
            .await?;

        let status = response.status();

        if status.is_success() {
            Ok(response.bytes().await?)
        } else {
            Err(ApiError::from_response(status, &response.text().await.unwrap_or_default()))
        }
    }

    pub async fn delete_tool(&self, tool_id: &str) -> Result<(), ApiError> {
        let response = self.request(Method::DELETE, &format!("tools/{tool_id}")).send().await?;

        Self::ensure(response).await
    }

    // Badges

    pub async fn badges(&self) -> Result<Vec<Badge>, ApiError> {
        let response = self.request(Method::GET, "badges").send().await?;

        Self::decode(response).await
    }

    pub async fn user_badges(&self, user_id: &str) -> Result<Vec<Badge>, ApiError> {
        let response = self.request(Method::GET, &format!("badges/user/{user_id}")).send().await?;

        Self::decode(response).await
    }

    // Chat

    /// The most recent messages, oldest first, bounded by `limit`.
    pub async fn chat_messages(&self, limit: usize) -> Result<Vec<ChatMessage>, ApiError> {
        let response = self
            .request(Method::GET, "chat/messages")
            .query(&[("limit", limit)])
            .send()
            .await?;

        Self::decode(response).await
    }

    pub async fn send_message(&self, content: &str) -> Result<ChatMessage, ApiError> {
        let response = self
            .request(Method::POST, "chat/send")
            .json(&serde_json::json!({ "content": content }))
            .send()
            .await?;

        Self::decode(response).await
    }

    pub async fn send_image(&self, file_name: &str, bytes: Vec<u8>) -> Result<ChatMessage, ApiError> {
        let form = Form::new().part("file", Part::bytes(bytes).file_name(file_name.to_owned()));

        let response = self.request(Method::POST, "chat/send-image").multipart(form).send().await?;

        Self::decode(response).await
    }

    /// Asks the AI assistant; the reply is also appended to the shared
    /// chat history server-side.
    pub async fn ask_assistant(&self, content: &str) -> Result<ChatMessage, ApiError> {
        let response = self
            .request(Method::POST, "chat/ai")
            .json(&serde_json::json!({ "content": content }))
            .send()
            .await?;

        Self::decode(response).await
    }

    // Notifications

    pub async fn notifications(&self) -> Result<Vec<Notification>, ApiError> {
        let response = self.request(Method::GET, "notifications").send().await?;

        Self::decode(response).await
    }

    pub async fn mark_notification_read(&self, notification_id: &str) -> Result<(), ApiError> {
        let response = self
            .request(Method::POST, &format!("notifications/{notification_id}/read"))
            .send()
            .await?;

        Self::ensure(response).await
    }

    pub async fn mark_all_notifications_read(&self) -> Result<(), ApiError> {
        let response = self.request(Method::POST, "notifications/read-all").send().await?;

        Self::ensure(response).await
    }

    // Stats

    pub async fn stats(&self) -> Result<Stats, ApiError> {
        let response = self.request(Method::GET, "stats").send().await?;

        Self::decode(response).await
    }

    pub async fn category_stats(&self) -> Result<CategoryStats, ApiError> {
        let response = self.request(Method::GET, "stats/categories").send().await?;

        Self::decode(response).await
    }

    // Utility

    /// Probes a target URL through the backend. Used to gate mission
    /// completion on the target actually being offline.
    pub async fn check_site(&self, url: &str) -> Result<SiteCheck, ApiError> {
        let response = self
            .request(Method::POST, "site-check")
            .query(&[("url", url)])
            .send()
            .await?;

        Self::decode(response).await
    }
}
