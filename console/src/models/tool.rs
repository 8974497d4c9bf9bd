use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An entry in the unit tool library: either an external link or an
/// uploaded file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    /// The unique identifier for the tool.
    pub id: String,
    /// Display name.
    pub name: String,
    /// What the tool does.
    pub description: String,
    /// Free-form category used for filtering.
    pub category: String,
    /// External link, for link tools.
    pub url: Option<String>,
    /// Server-side storage path, for file tools.
    pub file_path: Option<String>,
    /// Original filename, for file tools.
    #[serde(default)]
    pub file_name: Option<String>,
    /// Whether the tool is a downloadable file.
    pub is_file: bool,
    /// The member who added the tool.
    pub created_by: String,
    /// The time the tool was added.
    pub created_at: DateTime<Utc>,
}

/// Payload for adding a link tool.
#[derive(Debug, Clone, Serialize)]
pub struct ToolCreate {
    pub name: String,
    pub description: String,
    pub category: String,
    pub url: Option<String>,
    pub is_file: bool,
}

/// Acknowledgement returned by the file upload endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolUploaded {
    pub id: String,
    pub message: String,
    pub filename: Option<String>,
}
