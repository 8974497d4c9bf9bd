//! View controllers.
//!
//! Each controller owns the state behind one destination: it fetches
//! from the [`ApiClient`](crate::api::ApiClient), enforces the
//! role-based action gates, and runs any polling loop bound to a
//! [`ViewLifetime`](crate::lifetime::ViewLifetime). Rendering is the
//! embedder's concern.

mod admin;
mod chat;
mod dashboard;
mod missions;
mod notifications;
mod profile;
mod reports;
mod tools;

pub use admin::{AdminError, AdminPanel};
pub use chat::ChatView;
pub use dashboard::{Dashboard, DashboardData, DashboardMode};
pub use missions::{MissionBoard, MissionError, MissionFilter};
pub use notifications::NotificationCenter;
pub use profile::{BadgeStatus, Profile};
pub use reports::ReportDesk;
pub use tools::ToolLibrary;
