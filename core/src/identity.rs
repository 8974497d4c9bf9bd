use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::role::Role;

/// The authenticated identity held by the session provider.
///
/// Views read snapshots of this; nothing mutates it in place. It is only
/// ever replaced wholesale after a server round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    /// The unique identifier for the member.
    pub id: String,
    /// The member's handle.
    pub username: String,
    /// The email the member registered with.
    pub email: String,
    /// The member's role.
    pub role: Role,
    /// Lifetime points; drives the rank ladder.
    #[serde(default)]
    pub rank_points: u64,
    /// Missions the member has completed.
    #[serde(default)]
    pub missions_completed: u64,
    /// Reports the member has submitted.
    #[serde(default)]
    pub reports_submitted: u64,
    /// The time the account was created.
    pub created_at: DateTime<Utc>,
}

impl Identity {
    pub fn is_external(&self) -> bool {
        !self.role.is_member()
    }

    /// Validates a registration username.
    pub fn validate_username(username: &str) -> Result<(), &'static str> {
        if username.len() < 3 {
            return Err("Username must be at least 3 characters long");
        }

        if username.len() > 20 {
            return Err("Username must be at most 20 characters long");
        }

        if !username.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err("Username must only contain alphanumeric characters and underscores");
        }

        Ok(())
    }

    /// Validates a registration password.
    pub fn validate_password(password: &str) -> Result<(), &'static str> {
        if password.len() < 8 {
            return Err("Password must be at least 8 characters long");
        }

        if password.len() > 100 {
            return Err("Password must be at most 100 characters long");
        }

        if !password.chars().any(|c| c.is_ascii_lowercase()) {
            return Err("Password must contain at least one lowercase character");
        }

        if !password.chars().any(|c| c.is_ascii_uppercase()) {
            return Err("Password must contain at least one uppercase character");
        }

        if !password.chars().any(|c| c.is_ascii_digit()) {
            return Err("Password must contain at least one digit");
        }

        Ok(())
    }

    /// Validates a registration email.
    pub fn validate_email(email: &str) -> Result<(), &'static str> {
        if email.len() < 5 {
            return Err("Email must be at least 5 characters long");
        }

        if email.len() > 100 {
            return Err("Email must be at most 100 characters long");
        }

        if !email_address::EmailAddress::is_valid(email) {
            return Err("Email is not a valid email address");
        }

        Ok(())
    }
}
