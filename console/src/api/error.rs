use reqwest::StatusCode;

/// Failure of a backend call.
///
/// The uniform handling policy is: catch at the call site, surface
/// [`std::fmt::Display`] as a toast, and leave prior view state intact.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (connection, TLS, decode).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The backend answered with a non-success status. `message` is the
    /// backend's `detail` field when present, so it is already short and
    /// human-readable.
    #[error("{message}")]
    Api { status: StatusCode, message: String },
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    detail: String,
}

impl ApiError {
    pub(crate) fn from_response(status: StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|body| body.detail)
            .unwrap_or_else(|_| status.canonical_reason().unwrap_or("request failed").to_string());

        Self::Api { status, message }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Transport(err) => err.status(),
        }
    }

    /// A 401 means the bearer token is gone or stale; the session provider
    /// reacts by clearing the identity.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_detail_is_surfaced() {
        let err = ApiError::from_response(StatusCode::FORBIDDEN, r#"{"detail":"Insufficient permissions"}"#);
        assert_eq!(err.to_string(), "Insufficient permissions");
        assert_eq!(err.status(), Some(StatusCode::FORBIDDEN));
    }

    #[test]
    fn unparseable_bodies_fall_back_to_the_status_reason() {
        let err = ApiError::from_response(StatusCode::BAD_GATEWAY, "<html>nope</html>");
        assert_eq!(err.to_string(), "Bad Gateway");
    }

    #[test]
    fn unauthorized_is_detected() {
        assert!(ApiError::from_response(StatusCode::UNAUTHORIZED, r#"{"detail":"Token expired"}"#).is_unauthorized());
        assert!(!ApiError::from_response(StatusCode::FORBIDDEN, "{}").is_unauthorized());
    }
}
