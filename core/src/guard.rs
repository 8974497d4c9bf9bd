use std::sync::Arc;

use crate::identity::Identity;
use crate::policy::{self, Destination};

/// What the session provider currently knows about the user.
#[derive(Debug, Clone)]
pub enum SessionSnapshot {
    /// The identity has not resolved yet (initial load or refresh in
    /// flight).
    Loading,
    /// No identity is present.
    Anonymous,
    /// A resolved identity.
    Authenticated(Arc<Identity>),
}

impl SessionSnapshot {
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Authenticated(identity) => Some(identity),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Outcome of a navigation attempt at a protected destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Render a placeholder; perform no redirect until the session
    /// resolves.
    Loading,
    /// Render the requested destination.
    Render(Destination),
    /// No identity: go to the login destination.
    RedirectToLogin,
    /// Denied or unmatched: go to the default destination.
    RedirectToDefault,
}

/// Outcome of a navigation attempt at the login/registration destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicDecision {
    Loading,
    /// Show the login form.
    Render,
    /// Already authenticated: an authenticated user never sees the login
    /// form.
    RedirectToDefault,
}

/// Guards a protected destination.
///
/// Unmatched paths always redirect to the default destination, even before
/// the session resolves; a stray URL must never produce a blank page.
pub fn protected(session: &SessionSnapshot, path: &str) -> RouteDecision {
    let Some(destination) = Destination::from_path(path) else {
        return RouteDecision::RedirectToDefault;
    };

    match session {
        SessionSnapshot::Loading => RouteDecision::Loading,
        SessionSnapshot::Anonymous => RouteDecision::RedirectToLogin,
        SessionSnapshot::Authenticated(identity) => {
            if policy::permits(identity.role, destination) {
                RouteDecision::Render(destination)
            } else {
                RouteDecision::RedirectToDefault
            }
        }
    }
}

/// Guards the login/registration destination (the inverted rule).
pub fn public(session: &SessionSnapshot) -> PublicDecision {
    match session {
        SessionSnapshot::Loading => PublicDecision::Loading,
        SessionSnapshot::Anonymous => PublicDecision::Render,
        SessionSnapshot::Authenticated(_) => PublicDecision::RedirectToDefault,
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::role::Role;

    fn authenticated(role: Role) -> SessionSnapshot {
        SessionSnapshot::Authenticated(Arc::new(Identity {
            id: "member-1".into(),
            username: "night_owl".into(),
            email: "night_owl@example.com".into(),
            role,
            rank_points: 0,
            missions_completed: 0,
            reports_submitted: 0,
            created_at: Utc::now(),
        }))
    }

    #[test]
    fn loading_renders_a_placeholder_without_redirecting() {
        assert_eq!(protected(&SessionSnapshot::Loading, "/missions"), RouteDecision::Loading);
        assert_eq!(public(&SessionSnapshot::Loading), PublicDecision::Loading);
    }

    #[test]
    fn anonymous_users_are_sent_to_login() {
        for path in ["/dashboard", "/admin", "/profile"] {
            assert_eq!(protected(&SessionSnapshot::Anonymous, path), RouteDecision::RedirectToLogin);
        }
    }

    #[test]
    fn permitted_destinations_render() {
        assert_eq!(
            protected(&authenticated(Role::Soldado), "/missions"),
            RouteDecision::Render(Destination::Missions)
        );
        assert_eq!(
            protected(&authenticated(Role::Externo), "/reports"),
            RouteDecision::Render(Destination::Reports)
        );
        assert_eq!(protected(&authenticated(Role::Tenente), "/admin"), RouteDecision::Render(Destination::Admin));
    }

    #[test]
    fn denied_destinations_redirect_to_dashboard() {
        assert_eq!(protected(&authenticated(Role::Externo), "/missions"), RouteDecision::RedirectToDefault);
        assert_eq!(protected(&authenticated(Role::Externo), "/tools"), RouteDecision::RedirectToDefault);
        assert_eq!(protected(&authenticated(Role::Soldado), "/admin"), RouteDecision::RedirectToDefault);
        assert_eq!(protected(&authenticated(Role::Elite), "/admin"), RouteDecision::RedirectToDefault);
    }

    #[test]
    fn unmatched_paths_always_redirect_to_default() {
        for session in [SessionSnapshot::Loading, SessionSnapshot::Anonymous, authenticated(Role::Admin)] {
            assert_eq!(protected(&session, "/does-not-exist"), RouteDecision::RedirectToDefault);
            assert_eq!(protected(&session, "/"), RouteDecision::RedirectToDefault);
        }
    }

    #[test]
    fn authenticated_users_never_see_the_login_form() {
        assert_eq!(public(&authenticated(Role::Externo)), PublicDecision::RedirectToDefault);
        assert_eq!(public(&SessionSnapshot::Anonymous), PublicDecision::Render);
    }
}
