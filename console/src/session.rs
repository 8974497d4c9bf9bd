//! The session provider.
//!
//! Owns the authenticated identity and keeps it fresh. Views read the
//! current [`SessionSnapshot`] through [`Session::snapshot`] and feed it
//! to the route guard; a background task re-fetches the identity every
//! [`REFRESH_INTERVAL`] so point totals and role changes propagate
//! without a reload.

use std::sync::Arc;
use std::time::Duration;

use admins_core::{Identity, Role, SessionSnapshot};
use arc_swap::ArcSwap;

use crate::api::{ApiClient, ApiError, RegisterRequest};
use crate::lifetime::ViewLifetime;

/// How often the background task re-fetches the identity.
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("{0}")]
    Validation(&'static str),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// A registration submission, validated client-side before it goes on
/// the wire.
#[derive(Debug, Clone)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub username: String,
    pub role: Role,
}

pub struct Session {
    api: Arc<ApiClient>,
    state: ArcSwap<SessionSnapshot>,
}

impl Session {
    /// Starts in `Loading` when a token is already present (the identity
    /// behind it is not known until the first refresh), `Anonymous`
    /// otherwise.
    pub fn new(api: Arc<ApiClient>) -> Self {
        let state = if api.token().is_some() {
            SessionSnapshot::Loading
        } else {
            SessionSnapshot::Anonymous
        };

        Self {
            api,
            state: ArcSwap::from_pointee(state),
        }
    }

    pub fn api(&self) -> &Arc<ApiClient> {
        &self.api
    }

    pub fn snapshot(&self) -> Arc<SessionSnapshot> {
        self.state.load_full()
    }

    pub fn identity(&self) -> Option<Arc<Identity>> {
        match &*self.snapshot() {
            SessionSnapshot::Authenticated(identity) => Some(identity.clone()),
            _ => None,
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<Arc<Identity>, ApiError> {
        let response = self.api.login(email, password).await?;

        self.api.set_token(response.token);
        let identity = Arc::new(response.user);
        self.state.store(Arc::new(SessionSnapshot::Authenticated(identity.clone())));

        Ok(identity)
    }

    pub async fn register(&self, form: RegisterForm) -> Result<Arc<Identity>, SessionError> {
        Identity::validate_username(&form.username).map_err(SessionError::Validation)?;
        Identity::validate_email(&form.email).map_err(SessionError::Validation)?;
        Identity::validate_password(&form.password).map_err(SessionError::Validation)?;

        let response = self
            .api
            .register(&RegisterRequest {
                email: form.email,
                password: form.password,
                username: form.username,
                role: form.role,
            })
            .await?;

        self.api.set_token(response.token);
        let identity = Arc::new(response.user);
        self.state.store(Arc::new(SessionSnapshot::Authenticated(identity.clone())));

        Ok(identity)
    }

    pub fn logout(&self) {
        self.api.clear_token();
        self.state.store(Arc::new(SessionSnapshot::Anonymous));
    }

    /// Re-fetches the identity behind the token. A 401 clears the session
    /// (the token is stale); any other failure leaves the current snapshot
    /// in place so a transient outage does not log the member out.
    pub async fn refresh(&self) -> Result<(), ApiError> {
        match self.api.me().await {
            Ok(identity) => {
                self.state.store(Arc::new(SessionSnapshot::Authenticated(Arc::new(identity))));
                Ok(())
            }
            Err(err) if err.is_unauthorized() => {
                self.api.clear_token();
                self.state.store(Arc::new(SessionSnapshot::Anonymous));
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    /// Spawns the periodic refresh loop, bound to `lifetime`.
    pub fn spawn_refresh(self: &Arc<Self>, lifetime: ViewLifetime) {
        self.spawn_refresh_every(lifetime, REFRESH_INTERVAL);
    }

    pub fn spawn_refresh_every(self: &Arc<Self>, lifetime: ViewLifetime, period: Duration) {
        let session = self.clone();

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = lifetime.ended() => break,
                    _ = interval.tick() => {
                        if session.snapshot().identity().is_none() && session.api.token().is_none() {
                            continue;
                        }

                        if let Err(err) = session.refresh().await {
                            tracing::warn!(error = %err, "session refresh failed");
                        }
                    }
                }
            }
        });
    }
}
