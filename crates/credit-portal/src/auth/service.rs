use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use super::credentials::{find_account, validate_form, FormErrors, LoginForm, INVALID_CREDENTIALS_MESSAGE};
use super::session::{Session, SessionStore};
use crate::config::SimulationConfig;

/// Mock partner login backed by the fixed account list.
pub struct AuthService {
    sessions: Arc<SessionStore>,
    simulation: SimulationConfig,
}

impl AuthService {
    pub fn new(sessions: Arc<SessionStore>, simulation: SimulationConfig) -> Self {
        Self {
            sessions,
            simulation,
        }
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Form errors are reported straight away; the credential check waits out the login delay.
    pub async fn login(&self, form: LoginForm) -> Result<Session, LoginError> {
        let errors = validate_form(&form);
        if !errors.is_empty() {
            return Err(LoginError::Invalid(errors));
        }

        if !self.simulation.login_delay.is_zero() {
            tokio::time::sleep(self.simulation.login_delay).await;
        }

        let Some(account) = find_account(&form.email, &form.password) else {
            warn!(email = %form.email, "login rejected");
            return Err(LoginError::InvalidCredentials);
        };

        let session = self.sessions.create(account.email, account.role, Utc::now());
        info!(
            email = %session.email,
            role = %session.role,
            remember_me = form.remember_me,
            "partner signed in"
        );
        Ok(session)
    }

    pub fn session(&self, token: &str) -> Result<Session, LoginError> {
        self.sessions.get(token).ok_or(LoginError::UnknownSession)
    }

    pub fn logout(&self, token: &str) -> Result<Session, LoginError> {
        let session = self.sessions.remove(token).ok_or(LoginError::UnknownSession)?;
        info!(email = %session.email, "partner signed out");
        Ok(session)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("login form has {} invalid field(s)", .0.len())]
    Invalid(FormErrors),
    #[error("{}", INVALID_CREDENTIALS_MESSAGE)]
    InvalidCredentials,
    #[error("session not found or already signed out")]
    UnknownSession,
}
