//! Session guard.
//!
//! Owns the process-wide session: login, restore-on-start, logout. All
//! protected views observe the published state reactively; a transition to
//! `Absent` must route to the login view, a transition to `Present` routes
//! to the default landing view. The guard is the only writer.

use std::sync::Arc;

use tokio::sync::{Mutex, watch};
use tracing::{info, warn};

use greenroom_core::error::{ConsoleError, Result};
use greenroom_core::gateway::AuthApi;
use greenroom_core::session::{Credentials, Session, SessionState, SessionVault, TokenCell};

pub struct SessionGuard {
    auth: Arc<dyn AuthApi>,
    vault: Arc<dyn SessionVault>,
    token: TokenCell,
    state: watch::Sender<SessionState>,
    /// login/restore/logout are mutually exclusive; no concurrent login
    /// attempts.
    write_lock: Mutex<()>,
}

impl SessionGuard {
    pub fn new(auth: Arc<dyn AuthApi>, vault: Arc<dyn SessionVault>, token: TokenCell) -> Self {
        let (state, _) = watch::channel(SessionState::Absent);
        Self {
            auth,
            vault,
            token,
            state,
            write_lock: Mutex::new(()),
        }
    }

    /// Subscribes to session-state transitions.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// The state as of now.
    pub fn current(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Exchanges credentials for an admitted session.
    ///
    /// Fails with `Unauthorized` on bad credentials and with
    /// `ForbiddenRole` when the account authenticated but is not an admin;
    /// in the latter case the API call succeeded yet no session is
    /// established locally.
    pub async fn login(&self, credentials: Credentials) -> Result<Session> {
        let _guard = self.write_lock.lock().await;

        let session = self.auth.login(&credentials).await?;
        if !session.role.is_admin() {
            info!(role = %session.role, "login succeeded but role is not admitted");
            return Err(ConsoleError::forbidden_role(session.role.as_str()));
        }

        self.vault.save(&session)?;
        self.token.set(&session.token);
        self.state.send_replace(SessionState::Present(session.clone()));
        info!(user = %session.identity.display_name(), "session established");
        Ok(session)
    }

    /// Reconstructs the session from the vault at process start.
    ///
    /// Fail-closed: a stored role other than Admin is treated as Absent
    /// (and the stale document is cleared), even if a token is present.
    /// Vault read errors degrade to Absent rather than blocking startup.
    pub async fn restore(&self) -> SessionState {
        let _guard = self.write_lock.lock().await;

        let state = match self.vault.load() {
            Ok(Some(session)) if session.admits() => {
                self.token.set(&session.token);
                info!(user = %session.identity.display_name(), "session restored");
                SessionState::Present(session)
            }
            Ok(Some(session)) => {
                warn!(role = %session.role, "stored session role not admitted; forcing re-login");
                if let Err(err) = self.vault.clear() {
                    warn!(%err, "failed to clear rejected session document");
                }
                SessionState::Absent
            }
            Ok(None) => SessionState::Absent,
            Err(err) => {
                warn!(%err, "session vault unreadable; starting unauthenticated");
                SessionState::Absent
            }
        };

        self.state.send_replace(state.clone());
        state
    }

    /// Ends the session. Always succeeds locally: the remote notification
    /// is best effort and its failure is logged, never surfaced.
    pub async fn logout(&self) {
        let _guard = self.write_lock.lock().await;

        if let Err(err) = self.auth.logout().await {
            warn!(%err, "logout notification failed; proceeding with local logout");
        }
        self.drop_session_locked();
        info!("session ended");
    }

    /// Destroys the local session after the remote API rejected the
    /// credential. No remote notification is attempted.
    pub async fn expire(&self) {
        let _guard = self.write_lock.lock().await;
        self.drop_session_locked();
        info!("session expired by credential rejection");
    }

    fn drop_session_locked(&self) {
        if let Err(err) = self.vault.clear() {
            warn!(%err, "failed to clear session vault");
        }
        self.token.clear();
        self.state.send_replace(SessionState::Absent);
    }
}
