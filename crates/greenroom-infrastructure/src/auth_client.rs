//! Authentication client for the remote API.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

use greenroom_core::error::{ConsoleError, Result};
use greenroom_core::gateway::AuthApi;
use greenroom_core::session::{Credentials, Identity, Role, Session};

use crate::api::ApiContext;

/// Auth endpoints live next to the users collection.
const AUTH_KIND: &str = "users";

#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: String,
    user: LoginUser,
}

/// The login payload keeps the legacy capitalized name keys.
#[derive(Debug, Deserialize)]
struct LoginUser {
    id: String,
    #[serde(rename = "FirstName")]
    first_name: String,
    #[serde(rename = "LastName")]
    last_name: String,
    role: String,
}

impl LoginResponse {
    fn into_session(self) -> Session {
        Session {
            user_id: self.user.id,
            identity: Identity {
                first_name: self.user.first_name,
                last_name: self.user.last_name,
            },
            role: Role::from(self.user.role),
            token: self.token,
        }
    }
}

pub struct HttpAuthApi {
    ctx: Arc<ApiContext>,
}

impl HttpAuthApi {
    pub fn new(ctx: Arc<ApiContext>) -> Self {
        Self { ctx }
    }

    fn login_url(&self) -> String {
        format!("{}/login", self.ctx.kind_url(AUTH_KIND))
    }

    fn logout_url(&self) -> String {
        format!("{}/logout", self.ctx.kind_url(AUTH_KIND))
    }
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    async fn login(&self, credentials: &Credentials) -> Result<Session> {
        debug!("login request");
        // login is the one unauthenticated call; no bearer header
        let response = self
            .ctx
            .client()
            .post(self.login_url())
            .json(credentials)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED
            || status == StatusCode::FORBIDDEN
            || status == StatusCode::BAD_REQUEST
        {
            return Err(ConsoleError::Unauthorized);
        }
        if !status.is_success() {
            return Err(ConsoleError::network(format!(
                "login failed with status {status}"
            )));
        }

        let payload: LoginResponse = response.json().await?;
        Ok(payload.into_session())
    }

    async fn logout(&self) -> Result<()> {
        debug!("logout notification");
        let response = self
            .ctx
            .authorize(self.ctx.client().post(self.logout_url()))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ConsoleError::network(format!(
                "logout failed with status {}",
                response.status()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_maps_to_session() {
        let json = r#"{
            "token": "tok-1",
            "user": {
                "id": "u1",
                "FirstName": "Ada",
                "LastName": "Nwosu",
                "role": "Admin"
            }
        }"#;
        let payload: LoginResponse = serde_json::from_str(json).unwrap();
        let session = payload.into_session();
        assert_eq!(session.user_id, "u1");
        assert_eq!(session.identity.first_name, "Ada");
        assert!(session.role.is_admin());
        assert_eq!(session.token, "tok-1");
    }

    #[test]
    fn test_non_admin_role_is_preserved() {
        let json = r#"{
            "token": "tok-2",
            "user": {"id": "u2", "FirstName": "Bo", "LastName": "Lee", "role": "Editor"}
        }"#;
        let payload: LoginResponse = serde_json::from_str(json).unwrap();
        let session = payload.into_session();
        // admission is the guard's decision, not the client's
        assert!(!session.role.is_admin());
        assert_eq!(session.role.as_str(), "Editor");
    }
}
