//! Shared HTTP plumbing for the remote API clients.

use reqwest::{RequestBuilder, Response, StatusCode, header};

use greenroom_core::error::{ConsoleError, Result};
use greenroom_core::session::TokenCell;

use crate::config::ApiConfig;

/// Shared state of all remote-API clients: one connection pool, the
/// endpoint config, and the current bearer credential.
#[derive(Clone)]
pub struct ApiContext {
    client: reqwest::Client,
    api: ApiConfig,
    token: TokenCell,
}

impl ApiContext {
    pub fn new(api: ApiConfig, token: TokenCell) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("greenroom")
            .build()
            .map_err(|err| ConsoleError::internal(format!("build http client: {err}")))?;
        Ok(Self { client, api, token })
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// Endpoint for a record kind: `{base_url_for(kind)}/{kind}`.
    pub fn kind_url(&self, kind: &str) -> String {
        join(self.api.base_url_for(kind), kind)
    }

    /// Endpoint for one record: `{base_url_for(kind)}/{kind}/{id}`.
    pub fn record_url(&self, kind: &str, id: &str) -> String {
        format!("{}/{}", self.kind_url(kind), id)
    }

    /// Attaches `Authorization: Bearer <token>` when a session credential
    /// is present.
    pub fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.token.get() {
            Some(token) => request.header(header::AUTHORIZATION, format!("Bearer {token}")),
            None => request,
        }
    }
}

fn join(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Checks a response status and maps failures into the error taxonomy.
///
/// `entity` and `id` feed the NotFound variant for stale-id detection.
pub async fn ensure_ok(
    response: Response,
    entity: &'static str,
    id: Option<&str>,
) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(error_for(status, &body, entity, id))
}

/// Pure status-code mapping, shared by every client.
pub fn error_for(status: StatusCode, body: &str, entity: &'static str, id: Option<&str>) -> ConsoleError {
    let message = server_message(body);
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ConsoleError::Unauthorized,
        StatusCode::NOT_FOUND => ConsoleError::not_found(entity, id.unwrap_or("")),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => ConsoleError::validation(
            message.unwrap_or_else(|| "request rejected by the server".to_string()),
        ),
        _ => ConsoleError::network(
            message.unwrap_or_else(|| format!("{entity} request failed with status {status}")),
        ),
    }
}

/// Extracts `{"message": ...}` or `{"error": ...}` from an API error body.
fn server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .or_else(|| value.get("error"))
        .and_then(|v| v.as_str())
        .map(str::to_string)
}
