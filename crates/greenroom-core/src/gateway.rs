//! Remote-boundary ports implemented by the infrastructure crate.

use async_trait::async_trait;

use crate::error::Result;
use crate::record::{AssetRef, MediaKind, Resource};
use crate::session::{Credentials, Session};

/// Authentication boundary of the remote API.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchanges credentials for a session. Fails with `Unauthorized` on
    /// bad credentials. Role admission is NOT checked here; the session
    /// guard owns that gate.
    async fn login(&self, credentials: &Credentials) -> Result<Session>;

    /// Notifies the remote API of a logout. Callers treat failure as
    /// non-fatal.
    async fn logout(&self) -> Result<()>;
}

/// Typed request/response boundary to the remote API for one record kind.
///
/// Pure request/response: no local state, no caching, no retry; every call
/// round-trips.
#[async_trait]
pub trait RecordGateway<R: Resource>: Send + Sync {
    async fn list(&self) -> Result<Vec<R>>;

    async fn fetch(&self, id: &str) -> Result<R>;

    /// The server assigns the id.
    async fn create(&self, draft: &R::Draft) -> Result<R>;

    async fn update(&self, id: &str, draft: &R::Draft) -> Result<R>;

    async fn delete(&self, id: &str) -> Result<()>;
}

/// Boundary to the external media store.
#[async_trait]
pub trait MediaUploader: Send + Sync {
    /// Converts a local binary into a hosted asset handle. Single attempt,
    /// no retry; the returned URL is stored verbatim. Passing the wrong
    /// `kind` for the binary is a caller error.
    async fn upload(&self, bytes: Vec<u8>, filename: &str, kind: MediaKind) -> Result<AssetRef>;
}
