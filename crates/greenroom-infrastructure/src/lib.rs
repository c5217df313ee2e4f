//! Infrastructure layer of the Greenroom admin-console core.
//!
//! Implements the ports defined in `greenroom-core` against the real
//! world: the remote REST API, the external media host, and the local
//! filesystem (config, session vault).

pub mod api;
pub mod auth_client;
pub mod config;
pub mod media_upload;
pub mod paths;
pub mod resource_client;
pub mod session_vault;

pub use api::ApiContext;
pub use auth_client::HttpAuthApi;
pub use config::{ApiConfig, ConsoleConfig, MediaConfig};
pub use media_upload::HttpMediaUploader;
pub use resource_client::HttpResourceClient;
pub use session_vault::FsSessionVault;
