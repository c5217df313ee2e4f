//! Error types for the Greenroom console core.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the whole console core.
///
/// One operation fails with exactly one of these variants; no failure is
/// fatal to the process. Variants carry enough structure for the view layer
/// to pick a presentation without parsing message strings.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum ConsoleError {
    /// Transport or connectivity failure talking to the remote API.
    #[error("network error: {message}")]
    Network { message: String },

    /// Required-field validation failed, client-side or server-reported.
    /// Raised before any network call when detected locally.
    #[error("validation failed: {message}")]
    Validation { message: String },

    /// The credential was rejected by the remote API.
    #[error("unauthorized (credential invalid or expired)")]
    Unauthorized,

    /// Authentication succeeded but the account's role is not admitted
    /// to the console. No session is established.
    #[error("role '{role}' is not authorized for the admin console")]
    ForbiddenRole { role: String },

    /// The targeted record no longer exists on the server (stale id).
    #[error("{entity_type} '{id}' not found")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// The upload leg of a two-phase commit failed. No metadata record
    /// was written.
    #[error("upload failed: {message}")]
    Upload { message: String },

    /// The persist leg failed after a successful upload. The hosted binary
    /// is orphaned on the media host and no record was written.
    #[error("persist failed after upload: {source}")]
    PersistFailed {
        #[source]
        source: Box<ConsoleError>,
    },

    /// A commit for the same target is already in flight; the submission
    /// was rejected, not queued.
    #[error("a commit for {target} is already in progress")]
    AlreadyInProgress { target: String },

    /// Local persistence failure (session vault, config file).
    #[error("storage error: {message}")]
    Storage { message: String },

    /// Serialization/deserialization error.
    #[error("serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Internal error (should not happen in normal operation).
    #[error("internal error: {0}")]
    Internal(String),
}

impl ConsoleError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates a Validation error from a server-reported message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Creates a Validation error naming the missing required fields.
    pub fn missing_fields(fields: &[&str]) -> Self {
        Self::Validation {
            message: format!("missing required fields: {}", fields.join(", ")),
        }
    }

    /// Creates a ForbiddenRole error.
    pub fn forbidden_role(role: impl Into<String>) -> Self {
        Self::ForbiddenRole { role: role.into() }
    }

    /// Creates a NotFound error.
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates an Upload error.
    pub fn upload(message: impl Into<String>) -> Self {
        Self::Upload {
            message: message.into(),
        }
    }

    /// Wraps the error that sank the persist leg of a two-phase commit.
    pub fn persist_failed(source: ConsoleError) -> Self {
        Self::PersistFailed {
            source: Box::new(source),
        }
    }

    /// Creates an AlreadyInProgress error for a commit target.
    pub fn already_in_progress(target: impl Into<String>) -> Self {
        Self::AlreadyInProgress {
            target: target.into(),
        }
    }

    /// Creates a Storage error.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Creates an Internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a Network error.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }

    /// Check if this is a Validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Check if this is an Unauthorized error.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Check if this is a NotFound error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an Upload error.
    pub fn is_upload(&self) -> bool {
        matches!(self, Self::Upload { .. })
    }

    /// Check if this is a PersistFailed error.
    pub fn is_persist_failed(&self) -> bool {
        matches!(self, Self::PersistFailed { .. })
    }

    /// Check if this is an AlreadyInProgress error.
    pub fn is_already_in_progress(&self) -> bool {
        matches!(self, Self::AlreadyInProgress { .. })
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for ConsoleError {
    fn from(err: std::io::Error) -> Self {
        Self::Storage {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for ConsoleError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for ConsoleError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for ConsoleError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for ConsoleError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network {
            message: err.to_string(),
        }
    }
}

/// Conversion from anyhow::Error (edges only).
impl From<anyhow::Error> for ConsoleError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// A type alias for `Result<T, ConsoleError>`.
pub type Result<T> = std::result::Result<T, ConsoleError>;
