//! Session domain model.
//!
//! The client-side representation of an authenticated, role-checked user.
//! There is exactly one Session per process; it is written only by the
//! session guard and read by every protected view.

use serde::{Deserialize, Serialize};

/// Role carried by the remote user account.
///
/// Only `Admin` is admitted to the console; everything else is kept as the
/// raw server string so it can be shown in diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Other(String),
}

impl Role {
    /// Returns true for the one role admitted to protected views.
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "Admin",
            Role::Other(s) => s.as_str(),
        }
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        if s == "Admin" {
            Role::Admin
        } else {
            Role::Other(s)
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display identity of the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub first_name: String,
    pub last_name: String,
}

impl Identity {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

/// An established console session.
///
/// Created from a successful login response, persisted in the session vault
/// for the duration of the console session, destroyed on logout or when the
/// remote API rejects the credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub role: Role,
    /// Opaque bearer credential issued by the remote API. Never logged.
    pub token: String,
    /// Kept last so the TOML session document serializes its one nested
    /// table after the scalar fields.
    pub identity: Identity,
}

impl Session {
    /// Whether this session admits the user to protected views.
    pub fn admits(&self) -> bool {
        self.role.is_admin()
    }
}

/// Observable session state published by the session guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Present(Session),
    Absent,
}

impl SessionState {
    /// A protected view may render only when this returns true.
    pub fn admitted(&self) -> bool {
        match self {
            SessionState::Present(session) => session.admits(),
            SessionState::Absent => false,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, SessionState::Present(_))
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            SessionState::Present(session) => Some(session),
            SessionState::Absent => None,
        }
    }
}

/// Login form input. The password is never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}
