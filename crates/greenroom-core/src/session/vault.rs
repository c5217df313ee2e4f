//! Session vault port.
//!
//! Defines the interface for persisting the session document for the
//! lifetime of a console session. The file-backed implementation lives in
//! the infrastructure crate; `MemorySessionVault` backs tests.

use std::sync::RwLock;

use crate::error::Result;
use crate::session::model::Session;

/// Storage for the single persisted session document.
///
/// The vault holds at most one session. `clear` removes it wholesale; there
/// is no partial update. Implementations must never log the token.
pub trait SessionVault: Send + Sync {
    /// Persists the session, replacing any previous document.
    fn save(&self, session: &Session) -> Result<()>;

    /// Loads the persisted session, if any.
    fn load(&self) -> Result<Option<Session>>;

    /// Removes the persisted session. Idempotent.
    fn clear(&self) -> Result<()>;
}

/// In-memory vault used by tests and by shells that opt out of persistence.
#[derive(Default)]
pub struct MemorySessionVault {
    slot: RwLock<Option<Session>>,
}

impl MemorySessionVault {
    pub fn new() -> Self {
        Self::default()
    }

    /// A vault pre-seeded with a session, for restore tests.
    pub fn with_session(session: Session) -> Self {
        Self {
            slot: RwLock::new(Some(session)),
        }
    }
}

impl SessionVault for MemorySessionVault {
    fn save(&self, session: &Session) -> Result<()> {
        let mut slot = self.slot.write().unwrap_or_else(|p| p.into_inner());
        *slot = Some(session.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<Session>> {
        let slot = self.slot.read().unwrap_or_else(|p| p.into_inner());
        Ok(slot.clone())
    }

    fn clear(&self) -> Result<()> {
        let mut slot = self.slot.write().unwrap_or_else(|p| p.into_inner());
        *slot = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::model::{Identity, Role};

    fn session() -> Session {
        Session {
            user_id: "u9".to_string(),
            identity: Identity {
                first_name: "Kay".to_string(),
                last_name: "Imani".to_string(),
            },
            role: Role::Admin,
            token: "tok-9".to_string(),
        }
    }

    #[test]
    fn test_save_load_clear() {
        let vault = MemorySessionVault::new();
        assert!(vault.load().unwrap().is_none());

        vault.save(&session()).unwrap();
        assert_eq!(vault.load().unwrap().unwrap().user_id, "u9");

        vault.clear().unwrap();
        assert!(vault.load().unwrap().is_none());

        // clear on an empty vault is fine
        vault.clear().unwrap();
    }
}
