//! Shared bearer-credential cell.

use std::sync::{Arc, RwLock};

/// A process-wide handle to the current bearer token.
///
/// Written by the session guard on login/restore/logout; read by every HTTP
/// client when attaching the `Authorization` header. Cloning the cell clones
/// the handle, not the token.
#[derive(Clone, Default)]
pub struct TokenCell {
    inner: Arc<RwLock<Option<String>>>,
}

impl TokenCell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, token: impl Into<String>) {
        let mut slot = self.inner.write().unwrap_or_else(|p| p.into_inner());
        *slot = Some(token.into());
    }

    pub fn clear(&self) {
        let mut slot = self.inner.write().unwrap_or_else(|p| p.into_inner());
        *slot = None;
    }

    pub fn get(&self) -> Option<String> {
        let slot = self.inner.read().unwrap_or_else(|p| p.into_inner());
        slot.clone()
    }
}
