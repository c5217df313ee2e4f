//! Console bootstrap.
//!
//! Wires config, HTTP clients, vault and guard into the handles a view
//! shell mounts. Everything is injected; nothing reaches for ambient
//! globals.

use std::sync::Arc;

use greenroom_core::error::Result;
use greenroom_core::gateway::MediaUploader;
use greenroom_core::record::{MediaDraft, Resource};
use greenroom_core::session::TokenCell;
use greenroom_infrastructure::{
    ApiContext, ConsoleConfig, FsSessionVault, HttpAuthApi, HttpMediaUploader,
    HttpResourceClient,
};

use crate::commit::TwoPhaseCommit;
use crate::panel::ResourcePanel;
use crate::session_guard::SessionGuard;

pub struct Console {
    ctx: Arc<ApiContext>,
    uploader: Arc<dyn MediaUploader>,
    guard: Arc<SessionGuard>,
}

impl Console {
    /// Builds the console from the default config location.
    pub fn bootstrap() -> Result<Self> {
        Self::from_config(ConsoleConfig::load_default()?)
    }

    pub fn from_config(config: ConsoleConfig) -> Result<Self> {
        let token = TokenCell::new();
        let ctx = Arc::new(ApiContext::new(config.api, token.clone())?);
        let uploader = Arc::new(HttpMediaUploader::new(config.media)?);
        let auth = Arc::new(HttpAuthApi::new(Arc::clone(&ctx)));
        let vault = Arc::new(FsSessionVault::new()?);
        let guard = Arc::new(SessionGuard::new(auth, vault, token));
        Ok(Self {
            ctx,
            uploader,
            guard,
        })
    }

    /// The process-wide session guard.
    pub fn guard(&self) -> &Arc<SessionGuard> {
        &self.guard
    }

    /// A panel for one record kind. Each view controller owns its panel;
    /// there is no cross-kind sharing.
    pub fn panel<R: Resource>(&self) -> ResourcePanel<R> {
        ResourcePanel::new(Arc::new(HttpResourceClient::<R>::new(Arc::clone(&self.ctx))))
    }

    /// A two-phase commit coordinator bound to a media-backed panel's list.
    pub fn committer<R>(&self, panel: &ResourcePanel<R>) -> TwoPhaseCommit<R>
    where
        R: Resource,
        R::Draft: MediaDraft,
    {
        TwoPhaseCommit::new(
            Arc::new(HttpResourceClient::<R>::new(Arc::clone(&self.ctx))),
            Arc::clone(&self.uploader),
            panel.list_handle(),
        )
    }
}
