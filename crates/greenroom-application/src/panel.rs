//! Per-kind resource panel.
//!
//! The contract list/detail/form controllers consume: a server-confirmed
//! list store plus the remote operations that feed it. All list mutations
//! happen here or in the commit coordinator, strictly after the remote
//! call's result is known.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::debug;

use greenroom_core::error::Result;
use greenroom_core::gateway::RecordGateway;
use greenroom_core::record::{Draft, Resource};
use greenroom_core::store::ResourceList;

use crate::view::ViewBinding;

pub struct ResourcePanel<R: Resource> {
    gateway: Arc<dyn RecordGateway<R>>,
    list: Arc<Mutex<ResourceList<R>>>,
}

impl<R: Resource> ResourcePanel<R> {
    pub fn new(gateway: Arc<dyn RecordGateway<R>>) -> Self {
        Self {
            gateway,
            list: Arc::new(Mutex::new(ResourceList::new())),
        }
    }

    /// Shared handle to the backing list, for wiring a commit coordinator
    /// to this panel.
    pub fn list_handle(&self) -> &Arc<Mutex<ResourceList<R>>> {
        &self.list
    }

    /// A mount token for fire-and-forget completions against this panel's
    /// list.
    pub fn binding(&self) -> ViewBinding<Mutex<ResourceList<R>>> {
        ViewBinding::new(&self.list)
    }

    /// Reloads the whole list from the server. Returns the record count.
    pub async fn refresh(&self) -> Result<usize> {
        let records = self.gateway.list().await?;
        debug!(kind = R::KIND, count = records.len(), "list reloaded");
        let mut list = self.list.lock().await;
        list.reload(records);
        Ok(list.len())
    }

    /// The current list, in server order.
    pub async fn snapshot(&self) -> Vec<R> {
        self.list.lock().await.snapshot()
    }

    /// A record from the local mirror (detail modal).
    pub async fn get(&self, id: &str) -> Option<R> {
        self.list.lock().await.get(id).cloned()
    }

    /// A record fresh from the server (edit-form prefill).
    pub async fn fetch(&self, id: &str) -> Result<R> {
        self.gateway.fetch(id).await
    }

    /// Creates a plain (non-media) record and appends the confirmed result.
    pub async fn create(&self, draft: &R::Draft) -> Result<R> {
        draft.validate()?;
        let record = self.gateway.create(draft).await?;
        self.list.lock().await.apply_create(record.clone());
        Ok(record)
    }

    /// Updates a plain record and replaces the confirmed result in place.
    pub async fn update(&self, id: &str, draft: &R::Draft) -> Result<R> {
        draft.validate()?;
        let record = self.gateway.update(id, draft).await?;
        self.list.lock().await.apply_update(record.clone());
        Ok(record)
    }

    /// Deletes a record and removes it from the list once confirmed.
    ///
    /// For media-backed kinds the hosted binary is NOT deleted from the
    /// media host; the external store owns it indefinitely.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.gateway.delete(id).await?;
        self.list.lock().await.apply_delete(id);
        Ok(())
    }
}
