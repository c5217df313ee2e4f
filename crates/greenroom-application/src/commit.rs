//! Two-phase media commit coordinator.
//!
//! Media-backed records are written in two legs: upload the binary to the
//! external media store, then persist a metadata record referencing the
//! returned asset handle. This coordinator is the sole owner of the
//! sequencing and of the error semantics across the two legs.
//!
//! A persist failure after a successful upload leaves the hosted binary
//! orphaned on the media host. That leak is accepted and surfaced as
//! `PersistFailed` rather than hidden behind a compensating delete; a
//! reconciliation sweep would be a separate extension.

use std::collections::HashMap;
use std::sync::{Arc, Mutex as StdMutex, Weak};

use tokio::sync::Mutex;
use tracing::{error, info, warn};

use greenroom_core::error::{ConsoleError, Result};
use greenroom_core::gateway::{MediaUploader, RecordGateway};
use greenroom_core::record::{Draft, MediaDraft, PendingUpload, Resource};
use greenroom_core::store::ResourceList;

/// Identity of one pending write. Mutual exclusion is scoped per target,
/// not globally: distinct targets commit concurrently.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CommitTarget {
    /// The new-record slot of a form.
    Create,
    /// An existing record by id.
    Existing(String),
}

impl std::fmt::Display for CommitTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommitTarget::Create => f.write_str("new record"),
            CommitTarget::Existing(id) => write!(f, "record '{id}'"),
        }
    }
}

/// Observable phase of an in-flight commit. Terminal outcomes are the
/// returned `Result`; once a commit settles its slot disappears.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitPhase {
    Idle,
    Uploading,
    Persisting,
}

type PhaseMap = Arc<StdMutex<HashMap<CommitTarget, CommitPhase>>>;

/// Sequences Asset Uploader then Resource Client for one record kind.
///
/// Holds the originating view's list through a `Weak` handle: a commit that
/// settles after the view unmounted is discarded instead of mutating a
/// destroyed store.
pub struct TwoPhaseCommit<R>
where
    R: Resource,
    R::Draft: MediaDraft,
{
    gateway: Arc<dyn RecordGateway<R>>,
    uploader: Arc<dyn MediaUploader>,
    list: Weak<Mutex<ResourceList<R>>>,
    in_flight: PhaseMap,
}

impl<R> TwoPhaseCommit<R>
where
    R: Resource,
    R::Draft: MediaDraft,
{
    pub fn new(
        gateway: Arc<dyn RecordGateway<R>>,
        uploader: Arc<dyn MediaUploader>,
        list: &Arc<Mutex<ResourceList<R>>>,
    ) -> Self {
        Self {
            gateway,
            uploader,
            list: Arc::downgrade(list),
            in_flight: Arc::new(StdMutex::new(HashMap::new())),
        }
    }

    /// Phase of the commit currently in flight for `target`, if any.
    pub fn phase_of(&self, target: &CommitTarget) -> Option<CommitPhase> {
        lock_map(&self.in_flight).get(target).copied()
    }

    /// Commits a new record. On success the confirmed record is appended
    /// to the list store and returned.
    ///
    /// The draft is updated in place with the uploaded asset handle, so a
    /// resubmission after `PersistFailed` reuses the already-hosted asset
    /// instead of uploading again.
    pub async fn create(
        &self,
        draft: &mut R::Draft,
        pending: Option<PendingUpload>,
    ) -> Result<R> {
        self.run(CommitTarget::Create, draft, pending).await
    }

    /// Commits changes to an existing record. With no new binary selected
    /// the upload leg is skipped and the previous asset handle is sent
    /// unchanged.
    pub async fn update(
        &self,
        id: &str,
        draft: &mut R::Draft,
        pending: Option<PendingUpload>,
    ) -> Result<R> {
        self.run(CommitTarget::Existing(id.to_string()), draft, pending)
            .await
    }

    async fn run(
        &self,
        target: CommitTarget,
        draft: &mut R::Draft,
        pending: Option<PendingUpload>,
    ) -> Result<R> {
        let slot = Slot::claim(Arc::clone(&self.in_flight), target.clone())?;

        // Validation gate: a failing draft never begins the remote
        // sequence. Without a pending upload the full required-field set
        // applies, including a non-empty asset.
        match &pending {
            Some(_) => draft.validate_fields()?,
            None => draft.validate()?,
        }

        let mut uploaded = false;
        if let Some(upload) = pending {
            slot.set_phase(CommitPhase::Uploading);
            let asset = self
                .uploader
                .upload(upload.bytes, &upload.filename, upload.kind)
                .await
                .map_err(|err| match err {
                    already @ ConsoleError::Upload { .. } => already,
                    other => ConsoleError::upload(other.to_string()),
                })?;
            // The form state owns the hosted asset from here on, even if
            // the persist leg fails below.
            draft.set_asset(asset);
            uploaded = true;
        }

        slot.set_phase(CommitPhase::Persisting);
        let persisted = match &target {
            CommitTarget::Create => self.gateway.create(draft).await,
            CommitTarget::Existing(id) => self.gateway.update(id, draft).await,
        };

        let record = match persisted {
            Ok(record) => record,
            Err(err) if uploaded => {
                error!(%target, %err, "persist leg failed; uploaded asset is orphaned");
                return Err(ConsoleError::persist_failed(err));
            }
            Err(err) => return Err(err),
        };

        info!(%target, id = record.id(), "commit confirmed");
        match self.list.upgrade() {
            Some(list) => {
                let mut list = list.lock().await;
                match &target {
                    CommitTarget::Create => list.apply_create(record.clone()),
                    CommitTarget::Existing(_) => list.apply_update(record.clone()),
                }
            }
            None => warn!(%target, "originating view unmounted; confirmed record discarded"),
        }
        Ok(record)
    }
}

fn lock_map(map: &PhaseMap) -> std::sync::MutexGuard<'_, HashMap<CommitTarget, CommitPhase>> {
    map.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// In-flight slot for one target. Claiming an occupied slot fails with
/// `AlreadyInProgress`; the slot is released on drop, on every exit path.
struct Slot {
    map: PhaseMap,
    target: CommitTarget,
}

impl Slot {
    fn claim(map: PhaseMap, target: CommitTarget) -> Result<Self> {
        {
            let mut slots = lock_map(&map);
            if slots.contains_key(&target) {
                return Err(ConsoleError::already_in_progress(target.to_string()));
            }
            slots.insert(target.clone(), CommitPhase::Idle);
        }
        Ok(Self { map, target })
    }

    fn set_phase(&self, phase: CommitPhase) {
        lock_map(&self.map).insert(self.target.clone(), phase);
    }
}

impl Drop for Slot {
    fn drop(&mut self) {
        lock_map(&self.map).remove(&self.target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_display() {
        assert_eq!(CommitTarget::Create.to_string(), "new record");
        assert_eq!(
            CommitTarget::Existing("r1".to_string()).to_string(),
            "record 'r1'"
        );
    }

    #[test]
    fn test_slot_claim_and_release() {
        let map: PhaseMap = Arc::new(StdMutex::new(HashMap::new()));
        let target = CommitTarget::Existing("r1".to_string());

        let slot = Slot::claim(Arc::clone(&map), target.clone()).unwrap();
        assert!(Slot::claim(Arc::clone(&map), target.clone()).is_err());

        slot.set_phase(CommitPhase::Uploading);
        assert_eq!(lock_map(&map).get(&target), Some(&CommitPhase::Uploading));

        drop(slot);
        // released: a new claim succeeds
        assert!(Slot::claim(map, target).is_ok());
    }
}
