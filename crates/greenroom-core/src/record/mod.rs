//! Record kinds managed by the console.
//!
//! Each kind pairs a server-shaped record struct with a draft type holding
//! the client-editable fields. Drafts carry the required-field validation
//! that runs before any network dispatch.

mod account;
mod asset;
mod faq;
mod gallery;
mod pending;
mod service;

pub use account::{Account, AccountDraft};
pub use asset::{AssetRef, MediaKind};
pub use faq::{Faq, FaqDraft};
pub use gallery::{GalleryItem, GalleryItemDraft};
pub use pending::PendingUpload;
pub use service::{Service, ServiceDraft};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;

/// A persisted entity of one record kind.
pub trait Resource: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// URL path segment on the remote API ("services", "faqs", ...).
    const KIND: &'static str;
    /// Singular label used in errors ("service").
    const TITLE: &'static str;

    type Draft: Draft;

    /// Server-assigned stable identity.
    fn id(&self) -> &str;
}

/// Client-editable fields of one record kind.
pub trait Draft: Clone + Send + Sync + Serialize + 'static {
    /// Full required-field check, the same set the server enforces.
    fn validate(&self) -> Result<()>;
}

/// Draft of a media-backed record kind.
pub trait MediaDraft: Draft {
    fn asset(&self) -> &AssetRef;

    fn set_asset(&mut self, asset: AssetRef);

    /// Required-field check excluding the asset. The commit coordinator
    /// runs this gate while the asset may still be a pending upload.
    fn validate_fields(&self) -> Result<()>;
}

/// Collects the names of empty required fields. Shared by the draft impls.
fn missing<'a>(fields: &[(&'a str, bool)]) -> Vec<&'a str> {
    fields
        .iter()
        .filter(|(_, present)| !*present)
        .map(|(name, _)| *name)
        .collect()
}

fn require(fields: &[(&str, bool)]) -> Result<()> {
    let absent = missing(fields);
    if absent.is_empty() {
        Ok(())
    } else {
        Err(crate::error::ConsoleError::missing_fields(&absent))
    }
}
