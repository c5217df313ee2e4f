//! Service offerings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::record::asset::AssetRef;
use crate::record::{Draft, MediaDraft, Resource, require};

/// A service offering shown on the public site. Media-backed: the embedded
/// image lives on the external media host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: u64,
    pub category: String,
    pub image: AssetRef,
    #[serde(
        rename = "createdAt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

impl Resource for Service {
    const KIND: &'static str = "services";
    const TITLE: &'static str = "service";

    type Draft = ServiceDraft;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Client-editable fields of a service.
///
/// Category is a free-form string; the server owns the vocabulary
/// ("3D Animation", "Promotional Videos", ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceDraft {
    pub name: String,
    pub description: String,
    pub price: u64,
    pub category: String,
    pub image: AssetRef,
}

impl ServiceDraft {
    /// Draft pre-filled from an existing record, for the edit form.
    pub fn from_record(record: &Service) -> Self {
        Self {
            name: record.name.clone(),
            description: record.description.clone(),
            price: record.price,
            category: record.category.clone(),
            image: record.image.clone(),
        }
    }
}

impl Draft for ServiceDraft {
    fn validate(&self) -> Result<()> {
        require(&[
            ("name", !self.name.is_empty()),
            ("description", !self.description.is_empty()),
            ("price", self.price > 0),
            ("category", !self.category.is_empty()),
            ("image", !self.image.is_empty()),
        ])
    }
}

impl MediaDraft for ServiceDraft {
    fn asset(&self) -> &AssetRef {
        &self.image
    }

    fn set_asset(&mut self, asset: AssetRef) {
        self.image = asset;
    }

    fn validate_fields(&self) -> Result<()> {
        require(&[
            ("name", !self.name.is_empty()),
            ("description", !self.description.is_empty()),
            ("price", self.price > 0),
            ("category", !self.category.is_empty()),
        ])
    }
}
