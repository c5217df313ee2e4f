//! Media-gallery entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::record::asset::AssetRef;
use crate::record::{Draft, MediaDraft, Resource, require};

/// One gallery entry: a hosted image or video clip with its metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub techniques: Vec<String>,
    pub asset: AssetRef,
    #[serde(
        rename = "createdAt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

impl Resource for GalleryItem {
    const KIND: &'static str = "animations";
    const TITLE: &'static str = "gallery item";

    type Draft = GalleryItemDraft;

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GalleryItemDraft {
    pub title: String,
    pub category: String,
    pub description: String,
    pub techniques: Vec<String>,
    pub asset: AssetRef,
}

impl GalleryItemDraft {
    pub fn from_record(record: &GalleryItem) -> Self {
        Self {
            title: record.title.clone(),
            category: record.category.clone(),
            description: record.description.clone(),
            techniques: record.techniques.clone(),
            asset: record.asset.clone(),
        }
    }
}

impl Draft for GalleryItemDraft {
    fn validate(&self) -> Result<()> {
        require(&[
            ("title", !self.title.is_empty()),
            ("category", !self.category.is_empty()),
            ("asset", !self.asset.is_empty()),
        ])
    }
}

impl MediaDraft for GalleryItemDraft {
    fn asset(&self) -> &AssetRef {
        &self.asset
    }

    fn set_asset(&mut self, asset: AssetRef) {
        self.asset = asset;
    }

    fn validate_fields(&self) -> Result<()> {
        require(&[
            ("title", !self.title.is_empty()),
            ("category", !self.category.is_empty()),
        ])
    }
}
