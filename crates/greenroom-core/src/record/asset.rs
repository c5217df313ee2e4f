//! Hosted-asset handles.
//!
//! An `AssetRef` is the only thing the console stores about a binary: the
//! media host owns the bytes, the record embeds the handle.

use serde::{Deserialize, Serialize};

/// MIME class of a hosted binary; selects the upload endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    #[default]
    Image,
    Video,
}

impl MediaKind {
    /// Path segment of the media host's upload endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }

    /// Maps the media host's `resource_type` string. Anything that is not
    /// a video is treated as an image, matching how the host reports
    /// still formats.
    pub fn from_resource_type(value: &str) -> Self {
        if value.eq_ignore_ascii_case("video") {
            MediaKind::Video
        } else {
            MediaKind::Image
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Handle + retrieval URL for a binary stored by the external media host.
///
/// `retrieval_url` is stored verbatim from the host response; it is never
/// inferred or rewritten. The wire shape keeps the host's key names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AssetRef {
    #[serde(rename = "public_id", default)]
    pub asset_id: String,
    #[serde(rename = "secure_url", default)]
    pub retrieval_url: String,
    #[serde(default)]
    pub kind: MediaKind,
}

impl AssetRef {
    pub fn new(
        asset_id: impl Into<String>,
        retrieval_url: impl Into<String>,
        kind: MediaKind,
    ) -> Self {
        Self {
            asset_id: asset_id.into(),
            retrieval_url: retrieval_url.into(),
            kind,
        }
    }

    /// An AssetRef with no handle and no URL. Media-backed records are never
    /// persisted in this state on create.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.asset_id.is_empty() && self.retrieval_url.is_empty()
    }
}
