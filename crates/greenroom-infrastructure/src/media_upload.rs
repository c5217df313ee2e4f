//! Media host upload client.

use async_trait::async_trait;
use reqwest::multipart;
use serde::Deserialize;
use tracing::debug;

use greenroom_core::error::{ConsoleError, Result};
use greenroom_core::gateway::MediaUploader;
use greenroom_core::record::{AssetRef, MediaKind};

use crate::config::MediaConfig;

/// Upload receipt returned by the media host.
#[derive(Debug, Deserialize)]
struct UploadReceipt {
    public_id: String,
    secure_url: String,
    #[serde(default)]
    resource_type: String,
}

impl UploadReceipt {
    fn into_asset(self) -> AssetRef {
        let kind = MediaKind::from_resource_type(&self.resource_type);
        // both values stored verbatim; the URL is never rewritten
        AssetRef::new(self.public_id, self.secure_url, kind)
    }
}

/// Single-attempt multipart uploader for the external media store.
///
/// The MIME class selects the upload endpoint; sending a binary to the
/// wrong endpoint is a caller error and surfaces as the host's rejection.
pub struct HttpMediaUploader {
    client: reqwest::Client,
    media: MediaConfig,
}

impl HttpMediaUploader {
    pub fn new(media: MediaConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("greenroom")
            .build()
            .map_err(|err| ConsoleError::internal(format!("build http client: {err}")))?;
        Ok(Self { client, media })
    }

    fn upload_url(&self, kind: MediaKind) -> String {
        format!(
            "{}/{}/{}/upload",
            self.media.base_url.trim_end_matches('/'),
            self.media.cloud_name,
            kind.as_str()
        )
    }
}

#[async_trait]
impl MediaUploader for HttpMediaUploader {
    async fn upload(&self, bytes: Vec<u8>, filename: &str, kind: MediaKind) -> Result<AssetRef> {
        let url = self.upload_url(kind);
        debug!(%kind, filename, size = bytes.len(), "upload binary");

        let part = multipart::Part::bytes(bytes).file_name(filename.to_string());
        let form = multipart::Form::new()
            .part("file", part)
            .text("upload_preset", self.media.upload_preset.clone());

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|err| ConsoleError::upload(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ConsoleError::upload(format!(
                "media host returned {status}: {body}"
            )));
        }

        let receipt: UploadReceipt = response
            .json()
            .await
            .map_err(|err| ConsoleError::upload(format!("unreadable upload receipt: {err}")))?;
        Ok(receipt.into_asset())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_maps_verbatim() {
        let json = r#"{
            "public_id": "abc",
            "secure_url": "https://host/abc.mp4",
            "resource_type": "video"
        }"#;
        let receipt: UploadReceipt = serde_json::from_str(json).unwrap();
        let asset = receipt.into_asset();
        assert_eq!(asset.asset_id, "abc");
        assert_eq!(asset.retrieval_url, "https://host/abc.mp4");
        assert_eq!(asset.kind, MediaKind::Video);
    }

    #[test]
    fn test_upload_url_selects_endpoint_by_kind() {
        let media = MediaConfig {
            base_url: "https://api.cloudinary.com/v1_1".to_string(),
            cloud_name: "studio".to_string(),
            upload_preset: "gallery".to_string(),
        };
        let uploader = HttpMediaUploader::new(media).unwrap();
        assert_eq!(
            uploader.upload_url(MediaKind::Image),
            "https://api.cloudinary.com/v1_1/studio/image/upload"
        );
        assert_eq!(
            uploader.upload_url(MediaKind::Video),
            "https://api.cloudinary.com/v1_1/studio/video/upload"
        );
    }
}
