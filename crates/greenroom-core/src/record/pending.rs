//! Pending uploads.

use crate::record::asset::MediaKind;

/// A locally selected binary waiting for the upload leg of a commit.
///
/// Exists only between file selection and either a successful two-phase
/// commit or an explicit discard; never persisted anywhere.
#[derive(Debug, Clone)]
pub struct PendingUpload {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub kind: MediaKind,
}

impl PendingUpload {
    /// Builds a pending upload with an explicit MIME class.
    pub fn new(bytes: Vec<u8>, filename: impl Into<String>, kind: MediaKind) -> Self {
        Self {
            bytes,
            filename: filename.into(),
            kind,
        }
    }

    /// Builds a pending upload, inferring the MIME class from the filename.
    ///
    /// Anything that does not look like a video is uploaded as an image;
    /// the media host accepts stills on the image endpoint.
    pub fn from_selection(bytes: Vec<u8>, filename: impl Into<String>) -> Self {
        let filename = filename.into();
        let kind = infer_kind(&filename);
        Self {
            bytes,
            filename,
            kind,
        }
    }
}

fn infer_kind(filename: &str) -> MediaKind {
    match mime_guess::from_path(filename).first() {
        Some(mime) if mime.type_() == mime_guess::mime::VIDEO => MediaKind::Video,
        _ => MediaKind::Image,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_inference() {
        let video = PendingUpload::from_selection(vec![0u8; 4], "clip.mp4");
        assert_eq!(video.kind, MediaKind::Video);

        let image = PendingUpload::from_selection(vec![0u8; 4], "poster.png");
        assert_eq!(image.kind, MediaKind::Image);

        // unknown extensions fall back to image
        let unknown = PendingUpload::from_selection(vec![0u8; 4], "blob.bin");
        assert_eq!(unknown.kind, MediaKind::Image);
    }

    #[test]
    fn test_explicit_kind_wins() {
        let upload = PendingUpload::new(vec![1, 2, 3], "still.png", MediaKind::Video);
        assert_eq!(upload.kind, MediaKind::Video);
        assert_eq!(upload.filename, "still.png");
    }
}
