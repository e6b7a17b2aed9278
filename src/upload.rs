//! Uploaded files and image type detection.

use axum::body::Bytes;
use image::ImageFormat;
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// The number of hex characters in a generated file name.
const HASH_NAME_LENGTH: usize = 40;

/// A file received in a multipart request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    /// The file name reported by the client, if any.
    pub file_name: Option<String>,
    /// The content type reported by the client, if any. Not trusted for validation.
    pub content_type: Option<String>,
    /// The file contents.
    pub bytes: Bytes,
}

impl UploadedFile {
    /// The size of the file in bytes.
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// The image format of the file contents, detected from its leading bytes.
    pub fn image_format(&self) -> Option<ImageFormat> {
        image::guess_format(&self.bytes).ok()
    }

    /// Whether the part carried no file, which is what browsers send for an
    /// empty file input.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty() && self.file_name.as_deref().unwrap_or_default().is_empty()
    }

    /// Generate a collision resistant name for storing the file, e.g.
    /// `3f7a…c2e1.png`.
    ///
    /// Every call returns a different name, even for identical contents.
    pub fn hash_name(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(&self.bytes);
        hasher.update(Uuid::new_v4().as_bytes());
        let digest = format!("{:x}", hasher.finalize());

        format!("{}.{}", &digest[..HASH_NAME_LENGTH], self.extension())
    }

    fn extension(&self) -> String {
        if let Some(extension) = self
            .image_format()
            .and_then(|format| format.extensions_str().first())
        {
            return (*extension).to_owned();
        }

        self.file_name
            .as_deref()
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, extension)| extension.to_ascii_lowercase())
            .filter(|extension| {
                !extension.is_empty()
                    && extension.len() <= 8
                    && extension.chars().all(|c| c.is_ascii_alphanumeric())
            })
            .unwrap_or_else(|| "bin".to_owned())
    }
}
