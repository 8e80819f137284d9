/// The image currently selected for analysis. Held in memory only.
use std::sync::Arc;

/// A user-chosen leaf photo, encoded as a data URL.
#[derive(Clone, PartialEq, Eq)]
pub struct UploadedImage {
    /// Original file name, e.g. `leaf1.jpg`.
    pub name: String,
    /// `data:<mime>;base64,<payload>`.
    pub url: String,
    /// MIME type derived from the file name.
    pub mime: &'static str,
    /// Raw file bytes, shared with the preview renderer.
    pub bytes: Arc<[u8]>,
}

impl UploadedImage {
    /// Encode `bytes` and wrap them as an uploaded image.
    pub fn from_bytes(name: impl Into<String>, mime: &'static str, bytes: Vec<u8>) -> Self {
        let url = crate::intake::encode_data_url(mime, &bytes);
        Self {
            name: name.into(),
            url,
            mime,
            bytes: bytes.into(),
        }
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

// The data URL can be megabytes long; keep debug output readable.
impl std::fmt::Debug for UploadedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadedImage")
            .field("name", &self.name)
            .field("mime", &self.mime)
            .field("size", &self.bytes.len())
            .finish()
    }
}
