//! Binary attachments (receipts) sent alongside expense records

use std::path::Path;

use uuid::Uuid;

use crate::error::{SpendwiseError, SpendwiseResult};

/// Scheme used for references to attachments that only exist client-side
pub const LOCAL_BLOB_SCHEME: &str = "blob:spendwise/";

/// A file to upload as the `receipt` part of an expense request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl Attachment {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Read an attachment from disk, inferring the content type from the extension
    pub fn from_path(path: impl AsRef<Path>) -> SpendwiseResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            SpendwiseError::Io(format!("Failed to read attachment {}: {}", path.display(), e))
        })?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| {
                SpendwiseError::Validation(format!("Not a file path: {}", path.display()))
            })?;

        Ok(Self::new(file_name, content_type_for(path), bytes))
    }

    /// Mint a reference for an attachment that was never uploaded
    ///
    /// Every call yields a fresh reference, the same way a browser object URL
    /// is unique per created blob.
    pub fn local_reference(&self) -> String {
        format!("{}{}", LOCAL_BLOB_SCHEME, Uuid::new_v4())
    }
}

/// Whether a receipt reference points at a client-only blob
pub fn is_local_reference(reference: &str) -> bool {
    reference.starts_with(LOCAL_BLOB_SCHEME)
}

fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "pdf" => "application/pdf",
        _ => "application/octet-stream",
    }
}
